use std::net::TcpListener;

use actix_files::Files;
use actix_web::{
    dev::Server,
    middleware::Logger,
    web, App, HttpServer,
};

use crate::routes::{contact_route, home_route, news_route, theme_route, tool_route};
use crate::services::{CatalogClient, NewsClient};

pub fn run(
    listener: TcpListener,
    catalog_client: CatalogClient,
    news_client: NewsClient,
) -> Result<Server, std::io::Error> {
    let catalog_client = web::Data::new(catalog_client);
    let news_client = web::Data::new(news_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(home_route::home)
            .service(tool_route::tool_detail)
            .service(news_route::news)
            .service(contact_route::contact)
            .service(theme_route::toggle_theme)
            .app_data(catalog_client.clone())
            .app_data(news_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
