use std::net::TcpListener;

use aixplore::{
    configuration::get_configuration,
    services::{CatalogClient, NewsClient},
    startup::run,
};
use anyhow::Context;
use env_logger::Env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration")?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("Failed to bind {}", address))?;

    let catalog_client = CatalogClient::new(
        configuration.catalog.data_url,
        configuration.catalog.placeholder_fallback,
    );
    let news_client = NewsClient::new(configuration.news.api_key, configuration.news.endpoint);

    run(listener, catalog_client, news_client)?.await?;
    Ok(())
}
