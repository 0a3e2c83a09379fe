use actix_web::{get, web, HttpRequest, HttpResponse};
use askama::Template;

use crate::routes::prefers_dark_mode;
use crate::services::news::{sample_articles, NewsArticle, NewsClient};

#[derive(Template)]
#[template(path = "news.html")]
struct NewsTemplate {
    dark_mode: bool,
    articles: Vec<NewsArticle>,
    notice: Option<String>,
}

#[get("/news")]
async fn news(news_client: web::Data<NewsClient>, request: HttpRequest) -> HttpResponse {
    // A failing news API never blocks the page: substitute the bundled
    // samples and show a soft warning instead.
    let (articles, notice) = match news_client.fetch_articles().await {
        Ok(articles) => (articles, None),
        Err(e) => {
            log::warn!("Falling back to sample news data: {}", e);
            (sample_articles(), Some(format!("Using sample data: {}", e)))
        }
    };

    HttpResponse::Ok().body(
        NewsTemplate {
            dark_mode: prefers_dark_mode(&request),
            articles,
            notice,
        }
        .render()
        .unwrap(),
    )
}
