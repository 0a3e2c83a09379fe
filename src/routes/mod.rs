pub mod contact_route;
pub mod home_route;
pub mod news_route;
pub mod theme_route;
pub mod tool_route;

use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::errors::DataLoadError;

pub const DARK_MODE_COOKIE: &str = "dark_mode";

pub fn prefers_dark_mode(request: &HttpRequest) -> bool {
    request
        .cookie(DARK_MODE_COOKIE)
        .map(|cookie| cookie.value() == "true")
        .unwrap_or(false)
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    dark_mode: bool,
    message: String,
}

/// Full-page failure state for the tool resource, with a retry link that
/// forces a refetch.
pub fn data_load_error_page(error: &DataLoadError, dark_mode: bool) -> HttpResponse {
    log::error!("Failed to load the tool catalog: {}", error);

    HttpResponse::InternalServerError().body(
        ErrorTemplate {
            dark_mode,
            message: error.to_string(),
        }
        .render()
        .unwrap(),
    )
}
