use actix_web::cookie::{time::Duration, Cookie};
use actix_web::http::header;
use actix_web::{post, HttpRequest, HttpResponse};

use crate::routes::{prefers_dark_mode, DARK_MODE_COOKIE};

/// Flips the persisted dark-mode preference and sends the user back to the
/// page they came from.
#[post("/theme")]
async fn toggle_theme(request: HttpRequest) -> HttpResponse {
    let dark_mode = prefers_dark_mode(&request);

    let cookie = Cookie::build(DARK_MODE_COOKIE, (!dark_mode).to_string())
        .path("/")
        .max_age(Duration::days(365))
        .finish();

    let back = request
        .headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/")
        .to_string();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header((header::LOCATION, back))
        .finish()
}
