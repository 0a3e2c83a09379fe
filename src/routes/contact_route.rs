use actix_web::{get, HttpRequest, HttpResponse};
use askama::Template;

use crate::routes::prefers_dark_mode;

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    dark_mode: bool,
}

#[get("/contact")]
async fn contact(request: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().body(
        ContactTemplate {
            dark_mode: prefers_dark_mode(&request),
        }
        .render()
        .unwrap(),
    )
}
