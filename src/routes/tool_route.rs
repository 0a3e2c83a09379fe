use actix_web::{get, web, HttpRequest, HttpResponse};
use askama::Template;

use crate::domain::tool::Tool;
use crate::errors::ToolNotFoundError;
use crate::routes::{data_load_error_page, prefers_dark_mode};
use crate::services::CatalogClient;

#[derive(Template)]
#[template(path = "tool.html")]
struct ToolTemplate<'a> {
    dark_mode: bool,
    tool: &'a Tool,
    avatar_letter: char,
    pricing_class: &'static str,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    dark_mode: bool,
    message: String,
}

// Badge styling bucket for the pricing tier; anything unexpected is "other".
fn pricing_class(pricing: &str) -> &'static str {
    match pricing.to_lowercase().as_str() {
        "free" => "pricing-free",
        "freemium" => "pricing-freemium",
        "paid" => "pricing-paid",
        _ => "pricing-other",
    }
}

#[get("/tool/{name}")]
async fn tool_detail(
    catalog_client: web::Data<CatalogClient>,
    name: web::Path<String>,
    request: HttpRequest,
) -> HttpResponse {
    let dark_mode = prefers_dark_mode(&request);

    // The path segment arrives percent-decoded; the lookup is case-insensitive.
    let catalog = match catalog_client.catalog().await {
        Ok(catalog) => catalog,
        Err(e) => return data_load_error_page(&e, dark_mode),
    };

    match catalog.find(&name) {
        Some(tool) => HttpResponse::Ok().body(
            ToolTemplate {
                dark_mode,
                tool,
                avatar_letter: tool.avatar_letter(),
                pricing_class: pricing_class(&tool.pricing),
            }
            .render()
            .unwrap(),
        ),
        None => {
            let error = ToolNotFoundError {
                name: name.into_inner(),
            };
            log::warn!("{}", error);

            HttpResponse::NotFound().body(
                NotFoundTemplate {
                    dark_mode,
                    message: error.to_string(),
                }
                .render()
                .unwrap(),
            )
        }
    }
}
