use actix_web::{get, web, HttpRequest, HttpResponse};
use askama::Template;
use serde::{Deserialize, Serialize};

use crate::domain::tool::Tool;
use crate::domain::view::{build_listing, parse_jump, PageItem, PricingFilter, ViewState};
use crate::routes::{data_load_error_page, prefers_dark_mode};
use crate::services::CatalogClient;

#[derive(Deserialize)]
struct ListingQuery {
    q: Option<String>,
    category: Option<String>,
    pricing: Option<String>,
    page: Option<usize>,
    goto: Option<String>,
    reload: Option<u8>,
}

#[derive(Serialize)]
struct BaseQuery<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    q: &'a str,
    category: &'a str,
    pricing: &'a str,
}

struct CategoryLink {
    name: String,
    href: String,
    active: bool,
}

struct WindowLink {
    page: usize,
    href: String,
    current: bool,
    gap: bool,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    dark_mode: bool,
    state: &'a ViewState,
    heading: &'a str,
    categories: Vec<CategoryLink>,
    tools: Vec<&'a Tool>,
    filtered_count: usize,
    total_pages: usize,
    current_page: usize,
    window: Vec<WindowLink>,
    first_href: String,
    prev_href: String,
    next_href: String,
    last_href: String,
    at_first: bool,
    at_last: bool,
}

#[get("/")]
async fn home(
    catalog_client: web::Data<CatalogClient>,
    query: web::Query<ListingQuery>,
    request: HttpRequest,
) -> HttpResponse {
    /*
    1. Load the catalog (cached after the first fetch, refetched on ?reload=1)
    2. Build the view state from the query string
    3. Apply the jump-to-page input when it names a reachable page
    4. Derive the visible slice and pagination window, render
    */
    let dark_mode = prefers_dark_mode(&request);

    let catalog = if query.reload.is_some() {
        catalog_client.refresh().await
    } else {
        catalog_client.catalog().await
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => return data_load_error_page(&e, dark_mode),
    };

    let mut state = ViewState {
        search_term: query.q.clone().unwrap_or_default(),
        active_category: query
            .category
            .clone()
            .unwrap_or_else(|| "All".to_string()),
        pricing_filter: PricingFilter::parse(query.pricing.as_deref().unwrap_or("all")),
        current_page: query.page.unwrap_or(1),
    };

    let mut listing = build_listing(&catalog.tools, &state);
    if let Some(jump) = query.goto.as_deref() {
        if let Some(page) = parse_jump(jump, listing.total_pages) {
            state.current_page = page;
            listing = build_listing(&catalog.tools, &state);
        }
    }

    let base_query = serde_urlencoded::to_string(BaseQuery {
        q: &state.search_term,
        category: &state.active_category,
        pricing: state.pricing_filter.as_str(),
    })
    .unwrap_or_default();
    let page_href = |page: usize| format!("/?{}&page={}", base_query, page);

    let window = listing
        .window
        .iter()
        .map(|item| match item {
            PageItem::Page(page) => WindowLink {
                page: *page,
                href: page_href(*page),
                current: *page == listing.current_page,
                gap: false,
            },
            PageItem::Ellipsis => WindowLink {
                page: 0,
                href: String::new(),
                current: false,
                gap: true,
            },
        })
        .collect();

    // Category links drop the search term and reset to page 1.
    let categories = catalog
        .categories
        .iter()
        .map(|name| CategoryLink {
            name: name.clone(),
            href: format!(
                "/?{}",
                serde_urlencoded::to_string([
                    ("category", name.as_str()),
                    ("pricing", state.pricing_filter.as_str()),
                ])
                .unwrap_or_default()
            ),
            active: state.search_term.is_empty() && *name == state.active_category,
        })
        .collect();

    let heading = if state.active_category == "All" {
        "All Tools"
    } else {
        state.active_category.as_str()
    };

    let template = HomeTemplate {
        dark_mode,
        heading,
        categories,
        tools: listing.visible.clone(),
        filtered_count: listing.filtered_count,
        total_pages: listing.total_pages,
        current_page: listing.current_page,
        window,
        first_href: page_href(1),
        prev_href: page_href(listing.current_page.saturating_sub(1).max(1)),
        next_href: page_href((listing.current_page + 1).min(listing.total_pages)),
        last_href: page_href(listing.total_pages),
        at_first: listing.current_page == 1,
        at_last: listing.current_page == listing.total_pages,
        state: &state,
    };

    HttpResponse::Ok().body(template.render().unwrap())
}
