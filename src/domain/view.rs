use crate::domain::tool::Tool;

pub const TOOLS_PER_PAGE: usize = 40;

// Page windows up to this many pages are shown in full, without ellipses.
const MAX_PLAIN_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricingFilter {
    #[default]
    All,
    Free,
    Freemium,
    Paid,
}

impl PricingFilter {
    /// Unrecognised values fall back to `All`.
    pub fn parse(raw: &str) -> PricingFilter {
        match raw.to_lowercase().as_str() {
            "free" => PricingFilter::Free,
            "freemium" => PricingFilter::Freemium,
            "paid" => PricingFilter::Paid,
            _ => PricingFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PricingFilter::All => "all",
            PricingFilter::Free => "free",
            PricingFilter::Freemium => "freemium",
            PricingFilter::Paid => "paid",
        }
    }

    pub fn matches(&self, pricing: &str) -> bool {
        match self {
            PricingFilter::All => true,
            other => pricing.to_lowercase() == other.as_str(),
        }
    }
}

/// The current filter/page selections. Built fresh from the query string on
/// every request; mutations always produce a new state, never edit a shared one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub active_category: String,
    pub pricing_filter: PricingFilter,
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            search_term: String::new(),
            active_category: "All".to_string(),
            pricing_filter: PricingFilter::All,
            current_page: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Listing<'a> {
    pub visible: Vec<&'a Tool>,
    pub filtered_count: usize,
    pub total_pages: usize,
    /// Clamped: an out-of-range request resets to page 1.
    pub current_page: usize,
    pub window: Vec<PageItem>,
}

/// Pure view computation: filter, clamp the page, slice, and build the
/// pagination window. Never mutates the catalog.
pub fn build_listing<'a>(tools: &'a [Tool], state: &ViewState) -> Listing<'a> {
    let filtered = filter_tools(tools, state);
    let filtered_count = filtered.len();
    // Zero results still render as a single empty page.
    let total_pages = filtered_count.div_ceil(TOOLS_PER_PAGE).max(1);

    let current_page = if (1..=total_pages).contains(&state.current_page) {
        state.current_page
    } else {
        1
    };

    let start = (current_page - 1) * TOOLS_PER_PAGE;
    let end = (start + TOOLS_PER_PAGE).min(filtered_count);
    let visible = filtered[start.min(filtered_count)..end].to_vec();

    Listing {
        visible,
        filtered_count,
        total_pages,
        current_page,
        window: page_window(current_page, total_pages),
    }
}

/// Search matches the name only, case-insensitively. A non-empty search
/// bypasses the category filter entirely; pricing always applies.
pub fn filter_tools<'a>(tools: &'a [Tool], state: &ViewState) -> Vec<&'a Tool> {
    let needle = state.search_term.to_lowercase();

    tools
        .iter()
        .filter(|tool| {
            let matches_search =
                needle.is_empty() || tool.name.to_lowercase().contains(&needle);
            let matches_category = !needle.is_empty()
                || state.active_category == "All"
                || tool.categories.iter().any(|c| c == &state.active_category);
            let matches_pricing = state.pricing_filter.matches(&tool.pricing);

            matches_search && matches_category && matches_pricing
        })
        .collect()
}

/// Compact page-number window: endpoints always shown, at most three interior
/// numbers around the current page, ellipses marking the gaps.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_PLAIN_WINDOW {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut window = vec![PageItem::Page(1)];
    if current > 3 {
        window.push(PageItem::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    for page in start..=end {
        if page > 1 && page < total {
            window.push(PageItem::Page(page));
        }
    }

    if current < total - 2 {
        window.push(PageItem::Ellipsis);
    }
    window.push(PageItem::Page(total));

    window
}

/// Free-form jump-to-page input. Anything that does not parse to a page in
/// `[1, total_pages]` is silently ignored.
pub fn parse_jump(input: &str, total_pages: usize) -> Option<usize> {
    let page: usize = input.trim().parse().ok()?;
    (1..=total_pages).contains(&page).then_some(page)
}

#[cfg(test)]
mod tests {
    use crate::domain::tool::Tool;
    use crate::domain::view::{
        build_listing, filter_tools, page_window, parse_jump, PageItem, PricingFilter, ViewState,
    };

    fn tool(name: &str, categories: &[&str], pricing: &str) -> Tool {
        Tool {
            name: name.to_string(),
            description: format!("{} description", name),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            url: "#".to_string(),
            pricing: pricing.to_string(),
            source_url: "#".to_string(),
        }
    }

    fn numbered_tools(count: usize) -> Vec<Tool> {
        (1..=count)
            .map(|i| tool(&format!("Tool {}", i), &["Chat"], "Free"))
            .collect()
    }

    #[test]
    fn search_is_case_insensitive_and_bypasses_category() {
        let tools = vec![
            tool("ChatGPT", &["Chat"], "Freemium"),
            tool("Midjourney", &["Generative Art"], "Paid"),
        ];
        let state = ViewState {
            search_term: "chat".to_string(),
            active_category: "Generative Art".to_string(),
            ..ViewState::default()
        };

        let filtered = filter_tools(&tools, &state);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "ChatGPT");
    }

    #[test]
    fn category_filter_applies_only_without_search() {
        let tools = vec![
            tool("ChatGPT", &["Chat"], "Freemium"),
            tool("Midjourney", &["Generative Art"], "Paid"),
        ];
        let state = ViewState {
            active_category: "Chat".to_string(),
            ..ViewState::default()
        };

        let filtered = filter_tools(&tools, &state);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "ChatGPT");
    }

    #[test]
    fn pricing_filter_is_case_insensitive_equality() {
        let tools = vec![
            tool("ChatGPT", &["Chat"], "Freemium"),
            tool("Jasper", &["Copywriting"], "PAID"),
            tool("Mystery", &["Chat"], "Contact us"),
        ];
        let state = ViewState {
            pricing_filter: PricingFilter::Paid,
            ..ViewState::default()
        };

        let filtered = filter_tools(&tools, &state);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Jasper");
    }

    #[test]
    fn eighty_five_tools_paginate_into_three_pages() {
        let tools = numbered_tools(85);

        let page_1 = build_listing(&tools, &ViewState::default());
        assert_eq!(page_1.total_pages, 3);
        assert_eq!(page_1.visible.len(), 40);
        assert_eq!(page_1.visible[0].name, "Tool 1");
        assert_eq!(page_1.visible[39].name, "Tool 40");

        let page_2 = build_listing(
            &tools,
            &ViewState {
                current_page: 2,
                ..ViewState::default()
            },
        );
        assert_eq!(page_2.visible[0].name, "Tool 41");
        assert_eq!(page_2.visible[39].name, "Tool 80");

        let page_3 = build_listing(
            &tools,
            &ViewState {
                current_page: 3,
                ..ViewState::default()
            },
        );
        assert_eq!(page_3.visible.len(), 5);
        assert_eq!(page_3.visible[0].name, "Tool 81");
        assert_eq!(page_3.visible[4].name, "Tool 85");
    }

    #[test]
    fn out_of_range_page_resets_to_first() {
        let tools = numbered_tools(85);
        let listing = build_listing(
            &tools,
            &ViewState {
                current_page: 9,
                ..ViewState::default()
            },
        );

        assert_eq!(listing.current_page, 1);
        assert_eq!(listing.visible[0].name, "Tool 1");
    }

    #[test]
    fn page_change_after_filter_change_resets_too() {
        // 85 free tools viewed on page 3; narrowing to freemium leaves one
        // page, so the stale page 3 snaps back to 1.
        let mut tools = numbered_tools(85);
        tools.push(tool("Jasper", &["Copywriting"], "Freemium"));
        let listing = build_listing(
            &tools,
            &ViewState {
                pricing_filter: PricingFilter::Freemium,
                current_page: 3,
                ..ViewState::default()
            },
        );

        assert_eq!(listing.total_pages, 1);
        assert_eq!(listing.current_page, 1);
        assert_eq!(listing.visible.len(), 1);
    }

    #[test]
    fn zero_results_render_one_empty_page() {
        let tools = numbered_tools(5);
        let listing = build_listing(
            &tools,
            &ViewState {
                search_term: "no such tool".to_string(),
                ..ViewState::default()
            },
        );

        assert_eq!(listing.filtered_count, 0);
        assert_eq!(listing.total_pages, 1);
        assert!(listing.visible.is_empty());
        assert_eq!(listing.window, vec![PageItem::Page(1)]);
    }

    #[test]
    fn small_totals_show_every_page() {
        assert_eq!(
            page_window(2, 5),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
            ]
        );
    }

    #[test]
    fn window_in_the_middle_has_two_ellipses() {
        assert_eq!(
            page_window(5, 10),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn window_near_the_edges_drops_the_adjacent_ellipsis() {
        assert_eq!(
            page_window(1, 10),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
        assert_eq!(
            page_window(9, 10),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn jump_accepts_only_reachable_pages() {
        assert_eq!(parse_jump("7", 10), Some(7));
        assert_eq!(parse_jump(" 3 ", 10), Some(3));
        assert_eq!(parse_jump("0", 10), None);
        assert_eq!(parse_jump("999", 10), None);
        assert_eq!(parse_jump("abc", 10), None);
        assert_eq!(parse_jump("", 10), None);
    }

    #[test]
    fn listing_is_idempotent_and_leaves_the_catalog_untouched() {
        let tools = numbered_tools(85);
        let before = tools.clone();
        let state = ViewState {
            current_page: 2,
            ..ViewState::default()
        };

        let first = build_listing(&tools, &state);
        let second = build_listing(&tools, &state);

        assert_eq!(first, second);
        assert_eq!(tools, before);
    }
}
