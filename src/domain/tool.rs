use itertools::Itertools;

use crate::domain::record::RawRecord;

pub const PLACEHOLDER_TOOL_COUNT: usize = 40;

const PLACEHOLDER_CATEGORIES: [&str; 4] = ["Productivity", "Research", "Generative Art", "Chat"];
const PLACEHOLDER_PRICING: [&str; 3] = ["Free", "Freemium", "Paid"];

/// One listed product. `name` and `description` are always non-empty:
/// records missing either never make it into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub url: String,
    pub pricing: String,
    pub source_url: String,
}

impl Tool {
    /// Maps a raw row into the canonical shape. Returns `None` when the row
    /// has no usable title or description; such rows are silently excluded.
    pub fn from_record(record: &RawRecord) -> Option<Tool> {
        let name = record.text("Title")?;
        let description = record.text("Description")?;

        Some(Tool {
            name: name.to_string(),
            description: description.to_string(),
            categories: split_categories(record.field("Categories").unwrap_or("")),
            url: record.text("Official_URL").unwrap_or("#").to_string(),
            pricing: record.text("Pricing").unwrap_or("Unknown").to_string(),
            source_url: record.text("FutureTools_URL").unwrap_or("#").to_string(),
        })
    }

    pub fn has_external_url(&self) -> bool {
        self.url != "#"
    }

    /// First letter of the name, upper-cased, for the letter avatar.
    pub fn avatar_letter(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('A')
    }
}

pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn normalize_records(records: &[RawRecord]) -> Vec<Tool> {
    records.iter().filter_map(Tool::from_record).collect()
}

/// "All" plus every distinct category across the catalog, first-seen order.
pub fn category_names(tools: &[Tool]) -> Vec<String> {
    std::iter::once("All".to_string())
        .chain(tools.iter().flat_map(|tool| tool.categories.iter().cloned()))
        .unique()
        .collect()
}

/// Synthetic stand-in catalog used when the resource yields no valid tools,
/// so the listing is never empty. Categories and pricing tiers are assigned
/// round-robin.
pub fn placeholder_tools() -> Vec<Tool> {
    (0..PLACEHOLDER_TOOL_COUNT)
        .map(|i| Tool {
            name: format!("AI Tool {}", i + 1),
            description: format!(
                "This is a description for AI Tool {}. It's a powerful tool for various AI tasks.",
                i + 1
            ),
            categories: vec![PLACEHOLDER_CATEGORIES[i % PLACEHOLDER_CATEGORIES.len()].to_string()],
            url: "#".to_string(),
            pricing: PLACEHOLDER_PRICING[i % PLACEHOLDER_PRICING.len()].to_string(),
            source_url: "#".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::domain::record::RawRecord;
    use crate::domain::tool::{
        category_names, normalize_records, placeholder_tools, split_categories, Tool,
        PLACEHOLDER_TOOL_COUNT,
    };

    fn record(title: &str, description: &str) -> RawRecord {
        RawRecord::from_pairs(&[("Title", title), ("Description", description)])
    }

    #[test]
    fn rows_without_title_or_description_are_dropped() {
        let records = [
            record("", "Something"),
            record("   ", "Something"),
            record("ChatGPT", ""),
            record("ChatGPT", "A chatbot"),
        ];
        let tools = normalize_records(&records);

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "ChatGPT");
    }

    #[test]
    fn blank_fields_get_defaults() {
        let record = RawRecord::from_pairs(&[
            ("Title", "ChatGPT"),
            ("Description", "A chatbot"),
            ("Categories", ""),
            ("Official_URL", ""),
            ("Pricing", ""),
        ]);
        let tool = Tool::from_record(&record).unwrap();

        assert!(tool.categories.is_empty());
        assert_eq!(tool.url, "#");
        assert_eq!(tool.pricing, "Unknown");
        assert_eq!(tool.source_url, "#");
        assert!(!tool.has_external_url());
    }

    #[test]
    fn categories_are_split_and_trimmed() {
        assert_eq!(split_categories("A, B,C"), vec!["A", "B", "C"]);
        assert_eq!(split_categories(" Chat ,  , Research"), vec!["Chat", "Research"]);
        assert!(split_categories("").is_empty());
    }

    #[test]
    fn category_names_prepend_all_and_dedupe() {
        let records = [
            RawRecord::from_pairs(&[
                ("Title", "ChatGPT"),
                ("Description", "A chatbot"),
                ("Categories", "Chat, Productivity"),
            ]),
            RawRecord::from_pairs(&[
                ("Title", "Midjourney"),
                ("Description", "Image generation"),
                ("Categories", "Generative Art, Chat"),
            ]),
        ];
        let tools = normalize_records(&records);

        assert_eq!(
            category_names(&tools),
            vec!["All", "Chat", "Productivity", "Generative Art"]
        );
    }

    #[test]
    fn placeholder_catalog_is_fixed_size_round_robin() {
        let tools = placeholder_tools();

        assert_eq!(tools.len(), PLACEHOLDER_TOOL_COUNT);
        assert_eq!(tools[0].categories, vec!["Productivity"]);
        assert_eq!(tools[4].categories, vec!["Productivity"]);
        assert_eq!(tools[0].pricing, "Free");
        assert_eq!(tools[1].pricing, "Freemium");
        assert_eq!(tools[3].pricing, "Free");
        assert!(tools.iter().all(|t| !t.name.is_empty() && !t.description.is_empty()));
    }

    #[test]
    fn avatar_letter_is_first_character_upper_cased() {
        let tool = Tool::from_record(&record("chatGPT", "A chatbot")).unwrap();
        assert_eq!(tool.avatar_letter(), 'C');
    }
}
