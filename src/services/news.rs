use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::errors::NewsLoadError;

const FALLBACK_IMAGE_URL: &str =
    "https://plus.unsplash.com/premium_photo-1683121710572-7723bd2e235d?q=80&w=3732&auto=format&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub source: String,
    pub date: String,
    pub image_url: String,
    pub url: String,
}

#[derive(Serialize)]
struct NewsQuery<'a> {
    q: &'a str,
    #[serde(rename = "sortBy")]
    sort_by: &'a str,
    language: &'a str,
    #[serde(rename = "pageSize")]
    page_size: u8,
    #[serde(rename = "apiKey")]
    api_key: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<ApiArticle>,
}

#[derive(Deserialize)]
struct ApiArticle {
    title: Option<String>,
    description: Option<String>,
    #[serde(default)]
    source: ApiSource,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    url: Option<String>,
}

#[derive(Deserialize, Default)]
struct ApiSource {
    name: Option<String>,
}

/// Queries a NewsAPI-compatible endpoint for recent AI coverage. Callers fall
/// back to `sample_articles` on any error rather than surfacing a failure.
pub struct NewsClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl NewsClient {
    pub fn new(api_key: String, endpoint: String) -> Self {
        NewsClient {
            client: reqwest::Client::new(),
            api_key,
            endpoint,
        }
    }

    pub async fn fetch_articles(&self) -> Result<Vec<NewsArticle>, NewsLoadError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&NewsQuery {
                q: "artificial intelligence",
                sort_by: "publishedAt",
                language: "en",
                page_size: 20,
                api_key: &self.api_key,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NewsLoadError::Status(response.status()));
        }

        let payload: ApiResponse = response
            .json()
            .await
            .map_err(|e| NewsLoadError::Payload(e.to_string()))?;

        if payload.status != "ok" {
            return Err(NewsLoadError::Payload(
                payload.message.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(payload.articles.into_iter().map(format_article).collect())
    }
}

fn format_article(article: ApiArticle) -> NewsArticle {
    NewsArticle {
        title: non_blank(article.title).unwrap_or_else(|| "Untitled Article".to_string()),
        description: non_blank(article.description)
            .unwrap_or_else(|| "No description available".to_string()),
        source: non_blank(article.source.name).unwrap_or_else(|| "Unknown Source".to_string()),
        date: article
            .published_at
            .as_deref()
            .and_then(format_date)
            .unwrap_or_else(|| "Unknown Date".to_string()),
        image_url: non_blank(article.url_to_image)
            .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
        url: non_blank(article.url).unwrap_or_else(|| "#".to_string()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn format_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date| date.format("%-m/%-d/%Y").to_string())
}

/// Bundled dataset shown when the news API is unreachable.
pub fn sample_articles() -> Vec<NewsArticle> {
    let samples = [
        (
            "OpenAI Announces GPT-5 with Enhanced Reasoning Capabilities",
            "The latest model shows significant improvements in logical reasoning and problem-solving abilities.",
            "OpenAI Blog",
            "2023-06-15",
            "https://images.unsplash.com/photo-1677442135968-6bd241f40c8a?q=80&w=500&auto=format&fit=crop",
            "https://openai.com/blog/",
        ),
        (
            "Google DeepMind Achieves Breakthrough in Protein Folding",
            "New AI system can predict protein structures with unprecedented accuracy, potentially revolutionizing drug discovery.",
            "Google AI Blog",
            "2023-06-14",
            "https://images.unsplash.com/photo-1532187863486-abf9dbad1b69?q=80&w=500&auto=format&fit=crop",
            "https://blog.google/technology/ai/",
        ),
        (
            "AI Ethics Researchers Call for New Regulatory Framework",
            "Leading AI researchers propose comprehensive guidelines for responsible AI development and deployment.",
            "MIT Technology Review",
            "2023-06-13",
            "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=500&auto=format&fit=crop",
            "https://www.technologyreview.com/",
        ),
        (
            "Microsoft Integrates AI Assistants Across Office Suite",
            "New AI features in Microsoft 365 aim to boost productivity and creativity for users.",
            "Microsoft AI Blog",
            "2023-06-12",
            "https://images.unsplash.com/photo-1661961110671-77b71b929d52?q=80&w=500&auto=format&fit=crop",
            "https://blogs.microsoft.com/ai/",
        ),
        (
            "AI-Generated Art Wins Major Competition, Sparks Controversy",
            "Digital artwork created using AI tools takes first prize, raising questions about creativity and authorship.",
            "Wired",
            "2023-06-11",
            "https://images.unsplash.com/photo-1547891654-e66ed7ebb968?q=80&w=500&auto=format&fit=crop",
            "https://www.wired.com/",
        ),
        (
            "New Research Shows AI Can Detect Early Signs of Alzheimer's",
            "Machine learning algorithm identifies subtle patterns in brain scans that human doctors might miss.",
            "Nature",
            "2023-06-10",
            "https://images.unsplash.com/photo-1559757175-7cb057fba93c?q=80&w=500&auto=format&fit=crop",
            "https://www.nature.com/",
        ),
        (
            "Tesla Unveils New Self-Driving Features Powered by Custom AI Chip",
            "Latest update brings enhanced navigation and obstacle detection capabilities to Tesla vehicles.",
            "Tesla Blog",
            "2023-06-09",
            "https://images.unsplash.com/photo-1560958089-b8a1929cea89?q=80&w=500&auto=format&fit=crop",
            "https://www.tesla.com/blog",
        ),
        (
            "AI Startup Raises Record $500M for Language Model Development",
            "New funding round aims to create more efficient and capable language models for enterprise applications.",
            "TechCrunch",
            "2023-06-08",
            "https://images.unsplash.com/photo-1526378722484-bd91ca387e72?q=80&w=500&auto=format&fit=crop",
            "https://techcrunch.com/",
        ),
        (
            "Meta's AI Translation System Now Supports 200 Languages",
            "Breakthrough model can translate between languages that previously had limited digital resources.",
            "Meta AI Research",
            "2023-06-07",
            "https://images.unsplash.com/photo-1546146830-2cca9512c68e?q=80&w=500&auto=format&fit=crop",
            "https://ai.facebook.com/",
        ),
        (
            "New AI Tool Can Generate 3D Models from Text Descriptions",
            "Researchers develop system that creates detailed 3D assets based on natural language prompts.",
            "NVIDIA Research",
            "2023-06-06",
            "https://images.unsplash.com/photo-1634017839464-5c339ebe3cb4?q=80&w=500&auto=format&fit=crop",
            "https://www.nvidia.com/en-us/research/",
        ),
        (
            "AI-Powered Drone System Helps Monitor Endangered Wildlife",
            "Conservation efforts boosted by automated aerial surveillance and image recognition technology.",
            "National Geographic",
            "2023-06-05",
            "https://images.unsplash.com/photo-1567722681579-c671cabd2810?q=80&w=500&auto=format&fit=crop",
            "https://www.nationalgeographic.com/",
        ),
        (
            "IBM Quantum Computing Breakthrough Enabled by AI Algorithms",
            "New approach uses machine learning to optimize quantum circuits and reduce error rates.",
            "IBM Research",
            "2023-06-04",
            "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?q=80&w=500&auto=format&fit=crop",
            "https://research.ibm.com/",
        ),
    ];

    samples
        .iter()
        .map(|(title, description, source, date, image_url, url)| NewsArticle {
            title: title.to_string(),
            description: description.to_string(),
            source: source.to_string(),
            date: date.to_string(),
            image_url: image_url.to_string(),
            url: url.to_string(),
        })
        .collect()
}
