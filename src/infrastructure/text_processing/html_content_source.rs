use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::application::ports::{ContentSource, ContentSourceError};
use crate::domain::McqCandidate;

use super::{extract_listed_mcqs, normalize_page_text};

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// Fetches pages over HTTP and reduces them to text with `scraper`.
pub struct HtmlContentSource {
    client: Client,
}

impl HtmlContentSource {
    pub fn new(timeout: Duration) -> Result<Self, ContentSourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ContentSourceError::RequestFailed(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentSource for HtmlContentSource {
    async fn fetch(&self, url: &str) -> Result<String, ContentSourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ContentSourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ContentSourceError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| ContentSourceError::RequestFailed(e.to_string()))?;
        tracing::debug!(url = %url, bytes = html.len(), "Fetched page");
        Ok(html)
    }

    fn extract_body(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        document
            .select(&BODY)
            .next()
            .map(|body| body.inner_html())
            .unwrap_or_else(|| html.to_string())
    }

    fn clean(&self, body: &str) -> String {
        let fragment = Html::parse_fragment(body);
        let mut lines = Vec::new();

        for node in fragment.tree.nodes() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let skipped = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| SKIPPED_ELEMENTS.contains(&element.name()))
            });
            if !skipped {
                lines.push(text.trim().to_string());
            }
        }

        normalize_page_text(&lines.join("\n"))
    }

    fn extract_structured(&self, html: &str) -> Vec<McqCandidate> {
        let text = self.clean(&self.extract_body(html));
        extract_listed_mcqs(&text)
    }
}
