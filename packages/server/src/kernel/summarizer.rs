//! Summarizer - turns extracted page text into a marketing brief via DeepSeek
//!
//! DeepSeek speaks the OpenAI chat completion wire format, so this is a thin
//! layer over `openai-client`: build the prompt, request a JSON object,
//! parse the reply into `WebsiteAnalysis`.

use std::time::Duration;

use async_trait::async_trait;
use openai_client::{strip_code_blocks, truncate_chars, ChatRequest, Message, OpenAIClient};
use tracing::{debug, info, warn};

use super::BaseSummarizer;
use crate::common::{SummarizationError, WebsiteAnalysis};

pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEEPSEEK_MODEL: &str = "deepseek-chat";

/// Overall timeout for the chat completion call
pub const SUMMARIZE_TIMEOUT: Duration = Duration::from_secs(45);

/// Characters of page content embedded in the prompt
pub const PROMPT_CONTENT_CHARS: usize = 3000;

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1000;

// Requested in the prompt; not enforced on the reply.
const EXPECTED_SELLING_POINTS: usize = 5;
const EXPECTED_AUDIENCES: usize = 3;

/// Summarizer backed by the DeepSeek chat completion API
#[derive(Clone)]
pub struct DeepSeekSummarizer {
    client: OpenAIClient,
    model: String,
}

impl DeepSeekSummarizer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(
            OpenAIClient::new(api_key)
                .with_base_url(DEEPSEEK_BASE_URL)
                .with_timeout(SUMMARIZE_TIMEOUT),
        )
    }

    /// Use a preconfigured client (custom base URL or retry policy).
    pub fn with_client(client: OpenAIClient) -> Self {
        Self {
            client,
            model: DEEPSEEK_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl BaseSummarizer for DeepSeekSummarizer {
    async fn summarize(
        &self,
        title: &str,
        content: &str,
    ) -> Result<WebsiteAnalysis, SummarizationError> {
        info!(model = %self.model, title = %title, "Requesting website summary");

        let request = ChatRequest::new(&self.model)
            .message(Message::user(build_prompt(title, content)))
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .json_object();

        let response = self.client.chat_completion(request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Summary token usage"
            );
        }

        parse_analysis(&response.content)
    }
}

/// Build the summarization prompt for a page.
pub fn build_prompt(title: &str, content: &str) -> String {
    let excerpt = truncate_chars(content, PROMPT_CONTENT_CHARS);
    let excerpt = if excerpt.is_empty() { "no content" } else { excerpt };

    format!(
        r#"You are a professional marketing assistant. Based on the following web page, write a detailed analysis report.

Page title: {title}

Page content excerpt: {excerpt}

Return the result strictly in the following JSON format:
{{
    "business_intro": "Brand/business introduction (1-2 sentences)",
    "core_selling_points": [
        "Core selling point 1",
        "Core selling point 2",
        "Core selling point 3",
        "Core selling point 4",
        "Core selling point 5"
    ],
    "core_audiences": [
        {{
            "title": "Audience segment 1 title",
            "description": "Audience segment 1 description (1-2 sentences)"
        }},
        {{
            "title": "Audience segment 2 title",
            "description": "Audience segment 2 description (1-2 sentences)"
        }},
        {{
            "title": "Audience segment 3 title",
            "description": "Audience segment 3 description (1-2 sentences)"
        }}
    ]
}}"#
    )
}

/// Parse the model's reply, tolerating a ```json fence around the object.
pub fn parse_analysis(raw: &str) -> Result<WebsiteAnalysis, SummarizationError> {
    let analysis = match serde_json::from_str::<WebsiteAnalysis>(raw) {
        Ok(analysis) => analysis,
        Err(first) => {
            debug!(error = %first, "Direct parse failed, stripping code fences");
            serde_json::from_str::<WebsiteAnalysis>(strip_code_blocks(raw))?
        }
    };

    if analysis.core_selling_points.len() != EXPECTED_SELLING_POINTS
        || analysis.core_audiences.len() != EXPECTED_AUDIENCES
    {
        warn!(
            selling_points = analysis.core_selling_points.len(),
            audiences = analysis.core_audiences.len(),
            "Model returned an unexpected number of items"
        );
    }

    Ok(analysis)
}
