// Common types used across multiple domains and layers
//
// These types are shared between the kernel and domain layers to avoid
// circular dependencies while maintaining type safety.

use serde::{Deserialize, Serialize};

/// Salient text pulled out of a fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub title: String,
    /// `<meta name="description">` content, empty when absent
    pub description: String,
    /// Main content text, at most `MAX_CONTENT_CHARS` characters
    pub content: String,
}

/// An audience segment suggested by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    pub title: String,
    pub description: String,
}

/// Marketing brief generated for a website.
///
/// `business_intro`, `core_selling_points` and `core_audiences` are required
/// when parsing the model's reply; a reply missing any of them is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteAnalysis {
    pub business_intro: String,
    pub core_selling_points: Vec<String>,
    pub core_audiences: Vec<Audience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
