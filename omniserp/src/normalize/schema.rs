//! Engine-agnostic result schema
//!
//! Field names here are stable regardless of which engine produced the
//! data. Text fields that an engine did not provide are empty strings.

use serde::{Deserialize, Serialize};

use crate::types::RawResult;

/// A unified search result across all engines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedResult {
    pub organic_results: Vec<OrganicResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_box: Option<AnswerBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_graph: Option<KnowledgeGraph>,
    pub related_searches: Vec<RelatedSearch>,
    pub people_also_ask: Vec<PeopleAlsoAsk>,
    pub news_results: Vec<NewsResult>,
    pub image_results: Vec<ImageResult>,
    pub search_metadata: SearchMetadata,

    /// The response this result was built from
    #[serde(skip)]
    pub raw: RawResult,
}

/// A standard web search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganicResult {
    pub position: usize,
    pub title: String,
    pub link: String,
    /// Same value as `link`
    pub url: String,
    pub snippet: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date: String,
}

impl OrganicResult {
    pub(crate) fn new(
        position: usize,
        title: String,
        link: String,
        snippet: String,
        date: String,
    ) -> Self {
        Self {
            position,
            title,
            url: link.clone(),
            link,
            snippet,
            date,
        }
    }
}

/// A featured answer shown above the results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerBox {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub answer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snippet: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
}

/// A knowledge panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeGraph {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedSearch {
    pub query: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
}

/// A "People Also Ask" question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeopleAlsoAsk {
    pub question: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub answer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsResult {
    pub position: usize,
    pub title: String,
    pub link: String,
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snippet: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumbnail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageResult {
    pub position: usize,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumbnail: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_url: String,
}

/// Metadata about the search itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMetadata {
    /// Lower-case engine name, e.g. "serper"
    pub engine: String,
    pub query: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organic_url_mirrors_link() {
        let result = OrganicResult::new(1, "T".into(), "https://a".into(), "S".into(), String::new());
        assert_eq!(result.url, result.link);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["url"], "https://a");
        assert!(json.get("date").is_none());
    }

    #[test]
    fn test_collections_always_serialized() {
        let json = serde_json::to_value(NormalizedResult::default()).unwrap();
        assert_eq!(json["organic_results"], serde_json::json!([]));
        assert_eq!(json["news_results"], serde_json::json!([]));
        assert!(json.get("answer_box").is_none());
        assert!(json.get("raw").is_none());
    }

    #[test]
    fn test_answer_box_type_field_name() {
        let answer = AnswerBox {
            kind: "organic_result".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json, serde_json::json!({"type": "organic_result"}));
    }
}
