//! SerpAPI field mapping
//!
//! SerpAPI uses snake_case keys with a `_results` suffix for ranked
//! collections. "People also ask" lives under `related_questions`, with the
//! attribution in `displayed_link`.

use serde::Deserialize;
use serde_json::Value;

use super::lenient::{List, Object, Text};
use super::schema::{
    AnswerBox, ImageResult, KnowledgeGraph, NewsResult, NormalizedResult, OrganicResult,
    PeopleAlsoAsk, RelatedSearch,
};
use super::SearchEcho;
use crate::types::Category;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Payload {
    organic_results: List<Organic>,
    answer_box: Object<SerpApiAnswerBox>,
    knowledge_graph: Object<SerpApiKnowledgeGraph>,
    related_searches: List<Related>,
    related_questions: List<Question>,
    news_results: List<News>,
    images_results: List<Image>,
    search_parameters: Object<SearchEcho>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Organic {
    title: Text,
    link: Text,
    snippet: Text,
    date: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SerpApiAnswerBox {
    #[serde(rename = "type")]
    kind: Text,
    title: Text,
    answer: Text,
    snippet: Text,
    link: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SerpApiKnowledgeGraph {
    title: Text,
    #[serde(rename = "type")]
    kind: Text,
    description: Text,
    image: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Related {
    query: Text,
    link: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Question {
    question: Text,
    answer: Text,
    title: Text,
    link: Text,
    displayed_link: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct News {
    title: Text,
    link: Text,
    source: Text,
    date: Text,
    snippet: Text,
    thumbnail: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Image {
    title: Text,
    original: Text,
    thumbnail: Text,
    source: Text,
    link: Text,
}

pub(super) fn normalize(
    data: &Value,
    category: Category,
    out: &mut NormalizedResult,
) -> Result<(), serde_json::Error> {
    let payload = Payload::deserialize(data)?;

    match category {
        Category::Web => {
            out.organic_results = payload
                .organic_results
                .into_vec()
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    OrganicResult::new(
                        i + 1,
                        item.title.into_string(),
                        item.link.into_string(),
                        item.snippet.into_string(),
                        item.date.into_string(),
                    )
                })
                .collect();

            out.answer_box = payload.answer_box.into_option().map(|ab| AnswerBox {
                kind: ab.kind.into_string(),
                title: ab.title.into_string(),
                answer: ab.answer.into_string(),
                snippet: ab.snippet.into_string(),
                source: String::new(),
                link: ab.link.into_string(),
            });

            out.knowledge_graph = payload.knowledge_graph.into_option().map(|kg| KnowledgeGraph {
                title: kg.title.into_string(),
                kind: kg.kind.into_string(),
                description: kg.description.into_string(),
                image_url: kg.image.into_string(),
            });

            out.related_searches = payload
                .related_searches
                .into_vec()
                .into_iter()
                .map(|item| RelatedSearch {
                    query: item.query.into_string(),
                    link: item.link.into_string(),
                })
                .collect();

            out.people_also_ask = payload
                .related_questions
                .into_vec()
                .into_iter()
                .map(|item| PeopleAlsoAsk {
                    question: item.question.into_string(),
                    answer: item.answer.into_string(),
                    title: item.title.into_string(),
                    link: item.link.into_string(),
                    source: item.displayed_link.into_string(),
                })
                .collect();
        }
        Category::News => {
            out.news_results = payload
                .news_results
                .into_vec()
                .into_iter()
                .enumerate()
                .map(|(i, item)| NewsResult {
                    position: i + 1,
                    title: item.title.into_string(),
                    link: item.link.into_string(),
                    source: item.source.into_string(),
                    date: item.date.into_string(),
                    snippet: item.snippet.into_string(),
                    image_url: String::new(),
                    // A thumbnail object (rather than a URL string) is dropped
                    thumbnail: item.thumbnail.into_string(),
                })
                .collect();
        }
        Category::Images => {
            out.image_results = payload
                .images_results
                .into_vec()
                .into_iter()
                .enumerate()
                .map(|(i, item)| ImageResult {
                    position: i + 1,
                    title: item.title.into_string(),
                    image_url: item.original.into_string(),
                    thumbnail: item.thumbnail.into_string(),
                    source: item.source.into_string(),
                    source_url: item.link.into_string(),
                })
                .collect();
        }
    }

    if let Some(echo) = payload.search_parameters.into_option() {
        echo.apply(&mut out.search_metadata);
    }

    Ok(())
}
