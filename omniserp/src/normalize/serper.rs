//! Serper field mapping
//!
//! Serper uses camelCase collection keys (`organic`, `answerBox`,
//! `peopleAlsoAsk`, ...) and reports image URLs under `imageUrl`.

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
#[serde(default, rename_all = "camelCase")]
struct Payload {
    organic: List<Organic>,
    answer_box: Object<SerperAnswerBox>,
    knowledge_graph: Object<SerperKnowledgeGraph>,
    related_searches: List<Related>,
    people_also_ask: List<Question>,
    news: List<News>,
    images: List<Image>,
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
struct SerperAnswerBox {
    #[serde(rename = "type")]
    kind: Text,
    title: Text,
    answer: Text,
    snippet: Text,
    source: Text,
    link: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SerperKnowledgeGraph {
    title: Text,
    #[serde(rename = "type")]
    kind: Text,
    description: Text,
    #[serde(rename = "imageUrl")]
    image_url: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Related {
    query: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Question {
    question: Text,
    answer: Text,
    title: Text,
    link: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct News {
    title: Text,
    link: Text,
    source: Text,
    date: Text,
    snippet: Text,
    #[serde(rename = "imageUrl")]
    image_url: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Image {
    title: Text,
    #[serde(rename = "imageUrl")]
    image_url: Text,
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
                .organic
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
                source: ab.source.into_string(),
                link: ab.link.into_string(),
            });

            out.knowledge_graph = payload.knowledge_graph.into_option().map(|kg| KnowledgeGraph {
                title: kg.title.into_string(),
                kind: kg.kind.into_string(),
                description: kg.description.into_string(),
                image_url: kg.image_url.into_string(),
            });

            out.related_searches = payload
                .related_searches
                .into_vec()
                .into_iter()
                .map(|item| RelatedSearch {
                    query: item.query.into_string(),
                    link: String::new(),
                })
                .collect();

            out.people_also_ask = payload
                .people_also_ask
                .into_vec()
                .into_iter()
                .map(|item| PeopleAlsoAsk {
                    question: item.question.into_string(),
                    answer: item.answer.into_string(),
                    title: item.title.into_string(),
                    link: item.link.into_string(),
                    source: String::new(),
                })
                .collect();
        }
        Category::News => {
            out.news_results = payload
                .news
                .into_vec()
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let image_url = item.image_url.into_string();
                    NewsResult {
                        position: i + 1,
                        title: item.title.into_string(),
                        link: item.link.into_string(),
                        source: item.source.into_string(),
                        date: item.date.into_string(),
                        snippet: item.snippet.into_string(),
                        thumbnail: image_url.clone(),
                        image_url,
                    }
                })
                .collect();
        }
        Category::Images => {
            out.image_results = payload
                .images
                .into_vec()
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let image_url = item.image_url.into_string();
                    ImageResult {
                        position: i + 1,
                        title: item.title.into_string(),
                        thumbnail: image_url.clone(),
                        image_url,
                        source: item.source.into_string(),
                        source_url: item.link.into_string(),
                    }
                })
                .collect();
        }
    }

    if let Some(echo) = payload.search_parameters.into_option() {
        echo.apply(&mut out.search_metadata);
    }

    Ok(())
}
