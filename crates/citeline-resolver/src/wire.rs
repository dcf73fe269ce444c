//! Decoding upstream JSON into domain types
//!
//! Upstream payloads are loosely typed: pages arrive as numbers or strings,
//! snippets are sometimes objects, and empty strings stand in for missing
//! values. Everything is validated here, once, so the rest of the crate works
//! with plain optional fields.

use crate::error::FetchError;
use citeline_domain::report::DEFAULT_SECTION_TITLE;
use citeline_domain::{Citation, ContentItem, DocumentChunk, DocumentDetail, Report, Section};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
struct WireCitation {
    #[serde(default)]
    source_id: Value,
    #[serde(default)]
    page: Value,
    #[serde(default)]
    snippet: Value,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    document: Value,
    #[serde(default)]
    timestamp: Value,
}

#[derive(Debug, Default, Deserialize)]
struct WireContentItem {
    #[serde(default)]
    text: Value,
    #[serde(default)]
    citations: Option<Vec<WireCitation>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireSection {
    #[serde(default)]
    title: Value,
    #[serde(default)]
    content: Option<Vec<WireContentItem>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireReport {
    #[serde(default)]
    sections: Option<Vec<WireSection>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireDocument {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    document: Value,
    #[serde(default)]
    metadata: Value,
}

#[derive(Debug, Default, Deserialize)]
struct WireDocumentDetail {
    #[serde(default)]
    source_id: Value,
    #[serde(default)]
    documents: Option<Vec<WireDocument>>,
}

/// A non-empty string, or `None`
fn text(value: &Value) -> Option<String> {
    value.as_str().filter(|s| !s.is_empty()).map(str::to_string)
}

/// A non-empty string or a number rendered as a string
fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        other => text(other),
    }
}

/// A page number; anything unusable becomes the absent sentinel `0`
fn page(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                // Integral floats such as `3.0`
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                    .map(|f| f as u64)
            })
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn metadata(value: &Value) -> BTreeMap<String, String> {
    // Some stores wrap metadata in a one-element list
    let object = match value {
        Value::Object(map) => Some(map),
        Value::Array(items) => items.first().and_then(Value::as_object),
        _ => None,
    };
    object
        .map(|map| {
            map.iter()
                .map(|(k, v)| (k.clone(), scalar_to_string(v)))
                .collect()
        })
        .unwrap_or_default()
}

impl From<WireCitation> for Citation {
    fn from(wire: WireCitation) -> Self {
        Citation {
            source_id: identifier(&wire.source_id),
            page: page(&wire.page),
            snippet: text(&wire.snippet).or_else(|| text(&wire.content)),
            document: text(&wire.document),
            timestamp: text(&wire.timestamp),
        }
    }
}

impl From<WireContentItem> for ContentItem {
    fn from(wire: WireContentItem) -> Self {
        ContentItem {
            text: wire.text.as_str().unwrap_or_default().to_string(),
            citations: wire
                .citations
                .unwrap_or_default()
                .into_iter()
                .map(Citation::from)
                .collect(),
        }
    }
}

impl From<WireSection> for Section {
    fn from(wire: WireSection) -> Self {
        Section {
            title: text(&wire.title).unwrap_or_else(|| DEFAULT_SECTION_TITLE.to_string()),
            content: wire
                .content
                .unwrap_or_default()
                .into_iter()
                .map(ContentItem::from)
                .collect(),
        }
    }
}

impl From<WireReport> for Report {
    fn from(wire: WireReport) -> Self {
        Report {
            sections: wire
                .sections
                .unwrap_or_default()
                .into_iter()
                .map(Section::from)
                .collect(),
        }
    }
}

/// Decode a single citation record
pub fn citation_from_value(value: Value) -> Result<Citation, FetchError> {
    if !value.is_object() {
        return Err(FetchError::Decode("citation must be a JSON object".to_string()));
    }
    Ok(serde_json::from_value::<WireCitation>(value)?.into())
}

/// Decode a report from a preview body (`{"preview": {...}}`), an error body
/// (`{"error": "..."}`), or a bare report (`{"sections": [...]}`)
pub fn report_from_value(value: Value) -> Result<Report, FetchError> {
    let Value::Object(mut body) = value else {
        return Err(FetchError::Decode("report must be a JSON object".to_string()));
    };

    if let Some(preview) = body.remove("preview") {
        if !preview.is_object() {
            return Err(FetchError::Decode("preview must be a JSON object".to_string()));
        }
        return Ok(serde_json::from_value::<WireReport>(preview)?.into());
    }
    if let Some(error) = body.get("error") {
        return Err(FetchError::Upstream(scalar_to_string(error)));
    }
    Ok(serde_json::from_value::<WireReport>(Value::Object(body))?.into())
}

/// Decode a report from JSON text; see [`report_from_value`]
pub fn parse_report(json: &str) -> Result<Report, FetchError> {
    report_from_value(serde_json::from_str(json)?)
}

/// Decode a document lookup body
///
/// A body without `source_id` is attributed to `requested_source_id`.
pub fn document_detail_from_value(
    value: Value,
    requested_source_id: &str,
) -> Result<DocumentDetail, FetchError> {
    if !value.is_object() {
        return Err(FetchError::Decode("document detail must be a JSON object".to_string()));
    }
    let wire: WireDocumentDetail = serde_json::from_value(value)?;

    let documents = wire
        .documents
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, doc)| DocumentChunk {
            id: identifier(&doc.id).unwrap_or_else(|| format!("doc_{}", i)),
            text: doc.document.as_str().unwrap_or_default().to_string(),
            metadata: metadata(&doc.metadata),
        })
        .collect();

    Ok(DocumentDetail {
        source_id: identifier(&wire.source_id).unwrap_or_else(|| requested_source_id.to_string()),
        documents,
    })
}
