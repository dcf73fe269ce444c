//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use citeline_domain::{
    Citation, CitationMap, Confidence, ConfidenceLevel, DocumentDetail, NormalizedText, Segment,
};
use citeline_normalizer::{render_inline, NormalizedSection};
use citeline_resolver::{CitationView, DetailState};
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest excerpt shown in a table cell
const EXCERPT_CHARS: usize = 80;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a normalized report.
    pub fn format_sections(&self, sections: &[NormalizedSection]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_sections: Vec<Value> = sections
                    .iter()
                    .map(|section| {
                        json!({
                            "title": section.title,
                            "items": section.items.iter().map(|item| json!({
                                "text": item.normalized.clean_text,
                                "citation_map": citation_map_json(&item.normalized.citation_map),
                            })).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_sections)?)
            }
            OutputFormat::Table => self.format_sections_table(sections),
            OutputFormat::Quiet => Ok(sections
                .iter()
                .flat_map(|section| section.items.iter())
                .map(|item| item.normalized.clean_text.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_sections_table(&self, sections: &[NormalizedSection]) -> Result<String> {
        if sections.is_empty() {
            return Ok(self.colorize("Report has no sections.", "yellow"));
        }

        let mut out = Vec::new();
        for (s, section) in sections.iter().enumerate() {
            out.push(self.colorize(&format!("{}. {}", s + 1, section.title), "cyan"));

            for item in &section.items {
                out.push(self.render_text(&item.normalized));
                if item.normalized.citation_map.is_empty() {
                    continue;
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Source", "Page", "Marker"]);
                for entry in &item.normalized.citation_map {
                    builder.push_record([
                        entry.number.to_string(),
                        entry.source_id.clone(),
                        entry.page_text.clone(),
                        entry.original_match.clone(),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                out.push(table.to_string());
            }
        }

        Ok(out.join("\n"))
    }

    /// Walk the inline segments, highlighting citation references.
    fn render_text(&self, normalized: &NormalizedText) -> String {
        render_inline(&normalized.clean_text, &normalized.citation_map)
            .map(|segment| match segment {
                Segment::Text(text) => text,
                Segment::CitationRef(number) => self.colorize(&format!("[{}]", number), "cyan"),
            })
            .collect()
    }

    /// Format a resolved citation, with document detail when it was fetched.
    pub fn format_view(&self, view: &CitationView, detail: Option<&DetailState>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = json!({
                    "number": view.number,
                    "citation": citation_json(&view.citation),
                    "display_name": view.display_name,
                    "kind": view.kind.label(),
                    "confidence": confidence_json(&view.confidence),
                });
                if let Some(state) = detail {
                    value["detail"] = match state {
                        DetailState::Loaded(detail) => detail_json(detail),
                        DetailState::Unavailable => Value::Null,
                    };
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(view.citation.snippet.clone().unwrap_or_default()),
            OutputFormat::Table => {
                let citation = &view.citation;
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Citation".to_string(), format!("[{}]", view.number)]);
                builder.push_record(["Source".to_string(), view.display_name.clone()]);
                builder.push_record(["Type".to_string(), view.kind.label().to_string()]);
                builder.push_record(["Page".to_string(), format_page(citation.page)]);
                builder.push_record([
                    "Snippet".to_string(),
                    excerpt(citation.snippet.as_deref().unwrap_or_default()),
                ]);
                builder.push_record([
                    "Timestamp".to_string(),
                    citation.timestamp.clone().unwrap_or_else(|| "-".to_string()),
                ]);
                builder.push_record(["Confidence".to_string(), self.confidence(&view.confidence)]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let mut out = table.to_string();
                match detail {
                    Some(DetailState::Loaded(detail)) => {
                        out.push('\n');
                        out.push_str(&self.format_detail(detail)?);
                    }
                    Some(DetailState::Unavailable) => {
                        out.push('\n');
                        out.push_str(&self.warning("Document detail unavailable"));
                    }
                    None => {}
                }
                Ok(out)
            }
        }
    }

    /// Format document detail.
    pub fn format_detail(&self, detail: &DocumentDetail) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&detail_json(detail))?),
            OutputFormat::Quiet => Ok(detail
                .documents
                .iter()
                .map(|chunk| chunk.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if detail.documents.is_empty() {
                    return Ok(self.colorize(
                        &format!("No documents found for {}.", detail.source_id),
                        "yellow",
                    ));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Page", "Text"]);
                for chunk in &detail.documents {
                    builder.push_record([
                        chunk.id.clone(),
                        chunk.metadata.get("page").cloned().unwrap_or_else(|| "-".to_string()),
                        excerpt(&chunk.text),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(format!(
                    "{}\n{}",
                    self.info(&format!(
                        "{} document(s) for {}",
                        detail.document_count(),
                        detail.source_id
                    )),
                    table
                ))
            }
        }
    }

    /// Format a confidence score on its own.
    pub fn format_confidence(&self, confidence: &Confidence) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&confidence_json(confidence))?),
            OutputFormat::Quiet => Ok(confidence.level.as_str().to_string()),
            OutputFormat::Table => Ok(self.confidence(confidence)),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn confidence(&self, confidence: &Confidence) -> String {
        let color = match confidence.level {
            ConfidenceLevel::High => "green",
            ConfidenceLevel::Medium => "yellow",
            ConfidenceLevel::Low => "red",
        };
        self.colorize(&format!("{} ({})", confidence.level, confidence.score), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn format_page(page: u32) -> String {
    if page == 0 {
        "-".to_string()
    } else {
        page.to_string()
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{}…", cut)
}

fn citation_map_json(map: &CitationMap) -> Value {
    Value::Array(
        map.iter()
            .map(|entry| {
                json!({
                    "number": entry.number,
                    "source_id": entry.source_id,
                    "page": entry.page,
                    "page_text": entry.page_text,
                    "original_match": entry.original_match,
                })
            })
            .collect(),
    )
}

fn citation_json(citation: &Citation) -> Value {
    json!({
        "source_id": citation.source_id,
        "page": citation.page,
        "snippet": citation.snippet,
        "document": citation.document,
        "timestamp": citation.timestamp,
    })
}

fn confidence_json(confidence: &Confidence) -> Value {
    json!({
        "level": confidence.level.as_str(),
        "score": confidence.score,
    })
}

fn detail_json(detail: &DocumentDetail) -> Value {
    json!({
        "source_id": detail.source_id,
        "documents": detail.documents.iter().map(|chunk| json!({
            "id": chunk.id,
            "document": chunk.text,
            "metadata": chunk.metadata,
        })).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use citeline_domain::{classify_confidence, ContentItem, DocumentChunk, DocumentKind, Report, Section};
    use citeline_normalizer::normalize_report;

    fn sections() -> Vec<NormalizedSection> {
        normalize_report(&Report {
            sections: vec![Section {
                title: "Findings".to_string(),
                content: vec![ContentItem {
                    text: "Revenue grew [doc_a:2] while costs fell [doc_b:5].".to_string(),
                    citations: vec![],
                }],
            }],
        })
    }

    fn view() -> CitationView {
        let citation = Citation::new("uploaded_q3.pdf_9f3a2b1c", 3).with_snippet("Revenue grew 12%");
        CitationView {
            number: 1,
            confidence: classify_confidence(&citation),
            display_name: "q3.pdf (9f3a2b1c)".to_string(),
            kind: DocumentKind::Pdf,
            citation,
        }
    }

    #[test]
    fn test_sections_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_sections(&sections()).unwrap();
        assert_eq!(output, "Revenue grew [1] while costs fell [2].");
    }

    #[test]
    fn test_sections_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_sections(&sections()).unwrap();
        assert!(output.contains("1. Findings"));
        assert!(output.contains("[doc_b:5]"));
        assert!(output.contains("Marker"));
    }

    #[test]
    fn test_render_text_highlights_only_mapped_refs() {
        let normalized = citeline_normalizer::normalize(Some("See [doc_a:2], not [7]."), &[]);

        let plain = Formatter::new(OutputFormat::Table, false).render_text(&normalized);
        assert_eq!(plain, "See [1], not [7].");

        colored::control::set_override(true);
        let highlighted = Formatter::new(OutputFormat::Table, true).render_text(&normalized);
        colored::control::unset_override();
        assert!(highlighted.starts_with("See \u{1b}["));
        assert!(highlighted.ends_with(", not [7]."));
        assert!(highlighted.contains("[1]"));
    }

    #[test]
    fn test_sections_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_sections(&sections()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["items"][0]["citation_map"][1]["source_id"], "doc_b");
        assert_eq!(value[0]["items"][0]["citation_map"][1]["number"], 2);
    }

    #[test]
    fn test_view_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_view(&view(), Some(&DetailState::Unavailable))
            .unwrap();
        assert!(output.contains("q3.pdf (9f3a2b1c)"));
        assert!(output.contains("PDF Document"));
        assert!(output.contains("Low (50)"));
        assert!(output.contains("Document detail unavailable"));
    }

    #[test]
    fn test_view_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let detail = DetailState::Loaded(DocumentDetail {
            source_id: "uploaded_q3.pdf_9f3a2b1c".to_string(),
            documents: vec![DocumentChunk {
                id: "c1".to_string(),
                text: "Revenue grew 12%".to_string(),
                ..Default::default()
            }],
        });
        let output = formatter.format_view(&view(), Some(&detail)).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["citation"]["page"], 3);
        assert_eq!(value["detail"]["documents"][0]["id"], "c1");
        assert_eq!(value["confidence"]["score"], view().confidence.score);
    }

    #[test]
    fn test_empty_detail_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_detail(&DocumentDetail {
                source_id: "doc_a".to_string(),
                documents: vec![],
            })
            .unwrap();
        assert_eq!(output, "No documents found for doc_a.");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let long = "é".repeat(100);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 1);
        assert!(cut.ends_with('…'));
        assert_eq!(excerpt("short"), "short");
    }
}
