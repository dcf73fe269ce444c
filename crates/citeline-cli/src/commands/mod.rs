//! Command implementations.

pub mod configure;
pub mod detail;
pub mod render;
pub mod resolve;
pub mod score;

pub use self::configure::execute_config;
pub use self::detail::execute_detail;
pub use self::render::execute_render;
pub use self::resolve::execute_resolve;
pub use self::score::execute_score;

use crate::cli::ReportSource;
use crate::config::Config;
use crate::error::{CliError, Result};
use citeline_domain::Report;
use citeline_resolver::{wire, HttpDocumentLookup};
use std::fs;
use tracing::debug;

/// Read a report from a file, or fetch its preview from the service.
pub async fn load_report(source: &ReportSource, config: &Config) -> Result<Report> {
    match (&source.file, &source.report_id) {
        (Some(path), _) => {
            debug!(path = %path.display(), "Reading report file");
            let json = fs::read_to_string(path)?;
            Ok(wire::parse_report(&json)?)
        }
        (None, Some(report_id)) => {
            let lookup = HttpDocumentLookup::new(&config.service)?;
            Ok(lookup.fetch_report_preview(report_id).await?)
        }
        (None, None) => Err(CliError::InvalidInput(
            "Either a report file or --report-id is required".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_report_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(
            &path,
            r#"{"preview": {"sections": [{"title": "Intro", "content": [{"text": "See [a:1].", "citations": []}]}]}}"#,
        )
        .unwrap();

        let source = ReportSource {
            file: Some(path),
            report_id: None,
        };
        let report = load_report(&source, &Config::default()).await.unwrap();
        assert_eq!(report.sections[0].title, "Intro");
        assert_eq!(report.sections[0].content[0].text, "See [a:1].");
    }

    #[tokio::test]
    async fn test_load_report_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, r#"{"error": "Report not found"}"#).unwrap();

        let source = ReportSource {
            file: Some(path),
            report_id: None,
        };
        assert!(matches!(
            load_report(&source, &Config::default()).await,
            Err(CliError::Fetch(_))
        ));

        let missing = ReportSource {
            file: Some(dir.path().join("absent.json")),
            report_id: None,
        };
        assert!(matches!(
            load_report(&missing, &Config::default()).await,
            Err(CliError::Io(_))
        ));
    }
}
