//! Render command implementation.

use crate::cli::RenderArgs;
use crate::commands::load_report;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use citeline_domain::Report;
use citeline_normalizer::{normalize_report, strip_markdown};

/// Execute the render command.
pub async fn execute_render(args: RenderArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut report = load_report(&args.source, config).await?;
    if args.strip_markdown {
        strip_report_markdown(&mut report);
    }

    let sections = normalize_report(&report);
    println!("{}", formatter.format_sections(&sections)?);

    Ok(())
}

/// Strip markdown from every content item in place; markers survive.
fn strip_report_markdown(report: &mut Report) {
    for item in report.sections.iter_mut().flat_map(|s| s.content.iter_mut()) {
        item.text = strip_markdown(&item.text);
    }
}
