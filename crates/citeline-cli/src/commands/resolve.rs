//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::commands::load_report;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use citeline_normalizer::{normalize_report, NormalizedItem, NormalizedSection};
use citeline_resolver::{HttpDocumentLookup, Resolver};

/// Execute the resolve command.
pub async fn execute_resolve(args: ResolveArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let report = load_report(&args.source, config).await?;
    let sections = normalize_report(&report);
    let item = select_item(&sections, args.section, args.item)?;

    let resolver = Resolver::new(HttpDocumentLookup::new(&config.service)?);
    let view = resolver.view(args.number, &item.normalized.citation_map, &item.citations)?;

    let detail = if args.detail {
        Some(resolver.detail(&view.citation).await)
    } else {
        None
    };

    println!("{}", formatter.format_view(&view, detail.as_ref())?);
    Ok(())
}

/// Pick a content item by 1-based section and item index.
fn select_item(sections: &[NormalizedSection], section: usize, item: usize) -> Result<&NormalizedItem> {
    let found = section
        .checked_sub(1)
        .and_then(|s| sections.get(s))
        .ok_or_else(|| {
            CliError::InvalidInput(format!(
                "Section {} does not exist (report has {})",
                section,
                sections.len()
            ))
        })?;

    item.checked_sub(1)
        .and_then(|i| found.items.get(i))
        .ok_or_else(|| {
            CliError::InvalidInput(format!(
                "Item {} does not exist in section {} ({} item(s))",
                item,
                section,
                found.items.len()
            ))
        })
}
