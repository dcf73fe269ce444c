//! Detail command implementation.

use crate::cli::DetailArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use citeline_resolver::HttpDocumentLookup;

/// Execute the detail command.
pub async fn execute_detail(args: DetailArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let lookup = HttpDocumentLookup::new(&config.service)?;
    let detail = lookup.fetch_document_detail(&args.source_id).await?;

    println!("{}", formatter.format_detail(&detail)?);
    Ok(())
}
