//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::output::Formatter;
use citeline_domain::{classify_confidence, Citation};

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, formatter: &Formatter) -> Result<()> {
    let citation = citation_from_args(args);
    println!("{}", formatter.format_confidence(&classify_confidence(&citation))?);
    Ok(())
}

fn citation_from_args(args: ScoreArgs) -> Citation {
    Citation {
        source_id: args.source_id,
        page: args.page,
        snippet: args.snippet,
        document: args.document,
        timestamp: None,
    }
}
