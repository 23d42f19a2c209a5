use anyhow::{Context, ensure};
use dox_config::DoxConfig;
use dox_parser::expression_after_line;

use crate::cli::root_commands::FileArgs;
use crate::report::ParseOutcome;

/// Handle `doxsig file`.
pub fn handle(args: &FileArgs, config: &DoxConfig) -> anyhow::Result<ParseOutcome> {
    ensure!(args.line >= 1, "--line is 1-based, got 0");
    let document = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    tracing::debug!(path = %args.path.display(), line = args.line, "parsing after trigger line");
    Ok(outcome_after_line(&document, args.line, config))
}

/// Parse the declaration following 1-based `trigger_line` of `document`.
fn outcome_after_line(document: &str, trigger_line: usize, config: &DoxConfig) -> ParseOutcome {
    let options = config.parse_options();
    match expression_after_line(document, trigger_line.saturating_sub(1), options.max_lines) {
        Ok(expression) => {
            let templates = config.smart_templates();
            ParseOutcome::from_expression(&expression, &options, templates.as_ref())
        }
        Err(error) => ParseOutcome::rejected(error),
    }
}
