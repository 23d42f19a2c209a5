use dox_config::DoxConfig;

use crate::cli::root_commands::ExprArgs;
use crate::report::ParseOutcome;

/// Handle `doxsig expr`.
pub fn handle(args: &ExprArgs, config: &DoxConfig) -> ParseOutcome {
    let templates = config.smart_templates();
    ParseOutcome::from_expression(
        args.expression.trim(),
        &config.parse_options(),
        templates.as_ref(),
    )
}
