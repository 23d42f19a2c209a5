pub mod expr;
pub mod file;

use dox_config::DoxConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::output::output;

/// Route a parsed command to its handler and print the outcome.
pub fn dispatch(command: &Commands, flags: &GlobalFlags, config: &DoxConfig) -> anyhow::Result<()> {
    let outcome = match command {
        Commands::Expr(args) => expr::handle(args, config),
        Commands::File(args) => file::handle(args, config)?,
    };
    if outcome.declaration.is_none() {
        tracing::info!(reason = outcome.reason.as_deref(), "no declaration found");
    }
    output(&outcome, flags.format)
}
