use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Parse an already assembled declaration expression.
    Expr(ExprArgs),
    /// Parse the declaration following a line of a source file.
    File(FileArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExprArgs {
    /// Declaration text, e.g. "int (*idputs(int a, int b))(char *)".
    pub expression: String,
}

#[derive(Clone, Debug, Args)]
pub struct FileArgs {
    /// C or C++ source file.
    pub path: PathBuf,

    /// 1-based line of the documentation trigger; parsing starts on the
    /// line after it.
    #[arg(short = 'n', long)]
    pub line: usize,
}
