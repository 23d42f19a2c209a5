//! End-to-end parsing: raw lines → logical line → templates → tokens → tree
//! → declaration.

use crate::declaration::Declaration;
use crate::error::ParserError;
use crate::keywords::Keywords;
use crate::lexer::tokenize_code;
use crate::logical_line::{DEFAULT_MAX_LINES, logical_line};
use crate::resolver::resolve;
use crate::template::extract_templates;
use crate::tree::ParseTree;

/// Knobs for one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Line budget for the logical line extractor.
    pub max_lines: usize,
    pub keywords: Keywords,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            keywords: Keywords::default(),
        }
    }
}

/// Parse an already-assembled declaration expression.
///
/// # Errors
///
/// Whatever stage rejects the expression first. Every rejection means "not
/// a declaration"; there is no partial result.
pub fn parse_expression(expression: &str, options: &ParseOptions) -> Result<Declaration, ParserError> {
    let (template_parameters, rest) = extract_templates(expression);
    if rest.is_empty() {
        return Err(rejected("template", ParserError::EmptyInput));
    }

    let tokens = tokenize_code(rest).map_err(|error| rejected("lexer", error))?;
    let tree = ParseTree::build(&tokens)
        .map_err(|error| rejected("tree", error))?
        .compact();
    let mut declaration =
        resolve(&tree, &options.keywords).map_err(|error| rejected("resolver", error))?;

    declaration.template_parameters = template_parameters;
    tracing::debug!(
        name = declaration.name().unwrap_or_default(),
        parameters = declaration.parameters.len(),
        "resolved declaration"
    );
    Ok(declaration)
}

/// Assemble the logical line from `lines` and parse it.
///
/// `lines` starts at the first line after the documentation trigger.
///
/// # Errors
///
/// [`ParserError::BoundedScanExceeded`] and [`ParserError::EmptyInput`] from
/// line assembly, then anything [`parse_expression`] reports.
pub fn parse_lines<I, S>(lines: I, options: &ParseOptions) -> Result<Declaration, ParserError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let expression =
        logical_line(lines, options.max_lines).map_err(|error| rejected("logical_line", error))?;
    parse_expression(&expression, options)
}

/// Assemble the logical line that follows the 0-based `trigger_line` of
/// `document`, without parsing it.
///
/// # Errors
///
/// [`ParserError::BoundedScanExceeded`] and [`ParserError::EmptyInput`]; a
/// trigger on or past the last line is `EmptyInput`.
pub fn expression_after_line(
    document: &str,
    trigger_line: usize,
    max_lines: usize,
) -> Result<String, ParserError> {
    logical_line(document.lines().skip(trigger_line + 1), max_lines)
        .map_err(|error| rejected("logical_line", error))
}

/// Parse the declaration that follows the 0-based `trigger_line` of
/// `document`.
///
/// # Errors
///
/// See [`expression_after_line`] and [`parse_expression`].
pub fn parse_after_line(
    document: &str,
    trigger_line: usize,
    options: &ParseOptions,
) -> Result<Declaration, ParserError> {
    let expression = expression_after_line(document, trigger_line, options.max_lines)?;
    parse_expression(&expression, options)
}

fn rejected(stage: &'static str, error: ParserError) -> ParserError {
    tracing::debug!(stage, %error, "declaration rejected");
    error
}
