//! Parser error types for dox-parser.

use crate::token::TokenKind;

/// Errors that can occur while turning source text into a [`Declaration`].
///
/// Every variant is a "not a parseable declaration" outcome: callers are
/// expected to skip comment generation rather than surface the error.
///
/// [`Declaration`]: crate::Declaration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    #[error("No end of declaration found within {max_lines} lines")]
    BoundedScanExceeded { max_lines: usize },

    #[error("No declaration text found after the trigger line")]
    EmptyInput,

    #[error("Next token could not be determined: {remaining}")]
    UnrecognizedToken { remaining: String },

    #[error("Multiple token kinds {kinds:?} match: {remaining}")]
    AmbiguousToken {
        kinds: Vec<TokenKind>,
        remaining: String,
    },

    #[error("No match found for an opening parenthesis")]
    UnmatchedOpen,

    #[error("Unmatched closing parenthesis")]
    UnmatchedClose,

    #[error("Argument list not found in declaration")]
    MissingArgumentList,

    #[error("Declaration has a trailing return but no leading `auto`")]
    TrailingReturnWithoutAuto,

    #[error("Too many non-keyword symbols in declarator: unexpected `{symbol}`")]
    TooManySymbols { symbol: String },

    #[error("Malformed constructor/destructor: {reason}")]
    MalformedConstructorDestructor { reason: String },
}
