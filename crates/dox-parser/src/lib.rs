//! # dox-parser
//!
//! Heuristic parsing of C and C++ declaration signatures, for generating
//! documentation comment skeletons.
//!
//! The parser does not need a compiler front end or even a complete
//! translation unit. Starting from the lines that follow a documentation
//! trigger it:
//!
//! 1. assembles one logical line up to the end of the declaration,
//! 2. peels off leading `template<...>` clauses,
//! 3. tokenizes the rest (comments dropped),
//! 4. builds and compacts a parenthesis tree,
//! 5. resolves the subject (name + return type) and parameters.
//!
//! Anything it cannot make sense of is a [`ParserError`], which callers treat
//! as "no comment to generate".
//!
//! ```
//! use dox_parser::{ParseOptions, parse_expression};
//!
//! let declaration =
//!     parse_expression("int (*idputs(int a, int b))(char *)", &ParseOptions::default())?;
//! assert_eq!(declaration.name(), Some("idputs"));
//! assert_eq!(declaration.return_type(), "int(*)(char*)");
//! # Ok::<(), dox_parser::ParserError>(())
//! ```

pub mod casing;
pub mod declaration;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod logical_line;
pub mod pipeline;
pub mod resolver;
pub mod smart_text;
pub mod template;
pub mod token;
pub mod tree;

pub use casing::Casing;
pub use declaration::{Argument, Declaration, DeclaratorShape};
pub use error::ParserError;
pub use keywords::Keywords;
pub use logical_line::{DEFAULT_MAX_LINES, logical_line};
pub use pipeline::{
    ParseOptions, expression_after_line, parse_after_line, parse_expression, parse_lines,
};
pub use smart_text::{SmartTemplates, smart_text};
pub use template::extract_templates;
pub use token::{Token, TokenKind};
pub use tree::{Node, ParseTree};
