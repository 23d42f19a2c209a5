use serde::{Deserialize, Serialize};

/// The kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Symbol,
    Pointer,
    Reference,
    MemberPointer,
    ArraySubscript,
    OpenParen,
    CloseParen,
    CurlyBlock,
    Assignment,
    Comma,
    Arrow,
    Ellipsis,
    Attribute,
    CommentBlock,
    CommentLine,
}

impl TokenKind {
    /// Comments are dropped right after lexing and never reach the tree builder.
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::CommentBlock | Self::CommentLine)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Symbol => "symbol",
            Self::Pointer => "pointer",
            Self::Reference => "reference",
            Self::MemberPointer => "member_pointer",
            Self::ArraySubscript => "array_subscript",
            Self::OpenParen => "open_paren",
            Self::CloseParen => "close_paren",
            Self::CurlyBlock => "curly_block",
            Self::Assignment => "assignment",
            Self::Comma => "comma",
            Self::Arrow => "arrow",
            Self::Ellipsis => "ellipsis",
            Self::Attribute => "attribute",
            Self::CommentBlock => "comment_block",
            Self::CommentLine => "comment_line",
        };
        write!(f, "{s}")
    }
}

/// A single lexed token: its kind and the raw text it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True for a `Symbol` token whose text is exactly `text`.
    #[must_use]
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_kind_serializes_in_snake_case() {
        for kind in [
            TokenKind::Symbol,
            TokenKind::MemberPointer,
            TokenKind::ArraySubscript,
            TokenKind::CommentLine,
        ] {
            let value = serde_json::to_value(kind).expect("serialize token kind");
            assert_eq!(value.as_str(), Some(kind.to_string().as_str()));
        }
    }

    #[test]
    fn only_comment_kinds_are_comments() {
        assert!(TokenKind::CommentBlock.is_comment());
        assert!(TokenKind::CommentLine.is_comment());
        assert!(!TokenKind::Symbol.is_comment());
        assert!(!TokenKind::Attribute.is_comment());
    }

    #[test]
    fn is_symbol_checks_kind_and_text() {
        assert!(Token::new(TokenKind::Symbol, "auto").is_symbol("auto"));
        assert!(!Token::new(TokenKind::Attribute, "auto").is_symbol("auto"));
        assert!(!Token::new(TokenKind::Symbol, "autos").is_symbol("auto"));
    }
}
