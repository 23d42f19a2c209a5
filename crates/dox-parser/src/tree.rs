//! Parenthesis-nesting parse tree.
//!
//! The tree mirrors only `(...)` nesting; every other token is a leaf.
//! Trees are plain owned values: resolution strategies clone the tree they
//! work on, so a failed attempt never disturbs the input of the next one.

use std::fmt;

use crate::error::ParserError;
use crate::token::{Token, TokenKind};

/// A child of a [`ParseTree`]: either a leaf token or a nested `(...)` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Token(Token),
    Tree(ParseTree),
}

impl Node {
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Tree(_) => None,
        }
    }

    #[must_use]
    pub const fn as_tree(&self) -> Option<&ParseTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Token(_) => None,
        }
    }

    /// True if this node is a token of the given kind.
    #[must_use]
    pub fn is_token(&self, kind: TokenKind) -> bool {
        self.as_token().is_some_and(|token| token.is(kind))
    }

    #[must_use]
    pub const fn is_tree(&self) -> bool {
        matches!(self, Self::Tree(_))
    }
}

/// An ordered sequence of nodes. The root stands for the whole expression;
/// every nested tree stands for one matched `(...)` region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseTree {
    pub nodes: Vec<Node>,
}

impl ParseTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[must_use]
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Build a tree from a token slice, nesting on `(` and `)`.
    ///
    /// # Errors
    ///
    /// [`ParserError::UnmatchedClose`] for a `)` at the top level and
    /// [`ParserError::UnmatchedOpen`] when the input ends inside a group.
    pub fn build(tokens: &[Token]) -> Result<Self, ParserError> {
        let (tree, _) = build_level(tokens, 0, false)?;
        Ok(tree)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Flatten redundant nesting: `((foo))(((bar)))` becomes `(foo)(bar)`.
    ///
    /// Every child group that wraps exactly one other group is replaced by the
    /// innermost group of that chain, recursively at every depth. The root
    /// itself is kept as is.
    #[must_use]
    pub fn compact(self) -> Self {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| match node {
                Node::Tree(tree) => Node::Tree(tree.innermost().compact()),
                token @ Node::Token(_) => token,
            })
            .collect();
        Self { nodes }
    }

    fn innermost(mut self) -> Self {
        while matches!(self.nodes.as_slice(), [Node::Tree(_)]) {
            match self.nodes.pop() {
                Some(Node::Tree(inner)) => self = inner,
                _ => break,
            }
        }
        self
    }

    /// Leaf tokens at this level, skipping nested groups.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.nodes.iter().filter_map(Node::as_token)
    }

    /// Nested groups at this level.
    pub fn subtrees(&self) -> impl Iterator<Item = &Self> {
        self.nodes.iter().filter_map(Node::as_tree)
    }

    /// Index of the first nested group at this level.
    #[must_use]
    pub fn first_subtree_index(&self) -> Option<usize> {
        self.nodes.iter().position(Node::is_tree)
    }

    /// Index of the first token of `kind` at this level.
    #[must_use]
    pub fn position_of(&self, kind: TokenKind) -> Option<usize> {
        self.nodes.iter().position(|node| node.is_token(kind))
    }

    /// Follow a path of child indices down to a nested group.
    pub fn descend_mut(&mut self, path: &[usize]) -> Option<&mut Self> {
        let mut cursor = self;
        for &index in path {
            cursor = match cursor.nodes.get_mut(index)? {
                Node::Tree(tree) => tree,
                Node::Token(_) => return None,
            };
        }
        Some(cursor)
    }

    #[must_use]
    pub fn descend(&self, path: &[usize]) -> Option<&Self> {
        let mut cursor = self;
        for &index in path {
            cursor = cursor.nodes.get(index)?.as_tree()?;
        }
        Some(cursor)
    }
}

fn build_level(
    tokens: &[Token],
    mut index: usize,
    nested: bool,
) -> Result<(ParseTree, usize), ParserError> {
    let mut tree = ParseTree::new();

    while let Some(token) = tokens.get(index) {
        index += 1;
        match token.kind {
            TokenKind::OpenParen => {
                let (child, next) = build_level(tokens, index, true)?;
                tree.nodes.push(Node::Tree(child));
                index = next;
            }
            TokenKind::CloseParen if nested => return Ok((tree, index)),
            TokenKind::CloseParen => return Err(ParserError::UnmatchedClose),
            _ => tree.nodes.push(Node::Token(token.clone())),
        }
    }

    if nested {
        return Err(ParserError::UnmatchedOpen);
    }
    Ok((tree, index))
}

impl fmt::Display for ParseTree {
    /// Approximate source text: symbols are separated by one space, pointer
    /// and reference punctuation is glued on, groups render as `(...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in &self.nodes {
            match node {
                Node::Tree(tree) => write!(f, "({tree})")?,
                Node::Token(token) => match token.kind {
                    TokenKind::Symbol | TokenKind::Attribute | TokenKind::MemberPointer => {
                        if first {
                            write!(f, "{}", token.text)?;
                        } else {
                            write!(f, " {}", token.text)?;
                        }
                    }
                    TokenKind::Assignment | TokenKind::Arrow => write!(f, " {}", token.text)?,
                    TokenKind::Pointer
                    | TokenKind::Reference
                    | TokenKind::ArraySubscript
                    | TokenKind::CurlyBlock
                    | TokenKind::Comma
                    | TokenKind::Ellipsis => write!(f, "{}", token.text)?,
                    TokenKind::OpenParen
                    | TokenKind::CloseParen
                    | TokenKind::CommentBlock
                    | TokenKind::CommentLine => continue,
                },
            }
            first = false;
        }
        Ok(())
    }
}
