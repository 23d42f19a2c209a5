//! Declaration resolution over a compacted parse tree.
//!
//! Each argument (the subject and every parameter) goes through the same
//! strategy cascade: variadic-only, trailing return, grouped declarator
//! (function pointer or pointer to array), conversion operator, simple.
//! Strategies work on their own copy of the tree.

use crate::declaration::{Argument, Declaration, DeclaratorShape};
use crate::error::ParserError;
use crate::keywords::Keywords;
use crate::token::{Token, TokenKind};
use crate::tree::{Node, ParseTree};

/// Resolve a compacted tree into its subject and parameters.
///
/// Template parameters are not part of the tree; the returned declaration
/// has none.
///
/// # Errors
///
/// Any of the resolver variants of [`ParserError`]: a subject without an
/// argument list, a trailing return without `auto`, an ambiguous declarator
/// or a constructor/destructor candidate that is not a single symbol.
pub fn resolve(tree: &ParseTree, keywords: &Keywords) -> Result<Declaration, ParserError> {
    let parameter_trees = argument_list(tree)?;

    let mut subject = resolve_argument(tree, keywords)?;
    if subject.name.is_none() {
        subject = promote_special_member(subject)?;
    }

    let mut parameters = parameter_trees
        .iter()
        .map(|param| resolve_argument(param, keywords))
        .collect::<Result<Vec<_>, _>>()?;
    if is_void_list(&parameters) {
        parameters.clear();
    }

    Ok(Declaration {
        subject,
        parameters,
        template_parameters: Vec::new(),
    })
}

/// Split one declarator into its name and type.
///
/// # Errors
///
/// [`ParserError::TrailingReturnWithoutAuto`] and
/// [`ParserError::TooManySymbols`].
pub fn resolve_argument(tree: &ParseTree, keywords: &Keywords) -> Result<Argument, ParserError> {
    let tree = remove_unused(tree);

    if matches!(tree.nodes.as_slice(), [node] if node.is_token(TokenKind::Ellipsis)) {
        return Ok(Argument::new(
            Some("...".to_string()),
            ParseTree::new(),
            DeclaratorShape::Variadic,
        ));
    }

    if let Some(arrow) = tree.position_of(TokenKind::Arrow) {
        return from_trailing_return(&tree, arrow, keywords);
    }

    if let Some(shape) = grouped_shape(&tree.nodes) {
        return Ok(from_grouped_declarator(tree, shape, keywords));
    }

    if let Some(argument) = from_conversion_operator(&tree, keywords) {
        return Ok(argument);
    }

    from_simple(&tree, keywords)
}

/// The parameter trees of the declaration's argument list, split on
/// top-level commas.
///
/// # Errors
///
/// [`ParserError::MissingArgumentList`] when there is no group to take the
/// parameters from.
pub fn argument_list(tree: &ParseTree) -> Result<Vec<ParseTree>, ParserError> {
    let tree = remove_unused(tree);
    let path = grouped_path(&tree);
    let cursor = tree.descend(&path).unwrap_or(&tree);
    let list = cursor.subtrees().next().ok_or(ParserError::MissingArgumentList)?;

    let mut params = Vec::new();
    let mut current = ParseTree::new();
    for node in &list.nodes {
        if node.is_token(TokenKind::Comma) {
            params.push(std::mem::take(&mut current));
        } else {
            current.nodes.push(node.clone());
        }
    }
    if !current.is_empty() {
        params.push(current);
    }
    Ok(params)
}

/// Copy of `tree` cut at the first top-level `=` and without attributes.
fn remove_unused(tree: &ParseTree) -> ParseTree {
    let end = tree.position_of(TokenKind::Assignment).unwrap_or(tree.len());
    ParseTree::from_nodes(
        tree.nodes[..end]
            .iter()
            .filter(|node| !node.is_token(TokenKind::Attribute))
            .cloned()
            .collect(),
    )
}

fn strip_keywords(tree: &mut ParseTree, keywords: &Keywords) {
    tree.nodes
        .retain(|node| !node.as_token().is_some_and(|token| is_strip(token, keywords)));
}

fn is_strip(token: &Token, keywords: &Keywords) -> bool {
    token.is(TokenKind::Symbol) && keywords.is_strip(&token.text)
}

fn is_name_candidate(token: &Token, keywords: &Keywords) -> bool {
    token.is(TokenKind::Symbol) && !keywords.is_keyword(&token.text)
}

fn promote_special_member(mut subject: Argument) -> Result<Argument, ParserError> {
    match subject.ty.nodes.as_slice() {
        [Node::Token(token)] => {
            subject.name = Some(token.text.clone());
            subject.ty = ParseTree::new();
            Ok(subject)
        }
        [Node::Tree(_)] => Err(ParserError::MalformedConstructorDestructor {
            reason: "only a parenthesized group remains".to_string(),
        }),
        nodes => Err(ParserError::MalformedConstructorDestructor {
            reason: format!("expected a single symbol, found {} nodes", nodes.len()),
        }),
    }
}

fn is_void_list(parameters: &[Argument]) -> bool {
    matches!(
        parameters,
        [param] if param.name.is_none()
            && matches!(param.ty.nodes.as_slice(), [Node::Token(token)] if token.is_symbol("void"))
    )
}

// ── Trailing return ────────────────────────────────────────────────

fn from_trailing_return(
    tree: &ParseTree,
    arrow: usize,
    keywords: &Keywords,
) -> Result<Argument, ParserError> {
    let head_end = tree.first_subtree_index().unwrap_or(tree.len());
    let head = &tree.nodes[..head_end];

    let auto = head
        .iter()
        .position(|node| node.as_token().is_some_and(|token| token.is_symbol("auto")))
        .ok_or(ParserError::TrailingReturnWithoutAuto)?;

    let name = head[auto + 1..]
        .iter()
        .filter_map(Node::as_token)
        .find(|token| is_name_candidate(token, keywords))
        .map(|token| token.text.clone());

    let mut ty = ParseTree::from_nodes(tree.nodes[arrow + 1..].to_vec());
    strip_keywords(&mut ty, keywords);
    Ok(Argument::new(name, ty, DeclaratorShape::TrailingReturn))
}

// ── Grouped declarators ────────────────────────────────────────────

/// `(*name)(args)` style nesting: exactly two groups before any trailing
/// return arrow, or one group directly followed by an array subscript.
///
/// Counting groups is a heuristic: a macro call with its own parentheses
/// in front of a plain function also has two groups.
fn grouped_shape(nodes: &[Node]) -> Option<DeclaratorShape> {
    let head = nodes
        .iter()
        .position(|node| node.is_token(TokenKind::Arrow))
        .map_or(nodes, |arrow| &nodes[..arrow]);

    let groups: Vec<usize> = head
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_tree())
        .map(|(index, _)| index)
        .collect();

    match groups.as_slice() {
        [_, _] => Some(DeclaratorShape::FunctionPointer),
        [only]
            if head
                .get(only + 1)
                .is_some_and(|node| node.is_token(TokenKind::ArraySubscript)) =>
        {
            Some(DeclaratorShape::ArrayPointer)
        }
        _ => None,
    }
}

/// Child indices from `tree` down to the innermost declarator group.
fn grouped_path(tree: &ParseTree) -> Vec<usize> {
    let mut path = Vec::new();
    let mut cursor = tree;
    while grouped_shape(&cursor.nodes).is_some() {
        let Some(index) = cursor.first_subtree_index() else {
            break;
        };
        let Some(inner) = cursor.nodes.get(index).and_then(Node::as_tree) else {
            break;
        };
        path.push(index);
        cursor = inner;
    }
    path
}

fn from_grouped_declarator(
    mut tree: ParseTree,
    shape: DeclaratorShape,
    keywords: &Keywords,
) -> Argument {
    let path = grouped_path(&tree);
    let mut name = None;
    if let Some(declarator) = tree.descend_mut(&path) {
        // A function returning a function pointer keeps its own
        // argument list inside the declarator group.
        if let Some(index) = declarator.first_subtree_index() {
            declarator.nodes.remove(index);
        }
        let candidate = declarator
            .nodes
            .iter()
            .position(|node| node.as_token().is_some_and(|t| is_name_candidate(t, keywords)));
        name = candidate.and_then(|index| match declarator.nodes.remove(index) {
            Node::Token(token) => Some(token.text),
            Node::Tree(_) => None,
        });
    }

    strip_keywords(&mut tree, keywords);
    Argument::new(name, tree, shape)
}

// ── Conversion operators ───────────────────────────────────────────

fn is_conversion_operator(token: &Token) -> bool {
    token.is(TokenKind::Symbol) && (token.text == "operator" || token.text.ends_with("::operator"))
}

fn from_conversion_operator(tree: &ParseTree, keywords: &Keywords) -> Option<Argument> {
    let head = &tree.nodes[..tree.first_subtree_index()?];
    let at = head
        .iter()
        .position(|node| node.as_token().is_some_and(is_conversion_operator))?;
    let operator = head[at].as_token()?;

    let mut target = ParseTree::from_nodes(head[at + 1..].to_vec());
    strip_keywords(&mut target, keywords);
    if target.is_empty() {
        return None;
    }

    let name = format!("{} {target}", operator.text);
    Some(Argument::new(
        Some(name),
        target,
        DeclaratorShape::ConversionOperator,
    ))
}

// ── Simple declarators ─────────────────────────────────────────────

/// The first non-keyword symbol belongs to the type, the second is the
/// name, a third is an error. Stops at the first group.
fn from_simple(tree: &ParseTree, keywords: &Keywords) -> Result<Argument, ParserError> {
    let mut name = None;
    let mut ty = ParseTree::new();
    let mut symbols = 0usize;

    for node in &tree.nodes {
        let Node::Token(token) = node else {
            break;
        };
        if is_name_candidate(token, keywords) {
            symbols += 1;
            match symbols {
                1 => {}
                2 => {
                    name = Some(token.text.clone());
                    continue;
                }
                _ => {
                    return Err(ParserError::TooManySymbols {
                        symbol: token.text.clone(),
                    });
                }
            }
        }
        ty.nodes.push(node.clone());
    }

    strip_keywords(&mut ty, keywords);
    Ok(Argument::new(name, ty, DeclaratorShape::Simple))
}
