//! Resolved declaration model.

use serde::{Deserialize, Serialize};

use crate::casing::Casing;
use crate::token::TokenKind;
use crate::tree::{Node, ParseTree};

/// Which resolution strategy produced an [`Argument`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaratorShape {
    /// `int *foo`, `Foo(int a)`
    #[default]
    Simple,
    /// A lone `...` parameter.
    Variadic,
    /// `auto foo() -> int`
    TrailingReturn,
    /// `int (*foo)(char)`, `int (*(*foo())(int))(double)`
    FunctionPointer,
    /// `int (*table)[]`
    ArrayPointer,
    /// `operator struct foo*()`
    ConversionOperator,
}

/// One declared entity: a return/name pair or a parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    /// Absent for anonymous parameters.
    pub name: Option<String>,
    /// What remains once the name and strip keywords are gone.
    pub ty: ParseTree,
    pub shape: DeclaratorShape,
}

impl Argument {
    #[must_use]
    pub fn new(name: Option<String>, ty: ParseTree, shape: DeclaratorShape) -> Self {
        Self { name, ty, shape }
    }

    /// The rendered type, e.g. `const int* const`.
    #[must_use]
    pub fn type_text(&self) -> String {
        self.ty.to_string()
    }
}

/// The result of resolving one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    /// Declared name and return or declared type. The type is empty for
    /// constructors and destructors.
    pub subject: Argument,
    pub parameters: Vec<Argument>,
    pub template_parameters: Vec<String>,
}

impl Declaration {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.subject.name.as_deref()
    }

    /// Last `::` segment of the name (`~Foo` for `ns::Foo::~Foo`).
    #[must_use]
    pub fn unqualified_name(&self) -> Option<&str> {
        self.name().map(unqualified)
    }

    #[must_use]
    pub fn return_type(&self) -> String {
        self.subject.type_text()
    }

    #[must_use]
    pub fn is_destructor(&self) -> bool {
        self.unqualified_name().is_some_and(|name| name.starts_with('~'))
    }

    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.subject.ty.is_empty() && !self.is_destructor() && !self.is_operator()
    }

    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.name().is_some_and(|name| name.contains("operator"))
    }

    /// The declaration returns a function pointer.
    #[must_use]
    pub fn is_function_pointer(&self) -> bool {
        self.subject.shape == DeclaratorShape::FunctionPointer
    }

    #[must_use]
    pub fn has_trailing_return(&self) -> bool {
        self.subject.shape == DeclaratorShape::TrailingReturn
    }

    /// Takes a C `...` or a parameter pack.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.parameters.iter().any(|param| {
            param.shape == DeclaratorShape::Variadic
                || param.ty.tokens().any(|token| token.is(TokenKind::Ellipsis))
        })
    }

    /// Casing of the unqualified name, without a destructor's `~`.
    #[must_use]
    pub fn casing(&self) -> Casing {
        self.unqualified_name()
            .map_or(Casing::Uncertain, |name| Casing::classify(name.trim_start_matches('~')))
    }

    /// What a `@return` section should list.
    ///
    /// A `bool` return yields `true`/`false` (plus `null` when it is a
    /// pointer), a plain `void` yields nothing, anything else yields the
    /// rendered type.
    #[must_use]
    pub fn return_values(&self) -> Vec<String> {
        let ty = &self.subject.ty;
        if ty.is_empty() {
            return Vec::new();
        }

        let is_pointer = contains_pointer(ty);
        if self.subject.shape != DeclaratorShape::FunctionPointer
            && ty.tokens().any(|token| token.is_symbol("bool"))
        {
            let mut values = vec!["true".to_string(), "false".to_string()];
            if is_pointer {
                values.push("null".to_string());
            }
            return values;
        }

        if ty.tokens().any(|token| token.is_symbol("void")) && !is_pointer {
            return Vec::new();
        }
        vec![ty.to_string()]
    }
}

fn unqualified(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}

fn contains_pointer(tree: &ParseTree) -> bool {
    tree.nodes.iter().any(|node| match node {
        Node::Token(token) => token.is(TokenKind::Pointer),
        Node::Tree(inner) => contains_pointer(inner),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;
    use pretty_assertions::assert_eq;

    fn symbols(texts: &[&str]) -> ParseTree {
        ParseTree::from_nodes(
            texts
                .iter()
                .map(|text| match *text {
                    "*" => Node::Token(Token::new(TokenKind::Pointer, "*")),
                    _ => Node::Token(Token::new(TokenKind::Symbol, *text)),
                })
                .collect(),
        )
    }

    fn declaration(name: &str, ty: &[&str]) -> Declaration {
        Declaration {
            subject: Argument::new(Some(name.to_string()), symbols(ty), DeclaratorShape::Simple),
            ..Declaration::default()
        }
    }

    #[test]
    fn return_values_by_type() {
        assert_eq!(declaration("f", &["bool"]).return_values(), vec!["true", "false"]);
        assert_eq!(
            declaration("f", &["bool", "*"]).return_values(),
            vec!["true", "false", "null"]
        );
        assert!(declaration("f", &["void"]).return_values().is_empty());
        assert_eq!(declaration("f", &["void", "*"]).return_values(), vec!["void*"]);
        assert_eq!(declaration("f", &["const", "int"]).return_values(), vec!["const int"]);
        assert!(declaration("Foo", &[]).return_values().is_empty());
    }

    #[test]
    fn special_member_flags() {
        let ctor = declaration("Foo", &[]);
        assert!(ctor.is_constructor());
        assert!(!ctor.is_destructor());

        let dtor = declaration("ns::Foo::~Foo", &[]);
        assert!(dtor.is_destructor());
        assert!(!dtor.is_constructor());
        assert_eq!(dtor.unqualified_name(), Some("~Foo"));
        assert_eq!(dtor.casing(), Casing::Pascal);

        let op = declaration("operator+", &["Foo"]);
        assert!(op.is_operator());
        assert!(!op.is_constructor());

        let method = declaration("MyClass::getValue", &["int"]);
        assert!(!method.is_constructor());
        assert_eq!(method.casing(), Casing::Camel);
    }

    #[test]
    fn variadic_from_pack_or_ellipsis() {
        let mut decl = declaration("f", &["void"]);
        assert!(!decl.is_variadic());
        decl.parameters.push(Argument::new(
            Some("...".to_string()),
            ParseTree::new(),
            DeclaratorShape::Variadic,
        ));
        assert!(decl.is_variadic());

        let mut pack = declaration("f", &["void"]);
        pack.parameters.push(Argument::new(
            Some("args".to_string()),
            ParseTree::from_nodes(vec![
                Node::Token(Token::new(TokenKind::Symbol, "Args")),
                Node::Token(Token::new(TokenKind::Ellipsis, "...")),
            ]),
            DeclaratorShape::Simple,
        ));
        assert!(pack.is_variadic());
    }
}
