//! Single-line lexer for C/C++ declaration expressions.
//!
//! The vocabulary is an ordered table of recognizers. Each recognizer looks
//! at the start of the remaining input and reports how many bytes it would
//! consume. The recognizers are written to be mutually exclusive, so at every
//! position exactly one of them must match: zero matches is
//! [`ParserError::UnrecognizedToken`], more than one is
//! [`ParserError::AmbiguousToken`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParserError;
use crate::token::{Token, TokenKind};

type Recognizer = fn(&str) -> Option<usize>;

const VOCABULARY: &[(TokenKind, Recognizer)] = &[
    (TokenKind::CommentBlock, match_comment_block),
    (TokenKind::CommentLine, match_comment_line),
    (TokenKind::Attribute, match_attribute),
    (TokenKind::MemberPointer, match_member_pointer),
    (TokenKind::Symbol, match_symbol),
    (TokenKind::ArraySubscript, match_array_subscript),
    (TokenKind::CurlyBlock, match_curly_block),
    (TokenKind::Ellipsis, match_ellipsis),
    (TokenKind::Arrow, match_arrow),
    (TokenKind::Pointer, match_pointer),
    (TokenKind::Reference, match_reference),
    (TokenKind::Comma, match_comma),
    (TokenKind::Assignment, match_assignment),
    (TokenKind::OpenParen, match_open_paren),
    (TokenKind::CloseParen, match_close_paren),
];

// ── Patterns ───────────────────────────────────────────────────────

static ARRAY_SUBSCRIPT: LazyLock<Regex> = LazyLock::new(|| compile(r"^\[[^\[]*?\]"));

static CXX11_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\[\[[^\[]*?\]\]"));

static ATTRIBUTE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:noexcept|throw|alignas)\b"));

static ACCESS_SPECIFIER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:public|protected|private)\s*:"));

static DECLTYPE: LazyLock<Regex> = LazyLock::new(|| compile(r"^decltype\b"));

static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"^(?:u8|u|U|L)?"(?:[^"\\]|\\.)*""#));

static CHAR_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:u8|u|U|L)?'(?:[^'\\]|\\.)*'"));

static NUMBER_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[-+]?\.?[0-9](?:[eEpP][-+]|[A-Za-z0-9_.'])*"));

static FUNDAMENTAL_RUN: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?:unsigned|signed|short|long|int|char|double)\b(?:\s+(?:unsigned|signed|short|long|int|char|double)\b)+",
    )
});

static SYMBOL_PART: LazyLock<Regex> = LazyLock::new(|| {
    const OPERATORS: &str = concat!(
        r#"""\s*_[A-Za-z0-9_]+"#,
        r"|(?:new|delete)\b(?:\s*\[\s*\])?",
        r"|>>=|<<=|->\*|\+=|-=|\*=|/=|%=|\^=|&=|\|=|<=>",
        r"|<<|>>|==|!=|<=|>=|->|&&|\|\||\+\+|--",
        r"|\(\s*\)|\[\s*\]",
        r"|[-+*/%^&|~!=<>,]",
    );
    compile(&format!(
        r"^(?:(?:[A-Za-z0-9_~]*::)*operator\b(?:\s*(?:{OPERATORS}))?|[A-Za-z0-9_:~]+)"
    ))
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("lexer pattern is a valid regex")
}

// ── Public API ─────────────────────────────────────────────────────

/// Split a single-line expression into tokens.
///
/// Comment tokens are kept; [`tokenize_code`] is the variant the pipeline uses.
///
/// # Errors
///
/// Returns [`ParserError::UnrecognizedToken`] when no recognizer matches the
/// remaining input and [`ParserError::AmbiguousToken`] when several do.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParserError> {
    let tokens = scan(expression, VOCABULARY)?;
    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Tokenize and drop comment tokens.
///
/// # Errors
///
/// Same as [`tokenize`].
pub fn tokenize_code(expression: &str) -> Result<Vec<Token>, ParserError> {
    let mut tokens = tokenize(expression)?;
    tokens.retain(|token| !token.kind.is_comment());
    Ok(tokens)
}

/// Repeatedly apply every recognizer of `vocabulary` to the rest of
/// `expression`; exactly one must produce a non-empty match.
fn scan(
    expression: &str,
    vocabulary: &[(TokenKind, Recognizer)],
) -> Result<Vec<Token>, ParserError> {
    let mut tokens = Vec::new();
    let mut rest = expression.trim();

    while !rest.is_empty() {
        let mut matches = vocabulary
            .iter()
            .filter_map(|(kind, recognize)| recognize(rest).map(|len| (*kind, len)))
            .filter(|&(_, len)| len > 0);

        let Some((kind, len)) = matches.next() else {
            return Err(ParserError::UnrecognizedToken {
                remaining: rest.to_string(),
            });
        };
        let others: Vec<TokenKind> = matches.map(|(kind, _)| kind).collect();
        if !others.is_empty() {
            let mut kinds = vec![kind];
            kinds.extend(others);
            return Err(ParserError::AmbiguousToken {
                kinds,
                remaining: rest.to_string(),
            });
        }

        tokens.push(Token::new(kind, &rest[..len]));
        rest = rest[len..].trim_start();
    }

    Ok(tokens)
}

// ── Recognizers ────────────────────────────────────────────────────

fn fixed(input: &str, pattern: &str) -> Option<usize> {
    input.starts_with(pattern).then_some(pattern.len())
}

fn match_ellipsis(input: &str) -> Option<usize> {
    fixed(input, "...")
}

fn match_arrow(input: &str) -> Option<usize> {
    fixed(input, "->")
}

fn match_pointer(input: &str) -> Option<usize> {
    fixed(input, "*")
}

fn match_reference(input: &str) -> Option<usize> {
    fixed(input, "&")
}

fn match_comma(input: &str) -> Option<usize> {
    fixed(input, ",")
}

fn match_assignment(input: &str) -> Option<usize> {
    fixed(input, "=")
}

fn match_open_paren(input: &str) -> Option<usize> {
    fixed(input, "(")
}

fn match_close_paren(input: &str) -> Option<usize> {
    fixed(input, ")")
}

fn match_comment_block(input: &str) -> Option<usize> {
    if !input.starts_with("/*") {
        return None;
    }
    Some(input[2..].find("*/").map_or(input.len(), |end| end + 4))
}

fn match_comment_line(input: &str) -> Option<usize> {
    if !input.starts_with("//") {
        return None;
    }
    Some(input.find('\n').map_or(input.len(), |end| end + 1))
}

fn match_attribute(input: &str) -> Option<usize> {
    if let Some(m) = CXX11_ATTRIBUTE.find(input) {
        return Some(m.end());
    }

    let keyword = ATTRIBUTE_KEYWORD.find(input)?.end();
    let rest = &input[keyword..];
    let trimmed = rest.trim_start();
    if trimmed.starts_with('(') {
        let args = balanced(trimmed, '(', ')')?;
        return Some(keyword + (rest.len() - trimmed.len()) + args);
    }
    Some(keyword)
}

/// A scope run ending in `::` followed by `*`, template arguments included
/// (`Foo<T>::*`).
fn match_member_pointer(input: &str) -> Option<usize> {
    if !input.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        return None;
    }
    let scope = input[..symbol_run(input)].trim_end();
    if !scope.ends_with("::") {
        return None;
    }
    let rest = &input[scope.len()..];
    let gap = rest.len() - rest.trim_start().len();
    rest[gap..].starts_with('*').then_some(scope.len() + gap + 1)
}

fn match_array_subscript(input: &str) -> Option<usize> {
    ARRAY_SUBSCRIPT.find(input).map(|m| m.end())
}

fn match_curly_block(input: &str) -> Option<usize> {
    input
        .starts_with('{')
        .then(|| balanced(input, '{', '}'))
        .flatten()
}

fn match_symbol(input: &str) -> Option<usize> {
    if ACCESS_SPECIFIER.is_match(input) || ATTRIBUTE_KEYWORD.is_match(input) {
        return None;
    }

    if let Some(m) = DECLTYPE.find(input) {
        let rest = &input[m.end()..];
        let trimmed = rest.trim_start();
        if !trimmed.starts_with('(') {
            return None;
        }
        let args = balanced(trimmed, '(', ')')?;
        return Some(m.end() + (rest.len() - trimmed.len()) + args);
    }

    for literal in [&*STRING_LITERAL, &*CHAR_LITERAL, &*NUMBER_LITERAL, &*FUNDAMENTAL_RUN] {
        if let Some(m) = literal.find(input) {
            return Some(m.end());
        }
    }

    let end = symbol_run(input);
    let symbol = input[..end].trim_end();
    if symbol.is_empty() {
        return None;
    }
    if symbol.ends_with("::") && input[end..].trim_start().starts_with('*') {
        return None;
    }
    Some(symbol.len())
}

/// Byte length of the scoped name at the start of `input`, extended over
/// `<...>` argument lists. May include trailing whitespace.
fn symbol_run(input: &str) -> usize {
    let mut end = 0;
    loop {
        let rest = &input[end..];
        if end > 0 {
            let trimmed = rest.trim_start();
            if trimmed.starts_with('<') {
                if let Some(args) = balanced(trimmed, '<', '>') {
                    end += (rest.len() - trimmed.len()) + args;
                    continue;
                }
                break;
            }
        }
        match SYMBOL_PART.find(rest) {
            Some(m) if m.end() > 0 => end += m.end(),
            _ => break,
        }
    }
    end
}

/// Length of the balanced `open ... close` run at the start of `input`.
fn balanced(input: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (index, c) in input.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(index + c.len_utf8());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(expression: &str) -> Vec<TokenKind> {
        tokenize(expression)
            .expect("tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn texts(expression: &str) -> Vec<String> {
        tokenize_code(expression)
            .expect("tokenize")
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn simple_function_declaration() {
        use TokenKind::{CloseParen, Comma, OpenParen, Symbol};
        assert_eq!(
            kinds("void foo(int a, int b)"),
            vec![Symbol, Symbol, OpenParen, Symbol, Symbol, Comma, Symbol, Symbol, CloseParen]
        );
    }

    #[test]
    fn whitespace_between_tokens_is_trimmed() {
        assert_eq!(texts("  int   *  foo  "), vec!["int", "*", "foo"]);
    }

    #[rstest]
    #[case("operator+", "operator+")]
    #[case("operator ->*", "operator ->*")]
    #[case("operator()", "operator()")]
    #[case("operator[ ]", "operator[ ]")]
    #[case("operator new[]", "operator new[]")]
    #[case("operator delete [ ]", "operator delete [ ]")]
    #[case("operator\"\"_My_C00l_Conversion", "operator\"\"_My_C00l_Conversion")]
    #[case("operator ,", "operator ,")]
    #[case("operator<=>", "operator<=>")]
    #[case("Foo::operator=", "Foo::operator=")]
    fn operator_names_are_single_symbols(#[case] input: &str, #[case] expected: &str) {
        let tokens = tokenize(&format!("{input}(int a)")).expect("tokenize");
        assert_eq!(tokens[0], Token::new(TokenKind::Symbol, expected));
        assert_eq!(tokens[1].kind, TokenKind::OpenParen);
    }

    #[test]
    fn conversion_operator_is_bare_symbol() {
        assert_eq!(texts("operator struct foo*()"), vec!["operator", "struct", "foo", "*", "(", ")"]);
    }

    #[test]
    fn identifiers_containing_operator_are_plain_symbols() {
        assert_eq!(texts("int my_operator, operators"), vec!["int", "my_operator", ",", "operators"]);
    }

    #[rstest]
    #[case("std::vector<int> v", &["std::vector<int>", "v"])]
    #[case("std::map<std::string, std::vector<int>> m", &["std::map<std::string, std::vector<int>>", "m"])]
    #[case("std::vector<int>::iterator it", &["std::vector<int>::iterator", "it"])]
    #[case("foo <int> bar", &["foo <int>", "bar"])]
    fn template_arguments_extend_symbols(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(texts(input), expected);
    }

    #[rstest]
    #[case("decltype(a + b)")]
    #[case("decltype (foo(a, (b)))")]
    fn decltype_is_one_symbol(#[case] input: &str) {
        assert_eq!(tokenize(input).expect("tokenize"), vec![Token::new(TokenKind::Symbol, input)]);
    }

    #[rstest]
    #[case("unsigned long long int x", &["unsigned long long int", "x"])]
    #[case("long unsigned unsigned_foo", &["long unsigned", "unsigned_foo"])]
    #[case("unsigned char *buf", &["unsigned char", "*", "buf"])]
    fn fundamental_runs_respect_word_boundaries(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(texts(input), expected);
    }

    #[rstest]
    #[case("noexcept")]
    #[case("noexcept(true)")]
    #[case("noexcept (sizeof(T) > 4)")]
    #[case("throw()")]
    #[case("alignas(16)")]
    #[case("[[nodiscard]]")]
    #[case("[[deprecated(\"use bar\")]]")]
    fn attributes(#[case] input: &str) {
        assert_eq!(tokenize(input).expect("tokenize"), vec![Token::new(TokenKind::Attribute, input)]);
    }

    #[test]
    fn attribute_keyword_prefix_is_still_a_symbol() {
        assert_eq!(kinds("thrower"), vec![TokenKind::Symbol]);
        assert_eq!(kinds("noexcept_flag"), vec![TokenKind::Symbol]);
    }

    #[rstest]
    #[case("'a'")]
    #[case("'\\''")]
    #[case("\"bar\"")]
    #[case("u8\"utf\"")]
    #[case("L'w'")]
    #[case("1e10")]
    #[case("-1")]
    #[case("+.5f")]
    #[case("0x1'000'000")]
    #[case("1.5e-3")]
    #[case("0xa.bp10l_deg_test")]
    fn literals_are_symbols(#[case] input: &str) {
        assert_eq!(tokenize(input).expect("tokenize"), vec![Token::new(TokenKind::Symbol, input)]);
    }

    #[rstest]
    #[case("int foo::* p", &["int", "foo::*", "p"])]
    #[case("int foo::bar:: *p", &["int", "foo::bar:: *", "p"])]
    #[case("int Bar<T>::* p", &["int", "Bar<T>::*", "p"])]
    #[case("int ns::Map<K, V>::*p", &["int", "ns::Map<K, V>::*", "p"])]
    fn member_pointers(#[case] input: &str, #[case] expected: &[&str]) {
        let tokens = tokenize(input).expect("tokenize");
        let got: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(got, expected);
        assert_eq!(tokens[1].kind, TokenKind::MemberPointer);
    }

    #[test]
    fn member_pointer_inside_group() {
        assert_eq!(
            texts("void (Foo<T>::*fn)(int)"),
            vec!["void", "(", "Foo<T>::*", "fn", ")", "(", "int", ")"]
        );
    }

    #[test]
    fn templated_scope_before_pointer_is_not_a_symbol() {
        assert_eq!(match_symbol("Foo<T>::*fn"), None);
        assert_eq!(match_member_pointer("Foo<T>::*fn"), Some(9));
        assert_eq!(match_member_pointer("std::vector<int>* p"), None);
    }

    fn match_star(input: &str) -> Option<usize> {
        input.starts_with('*').then_some(1)
    }

    #[test]
    fn overlapping_recognizers_are_ambiguous() {
        let vocabulary: &[(TokenKind, Recognizer)] = &[
            (TokenKind::Symbol, match_symbol),
            (TokenKind::Pointer, match_star),
            (TokenKind::Reference, match_star),
        ];

        assert_eq!(
            scan("a *", vocabulary),
            Err(ParserError::AmbiguousToken {
                kinds: vec![TokenKind::Pointer, TokenKind::Reference],
                remaining: "*".to_string(),
            })
        );
    }

    #[test]
    fn punctuation_tokens() {
        use TokenKind::{Arrow, ArraySubscript, Assignment, Ellipsis, Pointer, Reference, Symbol};
        assert_eq!(
            kinds("int&& *a[3] = ... ->"),
            vec![Symbol, Reference, Reference, Pointer, Symbol, ArraySubscript, Assignment, Ellipsis, Arrow]
        );
    }

    #[test]
    fn curly_block_is_consumed_whole() {
        let tokens = tokenize("int foo() { return {1, 2}; }").expect("tokenize");
        assert_eq!(tokens.last(), Some(&Token::new(TokenKind::CurlyBlock, "{ return {1, 2}; }")));
    }

    #[test]
    fn comments_are_dropped_by_tokenize_code() {
        let expression = "int foo( // the count\n int a /* first */, int b)";
        assert!(kinds(expression).contains(&TokenKind::CommentLine));
        assert!(kinds(expression).contains(&TokenKind::CommentBlock));
        assert_eq!(texts(expression), vec!["int", "foo", "(", "int", "a", ",", "int", "b", ")"]);
    }

    #[test]
    fn access_specifier_is_unrecognized() {
        assert!(matches!(
            tokenize("public: void foo()"),
            Err(ParserError::UnrecognizedToken { remaining }) if remaining.starts_with("public:")
        ));
    }

    #[test]
    fn stray_character_is_unrecognized() {
        assert_eq!(
            tokenize("int a ? b"),
            Err(ParserError::UnrecognizedToken { remaining: "? b".to_string() })
        );
    }

    #[test]
    fn empty_expression_yields_no_tokens() {
        assert_eq!(tokenize("   "), Ok(Vec::new()));
    }
}
