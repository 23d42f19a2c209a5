//! String-level extraction of leading `template<...>` clauses.
//!
//! Runs before tokenization: template parameter lists contain `<`, `>` and
//! default values the lexer has no business with.

/// A `template<...>` clause found at the start of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateClause<'a> {
    /// The whole `template<...>` span.
    pub clause: &'a str,
    /// The expression after the clause, trimmed.
    pub rest: &'a str,
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
}

/// Split a leading `template<...>` clause off `expression`.
///
/// Returns `None` when the expression does not start with `template`
/// followed (after optional whitespace) by a balanced `<...>`.
#[must_use]
pub fn extract_template(expression: &str) -> Option<TemplateClause<'_>> {
    let after_keyword = expression.strip_prefix("template")?;
    let open = after_keyword.len() - after_keyword.trim_start().len();
    if !after_keyword[open..].starts_with('<') {
        return None;
    }

    let start = "template".len() + open;
    let end = start + matching_angle(&expression[start..])?;
    let clause = &expression[..end];
    let parameters = template_parameters(&expression[start + 1..end - 1]);
    tracing::trace!(clause, ?parameters, "extracted template clause");

    Some(TemplateClause {
        clause,
        rest: expression[end..].trim(),
        parameters,
    })
}

/// Peel off every leading template clause, collecting all parameter names.
///
/// Nested class templates (`template<typename T> template<typename S>`) each
/// contribute their own list. Returns the names and the remaining expression.
#[must_use]
pub fn extract_templates(expression: &str) -> (Vec<String>, &str) {
    let mut names = Vec::new();
    let mut rest = expression.trim();
    while let Some(clause) = extract_template(rest) {
        names.extend(clause.parameters);
        rest = clause.rest;
    }
    (names, rest)
}

/// Byte offset just past the `>` that closes the `<` at the start of `input`.
fn matching_angle(input: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, c) in input.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Names from the inside of a `<...>` parameter list.
fn template_parameters(list: &str) -> Vec<String> {
    split_top_level(list, ',')
        .into_iter()
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .map(parameter_name)
        .collect()
}

fn parameter_name(param: &str) -> String {
    let declaration = split_top_level(param, '=')
        .first()
        .copied()
        .unwrap_or(param)
        .trim();

    match last_word(declaration) {
        Some(name) if declaration != param && !is_introducer(name) => name.to_string(),
        _ => last_word(param).unwrap_or(param).to_string(),
    }
}

fn is_introducer(word: &str) -> bool {
    matches!(word, "typename" | "class")
}

/// The text after the last top-level space or `.` in `param`.
fn last_word(param: &str) -> Option<&str> {
    let param = param.trim();
    let mut start = 0;
    let mut depth = Depth::default();
    for (index, c) in param.char_indices() {
        if depth.track(c) && (c.is_whitespace() || c == '.') {
            start = index + 1;
        }
    }
    let word = param[start..].trim();
    (!word.is_empty()).then_some(word)
}

/// Split on `separator` where it is not nested in `()`, `<>` or `{}`.
fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = Depth::default();
    for (index, c) in input.char_indices() {
        if depth.track(c) && c == separator {
            parts.push(&input[start..index]);
            start = index + c.len_utf8();
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Independent nesting counters for the three bracket pairs.
#[derive(Debug, Default)]
struct Depth {
    paren: i32,
    angle: i32,
    curly: i32,
}

impl Depth {
    /// Account for `c` and report whether the position is at top level.
    const fn track(&mut self, c: char) -> bool {
        match c {
            '(' => self.paren += 1,
            ')' => self.paren -= 1,
            '<' => self.angle += 1,
            '>' => self.angle -= 1,
            '{' => self.curly += 1,
            '}' => self.curly -= 1,
            _ => return self.paren == 0 && self.angle == 0 && self.curly == 0,
        }
        false
    }
}
