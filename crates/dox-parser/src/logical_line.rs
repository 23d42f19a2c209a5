//! Assembles the raw source lines after a documentation trigger into one
//! logical expression.

use crate::error::ParserError;

/// How many source lines are read before giving up.
pub const DEFAULT_MAX_LINES: usize = 20;

/// Join lines until the declaration ends.
///
/// A declaration ends at the first `{`, `;` or bare `:` (not part of `::`)
/// outside parentheses; that character and the rest of its line are
/// dropped. A lone `*` first line and a leading `*/` are editor artifacts of
/// the comment that was just opened and are skipped, as are blank lines
/// before any text. When `lines` runs out first, whatever was collected is
/// the result.
///
/// # Errors
///
/// [`ParserError::BoundedScanExceeded`] when `max_lines` lines pass without
/// an end, [`ParserError::EmptyInput`] when no text was found at all.
pub fn logical_line<I, S>(lines: I, max_lines: usize) -> Result<String, ParserError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    let mut text = String::new();
    let mut depth = 0i32;

    for index in 0..max_lines {
        let Some(raw) = lines.next() else {
            return finish(text);
        };
        let mut line = raw.as_ref().trim();

        if index == 0 && line == "*" {
            continue;
        }
        if text.is_empty() {
            if let Some(rest) = line.strip_prefix("*/") {
                line = rest.trim_start();
            }
            if line.is_empty() {
                continue;
            }
        }

        if let Some(end) = terminator(line, &mut depth) {
            append(&mut text, &line[..end]);
            return finish(text);
        }
        append(&mut text, line);
    }

    if lines.next().is_none() {
        return finish(text);
    }
    Err(ParserError::BoundedScanExceeded { max_lines })
}

fn append(text: &mut String, line: &str) {
    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str(line);
}

fn finish(text: String) -> Result<String, ParserError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParserError::EmptyInput);
    }
    Ok(trimmed.to_string())
}

/// Byte offset of the first unnested `{`, `;` or bare `:` in `line`.
/// `depth` carries the parenthesis nesting across lines.
fn terminator(line: &str, depth: &mut i32) -> Option<usize> {
    let bytes = line.as_bytes();
    for (index, &byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => *depth += 1,
            b')' => *depth -= 1,
            b'{' | b';' if *depth == 0 => return Some(index),
            b':' if *depth == 0 => {
                let previous = index.checked_sub(1).and_then(|i| bytes.get(i));
                let next = bytes.get(index + 1);
                if previous != Some(&b':') && next != Some(&b':') {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}
