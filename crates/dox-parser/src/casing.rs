//! Identifier casing classification and word splitting.

use serde::{Deserialize, Serialize};

/// Casing style of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Casing {
    /// `FooBar`
    Pascal,
    /// `fooBar`
    #[serde(rename = "camel")]
    Camel,
    /// `foo_bar`
    #[serde(rename = "snake")]
    Snake,
    /// `FOO_BAR`
    #[serde(rename = "SCREAMING_SNAKE")]
    ScreamingSnake,
    /// `FOOBAR`
    #[serde(rename = "UPPER")]
    Upper,
    /// Mixed case with underscores, single lowercase words, or no letters.
    #[serde(rename = "uncertain")]
    Uncertain,
}

impl Casing {
    /// Classify `identifier`.
    ///
    /// Anything that does not fit one style cleanly is
    /// [`Casing::Uncertain`].
    #[must_use]
    pub fn classify(identifier: &str) -> Self {
        let has_upper = identifier.chars().any(char::is_uppercase);
        let has_lower = identifier.chars().any(char::is_lowercase);

        if identifier.contains('_') {
            return match (has_upper, has_lower) {
                (true, false) => Self::ScreamingSnake,
                (false, true) => Self::Snake,
                _ => Self::Uncertain,
            };
        }

        let Some(first) = identifier.chars().next() else {
            return Self::Uncertain;
        };
        match (has_upper, has_lower) {
            (true, false) => Self::Upper,
            (true, true) if first.is_uppercase() => Self::Pascal,
            (true, true) if first.is_lowercase() => Self::Camel,
            _ => Self::Uncertain,
        }
    }

    /// Split `identifier` into the words this casing implies.
    ///
    /// `UPPER` and uncertain identifiers come back as a single word.
    #[must_use]
    pub fn split(self, identifier: &str) -> Vec<String> {
        match self {
            Self::Pascal | Self::Camel => split_humps(identifier),
            Self::Snake => split_underscores(identifier),
            Self::ScreamingSnake => split_underscores(&identifier.to_lowercase()),
            Self::Upper | Self::Uncertain => vec![identifier.to_string()],
        }
    }

    /// [`Casing::split`] joined with single spaces.
    #[must_use]
    pub fn split_words(self, identifier: &str) -> String {
        self.split(identifier).join(" ")
    }
}

impl std::fmt::Display for Casing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pascal => "Pascal",
            Self::Camel => "camel",
            Self::Snake => "snake",
            Self::ScreamingSnake => "SCREAMING_SNAKE",
            Self::Upper => "UPPER",
            Self::Uncertain => "uncertain",
        };
        write!(f, "{s}")
    }
}

/// Break before every uppercase letter that follows a letter or digit.
fn split_humps(identifier: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;

    for c in identifier.chars() {
        if c.is_uppercase()
            && previous.is_some_and(char::is_alphanumeric)
            && !current.is_empty()
        {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        previous = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn split_underscores(identifier: &str) -> Vec<String> {
    identifier
        .split('_')
        .filter(|word| !word.is_empty())
        .map(ToString::to_string)
        .collect()
}
