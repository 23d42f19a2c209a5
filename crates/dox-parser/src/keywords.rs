//! Keyword tables consulted by the declaration resolver.

/// Specifiers dropped from every rendered type.
pub const STRIP_KEYWORDS: &[&str] = &[
    "final", "static", "inline", "friend", "virtual", "extern", "explicit", "class", "override",
    "typename",
];

/// Keywords kept in the rendered type but never taken as a declarator name.
pub const TYPE_KEYWORDS: &[&str] = &[
    "const",
    "constexpr",
    "struct",
    "enum",
    "union",
    "volatile",
    "restrict",
    "__restrict",
    "mutable",
];

/// The keyword lists in effect for one parse.
///
/// Projects can register their own macros (`API_EXPORT`, `FORCE_INLINE`) as
/// strip keywords so they do not get mistaken for the return type or name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    strip: Vec<String>,
    types: Vec<String>,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            strip: STRIP_KEYWORDS.iter().map(ToString::to_string).collect(),
            types: TYPE_KEYWORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Keywords {
    /// Default tables extended with extra strip and type keywords.
    #[must_use]
    pub fn with_extra<S, T>(strip: S, types: T) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let mut keywords = Self::default();
        keywords.strip.extend(strip.into_iter().map(Into::into));
        keywords.types.extend(types.into_iter().map(Into::into));
        keywords
    }

    /// Removed from rendered types.
    #[must_use]
    pub fn is_strip(&self, word: &str) -> bool {
        self.strip.iter().any(|k| k == word)
    }

    /// Either kind of keyword: never a declarator name.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.is_strip(word) || self.types.iter().any(|k| k == word)
    }
}
