//! Declaration parser configuration.

use dox_parser::{DEFAULT_MAX_LINES, Keywords, ParseOptions};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Lines read after the trigger before giving up on finding the end of
    /// the declaration.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Project macros dropped from types like `inline` (e.g. `API_EXPORT`).
    #[serde(default)]
    pub extra_strip_keywords: Vec<String>,

    /// Words kept in types but never taken as a name.
    #[serde(default)]
    pub extra_type_keywords: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
            extra_strip_keywords: Vec::new(),
            extra_type_keywords: Vec::new(),
        }
    }
}

impl ParserConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lines == 0 {
            return Err(ConfigError::invalid("parser.max_lines", "must be at least 1"));
        }

        let keywords = self
            .extra_strip_keywords
            .iter()
            .map(|k| ("parser.extra_strip_keywords", k))
            .chain(
                self.extra_type_keywords
                    .iter()
                    .map(|k| ("parser.extra_type_keywords", k)),
            );
        for (field, keyword) in keywords {
            if keyword.is_empty() || keyword.contains(char::is_whitespace) {
                return Err(ConfigError::invalid(
                    field,
                    format!("'{keyword}' is not a single word"),
                ));
            }
        }
        Ok(())
    }

    /// Options for one parse with these settings.
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_lines: self.max_lines,
            keywords: Keywords::with_extra(
                self.extra_strip_keywords.iter().cloned(),
                self.extra_type_keywords.iter().cloned(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = ParserConfig::default();
        assert_eq!(config.max_lines, 20);
        assert!(config.extra_strip_keywords.is_empty());
        assert!(config.extra_type_keywords.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_budget_is_rejected() {
        let config = ParserConfig {
            max_lines: 0,
            ..ParserConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "parser.max_lines"
        ));
    }

    #[test]
    fn multi_word_keyword_is_rejected() {
        let config = ParserConfig {
            extra_type_keywords: vec!["long long".to_string()],
            ..ParserConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "parser.extra_type_keywords"
        ));
    }

    #[test]
    fn extra_keywords_reach_parse_options() {
        let config = ParserConfig {
            max_lines: 5,
            extra_strip_keywords: vec!["API_EXPORT".to_string()],
            extra_type_keywords: vec!["__far".to_string()],
        };
        let options = config.parse_options();
        assert_eq!(options.max_lines, 5);
        assert!(options.keywords.is_strip("API_EXPORT"));
        assert!(options.keywords.is_strip("inline"));
        assert!(options.keywords.is_keyword("__far"));
        assert!(!options.keywords.is_strip("__far"));
    }
}
