//! Smart text phrase configuration.

use dox_parser::SmartTemplates;
use dox_parser::smart_text::NAME_PLACEHOLDER;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_true() -> bool {
    true
}

fn default_constructor() -> String {
    SmartTemplates::default().constructor
}

fn default_destructor() -> String {
    SmartTemplates::default().destructor
}

fn default_getter() -> String {
    SmartTemplates::default().getter
}

fn default_setter() -> String {
    SmartTemplates::default().setter
}

fn default_factory() -> String {
    SmartTemplates::default().factory
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SmartTextConfig {
    /// Produce a brief for constructors, destructors, getters, setters and
    /// factories.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Break names into words (`FooBar` becomes `Foo Bar`).
    #[serde(default = "default_true")]
    pub split_casing: bool,

    #[serde(default = "default_constructor")]
    pub constructor: String,

    #[serde(default = "default_destructor")]
    pub destructor: String,

    #[serde(default = "default_getter")]
    pub getter: String,

    #[serde(default = "default_setter")]
    pub setter: String,

    #[serde(default = "default_factory")]
    pub factory: String,
}

impl Default for SmartTextConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            split_casing: true,
            constructor: default_constructor(),
            destructor: default_destructor(),
            getter: default_getter(),
            setter: default_setter(),
            factory: default_factory(),
        }
    }
}

impl SmartTextConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let templates = [
            ("smart_text.constructor", &self.constructor),
            ("smart_text.destructor", &self.destructor),
            ("smart_text.getter", &self.getter),
            ("smart_text.setter", &self.setter),
            ("smart_text.factory", &self.factory),
        ];
        for (field, template) in templates {
            if !template.contains(NAME_PLACEHOLDER) {
                return Err(ConfigError::invalid(
                    field,
                    format!("template must contain {NAME_PLACEHOLDER}"),
                ));
            }
        }
        Ok(())
    }

    /// The phrase templates, or `None` when smart text is turned off.
    #[must_use]
    pub fn templates(&self) -> Option<SmartTemplates> {
        self.enabled.then(|| SmartTemplates {
            constructor: self.constructor.clone(),
            destructor: self.destructor.clone(),
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            factory: self.factory.clone(),
            split_casing: self.split_casing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_parser_templates() {
        let config = SmartTextConfig::default();
        assert!(config.enabled);
        assert!(config.validate().is_ok());
        assert_eq!(config.templates(), Some(SmartTemplates::default()));
    }

    #[test]
    fn disabled_yields_no_templates() {
        let config = SmartTextConfig {
            enabled: false,
            ..SmartTextConfig::default()
        };
        assert_eq!(config.templates(), None);
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let config = SmartTextConfig {
            getter: "Getter".to_string(),
            ..SmartTextConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "smart_text.getter"
        ));
    }
}
