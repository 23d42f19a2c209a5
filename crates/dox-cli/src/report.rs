//! Serializable view of a parse outcome.

use dox_parser::{
    Argument, Casing, Declaration, ParseOptions, SmartTemplates, extract_templates,
    parse_expression, smart_text,
};
use serde::Serialize;

/// What the CLI prints for one parse. A declaration that does not parse is
/// reported with `declaration: null` and the reason, not as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// The logical line that was parsed.
    pub expression: Option<String>,
    pub declaration: Option<DeclarationReport>,
    /// Template parameters of a rejected expression (class templates have
    /// no argument list but their `@tparam`s are still useful).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub template_parameters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ParseOutcome {
    /// Parse `expression`, capturing any rejection as the reason.
    #[must_use]
    pub fn from_expression(
        expression: &str,
        options: &ParseOptions,
        templates: Option<&SmartTemplates>,
    ) -> Self {
        match parse_expression(expression, options) {
            Ok(declaration) => Self {
                expression: Some(expression.to_string()),
                declaration: Some(DeclarationReport::new(&declaration, templates)),
                template_parameters: Vec::new(),
                reason: None,
            },
            Err(error) => Self {
                expression: Some(expression.to_string()),
                declaration: None,
                template_parameters: extract_templates(expression).0,
                reason: Some(error.to_string()),
            },
        }
    }

    /// No logical line could be assembled.
    #[must_use]
    pub fn rejected(reason: impl std::fmt::Display) -> Self {
        Self {
            expression: None,
            declaration: None,
            template_parameters: Vec::new(),
            reason: Some(reason.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationReport {
    pub name: Option<String>,
    pub return_type: String,
    pub return_values: Vec<String>,
    pub parameters: Vec<ParameterReport>,
    pub template_parameters: Vec<String>,
    pub flags: DeclarationFlags,
    pub casing: Casing,
    pub smart_text: Option<String>,
}

impl DeclarationReport {
    #[must_use]
    pub fn new(declaration: &Declaration, templates: Option<&SmartTemplates>) -> Self {
        Self {
            name: declaration.name().map(ToString::to_string),
            return_type: declaration.return_type(),
            return_values: declaration.return_values(),
            parameters: declaration.parameters.iter().map(ParameterReport::from).collect(),
            template_parameters: declaration.template_parameters.clone(),
            flags: DeclarationFlags::from(declaration),
            casing: declaration.casing(),
            smart_text: templates.and_then(|templates| smart_text(declaration, templates)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterReport {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

impl From<&Argument> for ParameterReport {
    fn from(argument: &Argument) -> Self {
        Self {
            name: argument.name.clone(),
            ty: argument.type_text(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct DeclarationFlags {
    pub constructor: bool,
    pub destructor: bool,
    pub operator: bool,
    pub function_pointer: bool,
    pub trailing_return: bool,
    pub variadic: bool,
}

impl From<&Declaration> for DeclarationFlags {
    fn from(declaration: &Declaration) -> Self {
        Self {
            constructor: declaration.is_constructor(),
            destructor: declaration.is_destructor(),
            operator: declaration.is_operator(),
            function_pointer: declaration.is_function_pointer(),
            trailing_return: declaration.has_trailing_return(),
            variadic: declaration.is_variadic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn outcome(expression: &str) -> ParseOutcome {
        ParseOutcome::from_expression(
            expression,
            &ParseOptions::default(),
            Some(&SmartTemplates::default()),
        )
    }

    #[test]
    fn function_pointer_report() {
        let report = outcome("int (*idputs(int a, int b))(char *)");
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(
            value,
            json!({
                "expression": "int (*idputs(int a, int b))(char *)",
                "declaration": {
                    "name": "idputs",
                    "return_type": "int(*)(char*)",
                    "return_values": ["int(*)(char*)"],
                    "parameters": [
                        { "name": "a", "type": "int" },
                        { "name": "b", "type": "int" }
                    ],
                    "template_parameters": [],
                    "flags": {
                        "constructor": false,
                        "destructor": false,
                        "operator": false,
                        "function_pointer": true,
                        "trailing_return": false,
                        "variadic": false
                    },
                    "casing": "uncertain",
                    "smart_text": null
                }
            })
        );
    }

    #[test]
    fn getter_gets_smart_text() {
        let report = outcome("bool getEnabled() const").declaration.expect("parses");
        assert_eq!(report.smart_text.as_deref(), Some("Get the Enabled object"));
        assert_eq!(report.return_values, vec!["true", "false"]);
        assert_eq!(report.casing, Casing::Camel);
    }

    #[test]
    fn disabled_smart_text_is_null() {
        let report = ParseOutcome::from_expression("Foo()", &ParseOptions::default(), None)
            .declaration
            .expect("parses");
        assert!(report.flags.constructor);
        assert_eq!(report.smart_text, None);
    }

    #[test]
    fn rejected_class_template_keeps_template_parameters() {
        let report = outcome("template<typename T, std::size_t N> struct Matrix");
        assert_eq!(report.declaration, None);
        assert_eq!(report.template_parameters, vec!["T", "N"]);
        assert_eq!(
            report.reason.as_deref(),
            Some("Argument list not found in declaration")
        );
    }
}
