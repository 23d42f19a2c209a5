//! Casing-aware brief descriptions for well-known kinds of functions.

use crate::casing::Casing;
use crate::declaration::Declaration;

/// Placeholder substituted with the phrased name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Phrase templates for each recognized kind of function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartTemplates {
    pub constructor: String,
    pub destructor: String,
    pub getter: String,
    pub setter: String,
    pub factory: String,
    /// Break names into words (`FooBar` becomes `Foo Bar`).
    pub split_casing: bool,
}

impl Default for SmartTemplates {
    fn default() -> Self {
        Self {
            constructor: "Construct a new {name} object".to_string(),
            destructor: "Destroy the {name} object".to_string(),
            getter: "Get the {name} object".to_string(),
            setter: "Set the {name} object".to_string(),
            factory: "Create a {name} object".to_string(),
            split_casing: true,
        }
    }
}

/// The brief description for `declaration`, if it is a constructor,
/// destructor, getter (`get`), setter (`set`) or factory (`create`).
///
/// Names whose casing is uncertain never get a phrase, and a prefix only
/// counts when it is a whole word of the name: `createFoo` and
/// `CREATE_FOO` are factories, `Createfoo` and `createFOO` are not.
#[must_use]
pub fn smart_text(declaration: &Declaration, templates: &SmartTemplates) -> Option<String> {
    let name = declaration.unqualified_name()?;
    if declaration.is_operator() {
        return None;
    }

    if declaration.is_destructor() {
        let words = phrase_name(name.trim_start_matches('~'), templates.split_casing)?;
        return Some(fill(&templates.destructor, &words));
    }
    if declaration.is_constructor() {
        let words = phrase_name(name, templates.split_casing)?;
        return Some(fill(&templates.constructor, &words));
    }

    let casing = Casing::classify(name);
    [
        ("get", &templates.getter),
        ("set", &templates.setter),
        ("create", &templates.factory),
    ]
    .into_iter()
    .find_map(|(prefix, template)| {
        strip_word_prefix(name, casing, prefix, templates.split_casing)
            .map(|subject| fill(template, &subject))
    })
}

fn fill(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}

fn phrase_name(name: &str, split: bool) -> Option<String> {
    match Casing::classify(name) {
        Casing::Uncertain => None,
        casing if split => Some(casing.split_words(name)),
        _ => Some(name.to_string()),
    }
}

/// The rest of `name` after a leading `prefix` word, phrased for the casing.
fn strip_word_prefix(name: &str, casing: Casing, prefix: &str, split: bool) -> Option<String> {
    match casing {
        Casing::Uncertain => None,
        Casing::Upper => {
            let rest = strip_prefix_ignore_case(name, prefix)?;
            (!rest.is_empty()).then(|| rest.to_string())
        }
        Casing::Snake | Casing::ScreamingSnake => {
            let rest = strip_prefix_ignore_case(name.trim_start_matches('_'), prefix)?;
            if !rest.starts_with('_') {
                return None;
            }
            let rest = rest.trim_matches('_');
            if rest.is_empty() {
                return None;
            }
            Some(if split { casing.split_words(rest) } else { rest.to_string() })
        }
        Casing::Pascal | Casing::Camel => {
            let rest = strip_prefix_ignore_case(name, prefix)?;
            let is_word = Casing::classify(rest) == Casing::Pascal
                || (rest.chars().count() == 1 && rest.chars().all(char::is_uppercase));
            if !is_word {
                return None;
            }
            Some(if split { Casing::Pascal.split_words(rest) } else { rest.to_string() })
        }
    }
}

fn strip_prefix_ignore_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let head = name.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &name[prefix.len()..])
}
