//! Message lookup for text synthesized during resolution.

use std::collections::HashMap;

/// Message keys used by routes.
pub mod keys {
    pub const DESCRIPTION_QUOTE: &str = "EditComment.DescriptionQuote";
    pub const COMMENT_QUOTE: &str = "EditComment.CommentQuote";
}

/// Localized message lookup.
pub trait Translator: Send + Sync {
    /// Look up `key` and substitute `{0}`, `{1}`, ... with `args`.
    fn translate(&self, key: &str, args: &[&str]) -> String;
}

/// In-memory message catalog. Unknown keys translate to themselves.
#[derive(Debug, Clone)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        let mut messages = HashMap::new();
        messages.insert(keys::DESCRIPTION_QUOTE.to_string(), "Description".to_string());
        messages.insert(keys::COMMENT_QUOTE.to_string(), "Comment {0}".to_string());
        Self { messages }
    }
}

impl Catalog {
    /// Built-in messages with `overrides` applied on top.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut catalog = Self::default();
        for (key, message) in overrides {
            catalog.insert(key.clone(), message.clone());
        }
        catalog
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.messages.get(key) else {
            tracing::warn!(key, "Missing translation");
            return key.to_string();
        };

        substitute(template, args)
    }
}

/// Replace `{i}` placeholders in one pass; argument text is never rescanned.
fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let arg = tail.find('}').and_then(|end| {
            let index: usize = tail[1..end].parse().ok()?;
            Some((args.get(index)?, end))
        });
        match arg {
            Some((value, end)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_messages() {
        let catalog = Catalog::default();
        assert_eq!(catalog.translate(keys::DESCRIPTION_QUOTE, &[]), "Description");
        assert_eq!(catalog.translate(keys::COMMENT_QUOTE, &["#3"]), "Comment #3");
    }

    #[test]
    fn test_overrides_and_missing_keys() {
        let mut overrides = HashMap::new();
        overrides.insert(keys::COMMENT_QUOTE.to_string(), "Kommentar {0}".to_string());
        let catalog = Catalog::with_overrides(&overrides);

        assert_eq!(catalog.translate(keys::COMMENT_QUOTE, &["#9"]), "Kommentar #9");
        assert_eq!(catalog.translate(keys::DESCRIPTION_QUOTE, &[]), "Description");
        assert_eq!(catalog.translate("Nope.Missing", &[]), "Nope.Missing");
    }

    #[test]
    fn test_arguments_are_not_rescanned() {
        let mut catalog = Catalog::default();
        catalog.insert("Pair", "{0} and {1}");
        assert_eq!(catalog.translate("Pair", &["{1}", "x"]), "{1} and x");
        assert_eq!(catalog.translate("Pair", &["a"]), "a and {1}");
        catalog.insert("Braces", "{ {0} }");
        assert_eq!(catalog.translate("Braces", &["#3"]), "{ #3 }");
    }
}
