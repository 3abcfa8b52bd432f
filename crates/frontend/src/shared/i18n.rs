//! Message translation consumed by the modal controller.
//!
//! Only key lookup with `%{name}` interpolation is supported. Locale
//! negotiation and pluralisation belong to the server.

use std::collections::HashMap;

use serde_json::Value;

/// Resolves a message key into display text.
pub trait Translator: Send + Sync {
    fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String;

    fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }
}

/// Flat dotted-key message table.
#[derive(Clone, Debug, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a nested json document such as
    /// `{"category": {"edit_title": "Edit Category"}}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        flatten_into(&mut catalog.messages, String::new(), &root);
        Ok(catalog)
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.messages
            .get(key)
            .or_else(|| self.messages.get(&format!("{key}.generic")))
            .map(String::as_str)
    }
}

impl Translator for MessageCatalog {
    fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.lookup(key) {
            Some(message) => interpolate(message, args),
            None => {
                log::debug!("missing translation for '{}'", key);
                key.to_string()
            }
        }
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten_into(out, key, v);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix, other.to_string());
        }
    }
}

/// Replaces every `%{name}` with the matching argument. Unknown
/// placeholders are left as they are.
fn interpolate(message: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() {
        return message.to_string();
    }
    let mut out = message.to_string();
    for (name, value) in args {
        out = out.replace(&format!("%{{{name}}}"), value);
    }
    out
}
