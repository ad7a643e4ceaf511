// src/core/properties.rs

/// An ordered set of `key=value` lines in Java properties syntax.
///
/// Rendering is deterministic: entries come out in insertion order, one per
/// line, each terminated by `\n`. Setting an existing key replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesBlock {
    entries: Vec<(String, String)>,
}

impl PropertiesBlock {
    /// An empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key`, or replaces its value where it already stands.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// The block as file content, values escaped.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}={}\n", key, escape_value(value)))
            .collect()
    }
}

/// Escapes a value so a properties reader gets back exactly what was typed.
/// Backslashes and line breaks are escaped, and so is leading whitespace,
/// which readers would otherwise drop.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut leading = true;
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            ' ' | '\t' if leading => {
                escaped.push('\\');
                escaped.push(c);
                continue;
            }
            _ => escaped.push(c),
        }
        leading = false;
    }
    escaped
}
