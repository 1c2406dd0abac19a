use serde_json::{Map, Value};

/// An entity's public state: a plain mapping from attribute name to JSON value.
pub type Attributes = Map<String, Value>;

/// Read and combine helpers on [`Attributes`].
///
/// Getters take a JSON pointer (e.g. `"/color"` or `"/owner/name"`), so nested
/// attributes are reachable without manual traversal.
pub trait AttributesExt {
    /// Extract a string value using a JSON pointer.
    fn get_str(&self, pointer: &str) -> Option<&str>;

    /// Extract a boolean value using a JSON pointer.
    fn get_bool(&self, pointer: &str) -> Option<bool>;

    /// Extract a numeric value using a JSON pointer.
    fn get_number(&self, pointer: &str) -> Option<f64>;

    /// Extract an integer value using a JSON pointer.
    fn get_i64(&self, pointer: &str) -> Option<i64>;

    /// Returns a new mapping holding `self` with every key of `other` written
    /// over it, in `other`'s order. Neither input is modified.
    fn merged(&self, other: &Attributes) -> Attributes;

    /// Returns a new mapping where keys missing from `self` are filled from
    /// `defaults`. Keys already present in `self` win, even when null.
    fn with_defaults(&self, defaults: &Attributes) -> Attributes;

    /// True when every `(key, value)` of `filter` is present and equal in
    /// `self`. Extra keys on `self` are ignored; an empty filter matches.
    fn matches(&self, filter: &Attributes) -> bool;
}

fn pointer<'a>(attrs: &'a Attributes, pointer: &str) -> Option<&'a Value> {
    // Map has no pointer lookup of its own, so resolve the first segment here
    // and hand the remainder to Value::pointer.
    let path = pointer.strip_prefix('/')?;
    let (head, rest) = match path.find('/') {
        Some(idx) => (&path[..idx], &path[idx..]),
        None => (path, ""),
    };
    let key = head.replace("~1", "/").replace("~0", "~");
    let value = attrs.get(&key)?;
    if rest.is_empty() {
        Some(value)
    } else {
        value.pointer(rest)
    }
}

impl AttributesExt for Attributes {
    fn get_str(&self, ptr: &str) -> Option<&str> {
        pointer(self, ptr).and_then(|v| v.as_str())
    }

    fn get_bool(&self, ptr: &str) -> Option<bool> {
        pointer(self, ptr).and_then(|v| v.as_bool())
    }

    fn get_number(&self, ptr: &str) -> Option<f64> {
        pointer(self, ptr).and_then(|v| v.as_f64())
    }

    fn get_i64(&self, ptr: &str) -> Option<i64> {
        pointer(self, ptr).and_then(|v| v.as_i64())
    }

    fn merged(&self, other: &Attributes) -> Attributes {
        let mut out = self.clone();
        for (key, value) in other {
            out.insert(key.clone(), value.clone());
        }
        out
    }

    fn with_defaults(&self, defaults: &Attributes) -> Attributes {
        let mut out = defaults.clone();
        for (key, value) in self {
            out.insert(key.clone(), value.clone());
        }
        out
    }

    fn matches(&self, filter: &Attributes) -> bool {
        filter
            .iter()
            .all(|(key, expected)| self.get(key) == Some(expected))
    }
}

/// Converts a JSON value into attributes.
///
/// Objects are copied as-is; `null` becomes an empty mapping. Any other value
/// yields `None`.
pub fn attributes_of(value: &Value) -> Option<Attributes> {
    match value {
        Value::Object(map) => Some(map.clone()),
        Value::Null => Some(Attributes::new()),
        _ => None,
    }
}
