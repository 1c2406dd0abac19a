use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::attributes::{Attributes, AttributesExt};
use crate::error::{ModelError, ModelResult};
use crate::model::Model;
use crate::options::Options;

/// How a collection orders its items.
#[derive(Clone)]
pub enum Comparator {
    /// Ascending by the value of one attribute.
    Attribute(String),
    /// Custom ordering over two items' attributes.
    Function(fn(&Attributes, &Attributes) -> Ordering),
}

impl Comparator {
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::Attribute(name.into())
    }

    pub fn compare(&self, a: &Attributes, b: &Attributes) -> Ordering {
        match self {
            Self::Attribute(name) => compare_values(a.get(name), b.get(name)),
            Self::Function(f) => f(a, b),
        }
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute(name) => f.debug_tuple("Attribute").field(name).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Missing and null sort first, then booleans, numbers, strings. Arrays and
/// objects compare equal to each other.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// The list mutations a collection supports.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Add items, skipping any whose identity is already present.
    Add(Vec<Value>),
    /// Remove items matched by identity.
    Remove(Vec<Value>),
    /// Append one item.
    Push(Value),
    /// Remove the last item.
    Pop,
    /// Prepend one item.
    Unshift(Value),
    /// Remove the first item.
    Shift,
    /// Re-order by the collection's comparator.
    Sort,
}

impl Mutation {
    pub const NAMES: [&'static str; 7] =
        ["add", "remove", "push", "pop", "unshift", "shift", "sort"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Push(_) => "push",
            Self::Pop => "pop",
            Self::Unshift(_) => "unshift",
            Self::Shift => "shift",
            Self::Sort => "sort",
        }
    }

    /// Resolve a mutation from its name and positional arguments.
    ///
    /// `add` and `remove` accept either one array argument or the items
    /// themselves; `push` and `unshift` take their first argument. A `push` or
    /// `unshift` without arguments inserts nothing and resolves to an empty
    /// `add`. Returns `None` for unknown names.
    pub fn from_call(name: &str, args: &[Value]) -> Option<Self> {
        let many = || match args {
            [Value::Array(items)] => items.clone(),
            _ => args.to_vec(),
        };

        Some(match (name, args.first()) {
            ("add", _) => Self::Add(many()),
            ("remove", _) => Self::Remove(many()),
            ("push" | "unshift", None) => Self::Add(Vec::new()),
            ("push", Some(item)) => Self::Push(item.clone()),
            ("pop", _) => Self::Pop,
            ("unshift", Some(item)) => Self::Unshift(item.clone()),
            ("shift", _) => Self::Shift,
            ("sort", _) => Self::Sort,
            _ => return None,
        })
    }
}

/// An ordered-list descriptor over items of type [`Collection::Item`].
///
/// Implementors provide construction and storage; list semantics (mutations
/// and attribute filters) come with default implementations that work on
/// [`Collection::models_mut`].
pub trait Collection: Sized + Send {
    type Item: Model;

    /// Name used in logs and errors.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Build an instance from a list of plain items.
    fn construct(items: Vec<Value>, opts: Option<&Options>) -> ModelResult<Self>;

    fn models(&self) -> &[Self::Item];

    fn models_mut(&mut self) -> &mut Vec<Self::Item>;

    fn comparator(&self) -> Option<&Comparator> {
        None
    }

    /// Turn a plain value into an item of this collection.
    fn prepare(&self, value: Value) -> ModelResult<Self::Item> {
        Self::Item::from_value(value, None)
    }

    /// Whether an item with `item`'s id is already in the collection. Items
    /// without an id are never duplicates.
    fn contains_id(&self, item: &Self::Item) -> bool {
        item.id()
            .is_some_and(|id| self.models().iter().any(|m| m.id() == Some(id)))
    }

    /// Apply one mutation, returning what it yields: the added, removed or
    /// inserted items, or nothing for `sort`. `push` and `unshift` of an item
    /// whose id is already present insert nothing and yield `None`.
    fn apply(&mut self, mutation: Mutation) -> ModelResult<Option<Value>> {
        match mutation {
            Mutation::Add(values) => {
                let mut added = Vec::new();
                for value in values {
                    let item = self.prepare(value)?;
                    if !self.contains_id(&item) {
                        added.push(item.raw());
                        self.models_mut().push(item);
                    }
                }
                if !added.is_empty() && self.comparator().is_some() {
                    self.apply(Mutation::Sort)?;
                }
                Ok(Some(Value::Array(added)))
            }
            Mutation::Remove(values) => {
                let mut removed = Vec::new();
                for value in &values {
                    let models = self.models_mut();
                    if let Some(idx) = models.iter().position(|m| same_item(m, value)) {
                        removed.push(models.remove(idx).raw());
                    }
                }
                Ok(Some(Value::Array(removed)))
            }
            Mutation::Push(value) => {
                let item = self.prepare(value)?;
                if self.contains_id(&item) {
                    return Ok(None);
                }
                let raw = item.raw();
                self.models_mut().push(item);
                Ok(Some(raw))
            }
            Mutation::Pop => Ok(self.models_mut().pop().map(|m| m.raw())),
            Mutation::Unshift(value) => {
                let item = self.prepare(value)?;
                if self.contains_id(&item) {
                    return Ok(None);
                }
                let raw = item.raw();
                self.models_mut().insert(0, item);
                Ok(Some(raw))
            }
            Mutation::Shift => {
                let models = self.models_mut();
                if models.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(models.remove(0).raw()))
                }
            }
            Mutation::Sort => {
                let comparator = self.comparator().cloned().ok_or_else(|| {
                    ModelError::method("sort", "cannot sort a set without a comparator")
                })?;
                self.models_mut()
                    .sort_by(|a, b| comparator.compare(a.attributes(), b.attributes()));
                Ok(None)
            }
        }
    }

    /// Items whose attributes contain every key of `filter`, in order.
    fn filter(&self, filter: &Attributes) -> Vec<&Self::Item> {
        self.models()
            .iter()
            .filter(|m| m.attributes().matches(filter))
            .collect()
    }

    /// First item whose attributes contain every key of `filter`.
    fn find(&self, filter: &Attributes) -> Option<&Self::Item> {
        self.models()
            .iter()
            .find(|m| m.attributes().matches(filter))
    }
}

/// Identity check used by `remove`: ids when both sides carry one, otherwise
/// the item's plain value.
fn same_item<M: Model>(item: &M, probe: &Value) -> bool {
    let probe_id = probe.get(M::id_attribute()).filter(|v| !v.is_null());
    match (item.id(), probe_id) {
        (Some(id), Some(probe_id)) => id == probe_id,
        _ => item.raw() == *probe,
    }
}

/// Build collection items from plain values, dropping later duplicates of an
/// identity already seen.
pub fn models_from<M: Model>(items: Vec<Value>, opts: Option<&Options>) -> ModelResult<Vec<M>> {
    let mut models: Vec<M> = Vec::with_capacity(items.len());
    for value in items {
        let model = M::from_value(value, opts)?;
        let duplicate = model
            .id()
            .is_some_and(|id| models.iter().any(|m| m.id() == Some(id)));
        if !duplicate {
            models.push(model);
        }
    }
    Ok(models)
}
