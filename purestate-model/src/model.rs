use async_trait::async_trait;
use serde_json::Value;

use crate::attributes::{Attributes, attributes_of};
use crate::error::{ModelError, ModelResult};
use crate::method::MethodTable;
use crate::options::Options;

/// Whether a descriptor is a plain attribute bag or a specialized entity.
///
/// Collections of generic items hand their items back exactly as they were
/// supplied; collections of specialized items hand back attribute mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    Generic,
    Specialized,
}

/// A single-entity descriptor.
///
/// Implementors own their defaulting, derivation and validation: everything
/// happens inside [`Model::construct`], which receives the caller's data by
/// value. The only state the outside world observes is [`Model::attributes`].
pub trait Model: Sized + Send {
    /// Name used in logs and errors.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }

    fn item_type() -> ItemType {
        ItemType::Specialized
    }

    /// Attribute holding the entity's identity.
    fn id_attribute() -> &'static str {
        "id"
    }

    /// Build an instance from attributes, applying defaults and derivation.
    fn construct(attrs: Attributes, opts: Option<&Options>) -> ModelResult<Self>;

    /// Reshape incoming data into attributes, e.g. to unwrap a server
    /// envelope. Only runs when the options set `parse`.
    fn parse(attrs: Attributes) -> ModelResult<Attributes> {
        Ok(attrs)
    }

    /// [`Model::construct`], preceded by [`Model::parse`] when `opts.parse`
    /// is set. This is the entry point callers outside the descriptor use.
    fn build(attrs: Attributes, opts: Option<&Options>) -> ModelResult<Self> {
        let attrs = match opts {
            Some(o) if o.parse => Self::parse(attrs)?,
            _ => attrs,
        };
        Self::construct(attrs, opts)
    }

    /// Build an instance from an arbitrary JSON value, as collections do for
    /// their items. Only objects (and `null`, read as no attributes) are
    /// accepted by default.
    fn from_value(value: Value, opts: Option<&Options>) -> ModelResult<Self> {
        match attributes_of(&value) {
            Some(attrs) => Self::build(attrs, opts),
            None => Err(ModelError::Construction(format!(
                "{} expects an object, got {value}",
                Self::name()
            ))),
        }
    }

    fn attributes(&self) -> &Attributes;

    /// The instance as a plain value.
    fn raw(&self) -> Value {
        Value::Object(self.attributes().clone())
    }

    fn id(&self) -> Option<&Value> {
        self.attributes()
            .get(Self::id_attribute())
            .filter(|v| !v.is_null())
    }

    /// Methods callable by name. Empty unless overridden.
    fn methods() -> MethodTable<Self> {
        MethodTable::new()
    }
}

/// Remote-fetch capability.
///
/// Resolves once the remote payload has been applied to `self` in place. How
/// the payload is retrieved and merged is up to the implementor.
#[async_trait]
pub trait Fetch: Send {
    async fn fetch(&mut self) -> ModelResult<()>;
}

/// An unspecialized entity: attributes with no defaults, derivation or
/// methods. Keeps the value it was built from so collections of plain values
/// round-trip untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericModel {
    raw: Value,
    attributes: Attributes,
}

impl Model for GenericModel {
    fn name() -> &'static str {
        "GenericModel"
    }

    fn item_type() -> ItemType {
        ItemType::Generic
    }

    fn construct(attrs: Attributes, _opts: Option<&Options>) -> ModelResult<Self> {
        Ok(Self {
            raw: Value::Object(attrs.clone()),
            attributes: attrs,
        })
    }

    fn from_value(value: Value, _opts: Option<&Options>) -> ModelResult<Self> {
        let attributes = attributes_of(&value).unwrap_or_default();
        Ok(Self {
            raw: value,
            attributes,
        })
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn raw(&self) -> Value {
        self.raw.clone()
    }
}
