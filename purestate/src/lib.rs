//! Functional facades over stateful entity descriptors.
//!
//! Descriptors (see [`purestate_model`]) are ordinary mutable types: they apply
//! defaults and derivation when built, expose methods that change them, and
//! may fetch remote state. The facades here let callers treat them as plain
//! data instead. Every operation builds one transient instance from the
//! caller's attributes or list, exercises it once, and returns fresh plain
//! data captured from it:
//!
//! - [`functional`]: entities and collections, including remote fetch
//! - [`immutable`]: entities only, with explicit default attributes
//!
//! ```
//! use purestate::functional as fp;
//! use purestate::model::{Attributes, MethodTable, Model, ModelResult, Options};
//! use serde_json::{Value, json};
//!
//! struct Counter {
//!     attributes: Attributes,
//! }
//!
//! fn bump(counter: &mut Counter, _args: &[Value]) -> ModelResult<Value> {
//!     let n = counter.attributes.get("n").and_then(Value::as_i64).unwrap_or(0) + 1;
//!     counter.attributes.insert("n".into(), json!(n));
//!     Ok(json!(n))
//! }
//!
//! impl Model for Counter {
//!     fn construct(attributes: Attributes, _opts: Option<&Options>) -> ModelResult<Self> {
//!         Ok(Self { attributes })
//!     }
//!
//!     fn attributes(&self) -> &Attributes {
//!         &self.attributes
//!     }
//!
//!     fn methods() -> MethodTable<Self> {
//!         MethodTable::new().with("bump", bump)
//!     }
//! }
//!
//! # fn main() -> purestate::FacadeResult<()> {
//! let counter = fp::create::<Counter>(None, None)?;
//! let (bumped, n) = fp::do_call::<Counter>(&counter, "bump", Vec::new())?;
//!
//! assert_eq!(n, json!(1));
//! assert_eq!(bumped["n"], 1);
//! assert!(counter.get("n").is_none());
//! # Ok(())
//! # }
//! ```

mod error;
mod snapshot;

pub mod functional;
pub mod immutable;

pub use error::{FacadeError, FacadeResult};
pub use snapshot::{apply_mutation, apply_operation, unwrap_item, unwrap_items};

pub use purestate_model as model;
