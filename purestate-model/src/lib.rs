//! Entity descriptor contract for purestate.
//!
//! Defines what the functional facades need from the stateful types they wrap:
//! - [`Model`]: a single entity, built with defaults and derivation, with
//!   attributes and a [`MethodTable`] for dispatch by name
//! - [`Collection`]: an ordered list of [`Model`] items with the standard
//!   [`Mutation`]s and attribute filters
//! - [`Fetch`]: the remote-fetch capability, applied in place
//! - [`Attributes`] / [`AttributesExt`]: plain entity state and its helpers
//! - [`Options`]: construction options passed through to descriptors
//!
//! Nothing here keeps state between calls. Descriptors are built, used and
//! dropped by the caller.

mod attributes;
mod collection;
mod error;
mod method;
mod model;
mod options;

pub use attributes::{Attributes, AttributesExt, attributes_of};
pub use collection::{Collection, Comparator, Mutation, models_from};
pub use error::{ModelError, ModelResult};
pub use method::{Method, MethodTable};
pub use model::{Fetch, GenericModel, ItemType, Model};
pub use options::Options;
