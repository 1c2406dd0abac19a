//! The full facade: single entities and collections.
//!
//! Operations from [`model`] and [`collection`] are re-exported flat. The two
//! adapters share the names `create` and `fetch`; the flat names refer to the
//! entity versions, the collection versions stay under [`collection`].

pub mod collection;
pub mod model;

pub use collection::{add, find_where, mutate, pop, push, remove, shift, sort, unshift, where_};
pub use model::{alter, create, do_apply, do_call, fetch, invoke, set};
