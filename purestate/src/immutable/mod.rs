//! The single-entity facade.
//!
//! Same mechanics as [`functional`](crate::functional), restricted to single
//! entities: there are no collection operations and no fetch. `create` takes
//! explicit default attributes instead of construction options.

pub mod model;

pub use model::{alter, create, do_apply, do_call, invoke, set};
