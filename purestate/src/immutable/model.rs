use purestate_model::{Attributes, AttributesExt, Model};

use crate::error::FacadeResult;
use crate::functional::model as functional;

pub use crate::functional::model::{alter, do_apply, do_call, invoke};

/// Build `M` from `attrs` laid over `defaults`.
///
/// The merge happens before construction, so the descriptor's own defaults and
/// derivation still run on the merged mapping and take precedence for
/// anything they compute.
pub fn create<M: Model>(
    defaults: Option<&Attributes>,
    attrs: Option<&Attributes>,
) -> FacadeResult<Attributes> {
    let merged = match (defaults, attrs) {
        (Some(defaults), Some(attrs)) => attrs.with_defaults(defaults),
        (Some(defaults), None) => defaults.clone(),
        (None, Some(attrs)) => attrs.clone(),
        (None, None) => Attributes::new(),
    };
    functional::create::<M>(None, Some(&merged))
}

/// Overwrite `attrs` with `extra` and rebuild `M` from the result.
pub fn set<M: Model>(attrs: &Attributes, extra: &Attributes) -> FacadeResult<Attributes> {
    create::<M>(None, Some(&attrs.merged(extra)))
}
