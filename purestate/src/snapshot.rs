//! Apply-and-snapshot: every facade operation builds one transient instance,
//! exercises it once and returns plain data captured from it. The instance is
//! owned by these functions and dropped before they return.

use purestate_model::{Attributes, Collection, ItemType, Model, Options};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::FacadeResult;

pub(crate) fn instantiate<M: Model>(
    opts: Option<&Options>,
    attrs: Option<&Attributes>,
) -> FacadeResult<M> {
    debug!(descriptor = M::name(), "Building transient instance");
    let data = attrs.cloned().unwrap_or_default();
    Ok(M::build(data, opts)?)
}

pub(crate) fn instantiate_collection<C: Collection>(
    opts: Option<&Options>,
    list: &[Value],
) -> FacadeResult<C> {
    debug!(
        descriptor = C::name(),
        items = list.len(),
        "Building transient collection"
    );
    Ok(C::construct(list.to_vec(), opts)?)
}

/// Run `op` against a fresh instance of `M` built from `attrs`, returning the
/// instance's attributes afterwards together with what `op` returned.
///
/// This is the primitive behind every entity operation. Use it directly to
/// exercise a descriptor with a typed closure instead of a method name.
pub fn apply_operation<M, R, F>(
    opts: Option<&Options>,
    attrs: Option<&Attributes>,
    op: F,
) -> FacadeResult<(Attributes, R)>
where
    M: Model,
    F: FnOnce(&mut M) -> FacadeResult<R>,
{
    let mut instance = instantiate::<M>(opts, attrs)?;
    let result = op(&mut instance)?;
    trace!(descriptor = M::name(), "Capturing instance attributes");
    Ok((instance.attributes().clone(), result))
}

/// Collection counterpart of [`apply_operation`]: the returned list is the
/// post-operation items under the unwrap policy of [`unwrap_item`].
pub fn apply_mutation<C, R, F>(
    opts: Option<&Options>,
    list: &[Value],
    op: F,
) -> FacadeResult<(Vec<Value>, R)>
where
    C: Collection,
    F: FnOnce(&mut C) -> FacadeResult<R>,
{
    let mut instance = instantiate_collection::<C>(opts, list)?;
    let result = op(&mut instance)?;
    trace!(
        descriptor = C::name(),
        items = instance.models().len(),
        "Capturing collection items"
    );
    Ok((unwrap_items(instance.models()), result))
}

/// Run a read-only query against a fresh instance of `C`.
pub(crate) fn inspect_collection<C, R, F>(list: &[Value], query: F) -> FacadeResult<R>
where
    C: Collection,
    F: FnOnce(&C) -> R,
{
    let instance = instantiate_collection::<C>(None, list)?;
    Ok(query(&instance))
}

/// Plain representation of one collection item: the raw value for generic
/// items, the attribute mapping for specialized ones.
pub fn unwrap_item<M: Model>(item: &M) -> Value {
    match M::item_type() {
        ItemType::Generic => item.raw(),
        ItemType::Specialized => Value::Object(item.attributes().clone()),
    }
}

pub fn unwrap_items<M: Model>(items: &[M]) -> Vec<Value> {
    items.iter().map(unwrap_item::<M>).collect()
}
