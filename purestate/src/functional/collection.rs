//! Ordered-list operations.
//!
//! Lists go in as `&[Value]` and come back as new vectors. Items of
//! collections over [`GenericModel`](purestate_model::GenericModel) come back
//! exactly as supplied; items of specialized collections come back as their
//! attribute mappings.

use purestate_model::{Attributes, Collection, Fetch, Mutation, Options};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{FacadeError, FacadeResult};
use crate::snapshot::{
    apply_mutation, inspect_collection, instantiate_collection, unwrap_item, unwrap_items,
};

/// Build `C` from `list` and `opts`, returning its items.
pub fn create<C: Collection>(opts: Option<&Options>, list: &[Value]) -> FacadeResult<Vec<Value>> {
    let instance = instantiate_collection::<C>(opts, list)?;
    Ok(unwrap_items(instance.models()))
}

/// Apply one mutation to a collection built from `list` and return the
/// resulting items. Whatever the mutation itself yields is dropped.
pub fn apply<C: Collection>(list: &[Value], mutation: Mutation) -> FacadeResult<Vec<Value>> {
    debug!(
        descriptor = C::name(),
        mutation = mutation.name(),
        "Applying mutation"
    );
    apply_mutation::<C, _, _>(None, list, |instance| Ok(instance.apply(mutation)?))
        .map(|(items, _)| items)
}

/// Apply the mutation called `name` with positional `args`.
pub fn mutate<C: Collection>(
    list: &[Value],
    name: &str,
    args: &[Value],
) -> FacadeResult<Vec<Value>> {
    let Some(mutation) = Mutation::from_call(name, args) else {
        warn!(descriptor = C::name(), method = name, "Unknown mutation");
        return Err(FacadeError::invocation(C::name(), name));
    };
    apply::<C>(list, mutation)
}

pub fn add<C: Collection>(list: &[Value], items: &[Value]) -> FacadeResult<Vec<Value>> {
    apply::<C>(list, Mutation::Add(items.to_vec()))
}

pub fn remove<C: Collection>(list: &[Value], items: &[Value]) -> FacadeResult<Vec<Value>> {
    apply::<C>(list, Mutation::Remove(items.to_vec()))
}

pub fn push<C: Collection>(list: &[Value], item: &Value) -> FacadeResult<Vec<Value>> {
    apply::<C>(list, Mutation::Push(item.clone()))
}

/// The list without its last item.
pub fn pop<C: Collection>(list: &[Value]) -> FacadeResult<Vec<Value>> {
    apply::<C>(list, Mutation::Pop)
}

pub fn unshift<C: Collection>(list: &[Value], item: &Value) -> FacadeResult<Vec<Value>> {
    apply::<C>(list, Mutation::Unshift(item.clone()))
}

/// The list without its first item.
pub fn shift<C: Collection>(list: &[Value]) -> FacadeResult<Vec<Value>> {
    apply::<C>(list, Mutation::Shift)
}

pub fn sort<C: Collection>(list: &[Value]) -> FacadeResult<Vec<Value>> {
    apply::<C>(list, Mutation::Sort)
}

/// Items whose attributes contain every key of `filter`, in list order.
pub fn where_<C: Collection>(list: &[Value], filter: &Attributes) -> FacadeResult<Vec<Value>> {
    inspect_collection::<C, _, _>(list, |instance| {
        instance.filter(filter).into_iter().map(unwrap_item::<C::Item>).collect()
    })
}

/// The first item whose attributes contain every key of `filter`.
pub fn find_where<C: Collection>(
    list: &[Value],
    filter: &Attributes,
) -> FacadeResult<Option<Value>> {
    inspect_collection::<C, _, _>(list, |instance| {
        instance.find(filter).map(unwrap_item::<C::Item>)
    })
}

/// Build `C`, run its remote fetch, and resolve to its items once the fetched
/// state has been applied.
pub async fn fetch<C: Collection + Fetch>(
    opts: Option<&Options>,
    list: &[Value],
) -> FacadeResult<Vec<Value>> {
    let mut instance = instantiate_collection::<C>(opts, list)?;
    debug!(descriptor = C::name(), "Fetching");
    if let Err(e) = instance.fetch().await {
        warn!(descriptor = C::name(), error = %e, "Fetch failed");
        return Err(e.into());
    }
    Ok(unwrap_items(instance.models()))
}
