//! Single-entity operations.
//!
//! Each function takes the descriptor as a type parameter and plain data as
//! arguments, builds one transient instance, and returns plain data. Inputs
//! are only borrowed, so they are never modified.

use purestate_model::{Attributes, AttributesExt, Fetch, Method, Model, Options};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{FacadeError, FacadeResult};
use crate::snapshot::{apply_operation, instantiate};

/// Build `M` from `attrs` (empty when `None`) and `opts`, returning its
/// attributes after defaults and derivation ran.
pub fn create<M: Model>(
    opts: Option<&Options>,
    attrs: Option<&Attributes>,
) -> FacadeResult<Attributes> {
    let instance = instantiate::<M>(opts, attrs)?;
    Ok(instance.attributes().clone())
}

/// Overwrite `attrs` with `extra` and rebuild `M` from the result, so derived
/// attributes are recomputed.
pub fn set<M: Model>(attrs: &Attributes, extra: &Attributes) -> FacadeResult<Attributes> {
    create::<M>(None, Some(&attrs.merged(extra)))
}

pub(crate) fn resolve<M: Model>(method: &str) -> FacadeResult<Method<M>> {
    M::methods().resolve(method).ok_or_else(|| {
        warn!(descriptor = M::name(), method, "Unknown method");
        FacadeError::invocation(M::name(), method)
    })
}

/// Call `method` on an instance built from `attrs` with `args` as positional
/// arguments. Returns the instance's attributes afterwards and the method's
/// return value.
pub fn do_apply<M: Model>(
    attrs: &Attributes,
    method: &str,
    args: &[Value],
) -> FacadeResult<(Attributes, Value)> {
    let f = resolve::<M>(method)?;
    debug!(
        descriptor = M::name(),
        method,
        args = args.len(),
        "Applying method"
    );
    apply_operation::<M, _, _>(None, Some(attrs), |instance| Ok(f(instance, args)?))
}

/// [`do_apply`] taking its arguments as any sequence of values.
pub fn do_call<M: Model>(
    attrs: &Attributes,
    method: &str,
    args: impl IntoIterator<Item = Value>,
) -> FacadeResult<(Attributes, Value)> {
    let args: Vec<Value> = args.into_iter().collect();
    do_apply::<M>(attrs, method, &args)
}

/// The attributes half of [`do_call`].
pub fn alter<M: Model>(
    attrs: &Attributes,
    method: &str,
    args: impl IntoIterator<Item = Value>,
) -> FacadeResult<Attributes> {
    do_call::<M>(attrs, method, args).map(|(attrs, _)| attrs)
}

/// The return-value half of [`do_call`].
pub fn invoke<M: Model>(
    attrs: &Attributes,
    method: &str,
    args: impl IntoIterator<Item = Value>,
) -> FacadeResult<Value> {
    do_call::<M>(attrs, method, args).map(|(_, ret)| ret)
}

/// Build `M`, run its remote fetch, and resolve to its attributes once the
/// fetched state has been applied. Fetch failures are returned unchanged.
pub async fn fetch<M: Model + Fetch>(
    opts: Option<&Options>,
    attrs: Option<&Attributes>,
) -> FacadeResult<Attributes> {
    let mut instance = instantiate::<M>(opts, attrs)?;
    debug!(descriptor = M::name(), "Fetching");
    if let Err(e) = instance.fetch().await {
        warn!(descriptor = M::name(), error = %e, "Fetch failed");
        return Err(e.into());
    }
    Ok(instance.attributes().clone())
}
