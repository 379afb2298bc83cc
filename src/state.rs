//! Fail-soft accessors over the application state snapshot.
//!
//! The blockchain connection layer hands the UI a JSON state tree that may be
//! arbitrarily incomplete — before a wallet connects there is no
//! `web3.account`, before the contracts load there is no `exchange` subtree
//! at all. Every accessor here degrades to a documented default instead of
//! erroring, so rendering never crashes on partial state.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::models::Order;

/// Immutable state snapshot shared between the state container and the
/// selectors. Selector memoization is keyed by the identity of this `Arc`.
pub type StateRef = Arc<Value>;

/// Placeholder returned when no wallet account is present in the snapshot.
pub const ACCOUNT_PLACEHOLDER: &str = "failed to access account";

/// Walk a dotted path (`"exchange.filledOrders.data"`) through the snapshot.
/// Returns `None` if any segment is missing or a non-object is traversed.
pub fn get_path<'a>(state: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(state, |node, segment| node.get(segment))
}

/// Connected wallet account. Default: [`ACCOUNT_PLACEHOLDER`].
pub fn account(state: &Value) -> String {
    get_path(state, "web3.account")
        .and_then(Value::as_str)
        .unwrap_or(ACCOUNT_PLACEHOLDER)
        .to_string()
}

/// Whether the token contract has loaded. Default: `false`.
pub fn token_loaded(state: &Value) -> bool {
    get_path(state, "token.loaded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Whether the exchange contract has loaded. Default: `false`.
pub fn exchange_loaded(state: &Value) -> bool {
    get_path(state, "exchange.loaded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Opaque handle of the exchange contract instance. Default: `None`.
pub fn exchange_contract(state: &Value) -> Option<Value> {
    get_path(state, "exchange.contract").cloned()
}

/// Whether the filled-orders query has completed. Default: `false`.
pub fn filled_orders_loaded(state: &Value) -> bool {
    get_path(state, "exchange.filledOrders.loaded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Raw filled orders. Default: empty.
///
/// Entries that do not deserialize as an [`Order`] are skipped with a
/// warning rather than failing the whole collection.
pub fn filled_orders(state: &Value) -> Vec<Order> {
    let Some(data) = get_path(state, "exchange.filledOrders.data").and_then(Value::as_array)
    else {
        return Vec::new();
    };

    data.iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(order) => Some(order),
            Err(e) => {
                warn!("skipping malformed filled order: {}", e);
                None
            }
        })
        .collect()
}
