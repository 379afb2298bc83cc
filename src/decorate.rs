//! Order decoration and the filled-orders display pipeline.
//!
//! A raw [`Order`] carries wei-scale integer amounts and addresses. The
//! trades table wants human-scaled amounts, a price, a formatted time, and a
//! trend tag telling it whether to render the price green or red. The
//! pipeline here is sort ascending → decorate with a running previous-order
//! cursor → re-sort descending, so trend comparisons chain through time order
//! while the table shows the newest trade first.
//!
//! Side detection: the exchange contract records the native currency under a
//! sentinel address ([`crate::utils::ETHER_ADDRESS`]). If `tokenGive` is the
//! sentinel the maker paid ether for tokens; otherwise the reverse.
//!
//! The transform is one-way. Decorated output adds derived fields and
//! re-encodes amounts; it is not accepted back as raw pipeline input.

use std::cmp::Reverse;

use thiserror::Error;
use tracing::warn;

use crate::models::{DecoratedFilledOrder, DecoratedOrder, Order, PriceTrend};
use crate::utils::{ether, format_timestamp, is_ether, round_price, tokens};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecorateError {
    /// The token side of the trade is zero, so no price exists. Such orders
    /// are dropped rather than propagated as NaN, which would poison every
    /// later trend comparison.
    #[error("order {0} has zero token amount, no price can be derived")]
    ZeroTokenAmount(u64),
}

/// Enrich a single raw order with display fields.
pub fn decorate_order(order: &Order) -> Result<DecoratedOrder, DecorateError> {
    let (ether_raw, token_raw) = if is_ether(&order.token_give) {
        (order.amount_give, order.amount_get)
    } else {
        (order.amount_get, order.amount_give)
    };

    if token_raw == 0 {
        return Err(DecorateError::ZeroTokenAmount(order.id));
    }

    // price comes from the raw amounts; human-unit scaling is display-only
    let token_price = round_price(ether_raw as f64 / token_raw as f64);

    Ok(DecoratedOrder {
        order: order.clone(),
        token_amount: tokens(token_raw),
        ether_amount: ether(ether_raw),
        token_price,
        formatted_timestamp: format_timestamp(order.timestamp),
    })
}

/// Tag a decorated order with its trend relative to the chronologically
/// preceding trade. `previous` is `None` only for the first order in the
/// sequence, which the source compares against itself — always [`PriceTrend::Up`].
pub fn decorate_filled_order(
    decorated: DecoratedOrder,
    previous: Option<&DecoratedFilledOrder>,
) -> DecoratedFilledOrder {
    let token_price_class = match previous {
        None => PriceTrend::Up,
        Some(prev) if prev.id() == decorated.order.id => PriceTrend::Up,
        Some(prev) if prev.token_price() <= decorated.token_price => PriceTrend::Up,
        Some(_) => PriceTrend::Down,
    };
    DecoratedFilledOrder {
        decorated,
        token_price_class,
    }
}

/// Run the full pipeline: sort ascending by timestamp, decorate each order
/// chaining the trend cursor, then re-sort descending for display.
///
/// Both sorts are stable; orders with equal timestamps keep their prior
/// relative order. Unpriceable orders are dropped with a warning and do not
/// participate in the trend chain.
pub fn decorate_filled_orders(mut orders: Vec<Order>) -> Vec<DecoratedFilledOrder> {
    orders.sort_by_key(|o| o.timestamp);

    let mut previous: Option<DecoratedFilledOrder> = None;
    let mut decorated = Vec::with_capacity(orders.len());
    for order in &orders {
        let base = match decorate_order(order) {
            Ok(d) => d,
            Err(e) => {
                warn!("skipping filled order: {}", e);
                continue;
            }
        };
        let filled = decorate_filled_order(base, previous.as_ref());
        previous = Some(filled.clone());
        decorated.push(filled);
    }

    decorated.sort_by_key(|o| Reverse(o.timestamp()));
    decorated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ETHER_ADDRESS;

    const TOKEN: &str = "0xfab46e002bbf0b4509813474841e0716e6730136";

    /// Order giving `ether_wei` for `token_raw` tokens.
    fn buy_order(id: u64, timestamp: i64, ether_wei: u128, token_raw: u128) -> Order {
        Order {
            id,
            token_give: ETHER_ADDRESS.to_string(),
            token_get: TOKEN.to_string(),
            amount_give: ether_wei,
            amount_get: token_raw,
            timestamp,
        }
    }

    #[test]
    fn test_decorate_order_native_on_give_side() {
        let order = buy_order(1, 1_700_000_000, 2_000_000_000_000_000_000, 4_000_000_000_000_000_000);
        let decorated = decorate_order(&order).unwrap();
        assert_eq!(decorated.ether_amount, 2.0);
        assert_eq!(decorated.token_amount, 4.0);
        assert_eq!(decorated.token_price, 0.5);
        assert!(!decorated.formatted_timestamp.is_empty());
        // input untouched
        assert_eq!(order.amount_give, 2_000_000_000_000_000_000);
    }

    #[test]
    fn test_decorate_order_native_on_get_side() {
        let order = Order {
            id: 2,
            token_give: TOKEN.to_string(),
            token_get: ETHER_ADDRESS.to_string(),
            amount_give: 4_000_000_000_000_000_000,
            amount_get: 1_000_000_000_000_000_000,
            timestamp: 1_700_000_000,
        };
        let decorated = decorate_order(&order).unwrap();
        assert_eq!(decorated.ether_amount, 1.0);
        assert_eq!(decorated.token_amount, 4.0);
        assert_eq!(decorated.token_price, 0.25);
    }

    #[test]
    fn test_decorate_order_price_rounds_to_five_decimals() {
        let order = buy_order(3, 0, 1, 3);
        assert_eq!(decorate_order(&order).unwrap().token_price, 0.33333);
    }

    #[test]
    fn test_decorate_order_zero_token_amount() {
        let order = buy_order(4, 0, 1_000, 0);
        assert_eq!(
            decorate_order(&order).unwrap_err(),
            DecorateError::ZeroTokenAmount(4)
        );
    }

    #[test]
    fn test_pipeline_orders_newest_first() {
        let orders = vec![buy_order(1, 10, 10, 10), buy_order(2, 5, 10, 10)];
        let out = decorate_filled_orders(orders);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id(), 2);
        assert_eq!(out[0].timestamp(), 5);
        assert_eq!(out[1].id(), 1);
        assert_eq!(out[1].timestamp(), 10);
    }

    #[test]
    fn test_pipeline_trend_chain() {
        // prices 1.0, 1.2, 0.9 in time order → Up, Up, Down
        let orders = vec![
            buy_order(1, 100, 10, 10), // 1.0
            buy_order(2, 200, 12, 10), // 1.2
            buy_order(3, 300, 9, 10),  // 0.9
        ];
        let out = decorate_filled_orders(orders);
        // output is newest first: id 3, 2, 1
        assert_eq!(out[0].id(), 3);
        assert_eq!(out[0].token_price_class, PriceTrend::Down);
        assert_eq!(out[1].id(), 2);
        assert_eq!(out[1].token_price_class, PriceTrend::Up);
        assert_eq!(out[2].id(), 1);
        assert_eq!(out[2].token_price_class, PriceTrend::Up);
    }

    #[test]
    fn test_pipeline_equal_price_is_up() {
        let orders = vec![
            buy_order(1, 100, 10, 10),
            buy_order(2, 200, 10, 10),
        ];
        let out = decorate_filled_orders(orders);
        assert_eq!(out[0].token_price_class, PriceTrend::Up);
        assert_eq!(out[1].token_price_class, PriceTrend::Up);
    }

    #[test]
    fn test_pipeline_single_order_is_up() {
        let out = decorate_filled_orders(vec![buy_order(1, 100, 10, 10)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].token_price_class, PriceTrend::Up);
    }

    #[test]
    fn test_pipeline_empty_input() {
        assert!(decorate_filled_orders(Vec::new()).is_empty());
    }

    #[test]
    fn test_pipeline_drops_unpriceable_orders() {
        // the zero-amount order must neither appear nor break the chain:
        // 1.0 → (dropped) → 0.9 compares against 1.0 and tags Down
        let orders = vec![
            buy_order(1, 100, 10, 10),
            buy_order(2, 200, 1_000, 0),
            buy_order(3, 300, 9, 10),
        ];
        let out = decorate_filled_orders(orders);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id(), 3);
        assert_eq!(out[0].token_price_class, PriceTrend::Down);
        assert_eq!(out[1].id(), 1);
    }

    #[test]
    fn test_pipeline_equal_timestamps_keep_prior_order() {
        let orders = vec![
            buy_order(7, 100, 10, 10),
            buy_order(8, 100, 12, 10),
        ];
        let out = decorate_filled_orders(orders);
        // stable descending sort: ascending pass kept 7 before 8, so the
        // descending pass does too
        assert_eq!(out[0].id(), 7);
        assert_eq!(out[1].id(), 8);
    }
}
