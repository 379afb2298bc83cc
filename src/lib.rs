//! # trade-view-rs
//!
//! A Rust library for deriving presentation-ready view state from the state
//! snapshot of a decentralized-exchange trading UI. Reads the raw
//! blockchain-derived tree, reshapes and annotates it (human-scaled amounts,
//! 5-decimal prices, color-coded price trends, contract-loaded flags), and
//! hands the result to rendering.
//!
//! ## Selectors
//!
//! | Selector | Returns | Default on missing state |
//! |----------|---------|--------------------------|
//! | `account` | wallet address | placeholder string |
//! | `token_loaded` | bool | `false` |
//! | `exchange_loaded` | bool | `false` |
//! | `exchange_contract` | opaque handle | `None` |
//! | `contracts_loaded` | token AND exchange loaded | `false` |
//! | `filled_orders_loaded` | bool | `false` |
//! | `filled_orders` | decorated trades, newest first | empty |
//!
//! All selectors are fail-soft: incomplete or malformed state degrades to the
//! documented default, never a panic. Results are memoized per snapshot
//! identity in a consumer-owned [`Selectors`] table.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use trade_view_rs::Selectors;
//!
//! let state = Arc::new(serde_json::json!({
//!     "token": { "loaded": true },
//!     "exchange": {
//!         "loaded": true,
//!         "filledOrders": {
//!             "loaded": true,
//!             "data": [{
//!                 "id": 1,
//!                 "tokenGive": "0x0000000000000000000000000000000000000000",
//!                 "tokenGet": "0xfab46e002bbf0b4509813474841e0716e6730136",
//!                 "amountGive": "2000000000000000000",
//!                 "amountGet": "4000000000000000000",
//!                 "timestamp": 1700000000
//!             }]
//!         }
//!     }
//! }));
//!
//! let mut selectors = Selectors::new();
//! assert!(selectors.contracts_loaded(&state));
//! for trade in selectors.filled_orders(&state) {
//!     println!(
//!         "{} {} @ {} [{}]",
//!         trade.decorated.formatted_timestamp,
//!         trade.decorated.token_amount,
//!         trade.token_price(),
//!         trade.token_price_class.css_class(),
//!     );
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Print the trades table derived from a state snapshot
//! cargo run --release -- state.json
//!
//! # Also export the decorated trades as JSON
//! cargo run --release -- state.json --export trades.json
//! ```

pub mod cache;
pub mod decorate;
pub mod models;
pub mod selectors;
pub mod state;
pub mod utils;

pub use cache::{load_from_file, load_state, save_to_file};
pub use decorate::{decorate_filled_order, decorate_filled_orders, decorate_order, DecorateError};
pub use models::{DecoratedFilledOrder, DecoratedOrder, Order, PriceTrend};
pub use selectors::{Memo, Selectors};
pub use state::StateRef;
