pub mod order;

pub use order::{DecoratedFilledOrder, DecoratedOrder, Order, PriceTrend};
