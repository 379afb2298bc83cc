use chrono::{Local, TimeZone};

/// Sentinel address the exchange contract uses for the chain's native
/// currency in place of a token contract address.
pub const ETHER_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Decimals of both the native currency and the exchange token.
pub const DECIMALS: i32 = 18;

/// Token prices are rounded to 5 decimal places.
pub const PRICE_PRECISION: f64 = 100_000.0;

/// Shown in place of a timestamp that cannot be represented.
pub const TIMESTAMP_PLACEHOLDER: &str = "--:--:--";

/// Whether `address` is the native-currency sentinel.
///
/// Addresses arrive in mixed case (checksummed or not), so the comparison is
/// case-insensitive.
pub fn is_ether(address: &str) -> bool {
    address.eq_ignore_ascii_case(ETHER_ADDRESS)
}

/// Scale a raw wei-denominated amount to human ether units.
pub fn ether(wei: u128) -> f64 {
    wei as f64 / 10_f64.powi(DECIMALS)
}

/// Scale a raw token amount (smallest unit) to human token units.
pub fn tokens(raw: u128) -> f64 {
    raw as f64 / 10_f64.powi(DECIMALS)
}

/// Round a price to [`PRICE_PRECISION`] (5 decimal places).
pub fn round_price(price: f64) -> f64 {
    (price * PRICE_PRECISION).round() / PRICE_PRECISION
}

/// Format Unix seconds as a local `h:mm:ss am/pm M/D` string, the layout the
/// trades table displays. Out-of-range timestamps render as
/// [`TIMESTAMP_PLACEHOLDER`].
pub fn format_timestamp(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format("%-I:%M:%S %P %-m/%-d").to_string())
        .unwrap_or_else(|| TIMESTAMP_PLACEHOLDER.to_string())
}
