use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A raw filled order as delivered by the blockchain connection layer.
///
/// Amounts are in the smallest on-chain unit (wei-scale). The upstream layer
/// emits them either as JSON integers or as decimal strings (large wei values
/// do not fit a JSON number), so both encodings are accepted on input. On
/// output they are always written back as strings.
///
/// Orders are never mutated; decoration produces new records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    /// Address of the asset the maker gave up.
    pub token_give: String,
    /// Address of the asset the maker received.
    pub token_get: String,
    #[serde(
        serialize_with = "amount_to_string",
        deserialize_with = "amount_from_json"
    )]
    pub amount_give: u128,
    #[serde(
        serialize_with = "amount_to_string",
        deserialize_with = "amount_from_json"
    )]
    pub amount_get: u128,
    /// Unix seconds.
    pub timestamp: i64,
}

/// An [`Order`] enriched with human-readable display fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedOrder {
    #[serde(flatten)]
    pub order: Order,
    /// Token side of the trade, scaled to human units.
    pub token_amount: f64,
    /// Native-currency side of the trade, scaled to human units.
    pub ether_amount: f64,
    /// Price in native currency per token, rounded to 5 decimal places.
    pub token_price: f64,
    /// Local `h:mm:ss am/pm M/D` rendering of the order timestamp.
    pub formatted_timestamp: String,
}

/// A [`DecoratedOrder`] tagged with its price trend relative to the
/// chronologically preceding trade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedFilledOrder {
    #[serde(flatten)]
    pub decorated: DecoratedOrder,
    pub token_price_class: PriceTrend,
}

impl DecoratedFilledOrder {
    pub fn id(&self) -> u64 {
        self.decorated.order.id
    }

    pub fn timestamp(&self) -> i64 {
        self.decorated.order.timestamp
    }

    pub fn token_price(&self) -> f64 {
        self.decorated.token_price
    }
}

/// Whether a trade's price rose or fell relative to the immediately
/// preceding trade in time order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
}

impl PriceTrend {
    /// Bootstrap text class the rendering layer attaches to the price cell.
    pub fn css_class(&self) -> &'static str {
        match self {
            PriceTrend::Up => "success",
            PriceTrend::Down => "danger",
        }
    }
}

fn amount_to_string<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&amount.to_string())
}

fn amount_from_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Num(u64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Num(n) => Ok(n as u128),
        RawAmount::Text(s) => s.trim().parse::<u128>().map_err(serde::de::Error::custom),
    }
}
