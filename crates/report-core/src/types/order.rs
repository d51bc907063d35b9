//! Order events and filled trades.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::IncompleteFill;

/// Status value of an order event that represents an executed fill.
pub const FILLED_STATUS: &str = "filled";

/// One raw entry of the order-events log.
///
/// Every field is optional so that any array of objects can be loaded and
/// filtered; `Trade::try_from` enforces what the ledger needs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub order_id: Option<i64>,
    pub status: Option<String>,
    /// Epoch seconds.
    pub time: Option<f64>,
    pub symbol_value: Option<String>,
    pub symbol: Option<Value>,
    pub direction: Option<String>,
    pub fill_quantity: Option<Decimal>,
    pub fill_price: Option<Decimal>,
    pub order_fee_amount: Option<Decimal>,
}

impl OrderEvent {
    /// Whether this event is an executed fill. Exact, case-sensitive match.
    pub fn is_filled(&self) -> bool {
        self.status.as_deref() == Some(FILLED_STATUS)
    }

    /// Display symbol: `symbolValue`, else `symbol`, else `"N/A"`.
    pub fn display_symbol(&self) -> String {
        if let Some(value) = &self.symbol_value {
            return value.clone();
        }
        match &self.symbol {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "N/A".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Order direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Buy,
    Sell,
    /// Anything else the log reports, kept verbatim.
    Other(String),
}

impl Direction {
    /// Parse a direction, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "buy" => Direction::Buy,
            "sell" => Direction::Sell,
            _ => Direction::Other(raw.trim().to_string()),
        }
    }

    /// CSS class for ledger rows.
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Buy => "buy",
            _ => "sell",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Buy => write!(f, "BUY"),
            Direction::Sell => write!(f, "SELL"),
            Direction::Other(raw) => write!(f, "{}", raw.to_uppercase()),
        }
    }
}

/// A filled order, as shown in the trade ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub order_id: i64,
    pub time: DateTime<Utc>,
    pub symbol: String,
    pub direction: Direction,
    /// Signed as reported by the log.
    pub quantity: Decimal,
    pub fill_price: Decimal,
    pub fee: Decimal,
}

impl Trade {
    /// Absolute notional value of the fill.
    pub fn total_value(&self) -> Decimal {
        (self.quantity * self.fill_price).abs()
    }
}

impl TryFrom<&OrderEvent> for Trade {
    type Error = IncompleteFill;

    fn try_from(event: &OrderEvent) -> Result<Self, Self::Error> {
        let missing = |field| IncompleteFill {
            order_id: event.order_id,
            field,
        };

        let order_id = event.order_id.ok_or_else(|| missing("orderId"))?;
        let time = event
            .time
            .filter(|t| t.is_finite())
            .and_then(|t| DateTime::from_timestamp(t.trunc() as i64, 0))
            .ok_or_else(|| missing("time"))?;
        let direction = event
            .direction
            .as_deref()
            .map(Direction::parse)
            .ok_or_else(|| missing("direction"))?;
        let quantity = event.fill_quantity.ok_or_else(|| missing("fillQuantity"))?;
        let fill_price = event.fill_price.ok_or_else(|| missing("fillPrice"))?;

        Ok(Self {
            order_id,
            time,
            symbol: event.display_symbol(),
            direction,
            quantity,
            fill_price,
            fee: event.order_fee_amount.unwrap_or(Decimal::ZERO),
        })
    }
}
