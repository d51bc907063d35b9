//! Trade filtering.

use report_core::{OrderEvent, Trade};
use tracing::warn;

/// Keep only filled order events, in their original order.
pub fn filter_filled(events: Vec<OrderEvent>) -> Vec<OrderEvent> {
    events.into_iter().filter(OrderEvent::is_filled).collect()
}

/// Convert filled events into ledger trades. Events missing a fill field
/// are skipped with a warning.
pub fn into_trades(filled: &[OrderEvent]) -> Vec<Trade> {
    filled
        .iter()
        .filter_map(|event| match Trade::try_from(event) {
            Ok(trade) => Some(trade),
            Err(e) => {
                warn!("Skipping trade: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn events() -> Vec<OrderEvent> {
        serde_json::from_value(json!([
            { "orderId": 2, "status": "submitted", "time": 1451916000, "direction": "buy" },
            { "orderId": 2, "status": "filled", "time": 1451916000, "direction": "buy",
              "symbolValue": "XOM", "fillQuantity": 100, "fillPrice": 80.0, "orderFeeAmount": 1.0 },
            { "orderId": 1, "status": "filled", "time": 1451916100, "direction": "sell",
              "symbolValue": "XOM", "fillQuantity": -100, "fillPrice": 81.0 },
            { "orderId": 1, "status": "FILLED", "time": 1451916100, "direction": "sell" },
            { "orderId": 2, "status": "filled", "time": 1451916200, "direction": "buy",
              "symbolValue": "XOM", "fillQuantity": 100, "fillPrice": 80.0 },
            { "orderId": 3, "status": "canceled" }
        ]))
        .unwrap()
    }

    #[test]
    fn test_filter_keeps_filled_subsequence_in_order() {
        let filled = filter_filled(events());
        let ids: Vec<Option<i64>> = filled.iter().map(|e| e.order_id).collect();
        // No reordering by id and no dedup of repeated ids.
        assert_eq!(ids, vec![Some(2), Some(1), Some(2)]);
        assert!(filled.iter().all(|e| e.status.as_deref() == Some("filled")));
    }

    #[test]
    fn test_filter_without_fills_is_empty() {
        let events: Vec<OrderEvent> = serde_json::from_value(json!([
            { "status": "submitted" },
            { "status": "canceled" }
        ]))
        .unwrap();
        assert!(filter_filled(events).is_empty());
        assert!(filter_filled(Vec::new()).is_empty());
    }

    #[test]
    fn test_into_trades_skips_incomplete() {
        let mut filled = filter_filled(events());
        filled[1].fill_price = None;

        let trades = into_trades(&filled);
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].order_id, 2);
        assert_eq!(trades[1].time.timestamp(), 1451916200);
    }
}
