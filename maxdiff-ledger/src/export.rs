//! Flat export of the ledger: the reference shape any storage or transport
//! layer must preserve.

use serde_json::{json, Map, Value};

use crate::ResponseLedger;

/// One JSON record per (participant, question) with columns
/// `participant_id, question_number, item_1..item_k, lowest, highest`.
/// Item values are 1-based catalog indices; `lowest`/`highest` are null
/// until answered.
pub fn export_rows(ledger: &ResponseLedger) -> Vec<Value> {
    ledger
        .rows()
        .map(|row| {
            let mut record = Map::new();
            record.insert("participant_id".to_string(), json!(row.participant_id));
            record.insert("question_number".to_string(), json!(row.question_number));
            for (i, item_id) in row.set.iter().enumerate() {
                record.insert(format!("item_{}", i + 1), json!(item_id));
            }
            let (lowest, highest) = match row.response {
                Some(r) => (json!(r.lowest), json!(r.highest)),
                None => (Value::Null, Value::Null),
            };
            record.insert("lowest".to_string(), lowest);
            record.insert("highest".to_string(), highest);
            Value::Object(record)
        })
        .collect()
}
