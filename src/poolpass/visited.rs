//! # Visited Records
//!
//! Pure operations over a [`VisitedSet`]: decoding whatever a previous
//! version left on disk, toggling a pool, and counting stamps.
//!
//! ## Encodings
//!
//! Two shapes of `visited.json` exist in the wild:
//!
//! ```text
//! legacy:  { "bondi-icebergs": true, "wylies": false }
//! current: { "bondi-icebergs": { "done": true, "date": "2025-01-01" } }
//! ```
//!
//! [`normalize`] accepts both (even mixed in one file) and always returns a
//! set in which every record has `done == true`. Entries that decode to
//! `done == false` are dropped: absence is the only way to say "not visited".

use crate::date::canonical_date;
use crate::model::{PoolId, VisitedRecord, VisitedSet};
use serde_json::Value;

/// What a toggle did to the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The pool was stamped with the given store-form date.
    Stamped(Option<String>),
    /// The pool's stamp was removed.
    Removed,
}

/// Decode a persisted payload into a well-formed set.
///
/// Returns `None` when the payload is not a JSON object at all.
pub fn normalize(raw: &Value) -> Option<VisitedSet> {
    let entries = raw.as_object()?;
    let mut set = VisitedSet::new();

    for (id, value) in entries {
        let record = match value {
            Value::Bool(true) => VisitedRecord::stamped(None),
            Value::Object(fields) => {
                let done = fields.get("done").map(truthy).unwrap_or(false);
                if !done {
                    continue;
                }
                let date = fields
                    .get("date")
                    .and_then(Value::as_str)
                    .and_then(canonical_date);
                VisitedRecord::stamped(date)
            }
            _ => continue,
        };
        set.insert(PoolId::new(id.as_str()), record);
    }

    Some(set)
}

/// JSON truthiness, as the browser builds that wrote these files applied it.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Flip the visited state of `id`.
///
/// A pool that is present and done loses its record entirely; anything else
/// gets a fresh `done` record dated `today` (store form).
pub fn toggle(set: &mut VisitedSet, id: &PoolId, today: Option<String>) -> Toggle {
    if set.get(id).is_some_and(|r| r.done) {
        set.remove(id);
        Toggle::Removed
    } else {
        set.insert(id.clone(), VisitedRecord::stamped(today.clone()));
        Toggle::Stamped(today)
    }
}

/// Number of pools marked as visited.
pub fn count(set: &VisitedSet) -> usize {
    set.values().filter(|r| r.done).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(s: &str) -> PoolId {
        PoolId::from(s)
    }

    #[test]
    fn legacy_true_becomes_undated_record() {
        let set = normalize(&json!({ "a": true, "b": false })).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set[&id("a")], VisitedRecord::stamped(None));
        assert!(!set.contains_key(&id("b")));
    }

    #[test]
    fn current_form_is_kept() {
        let set = normalize(&json!({ "a": { "done": true, "date": "2025-01-01" } })).unwrap();
        assert_eq!(set[&id("a")].date.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn display_form_dates_are_canonicalized() {
        let set = normalize(&json!({ "a": { "done": true, "date": "07/03/2025" } })).unwrap();
        assert_eq!(set[&id("a")].date.as_deref(), Some("2025-03-07"));
    }

    #[test]
    fn invalid_or_missing_dates_become_none() {
        let set = normalize(&json!({
            "a": { "done": true, "date": "not a date" },
            "b": { "done": true, "date": 20250101 },
            "c": { "done": true }
        }))
        .unwrap();
        assert!(set.values().all(|r| r.date.is_none()));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn done_is_coerced() {
        let set = normalize(&json!({
            "one": { "done": 1, "date": null },
            "yes": { "done": "yes" },
            "zero": { "done": 0 },
            "empty": { "done": "" },
            "missing": { "date": "2025-01-01" }
        }))
        .unwrap();
        let mut keys: Vec<_> = set.keys().map(PoolId::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["one", "yes"]);
    }

    #[test]
    fn explicit_not_done_objects_are_dropped() {
        let set = normalize(&json!({ "a": { "done": false, "date": "2025-01-01" } })).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn other_values_are_dropped() {
        let set = normalize(&json!({
            "n": 1,
            "s": "true",
            "z": null,
            "l": [true],
            "ok": true
        }))
        .unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains_key(&id("ok")));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(normalize(&json!([1, 2])).is_none());
        assert!(normalize(&json!("visited")).is_none());
        assert!(normalize(&Value::Null).is_none());
    }

    #[test]
    fn toggle_inserts_then_removes() {
        let mut set = VisitedSet::new();
        let today = Some("2025-01-01".to_string());

        assert_eq!(
            toggle(&mut set, &id("a"), today.clone()),
            Toggle::Stamped(today.clone())
        );
        assert_eq!(set[&id("a")], VisitedRecord::stamped(today.clone()));

        assert_eq!(toggle(&mut set, &id("a"), today), Toggle::Removed);
        assert!(!set.contains_key(&id("a")));
    }

    #[test]
    fn toggle_on_not_done_record_stamps_it() {
        let mut set = VisitedSet::new();
        set.insert(
            id("a"),
            VisitedRecord {
                done: false,
                date: None,
            },
        );

        let outcome = toggle(&mut set, &id("a"), Some("2025-01-01".into()));
        assert!(matches!(outcome, Toggle::Stamped(_)));
        assert!(set[&id("a")].done);
    }

    #[test]
    fn count_only_counts_done() {
        let mut set = VisitedSet::new();
        set.insert(id("a"), VisitedRecord::stamped(None));
        set.insert(id("b"), VisitedRecord::stamped(Some("2025-01-01".into())));
        set.insert(
            id("c"),
            VisitedRecord {
                done: false,
                date: None,
            },
        );
        assert_eq!(count(&set), 2);
    }
}
