use std::cmp::Reverse;

use crate::tally::MedalTallyRow;

/// Orders rows by descending `(gold, silver, bronze)` and numbers them `1..=N`.
///
/// The sort is stable and applies no further tie-break, so rows with an equal
/// triple keep the order the aggregator emitted them in. Ranks are positional:
/// tied rows still receive distinct, consecutive numbers.
pub fn order_and_rank<K>(mut rows: Vec<MedalTallyRow<K>>) -> Vec<MedalTallyRow<K>> {
    rows.sort_by_key(|row| Reverse(row.counts().triple()));
    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = Some(position + 1);
    }
    rows
}
