// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::counter::Counter;
use crate::error::MiningError;
use crate::itemset::Itemset;
use crate::transactions::TransactionStore;

// Absorbs representation error in min_support * n, e.g. 0.29 * 100.
const SUPPORT_EPSILON: f64 = 1e-9;

/// Rejects thresholds that cannot be compared meaningfully, NaN and the
/// infinities.
pub fn check_threshold(name: &'static str, value: f64) -> Result<f64, MiningError> {
    if !value.is_finite() {
        return Err(MiningError::InvalidThreshold { name, value });
    }
    Ok(value)
}

/// Absolute occurrence count an itemset needs in `num_transactions`
/// transactions to be frequent. Never less than 1.
pub fn min_support_count(num_transactions: usize, min_support: f64) -> Result<u32, MiningError> {
    let min_support = check_threshold("min_support", min_support)?;
    let count = (min_support * num_transactions as f64 + SUPPORT_EPSILON).floor();
    Ok(count.max(1.0) as u32)
}

/// Counts, for each candidate, the transactions that contain it.
pub fn count_support(candidates: &[Itemset], store: &TransactionStore) -> Counter<Itemset> {
    let mut counter = Counter::new();
    for candidate in candidates {
        let count = store
            .iter()
            .filter(|transaction| candidate.contained_in(transaction))
            .count();
        if count > 0 {
            counter.add(candidate, count as u32);
        }
    }
    counter
}

#[cfg(test)]
mod tests {
    use super::{check_threshold, count_support, min_support_count};
    use crate::error::MiningError;
    use crate::itemizer::Itemizer;
    use crate::itemset::Itemset;
    use crate::transactions::TransactionStore;

    #[test]
    fn test_min_support_count() {
        assert_eq!(min_support_count(4, 0.5), Ok(2));
        assert_eq!(min_support_count(4, 1.0), Ok(4));
        assert_eq!(min_support_count(4, 0.01), Ok(1));
        assert_eq!(min_support_count(0, 0.5), Ok(1));
        assert_eq!(min_support_count(4, -0.5), Ok(1));
        // 0.29 * 100 is 28.999999999999996 in binary floating point.
        assert_eq!(min_support_count(100, 0.29), Ok(29));
        assert_eq!(min_support_count(3, 0.34), Ok(1));
    }

    #[test]
    fn test_non_finite_threshold_is_rejected() {
        match min_support_count(4, f64::NAN) {
            Err(MiningError::InvalidThreshold { name, .. }) => assert_eq!(name, "min_support"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(min_support_count(4, f64::INFINITY).is_err());
        assert_eq!(check_threshold("min_confidence", 0.25), Ok(0.25));
        assert_eq!(
            check_threshold("min_confidence", f64::NEG_INFINITY),
            Err(MiningError::InvalidThreshold {
                name: "min_confidence",
                value: f64::NEG_INFINITY
            })
        );
    }

    #[test]
    fn test_count_support() {
        let mut itemizer = Itemizer::new();
        let store = TransactionStore::from_names(
            &[vec!["a", "b"], vec!["a", "b", "c"], vec!["a"], vec!["b", "c"]],
            &mut itemizer,
        );
        let ab = Itemset::from_items(itemizer.to_id_vec(&["a", "b"]));
        let ac = Itemset::from_items(itemizer.to_id_vec(&["a", "c"]));
        let abc = Itemset::from_items(itemizer.to_id_vec(&["a", "b", "c"]));
        let counts = count_support(&[ab.clone(), ac.clone(), abc.clone()], &store);
        assert_eq!(counts.get(&ab), 2);
        assert_eq!(counts.get(&ac), 1);
        assert_eq!(counts.get(&abc), 1);
    }
}
