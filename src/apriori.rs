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
use crate::item::Item;
use crate::itemset::{Itemset, ItemsetSupport};
use crate::miner::ItemsetMiner;
use crate::support::{count_support, min_support_count};
use crate::transactions::TransactionStore;
use fnv::{FnvHashMap, FnvHashSet};
use tracing::debug;

/// Breadth-first miner. Grows frequent itemsets one size at a time, counting
/// each level's candidates against the horizontal transaction layout.
pub struct Apriori;

impl ItemsetMiner for Apriori {
    fn name(&self) -> &'static str {
        "Apriori"
    }

    fn mine(
        &self,
        store: &TransactionStore,
        min_support: f64,
    ) -> Result<ItemsetSupport, MiningError> {
        let num_transactions = store.len();
        if num_transactions == 0 {
            return Ok(ItemsetSupport::default());
        }
        let min_count = min_support_count(num_transactions, min_support)?;

        let mut item_count: Counter<Item> = Counter::new();
        for transaction in store.iter() {
            for item in transaction {
                item_count.add(item, 1);
            }
        }

        let mut level: Vec<(Itemset, u32)> = item_count
            .items_with_count_at_least(min_count)
            .into_iter()
            .map(|(item, count)| (Itemset::singleton(item), count))
            .collect();

        let mut frequent: FnvHashMap<Itemset, u32> = FnvHashMap::default();
        let mut k = 2;
        while !level.is_empty() {
            debug!(size = k - 1, frequent = level.len(), "apriori level");
            let previous: Vec<Itemset> = level
                .into_iter()
                .map(|(itemset, count)| {
                    frequent.insert(itemset.clone(), count);
                    itemset
                })
                .collect();

            let candidates = generate_candidates(&previous, k);
            debug!(size = k, candidates = candidates.len(), "apriori candidates");
            level = count_support(&candidates, store).items_with_count_at_least(min_count);
            k += 1;
        }

        let n = num_transactions as f64;
        Ok(frequent
            .into_iter()
            .map(|(itemset, count)| (itemset, count as f64 / n))
            .collect())
    }
}

/// Joins the frequent itemsets of size k-1 into candidates of size k, and
/// keeps only those whose every (k-1)-subset is itself frequent.
pub fn generate_candidates(previous: &[Itemset], k: usize) -> Vec<Itemset> {
    let mut previous: Vec<Itemset> = previous.to_vec();
    previous.sort();
    let frequent: FnvHashSet<Itemset> = previous.iter().cloned().collect();

    let mut seen: FnvHashSet<Itemset> = FnvHashSet::default();
    let mut candidates: Vec<Itemset> = vec![];
    for (index, a) in previous.iter().enumerate() {
        for b in &previous[index + 1..] {
            let union = a.union(b);
            // A union of size k means a and b share exactly k-2 items.
            if union.len() != k || seen.contains(&union) {
                continue;
            }
            if union.subsets_missing_one().all(|s| frequent.contains(&s)) {
                candidates.push(union.clone());
            }
            seen.insert(union);
        }
    }
    candidates.sort();
    candidates
}

#[cfg(test)]
mod tests {
    use super::{generate_candidates, Apriori};
    use crate::item::Item;
    use crate::itemizer::Itemizer;
    use crate::itemset::Itemset;
    use crate::miner::ItemsetMiner;
    use crate::transactions::TransactionStore;

    fn itemset(ids: &[u32]) -> Itemset {
        Itemset::from_items(ids.iter().map(|&i| Item::with_id(i)))
    }

    fn support_of(
        result: &crate::itemset::ItemsetSupport,
        itemizer: &mut Itemizer,
        items: &[&str],
    ) -> Option<f64> {
        result
            .get(&Itemset::from_items(itemizer.to_id_vec(items)))
            .cloned()
    }

    #[test]
    fn test_generate_candidates_prunes_infrequent_subsets() {
        // {1,2,3} has all subsets frequent; {2,3,4} lacks {3,4}.
        let previous = vec![itemset(&[1, 2]), itemset(&[1, 3]), itemset(&[2, 3]), itemset(&[2, 4])];
        let candidates = generate_candidates(&previous, 3);
        assert_eq!(candidates, vec![itemset(&[1, 2, 3])]);
    }

    #[test]
    fn test_generate_candidates_dedupes() {
        let previous = vec![itemset(&[1]), itemset(&[2]), itemset(&[3])];
        let candidates = generate_candidates(&previous, 2);
        assert_eq!(
            candidates,
            vec![itemset(&[1, 2]), itemset(&[1, 3]), itemset(&[2, 3])]
        );

        // All three pairs join to the same triple.
        let candidates = generate_candidates(&candidates, 3);
        assert_eq!(candidates, vec![itemset(&[1, 2, 3])]);
    }

    #[test]
    fn test_mine_pairs() {
        let mut itemizer = Itemizer::new();
        let store = TransactionStore::from_names(
            &[vec!["a", "b"], vec!["a", "b", "c"], vec!["a"], vec!["b", "c"]],
            &mut itemizer,
        );
        let result = Apriori.mine(&store, 0.5).unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(support_of(&result, &mut itemizer, &["a"]), Some(0.75));
        assert_eq!(support_of(&result, &mut itemizer, &["b"]), Some(0.75));
        assert_eq!(support_of(&result, &mut itemizer, &["c"]), Some(0.5));
        assert_eq!(support_of(&result, &mut itemizer, &["a", "b"]), Some(0.5));
        assert_eq!(support_of(&result, &mut itemizer, &["b", "c"]), Some(0.5));
        assert_eq!(support_of(&result, &mut itemizer, &["a", "c"]), None);
    }

    #[test]
    fn test_mine_empty_store() {
        let result = Apriori.mine(&TransactionStore::default(), 0.5).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_mine_rejects_nan() {
        let mut itemizer = Itemizer::new();
        let store = TransactionStore::from_names(&[vec!["a"]], &mut itemizer);
        assert!(Apriori.mine(&store, f64::NAN).is_err());
    }
}
