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

use crate::error::MiningError;
use crate::item::Item;
use crate::itemset::{Itemset, ItemsetSupport};
use crate::miner::ItemsetMiner;
use crate::support::min_support_count;
use crate::transactions::TransactionStore;
use crate::vec_sets::intersection;
use tracing::debug;

/// Vertical layout of a transaction store: for each item, the ascending
/// list of ids of the transactions containing it.
pub struct VerticalIndex {
    index: Vec<Vec<usize>>,
}

impl VerticalIndex {
    pub fn build(store: &TransactionStore) -> VerticalIndex {
        let mut index: Vec<Vec<usize>> = Vec::new();
        for (tid, transaction) in store.iter().enumerate() {
            for item in transaction {
                let item_index = item.as_index();
                if index.len() <= item_index {
                    index.resize(item_index + 1, vec![]);
                }
                index[item_index].push(tid);
            }
        }
        VerticalIndex { index }
    }

    pub fn tids(&self, item: Item) -> &[usize] {
        self.index
            .get(item.as_index())
            .map(|tids| tids.as_slice())
            .unwrap_or(&[])
    }

    /// Items whose TID-set has at least `min_count` entries, ordered by item.
    pub fn frequent_items(&self, min_count: u32) -> Vec<(Item, &[usize])> {
        self.index
            .iter()
            .enumerate()
            .filter(|(_, tids)| !tids.is_empty() && tids.len() >= min_count as usize)
            .map(|(id, tids)| (Item::with_id(id as u32), tids.as_slice()))
            .collect()
    }
}

/// Depth-first miner. Extends a prefix one item at a time, taking the size
/// of the intersected TID-set as the support count.
pub struct Eclat;

impl ItemsetMiner for Eclat {
    fn name(&self) -> &'static str {
        "Eclat"
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

        let index = VerticalIndex::build(store);
        let singletons = index.frequent_items(min_count);
        debug!(frequent = singletons.len(), "eclat singletons");

        let all_tids: Vec<usize> = (0..num_transactions).collect();
        let found = search(
            &Itemset::from_items(vec![]),
            &all_tids,
            &singletons,
            min_count as usize,
        );
        debug!(frequent = found.len(), "eclat search finished");

        let n = num_transactions as f64;
        Ok(found
            .into_iter()
            .map(|(itemset, count)| (itemset, count as f64 / n))
            .collect())
    }
}

// Each extension only considers candidates after itself, so every itemset is
// reached through exactly one path.
fn search(
    prefix: &Itemset,
    prefix_tids: &[usize],
    candidates: &[(Item, &[usize])],
    min_count: usize,
) -> Vec<(Itemset, usize)> {
    let mut found = vec![];
    for (position, &(item, tids)) in candidates.iter().enumerate() {
        let tids = intersection(prefix_tids, tids);
        if tids.len() < min_count {
            continue;
        }
        let itemset = prefix.union(&Itemset::singleton(item));
        let mut below = search(&itemset, &tids, &candidates[position + 1..], min_count);
        found.push((itemset, tids.len()));
        found.append(&mut below);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::{Eclat, VerticalIndex};
    use crate::itemizer::Itemizer;
    use crate::itemset::Itemset;
    use crate::miner::ItemsetMiner;
    use crate::transactions::TransactionStore;

    #[test]
    fn test_vertical_index() {
        let mut itemizer = Itemizer::new();
        let transactions = vec![
            vec!["a", "b", "c", "d", "e", "f"],
            vec!["g", "h", "i", "j", "k", "l"],
            vec!["z", "x"],
            vec!["z", "x"],
            vec!["z", "x", "y"],
            vec!["z", "x", "y", "i"],
        ];
        let store = TransactionStore::from_names(&transactions, &mut itemizer);
        let index = VerticalIndex::build(&store);

        assert_eq!(index.tids(itemizer.id_of("a")), &[0]);
        assert_eq!(index.tids(itemizer.id_of("i")), &[1, 5]);
        assert_eq!(index.tids(itemizer.id_of("z")), &[2, 3, 4, 5]);
        assert_eq!(index.tids(itemizer.id_of("y")), &[4, 5]);
        assert!(index.tids(itemizer.id_of("unseen")).is_empty());

        let frequent: Vec<&str> = index
            .frequent_items(2)
            .into_iter()
            .map(|(item, _)| itemizer.str_of(item))
            .collect();
        assert_eq!(frequent, vec!["i", "z", "x", "y"]);
    }

    #[test]
    fn test_mine_triple() {
        let mut itemizer = Itemizer::new();
        let store = TransactionStore::from_names(
            &[vec!["x", "y", "z"], vec!["x", "y"], vec!["z"]],
            &mut itemizer,
        );
        let result = Eclat.mine(&store, 0.67).unwrap();
        let get = |items: &[&str], itemizer: &mut Itemizer| {
            result
                .get(&Itemset::from_items(itemizer.to_id_vec(items)))
                .cloned()
        };
        assert_eq!(result.len(), 4);
        assert_eq!(get(&["x"], &mut itemizer), Some(2.0 / 3.0));
        assert_eq!(get(&["y"], &mut itemizer), Some(2.0 / 3.0));
        assert_eq!(get(&["z"], &mut itemizer), Some(2.0 / 3.0));
        assert_eq!(get(&["x", "y"], &mut itemizer), Some(2.0 / 3.0));
        assert_eq!(get(&["x", "z"], &mut itemizer), None);
    }

    #[test]
    fn test_mine_empty_store() {
        let result = Eclat.mine(&TransactionStore::default(), 0.1).unwrap();
        assert!(result.is_empty());
    }
}
