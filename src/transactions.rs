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

use crate::item::Item;
use crate::itemizer::Itemizer;

/// The read-only transaction log a mining run works over. Each transaction
/// is kept sorted and duplicate free; its position is its transaction id.
#[derive(Clone, Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Vec<Item>>,
}

impl TransactionStore {
    pub fn new(transactions: Vec<Vec<Item>>) -> TransactionStore {
        let transactions = transactions
            .into_iter()
            .map(|mut transaction| {
                transaction.sort_unstable();
                transaction.dedup();
                transaction
            })
            .collect();
        TransactionStore { transactions }
    }

    pub fn from_names<S: AsRef<str>>(
        transactions: &[Vec<S>],
        itemizer: &mut Itemizer,
    ) -> TransactionStore {
        TransactionStore::new(
            transactions
                .iter()
                .map(|t| t.iter().map(|s| itemizer.id_of(s.as_ref())).collect())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, tid: usize) -> Option<&[Item]> {
        self.transactions.get(tid).map(|t| t.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Item]> {
        self.transactions.iter().map(|t| t.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionStore;
    use crate::item::Item;
    use crate::itemizer::Itemizer;

    #[test]
    fn test_transactions_are_sorted_and_deduped() {
        let to_items = |v: &[u32]| v.iter().map(|&i| Item::with_id(i)).collect::<Vec<Item>>();
        let store = TransactionStore::new(vec![to_items(&[3, 1, 3, 2]), to_items(&[]), to_items(&[5])]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0), Some(to_items(&[1, 2, 3]).as_slice()));
        assert_eq!(store.get(1), Some(to_items(&[]).as_slice()));
        assert_eq!(store.get(3), None);
    }

    #[test]
    fn test_from_names() {
        let mut itemizer = Itemizer::new();
        let store = TransactionStore::from_names(
            &[vec!["milk", "bread"], vec!["bread"]],
            &mut itemizer,
        );
        let bread = itemizer.lookup("bread").unwrap();
        assert_eq!(store.iter().filter(|t| t.contains(&bread)).count(), 2);
        assert!(!store.is_empty());
    }
}
