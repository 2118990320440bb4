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
use crate::vec_sets::{is_subset, split_out, union};
use fnv::FnvHashMap;
use itertools::Itertools;
use std::cmp;

/// Frequent itemset to relative support, in [0,1].
pub type ItemsetSupport = FnvHashMap<Itemset, f64>;

/// A set of items, stored sorted and deduplicated so that two itemsets with
/// the same members compare and hash identically however they were built.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Itemset {
    items: Vec<Item>,
}

impl Ord for Itemset {
    fn cmp(&self, other: &Itemset) -> cmp::Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for Itemset {
    fn partial_cmp(&self, other: &Itemset) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Itemset {
    pub fn from_items<I>(items: I) -> Itemset
    where
        I: IntoIterator<Item = Item>,
    {
        Itemset {
            items: items.into_iter().sorted().dedup().collect(),
        }
    }

    pub fn singleton(item: Item) -> Itemset {
        Itemset { items: vec![item] }
    }

    // Caller guarantees `items` is sorted and duplicate free.
    fn from_sorted(items: Vec<Item>) -> Itemset {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Itemset { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// True when every item of this set appears in `transaction`, which must
    /// be sorted.
    pub fn contained_in(&self, transaction: &[Item]) -> bool {
        is_subset(&self.items, transaction)
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset::from_sorted(union(&self.items, &other.items))
    }

    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset::from_sorted(split_out(&self.items, &other.items))
    }

    /// The subsets formed by leaving out exactly one item.
    pub fn subsets_missing_one(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.items.len()).map(move |skip| {
            let items = self
                .items
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &item)| item)
                .collect();
            Itemset::from_sorted(items)
        })
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        Item::item_vec_to_string(&self.items, itemizer)
    }
}
