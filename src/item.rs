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

use crate::itemizer::Itemizer;

/// An interned item identifier. Ids are handed out by an `Itemizer`.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        let mut a: Vec<&str> = items.iter().map(|&id| itemizer.str_of(id)).collect();
        ensure_sorted(&mut a);
        a.join(" ")
    }
}

// If all items in the itemset convert to an integer, order by that integer,
// otherwise order lexicographically.
fn ensure_sorted(a: &mut [&str]) {
    if a.iter().all(|x| x.parse::<u64>().is_ok()) {
        a.sort_by_key(|x| x.parse::<u64>().unwrap_or(0));
    } else {
        a.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_sorted;

    #[test]
    fn test_ensure_sorted() {
        let mut numeric = vec!["10", "9", "100"];
        ensure_sorted(&mut numeric);
        assert_eq!(numeric, vec!["9", "10", "100"]);

        let mut mixed = vec!["milk", "10", "bread"];
        ensure_sorted(&mut mixed);
        assert_eq!(mixed, vec!["10", "bread", "milk"]);
    }
}
