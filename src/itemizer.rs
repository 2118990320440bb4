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
use fnv::FnvHashMap;

/// Interns item names into dense `Item` ids and back.
pub struct Itemizer {
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Default for Itemizer {
    fn default() -> Self {
        Itemizer::new()
    }
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }

    // Builds an itemizer whose ids follow the lexicographic order of the
    // names, so that ordering by Item is ordering by name.
    pub fn sorted<'a, I>(names: I) -> Itemizer
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut all: Vec<&str> = names.into_iter().collect();
        all.sort_unstable();
        all.dedup();
        let mut itemizer = Itemizer::new();
        for name in all {
            itemizer.id_of(name);
        }
        itemizer
    }

    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = Item::with_id(self.item_id_to_str.len() as u32);
        self.item_str_to_id.insert(String::from(item), id);
        self.item_id_to_str.push(String::from(item));
        debug_assert_eq!(self.str_of(id), item);
        id
    }

    pub fn lookup(&self, item: &str) -> Option<Item> {
        self.item_str_to_id.get(item).cloned()
    }

    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index()]
    }

    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }

    pub fn to_id_vec(&mut self, items: &[&str]) -> Vec<Item> {
        items.iter().map(|s| self.id_of(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Itemizer;

    #[test]
    fn test_id_of_is_stable() {
        let mut itemizer = Itemizer::new();
        let milk = itemizer.id_of("milk");
        let bread = itemizer.id_of("bread");
        assert_ne!(milk, bread);
        assert_eq!(itemizer.id_of("milk"), milk);
        assert_eq!(itemizer.str_of(bread), "bread");
        assert_eq!(itemizer.len(), 2);
        assert_eq!(itemizer.lookup("eggs"), None);
    }

    #[test]
    fn test_sorted_orders_by_name() {
        let itemizer = Itemizer::sorted(vec!["c", "a", "b", "a"]);
        let a = itemizer.lookup("a").unwrap();
        let b = itemizer.lookup("b").unwrap();
        let c = itemizer.lookup("c").unwrap();
        assert!(a < b && b < c);
        assert_eq!(itemizer.len(), 3);
    }
}
