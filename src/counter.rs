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

use fnv::FnvHashMap;
use std::hash::Hash;

/// Occurrence counter keyed by item or itemset.
pub struct Counter<T> {
    counter: FnvHashMap<T, u32>,
}

impl<T> Default for Counter<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Counter::new()
    }
}

impl<T> Counter<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Counter<T> {
        Counter {
            counter: FnvHashMap::default(),
        }
    }

    pub fn add(&mut self, item: &T, count: u32) {
        if let Some(c) = self.counter.get_mut(item) {
            *c += count;
            return;
        }
        self.counter.insert(item.clone(), count);
    }

    pub fn get(&self, item: &T) -> u32 {
        self.counter.get(item).cloned().unwrap_or(0)
    }

    /// Entries whose count meets `min_count`, inclusive.
    pub fn items_with_count_at_least(&self, min_count: u32) -> Vec<(T, u32)> {
        self.counter
            .iter()
            .filter(|&(_, &count)| count >= min_count)
            .map(|(item, &count)| (item.clone(), count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Counter;

    #[test]
    fn test_threshold_is_inclusive() {
        let mut counter: Counter<&str> = Counter::new();
        counter.add(&"a", 2);
        counter.add(&"b", 1);
        counter.add(&"a", 1);
        assert_eq!(counter.get(&"a"), 3);
        assert_eq!(counter.get(&"z"), 0);

        let mut at_least_one = counter.items_with_count_at_least(1);
        at_least_one.sort();
        assert_eq!(at_least_one, vec![("a", 3), ("b", 1)]);
        assert_eq!(counter.items_with_count_at_least(3), vec![("a", 3)]);
        assert!(counter.items_with_count_at_least(4).is_empty());
    }
}
