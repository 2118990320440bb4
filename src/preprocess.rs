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

use fnv::FnvHashSet;

/// Counts gathered while cleaning a raw transaction log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreprocessReport {
    pub total_transactions_before: usize,
    pub empty_transactions: usize,
    pub single_item_transactions: usize,
    pub duplicate_items_instances: usize,
    pub invalid_items_instances: usize,
    pub total_transactions_after: usize,
    pub total_items_after: usize,
    pub unique_products_after: usize,
}

pub fn normalize(item: &str) -> String {
    item.trim().to_lowercase()
}

/// Normalizes item names, drops items outside `vocabulary` (when given) and
/// repeated items, then drops transactions left with fewer than two items.
/// Transaction order is preserved.
pub fn preprocess_transactions<S: AsRef<str>>(
    raw_transactions: &[Vec<S>],
    vocabulary: Option<&FnvHashSet<String>>,
) -> (Vec<Vec<String>>, PreprocessReport) {
    let mut report = PreprocessReport {
        total_transactions_before: raw_transactions.len(),
        ..PreprocessReport::default()
    };

    let mut cleaned: Vec<Vec<String>> = vec![];
    for raw in raw_transactions {
        let mut seen: FnvHashSet<String> = FnvHashSet::default();
        let mut items: Vec<String> = vec![];
        for item in raw {
            let item = normalize(item.as_ref());
            if item.is_empty() {
                continue;
            }
            if let Some(vocabulary) = vocabulary {
                if !vocabulary.contains(&item) {
                    report.invalid_items_instances += 1;
                    continue;
                }
            }
            if seen.contains(&item) {
                report.duplicate_items_instances += 1;
                continue;
            }
            seen.insert(item.clone());
            items.push(item);
        }

        match items.len() {
            0 => report.empty_transactions += 1,
            1 => report.single_item_transactions += 1,
            _ => cleaned.push(items),
        }
    }

    report.total_transactions_after = cleaned.len();
    report.total_items_after = cleaned.iter().map(|t| t.len()).sum();
    report.unique_products_after = cleaned
        .iter()
        .flat_map(|t| t.iter())
        .collect::<FnvHashSet<&String>>()
        .len();

    (cleaned, report)
}
