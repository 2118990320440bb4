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
use crate::itemset::{Itemset, ItemsetSupport};
use crate::rule::Rule;
use crate::support::check_threshold;
use itertools::Itertools;

/// Splits every frequent itemset of two or more items into each possible
/// non-empty antecedent and consequent, keeping the rules that meet
/// `min_confidence`. Splits whose sides are not both in `itemset_support`
/// are skipped. A non-finite `min_confidence` is an error.
pub fn generate_rules(
    itemset_support: &ItemsetSupport,
    min_confidence: f64,
) -> Result<Vec<Rule>, MiningError> {
    let min_confidence = check_threshold("min_confidence", min_confidence)?;
    let mut itemsets: Vec<&Itemset> = itemset_support
        .keys()
        .filter(|itemset| itemset.len() > 1)
        .collect();
    itemsets.sort();

    let mut rules: Vec<Rule> = vec![];
    for itemset in itemsets {
        for size in 1..itemset.len() {
            for antecedent in itemset.items().iter().cloned().combinations(size) {
                let antecedent = Itemset::from_items(antecedent);
                let consequent = itemset.difference(&antecedent);
                if let Some(rule) =
                    Rule::make(antecedent, consequent, itemset_support, min_confidence)
                {
                    rules.push(rule);
                }
            }
        }
    }
    Ok(rules)
}
