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
use crate::rule::Rule;
use ordered_float::OrderedFloat;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

impl Strength {
    pub fn from_confidence(confidence: f64) -> Strength {
        if confidence >= 0.7 {
            Strength::Strong
        } else if confidence >= 0.5 {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Strength::Strong => "Strong",
            Strength::Moderate => "Moderate",
            Strength::Weak => "Weak",
        };
        f.write_str(label)
    }
}

/// The rules whose antecedent includes `item`, most confident first, at
/// most `limit` of them.
pub fn recommendations_for(item: Item, rules: &[Rule], limit: usize) -> Vec<&Rule> {
    let mut related: Vec<&Rule> = rules
        .iter()
        .filter(|rule| rule.antecedent.contains(item))
        .collect();
    related.sort_by_key(|rule| std::cmp::Reverse(OrderedFloat(rule.confidence)));
    related.truncate(limit);
    related
}
