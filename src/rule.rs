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
use crate::itemset::{Itemset, ItemsetSupport};
use std::hash::{Hash, Hasher};

/// A directional association rule, antecedent => consequent.
#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl Rule {
    // Creates a new Rule from (antecedent,consequent) if both sides are
    // themselves frequent and the rule would be above the min_confidence
    // threshold.
    pub fn make(
        antecedent: Itemset,
        consequent: Itemset,
        itemset_support: &ItemsetSupport,
        min_confidence: f64,
    ) -> Option<Rule> {
        if antecedent.is_empty() || consequent.is_empty() {
            return None;
        }

        let ac_sup = *itemset_support.get(&antecedent.union(&consequent))?;
        let a_sup = *itemset_support.get(&antecedent)?;
        let c_sup = *itemset_support.get(&consequent)?;
        if a_sup == 0.0 {
            return None;
        }

        let confidence = ac_sup / a_sup;
        if confidence < min_confidence {
            return None;
        }

        let denominator = a_sup * c_sup;
        let lift = if denominator > 0.0 {
            ac_sup / denominator
        } else {
            0.0
        };

        Some(Rule {
            antecedent,
            consequent,
            support: ac_sup,
            confidence,
            lift,
        })
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            self.antecedent.to_string(itemizer),
            " => ".to_owned(),
            self.consequent.to_string(itemizer),
        ]
        .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::Rule;
    use crate::itemizer::Itemizer;
    use crate::itemset::{Itemset, ItemsetSupport};

    #[test]
    fn test_make() {
        let mut itemizer = Itemizer::new();
        let a = Itemset::from_items(itemizer.to_id_vec(&["a"]));
        let b = Itemset::from_items(itemizer.to_id_vec(&["b"]));
        let mut support = ItemsetSupport::default();
        support.insert(a.clone(), 0.75);
        support.insert(b.clone(), 0.75);
        support.insert(a.union(&b), 0.5);

        let rule = Rule::make(a.clone(), b.clone(), &support, 0.5).unwrap();
        assert_eq!(rule.support, 0.5);
        assert!((rule.confidence - 0.5 / 0.75).abs() < 1e-12);
        assert!((rule.lift - 0.5 / (0.75 * 0.75)).abs() < 1e-12);
        assert_eq!(rule.to_string(&itemizer), "a => b");

        assert!(Rule::make(a.clone(), b.clone(), &support, 0.7).is_none());
        assert!(Rule::make(a.clone(), Itemset::from_items(vec![]), &support, 0.0).is_none());
    }

    #[test]
    fn test_make_skips_missing_sides() {
        let mut itemizer = Itemizer::new();
        let a = Itemset::from_items(itemizer.to_id_vec(&["a"]));
        let b = Itemset::from_items(itemizer.to_id_vec(&["b"]));
        let mut support = ItemsetSupport::default();
        support.insert(a.clone(), 0.75);
        support.insert(a.union(&b), 0.5);
        assert!(Rule::make(a, b, &support, 0.0).is_none());
    }

    #[test]
    fn test_equality_ignores_scores() {
        let mut itemizer = Itemizer::new();
        let a = Itemset::from_items(itemizer.to_id_vec(&["a"]));
        let b = Itemset::from_items(itemizer.to_id_vec(&["b"]));
        let r1 = Rule {
            antecedent: a.clone(),
            consequent: b.clone(),
            support: 0.1,
            confidence: 0.2,
            lift: 0.3,
        };
        let r2 = Rule {
            support: 0.4,
            ..r1.clone()
        };
        let r3 = Rule {
            antecedent: b,
            consequent: a,
            ..r1.clone()
        };
        assert_eq!(r1, r2);
        assert_ne!(r1, r3);
    }
}
