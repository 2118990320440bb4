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

use crate::apriori::Apriori;
use crate::eclat::Eclat;
use crate::error::MiningError;
use crate::generate_rules::generate_rules;
use crate::itemset::ItemsetSupport;
use crate::miner::ItemsetMiner;
use crate::rule::Rule;
use crate::transactions::TransactionStore;
use std::time::Instant;
use tracing::info;

// Support values from the two miners are computed identically, this only
// absorbs rounding should that ever change.
const SUPPORT_TOLERANCE: f64 = 1e-12;

/// Output of one timed mining + rule generation run.
#[derive(Clone, Debug)]
pub struct MiningRun {
    pub algorithm: &'static str,
    pub frequent_itemsets: ItemsetSupport,
    pub rules: Vec<Rule>,
    pub time_ms: f64,
}

pub fn run_with_timing<M: ItemsetMiner + ?Sized>(
    miner: &M,
    store: &TransactionStore,
    min_support: f64,
    min_confidence: f64,
) -> Result<MiningRun, MiningError> {
    let timer = Instant::now();
    let frequent_itemsets = miner.mine(store, min_support)?;
    let rules = generate_rules(&frequent_itemsets, min_confidence)?;
    let time_ms = timer.elapsed().as_secs_f64() * 1000.0;
    info!(
        algorithm = miner.name(),
        itemsets = frequent_itemsets.len(),
        rules = rules.len(),
        time_ms,
        "mining run finished"
    );
    Ok(MiningRun {
        algorithm: miner.name(),
        frequent_itemsets,
        rules,
        time_ms,
    })
}

/// Both algorithms run over the same transactions.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub apriori: MiningRun,
    pub eclat: MiningRun,
}

impl Comparison {
    /// True when both runs found the same itemsets with the same supports.
    pub fn agree(&self) -> bool {
        same_itemsets(
            &self.apriori.frequent_itemsets,
            &self.eclat.frequent_itemsets,
        )
    }
}

pub fn same_itemsets(a: &ItemsetSupport, b: &ItemsetSupport) -> bool {
    a.len() == b.len()
        && a.iter().all(|(itemset, support)| match b.get(itemset) {
            Some(other) => (support - other).abs() <= SUPPORT_TOLERANCE,
            None => false,
        })
}

/// Runs Apriori then Eclat over the same store. The runs are sequential so
/// that neither timing includes contention with the other.
pub fn compare(
    store: &TransactionStore,
    min_support: f64,
    min_confidence: f64,
) -> Result<Comparison, MiningError> {
    let apriori = run_with_timing(&Apriori, store, min_support, min_confidence)?;
    let eclat = run_with_timing(&Eclat, store, min_support, min_confidence)?;
    Ok(Comparison { apriori, eclat })
}
