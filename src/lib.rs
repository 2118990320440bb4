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

//! Frequent itemset and association rule mining over an in-memory
//! transaction log, with two interchangeable miners: breadth-first
//! `Apriori` and depth-first `Eclat`.

pub mod apriori;
pub mod catalog;
pub mod counter;
pub mod eclat;
pub mod error;
pub mod generate_rules;
pub mod item;
pub mod itemizer;
pub mod itemset;
pub mod miner;
pub mod preprocess;
pub mod recommend;
pub mod rule;
pub mod support;
pub mod timing;
pub mod transaction_reader;
pub mod transactions;
pub mod vec_sets;

pub use crate::apriori::Apriori;
pub use crate::eclat::Eclat;
pub use crate::error::MiningError;
pub use crate::generate_rules::generate_rules;
pub use crate::itemset::{Itemset, ItemsetSupport};
pub use crate::miner::ItemsetMiner;
pub use crate::rule::Rule;
pub use crate::timing::{compare, run_with_timing, Comparison, MiningRun};
pub use crate::transactions::TransactionStore;
