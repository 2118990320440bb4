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
use crate::itemset::ItemsetSupport;
use crate::transactions::TransactionStore;

/// A frequent itemset mining algorithm. Implementations must return the
/// same mapping for the same input; they differ only in how they search.
pub trait ItemsetMiner: Sync {
    fn name(&self) -> &'static str;

    /// Returns every itemset contained in at least
    /// `min_support_count(store.len(), min_support)` transactions, with its
    /// support relative to `store.len()`.
    fn mine(&self, store: &TransactionStore, min_support: f64)
        -> Result<ItemsetSupport, MiningError>;
}
