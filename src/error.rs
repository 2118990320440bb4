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

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MiningError {
    #[error("{name} must be a finite number, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read product catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("product catalog has no '{0}' column")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum TransactionReadError {
    #[error("failed to read transactions: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("{name} must be in range (0,1], got {value}")]
    OutOfRange { name: &'static str, value: f64 },
    #[error("--rules-from must name one algorithm that is being run, got {0}")]
    RulesSourceNotRun(String),
}
