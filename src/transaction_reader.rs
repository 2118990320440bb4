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

use crate::error::TransactionReadError;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

const ITEMS_COLUMN: &str = "items";

/// Reads a transaction CSV. The first row is a header. When it names an
/// `items` column, each row's transaction is that field split on commas
/// (it is usually quoted). Otherwise the file is wide: column 0 holds a
/// transaction id and every later column holds one item.
///
/// Fields that are blank or hold a spreadsheet null marker are dropped;
/// everything else is passed through untouched for preprocessing to
/// normalize.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Vec<String>>, TransactionReadError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let items_column = reader
        .headers()?
        .iter()
        .position(|name| name.trim().eq_ignore_ascii_case(ITEMS_COLUMN));

    let mut transactions = vec![];
    for record in reader.records() {
        let record = record?;
        transactions.push(match items_column {
            Some(column) => split_items(record.get(column).unwrap_or("")),
            None => wide_items(&record),
        });
    }
    Ok(transactions)
}

fn split_items(field: &str) -> Vec<String> {
    let field = field.trim();
    if is_null_field(field) {
        return vec![];
    }
    field
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn wide_items(record: &StringRecord) -> Vec<String> {
    record
        .iter()
        .skip(1)
        .map(|s| s.trim())
        .filter(|s| !is_null_field(s))
        .map(String::from)
        .collect()
}

fn is_null_field(field: &str) -> bool {
    field.is_empty() || field.eq_ignore_ascii_case("nan") || field.eq_ignore_ascii_case("none")
}
