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

use crate::error::CatalogError;
use crate::preprocess::normalize;
use csv::ReaderBuilder;
use fnv::FnvHashSet;
use std::io::Read;

const PRODUCT_NAME_COLUMN: &str = "product_name";

/// Reads a product catalog CSV and returns the set of normalized product
/// names. The header row must name a `product_name` column.
pub fn load_products<R: Read>(reader: R) -> Result<FnvHashSet<String>, CatalogError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let column = reader
        .headers()?
        .iter()
        .position(|name| normalize(name) == PRODUCT_NAME_COLUMN)
        .ok_or(CatalogError::MissingColumn(PRODUCT_NAME_COLUMN))?;

    let mut products = FnvHashSet::default();
    for record in reader.records() {
        if let Some(name) = record?.get(column) {
            let name = normalize(name);
            if !name.is_empty() {
                products.insert(name);
            }
        }
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::load_products;
    use crate::error::CatalogError;
    use std::io::Cursor;

    #[test]
    fn test_load_products() {
        let input = "product_id,Product_Name,category\n\
                     1, Whole Milk ,dairy\n\
                     2,bread,bakery\n\
                     3,,misc\n\
                     4,\"Cheese, Cheddar\",dairy\n";
        let products = load_products(Cursor::new(input)).unwrap();
        assert_eq!(products.len(), 3);
        assert!(products.contains("whole milk"));
        assert!(products.contains("bread"));
        assert!(products.contains("cheese, cheddar"));
    }

    #[test]
    fn test_missing_column() {
        match load_products(Cursor::new("id,name\n1,milk\n")) {
            Err(CatalogError::MissingColumn(column)) => assert_eq!(column, "product_name"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(load_products(Cursor::new("")).is_err());
    }
}
