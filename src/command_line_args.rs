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

use std::env;
use std::io;
use std::process;
use std::str::FromStr;

use argparse::{ArgumentParser, Store, StoreOption};

use arm_compare::error::ArgumentError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Apriori,
    Eclat,
    Both,
}

impl FromStr for Algorithm {
    type Err = String;
    fn from_str(s: &str) -> Result<Algorithm, String> {
        match s.to_lowercase().as_str() {
            "apriori" => Ok(Algorithm::Apriori),
            "eclat" => Ok(Algorithm::Eclat),
            "both" => Ok(Algorithm::Both),
            _ => Err(format!("Unknown algorithm '{}'", s)),
        }
    }
}

impl Algorithm {
    /// True when a run reported under `run_name` was produced by this choice.
    pub fn produced(&self, run_name: &str) -> bool {
        match self {
            Algorithm::Apriori => run_name.eq_ignore_ascii_case("apriori"),
            Algorithm::Eclat => run_name.eq_ignore_ascii_case("eclat"),
            Algorithm::Both => true,
        }
    }
}

pub struct Arguments {
    pub input_file_path: String,
    pub catalog_file_path: Option<String>,
    pub output_rules_path: Option<String>,
    pub min_support: f64,
    pub min_confidence: f64,
    pub recommend: Option<String>,
    pub algorithm: Algorithm,
    pub rules_from: Algorithm,
}

/// Both thresholds must lie in (0,1].
pub fn validate_thresholds(min_support: f64, min_confidence: f64) -> Result<(), ArgumentError> {
    for &(name, value) in &[("min_support", min_support), ("min_confidence", min_confidence)] {
        // Written so that NaN fails too.
        if !(value > 0.0 && value <= 1.0) {
            return Err(ArgumentError::OutOfRange { name, value });
        }
    }
    Ok(())
}

/// The rules written out and used for recommendations come from a single
/// run. With one algorithm that is the only run; with both, `rules_from`
/// picks one.
pub fn validate_rules_from(
    algorithm: Algorithm,
    rules_from: Algorithm,
) -> Result<(), ArgumentError> {
    let ok = match (algorithm, rules_from) {
        (_, Algorithm::Both) => false,
        (Algorithm::Both, _) => true,
        (run, source) => run == source,
    };
    if !ok {
        return Err(ArgumentError::RulesSourceNotRun(
            format!("{:?}", rules_from).to_lowercase(),
        ));
    }
    Ok(())
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args: Arguments = Arguments {
        input_file_path: String::new(),
        catalog_file_path: None,
        output_rules_path: None,
        min_support: 0.0,
        min_confidence: 0.0,
        recommend: None,
        algorithm: Algorithm::Both,
        rules_from: Algorithm::Apriori,
    };
    let mut rules_from: Option<Algorithm> = None;

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Compare Apriori and Eclat association rule mining.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Transactions CSV with a header row. Either an 'items' column of \
                 comma separated items, or an id column followed by one item per column.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.catalog_file_path)
            .add_option(
                &["--catalog"],
                StoreOption,
                "Product catalog CSV with a product_name column. \
                 Items not in the catalog are dropped.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output"],
                StoreOption,
                "File path in which to store output rules. \
                 Format: antecedent -> consequent, confidence, lift, support.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range (0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut args.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range (0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut args.recommend)
            .add_option(
                &["--recommend"],
                StoreOption,
                "Print the products most often bought with this product.",
            )
            .metavar("product");

        parser
            .refer(&mut args.algorithm)
            .add_option(
                &["--algorithm"],
                Store,
                "Which miner to run: apriori, eclat or both (default).",
            )
            .metavar("name");

        parser
            .refer(&mut rules_from)
            .add_option(
                &["--rules-from"],
                StoreOption,
                "Run whose rules feed --output and --recommend: apriori or eclat. \
                 Defaults to the algorithm run, or apriori when running both.",
            )
            .metavar("name");

        if env::args().count() == 1 {
            // Nothing useful can be done if stderr is gone.
            let _ = parser.print_help("Usage:", &mut io::stderr());
            process::exit(1);
        }

        if let Err(err) = parser.parse_args() {
            process::exit(err);
        }
    }

    if let Err(err) = validate_thresholds(args.min_support, args.min_confidence) {
        eprintln!("{}", err);
        process::exit(1);
    }

    args.rules_from = match (rules_from, args.algorithm) {
        (Some(source), _) => source,
        (None, Algorithm::Both) => Algorithm::Apriori,
        (None, run) => run,
    };
    if let Err(err) = validate_rules_from(args.algorithm, args.rules_from) {
        eprintln!("{}", err);
        process::exit(1);
    }

    args
}
