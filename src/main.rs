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

mod command_line_args;

use arm_compare::catalog::load_products;
use arm_compare::itemizer::Itemizer;
use arm_compare::preprocess::{normalize, preprocess_transactions, PreprocessReport};
use arm_compare::recommend::{recommendations_for, Strength};
use arm_compare::transaction_reader::read_transactions;
use arm_compare::{compare, run_with_timing, Apriori, Eclat, MiningRun, Rule, TransactionStore};
use command_line_args::{parse_args_or_exit, Algorithm, Arguments};
use ordered_float::OrderedFloat;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

const MAX_RECOMMENDATIONS: usize = 10;

fn print_report(report: &PreprocessReport) {
    println!("Before cleaning:");
    println!("  Total transactions: {}", report.total_transactions_before);
    println!("  Empty transactions: {}", report.empty_transactions);
    println!("  Single-item transactions: {}", report.single_item_transactions);
    println!("  Duplicate items found: {} instances", report.duplicate_items_instances);
    println!("  Invalid items found: {} instances", report.invalid_items_instances);
    println!("After cleaning:");
    println!("  Valid transactions: {}", report.total_transactions_after);
    println!("  Total items: {}", report.total_items_after);
    println!("  Unique products: {}", report.unique_products_after);
}

fn write_rules(path: &str, rules: &[Rule], itemizer: &Itemizer) -> io::Result<()> {
    let mut sorted: Vec<&Rule> = rules.iter().collect();
    sorted.sort_by_key(|rule| std::cmp::Reverse(OrderedFloat(rule.confidence)));

    let mut output = BufWriter::new(File::create(path)?);
    writeln!(output, "Antecedent->Consequent,Confidence,Lift,Support")?;
    for rule in sorted {
        writeln!(
            output,
            "{},{},{},{}",
            rule.to_string(itemizer),
            rule.confidence,
            rule.lift,
            rule.support
        )?;
    }
    output.flush()
}

fn print_recommendations(product: &str, run: &MiningRun, itemizer: &Itemizer) {
    let product = normalize(product);
    let related = match itemizer.lookup(&product) {
        Some(item) => recommendations_for(item, &run.rules, MAX_RECOMMENDATIONS),
        None => vec![],
    };
    if related.is_empty() {
        println!("No association rules found for this product with the current thresholds.");
        return;
    }
    println!("Customers who bought '{}' also bought:", product);
    for rule in related {
        println!(
            "- {}: {:.1}% of the time ({})",
            rule.consequent
                .items()
                .iter()
                .map(|&item| itemizer.str_of(item))
                .collect::<Vec<&str>>()
                .join(", "),
            rule.confidence * 100.0,
            Strength::from_confidence(rule.confidence)
        );
    }
}

fn mine(args: &Arguments) -> Result<(), Box<dyn Error>> {
    println!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    let raw = read_transactions(File::open(&args.input_file_path)?)?;
    let vocabulary = match args.catalog_file_path {
        Some(ref path) => Some(load_products(File::open(path)?)?),
        None => None,
    };
    let (cleaned, report) = preprocess_transactions(&raw, vocabulary.as_ref());
    print_report(&report);
    if cleaned.is_empty() {
        warn!("no transactions left after preprocessing");
    }

    let mut itemizer = Itemizer::sorted(cleaned.iter().flat_map(|t| t.iter().map(|s| s.as_str())));
    let store = TransactionStore::from_names(&cleaned, &mut itemizer);

    let runs: Vec<MiningRun> = match args.algorithm {
        Algorithm::Both => {
            let comparison = compare(&store, args.min_support, args.min_confidence)?;
            println!(
                "Apriori and Eclat frequent itemsets {}.",
                if comparison.agree() { "agree" } else { "DISAGREE" }
            );
            vec![comparison.apriori, comparison.eclat]
        }
        Algorithm::Apriori => vec![run_with_timing(
            &Apriori,
            &store,
            args.min_support,
            args.min_confidence,
        )?],
        Algorithm::Eclat => vec![run_with_timing(
            &Eclat,
            &store,
            args.min_support,
            args.min_confidence,
        )?],
    };

    for run in &runs {
        println!(
            "{}: {:.2} ms, {} frequent itemsets, {} rules",
            run.algorithm,
            run.time_ms,
            run.frequent_itemsets.len(),
            run.rules.len()
        );
    }

    if let Some(run) = runs.iter().find(|run| args.rules_from.produced(run.algorithm)) {
        if let Some(ref path) = args.output_rules_path {
            write_rules(path, &run.rules, &itemizer)?;
            println!("Wrote {} {} rules to {}", run.rules.len(), run.algorithm, path);
        }
        if let Some(ref product) = args.recommend {
            print_recommendations(product, run, &itemizer);
        }
    }

    println!("Total runtime: {} ms", start.elapsed().as_millis());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let arguments = parse_args_or_exit();

    if let Err(err) = mine(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
