use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use riskcheck::evaluation::EvaluationResult;
use riskcheck::scoring::ScoringConfig;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_IO: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate all customers and print the scored table plus summary
    /// (default if no subcommand)
    Report,
    /// Show only the customers classified High Risk
    HighRisk,
}

#[derive(Parser, Debug)]
#[command(name = "riskcheck")]
#[command(about = "Credit risk scoring for customer batches", long_about = None)]
#[command(version)]
struct Cli {
    /// Customer data file (.csv or .json)
    #[arg(short, long, global = true, default_value = "customers.csv")]
    input: PathBuf,

    /// Write a JSON report snapshot to this path
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Skip invalid customer records instead of aborting the batch
    #[arg(long, global = true)]
    skip_invalid: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Report);
    let start_time = Instant::now();

    let config = ScoringConfig::default();

    // Load customer records
    let customers = match riskcheck::input::load_customers(&cli.input) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} customers from {}",
            customers.len(),
            cli.input.display()
        );
    }

    // Evaluate the batch. Default is all-or-nothing; --skip-invalid keeps
    // the good records and reports the bad ones on stderr.
    let results = if cli.skip_invalid {
        let outcomes = riskcheck::evaluation::evaluate_all_collecting(&customers, &config);
        let mut kept: Vec<EvaluationResult> = Vec::new();
        let mut skipped = 0usize;
        for (customer, outcome) in customers.iter().zip(outcomes) {
            match outcome {
                Ok(result) => kept.push(result),
                Err(e) => {
                    skipped += 1;
                    eprintln!(
                        "Skipping customer #{} ({}): {}",
                        customer.customer_id, customer.name, e
                    );
                }
            }
        }
        if cli.verbose && skipped > 0 {
            eprintln!("Skipped {} invalid records", skipped);
        }
        // Collecting evaluation returns input order; restore the ranking
        kept.sort_by(|a, b| b.credit_score.cmp(&a.credit_score));
        kept
    } else {
        match riskcheck::evaluation::evaluate_all(&customers, &config) {
            Ok(results) => results,
            Err(e) => {
                eprintln!("Evaluation error: {}", e);
                std::process::exit(EXIT_DATA);
            }
        }
    };

    let summary = riskcheck::report::summarize(&results);

    // Persist the snapshot before rendering
    if let Some(ref output_path) = cli.output {
        let snapshot =
            riskcheck::report::ReportSnapshot::new(&summary, results.clone());
        if let Err(e) = riskcheck::report::save_snapshot(output_path, &snapshot) {
            eprintln!("Report error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
        if cli.verbose {
            eprintln!("Report snapshot written to {}", output_path.display());
        }
    }

    let use_colors = riskcheck::output::should_use_colors();

    match command {
        Commands::Report => {
            println!(
                "{}",
                riskcheck::output::format_result_table(&results, use_colors)
            );
            if !results.is_empty() {
                println!();
                println!(
                    "{}",
                    riskcheck::output::format_summary(&summary, use_colors)
                );
            }
        }
        Commands::HighRisk => {
            let high_risk = riskcheck::evaluation::filter_high_risk(results);
            println!(
                "{}",
                riskcheck::output::format_result_table(&high_risk, use_colors)
            );
        }
    }

    if cli.verbose {
        eprintln!();
        eprintln!(
            "Total: {} customers in {:?}",
            summary.total,
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}
