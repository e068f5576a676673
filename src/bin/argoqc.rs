//! Argo QC Command Line Interface
//!
//! Inspect and edit the hex-encoded QC test codes of Argo profile history.
//!
//! Usage:
//!   argoqc decode 0x40002              # list the tests in a code
//!   argoqc encode 1 17                 # code for a set of tests
//!   argoqc build 0x2 0x40              # show the pass/fail array
//!   argoqc update 0x2 0x0 9 fail       # apply one safe update
//!   argoqc blank 6902746_001           # empty history record (JSON)
//!   argoqc describe [test]
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use argoqc::{
    blank_record, build_qc_array, decode_hex, encode_tests, test_description, test_number,
    update_safely, QcArray, NUM_TESTS, TEST_DESCRIPTIONS,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Encode, decode and update Argo QC test codes.
#[derive(Parser)]
#[command(name = "argoqc", version)]
#[command(about = "Encode, decode and update Argo QC test codes", long_about = None)]
struct Cli {
    /// Log debug events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the test numbers set in a hex QC code.
    Decode {
        /// Hex QC code (e.g. 0x40002)
        code: String,

        /// Print the test description next to each number
        #[arg(short, long)]
        describe: bool,
    },

    /// Print the hex QC code for a set of test numbers.
    Encode {
        /// Test numbers (1-25, 57-63)
        tests: Vec<u8>,
    },

    /// Print the pass/fail array for a pressure and a final QC code.
    Build {
        /// Pressure QC code (row 0, passed tests)
        pressure_code: String,
        /// Final QC code (row 1, failed tests)
        final_code: String,
    },

    /// Apply one guarded pass/fail update and print the new codes.
    Update {
        /// Pressure QC code (row 0, passed tests)
        pressure_code: String,
        /// Final QC code (row 1, failed tests)
        final_code: String,
        /// Test number to update
        test: u8,
        /// Outcome token: p, pass, PASS, 1, true / f, fail, FAIL, 0, false
        outcome: String,
    },

    /// Print an empty history record as JSON.
    Blank {
        /// Profile identifier stored in PCODE
        pcode: String,
    },

    /// Print the description of one test, or of every test.
    Describe {
        /// Test number; omit to list every test
        test: Option<u8>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Render the array as two labelled rows under a header of test numbers.
fn print_array(qc: &QcArray) -> Result<()> {
    let mut header = String::from("test");
    for ix in 0..NUM_TESTS {
        header.push_str(&format!(" {:>2}", test_number(ix)?));
    }
    println!("{header}");

    for (label, row) in [("pass", qc.pass_row()), ("fail", qc.fail_row())] {
        let cells: String = row.iter().map(|c| format!(" {c:>2}")).collect();
        println!("{label}{cells}");
    }

    let conflicts = qc.conflicts();
    if !conflicts.is_empty() {
        println!("conflicts: {conflicts:?}");
    }
    Ok(())
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Decode { code, describe } => {
            let tests = decode_hex(&code).with_context(|| format!("cannot decode {code:?}"))?;
            for test in tests {
                if describe {
                    println!("{}", test_description(test)?);
                } else {
                    println!("{test}");
                }
            }
        }
        Commands::Encode { tests } => {
            println!("{}", encode_tests(&tests).context("cannot encode tests")?);
        }
        Commands::Build {
            pressure_code,
            final_code,
        } => {
            let qc = build_qc_array(&pressure_code, &final_code)
                .context("cannot build QC array")?;
            print_array(&qc)?;
        }
        Commands::Update {
            pressure_code,
            final_code,
            test,
            outcome,
        } => {
            let mut qc = build_qc_array(&pressure_code, &final_code)
                .context("cannot build QC array")?;
            update_safely(&mut qc, test, outcome.as_str())
                .with_context(|| format!("cannot update test {test}"))?;

            let (pressure, fin) = qc.to_hex_pair();
            println!("pressure: {pressure}");
            println!("final:    {fin}");
        }
        Commands::Blank { pcode } => {
            let record = blank_record(pcode);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Describe { test: Some(test) } => {
            println!("{}", test_description(test)?);
        }
        Commands::Describe { test: None } => {
            for desc in TEST_DESCRIPTIONS {
                println!("{desc}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli.command)
}
