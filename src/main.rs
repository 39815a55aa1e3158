//! Banking Core CLI
//!
//! Replays a CSV script of banking operations against an in-memory branch.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > accounts.csv
//! cargo run -- --output statements script.csv
//! cargo run -- --withdrawal-limit 1000 --max-withdrawals 5 script.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug`, `info` or `warn` to control logging verbosity
//!
//! # Exit Codes
//!
//! - 0: Success (rejected rows are logged, not fatal)
//! - 1: Error (missing arguments, script not found, output not writable)

use banking_core::{cli, replay};
use std::process;

fn main() {
    env_logger::init();

    let args = cli::parse_args();
    let config = args.to_bank_config();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if let Err(e) = replay::run(&args.input_file, config, args.output, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
