// src/bin/cli.rs
use profile_harvest::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
