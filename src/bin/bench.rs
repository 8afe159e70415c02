//! CLI entry point for the sorting benchmark harness.
//!
//! Usage:
//! - no arguments: runs both random generators (`Random`, `Pseudo words`) at
//!   all three sizes.
//! - `--1|--2|--3 <path>`: runs a file-backed generator at `<path>`, for
//!   `SMALL` / `SMALL,MEDIUM` / all sizes respectively.
//! - any other argument count exits `1` with a usage message on stderr.

use multikey_sort::driver::{self, Generator};
use multikey_sort::generators::{DataSize, FileGenerator, PseudoWordGenerator, RandomGenerator};
use std::fs::File;
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [] => {
            let generators = vec![
                Generator::Random(RandomGenerator::new()),
                Generator::PseudoWord(PseudoWordGenerator::new()),
            ];
            if driver::run(&generators, &DataSize::all()) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        [flag, path] => {
            let sizes: &[DataSize] = match flag.as_str() {
                "--1" => &[DataSize::Small],
                "--2" => &[DataSize::Small, DataSize::Medium],
                "--3" => &DataSize::all(),
                _ => return usage(),
            };

            if let Err(reason) = check_readable(path) {
                eprintln!("cannot read {path}: {reason}");
                return ExitCode::FAILURE;
            }

            let generators = vec![Generator::File(FileGenerator::new(path))];
            if driver::run(&generators, sizes) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        _ => usage(),
    }
}

/// Confirms `path` both exists and can actually be read, rather than just
/// checking for existence: a directory or a permission-denied file exists
/// but is not readable, and must be rejected with the same exit code.
fn check_readable(path: &str) -> Result<(), std::io::Error> {
    let mut file = File::open(path)?;
    let mut probe = [0u8; 1];
    file.read(&mut probe)?;
    Ok(())
}

fn usage() -> ExitCode {
    eprintln!("usage: bench [--1|--2|--3 <path>]");
    ExitCode::FAILURE
}
