//! Benchmark driver: warm-up, trimmed-mean timing, and tabular reporting.
//!
//! This is the harness's orchestration layer: it owns no algorithm logic of
//! its own, only the measurement discipline wrapped around [`Runner`].

use crate::error::GeneratorError;
use crate::generators::{DataSize, FileGenerator, PseudoWordGenerator, RandomGenerator};
use crate::runners::Runner;
use std::time::Instant;

/// Number of timed runs per `(generator, size, runner)` cell; the reported
/// value is the mean of the middle three after discarding the min and max.
const RUN_COUNT: usize = 5;

/// A workload source, closed over the three generators the harness ships.
pub enum Generator {
    Random(RandomGenerator),
    PseudoWord(PseudoWordGenerator),
    File(FileGenerator),
}

impl Generator {
    fn display_name(&self) -> String {
        match self {
            Generator::Random(g) => g.display_name().to_string(),
            Generator::PseudoWord(g) => g.display_name().to_string(),
            Generator::File(g) => g.display_name(),
        }
    }

    fn generate(&self, size: DataSize) -> Result<Vec<String>, GeneratorError> {
        match self {
            Generator::Random(g) => g.generate(size),
            Generator::PseudoWord(g) => g.generate(size),
            Generator::File(g) => g.generate(size),
        }
    }
}

/// Runs the full warm-up + measurement + report cycle for `generators` over
/// `sizes`, writing tabular output to stdout and generator faults to stderr.
///
/// Returns `true` if every `(generator, size)` row produced a workload and
/// was measured; `false` if at least one row was skipped due to a generator
/// fault, so callers can map that to a non-zero process exit code.
pub fn run(generators: &[Generator], sizes: &[DataSize]) -> bool {
    warm_up(generators);

    let mut all_rows_succeeded = true;

    for generator in generators {
        for &size in sizes {
            println!("=== {} / {:?} ===", generator.display_name(), size);

            let data = match generator.generate(size) {
                Ok(data) => data,
                Err(err) => {
                    eprintln!("{err}");
                    all_rows_succeeded = false;
                    continue;
                }
            };

            for runner in Runner::all() {
                let millis = measure(runner, &data);
                println!("{:<12} {:>8} ms", runner.display_name(), millis);
            }
        }
    }

    all_rows_succeeded
}

fn warm_up(generators: &[Generator]) {
    for generator in generators {
        let data = match generator.generate(DataSize::Small) {
            Ok(data) => data,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        for runner in Runner::all() {
            let mut copy = data.clone();
            runner.sort(&mut copy);
        }
    }
}

/// Runs `runner` on `RUN_COUNT` fresh copies of `data`, discards the fastest
/// and slowest, and returns the mean of the rest in milliseconds.
fn measure(runner: Runner, data: &[String]) -> u128 {
    let mut samples = Vec::with_capacity(RUN_COUNT);
    for _ in 0..RUN_COUNT {
        let mut copy = data.to_vec();
        let start = Instant::now();
        runner.sort(&mut copy);
        samples.push(start.elapsed().as_millis());
    }
    samples.sort_unstable();
    let trimmed = &samples[1..RUN_COUNT - 1];
    trimmed.iter().sum::<u128>() / trimmed.len() as u128
}
