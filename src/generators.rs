//! Deterministic and pseudo-random workload generators for the benchmark
//! harness.
//!
//! Each generator produces a `Vec<String>` sized by a [`DataSize`]. The
//! random generators draw from `rand::rng()` (thread-local, OS-seeded) by
//! default and are **not** reproducible across runs; [`RandomGenerator::seeded`]
//! and [`PseudoWordGenerator::seeded`] build on `StdRng` for tests that need
//! repeatable workloads.

use crate::error::GeneratorError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};

/// A requested benchmark workload size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSize {
    Small,
    Medium,
    Large,
}

impl DataSize {
    /// The number of rows a generator should produce for this size.
    pub fn count(self) -> usize {
        match self {
            DataSize::Small => 100_000,
            DataSize::Medium => 1_000_000,
            DataSize::Large => 3_000_000,
        }
    }

    /// All sizes, in ascending order.
    pub fn all() -> [DataSize; 3] {
        [DataSize::Small, DataSize::Medium, DataSize::Large]
    }
}

const ALPHABET_62: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Fixed-length random strings drawn from a 62-symbol alphanumeric alphabet.
pub struct RandomGenerator {
    seed: Option<u64>,
}

impl RandomGenerator {
    /// Draws from the thread-local, OS-seeded RNG; not reproducible across runs.
    pub fn new() -> Self {
        RandomGenerator { seed: None }
    }

    /// Draws from `StdRng` seeded with `seed`, for reproducible tests.
    pub fn seeded(seed: u64) -> Self {
        RandomGenerator { seed: Some(seed) }
    }

    pub fn display_name(&self) -> &'static str {
        "Random"
    }

    pub fn generate(&self, size: DataSize) -> Result<Vec<String>, GeneratorError> {
        const LEN: usize = 64;
        let count = size.count();
        let mut out = Vec::with_capacity(count);
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                for _ in 0..count {
                    out.push(random_word(&mut rng, LEN));
                }
            }
            None => {
                let mut rng = rand::rng();
                for _ in 0..count {
                    out.push(random_word(&mut rng, LEN));
                }
            }
        }
        Ok(out)
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn random_word<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| {
            let d = rng.random_range(0..62);
            ALPHABET_62[d] as char
        })
        .collect()
}

/// Lowercase strings of length uniform in `[1, 28]`.
pub struct PseudoWordGenerator {
    seed: Option<u64>,
}

impl PseudoWordGenerator {
    pub fn new() -> Self {
        PseudoWordGenerator { seed: None }
    }

    pub fn seeded(seed: u64) -> Self {
        PseudoWordGenerator { seed: Some(seed) }
    }

    pub fn display_name(&self) -> &'static str {
        "Pseudo words"
    }

    pub fn generate(&self, size: DataSize) -> Result<Vec<String>, GeneratorError> {
        let count = size.count();
        let mut out = Vec::with_capacity(count);
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                for _ in 0..count {
                    out.push(pseudo_word(&mut rng));
                }
            }
            None => {
                let mut rng = rand::rng();
                for _ in 0..count {
                    out.push(pseudo_word(&mut rng));
                }
            }
        }
        Ok(out)
    }
}

impl Default for PseudoWordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pseudo_word<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(1..=28);
    (0..len)
        .map(|_| (b'a' + rng.random_range(0..26)) as char)
        .collect()
}

/// Reads up to `size.count()` lines from a file on disk.
pub struct FileGenerator {
    path: PathBuf,
}

impl FileGenerator {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileGenerator {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    pub fn generate(&self, size: DataSize) -> Result<Vec<String>, GeneratorError> {
        let requested = size.count();
        let contents = fs::read_to_string(&self.path).map_err(|source| GeneratorError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut lines = Vec::with_capacity(requested);
        for line in contents.lines().take(requested) {
            lines.push(line.to_string());
        }

        if lines.len() < requested {
            return Err(GeneratorError::InsufficientLines {
                path: self.path.clone(),
                available: lines.len(),
                requested,
            });
        }

        Ok(lines)
    }
}
