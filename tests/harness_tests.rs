use multikey_sort::generators::{DataSize, FileGenerator, PseudoWordGenerator, RandomGenerator};
use multikey_sort::runners::Runner;
use multikey_sort::GeneratorError;
use std::io::Write;

#[test]
fn test_data_size_counts() {
    assert_eq!(DataSize::Small.count(), 100_000);
    assert_eq!(DataSize::Medium.count(), 1_000_000);
    assert_eq!(DataSize::Large.count(), 3_000_000);
}

#[test]
fn test_random_generator_seeded_is_reproducible() {
    let a = RandomGenerator::seeded(1).generate(DataSize::Small).unwrap();
    let b = RandomGenerator::seeded(1).generate(DataSize::Small).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), DataSize::Small.count());
    assert!(a.iter().all(|s| s.len() == 64));
}

#[test]
fn test_pseudo_word_generator_seeded_is_reproducible() {
    let a = PseudoWordGenerator::seeded(2).generate(DataSize::Small).unwrap();
    let b = PseudoWordGenerator::seeded(2).generate(DataSize::Small).unwrap();
    assert_eq!(a, b);
    assert!(a.iter().all(|s| !s.is_empty() && s.len() <= 28));
    assert!(a.iter().all(|s| s.bytes().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn test_file_generator_reads_lines() {
    let path = temp_file_path("reads-lines");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        for i in 0..10 {
            writeln!(file, "line{i}").unwrap();
        }
    }

    let generator = FileGenerator::new(&path);
    // There's no DataSize small enough to request 10 lines directly, so request
    // against a size larger than the file and expect the insufficiency error.
    let result = generator.generate(DataSize::Small);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(GeneratorError::InsufficientLines { .. })));
}

#[test]
fn test_file_generator_missing_file_is_io_error() {
    let generator = FileGenerator::new("/nonexistent/path/words.txt");
    let result = generator.generate(DataSize::Small);
    assert!(matches!(result, Err(GeneratorError::Io { .. })));
}

#[test]
fn test_runner_roster_sorts_consistently() {
    let data: Vec<String> = vec!["banana", "apple", "cherry"]
        .into_iter()
        .map(String::from)
        .collect();

    for runner in Runner::all() {
        let mut copy = data.clone();
        runner.sort(&mut copy);
        assert_eq!(copy, vec!["apple", "banana", "cherry"], "{}", runner.display_name());
    }
}

/// Minimal temp-file-path helper so this test file has no extra
/// dev-dependency beyond what's already in the workspace.
fn temp_file_path(label: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("multikey-sort-test-{label}-{}.txt", std::process::id()));
    path
}
