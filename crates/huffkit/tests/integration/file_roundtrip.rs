//! File roundtrip tests.

use std::fs;

use tempfile::tempdir;

use huffkit::{
    Config, Error, Mode, Outcome, compress_file, decompress_file, default_output_path,
};

#[test]
fn test_compress_then_decompress_default_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    let data = b"it was the best of times, it was the worst of times".repeat(20);
    fs::write(&input, &data).unwrap();

    let config = Config::default();
    let compressed = default_output_path(&input, Mode::Compress, &config);
    assert_eq!(compressed, dir.path().join("notes.txt.huff"));

    let report = compress_file(&input, &compressed).unwrap();
    assert_eq!(report.stats.original_size, data.len());
    assert_eq!(
        report.stats.compressed_size,
        fs::metadata(&compressed).unwrap().len() as usize
    );
    assert!(report.stats.ratio().is_effective());

    // Restore next to the original under a different name.
    fs::remove_file(&input).unwrap();
    let restored = default_output_path(&compressed, Mode::Decompress, &config);
    assert_eq!(restored, input);

    let report = decompress_file(&compressed, &restored).unwrap();
    assert_eq!(report.stats.original_size, data.len());
    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn test_binary_file_roundtrip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("blob.bin");
    let data: Vec<u8> = (0..20_000u32).map(|i| (i * i % 256) as u8).collect();
    fs::write(&input, &data).unwrap();

    let artifact = dir.path().join("blob.bin.huff");
    compress_file(&input, &artifact).unwrap();

    let restored = dir.path().join("blob.out");
    decompress_file(&artifact, &restored).unwrap();
    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn test_artifact_is_deterministic() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input");
    fs::write(&input, b"mississippi river banks").unwrap();

    let a = dir.path().join("a.huff");
    let b = dir.path().join("b.huff");
    compress_file(&input, &a).unwrap();
    compress_file(&input, &b).unwrap();
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_no_temp_file_left_on_success() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input");
    fs::write(&input, b"abc").unwrap();
    compress_file(&input, &dir.path().join("out.huff")).unwrap();

    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    names.sort();
    assert_eq!(names, vec!["input", "out.huff"]);
}

#[test]
fn test_empty_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty");
    fs::write(&input, b"").unwrap();
    let output = dir.path().join("empty.huff");

    let result = compress_file(&input, &output);
    assert!(matches!(result, Err(Error::EmptyInput)));
    assert!(!output.exists());

    let outcome = Outcome::new(Mode::Compress, compress_file(&input, &output));
    assert!(!outcome.success);
    assert_eq!(outcome.message, "File is empty");
}

#[test]
fn test_missing_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("missing.txt.huff");

    let err = compress_file(&input, &output).unwrap_err();
    assert!(matches!(err, Error::File { .. }));
    assert!(err.to_string().contains("does not exist"), "{err}");
    assert!(!output.exists());

    let outcome = Outcome::new(Mode::Compress, Err(err));
    assert!(outcome.message.starts_with("Compression failed: "));
}

#[test]
fn test_success_outcome() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input");
    fs::write(&input, b"hello").unwrap();
    let output = dir.path().join("input.huff");

    let outcome = Outcome::new(Mode::Compress, compress_file(&input, &output));
    assert!(outcome.success);
    assert_eq!(outcome.message, "Compression successful");

    let restored = dir.path().join("restored");
    let outcome = Outcome::new(Mode::Decompress, decompress_file(&output, &restored));
    assert!(outcome.success);
    assert_eq!(outcome.message, "Decompression successful");
    assert_eq!(outcome.report.unwrap().output, restored);
}
