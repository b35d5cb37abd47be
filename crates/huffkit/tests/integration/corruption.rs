//! Corrupt and foreign artifact tests.
//!
//! A failed decompress must report a tagged error and leave nothing at the
//! output path.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use huffkit::{
    CompressedArtifact, Error, Mode, Outcome, compress, compress_file, decompress_file,
};

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn write_artifact(path: &Path, data: &[u8]) -> CompressedArtifact {
    let artifact = compress(data).unwrap();
    fs::write(path, artifact.to_bytes()).unwrap();
    artifact
}

#[test]
fn test_bad_padding_byte() {
    let dir = tempdir().unwrap();
    let artifact_path = dir.path().join("data.huff");
    let artifact = write_artifact(&artifact_path, b"abracadabra");

    let mut bytes = fs::read(&artifact_path).unwrap();
    bytes[artifact.table_section_len()] = 9;
    fs::write(&artifact_path, &bytes).unwrap();

    let output = dir.path().join("data");
    let err = decompress_file(&artifact_path, &output).unwrap_err();
    assert!(matches!(err, Error::CorruptArtifact { .. }), "{err:?}");
    assert!(!output.exists());
    assert_eq!(dir_entries(dir.path()), vec!["data.huff"]);
}

#[test]
fn test_truncated_artifact() {
    let dir = tempdir().unwrap();
    let artifact_path = dir.path().join("data.huff");
    let artifact = write_artifact(&artifact_path, b"the rain in spain");

    let bytes = fs::read(&artifact_path).unwrap();
    fs::write(&artifact_path, &bytes[..artifact.table_section_len() - 1]).unwrap();

    let output = dir.path().join("data");
    let outcome = Outcome::new(Mode::Decompress, decompress_file(&artifact_path, &output));
    assert!(!outcome.success);
    assert!(
        outcome.message.starts_with("Decompression failed: corrupt artifact"),
        "{}",
        outcome.message
    );
    assert!(!output.exists());
}

#[test]
fn test_payload_from_another_table() {
    // Splice the table of a single-symbol artifact ("0" only) onto a payload
    // that contains 1 bits.
    let dir = tempdir().unwrap();
    let single = compress(&[b'x'; 16]).unwrap();
    let mixed = compress(b"xyxyxyxy").unwrap();

    let mut bytes = single.to_bytes()[..single.table_section_len()].to_vec();
    bytes.extend_from_slice(&mixed.payload().to_bytes());
    let artifact_path = dir.path().join("spliced.huff");
    fs::write(&artifact_path, &bytes).unwrap();

    let output = dir.path().join("spliced");
    let err = decompress_file(&artifact_path, &output).unwrap_err();
    assert!(matches!(err, Error::UnknownSymbol { .. }), "{err:?}");
    assert!(!output.exists());
}

#[test]
fn test_existing_output_untouched_on_failure() {
    let dir = tempdir().unwrap();
    let artifact_path = dir.path().join("junk.huff");
    fs::write(&artifact_path, b"definitely not an artifact").unwrap();

    let output = dir.path().join("junk");
    fs::write(&output, b"keep me").unwrap();

    assert!(decompress_file(&artifact_path, &output).is_err());
    assert_eq!(fs::read(&output).unwrap(), b"keep me");
}

#[test]
fn test_empty_artifact_file() {
    let dir = tempdir().unwrap();
    let artifact_path = dir.path().join("empty.huff");
    fs::write(&artifact_path, b"").unwrap();

    let err = decompress_file(&artifact_path, &dir.path().join("empty")).unwrap_err();
    assert!(matches!(err, Error::CorruptArtifact { .. }));
}

#[test]
fn test_failed_decompress_keeps_tmp_named_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("x.tmp");
    fs::write(&input, b"not an artifact").unwrap();

    let output = dir.path().join("x");
    assert!(decompress_file(&input, &output).is_err());
    assert_eq!(fs::read(&input).unwrap(), b"not an artifact");
    assert!(!output.exists());
    assert_eq!(dir_entries(dir.path()), vec!["x.tmp"]);
}

#[test]
fn test_compress_leaves_unrelated_sibling_alone() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in");
    fs::write(&input, b"some bytes to compress").unwrap();
    let sibling = dir.path().join("out.tmp");
    fs::write(&sibling, b"user data").unwrap();

    let output = dir.path().join("out");
    compress_file(&input, &output).unwrap();
    assert_eq!(fs::read(&sibling).unwrap(), b"user data");
    assert_eq!(dir_entries(dir.path()), vec!["in", "out", "out.tmp"]);
}
