//! Integration tests for file-level compression.
//!
//! These tests drive the file layer end to end on real files in a temporary
//! directory, from raw input to `.huff` artifacts and back.

mod corruption;
mod file_roundtrip;
