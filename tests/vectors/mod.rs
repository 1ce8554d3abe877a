//! Test vector types for the derivation known-answer suites.
//!
//! Vectors pin the scheme's parameterization at a fast test profile
//! (1,000 stretch iterations); the pipeline is otherwise identical to the
//! published profile, so any drift in salts, domain labels, purposes, or
//! sampling shows up here.

// Some fields exist for vector-file readability rather than direct use
#![allow(dead_code)]

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for the key stretcher.
#[derive(Debug, Deserialize)]
pub struct StretchTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    pub master: String,
    pub label: String,
    pub iterations: u32,
    #[serde(rename = "output-length")]
    pub output_length: usize,
    /// Hex-encoded site key (null for fail tests)
    #[serde(rename = "site-key")]
    pub site_key: Option<String>,
}

/// Test vector for the key expander.
#[derive(Debug, Deserialize)]
pub struct ExpandTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded input site key
    #[serde(rename = "site-key")]
    pub site_key: String,
    pub label: String,
    pub purpose: String,
    pub length: usize,
    /// Hex-encoded keystream (null for fail tests)
    pub keystream: Option<String>,
}

/// Test vector for the full pipeline.
#[derive(Debug, Deserialize)]
pub struct DeriveTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    pub master: String,
    pub label: String,
    pub iterations: u32,
    /// Expected passphrase (null for fail tests)
    pub passphrase: Option<String>,
}

/// Loads a vector suite from a JSON file.
pub fn load_vectors<T: DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let data = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read vector file {path}: {e}"));
    serde_json::from_str(&data)
        .unwrap_or_else(|e| panic!("failed to parse vector file {path}: {e}"))
}

/// Decodes a hex string, panicking with context on malformed vectors.
pub fn hex_decode(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex in vector file")
}
