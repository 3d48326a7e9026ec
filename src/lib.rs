//! # embedq — query embedding CLI
//!
//! Loads the pretrained `sentence-transformers/all-mpnet-base-v2` model,
//! encodes a fixed query string, and prints the vector's dimensionality
//! plus a JSON-serialized form of the vectors to stdout.
//!
//! ## Architecture
//!
//! - **[`embedder`]** — Text embedding via ONNX Runtime (all-mpnet-base-v2),
//!   plus model file download and a mock for tests
//! - **[`report`]** — The two-line stdout output format

pub mod embedder;
pub mod report;
