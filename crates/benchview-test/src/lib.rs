//! Shared test fixtures for benchview crates.
//!
//! This crate provides measurement data builders for tests. It only depends
//! on `benchview-core`, so every other crate can use it as a dev-dependency.
//!
//! - [`runs`] - iterations, runs and subjects with known times and memory
//! - [`progress`] - iteration collections and benchmark metadata for the
//!   live renderer
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! benchview-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use benchview_test::runs::{exploded_subject, run};
//! use benchview_test::progress::measured_collection;
//! ```

pub mod progress;
pub mod runs;

pub use progress::{benchmark, measured_collection, pending_collection};
pub use runs::{exploded_subject, iterations, run, subject, suite};
