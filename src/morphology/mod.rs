//! One-dimensional binary morphology.
//!
//! Signals and structuring elements are slices of 0/1 bytes. Every
//! operation returns a new signal of the same length as its input.

pub mod filter;

pub use filter::{denoise, expand, shrink};
