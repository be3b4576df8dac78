//! Longest Common Subsequence with traceback and aligned output.
//!
//! This crate computes the LCS of two symbol sequences via the classic
//! full-table dynamic program, then walks a direction (backpointer) table to
//! reconstruct not just the LCS itself but both inputs with every position
//! that does not participate in the LCS masked out.
//!
//! ## Core idea
//! 1. Build a `(m+1) × (n+1)` length table where cell `(i, j)` holds the LCS
//!    length of the first `i` symbols of A and the first `j` symbols of B.
//! 2. Record, per cell, which transition produced it ([`Direction`]).
//! 3. Walk the direction table backward from `(m, n)` to recover one optimal
//!    subsequence and the two masked input sequences.
//!
//! Ties between the skip transitions are broken in favour of excluding a
//! symbol from A. The LCS *length* does not depend on this, but the
//! reconstructed alignment does, and the policy is part of this crate's
//! contract (see [`tables::build_tables`]).
//!
//! ## Quick start
//! ```
//! use lcs_align::LcsEngine;
//!
//! let alignment = LcsEngine::new(b"ACCG", b"ACGC").run().unwrap();
//! assert_eq!(alignment.lcs, b"ACC");
//! assert_eq!(alignment.masked_a(b'*'), b"ACC*");
//! assert_eq!(alignment.masked_b(b'*'), b"AC*C");
//! ```
//!
//! ## Features
//! - `parallel`: fill the tables by anti-diagonal waves with rayon. Produces
//!   bit-identical tables to the sequential build.
//! - `tracing`: emit `trace_span!`s around the build and traceback phases.

pub mod builder;
pub mod engine;
pub mod error;
pub mod reference;
pub mod tables;
pub mod traceback;
pub mod utils;

pub use crate::builder::LcsEngineBuilder;
pub use crate::engine::{Alignment, LcsEngine};
pub use crate::error::CapacityError;
pub use crate::tables::Direction;
