#![warn(missing_docs)]

//! Global pairwise alignment of two sequences with fixed match, substitution
//! and indel costs, over the full table or a diagonal band.

pub mod align;
pub mod band;
pub mod cell;
pub mod cigar;
pub mod config;
pub mod error;
pub mod mode;
pub mod nw;
pub mod scoring;
pub mod task;
pub mod trace;

pub use align::{align, Alignment};
pub use config::AlignConfig;
