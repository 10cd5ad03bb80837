//! Burrows-Wheeler transform together with the arrays usually drawn next to it:
//! SA, ISA, LCP, LCS, PLCP, PLCS, LF, FL, Phi, Phi-inverse, the document array,
//! per-character thresholds and maximal unique matches.
//!
//! Everything is computed the naive way (full suffix sorting, quadratic LCP and
//! LCS scans), which is fine for the short texts this crate is meant to explain.
//! The text must end with a character that is strictly smaller than every other
//! character; `$` and `#` additionally separate documents.
//!
//! # Example
//! ```
//! use bwt_suite::BwtSuite;
//!
//! let suite = BwtSuite::new("abaaba$");
//!
//! assert_eq!(suite.sa(), &[6, 5, 2, 3, 0, 4, 1]);
//! assert_eq!(suite.bwt_string(), "abba$aa");
//! assert_eq!(suite.lcp(), &[0, 0, 1, 1, 3, 0, 2]);
//! assert_eq!(suite.lf(), &[1, 5, 6, 2, 0, 3, 4]);
//! ```
pub mod arrays;
pub mod document;
pub mod threshold;

mod report;
mod suite;

pub use document::DEFAULT_TERMINATORS;
pub use report::Report;
pub use suite::{BwtSuite, Mum, TextError};
pub use threshold::{classify_gap, GapThresholds, Marker, ThresholdWalk};
