//! Wildcard and pattern-set matching for filtering file names, log lines and
//! other short strings against user-supplied rules.
//!
//! The [`wildcard`] crate provides the leaf matching primitive; [`PatternSet`]
//! aggregates ordered positive and negative pattern lists into one inclusion
//! decision, optionally rewriting each pattern through a caller-supplied
//! [`Resolve`] capability. [`Matcher`] is the dispatch boundary that selects a
//! comparison strategy from an `exact:`, `regexp:`, `regexpi:` or `glob:`
//! pattern prefix.
//!
//! # Examples
//!
//! ```
//! use patset::{MatchOptions, PatternSet};
//!
//! let mut set = PatternSet::new(MatchOptions {
//!     wildcards: true,
//!     ..Default::default()
//! });
//! set.add_positive("*.log");
//! set.add_negative("debug*");
//!
//! assert!(set.matches("app.log"));
//! assert!(!set.matches("debug.log"));
//! ```

// public modules
pub mod error;
pub mod matcher;
pub mod set;

// public uses
pub use error::{Error, Result};
pub use matcher::Matcher;
pub use set::{MatchOptions, NoResolving, PatternSet, Resolve};
pub use wildcard::{self, Pattern};
