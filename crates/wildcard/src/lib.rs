//! A lightweight wildcard pattern matching library.
//!
//! This crate provides simple wildcard pattern matching with `*` (zero or more
//! characters), `?` (exactly one UTF-8 character) and `#` (exactly one decimal
//! digit) wildcards. A pattern always matches the full text; there is no
//! implicit substring search.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one UTF-8 character
//! - `#` - Matches exactly one decimal digit (`0` to `9`)
//! - Any other character matches itself, case-sensitively
//!
//! There is no escaping; every occurrence of `*`, `?` and `#` is a wildcard.
//!
//! # Examples
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("*.txt");
//! assert!(pattern.matches("hello.txt"));
//! assert!(!pattern.matches("hello.rs"));
//!
//! let pattern = Pattern::new("test#.log");
//! assert!(pattern.matches("test1.log"));
//! assert!(!pattern.matches("testx.log"));
//! assert!(!pattern.matches("test12.log"));
//! ```
//!
//! # UTF-8 Handling
//!
//! The `?` wildcard matches exactly one UTF-8 character, not one byte:
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("???");
//! assert!(pattern.matches("abc"));
//! assert!(pattern.matches("🦀🎉🌟")); // Three emoji = three characters
//! assert!(!pattern.matches("ab"));
//! ```

mod pattern;
mod utf8;

pub use pattern::*;
