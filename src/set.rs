// std imports
use std::borrow::Cow;

// third-party imports
use log::debug;
use serde::{Deserialize, Serialize};

// ---

/// Resolve rewrites a pattern into the effective text to compare against.
///
/// A resolver is supplied per evaluation call and is invoked once per pattern
/// until the evaluation short-circuits. It must behave as a pure function of
/// the pattern and whatever external state it captures.
pub trait Resolve {
    fn resolve<'a>(&self, pattern: &'a str) -> Cow<'a, str>;
}

impl<F> Resolve for F
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    #[inline]
    fn resolve<'a>(&self, pattern: &'a str) -> Cow<'a, str> {
        self(pattern)
    }
}

// ---

/// NoResolving passes every pattern through unchanged.
#[derive(Default, Clone)]
pub struct NoResolving {}

impl Resolve for NoResolving {
    #[inline]
    fn resolve<'a>(&self, pattern: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(pattern)
    }
}

// ---

/// MatchOptions controls how a pattern set combines and compares its patterns.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Require all positive patterns to match instead of any single one.
    pub match_all: bool,
    /// Compare with wildcard semantics instead of substring containment.
    pub wildcards: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            match_all: true,
            wildcards: false,
        }
    }
}

// ---

/// PatternSet aggregates ordered positive and negative pattern lists into a
/// single inclusion decision.
///
/// A candidate is included when it satisfies the positive patterns under the
/// configured policy and matches none of the negative patterns. An empty
/// positive list is vacuously satisfied, so a set holding only negative
/// patterns acts as a pure exclusion filter.
///
/// # Examples
///
/// ```
/// use patset::{MatchOptions, PatternSet};
///
/// let mut set = PatternSet::new(MatchOptions {
///     wildcards: true,
///     ..Default::default()
/// });
/// set.add_positive("*.log");
/// set.add_negative("debug*");
///
/// assert!(set.matches("app.log"));
/// assert!(!set.matches("debug.log"));
/// assert!(!set.matches("app.txt"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    positive: Vec<String>,
    negative: Vec<String>,
    options: MatchOptions,
}

impl PatternSet {
    /// Creates an empty set with the given options.
    pub fn new(options: MatchOptions) -> Self {
        Self {
            positive: Vec::new(),
            negative: Vec::new(),
            options,
        }
    }

    /// Appends a pattern to the positive list.
    ///
    /// Empty patterns are silently ignored and never stored. Duplicates are
    /// kept and evaluated in insertion order.
    pub fn add_positive(&mut self, pattern: impl Into<String>) {
        Self::add(&mut self.positive, pattern.into());
    }

    /// Appends a pattern to the negative list.
    ///
    /// Empty patterns are silently ignored and never stored. Duplicates are
    /// kept and evaluated in insertion order.
    pub fn add_negative(&mut self, pattern: impl Into<String>) {
        Self::add(&mut self.negative, pattern.into());
    }

    fn add(list: &mut Vec<String>, pattern: String) {
        if !pattern.is_empty() {
            list.push(pattern);
        }
    }

    /// Removes all patterns from both lists, keeping the options.
    pub fn clear(&mut self) {
        self.positive.clear();
        self.negative.clear();
    }

    /// Returns the positive patterns in insertion order.
    #[inline]
    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    /// Returns the negative patterns in insertion order.
    #[inline]
    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// Returns the options the set was created with.
    #[inline]
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Returns true if both pattern lists are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Evaluates the candidate against both pattern lists.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.matches_with(candidate, &NoResolving::default())
    }

    /// Evaluates the candidate, rewriting each pattern through the resolver
    /// before comparison.
    ///
    /// Positive patterns are combined per [`MatchOptions::match_all`] and
    /// evaluated first; if they reject the candidate, negative patterns are
    /// never consulted. Otherwise the first matching negative pattern excludes
    /// the candidate.
    pub fn matches_with(&self, candidate: &str, resolver: &impl Resolve) -> bool {
        let test = |pattern: &str| {
            let pattern = resolver.resolve(pattern);
            if self.options.wildcards {
                wildcard::matches(candidate, &pattern)
            } else {
                candidate.contains(pattern.as_ref())
            }
        };

        let included = if self.positive.is_empty() {
            true
        } else if self.options.match_all {
            self.positive.iter().all(|pattern| test(pattern))
        } else {
            self.positive.iter().any(|pattern| test(pattern))
        };
        if !included {
            return false;
        }

        for pattern in &self.negative {
            if test(pattern) {
                debug!("candidate {candidate:?} excluded by pattern {pattern:?}");
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn wildcards() -> MatchOptions {
        MatchOptions {
            wildcards: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let set = PatternSet::default();
        assert!(set.is_empty());
        assert!(set.matches(""));
        assert!(set.matches("anything"));
    }

    #[test]
    fn test_positive_substring_containment() {
        let mut set = PatternSet::default();
        set.add_positive("err");
        assert!(set.matches("error: disk full"));
        assert!(set.matches("err"));
        assert!(!set.matches("warning: low disk"));
    }

    #[test]
    fn test_match_all_requires_every_positive() {
        let mut set = PatternSet::default();
        set.add_positive("a");
        set.add_positive("b");
        assert!(set.matches("ab"));
        assert!(set.matches("xaybz"));
        assert!(!set.matches("xaz"));
        assert!(!set.matches("xyz"));
    }

    #[test]
    fn test_match_any_accepts_single_positive() {
        let mut set = PatternSet::new(MatchOptions {
            match_all: false,
            ..Default::default()
        });
        set.add_positive("a");
        set.add_positive("b");
        assert!(set.matches("xbz"));
        assert!(set.matches("xaz"));
        assert!(!set.matches("xyz"));
    }

    #[test]
    fn test_empty_positive_list_is_vacuously_true() {
        let mut set = PatternSet::default();
        set.add_negative("bad");
        assert!(set.matches("good"));
        assert!(!set.matches("something-bad"));
    }

    #[test]
    fn test_negative_dominates_positive_match() {
        let mut set = PatternSet::default();
        set.add_positive("a");
        set.add_negative("b");
        assert!(set.matches("a"));
        assert!(!set.matches("ab"));
    }

    #[test]
    fn test_positive_failure_skips_negatives() {
        let mut set = PatternSet::default();
        set.add_positive("hit");
        set.add_negative("miss");
        assert!(!set.matches("miss"));
        assert!(!set.matches("nothing"));
    }

    #[test]
    fn test_empty_patterns_are_ignored() {
        let mut set = PatternSet::default();
        set.add_positive("");
        set.add_negative("");
        set.add_positive(String::new());
        assert!(set.is_empty());
        assert!(set.matches("anything"));

        set.add_positive("a");
        set.add_negative("b");
        assert_eq!(set.positive(), ["a"]);
        assert_eq!(set.negative(), ["b"]);
    }

    #[test]
    fn test_clear() {
        let mut set = PatternSet::default();
        set.add_positive("a");
        set.add_negative("b");
        set.clear();
        assert!(set.is_empty());
        assert!(set.matches("b"));
    }

    #[test]
    fn test_wildcard_mode() {
        let mut set = PatternSet::new(wildcards());
        set.add_positive("*.log");
        set.add_negative("debug*");
        assert!(set.matches("app.log"));
        assert!(!set.matches("debug.log"));
        assert!(!set.matches("app.txt"));
    }

    #[test]
    fn test_wildcard_mode_is_full_match() {
        let mut set = PatternSet::new(wildcards());
        set.add_positive("log");
        assert!(set.matches("log"));
        assert!(!set.matches("app.log"));
    }

    #[test]
    fn test_resolver_rewrites_patterns() {
        let mut set = PatternSet::new(wildcards());
        set.add_positive("${ext}");
        set.add_negative("debug*");

        fn resolver(pattern: &str) -> Cow<'_, str> {
            if pattern == "${ext}" {
                Cow::Borrowed("*.log")
            } else {
                Cow::Borrowed(pattern)
            }
        }
        assert!(set.matches_with("app.log", &resolver));
        assert!(!set.matches_with("debug.log", &resolver));
        assert!(!set.matches_with("${ext}", &resolver));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut set = PatternSet::default();
        set.add_positive("a");
        set.add_negative("b");
        for _ in 0..2 {
            assert!(set.matches("xaz"));
            assert!(!set.matches("xabz"));
        }
        assert_eq!(set.positive(), ["a"]);
        assert_eq!(set.negative(), ["b"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut set = PatternSet::default();
        set.add_positive("a");
        set.add_positive("a");
        assert_eq!(set.positive(), ["a", "a"]);
        assert!(set.matches("a"));
    }

    #[rstest]
    #[case(true, "error.log", true)]
    #[case(true, "app.log", false)]
    #[case(true, "debug-error.log", false)]
    #[case(false, "app.log", true)]
    #[case(false, "error.txt", true)]
    #[case(false, "debug.log", false)]
    #[case(false, "nothing", false)]
    fn test_policy_matrix(#[case] match_all: bool, #[case] candidate: &str, #[case] expected: bool) {
        let mut set = PatternSet::new(MatchOptions {
            match_all,
            wildcards: true,
        });
        set.add_positive("*.log");
        set.add_positive("*error*");
        set.add_negative("debug*");
        assert_eq!(set.matches(candidate), expected, "{candidate:?}");
    }

    #[test]
    fn test_options_deserialization_defaults() {
        let options: MatchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, MatchOptions::default());

        let options: MatchOptions = serde_json::from_str(r#"{"wildcards":true}"#).unwrap();
        assert!(options.match_all);
        assert!(options.wildcards);
    }
}
