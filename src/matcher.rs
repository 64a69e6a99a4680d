// std imports
use std::str::FromStr;

// third-party imports
use regex::{Regex, RegexBuilder};
use wildcard::Pattern;

// local imports
use crate::error::{Error, Result};

// ---

/// Matcher is a comparison strategy selected by an optional pattern prefix.
///
/// Recognized prefixes are `exact:`, `regexp:`, `regexpi:` and `glob:`; a
/// pattern without a recognized prefix uses the wildcard dialect. Regular
/// expressions are anchored to match the full text, consistent with the other
/// strategies.
///
/// # Examples
///
/// ```
/// use patset::Matcher;
///
/// let matcher: Matcher = "glob:*.log".parse()?;
/// assert!(matcher.matches("app.log"));
///
/// let matcher: Matcher = "regexpi:[a-z]+\\.log".parse()?;
/// assert!(matcher.matches("APP.log"));
/// # Ok::<(), patset::Error>(())
/// ```
#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(String),
    Regex(Regex),
    RegexCaseInsensitive(Regex),
    Glob(Pattern),
}

impl Matcher {
    /// Parses a raw pattern string into a comparison strategy.
    ///
    /// Returns [`Error::InvalidPatternSyntax`] if a `regexp:` or `regexpi:`
    /// pattern fails to compile.
    pub fn parse(raw: &str) -> Result<Self> {
        if let Some(value) = raw.strip_prefix("exact:") {
            Ok(Self::Exact(value.into()))
        } else if let Some(expression) = raw.strip_prefix("regexp:") {
            Ok(Self::Regex(compile(expression, false)?))
        } else if let Some(expression) = raw.strip_prefix("regexpi:") {
            Ok(Self::RegexCaseInsensitive(compile(expression, true)?))
        } else {
            let pattern = raw.strip_prefix("glob:").unwrap_or(raw);
            Ok(Self::Glob(Pattern::new(pattern)))
        }
    }

    /// Tests whether the full text matches under this strategy.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Exact(value) => text == value,
            Self::Regex(expression) | Self::RegexCaseInsensitive(expression) => {
                expression.is_match(text)
            }
            Self::Glob(pattern) => pattern.matches(text),
        }
    }
}

impl FromStr for Matcher {
    type Err = Error;

    #[inline]
    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

fn compile(expression: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(&format!(r"\A(?:{expression})\z"))
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| Error::InvalidPatternSyntax {
            pattern: expression.into(),
            source,
        })
}
