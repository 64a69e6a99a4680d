use std::fmt;

use memchr::memchr;

use crate::utf8::utf8_char_width;

/// A wildcard pattern for matching text strings.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one UTF-8 character
/// - `#` matches exactly one decimal digit
///
/// A pattern matches the entire text, never a substring of it.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log");
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
///
/// let pattern = Pattern::new("v#.#.#");
/// assert!(pattern.matches("v1.2.3"));
/// assert!(!pattern.matches("v1.2.x"));
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Pattern {
    raw: String,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("hello*");
    /// assert!(pattern.matches("hello world"));
    /// ```
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the pattern text the pattern was created from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs");
    /// assert!(pattern.matches("main.rs"));
    /// assert!(!pattern.matches("main.txt"));
    ///
    /// // Complex patterns with backtracking
    /// let pattern = Pattern::new("*test*");
    /// assert!(pattern.matches("this is a test case"));
    /// assert!(pattern.matches("test"));
    /// assert!(!pattern.matches("no match here"));
    /// ```
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        matches(text, &self.raw)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Pattern {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for Pattern {
    #[inline]
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Pattern {
    #[inline]
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Tests whether `text` fully matches the wildcard `pattern`.
///
/// This is the primitive behind [`Pattern::matches`], usable directly when the
/// pattern is transient and not worth wrapping:
///
/// ```
/// assert!(wildcard::matches("app.log", "*.log"));
/// assert!(!wildcard::matches("app.log", "#.log"));
/// ```
pub fn matches(text: &str, pattern: &str) -> bool {
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    let (mut ti, mut pi) = (0, 0);

    // Literal phase: lock-step until the first star.
    while pi < p.len() && p[pi] != b'*' {
        if ti == t.len() {
            return false;
        }
        let Some((np, nt)) = step(p, pi, t, ti) else {
            return false;
        };
        (pi, ti) = (np, nt);
    }
    if pi == p.len() {
        return ti == t.len();
    }

    // Post-star phase. `mark` is the pattern position right after the most
    // recent star, `resume` is the text position to retry from on mismatch.
    // Each backtrack advances `resume`, so the loop terminates.
    let mut mark = pi;
    let mut resume = ti;
    loop {
        if pi < p.len() && p[pi] == b'*' {
            while pi < p.len() && p[pi] == b'*' {
                pi += 1;
            }
            if pi == p.len() {
                // Trailing star absorbs the rest of the text.
                return true;
            }
            mark = pi;
            resume = bump(t, ti);
            continue;
        }
        if pi == p.len() && ti == t.len() {
            return true;
        }
        if pi < p.len() && ti < t.len() {
            if let Some((np, nt)) = step(p, pi, t, ti) {
                (pi, ti) = (np, nt);
                continue;
            }
        }

        // Backtrack: give one more text character to the last star. When the
        // pattern resumes with a literal, candidate positions are narrowed to
        // occurrences of its first byte.
        if resume > t.len() {
            return false;
        }
        pi = mark;
        ti = match p[mark] {
            b'?' | b'#' => resume,
            first => match memchr(first, &t[resume..]) {
                Some(offset) => resume + offset,
                None => return false,
            },
        };
        resume = bump(t, ti);
    }
}

/// Matches one pattern symbol against one text character, returning the
/// advanced positions on success.
#[inline]
fn step(p: &[u8], pi: usize, t: &[u8], ti: usize) -> Option<(usize, usize)> {
    match p[pi] {
        b'?' => Some((pi + 1, ti + utf8_char_width(t[ti]))),
        b'#' => t[ti].is_ascii_digit().then_some((pi + 1, ti + 1)),
        b => {
            let pw = utf8_char_width(b);
            let tw = utf8_char_width(t[ti]);
            (pw == tw && p[pi..pi + pw] == t[ti..ti + tw]).then_some((pi + pw, ti + tw))
        }
    }
}

/// Advances a byte position by one UTF-8 character, or past the end when the
/// text is already exhausted.
#[inline]
fn bump(t: &[u8], i: usize) -> usize {
    if i < t.len() { i + utf8_char_width(t[i]) } else { i + 1 }
}
