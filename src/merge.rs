//! Overlap merging of token strings.

/// Length of the longest suffix of `a` that is also a prefix of `b`.
///
/// Candidates are scanned from the longest down, so the first match is the maximal overlap.
pub fn overlap(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let max = a.len().min(b.len());
    (1..=max)
        .rev()
        .find(|&k| a[a.len() - k..] == b[..k])
        .unwrap_or(0)
}

/// Concatenate `a` and `b`, eliding their longest overlap.
///
/// Merging a string with itself returns it unchanged.
pub fn merge_strings(a: &str, b: &str) -> String {
    let mut merged = MergedString::from(a);
    merged.merge(b);
    merged.into_string()
}

/// An append-only token string that grows by overlap merging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedString {
    tokens: String,
}

impl MergedString {
    pub fn new() -> MergedString {
        MergedString::default()
    }

    /// Append the part of `next` not already covered by the end of this string.
    ///
    /// Returns the number of tokens appended.
    pub fn merge(&mut self, next: &str) -> usize {
        if self.tokens == next {
            return 0;
        }
        let k = overlap(&self.tokens, next);
        let tail = &next[k..];
        tracing::trace!(overlap = k, appended = tail.len(), "merge");
        self.tokens.push_str(tail);
        tail.len()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.tokens
    }

    pub fn into_string(self) -> String {
        self.tokens
    }
}

impl From<&str> for MergedString {
    fn from(tokens: &str) -> MergedString {
        MergedString {
            tokens: tokens.to_owned(),
        }
    }
}
