//! Version tuples
//!
//! A [`VersionTuple`] is the ordering key of a version string. It is produced
//! by best-effort prefix parsing: local metadata after the first `+` is
//! dropped, the rest is split on `.`, and parsing stops at the first segment
//! that is neither a plain number nor `post<N>`.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Marker emitted ahead of the counter of a `post<N>` segment
pub const POST_MARKER: &str = "post";

/// One element of a [`VersionTuple`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum VersionPart {
    /// A non-negative integer component
    Number(u64),
    /// A short string marker, such as [`POST_MARKER`]
    Marker(&'static str),
}

impl PartialOrd for VersionPart {
    /// Parts only compare when they are of the same kind. A number and a
    /// marker have no ordering.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (VersionPart::Number(a), VersionPart::Number(b)) => Some(a.cmp(b)),
            (VersionPart::Marker(a), VersionPart::Marker(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPart::Number(n) => write!(f, "{n}"),
            VersionPart::Marker(marker) => write!(f, "\"{marker}\""),
        }
    }
}

impl From<u64> for VersionPart {
    fn from(n: u64) -> Self {
        VersionPart::Number(n)
    }
}

/// Ordered, comparable form of a version string
///
/// Tuples compare element by element, and a shorter tuple that is a prefix of
/// a longer one sorts first. Comparison is partial: if two positions hold
/// different kinds of parts the tuples are unordered, e.g. `1.2.post1`
/// against `1.2.3`.
///
/// ```
/// use descver::version::VersionTuple;
///
/// let released = VersionTuple::parse("1.2.3");
/// let later = VersionTuple::parse("1.2.3.post4+gabc123");
/// assert!(released < later);
/// assert_eq!(later.to_string(), r#"(1, 2, 3, "post", 4)"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionTuple(Vec<VersionPart>);

impl VersionTuple {
    /// Parses the longest classifiable prefix of `version`
    pub fn parse(version: &str) -> Self {
        let release = match version.split_once('+') {
            Some((release, _local)) => release,
            None => version,
        };

        let mut parts = Vec::new();
        for segment in release.split('.') {
            if let Some(n) = parse_number(segment) {
                parts.push(VersionPart::Number(n));
            } else if let Some(n) = segment.strip_prefix(POST_MARKER).and_then(parse_number) {
                parts.push(VersionPart::Marker(POST_MARKER));
                parts.push(VersionPart::Number(n));
            } else {
                break;
            }
        }

        VersionTuple(parts)
    }

    /// Returns the parsed parts
    pub fn parts(&self) -> &[VersionPart] {
        &self.0
    }

    /// Returns the number of parts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing could be parsed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the leading run of numeric parts, e.g. `[1, 2, 3]` for
    /// `1.2.3.post4`
    pub fn release(&self) -> Vec<u64> {
        self.0
            .iter()
            .map_while(|part| match part {
                VersionPart::Number(n) => Some(*n),
                VersionPart::Marker(_) => None,
            })
            .collect()
    }

    /// Returns the post-release counter, if the tuple carries one
    pub fn post(&self) -> Option<u64> {
        self.0.windows(2).find_map(|pair| match pair {
            [VersionPart::Marker(POST_MARKER), VersionPart::Number(n)] => Some(*n),
            _ => None,
        })
    }
}

/// Parses a non-empty run of ASCII digits
///
/// A run too large for `u64` is unclassifiable, like any other bad segment.
fn parse_number(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Parses `version` into a [`VersionTuple`]; see [`VersionTuple::parse`]
pub fn version_to_tuple(version: &str) -> VersionTuple {
    VersionTuple::parse(version)
}

impl PartialOrd for VersionTuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.0.iter().zip(&other.0) {
            match a.partial_cmp(b)? {
                Ordering::Equal => continue,
                unequal => return Some(unequal),
            }
        }
        Some(self.0.len().cmp(&other.0.len()))
    }
}

impl From<&str> for VersionTuple {
    fn from(version: &str) -> Self {
        VersionTuple::parse(version)
    }
}

impl From<Vec<VersionPart>> for VersionTuple {
    fn from(parts: Vec<VersionPart>) -> Self {
        VersionTuple(parts)
    }
}

impl fmt::Display for VersionTuple {
    /// Renders in tuple notation: `()`, `(1,)`, `(1, 2, "post", 3)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{part}")?;
        }
        if self.0.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}
