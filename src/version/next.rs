//! Next-release computation for `bump`

use super::normalize::FALLBACK_VERSION;
use super::tuple::{VersionPart, VersionTuple};
use crate::types::UNKNOWN_MARKER;

/// Computes the release that follows `base_tag`
///
/// The last component of the tag's numeric prefix is incremented and the
/// rest of the tag is dropped: `1.2.3` becomes `1.2.4`, `2.0.post1` becomes
/// `2.1`. An empty or unknown tag counts as [`FALLBACK_VERSION`].
///
/// Returns None if the tag has no numeric prefix, if any dotted segment
/// before the local part is neither a number nor `post<N>` (`1.2.3-rc1`),
/// or if the last component cannot be incremented.
pub fn next_release(base_tag: &str) -> Option<String> {
    let base = if base_tag.is_empty() || base_tag == UNKNOWN_MARKER {
        FALLBACK_VERSION
    } else {
        base_tag
    };

    let tuple = VersionTuple::parse(base);
    if parsed_segments(&tuple) < public_segments(base) {
        return None;
    }

    let mut release = tuple.release();
    let last = release.last_mut()?;
    *last = last.checked_add(1)?;

    Some(
        release
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("."),
    )
}

/// Number of dotted segments before the first `+`
fn public_segments(version: &str) -> usize {
    let public = version.split_once('+').map_or(version, |(public, _)| public);
    public.split('.').count()
}

/// Number of dotted segments the parser consumed; `post<N>` yields two parts
fn parsed_segments(tuple: &VersionTuple) -> usize {
    let markers = tuple
        .parts()
        .iter()
        .filter(|part| matches!(part, VersionPart::Marker(_)))
        .count();
    tuple.len() - markers
}
