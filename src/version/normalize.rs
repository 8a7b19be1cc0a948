//! Descriptor normalization
//!
//! Turns the four raw descriptor fields into a canonical version string of the
//! form `<base>[.post<distance>][+<hash>[.dirty]]`.

use crate::types::{RawDescriptor, UNKNOWN_MARKER};

/// Version reported when no usable tag or descriptor exists
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Combines raw descriptor fields into a version string
///
/// The local segment (`+...`) is only attached when the checkout deviates
/// from its tag, either by distance or by a dirty tree. A clean checkout
/// exactly on a tag never carries it, even if a hash is known.
///
/// # Examples
///
/// ```
/// use descver::version::extended_version;
///
/// assert_eq!(extended_version("", "", "", ""), "0.0.0");
/// assert_eq!(extended_version("0.0.0", "", "abcd", ""), "0.0.0");
/// assert_eq!(extended_version("0.0.0", "1", "abcd", "dirty"), "0.0.0.post1+abcd.dirty");
/// ```
pub fn extended_version(
    base_tag: &str,
    distance: &str,
    short_hash: &str,
    dirty_flag: &str,
) -> String {
    let mut version = if base_tag.is_empty() || base_tag == UNKNOWN_MARKER {
        FALLBACK_VERSION.to_string()
    } else {
        base_tag.to_string()
    };

    if !distance.is_empty() {
        version.push_str(".post");
        version.push_str(distance);
    }

    if !distance.is_empty() || !dirty_flag.is_empty() {
        let mut local = if short_hash.is_empty() {
            UNKNOWN_MARKER.to_string()
        } else {
            short_hash.to_string()
        };
        if !dirty_flag.is_empty() {
            local.push_str(".dirty");
        }
        version.push('+');
        version.push_str(&local);
    }

    version
}

impl RawDescriptor {
    /// Normalizes this descriptor into a version string
    pub fn to_version_string(&self) -> String {
        extended_version(
            &self.base_tag,
            &self.distance,
            &self.short_hash,
            &self.dirty_flag,
        )
    }
}
