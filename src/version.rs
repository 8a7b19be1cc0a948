//! Version string algorithms
//!
//! - [`normalize`]: combine a raw descriptor into one canonical version string
//! - [`tuple`]: parse a version string into an ordered, comparable tuple
//! - [`next`]: compute the next release from a base tag

pub mod next;
pub mod normalize;
pub mod tuple;

pub use next::next_release;
pub use normalize::{FALLBACK_VERSION, extended_version};
pub use tuple::{POST_MARKER, VersionPart, VersionTuple, version_to_tuple};
