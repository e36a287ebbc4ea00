//! Host asset directory resolution.
//!
//! Decides where an unknown host project keeps its public static files so
//! the viewer asset subtree can be placed there at install time.
//!
//! - [`resolve`]: ordered candidate probing (`HostResolver`)
//! - [`root`]: host project root detection (`detect_host_root`)
//!
//! Resolution is pure apart from directory-existence checks: callers
//! inject the host root, so tests run against synthetic filesystem trees.

mod resolve;
mod root;

pub use resolve::{Candidate, HostResolver, Resolution};
pub use root::detect_host_root;
