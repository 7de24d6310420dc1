//! Name reservation crate for the lockline workspace.
//!
//! The engine lives in `lockline_delivery_rs`; the shared synchronization and
//! timing primitives live in `lockline_utils_rs`.


/// Returns the version of this crate.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}

/// Returns a short message describing the purpose of this placeholder crate.
#[must_use]
pub const fn readiness_message() -> &'static str {
  "this crate reserves the lockline name; use the lockline_delivery_rs and lockline_utils_rs modules"
}
