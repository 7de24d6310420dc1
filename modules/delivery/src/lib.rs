#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_async)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::empty_enum)]
#![deny(dropping_copy_types)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::match_like_matches_macro)]
#![no_std]

//! Locked-message delivery engine for broker consumer sessions.
//!
//! A consumer session hands messages to application code while keeping them
//! provisionally locked: neither consumed nor available to other consumers
//! until the application deletes them, unlocks them, or lets the lock time
//! out. The engine maintains the ordered list of those in-flight messages, a
//! bounded pool of recycled list nodes, and two best-effort expiry sweeps
//! (lock expiry and payload-reference expiry) driven by one-shot alarms.
//!
//! All list state sits behind a single mutex per session. Calls into the
//! backing store or the owning consumer are never made while that mutex is
//! held; every operation collects its side effects and runs them after the
//! guard is dropped. The `std` feature adds a `tracing`-backed observer.

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod std;
