#![doc(test(attr(deny(warnings))))]

//! Student Registry keeps a small, locally persisted list of student records
//! behind a single registration form with validation, search, sorting and
//! pagination, plus a line-oriented shell to drive it.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(
            build = %utils::build_info::current().summary(),
            "Student Registry tracing initialized."
        );
    });
}
