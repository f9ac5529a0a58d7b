//! Shared test harness modules for the Wayfinder CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]
#![expect(
    clippy::expect_used,
    reason = "Tests use expect for readable failures"
)]

use super::*;

mod helpers;
