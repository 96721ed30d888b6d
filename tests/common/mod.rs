#![allow(dead_code)]

pub use taskplan_test_utils::builders;
pub use taskplan_test_utils::{assert_topologically_valid, init_tracing};

use taskplan::errors::ScheduleError;

/// Unwrap a `Cycle` error into its blocked set and witness.
pub fn expect_cycle(err: ScheduleError) -> (Vec<String>, Option<Vec<String>>) {
    match err {
        ScheduleError::Cycle { blocked, witness } => (blocked, witness),
        other => panic!("expected Cycle error, got {other:?}"),
    }
}
