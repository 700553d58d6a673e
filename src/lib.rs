pub mod assert;
pub mod config;
pub mod logging;
pub mod outcome;
pub mod registry;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use assert::{
    assert_empty, assert_equal, assert_false, assert_greater_than, assert_less_than, assert_true,
    test,
};
pub use outcome::{AssertionOutcome, FailedAssertion, OutcomeKind};
pub use registry::{AssertionRegistry, CallError};
