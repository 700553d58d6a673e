// Assertion module
// Each assertion reduces to one boolean check routed through `assert_true`.

pub mod collection;
pub mod primitive;

pub use collection::{assert_empty, assert_equal, assert_greater_than, assert_less_than};
pub use primitive::{assert_false, assert_true};

/// Smoke-test export; always returns `"a"`.
pub fn test() -> &'static str {
    "a"
}
