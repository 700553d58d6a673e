use crate::outcome::AssertionOutcome;

/// Succeed when `expression` holds, otherwise fail with `message`.
pub fn assert_true(expression: bool, message: impl Into<String>) -> AssertionOutcome {
    tracing::trace!(assertion = "assert_true", passed = expression);

    if expression {
        AssertionOutcome::succeeded()
    } else {
        let outcome = AssertionOutcome::failed(message);
        tracing::debug!("assertion failed: {}", outcome.message());
        outcome
    }
}

pub fn assert_false(expression: bool, message: impl Into<String>) -> AssertionOutcome {
    assert_true(!expression, message)
}
