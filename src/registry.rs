// Registry of exported assertions callable by name with JSON arguments

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::assert;
use crate::outcome::AssertionOutcome;

/// Malformed assertion call. An evaluated-but-failed assertion is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("unknown assertion '{0}'")]
    UnknownAssertion(String),
    #[error("{name}: expects {expected} arguments, got {actual}")]
    Arity {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("{name}: argument {index} must be {expected}")]
    ArgumentType {
        name: String,
        index: usize,
        expected: ArgKind,
    },
}

/// Kind of value an argument slot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Boolean,
    String,
    Collection,
    Integer,
}

impl std::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Boolean => "a boolean",
            Self::String => "a string",
            Self::Collection => "an array",
            Self::Integer => "a 32-bit integer",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssertionSignature {
    pub arg_names: &'static [&'static str],
    pub arg_kinds: &'static [ArgKind],
}

/// Trait for all exported assertions
pub trait Assertion: Send + Sync {
    /// Exported name (e.g., "assert_true")
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn signature(&self) -> AssertionSignature;
    /// Decode `args` and evaluate the assertion
    fn call(&self, args: &[Value]) -> Result<AssertionOutcome, CallError>;
}

/// Positional argument decoder bound to one assertion's signature.
struct Args<'a> {
    name: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn new(
        name: &'a str,
        signature: AssertionSignature,
        values: &'a [Value],
    ) -> Result<Self, CallError> {
        let expected = signature.arg_kinds.len();
        if values.len() != expected {
            return Err(CallError::Arity {
                name: name.to_string(),
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { name, values })
    }

    fn mismatch(&self, index: usize, expected: ArgKind) -> CallError {
        CallError::ArgumentType {
            name: self.name.to_string(),
            index,
            expected,
        }
    }

    fn boolean(&self, index: usize) -> Result<bool, CallError> {
        self.values[index]
            .as_bool()
            .ok_or_else(|| self.mismatch(index, ArgKind::Boolean))
    }

    fn string(&self, index: usize) -> Result<&'a str, CallError> {
        self.values[index]
            .as_str()
            .ok_or_else(|| self.mismatch(index, ArgKind::String))
    }

    fn collection(&self, index: usize) -> Result<&'a [Value], CallError> {
        self.values[index]
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.mismatch(index, ArgKind::Collection))
    }

    fn integer(&self, index: usize) -> Result<i32, CallError> {
        self.values[index]
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| self.mismatch(index, ArgKind::Integer))
    }
}

const BOOL_MESSAGE: AssertionSignature = AssertionSignature {
    arg_names: &["expression", "message"],
    arg_kinds: &[ArgKind::Boolean, ArgKind::String],
};

const COLLECTION_SIZE_MESSAGE: AssertionSignature = AssertionSignature {
    arg_names: &["collection", "min_size", "message"],
    arg_kinds: &[ArgKind::Collection, ArgKind::Integer, ArgKind::String],
};

pub struct TrueAssertion;

impl Assertion for TrueAssertion {
    fn name(&self) -> &str {
        "assert_true"
    }

    fn description(&self) -> &str {
        "Fails with the message when the expression is false"
    }

    fn signature(&self) -> AssertionSignature {
        BOOL_MESSAGE
    }

    fn call(&self, args: &[Value]) -> Result<AssertionOutcome, CallError> {
        let args = Args::new(self.name(), self.signature(), args)?;
        Ok(assert::assert_true(args.boolean(0)?, args.string(1)?))
    }
}

pub struct FalseAssertion;

impl Assertion for FalseAssertion {
    fn name(&self) -> &str {
        "assert_false"
    }

    fn description(&self) -> &str {
        "Fails with the message when the expression is true"
    }

    fn signature(&self) -> AssertionSignature {
        BOOL_MESSAGE
    }

    fn call(&self, args: &[Value]) -> Result<AssertionOutcome, CallError> {
        let args = Args::new(self.name(), self.signature(), args)?;
        Ok(assert::assert_false(args.boolean(0)?, args.string(1)?))
    }
}

pub struct EqualAssertion;

impl Assertion for EqualAssertion {
    fn name(&self) -> &str {
        "assert_equal"
    }

    fn description(&self) -> &str {
        "Fails unless both arrays are structurally equal"
    }

    fn signature(&self) -> AssertionSignature {
        AssertionSignature {
            arg_names: &["collection", "expected", "message"],
            arg_kinds: &[ArgKind::Collection, ArgKind::Collection, ArgKind::String],
        }
    }

    fn call(&self, args: &[Value]) -> Result<AssertionOutcome, CallError> {
        let args = Args::new(self.name(), self.signature(), args)?;
        Ok(assert::assert_equal(
            args.collection(0)?,
            args.collection(1)?,
            args.string(2)?,
        ))
    }
}

pub struct EmptyAssertion;

impl Assertion for EmptyAssertion {
    fn name(&self) -> &str {
        "assert_empty"
    }

    fn description(&self) -> &str {
        "Fails unless the array has no elements (min_size is ignored)"
    }

    fn signature(&self) -> AssertionSignature {
        COLLECTION_SIZE_MESSAGE
    }

    fn call(&self, args: &[Value]) -> Result<AssertionOutcome, CallError> {
        let args = Args::new(self.name(), self.signature(), args)?;
        Ok(assert::assert_empty(
            args.collection(0)?,
            args.integer(1)?,
            args.string(2)?,
        ))
    }
}

pub struct LessThanAssertion;

impl Assertion for LessThanAssertion {
    fn name(&self) -> &str {
        "assert_less_than"
    }

    fn description(&self) -> &str {
        "Fails unless the array length is below min_size"
    }

    fn signature(&self) -> AssertionSignature {
        COLLECTION_SIZE_MESSAGE
    }

    fn call(&self, args: &[Value]) -> Result<AssertionOutcome, CallError> {
        let args = Args::new(self.name(), self.signature(), args)?;
        Ok(assert::assert_less_than(
            args.collection(0)?,
            args.integer(1)?,
            args.string(2)?,
        ))
    }
}

pub struct GreaterThanAssertion;

impl Assertion for GreaterThanAssertion {
    fn name(&self) -> &str {
        "assert_greater_than"
    }

    fn description(&self) -> &str {
        "Fails unless the array length is above min_size"
    }

    fn signature(&self) -> AssertionSignature {
        COLLECTION_SIZE_MESSAGE
    }

    fn call(&self, args: &[Value]) -> Result<AssertionOutcome, CallError> {
        let args = Args::new(self.name(), self.signature(), args)?;
        Ok(assert::assert_greater_than(
            args.collection(0)?,
            args.integer(1)?,
            args.string(2)?,
        ))
    }
}

/// Name-indexed table of exported assertions
pub struct AssertionRegistry {
    assertions: HashMap<String, Arc<dyn Assertion>>,
}

impl AssertionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            assertions: HashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(Arc::new(TrueAssertion));
        self.register(Arc::new(FalseAssertion));
        self.register(Arc::new(EqualAssertion));
        self.register(Arc::new(EmptyAssertion));
        self.register(Arc::new(LessThanAssertion));
        self.register(Arc::new(GreaterThanAssertion));
    }

    /// Register an assertion, replacing any existing one with the same name
    pub fn register(&mut self, assertion: Arc<dyn Assertion>) {
        self.assertions.insert(assertion.name().to_string(), assertion);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Assertion>> {
        self.assertions.get(name).cloned()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.assertions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn list(&self) -> Vec<Arc<dyn Assertion>> {
        self.assertions.values().cloned().collect()
    }

    /// Look up `name` and evaluate it against `args`
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<AssertionOutcome, CallError> {
        let assertion = self
            .assertions
            .get(name)
            .ok_or_else(|| CallError::UnknownAssertion(name.to_string()))?;

        let outcome = assertion.call(args)?;
        tracing::debug!(assertion = name, kind = %outcome.kind(), "invoked assertion");
        Ok(outcome)
    }
}

impl Default for AssertionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_defaults() {
        let registry = AssertionRegistry::new();
        assert_eq!(
            registry.names(),
            vec![
                "assert_empty",
                "assert_equal",
                "assert_false",
                "assert_greater_than",
                "assert_less_than",
                "assert_true",
            ]
        );
        assert_eq!(registry.list().len(), 6);
    }

    #[test]
    fn test_signature_matches_arg_names() {
        let registry = AssertionRegistry::new();
        for assertion in registry.list() {
            let signature = assertion.signature();
            assert_eq!(signature.arg_names.len(), signature.arg_kinds.len());
            assert!(!assertion.description().is_empty());
        }
    }

    #[test]
    fn test_integer_argument_out_of_range() {
        let result = GreaterThanAssertion.call(&[json!([1]), json!(i64::MAX), json!("m")]);
        assert_eq!(
            result,
            Err(CallError::ArgumentType {
                name: "assert_greater_than".to_string(),
                index: 1,
                expected: ArgKind::Integer,
            })
        );
    }

    #[test]
    fn test_fractional_integer_argument_is_rejected() {
        let result = LessThanAssertion.call(&[json!([]), json!(1.5), json!("m")]);
        assert!(matches!(
            result,
            Err(CallError::ArgumentType { index: 1, .. })
        ));
    }

    struct AlwaysFails;

    impl Assertion for AlwaysFails {
        fn name(&self) -> &str {
            "assert_true"
        }

        fn description(&self) -> &str {
            "test double"
        }

        fn signature(&self) -> AssertionSignature {
            AssertionSignature {
                arg_names: &[],
                arg_kinds: &[],
            }
        }

        fn call(&self, _args: &[Value]) -> Result<AssertionOutcome, CallError> {
            Ok(AssertionOutcome::failed("always"))
        }
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = AssertionRegistry::new();
        registry.register(Arc::new(AlwaysFails));
        assert_eq!(registry.list().len(), 6);

        let outcome = registry.invoke("assert_true", &[]).unwrap();
        assert_eq!(outcome.message(), "always");
    }
}
