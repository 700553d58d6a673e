// WebAssembly exports
// Collections cross the boundary as JS arrays; outcomes as an `Outcome` class.

use wasm_bindgen::prelude::*;

use crate::assert;
use crate::outcome::AssertionOutcome;

/// `{kind, error}` record handed back to the host
#[wasm_bindgen]
pub struct Outcome {
    inner: AssertionOutcome,
}

#[wasm_bindgen]
impl Outcome {
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.inner.kind().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> String {
        self.inner.message().to_string()
    }
}

impl From<AssertionOutcome> for Outcome {
    fn from(inner: AssertionOutcome) -> Self {
        Self { inner }
    }
}

// Element equality is JS strict equality (`===`), applied pairwise: numbers and
// strings compare by value, object and array elements by reference.
#[wasm_bindgen]
pub fn assert_equal(
    collection: Box<[JsValue]>,
    expected: Box<[JsValue]>,
    message: String,
) -> Outcome {
    assert::assert_equal(&collection, &expected, message).into()
}

#[wasm_bindgen]
pub fn assert_empty(collection: Box<[JsValue]>, min_size: i32, message: String) -> Outcome {
    assert::assert_empty(&collection, min_size, message).into()
}

#[wasm_bindgen]
pub fn assert_less_than(collection: Box<[JsValue]>, min_size: i32, message: String) -> Outcome {
    assert::assert_less_than(&collection, min_size, message).into()
}

#[wasm_bindgen]
pub fn assert_greater_than(collection: Box<[JsValue]>, min_size: i32, message: String) -> Outcome {
    assert::assert_greater_than(&collection, min_size, message).into()
}

#[wasm_bindgen]
pub fn assert_false(expression: bool, message: String) -> Outcome {
    assert::assert_false(expression, message).into()
}

#[wasm_bindgen]
pub fn assert_true(expression: bool, message: String) -> Outcome {
    assert::assert_true(expression, message).into()
}

#[wasm_bindgen]
pub fn test() -> String {
    assert::test().to_string()
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
