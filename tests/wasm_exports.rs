#![cfg(target_arch = "wasm32")]

use alarm_assert::wasm;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn numbers(values: &[f64]) -> Box<[JsValue]> {
    values.iter().map(|n| JsValue::from_f64(*n)).collect()
}

#[wasm_bindgen_test]
fn wasm_assert_true_false_reports_kind_and_error() {
    let outcome = wasm::assert_true(false, "x must hold".to_string());
    assert_eq!(outcome.kind(), "Failed");
    assert_eq!(outcome.error(), "x must hold");

    let outcome = wasm::assert_false(false, "must be false".to_string());
    assert_eq!(outcome.kind(), "Succeeded");
    assert_eq!(outcome.error(), "");
}

#[wasm_bindgen_test]
fn wasm_assert_empty_ignores_min_size() {
    let outcome = wasm::assert_empty(numbers(&[]), 5, "must be empty".to_string());
    assert_eq!(outcome.kind(), "Succeeded");
    assert_eq!(outcome.error(), "");
}

#[wasm_bindgen_test]
fn wasm_size_assertions() {
    let outcome =
        wasm::assert_less_than(numbers(&[1.0, 2.0, 3.0]), 2, "too many".to_string());
    assert_eq!(outcome.kind(), "Failed");
    assert_eq!(outcome.error(), "too many");

    let outcome =
        wasm::assert_greater_than(numbers(&[1.0, 2.0, 3.0]), 1, "need more".to_string());
    assert_eq!(outcome.kind(), "Succeeded");
    assert_eq!(outcome.error(), "");
}

#[wasm_bindgen_test]
fn wasm_assert_equal_primitives_compare_by_value() {
    let outcome = wasm::assert_equal(
        numbers(&[1.0, 2.0]),
        numbers(&[1.0, 2.0]),
        "differ".to_string(),
    );
    assert_eq!(outcome.kind(), "Succeeded");

    let strings =
        |s: &[&str]| -> Box<[JsValue]> { s.iter().map(|v| JsValue::from_str(v)).collect() };
    let outcome = wasm::assert_equal(
        strings(&["a", "b"]),
        strings(&["b", "a"]),
        "differ".to_string(),
    );
    assert_eq!(outcome.kind(), "Failed");
    assert_eq!(outcome.error(), "differ");
}

#[wasm_bindgen_test]
fn wasm_assert_equal_objects_compare_by_reference() {
    let shared: JsValue = js_sys::Object::new().into();

    let outcome = wasm::assert_equal(
        vec![shared.clone()].into_boxed_slice(),
        vec![shared].into_boxed_slice(),
        "differ".to_string(),
    );
    assert_eq!(outcome.kind(), "Succeeded");

    let outcome = wasm::assert_equal(
        vec![JsValue::from(js_sys::Object::new())].into_boxed_slice(),
        vec![JsValue::from(js_sys::Object::new())].into_boxed_slice(),
        "differ".to_string(),
    );
    assert_eq!(outcome.kind(), "Failed");
}

#[wasm_bindgen_test]
fn wasm_smoke_and_version() {
    assert_eq!(wasm::test(), "a");
    assert_eq!(wasm::version(), env!("CARGO_PKG_VERSION"));
}
