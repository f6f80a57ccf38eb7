//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual,
        expected,
        "Expected status {}, got {}: {}",
        expected,
        actual,
        response.text()
    );
}

/// Asserts that the response is an error with the given status and message.
pub fn assert_error(response: &TestResponse, status: u16, msg: &str) {
    assert_status(response, status);
    let body: Value = response.json();
    assert_eq!(body, serde_json::json!({ "msg": msg }));
}

/// Asserts that every adjacent pair of `values` respects the direction.
pub fn assert_ordered<T: PartialOrd + std::fmt::Debug>(values: &[T], descending: bool) {
    for pair in values.windows(2) {
        if descending {
            assert!(pair[0] >= pair[1], "{:?} < {:?}", pair[0], pair[1]);
        } else {
            assert!(pair[0] <= pair[1], "{:?} > {:?}", pair[0], pair[1]);
        }
    }
}

/// Collects a string field from every object in a JSON array.
pub fn string_field(items: &Value, field: &str) -> Vec<String> {
    items
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|item| item[field].as_str().expect("Expected a string").to_string())
        .collect()
}

/// Collects an integer field from every object in a JSON array.
pub fn int_field(items: &Value, field: &str) -> Vec<i64> {
    items
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|item| item[field].as_i64().expect("Expected an integer"))
        .collect()
}
