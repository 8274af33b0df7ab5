//! Custom assertions for integration tests
//!
//! Helpers for validating CLI output across text, TOON and JSON formats.

use serde_json::Value;

/// Assert that output is valid JSON and return parsed value
pub fn assert_valid_json(output: &str, context: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| {
        panic!(
            "Expected valid JSON ({}): {}\nOutput:\n{}",
            context, e, output
        )
    })
}

/// Assert that output contains valid TOON markers
pub fn assert_valid_toon(output: &str, context: &str) {
    assert!(
        output.contains("_type:"),
        "Expected TOON output to contain '_type:' marker ({})\nOutput:\n{}",
        context,
        output
    );
}

/// Assert that JSON output has expected type
pub fn assert_json_type(json: &Value, expected_type: &str) {
    let actual_type = json["_type"]
        .as_str()
        .unwrap_or_else(|| panic!("JSON missing '_type' field"));
    assert_eq!(
        actual_type, expected_type,
        "Expected JSON type '{}' but got '{}'",
        expected_type, actual_type
    );
}

/// Assert that output contains a specific string (case-insensitive option)
pub fn assert_contains(output: &str, needle: &str, case_sensitive: bool, context: &str) {
    let found = if case_sensitive {
        output.contains(needle)
    } else {
        output.to_lowercase().contains(&needle.to_lowercase())
    };
    assert!(
        found,
        "Expected output to contain '{}' ({})\nOutput:\n{}",
        needle, context, output
    );
}

/// Assert that output does NOT contain a specific string
pub fn assert_not_contains(output: &str, needle: &str, context: &str) {
    assert!(
        !output.contains(needle),
        "Expected output NOT to contain '{}' ({})\nOutput:\n{}",
        needle,
        context,
        output
    );
}

/// Diagnostic codes of every diagnostic in a `check` JSON document
pub fn diagnostic_codes(json: &Value) -> Vec<String> {
    json["files"]
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|file| file["diagnostics"].as_array().into_iter().flatten())
        .filter_map(|d| d["code"].as_str().map(str::to_string))
        .collect()
}
