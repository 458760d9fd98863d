// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Test utility functions for use with the phone input engine
pub use ::serde_json;
pub use pretty_assertions::assert_eq;

#[cfg(feature = "engine")]
pub mod common;

/// Helper macro to compare a `[Serialize]` implementor with a JSON literal
///
/// Asserts that the left expression equals the right JSON literal when serialized.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Debug, Serialize)]
/// struct Draft {
///     international: String,
///     valid: bool,
/// }
///
/// #[test]
/// fn test_draft() {
///     let draft = Draft {
///         international: "+44 7911 123456".into(),
///         valid: true,
///     };
///
///     assert_eq_json!(
///         draft,
///         {
///             "international": "+44 7911 123456",
///             "valid": true,
///         }
///     );
/// }
/// ```
#[macro_export]
macro_rules! assert_eq_json {
    ($val:expr,$($json:tt)+) => {
        let val: $crate::serde_json::Value = $crate::serde_json::to_value(&$val).expect("Expected value to be serializable");

        $crate::assert_eq!(val, $crate::serde_json::json!($($json)+));
    };
}
