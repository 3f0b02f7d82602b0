// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Testing helper macros.
//!
//! Assertions that print the offending expression and value on failure.

/// Assert that an expression matches a pattern.
///
/// # Example
///
/// ```
/// use letter_macros::assert_matches;
///
/// #[derive(Debug)]
/// enum Token { Number(i32), Word(String) }
///
/// let token = Token::Number(42);
/// assert_matches!(token, Token::Number(n) if n > 0);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match $expr {
            $pat => {}
            ref e => panic!(
                "assertion failed: `{}` does not match pattern `{}`\n  value: {:?}",
                stringify!($expr),
                stringify!($pat),
                e
            ),
        }
    };
    ($expr:expr, $pat:pat if $guard:expr) => {
        match $expr {
            $pat if $guard => {}
            ref e => panic!(
                "assertion failed: `{}` does not match pattern `{} if {}`\n  value: {:?}",
                stringify!($expr),
                stringify!($pat),
                stringify!($guard),
                e
            ),
        }
    };
}

/// Assert that a Result is Ok and extract the value.
///
/// # Example
///
/// ```
/// use letter_macros::assert_ok;
///
/// let value = assert_ok!("42".parse::<i32>());
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!(
                "assertion failed: expected Ok, got Err\n  expression: `{}`\n  error: {:?}",
                stringify!($expr),
                e
            ),
        }
    };
}

/// Assert that a Result is Err and extract the error.
///
/// # Example
///
/// ```
/// use letter_macros::assert_err;
///
/// let err = assert_err!("x".parse::<i32>());
/// assert!(!err.to_string().is_empty());
/// ```
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!(
                "assertion failed: expected Err, got Ok\n  expression: `{}`\n  value: {:?}",
                stringify!($expr),
                v
            ),
            Err(e) => e,
        }
    };
}

/// Assert that parsing a source string fails.
///
/// With a second argument the error must also match the pattern.
///
/// # Example
///
/// ```ignore
/// use letter_macros::assert_parse_error;
/// use letter_syntax::{Error, SyntaxError};
///
/// assert_parse_error!("1 = 2;");
/// assert_parse_error!("1 = 2;", Error::Syntax(SyntaxError::InvalidAssignmentTarget));
/// ```
#[macro_export]
macro_rules! assert_parse_error {
    ($source:expr) => {
        $crate::assert_err!(::letter_syntax::parse($source))
    };
    ($source:expr, $pat:pat) => {
        $crate::assert_matches!($crate::assert_err!(::letter_syntax::parse($source)), $pat)
    };
}

/// Create a test that runs its body once per parameter tuple.
///
/// # Example
///
/// ```
/// use letter_macros::parameterized_test;
///
/// parameterized_test!(
///     test_double,
///     (input, expected),
///     [
///         (1, 2),
///         (2, 4),
///         (5, 10),
///     ],
///     {
///         assert_eq!(input * 2, expected);
///     }
/// );
/// ```
#[macro_export]
macro_rules! parameterized_test {
    (
        $name:ident,
        ($($param:ident),+),
        [$(($($value:expr),+)),+ $(,)?],
        $body:block
    ) => {
        #[test]
        fn $name() {
            let test_cases = vec![
                $(($($value),+)),+
            ];

            for (i, ($($param),+)) in test_cases.into_iter().enumerate() {
                let result = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body));
                if result.is_err() {
                    panic!("Test case {} failed with params: {:?}", i, ($(stringify!($param)),+));
                }
            }
        }
    };
}
