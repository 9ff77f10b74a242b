//! Validation of textual board input.
//!
//! Two encodings are accepted:
//!
//! - whitespace-separated integers, e.g. `"1 2 4 3 1 1 2 2 1"`;
//! - one contiguous run of decimal digits, one digit per value, e.g.
//!   `"124311221"`. This only works because every supported modulus is at
//!   most 9.
//!
//! Validation either yields exactly the requested number of values, all in
//! range, or rejects the whole input. Nothing is truncated or clamped.

/// Reasons for rejecting a line of board input.
///
/// All variants are recoverable: the caller reports the message and asks
/// again.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum InputError {
    /// The number of values differs from the number of cells.
    #[display("expected exactly {expected} values, but found {found}")]
    WrongCount {
        /// Required number of values.
        expected: usize,
        /// Number of tokens (or characters) actually supplied.
        found: usize,
    },
    /// A whitespace-separated token is not an integer.
    #[display("all values must be integers, but found {token:?}")]
    NonIntegerToken {
        /// The offending token.
        token: String,
    },
    /// A value lies outside the accepted range.
    #[display("values must be in the range {min}–{max}, but found {value}")]
    OutOfRange {
        /// The offending value.
        value: i64,
        /// Smallest accepted value.
        min: u8,
        /// Largest accepted value.
        max: u8,
    },
}

/// Parses exactly `total` integers in `min..=max` from `text`.
///
/// Surrounding whitespace is ignored. If `text` splits into exactly `total`
/// whitespace-separated tokens, each token is parsed as an integer. Otherwise,
/// if `text` is a single run of exactly `total` ASCII digits, each digit is a
/// value.
///
/// # Errors
///
/// - [`InputError::WrongCount`] if neither encoding yields `total` values.
///   The reported count is the number of tokens when more than one token was
///   supplied, and the number of characters otherwise.
/// - [`InputError::NonIntegerToken`] if a token of the separated encoding is
///   not an integer (or does not fit in an `i64`).
/// - [`InputError::OutOfRange`] if any value lies outside `min..=max`.
///
/// # Examples
///
/// ```
/// use arrowpress_core::{InputError, parse_values};
///
/// assert_eq!(parse_values("1 2 3", 3, 1, 4), Ok(vec![1, 2, 3]));
/// assert_eq!(parse_values("123", 3, 1, 4), Ok(vec![1, 2, 3]));
/// assert_eq!(
///     parse_values("1 2", 3, 1, 4),
///     Err(InputError::WrongCount { expected: 3, found: 2 })
/// );
/// ```
pub fn parse_values(text: &str, total: usize, min: u8, max: u8) -> Result<Vec<u8>, InputError> {
    let text = text.trim();
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let values: Vec<i64> = if tokens.len() == total {
        tokens
            .iter()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| InputError::NonIntegerToken {
                        token: (*token).to_owned(),
                    })
            })
            .collect::<Result<_, _>>()?
    } else if text.chars().count() == total && text.chars().all(|ch| ch.is_ascii_digit()) {
        text.bytes().map(|b| i64::from(b - b'0')).collect()
    } else {
        let found = if tokens.len() > 1 {
            tokens.len()
        } else {
            text.chars().count()
        };
        return Err(InputError::WrongCount {
            expected: total,
            found,
        });
    };

    values
        .into_iter()
        .map(|value| {
            u8::try_from(value)
                .ok()
                .filter(|v| (min..=max).contains(v))
                .ok_or(InputError::OutOfRange { value, min, max })
        })
        .collect()
}
