// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input payload values.
//!
//! Shelly devices publish their input state as a bare string (`"0"`, `"1"`),
//! but event relays that re-encode MQTT messages as JSON may hand the value
//! over as a number. [`Payload`] keeps both shapes and gives them a single,
//! total set of parsing rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::types::PowerState;

/// A payload value as received from the input device.
///
/// Equality is structural: the text `"1"` and the number `1` are different
/// payloads, so a device switching encodings is seen as a transition.
///
/// # Examples
///
/// ```
/// use shelly_bridge::types::{InputLevel, Payload};
///
/// assert_eq!(Payload::from("0").level(), Ok(InputLevel::Low));
/// assert_eq!(Payload::from(1).level(), Ok(InputLevel::High));
/// assert!(Payload::from("pressed").level().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// A JSON number.
    Number(serde_json::Number),
    /// A text payload, the usual MQTT shape.
    Text(String),
}

impl Payload {
    /// Interprets the payload as an integer input level.
    ///
    /// Text is trimmed and must be an optionally signed run of ASCII digits;
    /// the digit run may be arbitrarily long. Floating point numbers are
    /// truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotAnInteger`] for any other text.
    pub fn level(&self) -> Result<InputLevel, ValueError> {
        match self {
            Self::Number(n) => Ok(number_level(n)),
            Self::Text(s) => text_level(s).ok_or_else(|| ValueError::NotAnInteger(s.clone())),
        }
    }
}

fn number_level(n: &serde_json::Number) -> InputLevel {
    let zero = if let Some(i) = n.as_i64() {
        i == 0
    } else if let Some(u) = n.as_u64() {
        u == 0
    } else {
        n.as_f64().is_none_or(|f| f.abs() < 1.0)
    };
    InputLevel::from_zero(zero)
}

fn text_level(s: &str) -> Option<InputLevel> {
    let s = s.trim();
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(InputLevel::from_zero(digits.bytes().all(|b| b == b'0')))
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// The integer reading of a payload, reduced to what the direct policy needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputLevel {
    /// The input reads zero.
    Low,
    /// The input reads any non-zero integer.
    High,
}

impl InputLevel {
    const fn from_zero(zero: bool) -> Self {
        if zero { Self::Low } else { Self::High }
    }
}

impl From<InputLevel> for PowerState {
    fn from(level: InputLevel) -> Self {
        match level {
            InputLevel::Low => Self::Off,
            InputLevel::High => Self::On,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_zero_is_low() {
        for text in ["0", "00", "-0", "+0", " 0\n"] {
            assert_eq!(Payload::from(text).level(), Ok(InputLevel::Low), "{text:?}");
        }
    }

    #[test]
    fn text_non_zero_is_high() {
        for text in ["1", "2", "-1", "+7", "010"] {
            assert_eq!(
                Payload::from(text).level(),
                Ok(InputLevel::High),
                "{text:?}"
            );
        }
    }

    #[test]
    fn long_digit_runs_do_not_overflow() {
        let payload = Payload::from("123456789012345678901234567890");
        assert_eq!(payload.level(), Ok(InputLevel::High));
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        for text in ["", " ", "on", "1.0", "0x1", "-", "1 2"] {
            assert_eq!(
                Payload::from(text).level(),
                Err(ValueError::NotAnInteger(text.to_string())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn numbers_compare_to_zero() {
        assert_eq!(Payload::from(0).level(), Ok(InputLevel::Low));
        assert_eq!(Payload::from(-3).level(), Ok(InputLevel::High));
        let big: Payload = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(big.level(), Ok(InputLevel::High));
    }

    #[test]
    fn floats_truncate_toward_zero() {
        let half: Payload = serde_json::from_str("0.5").unwrap();
        assert_eq!(half.level(), Ok(InputLevel::Low));
        let one_and_half: Payload = serde_json::from_str("-1.5").unwrap();
        assert_eq!(one_and_half.level(), Ok(InputLevel::High));
    }

    #[test]
    fn deserialize_untagged() {
        let text: Payload = serde_json::from_str(r#""1""#).unwrap();
        assert_eq!(text, Payload::from("1"));
        let number: Payload = serde_json::from_str("1").unwrap();
        assert_eq!(number, Payload::from(1));
    }

    #[test]
    fn text_and_number_are_distinct() {
        assert_ne!(Payload::from("1"), Payload::from(1));
    }

    #[test]
    fn level_to_power_state() {
        assert_eq!(PowerState::from(InputLevel::Low), PowerState::Off);
        assert_eq!(PowerState::from(InputLevel::High), PowerState::On);
    }

    #[test]
    fn display_matches_wire_value() {
        assert_eq!(Payload::from("1").to_string(), "1");
        assert_eq!(Payload::from(42).to_string(), "42");
    }
}
