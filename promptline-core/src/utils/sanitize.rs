//! # Input Sanitization & Validation
//!
//! Pure, per-attempt validation of one line of user input. Nothing here reads
//! or writes the console: a validator receives the raw line and either
//! produces the typed value or a [`Rejection`] describing what went wrong.
//! The retry loop in [`crate::utils::Terminal`] decides what to do with it.
//!
//! ## Validators
//! - [`Bounded`]: a number of any primitive width inside an inclusive range
//! - [`MenuChoice`]: an option number of a numbered menu
//! - [`BoolTokens`]: one of two caller-chosen words, ignoring letter case
//! - [`TextRule`]: free text, optionally refusing the empty line
//! - [`CharRange`]: exactly one character inside an inclusive range
//!
//! ## Whitespace
//! Numeric and menu answers ignore surrounding whitespace. Text, boolean and
//! character answers are compared exactly as typed.
//!
//! ## Example
//! ```rust
//! use promptline_core::utils::{Bounded, Rejection, Validate};
//!
//! let percent = Bounded::new(0u8, 100);
//! assert_eq!(percent.validate(" 42 "), Ok(42));
//! assert_eq!(
//!     percent.validate("101"),
//!     Err(Rejection::Between { min: "0".into(), max: "100".into() })
//! );
//! ```
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Validation of a single raw answer.
///
/// Implementors turn the line the user typed into [`Validate::Output`] or
/// explain why it was refused.
pub trait Validate {
    type Output;

    fn validate(&self, input: &str) -> Result<Self::Output, Rejection>;

    /// Acknowledgement printed after an accepted answer when the terminal is
    /// configured with `confirm_accepted`.
    fn accepted_message(&self) -> Option<&'static str> {
        None
    }
}

/// Why an answer was refused.
///
/// The `Display` text is the feedback shown to the user before the prompt
/// repeats. Every variant belongs to one [`RejectionKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("The value is not a {0}, try again!")]
    NotNumber(&'static str),
    #[error("The value is not readable text, try again!")]
    NotText,
    #[error("The value is not an option number, try again!")]
    NotOption,
    #[error("That option does not exist, try again!")]
    NoSuchOption,
    #[error("The value doesn't match with {truthy} or {falsy}, try again!")]
    NotToken { truthy: String, falsy: String },
    #[error("The value must be exactly one character, try again!")]
    NotSingleChar,
    #[error("The value is not between {min} and {max}, try again!")]
    Between { min: String, max: String },
    #[error("The value can't be empty, enter at least one character!")]
    Empty,
}

/// Failure classes of a rejected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// The line could not be converted to the target type.
    Parse,
    /// The converted value lies outside the accepted set.
    Range,
    /// An empty line where text was required.
    Empty,
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::NotNumber(_)
            | Self::NotText
            | Self::NotOption
            | Self::NotToken { .. }
            | Self::NotSingleChar => RejectionKind::Parse,
            Self::NoSuchOption | Self::Between { .. } => RejectionKind::Range,
            Self::Empty => RejectionKind::Empty,
        }
    }
}

/// A primitive numeric type that can be read from a prompt.
///
/// `NAME` is the type name used in parse feedback, e.g.
/// "The value is not a i16, try again!".
pub trait Number: FromStr + PartialOrd + Copy + Display {
    const NAME: &'static str;

    /// Whether an accepted value of this type is acknowledged when
    /// confirmations are on. Floats are accepted silently.
    const ACKNOWLEDGED: bool;
}

/// Implements [`Number`] for each listed primitive, naming it after the type.
///
/// # Example
/// ```rust,ignore
/// number!(acknowledged: u8, i32);
/// number!(silent: f64);
/// ```
macro_rules! number {
    (@impl $ack:literal, $($t:ty),*) => {
        $(
            impl Number for $t {
                const NAME: &'static str = stringify!($t);
                const ACKNOWLEDGED: bool = $ack;
            }
        )*
    };
    (acknowledged: $($t:ty),* $(,)?) => {
        number!(@impl true, $($t),*);
    };
    (silent: $($t:ty),* $(,)?) => {
        number!(@impl false, $($t),*);
    };
}

number!(acknowledged: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
number!(silent: f32, f64);

/// An inclusive `[min, max]` range for a [`Number`].
///
/// `min <= max` is expected; with `min > max` no answer is ever accepted.
/// Floating-point bounds are compared with `>=` / `<=`, so a `NaN` answer is
/// always out of range and infinite bounds admit infinite answers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded<T> {
    pub min: T,
    pub max: T,
}

impl<T: Number> Bounded<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

impl<T: Number> Validate for Bounded<T> {
    type Output = T;

    fn validate(&self, input: &str) -> Result<T, Rejection> {
        let value = input
            .trim()
            .parse::<T>()
            .map_err(|_| Rejection::NotNumber(T::NAME))?;

        if self.contains(&value) {
            Ok(value)
        } else {
            Err(Rejection::Between {
                min: self.min.to_string(),
                max: self.max.to_string(),
            })
        }
    }

    fn accepted_message(&self) -> Option<&'static str> {
        T::ACKNOWLEDGED.then_some("The value is within range.")
    }
}

/// Selection among `options` numbered menu entries, with `0` reserved for
/// quitting when `include_quit` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChoice {
    pub options: usize,
    pub include_quit: bool,
}

impl MenuChoice {
    pub fn new(options: usize, include_quit: bool) -> Self {
        Self {
            options,
            include_quit,
        }
    }

    /// Whether at least one answer can be accepted.
    pub fn is_satisfiable(&self) -> bool {
        self.options > 0 || self.include_quit
    }

    fn lowest(&self) -> usize {
        if self.include_quit { 0 } else { 1 }
    }
}

impl Validate for MenuChoice {
    type Output = usize;

    fn validate(&self, input: &str) -> Result<usize, Rejection> {
        let entered: i64 = input.trim().parse().map_err(|_| Rejection::NotOption)?;

        match usize::try_from(entered) {
            Ok(choice) if choice >= self.lowest() && choice <= self.options => Ok(choice),
            _ => Err(Rejection::NoSuchOption),
        }
    }
}

/// Two words that spell `true` and `false`, matched without regard to case.
///
/// If both words are equal ignoring case, `truthy` wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolTokens {
    pub truthy: String,
    pub falsy: String,
}

impl BoolTokens {
    pub fn new(truthy: impl Into<String>, falsy: impl Into<String>) -> Self {
        Self {
            truthy: truthy.into(),
            falsy: falsy.into(),
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl Validate for BoolTokens {
    type Output = bool;

    fn validate(&self, input: &str) -> Result<bool, Rejection> {
        if eq_ignore_case(input, &self.truthy) {
            Ok(true)
        } else if eq_ignore_case(input, &self.falsy) {
            Ok(false)
        } else {
            Err(Rejection::NotToken {
                truthy: self.truthy.clone(),
                falsy: self.falsy.clone(),
            })
        }
    }
}

/// Free text, returned verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
    pub allow_empty: bool,
}

impl Validate for TextRule {
    type Output = String;

    fn validate(&self, input: &str) -> Result<String, Rejection> {
        if input.is_empty() && !self.allow_empty {
            return Err(Rejection::Empty);
        }
        Ok(input.to_string())
    }
}

/// Exactly one character whose code point lies in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    pub min: char,
    pub max: char,
}

impl CharRange {
    pub fn new(min: char, max: char) -> Self {
        Self { min, max }
    }
}

impl Validate for CharRange {
    type Output = char;

    fn validate(&self, input: &str) -> Result<char, Rejection> {
        let mut chars = input.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) if (self.min..=self.max).contains(&c) => Ok(c),
            (Some(_), None) => Err(Rejection::Between {
                min: self.min.to_string(),
                max: self.max.to_string(),
            }),
            _ => Err(Rejection::NotSingleChar),
        }
    }

    fn accepted_message(&self) -> Option<&'static str> {
        Some("The character is within range.")
    }
}
