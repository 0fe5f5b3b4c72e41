//! Free functions over the process standard streams.
//!
//! Each call builds its own [`Terminal::stdio`] with the default
//! configuration, so nothing carries over from one call to the next.

use crate::error::PromptResult;
use crate::utils::terminal::Terminal;

/// See [`Terminal::select_from_menu`].
pub fn select_from_menu<S: AsRef<str>>(options: &[S], include_quit: bool) -> PromptResult<usize> {
    Terminal::stdio().select_from_menu(options, include_quit)
}

/// See [`Terminal::prompt_bool`].
pub fn prompt_bool(prompt: &str, true_token: &str, false_token: &str) -> PromptResult<bool> {
    Terminal::stdio().prompt_bool(prompt, true_token, false_token)
}

/// See [`Terminal::prompt_i8`].
pub fn prompt_byte(prompt: &str, min: i8, max: i8) -> PromptResult<i8> {
    Terminal::stdio().prompt_i8(prompt, min, max)
}

/// See [`Terminal::prompt_i16`].
pub fn prompt_short(prompt: &str, min: i16, max: i16) -> PromptResult<i16> {
    Terminal::stdio().prompt_i16(prompt, min, max)
}

/// See [`Terminal::prompt_i32`].
pub fn prompt_int(prompt: &str, min: i32, max: i32) -> PromptResult<i32> {
    Terminal::stdio().prompt_i32(prompt, min, max)
}

/// See [`Terminal::prompt_i64`].
pub fn prompt_long(prompt: &str, min: i64, max: i64) -> PromptResult<i64> {
    Terminal::stdio().prompt_i64(prompt, min, max)
}

/// See [`Terminal::prompt_f32`].
pub fn prompt_float(prompt: &str, min: f32, max: f32) -> PromptResult<f32> {
    Terminal::stdio().prompt_f32(prompt, min, max)
}

/// See [`Terminal::prompt_f64`].
pub fn prompt_double(prompt: &str, min: f64, max: f64) -> PromptResult<f64> {
    Terminal::stdio().prompt_f64(prompt, min, max)
}

/// See [`Terminal::prompt_text`].
pub fn prompt_text(prompt: &str, allow_empty: bool) -> PromptResult<String> {
    Terminal::stdio().prompt_text(prompt, allow_empty)
}

/// See [`Terminal::prompt_char`].
pub fn prompt_char(prompt: &str, min: char, max: char) -> PromptResult<char> {
    Terminal::stdio().prompt_char(prompt, min, max)
}
