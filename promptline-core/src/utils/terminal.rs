//! # Terminal Input Helper
//!
//! [`Terminal`] repeatedly prompts the user until an answer passes a
//! [`Validate`] check, then returns the typed value.
//!
//! Every prompt has the same shape:
//!
//! ```text
//! Prompt ──▶ Read ──▶ Validate ──▶ accepted ──▶ return value
//!   ▲                    │
//!   └── print feedback ◀─┘ rejected (parse / range / empty)
//! ```
//!
//! A rejected answer prints its [`Rejection`] message and asks again. There
//! is no attempt limit unless [`TerminalConfig::max_attempts`] is set. The
//! only ways out without a value are fatal [`PromptError`]s, such as the input
//! stream closing.
//!
//! ## Example
//! ```rust,no_run
//! use promptline_core::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let threads = terminal.prompt_i32("Enter worker threads (1-16):", 1, 16)?;
//! let verbose = terminal.prompt_bool("Verbose output? (yes/no)", "yes", "no")?;
//! println!("{threads} threads, verbose: {verbose}");
//! # Ok::<(), promptline_core::PromptError>(())
//! ```

use std::io;
use std::num::NonZeroU32;

use tracing::{debug, trace, warn};

use crate::error::{PromptError, PromptResult};
use crate::utils::console::{Console, StdConsole};
use crate::utils::sanitize::{
    BoolTokens, Bounded, CharRange, MenuChoice, Number, Rejection, TextRule, Validate,
};

const MENU_HEADER: &str =
    "Please select the following by inputting the number associated with the option:";
const MENU_QUESTION: &str = "Enter your option number:";
const QUIT_LABEL: &str = "Quit";

/// Behaviour knobs for a [`Terminal`].
///
/// The default asks forever and prints nothing after an accepted answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerminalConfig {
    /// Give up with [`PromptError::AttemptsExhausted`] after this many
    /// rejected answers. `None` retries without limit.
    pub max_attempts: Option<NonZeroU32>,

    /// Print a short acknowledgement after an accepted range-checked answer.
    pub confirm_accepted: bool,
}

impl TerminalConfig {
    pub fn bounded(max_attempts: NonZeroU32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            ..Self::default()
        }
    }

    pub fn with_confirmations(mut self) -> Self {
        self.confirm_accepted = true;
        self
    }
}

/// Prompts over a [`Console`] until a valid answer is given.
///
/// A terminal keeps no state between prompts other than its console and
/// configuration; each call starts from a fresh attempt count.
#[derive(Debug)]
pub struct Terminal<C = StdConsole> {
    console: C,
    config: TerminalConfig,
}

impl Terminal<StdConsole> {
    /// A terminal over the process standard input and output.
    pub fn stdio() -> Self {
        Self::new(StdConsole)
    }
}

/// Generates a range-checked prompt method for one primitive width.
macro_rules! bounded_prompt {
    ($($(#[$doc:meta])* $name:ident => $t:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&mut self, prompt: &str, min: $t, max: $t) -> PromptResult<$t> {
                self.prompt_number(prompt, min, max)
            }
        )*
    };
}

impl<C: Console> Terminal<C> {
    pub fn new(console: C) -> Self {
        Self::with_config(console, TerminalConfig::default())
    }

    pub fn with_config(console: C, config: TerminalConfig) -> Self {
        Self { console, config }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs a single Prompt → Read → Validate step.
    ///
    /// The outer `Result` carries fatal errors; the inner one is the verdict
    /// on this answer. Nothing is printed for a rejected answer here.
    pub fn attempt<V: Validate>(
        &mut self,
        prompt: &str,
        validator: &V,
    ) -> PromptResult<Result<V::Output, Rejection>> {
        self.console.write_line(prompt)?;

        let line = loop {
            match self.console.read_line() {
                Ok(Some(line)) => break line,
                Ok(None) => {
                    warn!("input closed while waiting for an answer");
                    return Err(PromptError::EndOfInput);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                // The offending line has been consumed, so the next read moves on.
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Ok(Err(Rejection::NotText));
                }
                Err(e) => return Err(e.into()),
            }
        };

        Ok(validator.validate(&line))
    }

    /// Asks `prompt` until `validator` accepts an answer.
    pub fn ask<V: Validate>(&mut self, prompt: &str, validator: &V) -> PromptResult<V::Output> {
        let mut attempts: u32 = 0;

        loop {
            attempts = attempts.saturating_add(1);

            match self.attempt(prompt, validator)? {
                Ok(value) => {
                    trace!(attempts, "answer accepted");
                    if self.config.confirm_accepted {
                        if let Some(message) = validator.accepted_message() {
                            self.console.write_line(message)?;
                        }
                    }
                    return Ok(value);
                }
                Err(rejection) => {
                    debug!(attempt = attempts, kind = ?rejection.kind(), "answer rejected");
                    self.console.write_line(&rejection.to_string())?;

                    if let Some(limit) = self.config.max_attempts {
                        if attempts >= limit.get() {
                            warn!(attempts, "giving up after too many invalid answers");
                            return Err(PromptError::AttemptsExhausted(limit));
                        }
                    }
                }
            }
        }
    }

    /// Shows `options` as a numbered list and returns the chosen number.
    ///
    /// Options are numbered from 1. With `include_quit`, a `0) Quit` entry is
    /// appended and `0` is a valid answer. A menu with no options and no quit
    /// entry fails with [`PromptError::EmptyMenu`] before reading anything.
    pub fn select_from_menu<S: AsRef<str>>(
        &mut self,
        options: &[S],
        include_quit: bool,
    ) -> PromptResult<usize> {
        let choice = MenuChoice::new(options.len(), include_quit);
        if !choice.is_satisfiable() {
            return Err(PromptError::EmptyMenu);
        }

        self.console.write_line(MENU_HEADER)?;
        self.ask(&render_menu(options, include_quit), &choice)
    }

    /// Returns `true` for `true_token` and `false` for `false_token`,
    /// ignoring letter case. Anything else is asked again.
    pub fn prompt_bool(
        &mut self,
        prompt: &str,
        true_token: &str,
        false_token: &str,
    ) -> PromptResult<bool> {
        self.ask(prompt, &BoolTokens::new(true_token, false_token))
    }

    /// Reads a number of any primitive width inside `[min, max]`.
    pub fn prompt_number<T: Number>(&mut self, prompt: &str, min: T, max: T) -> PromptResult<T> {
        self.ask(prompt, &Bounded::new(min, max))
    }

    bounded_prompt! {
        /// Reads a byte-sized integer inside `[min, max]`.
        prompt_i8 => i8;
        /// Reads a short integer inside `[min, max]`.
        prompt_i16 => i16;
        /// Reads a 32-bit integer inside `[min, max]`.
        prompt_i32 => i32;
        /// Reads a long integer inside `[min, max]`.
        prompt_i64 => i64;
        /// Reads a single-precision float inside `[min, max]`.
        prompt_f32 => f32;
        /// Reads a double-precision float inside `[min, max]`.
        prompt_f64 => f64;
    }

    /// Reads a line verbatim. With `allow_empty` unset, an empty line is
    /// refused; whitespace-only lines are always accepted.
    pub fn prompt_text(&mut self, prompt: &str, allow_empty: bool) -> PromptResult<String> {
        self.ask(prompt, &TextRule { allow_empty })
    }

    /// Reads exactly one character inside `[min, max]`.
    pub fn prompt_char(&mut self, prompt: &str, min: char, max: char) -> PromptResult<char> {
        self.ask(prompt, &CharRange::new(min, max))
    }
}

fn render_menu<S: AsRef<str>>(options: &[S], include_quit: bool) -> String {
    let mut lines: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(index, option)| format!("{}) {}", index + 1, option.as_ref()))
        .collect();

    if include_quit {
        lines.push(format!("0) {QUIT_LABEL}"));
    }
    lines.push(String::new());
    lines.push(MENU_QUESTION.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::console::{BufferedConsole, ScriptedConsole};
    use std::collections::VecDeque;
    use std::io::Cursor;

    /// Replays scripted read results, errors included.
    struct FlakyConsole {
        reads: VecDeque<io::Result<Option<String>>>,
        written: Vec<String>,
    }

    impl FlakyConsole {
        fn new(reads: Vec<io::Result<Option<String>>>) -> Self {
            Self {
                reads: reads.into(),
                written: Vec::new(),
            }
        }
    }

    impl Console for FlakyConsole {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            self.reads.pop_front().unwrap_or(Ok(None))
        }

        fn write_line(&mut self, line: &str) -> io::Result<()> {
            self.written.push(line.to_string());
            Ok(())
        }
    }

    fn scripted(answers: &[&str]) -> Terminal<ScriptedConsole> {
        Terminal::new(ScriptedConsole::new(answers.iter().copied()))
    }

    #[test]
    fn test_render_menu() {
        assert_eq!(
            render_menu(&["Start", "Stop"], true),
            "1) Start\n2) Stop\n0) Quit\n\nEnter your option number:"
        );
        assert_eq!(
            render_menu(&["Only"], false),
            "1) Only\n\nEnter your option number:"
        );
    }

    #[test]
    fn test_menu_retries_until_valid() {
        let mut terminal = scripted(&["abc", "7", "2"]);
        let choice = terminal.select_from_menu(&["Start", "Stop"], false).unwrap();
        assert_eq!(choice, 2);

        let transcript = terminal.console().transcript();
        assert_eq!(transcript[0], MENU_HEADER);
        assert_eq!(transcript[2], "The value is not an option number, try again!");
        assert_eq!(transcript[4], "That option does not exist, try again!");
        assert_eq!(transcript.len(), 6);
    }

    #[test]
    fn test_menu_quit() {
        let mut terminal = scripted(&["0"]);
        assert_eq!(terminal.select_from_menu(&["Start"], true).unwrap(), 0);

        let mut terminal = scripted(&["0", "1"]);
        assert_eq!(terminal.select_from_menu(&["Start"], false).unwrap(), 1);
    }

    #[test]
    fn test_empty_menu_is_rejected_up_front() {
        let mut terminal = scripted(&["1"]);
        let options: [&str; 0] = [];
        let res = terminal.select_from_menu(&options, false);
        assert!(matches!(res, Err(PromptError::EmptyMenu)));
        assert_eq!(terminal.console().remaining(), 1);
        assert!(terminal.console().transcript().is_empty());

        let mut terminal = scripted(&["0"]);
        assert_eq!(terminal.select_from_menu(&options, true).unwrap(), 0);
    }

    #[test]
    fn test_prompt_bool() {
        let mut terminal = scripted(&["", "maybe", "OUI"]);
        assert!(terminal.prompt_bool("Continue?", "oui", "non").unwrap());
        assert_eq!(terminal.console().transcript().len(), 5);

        let mut terminal = scripted(&["nO"]);
        assert!(!terminal.prompt_bool("Continue?", "yes", "no").unwrap());
    }

    #[test]
    fn test_numeric_prompts() {
        let mut terminal = scripted(&["300", "-129", "-128"]);
        assert_eq!(terminal.prompt_i8("byte", -128, 127).unwrap(), -128);

        let mut terminal = scripted(&["40000", "1000"]);
        assert_eq!(terminal.prompt_i16("short", 0, 1000).unwrap(), 1000);

        let mut terminal = scripted(&["11", "10"]);
        assert_eq!(terminal.prompt_i32("int", 1, 10).unwrap(), 10);

        let mut terminal = scripted(&["9223372036854775807"]);
        assert_eq!(terminal.prompt_i64("long", 0, i64::MAX).unwrap(), i64::MAX);

        let mut terminal = scripted(&["2.5", "0.25"]);
        assert_eq!(terminal.prompt_f32("float", 0.0, 1.0).unwrap(), 0.25);

        let mut terminal = scripted(&["NaN", "x", "-0.5"]);
        assert_eq!(terminal.prompt_f64("double", -1.0, 1.0).unwrap(), -0.5);

        let mut terminal = scripted(&["5"]);
        assert_eq!(terminal.prompt_number::<u64>("u64", 5, 5).unwrap(), 5);
    }

    #[test]
    fn test_numeric_feedback_is_distinct() {
        let mut terminal = scripted(&["abc", "99", "3"]);
        terminal.prompt_i32("Pick", 1, 5).unwrap();

        let transcript = terminal.console().transcript();
        assert_eq!(
            transcript,
            [
                "Pick",
                "The value is not a i32, try again!",
                "Pick",
                "The value is not between 1 and 5, try again!",
                "Pick",
            ]
        );
    }

    #[test]
    fn test_prompt_text() {
        let mut terminal = scripted(&["", "x"]);
        assert_eq!(terminal.prompt_text("Name:", false).unwrap(), "x");
        assert_eq!(
            terminal.console().transcript()[1],
            "The value can't be empty, enter at least one character!"
        );

        let mut terminal = scripted(&[""]);
        assert_eq!(terminal.prompt_text("Name:", true).unwrap(), "");
    }

    #[test]
    fn test_prompt_char() {
        let mut terminal = scripted(&["ab", "c"]);
        assert_eq!(terminal.prompt_char("Letter:", 'a', 'z').unwrap(), 'c');

        let mut terminal = scripted(&["A", "m"]);
        assert_eq!(terminal.prompt_char("Letter:", 'a', 'z').unwrap(), 'm');
    }

    #[test]
    fn test_end_of_input_is_fatal() {
        let mut terminal = scripted(&["nope"]);
        let res = terminal.prompt_i32("Pick", 1, 5);
        assert!(matches!(res, Err(PromptError::EndOfInput)));
    }

    #[test]
    fn test_bounded_attempts() {
        let config = TerminalConfig::bounded(NonZeroU32::new(2).unwrap());
        let console = ScriptedConsole::new(["a", "b", "3"]);
        let mut terminal = Terminal::with_config(console, config);

        let res = terminal.prompt_i32("Pick", 1, 5);
        assert!(matches!(res, Err(PromptError::AttemptsExhausted(n)) if n.get() == 2));
        assert_eq!(terminal.console().remaining(), 1);

        // The next prompt starts counting afresh.
        assert_eq!(terminal.prompt_i32("Pick", 1, 5).unwrap(), 3);
    }

    #[test]
    fn test_confirmations() {
        let config = TerminalConfig::default().with_confirmations();
        let console = ScriptedConsole::new(["4", "q", "yes"]);
        let mut terminal = Terminal::with_config(console, config);

        terminal.prompt_i64("Pick", 1, 5).unwrap();
        terminal.prompt_char("Letter", 'a', 'z').unwrap();
        terminal.prompt_bool("Sure?", "yes", "no").unwrap();

        assert_eq!(
            terminal.console().transcript(),
            [
                "Pick",
                "The value is within range.",
                "Letter",
                "The character is within range.",
                "Sure?",
            ]
        );
    }

    #[test]
    fn test_interrupted_read_is_retried_silently() {
        let console = FlakyConsole::new(vec![
            Err(io::Error::from(io::ErrorKind::Interrupted)),
            Ok(Some("3".to_string())),
        ]);
        let mut terminal = Terminal::new(console);

        assert_eq!(terminal.prompt_i32("p", 1, 5).unwrap(), 3);
        assert_eq!(terminal.console().written, ["p"]);
    }

    #[test]
    fn test_read_failure_surfaces_as_io_error() {
        let console = FlakyConsole::new(vec![
            Err(io::Error::from(io::ErrorKind::BrokenPipe)),
            Ok(Some("3".to_string())),
        ]);
        let mut terminal = Terminal::new(console);

        let res = terminal.prompt_i32("p", 1, 5);
        assert!(matches!(res, Err(PromptError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(terminal.console().reads.len(), 1);
    }

    #[test]
    fn test_float_prompts_are_not_confirmed() {
        let config = TerminalConfig::default().with_confirmations();
        let console = ScriptedConsole::new(["0.5", "2"]);
        let mut terminal = Terminal::with_config(console, config);

        terminal.prompt_f64("Ratio", 0.0, 1.0).unwrap();
        terminal.prompt_i8("Count", 1, 3).unwrap();

        assert_eq!(
            terminal.console().transcript(),
            ["Ratio", "Count", "The value is within range."]
        );
    }

    #[test]
    fn test_attempt_reports_verdict_without_feedback() {
        let mut terminal = scripted(&["x"]);
        let verdict = terminal.attempt("Pick", &Bounded::new(1u8, 3)).unwrap();
        assert_eq!(verdict, Err(Rejection::NotNumber("u8")));
        assert_eq!(terminal.console().transcript(), ["Pick"]);
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_and_skipped() {
        let input = Cursor::new(&b"\xc3\x28\n42\n"[..]);
        let mut terminal = Terminal::new(BufferedConsole::new(input, Vec::new()));
        assert_eq!(terminal.prompt_i32("Pick", 0, 100).unwrap(), 42);

        let (_, written) = terminal.into_console().into_parts();
        assert_eq!(
            String::from_utf8(written).unwrap(),
            "Pick\nThe value is not readable text, try again!\nPick\n"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: TerminalConfig = serde_json::from_str(r#"{"max_attempts": 3}"#).unwrap();
        assert_eq!(config.max_attempts, NonZeroU32::new(3));
        assert!(!config.confirm_accepted);

        let rejected = serde_json::from_str::<TerminalConfig>(r#"{"max_attempts": 0}"#);
        assert!(rejected.is_err());
    }

    #[test]
    fn test_consecutive_prompts_share_nothing() {
        let mut terminal = scripted(&["bad", "3", "4"]);
        assert_eq!(terminal.prompt_i32("first", 1, 5).unwrap(), 3);
        assert_eq!(terminal.prompt_i32("second", 1, 5).unwrap(), 4);
    }
}
