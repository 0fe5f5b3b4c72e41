//! # Promptline Core
//!
//! Validate-and-retry console prompts for interactive CLI applications.
//!
//! Each prompt prints a question, reads one line, checks it and asks again
//! until the answer is valid. The caller gets back a single typed value.
//!
//! ## Features
//! - Numbered menu selection with an optional `0) Quit` entry
//! - Booleans spelled by any two caller-chosen words, ignoring case
//! - Range-checked numbers of every primitive width (`i8` to `f64`)
//! - Free text, with or without empty answers
//! - Single characters inside a code point range
//! - Injected [`utils::Console`] so prompts can be scripted in tests
//! - Optional attempt limit and acknowledgements via [`utils::TerminalConfig`]
//!
//! ## Example
//! ```rust,no_run
//! use promptline_core::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! loop {
//!     match terminal.select_from_menu(&["Scan", "Report"], true)? {
//!         0 => break,
//!         1 => {
//!             let port = terminal.prompt_number::<u16>("Port (1-65535):", 1, u16::MAX)?;
//!             println!("scanning port {port}");
//!         }
//!         _ => println!("{}", terminal.prompt_text("Report title:", false)?),
//!     }
//! }
//! # Ok::<(), promptline_core::PromptError>(())
//! ```
//!
//! ## Errors
//! Invalid answers never reach the caller. The prompts only fail with a
//! [`PromptError`] when no answer can be obtained at all, for example when
//! standard input is closed.
//!
//! ## Testing prompts
//! ```rust
//! use promptline_core::utils::{ScriptedConsole, Terminal};
//!
//! let mut terminal = Terminal::new(ScriptedConsole::new(["", "x"]));
//! assert_eq!(terminal.prompt_text("Name:", false)?, "x");
//! # Ok::<(), promptline_core::PromptError>(())
//! ```

pub mod error;
pub use error::{PromptError, PromptResult};

pub mod utils;
