pub mod console;
pub use console::{BufferedConsole, Console, ScriptedConsole, StdConsole};

pub mod sanitize;
pub use sanitize::{
    BoolTokens, Bounded, CharRange, MenuChoice, Number, Rejection, RejectionKind, TextRule,
    Validate,
};

pub mod stdio;

pub mod terminal;
pub use terminal::{Terminal, TerminalConfig};
