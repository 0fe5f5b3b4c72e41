use std::num::NonZeroU32;

use anyhow::Context;
use clap::Parser;
use promptline_core::utils::{StdConsole, Terminal, TerminalConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive tour of every promptline prompt.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Give up on a prompt after this many invalid answers.
    #[arg(long)]
    max_attempts: Option<NonZeroU32>,

    /// Acknowledge accepted range-checked answers.
    #[arg(long)]
    confirm: bool,
}

impl Args {
    fn config(&self) -> TerminalConfig {
        TerminalConfig {
            max_attempts: self.max_attempts,
            confirm_accepted: self.confirm,
        }
    }
}

const DEMOS: [&str; 8] = [
    "Yes / no question",
    "Byte (i8)",
    "Short (i16)",
    "Integer (i32)",
    "Long (i64)",
    "Float / double",
    "Free text",
    "Single letter",
];

fn print_banner() {
    println!("----------------------------------------------------------------");
    println!("  ____  ____   ___  __  __ ____ _____ _     ___ _   _ _____     ");
    println!(" |  _ \\|  _ \\ / _ \\|  \\/  |  _ \\_   _| |   |_ _| \\ | | ____|    ");
    println!(" | |_) | |_) | | | | |\\/| | |_) || | | |    | ||  \\| |  _|      ");
    println!(" |  __/|  _ <| |_| | |  | |  __/ | | | |___ | || |\\  | |___     ");
    println!(" |_|   |_| \\_\\\\___/|_|  |_|_|    |_| |_____|___|_| \\_|_____|    ");
    println!("                                                 VERSION: {}", env!("CARGO_PKG_VERSION"));
    println!("----------------------------------------------------------------");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "starting prompt tour");

    print_banner();

    let mut terminal = Terminal::with_config(StdConsole, args.config());

    loop {
        let choice = terminal
            .select_from_menu(&DEMOS, true)
            .context("menu selection failed")?;

        match choice {
            0 => break,
            1 => {
                let answer = terminal.prompt_bool("Do you like Rust? (yes/no)", "yes", "no")?;
                println!("The input: {answer}");
            }
            2 => {
                let answer = terminal.prompt_i8("Enter a byte (-128 to 127):", i8::MIN, i8::MAX)?;
                println!("The input: {answer}");
            }
            3 => {
                let answer = terminal.prompt_i16("Enter a year (1900-2100):", 1900, 2100)?;
                println!("The input: {answer}");
            }
            4 => {
                let answer = terminal.prompt_i32("Enter scan threads (1-16):", 1, 16)?;
                println!("The input: {answer}");
            }
            5 => {
                let answer =
                    terminal.prompt_i64("Enter a timeout in ms (0-3600000):", 0, 3_600_000)?;
                println!("The input: {answer}");
            }
            6 => {
                let ratio = terminal.prompt_f32("Enter a ratio (0-1):", 0.0, 1.0)?;
                let celsius = terminal.prompt_f64("Enter a temperature (-273.15-1000):", -273.15, 1000.0)?;
                println!("The input: {ratio} and {celsius}");
            }
            7 => {
                let answer = terminal.prompt_text("Enter your name:", false)?;
                println!("The input: {answer}");
            }
            _ => {
                let answer = terminal.prompt_char("Enter a lowercase letter:", 'a', 'z')?;
                println!("The input: {answer}");
            }
        }
    }

    println!("Bye!");
    Ok(())
}
