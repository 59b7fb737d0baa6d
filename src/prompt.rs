//! Interactive question-and-answer flow for the converter binary.
//!
//! Input and output are generic so the flow can be driven from memory.
//! Any failure inside a conversion is reported as a single
//! `Oops! Something went wrong: ...` line. Only I/O errors escape, except
//! undecodable (non UTF-8) answers, which are reported like any bad answer.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::{
    ConvertError, DayOfYear, Hour, TimeZone, UctDate, UctMonth, UctYear, convert_real_to_uct,
    convert_uct_to_real,
};

const RULE_WIDTH: usize = 60;

/// Error raised while answering a conversion's questions.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Invalid number for {field}: {input:?}")]
    InvalidNumber { field: &'static str, input: String },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Runs one session: greets, asks for a direction, and performs it.
///
/// # Errors
/// Returns any error from reading `input` or writing `output`.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "Welcome to the Universal Civ Time (UCT) Converter!")?;
    writeln!(
        output,
        "This tool helps you convert your real-world (IRL) time into UCT time and vice versa."
    )?;
    writeln!(
        output,
        "Follow the instructions step by step, and I'll guide you through the process."
    )?;
    writeln!(output, "{}", "-".repeat(RULE_WIDTH))?;

    let mode = ask(
        &mut input,
        &mut output,
        "Do you want to convert:\n1) Your IRL time to UCT\n2) A UCT time to IRL\nEnter 1 or 2: ",
    )?;
    info!(%mode, "direction chosen");

    let result = match mode.as_str() {
        "1" => irl_to_uct(&mut input, &mut output),
        "2" => uct_to_irl(&mut input, &mut output),
        _ => {
            writeln!(
                output,
                "Invalid choice. Please restart the program and enter 1 or 2."
            )?;
            return Ok(());
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(PromptError::Io(err)) if err.kind() != io::ErrorKind::InvalidData => Err(err),
        Err(err) => {
            debug!(error = %err, "conversion failed");
            writeln!(output, "Oops! Something went wrong: {err}")
        }
    }
}

fn irl_to_uct<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), PromptError> {
    writeln!(output, "\nGreat! Let's convert your IRL time to UCT.")?;
    writeln!(
        output,
        "I'll need a few details about your time. Don't worry, it's simple!"
    )?;

    let timezone = ask(
        input,
        output,
        &format!(
            "\nFirst, what is your timezone? (Supported: {}): ",
            TimeZone::supported_names()
        ),
    )?;
    let year = ask_number(input, output, "year", "Enter the current year (e.g., 2025): ")?;
    let month = ask_number(input, output, "month", "Enter the current month (1-12): ")?;
    let day = ask_number(
        input,
        output,
        "day",
        "Enter the current day of the month (1-31): ",
    )?;
    let hour12 = ask_number(input, output, "hour", "Enter the current hour (1-12): ")?;
    let period = ask(input, output, "Is it AM or PM? (type 'AM' or 'PM'): ")?;

    let uct = convert_real_to_uct(&timezone, year, month, day, hour12, &period)?;

    writeln!(output, "\nYour IRL time has been successfully converted to UCT!")?;
    writeln!(output, "UCT Time: {uct}")?;
    writeln!(output, "Thanks for using the UCT Converter!")?;
    Ok(())
}

fn uct_to_irl<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), PromptError> {
    writeln!(output, "\nOkay, let's convert a UCT time to IRL time.")?;
    writeln!(
        output,
        "You'll need to tell me the UCT year, month (if you know it), and time."
    )?;

    let year = UctYear::new(ask_number(input, output, "UCT year", "\nEnter the UCT year: ")?)?;
    let know_month = ask(input, output, "Do you know the UCT month? (yes/no): ")?;

    let date = if know_month.eq_ignore_ascii_case("yes") {
        let month = ask(input, output, "Enter the UCT month (e.g., Norya, Solstara): ")?
            .parse::<UctMonth>()?;
        let day = ask_number(
            input,
            output,
            "UCT day",
            &format!("Enter the day of the month in {month}: "),
        )?;
        UctDate::MonthDay { month, day }
    } else {
        let day = ask_number(
            input,
            output,
            "UCT day of year",
            "Enter the day of the UCT year (1-500): ",
        )?;
        UctDate::DayOfYear(DayOfYear::new(day)?)
    };
    let hour = Hour::new(ask_number(input, output, "UCT hour", "Enter the hour (0-23): ")?)?;

    let times = convert_uct_to_real(year, date, hour)?;

    writeln!(
        output,
        "\nYour UCT time has been successfully converted to IRL time!"
    )?;
    writeln!(output, "Here are the IRL times in all supported timezones:")?;
    for time in &times {
        writeln!(output, "{time}")?;
    }
    writeln!(output, "Thanks for using the UCT Converter!")?;
    Ok(())
}

/// Writes `question`, then reads one trimmed line. End of input reads as "".
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn ask_number<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    question: &str,
) -> Result<T, PromptError> {
    let answer = ask(input, output, question)?;
    answer
        .parse()
        .map_err(|_| PromptError::InvalidNumber {
            field,
            input: answer,
        })
}
