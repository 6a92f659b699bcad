//! Interactive collection of the pendulum length and release height.
//!
//! Every prompt loops until the answer parses and lies in range; the
//! complaint for a rejected answer is written before asking again.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

/// Why an answer was rejected. The message is shown to the user as is.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection(pub String);

/// Parse a floating point answer.
pub fn parse_number(text: &str) -> Result<f64, Rejection> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Rejection("That is not a valid number.".to_string())),
    }
}

const LENGTH_RANGE: &str = "No: the length for your pendulum must be from 0.1 to 2m";

pub fn check_length(length: f64) -> Result<f64, Rejection> {
    pendula::config::check_length(length)
        .map(|()| length)
        .map_err(|_| Rejection(LENGTH_RANGE.to_string()))
}

pub fn check_height(height: f64, length: f64) -> Result<f64, Rejection> {
    pendula::config::check_height(height, length)
        .map(|()| height)
        .map_err(|_| {
            Rejection(format!(
                "No: the initial height for your pendulum must be between {:.6} to {:.6}",
                -length, length
            ))
        })
}

/// Ask with `prompt` until `check` accepts a number read from `input`.
///
/// Fails only when the input ends or cannot be read.
pub fn prompt_until<R, W, F>(input: &mut R, output: &mut W, prompt: &str, check: F) -> Result<f64>
where
    R: BufRead,
    W: Write,
    F: Fn(f64) -> Result<f64, Rejection>,
{
    writeln!(output, "{prompt}")?;
    loop {
        output.flush()?;
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read answer")?;
        if read == 0 {
            bail!("input ended before a valid answer was given");
        }
        match parse_number(&line).and_then(&check) {
            Ok(value) => return Ok(value),
            Err(Rejection(message)) => writeln!(output, "{message}")?,
        }
    }
}

pub fn ask_length<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64> {
    prompt_until(
        input,
        output,
        "Input the length for your pendulum, from 0.1m up to 2m",
        check_length,
    )
}

pub fn ask_height<R: BufRead, W: Write>(input: &mut R, output: &mut W, length: f64) -> Result<f64> {
    let prompt = format!(
        "\nInput the initial height of your pendulum, between {:.6} and {:.6}",
        -length, length
    );
    prompt_until(input, output, &prompt, |h| check_height(h, length))
}

/// Block until the user presses enter. End of input also releases the gate.
pub fn wait_for_enter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<()> {
    writeln!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
