//! Interactive query collection
//!
//! The prompt sequence that turns terminal input into an
//! `ObservationQuery`. Every prompt accepts a bare Enter for its
//! documented default. The core never prompts; this module is the only
//! place input is read, and it is written against `BufRead`/`Write` so
//! tests can drive it with buffers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use domain::DomainError;
use domain::query::ObservationQuery;
use domain::value_objects::{CalendarDate, GeoLocation};
use infrastructure::QueryConfig;
use thiserror::Error;

/// Errors raised while collecting a query interactively
#[derive(Debug, Error)]
pub enum PromptError {
    /// Terminal read/write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed as the expected type
    #[error("Could not parse '{input}' as {expected}")]
    Parse { input: String, expected: &'static str },

    /// The collected parameters are invalid
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Collect an observation query from the terminal
///
/// Asks whether to use the configured defaults; on `n`, prompts for each
/// parameter with Enter-for-default semantics. Any other answer falls
/// back to the defaults with a notice, mirroring the forgiving behavior
/// users expect from the prompt sequence.
///
/// # Errors
///
/// Fails on I/O errors, unparseable input, or parameters the domain
/// rejects (out-of-range coordinates, invalid dates, years below the
/// archive floor).
pub fn collect_query<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    defaults: &QueryConfig,
) -> Result<ObservationQuery, PromptError> {
    write!(output, "Would you like to use default parameters? y/n: ")?;
    output.flush()?;
    let answer = read_line(&mut input)?;

    match answer.trim() {
        "y" | "Y" => {
            writeln!(
                output,
                "Creating table for weather data from the past {} Halloweens from New Orleans, Louisiana.",
                defaults.num_years
            )?;
            Ok(defaults.to_query()?)
        },
        "n" | "N" => collect_custom_query(&mut input, &mut output, defaults),
        _ => {
            writeln!(
                output,
                "No input was made. Using default parameters: New Orleans, Louisiana, for the past {} Halloweens.",
                defaults.num_years
            )?;
            Ok(defaults.to_query()?)
        },
    }
}

/// Prompt for each parameter in turn
fn collect_custom_query<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: &QueryConfig,
) -> Result<ObservationQuery, PromptError> {
    writeln!(
        output,
        "You will be prompted for your own location and date information. \
         Press Enter without typing anything to keep a default value.\n\
         The defaults are:\n\n\
         Latitude: {}, Longitude: {}\n\
         Date: month {}, day {}\n\
         Years: the {} years ending {}.\n",
        defaults.latitude,
        defaults.longitude,
        defaults.month,
        defaults.day,
        defaults.num_years,
        defaults.last_year
    )?;

    let latitude = prompt_value(
        input,
        output,
        "Type the desired Latitude or press Enter for default: ",
        "a latitude",
        defaults.latitude,
    )?;
    let longitude = prompt_value(
        input,
        output,
        "Type the desired Longitude or press Enter for default: ",
        "a longitude",
        defaults.longitude,
    )?;
    let month = prompt_value(
        input,
        output,
        "Type the desired Month as a number (ie. for October, type \"10\") or press Enter for default: ",
        "a month number",
        defaults.month,
    )?;
    let day = prompt_value(
        input,
        output,
        "Type the desired Day or press Enter for default: ",
        "a day number",
        defaults.day,
    )?;
    let num_years = prompt_value(
        input,
        output,
        "Type the number of years you want to see data for or Enter for default: ",
        "a year count",
        defaults.num_years,
    )?;
    let last_year = prompt_value(
        input,
        output,
        "Type the last year you want to see data for or Enter for default: ",
        "a year",
        defaults.last_year,
    )?;

    let location = GeoLocation::new(latitude, longitude)?;
    let date = CalendarDate::new(month, day)?;
    Ok(ObservationQuery::trailing_years(
        location, date, num_years, last_year,
    )?)
}

/// Prompt for one value, falling back to `default` on a bare Enter
fn prompt_value<R: BufRead, W: Write, T: FromStr + Copy>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    expected: &'static str,
    default: T,
) -> Result<T, PromptError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let line = read_line(input)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse().map_err(|_| PromptError::Parse {
        input: trimmed.to_string(),
        expected,
    })
}

/// Read one line; end-of-input counts as an empty answer
fn read_line<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
