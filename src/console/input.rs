//! Line-based console input
//!
//! Two reading contexts share one stream:
//!
//! - the outer menu ([`read_int`]), where end of input ends the program
//! - the inner game prompt (see [`crate::arena::game`]), where end of input only
//!   ends the current game
//!
//! Both report end of input as `None` and let the caller decide what it means.

use super::theme::Painter;
use std::io::{self, BufRead, Write};

/// Read one line without its trailing newline. `None` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so they fail to parse and
/// get re-prompted like any other junk.
pub fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Parse a whole line as an integer, rejecting trailing text
pub fn parse_int(line: &str) -> Option<i64> {
    line.trim().parse::<i64>().ok()
}

/// Prompt until a valid integer is entered. `None` at end of input.
pub fn read_int<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    painter: &Painter,
    prompt: &str,
) -> io::Result<Option<i64>> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if let Some(value) = parse_int(&line) {
            return Ok(Some(value));
        }
        writeln!(out, "{}", painter.error("Please enter a valid integer."))?;
    }
}

/// Pause until the user presses ENTER. End of input counts as ENTER.
pub fn wait_for_enter<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> io::Result<()> {
    write!(out, "\nPress ENTER to continue...")?;
    out.flush()?;
    read_line(input)?;
    Ok(())
}
