//! Line-based console front end
//!
//! - [`input`]: line reading and integer prompts
//! - [`theme`]: color palette and the [`Painter`] that applies it
//! - [`lessons`]: the quick tour
//! - [`limits`]: the min/max limits table
//!
//! The entry point is [`run_menu`], which loops over the main menu until the
//! player picks Exit or the input stream closes.

pub mod input;
pub mod lessons;
pub mod limits;
pub mod theme;

use crate::arena::{Arena, ArenaError};
use crate::pitfalls::write_pitfalls;
use input::{read_int, wait_for_enter};
use rand::Rng;
use std::io::{self, BufRead, Write};
use theme::Painter;
use tracing::{debug, info};

/// Title followed by a dashed underline of the same length
pub fn write_heading<O: Write>(out: &mut O, painter: &Painter, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", painter.heading(title))?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    QuickTour,
    LimitTables,
    PlayArena,
    Pitfalls,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::QuickTour,
        MenuChoice::LimitTables,
        MenuChoice::PlayArena,
        MenuChoice::Pitfalls,
        MenuChoice::Exit,
    ];

    /// Map a typed number to an entry
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::QuickTour),
            2 => Some(MenuChoice::LimitTables),
            3 => Some(MenuChoice::PlayArena),
            4 => Some(MenuChoice::Pitfalls),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> i64 {
        match self {
            MenuChoice::QuickTour => 1,
            MenuChoice::LimitTables => 2,
            MenuChoice::PlayArena => 3,
            MenuChoice::Pitfalls => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::QuickTour => "Quick Tour",
            MenuChoice::LimitTables => "Print Min/Max Tables",
            MenuChoice::PlayArena => "Play Overflow Arena",
            MenuChoice::Pitfalls => "Advanced Pitfalls",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// How the menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The player picked Exit
    Chosen,
    /// The input stream closed
    InputClosed,
}

fn write_menu<O: Write>(out: &mut O, painter: &Painter) -> io::Result<()> {
    write_heading(out, painter, "Overflow Arena - Main Menu")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "[{}] {}", choice.number(), choice.label())?;
    }
    Ok(())
}

/// Run the main menu until Exit or end of input.
///
/// End of input while reading a menu choice ends the whole program, so it is
/// reported as [`MenuExit::InputClosed`] for the caller to exit cleanly. End of
/// input inside the arena only ends the game; the menu then sees the closed
/// stream on its next read.
pub fn run_menu<I: BufRead, O: Write, R: Rng>(
    input: &mut I,
    out: &mut O,
    arena: &mut Arena<R>,
    painter: &Painter,
) -> Result<MenuExit, ArenaError> {
    writeln!(out, "{}", painter.heading("Welcome to Overflow Arena!"))?;

    loop {
        write_menu(out, painter)?;
        let Some(number) = read_int(input, out, painter, "Choose an option: ")? else {
            writeln!(out, "\nInput stream closed. Exiting.")?;
            info!("input closed at the main menu");
            return Ok(MenuExit::InputClosed);
        };

        let Some(choice) = MenuChoice::from_number(number) else {
            writeln!(out, "{}", painter.error(&format!("Unknown option: {}", number)))?;
            continue;
        };
        debug!(?choice, "menu selection");

        match choice {
            MenuChoice::QuickTour => {
                lessons::write_quick_tour(out, painter)?;
                wait_for_enter(input, out)?;
            }
            MenuChoice::LimitTables => {
                write_heading(out, painter, "Min/Max Tables")?;
                let rows = limits::limit_rows(arena.catalog());
                for line in limits::render_limits_table(&rows) {
                    writeln!(out, "{}", line)?;
                }
                wait_for_enter(input, out)?;
            }
            MenuChoice::PlayArena => {
                arena.play(input, out)?;
            }
            MenuChoice::Pitfalls => {
                write_pitfalls(out, painter)?;
                wait_for_enter(input, out)?;
            }
            MenuChoice::Exit => {
                writeln!(out, "Goodbye!")?;
                return Ok(MenuExit::Chosen);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_number(choice.number()), Some(choice));
        }
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(6), None);
    }

    #[test]
    fn test_write_heading_underline_matches_title() {
        let mut out = Vec::new();
        write_heading(&mut out, &Painter::plain(), "Overflow Arena").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nOverflow Arena\n--------------\n");
    }
}
