//! The Overflow Arena quiz loop
//!
//! Each round shows a type, a start value and an operation, then asks the player
//! what the type holds afterwards. The ground truth comes from the wraparound
//! engine via [`Round::resolve`].
//!
//! # States
//!
//! ```text
//! AwaitingGuess --integer--> Scored --> AwaitingGuess --> ...
//!       |  ^
//!       |  +-- junk: re-prompt the same round
//!       +----- q / end of input --> Terminated
//! ```
//!
//! Only [`GameSession`] is mutated, and only when an integer guess is scored.

use super::catalog::TypeCatalog;
use super::errors::ArenaError;
use super::round::{Resolution, Round};
use super::wrap::Wide;
use crate::console::input::{read_line, wait_for_enter};
use crate::console::theme::Painter;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Running tally for one visit to the arena
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSession {
    pub score: u32,
    pub rounds: u32,
}

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub resolution: Resolution,
    pub correct: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `guess` against the round's ground truth
    pub fn record(&mut self, round: &Round, guess: Wide) -> Verdict {
        let resolution = round.resolve();
        let correct = guess == resolution.final_value;
        self.rounds += 1;
        if correct {
            self.score += 1;
        }
        Verdict {
            resolution,
            correct,
        }
    }
}

/// What the player typed at the guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    Guess(Wide),
    Quit,
    Invalid,
}

/// Classify one line of guess input
pub fn parse_guess(line: &str) -> GuessInput {
    let line = line.trim();
    if line.starts_with(['q', 'Q']) {
        return GuessInput::Quit;
    }
    match line.parse::<Wide>() {
        Ok(guess) => GuessInput::Guess(guess),
        Err(_) => GuessInput::Invalid,
    }
}

/// The game: a catalog to draw from, a random source, and console styling
pub struct Arena<R: Rng> {
    catalog: TypeCatalog,
    rng: R,
    painter: Painter,
}

impl<R: Rng> Arena<R> {
    pub fn new(catalog: TypeCatalog, rng: R, painter: Painter) -> Self {
        Arena {
            catalog,
            rng,
            painter,
        }
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Play rounds until the player quits or input ends, starting from a fresh session
    pub fn play<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        out: &mut O,
    ) -> Result<GameSession, ArenaError> {
        let p = self.painter;
        crate::console::write_heading(out, &p, "Overflow Arena")?;
        writeln!(out, "How to play: guess the result, then see what happens.")?;
        writeln!(out, "Type 'q' to quit after any round.")?;

        let mut session = GameSession::new();

        'rounds: loop {
            let round = Round::generate(&self.catalog, &mut self.rng);
            writeln!(
                out,
                "\nRound {} | Type: {} | Start: {} | Op: {}",
                session.rounds + 1,
                p.type_name(round.ty.name()),
                p.number(&round.start.to_string()),
                p.accent(round.operation.symbol()),
            )?;

            let guess = loop {
                write!(out, "Your guess (or q): ")?;
                out.flush()?;

                let Some(line) = read_line(input)? else {
                    writeln!(out)?;
                    break 'rounds;
                };
                match parse_guess(&line) {
                    GuessInput::Guess(guess) => break guess,
                    GuessInput::Quit => break 'rounds,
                    GuessInput::Invalid => {
                        writeln!(out, "{}", p.error("Please enter a valid integer."))?;
                    }
                }
            };

            let verdict = session.record(&round, guess);
            debug!(
                ty = round.ty.name(),
                start = %round.start,
                %guess,
                final_value = %verdict.resolution.final_value,
                correct = verdict.correct,
                "scored round"
            );
            self.report(out, &round, &verdict, &session)?;
        }

        info!(
            score = session.score,
            rounds = session.rounds,
            "arena session ended"
        );
        writeln!(out, "Final score: {}/{}", session.score, session.rounds)?;
        wait_for_enter(input, out)?;
        Ok(session)
    }

    fn report<O: Write>(
        &self,
        out: &mut O,
        round: &Round,
        verdict: &Verdict,
        session: &GameSession,
    ) -> Result<(), ArenaError> {
        let p = &self.painter;
        let resolution = &verdict.resolution;

        writeln!(
            out,
            "Result: {}",
            p.number(&resolution.final_value.to_string())
        )?;
        if verdict.correct {
            writeln!(out, "{}", p.success("Correct!"))?;
        } else {
            writeln!(out, "{}", p.error("Wrong!"))?;
        }

        if resolution.wrapped() {
            writeln!(
                out,
                "{}",
                p.muted(&format!(
                    "{} {} = {} does not fit in {}, so it wrapped to {} (bits {})",
                    round.start,
                    round.operation.symbol(),
                    resolution.wide_after,
                    round.ty.name(),
                    resolution.final_value,
                    round.result_bits()
                ))
            )?;
        } else {
            writeln!(
                out,
                "{}",
                p.muted(&format!(
                    "{} {} = {} fits in {} (bits {})",
                    round.start,
                    round.operation.symbol(),
                    resolution.final_value,
                    round.ty.name(),
                    round.result_bits()
                ))
            )?;
        }

        writeln!(out, "Score: {}/{}", session.score, session.rounds)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::catalog::SimulatedType;
    use crate::arena::operation::Operation;

    fn int8_round() -> Round {
        Round::new(
            SimulatedType::new("int8_t", 8, true).unwrap(),
            Operation::Increment,
            127,
        )
    }

    #[test]
    fn test_record_correct_guess() {
        let mut session = GameSession::new();
        let verdict = session.record(&int8_round(), -128);
        assert!(verdict.correct);
        assert_eq!(verdict.resolution.final_value, -128);
        assert_eq!(session, GameSession { score: 1, rounds: 1 });
    }

    #[test]
    fn test_record_wrong_guess_still_counts_round() {
        let mut session = GameSession::new();
        let verdict = session.record(&int8_round(), 128);
        assert!(!verdict.correct);
        assert_eq!(session, GameSession { score: 0, rounds: 1 });
    }

    #[test]
    fn test_three_correct_guesses() {
        let mut session = GameSession::new();
        for _ in 0..3 {
            session.record(&int8_round(), -128);
        }
        assert_eq!(session, GameSession { score: 3, rounds: 3 });
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("-128"), GuessInput::Guess(-128));
        assert_eq!(parse_guess("  +4294967295 "), GuessInput::Guess(4_294_967_295));
        assert_eq!(parse_guess("q"), GuessInput::Quit);
        assert_eq!(parse_guess("Quit"), GuessInput::Quit);
        assert_eq!(parse_guess("  q"), GuessInput::Quit);
        assert_eq!(parse_guess("12abc"), GuessInput::Invalid);
        assert_eq!(parse_guess(""), GuessInput::Invalid);
    }
}
