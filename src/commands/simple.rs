//! Simple interactive CLI mode
//!
//! Text-based read-guess-render loop without the TUI.

use crate::core::Word;
use crate::game::{Game, GameState, GuessOutcome};
use crate::output::display::{
    write_banner, write_board, write_loss, write_suggestions, write_win,
};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Guess(Word),
    Suggest,
    Quit,
    Invalid(String),
}

fn parse_command(input: &str) -> Command {
    match input.trim().to_lowercase().as_str() {
        "s" => Command::Suggest,
        "q" | "quit" | "exit" => Command::Quit,
        text => match Word::new(text) {
            Ok(word) => Command::Guess(word),
            Err(err) => Command::Invalid(err.to_string()),
        },
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the game
/// engine fails.
pub fn run_simple<R: Rng + ?Sized>(game: Game, rng: &mut R) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, &mut stdin.lock(), &mut stdout.lock(), rng).map(|_| ())
}

/// Play `game` reading commands from `input` and rendering to `out`
///
/// Returns the game in its final state. Input ending early leaves the game in
/// progress.
///
/// # Errors
///
/// Returns an error on I/O failure or if the game engine fails.
pub fn run_simple_with<I, O, R>(mut game: Game, input: &mut I, out: &mut O, rng: &mut R) -> Result<Game>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    write_banner(out, game.max_tries())?;

    while !game.is_over() {
        let Some(line) = prompt(input, out, "Enter your guess or 's' to use a suggestion")? else {
            return Ok(game);
        };

        let guess = match parse_command(&line) {
            Command::Guess(word) => word,
            Command::Quit => return Ok(game),
            Command::Invalid(reason) => {
                writeln!(out, "{reason}")?;
                continue;
            }
            Command::Suggest => {
                let suggestions = game.suggestions();
                write_suggestions(out, &suggestions)?;
                let Some(choice) = prompt(input, out, "Choose a suggestion by entering its number")?
                else {
                    return Ok(game);
                };
                match choice
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| suggestions.get(i))
                {
                    Some(word) => *word,
                    None => {
                        writeln!(out, "No suggestion numbered '{}'", choice.trim())?;
                        continue;
                    }
                }
            }
        };

        match game.submit_guess(guess, rng)? {
            GuessOutcome::Solved { tries } => write_win(out, tries)?,
            GuessOutcome::Scored(_) => write_board(out, game.turns(), game.status())?,
        }
    }

    if game.state() == GameState::Lost {
        write_loss(out, game.target())?;
    }
    Ok(game)
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Parameters;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn game(target: &str, max_tries: usize, rng: &mut StdRng) -> Game {
        let parameters = Parameters {
            population_size: 50,
            mutation_rate: 0.05,
        };
        Game::with_parameters(Word::new(target).unwrap(), parameters, max_tries, rng).unwrap()
    }

    fn play(target: &str, max_tries: usize, script: &str) -> (Game, String) {
        colored::control::set_override(false);
        let mut rng = StdRng::seed_from_u64(1);
        let game = game(target, max_tries, &mut rng);
        let mut out = Vec::new();
        let game = run_simple_with(game, &mut Cursor::new(script), &mut out, &mut rng).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("s"), Command::Suggest);
        assert_eq!(parse_command(" Q "), Command::Quit);
        assert_eq!(
            parse_command("Apple"),
            Command::Guess(Word::new("apple").unwrap())
        );
        assert!(matches!(parse_command("abc"), Command::Invalid(_)));
    }

    #[test]
    fn winning_game() {
        let (game, text) = play("apple", 10, "alpha\napple\n");
        assert_eq!(game.state(), GameState::Won);
        assert!(text.contains("alp_a"));
        assert!(text.contains("Word guessed correctly in 2 tries"));
    }

    #[test]
    fn losing_game_reveals_target() {
        let (game, text) = play("apple", 2, "crane\nmount\n");
        assert_eq!(game.state(), GameState::Lost);
        assert!(text.contains("word was apple"));
    }

    #[test]
    fn invalid_input_does_not_use_a_try() {
        let (game, text) = play("apple", 10, "abc\nq\n");
        assert_eq!(game.tries(), 0);
        assert!(text.contains("Invalid input"));
    }

    #[test]
    fn suggestion_can_be_chosen() {
        let (game, text) = play("apple", 10, "s\n1\nq\n");
        assert!(text.contains("Suggestions:"));
        assert!(text.contains("1. "));
        assert_eq!(game.tries(), 1);
    }

    #[test]
    fn bad_suggestion_number_is_rejected() {
        let (game, text) = play("apple", 10, "s\n9\nq\n");
        assert!(text.contains("No suggestion numbered '9'"));
        assert_eq!(game.tries(), 0);
    }

    #[test]
    fn end_of_input_stops() {
        let (game, _) = play("apple", 10, "crane\n");
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.tries(), 1);
    }
}
