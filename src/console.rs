//! Console collaborators: line input, coordinate parsing and board
//! rendering.
//!
//! The engine itself never touches stdin or stdout; everything that talks
//! to the terminal lives here. A [`Console`] is created once at session
//! start and dropped at the end, and every prompt accepts `exit` to leave
//! the game.

use crate::board::{Board, Cell};
use crate::coordinates::{index_to_letters, letters_to_index, Coordinates};
use crate::referee::Objection;
use crate::rules::Rules;
use crate::session::{GameEvent, Observer};
use anyhow::Result;
use std::io::{self, BufRead, BufReader, Write};

/// What a prompt produced: a value, or the user's wish to leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<T> {
    /// The user entered a usable value.
    Value(T),
    /// The user typed `exit` (or the input stream ended).
    Quit,
}

/// Line-oriented user input with the game's prompt conventions.
pub struct Console {
    input: Box<dyn BufRead>,
}

impl Console {
    /// Console reading from the process's stdin.
    pub fn stdin() -> Self {
        Self::new(Box::new(BufReader::new(io::stdin())))
    }

    /// Console reading from an arbitrary source (used by tests).
    pub fn new(input: Box<dyn BufRead>) -> Self {
        Self { input }
    }

    /// Reads the next trimmed line; `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for a non-empty line of text.
    pub fn prompt_line(&mut self, message: &str) -> Result<Input<String>> {
        loop {
            print!("{message} ");
            io::stdout().flush()?;
            match self.next_line()? {
                None => return Ok(Input::Quit),
                Some(line) if !line.is_empty() => return Ok(Input::Value(line)),
                Some(_) => continue,
            }
        }
    }

    /// Asks for an integer within `min..=max`, re-prompting until it gets
    /// one. `exit` leaves the game.
    pub fn prompt_number(&mut self, message: &str, min: i64, max: i64) -> Result<Input<i64>> {
        loop {
            println!();
            println!("Type \"exit\" to leave the game.");
            print!("{message} ");
            io::stdout().flush()?;
            let Some(line) = self.next_line()? else {
                return Ok(Input::Quit);
            };
            if line.eq_ignore_ascii_case("exit") {
                return Ok(Input::Quit);
            }
            match line.parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Input::Value(value)),
                _ => println!("Enter a number between {min} and {max}."),
            }
        }
    }

    /// Asks for move coordinates.
    ///
    /// Accepts `xy`, `x y`, `x,y` and `x.y` (letter column, decimal row),
    /// the `rules` command (prints the rules and asks again) and `exit`.
    /// Malformed input re-prompts; whatever comes back is syntactically a
    /// coordinate pair, though it may still be off the board.
    pub fn prompt_coordinates(&mut self, rules: &Rules) -> Result<Input<Coordinates>> {
        loop {
            println!();
            println!("Your options:");
            println!("  - move coordinates (letter column, number row) as \"xy\", \"x y\", \"x,y\" or \"x.y\"");
            println!("  - \"rules\" to show the rules");
            println!("  - \"exit\" to leave the game");
            print!("Enter: ");
            io::stdout().flush()?;
            let Some(line) = self.next_line()? else {
                return Ok(Input::Quit);
            };
            if line.eq_ignore_ascii_case("exit") {
                return Ok(Input::Quit);
            }
            if line.eq_ignore_ascii_case("rules") {
                println!();
                println!("{rules}");
                continue;
            }
            match parse_coordinates(&line) {
                Some(coordinates) => return Ok(Input::Value(coordinates)),
                None => println!("That is not a coordinate pair."),
            }
        }
    }
}

/// Splits raw input into its column and row halves.
fn split_coordinate_input(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim();
    for separator in [',', '.'] {
        if let Some((column, row)) = trimmed.split_once(separator) {
            return Some((column.trim(), row.trim()));
        }
    }
    if let Some((column, row)) = trimmed.split_once(char::is_whitespace) {
        return Some((column.trim(), row.trim()));
    }
    // "xy" form: letters up to the first digit.
    let boundary = trimmed.find(|c: char| c.is_ascii_digit())?;
    let (column, row) = trimmed.split_at(boundary);
    if column.is_empty() {
        return None;
    }
    Some((column, row))
}

/// Parses user input into coordinates, if it is a coordinate pair at all.
pub fn parse_coordinates(input: &str) -> Option<Coordinates> {
    let (column, row) = split_coordinate_input(input)?;
    let x = u8::try_from(letters_to_index(column)?).ok()?;
    let y = row.parse::<u8>().ok()?;
    Some(Coordinates::new(x, y))
}

/// Renders the board as a box-drawn grid with letter column headers,
/// decimal row labels and each player's figure for marks.
pub fn render_board(board: &Board) -> String {
    let row_label_width = board.height().saturating_sub(1).to_string().len();
    let cell_width = index_to_letters(board.width() as usize - 1).len();
    let margin = " ".repeat(row_label_width);
    let bar = "\u{2500}".repeat(cell_width);
    let edge = |left: char, joint: char, right: char| {
        let mut line = margin.clone();
        line.push(left);
        for x in 0..board.width() {
            if x > 0 {
                line.push(joint);
            }
            line.push_str(&bar);
        }
        line.push(right);
        line.push('\n');
        line
    };

    let mut out = String::new();
    out.push_str(&margin);
    out.push(' ');
    for x in 0..board.width() {
        if x > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:>cell_width$}", index_to_letters(x as usize)));
    }
    out.push('\n');
    out.push_str(&edge('\u{250C}', '\u{252C}', '\u{2510}'));
    for y in 0..board.height() {
        if y > 0 {
            out.push_str(&edge('\u{251C}', '\u{253C}', '\u{2524}'));
        }
        out.push_str(&format!("{y:>row_label_width$}"));
        out.push('\u{2502}');
        for x in 0..board.width() {
            let glyph = match board.at(Coordinates::new(x, y)) {
                Ok(Cell::Mark(id)) => board.figure_of(id).map(|f| f.glyph()).unwrap_or('?'),
                _ => ' ',
            };
            out.push_str(&format!("{glyph:>cell_width$}"));
            out.push('\u{2502}');
        }
        out.push('\n');
    }
    out.push_str(&edge('\u{2514}', '\u{2534}', '\u{2518}'));
    out
}

/// Observer that narrates the game on stdout.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    /// Creates the observer.
    pub fn new() -> Self {
        Self
    }
}

impl Observer for ConsoleObserver {
    fn board_updated(&mut self, board: &Board) {
        println!();
        println!("{}", render_board(board));
    }

    fn note(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started { rules } => {
                println!();
                println!("-----------------------------------------");
                println!("The game is on! {rules}");
            }
            GameEvent::MoveAccepted { mov } => {
                println!("Move accepted: {mov}");
            }
            GameEvent::MoveRejected {
                player,
                objection,
                warning,
            } => {
                match objection {
                    Objection::OffBoard(coordinates) => {
                        println!("{player} pointed off the board: ({coordinates}).");
                    }
                    Objection::CellTaken(coordinates) => {
                        println!("The cell {player} chose ({coordinates}) is already taken.");
                    }
                    Objection::NoMoveOffered => {
                        println!("{player} does not know where to go.");
                    }
                }
                if let Some(warning) = warning {
                    println!(
                        "{player} receives a warning: {}/{}.",
                        warning.used, warning.allowed
                    );
                }
            }
            GameEvent::Won { winner } => {
                println!();
                println!("{winner} WINS!!!");
            }
            GameEvent::Draw => {
                println!();
                println!("DRAW!!!");
            }
            GameEvent::Disqualified { player, .. } => {
                println!();
                println!("{player} is DISQUALIFIED!!!");
            }
        }
    }
}
