//! CrossZeros - console N-in-a-row game.
//!
//! Parses the command line, then either jumps straight into a game or
//! opens the interactive menu. All terminal I/O goes through one shared
//! [`Console`].

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crosszeros::{
    Cli, Command, Console, ConsoleObserver, Contestant, Figure, GreedyStrategy, HumanStrategy,
    Input, PlayerKind, RandomStrategy, Roster, Rules, Session, Strategy, MAX_DIMENSION,
    MAX_ERRORS, MAX_PLAYERS, MIN_DIMENSION, MIN_PLAYERS,
};
use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;
use tracing::info;
use tracing_subscriber::EnvFilter;

type SharedConsole = Rc<RefCell<Console>>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let console: SharedConsole = Rc::new(RefCell::new(Console::stdin()));
    let mut roster = Roster::new();

    match cli.command {
        Some(Command::Classic) => play_game(&console, &mut roster, &Rules::classic(), false),
        Some(Command::Custom {
            width,
            height,
            line,
            errors,
            players,
        }) => {
            // Out-of-range values fall through to rule validation.
            let max_errors = if errors < 0 {
                None
            } else {
                Some(u8::try_from(errors).unwrap_or(u8::MAX))
            };
            let rules = Rules::new(width, height, line, max_errors, players)?;
            play_game(&console, &mut roster, &rules, true)
        }
        Some(Command::Menu) | None => run_menu(&console, &mut roster),
    }
}

/// The interactive menu: pick a rule set, play, come back.
fn run_menu(console: &SharedConsole, roster: &mut Roster) -> Result<()> {
    let mut last_rules: Option<Rules> = None;
    loop {
        println!();
        println!("=== CrossZeros ===");
        println!(" 1. Classic game (3x3 board, two players)");
        println!(" 2. Custom game");
        if last_rules.is_some() {
            println!(" 3. Play again with the last rules");
        }
        println!(" 0. Exit");
        let top = if last_rules.is_some() { 3 } else { 2 };
        let (rules, custom) = match console.borrow_mut().prompt_number("Choose:", 0, top)? {
            Input::Quit | Input::Value(0) => return Ok(()),
            Input::Value(1) => (Rules::classic(), false),
            Input::Value(2) => match prompt_rules(console)? {
                Input::Value(rules) => (rules, true),
                Input::Quit => return Ok(()),
            },
            Input::Value(_) => match last_rules.clone() {
                Some(rules) => (rules, false),
                None => continue,
            },
        };
        play_game(console, roster, &rules, custom)?;
        last_rules = Some(rules);
    }
}

/// Builds custom rules from console answers.
fn prompt_rules(console: &SharedConsole) -> Result<Input<Rules>> {
    let mut console = console.borrow_mut();
    let (min, max) = (i64::from(MIN_DIMENSION), i64::from(MAX_DIMENSION));
    let Input::Value(width) = console.prompt_number("Board width?", min, max)? else {
        return Ok(Input::Quit);
    };
    let Input::Value(height) = console.prompt_number("Board height?", min, max)? else {
        return Ok(Input::Quit);
    };
    let Input::Value(line) = console.prompt_number("Marks in a row to win?", min, max)? else {
        return Ok(Input::Quit);
    };
    let Input::Value(errors) = console.prompt_number(
        "Invalid moves tolerated per player (-1 for unlimited)?",
        -1,
        i64::from(MAX_ERRORS),
    )?
    else {
        return Ok(Input::Quit);
    };
    let Input::Value(players) = console.prompt_number(
        "How many players?",
        i64::from(MIN_PLAYERS),
        i64::from(MAX_PLAYERS),
    )?
    else {
        return Ok(Input::Quit);
    };
    let max_errors = if errors < 0 { None } else { Some(errors as u8) };
    let rules = Rules::new(
        width as u8,
        height as u8,
        line as u8,
        max_errors,
        players as u8,
    )?;
    Ok(Input::Value(rules))
}

/// Recruits the contestants, runs one game and hands the seats back.
fn play_game(
    console: &SharedConsole,
    roster: &mut Roster,
    rules: &Rules,
    choose_figures: bool,
) -> Result<()> {
    let Some(mut contestants) = recruit(console, roster, rules, choose_figures)? else {
        return Ok(());
    };
    let outcome = Session::new(rules, &mut contestants).run(&mut ConsoleObserver::new())?;
    info!(?outcome, "session finished");
    disband(roster, contestants)
}

/// Asks for each seat's kind, name and (optionally) figure.
///
/// Returns `None` when somebody types `exit` mid-setup; seats allocated
/// up to that point go back to the roster.
fn recruit(
    console: &SharedConsole,
    roster: &mut Roster,
    rules: &Rules,
    choose_figures: bool,
) -> Result<Option<Vec<Contestant>>> {
    let kinds: Vec<PlayerKind> = PlayerKind::iter().collect();
    let mut figures: Vec<Figure> = Figure::iter().collect();
    let mut contestants = Vec::new();
    for seat in 1..=rules.num_players() {
        println!();
        println!("Player {seat}:");
        for (i, kind) in kinds.iter().enumerate() {
            println!(" {}. {kind}", i + 1);
        }
        let kind = match console
            .borrow_mut()
            .prompt_number("Kind:", 1, kinds.len() as i64)?
        {
            Input::Value(n) => kinds[(n - 1) as usize],
            Input::Quit => {
                disband(roster, contestants)?;
                return Ok(None);
            }
        };
        let name = match console.borrow_mut().prompt_line("Name:")? {
            Input::Value(name) => name,
            Input::Quit => {
                disband(roster, contestants)?;
                return Ok(None);
            }
        };
        let figure = if choose_figures && figures.len() > 1 {
            println!("Figures:");
            for (i, figure) in figures.iter().enumerate() {
                println!(" {}. {figure}", i + 1);
            }
            match console
                .borrow_mut()
                .prompt_number("Figure:", 1, figures.len() as i64)?
            {
                Input::Value(n) => figures.remove((n - 1) as usize),
                Input::Quit => {
                    disband(roster, contestants)?;
                    return Ok(None);
                }
            }
        } else {
            figures.remove(0)
        };
        let strategy: Box<dyn Strategy> = match kind {
            PlayerKind::Human => Box::new(HumanStrategy::new(Rc::clone(console))),
            PlayerKind::Random => Box::new(RandomStrategy::new()),
            PlayerKind::Clever => Box::new(GreedyStrategy::new()),
        };
        let handle = roster.allocate(name)?;
        contestants.push(Contestant::new(handle, figure, strategy));
    }
    Ok(Some(contestants))
}

/// Returns every seat's roster entry.
fn disband(roster: &mut Roster, contestants: Vec<Contestant>) -> Result<()> {
    for contestant in contestants {
        roster.release(contestant.into_handle())?;
    }
    Ok(())
}
