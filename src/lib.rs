//! CrossZeros library - N-in-a-row games on rectangular boards
//!
//! Classic crosses-and-noughts generalized: boards up to 100x100, win
//! lines of any length, up to five players, human or computer.
//!
//! # Architecture
//!
//! - **Board**: the grid of cells and registered player figures
//! - **Rules**: game parameters and win detection
//! - **Referee**: validates moves, tracks errors, settles the game
//! - **Players**: pluggable [`Strategy`] implementations
//! - **Session**: the round-robin turn loop with observer narration
//!
//! # Example
//!
//! ```
//! use crosszeros::{
//!     Contestant, Figure, GreedyStrategy, RandomStrategy, Roster, Rules, Session,
//!     SilentObserver,
//! };
//!
//! # fn example() -> anyhow::Result<()> {
//! let rules = Rules::classic();
//! let mut roster = Roster::new();
//! let mut contestants = vec![
//!     Contestant::new(
//!         roster.allocate("Clever")?,
//!         Figure::Cross,
//!         Box::new(GreedyStrategy::new()),
//!     ),
//!     Contestant::new(
//!         roster.allocate("Shooter")?,
//!         Figure::Nought,
//!         Box::new(RandomStrategy::new()),
//!     ),
//! ];
//! let outcome = Session::new(&rules, &mut contestants).run(&mut SilentObserver)?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod cli;
mod console;
mod coordinates;
mod error;
mod evaluator;
mod figure;
mod moves;
mod players;
mod referee;
mod roster;
mod rules;
mod session;

// Public API re-exports
pub use board::{Board, Cell};
pub use cli::{Cli, Command};
pub use console::{parse_coordinates, render_board, Console, ConsoleObserver, Input};
pub use coordinates::{index_to_letters, letters_to_index, Coordinates};
pub use error::{BoardError, ConfigError, RosterError};
pub use evaluator::score_for;
pub use figure::Figure;
pub use moves::{Move, MoveResult};
pub use players::{
    GreedyStrategy, HumanStrategy, PlayerKind, Proposal, RandomStrategy, Strategy,
};
pub use referee::{Objection, Referee, Ruling, Warning};
pub use roster::{Identity, PlayerHandle, PlayerId, Roster, ROSTER_CAPACITY};
pub use rules::{
    Rules, MAX_DIMENSION, MAX_ERRORS, MAX_PLAYERS, MIN_DIMENSION, MIN_PLAYERS,
};
pub use session::{
    Contestant, GameEvent, Observer, Session, SessionOutcome, SilentObserver,
};
