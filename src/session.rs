//! Running a game from first move to verdict.
//!
//! A [`Session`] owns nothing but the turn order: the board and referee
//! are created fresh per game, the contestants are borrowed so the caller
//! can reuse them (and eventually hand their roster entries back).

use crate::board::Board;
use crate::figure::Figure;
use crate::moves::{Move, MoveResult};
use crate::players::{Proposal, Strategy};
use crate::referee::{Objection, Referee, Ruling, Warning};
use crate::roster::{Identity, PlayerHandle, PlayerId};
use crate::rules::Rules;
use tracing::{info, instrument};

/// One seat at the table: an identity, its figure and its brain.
pub struct Contestant {
    handle: PlayerHandle,
    figure: Figure,
    strategy: Box<dyn Strategy>,
}

impl Contestant {
    /// Seats a player with its figure and strategy.
    pub fn new(handle: PlayerHandle, figure: Figure, strategy: Box<dyn Strategy>) -> Self {
        Self {
            handle,
            figure,
            strategy,
        }
    }

    /// Who is sitting here.
    pub fn identity(&self) -> &Identity {
        self.handle.identity()
    }

    /// The figure this contestant marks cells with.
    pub fn figure(&self) -> Figure {
        self.figure
    }

    /// Tears the seat down, returning the roster handle for release.
    pub fn into_handle(self) -> PlayerHandle {
        self.handle
    }
}

/// Everything worth narrating about a game in progress.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A game began under the given rules.
    Started {
        /// The rules in force.
        rules: Rules,
    },
    /// A move passed inspection and went onto the board.
    MoveAccepted {
        /// The accepted move.
        mov: Move,
    },
    /// A move was turned away.
    MoveRejected {
        /// Who offered it.
        player: Identity,
        /// Why it was turned away.
        objection: Objection,
        /// The running error count, when errors are limited.
        warning: Option<Warning>,
    },
    /// Somebody completed a line.
    Won {
        /// The winner.
        winner: Identity,
    },
    /// The board filled up with no line completed.
    Draw,
    /// A contestant exhausted the referee's patience.
    Disqualified {
        /// Who was removed.
        player: Identity,
        /// Who is still playing.
        remaining: Vec<Identity>,
    },
}

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The named player completed a line, or outlasted everyone else.
    Won(Identity),
    /// The board filled with no winner.
    Draw,
    /// A contestant asked to leave mid-game.
    Aborted,
    /// Fewer than two contestants showed up.
    NoContest,
}

/// Receives narration as the session unfolds.
pub trait Observer {
    /// The board changed.
    fn board_updated(&mut self, board: &Board);
    /// Something noteworthy happened.
    fn note(&mut self, event: &GameEvent);
}

/// Observer that ignores everything (useful for silent simulations).
#[derive(Debug, Default)]
pub struct SilentObserver;

impl Observer for SilentObserver {
    fn board_updated(&mut self, _board: &Board) {}
    fn note(&mut self, _event: &GameEvent) {}
}

/// Drives one game over a borrowed set of contestants.
pub struct Session<'a> {
    rules: &'a Rules,
    contestants: &'a mut [Contestant],
}

impl<'a> Session<'a> {
    /// Prepares a session; nothing happens until [`Session::run`].
    pub fn new(rules: &'a Rules, contestants: &'a mut [Contestant]) -> Self {
        Self { rules, contestants }
    }

    /// Plays one full game.
    ///
    /// Turns go round-robin in seating order. A rejected move gives the
    /// same contestant another try (unless the referee disqualifies
    /// them), a disqualification removes the seat without skipping
    /// anyone, and a single survivor wins outright. A [`Proposal::Quit`]
    /// ends the game immediately with no result notifications.
    #[instrument(skip(self, observer))]
    pub fn run(&mut self, observer: &mut dyn Observer) -> anyhow::Result<SessionOutcome> {
        if self.contestants.len() < 2 {
            info!(contestants = self.contestants.len(), "not enough players");
            return Ok(SessionOutcome::NoContest);
        }

        let mut board = Board::new(self.rules.board_width(), self.rules.board_height());
        for contestant in self.contestants.iter() {
            board.register_figure(contestant.handle.id(), contestant.figure);
        }
        let mut referee = Referee::new();
        referee.review_rules(self.rules);
        let order: Vec<PlayerId> = self.contestants.iter().map(|c| c.handle.id()).collect();
        for contestant in self.contestants.iter_mut() {
            contestant.strategy.review_rules(self.rules, &order);
        }

        observer.note(&GameEvent::Started {
            rules: self.rules.clone(),
        });
        observer.board_updated(&board);

        let rules = self.rules;
        let mut active: Vec<usize> = (0..self.contestants.len()).collect();
        let mut turn = 0usize;
        loop {
            let idx = active[turn];
            let active_ids: Vec<PlayerId> = active
                .iter()
                .map(|&i| self.contestants[i].handle.id())
                .collect();

            // One attempt per iteration; rejected moves come back here.
            let (identity, offered, result) = loop {
                let Contestant {
                    handle,
                    figure,
                    strategy,
                } = &mut self.contestants[idx];
                let identity = handle.identity().clone();
                let proposal =
                    strategy.make_move(board.clone(), &active_ids, &identity, *figure)?;
                let (offered, ruling) = match proposal {
                    Proposal::Quit => {
                        info!(player = %identity, "player left the game");
                        return Ok(SessionOutcome::Aborted);
                    }
                    Proposal::Stumped => {
                        (None, referee.commit_move(&identity, None, &mut board, rules)?)
                    }
                    Proposal::Play(mov) => {
                        let ruling =
                            referee.commit_move(&identity, Some(&mov), &mut board, rules)?;
                        (Some(mov), ruling)
                    }
                };
                match ruling {
                    Ruling::Rejected { objection, warning } => {
                        observer.note(&GameEvent::MoveRejected {
                            player: identity,
                            objection,
                            warning,
                        });
                    }
                    Ruling::Settled(result) => break (identity, offered, result),
                }
            };

            match result {
                MoveResult::Continue => {
                    if let Some(mov) = offered {
                        observer.note(&GameEvent::MoveAccepted { mov });
                    }
                    observer.board_updated(&board);
                    turn = (turn + 1) % active.len();
                }
                MoveResult::Win => {
                    if let Some(mov) = offered {
                        observer.note(&GameEvent::MoveAccepted { mov });
                    }
                    observer.board_updated(&board);
                    return Ok(self.declare_winner(identity, observer));
                }
                MoveResult::Deadlock => {
                    if let Some(mov) = offered {
                        observer.note(&GameEvent::MoveAccepted { mov });
                        observer.board_updated(&board);
                    }
                    info!("deadlock");
                    for contestant in self.contestants.iter_mut() {
                        contestant.strategy.on_deadlock();
                    }
                    observer.note(&GameEvent::Draw);
                    return Ok(SessionOutcome::Draw);
                }
                MoveResult::Disqualified => {
                    active.remove(turn);
                    let remaining: Vec<Identity> = active
                        .iter()
                        .map(|&i| self.contestants[i].handle.identity().clone())
                        .collect();
                    let remaining_ids: Vec<PlayerId> = active
                        .iter()
                        .map(|&i| self.contestants[i].handle.id())
                        .collect();
                    info!(player = %identity, "disqualified");
                    for contestant in self.contestants.iter_mut() {
                        contestant
                            .strategy
                            .on_disqualification(identity.id, &remaining_ids);
                    }
                    observer.note(&GameEvent::Disqualified {
                        player: identity,
                        remaining,
                    });
                    if active.len() == 1 {
                        let survivor = self.contestants[active[0]].handle.identity().clone();
                        return Ok(self.declare_winner(survivor, observer));
                    }
                    // The removed seat's successor moved into this slot.
                    if turn >= active.len() {
                        turn = 0;
                    }
                }
            }
        }
    }

    fn declare_winner(&mut self, winner: Identity, observer: &mut dyn Observer) -> SessionOutcome {
        info!(winner = %winner, "game over");
        for contestant in self.contestants.iter_mut() {
            contestant.strategy.on_win(winner.id);
        }
        observer.note(&GameEvent::Won {
            winner: winner.clone(),
        });
        SessionOutcome::Won(winner)
    }
}
