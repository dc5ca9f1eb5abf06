//! A strategy that asks a person at the terminal.

use crate::board::Board;
use crate::console::{render_board, Console, Input};
use crate::figure::Figure;
use crate::moves::Move;
use crate::players::{Proposal, Strategy};
use crate::roster::{Identity, PlayerId};
use crate::rules::Rules;
use std::cell::RefCell;
use std::rc::Rc;

/// Relays the person's typed coordinates as move proposals.
///
/// The console is shared with the rest of the session through an
/// `Rc<RefCell<_>>`, so several human contestants can take turns on the
/// same terminal.
pub struct HumanStrategy {
    console: Rc<RefCell<Console>>,
    rules: Option<Rules>,
}

impl HumanStrategy {
    /// Creates a strategy that prompts on the given console.
    pub fn new(console: Rc<RefCell<Console>>) -> Self {
        Self {
            console,
            rules: None,
        }
    }
}

impl Strategy for HumanStrategy {
    fn review_rules(&mut self, rules: &Rules, _player_order: &[PlayerId]) {
        self.rules = Some(rules.clone());
    }

    fn make_move(
        &mut self,
        board: Board,
        _active: &[PlayerId],
        me: &Identity,
        figure: Figure,
    ) -> anyhow::Result<Proposal> {
        let rules = self.rules.clone().unwrap_or_else(Rules::classic);
        println!();
        println!("{} ({figure}), your move.", me.name);
        println!("{}", render_board(&board));
        match self.console.borrow_mut().prompt_coordinates(&rules)? {
            Input::Value(coordinates) => Ok(Proposal::Play(Move::new(
                coordinates,
                me.clone(),
                figure,
            ))),
            Input::Quit => Ok(Proposal::Quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Coordinates;
    use crate::roster::Roster;
    use std::io::Cursor;

    fn scripted(script: &str) -> HumanStrategy {
        let console = Console::new(Box::new(Cursor::new(script.as_bytes().to_vec())));
        HumanStrategy::new(Rc::new(RefCell::new(console)))
    }

    #[test]
    fn test_typed_coordinates_become_a_proposal() {
        let mut roster = Roster::new();
        let handle = roster.allocate("Ann").unwrap();
        let me = handle.identity().clone();
        let mut strategy = scripted("b2\n");
        strategy.review_rules(&Rules::classic(), &[me.id]);
        let proposal = strategy
            .make_move(Board::new(3, 3), &[me.id], &me, Figure::Cross)
            .unwrap();
        assert_eq!(
            proposal,
            Proposal::Play(Move::new(Coordinates::new(1, 2), me, Figure::Cross))
        );
    }

    #[test]
    fn test_exit_becomes_quit() {
        let mut roster = Roster::new();
        let handle = roster.allocate("Ann").unwrap();
        let me = handle.identity().clone();
        let mut strategy = scripted("exit\n");
        let proposal = strategy
            .make_move(Board::new(3, 3), &[me.id], &me, Figure::Nought)
            .unwrap();
        assert_eq!(proposal, Proposal::Quit);
    }
}
