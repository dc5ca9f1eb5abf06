//! End-to-end games driven through the public API.

use crosszeros::{
    Board, Contestant, Coordinates, Figure, GameEvent, GreedyStrategy, Identity, Move, Observer,
    PlayerId, Proposal, Roster, Rules, Session, SessionOutcome, SilentObserver, Strategy, Warning,
};

/// Plays from a fixed list of coordinates, then runs out of ideas.
struct Scripted {
    plan: Vec<Coordinates>,
    next: usize,
}

impl Scripted {
    fn seat(plan: &[(u8, u8)]) -> Box<Self> {
        Box::new(Self {
            plan: plan
                .iter()
                .map(|&(x, y)| Coordinates::new(x, y))
                .collect(),
            next: 0,
        })
    }
}

impl Strategy for Scripted {
    fn make_move(
        &mut self,
        _board: Board,
        _active: &[PlayerId],
        me: &Identity,
        figure: Figure,
    ) -> anyhow::Result<Proposal> {
        let Some(&coordinates) = self.plan.get(self.next) else {
            return Ok(Proposal::Stumped);
        };
        self.next += 1;
        Ok(Proposal::Play(Move::new(coordinates, me.clone(), figure)))
    }
}

/// Keeps every event for later inspection.
#[derive(Default)]
struct Recording {
    events: Vec<GameEvent>,
    boards_seen: usize,
}

impl Observer for Recording {
    fn board_updated(&mut self, _board: &Board) {
        self.boards_seen += 1;
    }

    fn note(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

fn contestants(
    roster: &mut Roster,
    plans: &[&[(u8, u8)]],
) -> Vec<Contestant> {
    let figures = [
        Figure::Cross,
        Figure::Nought,
        Figure::Star,
        Figure::Stop,
        Figure::Check,
    ];
    plans
        .iter()
        .enumerate()
        .map(|(i, plan)| {
            let handle = roster.allocate(format!("player{i}")).unwrap();
            Contestant::new(handle, figures[i], Scripted::seat(plan))
        })
        .collect()
}

#[test]
fn test_diagonal_line_wins() {
    let mut roster = Roster::new();
    let mut seats = contestants(
        &mut roster,
        &[&[(0, 0), (1, 1), (2, 2)], &[(1, 0), (2, 0)]],
    );
    let rules = Rules::classic();
    let mut recording = Recording::default();
    let outcome = Session::new(&rules, &mut seats)
        .run(&mut recording)
        .unwrap();

    let winner = seats[0].identity().clone();
    assert_eq!(outcome, SessionOutcome::Won(winner.clone()));
    assert!(matches!(
        recording.events.last(),
        Some(GameEvent::Won { winner: w }) if *w == winner
    ));
    // Start, five accepted moves, the verdict.
    let accepted = recording
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveAccepted { .. }))
        .count();
    assert_eq!(accepted, 5);
    // The empty board plus one render per accepted move.
    assert_eq!(recording.boards_seen, 6);
}

#[test]
fn test_second_error_disqualifies_and_play_goes_on() {
    // Three seats; the third one only ever points off the board.
    let rules = Rules::new(3, 3, 3, Some(1), 3).unwrap();
    let mut roster = Roster::new();
    let mut seats = contestants(
        &mut roster,
        &[
            &[(0, 0), (1, 0), (2, 0)],
            &[(0, 1), (1, 1)],
            &[(9, 9), (9, 9)],
        ],
    );
    let mut recording = Recording::default();
    let outcome = Session::new(&rules, &mut seats)
        .run(&mut recording)
        .unwrap();

    let winner = seats[0].identity().clone();
    let offender = seats[2].identity().clone();
    assert_eq!(outcome, SessionOutcome::Won(winner));

    // First offense warns, second removes the seat.
    let warnings: Vec<&Warning> = recording
        .events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MoveRejected {
                warning: Some(w), ..
            } => Some(w),
            _ => None,
        })
        .collect();
    assert_eq!(warnings, vec![&Warning { used: 1, allowed: 1 }]);
    assert!(recording.events.iter().any(|e| matches!(
        e,
        GameEvent::Disqualified { player, remaining }
            if *player == offender && remaining.len() == 2
    )));
}

#[test]
fn test_longer_board_draw() {
    // 3x4 board, win length 4: fill column-striped so no line forms.
    //   x o x
    //   x o x
    //   o x o
    //   o x o
    let rules = Rules::new(3, 4, 4, Some(10), 2).unwrap();
    let mut roster = Roster::new();
    let mut seats = contestants(
        &mut roster,
        &[
            &[(0, 0), (2, 0), (0, 1), (2, 1), (1, 2), (1, 3)],
            &[(1, 0), (1, 1), (0, 2), (2, 2), (0, 3), (2, 3)],
        ],
    );
    let outcome = Session::new(&rules, &mut seats)
        .run(&mut SilentObserver)
        .unwrap();
    assert_eq!(outcome, SessionOutcome::Draw);
}

#[test]
fn test_computer_opponents_finish_the_game() {
    let rules = Rules::classic();
    let mut roster = Roster::new();
    let mut seats = vec![
        Contestant::new(
            roster.allocate("clever").unwrap(),
            Figure::Cross,
            Box::new(GreedyStrategy::new()),
        ),
        Contestant::new(
            roster.allocate("clever too").unwrap(),
            Figure::Nought,
            Box::new(GreedyStrategy::new()),
        ),
    ];
    let outcome = Session::new(&rules, &mut seats)
        .run(&mut SilentObserver)
        .unwrap();
    assert!(matches!(
        outcome,
        SessionOutcome::Won(_) | SessionOutcome::Draw
    ));
}

#[test]
fn test_seats_return_to_the_roster() {
    let mut roster = Roster::new();
    let mut seats = contestants(&mut roster, &[&[(0, 0)], &[(1, 1)]]);
    let first_id = seats[0].identity().id;
    // Stumped seats on an empty board: both run out of ideas, the first
    // rejection streak ends in disqualification under zero tolerance.
    let rules = Rules::new(3, 3, 3, Some(0), 2).unwrap();
    let _ = Session::new(&rules, &mut seats)
        .run(&mut SilentObserver)
        .unwrap();
    for seat in seats {
        roster.release(seat.into_handle()).unwrap();
    }
    // Released ids are reusable.
    let handle = roster.allocate("fresh").unwrap();
    assert_eq!(handle.id(), first_id);
}
