//! Serialization checks for the domain types that cross process
//! boundaries (saved rule sets, logged moves).

use crosszeros::{Coordinates, Figure, Move, Roster, Rules};

#[test]
fn test_rules_roundtrip() {
    let rules = Rules::new(10, 7, 5, None, 3).unwrap();
    let json = serde_json::to_string(&rules).unwrap();
    let back: Rules = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rules);
}

#[test]
fn test_classic_rules_shape() {
    let json = serde_json::to_value(Rules::classic()).unwrap();
    assert_eq!(json["board_width"], 3);
    assert_eq!(json["win_line_length"], 3);
    assert_eq!(json["max_errors_allowed"], 10);
    assert_eq!(json["num_players"], 2);
}

#[test]
fn test_move_roundtrip() {
    let mut roster = Roster::new();
    let handle = roster.allocate("Ann").unwrap();
    let mov = Move::new(
        Coordinates::new(12, 3),
        handle.identity().clone(),
        Figure::Star,
    );
    let json = serde_json::to_string(&mov).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mov);
}
