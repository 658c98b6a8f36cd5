use super::*;

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_white_pawn_single_and_double_step_from_home() {
    let pos = Position::default();
    let moves = pos.legal_moves(sq("e2"));

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "e2", "e3"));
    assert!(has_move(&moves, "e2", "e4"));
}

#[test]
fn test_black_pawn_moves_down_the_board() {
    let pos = Position::default();
    let moves = pos.legal_moves(sq("d7"));

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "d7", "d6"));
    assert!(has_move(&moves, "d7", "d5"));
}

#[test]
fn test_no_double_step_off_home_rank() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e3", Color::White, Type::Pawn);

    let moves = pos.legal_moves(sq("e3"));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "e3", "e4"));
}

#[test]
fn test_double_step_blocked_by_piece_in_between() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e2", Color::White, Type::Pawn);
    place_piece(&mut pos, "e3", Color::Black, Type::Knight);

    assert!(pos.legal_moves(sq("e2")).is_empty(), "Blocked pawn cannot jump");
}

#[test]
fn test_double_step_blocked_on_landing_square() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e2", Color::White, Type::Pawn);
    place_piece(&mut pos, "e4", Color::Black, Type::Knight);

    let moves = pos.legal_moves(sq("e2"));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "e2", "e3"));
}

#[test]
fn test_pawn_captures_diagonally_only_enemies() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", Color::White, Type::Pawn);
    place_piece(&mut pos, "c5", Color::Black, Type::Bishop);
    place_piece(&mut pos, "e5", Color::White, Type::Knight);
    place_piece(&mut pos, "d5", Color::Black, Type::Pawn);

    let moves = pos.legal_moves(sq("d4"));
    assert_eq!(moves.len(), 1, "Only the capture on c5: {:?}", moves);
    assert!(has_move(&moves, "d4", "c5"));
}

#[test]
fn test_pawn_on_edge_does_not_wrap() {
    let mut pos = empty_board();
    place_piece(&mut pos, "h4", Color::White, Type::Pawn);
    place_piece(&mut pos, "a5", Color::Black, Type::Pawn);
    place_piece(&mut pos, "g5", Color::Black, Type::Pawn);

    let moves = pos.legal_moves(sq("h4"));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "h4", "h5"));
    assert!(has_move(&moves, "h4", "g5"));
}
