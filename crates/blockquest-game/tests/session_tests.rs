//! Integration tests for editor sessions and star ratings.

use blockquest_game::{
    indents, star_rating, GameError, LevelOutcome, Session, MAX_BLOCKS, PARAM_MAX,
};
use blockquest_levels::{sandbox_grid, LevelError};
use blockquest_types::{Block, BlockKind, Direction, Grid, Level};
use BlockKind::*;

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

/// Goal one step right of the start's neighbour; a star and a gem below.
const DETOUR: &str = "
    #####
    #S.G#
    #*$.#
    #####
";

fn detour() -> Session {
    let grid = Grid::parse(DETOUR).expect("bad test map");
    Session::new(Level::new(grid, 1, 1, Direction::Right))
}

fn session_with(kinds: &[BlockKind]) -> Session {
    let mut session = detour();
    for &kind in kinds {
        session.add(kind).unwrap();
    }
    session
}

fn kinds(session: &Session) -> Vec<BlockKind> {
    session.blocks().iter().map(|b| b.kind).collect()
}

fn flat(kinds: &[BlockKind]) -> Vec<Block> {
    kinds.iter().map(|&k| Block::new("x", k)).collect()
}

// ══════════════════════════════════════════════════════════════════════════════
// Editing
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_add_assigns_ids_and_defaults() {
    let mut session = detour();
    assert_eq!(session.add(MoveRight).unwrap().id, "block_1");
    let repeat = session.add(Repeat).unwrap();
    assert_eq!(repeat.id, "block_2");
    assert_eq!(repeat.param, Some(2));
    assert_eq!(session.blocks()[0].param, None);
}

#[test]
fn test_add_rejects_past_limit() {
    let mut session = detour();
    for _ in 0..MAX_BLOCKS {
        session.add(MoveUp).unwrap();
    }
    assert!(session.is_full());
    assert!(matches!(
        session.add(MoveUp),
        Err(GameError::ProgramFull { max: 20 })
    ));
    assert_eq!(session.len(), MAX_BLOCKS);
}

#[test]
fn test_ids_keep_increasing_after_remove() {
    let mut session = session_with(&[MoveUp, MoveDown]);
    session.remove(0).unwrap();
    assert_eq!(session.add(MoveLeft).unwrap().id, "block_3");
}

#[test]
fn test_remove_and_move() {
    let mut session = session_with(&[MoveUp, MoveDown, MoveLeft]);
    let removed = session.remove(1).unwrap();
    assert_eq!(removed.kind, MoveDown);
    assert_eq!(kinds(&session), vec![MoveUp, MoveLeft]);

    session.move_block(0, 1).unwrap();
    assert_eq!(kinds(&session), vec![MoveLeft, MoveUp]);

    session.add(MoveRight).unwrap();
    session.move_block(0, 99).unwrap();
    assert_eq!(kinds(&session), vec![MoveUp, MoveRight, MoveLeft]);
}

#[test]
fn test_out_of_range_indexes() {
    let mut session = session_with(&[MoveUp]);
    assert!(matches!(
        session.remove(1),
        Err(GameError::IndexOutOfRange { index: 1, len: 1 })
    ));
    assert!(session.move_block(3, 0).is_err());
    assert!(session.indent(1).is_err());
    assert_eq!(session.len(), 1);
}

#[test]
fn test_set_param_clamps() {
    let mut session = session_with(&[Repeat, MoveRight]);
    assert_eq!(session.set_param(0, 0).unwrap(), 1);
    assert_eq!(session.set_param(0, 12).unwrap(), PARAM_MAX);
    assert_eq!(session.blocks()[0].param, Some(9));
    assert!(matches!(
        session.set_param(1, 3),
        Err(GameError::NoParam(MoveRight))
    ));
}

#[test]
fn test_param_steps() {
    let mut session = session_with(&[Repeat]);
    assert_eq!(session.increase_param(0).unwrap(), 3);
    assert_eq!(session.decrease_param(0).unwrap(), 2);
    assert_eq!(session.decrease_param(0).unwrap(), 1);
    assert_eq!(session.decrease_param(0).unwrap(), 1);

    session.set_param(0, 9).unwrap();
    assert_eq!(session.increase_param(0).unwrap(), 9);
}

#[test]
fn test_clear() {
    let mut session = session_with(&[MoveUp, MoveDown]);
    session.clear();
    assert!(session.is_empty());
    assert_eq!(session.add(MoveUp).unwrap().id, "block_3");
}

// ══════════════════════════════════════════════════════════════════════════════
// Indentation
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_indent_loop() {
    assert_eq!(indents(&flat(&[Repeat, MoveRight, EndRepeat, MoveUp])), vec![0, 1, 0, 0]);
}

#[test]
fn test_indent_conditional_with_else() {
    let blocks = flat(&[IfWall, MoveUp, Else, MoveDown, EndIf]);
    assert_eq!(indents(&blocks), vec![0, 1, 0, 1, 0]);
}

#[test]
fn test_indent_nested() {
    let blocks = flat(&[Repeat, IfPath, MoveRight, EndIf, EndRepeat]);
    assert_eq!(indents(&blocks), vec![0, 1, 2, 1, 0]);
}

#[test]
fn test_indent_unbalanced_never_negative() {
    assert_eq!(indents(&flat(&[EndIf, Else, MoveUp, EndRepeat])), vec![0, 0, 1, 0]);
}

#[test]
fn test_session_indent_matches_list() {
    let session = session_with(&[IfStar, MoveUp, EndIf]);
    assert_eq!(session.indent(1).unwrap(), 1);
    assert_eq!(session.indents(), vec![0, 1, 0]);
}

// ══════════════════════════════════════════════════════════════════════════════
// Running and rating
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_run_empty_program() {
    let result = detour().run();
    assert_eq!(result.steps.len(), 1);
    assert!(!result.reached_goal);
    assert_eq!(star_rating(&result), 0);
    assert_eq!(LevelOutcome::from_result(9, &result), None);
}

#[test]
fn test_rating_goal_only() {
    let result = session_with(&[MoveRight, MoveRight]).run();
    assert!(result.reached_goal);
    assert_eq!(star_rating(&result), 1);
}

#[test]
fn test_rating_all_stars_not_perfect() {
    let result = session_with(&[MoveDown, MoveUp, MoveRight, MoveRight]).run();
    assert!(result.reached_goal);
    assert!(result.collected_all_stars());
    assert!(!result.perfect);
    assert_eq!(star_rating(&result), 2);
}

#[test]
fn test_rating_perfect() {
    let result = session_with(&[MoveDown, MoveRight, MoveRight, MoveUp]).run();
    assert!(result.perfect);
    assert_eq!(star_rating(&result), 3);
    assert_eq!(
        LevelOutcome::from_result(4, &result),
        Some(LevelOutcome {
            level_id: 4,
            stars: 3,
            perfect: true
        })
    );
}

#[test]
fn test_session_for_builtin_level() {
    let mut session = Session::for_level(1).unwrap();
    session.add(MoveRight).unwrap();
    session.add(MoveRight).unwrap();
    assert_eq!(star_rating(&session.run()), 3);

    assert!(matches!(
        Session::for_level(201),
        Err(GameError::Level(LevelError::NotFound(201)))
    ));
}

#[test]
fn test_sandbox_session() {
    let mut session = Session::sandbox(sandbox_grid(5, 5));
    assert_eq!(session.add(Repeat).unwrap().id, "cblock_1001");
    session.set_param(0, 4).unwrap();
    session.add(MoveRight).unwrap();
    session.add(EndRepeat).unwrap();
    session.add(Repeat).unwrap();
    session.set_param(3, 4).unwrap();
    session.add(MoveDown).unwrap();
    session.add(EndRepeat).unwrap();
    assert!(session.run().reached_goal);
}
