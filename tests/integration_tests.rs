//! Integration tests for the frame controller

use tick_tetris::core::{GameState, SequenceSource, SimpleRng, Tetromino};
use tick_tetris::types::{
    BlockType, GameColor, HeldKeys, LogicalKey, Rotation, BOARD_WIDTH, GRAVITY_DELAY_FRAMES,
    SPAWN_X, SPAWN_Y,
};

fn idle() -> HeldKeys {
    HeldKeys::new()
}

fn run(game: &mut GameState, rng: &mut SequenceSource, keys: HeldKeys, frames: u32) {
    for _ in 0..frames {
        game.step(keys, rng);
    }
}

#[test]
fn test_spawn_uses_next_int_mod_seven() {
    let mut game = GameState::new();
    let mut rng = SequenceSource::new(vec![18]);

    let report = game.step(idle(), &mut rng);

    // 18 mod 7 = 4 -> S
    assert_eq!(report.spawned, Some(BlockType::S));
    let piece = game.active().unwrap();
    assert_eq!((piece.x, piece.y, piece.rotation), (SPAWN_X, SPAWN_Y, Rotation::Deg0));
}

#[test]
fn test_gravity_fires_on_31st_call_then_every_31() {
    let mut game = GameState::new();
    let mut rng = SequenceSource::of_blocks(&[BlockType::I]);

    run(&mut game, &mut rng, idle(), GRAVITY_DELAY_FRAMES);
    assert_eq!(game.active().unwrap().y, SPAWN_Y);

    game.step(idle(), &mut rng);
    assert_eq!(game.active().unwrap().y, SPAWN_Y - 1);

    run(&mut game, &mut rng, idle(), GRAVITY_DELAY_FRAMES);
    assert_eq!(game.active().unwrap().y, SPAWN_Y - 1);
    game.step(idle(), &mut rng);
    assert_eq!(game.active().unwrap().y, SPAWN_Y - 2);
}

#[test]
fn test_held_key_acts_once_per_cooldown_window() {
    let mut game = GameState::new();
    let mut rng = SequenceSource::of_blocks(&[BlockType::I]);
    game.set_active(Some(Tetromino::at(BlockType::I, 5, 10)));

    // Fires on frames 1 and 8 of 14.
    run(&mut game, &mut rng, idle().with(LogicalKey::Left), 14);
    assert_eq!(game.active().unwrap().x, 3);

    // Frame 15 fires again.
    game.step(idle().with(LogicalKey::Left), &mut rng);
    assert_eq!(game.active().unwrap().x, 2);
}

#[test]
fn test_piece_keeps_inside_walls_under_held_keys() {
    let mut game = GameState::new();
    let mut rng = SequenceSource::of_blocks(&[BlockType::I]);

    run(&mut game, &mut rng, idle().with(LogicalKey::Right), 200);
    let cells = game.active().unwrap().cells();
    assert!(cells.iter().all(|&(x, _)| x < BOARD_WIDTH as i8));
    assert_eq!(cells.iter().map(|&(x, _)| x).max(), Some(BOARD_WIDTH as i8 - 1));
}

#[test]
fn test_freeze_fills_row_and_sweep_clears_it_same_frame() {
    let mut game = GameState::new();
    let mut rng = SequenceSource::of_blocks(&[BlockType::T]);

    // Floor row complete except the two columns an O at x=6 will fill.
    for x in (0..6).chain(8..BOARD_WIDTH as i8) {
        game.board_mut().set_cell(x, 0, Some(GameColor::Red));
    }
    game.set_active(Some(Tetromino::at(BlockType::O, 6, 0)));
    assert!(game.is_grounded());

    run(&mut game, &mut rng, idle(), GRAVITY_DELAY_FRAMES);
    assert_eq!(game.board().filled_count(), 8);

    let report = game.step(idle(), &mut rng);
    assert!(report.froze);
    assert_eq!(report.collapsed.as_slice(), &[0]);
    assert_eq!(report.spawned, Some(BlockType::T));

    // The O's upper half dropped into row 0.
    assert_eq!(game.board().filled_count(), 2);
    assert_eq!(game.board().cell_at(6, 0), Some(Some(GameColor::Yellow)));
    assert_eq!(game.board().cell_at(7, 0), Some(Some(GameColor::Yellow)));
    assert_eq!(game.piece_id(), 1);
}

#[test]
fn test_soft_drop_lands_piece_on_stack() {
    let mut game = GameState::new();
    let mut rng = SequenceSource::of_blocks(&[BlockType::O]);
    for x in 0..BOARD_WIDTH as i8 {
        if x != 5 {
            game.board_mut().set_cell(x, 0, Some(GameColor::Blue));
        }
    }
    game.set_active(Some(Tetromino::at(BlockType::O, 0, 5)));

    // Four drops (frames 1, 8, 15, 22) bring the O from y=5 to y=1, resting on row 0.
    run(&mut game, &mut rng, idle().with(LogicalKey::SoftDrop), 28);
    let piece = game.active().unwrap();
    assert_eq!(piece.y, 1);
    assert!(game.is_grounded());

    // Grounded: further drops are refused.
    run(&mut game, &mut rng, idle().with(LogicalKey::SoftDrop), 2);
    assert_eq!(game.active().unwrap().y, 1);
}

#[test]
fn test_quit_sets_flag_and_is_reported() {
    let mut game = GameState::new();
    let mut rng = SequenceSource::of_blocks(&[BlockType::L]);

    assert!(!game.step(idle(), &mut rng).quit_requested);
    let report = game.step(idle().with(LogicalKey::Quit), &mut rng);
    assert!(report.quit_requested);
    assert!(game.quit_requested());
}

#[test]
fn test_long_run_is_deterministic_for_a_seed() {
    let play = |seed: u32| {
        let mut game = GameState::new();
        let mut rng = SimpleRng::new(seed);
        for frame in 0..3_000u32 {
            let keys = match frame % 40 {
                0..=4 => idle().with(LogicalKey::Left),
                10..=12 => idle().with(LogicalKey::Rotate),
                20..=29 => idle().with(LogicalKey::Right),
                _ => idle().with(LogicalKey::SoftDrop),
            };
            game.step(keys, &mut rng);
        }
        game
    };

    let a = play(7);
    let b = play(7);
    assert_eq!(a, b);
    assert_eq!(a.frame(), 3_000);
    assert!(a.piece_id() > 1);
}
