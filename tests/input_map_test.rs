use arena_tetris::core::Session;
use arena_tetris::input::{map_key, should_quit};
use arena_tetris::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn arrow_keys_drive_the_active_piece() {
    assert_eq!(map_key(key(KeyCode::Left)), Some(GameAction::MoveLeft));
    assert_eq!(map_key(key(KeyCode::Right)), Some(GameAction::MoveRight));
    assert_eq!(map_key(key(KeyCode::Down)), Some(GameAction::SoftDrop));
    assert_eq!(map_key(key(KeyCode::Up)), Some(GameAction::RotateCw));
    assert_eq!(map_key(key(KeyCode::Char('z'))), Some(GameAction::RotateCcw));
}

#[test]
fn enter_starts_and_q_quits() {
    assert_eq!(map_key(key(KeyCode::Enter)), Some(GameAction::Start));
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(key(KeyCode::Char('c'))));
    assert_eq!(map_key(key(KeyCode::F(5))), None);
}

#[test]
fn mapped_keys_play_a_session() {
    let mut session = Session::new(8);

    // Ignored until started.
    let left = map_key(key(KeyCode::Left)).unwrap();
    assert!(!session.apply_action(left));

    session.apply_action(map_key(key(KeyCode::Enter)).unwrap());
    let x0 = session.active().unwrap().x;
    assert!(session.apply_action(left));
    assert_eq!(session.active().unwrap().x, x0 - 1);
}
