mod common;

use common::*;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use health_feed::ui::input::{handle_key, handle_mouse};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn enter_and_space_tap() {
    let (mut app, store) = make_app_with_items(3);
    handle_key(&mut app, press(KeyCode::Enter));
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(store.click_count(), 2);
}

#[test]
fn release_events_are_ignored() {
    let (mut app, store) = make_app_with_items(3);
    let mut key = press(KeyCode::Enter);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert_eq!(store.click_count(), 0);
}

#[test]
fn arrows_and_vim_keys_move_selection() {
    let (mut app, _) = make_app_with_items(5);
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Char('j')));
    assert_eq!(app.home().selected, 2);
    handle_key(&mut app, press(KeyCode::Up));
    handle_key(&mut app, press(KeyCode::Char('k')));
    handle_key(&mut app, press(KeyCode::Char('k')));
    assert_eq!(app.home().selected, 0);
}

#[test]
fn quit_keys() {
    for key in [
        press(KeyCode::Char('q')),
        press(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let (mut app, _) = make_app("Alex");
        handle_key(&mut app, key);
        assert!(app.should_quit());
    }
}

#[test]
fn ctrl_shift_c_does_not_quit() {
    let (mut app, _) = make_app("Alex");
    for code in [KeyCode::Char('c'), KeyCode::Char('C')] {
        handle_key(
            &mut app,
            KeyEvent::new(code, KeyModifiers::CONTROL | KeyModifiers::SHIFT),
        );
    }
    assert!(!app.should_quit());

    handle_key(&mut app, KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn left_click_taps_card_under_pointer() {
    let (mut app, store) = make_app_with_items(3);
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 4, 5));
    assert_eq!(store.click_count(), 1);
    assert_eq!(app.home().selected, 0);
}

#[test]
fn right_click_and_move_do_not_tap() {
    let (mut app, store) = make_app_with_items(3);
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Right), 4, 5));
    handle_mouse(&mut app, mouse(MouseEventKind::Moved, 4, 5));
    assert_eq!(store.click_count(), 0);
}

#[test]
fn wheel_scrolls_list() {
    let (mut app, _) = make_app_with_items(10);
    handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 4, 5));
    handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 4, 5));
    assert_eq!(app.home().scroll, 2);
    handle_mouse(&mut app, mouse(MouseEventKind::ScrollUp, 4, 5));
    assert_eq!(app.home().scroll, 1);
}
