//! Full-screen rendering tests

use super::view;
use crate::test_utils::TestTerminal;
use panedock_app::config::Settings;
use panedock_app::message::Message;
use panedock_app::Engine;
use panedock_core::WidgetType;

fn render(engine: &Engine) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &engine.state));
    term
}

#[test]
fn test_empty_dock_shows_hint() {
    let engine = Engine::new(Settings::default());
    let term = render(&engine);

    assert!(term.buffer_contains("[i] Add Incrementor!"));
    assert!(term.buffer_contains("No panels open"));
}

#[test]
fn test_watcher_follows_two_increments() {
    let mut engine = Engine::new(Settings::default());
    engine.process_message(Message::AddPanel(WidgetType::Incrementor));
    engine.process_message(Message::AddPanel(WidgetType::Watcher));
    engine.process_message(Message::FocusTabIndex(0));
    engine.process_message(Message::PressCurrentPanel);
    engine.process_message(Message::PressCurrentPanel);
    engine.process_message(Message::FocusTabIndex(1));

    let term = render(&engine);
    assert!(term.buffer_contains("Incrementor 1 ×"));
    assert!(term.buffer_contains("Watcher 2 ×"));
    assert!(term.buffer_contains("The current count is 2"));
}

#[test]
fn test_current_tab_content_is_shown() {
    let mut engine = Engine::new(Settings::default());
    engine.process_message(Message::AddPanel(WidgetType::Decrementor));

    let term = render(&engine);
    assert!(term.buffer_contains("[ Decrement Count ]"));
    assert!(!term.buffer_contains("No panels open"));
}

#[test]
fn test_closed_tab_disappears() {
    let mut engine = Engine::new(Settings::default());
    engine.process_message(Message::AddPanel(WidgetType::Watcher));
    engine.process_message(Message::CloseCurrentTab);

    let term = render(&engine);
    assert!(!term.buffer_contains("Watcher 1"));
    assert!(term.buffer_contains("No panels open"));
}

#[test]
fn test_unclosable_panels_have_no_glyph() {
    let mut settings = Settings::default();
    settings.behavior.closable_panels = false;
    let mut engine = Engine::new(settings);
    engine.process_message(Message::AddPanel(WidgetType::Watcher));

    let term = render(&engine);
    assert!(term.buffer_contains("Watcher 1"));
    assert!(!term.buffer_contains("×"));
}

#[test]
fn test_long_titles_are_truncated() {
    let mut settings = Settings::default();
    settings.ui.tab_title_max = 6;
    let mut engine = Engine::new(settings);
    engine.process_message(Message::AddPanel(WidgetType::Incrementor));

    let term = render(&engine);
    assert!(term.buffer_contains("Incre…"));
}

#[test]
fn test_confirm_dialog_overlay() {
    let mut settings = Settings::default();
    settings.behavior.confirm_quit = true;
    let mut engine = Engine::new(settings);
    engine.process_message(Message::AddPanel(WidgetType::Watcher));
    engine.process_message(Message::RequestQuit);

    let term = render(&engine);
    assert!(term.buffer_contains("Quit panedock?"));
    assert!(term.buffer_contains("1 panel is open."));
}

#[test]
fn test_dock_follows_outer_layout_on_resize() {
    let mut engine = Engine::new(Settings::default());
    let term = render(&engine);
    assert_eq!(term.buffer()[(79, 3)].symbol(), "╮");

    engine.process_message(Message::Resize {
        width: 40,
        height: 24,
    });
    let term = render(&engine);
    assert_eq!(term.buffer()[(39, 3)].symbol(), "╮");
    assert_eq!(term.buffer()[(79, 3)].symbol(), " ");
}
