//! End-to-end flows through the engine, from triggers to rendered output

use std::cell::RefCell;
use std::rc::Rc;

use panedock_app::config::Settings;
use panedock_app::message::Message;
use panedock_app::{Engine, EngineEvent, InputKey};
use panedock_core::{PanelEvent, PanelEventKind, WidgetType};
use panedock_tui::render::view;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen(engine: &Engine) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| view(frame, &engine.state))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn key(engine: &mut Engine, c: char) {
    engine.process_message(Message::Key(InputKey::Char(c)));
}

#[test]
fn incrementor_and_watcher_share_the_count() {
    let mut engine = Engine::new(Settings::default());

    key(&mut engine, 'i');
    key(&mut engine, 'w');

    let widgets = engine.state.store.widgets.all();
    assert_eq!(widgets.len(), 2);
    assert_eq!(widgets[0].kind, WidgetType::Incrementor);
    assert!(!widgets[0].active);
    assert_eq!(widgets[1].kind, WidgetType::Watcher);
    assert!(!widgets[1].active);

    let incrementor = widgets[0].id.clone();
    engine.process_message(Message::PressPanel {
        id: incrementor.clone(),
    });
    engine.process_message(Message::PressPanel { id: incrementor });
    assert_eq!(engine.state.store.counter.value(), 2);

    // The watcher is the current tab, so its text is on screen
    assert!(screen(&engine).contains("The current count is 2"));
}

#[test]
fn closing_a_panel_removes_it_from_the_registry() {
    let mut engine = Engine::new(Settings::default());
    key(&mut engine, 'd');
    let id = engine.state.store.widgets.all()[0].id.clone();

    let deleted: Rc<RefCell<Vec<PanelEvent>>> = Rc::default();
    let sink = deleted.clone();
    engine.shell().add_event_listener(
        PanelEventKind::Deleted,
        Box::new(move |e: &PanelEvent| sink.borrow_mut().push(e.clone())),
    );

    engine.process_message(Message::CloseTab { id: id.clone() });

    let seen = deleted.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].id(), id);
    assert_eq!(seen[0].detail.name, "Decrementor 1");

    assert!(!engine.state.store.widgets.contains(&id));
    // Still tracked as materialized: ids are never pruned
    assert!(engine.state.layout.is_materialized(&id));
    assert!(engine.state.layout.dock().is_empty());
}

#[test]
fn readding_after_close_gets_a_fresh_panel() {
    let mut engine = Engine::new(Settings::default());
    key(&mut engine, 'w');
    engine.process_message(Message::CloseCurrentTab);
    key(&mut engine, 'w');

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.tabs, vec!["widget-2"]);
    assert_eq!(snapshot.materialized, vec!["widget-1", "widget-2"]);
    assert!(screen(&engine).contains("Watcher 2"));
}

#[test]
fn tab_keys_activate_registry_entries() {
    let mut engine = Engine::new(Settings::default());
    let mut events = engine.subscribe();
    key(&mut engine, 'i');
    key(&mut engine, 'd');
    key(&mut engine, '1');

    let widgets = engine.state.store.widgets.all();
    assert!(widgets[0].active);
    assert!(!widgets[1].active);

    let mut activated = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let EngineEvent::PanelActivated { id } = event {
            activated.push(id);
        }
    }
    assert_eq!(activated, vec!["widget-1"]);
}

#[test]
fn quit_key_stops_the_engine() {
    let mut engine = Engine::new(Settings::default());
    key(&mut engine, 'q');
    assert!(engine.should_quit());
}
