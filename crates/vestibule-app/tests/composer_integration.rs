//! Integration tests for the composer and session loop.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks against the recording surface: the observed
//! call sequence and the last rendered frame must reflect the expected
//! state.

use vestibule_app::{Session, Slot, TabKind, ViewEvent, WelcomeView};
use vestibule_core::WelcomeConfig;
use vestibule_harness::{
    KeyTranslator, MemoryFragments, RecordingSurface, StaticEnv, StaticStore, SurfaceCall,
};

type TestSession =
    Session<RecordingSurface, StaticEnv, MemoryFragments, StaticStore, KeyTranslator>;

fn session(
    config: WelcomeConfig,
    env: StaticEnv,
    fragments: MemoryFragments,
    store: StaticStore,
) -> TestSession {
    let view = WelcomeView::new(config, env, fragments, store, KeyTranslator);
    Session::new(RecordingSurface::new(), view)
}

#[test]
fn scenario_generated_room_calendar_only() {
    // generateRoomNamesOnLoad, no content flags, desktop 1024, calendar only.
    let config = WelcomeConfig {
        app_name: "Vestibule Meet".into(),
        generate_room_names_on_load: true,
        ..WelcomeConfig::default()
    };
    let mut session = session(
        config,
        StaticEnv::desktop(1024),
        MemoryFragments::new(),
        StaticStore::new(true, false),
    );

    session.attach().unwrap();

    assert!(!session.view().room_name().is_empty());
    assert_eq!(session.surface().injection_count(Slot::Content), 0);
    assert_eq!(session.surface().injection_count(Slot::Toolbar), 0);

    let frame = session.surface().last_frame().unwrap();
    let tabs = frame.tabs.as_ref().unwrap();
    let kinds: Vec<TabKind> = tabs.tabs.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TabKind::Calendar]);
    assert!(!frame.show_responsive_label);
    assert!(!frame.content_slot_populated);
    assert!(!frame.toolbar_slot_populated);
}

#[test]
fn scenario_mobile_with_both_fragments() {
    // All content flags on, fragments present, viewport 400, mobile.
    let config = WelcomeConfig {
        display_additional_content: true,
        display_additional_toolbar_content: true,
        ..WelcomeConfig::default()
    };
    let fragments = MemoryFragments::new()
        .with_welcome_content("<p>promo</p>")
        .with_toolbar_content("<button/>");
    let mut session =
        session(config, StaticEnv::mobile(400), fragments, StaticStore::new(true, true));

    session.attach().unwrap();

    assert_eq!(session.surface().injection_count(Slot::Content), 1);
    assert_eq!(session.surface().injection_count(Slot::Toolbar), 1);

    let frame = session.surface().last_frame().unwrap();
    assert!(frame.tabs.is_none(), "mobile must suppress tabs even with both lists enabled");
    assert!(frame.show_responsive_label);
    assert!(frame.content_slot_populated);
    assert!(frame.toolbar_slot_populated);
}

#[test]
fn double_attach_injects_exactly_once() {
    let config = WelcomeConfig {
        display_additional_content: true,
        display_additional_toolbar_content: true,
        ..WelcomeConfig::default()
    };
    let fragments = MemoryFragments::new()
        .with_welcome_content("<p>promo</p>")
        .with_toolbar_content("<button/>");
    let mut session =
        session(config, StaticEnv::desktop(1024), fragments, StaticStore::new(false, false));

    session.attach().unwrap();
    session.attach().unwrap();

    assert_eq!(session.surface().injection_count(Slot::Content), 1);
    assert_eq!(session.surface().injection_count(Slot::Toolbar), 1);
}

#[test]
fn attach_orders_presentation_before_render() {
    let config = WelcomeConfig {
        app_name: "Vestibule Meet".into(),
        display_additional_content: true,
        ..WelcomeConfig::default()
    };
    let fragments = MemoryFragments::new().with_welcome_content("<p>promo</p>");
    let mut session =
        session(config, StaticEnv::desktop(1024), fragments, StaticStore::new(false, false));

    session.attach().unwrap();

    assert!(matches!(
        session.surface().calls(),
        [
            SurfaceCall::Acquired { title },
            SurfaceCall::Injected { slot: Slot::Content, .. },
            SurfaceCall::Rendered,
        ] if title == "Vestibule Meet"
    ));
}

#[test]
fn detach_releases_presentation_and_keeps_content() {
    let config =
        WelcomeConfig { display_additional_content: true, ..WelcomeConfig::default() };
    let fragments = MemoryFragments::new().with_welcome_content("<p>promo</p>");
    let mut session =
        session(config, StaticEnv::desktop(1024), fragments, StaticStore::new(false, false));

    session.attach().unwrap();
    session.detach().unwrap();

    let call_count = session.surface().calls().len();
    assert!(matches!(session.surface().calls().last(), Some(SurfaceCall::Released)));
    // Injection is a one-time transfer: never undone on detach.
    assert_eq!(session.surface().injection_count(Slot::Content), 1);

    // Released is terminal; further lifecycle events are no-ops.
    session.attach().unwrap();
    session.detach().unwrap();
    assert_eq!(session.surface().calls().len(), call_count);
}

#[test]
fn submit_delegates_valid_room_to_join() {
    let mut session = session(
        WelcomeConfig::default(),
        StaticEnv::desktop(1024),
        MemoryFragments::new(),
        StaticStore::new(false, false),
    );

    session.attach().unwrap();
    session.dispatch(ViewEvent::RoomNameChanged("standup".into())).unwrap();
    session.dispatch(ViewEvent::SubmitRequested).unwrap();

    assert_eq!(session.surface().joins(), ["standup"]);
}

#[test]
fn submit_suppresses_invalid_room() {
    let mut session = session(
        WelcomeConfig::default(),
        StaticEnv::desktop(1024),
        MemoryFragments::new(),
        StaticStore::new(false, false),
    );

    session.attach().unwrap();
    session.dispatch(ViewEvent::RoomNameChanged("bad?name".into())).unwrap();
    session.dispatch(ViewEvent::SubmitRequested).unwrap();

    assert!(session.surface().joins().is_empty());
    // The suppressed submit still re-renders for native validation feedback.
    assert!(matches!(session.surface().calls().last(), Some(SurfaceCall::Rendered)));
}

#[test]
fn room_name_stays_empty_without_generation_flag() {
    let mut session = session(
        WelcomeConfig::default(),
        StaticEnv::desktop(1024),
        MemoryFragments::new(),
        StaticStore::new(false, false),
    );

    session.attach().unwrap();
    assert_eq!(session.view().room_name(), "");
    assert_eq!(session.surface().last_frame().unwrap().room_name, "");
}
