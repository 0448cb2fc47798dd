//! View composer state machine.
//!
//! This module defines the [`WelcomeView`] state machine, which manages the
//! welcome surface's session-local state completely decoupled from any
//! rendering runtime.
//!
//! This is a pure state machine: it consumes [`crate::ViewEvent`] inputs and
//! produces [`crate::ViewAction`] instructions for the session loop to
//! execute.
//!
//! # Responsibilities
//!
//! - Drives the `Detached -> Attached -> Released` lifecycle.
//! - Performs at most one content injection per mount slot, ever.
//! - Tracks the selected tab index and the room name input.
//! - Suppresses joins for room names that fail local validation.

use vestibule_core::{
    Environment, FragmentSource, StoreReader, TOOLBAR_CONTENT_FRAGMENT, Translator,
    WELCOME_CONTENT_FRAGMENT, WelcomeConfig, caps, i18n::keys, roomname,
};

use crate::{Phase, Slot, Tab, TabKind, ViewAction, ViewEvent};

/// View composer state machine.
///
/// Pure state machine that processes events and produces actions. All
/// environment facts arrive through the injected collaborator traits, so the
/// composer is fully testable without a live document.
#[derive(Debug, Clone)]
pub struct WelcomeView<E, F, S, T> {
    /// Read-only interface configuration.
    config: WelcomeConfig,
    /// Viewport/mobile probes and entropy.
    env: E,
    /// Locator for externally supplied fragments.
    fragments: F,
    /// Calendar / recent-list availability flags.
    store: S,
    /// Label lookup.
    translator: T,
    /// Lifecycle phase.
    phase: Phase,
    /// Selected tab position. Not validated on write; rendering decides
    /// whether it still points at a tab.
    selected_tab: usize,
    /// Current room name input. Empty until generated or typed.
    room_name: String,
    /// Room name generation is scheduled for attach.
    generate_on_attach: bool,
    /// The content slot has been injected. Transitions false -> true once.
    injected_content: bool,
    /// The toolbar slot has been injected. Transitions false -> true once.
    injected_toolbar: bool,
}

impl<E, F, S, T> WelcomeView<E, F, S, T>
where
    E: Environment,
    F: FragmentSource,
    S: StoreReader,
    T: Translator,
{
    /// Create a detached composer.
    ///
    /// Environment-dependent work (room name generation, injection) is
    /// deferred to the attach transition.
    pub fn new(config: WelcomeConfig, env: E, fragments: F, store: S, translator: T) -> Self {
        let generate_on_attach = caps::should_generate_room_name(&config);
        Self {
            config,
            env,
            fragments,
            store,
            translator,
            phase: Phase::Detached,
            selected_tab: 0,
            room_name: String::new(),
            generate_on_attach,
            injected_content: false,
            injected_toolbar: false,
        }
    }

    /// Process an event and return actions for the session loop.
    pub fn handle(&mut self, event: ViewEvent) -> Vec<ViewAction> {
        match event {
            ViewEvent::Attach => self.attach(),
            ViewEvent::Detach => self.detach(),
            ViewEvent::TabSelected(index) => self.select_tab(index),
            ViewEvent::RoomNameChanged(name) => {
                self.room_name = name;
                vec![ViewAction::Render]
            },
            ViewEvent::SubmitRequested => self.submit(),
        }
    }

    /// Attach transition.
    ///
    /// Emits, in order: presentation acquisition, scheduled room name
    /// generation, the one-time slot injections, and a render. A re-entrant
    /// attach cannot double-inject because each slot's guard flag is checked
    /// and set here, within the single-threaded event handling.
    fn attach(&mut self) -> Vec<ViewAction> {
        if self.phase == Phase::Released {
            tracing::warn!("attach after release ignored");
            return vec![];
        }

        let mut actions =
            vec![ViewAction::AcquirePresentation { title: self.config.app_name.clone() }];

        if self.generate_on_attach && self.room_name.is_empty() {
            self.room_name = roomname::generate(&self.env);
        }

        if !self.injected_content
            && caps::should_show_additional_content(&self.config, &self.fragments)
            && let Some(fragment) = self.fragments.lookup(WELCOME_CONTENT_FRAGMENT)
        {
            self.injected_content = true;
            actions.push(ViewAction::Inject { slot: Slot::Content, fragment });
        }

        if !self.injected_toolbar
            && caps::should_show_additional_toolbar_content(&self.config, &self.fragments)
            && let Some(fragment) = self.fragments.lookup(TOOLBAR_CONTENT_FRAGMENT)
        {
            self.injected_toolbar = true;
            actions.push(ViewAction::Inject { slot: Slot::Toolbar, fragment });
        }

        self.phase = Phase::Attached;
        tracing::debug!("welcome surface attached");

        actions.push(ViewAction::Render);
        actions
    }

    /// Detach transition. Terminal.
    ///
    /// Releases the presentation marker applied on attach; injected content
    /// is deliberately left in place because the instance is discarded.
    fn detach(&mut self) -> Vec<ViewAction> {
        if self.phase != Phase::Attached {
            tracing::warn!(phase = ?self.phase, "detach ignored");
            return vec![];
        }

        self.phase = Phase::Released;
        tracing::debug!("welcome surface released");
        vec![ViewAction::ReleasePresentation]
    }

    /// Select a tab by position.
    ///
    /// Pure state update; out-of-range indices are accepted as state because
    /// the sequence is rebuilt every render and rendering selects nothing for
    /// a stale index.
    fn select_tab(&mut self, index: usize) -> Vec<ViewAction> {
        self.selected_tab = index;
        vec![ViewAction::Render]
    }

    /// Submit the current room name.
    ///
    /// A name failing local validation suppresses the join; the surface
    /// shows native validation feedback on the re-render.
    fn submit(&mut self) -> Vec<ViewAction> {
        match roomname::validate(&self.room_name) {
            Ok(()) => vec![ViewAction::Join { room: self.room_name.clone() }],
            Err(reason) => {
                tracing::debug!(%reason, "join suppressed");
                vec![ViewAction::Render]
            },
        }
    }

    /// Generate a fresh suggested room name.
    ///
    /// The shell may call this on a timer; generation is idempotent-safe and
    /// each call yields a new suggestion.
    pub fn refresh_room_name(&mut self) -> Vec<ViewAction> {
        self.room_name = roomname::generate(&self.env);
        vec![ViewAction::Render]
    }

    /// Build the tab sequence from current capability decisions.
    ///
    /// Computed fresh per render, never cached. Empty on mobile regardless
    /// of the individual enablement flags; otherwise calendar before
    /// recent-list, in that fixed order.
    pub fn tab_sequence(&self) -> Vec<Tab> {
        if self.env.is_mobile() {
            return vec![];
        }

        let mut tabs = Vec::new();
        if self.store.calendar_enabled() {
            tabs.push(Tab {
                kind: TabKind::Calendar,
                label: self.translator.translate(keys::CALENDAR_TAB),
            });
        }
        if self.store.recent_list_enabled() {
            tabs.push(Tab {
                kind: TabKind::RecentList,
                label: self.translator.translate(keys::RECENT_LIST_TAB),
            });
        }
        tabs
    }

    /// Whether the narrow-layout text variant applies right now.
    ///
    /// Delegates to the capability gate against the live viewport width.
    pub fn show_responsive_label(&self) -> bool {
        caps::should_show_responsive_label(&self.env)
    }

    /// Translated join-button label for the current viewport.
    pub fn go_label(&self) -> String {
        let key =
            if self.show_responsive_label() { keys::GO_BUTTON_SMALL } else { keys::GO_BUTTON };
        self.translator.translate(key)
    }

    /// Configured application name.
    pub fn app_name(&self) -> &str {
        &self.config.app_name
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Selected tab position, as last set.
    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    /// Current room name. Empty until generated or typed.
    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    /// Whether the content slot has been populated.
    pub fn content_injected(&self) -> bool {
        self.injected_content
    }

    /// Whether the toolbar slot has been populated.
    pub fn toolbar_injected(&self) -> bool {
        self.injected_toolbar
    }
}
