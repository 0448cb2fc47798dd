//! Capability gate.
//!
//! Deterministic, side-effect-free admission predicates over configuration
//! and environment facts. Each optional section of the welcome surface asks
//! the gate before it renders.
//!
//! Missing inputs (absent flags, absent fragments, zero-width viewport) all
//! resolve to a safe `false`; nothing in this module can fail.

use crate::{
    Environment, FragmentSource, TOOLBAR_CONTENT_FRAGMENT, WELCOME_CONTENT_FRAGMENT, WelcomeConfig,
};

/// Maximum viewport width, in display units, treated as a narrow layout.
pub const RESPONSIVE_WIDTH_THRESHOLD: u32 = 425;

/// Whether a suggested room name is generated when the surface attaches.
pub fn should_generate_room_name(config: &WelcomeConfig) -> bool {
    config.generate_room_names_on_load
}

/// Whether the additional content fragment is admitted below the header.
///
/// True iff the configuration flag is set AND the fragment exists AND its
/// content is non-empty after trimming whitespace.
pub fn should_show_additional_content(
    config: &WelcomeConfig,
    fragments: &impl FragmentSource,
) -> bool {
    config.display_additional_content
        && fragments.lookup(WELCOME_CONTENT_FRAGMENT).is_some_and(|f| f.has_content())
}

/// Whether the toolbar content fragment is admitted inside the header.
///
/// Same contract as [`should_show_additional_content`], over an independent
/// flag and an independent fragment.
pub fn should_show_additional_toolbar_content(
    config: &WelcomeConfig,
    fragments: &impl FragmentSource,
) -> bool {
    config.display_additional_toolbar_content
        && fragments.lookup(TOOLBAR_CONTENT_FRAGMENT).is_some_and(|f| f.has_content())
}

/// Whether the narrow-layout text variant is shown.
///
/// Evaluated fresh on every render request, never cached: the viewport can
/// change during the session, and staleness between renders is accepted.
pub fn should_show_responsive_label(env: &impl Environment) -> bool {
    env.viewport_width() <= RESPONSIVE_WIDTH_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::{
        RESPONSIVE_WIDTH_THRESHOLD, should_generate_room_name, should_show_additional_content,
        should_show_additional_toolbar_content, should_show_responsive_label,
    };
    use crate::{
        Environment, Fragment, FragmentSource, TOOLBAR_CONTENT_FRAGMENT, WELCOME_CONTENT_FRAGMENT,
        WelcomeConfig,
    };

    #[derive(Clone)]
    struct Fixed {
        width: u32,
    }

    impl Environment for Fixed {
        fn is_mobile(&self) -> bool {
            false
        }

        fn viewport_width(&self) -> u32 {
            self.width
        }

        fn random_bytes(&self, buffer: &mut [u8]) {
            buffer.fill(0);
        }
    }

    struct OneFragment {
        id: &'static str,
        markup: &'static str,
    }

    impl FragmentSource for OneFragment {
        fn lookup(&self, id: &str) -> Option<Fragment> {
            (id == self.id).then(|| Fragment::new(self.markup))
        }
    }

    struct NoFragments;

    impl FragmentSource for NoFragments {
        fn lookup(&self, _id: &str) -> Option<Fragment> {
            None
        }
    }

    fn config(content: bool, toolbar: bool) -> WelcomeConfig {
        WelcomeConfig {
            display_additional_content: content,
            display_additional_toolbar_content: toolbar,
            ..WelcomeConfig::default()
        }
    }

    #[test]
    fn room_name_generation_follows_flag() {
        assert!(!should_generate_room_name(&WelcomeConfig::default()));
        assert!(should_generate_room_name(&WelcomeConfig {
            generate_room_names_on_load: true,
            ..WelcomeConfig::default()
        }));
    }

    #[test]
    fn content_requires_flag_and_fragment() {
        let present = OneFragment { id: WELCOME_CONTENT_FRAGMENT, markup: "<p>promo</p>" };

        // All four flag x fragment combinations.
        assert!(should_show_additional_content(&config(true, false), &present));
        assert!(!should_show_additional_content(&config(true, false), &NoFragments));
        assert!(!should_show_additional_content(&config(false, false), &present));
        assert!(!should_show_additional_content(&config(false, false), &NoFragments));
    }

    #[test]
    fn content_rejects_whitespace_only_fragment() {
        let blank = OneFragment { id: WELCOME_CONTENT_FRAGMENT, markup: "  \n  " };
        assert!(!should_show_additional_content(&config(true, false), &blank));
    }

    #[test]
    fn toolbar_is_independent_of_content() {
        let toolbar = OneFragment { id: TOOLBAR_CONTENT_FRAGMENT, markup: "<button/>" };

        assert!(should_show_additional_toolbar_content(&config(false, true), &toolbar));
        assert!(!should_show_additional_toolbar_content(&config(false, true), &NoFragments));
        assert!(!should_show_additional_toolbar_content(&config(false, false), &toolbar));
        assert!(!should_show_additional_toolbar_content(&config(false, false), &NoFragments));

        // The content fragment does not satisfy the toolbar gate.
        let content = OneFragment { id: WELCOME_CONTENT_FRAGMENT, markup: "<p>promo</p>" };
        assert!(!should_show_additional_toolbar_content(&config(true, true), &content));
    }

    #[test]
    fn responsive_label_boundary() {
        assert!(should_show_responsive_label(&Fixed { width: RESPONSIVE_WIDTH_THRESHOLD }));
        assert!(!should_show_responsive_label(&Fixed { width: RESPONSIVE_WIDTH_THRESHOLD + 1 }));
        assert!(should_show_responsive_label(&Fixed { width: 0 }));
    }
}
