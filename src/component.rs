//! Leptos control that renders and drives the theme toggle.
//!
//! For Leptos pages that render the toggle themselves instead of relying on
//! `install` finding an existing `<a aria-label="Toggle theme">`. The link is
//! rendered already carrying [`BOUND_ATTR`](crate::toggle::BOUND_ATTR), so a
//! page that also calls `install` leaves it to the component.

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

use leptos::prelude::*;

use crate::config::ToggleConfig;
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;
use crate::theme::Theme;
use crate::toggle::PreferenceToggle;

/// Value of `data-theme-toggle-bound` on the rendered link.
const BOUND_BY: &str = "component";

/// Apply the stored preference and report the theme the page now shows.
pub fn restore_theme<S: PreferenceStore, V: ThemeSurface>(toggle: &PreferenceToggle<S, V>) -> Theme {
    toggle.apply_stored_preference();
    toggle.theme()
}

/// Glyph shown on the control: the theme a click switches to.
pub fn toggle_glyph(theme: Theme) -> &'static str {
    if theme.is_dark() { "\u{2600}" } else { "\u{263e}" }
}

/// Link-styled theme toggle.
///
/// Under `hydrate` the stored preference is applied to the root element once
/// mounted, and clicks run the full toggle against `localStorage`. Elsewhere
/// the control only tracks its own state.
#[component]
pub fn ThemeToggle(#[prop(optional)] config: Option<ToggleConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let label = config.control_label.clone();
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::web::{DocumentRoot, LocalStorageStore};

        let config = config.clone();
        Effect::new(move |_| {
            if let Some(root) = DocumentRoot::current(&config.dark_class) {
                let toggle = PreferenceToggle::with_config(LocalStorageStore, root, config.clone());
                theme.set(restore_theme(&toggle));
            }
        });
    }

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use crate::web::{DocumentRoot, LocalStorageStore};

            if let Some(root) = DocumentRoot::current(&config.dark_class) {
                let toggle = PreferenceToggle::with_config(LocalStorageStore, root, config.clone());
                theme.set(toggle.handle_toggle_activation());
                return;
            }
        }
        theme.update(|t| *t = t.toggled());
    };

    view! {
        <a
            href="#"
            class="theme-toggle"
            aria-label=label
            title="Toggle dark mode"
            data-theme-toggle-bound=BOUND_BY
            on:click=on_click
        >
            {move || toggle_glyph(theme.get())}
        </a>
    }
}
