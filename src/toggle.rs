//! The preference toggle: load-time apply plus per-activation flip.
//!
//! DESIGN
//! ======
//! `PreferenceToggle` owns a [`PreferenceStore`] and a [`ThemeSurface`] and
//! knows nothing about the DOM. The browser build plugs in `localStorage`
//! and the `<html>` class list; tests plug in the in-memory versions.
//! Registration against a page goes through [`ToggleHost`], so the
//! missing-control path is testable without a browser.
//!
//! TRADE-OFFS
//! ==========
//! Store failures never escape. The visual flip happens before the write and
//! stands whether or not the write lands, so a browser that refuses storage
//! still gets a working toggle for the current page view.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::config::ToggleConfig;
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;
use crate::theme::Theme;

/// Attribute set on a control once a toggle handler owns it.
pub const BOUND_ATTR: &str = "data-theme-toggle-bound";

/// Whether a document in `ready_state` has finished parsing its content.
///
/// Anything past `"loading"` means `DOMContentLoaded` has already fired.
pub fn content_loaded(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Outcome of [`PreferenceToggle::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// The control was found and an activation handler is attached.
    Bound,
    /// No control matched; nothing was attached.
    NoControl,
    /// The control already has a handler; nothing was attached.
    AlreadyBound,
}

/// Page that can locate the toggle control and attach an activation handler.
///
/// Implementations suppress the control's default action before invoking
/// the handler.
pub trait ToggleHost {
    type Control;
    type Error;

    /// Find the first control matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the lookup itself fails.
    fn find_control(&self, selector: &str) -> Result<Option<Self::Control>, Self::Error>;

    /// Mark `control` as owned by a toggle handler.
    ///
    /// Returns `false` when it was already marked.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the mark cannot be read or written.
    fn claim_control(&self, control: &Self::Control) -> Result<bool, Self::Error>;

    /// Invoke `handler` on every activation of `control`.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the handler cannot be attached.
    fn on_activation(&self, control: &Self::Control, handler: Box<dyn FnMut()>) -> Result<(), Self::Error>;
}

pub struct PreferenceToggle<S, V> {
    store: S,
    surface: V,
    config: ToggleConfig,
}

impl<S: PreferenceStore, V: ThemeSurface> PreferenceToggle<S, V> {
    pub fn new(store: S, surface: V) -> Self {
        Self::with_config(store, surface, ToggleConfig::default())
    }

    pub fn with_config(store: S, surface: V, config: ToggleConfig) -> Self {
        Self { store, surface, config }
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Theme currently shown on the surface.
    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.surface.is_dark())
    }

    /// Apply the stored preference, if any, to the surface.
    ///
    /// Returns the theme applied, or `None` when the surface was left as is:
    /// the store refused the read, held nothing, or held an unrecognized value.
    pub fn apply_stored_preference(&self) -> Option<Theme> {
        let stored = match self.store.get(&self.config.storage_key) {
            Ok(stored) => stored,
            Err(err) => {
                log::debug!("theme preference unreadable, keeping current theme: {err}");
                return None;
            }
        };
        let theme = stored.as_deref().and_then(Theme::from_stored)?;
        self.surface.set_dark(theme.is_dark());
        Some(theme)
    }

    /// Flip the surface and persist the new theme.
    ///
    /// A refused write is logged and dropped; the flip stands either way.
    pub fn handle_toggle_activation(&self) -> Theme {
        let next = self.theme().toggled();
        self.surface.set_dark(next.is_dark());
        if let Err(err) = self.store.set(&self.config.storage_key, next.as_str()) {
            log::debug!("theme preference not saved, {next} applies to this page only: {err}");
        }
        next
    }

    /// Apply the stored preference, then attach the toggle to the page's control.
    ///
    /// A page without the control is not an error: the preference is still
    /// applied and [`Binding::NoControl`] is returned. A control that another
    /// toggle already owns is left alone so one click never flips twice.
    ///
    /// # Errors
    ///
    /// Propagates host failures from the control lookup or handler attachment.
    pub fn start<H: ToggleHost>(self, host: &H) -> Result<Binding, H::Error>
    where
        S: 'static,
        V: 'static,
    {
        self.apply_stored_preference();

        let selector = self.config.control_selector();
        let Some(control) = host.find_control(&selector)? else {
            log::debug!("no element matches {selector}, theme toggle not bound");
            return Ok(Binding::NoControl);
        };
        if !host.claim_control(&control)? {
            log::debug!("{selector} already has a theme toggle, not binding again");
            return Ok(Binding::AlreadyBound);
        }

        host.on_activation(
            &control,
            Box::new(move || {
                self.handle_toggle_activation();
            }),
        )?;
        log::debug!("theme toggle bound to {selector}");
        Ok(Binding::Bound)
    }
}
