//! Browser adapters and DOM wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` backs [`PreferenceStore`], the `<html>` class list backs
//! [`ThemeSurface`], and `web_sys::Document` is the [`ToggleHost`]. The
//! exported `install` functions run the toggle once the document's content
//! has loaded.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::ToggleConfig;
use crate::store::{self, PreferenceStore, StoreError};
use crate::surface::ThemeSurface;
use crate::toggle::{self, BOUND_ATTR, Binding, PreferenceToggle, ToggleHost};

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        store::available(window.local_storage())
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StoreError::Read(js_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::Write(js_message(&err)))
    }
}

/// The document's root element, carrying the dark-mode class.
#[derive(Clone, Debug)]
pub struct DocumentRoot {
    element: web_sys::Element,
    dark_class: String,
}

impl DocumentRoot {
    pub fn from_document(document: &web_sys::Document, dark_class: &str) -> Option<Self> {
        let element = document.document_element()?;
        Some(Self {
            element,
            dark_class: dark_class.to_owned(),
        })
    }

    /// Root of the current window's document, if there is one.
    pub fn current(dark_class: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Self::from_document(&document, dark_class)
    }
}

impl ThemeSurface for DocumentRoot {
    fn is_dark(&self) -> bool {
        self.element.class_list().contains(&self.dark_class)
    }

    fn set_dark(&self, dark: bool) {
        let classes = self.element.class_list();
        let result = if dark {
            classes.add_1(&self.dark_class)
        } else {
            classes.remove_1(&self.dark_class)
        };
        if let Err(err) = result {
            log::warn!("failed to update .{} on root element: {}", self.dark_class, js_message(&err));
        }
    }
}

impl ToggleHost for web_sys::Document {
    type Control = web_sys::Element;
    type Error = JsValue;

    fn find_control(&self, selector: &str) -> Result<Option<Self::Control>, Self::Error> {
        self.query_selector(selector)
    }

    fn claim_control(&self, control: &Self::Control) -> Result<bool, Self::Error> {
        if control.has_attribute(BOUND_ATTR) {
            return Ok(false);
        }
        control.set_attribute(BOUND_ATTR, "install")?;
        Ok(true)
    }

    fn on_activation(&self, control: &Self::Control, mut handler: Box<dyn FnMut()>) -> Result<(), Self::Error> {
        // The control is styled as a link; it must not navigate.
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            handler();
        });
        control.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        // Lives as long as the page.
        listener.forget();
        Ok(())
    }
}

/// Install the toggle with the default configuration.
///
/// # Errors
///
/// Returns a JS error when there is no document to install into.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    install_config(ToggleConfig::default())
}

/// Install the toggle with a JSON configuration (see [`ToggleConfig`]).
///
/// # Errors
///
/// Returns a JS error when the configuration is invalid or there is no
/// document to install into.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(json: &str) -> Result<(), JsValue> {
    let config = ToggleConfig::from_json(json).map_err(|err| js_error(&err.to_string()))?;
    install_config(config)
}

/// Bind now if the document has finished loading, else on `DOMContentLoaded`.
///
/// Safe to call more than once: a control that is already bound, by an
/// earlier install or by [`crate::component::ThemeToggle`], is skipped.
///
/// # Errors
///
/// Returns a JS error when there is no document or the ready listener cannot
/// be attached.
pub fn install_config(config: ToggleConfig) -> Result<(), JsValue> {
    init_logging();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| js_error("no document to install theme toggle into"))?;

    if toggle::content_loaded(&document.ready_state()) {
        bind_logged(&document, &config);
        return Ok(());
    }

    let target = document.clone();
    let on_ready = Closure::once(move || bind_logged(&target, &config));
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
        &options,
    )?;
    on_ready.forget();
    Ok(())
}

/// Apply the stored preference to `document` and attach the click handler.
///
/// # Errors
///
/// Returns a JS error when the document has no root element, the selector is
/// rejected, or the listener cannot be attached. A missing control is
/// reported as [`Binding::NoControl`], not as an error.
pub fn bind(document: &web_sys::Document, config: &ToggleConfig) -> Result<Binding, JsValue> {
    let root = DocumentRoot::from_document(document, &config.dark_class)
        .ok_or_else(|| js_error("document has no root element"))?;
    PreferenceToggle::with_config(LocalStorageStore, root, config.clone()).start(document)
}

fn bind_logged(document: &web_sys::Document, config: &ToggleConfig) {
    match bind(document, config) {
        Ok(Binding::AlreadyBound) => log::debug!("theme toggle already installed"),
        Ok(_) => {}
        Err(err) => log::warn!("theme toggle not installed: {}", js_message(&err)),
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
