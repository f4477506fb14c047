//! Theme preference: initialization and toggle.
//!
//! Reads the saved preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back and
//! updates the attribute. SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(feature = "hydrate")]
const THEME_STORAGE_KEY: &str = "nilbx_theme";

/// Read the theme preference.
///
/// Returns `true` (dark) if the user saved a dark preference, or if the
/// system prefers dark and nothing is saved.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(saved)) = storage.get_item(THEME_STORAGE_KEY) {
                return saved == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Toggle the theme and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, if next { "dark" } else { "light" });
            }
        }
    }
    next
}
