//! One-time adoption of legacy auth controls.
//!
//! Older revisions of the site sprinkled sign-in/sign-up anchors and
//! logout buttons directly into page markup. On load, stray auth
//! anchors are moved into the canonical `#auth-buttons` container and
//! duplicate logout controls are removed, so each action renders
//! exactly once. Every lookup degrades silently — a page without the
//! canonical container simply logs and moves on.

/// Anchors that older pages used for the auth actions.
#[cfg(feature = "hydrate")]
const LEGACY_AUTH_SELECTOR: &str = "a[href^='login.html'], a[href^='/login']";

/// Logout controls; only the first found is kept.
#[cfg(feature = "hydrate")]
const LOGOUT_SELECTOR: &str = ".logout-btn, button[data-action='logout']";

/// Relocate stray auth anchors into `#auth-buttons` and drop duplicate
/// logout controls. Requires a browser environment; a no-op otherwise.
pub fn adopt_legacy_controls() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let Some(container) = document.get_element_by_id("auth-buttons") else {
            leptos::logging::log!("no #auth-buttons container; skipping legacy control adoption");
            return;
        };

        // Move inline auth anchors into the canonical container.
        if let Ok(stray) = document.query_selector_all(LEGACY_AUTH_SELECTOR) {
            for i in 0..stray.length() {
                let Some(node) = stray.item(i) else { continue };
                let Ok(el) = node.dyn_into::<web_sys::Element>() else {
                    continue;
                };
                // Already in a canonical slot: leave it alone.
                if el
                    .closest("#auth-buttons, #mobile-auth-buttons")
                    .ok()
                    .flatten()
                    .is_some()
                {
                    continue;
                }
                if container.append_child(&el).is_err() {
                    leptos::logging::warn!("failed to adopt legacy auth control");
                }
            }
        }

        // Keep at most one logout control.
        if let Ok(logouts) = document.query_selector_all(LOGOUT_SELECTOR) {
            for i in 1..logouts.length() {
                let Some(node) = logouts.item(i) else { continue };
                if let Ok(el) = node.dyn_into::<web_sys::Element>() {
                    el.remove();
                }
            }
        }
    }
}
