//! Cross-tab session synchronization.
//!
//! The browser fires `storage` events only in tabs *other* than the
//! writer, so the writing tab updates its own signal directly and this
//! listener covers everyone else. Only changes to the two session keys
//! (or a wholesale storage clear, where the event key is null) trigger
//! a reload.

use leptos::prelude::RwSignal;

use crate::state::session::SessionState;
use crate::state::session_store::SessionStore;

/// Install the `storage` listener for the lifetime of the page.
/// Requires a browser environment; a no-op otherwise.
pub fn install(state: RwSignal<SessionState>, store: &SessionStore) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::Update;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::state::session_store::{TOKEN_KEY, USER_KEY};

        let Some(window) = web_sys::window() else {
            return;
        };

        let store = store.clone();
        let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                let relevant = match event.key() {
                    Some(key) => key == USER_KEY || key == TOKEN_KEY,
                    // A null key means the whole storage was cleared.
                    None => true,
                };
                if relevant {
                    leptos::logging::log!("session storage changed in another tab");
                    let session = store.load();
                    state.update(|s| s.session = session);
                }
            },
        );

        if window
            .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("failed to install storage listener");
        }
        // Listener lives for the page lifetime.
        on_storage.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, store);
    }
}
