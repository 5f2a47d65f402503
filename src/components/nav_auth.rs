//! Navigation bar and its auth-dependent control slots.
//!
//! Each slot renders from the structured [`NavView`] model, never from
//! raw session internals, so desktop and mobile stay consistent and
//! re-rendering the same session is a no-op. A page may mount either
//! slot or both; neither is required.

use leptos::prelude::*;

use crate::state::session::{NavView, SessionState};

/// Sign-in/sign-up controls or the profile button, depending on the
/// current session. `mobile` only switches the CSS hooks; behavior is
/// identical in both slots.
#[component]
pub fn AuthControls(#[prop(optional)] mobile: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let nav_view = move || NavView::from_session(&session.get().session);
    let slot_id = if mobile { "mobile-auth-buttons" } else { "auth-buttons" };
    let profile_class = if mobile { "mobile-profile-btn" } else { "profile-btn" };

    view! {
        <div id=slot_id class="auth-buttons">
            {move || match nav_view() {
                NavView::Anonymous => {
                    view! {
                        <a href="/login?form=login">
                            <button class="btn-signin">"Sign In"</button>
                        </a>
                        <a href="/login?form=signup">
                            <button class="btn-signup">"Sign Up"</button>
                        </a>
                    }
                        .into_any()
                }
                NavView::Authenticated { first_name } => {
                    view! {
                        <a href="/profile">
                            <button class=profile_class>
                                <span class="profile-icon" aria-hidden="true"></span>
                                {first_name}
                            </button>
                        </a>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Site-wide navigation bar with desktop and mobile auth slots.
#[component]
pub fn NavBar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "Viva Utalii"
            </a>
            <nav class="navbar__links">
                <a href="/">"Home"</a>
                <a href="/plan">"Plan a Trip"</a>
            </nav>
            <AuthControls/>
            <button
                class="navbar__menu-toggle"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "Menu"
            </button>
            <Show when=move || menu_open.get()>
                <nav class="navbar__mobile">
                    <a href="/">"Home"</a>
                    <a href="/plan">"Plan a Trip"</a>
                    <AuthControls mobile=true/>
                </nav>
            </Show>
        </header>
    }
}
