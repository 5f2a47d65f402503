//! Profile page for the signed-in user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_auth::NavBar;
use crate::net::auth::AuthClient;
use crate::state::session::SessionState;

/// Profile page — shows the stored user record and the logout control.
/// Redirects to `/login` once the session is known to be invalid.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let client = expect_context::<AuthClient>();
    let navigate = use_navigate();

    // Redirect anonymous visitors, but not while the initial restore
    // and verify are still running.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.verifying && !state.session.is_valid() {
                navigate("/login?form=login", NavigateOptions::default());
            }
        });
    }

    let name = move || {
        session
            .get()
            .session
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };
    let email = move || {
        session
            .get()
            .session
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let target = client.logout();
        session.update(|s| s.session = client.store().load());
        navigate(target, NavigateOptions::default());
    };

    view! {
        <NavBar/>
        <main class="profile-page">
            <section id="profile-section" class="profile-section">
                <h2>"Your Profile"</h2>
                <dl>
                    <dt>"Name"</dt>
                    <dd>{name}</dd>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                </dl>
                <button class="logout-btn btn" on:click=on_logout>
                    "Log Out"
                </button>
            </section>
        </main>
    }
}
