//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::auth::AuthClient;
use crate::pages::{home::HomePage, login::LoginPage, plan::PlanPage, profile::ProfilePage};
use crate::state::session::SessionState;
use crate::state::session_store::SessionStore;
use crate::util::{legacy_controls, storage_events};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the session store and auth client explicitly and hands
/// them to the tree via context — no process-wide singleton. On load:
/// restore the persisted session, adopt any legacy auth controls, run
/// a fail-open token verification, and start listening for cross-tab
/// storage changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let client = AuthClient::new(store.clone());
    let session = RwSignal::new(SessionState {
        session: store.load(),
        verifying: true,
    });

    provide_context(session);
    provide_context(client.clone());

    // Browser-only startup work; runs once after hydration.
    Effect::new(move || {
        legacy_controls::adopt_legacy_controls();
        storage_events::install(session, client.store());

        session.update(|s| s.session = client.store().load());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let outcome = client.verify().await;
                leptos::logging::log!("token verification: {outcome:?}");
                session.update(|s| {
                    s.session = client.store().load();
                    s.verifying = false;
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            session.update(|s| s.verifying = false);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/utalii-web.css"/>
        <Title text="Viva Utalii"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("plan") view=PlanPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
