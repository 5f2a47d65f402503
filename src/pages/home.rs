//! Landing page.

use leptos::prelude::*;

use crate::components::nav_auth::NavBar;

/// Landing page — hero section plus the shared navigation bar.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="home-page">
            <section class="hero">
                <h1>"Viva Utalii"</h1>
                <p>"Safaris, beaches, and mountains across Kenya."</p>
                <a href="/plan" class="hero__cta">
                    <button class="btn btn--primary">"Plan Your Trip"</button>
                </a>
            </section>
        </main>
    }
}
