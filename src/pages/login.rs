//! Combined sign-in / sign-up page, switched by the `form` query
//! parameter (`/login?form=login` or `/login?form=signup`).

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::nav_auth::NavBar;
use crate::net::auth::AuthClient;
use crate::state::session::SessionState;

/// Which card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum FormMode {
    #[default]
    SignIn,
    SignUp,
}

/// Login page — one card, two modes, inline errors, busy label while
/// a request is in flight.
#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let initial = if query.with_untracked(|q| q.get("form").as_deref() == Some("signup")) {
        FormMode::SignUp
    } else {
        FormMode::SignIn
    };
    let mode = RwSignal::new(initial);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let client = expect_context::<AuthClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            busy.set(true);

            leptos::task::spawn_local(async move {
                let result = match mode.get_untracked() {
                    FormMode::SignIn => {
                        client
                            .login(&email.get_untracked(), &password.get_untracked())
                            .await
                    }
                    FormMode::SignUp => {
                        client
                            .signup(
                                &name.get_untracked(),
                                &email.get_untracked(),
                                &password.get_untracked(),
                            )
                            .await
                    }
                };
                busy.set(false);

                match result {
                    Ok(_) => {
                        // Storage events fire only in other tabs, so
                        // this tab refreshes its own signal.
                        session.update(|s| s.session = client.store().load());
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.message().to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &session, &navigate);
        }
    });

    let title = move || match mode.get() {
        FormMode::SignIn => "Sign In",
        FormMode::SignUp => "Create Account",
    };
    let busy_label = move || match mode.get() {
        FormMode::SignIn => "Signing in...",
        FormMode::SignUp => "Creating account...",
    };

    view! {
        <NavBar/>
        <main class="login-page">
            <div class="auth-card">
                <h2>{title}</h2>

                <Show when=move || mode.get() == FormMode::SignUp>
                    <label class="auth-card__label">
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <label class="auth-card__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-card__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if busy.get() { busy_label().to_owned() } else { title().to_owned() }}
                </button>

                <p class="auth-card__switch">
                    {move || match mode.get() {
                        FormMode::SignIn => {
                            view! {
                                "No account yet? "
                                <a href="#" on:click=move |ev| {
                                    ev.prevent_default();
                                    error.set(None);
                                    mode.set(FormMode::SignUp);
                                }>
                                    "Sign Up"
                                </a>
                            }
                                .into_any()
                        }
                        FormMode::SignUp => {
                            view! {
                                "Already registered? "
                                <a href="#" on:click=move |ev| {
                                    ev.prevent_default();
                                    error.set(None);
                                    mode.set(FormMode::SignIn);
                                }>
                                    "Sign In"
                                </a>
                            }
                                .into_any()
                        }
                    }}
                </p>
            </div>
        </main>
    }
}
