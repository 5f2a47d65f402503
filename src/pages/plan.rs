//! Trip planner page: configuration form, cost estimate, and the
//! booking confirmation placeholder.

use leptos::prelude::*;

use crate::components::nav_auth::NavBar;
use crate::components::trip_summary::TripSummary;
use crate::pricing::{AccommodationTier, TransportMode, TripConfig, estimate};

const DESTINATIONS: &[&str] = &[
    "Diani",
    "Amboseli",
    "Maasai Mara",
    "Nairobi National Park",
    "Mt. Kenya",
    "Ol Pejeta",
];

const EXPERIENCES: &[&str] = &["Safari", "Beach Holiday", "Cultural Tour", "Hiking"];

/// Planner page — fills a [`TripConfig`] from the form and shows the
/// estimate below it.
#[component]
pub fn PlanPage() -> impl IntoView {
    let destination = RwSignal::new(String::new());
    let experience = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let adults = RwSignal::new("1".to_owned());
    let children = RwSignal::new("0".to_owned());
    let accommodation = RwSignal::new("Budget".to_owned());
    let transport = RwSignal::new("Shared Shuttle".to_owned());

    let warning = RwSignal::new(Option::<&'static str>::None);
    let result = RwSignal::new(Option::<(TripConfig, crate::pricing::PriceQuote)>::None);
    let calculating = RwSignal::new(false);
    let confirmation = RwSignal::new(Option::<&'static str>::None);

    let calculate = move |_| {
        let config = TripConfig {
            destination: destination.get_untracked(),
            experience: experience.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            adults: adults.get_untracked().parse().unwrap_or(0),
            children: children.get_untracked().parse().unwrap_or(0),
            accommodation: AccommodationTier::from_label(&accommodation.get_untracked()),
            transport: TransportMode::from_label(&transport.get_untracked()),
        };

        match estimate(&config) {
            Ok(quote) => {
                warning.set(None);
                result.set(Some((config, quote)));

                // Brief visual feedback on the button, as the old
                // planner did.
                #[cfg(feature = "hydrate")]
                {
                    calculating.set(true);
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
                        calculating.set(false);
                    });
                }
            }
            Err(err) => {
                result.set(None);
                warning.set(Some(err.message()));
            }
        }
    };

    let confirm = move |_| {
        // Payment integration is a placeholder; the real M-Pesa STK
        // push lives behind the backend.
        confirmation.set(Some(
            "Booking confirmed! A payment prompt (M-Pesa STK Push) will appear shortly.",
        ));
    };

    view! {
        <NavBar/>
        <main class="plan-page">
            <h1>"Plan Your Trip"</h1>

            <form class="trip-form" on:submit=move |ev| ev.prevent_default()>
                <label>
                    "Destination"
                    <select
                        id="destination"
                        on:change=move |ev| destination.set(event_target_value(&ev))
                    >
                        <option value="">"Select a destination"</option>
                        {DESTINATIONS
                            .iter()
                            .map(|d| view! { <option value=*d>{*d}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label>
                    "Experience"
                    <select
                        id="experience"
                        on:change=move |ev| experience.set(event_target_value(&ev))
                    >
                        <option value="">"Select an experience"</option>
                        {EXPERIENCES
                            .iter()
                            .map(|e| view! { <option value=*e>{*e}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label>
                    "Start Date"
                    <input
                        id="start-date"
                        type="date"
                        on:change=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "End Date"
                    <input
                        id="end-date"
                        type="date"
                        on:change=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Adults"
                    <input
                        id="adults"
                        type="number"
                        min="0"
                        prop:value=move || adults.get()
                        on:input=move |ev| adults.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Children"
                    <input
                        id="children"
                        type="number"
                        min="0"
                        prop:value=move || children.get()
                        on:input=move |ev| children.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Accommodation"
                    <select
                        id="accommodation"
                        on:change=move |ev| accommodation.set(event_target_value(&ev))
                    >
                        <option value="Luxury">"Luxury"</option>
                        <option value="Mid-range">"Mid-range"</option>
                        <option value="Budget" selected=true>"Budget"</option>
                    </select>
                </label>
                <label>
                    "Transport"
                    <select
                        id="transport"
                        on:change=move |ev| transport.set(event_target_value(&ev))
                    >
                        <option value="Private Car">"Private Car"</option>
                        <option value="Tour Van">"Tour Van"</option>
                        <option value="Shared Shuttle" selected=true>"Shared Shuttle"</option>
                    </select>
                </label>

                <Show when=move || warning.get().is_some()>
                    <p class="trip-form__warning">{move || warning.get().unwrap_or_default()}</p>
                </Show>

                <button id="calculate-btn" class="btn btn--primary" on:click=calculate>
                    {move || if calculating.get() { "Calculating..." } else { "Calculate Trip" }}
                </button>
            </form>

            {move || {
                result
                    .get()
                    .map(|(config, quote)| view! { <TripSummary config=config quote=quote/> })
            }}

            <Show when=move || result.get().is_some()>
                <button id="confirm-btn" class="btn" on:click=confirm>
                    "Confirm Booking"
                </button>
            </Show>

            <Show when=move || confirmation.get().is_some()>
                <p class="plan-page__confirmation">
                    {move || confirmation.get().unwrap_or_default()}
                </p>
            </Show>
        </main>
    }
}
