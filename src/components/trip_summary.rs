//! Trip summary block shown below the planner form once a quote has
//! been calculated.

use leptos::prelude::*;

use crate::pricing::{PriceQuote, TripConfig, format_kes};

/// Echo of the chosen configuration plus the cost breakdown.
#[component]
pub fn TripSummary(config: TripConfig, quote: PriceQuote) -> impl IntoView {
    let travellers = format!("{} Adults, {} Children", config.adults, config.children);
    let dates = format!("{} to {}", config.start_date, config.end_date);

    view! {
        <section class="trip-summary">
            <h3>"Trip Summary"</h3>
            <dl class="trip-summary__rows">
                <dt>"Destination"</dt>
                <dd id="sum-destination">{config.destination}</dd>
                <dt>"Experience"</dt>
                <dd id="sum-experience">{config.experience}</dd>
                <dt>"Dates"</dt>
                <dd id="sum-dates">{dates}</dd>
                <dt>"Travellers"</dt>
                <dd id="sum-travellers">{travellers}</dd>
                <dt>"Accommodation"</dt>
                <dd id="sum-accommodation">{config.accommodation.label()}</dd>
                <dt>"Transport"</dt>
                <dd id="sum-transport">{config.transport.label()}</dd>
                <dt>"Total Cost"</dt>
                <dd id="sum-total">{format_kes(quote.total)}</dd>
                <dt>"Booking Fee (20%)"</dt>
                <dd id="sum-fee">{format_kes(quote.booking_fee)}</dd>
                <dt>"Balance Due"</dt>
                <dd id="sum-balance">{format_kes(quote.balance)}</dd>
            </dl>
        </section>
    }
}
