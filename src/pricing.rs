//! Trip-cost estimator.
//!
//! Pure lookup-table arithmetic over the planner form's inputs. All
//! amounts are whole Kenyan shillings as displayed, so the maths stays
//! in `u64` with no rounding concerns.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

/// Accommodation tiers offered by the planner form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccommodationTier {
    Luxury,
    MidRange,
    #[default]
    Budget,
}

impl AccommodationTier {
    /// Parse the form's option label. Unrecognized labels fall back to
    /// Budget, the cheapest tier.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Luxury" => Self::Luxury,
            "Mid-range" => Self::MidRange,
            _ => Self::Budget,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Luxury => "Luxury",
            Self::MidRange => "Mid-range",
            Self::Budget => "Budget",
        }
    }

    fn surcharge(self) -> u64 {
        match self {
            Self::Luxury => 15_000,
            Self::MidRange => 8_000,
            Self::Budget => 4_000,
        }
    }
}

/// Transport modes offered by the planner form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransportMode {
    PrivateCar,
    TourVan,
    #[default]
    Other,
}

impl TransportMode {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Private Car" => Self::PrivateCar,
            "Tour Van" => Self::TourVan,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PrivateCar => "Private Car",
            Self::TourVan => "Tour Van",
            Self::Other => "Shared Shuttle",
        }
    }

    fn surcharge(self) -> u64 {
        match self {
            Self::PrivateCar => 10_000,
            Self::TourVan => 8_000,
            Self::Other => 5_000,
        }
    }
}

/// Per-adult rate in KES.
const ADULT_RATE: u64 = 2_000;
/// Per-child rate in KES.
const CHILD_RATE: u64 = 1_000;

/// Base cost by destination label. A destination outside this table
/// contributes 0 — deliberate form-compatibility behavior, not an
/// error.
fn base_cost(destination: &str) -> u64 {
    match destination {
        "Diani" => 20_000,
        "Amboseli" => 25_000,
        "Maasai Mara" => 30_000,
        "Nairobi National Park" => 15_000,
        "Mt. Kenya" => 27_000,
        "Ol Pejeta" => 28_000,
        _ => 0,
    }
}

/// Everything the planner form collects for one quote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripConfig {
    pub destination: String,
    pub experience: String,
    pub start_date: String,
    pub end_date: String,
    pub adults: u32,
    pub children: u32,
    pub accommodation: AccommodationTier,
    pub transport: TransportMode,
}

impl TripConfig {
    fn has_required_fields(&self) -> bool {
        !self.destination.is_empty()
            && !self.experience.is_empty()
            && !self.start_date.is_empty()
            && !self.end_date.is_empty()
    }
}

/// Derived cost breakdown. Display-only, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceQuote {
    pub total: u64,
    pub booking_fee: u64,
    pub balance: u64,
}

/// Why a quote could not be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteError {
    /// One or more required form fields were left empty. The caller
    /// shows a warning; no computation happens.
    MissingFields,
}

impl QuoteError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill in all required fields before proceeding.",
        }
    }
}

/// Fraction of the total due as a booking deposit: 20%.
const DEPOSIT_DIVISOR: u64 = 5;

/// Compute the cost breakdown for a trip configuration.
///
/// # Errors
///
/// `QuoteError::MissingFields` if any required field is empty.
pub fn estimate(config: &TripConfig) -> Result<PriceQuote, QuoteError> {
    if !config.has_required_fields() {
        return Err(QuoteError::MissingFields);
    }

    let total = base_cost(&config.destination)
        + config.accommodation.surcharge()
        + config.transport.surcharge()
        + u64::from(config.adults) * ADULT_RATE
        + u64::from(config.children) * CHILD_RATE;
    let booking_fee = total / DEPOSIT_DIVISOR;

    Ok(PriceQuote {
        total,
        booking_fee,
        balance: total - booking_fee,
    })
}

/// Format an amount as `KES 1,234,567` with thousands separators.
pub fn format_kes(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    out.push_str("KES ");
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
