//! Browser glue that does not belong to a page or component: legacy
//! DOM migration and the cross-tab storage listener.

pub mod legacy_controls;
pub mod storage_events;
