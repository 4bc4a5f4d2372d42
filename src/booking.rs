//! Service booking slots
//!
//! Slots are offered once per day starting one day after `now`. A booking
//! confirmation accepts any label; it is not checked against the offered list.

use std::fmt::Display;

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    SERVICE_SLOT_COUNT, SERVICE_SLOT_INTERVAL_HOURS, SERVICE_SLOT_LABEL_FORMAT,
};

/// One bookable service appointment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSlot<Tz: TimeZone> {
    pub starts_at: DateTime<Tz>,
    /// Human-readable label, e.g. `Tue, Mar 05 @ 02:30 PM`
    pub label: String,
}

/// `count` slots at 24h intervals, the first one 24h after `now`
pub fn service_slots<Tz>(now: &DateTime<Tz>, count: usize) -> Vec<ServiceSlot<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let step = Duration::hours(SERVICE_SLOT_INTERVAL_HOURS);
    std::iter::successors(now.clone().checked_add_signed(step), |prev| {
        prev.clone().checked_add_signed(step)
    })
    .take(count)
    .map(|starts_at| ServiceSlot {
        label: starts_at.format(SERVICE_SLOT_LABEL_FORMAT).to_string(),
        starts_at,
    })
    .collect()
}

/// Slot labels only
pub fn available_slots<Tz>(now: &DateTime<Tz>, count: usize) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    service_slots(now, count)
        .into_iter()
        .map(|slot| slot.label)
        .collect()
}

/// Labels for the default number of slots
pub fn default_slots<Tz>(now: &DateTime<Tz>) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    available_slots(now, SERVICE_SLOT_COUNT)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub slot: String,
    pub message: String,
}

/// Confirm a booking for an opaque slot label
pub fn confirm_booking(label: &str) -> BookingConfirmation {
    let slot = label.trim().to_string();
    tracing::info!(slot = %slot, "Service booked");
    BookingConfirmation {
        message: format!("Service booked for {slot}! Confirmation sent via WhatsApp."),
        slot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_slots_start_one_day_out() {
        let now = Utc.with_ymd_and_hms(2024, 3, 4, 14, 30, 0).unwrap();
        let slots = available_slots(&now, 5);
        assert_eq!(
            slots,
            vec![
                "Tue, Mar 05 @ 02:30 PM",
                "Wed, Mar 06 @ 02:30 PM",
                "Thu, Mar 07 @ 02:30 PM",
                "Fri, Mar 08 @ 02:30 PM",
                "Sat, Mar 09 @ 02:30 PM",
            ]
        );
    }

    #[test]
    fn test_slot_instants_are_24h_apart() {
        let now = Utc.with_ymd_and_hms(2024, 12, 30, 9, 5, 0).unwrap();
        let slots = service_slots(&now, 3);
        assert_eq!(slots[0].starts_at, now + Duration::hours(24));
        assert_eq!(slots[2].starts_at, now + Duration::hours(72));
        assert_eq!(slots[2].label, "Thu, Jan 02 @ 09:05 AM");
    }

    #[test]
    fn test_local_offset_is_respected() {
        let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let now = tz.with_ymd_and_hms(2024, 3, 4, 23, 0, 0).unwrap();
        assert_eq!(available_slots(&now, 1), vec!["Tue, Mar 05 @ 11:00 PM"]);
    }

    #[test]
    fn test_zero_count_and_default_count() {
        let now = Utc::now();
        assert!(available_slots(&now, 0).is_empty());
        assert_eq!(default_slots(&now).len(), 5);
    }

    #[test]
    fn test_confirmation_accepts_any_label() {
        let confirmation = confirm_booking("  whenever suits  ");
        assert_eq!(confirmation.slot, "whenever suits");
        assert!(confirmation.message.contains("whenever suits"));
    }
}
