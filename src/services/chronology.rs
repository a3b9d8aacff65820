//! Court-ready chronology generation.

use crate::api::ChronologyEntry;
use crate::models::TimelineEvent;

/// Build a numbered chronology from a date-ascending event sequence.
///
/// Entries are 1-indexed. `days_since_previous` is 0 for the first entry
/// and otherwise the whole-day gap from the immediately preceding event.
pub fn build_chronology(events: &[TimelineEvent]) -> Vec<ChronologyEntry> {
    let mut entries = Vec::with_capacity(events.len());
    let mut previous_date: Option<chrono::NaiveDate> = None;

    for (index, event) in events.iter().enumerate() {
        let days_since_previous = match previous_date {
            Some(prev) => (event.event_date - prev).num_days(),
            None => 0,
        };
        previous_date = Some(event.event_date);

        entries.push(ChronologyEntry {
            sequence: index + 1,
            date: event.event_date.format("%B %d, %Y").to_string(),
            title: event.event_title.clone(),
            category: event.category.label(),
            impact_level: event.impact_level,
            days_since_previous,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    use crate::api::CaseId;
    use crate::models::{EventCategory, ImpactLevel};

    fn create_test_event(date: NaiveDate, title: &str) -> TimelineEvent {
        TimelineEvent {
            id: None,
            case_id: CaseId::new(1),
            event_date: date,
            event_time: None,
            event_title: title.to_string(),
            event_description: String::new(),
            category: EventCategory::LegalEvent,
            evidence_type: None,
            impact_level: ImpactLevel::Low,
            witness_present: false,
            police_called: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_chronology() {
        assert!(build_chronology(&[]).is_empty());
    }

    #[test]
    fn test_sequence_and_gaps() {
        let events = vec![
            create_test_event(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), "first"),
            create_test_event(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), "same day"),
            create_test_event(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(), "later"),
        ];
        let entries = build_chronology(&events);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].sequence, 1);
        assert_eq!(entries[0].days_since_previous, 0);
        assert_eq!(entries[1].days_since_previous, 0);
        assert_eq!(entries[2].sequence, 3);
        assert_eq!(entries[2].days_since_previous, 36);
    }

    #[test]
    fn test_date_formatting_and_labels() {
        let events = vec![create_test_event(
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            "hearing",
        )];
        let entries = build_chronology(&events);

        assert_eq!(entries[0].date, "February 10, 2024");
        assert_eq!(entries[0].category, "Legal Event");
        assert_eq!(entries[0].impact_level, ImpactLevel::Low);
    }

    #[test]
    fn test_gaps_non_negative_for_sorted_input() {
        let dates = [
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ];
        let events: Vec<_> = dates
            .iter()
            .map(|d| create_test_event(*d, "e"))
            .collect();
        let entries = build_chronology(&events);
        assert!(entries.iter().all(|e| e.days_since_previous >= 0));
    }
}
