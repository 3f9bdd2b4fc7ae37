use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::{DEFAULT_URGENT_WINDOW_DAYS, DeadlineConfig};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::High => "bg-red-100 text-red-800",
            Self::Medium => "bg-yellow-100 text-yellow-800",
            Self::Low => "bg-green-100 text-green-800",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deadline {
    pub id: Uuid,
    pub title: String,
    pub due: NaiveDate,
    pub priority: Priority,
}

impl Deadline {
    /// A date input carries no time; it is read as midnight UTC.
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineCard {
    pub id: Uuid,
    pub title: String,
    pub card_class: &'static str,
    pub due_label: String,
    pub badge_class: &'static str,
    pub priority_label: String,
    pub urgent: bool,
}

/// True when `due` falls less than `window` after `now`. Past due dates
/// are urgent too.
pub fn is_urgent(due: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    due.signed_duration_since(now) < window
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineBoard {
    window: Duration,
    items: Vec<Deadline>,
}

impl Default for DeadlineBoard {
    fn default() -> Self {
        Self::new(&DeadlineConfig::default())
    }
}

impl DeadlineBoard {
    pub fn new(config: &DeadlineConfig) -> Self {
        Self {
            window: Duration::try_days(config.urgent_window_days)
                .unwrap_or_else(|| Duration::days(DEFAULT_URGENT_WINDOW_DAYS)),
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Deadline] {
        &self.items
    }

    /// Adds a deadline from raw form values. All three fields must be
    /// present and well formed; otherwise nothing is added.
    pub fn add(&mut self, title: &str, date: &str, priority: &str) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let due = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
        let priority = Priority::parse(priority)?;

        let deadline = Deadline {
            id: Uuid::new_v4(),
            title: title.to_string(),
            due,
            priority,
        };
        let id = deadline.id;
        debug!(%id, %due, priority = priority.as_key(), "deadline added");
        self.items.push(deadline);
        Some(id)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Deadline> {
        let index = self.items.iter().position(|item| item.id == id)?;
        debug!(%id, "deadline removed");
        Some(self.items.remove(index))
    }

    /// Urgency is derived here, at render time, never stored.
    pub fn cards(&self, now: DateTime<Utc>) -> Vec<DeadlineCard> {
        self.items
            .iter()
            .map(|item| {
                let urgent = is_urgent(item.due_at(), now, self.window);
                DeadlineCard {
                    id: item.id,
                    title: item.title.clone(),
                    card_class: if urgent {
                        "deadline-urgent"
                    } else {
                        "deadline-normal"
                    },
                    due_label: format!("Due: {}", item.due.format("%-m/%-d/%Y")),
                    badge_class: item.priority.badge_class(),
                    priority_label: format!("{} priority", item.priority.as_key()),
                    urgent,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn urgency_boundary_is_seven_days() {
        let window = Duration::days(7);
        let now = at(2026, 3, 1, 0, 0, 0);

        assert!(is_urgent(at(2026, 3, 7, 23, 59, 59), now, window));
        assert!(!is_urgent(at(2026, 3, 8, 0, 0, 0), now, window));
        assert!(!is_urgent(at(2026, 3, 8, 0, 0, 1), now, window));
        assert!(is_urgent(at(2026, 2, 1, 0, 0, 0), now, window));
    }

    #[test]
    fn add_requires_all_three_fields() {
        let mut board = DeadlineBoard::default();
        assert!(board.add("", "2026-03-04", "high").is_none());
        assert!(board.add("Essay", "", "high").is_none());
        assert!(board.add("Essay", "2026-03-04", "").is_none());
        assert!(board.add("Essay", "03/04/2026", "high").is_none());
        assert!(board.add("Essay", "2026-03-04", "urgent").is_none());
        assert!(board.items().is_empty());

        let id = board.add("Essay", "2026-03-04", "High").expect("added");
        assert_eq!(board.items()[0].id, id);
        assert_eq!(board.items()[0].priority, Priority::High);
    }

    #[test]
    fn titles_are_trimmed_and_blank_titles_rejected() {
        let mut board = DeadlineBoard::default();
        assert!(board.add("   ", "2026-03-04", "low").is_none());

        board.add("  Essay  ", "2026-03-04", "low").expect("added");
        assert_eq!(board.items()[0].title, "Essay");
    }

    #[test]
    fn out_of_range_window_uses_default() {
        let mut board = DeadlineBoard::new(&DeadlineConfig {
            urgent_window_days: i64::MAX,
        });
        board.add("Quiz", "2026-03-06", "low").expect("near");
        board.add("Exam", "2026-03-10", "high").expect("far");

        let cards = board.cards(at(2026, 3, 1, 0, 0, 0));
        assert!(cards[0].urgent);
        assert!(!cards[1].urgent);
    }

    #[test]
    fn cards_derive_classes_from_now() {
        let mut board = DeadlineBoard::default();
        board.add("Lab report", "2026-03-05", "medium").expect("near");
        board.add("Thesis", "2026-04-20", "low").expect("far");

        let cards = board.cards(at(2026, 3, 1, 9, 30, 0));
        assert_eq!(cards.len(), 2);

        assert!(cards[0].urgent);
        assert_eq!(cards[0].card_class, "deadline-urgent");
        assert_eq!(cards[0].due_label, "Due: 3/5/2026");
        assert_eq!(cards[0].badge_class, "bg-yellow-100 text-yellow-800");
        assert_eq!(cards[0].priority_label, "medium priority");

        assert!(!cards[1].urgent);
        assert_eq!(cards[1].card_class, "deadline-normal");
        assert_eq!(cards[1].badge_class, "bg-green-100 text-green-800");

        let later = board.cards(at(2026, 4, 15, 0, 0, 0));
        assert!(later[1].urgent);
    }

    #[test]
    fn remove_deletes_only_the_target() {
        let mut board = DeadlineBoard::default();
        let keep = board.add("Quiz", "2026-05-01", "low").expect("keep");
        let gone = board.add("Exam", "2026-05-02", "high").expect("gone");

        assert!(board.remove(gone).is_some());
        assert!(board.remove(gone).is_none());
        assert_eq!(board.items().len(), 1);
        assert_eq!(board.items()[0].id, keep);
    }
}
