use std::collections::VecDeque;

use chrono::Local;

use super::{Interaction, InteractionView, NewInteraction};

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Bounded, chronologically ordered record of past interactions.
///
/// Once `limit` entries are held, every append evicts the oldest one. The log
/// also owns the id sequence, so ids keep increasing across evictions and
/// [`HistoryLog::clear`].
#[derive(Debug)]
pub struct HistoryLog {
    entries: VecDeque<Interaction>,
    limit: usize,
    next_id: u64,
}

impl HistoryLog {
    /// A limit of zero is raised to one.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
            next_id: 1,
        }
    }

    pub fn append(&mut self, new: NewInteraction) -> Interaction {
        let interaction = Interaction::record(self.next_id, new, Local::now());
        self.next_id += 1;

        self.entries.push_back(interaction.clone());
        if self.entries.len() > self.limit {
            self.entries.pop_front();
        }

        interaction
    }

    /// Oldest first.
    pub fn all(&self) -> Vec<InteractionView> {
        self.entries.iter().map(Interaction::view).collect()
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<InteractionView> {
        self.entries
            .iter()
            .filter(|i| i.category() == category)
            .map(Interaction::view)
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> NewInteraction {
        NewInteraction::new(format!("prompt {n}"), format!("response {n}"))
    }

    #[test]
    fn evicts_oldest_past_limit() {
        let mut log = HistoryLog::new(50);
        for n in 1..=51 {
            log.append(entry(n));
        }

        let all = log.all();
        assert_eq!(log.count(), 50);
        assert!(all.iter().all(|v| v.user_input != "prompt 1"));
        assert_eq!(all.first().map(|v| v.user_input.as_str()), Some("prompt 2"));
        assert_eq!(all.last().map(|v| v.user_input.as_str()), Some("prompt 51"));
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut log = HistoryLog::new(3);
        let first = log.append(entry(1));
        log.append(entry(2));
        log.clear();
        assert_eq!(log.count(), 0);
        assert!(log.is_empty());

        let next = log.append(entry(3));
        assert_eq!(first.id(), 1);
        assert_eq!(next.id(), 3);
    }

    #[test]
    fn filter_keeps_order() {
        let mut log = HistoryLog::default();
        log.append(entry(1).with_category("joke"));
        log.append(entry(2));
        log.append(entry(3).with_category("joke"));

        let jokes = log.filter_by_category("joke");
        let inputs: Vec<_> = jokes.iter().map(|v| v.user_input.as_str()).collect();
        assert_eq!(inputs, vec!["prompt 1", "prompt 3"]);
        assert_eq!(log.filter_by_category("general").len(), 1);
        assert!(log.filter_by_category("chat").is_empty());
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let mut log = HistoryLog::new(0);
        assert_eq!(log.capacity(), 1);
        log.append(entry(1));
        log.append(entry(2));
        assert_eq!(log.count(), 1);
        assert_eq!(log.all()[0].user_input, "prompt 2");
    }
}
