//! Rotating example queries for the search input placeholder.

use std::time::Duration;

/// Example queries, in display order.
pub const EXAMPLE_QUERIES: &[&str] = &[
    "e.g., Porsche 911 GT3 RS",
    "e.g., Bugatti Chiron",
    "e.g., Nissan GT-R",
    "e.g., Ferrari 296 GTB",
    "e.g., McLaren 720S",
    "e.g., Lamborghini Huracán",
];

/// Cyclic index over a fixed list, advanced once per period.
#[derive(Clone, Debug)]
pub struct PlaceholderCycle {
    items: &'static [&'static str],
    period: Duration,
    index: usize,
}

impl Default for PlaceholderCycle {
    fn default() -> Self {
        Self::new(EXAMPLE_QUERIES, Duration::from_millis(3000))
    }
}

impl PlaceholderCycle {
    /// Cycle over `items`, one step per `period`.
    pub fn new(items: &'static [&'static str], period: Duration) -> Self {
        Self {
            items,
            period,
            index: 0,
        }
    }

    /// Rotation period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Current index; always `< len()` for a non-empty list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current placeholder text, empty for an empty list.
    pub fn current(&self) -> &'static str {
        self.items.get(self.index).copied().unwrap_or_default()
    }

    /// Step to the next entry, wrapping. Returns the new text.
    pub fn advance(&mut self) -> &'static str {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
        self.current()
    }

    /// Index shown `elapsed` after the rotation started.
    pub fn index_at(&self, elapsed: Duration) -> usize {
        if self.items.is_empty() || self.period.is_zero() {
            return 0;
        }
        let ticks = elapsed.as_nanos() / self.period.as_nanos();
        (ticks % self.items.len() as u128) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn advance_wraps_after_last_entry() {
        let mut cycle = PlaceholderCycle::default();
        let seen: Vec<_> = (0..cycle.len()).map(|_| cycle.advance()).collect();
        assert_eq!(seen.last(), Some(&"e.g., Porsche 911 GT3 RS"));
        assert_eq!(cycle.index(), 0);
        assert_eq!(seen[0], "e.g., Bugatti Chiron");
    }

    #[test]
    fn full_cycle_takes_len_times_period() {
        let cycle = PlaceholderCycle::default();
        let full = Duration::from_millis(3000 * cycle.len() as u64);
        assert_eq!(cycle.index_at(Duration::ZERO), 0);
        assert_eq!(cycle.index_at(Duration::from_millis(2999)), 0);
        assert_eq!(cycle.index_at(Duration::from_millis(3000)), 1);
        assert_eq!(cycle.index_at(full - Duration::from_millis(1)), cycle.len() - 1);
        assert_eq!(cycle.index_at(full), 0);
    }

    #[test]
    fn index_never_leaves_range() {
        let mut cycle = PlaceholderCycle::default();
        for step in 0..1_000u64 {
            assert!(cycle.index() < cycle.len());
            assert!(cycle.index_at(Duration::from_millis(step * 1_337)) < cycle.len());
            cycle.advance();
        }
    }

    #[test]
    fn sub_millisecond_period_still_cycles() {
        let cycle = PlaceholderCycle::new(EXAMPLE_QUERIES, Duration::from_micros(500));
        assert_eq!(cycle.index_at(Duration::from_micros(499)), 0);
        assert_eq!(cycle.index_at(Duration::from_micros(500)), 1);
        // 1 s is 2000 periods; 2000 % 6 == 2
        assert_eq!(cycle.index_at(Duration::from_secs(1)), 2);
    }

    #[test]
    fn empty_list_is_harmless() {
        let mut cycle = PlaceholderCycle::new(&[], Duration::from_millis(10));
        assert_eq!(cycle.advance(), "");
        assert_eq!(cycle.index_at(Duration::from_secs(5)), 0);
        assert!(cycle.is_empty());
    }
}
