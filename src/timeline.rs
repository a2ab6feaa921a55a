use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const START: NaiveDateTime = match NaiveDate::from_ymd_opt(2024, 1, 15) {
    Some(date) => NaiveDateTime::new(date, NaiveTime::MIN),
    None => panic!("invalid start date"),
};
pub const SPAN_DAYS: i64 = 7;
pub const STEP_MINUTES: i64 = 15;

/// Evenly spaced instants from `START` (inclusive) to `START + SPAN_DAYS` (exclusive).
#[derive(Debug, Clone)]
pub struct Timeline {
    next: NaiveDateTime,
    end: NaiveDateTime,
    step: Duration,
}

impl Timeline {
    pub fn new() -> Timeline {
        Timeline {
            next: START,
            end: START + Duration::days(SPAN_DAYS),
            step: Duration::minutes(STEP_MINUTES),
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Timeline {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next = current + self.step;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next >= self.end {
            0
        } else {
            let span = (self.end - self.next).num_minutes();
            let step = self.step.num_minutes();
            ((span + step - 1) / step) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Timeline {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_count() {
        assert_eq!(Timeline::new().len(), 672);
        assert_eq!(Timeline::new().count(), 672);
    }

    #[test]
    fn test_first_and_last_instant() {
        let instants: Vec<_> = Timeline::new().collect();
        assert_eq!(
            instants[0],
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert_eq!(
            *instants.last().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 21)
                .unwrap()
                .and_hms_opt(23, 45, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_instants_are_evenly_spaced() {
        let instants: Vec<_> = Timeline::new().collect();
        for pair in instants.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::minutes(15));
        }
    }

    #[test]
    fn test_size_hint_shrinks() {
        let mut timeline = Timeline::new();
        timeline.nth(99);
        assert_eq!(timeline.len(), 572);
    }

    #[test]
    fn test_restartable() {
        let timeline = Timeline::new();
        let first: Vec<_> = timeline.clone().collect();
        let second: Vec<_> = timeline.collect();
        assert_eq!(first, second);
    }
}
