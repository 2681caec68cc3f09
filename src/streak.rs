//! Daily visit streaks and milestone detection.

use chrono::NaiveDate;

/// Streak lengths that earn a one-time bonus on the day they are reached.
pub const STREAK_MILESTONES: [u32; 4] = [3, 7, 14, 30];

/// RZP awarded per streak day when a milestone is reached.
pub const MILESTONE_POINTS_PER_DAY: u32 = 10;

/// Persisted streak state for this device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakState {
    pub last_visit: Option<NaiveDate>,
    pub streak_count: u32,
}

/// Result of checking the streak on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakOutcome {
    pub streak: u32,
    pub crossed_milestone: bool,
    pub first_check_today: bool,
}

impl StreakOutcome {
    /// The state to persist after this check.
    pub fn state_for(&self, today: NaiveDate) -> StreakState {
        StreakState {
            last_visit: Some(today),
            streak_count: self.streak,
        }
    }

    /// Bonus points earned by this check, if a milestone was crossed.
    pub fn bonus_points(&self) -> Option<u32> {
        self.crossed_milestone
            .then(|| self.streak.saturating_mul(MILESTONE_POINTS_PER_DAY))
    }

    pub fn badge_label(&self) -> String {
        format!("{}-Day Streak!", self.streak)
    }
}

pub fn is_milestone(streak: u32) -> bool {
    STREAK_MILESTONES.contains(&streak)
}

/// Continue, keep or reset a streak given the last recorded visit.
pub fn evaluate(today: NaiveDate, last_visit: Option<NaiveDate>, prior_streak: u32) -> StreakOutcome {
    if last_visit == Some(today) {
        return StreakOutcome {
            streak: prior_streak.max(1),
            crossed_milestone: false,
            first_check_today: false,
        };
    }

    let yesterday = today.pred_opt();
    let streak = if last_visit.is_some() && last_visit == yesterday {
        prior_streak.saturating_add(1)
    } else {
        1
    };

    StreakOutcome {
        streak,
        crossed_milestone: streak > 1 && is_milestone(streak),
        first_check_today: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_first_ever_visit() {
        let outcome = evaluate(day(10), None, 0);
        assert_eq!(outcome.streak, 1);
        assert!(outcome.first_check_today);
        assert!(!outcome.crossed_milestone);
        assert_eq!(outcome.bonus_points(), None);
    }

    #[test]
    fn test_same_day_recheck() {
        let outcome = evaluate(day(10), Some(day(10)), 5);
        assert_eq!(outcome.streak, 5);
        assert!(!outcome.first_check_today);

        let outcome = evaluate(day(10), Some(day(10)), 0);
        assert_eq!(outcome.streak, 1);
    }

    #[test]
    fn test_same_day_never_reawards_milestone() {
        let first = evaluate(day(10), Some(day(9)), 2);
        assert!(first.crossed_milestone);

        let again = evaluate(day(10), Some(day(10)), first.streak);
        assert_eq!(again.streak, 3);
        assert!(!again.crossed_milestone);
    }

    #[test]
    fn test_consecutive_day_extends() {
        let outcome = evaluate(day(10), Some(day(9)), 4);
        assert_eq!(outcome.streak, 5);
        assert!(outcome.first_check_today);
    }

    #[test]
    fn test_gap_resets() {
        assert_eq!(evaluate(day(10), Some(day(8)), 6).streak, 1);
        assert_eq!(evaluate(day(10), Some(day(1)), 29).streak, 1);
        // A visit recorded in the future counts as a gap.
        assert_eq!(evaluate(day(10), Some(day(11)), 4).streak, 1);
    }

    #[test]
    fn test_month_boundary_is_consecutive() {
        let last = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(evaluate(today, Some(last), 1).streak, 2);
    }

    #[test]
    fn test_milestone_sequence() {
        let mut state = StreakState::default();
        let mut bonuses = Vec::new();

        for d in 1..=3 {
            let outcome = evaluate(day(d), state.last_visit, state.streak_count);
            if let Some(bonus) = outcome.bonus_points() {
                bonuses.push((outcome.streak, bonus, outcome.badge_label()));
            }
            state = outcome.state_for(day(d));
        }

        assert_eq!(bonuses, vec![(3, 30, "3-Day Streak!".to_string())]);
    }

    #[test]
    fn test_two_days_never_triggers() {
        let first = evaluate(day(1), None, 0);
        let second = evaluate(day(2), Some(day(1)), first.streak);
        assert_eq!(second.streak, 2);
        assert!(!first.crossed_milestone && !second.crossed_milestone);
    }

    #[test]
    fn test_every_milestone_pays_ten_per_day() {
        for milestone in STREAK_MILESTONES {
            let outcome = evaluate(day(20), Some(day(19)), milestone - 1);
            assert!(outcome.crossed_milestone);
            assert_eq!(outcome.bonus_points(), Some(milestone * 10));
        }
        assert!(!evaluate(day(20), Some(day(19)), 3).crossed_milestone);
    }
}
