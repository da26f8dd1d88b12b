use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Source of the current wall-clock time. Injected so recommendations are
/// deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock reading local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Cold,
    Hot,
    Mild,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Cold => "cold",
            Condition::Hot => "hot",
            Condition::Mild => "mild",
        }
    }
}

/// Season and temperature label derived purely from the calendar month.
/// Not real weather data; recomputed per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherContext {
    pub season: Season,
    pub condition: Condition,
}

impl WeatherContext {
    pub fn from_clock(clock: &dyn Clock) -> Self {
        match clock.now().month() {
            12 | 1 | 2 => Self {
                season: Season::Winter,
                condition: Condition::Cold,
            },
            6 | 7 | 8 => Self {
                season: Season::Summer,
                condition: Condition::Hot,
            },
            3..=5 => Self {
                season: Season::Spring,
                condition: Condition::Mild,
            },
            _ => Self {
                season: Season::Fall,
                condition: Condition::Mild,
            },
        }
    }
}

/// Meal period derived purely from the hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Breakfast,
    Lunch,
    Dinner,
    LateNight,
}

impl TimeOfDay {
    pub fn from_clock(clock: &dyn Clock) -> Self {
        match clock.now().hour() {
            5..=10 => TimeOfDay::Breakfast,
            11..=15 => TimeOfDay::Lunch,
            16..=21 => TimeOfDay::Dinner,
            _ => TimeOfDay::LateNight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Breakfast => "breakfast",
            TimeOfDay::Lunch => "lunch",
            TimeOfDay::Dinner => "dinner",
            TimeOfDay::LateNight => "late night",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn clock_at(month: u32, day: u32, hour: u32) -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, month, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn winter_months_are_cold() {
        for month in [12, 1, 2] {
            let weather = WeatherContext::from_clock(&clock_at(month, 15, 12));
            assert_eq!(weather.season, Season::Winter);
            assert_eq!(weather.condition, Condition::Cold);
        }
    }

    #[test]
    fn july_is_hot_summer() {
        let weather = WeatherContext::from_clock(&clock_at(7, 4, 12));
        assert_eq!(weather.season, Season::Summer);
        assert_eq!(weather.condition, Condition::Hot);
    }

    #[test]
    fn shoulder_seasons_are_mild() {
        let spring = WeatherContext::from_clock(&clock_at(4, 1, 12));
        assert_eq!(spring.season, Season::Spring);
        assert_eq!(spring.condition, Condition::Mild);

        let fall = WeatherContext::from_clock(&clock_at(10, 1, 12));
        assert_eq!(fall.season, Season::Fall);
        assert_eq!(fall.condition, Condition::Mild);
    }

    #[test]
    fn meal_period_bucket_boundaries() {
        assert_eq!(TimeOfDay::from_clock(&clock_at(6, 1, 4)), TimeOfDay::LateNight);
        assert_eq!(TimeOfDay::from_clock(&clock_at(6, 1, 5)), TimeOfDay::Breakfast);
        assert_eq!(TimeOfDay::from_clock(&clock_at(6, 1, 10)), TimeOfDay::Breakfast);
        assert_eq!(TimeOfDay::from_clock(&clock_at(6, 1, 11)), TimeOfDay::Lunch);
        assert_eq!(TimeOfDay::from_clock(&clock_at(6, 1, 15)), TimeOfDay::Lunch);
        assert_eq!(TimeOfDay::from_clock(&clock_at(6, 1, 16)), TimeOfDay::Dinner);
        assert_eq!(TimeOfDay::from_clock(&clock_at(6, 1, 21)), TimeOfDay::Dinner);
        assert_eq!(TimeOfDay::from_clock(&clock_at(6, 1, 22)), TimeOfDay::LateNight);
    }
}
