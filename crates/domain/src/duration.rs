use std::{slice::Iter, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::Property;

static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)(?:\s*-\s*(\d+))?\s*min").expect("valid pattern"));

/// Lower and upper bound in minutes extracted from a human-readable duration
/// string such as `"10 min"` or `"10-15 min"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRange {
    lower: u32,
    upper: u32,
}

impl DurationRange {
    pub fn parse(value: &str) -> Result<Self, DurationError> {
        let captures = DURATION
            .captures(value)
            .ok_or(DurationError::Unrecognized)?;
        let lower = captures[1]
            .parse::<u32>()
            .map_err(|_| DurationError::Unrecognized)?;
        let upper = match captures.get(2) {
            Some(m) => m
                .as_str()
                .parse::<u32>()
                .map_err(|_| DurationError::Unrecognized)?,
            None => lower,
        };
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(&self) -> u32 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> u32 {
        self.upper
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f32 {
        (self.lower + self.upper) as f32 / 2.0
    }

    #[must_use]
    pub fn is_range(&self) -> bool {
        self.lower != self.upper
    }
}

impl TryFrom<&str> for DurationRange {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DurationError {
    #[error("Duration must contain \"N min\" or \"N-M min\"")]
    Unrecognized,
}

/// Discrete duration choices offered when an exercise supports a variable
/// duration. Ranges are stepped in 5-minute increments from lower to upper
/// inclusive; everything else yields the original string as the only choice.
#[must_use]
pub fn duration_choices(duration: &str) -> Vec<String> {
    match DurationRange::parse(duration) {
        Ok(range) if range.is_range() => {
            let choices = (range.lower()..=range.upper())
                .step_by(5)
                .map(|minutes| format!("{minutes} min"))
                .collect::<Vec<_>>();
            if choices.is_empty() {
                vec![duration.to_string()]
            } else {
                choices
            }
        }
        _ => vec![duration.to_string()],
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DurationBucket {
    #[default]
    All,
    Short,
    Medium,
    Long,
}

impl DurationBucket {
    /// Whether an exercise with the given duration string belongs to this
    /// bucket. Unparseable durations match every bucket so that a parse
    /// failure never hides content.
    #[must_use]
    pub fn matches(self, duration: &str) -> bool {
        let Ok(range) = DurationRange::parse(duration) else {
            return true;
        };
        let mean = range.mean();
        match self {
            DurationBucket::All => true,
            DurationBucket::Short => (1.0..=3.0).contains(&mean),
            DurationBucket::Medium => (5.0..=10.0).contains(&mean),
            DurationBucket::Long => mean >= 10.0,
        }
    }

    /// Stable key used in the list route's query string.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            DurationBucket::All => "all",
            DurationBucket::Short => "1-3min",
            DurationBucket::Medium => "5-10min",
            DurationBucket::Long => "10+min",
        }
    }

    /// Lenient inverse of [`key`](Self::key); unknown keys select all.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        DurationBucket::iter()
            .find(|b| b.key() == key)
            .copied()
            .unwrap_or_default()
    }
}

impl Property for DurationBucket {
    fn iter() -> Iter<'static, DurationBucket> {
        static BUCKETS: [DurationBucket; 4] = [
            DurationBucket::All,
            DurationBucket::Short,
            DurationBucket::Medium,
            DurationBucket::Long,
        ];
        BUCKETS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DurationBucket::All => "Alla",
            DurationBucket::Short => "1-3 min",
            DurationBucket::Medium => "5-10 min",
            DurationBucket::Long => "10+ min",
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("10-15 min", 10, 15)]
    #[case("10-15min", 10, 15)]
    #[case("10 - 15 MIN", 10, 15)]
    #[case("5 min", 5, 5)]
    #[case("1-2 min", 1, 2)]
    #[case("ca 10 min", 10, 10)]
    fn test_duration_range_parse(#[case] value: &str, #[case] lower: u32, #[case] upper: u32) {
        let range = DurationRange::parse(value).unwrap();
        assert_eq!(range.lower(), lower);
        assert_eq!(range.upper(), upper);
    }

    #[rstest]
    #[case("")]
    #[case("kort")]
    #[case("10-15")]
    fn test_duration_range_parse_unrecognized(#[case] value: &str) {
        assert_eq!(
            DurationRange::parse(value),
            Err(DurationError::Unrecognized)
        );
    }

    #[rstest]
    #[case("10-15 min", 12.5)]
    #[case("1-2 min", 1.5)]
    #[case("10 min", 10.0)]
    fn test_duration_range_mean(#[case] value: &str, #[case] mean: f32) {
        assert_approx_eq!(DurationRange::parse(value).unwrap().mean(), mean);
    }

    #[rstest]
    #[case("10-15 min", false, false, true)]
    #[case("1-2 min", true, false, false)]
    #[case("2-3 min", true, false, false)]
    #[case("5-8 min", false, true, false)]
    // A mean of exactly 10 belongs to both inclusive ranges.
    #[case("10 min", false, true, true)]
    fn test_duration_bucket_matches(
        #[case] value: &str,
        #[case] short: bool,
        #[case] medium: bool,
        #[case] long: bool,
    ) {
        assert!(DurationBucket::All.matches(value));
        assert_eq!(DurationBucket::Short.matches(value), short);
        assert_eq!(DurationBucket::Medium.matches(value), medium);
        assert_eq!(DurationBucket::Long.matches(value), long);
    }

    #[test]
    fn test_duration_bucket_matches_fail_open() {
        for bucket in DurationBucket::iter() {
            assert!(bucket.matches("okänd längd"));
        }
    }

    #[test]
    fn test_duration_bucket_scenario() {
        let durations = ["10-15 min", "5-8 min", "1-2 min"];
        assert_eq!(
            durations
                .iter()
                .filter(|d| DurationBucket::Long.matches(d))
                .copied()
                .collect::<Vec<_>>(),
            vec!["10-15 min"]
        );
    }

    #[rstest]
    #[case("all", DurationBucket::All)]
    #[case("1-3min", DurationBucket::Short)]
    #[case("5-10min", DurationBucket::Medium)]
    #[case("10+min", DurationBucket::Long)]
    #[case("nonsense", DurationBucket::All)]
    fn test_duration_bucket_from_key(#[case] key: &str, #[case] expected: DurationBucket) {
        assert_eq!(DurationBucket::from_key(key), expected);
        assert_eq!(DurationBucket::from_key(expected.key()), expected);
    }

    #[rstest]
    #[case("10-15 min", &["10 min", "15 min"])]
    // Stepping by 5 from 10 overshoots 12, leaving the lower bound only.
    #[case("10-12 min", &["10 min"])]
    #[case("5-8 min", &["5 min"])]
    #[case("1-2 min", &["1 min"])]
    #[case("10 min", &["10 min"])]
    #[case("okänd längd", &["okänd längd"])]
    #[case("15-10 min", &["15-10 min"])]
    fn test_duration_choices(#[case] value: &str, #[case] expected: &[&str]) {
        assert_eq!(duration_choices(value), expected);
    }
}
