#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod duration;
mod script;
mod share;
mod text;

pub use duration::{DurationBucket, DurationError, DurationRange, duration_choices};
pub use script::{LineKind, ScriptLine, parse_instructions, script_line_count, script_preview};
pub use share::SharePayload;
pub use text::{bulletize, prefers_paragraph, split_research_source};

use std::{fmt, slice::Iter, str::FromStr};

use derive_more::{Deref, Display, Into};

/// One entry of the fixed exercise catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub slug: &'static str,
    pub title: &'static str,
    pub competency: Competency,
    pub duration: &'static str,
    pub one_liner: &'static str,
    pub instructions: &'static str,
    pub why_use: &'static str,
    pub when_to_use: &'static [&'static str],
    pub facilitation: Facilitation,
    pub research: Research,
}

#[derive(Deref, Display, Into, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(u32);

impl From<u32> for ExerciseID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ExerciseID {
    type Err = std::num::ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(value.parse()?))
    }
}

/// Notes shown to the facilitator before and while guiding an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facilitation {
    pub setup: &'static str,
    pub guidance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Research {
    pub level: EvidenceLevel,
    pub summary: &'static str,
    pub findings: &'static [&'static str],
    pub limitations: Option<&'static str>,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceLevel {
    Moderate,
    Strong,
}

impl fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EvidenceLevel::Moderate => "⭐⭐",
                EvidenceLevel::Strong => "⭐⭐⭐",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Competency {
    PsychologicalSafety,
    ConflictPrevention,
    EmotionalIntelligence,
    AdaptabilityResilience,
}

impl Competency {
    /// Stable key used in category-scoped markup and links.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Competency::PsychologicalSafety => "psychological-safety",
            Competency::ConflictPrevention => "conflict-prevention",
            Competency::EmotionalIntelligence => "emotional-intelligence",
            Competency::AdaptabilityResilience => "adaptability-resilience",
        }
    }
}

impl Property for Competency {
    fn iter() -> Iter<'static, Competency> {
        static COMPETENCIES: [Competency; 4] = [
            Competency::PsychologicalSafety,
            Competency::ConflictPrevention,
            Competency::EmotionalIntelligence,
            Competency::AdaptabilityResilience,
        ];
        COMPETENCIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Competency::PsychologicalSafety => "Psykologisk trygghet",
            Competency::ConflictPrevention => "Konfliktförebyggande",
            Competency::EmotionalIntelligence => "Emotionell intelligens",
            Competency::AdaptabilityResilience => "Anpassningsförmåga & motståndskraft",
        }
    }
}

#[derive(Default, Clone, Copy, PartialEq)]
pub struct ExerciseFilter {
    pub duration: DurationBucket,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises(&self) -> Vec<&'static Exercise> {
        catalog::EXERCISES
            .iter()
            .filter(|e| self.duration.matches(e.duration))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duration == DurationBucket::All
    }

    #[must_use]
    pub fn duration_list(&self) -> Vec<(DurationBucket, bool)> {
        DurationBucket::iter()
            .map(|b| (*b, self.duration == *b))
            .collect::<Vec<_>>()
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn iter_filter() -> Iter<'static, Self> {
        Self::iter()
    }
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exercise_filter_all() {
        assert_eq!(ExerciseFilter::default().exercises().len(), 9);
        assert!(ExerciseFilter::default().is_empty());
    }

    #[test]
    fn test_exercise_filter_long() {
        let filter = ExerciseFilter {
            duration: DurationBucket::Long,
        };
        assert!(!filter.is_empty());
        assert_eq!(
            filter
                .exercises()
                .iter()
                .map(|e| u32::from(e.id))
                .collect::<Vec<_>>(),
            vec![1, 2, 8, 9]
        );
    }

    #[test]
    fn test_exercise_filter_duration_list() {
        let filter = ExerciseFilter {
            duration: DurationBucket::Short,
        };
        assert_eq!(
            filter.duration_list(),
            vec![
                (DurationBucket::All, false),
                (DurationBucket::Short, true),
                (DurationBucket::Medium, false),
                (DurationBucket::Long, false),
            ]
        );
    }

    #[test]
    fn test_exercise_id_from_str() {
        assert_eq!("7".parse::<ExerciseID>(), Ok(ExerciseID::from(7)));
        assert!("seven".parse::<ExerciseID>().is_err());
    }

    #[test]
    fn test_competency_keys_unique() {
        let keys = Competency::iter().map(|c| c.key()).collect::<Vec<_>>();
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys, deduped);
    }
}
