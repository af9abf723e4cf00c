//! Classification of instruction text into facilitation script lines.
//!
//! The heuristics are tied to the Swedish catalog content and kept behind
//! this module so they can be swapped or localized without touching
//! rendering code.

use std::sync::LazyLock;

use regex::Regex;

static TIMING_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)paus|vänta|andas|innehåll|stanna|ta.*tid").expect("valid pattern")
});
static NOTE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(STEG|HUVUD|HALS|BRÖST|MAGE|HÄNDER|NAMNGE|NÄR|VAR|VARNING)")
        .expect("valid pattern")
});
static BREATHING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)andas").expect("valid pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A pause/breath/wait directive to the facilitator.
    TimingCue,
    /// Setup or meta guidance that is not read aloud.
    PractitionerNote,
    /// Spoken-aloud guidance text.
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine<'a> {
    pub text: &'a str,
    pub kind: LineKind,
    /// Visual cue only; does not affect classification.
    pub breathing: bool,
}

/// Splits raw instruction text into non-empty trimmed lines and classifies
/// each one. Bullet/header markers take priority over timing keywords; lines
/// are never dropped or reordered.
#[must_use]
pub fn parse_instructions(instructions: &str) -> Vec<ScriptLine<'_>> {
    instructions
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|text| ScriptLine {
            text,
            kind: classify(text),
            breathing: BREATHING.is_match(text),
        })
        .collect()
}

fn classify(line: &str) -> LineKind {
    if line.starts_with('•') || line.starts_with('-') || NOTE_HEADER.is_match(line) {
        LineKind::PractitionerNote
    } else if TIMING_CUE.is_match(line) {
        LineKind::TimingCue
    } else {
        LineKind::Script
    }
}

#[must_use]
pub fn script_line_count(lines: &[ScriptLine<'_>]) -> usize {
    lines
        .iter()
        .filter(|line| line.kind == LineKind::Script)
        .count()
}

/// Short teaser shown on the collapsed script section.
#[must_use]
pub fn script_preview(lines: &[ScriptLine<'_>]) -> String {
    let script_lines = lines
        .iter()
        .filter(|line| line.kind == LineKind::Script)
        .take(2)
        .map(|line| line.text)
        .collect::<Vec<_>>();
    match script_lines[..] {
        [] => "Klicka för att se skriptet".to_string(),
        [only] => format!("{}...", truncated(only, 80)),
        [first, ..] => format!("{}...", truncated(first, 60)),
    }
}

fn truncated(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Börja med att grunda in och skapa närvaron.", LineKind::Script, false)]
    #[case("Andas in – känn hur kroppen fylls.", LineKind::TimingCue, true)]
    #[case("⏸️ Låt minnet bli levande.", LineKind::Script, false)]
    #[case("• Sluta vad du håller på med", LineKind::PractitionerNote, false)]
    #[case("- bara stoppa", LineKind::PractitionerNote, false)]
    #[case("STEG 2: KROPPEN FRÅN TOPP TILL TÅ (7 minuter)", LineKind::PractitionerNote, false)]
    // A header line containing a timing keyword stays a practitioner note.
    #[case("STEG 4: ANDAS MED KROPPEN (2 minuter)", LineKind::PractitionerNote, true)]
    #[case("NAMNGE KÄNSLAN:", LineKind::PractitionerNote, false)]
    // The VAR prefix also matches ordinary words starting with "Var".
    #[case(
        "Varje andetag är annorlunda. Vissa är djupa, andra grunda.",
        LineKind::PractitionerNote,
        false
    )]
    #[case("Sitt bekvämt och ta några andetag.", LineKind::Script, false)]
    #[case("Fortsätt andas.", LineKind::TimingCue, true)]
    #[case("Låt kroppen få landa där den är.", LineKind::Script, false)]
    fn test_classify(#[case] line: &str, #[case] kind: LineKind, #[case] breathing: bool) {
        let parsed = parse_instructions(line);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].kind, kind);
        assert_eq!(parsed[0].breathing, breathing);
        assert_eq!(parsed[0].text, line.trim());
    }

    #[test]
    fn test_parse_instructions_keeps_order_and_lines() {
        let instructions = "Första raden.\n\n  Andra raden.  \n\nVänta ett ögonblick.\n";
        let parsed = parse_instructions(instructions);
        assert_eq!(
            parsed.iter().map(|line| line.text).collect::<Vec<_>>(),
            vec!["Första raden.", "Andra raden.", "Vänta ett ögonblick."]
        );
        assert_eq!(parsed[2].kind, LineKind::TimingCue);
    }

    #[test]
    fn test_parse_instructions_idempotent() {
        for exercise in &crate::catalog::EXERCISES {
            let first = parse_instructions(exercise.instructions);
            let second = parse_instructions(exercise.instructions);
            assert_eq!(first, second);
            assert_eq!(
                first.len(),
                exercise
                    .instructions
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .count()
            );
        }
    }

    #[test]
    fn test_script_line_count() {
        let parsed = parse_instructions("Tala lugnt.\n• Förberedelse\nAndas in.\nTala vidare.");
        assert_eq!(script_line_count(&parsed), 2);
    }

    #[rstest]
    #[case("• Bara noteringar", "Klicka för att se skriptet")]
    #[case("En enda kort skriptrad.", "En enda kort skriptrad....")]
    #[case(
        "Första skriptraden är ganska kort.\nAndra raden finns också.",
        "Första skriptraden är ganska kort...."
    )]
    fn test_script_preview(#[case] instructions: &str, #[case] expected: &str) {
        assert_eq!(script_preview(&parse_instructions(instructions)), expected);
    }

    #[test]
    fn test_script_preview_truncates_on_char_boundary() {
        let long_line = "å".repeat(100);
        let parsed = parse_instructions(&long_line);
        assert_eq!(script_preview(&parsed), format!("{}...", "å".repeat(80)));
    }
}
