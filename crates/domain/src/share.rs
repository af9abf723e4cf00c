use crate::Exercise;

/// Everything needed to share an exercise, independent of the delivery
/// mechanism (native share surface, clipboard, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub url: String,
    pub title: String,
    pub text: String,
}

impl SharePayload {
    #[must_use]
    pub fn new(exercise: &Exercise, origin: &str, path: &str) -> Self {
        let text = if exercise.one_liner.is_empty() {
            format!("Kolla in denna mindfulnessövning: {}", exercise.title)
        } else {
            exercise.one_liner.to_string()
        };
        Self {
            url: format!("{origin}{path}#exercise-{}", exercise.id),
            title: exercise.title.to_string(),
            text,
        }
    }

    /// Pre-filled message for "share with a colleague".
    #[must_use]
    pub fn colleague_message(&self) -> String {
        format!(
            "Hej! 👋\n\n\
             Jag tänkte dela denna mindfulnessövning med dig som kan vara användbar i vårt arbete:\n\n\
             \"{}\"\n\
             {}\n\n\
             {}\n\n\
             Hoppas den kan vara till nytta! 🙏",
            self.title, self.text, self.url
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{catalog, ExerciseID};

    #[test]
    fn test_share_payload() {
        let exercise = catalog::exercise_by_id(ExerciseID::from(3)).unwrap();
        let payload = SharePayload::new(exercise, "https://example.org", "/verktyg/");
        assert_eq!(payload.url, "https://example.org/verktyg/#exercise-3");
        assert_eq!(payload.title, "STOP-övningen");
        assert_eq!(payload.text, exercise.one_liner);
    }

    #[test]
    fn test_share_payload_text_fallback() {
        let mut exercise = *catalog::exercise_by_id(ExerciseID::from(3)).unwrap();
        exercise.one_liner = "";
        let payload = SharePayload::new(&exercise, "https://example.org", "/");
        assert_eq!(
            payload.text,
            "Kolla in denna mindfulnessövning: STOP-övningen"
        );
    }

    #[test]
    fn test_colleague_message_embeds_payload() {
        let exercise = catalog::exercise_by_id(ExerciseID::from(6)).unwrap();
        let payload = SharePayload::new(exercise, "https://example.org", "/");
        let message = payload.colleague_message();
        assert!(message.starts_with("Hej!"));
        assert!(message.contains(&format!("\"{}\"", payload.title)));
        assert!(message.contains(&payload.text));
        assert!(message.contains(&payload.url));
        assert!(message.ends_with("🙏"));
    }
}
