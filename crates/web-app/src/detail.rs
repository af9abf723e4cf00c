//! State of the exercise detail view.
//!
//! All flags are independent booleans with one coupling rule: entering
//! script mode forces the script section open. "Expand all" is a derived
//! view over the four section flags, never stored separately.

use stilla_domain as domain;

pub struct DetailView {
    pub research_expanded: bool,
    pub facilitation_expanded: bool,
    pub script_expanded: bool,
    pub when_to_use_expanded: bool,
    /// Controls the "show more" toggle of the why-use bullet list; not a
    /// section and therefore not part of [`all_expanded`](Self::all_expanded).
    pub why_use_expanded: bool,
    script_mode: bool,
    duration: String,
    duration_choices: Vec<String>,
    selected_choice: Option<usize>,
}

impl DetailView {
    #[must_use]
    pub fn new(duration: &str) -> Self {
        Self {
            research_expanded: false,
            facilitation_expanded: false,
            script_expanded: false,
            when_to_use_expanded: false,
            why_use_expanded: false,
            script_mode: false,
            duration: duration.to_string(),
            duration_choices: domain::duration_choices(duration),
            selected_choice: None,
        }
    }

    #[must_use]
    pub fn script_mode(&self) -> bool {
        self.script_mode
    }

    pub fn toggle_script_mode(&mut self) {
        self.script_mode = !self.script_mode;
        if self.script_mode {
            self.script_expanded = true;
        }
    }

    /// True iff all four section flags are set. Toggling "expand all" in the
    /// UI goes through [`toggle_all`](Self::toggle_all), so this can never
    /// desynchronize from the underlying flags.
    #[must_use]
    pub fn all_expanded(&self) -> bool {
        self.research_expanded
            && self.facilitation_expanded
            && self.script_expanded
            && self.when_to_use_expanded
    }

    pub fn set_all_expanded(&mut self, expanded: bool) {
        self.research_expanded = expanded;
        self.facilitation_expanded = expanded;
        self.script_expanded = expanded;
        self.when_to_use_expanded = expanded;
    }

    pub fn toggle_all(&mut self) {
        self.set_all_expanded(!self.all_expanded());
    }

    #[must_use]
    pub fn has_variable_duration(&self) -> bool {
        self.duration_choices.len() > 1
    }

    /// The duration shown to the user: the exercise's own duration string
    /// until a discrete choice has been selected.
    #[must_use]
    pub fn selected_duration(&self) -> &str {
        match self.selected_choice {
            Some(i) => &self.duration_choices[i],
            None => &self.duration,
        }
    }

    /// The choice the next call to [`cycle_duration`](Self::cycle_duration)
    /// will select.
    #[must_use]
    pub fn next_duration(&self) -> &str {
        &self.duration_choices[self.next_choice()]
    }

    pub fn cycle_duration(&mut self) {
        self.selected_choice = Some(self.next_choice());
    }

    fn next_choice(&self) -> usize {
        match self.selected_choice {
            Some(i) => (i + 1) % self.duration_choices.len(),
            None => 0,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleScriptMode => self.toggle_script_mode(),
            Action::ToggleResearch => self.research_expanded = !self.research_expanded,
            Action::ToggleFacilitation => self.facilitation_expanded = !self.facilitation_expanded,
            Action::ToggleScript => self.script_expanded = !self.script_expanded,
            Action::ToggleAll => self.toggle_all(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleScriptMode,
    ToggleResearch,
    ToggleFacilitation,
    ToggleScript,
    ToggleAll,
}

impl Action {
    /// Maps a pressed key to an action. Section toggles are inactive in
    /// script mode. Callers must have filtered out presses with modifier
    /// keys or originating from text inputs.
    #[must_use]
    pub fn for_key(key: &str, script_mode: bool) -> Option<Action> {
        match key.to_lowercase().as_str() {
            "s" => Some(Action::ToggleScriptMode),
            "r" if !script_mode => Some(Action::ToggleResearch),
            "f" if !script_mode => Some(Action::ToggleFacilitation),
            "k" if !script_mode => Some(Action::ToggleScript),
            "e" if !script_mode => Some(Action::ToggleAll),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_new_view_is_collapsed() {
        let view = DetailView::new("10-15 min");
        assert!(!view.research_expanded);
        assert!(!view.facilitation_expanded);
        assert!(!view.script_expanded);
        assert!(!view.when_to_use_expanded);
        assert!(!view.why_use_expanded);
        assert!(!view.script_mode());
        assert!(!view.all_expanded());
    }

    #[test]
    fn test_all_expanded_derived_from_section_flags() {
        for mask in 0u8..16 {
            let mut view = DetailView::new("10 min");
            view.research_expanded = mask & 1 != 0;
            view.facilitation_expanded = mask & 2 != 0;
            view.script_expanded = mask & 4 != 0;
            view.when_to_use_expanded = mask & 8 != 0;
            assert_eq!(view.all_expanded(), mask == 15);
        }
    }

    #[test]
    fn test_toggle_all_is_atomic() {
        let mut view = DetailView::new("10 min");
        view.research_expanded = true;
        view.script_expanded = true;
        view.toggle_all();
        assert!(view.all_expanded());
        view.toggle_all();
        assert!(!view.research_expanded);
        assert!(!view.facilitation_expanded);
        assert!(!view.script_expanded);
        assert!(!view.when_to_use_expanded);
    }

    #[test]
    fn test_script_mode_expands_script_one_directionally() {
        let mut view = DetailView::new("10 min");
        view.toggle_script_mode();
        assert!(view.script_mode());
        assert!(view.script_expanded);
        view.toggle_script_mode();
        assert!(!view.script_mode());
        assert!(view.script_expanded);
    }

    #[test]
    fn test_cycle_duration() {
        let mut view = DetailView::new("10-15 min");
        assert!(view.has_variable_duration());
        assert_eq!(view.selected_duration(), "10-15 min");
        assert_eq!(view.next_duration(), "10 min");
        view.cycle_duration();
        assert_eq!(view.selected_duration(), "10 min");
        view.cycle_duration();
        assert_eq!(view.selected_duration(), "15 min");
        view.cycle_duration();
        assert_eq!(view.selected_duration(), "10 min");
    }

    #[test]
    fn test_fixed_duration() {
        let view = DetailView::new("2 min");
        assert!(!view.has_variable_duration());
        assert_eq!(view.selected_duration(), "2 min");
    }

    #[rstest]
    #[case("s", false, Some(Action::ToggleScriptMode))]
    #[case("S", false, Some(Action::ToggleScriptMode))]
    #[case("s", true, Some(Action::ToggleScriptMode))]
    #[case("r", false, Some(Action::ToggleResearch))]
    #[case("f", false, Some(Action::ToggleFacilitation))]
    #[case("k", false, Some(Action::ToggleScript))]
    #[case("e", false, Some(Action::ToggleAll))]
    #[case("r", true, None)]
    #[case("f", true, None)]
    #[case("k", true, None)]
    #[case("e", true, None)]
    #[case("x", false, None)]
    #[case("Enter", false, None)]
    fn test_action_for_key(
        #[case] key: &str,
        #[case] script_mode: bool,
        #[case] expected: Option<Action>,
    ) {
        assert_eq!(Action::for_key(key, script_mode), expected);
    }

    #[test]
    fn test_apply_matches_direct_toggles() {
        let mut view = DetailView::new("10 min");
        view.apply(Action::ToggleResearch);
        assert!(view.research_expanded);
        view.apply(Action::ToggleAll);
        assert!(view.all_expanded());
        view.apply(Action::ToggleScriptMode);
        assert!(view.script_mode());
    }
}
