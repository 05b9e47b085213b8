use log::debug;
use std::fmt;

use crate::ratio::{convert_str, ConvertError, IngredientQuantities};

/// Result of the last submit
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Quantities together with the input text they were computed from
    Calculated {
        water: String,
        quantities: IngredientQuantities,
    },
    Rejected(ConvertError),
}

/// Transient state behind the calculator form.
///
/// Owned by whoever renders the form. Nothing is computed until
/// [`FormState::submit`] is called.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: String,
    outcome: Option<FormOutcome>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            outcome: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text. A pending error is cleared, a previous result
    /// stays until the next submit.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        if matches!(self.outcome, Some(FormOutcome::Rejected(_))) {
            self.outcome = None;
        }
    }

    /// Convert the current input, replacing whatever was shown before.
    pub fn submit(&mut self) -> &FormOutcome {
        let outcome = match convert_str(&self.input) {
            Ok(quantities) => FormOutcome::Calculated {
                water: self.input.trim().to_string(),
                quantities,
            },
            Err(err) => {
                debug!("form submit rejected: {:?}", self.input);
                FormOutcome::Rejected(err)
            }
        };
        self.outcome.insert(outcome)
    }

    pub fn outcome(&self) -> Option<&FormOutcome> {
        self.outcome.as_ref()
    }

    pub fn quantities(&self) -> Option<&IngredientQuantities> {
        match &self.outcome {
            Some(FormOutcome::Calculated { quantities, .. }) => Some(quantities),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match &self.outcome {
            Some(FormOutcome::Rejected(err)) => Some(err.message()),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.outcome = None;
    }
}

impl fmt::Display for FormOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormOutcome::Calculated { water, quantities } => write!(
                f,
                "{} ml: sugar {:.2} g, tea {:.2} g",
                water,
                quantities.sugar(),
                quantities.tea()
            ),
            FormOutcome::Rejected(err) => write!(f, "{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = FormState::new();
        assert_eq!(form.input(), "");
        assert!(form.outcome().is_none());
        assert!(form.quantities().is_none());
        assert!(form.error_message().is_none());
    }

    #[test]
    fn test_submit_valid() {
        let mut form = FormState::new();
        form.set_input("675");
        let outcome = form.submit().clone();

        match outcome {
            FormOutcome::Calculated { water, quantities } => {
                assert_eq!(water, "675");
                assert_eq!(quantities.sugar(), 25.0);
                assert_eq!(quantities.tea(), 7.0);
            }
            _ => panic!("Expected Calculated"),
        }
        assert!(form.error_message().is_none());
    }

    #[test]
    fn test_submit_empty_input() {
        let mut form = FormState::new();
        assert!(matches!(
            form.submit(),
            FormOutcome::Rejected(ConvertError::InvalidVolume)
        ));
        assert_eq!(
            form.error_message(),
            Some("Please enter a valid positive number for the water amount.")
        );
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = FormState::new();
        form.set_input("abc");
        form.submit();
        assert!(form.error_message().is_some());

        form.set_input("ab");
        assert!(form.error_message().is_none());
        assert!(form.outcome().is_none());
    }

    #[test]
    fn test_typing_keeps_previous_result() {
        let mut form = FormState::new();
        form.set_input("1350");
        form.submit();

        form.set_input("13");
        let q = form.quantities().expect("result should survive typing");
        assert_eq!(q.sugar(), 50.0);
    }

    #[test]
    fn test_failed_submit_drops_previous_result() {
        let mut form = FormState::new();
        form.set_input("675");
        form.submit();
        assert!(form.quantities().is_some());

        form.set_input("-10");
        form.submit();
        assert!(form.quantities().is_none());
        assert!(form.error_message().is_some());
    }

    #[test]
    fn test_resubmit_replaces_result() {
        let mut form = FormState::new();
        form.set_input("675");
        form.submit();
        form.set_input("337.5");
        form.submit();

        let q = form.quantities().unwrap();
        assert_eq!(q.sugar(), 12.5);
        assert_eq!(q.tea(), 3.5);
    }

    #[test]
    fn test_reset() {
        let mut form = FormState::new();
        form.set_input("675");
        form.submit();
        form.reset();
        assert_eq!(form.input(), "");
        assert!(form.outcome().is_none());
    }

    #[test]
    fn test_outcome_display() {
        let mut form = FormState::new();
        form.set_input(" 337.5 ");
        assert_eq!(
            form.submit().to_string(),
            "337.5 ml: sugar 12.50 g, tea 3.50 g"
        );

        form.set_input("0");
        assert_eq!(
            form.submit().to_string(),
            "Please enter a valid positive number for the water amount."
        );
    }
}
