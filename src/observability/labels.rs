use metrics::{IntoLabels, Label};

pub(crate) const VALIDATOR: &str = "validator";
pub(crate) const REASON: &str = "reason";

/// Labels of a validation metric: the validator, and why it rejected the input if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    validator: &'static str,
    reason: Option<&'static str>,
}

impl Labels {
    pub fn for_validator(validator: &'static str) -> Self {
        Self {
            validator,
            reason: None,
        }
    }

    pub fn with_reason(&self, reason: &'static str) -> Self {
        Self {
            reason: Some(reason),
            ..*self
        }
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        let mut labels = vec![Label::new(VALIDATOR, self.validator)];
        if let Some(reason) = self.reason {
            labels.push(Label::new(REASON, reason));
        }
        labels
    }
}
