use crate::error::ValidationError;
use crate::observability::labels::Labels;
use metrics::counter;

pub const VALID_METRIC: &str = "validation.valid";
pub const INVALID_METRIC: &str = "validation.invalid";

/// Reports the outcome of each validation done by one validator.
///
/// Counters are resolved on every call so that a recorder installed after the first
/// validation still receives the values.
pub(crate) struct ValidationMetrics {
    labels: Labels,
}

impl ValidationMetrics {
    pub fn new(validator: &'static str) -> Self {
        Self {
            labels: Labels::for_validator(validator),
        }
    }

    /// Turns an internal result into the public "success or nothing" shape.
    pub fn collapse<T>(&self, outcome: Result<T, ValidationError>) -> Option<T> {
        match outcome {
            Ok(value) => {
                counter!(VALID_METRIC, self.labels).increment(1);
                Some(value)
            }
            Err(err) => {
                // The input is personal data and must never end up in the logs
                tracing::trace!(labels = ?self.labels, reason = %err, "validation rejected");
                counter!(INVALID_METRIC, self.labels.with_reason(err.reason())).increment(1);
                None
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::observability::labels::{REASON, VALIDATOR};
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn should_count_valid_and_invalid_outcomes() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let metrics = ValidationMetrics::new("test_validator");
            assert_eq!(metrics.collapse(Ok(3)), Some(3));
            assert_eq!(metrics.collapse(Ok(4)), Some(4));
            assert_eq!(
                metrics.collapse::<u32>(Err(ValidationError::Checksum)),
                None
            );
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let valid_key = Key::from_parts(
            VALID_METRIC,
            vec![Label::new(VALIDATOR, "test_validator")],
        );
        let metric_value = snapshot
            .get(&CompositeKey::new(Counter, valid_key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(2)));

        let invalid_key = Key::from_parts(
            INVALID_METRIC,
            vec![
                Label::new(VALIDATOR, "test_validator"),
                Label::new(REASON, "checksum"),
            ],
        );
        let metric_value = snapshot
            .get(&CompositeKey::new(Counter, invalid_key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
    }
}
