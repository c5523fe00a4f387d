use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-facing status derived from a progress value. Never stored by a user;
/// always recomputed from the effective progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressStatus {
    #[serde(rename = "Cancelled")]
    Cancelled,
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cancelled => "Cancelled",
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// Total over all integers: out-of-domain input degrades to the "Not Started"
/// default instead of erroring. Callers validate writes before they get here.
pub fn classify_status(progress: i32) -> ProgressStatus {
    match progress {
        -1 => ProgressStatus::Cancelled,
        0 => ProgressStatus::NotStarted,
        1..=99 => ProgressStatus::InProgress,
        100 => ProgressStatus::Completed,
        _ => ProgressStatus::NotStarted,
    }
}

#[cfg(test)]
mod status_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1, ProgressStatus::Cancelled)]
    #[case(0, ProgressStatus::NotStarted)]
    #[case(1, ProgressStatus::InProgress)]
    #[case(57, ProgressStatus::InProgress)]
    #[case(99, ProgressStatus::InProgress)]
    #[case(100, ProgressStatus::Completed)]
    fn it_should_classify_in_domain_values(#[case] progress: i32, #[case] expected: ProgressStatus) {
        assert_eq!(classify_status(progress), expected);
    }

    #[rstest]
    #[case(-2)]
    #[case(101)]
    #[case(i32::MIN)]
    #[case(i32::MAX)]
    fn it_should_default_out_of_domain_values_to_not_started(#[case] progress: i32) {
        assert_eq!(classify_status(progress), ProgressStatus::NotStarted);
    }

    #[rstest]
    fn it_should_serialize_with_spaced_labels() {
        let json = serde_json::to_string(&ProgressStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
