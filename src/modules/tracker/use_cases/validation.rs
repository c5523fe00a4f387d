use crate::modules::tracker::core::progress::Progress;
use crate::modules::tracker::use_cases::errors::ApplicationError;

/// Rejects progress values outside {-1} ∪ [0, 100] at the write boundary.
/// The aggregator's own fallback is defense in depth, not the primary check.
pub fn validate_progress(raw: i32) -> Result<(), ApplicationError> {
    match Progress::from_raw(raw) {
        Some(_) => Ok(()),
        None => Err(ApplicationError::Validation(format!(
            "progress {raw} must be -1 (cancelled) or between 0 and 100"
        ))),
    }
}

pub fn validate_planned_days(days: i64) -> Result<(), ApplicationError> {
    if days < 0 {
        return Err(ApplicationError::Validation(format!(
            "planned days {days} must not be negative"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod validation_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1)]
    #[case(0)]
    #[case(57)]
    #[case(100)]
    fn it_should_accept_the_documented_domain(#[case] raw: i32) {
        assert!(validate_progress(raw).is_ok());
    }

    #[rstest]
    #[case(-2)]
    #[case(101)]
    fn it_should_reject_out_of_domain_progress(#[case] raw: i32) {
        assert!(matches!(
            validate_progress(raw),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[rstest]
    fn it_should_reject_negative_planned_days() {
        assert!(validate_planned_days(0).is_ok());
        assert!(validate_planned_days(30).is_ok());
        assert!(matches!(
            validate_planned_days(-1),
            Err(ApplicationError::Validation(_))
        ));
    }
}
