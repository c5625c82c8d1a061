use crate::error::ApiError;

pub const MIN_AGE: i32 = 18;
pub const MIN_WEIGHT_KG: f64 = 60.0;

/// Authoritative eligibility gate. Any client-side copy of this check is a
/// UX convenience only; submissions are accepted or rejected here.
pub fn check_eligibility(age: i32, weight: f64) -> Result<(), ApiError> {
    if age < MIN_AGE {
        return Err(ApiError::IneligibleAge);
    }
    if weight < MIN_WEIGHT_KG {
        return Err(ApiError::IneligibleWeight);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underage_is_rejected_regardless_of_weight() {
        assert!(matches!(
            check_eligibility(17, 80.0),
            Err(ApiError::IneligibleAge)
        ));
        assert!(matches!(
            check_eligibility(17, 50.0),
            Err(ApiError::IneligibleAge)
        ));
    }

    #[test]
    fn underweight_is_rejected_regardless_of_age() {
        assert!(matches!(
            check_eligibility(45, 59.0),
            Err(ApiError::IneligibleWeight)
        ));
        assert!(matches!(
            check_eligibility(18, 59.9),
            Err(ApiError::IneligibleWeight)
        ));
    }

    #[test]
    fn boundary_is_inclusive() {
        assert!(check_eligibility(18, 60.0).is_ok());
    }

    #[test]
    fn clearly_eligible_passes() {
        assert!(check_eligibility(30, 75.5).is_ok());
    }
}
