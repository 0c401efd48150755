use crate::domain::model::{DilutionInputs, DilutionResult, Variable};
use crate::utils::error::{LabError, Result};

/// Solves C1·V1 = C2·V2 for the single field left at 0.
///
/// Pure and deterministic: the same inputs always produce the same value or
/// the same error. Exactly one field must be 0; anything else is rejected
/// before any arithmetic happens.
pub fn solve(inputs: &DilutionInputs) -> Result<DilutionResult> {
    for (field, value) in inputs.fields() {
        if !value.is_finite() || value < 0.0 {
            return Err(LabError::InvalidQuantity { field, value });
        }
    }

    let zeros = inputs.unknowns();
    if zeros != 1 {
        return Err(LabError::AmbiguousInputs { zeros });
    }

    // zeros == 1, so exactly one arm matches.
    let unknown = if inputs.c1 == 0.0 {
        Variable::C1
    } else if inputs.v1 == 0.0 {
        Variable::V1
    } else if inputs.c2 == 0.0 {
        Variable::C2
    } else {
        Variable::V2
    };

    let value = solve_for(inputs, unknown)?;
    Ok(DilutionResult {
        value,
        variable: unknown,
    })
}

/// Solves the dilution relation for a caller-designated unknown, ignoring
/// whatever is currently stored in that field.
///
/// Guards the division: a zero divisor reports which known quantity is
/// missing instead of producing an infinite or NaN result.
pub fn solve_for(inputs: &DilutionInputs, unknown: Variable) -> Result<f64> {
    let (numerator, divisor, known) = match unknown {
        Variable::C1 => (inputs.c2 * inputs.v2, inputs.v1, Variable::V1),
        Variable::V1 => (inputs.c2 * inputs.v2, inputs.c1, Variable::C1),
        Variable::C2 => (inputs.c1 * inputs.v1, inputs.v2, Variable::V2),
        Variable::V2 => (inputs.c1 * inputs.v1, inputs.c2, Variable::C2),
    };

    if divisor == 0.0 {
        return Err(LabError::DegenerateInputs {
            unknown,
            divisor: known,
        });
    }

    Ok(numerator / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_balanced(inputs: DilutionInputs) {
        let solved = solve(&inputs).unwrap();
        let mut filled = inputs;
        match solved.variable {
            Variable::C1 => filled.c1 = solved.value,
            Variable::V1 => filled.v1 = solved.value,
            Variable::C2 => filled.c2 = solved.value,
            Variable::V2 => filled.v2 = solved.value,
        }
        assert!(
            (filled.c1 * filled.v1 - filled.c2 * filled.v2).abs() < TOLERANCE,
            "C1·V1 != C2·V2 after solving {:?}",
            solved
        );
    }

    #[test]
    fn solves_final_concentration() {
        let result = solve(&DilutionInputs::new(10.0, 5.0, 0.0, 10.0)).unwrap();
        assert_eq!(result.variable, Variable::C2);
        assert!((result.value - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn solved_value_balances_the_relation_for_each_unknown() {
        assert_balanced(DilutionInputs::new(0.0, 10.0, 2.0, 50.0));
        assert_balanced(DilutionInputs::new(100.0, 0.0, 10.0, 30.0));
        assert_balanced(DilutionInputs::new(7.5, 4.0, 0.0, 12.0));
        assert_balanced(DilutionInputs::new(0.5, 200.0, 0.1, 0.0));
    }

    #[test]
    fn fully_specified_inputs_are_rejected() {
        let err = solve(&DilutionInputs::new(10.0, 5.0, 2.5, 20.0)).unwrap_err();
        assert!(matches!(err, LabError::AmbiguousInputs { zeros: 0 }));
    }

    #[test]
    fn two_unknowns_are_rejected_before_any_division() {
        // c1 and v2 both 0: both candidate formulas would divide by zero,
        // but the count check fires first.
        let err = solve(&DilutionInputs::new(0.0, 10.0, 5.0, 0.0)).unwrap_err();
        assert!(matches!(err, LabError::AmbiguousInputs { zeros: 2 }));

        let err = solve(&DilutionInputs::new(0.0, 5.0, 10.0, 0.0)).unwrap_err();
        assert!(matches!(err, LabError::AmbiguousInputs { zeros: 2 }));
    }

    #[test]
    fn untouched_form_is_rejected() {
        let err = solve(&DilutionInputs::default()).unwrap_err();
        assert!(matches!(err, LabError::AmbiguousInputs { zeros: 4 }));
    }

    #[test]
    fn designated_unknown_with_zero_divisor_is_degenerate() {
        let inputs = DilutionInputs::new(0.0, 0.0, 5.0, 10.0);
        let err = solve_for(&inputs, Variable::C1).unwrap_err();
        assert!(matches!(
            err,
            LabError::DegenerateInputs {
                unknown: Variable::C1,
                divisor: Variable::V1,
            }
        ));
    }

    #[test]
    fn designated_unknown_ignores_the_stored_field() {
        // v2 holds garbage; solving for it only reads the other three.
        let inputs = DilutionInputs::new(10.0, 5.0, 2.0, 999.0);
        let value = solve_for(&inputs, Variable::V2).unwrap();
        assert!((value - 25.0).abs() < TOLERANCE);
    }

    #[test]
    fn negative_quantities_are_rejected() {
        let err = solve(&DilutionInputs::new(-10.0, 5.0, 0.0, 10.0)).unwrap_err();
        assert!(matches!(
            err,
            LabError::InvalidQuantity {
                field: Variable::C1,
                ..
            }
        ));
    }

    #[test]
    fn non_finite_quantities_are_rejected() {
        let err = solve(&DilutionInputs::new(10.0, f64::NAN, 0.0, 10.0)).unwrap_err();
        assert!(matches!(
            err,
            LabError::InvalidQuantity {
                field: Variable::V1,
                ..
            }
        ));
    }
}
