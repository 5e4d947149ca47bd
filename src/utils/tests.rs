use crate::utils::{
    MAX_EXACT_INTEGER, MAX_QUADRUPLES, OPERAND_COUNT, UtilsError, non_decreasing_quadruples,
    parse_operand, quadruple_count, validate_exact_range, validate_operands,
};

#[test]
fn test_validate_operands_accepts_four_finite_numbers() {
    let result = validate_operands(&[4.0, 6.0, 8.0, 1.0]);
    assert_eq!(result, Ok([4.0, 6.0, 8.0, 1.0]));

    let result = validate_operands(&[-2.5, 0.0, 1e9, 7.0]);
    assert!(result.is_ok());
}

#[test]
fn test_validate_operands_wrong_count() {
    assert_eq!(
        validate_operands(&[1.0, 2.0, 3.0]),
        Err(UtilsError::WrongOperandCount {
            expected: OPERAND_COUNT,
            actual: 3
        })
    );
    assert_eq!(
        validate_operands(&[1.0, 2.0, 3.0, 4.0, 5.0]),
        Err(UtilsError::WrongOperandCount {
            expected: OPERAND_COUNT,
            actual: 5
        })
    );
    assert!(validate_operands(&[]).is_err());
}

#[test]
fn test_validate_operands_non_finite() {
    assert_eq!(
        validate_operands(&[1.0, f64::INFINITY, 3.0, 4.0]),
        Err(UtilsError::NonFiniteOperand(f64::INFINITY))
    );
    assert!(matches!(
        validate_operands(&[1.0, 2.0, f64::NAN, 4.0]),
        Err(UtilsError::NonFiniteOperand(_))
    ));
}

#[test]
fn test_parse_operand_valid() {
    assert_eq!(parse_operand("7"), Ok(7.0));
    assert_eq!(parse_operand("0"), Ok(0.0));
    assert_eq!(parse_operand(" 12 "), Ok(12.0));
    assert_eq!(parse_operand("-3"), Ok(-3.0));
    assert_eq!(parse_operand("0.5"), Ok(0.5));
}

#[test]
fn test_parse_operand_invalid() {
    assert_eq!(parse_operand(""), Err(UtilsError::EmptyNumber));
    assert_eq!(
        parse_operand("07"),
        Err(UtilsError::InvalidNumber("07".to_string()))
    );
    assert!(parse_operand("1e5").is_err());
    assert!(parse_operand("abc").is_err());
    assert!(parse_operand("-").is_err());
    assert!(parse_operand("1.2.3").is_err());
    assert!(parse_operand("inf").is_err());
}

#[test]
fn test_non_decreasing_quadruples_counts() {
    let result = non_decreasing_quadruples(1, 9);
    assert!(result.is_ok());
    if let Ok(quadruples) = result {
        // C(9 + 4 - 1, 4)
        assert_eq!(quadruples.len(), 495);
        assert_eq!(quadruples.first(), Some(&[1, 1, 1, 1]));
        assert_eq!(quadruples.last(), Some(&[9, 9, 9, 9]));
        assert!(quadruples.iter().all(|q| q.windows(2).all(|w| w[0] <= w[1])));
    }

    assert_eq!(non_decreasing_quadruples(5, 5), Ok(vec![[5, 5, 5, 5]]));
}

#[test]
fn test_non_decreasing_quadruples_invalid_range() {
    assert_eq!(
        non_decreasing_quadruples(9, 1),
        Err(UtilsError::InvalidRange { min: 9, max: 1 })
    );
}

#[test]
fn test_validate_exact_range() {
    assert!(validate_exact_range(1, 9).is_ok());
    assert!(validate_exact_range(-MAX_EXACT_INTEGER, MAX_EXACT_INTEGER).is_ok());
    assert_eq!(
        validate_exact_range(1, MAX_EXACT_INTEGER + 1),
        Err(UtilsError::InexactInteger(MAX_EXACT_INTEGER + 1))
    );
    assert_eq!(
        validate_exact_range(i64::MIN, 0),
        Err(UtilsError::InexactInteger(i64::MIN))
    );
    assert_eq!(
        validate_exact_range(2, 1),
        Err(UtilsError::InvalidRange { min: 2, max: 1 })
    );
}

#[test]
fn test_quadruple_count() {
    assert_eq!(quadruple_count(1, 9), Ok(495));
    assert_eq!(quadruple_count(1, 13), Ok(1820));
    assert_eq!(quadruple_count(0, 0), Ok(1));
    assert_eq!(
        quadruple_count(1, 300),
        Err(UtilsError::TooManyQuadruples {
            limit: MAX_QUADRUPLES
        })
    );
    assert_eq!(
        quadruple_count(-MAX_EXACT_INTEGER, MAX_EXACT_INTEGER),
        Err(UtilsError::TooManyQuadruples {
            limit: MAX_QUADRUPLES
        })
    );
}

#[test]
fn test_non_decreasing_quadruples_rejects_oversized_ranges() {
    assert!(matches!(
        non_decreasing_quadruples(1, 300),
        Err(UtilsError::TooManyQuadruples { .. })
    ));
    assert!(matches!(
        non_decreasing_quadruples(MAX_EXACT_INTEGER + 1, MAX_EXACT_INTEGER + 1),
        Err(UtilsError::InexactInteger(_))
    ));
}
