use crate::{
    CoefficientMode, DensityArray, DensityInput, EmptinessRule, EnergyConfig, EnergyError,
    ErrorKind,
};
use ndarray::Array1;

fn parse(raw: &str) -> DensityArray {
    let input = DensityInput::from_json(raw).expect("valid json density");
    DensityArray::try_from(&input).expect("uniform density")
}

#[test]
fn integer_list_converts_to_integral_vector() {
    let arr = parse("[0, 2, 5]");
    assert!(arr.is_integral());
    assert_eq!(arr.shape(), &[3]);
    assert_eq!(arr.ndim(), 1);
    assert_eq!(arr.len(), Ok(3));
}

#[test]
fn single_float_promotes_whole_array() {
    let arr = parse("[1.5, 3]");
    assert!(!arr.is_integral());
    match arr {
        DensityArray::Real(a) => assert_eq!(a.as_slice(), Some(&[1.5, 3.0][..])),
        DensityArray::Integral(_) => panic!("expected a real array"),
    }
}

#[test]
fn empty_list_is_real_and_empty() {
    let arr = parse("[]");
    assert!(!arr.is_integral());
    assert_eq!(arr.shape(), &[0]);
    assert!(arr.is_empty());
}

#[test]
fn empty_native_vector_matches_empty_list() {
    let from_nd = DensityArray::from(Array1::<i64>::from(vec![]));
    assert!(!from_nd.is_integral());
    assert!(from_nd.is_empty());
    assert_eq!(from_nd, parse("[]"));
}

#[test]
fn integers_beyond_i64_read_as_floats() {
    let input = DensityInput::from_json("[18446744073709551615]").unwrap();
    assert!(matches!(input, DensityInput::List(ref items) if matches!(items[0], DensityInput::Float(_))));
    assert!(!DensityArray::try_from(&input).unwrap().is_integral());
}

#[test]
fn nested_lists_keep_every_axis() {
    let arr = parse("[[1, 3], [2, 2]]");
    assert_eq!(arr.shape(), &[2, 2]);
    assert_eq!(arr.len(), Ok(2));

    let hollow = parse("[[], []]");
    assert_eq!(hollow.shape(), &[2, 0]);
    assert!(!hollow.is_integral());
}

#[test]
fn jagged_lists_are_rejected() {
    for raw in ["[[1, 2], [3]]", "[1, [2]]", "[[1], 2]"] {
        let input = DensityInput::from_json(raw).unwrap();
        let err = DensityArray::try_from(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeError, "{raw}");
    }
}

#[test]
fn non_numeric_json_is_a_type_error() {
    for raw in [r#"["a", 1]"#, "[true]", "[null]", r#"{"x": 1}"#, "not json"] {
        let err = DensityInput::from_json(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeError, "{raw}");
    }
}

#[test]
fn scalar_has_no_length() {
    let arr = DensityArray::try_from(DensityInput::from(4_i64)).unwrap();
    assert_eq!(arr.ndim(), 0);
    assert!(matches!(arr.len(), Err(EnergyError::ShapeOrType(_))));
    assert!(!arr.is_empty());
}

#[test]
fn negative_detection_spans_all_axes() {
    assert!(parse("[1, -2, -3]").has_negative());
    assert!(parse("[[1, 0], [0, -1]]").has_negative());
    assert!(parse("[0.5, -0.1]").has_negative());
    assert!(!parse("[0, 0, 0]").has_negative());
}

#[test]
fn native_sequences_convert_without_json() {
    let from_vec = DensityArray::try_from(DensityInput::from(vec![1_i64, 2, 3])).unwrap();
    let from_array = DensityArray::try_from(DensityInput::from([1_i64, 2, 3])).unwrap();
    let from_slice = DensityArray::try_from(DensityInput::from(&[1_u8, 2, 3][..])).unwrap();
    let from_nd = DensityArray::from(Array1::from(vec![1_i64, 2, 3]));
    assert_eq!(from_vec, from_array);
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec, from_nd);

    let nested = DensityArray::try_from(DensityInput::from(vec![vec![1_i64, 3], vec![2, 2]])).unwrap();
    assert_eq!(nested.shape(), &[2, 2]);
}

#[test]
fn emptiness_rules_differ_only_on_non_empty_reals() {
    assert!(EmptinessRule::Conjunctive.rejects(false, 0));
    assert!(EmptinessRule::Disjunctive.rejects(false, 0));
    assert!(!EmptinessRule::Conjunctive.rejects(false, 2));
    assert!(EmptinessRule::Disjunctive.rejects(false, 2));
    assert!(!EmptinessRule::Conjunctive.rejects(true, 3));
    assert!(!EmptinessRule::Disjunctive.rejects(true, 3));
    // an empty array is never integral after conversion
    assert!(EmptinessRule::Disjunctive.rejects(true, 0));
}

#[test]
fn config_defaults_and_json() -> anyhow::Result<()> {
    let cfg = EnergyConfig::default();
    assert_eq!(cfg.emptiness_rule, EmptinessRule::Disjunctive);
    assert_eq!(cfg.coefficient, CoefficientMode::Inert);

    let partial = EnergyConfig::from_json(r#"{"coefficient": "applied"}"#)?;
    assert_eq!(partial.emptiness_rule, EmptinessRule::Disjunctive);
    assert_eq!(partial.coefficient, CoefficientMode::Applied);

    let legacy = EnergyConfig::legacy();
    assert_eq!(EnergyConfig::from_json(&legacy.to_json()?)?, legacy);

    assert!(EnergyConfig::from_json(r#"{"emptiness_rule": "xor"}"#).is_err());
    Ok(())
}

#[test]
fn error_messages_carry_original_wording() {
    let err = EnergyError::value_range(crate::NEGATIVE_ELEMENT);
    assert_eq!(err.kind(), ErrorKind::ValueError);
    assert_eq!(err.message(), "Inputs should be positive");
    assert_eq!(err.to_string(), "value error: Inputs should be positive");
}
