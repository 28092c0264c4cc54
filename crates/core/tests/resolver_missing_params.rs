use polars::prelude::*;
use svy_core::{resolve, DesignError, SampleDesignSpec};

fn sample_table(rows: usize) -> DataFrame {
    let ids: Vec<i64> = (0..rows as i64).collect();
    df!("id" => ids).unwrap()
}

#[test]
fn suppressed_weights_without_probs_or_popsize_fail() {
    let spec = SampleDesignSpec::new().without_weights();

    let error = resolve(sample_table(5), &spec).unwrap_err();

    assert!(matches!(error, DesignError::MissingParameters { .. }));
}

#[test]
fn missing_parameters_message_names_the_alternatives() {
    let spec = SampleDesignSpec::new().without_weights();

    let error = resolve(sample_table(2), &spec).unwrap_err();

    assert_eq!(
        error.to_string(),
        "missing parameters: either sampling weights or sampling probabilities must be given"
    );
}

#[test]
fn empty_table_cannot_infer_a_population() {
    let error = resolve(sample_table(0), &SampleDesignSpec::new()).unwrap_err();

    assert!(matches!(error, DesignError::MissingParameters { .. }));
}
