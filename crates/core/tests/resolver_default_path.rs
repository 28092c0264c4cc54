use polars::prelude::*;
use svy_core::{resolve, SampleDesignSpec, PROBS_COLUMN, WEIGHTS_COLUMN};

fn sample_table(rows: usize) -> DataFrame {
    let ids: Vec<i64> = (0..rows as i64).collect();
    df!("id" => ids).unwrap()
}

fn column_vec(table: &DataFrame, name: &str) -> Vec<f64> {
    table
        .column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|value| value.unwrap())
        .collect()
}

#[test]
fn default_spec_resolves_to_full_sample() {
    let design = resolve(sample_table(10), &SampleDesignSpec::new()).unwrap();

    assert_eq!(design.sample_size(), 10);
    assert_eq!(design.population_size(), 10);
    assert_eq!(design.sample_fraction(), 1.0);
    assert_eq!(design.fpc(), 1.0);
    assert!(design.ignore_fpc());
}

#[test]
fn default_spec_materializes_unit_weights_and_probs() {
    let design = resolve(sample_table(4), &SampleDesignSpec::new()).unwrap();

    assert_eq!(column_vec(design.table(), WEIGHTS_COLUMN), vec![1.0; 4]);
    assert_eq!(column_vec(design.table(), PROBS_COLUMN), vec![1.0; 4]);
}

#[test]
fn caller_clone_keeps_the_original_table() {
    let table = sample_table(3);
    let original = table.clone();

    let design = resolve(table, &SampleDesignSpec::new()).unwrap();

    assert!(original.column(WEIGHTS_COLUMN).is_err());
    assert!(design.table().column(WEIGHTS_COLUMN).is_ok());
}
