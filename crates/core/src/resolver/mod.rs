use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use tracing::debug;

use crate::error::{DesignError, Result};
use crate::model::design::SimpleRandomSampleDesign;
use crate::model::spec::{PopulationSize, SampleDesignSpec, VectorSource, WeightsSpec};
use crate::validation::{constant_value, ensure_length, ensure_non_negative, ensure_positive};

/// Table column holding the per-unit sampling weights after resolution.
pub const WEIGHTS_COLUMN: &str = "weights";
/// Table column holding the per-unit inclusion probabilities after resolution.
pub const PROBS_COLUMN: &str = "probs";

/// Resolves a partial design specification against a table into a
/// validated simple random sample design.
///
/// The table is taken by value; the returned design owns it, with the
/// `weights` and `probs` columns materialized. Validation runs to
/// completion before any column is written, so a failed resolution never
/// produces a partially mutated table.
pub fn resolve(mut table: DataFrame, spec: &SampleDesignSpec) -> Result<SimpleRandomSampleDesign> {
    let rows = table.height();
    let sampsize = spec.sampsize.unwrap_or(rows);

    debug!(
        rows,
        sampsize,
        ignore_fpc = spec.ignore_fpc,
        "resolving simple random sample design"
    );

    // Normalize the column-or-vector arguments to concrete vectors up front.
    let weights_explicit = matches!(spec.weights, WeightsSpec::Source(_));
    let mut weights = match &spec.weights {
        WeightsSpec::Default => Some(vec![1.0; sampsize]),
        WeightsSpec::Suppressed => None,
        WeightsSpec::Source(source) => Some(materialize(&table, source, "weights", rows)?),
    };
    let probs = spec
        .probs
        .as_ref()
        .map(|source| materialize(&table, source, "probs", rows))
        .transpose()?;

    let population_size = match &spec.popsize {
        None => {
            // Population size must be inferred from the common weight.
            // Precedence: explicit weights, then explicit probabilities,
            // then the all-ones default.
            let inferred = if weights_explicit {
                constant_value("weights", weights.as_deref().unwrap_or_default())?
            } else if let Some(probs_values) = probs.as_deref() {
                match constant_value("probs", probs_values)? {
                    Some(prob) => {
                        ensure_positive("probs", prob)?;
                        weights = Some(probs_values.iter().map(|p| 1.0 / p).collect());
                        Some(1.0 / prob)
                    }
                    None => None,
                }
            } else if let Some(default_weights) = weights.as_deref() {
                constant_value("weights", default_weights)?
            } else {
                None
            };

            let Some(weight) = inferred else {
                return Err(DesignError::missing_parameters(
                    "either sampling weights or sampling probabilities must be given",
                ));
            };
            ensure_positive("weights", weight)?;

            (sampsize as f64 * weight).round() as u64
        }
        Some(PopulationSize::PerRow(values)) => {
            // A per-row population size only makes sense for SRS if constant.
            ensure_length("popsize", values.len(), rows)?;
            let Some(popsize) = constant_value("popsize", values)? else {
                return Err(DesignError::missing_parameters(
                    "population size vector is empty",
                ));
            };
            ensure_positive("popsize", popsize)?;
            ensure_positive("sampsize", sampsize as f64)?;

            weights = Some(values.iter().map(|value| value / sampsize as f64).collect());
            popsize.round() as u64
        }
        Some(PopulationSize::Scalar(value)) => {
            ensure_non_negative("popsize", *value)?;
            // With no explicit weights or probabilities, derive the weights
            // from the given population size so the design stays internally
            // consistent.
            if !weights_explicit && probs.is_none() {
                ensure_positive("sampsize", sampsize as f64)?;
                weights = Some(vec![value / sampsize as f64; sampsize]);
            }
            value.round() as u64
        }
    };

    let sample_fraction = sampsize as f64 / population_size as f64;
    let fpc = if spec.ignore_fpc {
        1.0
    } else {
        1.0 - sample_fraction
    };

    // Materialize the columns. Whichever of weights/probs the caller
    // supplied is authoritative; the other is derived by reciprocal.
    if let Some(probs_values) = probs {
        ensure_length("probs", probs_values.len(), rows)?;
        let derived: Vec<f64> = probs_values.iter().map(|p| 1.0 / p).collect();
        write_column(&mut table, PROBS_COLUMN, probs_values)?;
        write_column(&mut table, WEIGHTS_COLUMN, derived)?;
    } else {
        let weights_values = weights.ok_or_else(|| {
            DesignError::missing_parameters(
                "either sampling weights or sampling probabilities must be given",
            )
        })?;
        ensure_length("weights", weights_values.len(), rows)?;
        let derived: Vec<f64> = weights_values.iter().map(|w| 1.0 / w).collect();
        write_column(&mut table, WEIGHTS_COLUMN, weights_values)?;
        write_column(&mut table, PROBS_COLUMN, derived)?;
    }

    Ok(SimpleRandomSampleDesign {
        table,
        sample_size: sampsize,
        population_size,
        sample_fraction,
        fpc,
        ignore_fpc: spec.ignore_fpc,
    })
}

fn materialize(
    table: &DataFrame,
    source: &VectorSource,
    quantity: &'static str,
    rows: usize,
) -> Result<Vec<f64>> {
    let values = match source {
        VectorSource::Column(name) => column_values(table, name)?,
        VectorSource::Values(values) => values.clone(),
    };
    ensure_length(quantity, values.len(), rows)?;
    Ok(values)
}

pub(crate) fn column_values(table: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = table.column(name).map_err(|_| DesignError::ColumnNotFound {
        column: name.to_string(),
    })?;
    let series = column
        .as_materialized_series()
        .cast(&DataType::Float64)
        .map_err(|error| DesignError::InvalidColumn {
            column: name.to_string(),
            message: error.to_string(),
        })?;
    let chunked = series.f64().map_err(|error| DesignError::InvalidColumn {
        column: name.to_string(),
        message: error.to_string(),
    })?;

    chunked
        .into_iter()
        .map(|value| {
            value.ok_or_else(|| DesignError::InvalidColumn {
                column: name.to_string(),
                message: "contains null values".to_string(),
            })
        })
        .collect()
}

fn write_column(table: &mut DataFrame, name: &str, values: Vec<f64>) -> Result<()> {
    table
        .with_column(Series::new(name.into(), values))
        .map_err(|error| DesignError::InvalidColumn {
            column: name.to_string(),
            message: error.to_string(),
        })?;
    Ok(())
}
