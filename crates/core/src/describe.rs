//! Read-only presentation of a resolved design. Purely cosmetic; not part
//! of the construction contract.

use std::fmt;

use polars::prelude::DataFrame;

use crate::model::design::SimpleRandomSampleDesign;
use crate::resolver::{column_values, PROBS_COLUMN, WEIGHTS_COLUMN};

/// Renders the design's dimensions, a truncated preview of its weights and
/// probabilities, and the resolved parameters.
pub fn describe(design: &SimpleRandomSampleDesign) -> String {
    let table = design.table();
    let weights = render_column(table, WEIGHTS_COLUMN);
    let probs = render_column(table, PROBS_COLUMN);

    format!(
        "SimpleRandomSample:\n\
         data: {rows}x{cols} DataFrame\n\
         weights: {weights}\n\
         probs: {probs}\n\
         fpc: {fpc}\n\
         popsize: {popsize}\n\
         sampsize: {sampsize}\n\
         sampfraction: {fraction}\n\
         ignorefpc: {ignorefpc}",
        rows = table.height(),
        cols = table.width(),
        weights = weights,
        probs = probs,
        fpc = design.fpc(),
        popsize = design.population_size(),
        sampsize = design.sample_size(),
        fraction = design.sample_fraction(),
        ignorefpc = design.ignore_fpc(),
    )
}

impl fmt::Display for SimpleRandomSampleDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}

/// The resolver always materializes both columns, but the cosmetic path
/// should say so rather than render an empty preview if one is missing.
fn render_column(table: &DataFrame, name: &str) -> String {
    match column_values(table, name) {
        Ok(values) => preview(&values),
        Err(_) => "[unavailable]".to_string(),
    }
}

/// First three values and the last, separated by an ellipsis; short
/// vectors are printed in full.
fn preview(values: &[f64]) -> String {
    let parts: Vec<String> = match (values.len() > 3, values.last()) {
        (true, Some(&last)) => {
            let mut parts: Vec<String> =
                values[..3].iter().map(|value| format_value(*value)).collect();
            parts.push("…".to_string());
            parts.push(format_value(last));
            parts
        }
        _ => values.iter().map(|value| format_value(*value)).collect(),
    };

    format!("[{}]", parts.join(", "))
}

fn format_value(value: f64) -> String {
    format!("{}", round_sig(value, 3))
}

/// Rounds to the given number of significant digits.
fn round_sig(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}
