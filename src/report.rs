use std::fmt::Display;

use clap::ValueEnum;
use tracing::{debug, info, warn};

use crate::{
    convert::{
        classify::{Category, classify},
        float,
        narrow::FloatTarget,
    },
    error::{ConversionError, ParseError},
    literal::parse_values,
    util::num::{is_exact_signed, is_exact_unsigned},
    value::Value,
};

/// The float widths a report converts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Width {
    /// Only `f32`.
    #[value(name = "32")]
    F32,
    /// Only `f64`.
    #[value(name = "64")]
    F64,
    /// Both `f32` and `f64`.
    #[default]
    All,
}

/// The result of converting one value to one width.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Name of the target type.
    pub target: &'static str,
    /// The converted number in debug form, or the error.
    pub result: Result<String, ConversionError>,
}

/// All conversions of one input value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Canonical rendering of the input.
    pub rendered:  String,
    /// Dynamic type name of the input.
    pub type_name: String,
    /// Name of the category the input was classified as.
    pub category:  &'static str,
    /// One outcome per requested width.
    pub outcomes:  Vec<Outcome>,
}

/// The conversions of every value in a source text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// One entry per value, in source order.
    pub entries: Vec<Entry>,
}

impl Report {
    /// Number of conversions that returned an error.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|entry| &entry.outcomes)
            .filter(|outcome| outcome.result.is_err())
            .count()
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (type {}) ->", self.rendered, self.type_name)?;

        for (index, outcome) in self.outcomes.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            match &outcome.result {
                Ok(n) => write!(f, " {} = {n}", outcome.target)?,
                Err(e) => write!(f, " {} = error: {e}", outcome.target)?,
            }
        }

        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Parses every value literal in `source` (one per line) and converts each
/// to the requested widths.
///
/// Conversion failures are recorded in the report rather than returned, so a
/// single bad value does not hide the others.
///
/// # Errors
/// Returns a `ParseError` if any line is not a valid value literal.
///
/// # Example
/// ```
/// use floatconv::{Width, get_report};
///
/// let report = get_report("\"3.5\"\nnil", Width::F64).unwrap();
/// assert_eq!(report.entries.len(), 2);
/// assert_eq!(report.failures(), 1);
/// assert_eq!(report.entries[0].to_string(), r#""3.5" (type string) -> f64 = 3.5"#);
/// ```
pub fn get_report(source: &str, width: Width) -> Result<Report, ParseError> {
    let values = parse_values(source)?;

    let entries: Vec<Entry> = values.iter().map(|value| entry(value, width)).collect();
    let report = Report { entries };

    info!(values = report.entries.len(),
          failures = report.failures(),
          "conversion run finished");

    Ok(report)
}

fn entry(value: &Value, width: Width) -> Entry {
    let category = classify(value);
    let rendered = value.to_string();

    debug!(value = %rendered, category = category.name(), "converting");

    match category {
        Category::Signed(n) if !is_exact_signed(n) => {
            warn!(value = %rendered, "integer is outside the contiguous exact f64 range and may be rounded");
        },
        Category::Unsigned(n) if !is_exact_unsigned(n) => {
            warn!(value = %rendered, "integer is outside the contiguous exact f64 range and may be rounded");
        },
        _ => {},
    }

    let outcomes = match width {
        Width::F32 => vec![outcome::<f32>(value)],
        Width::F64 => vec![outcome::<f64>(value)],
        Width::All => vec![outcome::<f32>(value), outcome::<f64>(value)],
    };

    Entry { type_name: value.type_name(),
            category: category.name(),
            rendered,
            outcomes }
}

fn outcome<T: FloatTarget>(value: &Value) -> Outcome {
    let result = float::<T>(value).map(|n| format!("{n:?}"));

    if let Err(e) = &result {
        warn!(target_type = T::NAME, error = %e, "conversion failed");
    }

    Outcome { target: T::NAME,
              result }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_width_reports_both_targets_in_order() {
        let report = get_report("f64::MAX", Width::All).unwrap();
        let entry = &report.entries[0];
        assert_eq!(entry.category, "float");
        assert_eq!(entry.outcomes[0],
                   Outcome { target: "f32",
                             result: Ok("inf".to_string()) });
        assert_eq!(entry.outcomes[1].result, Ok("1.7976931348623157e308".to_string()));
    }

    #[test]
    fn errors_are_counted_per_width() {
        let report = get_report("struct {}\n1", Width::All).unwrap();
        assert_eq!(report.failures(), 2);
        assert_eq!(report.entries[0].to_string(),
                   "struct {}{} (type struct {}) -> f32 = error: cannot convert struct {}{} (type \
                    struct {}) to f32, f64 = error: cannot convert struct {}{} (type struct {}) to \
                    f64");
    }

    #[test]
    fn parse_errors_abort_the_report() {
        assert!(get_report("1\n[", Width::F32).is_err());
    }
}
