//! SIMBAD script construction and output parsing
//!
//! Output rows are pipe-separated: identifier, short object type, RA and Dec
//! in sexagesimal text, then one column per requested field. A `~` marks a
//! value the catalog does not have.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::SimbadError;

const DATA_MARKER: &str = "::data::";
const ERROR_MARKER: &str = "::error::";
const NO_OBJECT: &str = "No astronomical object found";
const MISSING_VALUE: &str = "~";
const FIXED_COLUMNS: usize = 4;

/// A cone search request
#[derive(Debug, Clone, PartialEq)]
pub struct ConeSearch {
    /// Centre right ascension in degrees
    pub ra_degrees: f64,
    /// Centre declination in degrees
    pub dec_degrees: f64,
    /// Cone radius in degrees
    pub radius_degrees: f64,
    /// Logical fields to fetch per row
    pub fields: Vec<String>,
    /// Row limit
    pub max_rows: u32,
}

/// One parsed output row
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptRow {
    /// Main identifier
    pub name: String,
    /// Short object type code
    pub type_code: String,
    /// Right ascension, "HH MM SS.sss"
    pub ra_text: String,
    /// Declination, "+DD MM SS.ss"
    pub dec_text: String,
    /// Present numeric fields by logical name
    pub fields: BTreeMap<String, f64>,
}

/// SIMBAD format specifier for a logical field name
#[must_use]
pub fn field_specifier(field: &str) -> Option<String> {
    match field {
        "redshift" => Some("%RV(Z)".to_string()),
        "radial_velocity" => Some("%RV(V)".to_string()),
        _ => {
            let band = field.strip_prefix("flux_")?;
            let mut chars = band.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Some(format!("%FLUXLIST({c};F)")),
                _ => None,
            }
        },
    }
}

/// Build the script text for a cone search
pub fn build_script(search: &ConeSearch) -> Result<String, SimbadError> {
    let mut format = String::from("%IDLIST(1)|%OTYPE(S)|%COO(A)|%COO(D)");
    for field in &search.fields {
        let specifier = field_specifier(field)
            .ok_or_else(|| SimbadError::UnsupportedField(field.clone()))?;
        format.push('|');
        format.push_str(&specifier);
    }

    let radius_arcmin = search.radius_degrees * 60.0;
    Ok(format!(
        "output console=off script=off\n\
         set limit {}\n\
         format object \"{format}\\n\"\n\
         query coo {:.6} {:+.6} radius={radius_arcmin:.4}m frame=ICRS\n",
        search.max_rows, search.ra_degrees, search.dec_degrees,
    ))
}

/// Parse script output into rows for the given logical fields
pub fn parse_output(output: &str, fields: &[String]) -> Result<Vec<ScriptRow>, SimbadError> {
    if let Some(error_at) = output.find(ERROR_MARKER) {
        let message = output[error_at + ERROR_MARKER.len()..]
            .trim_start_matches(':')
            .trim();
        if message.contains(NO_OBJECT) {
            debug!("Catalog found no objects");
            return Ok(Vec::new());
        }
        return Err(SimbadError::ScriptError(message.to_string()));
    }

    output
        .lines()
        .skip_while(|line| !line.starts_with(DATA_MARKER))
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_row(line, fields))
        .collect()
}

fn parse_row(line: &str, fields: &[String]) -> Result<ScriptRow, SimbadError> {
    let columns: Vec<&str> = line.split('|').map(str::trim).collect();
    if columns.len() != FIXED_COLUMNS + fields.len() {
        return Err(SimbadError::ParseError(format!(
            "expected {} columns, got {}: {line}",
            FIXED_COLUMNS + fields.len(),
            columns.len()
        )));
    }

    let values = fields
        .iter()
        .zip(&columns[FIXED_COLUMNS..])
        .filter(|(_, raw)| !raw.is_empty() && **raw != MISSING_VALUE)
        .filter_map(|(field, raw)| raw.parse::<f64>().ok().map(|v| (field.clone(), v)))
        .collect();

    Ok(ScriptRow {
        name: columns[0].to_string(),
        type_code: columns[1].to_string(),
        ra_text: columns[2].to_string(),
        dec_text: columns[3].to_string(),
        fields: values,
    })
}
