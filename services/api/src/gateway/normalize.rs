//! Field normalization: raw request payloads → typed drafts.
//!
//! Every write endpoint accepts a payload whose fields are absent, `null`, a
//! JSON string or a JSON number. Create and update share the same rules, so an
//! update is always a full replace built from the same draft type.

use serde::Deserialize;
use serde_json::Number;

use orbx_core::error::AppError;
use orbx_domain::population::Population;

use crate::domain::types::{CityDraft, ContinentDraft, CountryDraft};

/// A single client-supplied scalar. Any other JSON type fails deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged, expecting = "a string or a number")]
pub enum RawField {
    Text(String),
    Number(Number),
}

impl RawField {
    /// Trimmed text, or the decimal text of a number.
    fn text(&self) -> String {
        match self {
            Self::Text(s) => s.trim().to_owned(),
            Self::Number(n) => n.to_string(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<u64> for RawField {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// Field-level rejection, always surfaced as a 400.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} required")]
    Required(&'static str),
    #[error("invalid population")]
    Population,
    #[error("population required")]
    PopulationRequired,
    #[error("invalid area")]
    Area,
    #[error("invalid coordinates")]
    Coordinates,
    #[error("coordinates required")]
    CoordinatesRequired,
    #[error("parent reference required")]
    ParentReference,
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Turns a raw payload into the draft its repository accepts.
pub trait Normalize {
    type Draft;

    fn normalize(self) -> Result<Self::Draft, FieldError>;
}

/// Treats `null`, absent and whitespace-only values alike.
fn present(field: Option<RawField>) -> Option<RawField> {
    field.filter(|f| !f.is_blank())
}

pub fn required_text(field: Option<RawField>, name: &'static str) -> Result<String, FieldError> {
    present(field)
        .map(|f| f.text())
        .ok_or(FieldError::Required(name))
}

pub fn optional_text(field: Option<RawField>) -> String {
    present(field).map(|f| f.text()).unwrap_or_default()
}

/// Parses a population that may use `.` as a thousands separator.
///
/// JSON numbers are accepted up to `u64::MAX`; larger values must be strings.
pub fn population(field: Option<RawField>, required: bool) -> Result<Population, FieldError> {
    match present(field) {
        None if required => Err(FieldError::PopulationRequired),
        None => Ok(Population::zero()),
        Some(RawField::Text(s)) => Population::parse_grouped(&s).map_err(|_| FieldError::Population),
        Some(RawField::Number(n)) => n
            .as_u64()
            .map(Population::from)
            .ok_or(FieldError::Population),
    }
}

/// Non-negative finite area, `None` when absent.
pub fn area(field: Option<RawField>) -> Result<Option<f64>, FieldError> {
    let Some(field) = present(field) else {
        return Ok(None);
    };
    let value = to_f64(&field).ok_or(FieldError::Area)?;
    if value.is_finite() && value >= 0.0 {
        Ok(Some(value))
    } else {
        Err(FieldError::Area)
    }
}

/// Latitude or longitude within `[-bound, bound]`.
pub fn coordinate(field: Option<RawField>, bound: f64) -> Result<f64, FieldError> {
    let field = present(field).ok_or(FieldError::CoordinatesRequired)?;
    let value = to_f64(&field).ok_or(FieldError::Coordinates)?;
    if value.is_finite() && (-bound..=bound).contains(&value) {
        Ok(value)
    } else {
        Err(FieldError::Coordinates)
    }
}

pub const LATITUDE_BOUND: f64 = 90.0;
pub const LONGITUDE_BOUND: f64 = 180.0;

/// Positive `i32` identifier of a parent row.
pub fn parent_reference(field: Option<RawField>) -> Result<i32, FieldError> {
    let id = match present(field).ok_or(FieldError::ParentReference)? {
        RawField::Text(s) => s.trim().parse::<i32>().ok(),
        RawField::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
    };
    id.filter(|id| *id > 0).ok_or(FieldError::ParentReference)
}

fn to_f64(field: &RawField) -> Option<f64> {
    match field {
        RawField::Text(s) => s.trim().parse::<f64>().ok(),
        RawField::Number(n) => n.as_f64(),
    }
}

// ── Payloads ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContinentPayload {
    pub name: Option<RawField>,
    pub area: Option<RawField>,
    pub population: Option<RawField>,
    pub image_url: Option<RawField>,
}

impl Normalize for ContinentPayload {
    type Draft = ContinentDraft;

    fn normalize(self) -> Result<ContinentDraft, FieldError> {
        Ok(ContinentDraft {
            name: required_text(self.name, "name")?,
            area: area(self.area)?.unwrap_or(0.0),
            population: population(self.population, false)?,
            image_url: optional_text(self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CountryPayload {
    pub name: Option<RawField>,
    pub iso_code: Option<RawField>,
    pub capital: Option<RawField>,
    pub population: Option<RawField>,
    pub area: Option<RawField>,
    pub language: Option<RawField>,
    pub currency: Option<RawField>,
    pub calling_code: Option<RawField>,
    #[serde(alias = "flagUrl")]
    pub image_url: Option<RawField>,
    pub continent_id: Option<RawField>,
}

impl Normalize for CountryPayload {
    type Draft = CountryDraft;

    fn normalize(self) -> Result<CountryDraft, FieldError> {
        Ok(CountryDraft {
            name: required_text(self.name, "name")?,
            iso_code: required_text(self.iso_code, "isoCode")?,
            capital: optional_text(self.capital),
            population: population(self.population, false)?,
            area: area(self.area)?,
            language: optional_text(self.language),
            currency: optional_text(self.currency),
            calling_code: optional_text(self.calling_code),
            image_url: optional_text(self.image_url),
            continent_id: parent_reference(self.continent_id)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CityPayload {
    pub name: Option<RawField>,
    pub latitude: Option<RawField>,
    pub longitude: Option<RawField>,
    pub population: Option<RawField>,
    pub area: Option<RawField>,
    pub timezone: Option<RawField>,
    pub language: Option<RawField>,
    pub image_url: Option<RawField>,
    pub country_id: Option<RawField>,
}

impl Normalize for CityPayload {
    type Draft = CityDraft;

    fn normalize(self) -> Result<CityDraft, FieldError> {
        Ok(CityDraft {
            name: required_text(self.name, "name")?,
            latitude: coordinate(self.latitude, LATITUDE_BOUND)?,
            longitude: coordinate(self.longitude, LONGITUDE_BOUND)?,
            population: population(self.population, true)?,
            area: area(self.area)?,
            timezone: optional_text(self.timezone),
            language: optional_text(self.language),
            image_url: optional_text(self.image_url),
            country_id: parent_reference(self.country_id)?,
        })
    }
}
