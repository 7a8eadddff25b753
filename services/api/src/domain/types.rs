use orbx_domain::population::Population;
use orbx_domain::user::UserRole;

// ── Continent ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Continent {
    pub id: i32,
    pub name: String,
    pub area: f64,
    pub population: Population,
    pub image_url: String,
}

/// Normalized continent fields, ready for insert or full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinentDraft {
    pub name: String,
    pub area: f64,
    pub population: Population,
    pub image_url: String,
}

// ── Country ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub iso_code: String,
    pub capital: String,
    pub population: Population,
    pub area: Option<f64>,
    pub language: String,
    pub currency: String,
    pub calling_code: String,
    pub image_url: String,
    pub continent_id: i32,
    /// Present on reads; writes return the bare row.
    pub continent: Option<Continent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryDraft {
    pub name: String,
    pub iso_code: String,
    pub capital: String,
    pub population: Population,
    pub area: Option<f64>,
    pub language: String,
    pub currency: String,
    pub calling_code: String,
    pub image_url: String,
    pub continent_id: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountryFilter {
    pub continent_id: Option<i32>,
}

// ── City ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: Population,
    pub area: Option<f64>,
    pub timezone: String,
    pub language: String,
    pub image_url: String,
    pub country_id: i32,
    /// Present on reads, with its continent attached.
    pub country: Option<Country>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityDraft {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: Population,
    pub area: Option<f64>,
    pub timezone: String,
    pub language: String,
    pub image_url: String,
    pub country_id: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CityFilter {
    #[default]
    All,
    Country(i32),
    Continent(i32),
}

impl CityFilter {
    /// `country` wins when both are given.
    pub fn from_ids(country_id: Option<i32>, continent_id: Option<i32>) -> Self {
        match (country_id, continent_id) {
            (Some(id), _) => Self::Country(id),
            (None, Some(id)) => Self::Continent(id),
            (None, None) => Self::All,
        }
    }
}

// ── User ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

// ── Stats ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub continents: u64,
    pub countries: u64,
    pub cities: u64,
    pub users: u64,
}
