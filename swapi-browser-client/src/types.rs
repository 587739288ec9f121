//! SWAPI data types

use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::datetime;

// ============ Pagination ============

/// 1-based page number.
///
/// Backed by [`NonZeroU32`], so a page below 1 cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const fn first() -> Self {
        Self(NonZeroU32::MIN)
    }

    /// Create a page number, returning `None` for 0.
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    /// Raw page number.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Whether this is page 1.
    pub fn is_first(self) -> bool {
        self.0 == NonZeroU32::MIN
    }

    /// The following page (saturates at `u32::MAX`).
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The preceding page, or `None` on page 1.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One page of the `people` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeoplePage {
    /// Total number of people across all pages, if reported.
    #[serde(default)]
    pub count: Option<u32>,
    /// URL of the next page, `null` on the last page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, `null` on the first page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Characters on this page (at most [`PAGE_SIZE`](crate::PAGE_SIZE)).
    pub results: Vec<Character>,
}

// ============ Character ============

/// A character record as returned by SWAPI.
///
/// Every field is optional: the API schema is not under our control, so an
/// absent field is reported by [`missing_fields`](Self::missing_fields)
/// instead of failing the whole page. Keys this type does not know about are
/// kept in [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: Option<String>,
    /// Height in centimetres, as a numeric string (or `"unknown"`).
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub height: Option<String>,
    /// Mass in kilograms, as a string (e.g. `"77"`, `"1,358"`, `"unknown"`).
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
    /// Film URLs this character appears in.
    pub films: Option<Vec<String>>,
    pub species: Option<Vec<String>>,
    pub vehicles: Option<Vec<String>>,
    pub starships: Option<Vec<String>>,
    /// ISO 8601 creation timestamp.
    pub created: Option<String>,
    /// ISO 8601 last-edit timestamp.
    pub edited: Option<String>,
    pub url: Option<String>,
    /// Fields not covered by this schema.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// 数值字段兼容字符串与 JSON 数字，统一为字符串形式
fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        I64(i64),
        U64(u64),
        F64(f64),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::I64(n) => n.to_string(),
            StringOrNumber::U64(n) => n.to_string(),
            StringOrNumber::F64(n) => n.to_string(),
        }),
    )
}

impl Character {
    /// Name used for cards and titles.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }

    /// Height in centimetres, `None` if absent or not numeric.
    pub fn height_cm(&self) -> Option<f64> {
        self.height
            .as_deref()
            .and_then(|h| h.trim().parse::<f64>().ok())
            .filter(|h| h.is_finite())
    }

    /// Number of films the character appears in.
    pub fn film_count(&self) -> Option<usize> {
        self.films.as_ref().map(Vec::len)
    }

    /// Parsed `created` timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created.as_deref().and_then(datetime::parse_iso8601)
    }

    /// Schema fields absent from this record.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            ("name", self.name.is_some()),
            ("height", self.height.is_some()),
            ("mass", self.mass.is_some()),
            ("hair_color", self.hair_color.is_some()),
            ("skin_color", self.skin_color.is_some()),
            ("eye_color", self.eye_color.is_some()),
            ("birth_year", self.birth_year.is_some()),
            ("gender", self.gender.is_some()),
            ("homeworld", self.homeworld.is_some()),
            ("films", self.films.is_some()),
            ("species", self.species.is_some()),
            ("vehicles", self.vehicles.is_some()),
            ("starships", self.starships.is_some()),
            ("created", self.created.is_some()),
            ("edited", self.edited.is_some()),
            ("url", self.url.is_some()),
        ];

        present
            .into_iter()
            .filter_map(|(field, is_present)| (!is_present).then_some(field))
            .collect()
    }

    /// Keys present in the response that this schema does not model.
    pub fn unknown_fields(&self) -> Vec<&str> {
        self.extra.keys().map(String::as_str).collect()
    }
}
