//! Wire types for the movie API and the display-ready [`MovieDetails`].

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A row of the home screen: what the user sees as the title, and the value
/// sent as the `genre` filter. An empty filter means "all genres".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Genre {
    pub label: String,
    #[serde(default)]
    pub filter: String,
}

impl Genre {
    pub fn new(label: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            filter: filter.into(),
        }
    }

    /// A genre whose filter is its own label.
    pub fn named(label: &str) -> Self {
        Self::new(label, label)
    }
}

/// One entry of a `/titles/` listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TitleSummary {
    pub id: u64,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub imdb_score: String,
}

/// A page of the `/titles/` listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TitlePage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<TitleSummary>,
}

/// A `/titles/<id>` detail record, as returned by the API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TitleDetails {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub rated: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub imdb_score: String,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub writers: Vec<String>,
    /// Minutes.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub worldwide_gross_income: Option<f64>,
    #[serde(default)]
    pub long_description: String,
}

/// The API is inconsistent about quoting some scalar fields.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Everything a detail overlay shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub image_url: Option<String>,
    pub genres: String,
    pub released: String,
    pub rated: String,
    pub imdb_score: String,
    pub directors: String,
    pub actors: String,
    pub writers: String,
    pub duration: String,
    pub countries: String,
    pub box_office: String,
    pub description: String,
}

impl MovieDetails {
    /// Labelled detail lines, in display order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Genres", self.genres.as_str()),
            ("Released", self.released.as_str()),
            ("Rated", self.rated.as_str()),
            ("IMDb score", self.imdb_score.as_str()),
            ("Directors", self.directors.as_str()),
            ("Writers", self.writers.as_str()),
            ("Actors", self.actors.as_str()),
            ("Duration", self.duration.as_str()),
            ("Countries", self.countries.as_str()),
            ("Box office", self.box_office.as_str()),
            ("Summary", self.description.as_str()),
        ]
    }
}

impl From<TitleDetails> for MovieDetails {
    fn from(details: TitleDetails) -> Self {
        Self {
            id: details.id,
            title: details.title,
            image_url: details.image_url,
            genres: details.genres.join(", "),
            released: details
                .date_published
                .as_deref()
                .map(format_release_date)
                .unwrap_or_else(|| "Unknown".to_string()),
            rated: details.rated,
            imdb_score: details.imdb_score,
            directors: details.directors.join(", "),
            actors: details.actors.join(", "),
            writers: details.writers.join(", "),
            duration: details
                .duration
                .map(format_duration)
                .unwrap_or_else(|| "Unknown".to_string()),
            countries: details.countries.join(", "),
            box_office: format_box_office(details.worldwide_gross_income),
            description: details.long_description,
        }
    }
}

/// `136` → `"2h16min"`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h{}min", minutes / 60, minutes % 60)
}

/// Gross income in millions of USD, or `"Unknown"`.
pub fn format_box_office(income: Option<f64>) -> String {
    match income {
        Some(amount) => format!("{:.2}M USD", amount / 1_000_000.0),
        None => "Unknown".to_string(),
    }
}

/// `"2010-07-16"` → `"Jul 16, 2010"`. Unparsable input is returned as is.
pub fn format_release_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
