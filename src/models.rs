//! Wire shapes: views dumped in responses and payloads loaded from request
//! bodies. Payloads are allow-lists; `id` is output-only.

use serde::{Deserialize, Serialize};

use crate::{
    entities::{director, genre, movie},
    error::{AppError, AppResult},
};

/// Column limit declared by the schema. SQLite does not enforce it.
pub const MAX_TEXT_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenreView {
    pub id: i32,
    pub name: Option<String>,
}

impl From<genre::Model> for GenreView {
    fn from(m: genre::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectorView {
    pub id: i32,
    pub name: Option<String>,
}

impl From<director::Model> for DirectorView {
    fn from(m: director::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

/// A movie with its genre and director plucked down to their names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieView {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub genre: Option<String>,
    pub director_id: Option<i32>,
    pub director: Option<String>,
}

impl MovieView {
    /// An absent relation plucks to `None`.
    pub fn pluck(
        m: movie::Model,
        genre: Option<&genre::Model>,
        director: Option<&director::Model>,
    ) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
            genre: genre.and_then(|g| g.name.clone()),
            director_id: m.director_id,
            director: director.and_then(|d| d.name.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenrePayload {
    pub name: Option<String>,
}

impl GenrePayload {
    pub fn validate(&self) -> AppResult<()> {
        check_len("name", self.name.as_deref())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorPayload {
    pub name: Option<String>,
}

impl DirectorPayload {
    pub fn validate(&self) -> AppResult<()> {
        check_len("name", self.name.as_deref())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoviePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl MoviePayload {
    pub fn validate(&self) -> AppResult<()> {
        check_len("title", self.title.as_deref())?;
        check_len("description", self.description.as_deref())?;
        check_len("trailer", self.trailer.as_deref())
    }
}

fn check_len(field: &str, value: Option<&str>) -> AppResult<()> {
    match value {
        Some(v) if v.chars().count() > MAX_TEXT_LEN => Err(AppError::validation(format!(
            "{field} exceeds {MAX_TEXT_LEN} characters"
        ))),
        _ => Ok(()),
    }
}
