use std::{fmt, str::FromStr};

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select};
use serde::{Deserialize, Deserializer, de};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
};

pub const PAGE_SIZE: u64 = 10;

// OFFSET is bound as a signed 64-bit integer.
const MAX_PAGE_INDEX: u64 = i64::MAX as u64 / PAGE_SIZE;

/// Query string of `GET /movies/`. Blank values count as absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub director_id: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub genre_id: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<u64>,
}

impl MovieFilter {
    /// Equality filters ANDed together, in storage order.
    pub fn select(&self) -> Select<movie::Entity> {
        let mut query = movie::Entity::find();
        if let Some(id) = self.director_id {
            query = query.filter(movie::Column::DirectorId.eq(id));
        }
        if let Some(id) = self.genre_id {
            query = query.filter(movie::Column::GenreId.eq(id));
        }
        query.order_by_asc(movie::Column::Id)
    }

    /// Zero-based page index for the paginator; pages are 1-indexed on the wire.
    /// Pages beyond any addressable offset clamp to the last one, which is empty.
    pub fn page_index(&self) -> AppResult<Option<u64>> {
        match self.page {
            None => Ok(None),
            Some(0) => Err(AppError::validation("page must be at least 1")),
            Some(p) => Ok(Some((p - 1).min(MAX_PAGE_INDEX))),
        }
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}
