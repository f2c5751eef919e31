use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait, PaginatorTrait,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    entities::{director, genre, movie},
    error::{AppError, AppResult},
    filter::{MovieFilter, PAGE_SIZE},
    models::{DirectorPayload, DirectorView, GenrePayload, GenreView, MoviePayload, MovieView},
};

/// Storage access for the three catalog tables. Reads go straight to the
/// pool; every write runs in its own transaction, rolled back on drop.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_movies(&self, filter: &MovieFilter) -> AppResult<Vec<MovieView>> {
        let query = filter.select();
        let movies = match filter.page_index()? {
            Some(index) => query.paginate(&self.db, PAGE_SIZE).fetch_page(index).await?,
            None => query.all(&self.db).await?,
        };
        tracing::debug!(count = movies.len(), ?filter, "listed movies");
        self.pluck_all(movies).await
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<MovieView> {
        let movie = movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Movie", id))?;
        let genre = movie.find_related(genre::Entity).one(&self.db).await?;
        let director = movie.find_related(director::Entity).one(&self.db).await?;
        Ok(MovieView::pluck(movie, genre.as_ref(), director.as_ref()))
    }

    pub async fn create_movie(&self, payload: MoviePayload) -> AppResult<i32> {
        let txn = self.db.begin().await?;
        let mut model = <movie::ActiveModel as Default>::default();
        apply_movie(&mut model, payload);
        let created = model.insert(&txn).await?;
        txn.commit().await?;
        Ok(created.id)
    }

    pub async fn update_movie(&self, id: i32, payload: MoviePayload) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let existing = movie::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Movie", id))?;
        let mut model: movie::ActiveModel = existing.into();
        apply_movie(&mut model, payload);
        model.update(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let existing = movie::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Movie", id))?;
        existing.delete(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn list_directors(&self) -> AppResult<Vec<DirectorView>> {
        let rows =
            director::Entity::find().order_by_asc(director::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(DirectorView::from).collect())
    }

    pub async fn get_director(&self, id: i32) -> AppResult<DirectorView> {
        director::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(DirectorView::from)
            .ok_or_else(|| AppError::not_found("Director", id))
    }

    pub async fn create_director(&self, payload: DirectorPayload) -> AppResult<i32> {
        let txn = self.db.begin().await?;
        let model = director::ActiveModel { name: Set(payload.name), ..Default::default() };
        let created = model.insert(&txn).await?;
        txn.commit().await?;
        Ok(created.id)
    }

    pub async fn update_director(&self, id: i32, payload: DirectorPayload) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let existing = director::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Director", id))?;
        let mut model: director::ActiveModel = existing.into();
        model.name = Set(payload.name);
        model.update(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn delete_director(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let existing = director::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Director", id))?;
        existing.delete(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn list_genres(&self) -> AppResult<Vec<GenreView>> {
        let rows = genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(GenreView::from).collect())
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<GenreView> {
        genre::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(GenreView::from)
            .ok_or_else(|| AppError::not_found("Genre", id))
    }

    pub async fn create_genre(&self, payload: GenrePayload) -> AppResult<i32> {
        let txn = self.db.begin().await?;
        let model = genre::ActiveModel { name: Set(payload.name), ..Default::default() };
        let created = model.insert(&txn).await?;
        txn.commit().await?;
        Ok(created.id)
    }

    pub async fn update_genre(&self, id: i32, payload: GenrePayload) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let existing = genre::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Genre", id))?;
        let mut model: genre::ActiveModel = existing.into();
        model.name = Set(payload.name);
        model.update(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let existing = genre::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Genre", id))?;
        existing.delete(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    async fn pluck_all(&self, movies: Vec<movie::Model>) -> AppResult<Vec<MovieView>> {
        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let genres = movies.load_one(genre::Entity, &self.db).await?;
        let directors = movies.load_one(director::Entity, &self.db).await?;

        Ok(movies
            .into_iter()
            .zip(genres)
            .zip(directors)
            .map(|((m, g), d)| MovieView::pluck(m, g.as_ref(), d.as_ref()))
            .collect())
    }
}

// Full replacement: fields missing from the payload become NULL.
fn apply_movie(model: &mut movie::ActiveModel, payload: MoviePayload) {
    model.title = Set(payload.title);
    model.description = Set(payload.description);
    model.trailer = Set(payload.trailer);
    model.year = Set(payload.year);
    model.rating = Set(payload.rating);
    model.genre_id = Set(payload.genre_id);
    model.director_id = Set(payload.director_id);
}
