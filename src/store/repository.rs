use sqlx::PgPool;
use uuid::Uuid;

use crate::store::manager::StoreError;
use crate::store::models::{Link, LinkDraft, TodayDraft, TodayEntry};

/// CRUD access to the links collection. List order follows the seq
/// column, so records come back in insertion order.
pub struct LinkRepository {
    pool: PgPool,
}

impl LinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Link>, StoreError> {
        let links = sqlx::query_as::<_, Link>(
            "SELECT id, name, title, description, type, date FROM links ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    pub async fn create(&self, draft: &LinkDraft) -> Result<Link, StoreError> {
        let link = sqlx::query_as::<_, Link>(
            "INSERT INTO links (name, title, description, type, date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, title, description, type, date",
        )
        .bind(&draft.name)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.kind)
        .bind(&draft.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(link)
    }

    /// Full replacement of all fields; the id never changes.
    pub async fn update(&self, id: Uuid, draft: &LinkDraft) -> Result<Link, StoreError> {
        let updated = sqlx::query_as::<_, Link>(
            "UPDATE links SET name = $1, title = $2, description = $3, type = $4, date = $5 \
             WHERE id = $6 \
             RETURNING id, name, title, description, type, date",
        )
        .bind(&draft.name)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.kind)
        .bind(&draft.date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| StoreError::NotFound(format!("link {}", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("link {}", id)));
        }
        Ok(())
    }
}

/// CRUD access to the today_entries collection
pub struct TodayRepository {
    pool: PgPool,
}

impl TodayRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TodayEntry>, StoreError> {
        let entries = sqlx::query_as::<_, TodayEntry>(
            "SELECT id, name, description, date FROM today_entries ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn create(&self, draft: &TodayDraft) -> Result<TodayEntry, StoreError> {
        let entry = sqlx::query_as::<_, TodayEntry>(
            "INSERT INTO today_entries (name, description, date) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, description, date",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    pub async fn update(&self, id: Uuid, draft: &TodayDraft) -> Result<TodayEntry, StoreError> {
        let updated = sqlx::query_as::<_, TodayEntry>(
            "UPDATE today_entries SET name = $1, description = $2, date = $3 \
             WHERE id = $4 \
             RETURNING id, name, description, date",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| StoreError::NotFound(format!("today entry {}", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM today_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("today entry {}", id)));
        }
        Ok(())
    }
}
