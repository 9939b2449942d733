use crate::error::into_store_error;

use nr_core::{Identity, IdentityStore, NewIdentity, StoreError, StoreResult};

use async_trait::async_trait;
use log::debug;
use sqlx::{FromRow, SqlitePool};

const SELECT_NURSE: &str = r#"
    SELECT nurse_id, first_name, last_name, email, password, profile_picture
    FROM nurses
"#;

#[derive(FromRow)]
struct NurseRow {
    nurse_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    profile_picture: Option<Vec<u8>>,
}

impl From<NurseRow> for Identity {
    fn from(row: NurseRow) -> Self {
        Self {
            id: row.nurse_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            credential: row.password,
            profile_picture: row.profile_picture,
        }
    }
}

/// SQLite-backed identity store over the `nurses` table.
///
/// Email uniqueness is enforced by the table's `UNIQUE COLLATE NOCASE`
/// constraint, so concurrent creates settle inside SQLite.
#[derive(Clone)]
pub struct NurseRepository {
    pool: SqlitePool,
}

impl NurseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, clause: &str, value: &str) -> StoreResult<Option<Identity>> {
        let sql = format!("{SELECT_NURSE} WHERE {clause} ORDER BY nurse_id ASC LIMIT 1");

        let row = sqlx::query_as::<_, NurseRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| into_store_error(e, None))?;

        Ok(row.map(Identity::from))
    }
}

#[async_trait]
impl IdentityStore for NurseRepository {
    async fn create(&self, identity: NewIdentity) -> StoreResult<Identity> {
        let result = sqlx::query(
            r#"
            INSERT INTO nurses (first_name, last_name, email, password, profile_picture)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .bind(&identity.email)
        .bind(&identity.credential)
        .bind(&identity.profile_picture)
        .execute(&self.pool)
        .await
        .map_err(|e| into_store_error(e, Some(&identity.email)))?;

        let id = result.last_insert_rowid();
        debug!("Inserted nurse row {}", id);

        Ok(Identity::from_new(id, identity))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Identity>> {
        let sql = format!("{SELECT_NURSE} WHERE nurse_id = ?");

        let row = sqlx::query_as::<_, NurseRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| into_store_error(e, None))?;

        Ok(row.map(Identity::from))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        // The column collates NOCASE; login wants an exact match
        self.fetch_one_where("email = ? COLLATE BINARY", email)
            .await
    }

    async fn find_by_first_name(&self, first_name: &str) -> StoreResult<Option<Identity>> {
        self.fetch_one_where("first_name = ? COLLATE NOCASE", first_name)
            .await
    }

    async fn exists_by_email(&self, email: &str) -> StoreResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM nurses WHERE email = ? COLLATE NOCASE)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| into_store_error(e, None))
    }

    async fn exists_by_id(&self, id: i64) -> StoreResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM nurses WHERE nurse_id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| into_store_error(e, None))
    }

    async fn list(&self) -> StoreResult<Vec<Identity>> {
        let sql = format!("{SELECT_NURSE} ORDER BY nurse_id ASC");

        let rows = sqlx::query_as::<_, NurseRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| into_store_error(e, None))?;

        Ok(rows.into_iter().map(Identity::from).collect())
    }

    async fn count(&self) -> StoreResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM nurses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| into_store_error(e, None))?;

        Ok(count.max(0) as u64)
    }

    async fn update(&self, identity: &Identity) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE nurses
            SET first_name = ?, last_name = ?, email = ?, password = ?, profile_picture = ?
            WHERE nurse_id = ?
            "#,
        )
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .bind(&identity.email)
        .bind(&identity.credential)
        .bind(&identity.profile_picture)
        .bind(identity.id)
        .execute(&self.pool)
        .await
        .map_err(|e| into_store_error(e, Some(&identity.email)))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(identity.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM nurses WHERE nurse_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| into_store_error(e, None))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(id));
        }

        Ok(())
    }
}
