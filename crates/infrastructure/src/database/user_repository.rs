use super::error::store_error;
use super::patch::build_update;
use async_trait::async_trait;
use domain::user::{NewUser, User, UserPatch, UserRepository};
use domain::{DomainError, Patch};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, documento_id, nombre_usuario, email, rol, password_hash";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    documento_id: i64,
    nombre_usuario: String,
    email: Option<String>,
    rol: i32,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            documento_id: row.documento_id,
            nombre_usuario: row.nombre_usuario,
            email: row.email,
            rol: row.rol,
            password_hash: row.password_hash,
        }
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Single row matching `condition`, whose only placeholder is `$1`
    async fn find_one(
        &self,
        condition: &str,
        bind: FilterValue<'_>,
    ) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM usuarios WHERE {}", COLUMNS, condition);
        let query = sqlx::query_as::<_, UserRow>(&sql);
        let query = match bind {
            FilterValue::Int(v) => query.bind(v),
            FilterValue::BigInt(v) => query.bind(v),
            FilterValue::Text(v) => query.bind(v),
        };
        query
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(User::from))
            .map_err(store_error)
    }
}

enum FilterValue<'a> {
    Int(i32),
    BigInt(i64),
    Text(&'a str),
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let sql = format!("SELECT {} FROM usuarios ORDER BY id", COLUMNS);
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        self.find_one("id = $1", FilterValue::Int(id)).await
    }

    async fn find_by_documento(&self, documento_id: i64) -> Result<Option<User>, DomainError> {
        let documento = FilterValue::BigInt(documento_id);
        self.find_one("documento_id = $1", documento).await
    }

    /// Identity providers do not preserve the stored casing
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = FilterValue::Text(email.trim());
        self.find_one("lower(email) = lower($1)", email).await
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let sql = format!(
            r#"
            INSERT INTO usuarios (documento_id, nombre_usuario, email, rol, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            COLUMNS
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user.documento_id)
            .bind(&user.nombre_usuario)
            .bind(&user.email)
            .bind(user.rol)
            .bind(&user.password)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.into())
    }

    async fn update(&self, id: i32, patch: &UserPatch) -> Result<Option<User>, DomainError> {
        let row = build_update("usuarios", patch.changes(), id, COLUMNS)
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(User::from))
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, DomainError> {
        let sql = format!("DELETE FROM usuarios WHERE id = $1 RETURNING {}", COLUMNS);
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(User::from))
    }
}
