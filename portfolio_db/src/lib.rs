use portfolio_core::error::{PfError, PfResult};

use anyhow::Context;
use entrait::entrait_export as entrait;
use sqlx::error::DatabaseError;
use sqlx::PgPool;

pub mod about_db;
pub mod project_db;

#[derive(Clone)]
pub struct Db {
    pub pg_pool: PgPool,
}

impl Db {
    pub async fn init(url: &str) -> anyhow::Result<Self> {
        let pg_pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(50)
            .connect(url)
            .await
            .context("could not connect to database_url")?;

        sqlx::migrate!("../migrations")
            .run(&pg_pool)
            .await
            .context("could not run database migrations")?;

        tracing::info!("database connected and migrated");

        Ok(Db { pg_pool })
    }
}

#[entrait(pub GetPgPool, mock_api=GetPgPoolMock)]
fn get_pg_pool(db: &Db) -> &PgPool {
    &db.pg_pool
}

trait DbResultExt<T> {
    fn on_constraint(
        self,
        name: &str,
        f: impl FnOnce(Box<dyn DatabaseError>) -> PfError,
    ) -> PfResult<T>;

    /// Map an SQLSTATE class 22 ("data exception") into a validation error.
    fn on_data_exception(self, message: &'static str) -> PfResult<T>;
}

impl<T, E> DbResultExt<T> for Result<T, E>
where
    E: Into<PfError>,
{
    fn on_constraint(
        self,
        name: &str,
        map_err: impl FnOnce(Box<dyn DatabaseError>) -> PfError,
    ) -> PfResult<T> {
        self.map_err(|e| match e.into() {
            PfError::Sqlx(sqlx::Error::Database(dbe)) if dbe.constraint() == Some(name) => {
                map_err(dbe)
            }
            e => e,
        })
    }

    fn on_data_exception(self, message: &'static str) -> PfResult<T> {
        self.map_err(|e| match e.into() {
            PfError::Sqlx(sqlx::Error::Database(dbe)) if is_data_exception(&*dbe) => {
                PfError::validation(message, dbe.message())
            }
            e => e,
        })
    }
}

fn is_data_exception(dbe: &dyn DatabaseError) -> bool {
    dbe.code().map_or(false, |code| code.starts_with("22"))
}

#[cfg(test)]
async fn create_test_db() -> entrait::Impl<Db> {
    use sha2::Digest;
    use sqlx::Connection;

    let mut hasher = sha2::Sha256::new();
    hasher.update(std::thread::current().name().unwrap().as_bytes());
    let thread_hash = hex::encode(hasher.finalize());
    let db_name = format!("portfolio_{}", &thread_hash[0..24]);

    let mut url = database_server_url();
    let mut connection = sqlx::PgConnection::connect(url.as_str()).await.unwrap();

    sqlx::query(&format!(r#"DROP DATABASE IF EXISTS "{}""#, db_name))
        .execute(&mut connection)
        .await
        .expect("failed to drop");

    sqlx::query(&format!(r#"CREATE DATABASE "{}""#, db_name))
        .execute(&mut connection)
        .await
        .expect("failed creating test database");

    url.set_path(&db_name);

    let pg_pool = sqlx::PgPool::connect(url.as_str())
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("../migrations")
        .run(&pg_pool)
        .await
        .expect("Failed to migrate");

    entrait::Impl::new(Db { pg_pool })
}

#[cfg(test)]
fn database_server_url() -> url::Url {
    // (re)load the .env file
    dotenv::dotenv().ok();

    let mut url: url::Url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set")
        .parse()
        .expect("malformed DATABASE_URL");

    if let Ok(mut path) = url.path_segments_mut() {
        path.clear();
    }

    url
}
