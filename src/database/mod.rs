use crate::features::animals::model::Animal;
use anyhow::Result;
use async_trait::async_trait;

pub mod mysql;

// an AnimalRepository can be shared between threads (sqlx::Pool is thread
// safe). db specific implementations live in sibling files: "mysql.rs",
// future: "postgres.rs", "sqlite.rs"
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Liveness check. Err means no usable connection to the store could be
    /// acquired for this request.
    async fn ping(&self) -> Result<()>;

    /// Fetch one page of animals in storage order. `offset` is already
    /// computed by the caller as `(page - 1) * limit`.
    async fn list_animals(&self, limit: u64, offset: u64) -> Result<Vec<Animal>>;
}

// a row that fails to decode is skipped, its siblings still make it into
// the response; the failure only shows up in the logs
pub fn keep_decodable<I>(results: I) -> Vec<Animal>
where
    I: IntoIterator<Item = Result<Animal, sqlx::Error>>,
{
    results
        .into_iter()
        .filter_map(|res| match res {
            Ok(animal) => Some(animal),
            Err(e) => {
                tracing::warn!("skipping undecodable animal row: {e}");
                None
            }
        })
        .collect()
}
