use crate::database::{AnimalRepository, keep_decodable};
use crate::features::animals::model::Animal;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::prelude::FromRow;
use sqlx::{MySql, Pool};

pub struct MySqlAnimalRepository {
    pool: Pool<MySql>,
}

impl MySqlAnimalRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnimalRepository for MySqlAnimalRepository {
    async fn ping(&self) -> Result<()> {
        // the pool connects lazily, so this is the first point where an
        // unreachable store actually fails
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Failed to acquire a database connection")?;

        Ok(())
    }

    async fn list_animals(&self, limit: u64, offset: u64) -> Result<Vec<Animal>> {
        // limit/offset are bound, never interpolated
        let rows = sqlx::query("SELECT id, name, species FROM animals LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .context("Failed to query animals")?;

        // decode row by row so one bad row cannot fail the request
        Ok(keep_decodable(rows.iter().map(Animal::from_row)))
    }
}
