pub mod unit_config;

use crate::AppState;
use crate::auth::Claims;
use crate::config::AppConfig;
use crate::database::AnimalRepository;
use crate::features::animals::model::Animal;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub const TEST_SECRET: &str = "test_secret_key";

// in-memory stand-in for the MySQL repository, with injectable failures
pub struct MockAnimalRepository {
    pub animals: Vec<Animal>,
    pub fail_ping: bool,
    pub fail_query: bool,
}

impl MockAnimalRepository {
    pub fn with_animals(animals: Vec<Animal>) -> Self {
        Self {
            animals,
            fail_ping: false,
            fail_query: false,
        }
    }
}

#[async_trait]
impl AnimalRepository for MockAnimalRepository {
    async fn ping(&self) -> Result<()> {
        if self.fail_ping {
            return Err(anyhow!("simulated connection failure"));
        }
        Ok(())
    }

    async fn list_animals(&self, limit: u64, offset: u64) -> Result<Vec<Animal>> {
        if self.fail_query {
            return Err(anyhow!("simulated query failure"));
        }

        Ok(self
            .animals
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

// the three seed rows used across the router tests
pub fn seeded_animals() -> Vec<Animal> {
    vec![
        Animal {
            id: 1,
            name: "Rex".into(),
            species: "Dog".into(),
        },
        Animal {
            id: 2,
            name: "Milo".into(),
            species: "Cat".into(),
        },
        Animal {
            id: 3,
            name: "Zara".into(),
            species: "Bird".into(),
        },
    ]
}

pub fn test_config() -> AppConfig {
    AppConfig {
        db_host: "localhost".into(),
        db_port: 3306,
        db_user: "root".into(),
        db_password: "".into(),
        db_name: "animals_db".into(),
        jwt_secret: TEST_SECRET.into(),
        max_connections: 1,
        bind_addr: "127.0.0.1:0".into(),
    }
}

pub fn test_state(repo: MockAnimalRepository) -> AppState {
    AppState {
        repo: Arc::new(repo),
        config: Arc::new(test_config()),
    }
}

pub fn mint_token(secret: &str, exp: usize) -> String {
    let claims = Claims {
        sub: Some("tester".into()),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn future_exp() -> usize {
    unix_now() + 3600
}

// well past the default validation leeway
pub fn past_exp() -> usize {
    unix_now() - 3600
}

fn unix_now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}
