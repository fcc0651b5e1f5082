#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub jwt_secret: String,
    pub max_connections: u32,
    pub bind_addr: String,
}

impl AppConfig {
    // defaults cover local development only; deployments are expected to
    // provide every value, JWT_SECRET especially
    pub fn from_env() -> Self {
        let db_host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());

        let db_port = std::env::var("DB_PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(3306);

        let db_user = std::env::var("DB_USER").unwrap_or_else(|_| "root".to_string());

        let db_password = std::env::var("DB_PASSWORD").unwrap_or_default();

        let db_name = std::env::var("DB_NAME").unwrap_or_else(|_| "animals_db".to_string());

        let jwt_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "my_secret_key".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(5);

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self {
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            jwt_secret,
            max_connections,
            bind_addr,
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}
