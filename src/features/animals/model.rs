use serde::{Deserialize, Serialize};

/// One row of the `animals` table, serialized to the caller as-is.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub species: String,
}

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw `page`/`limit` query parameters. Kept as strings so that malformed
/// values fall back to the defaults instead of failing extraction with a 400.
#[derive(Deserialize, Debug, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Resolve to a concrete (limit, offset) pair. Absent, non-numeric, or
    /// non-positive values fall back to page=1 / limit=10.
    pub fn resolve(&self) -> (u64, u64) {
        let page = parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);

        // saturate: a caller-supplied page near u64::MAX must not overflow
        (limit, (page - 1).saturating_mul(limit))
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.parse::<u64>().ok()).filter(|n| *n > 0)
}
