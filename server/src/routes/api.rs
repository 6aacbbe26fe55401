use axum::Json;
use serde::Serialize;

use prefmap_shared::MapType;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub maps: Vec<&'static str>,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        maps: MapType::ALL.iter().map(|map| map.as_str()).collect(),
    })
}
