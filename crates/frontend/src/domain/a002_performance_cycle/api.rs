use contracts::domain::a002_performance_cycle::{CycleId, PerformanceCycle, PerformanceCycleDto};

use crate::shared::api_utils::{get_json, post_empty, post_json, IdResponse};

const API_BASE: &str = "/api/performance_cycle";

pub async fn fetch_cycles() -> Result<Vec<PerformanceCycle>, String> {
    get_json(API_BASE).await
}

pub async fn create(dto: &PerformanceCycleDto) -> Result<CycleId, String> {
    let response: IdResponse = post_json(API_BASE, dto).await?;
    Ok(CycleId(response.id))
}

/// Moves the cycle to its next status. The server answers 409 once completed.
pub async fn advance(id: CycleId) -> Result<PerformanceCycle, String> {
    post_empty(&format!("{}/{}/advance", API_BASE, id)).await
}
