use contracts::domain::a001_kpi::{ApprovalRequest, ImportReport, Kpi, KpiDto, KpiFilter, KpiId};

use crate::shared::api_utils::{self, get_json, get_text, post_json, post_text, with_query, IdResponse};

const API_BASE: &str = "/api/kpi";

pub async fn fetch_kpis(filter: &KpiFilter) -> Result<Vec<Kpi>, String> {
    get_json(&with_query(API_BASE, filter)).await
}

pub async fn fetch_by_id(id: KpiId) -> Result<Kpi, String> {
    get_json(&format!("{}/{}", API_BASE, id)).await
}

/// Creates the KPI when `dto.id` is empty, updates it otherwise.
pub async fn save(dto: &KpiDto) -> Result<KpiId, String> {
    let response: IdResponse = post_json(API_BASE, dto).await?;
    Ok(KpiId(response.id))
}

pub async fn delete(id: KpiId) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", API_BASE, id)).await
}

/// Approves or rejects a pending KPI. The server answers 409 once decided.
pub async fn decide(id: KpiId, request: &ApprovalRequest) -> Result<Kpi, String> {
    post_json(&format!("{}/{}/approval", API_BASE, id), request).await
}

pub async fn import_csv(content: String) -> Result<ImportReport, String> {
    post_text(&format!("{}/import", API_BASE), content, "text/csv").await
}

pub async fn export_csv(filter: &KpiFilter) -> Result<String, String> {
    get_text(&with_query(&format!("{}/export", API_BASE), filter)).await
}
