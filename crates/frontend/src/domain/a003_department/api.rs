use contracts::domain::a003_department::{Department, DepartmentId, DepartmentSummary};

use crate::shared::api_utils::{get_json, post_json, IdResponse};

const API_BASE: &str = "/api/department";

pub async fn fetch_departments() -> Result<Vec<Department>, String> {
    get_json(API_BASE).await
}

pub async fn fetch_summary() -> Result<DepartmentSummary, String> {
    get_json(&format!("{}/summary", API_BASE)).await
}

pub async fn create(department: &Department) -> Result<DepartmentId, String> {
    let response: IdResponse = post_json(API_BASE, department).await?;
    Ok(DepartmentId(response.id))
}
