use contracts::domain::a003_department::{self as department, Department, DepartmentId, DepartmentSummary};

use crate::shared::data::DataGateway;
use crate::shared::error::{ServiceError, ServiceResult};

pub async fn list(gateway: &dyn DataGateway) -> ServiceResult<Vec<Department>> {
    Ok(gateway.fetch_departments().await?)
}

pub async fn summary(gateway: &dyn DataGateway) -> ServiceResult<DepartmentSummary> {
    let departments = gateway.fetch_departments().await?;
    Ok(department::summarize(&departments))
}

/// Adds a department; names are unique ignoring case.
pub async fn create(gateway: &dyn DataGateway, department: Department) -> ServiceResult<DepartmentId> {
    department.validate().map_err(ServiceError::Validation)?;
    let existing = gateway.fetch_departments().await?;
    if existing
        .iter()
        .any(|d| d.name.eq_ignore_ascii_case(department.name.trim()))
    {
        return Err(ServiceError::Conflict(format!(
            "Department '{}' already exists",
            department.name
        )));
    }
    Ok(gateway.insert_department(&department).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryGateway;

    fn finance() -> Department {
        Department {
            id: DepartmentId(0),
            name: "Finance".into(),
            head: "Ama Mensah".into(),
            staff_count: 7,
            budget_total: 2_500_000.0,
            budget_utilized: 2_200_000.0,
            description: "Financial planning and reporting".into(),
        }
    }

    #[tokio::test]
    async fn test_create_and_duplicate() {
        let gateway = InMemoryGateway::new();
        create(&gateway, finance()).await.unwrap();
        let mut again = finance();
        again.name = "finance".into();
        assert!(matches!(
            create(&gateway, again).await,
            Err(ServiceError::Conflict(_))
        ));
        let summary = summary(&gateway).await.unwrap();
        assert_eq!(summary.departments, 1);
        assert_eq!(summary.total_staff, 7);
    }
}
