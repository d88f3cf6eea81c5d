use chrono::Utc;
use contracts::domain::a001_kpi::{Approval, ApprovalStatus, Frequency, Kpi, KpiId, KpiStatus};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_kpi")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub indicator: String,
    pub department: String,
    pub objective: String,
    pub target: String,
    pub baseline: String,
    pub status: String,
    pub progress: i32,
    pub budget: f64,
    pub frequency: String,
    pub activities: String,
    pub verification: String,
    pub comments: String,
    pub timeline_start: String,
    pub timeline_end: String,
    pub approval_status: String,
    pub approval_by: String,
    pub approval_at: Option<chrono::DateTime<chrono::Utc>>,
    pub approval_note: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Kpi {
    fn from(m: Model) -> Self {
        let status = KpiStatus::from_label(&m.status).unwrap_or_else(|| {
            tracing::warn!("KPI {} has unknown status '{}'", m.id, m.status);
            KpiStatus::default()
        });
        let approval = Approval {
            status: ApprovalStatus::from_label(&m.approval_status).unwrap_or_default(),
            decided_by: m.approval_by,
            decided_at: m.approval_at,
            note: m.approval_note,
        };
        Kpi {
            id: KpiId(m.id),
            indicator: m.indicator,
            department: m.department,
            objective: m.objective,
            target: m.target,
            baseline: m.baseline,
            status,
            progress: m.progress.clamp(0, 100) as u8,
            budget: m.budget,
            frequency: Frequency::from_label(&m.frequency).unwrap_or_default(),
            activities: m.activities,
            verification: m.verification,
            comments: m.comments,
            timeline_start: m.timeline_start,
            timeline_end: m.timeline_end,
            approval,
        }
    }
}

fn to_active(kpi: &Kpi) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        indicator: Set(kpi.indicator.clone()),
        department: Set(kpi.department.clone()),
        objective: Set(kpi.objective.clone()),
        target: Set(kpi.target.clone()),
        baseline: Set(kpi.baseline.clone()),
        status: Set(kpi.status.label().to_string()),
        progress: Set(kpi.progress as i32),
        budget: Set(kpi.budget),
        frequency: Set(kpi.frequency.label().to_string()),
        activities: Set(kpi.activities.clone()),
        verification: Set(kpi.verification.clone()),
        comments: Set(kpi.comments.clone()),
        timeline_start: Set(kpi.timeline_start.clone()),
        timeline_end: Set(kpi.timeline_end.clone()),
        approval_status: Set(kpi.approval.status.label().to_string()),
        approval_by: Set(kpi.approval.decided_by.clone()),
        approval_at: Set(kpi.approval.decided_at),
        approval_note: Set(kpi.approval.note.clone()),
        created_at: NotSet,
        updated_at: Set(Some(Utc::now())),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Kpi>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: KpiId) -> anyhow::Result<Option<Kpi>> {
    let result = Entity::find_by_id(id.value()).one(get_connection()?).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(kpi: &Kpi) -> anyhow::Result<KpiId> {
    let mut active = to_active(kpi);
    active.created_at = Set(Some(Utc::now()));
    let inserted = active.insert(get_connection()?).await?;
    Ok(KpiId(inserted.id))
}

pub async fn update(kpi: &Kpi) -> anyhow::Result<bool> {
    if Entity::find_by_id(kpi.id.value())
        .one(get_connection()?)
        .await?
        .is_none()
    {
        return Ok(false);
    }
    let mut active = to_active(kpi);
    active.id = Set(kpi.id.value());
    active.update(get_connection()?).await?;
    Ok(true)
}

pub async fn delete(id: KpiId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.value())
        .exec(get_connection()?)
        .await?;
    Ok(result.rows_affected > 0)
}
