use contracts::domain::a002_performance_cycle::{CycleId, CycleStatus, CycleType, PerformanceCycle};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_performance_cycle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub cycle_type: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub status: String,
    pub participants: i32,
    pub progress: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PerformanceCycle {
    fn from(m: Model) -> Self {
        PerformanceCycle {
            id: CycleId(m.id),
            name: m.name,
            cycle_type: CycleType::from_label(&m.cycle_type).unwrap_or_default(),
            start_date: m.start_date,
            end_date: m.end_date,
            status: CycleStatus::from_label(&m.status).unwrap_or_default(),
            participants: m.participants.max(0) as u32,
            progress: m.progress.clamp(0, 100) as u8,
        }
    }
}

fn to_active(cycle: &PerformanceCycle) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(cycle.name.clone()),
        cycle_type: Set(cycle.cycle_type.label().to_string()),
        start_date: Set(cycle.start_date),
        end_date: Set(cycle.end_date),
        status: Set(cycle.status.label().to_string()),
        participants: Set(cycle.participants as i32),
        progress: Set(cycle.progress as i32),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<PerformanceCycle>> {
    let items = Entity::find()
        .order_by_asc(Column::StartDate)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: CycleId) -> anyhow::Result<Option<PerformanceCycle>> {
    let result = Entity::find_by_id(id.value()).one(get_connection()?).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(cycle: &PerformanceCycle) -> anyhow::Result<CycleId> {
    let inserted = to_active(cycle).insert(get_connection()?).await?;
    Ok(CycleId(inserted.id))
}

pub async fn update(cycle: &PerformanceCycle) -> anyhow::Result<bool> {
    if Entity::find_by_id(cycle.id.value())
        .one(get_connection()?)
        .await?
        .is_none()
    {
        return Ok(false);
    }
    let mut active = to_active(cycle);
    active.id = Set(cycle.id.value());
    active.update(get_connection()?).await?;
    Ok(true)
}
