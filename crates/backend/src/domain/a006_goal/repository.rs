use contracts::domain::a006_goal::{Goal, GoalId, GoalPriority, GoalStatus};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_goal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub owner: String,
    pub title: String,
    pub description: String,
    pub due_date: chrono::NaiveDate,
    pub priority: String,
    pub category: String,
    pub progress: i32,
    pub status: String,
    /// JSON array of key result lines.
    pub key_results: String,
    pub alignment: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Goal {
    fn from(m: Model) -> Self {
        let key_results = serde_json::from_str(&m.key_results).unwrap_or_else(|e| {
            tracing::warn!("Goal {} has unreadable key results: {}", m.id, e);
            Vec::new()
        });
        Goal {
            id: GoalId(m.id),
            owner: m.owner,
            title: m.title,
            description: m.description,
            due_date: m.due_date,
            priority: GoalPriority::from_label(&m.priority).unwrap_or_default(),
            category: m.category,
            progress: m.progress.clamp(0, 100) as u8,
            status: GoalStatus::from_label(&m.status).unwrap_or_default(),
            key_results,
            alignment: m.alignment,
        }
    }
}

fn to_active(goal: &Goal) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: NotSet,
        owner: Set(goal.owner.clone()),
        title: Set(goal.title.clone()),
        description: Set(goal.description.clone()),
        due_date: Set(goal.due_date),
        priority: Set(goal.priority.label().to_string()),
        category: Set(goal.category.clone()),
        progress: Set(goal.progress as i32),
        status: Set(goal.status.label().to_string()),
        key_results: Set(serde_json::to_string(&goal.key_results)?),
        alignment: Set(goal.alignment.clone()),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<Goal>> {
    let items = Entity::find()
        .order_by_asc(Column::DueDate)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: GoalId) -> anyhow::Result<Option<Goal>> {
    let result = Entity::find_by_id(id.value()).one(get_connection()?).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(goal: &Goal) -> anyhow::Result<GoalId> {
    let inserted = to_active(goal)?.insert(get_connection()?).await?;
    Ok(GoalId(inserted.id))
}

pub async fn update(goal: &Goal) -> anyhow::Result<bool> {
    if Entity::find_by_id(goal.id.value())
        .one(get_connection()?)
        .await?
        .is_none()
    {
        return Ok(false);
    }
    let mut active = to_active(goal)?;
    active.id = Set(goal.id.value());
    active.update(get_connection()?).await?;
    Ok(true)
}
