use contracts::domain::a003_department::{Department, DepartmentId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_department")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub head: String,
    pub staff_count: i32,
    pub budget_total: f64,
    pub budget_utilized: f64,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Department {
    fn from(m: Model) -> Self {
        Department {
            id: DepartmentId(m.id),
            name: m.name,
            head: m.head,
            staff_count: m.staff_count.max(0) as u32,
            budget_total: m.budget_total,
            budget_utilized: m.budget_utilized,
            description: m.description,
        }
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Department>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(department: &Department) -> anyhow::Result<DepartmentId> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(department.name.clone()),
        head: Set(department.head.clone()),
        staff_count: Set(department.staff_count as i32),
        budget_total: Set(department.budget_total),
        budget_utilized: Set(department.budget_utilized),
        description: Set(department.description.clone()),
    };
    let inserted = active.insert(get_connection()?).await?;
    Ok(DepartmentId(inserted.id))
}
