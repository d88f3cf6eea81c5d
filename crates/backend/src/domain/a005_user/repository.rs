use contracts::domain::a005_user::{User, UserId};
use contracts::system::navigation::Role;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for User {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let role = Role::parse(&m.role)
            .ok_or_else(|| anyhow::anyhow!("Unknown role '{}' for user {}", m.role, m.id))?;
        Ok(User {
            id: UserId(m.id),
            full_name: m.full_name,
            email: m.email,
            department: m.department,
            role,
            is_active: m.is_active,
        })
    }
}

pub async fn list_all() -> anyhow::Result<Vec<User>> {
    let rows = Entity::find()
        .order_by_asc(Column::FullName)
        .all(get_connection()?)
        .await?;
    let mut users = Vec::with_capacity(rows.len());
    for row in rows {
        match User::try_from(row) {
            Ok(user) => users.push(user),
            Err(e) => tracing::warn!("Skipping user row: {}", e),
        }
    }
    Ok(users)
}

pub async fn insert(user: &User) -> anyhow::Result<UserId> {
    let active = ActiveModel {
        id: NotSet,
        full_name: Set(user.full_name.clone()),
        email: Set(user.email.clone()),
        department: Set(user.department.clone()),
        role: Set(user.role.as_str().to_string()),
        is_active: Set(user.is_active),
    };
    let inserted = active.insert(get_connection()?).await?;
    Ok(UserId(inserted.id))
}
