use contracts::domain::a007_notification::{Notification, NotificationId, NotificationKind};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a007_notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub department: String,
    pub is_read: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Notification {
    fn from(m: Model) -> Self {
        Notification {
            id: NotificationId(m.id),
            created_at: m.created_at,
            kind: NotificationKind::parse(&m.kind).unwrap_or_default(),
            title: m.title,
            message: m.message,
            department: m.department,
            read: m.is_read,
        }
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Notification>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(notification: &Notification) -> anyhow::Result<NotificationId> {
    let active = ActiveModel {
        id: NotSet,
        created_at: Set(notification.created_at),
        kind: Set(notification.kind.as_str().to_string()),
        title: Set(notification.title.clone()),
        message: Set(notification.message.clone()),
        department: Set(notification.department.clone()),
        is_read: Set(notification.read),
    };
    let inserted = active.insert(get_connection()?).await?;
    Ok(NotificationId(inserted.id))
}

pub async fn mark_read(id: NotificationId) -> anyhow::Result<bool> {
    let result = Entity::update_many()
        .col_expr(Column::IsRead, Expr::value(true))
        .filter(Column::Id.eq(id.value()))
        .exec(get_connection()?)
        .await?;
    if result.rows_affected > 0 {
        return Ok(true);
    }
    // Already-read rows still exist.
    Ok(Entity::find_by_id(id.value())
        .one(get_connection()?)
        .await?
        .is_some())
}

pub async fn mark_all_read() -> anyhow::Result<usize> {
    let result = Entity::update_many()
        .col_expr(Column::IsRead, Expr::value(true))
        .filter(Column::IsRead.eq(false))
        .exec(get_connection()?)
        .await?;
    Ok(result.rows_affected as usize)
}
