use contracts::domain::a004_audit_entry::{AuditAction, AuditEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_audit_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub user_name: String,
    pub role: String,
    pub action: String,
    pub details: String,
    pub ip_address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for AuditEntry {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let action = AuditAction::from_label(&m.action)
            .ok_or_else(|| anyhow::anyhow!("Unknown audit action '{}'", m.action))?;
        Ok(AuditEntry {
            id: Uuid::parse_str(&m.id)?,
            timestamp: m.timestamp,
            user: m.user_name,
            role: m.role,
            action,
            details: m.details,
            ip_address: m.ip_address,
        })
    }
}

/// Unreadable rows are skipped with a warning instead of failing the whole log.
pub async fn list_all() -> anyhow::Result<Vec<AuditEntry>> {
    let rows = Entity::find()
        .order_by_asc(Column::Timestamp)
        .all(get_connection()?)
        .await?;
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let id = row.id.clone();
        match AuditEntry::try_from(row) {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::warn!("Skipping audit entry {}: {}", id, e),
        }
    }
    Ok(entries)
}

pub async fn insert(entry: &AuditEntry) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(entry.id.to_string()),
        timestamp: Set(entry.timestamp),
        user_name: Set(entry.user.clone()),
        role: Set(entry.role.clone()),
        action: Set(entry.action.label().to_string()),
        details: Set(entry.details.clone()),
        ip_address: Set(entry.ip_address.clone()),
    };
    active.insert(get_connection()?).await?;
    Ok(())
}
