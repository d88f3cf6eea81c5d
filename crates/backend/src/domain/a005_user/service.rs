use contracts::domain::a004_audit_entry::AuditAction;
use contracts::domain::a005_user::{User, UserDto, UserId};

use crate::domain::a004_audit_entry::service as audit;
use crate::shared::data::DataGateway;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::actor::Actor;

pub async fn list(gateway: &dyn DataGateway) -> ServiceResult<Vec<User>> {
    Ok(gateway.fetch_users().await?)
}

pub async fn create(gateway: &dyn DataGateway, actor: &Actor, dto: UserDto) -> ServiceResult<UserId> {
    let user = User::new_for_insert(dto);
    user.validate().map_err(ServiceError::Validation)?;

    let existing = gateway.fetch_users().await?;
    if existing.iter().any(|u| u.email == user.email) {
        return Err(ServiceError::Conflict(format!(
            "A user with email '{}' already exists",
            user.email
        )));
    }

    let id = gateway.insert_user(&user).await?;
    audit::record(
        gateway,
        actor,
        AuditAction::UserCreated,
        format!("Created user '{}' as {}", user.full_name, user.role.label()),
    )
    .await;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryGateway;
    use contracts::system::navigation::Role;

    fn dto(email: &str) -> UserDto {
        UserDto {
            full_name: "Yaw Boateng".into(),
            email: email.into(),
            department: "IT".into(),
            role: Role::Hod,
        }
    }

    #[tokio::test]
    async fn test_create_and_reject_duplicate_email() {
        let gateway = InMemoryGateway::new();
        let actor = Actor::system();
        create(&gateway, &actor, dto("yaw@example.com")).await.unwrap();
        assert!(matches!(
            create(&gateway, &actor, dto("YAW@example.com")).await,
            Err(ServiceError::Conflict(_))
        ));
        assert!(matches!(
            create(&gateway, &actor, dto("not-an-email")).await,
            Err(ServiceError::Validation(_))
        ));
        let users = list(&gateway).await.unwrap();
        assert_eq!(users.len(), 1);
        assert!(users[0].is_active);
    }
}
