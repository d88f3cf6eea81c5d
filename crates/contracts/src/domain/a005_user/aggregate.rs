use crate::domain::a001_kpi::aggregate::is_known_department;
use crate::system::navigation::Role;
use serde::{Deserialize, Serialize};

crate::integer_id!(
    /// Unique user identifier
    UserId
);

/// Portal user as listed on the user management screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub role: Role,
    pub is_active: bool,
}

impl User {
    pub fn new_for_insert(dto: UserDto) -> Self {
        Self {
            id: UserId(0),
            full_name: dto.full_name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            department: dto.department.trim().to_string(),
            role: dto.role,
            is_active: true,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.is_empty() {
            return Err("Full name must not be empty".into());
        }
        let at = self.email.find('@');
        let valid_email = matches!(at, Some(pos) if pos > 0 && pos + 1 < self.email.len());
        if !valid_email {
            return Err(format!("Invalid email '{}'", self.email));
        }
        if !is_known_department(&self.department) {
            return Err(format!("Unknown department '{}'", self.department));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(email: &str) -> UserDto {
        UserDto {
            full_name: " Akua Frimpong ".into(),
            email: email.into(),
            department: "HR".into(),
            role: Role::Hod,
        }
    }

    #[test]
    fn test_new_user_is_active_and_normalised() {
        let user = User::new_for_insert(dto("Akua.Frimpong@Example.com"));
        assert!(user.is_active);
        assert_eq!(user.full_name, "Akua Frimpong");
        assert_eq!(user.email, "akua.frimpong@example.com");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(User::new_for_insert(dto("no-at-sign")).validate().is_err());
        assert!(User::new_for_insert(dto("@example.com")).validate().is_err());
        assert!(User::new_for_insert(dto("akua@")).validate().is_err());
    }
}
