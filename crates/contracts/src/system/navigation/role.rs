use serde::{Deserialize, Serialize};

/// Client-side role tag. Selects menu, landing page and dashboard layout only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hod,
    User,
    Bde,
    Auditor,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Admin, Role::Hod, Role::User, Role::Bde, Role::Auditor];

    /// Parses a stored role tag. Accepts `manager` and `employee` as aliases.
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "hod" | "manager" => Some(Role::Hod),
            "user" | "employee" => Some(Role::User),
            "bde" => Some(Role::Bde),
            "auditor" => Some(Role::Auditor),
            _ => None,
        }
    }

    /// Tag written to local storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hod => "hod",
            Role::User => "user",
            Role::Bde => "bde",
            Role::Auditor => "auditor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Hod => "Head of Department",
            Role::User => "Employee",
            Role::Bde => "Business Development",
            Role::Auditor => "Auditor",
        }
    }

    pub fn landing_route(&self) -> &'static str {
        match self {
            Role::Admin => "/AdminDashboard",
            Role::Hod => "/ManagerDashboard",
            Role::User => "/EmployeeDashboard",
            Role::Bde => "/BDEDashboard",
            Role::Auditor => "/AuditorDashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles_and_aliases() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse(" Manager "), Some(Role::Hod));
        assert_eq!(Role::parse("EMPLOYEE"), Some(Role::User));
        assert_eq!(Role::parse("unknown"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_as_str_parses_back() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_serde_uses_tag() {
        assert_eq!(serde_json::to_string(&Role::Bde).unwrap(), "\"bde\"");
    }
}
