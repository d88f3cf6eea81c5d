use super::role::Role;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

/// Menu resolved for one role. `role == None` means the tag was not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub role: Option<Role>,
    pub landing: Option<&'static str>,
    pub sections: Vec<NavSection>,
}

impl Navigation {
    pub fn empty() -> Self {
        Self {
            role: None,
            landing: None,
            sections: Vec::new(),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.items().any(|i| i.label == label)
    }

    pub fn contains_route(&self, route: &str) -> bool {
        self.items().any(|i| i.route.eq_ignore_ascii_case(route))
    }
}

const fn item(route: &'static str, icon: &'static str, label: &'static str) -> NavItem {
    NavItem { route, icon, label }
}

const KPI_DASHBOARD: NavItem = item("/kpi-dashboard", "Chart", "KPI Dashboard");
const REPORTS: NavItem = item("/reports", "PowerBILogo16", "Reports & Analytics");
const CREATE_KPI: NavItem = item("/kpis/kpi-create", "CircleAdditionSolid", "Create KPI");

// ---------------------------------------------------------------------------
// admin
// ---------------------------------------------------------------------------

const ADMIN: &[NavSection] = &[
    NavSection {
        title: "Main",
        items: &[item("/AdminDashboard", "ViewDashboard", "Dashboard")],
    },
    NavSection {
        title: "KPI Management",
        items: &[
            KPI_DASHBOARD,
            item("/all-kpis", "CheckList", "All KPIs"),
            CREATE_KPI,
            item("/kpis/batch-upload", "BulkUpload", "Batch KPI Upload"),
        ],
    },
    NavSection {
        title: "Performance",
        items: &[
            item("/performance-cycles", "Calendar", "Performance Cycles"),
            item("/performance-cycles/create", "CalendarAgenda", "Create Performance Cycle"),
            item("/team-performance", "Group", "Team Performance"),
        ],
    },
    NavSection {
        title: "Administration",
        items: &[
            item("/user-management", "PlayerSettings", "User Management"),
            item("/department-management", "EMI", "Departments"),
            REPORTS,
            item("/audit", "ComplianceAudit", "Audit Trail"),
            item("/settings", "Settings", "Settings"),
        ],
    },
];

// ---------------------------------------------------------------------------
// hod
// ---------------------------------------------------------------------------

const HOD: &[NavSection] = &[NavSection {
    title: "Manager Section",
    items: &[
        item("/ManagerDashboard", "ViewDashboard", "Manager Dashboard"),
        item("/TeamManagement", "Group", "Team Management"),
        item("/PerformanceCycle", "Calendar", "Performance Review"),
        CREATE_KPI,
    ],
}];

// ---------------------------------------------------------------------------
// user
// ---------------------------------------------------------------------------

const USER: &[NavSection] = &[NavSection {
    title: "Employee Dashboard",
    items: &[
        item("/EmployeeDashboard", "ViewDashboard", "Employee Dashboard"),
        item("/FeedbackCenter", "Feedback", "Feedback"),
        item("/PerformanceCycle", "Calendar", "Performance Review"),
        item("/GoalsObjectives", "Bullseye", "Goals"),
        REPORTS,
    ],
}];

// ---------------------------------------------------------------------------
// bde
// ---------------------------------------------------------------------------

const BDE: &[NavSection] = &[NavSection {
    title: "BDC Dashboard",
    items: &[
        item("/BDEDashboard", "ViewDashboard", "BDC Dashboard"),
        item("/approval-queue", "CompletedSolid", "Approval Queue"),
        KPI_DASHBOARD,
        item("/all-kpis", "TaskList", "All KPIs"),
        REPORTS,
    ],
}];

// ---------------------------------------------------------------------------
// auditor
// ---------------------------------------------------------------------------

const AUDITOR: &[NavSection] = &[NavSection {
    title: "Audit & Compliance",
    items: &[
        item("/AuditorDashboard", "ViewDashboard", "Auditor Dashboard"),
        item("/audit", "ComplianceAudit", "Audit Trail"),
        KPI_DASHBOARD,
        REPORTS,
    ],
}];

pub fn sections_for(role: Role) -> &'static [NavSection] {
    match role {
        Role::Admin => ADMIN,
        Role::Hod => HOD,
        Role::User => USER,
        Role::Bde => BDE,
        Role::Auditor => AUDITOR,
    }
}

/// Resolves a stored role tag to its menu. Total over all strings: anything
/// unrecognised yields an empty menu with no landing route.
pub fn resolve(role: &str) -> Navigation {
    match Role::parse(role) {
        Some(role) => Navigation {
            role: Some(role),
            landing: Some(role.landing_route()),
            sections: sections_for(role).to_vec(),
        },
        None => Navigation::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bde_menu() {
        let nav = resolve("bde");
        assert!(nav.contains_label("Approval Queue"));
        assert!(nav.contains_label("KPI Dashboard"));
        assert!(!nav.contains_label("User Management"));
        assert_eq!(nav.landing, Some("/BDEDashboard"));
    }

    #[test]
    fn test_unknown_role_is_empty() {
        for tag in ["unknown", "", "   ", "root", "ADMINISTRATOR", "\u{1F600}"] {
            let nav = resolve(tag);
            assert!(nav.sections.is_empty(), "tag {:?}", tag);
            assert_eq!(nav.landing, None);
            assert_eq!(nav.role, None);
        }
    }

    #[test]
    fn test_admin_section_order() {
        let titles: Vec<&str> = resolve("admin").sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Main", "KPI Management", "Performance", "Administration"]
        );
    }

    #[test]
    fn test_aliases_resolve_like_canonical_tags() {
        assert_eq!(resolve("manager"), resolve("hod"));
        assert_eq!(resolve("employee"), resolve("user"));
    }

    #[test]
    fn test_every_role_menu_contains_its_landing() {
        for role in Role::ALL {
            let nav = resolve(role.as_str());
            assert!(!nav.sections.is_empty());
            assert!(nav.contains_route(role.landing_route()), "{:?}", role);
        }
    }
}
