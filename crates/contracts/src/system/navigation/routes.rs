use super::role::Role;

/// Screen rendered for a location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// `/`: replaced by the landing route of the current role.
    Home,
    RoleDashboard(Role),
    KpiDashboard,
    AllKpis,
    CreateKpi,
    BatchKpiUpload,
    PerformanceCycles,
    CreatePerformanceCycle,
    UserManagement,
    DepartmentManagement,
    Reports,
    AuditTrail,
    ApprovalQueue,
    Goals,
    Notifications,
    ComingSoon,
}

pub const ROUTES: &[(&str, Screen)] = &[
    ("/", Screen::Home),
    ("/AdminDashboard", Screen::RoleDashboard(Role::Admin)),
    ("/ManagerDashboard", Screen::RoleDashboard(Role::Hod)),
    ("/EmployeeDashboard", Screen::RoleDashboard(Role::User)),
    ("/BDEDashboard", Screen::RoleDashboard(Role::Bde)),
    ("/AuditorDashboard", Screen::RoleDashboard(Role::Auditor)),
    ("/kpi-dashboard", Screen::KpiDashboard),
    ("/all-kpis", Screen::AllKpis),
    ("/kpis/kpi-create", Screen::CreateKpi),
    ("/kpis/batch-upload", Screen::BatchKpiUpload),
    ("/performance-cycles", Screen::PerformanceCycles),
    ("/PerformanceCycle", Screen::PerformanceCycles),
    ("/performance-cycles/create", Screen::CreatePerformanceCycle),
    ("/user-management", Screen::UserManagement),
    ("/department-management", Screen::DepartmentManagement),
    ("/reports", Screen::Reports),
    ("/audit", Screen::AuditTrail),
    ("/approval-queue", Screen::ApprovalQueue),
    ("/GoalsObjectives", Screen::Goals),
    ("/goals", Screen::Goals),
    ("/notifications", Screen::Notifications),
];

/// Normalises a location path or hash: strips a leading `#`, ensures a
/// leading `/` and drops trailing slashes.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let without_hash = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let without_trailing = without_hash.trim_end_matches('/');
    if without_trailing.starts_with('/') {
        without_trailing.to_string()
    } else {
        format!("/{}", without_trailing)
    }
}

pub fn screen_for_path(path: &str) -> Screen {
    let normalized = normalize_path(path);
    ROUTES
        .iter()
        .find(|(route, _)| route.eq_ignore_ascii_case(&normalized))
        .map(|(_, screen)| *screen)
        .unwrap_or(Screen::ComingSoon)
}

/// Page title shown in the header for a screen.
pub fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Home",
        Screen::RoleDashboard(Role::Admin) => "Admin Dashboard",
        Screen::RoleDashboard(Role::Hod) => "Manager Dashboard",
        Screen::RoleDashboard(Role::User) => "Employee Dashboard",
        Screen::RoleDashboard(Role::Bde) => "BDC Dashboard",
        Screen::RoleDashboard(Role::Auditor) => "Auditor Dashboard",
        Screen::KpiDashboard => "KPI Dashboard",
        Screen::AllKpis => "All KPIs",
        Screen::CreateKpi => "Create KPI",
        Screen::BatchKpiUpload => "Batch KPI Upload",
        Screen::PerformanceCycles => "Performance Cycles",
        Screen::CreatePerformanceCycle => "Create Performance Cycle",
        Screen::UserManagement => "User Management",
        Screen::DepartmentManagement => "Departments",
        Screen::Reports => "Reports & Analytics",
        Screen::AuditTrail => "Audit Trail",
        Screen::ApprovalQueue => "Approval Queue",
        Screen::Goals => "Goals & Objectives",
        Screen::Notifications => "Notifications & Reminders",
        Screen::ComingSoon => "Coming Soon",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes() {
        assert_eq!(screen_for_path("/"), Screen::Home);
        assert_eq!(screen_for_path(""), Screen::Home);
        assert_eq!(screen_for_path("/all-kpis"), Screen::AllKpis);
        assert_eq!(screen_for_path("/BDEDashboard"), Screen::RoleDashboard(Role::Bde));
        assert_eq!(screen_for_path("/PerformanceCycle"), Screen::PerformanceCycles);
        assert_eq!(screen_for_path("/approval-queue"), Screen::ApprovalQueue);
        assert_eq!(screen_for_path("/GoalsObjectives"), Screen::Goals);
        assert_eq!(screen_for_path("/notifications"), Screen::Notifications);
    }

    #[test]
    fn test_matching_is_lenient() {
        assert_eq!(screen_for_path("#/kpi-dashboard"), Screen::KpiDashboard);
        assert_eq!(screen_for_path("/KPI-Dashboard/"), Screen::KpiDashboard);
        assert_eq!(screen_for_path("kpis/kpi-create"), Screen::CreateKpi);
        assert_eq!(screen_for_path("/admindashboard"), Screen::RoleDashboard(Role::Admin));
    }

    #[test]
    fn test_unbound_paths_fall_back_to_coming_soon() {
        for path in ["/FeedbackCenter", "/settings", "/nope/deeper"] {
            assert_eq!(screen_for_path(path), Screen::ComingSoon, "{}", path);
        }
    }

    #[test]
    fn test_every_landing_route_is_bound() {
        for role in Role::ALL {
            assert_eq!(
                screen_for_path(role.landing_route()),
                Screen::RoleDashboard(role)
            );
        }
    }
}
