pub mod a001_kpi;
pub mod a002_performance_cycle;
pub mod a003_department;
pub mod a004_audit_entry;
pub mod a005_user;
pub mod a006_goal;
pub mod a007_notification;
pub mod common;
