use contracts::domain::a001_kpi::import::{ImportReport, RejectedRow, CSV_HEADER};
use contracts::domain::a001_kpi::{Frequency, Kpi, KpiDto, KpiFilter, KpiStatus};
use contracts::domain::a004_audit_entry::AuditAction;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::a004_audit_entry::service as audit;
use crate::shared::data::DataGateway;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::actor::Actor;

/// Columns a batch file must provide. The others default to empty.
const REQUIRED_COLUMNS: [&str; 5] = [
    "indicator",
    "department",
    "objective",
    "timelineStart",
    "timelineEnd",
];

/// Why a single CSV row was rejected.
#[derive(Debug, Error)]
pub enum ImportRowError {
    #[error("Malformed row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid {field} '{value}'")]
    Field { field: &'static str, value: String },

    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    indicator: String,
    department: String,
    objective: String,
    #[serde(default)]
    target: String,
    #[serde(default)]
    baseline: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    progress: String,
    #[serde(default)]
    budget: String,
    #[serde(default)]
    frequency: String,
    #[serde(default)]
    activities: String,
    #[serde(default)]
    verification: String,
    #[serde(default)]
    comments: String,
    timeline_start: String,
    timeline_end: String,
}

fn optional(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn non_empty(value: String) -> Option<String> {
    optional(&value).map(str::to_string)
}

impl CsvRow {
    fn into_kpi(self) -> Result<Kpi, ImportRowError> {
        let status = match optional(&self.status) {
            Some(label) => Some(KpiStatus::from_label(label).ok_or_else(|| ImportRowError::Field {
                field: "status",
                value: label.to_string(),
            })?),
            None => None,
        };
        let progress = match optional(&self.progress) {
            Some(raw) => Some(
                raw.trim_end_matches('%')
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| ImportRowError::Field {
                        field: "progress",
                        value: raw.to_string(),
                    })?,
            ),
            None => None,
        };
        let budget = match optional(&self.budget) {
            Some(raw) => Some(raw.replace(',', "").parse::<f64>().map_err(|_| {
                ImportRowError::Field {
                    field: "budget",
                    value: raw.to_string(),
                }
            })?),
            None => None,
        };
        let frequency = match optional(&self.frequency) {
            Some(label) => Some(Frequency::from_label(label).ok_or_else(|| ImportRowError::Field {
                field: "frequency",
                value: label.to_string(),
            })?),
            None => None,
        };

        let dto = KpiDto {
            id: None,
            indicator: self.indicator,
            department: self.department,
            objective: self.objective,
            target: self.target,
            baseline: non_empty(self.baseline),
            status,
            progress,
            budget,
            frequency,
            activities: non_empty(self.activities),
            verification: non_empty(self.verification),
            comments: non_empty(self.comments),
            timeline_start: self.timeline_start,
            timeline_end: self.timeline_end,
        };
        let kpi = Kpi::new_for_insert(dto);
        kpi.validate().map_err(ImportRowError::Invalid)?;
        Ok(kpi)
    }
}

/// Parsed batch file: accepted KPIs with their line numbers, and rejections.
#[derive(Debug, Default)]
pub struct ParsedBatch {
    pub accepted: Vec<(u64, Kpi)>,
    pub rejected: Vec<RejectedRow>,
}

/// Parses a batch file. Fails as a whole only when the header is unusable;
/// row problems end up in `rejected`.
pub fn parse_csv(data: &str) -> ServiceResult<ParsedBatch> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ServiceError::Validation(format!("Unreadable header: {}", e)))?
        .clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !headers.iter().any(|h| h == *c))
        .collect();
    if !missing.is_empty() {
        return Err(ServiceError::Validation(format!(
            "Missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut batch = ParsedBatch::default();
    for (index, record) in reader.records().enumerate() {
        // header is line 1
        let line = record
            .as_ref()
            .ok()
            .and_then(|r| r.position())
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);
        let parsed = record
            .map_err(ImportRowError::from)
            .and_then(|r| r.deserialize::<CsvRow>(Some(&headers)).map_err(ImportRowError::from))
            .and_then(CsvRow::into_kpi);
        match parsed {
            Ok(kpi) => batch.accepted.push((line, kpi)),
            Err(e) => batch.rejected.push(RejectedRow {
                line,
                reason: e.to_string(),
            }),
        }
    }
    Ok(batch)
}

/// Inserts every valid row of the batch file and reports the rest.
pub async fn import(gateway: &dyn DataGateway, actor: &Actor, data: &str) -> ServiceResult<ImportReport> {
    let batch = parse_csv(data)?;
    let mut report = ImportReport {
        imported: Vec::with_capacity(batch.accepted.len()),
        rejected: batch.rejected,
    };
    // A row the store refuses is reported like any other rejected row; rows
    // already inserted stay and later rows are still attempted.
    for (line, kpi) in &batch.accepted {
        match gateway.insert_kpi(kpi).await {
            Ok(id) => report.imported.push(id),
            Err(e) => {
                tracing::warn!("KPI import line {}: {:#}", line, e);
                report.rejected.push(RejectedRow {
                    line: *line,
                    reason: format!("Storage error: {:#}", e),
                });
            }
        }
    }
    report.rejected.sort_by_key(|r| r.line);

    tracing::info!(
        "KPI batch import: {} imported, {} rejected",
        report.imported_count(),
        report.rejected_count()
    );
    audit::record(
        gateway,
        actor,
        AuditAction::KpiImported,
        format!(
            "Imported {} KPIs ({} rejected)",
            report.imported_count(),
            report.rejected_count()
        ),
    )
    .await;
    Ok(report)
}

/// Exports the KPIs matching `filter` and records who took the data out.
pub async fn export(gateway: &dyn DataGateway, actor: &Actor, filter: &KpiFilter) -> ServiceResult<String> {
    let kpis = filter.apply(&gateway.fetch_kpis().await?);
    let body = export_csv(&kpis)?;
    audit::record(
        gateway,
        actor,
        AuditAction::DataExport,
        format!("Exported {} KPIs", kpis.len()),
    )
    .await;
    Ok(body)
}

/// Writes the KPIs with the batch-file header, so an export can be re-imported.
pub fn export_csv(kpis: &[Kpi]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for k in kpis {
        writer.write_record([
            k.indicator.as_str(),
            k.department.as_str(),
            k.objective.as_str(),
            k.target.as_str(),
            k.baseline.as_str(),
            k.status.label(),
            &k.progress.to_string(),
            &k.budget.to_string(),
            k.frequency.label(),
            k.activities.as_str(),
            k.verification.as_str(),
            k.comments.as_str(),
            k.timeline_start.as_str(),
            k.timeline_end.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryGateway;
    use async_trait::async_trait;
    use contracts::domain::a001_kpi::KpiId;
    use contracts::domain::a002_performance_cycle::{CycleId, PerformanceCycle};
    use contracts::domain::a003_department::{Department, DepartmentId};
    use contracts::domain::a004_audit_entry::AuditEntry;
    use contracts::domain::a005_user::{User, UserId};
    use contracts::domain::a006_goal::{Goal, GoalId};
    use contracts::domain::a007_notification::{Notification, NotificationId};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const HEADER: &str = "indicator,department,objective,target,baseline,status,progress,budget,frequency,activities,verification,comments,timelineStart,timelineEnd";

    #[test]
    fn test_parse_accepts_valid_and_reports_invalid() {
        let data = format!(
            "{}\n{}\n{}\n{}\n",
            HEADER,
            "Uptime,IT,Keep systems up,99%,95%,Ongoing,40,\"150,000\",Weekly,,,,2025-01-01,2025-12-31",
            "Turnover,Legal,Reduce churn,5%,,Ongoing,10,0,Monthly,,,,2025-01-01,2025-12-31",
            "Audit,Finance,Close books,100%,,Done,10,0,Monthly,,,,2025-01-01,2025-12-31",
        );
        let batch = parse_csv(&data).unwrap();
        assert_eq!(batch.accepted.len(), 1);
        let (line, kpi) = &batch.accepted[0];
        assert_eq!(*line, 2);
        assert_eq!(kpi.budget, 150_000.0);

        assert_eq!(batch.rejected.len(), 2);
        assert_eq!(batch.rejected[0].line, 3);
        assert!(batch.rejected[0].reason.contains("Legal"));
        assert_eq!(batch.rejected[1].line, 4);
        assert!(batch.rejected[1].reason.contains("status"));
    }

    #[test]
    fn test_minimal_columns_use_defaults() {
        let data = "indicator,department,objective,timelineStart,timelineEnd\n\
                    Leads,Sales,Grow pipeline,2025-02-01,2025-06-30\n";
        let batch = parse_csv(data).unwrap();
        assert_eq!(batch.accepted.len(), 1);
        let kpi = &batch.accepted[0].1;
        assert_eq!(kpi.status, KpiStatus::Ongoing);
        assert_eq!(kpi.frequency, Frequency::Monthly);
        assert_eq!(kpi.progress, 0);
    }

    #[test]
    fn test_missing_required_column_fails_whole_file() {
        let data = "indicator,department\nUptime,IT\n";
        assert!(matches!(parse_csv(data), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn test_bad_dates_and_progress_rejected() {
        let data = format!(
            "{}\n{}\n{}\n",
            HEADER,
            "A,IT,Obj,1,,Ongoing,140,0,Monthly,,,,2025-01-01,2025-12-31",
            "B,IT,Obj,1,,Ongoing,10,0,Monthly,,,,2025-13-01,2025-12-31",
        );
        let batch = parse_csv(&data).unwrap();
        assert!(batch.accepted.is_empty());
        assert_eq!(batch.rejected.len(), 2);
    }

    #[test]
    fn test_export_can_be_reimported() {
        let data = format!(
            "{}\n{}\n",
            HEADER,
            "Uptime,IT,\"Keep systems up, always\",99%,95%,At Risk,40,1500.5,Quarterly,Patch,Logs,None,2025-01-01,2025-12-31",
        );
        let original = parse_csv(&data).unwrap().accepted.remove(0).1;
        let exported = export_csv(std::slice::from_ref(&original)).unwrap();
        assert!(exported.starts_with(HEADER));
        let again = parse_csv(&exported).unwrap().accepted.remove(0).1;
        assert_eq!(again, original);
    }

    #[tokio::test]
    async fn test_import_inserts_valid_rows() {
        let gateway = InMemoryGateway::new();
        let data = format!(
            "{}\n{}\n{}\n",
            HEADER,
            "Uptime,IT,Keep systems up,99%,,Ongoing,40,100,Weekly,,,,2025-01-01,2025-12-31",
            "Broken,IT,,99%,,Ongoing,40,100,Weekly,,,,2025-01-01,2025-12-31",
        );
        let report = import(&gateway, &Actor::system(), &data).await.unwrap();
        assert_eq!(report.imported_count(), 1);
        assert_eq!(report.rejected_count(), 1);
        assert_eq!(gateway.fetch_kpis().await.unwrap().len(), 1);
        let audit = gateway.fetch_audit_entries().await.unwrap();
        assert_eq!(audit[0].action, AuditAction::KpiImported);
    }

    /// Store whose KPI inserts start failing after `healthy_inserts` rows.
    struct FailingKpiStore {
        inner: InMemoryGateway,
        healthy_inserts: usize,
        inserts: AtomicUsize,
    }

    impl FailingKpiStore {
        fn new(healthy_inserts: usize) -> Self {
            Self {
                inner: InMemoryGateway::new(),
                healthy_inserts,
                inserts: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DataGateway for FailingKpiStore {
        async fn fetch_kpis(&self) -> anyhow::Result<Vec<Kpi>> {
            self.inner.fetch_kpis().await
        }
        async fn get_kpi(&self, id: KpiId) -> anyhow::Result<Option<Kpi>> {
            self.inner.get_kpi(id).await
        }
        async fn insert_kpi(&self, kpi: &Kpi) -> anyhow::Result<KpiId> {
            if self.inserts.fetch_add(1, Ordering::SeqCst) >= self.healthy_inserts {
                anyhow::bail!("disk I/O error");
            }
            self.inner.insert_kpi(kpi).await
        }
        async fn update_kpi(&self, kpi: &Kpi) -> anyhow::Result<bool> {
            self.inner.update_kpi(kpi).await
        }
        async fn delete_kpi(&self, id: KpiId) -> anyhow::Result<bool> {
            self.inner.delete_kpi(id).await
        }
        async fn fetch_cycles(&self) -> anyhow::Result<Vec<PerformanceCycle>> {
            self.inner.fetch_cycles().await
        }
        async fn get_cycle(&self, id: CycleId) -> anyhow::Result<Option<PerformanceCycle>> {
            self.inner.get_cycle(id).await
        }
        async fn insert_cycle(&self, cycle: &PerformanceCycle) -> anyhow::Result<CycleId> {
            self.inner.insert_cycle(cycle).await
        }
        async fn update_cycle(&self, cycle: &PerformanceCycle) -> anyhow::Result<bool> {
            self.inner.update_cycle(cycle).await
        }
        async fn fetch_departments(&self) -> anyhow::Result<Vec<Department>> {
            self.inner.fetch_departments().await
        }
        async fn insert_department(&self, department: &Department) -> anyhow::Result<DepartmentId> {
            self.inner.insert_department(department).await
        }
        async fn fetch_audit_entries(&self) -> anyhow::Result<Vec<AuditEntry>> {
            self.inner.fetch_audit_entries().await
        }
        async fn insert_audit_entry(&self, entry: &AuditEntry) -> anyhow::Result<()> {
            self.inner.insert_audit_entry(entry).await
        }
        async fn fetch_users(&self) -> anyhow::Result<Vec<User>> {
            self.inner.fetch_users().await
        }
        async fn insert_user(&self, user: &User) -> anyhow::Result<UserId> {
            self.inner.insert_user(user).await
        }
        async fn fetch_goals(&self) -> anyhow::Result<Vec<Goal>> {
            self.inner.fetch_goals().await
        }
        async fn get_goal(&self, id: GoalId) -> anyhow::Result<Option<Goal>> {
            self.inner.get_goal(id).await
        }
        async fn insert_goal(&self, goal: &Goal) -> anyhow::Result<GoalId> {
            self.inner.insert_goal(goal).await
        }
        async fn update_goal(&self, goal: &Goal) -> anyhow::Result<bool> {
            self.inner.update_goal(goal).await
        }
        async fn fetch_notifications(&self) -> anyhow::Result<Vec<Notification>> {
            self.inner.fetch_notifications().await
        }
        async fn insert_notification(&self, notification: &Notification) -> anyhow::Result<NotificationId> {
            self.inner.insert_notification(notification).await
        }
        async fn mark_notification_read(&self, id: NotificationId) -> anyhow::Result<bool> {
            self.inner.mark_notification_read(id).await
        }
        async fn mark_all_notifications_read(&self) -> anyhow::Result<usize> {
            self.inner.mark_all_notifications_read().await
        }
        fn backend_name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_import_keeps_going_after_storage_failure() {
        let gateway = FailingKpiStore::new(2);
        let row = |name: &str| {
            format!("{},IT,Keep systems up,99%,,Ongoing,40,100,Weekly,,,,2025-01-01,2025-12-31", name)
        };
        let data = format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n",
            HEADER,
            row("First"),
            "Broken,IT,,99%,,Ongoing,40,100,Weekly,,,,2025-01-01,2025-12-31",
            row("Second"),
            row("Third"),
            row("Fourth"),
        );
        let report = import(&gateway, &Actor::system(), &data).await.unwrap();

        assert_eq!(report.imported_count(), 2);
        let stored: Vec<String> = gateway
            .fetch_kpis()
            .await
            .unwrap()
            .into_iter()
            .map(|k| k.indicator)
            .collect();
        assert_eq!(stored, vec!["First", "Second"]);

        let lines: Vec<u64> = report.rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![3, 5, 6]);
        assert!(report.rejected[1].reason.starts_with("Storage error"));
        assert!(report.rejected[1].reason.contains("disk I/O error"));

        let audit = gateway.fetch_audit_entries().await.unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action, AuditAction::KpiImported);
        assert_eq!(audit[0].details, "Imported 2 KPIs (3 rejected)");
    }
}
