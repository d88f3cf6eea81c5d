use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables created on startup when missing, in creation order.
const TABLES: &[(&str, &str)] = &[
    (
        "a001_kpi",
        r#"
        CREATE TABLE a001_kpi (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            indicator TEXT NOT NULL,
            department TEXT NOT NULL,
            objective TEXT NOT NULL,
            target TEXT NOT NULL DEFAULT '',
            baseline TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'Ongoing',
            progress INTEGER NOT NULL DEFAULT 0,
            budget REAL NOT NULL DEFAULT 0,
            frequency TEXT NOT NULL DEFAULT 'Monthly',
            activities TEXT NOT NULL DEFAULT '',
            verification TEXT NOT NULL DEFAULT '',
            comments TEXT NOT NULL DEFAULT '',
            timeline_start TEXT NOT NULL,
            timeline_end TEXT NOT NULL,
            approval_status TEXT NOT NULL DEFAULT 'Pending',
            approval_by TEXT NOT NULL DEFAULT '',
            approval_at TEXT,
            approval_note TEXT NOT NULL DEFAULT '',
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
    (
        "a002_performance_cycle",
        r#"
        CREATE TABLE a002_performance_cycle (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            cycle_type TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Draft',
            participants INTEGER NOT NULL DEFAULT 0,
            progress INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_department",
        r#"
        CREATE TABLE a003_department (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            head TEXT NOT NULL DEFAULT '',
            staff_count INTEGER NOT NULL DEFAULT 0,
            budget_total REAL NOT NULL DEFAULT 0,
            budget_utilized REAL NOT NULL DEFAULT 0,
            description TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "a004_audit_entry",
        r#"
        CREATE TABLE a004_audit_entry (
            id TEXT PRIMARY KEY NOT NULL,
            timestamp TEXT NOT NULL,
            user_name TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT '',
            action TEXT NOT NULL,
            details TEXT NOT NULL DEFAULT '',
            ip_address TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "a005_user",
        r#"
        CREATE TABLE a005_user (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            department TEXT NOT NULL,
            role TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1
        );
        "#,
    ),
    (
        "a006_goal",
        r#"
        CREATE TABLE a006_goal (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            due_date TEXT NOT NULL,
            priority TEXT NOT NULL DEFAULT 'Medium',
            category TEXT NOT NULL,
            progress INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'Not Started',
            key_results TEXT NOT NULL DEFAULT '[]',
            alignment TEXT NOT NULL
        );
        "#,
    ),
    (
        "a007_notification",
        r#"
        CREATE TABLE a007_notification (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            kind TEXT NOT NULL DEFAULT 'info',
            title TEXT NOT NULL,
            message TEXT NOT NULL DEFAULT '',
            department TEXT NOT NULL DEFAULT '',
            is_read INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
];

/// Columns added after a table's first release, as (table, column, definition).
/// KPIs stored before approvals existed count as approved.
const ADDED_COLUMNS: &[(&str, &str, &str)] = &[
    ("a001_kpi", "approval_status", "TEXT NOT NULL DEFAULT 'Approved'"),
    ("a001_kpi", "approval_by", "TEXT NOT NULL DEFAULT ''"),
    ("a001_kpi", "approval_at", "TEXT"),
    ("a001_kpi", "approval_note", "TEXT NOT NULL DEFAULT ''"),
];

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/pms.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // sqlite URLs need forward slashes and a leading slash before a drive letter
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Connecting to {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for (name, create_sql) in TABLES {
        ensure_table(&conn, name, create_sql).await?;
    }
    for (table, column, definition) in ADDED_COLUMNS {
        ensure_column(&conn, table, column, definition).await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

async fn ensure_table(conn: &DatabaseConnection, name: &str, create_sql: &str) -> anyhow::Result<()> {
    let exists = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?;",
            [name.into()],
        ))
        .await?;

    if exists.is_empty() {
        tracing::info!("Creating {} table", name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

async fn ensure_column(
    conn: &DatabaseConnection,
    table: &str,
    column: &str,
    definition: &str,
) -> anyhow::Result<()> {
    let pragma = format!("PRAGMA table_info('{}');", table);
    let cols = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, pragma))
        .await?;
    let present = cols
        .iter()
        .any(|row| row.try_get::<String>("", "name").unwrap_or_default() == column);
    if !present {
        tracing::info!("Adding column {}.{}", table, column);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("ALTER TABLE {} ADD COLUMN {} {};", table, column, definition),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}
