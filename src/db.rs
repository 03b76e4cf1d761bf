use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use tokio::fs;

const MAX_CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_DELAY: Duration = Duration::from_millis(3000);

/// Open the SeaORM connection, retrying with a fixed backoff. The listener
/// must never bind before this returns.
pub async fn connect_with_retry(database_url: &str) -> Result<DatabaseConnection> {
    establish(|| Database::connect(database_url)).await
}

async fn establish<T, E, F, Fut>(mut connect: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    loop {
        match connect().await {
            Ok(conn) => return Ok(conn),
            Err(err) => {
                attempt += 1;
                if attempt >= MAX_CONNECT_ATTEMPTS {
                    anyhow::bail!(
                        "not able to connect to the database after {MAX_CONNECT_ATTEMPTS} attempts: {err}"
                    );
                }
                tracing::error!(
                    attempt,
                    error = %err,
                    "error connecting to the database, trying again"
                );
                tokio::time::sleep(CONNECT_RETRY_DELAY).await;
            }
        }
    }
}

/// Minimal migration runner that executes SQL files in `migrations/` in filename order.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let mut entries = fs::read_dir("migrations").await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in files {
        let sql = fs::read_to_string(&file).await?;
        // Postgres prepared statements cannot contain multiple commands,
        // so split the migration file and run each statement individually.
        for stmt in sql.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            let statement = format!("{stmt};");
            conn.execute(Statement::from_string(backend, statement))
                .await?;
        }
    }

    Ok(())
}
