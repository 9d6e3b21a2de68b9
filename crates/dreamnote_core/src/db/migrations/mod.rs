//! Forward-only schema steps for the journal database.
//!
//! # Invariants
//! - Steps are sorted by `version`, starting at 1 with no gaps.
//! - All pending steps run in one transaction; `PRAGMA user_version`
//!   tracks the last step applied.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "journal",
        sql: include_str!("0001_journal.sql"),
    },
    Migration {
        version: 2,
        name: "append_only",
        sql: include_str!("0002_append_only.sql"),
    },
];

/// Summary of one `apply_migrations` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub from_version: u32,
    pub to_version: u32,
    /// Number of steps executed; zero when the schema was already current.
    pub applied: usize,
}

/// Schema version this binary upgrades databases to.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings `conn` up to `latest_version()`.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the database is newer than this binary.
/// - `MigrationFailed` naming the step that failed; nothing is committed.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<MigrationReport> {
    let from_version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let latest = latest_version();
    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let pending = pending_after(from_version);
    if pending.is_empty() {
        return Ok(MigrationReport {
            from_version,
            to_version: from_version,
            applied: 0,
        });
    }

    let tx = conn.transaction()?;
    for step in pending {
        tx.execute_batch(step.sql)
            .and_then(|()| tx.pragma_update(None, "user_version", step.version))
            .map_err(|source| DbError::MigrationFailed {
                version: step.version,
                name: step.name,
                source,
            })?;
        debug!(
            "event=db_migrate_step module=db version={} name={}",
            step.version, step.name
        );
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={} applied={}",
        from_version,
        latest,
        pending.len()
    );

    Ok(MigrationReport {
        from_version,
        to_version: latest,
        applied: pending.len(),
    })
}

fn pending_after(version: u32) -> &'static [Migration] {
    let start = MIGRATIONS.partition_point(|migration| migration.version <= version);
    &MIGRATIONS[start..]
}

#[cfg(test)]
mod tests {
    use super::{pending_after, MIGRATIONS};

    #[test]
    fn versions_are_contiguous_from_one() {
        for (index, migration) in MIGRATIONS.iter().enumerate() {
            assert_eq!(migration.version as usize, index + 1, "{}", migration.name);
        }
    }

    #[test]
    fn pending_after_skips_applied_steps() {
        assert_eq!(pending_after(0).len(), MIGRATIONS.len());
        let names: Vec<&str> = pending_after(1).iter().map(|step| step.name).collect();
        assert_eq!(names, vec!["append_only"]);
        assert!(pending_after(2).is_empty());
    }
}
