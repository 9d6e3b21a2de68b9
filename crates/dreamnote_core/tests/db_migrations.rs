use dreamnote_core::db::migrations::{apply_migrations, latest_version};
use dreamnote_core::db::{open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "journal_entries");
    assert_table_exists(&conn, "journal_symbols");
}

#[test]
fn applying_migrations_twice_is_idempotent() {
    let mut conn = open_db_in_memory().unwrap();
    let report = apply_migrations(&mut conn).unwrap();
    assert_eq!(report.applied, 0);
    assert_eq!(report.from_version, latest_version());
    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn upgrade_from_first_version_runs_only_remaining_steps() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(include_str!("../src/db/migrations/0001_journal.sql"))
        .unwrap();
    conn.execute_batch("PRAGMA user_version = 1;").unwrap();

    let report = apply_migrations(&mut conn).unwrap();
    assert_eq!(report.from_version, 1);
    assert_eq!(report.to_version, latest_version());
    assert_eq!(report.applied, latest_version() as usize - 1);

    let triggers: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'trigger';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(triggers, 4);
}

#[test]
fn failed_step_names_the_migration_and_rolls_back() {
    let mut conn = Connection::open_in_memory().unwrap();
    // A pre-existing table collides with the first step.
    conn.execute_batch("CREATE TABLE journal_entries (id INTEGER);")
        .unwrap();

    match apply_migrations(&mut conn).unwrap_err() {
        DbError::MigrationFailed { version, name, .. } => {
            assert_eq!(version, 1);
            assert_eq!(name, "journal");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(schema_version(&conn), 0);
}

#[test]
fn newer_schema_version_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();

    match apply_migrations(&mut conn).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn emotion_column_rejects_unknown_labels() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO journal_entries (entry_id, recorded_at, narrative, emotion, context, explanation)
         VALUES ('x', 0, 'n', 'Furious', '', 'e');",
        [],
    );
    assert!(result.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
