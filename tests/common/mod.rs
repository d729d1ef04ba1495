#![allow(dead_code)]

use people_registry::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::TempDir;

/// SQLite database living in a temporary directory for the duration of a test.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    /// Creates a migrated database file named `name`.
    pub fn new(name: &str) -> Self {
        Self::build(name, true)
    }

    /// Creates a database file without any tables.
    pub fn without_migrations(name: &str) -> Self {
        Self::build(name, false)
    }

    fn build(name: &str, migrate: bool) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create connection pool");

        if migrate {
            let mut conn = pool.get().expect("get connection");
            run_migrations(&mut conn).expect("run migrations");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
