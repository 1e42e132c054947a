#[macro_use]
extern crate diesel;

use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
};

use anyhow::{anyhow, Result as Fallible};
use diesel::{
    connection::SimpleConnection as _,
    r2d2::{self, CustomizeConnection},
    sqlite::SqliteConnection,
    Connection as _,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use vg_core::usecases as uc;

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Stored in the database file, only needs to be set once.
const DATABASE_PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA encoding = 'UTF-8';
"#;

/// Not persisted, applied to every new connection of the pool.
const CONNECTION_PRAGMAS: &str = r#"
PRAGMA synchronous = NORMAL;
PRAGMA foreign_keys = ON;
PRAGMA busy_timeout = 5000;
"#;

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

#[derive(Debug)]
struct ConnectionSetup;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

/// A pooled connection together with the lock on the pool
/// that grants either shared or exclusive access.
pub struct Db<L> {
    // Returned to the pool before the lock is released
    conn: RefCell<PooledConnection>,
    _lock: L,
}

pub type DbReadOnly<'a> = Db<RwLockReadGuard<'a, ConnectionPool>>;
pub type DbReadWrite<'a> = Db<RwLockWriteGuard<'a, ConnectionPool>>;

impl<L> Db<L>
where
    L: std::ops::Deref<Target = ConnectionPool>,
{
    fn try_new(lock: L, access: &str) -> Fallible<Self> {
        let conn = lock.get().inspect_err(|err| {
            log::error!("No pooled database connection available for {access} access: {err}");
        })?;
        Ok(Self {
            conn: RefCell::new(conn),
            _lock: lock,
        })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConnection> {
        self.conn.borrow_mut()
    }
}

impl DbReadWrite<'_> {
    /// Run a use case within a single transaction.
    ///
    /// Everything is rolled back if the use case fails.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let mut usecase_error = None;
        let result = self.sqlite_conn().transaction(|conn| {
            f(&DbConnection::new(conn)).map_err(|err| {
                usecase_error = Some(err.into());
                diesel::result::Error::RollbackTransaction
            })
        });
        result.map_err(|err| match usecase_error {
            Some(usecase_error) => usecase_error,
            None => uc::Error::Repo(repo_impl::from_diesel_err(err)),
        })
    }
}

/// The connection of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

/// Pool of SQLite connections.
///
/// Readers share the pool while a writer locks it exclusively.
/// SQLite allows only a single writer and would otherwise fail
/// with SQLITE_BUSY under concurrent writes.
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // Fails early on an unusable database URL
        let mut conn = SqliteConnection::establish(url)?;
        conn.batch_execute(DATABASE_PRAGMAS)?;
        drop(conn);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionSetup))
            .build(ConnectionManager::new(url))?;
        log::debug!("Opened {pool_size} database connection(s) to '{url}'");
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        Db::try_new(self.pool.read(), "read-only")
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        Db::try_new(self.pool.write(), "read/write")
    }
}

pub fn run_embedded_database_migrations(db: DbReadWrite<'_>) -> Fallible<()> {
    let mut conn = db.sqlite_conn();
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?;
    if applied.is_empty() {
        log::info!("Database schema is up to date");
    } else {
        for version in applied {
            log::info!("Applied database migration {version}");
        }
    }
    Ok(())
}
