// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use vg_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod review;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            log::debug!("Unique constraint violated: {}", info.message());
            repo::Error::AlreadyExists
        }
        err => {
            log::warn!("Database query failed: {err}");
            repo::Error::Other(err.into())
        }
    }
}

/// Access to the SQLite connection behind a repository.
trait WithConnection {
    fn read<T>(&self, f: impl FnOnce(&mut SqliteConnection) -> Result<T>) -> Result<T>;

    fn write<T>(&self, f: impl FnOnce(&mut SqliteConnection) -> Result<T>) -> Result<T> {
        self.read(f)
    }
}

impl WithConnection for DbReadOnly<'_> {
    fn read<T>(&self, f: impl FnOnce(&mut SqliteConnection) -> Result<T>) -> Result<T> {
        f(&mut self.conn.borrow_mut())
    }

    fn write<T>(&self, _: impl FnOnce(&mut SqliteConnection) -> Result<T>) -> Result<T> {
        Err(repo::Error::Other(anyhow!(
            "Modification with read-only database access"
        )))
    }
}

impl WithConnection for DbReadWrite<'_> {
    fn read<T>(&self, f: impl FnOnce(&mut SqliteConnection) -> Result<T>) -> Result<T> {
        f(&mut self.conn.borrow_mut())
    }
}

impl WithConnection for DbConnection<'_> {
    fn read<T>(&self, f: impl FnOnce(&mut SqliteConnection) -> Result<T>) -> Result<T> {
        f(&mut self.conn.borrow_mut())
    }
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}
