//! Storage for dog records.
//!
//! Every operation opens its own connection to the sqlite file, does its work
//! inside a transaction, commits, and closes the connection again. Nothing is
//! kept open between calls.

use futures_util::TryStreamExt;
use serde::Serialize;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions, Connection,
};
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::dog::Dog;
use crate::model::Result;

pub const CREATE_DOGS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS Dogs (
    ID INTEGER PRIMARY KEY,
    Name TEXT,
    Breed TEXT
);
";

pub const WORKFLOW_NAME: &str = "Teo";
pub const WORKFLOW_BREED: &str = "Valdayan dalmatan";
pub const WORKFLOW_RENAME: &str = "Charik";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    Ready,
    Failed,
}

#[derive(Serialize, Debug, Clone)]
pub struct WorkflowReport {
    pub inserted_id: i64,
    pub renamed: u64,
    pub dogs: Vec<Dog>,
}

pub async fn open(path: &Path) -> Result<SqliteConnection> {
    debug!(path = %path.display(), "opening sqlite connection");
    let conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await?;
    Ok(conn)
}

async fn release(conn: SqliteConnection) {
    if let Err(err) = conn.close().await {
        warn!(%err, "failed to close sqlite connection");
    }
}

async fn create_dogs_table(conn: &mut SqliteConnection) -> Result<()> {
    let mut tx = conn.begin().await?;
    sqlx::query(CREATE_DOGS_TABLE).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}

/// Creates the `Dogs` table if it is not there yet.
pub async fn ensure_schema(path: &Path) -> Result<()> {
    let mut conn = open(path).await?;
    let result = create_dogs_table(&mut conn).await;
    release(conn).await;
    result
}

/// Run-once setup for the database file. Storage errors are printed and
/// swallowed; the returned status only reports what happened.
pub async fn initialize(path: &Path) -> InitStatus {
    let mut conn = match open(path).await {
        Ok(conn) => conn,
        Err(err) => {
            error!(path = %path.display(), %err, "could not open database");
            println!("Error while working with SQLite: {}", err);
            return InitStatus::Failed;
        }
    };
    println!("Database started");

    let status = match create_dogs_table(&mut conn).await {
        Ok(()) => {
            info!(path = %path.display(), "dogs table ready");
            InitStatus::Ready
        }
        Err(err) => {
            error!(path = %path.display(), %err, "could not create dogs table");
            println!("Error while working with SQLite: {}", err);
            InitStatus::Failed
        }
    };

    release(conn).await;
    println!("Database connection closed");
    status
}

async fn insert_on(conn: &mut SqliteConnection, name: &str, breed: &str) -> Result<i64> {
    let mut tx = conn.begin().await?;
    let id = sqlx::query("INSERT INTO Dogs (Name, Breed) VALUES (?, ?)")
        .bind(name)
        .bind(breed)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
    tx.commit().await?;
    Ok(id)
}

/// Inserts a dog and returns the id sqlite assigned to it.
pub async fn insert_dog(path: &Path, name: &str, breed: &str) -> Result<i64> {
    let mut conn = open(path).await?;
    let result = insert_on(&mut conn, name, breed).await;
    release(conn).await;

    if let Ok(id) = result {
        info!(id, name, breed, "inserted dog");
    }
    result
}

async fn rename_on(conn: &mut SqliteConnection, breed: &str, new_name: &str) -> Result<u64> {
    let mut tx = conn.begin().await?;
    let renamed = sqlx::query("UPDATE Dogs SET Name = ? WHERE Breed = ?")
        .bind(new_name)
        .bind(breed)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tx.commit().await?;
    Ok(renamed)
}

/// Sets the name of every dog of `breed`. Returns how many rows changed,
/// which may be zero.
pub async fn rename_breed(path: &Path, breed: &str, new_name: &str) -> Result<u64> {
    let mut conn = open(path).await?;
    let result = rename_on(&mut conn, breed, new_name).await;
    release(conn).await;

    if let Ok(renamed) = result {
        info!(breed, new_name, renamed, "renamed dogs");
    }
    result
}

async fn select_on(conn: &mut SqliteConnection) -> Result<Vec<Dog>> {
    let mut dogs = Vec::new();
    let mut stream = sqlx::query_as::<_, Dog>(
        "SELECT ID AS id, Name AS name, Breed AS breed FROM Dogs ORDER BY ID",
    )
    .fetch(&mut *conn);

    while let Some(dog) = stream.try_next().await? {
        println!("{}", dog);
        dogs.push(dog);
    }

    Ok(dogs)
}

/// Reads every dog, printing each row as it arrives.
pub async fn select_dogs(path: &Path) -> Result<Vec<Dog>> {
    let mut conn = open(path).await?;
    let result = select_on(&mut conn).await;
    release(conn).await;
    result
}

/// Insert, rename, then list. Each step gets its own connection and commit.
///
/// The rename matches on breed, so rows left over from earlier runs against
/// the same file are renamed too.
pub async fn add_record_to_database(path: &Path) -> Result<WorkflowReport> {
    let inserted_id = insert_dog(path, WORKFLOW_NAME, WORKFLOW_BREED).await?;
    let renamed = rename_breed(path, WORKFLOW_BREED, WORKFLOW_RENAME).await?;
    let dogs = select_dogs(path).await?;

    Ok(WorkflowReport {
        inserted_id,
        renamed,
        dogs,
    })
}
