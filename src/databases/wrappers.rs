
use chrono::{DateTime, Utc};

use crate::databases::database::Database;
use crate::utility::*;


#[derive(Clone, Debug, PartialEq)]
pub struct Preban {
    pub server_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub created_by_id: String,
    pub reason: Option<String>,
    pub active: bool,
    pub fulfilled_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrebanStatus {
    Pending,
    Fulfilled,
    Inactive,
}

impl Preban {

    /// Entry for a user who is not a member yet, enforced once they join.
    pub fn pending(server_id: &str,
                   user_id: &str,
                   created_by_id: &str,
                   reason: Option<String>,
                   created_at: DateTime<Utc>) -> Preban {
        Preban {
            server_id: server_id.to_string(),
            user_id: user_id.to_string(),
            created_at,
            created_by_id: created_by_id.to_string(),
            reason,
            active: true,
            fulfilled_at: None,
        }
    }

    /// Entry for a user who was banned when the preban was created.
    pub fn fulfilled(server_id: &str,
                     user_id: &str,
                     created_by_id: &str,
                     reason: Option<String>,
                     created_at: DateTime<Utc>) -> Preban {
        Preban {
            active: false,
            fulfilled_at: Some(created_at),
            ..Preban::pending(server_id, user_id, created_by_id, reason, created_at)
        }
    }

    pub fn status(&self) -> PrebanStatus {
        match (self.active, self.fulfilled_at) {
            (true, _)        => PrebanStatus::Pending,
            (false, Some(_)) => PrebanStatus::Fulfilled,
            (false, None)    => PrebanStatus::Inactive,
        }
    }

    /// Whether a join should still be answered with a ban.
    pub fn awaits_enforcement(&self) -> bool {
        self.active && self.fulfilled_at.is_none()
    }

}

pub trait PrebanStore: Send + Sync {

    fn find<'a>(&'a self, server_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, anyhow::Result<Option<Preban>>>;

    fn upsert<'a>(&'a self, preban: &'a Preban) -> BoxedFuture<'a, anyhow::Result<()>>;

    fn delete<'a>(&'a self, server_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, anyhow::Result<bool>>;

    fn list_by_server<'a>(&'a self, server_id: &'a str) -> BoxedFuture<'a, anyhow::Result<Vec<Preban>>>;

    /// Marks the entry as fulfilled at `at`. Returns `false` if there is no entry.
    fn fulfill<'a>(&'a self, server_id: &'a str, user_id: &'a str, at: DateTime<Utc>) -> BoxedFuture<'a, anyhow::Result<bool>>;

}

#[derive(Clone)]
pub struct PrebansDB {
    database: Database,
}

impl PrebansDB {

    pub fn new(database: Database) -> Self {
        PrebansDB { database }
    }

}

impl PrebanStore for PrebansDB {

    fn find<'a>(&'a self, server_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, anyhow::Result<Option<Preban>>> {
        Box::pin(async move {
            self.database.find(server_id, user_id).await
        })
    }

    fn upsert<'a>(&'a self, preban: &'a Preban) -> BoxedFuture<'a, anyhow::Result<()>> {
        Box::pin(async move {
            self.database.upsert(preban).await
        })
    }

    fn delete<'a>(&'a self, server_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, anyhow::Result<bool>> {
        Box::pin(async move {
            self.database.delete(server_id, user_id).await
        })
    }

    fn list_by_server<'a>(&'a self, server_id: &'a str) -> BoxedFuture<'a, anyhow::Result<Vec<Preban>>> {
        Box::pin(async move {
            self.database.list_by_server(server_id).await
        })
    }

    fn fulfill<'a>(&'a self, server_id: &'a str, user_id: &'a str, at: DateTime<Utc>) -> BoxedFuture<'a, anyhow::Result<bool>> {
        Box::pin(async move {
            self.database.fulfill(server_id, user_id, at).await
        })
    }

}
