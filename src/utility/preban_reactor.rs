
use chrono::{DateTime, Utc};

use std::sync::Arc;

use crate::databases::*;
use crate::utility::*;


/// Composes the audit log reason for a preban ban.
///
/// `creator_name` is `None` when the creator could not be resolved.
pub fn ban_reason(creator_name: Option<&str>, creator_id: &str, reason: Option<&str>) -> String {
    let mut ban_reason = match creator_name {
        Some(name) if !name.is_empty() => format!("Preban by {} ({})", name, creator_id),
        _ => format!("Preban by user with ID {}", creator_id),
    };
    if let Some(reason) = reason.filter(|reason| !reason.is_empty()) {
        ban_reason.push_str(&format!(": {}", reason));
    }
    ban_reason
}

#[derive(Debug, PartialEq)]
pub enum JoinOutcome {
    NotPrebanned,
    AlreadyFulfilled,
    Banned,
    BanFailed,
}

/// Reacts to gateway events that concern prebans.
pub struct PrebanReactor {
    store: Arc<dyn PrebanStore>,
}

impl PrebanReactor {

    pub fn new(store: Arc<dyn PrebanStore>) -> Self {
        PrebanReactor { store }
    }

    pub async fn on_member_join(&self,
                                platform: &dyn Platform,
                                guild_id: &str,
                                user_id: &str) -> anyhow::Result<JoinOutcome> {

        let entry = match self.store.find(guild_id, user_id).await? {
            Some(entry) => entry,
            None => return Ok(JoinOutcome::NotPrebanned),
        };

        // fulfilled entries are never enforced again
        if !entry.awaits_enforcement() {
            return Ok(JoinOutcome::AlreadyFulfilled);
        }

        let creator = platform.resolve_member(guild_id, &entry.created_by_id).await;
        let reason = ban_reason(
            creator.as_ref().map(|creator| creator.name.as_str()),
            &entry.created_by_id,
            entry.reason.as_deref());

        match platform.ban(guild_id, user_id, &reason).await {
            Ok(_) => {
                Logger::info_long("Enforced preban", &format!("{} in {}", user_id, guild_id));
                Ok(JoinOutcome::Banned)
            },
            Err(err) => {
                Logger::err_long(
                    &format!("Failed to enforce preban for {} in {}", user_id, guild_id),
                    &err.to_string());
                Ok(JoinOutcome::BanFailed)
            }
        }
    }

    /// Records a ban, wherever it came from, as the fulfillment of a matching preban.
    pub async fn on_ban_create(&self,
                               guild_id: &str,
                               user_id: &str,
                               banned_at: DateTime<Utc>) -> anyhow::Result<bool> {
        let updated = self.store.fulfill(guild_id, user_id, banned_at).await?;
        if updated {
            Logger::debug_long("Marked preban as fulfilled", &format!("{} in {}", user_id, guild_id));
        }
        Ok(updated)
    }

}
