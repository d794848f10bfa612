
use serenity::model::permissions::Permissions;
use anyhow::anyhow;

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::utility::*;


pub const BOT_ID: &str = "1000";

/// In-memory [`Platform`] that records every ban and unban.
#[derive(Default)]
pub struct MockPlatform {
    users: HashSet<String>,
    members: HashMap<(String, String), PlatformMember>,
    permissions: HashMap<(String, String), Permissions>,
    platform_bans: Mutex<HashSet<(String, String)>>,
    fail_bans: bool,
    fail_unbans: bool,
    banned: Mutex<Vec<(String, String, String)>>,
    unbanned: Mutex<Vec<(String, String)>>,
}

impl MockPlatform {

    pub fn new() -> Self {
        MockPlatform::default()
    }

    pub fn with_user(mut self, user_id: &str) -> Self {
        self.users.insert(user_id.to_string());
        self
    }

    pub fn with_member(mut self, guild_id: &str, user_id: &str, name: &str) -> Self {
        self.users.insert(user_id.to_string());
        self.members.insert((guild_id.to_string(), user_id.to_string()), PlatformMember {
            id: user_id.to_string(),
            name: name.to_string(),
            is_owner: false,
        });
        self
    }

    pub fn with_owner(mut self, guild_id: &str, user_id: &str) -> Self {
        self = self.with_member(guild_id, user_id, "Owner");
        if let Some(member) = self.members.get_mut(&(guild_id.to_string(), user_id.to_string())) {
            member.is_owner = true;
        }
        self
    }

    pub fn with_permissions(mut self, guild_id: &str, user_id: &str, permissions: Permissions) -> Self {
        self.permissions.insert((guild_id.to_string(), user_id.to_string()), permissions);
        self
    }

    pub fn with_platform_ban(self, guild_id: &str, user_id: &str) -> Self {
        self.platform_bans.lock().unwrap()
            .insert((guild_id.to_string(), user_id.to_string()));
        self
    }

    pub fn failing_bans(mut self) -> Self {
        self.fail_bans = true;
        self
    }

    pub fn failing_unbans(mut self) -> Self {
        self.fail_unbans = true;
        self
    }

    /// Recorded bans as `(guild, user, reason)`.
    pub fn bans(&self) -> Vec<(String, String, String)> {
        self.banned.lock().unwrap().clone()
    }

    pub fn unbans(&self) -> Vec<(String, String)> {
        self.unbanned.lock().unwrap().clone()
    }

    pub fn is_banned(&self, guild_id: &str, user_id: &str) -> bool {
        self.platform_bans.lock().unwrap()
            .contains(&(guild_id.to_string(), user_id.to_string()))
    }

}

impl Platform for MockPlatform {

    fn bot_id(&self) -> String {
        BOT_ID.to_string()
    }

    fn resolve_user<'a>(&'a self, user_id: &'a str) -> BoxedFuture<'a, Option<PlatformUser>> {
        Box::pin(async move {
            self.users.get(user_id).map(|id| PlatformUser {
                id: id.clone(),
                name: format!("user-{}", id),
            })
        })
    }

    fn resolve_member<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, Option<PlatformMember>> {
        Box::pin(async move {
            self.members.get(&(guild_id.to_string(), user_id.to_string())).cloned()
        })
    }

    fn permissions<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, Permissions> {
        Box::pin(async move {
            self.permissions.get(&(guild_id.to_string(), user_id.to_string()))
                .copied()
                .unwrap_or_else(Permissions::empty)
        })
    }

    fn fetch_ban<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, Option<PlatformBan>> {
        Box::pin(async move {
            match self.is_banned(guild_id, user_id) {
                true => Some(PlatformBan { user_id: user_id.to_string(), reason: None }),
                false => None,
            }
        })
    }

    fn ban<'a>(&'a self, guild_id: &'a str, user_id: &'a str, reason: &'a str) -> BoxedFuture<'a, anyhow::Result<()>> {
        Box::pin(async move {
            self.banned.lock().unwrap()
                .push((guild_id.to_string(), user_id.to_string(), reason.to_string()));
            if self.fail_bans {
                return Err(anyhow!("Missing Permissions"));
            }
            self.platform_bans.lock().unwrap()
                .insert((guild_id.to_string(), user_id.to_string()));
            Ok(())
        })
    }

    fn unban<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, anyhow::Result<()>> {
        Box::pin(async move {
            self.unbanned.lock().unwrap()
                .push((guild_id.to_string(), user_id.to_string()));
            if self.fail_unbans {
                return Err(anyhow!("Unknown Ban"));
            }
            self.platform_bans.lock().unwrap()
                .remove(&(guild_id.to_string(), user_id.to_string()));
            Ok(())
        })
    }

}
