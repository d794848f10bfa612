
use serenity::model::permissions::Permissions;

use crate::utility::mixed::BoxedFuture;


#[derive(Clone, Debug, PartialEq)]
pub struct PlatformUser {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformMember {
    pub id: String,
    pub name: String,
    pub is_owner: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformBan {
    pub user_id: String,
    pub reason: Option<String>,
}

/// Everything the preban logic needs from the chat platform.
///
/// Lookups report failure as `None`; the callers never distinguish
/// "does not exist" from "could not be fetched".
pub trait Platform: Send + Sync {

    fn bot_id(&self) -> String;

    fn resolve_user<'a>(&'a self, user_id: &'a str) -> BoxedFuture<'a, Option<PlatformUser>>;

    fn resolve_member<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, Option<PlatformMember>>;

    fn permissions<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, Permissions>;

    fn fetch_ban<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, Option<PlatformBan>>;

    fn ban<'a>(&'a self, guild_id: &'a str, user_id: &'a str, reason: &'a str) -> BoxedFuture<'a, anyhow::Result<()>>;

    fn unban<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, anyhow::Result<()>>;

}
