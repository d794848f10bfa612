
use serenity::model::prelude::*;
use serenity::http::UserPagination;
use serenity::prelude::*;
use anyhow::anyhow;

use crate::utility::*;


// Discord rejects audit log reasons longer than this
const AUDIT_REASON_LIMIT: usize = 512;

fn to_id<T: From<u64>>(id: &str) -> Option<T> {
    match id.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(T::from(id)),
    }
}

/// Global display name, falling back to the username.
pub fn user_name(user: &User) -> String {
    user.global_name.clone().unwrap_or_else(|| user.name.clone())
}

/// Serenity-backed [`Platform`], created per event from the gateway context.
#[derive(Clone)]
pub struct Resolver {
    ctx: Context,
}

impl Resolver {

    pub fn new(ctx: Context) -> Resolver {
        Resolver { ctx }
    }

    async fn owner_id(&self, guild_id: GuildId) -> Option<UserId> {
        let cached = self.ctx.cache.guild(guild_id).map(|guild| guild.owner_id);
        match cached {
            Some(owner_id) => Some(owner_id),
            None => guild_id.to_partial_guild(&self.ctx).await
                .ok()
                .map(|guild| guild.owner_id),
        }
    }

}

impl Platform for Resolver {

    fn bot_id(&self) -> String {
        self.ctx.cache.current_user().id.to_string()
    }

    fn resolve_user<'a>(&'a self, user_id: &'a str) -> BoxedFuture<'a, Option<PlatformUser>> {
        Box::pin(async move {
            let user_id: UserId = to_id(user_id)?;
            let user = self.ctx.http.get_user(user_id).await.ok()?;
            Some(PlatformUser {
                id: user.id.to_string(),
                name: user_name(&user),
            })
        })
    }

    fn resolve_member<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, Option<PlatformMember>> {
        Box::pin(async move {
            let guild_id: GuildId = to_id(guild_id)?;
            let user_id: UserId = to_id(user_id)?;
            let member = guild_id.member(&self.ctx, user_id).await.ok()?;
            let owner_id = self.owner_id(guild_id).await;
            Some(PlatformMember {
                id: member.user.id.to_string(),
                name: member.display_name().to_string(),
                is_owner: owner_id == Some(member.user.id),
            })
        })
    }

    fn permissions<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, Permissions> {
        Box::pin(async move {
            let (Some(guild_id), Some(user_id)) = (to_id::<GuildId>(guild_id), to_id::<UserId>(user_id)) else {
                return Permissions::empty();
            };
            let member = match guild_id.member(&self.ctx, user_id).await {
                Ok(member) => member,
                Err(_) => return Permissions::empty(),
            };
            // the cache reference must not be held across an await
            match self.ctx.cache.guild(guild_id) {
                #[allow(deprecated)]
                Some(guild) => guild.member_permissions(&member),
                None => Permissions::empty(),
            }
        })
    }

    fn fetch_ban<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, Option<PlatformBan>> {
        Box::pin(async move {
            let guild_id: GuildId = to_id(guild_id)?;
            let user_id: UserId = to_id(user_id)?;

            // page the ban list so that the target is the first entry
            let after = user_id.get().checked_sub(1).filter(|id| *id > 0)?;
            let bans = guild_id
                .bans(&self.ctx.http, Some(UserPagination::After(UserId::new(after))), Some(1))
                .await
                .ok()?;
            bans.into_iter()
                .find(|ban| ban.user.id == user_id)
                .map(|ban| PlatformBan {
                    user_id: ban.user.id.to_string(),
                    reason: ban.reason,
                })
        })
    }

    fn ban<'a>(&'a self, guild_id: &'a str, user_id: &'a str, reason: &'a str) -> BoxedFuture<'a, anyhow::Result<()>> {
        Box::pin(async move {
            let guild_id: GuildId = to_id(guild_id)
                .ok_or_else(|| anyhow!("invalid guild id {}", guild_id))?;
            let user_id: UserId = to_id(user_id)
                .ok_or_else(|| anyhow!("invalid user id {}", user_id))?;
            let reason = truncate_chars(reason, AUDIT_REASON_LIMIT);
            guild_id.ban_with_reason(&self.ctx.http, user_id, 0, &reason).await?;
            Ok(())
        })
    }

    fn unban<'a>(&'a self, guild_id: &'a str, user_id: &'a str) -> BoxedFuture<'a, anyhow::Result<()>> {
        Box::pin(async move {
            let guild_id: GuildId = to_id(guild_id)
                .ok_or_else(|| anyhow!("invalid guild id {}", guild_id))?;
            let user_id: UserId = to_id(user_id)
                .ok_or_else(|| anyhow!("invalid user id {}", user_id))?;
            guild_id.unban(&self.ctx.http, user_id).await?;
            Ok(())
        })
    }

}
