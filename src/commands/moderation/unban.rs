
use serenity::model::permissions::Permissions;
use nonempty::nonempty;

use std::sync::Arc;

use crate::commands::command::*;
use crate::databases::*;
use crate::utility::*;


pub struct UnbanCommand {
    store: Arc<dyn PrebanStore>,
}

impl UnbanCommand {
    pub fn new(store: Arc<dyn PrebanStore>) -> Self {
        UnbanCommand { store }
    }
}

impl Command for UnbanCommand {

    fn required_permissions(&self) -> Permissions {
        Permissions::BAN_MEMBERS
    }

    fn define_usage(&self) -> UsageBuilder {
        UsageBuilder::new(nonempty!["unban".to_string()])
            .add_required("user_id")
            .description("Remove a preban. This also lifts the user's ban from the server if they are currently banned.")
            .example("996364193588592740")
    }

    fn run<'a>(&'a self, params: CommandParams<'a>) -> BoxedFuture<'a, CommandResult> {
        Box::pin(
            async move {

                let guild_id = params.guild()?;
                let platform = params.platform;
                let raw_target = params.required_argument(0, "user_id")?;

                let target = match parse_user_id(raw_target) {
                    Some(user_id) => platform.resolve_user(&user_id).await,
                    None => None,
                };
                let target = match target {
                    Some(target) => target,
                    None => return Ok(Reply::text("Could not verify that user ID.")),
                };

                // lifting the platform ban is best effort
                let platform_ban = platform.fetch_ban(guild_id, &target.id).await;
                if let Some(ban) = &platform_ban {
                    Logger::debug_long(
                        &format!("Lifting ban of {} in {}", ban.user_id, guild_id),
                        ban.reason.as_deref().unwrap_or("no reason"));
                    if let Err(err) = platform.unban(guild_id, &target.id).await {
                        Logger::warn_long(
                            &format!("Failed to unban {} in {}", target.id, guild_id),
                            &err.to_string());
                    }
                }

                let entry = self.store.find(guild_id, &target.id).await?;
                if entry.is_none() {
                    return Ok(Reply::text(match platform_ban {
                        Some(_) => "This user was not prebanned, but they have been unbanned.",
                        None    => "This user was not banned or prebanned.",
                    }));
                }

                self.store.delete(guild_id, &target.id).await?;
                Ok(Reply::text("Removed the preban for this user."))
            }
        )
    }

}
