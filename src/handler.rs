
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::guild::Member;
use serenity::model::user::User;
use serenity::model::gateway::Ready;
use serenity::all::GuildId;
use serenity::gateway::ActivityData;
use serenity::prelude::*;
use chrono::Utc;

use std::sync::Arc;

use crate::commands::command_manager::CommandManager;
use crate::databases::PrebanStore;
use crate::utility::resolver::user_name;
use crate::utility::*;


pub struct Handler {
    settings: Settings,
    command_manager: CommandManager,
    reactor: PrebanReactor,
}

impl Handler {

    pub fn new(settings: Settings, store: Arc<dyn PrebanStore>) -> Handler {
        Handler {
            settings,
            command_manager: CommandManager::new(store.clone()),
            reactor: PrebanReactor::new(store),
        }
    }

}

#[async_trait]
impl EventHandler for Handler {

    async fn ready(&self, ctx: Context, ready: Ready) {
        Logger::info_long("Ready", &format!("{} ({})", ready.user.name, ready.user.id));
        ctx.set_activity(Some(ActivityData::playing(format!("{}help", self.settings.prefix))));
    }

    async fn message(&self, ctx: Context, msg: Message) {

        // never react to bots, including ourselves
        if msg.author.bot {
            return;
        }

        // parse message
        let author = PlatformUser {
            id: msg.author.id.to_string(),
            name: user_name(&msg.author),
        };
        let message = MessageManager::new(
            &msg.content,
            &self.settings.prefix,
            msg.guild_id.map(|id| id.to_string()),
            author,
            Utc::now());
        if !message.is_command() {
            return;
        }

        // execute command
        #[cfg(feature = "commands")]
        {
            let resolver = Resolver::new(ctx.clone());
            if let Some(reply) = self.command_manager.execute(&message, &resolver).await {
                let reply = reply.to_message().reference_message(&msg);
                if let Err(err) = msg.channel_id.send_message(&ctx.http, reply).await {
                    Logger::warn_long("Failed to send reply", &err.to_string());
                }
            }
        }
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let resolver = Resolver::new(ctx);
        let guild_id = new_member.guild_id.to_string();
        let user_id = new_member.user.id.to_string();

        match self.reactor.on_member_join(&resolver, &guild_id, &user_id).await {
            Ok(outcome) => Logger::debug_long("Member joined", &format!("{} in {}: {:?}", user_id, guild_id, outcome)),
            Err(err) => Logger::err_long("Failed to check preban on join", &format!("{:?}", err)),
        }
    }

    // Discord does not send the time of the ban, so the time of receipt stands in for it
    async fn guild_ban_addition(&self, _ctx: Context, guild_id: GuildId, banned_user: User) {
        let guild_id = guild_id.to_string();
        let user_id = banned_user.id.to_string();

        if let Err(err) = self.reactor.on_ban_create(&guild_id, &user_id, Utc::now()).await {
            Logger::err_long("Failed to record ban", &format!("{:?}", err));
        }
    }

}
