
use std::sync::Arc;

use crate::commands::*;
use crate::commands::command::{CommandError, CommandParams, CommandResult};
use crate::databases::PrebanStore;
use crate::utility::*;


pub struct CommandManager {
    commands: Vec<Box<dyn Command>>,
}

impl CommandManager {

    pub fn new(store: Arc<dyn PrebanStore>) -> CommandManager {
        let mut commands: Vec<Box<dyn Command>> = vec![
            Box::new(BanCommand::new(store.clone())),
            Box::new(UnbanCommand::new(store.clone())),
            Box::new(BansCommand::new(store)),
        ];
        let usages = commands.iter().map(|command| command.define_usage()).collect();
        commands.push(Box::new(HelpCommand::new(usages)));
        CommandManager { commands }
    }

    async fn check(&self, command: &dyn Command, message: &MessageManager, platform: &dyn Platform) -> Result<(), CommandError> {
        if !command.guild_only() {
            return Ok(());
        }
        let guild_id = message.get_guild().ok_or(CommandError::NoPrivateMessage)?;

        let required = command.required_permissions();
        if required.is_empty() {
            return Ok(());
        }

        let missing = required - platform.permissions(guild_id, &message.get_author().id).await;
        if !missing.is_empty() {
            return Err(CommandError::MissingPermissions(missing));
        }

        let missing = required - platform.permissions(guild_id, &platform.bot_id()).await;
        if !missing.is_empty() {
            return Err(CommandError::BotMissingPermissions(missing));
        }
        Ok(())
    }

    async fn run_command(&self, command: &dyn Command, message: &MessageManager, platform: &dyn Platform) -> CommandResult {
        self.check(command, message, platform).await?;
        command.run(CommandParams::new(message.clone(), platform)).await
    }

    /// Runs the command the message invokes and returns the reply for the invoker.
    ///
    /// Returns `None` for messages that do not invoke a known command.
    pub async fn execute(&self, message: &MessageManager, platform: &dyn Platform) -> Option<Reply> {
        let name = message.get_command()?;
        let command = self.commands.iter()
            .find(|command| command.is_triggered_by(message))?;

        match self.run_command(command.as_ref(), message, platform).await {
            Ok(reply) => Some(reply),
            Err(err) => {
                if let CommandError::Unexpected(cause) = &err {
                    Logger::err_long(&format!("Exception in command {}", name), &format!("{:?}", cause));
                }
                Some(err.to_reply(message.get_prefix(), name))
            }
        }
    }

}
