
use serenity::model::permissions::Permissions;
use nonempty::NonEmpty;
use thiserror::Error;

use crate::utility::*;


#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Text(String),
    Embed {
        title: String,
        description: String,
        footer: Option<String>,
    },
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Reply {
        Reply::Text(content.into())
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command can only be used in a server")]
    NoPrivateMessage,
    #[error("invoker is missing permissions {0:?}")]
    MissingPermissions(Permissions),
    #[error("bot is missing permissions {0:?}")]
    BotMissingPermissions(Permissions),
    #[error("missing required argument {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

fn permission_names(permissions: &Permissions) -> String {
    permissions.get_permission_names().join("**, **")
}

impl CommandError {

    /// The reply shown to the invoker for this error.
    pub fn to_reply(&self, prefix: &str, command: &str) -> Reply {
        match self {
            CommandError::NoPrivateMessage =>
                Reply::text("This command can only be used in a server."),
            CommandError::MissingPermissions(missing) =>
                Reply::text(format!("Only people with **{}** permissions can run `{}{}`",
                    permission_names(missing), prefix, command)),
            CommandError::BotMissingPermissions(missing) =>
                Reply::text(format!("I need **{}** permissions in order to run `{}{}`",
                    permission_names(missing), prefix, command)),
            CommandError::MissingArgument(name) =>
                Reply::text(format!("You are missing a required argument: `{}`", name)),
            CommandError::Unexpected(_) =>
                Reply::text("An unexpected error occurred."),
        }
    }

}

pub type CommandResult = Result<Reply, CommandError>;

pub struct CommandParams<'a> {
    pub message: MessageManager,
    pub platform: &'a dyn Platform,
}

impl<'a> CommandParams<'a> {

    pub fn new(message: MessageManager, platform: &'a dyn Platform) -> Self {
        Self { message, platform }
    }

    /// The server the command runs in; only valid for guild-only commands.
    pub fn guild(&self) -> Result<&str, CommandError> {
        self.message.get_guild().ok_or(CommandError::NoPrivateMessage)
    }

    pub fn required_argument(&self, index: usize, name: &'static str) -> Result<&str, CommandError> {
        self.message.argument(index).ok_or(CommandError::MissingArgument(name))
    }

}

pub trait Command: Send + Sync {

    fn define_usage(&self) -> UsageBuilder;

    fn run<'a>(&'a self, params: CommandParams<'a>) -> BoxedFuture<'a, CommandResult>;

    /// Permissions both the invoker and the bot need in the server.
    fn required_permissions(&self) -> Permissions {
        Permissions::empty()
    }

    fn guild_only(&self) -> bool {
        true
    }

    fn get_triggers(&self) -> NonEmpty<String> {
        self.define_usage().triggers
    }

    fn is_triggered_by(&self, message: &MessageManager) -> bool {
        match message.get_command() {
            Some(command) => self.get_triggers().iter().any(|trigger| trigger == command),
            None => false,
        }
    }

}
