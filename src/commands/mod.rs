
pub mod command_manager;

pub mod command;
pub use command::{Command, Reply};

pub mod help;
pub use help::HelpCommand;

// ---- src/commands/moderation/ ---- //

pub mod moderation;

pub use moderation::ban::BanCommand;
pub use moderation::unban::UnbanCommand;
pub use moderation::bans::BansCommand;
