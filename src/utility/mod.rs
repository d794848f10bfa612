
pub mod mixed;
pub mod traits;
pub mod logger;
pub mod settings;
pub mod platform;
pub mod resolver;
pub mod message_manager;
pub mod usage_builder;
pub mod preban_reactor;

#[cfg(test)]
pub mod testing;

pub use mixed::*;
pub use traits::ToMessage;
pub use logger::Logger;
pub use settings::Settings;
pub use platform::{Platform, PlatformUser, PlatformMember, PlatformBan};
pub use resolver::Resolver;
pub use message_manager::MessageManager;
pub use usage_builder::UsageBuilder;
pub use preban_reactor::{PrebanReactor, JoinOutcome, ban_reason};
