
pub mod ban;
pub mod unban;
pub mod bans;
