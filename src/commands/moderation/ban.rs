
use serenity::model::permissions::Permissions;
use nonempty::nonempty;

use std::sync::Arc;

use crate::commands::command::*;
use crate::databases::*;
use crate::utility::*;


pub const REASON_LIMIT: usize = 1000;

pub struct BanCommand {
    store: Arc<dyn PrebanStore>,
}

impl BanCommand {
    pub fn new(store: Arc<dyn PrebanStore>) -> Self {
        BanCommand { store }
    }
}

impl Command for BanCommand {

    fn required_permissions(&self) -> Permissions {
        Permissions::BAN_MEMBERS
    }

    fn define_usage(&self) -> UsageBuilder {
        UsageBuilder::new(nonempty!["ban".to_string()])
            .add_required("user_id")
            .add_optional("reason")
            .description(
                "Preban a user by their ID. If they are already a member, they are banned right away. \
                 Once a preban is fulfilled, the user is **not** banned again if a moderator lifts the ban \
                 manually. Run this command again to reactivate a preban.")
            .example("996364193588592740 ban evasion")
    }

    fn run<'a>(&'a self, params: CommandParams<'a>) -> BoxedFuture<'a, CommandResult> {
        Box::pin(
            async move {

                let guild_id = params.guild()?;
                let platform = params.platform;
                let message = &params.message;
                let raw_target = params.required_argument(0, "user_id")?;

                // the target must exist on the platform
                let target = match parse_user_id(raw_target) {
                    Some(user_id) => platform.resolve_user(&user_id).await,
                    None => None,
                };
                let target = match target {
                    Some(target) => target,
                    None => return Ok(Reply::text("Could not verify that user ID.")),
                };

                // a failed lookup means the user is not a member
                let member = platform.resolve_member(guild_id, &target.id).await;
                if let Some(member) = &member {
                    if member.is_owner || member.id == platform.bot_id() {
                        return Ok(Reply::text("I cannot ban the server owner or myself."));
                    }
                }

                // obtain the reason
                let reason = truncate_chars(&message.payload(Some(1)), REASON_LIMIT);
                let reason = Some(reason).filter(|reason| !reason.is_empty());

                let author = message.get_author();
                let now = message.get_timestamp();
                let preban = match &member {
                    Some(_) => Preban::fulfilled(guild_id, &target.id, &author.id, reason, now),
                    None    => Preban::pending(guild_id, &target.id, &author.id, reason, now),
                };
                self.store.upsert(&preban).await?;

                if member.is_none() {
                    return Ok(Reply::text(
                        "Prebanned this user. Make sure I do not lose the **Ban Members** permission."));
                }

                let audit_reason = ban_reason(Some(&author.name), &author.id, preban.reason.as_deref());
                match platform.ban(guild_id, &target.id, &audit_reason).await {
                    Ok(_) => Ok(Reply::text("Banned this user and created a preban entry.")),
                    Err(err) => {
                        Logger::warn_long(
                            &format!("Failed to ban {} in {}", target.id, guild_id),
                            &err.to_string());
                        Ok(Reply::text(
                            "I created a preban entry, but I was unable to ban this user \
                             (they are currently a member). Please verify my permissions and make sure \
                             you are not attempting to preban a member who ranks higher than me."))
                    }
                }
            }
        )
    }

}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::utility::testing::{MockPlatform, BOT_ID};
    use chrono::{DateTime, TimeZone, Utc};

    fn setup() -> (BanCommand, Arc<PrebansDB>) {
        let store = Arc::new(PrebansDB::new(Database::in_memory().unwrap()));
        (BanCommand::new(store.clone()), store)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn message(content: &str) -> MessageManager {
        let author = PlatformUser { id: "M1".to_string(), name: "Mod".to_string() };
        MessageManager::new(content, "pb/", Some("S1".to_string()), author, now())
    }

    async fn run(command: &BanCommand, platform: &MockPlatform, content: &str) -> Reply {
        command.run(CommandParams::new(message(content), platform)).await.unwrap()
    }

    #[tokio::test]
    async fn absent_user_gets_a_pending_preban() {
        let (command, store) = setup();
        let platform = MockPlatform::new().with_user("111");

        let reply = run(&command, &platform, "pb/ban 111 spam bot").await;
        assert_eq!(reply, Reply::text(
            "Prebanned this user. Make sure I do not lose the **Ban Members** permission."));

        let entry = store.find("S1", "111").await.unwrap().unwrap();
        assert!(entry.active);
        assert_eq!(entry.fulfilled_at, None);
        assert_eq!(entry.reason.as_deref(), Some("spam bot"));
        assert_eq!(entry.created_by_id, "M1");
        assert_eq!(entry.created_at, now());
        assert!(platform.bans().is_empty());
    }

    #[tokio::test]
    async fn present_member_is_banned_immediately() {
        let (command, store) = setup();
        let platform = MockPlatform::new().with_member("S1", "222", "Target");

        let reply = run(&command, &platform, "pb/ban <@222> raiding").await;
        assert_eq!(reply, Reply::text("Banned this user and created a preban entry."));

        let entry = store.find("S1", "222").await.unwrap().unwrap();
        assert!(!entry.active);
        assert_eq!(entry.fulfilled_at, Some(now()));

        let bans = platform.bans();
        assert_eq!(bans.len(), 1);
        assert_eq!(bans[0], ("S1".to_string(), "222".to_string(), "Preban by Mod (M1): raiding".to_string()));
    }

    #[tokio::test]
    async fn failed_live_ban_keeps_the_entry() {
        let (command, store) = setup();
        let platform = MockPlatform::new().with_member("S1", "222", "Target").failing_bans();

        let reply = run(&command, &platform, "pb/ban 222").await;
        match reply {
            Reply::Text(text) => assert!(text.starts_with("I created a preban entry, but I was unable to ban")),
            other => panic!("unexpected reply {:?}", other),
        }
        assert!(store.find("S1", "222").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unverifiable_user_writes_nothing() {
        let (command, store) = setup();
        let platform = MockPlatform::new();

        assert_eq!(run(&command, &platform, "pb/ban 333").await, Reply::text("Could not verify that user ID."));
        assert_eq!(run(&command, &platform, "pb/ban someone").await, Reply::text("Could not verify that user ID."));
        assert!(store.list_by_server("S1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn owner_and_bot_are_refused() {
        let (command, store) = setup();
        let platform = MockPlatform::new()
            .with_owner("S1", "444")
            .with_member("S1", BOT_ID, "Preban Bot");

        let refusal = Reply::text("I cannot ban the server owner or myself.");
        assert_eq!(run(&command, &platform, "pb/ban 444").await, refusal);
        assert_eq!(run(&command, &platform, &format!("pb/ban {}", BOT_ID)).await, refusal);
        assert!(store.list_by_server("S1").await.unwrap().is_empty());
        assert!(platform.bans().is_empty());
    }

    #[tokio::test]
    async fn rerunning_overwrites_the_entry() {
        let (command, store) = setup();
        let platform = MockPlatform::new().with_user("111");
        store.upsert(&Preban::fulfilled("S1", "111", "M9", Some("old".to_string()), now() - chrono::Duration::days(3)))
            .await.unwrap();

        run(&command, &platform, "pb/ban 111").await;

        let entry = store.find("S1", "111").await.unwrap().unwrap();
        assert_eq!(entry, Preban::pending("S1", "111", "M1", None, now()));
    }

    #[tokio::test]
    async fn reason_is_capped() {
        let (command, store) = setup();
        let platform = MockPlatform::new().with_user("111");

        run(&command, &platform, &format!("pb/ban 111 {}", "x".repeat(1500))).await;

        let entry = store.find("S1", "111").await.unwrap().unwrap();
        assert_eq!(entry.reason.map(|reason| reason.len()), Some(REASON_LIMIT));
    }

    #[tokio::test]
    async fn missing_user_id_is_reported() {
        let (command, _) = setup();
        let platform = MockPlatform::new();
        let result = command.run(CommandParams::new(message("pb/ban"), &platform)).await;
        assert!(matches!(result, Err(CommandError::MissingArgument("user_id"))));
    }
}
