
use serenity::model::permissions::Permissions;
use nonempty::nonempty;

use std::sync::Arc;

use crate::commands::command::*;
use crate::databases::*;
use crate::utility::*;


// Rendered body length at which the listing stops
const BODY_LIMIT: usize = 2048;

fn render_line(preban: &Preban) -> String {
    let glyph = match preban.status() {
        PrebanStatus::Pending   => "⏲️",
        PrebanStatus::Fulfilled => "✅",
        PrebanStatus::Inactive  => "❌",
    };
    let mut line = format!("{} `{}` by <@{}>", glyph, preban.user_id, preban.created_by_id);
    if let Some(fulfilled_at) = preban.fulfilled_at {
        line.push_str(&format!(" - fulfilled: {}", fulfilled_at.format("%b %-d, %Y")));
    }
    line.push('\n');
    line
}

/// Renders the preban list of a server as an embed reply.
pub fn render_listing(prebans: &[Preban], prefix: &str) -> Reply {
    let title = format!("{} Preban{}",
        format_count(prebans.len()),
        if prebans.len() == 1 { "" } else { "s" });

    let mut description = String::new();
    let mut rendered = 0;
    for preban in prebans {
        let line = render_line(preban);
        if description.chars().count() + line.chars().count() >= BODY_LIMIT {
            break;
        }
        description.push_str(&line);
        rendered += 1;
    }

    if description.is_empty() {
        return Reply::Embed {
            title,
            description: format!("This server has no prebans. Create one with `{}ban`.", prefix),
            footer: None,
        };
    }

    let remaining = prebans.len() - rendered;
    Reply::Embed {
        title,
        description: description.trim_end().to_string(),
        footer: (remaining > 0)
            .then(|| format!("{} more prebans not listed.", format_count(remaining))),
    }
}

pub struct BansCommand {
    store: Arc<dyn PrebanStore>,
}

impl BansCommand {
    pub fn new(store: Arc<dyn PrebanStore>) -> Self {
        BansCommand { store }
    }
}

impl Command for BansCommand {

    fn required_permissions(&self) -> Permissions {
        Permissions::BAN_MEMBERS
    }

    fn define_usage(&self) -> UsageBuilder {
        UsageBuilder::new(nonempty!["bans".to_string(), "prebans".to_string()])
            .description("List all registered prebans.")
    }

    fn run<'a>(&'a self, params: CommandParams<'a>) -> BoxedFuture<'a, CommandResult> {
        Box::pin(
            async move {
                let guild_id = params.guild()?;
                let prebans = self.store.list_by_server(guild_id).await?;
                Ok(render_listing(&prebans, params.message.get_prefix()))
            }
        )
    }

}
