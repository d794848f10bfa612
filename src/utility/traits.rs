
use serenity::builder::{CreateAllowedMentions, CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::model::channel::MessageFlags;
use serenity::model::colour::Colour;

use crate::commands::Reply;


const COLOR_PRIMARY: Colour = Colour::new(0xf5c400);

pub trait ToMessage {
    fn to_message(&self) -> CreateMessage;
}

impl ToMessage for &str {
    fn to_message(&self) -> CreateMessage {
        CreateMessage::default().content(self.to_string())
    }
}

impl ToMessage for CreateEmbed {
    fn to_message(&self) -> CreateMessage {
        CreateMessage::default().embed(self.clone())
    }
}

impl ToMessage for Reply {
    // replies never ping anyone and do not trigger notifications
    fn to_message(&self) -> CreateMessage {
        let message = match self {
            Reply::Text(content) => content.as_str().to_message(),
            Reply::Embed { title, description, footer } => {
                let mut embed = CreateEmbed::default()
                    .title(title)
                    .description(description)
                    .color(COLOR_PRIMARY);
                if let Some(footer) = footer {
                    embed = embed.footer(CreateEmbedFooter::new(footer));
                }
                embed.to_message()
            }
        };
        message
            .allowed_mentions(CreateAllowedMentions::new())
            .flags(MessageFlags::SUPPRESS_NOTIFICATIONS)
    }
}
