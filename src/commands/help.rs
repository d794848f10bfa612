
use nonempty::nonempty;

use crate::commands::command::*;
use crate::utility::*;


fn help_usage() -> UsageBuilder {
    UsageBuilder::new(nonempty!["help".to_string()])
        .add_optional("command")
        .description("Show how to use the commands.")
}

pub struct HelpCommand {
    usages: Vec<UsageBuilder>,
}

impl HelpCommand {

    /// Help for the given commands, plus help itself.
    pub fn new(mut usages: Vec<UsageBuilder>) -> Self {
        usages.push(help_usage());
        HelpCommand { usages }
    }

}

impl Command for HelpCommand {

    fn guild_only(&self) -> bool {
        false
    }

    fn define_usage(&self) -> UsageBuilder {
        help_usage()
    }

    fn run<'a>(&'a self, params: CommandParams<'a>) -> BoxedFuture<'a, CommandResult> {
        Box::pin(
            async move {
                let prefix = params.message.get_prefix();

                if let Some(name) = params.message.argument(0) {
                    let name = name.trim_start_matches(prefix).to_lowercase();
                    let usage = self.usages.iter()
                        .find(|usage| usage.triggers.iter().any(|trigger| *trigger == name));
                    return Ok(match usage {
                        Some(usage) => Reply::Embed {
                            title: format!("{}{}", prefix, usage.name()),
                            description: usage.build(prefix),
                            footer: Some("Syntax Legend: <> = required, [] = optional".to_string()),
                        },
                        None => Reply::text(format!("There is no command named `{}`.", name)),
                    });
                }

                let description = self.usages.iter()
                    .map(|usage| usage.build(prefix))
                    .collect::<Vec<String>>()
                    .join("\n\n");
                Ok(Reply::Embed {
                    title: "Commands".to_string(),
                    description,
                    footer: Some("Syntax Legend: <> = required, [] = optional".to_string()),
                })
            }
        )
    }

}
