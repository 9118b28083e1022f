//! Stock sub-commands a plugin can opt into.

use crate::context::CommandContext;
use crate::descriptor::Subcommand;
use crate::error::{CommandResult, RegistryError};
use crate::registry::CommandRegistry;
use itertools::Itertools;

pub fn register_builtin(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    registry.register(help())
}

/// The stock `help` sub-command: without an argument it lists every
/// canonical sub-command in registration order, with one it prints that
/// sub-command's usage and help lines.
pub fn help() -> Subcommand {
    Subcommand::new("help")
        .alias("?")
        .description("Displays the help menu")
        .parameters("[subcommand]")
        .executes(exec_help)
}

fn exec_help(ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let command = ctx.command().to_owned();
    match ctx.arg(0).map(str::to_owned) {
        None => {
            let entries = ctx
                .registry()
                .names_only()
                .map(|(name, sub)| {
                    if sub.aliases.is_empty() {
                        format!(" &e/{} {} &7- {}", command, name, sub.description)
                    } else {
                        format!(
                            " &e/{} {} &7- {} (Aliases: {})",
                            command,
                            name,
                            sub.description,
                            sub.aliases.iter().join(", ")
                        )
                    }
                })
                .collect_vec();
            ctx.reply("&6Available sub-commands:");
            for entry in entries {
                ctx.reply(&entry);
            }
        }
        Some(name) => match ctx.registry().get(&name).cloned() {
            Some(sub) => {
                ctx.replyf(
                    "&6Usage: &e/{} {} &d{}",
                    &[&command, &sub.name, &sub.parameters],
                );
                for line in &sub.help {
                    ctx.reply(line);
                }
            }
            None => ctx.replyf("&cUnknown sub-command: &e{}", &[&name]),
        },
    }
    Ok(())
}
