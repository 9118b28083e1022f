use crate::descriptor::Subcommand;
use crate::error::{CommandError, CommandResult};
use crate::registry::CommandRegistry;
use std::sync::Arc;
use subcmd_text::{colorize, interpolate};

/// The invoker handle supplied by the host per invocation: a player, the
/// console, a command block, or whatever else the server lets run commands.
pub trait CommandSender {
    /// Whether this sender is an in-game player.
    fn is_player(&self) -> bool;
    fn has_permission(&self, node: &str) -> bool;
    fn send_message(&mut self, message: &str);
}

/// Everything a handler gets to see about one invocation. Created by
/// [`CommandRegistry::dispatch`] and discarded when the invocation ends.
pub struct CommandContext<'a> {
    registry: &'a CommandRegistry,
    command: &'a str,
    sender: &'a mut dyn CommandSender,
    args: Vec<String>,
    subcommand: Option<Arc<Subcommand>>,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(
        registry: &'a CommandRegistry,
        command: &'a str,
        sender: &'a mut dyn CommandSender,
        args: Vec<String>,
        subcommand: Option<Arc<Subcommand>>,
    ) -> Self {
        Self {
            registry,
            command,
            sender,
            args,
            subcommand,
        }
    }

    /// The label of the host command this sub-command was invoked under.
    pub fn command(&self) -> &str {
        self.command
    }

    /// The argument tokens, with the sub-command name already consumed.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn sender(&mut self) -> &mut dyn CommandSender {
        &mut *self.sender
    }

    /// The resolved descriptor, `None` when the lookup missed.
    pub fn subcommand(&self) -> Option<&Arc<Subcommand>> {
        self.subcommand.as_ref()
    }

    pub fn registry(&self) -> &'a CommandRegistry {
        self.registry
    }

    /// Sends `message` to the invoker, color-translated and with the
    /// messaging prefix prepended.
    pub fn reply(&mut self, message: &str) {
        let message = format!("{}{}", self.registry.messaging_prefix(), message);
        self.sender.send_message(&colorize(&message));
    }

    /// Like [`reply`](Self::reply), substituting `{}` placeholders first.
    pub fn replyf(&mut self, template: &str, args: &[&str]) {
        self.reply(&interpolate(template, args));
    }

    pub fn require_player(&self) -> CommandResult<()> {
        if !self.sender.is_player() {
            return Err(CommandError::PlayerRequired);
        }
        Ok(())
    }

    pub fn require_args(&self, min: usize) -> CommandResult<()> {
        if self.args.len() < min {
            let (name, parameters) = match &self.subcommand {
                Some(subcommand) => (subcommand.name.clone(), subcommand.parameters.clone()),
                None => (String::new(), String::new()),
            };
            return Err(CommandError::InvalidUsage {
                command: self.command.to_owned(),
                name,
                parameters,
            });
        }
        Ok(())
    }

    pub fn check_permission(&self, node: &str) -> CommandResult<()> {
        if !self.sender.has_permission(node) {
            return Err(CommandError::PermissionDenied {
                permission: node.to_owned(),
            });
        }
        Ok(())
    }
}
