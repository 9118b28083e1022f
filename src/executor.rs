use crate::context::{CommandContext, CommandSender};
use crate::error::{CommandError, CommandResult};
use crate::registry::CommandRegistry;
use subcmd_text::colorize;
use tracing::debug;

impl CommandRegistry {
    /// Processes one invocation from the host's command hook.
    ///
    /// `args` is the raw token array, token 0 being the sub-command name;
    /// an empty array is treated as a lookup miss. All observable effects
    /// are messages sent through `sender`: the handler runs only once every
    /// precondition passes, and any failure produces at most one message.
    pub fn dispatch(&self, command: &str, sender: &mut dyn CommandSender, args: &[String]) {
        if let Err(err) = self.dispatch_inner(command, sender, args) {
            if let CommandError::PermissionDenied { permission } = &err {
                debug!(permission = %permission, "dispatch rejected");
            }
            let message = err.to_string();
            if message.is_empty() {
                return;
            }
            let message = if err.prefixable() {
                format!("{}{}", self.messaging_prefix(), message)
            } else {
                message
            };
            sender.send_message(&colorize(&message));
        }
    }

    fn dispatch_inner(
        &self,
        command: &str,
        sender: &mut dyn CommandSender,
        args: &[String],
    ) -> CommandResult<()> {
        let subcommand = args.first().and_then(|name| self.get(name)).cloned();
        let remaining = args.get(1..).unwrap_or_default().to_vec();
        let mut ctx = CommandContext::new(self, command, sender, remaining, subcommand.clone());

        let Some(subcommand) = subcommand else {
            debug!(
                token = args.first().map(String::as_str).unwrap_or(""),
                "unknown sub-command"
            );
            (self.invalid_command)(&mut ctx);
            return Err(CommandError::Silent);
        };

        // Precedence is user-visible: player check, then argument count,
        // then permission.
        if subcommand.require_player {
            ctx.require_player()?;
        }
        ctx.require_args(subcommand.min_args)?;
        if let Some(permission) = &subcommand.permission {
            ctx.check_permission(permission)?;
        }

        let Some(executor) = &subcommand.executor else {
            unreachable!("registration rejects descriptors without an executor")
        };
        debug!(name = %subcommand.name, "invoking sub-command");
        executor.execute(&mut ctx)
    }
}
