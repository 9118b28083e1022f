use crate::context::CommandContext;
use crate::error::CommandResult;
use std::sync::Arc;
use subcmd_text::colorize;

pub trait CommandExecutor: Send + Sync {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult<()>;
}

impl<F> CommandExecutor for F
where
    F: Fn(&mut CommandContext<'_>) -> CommandResult<()> + Send + Sync,
{
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult<()> {
        self(ctx)
    }
}

/// How the permission node should be granted by the host when it registers
/// the node with the server. Carried metadata; dispatch only checks the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionAccess {
    #[default]
    Everyone,
    Op,
    NotOp,
    Nobody,
}

/// The descriptor for a single sub-command: metadata plus the executor.
/// Built with the chainable methods below, then handed to
/// [`CommandRegistry::register`](crate::CommandRegistry::register), after
/// which it never changes.
#[derive(Clone)]
pub struct Subcommand {
    pub name: String,
    pub description: String,
    /// Parameter usage text echoed in the invalid-usage message,
    /// e.g. `"<player> [amount]"`.
    pub parameters: String,
    pub aliases: Vec<String>,
    /// Help menu lines, color-translated when added.
    pub help: Vec<String>,
    pub permission: Option<String>,
    pub permission_access: PermissionAccess,
    pub min_args: usize,
    pub require_player: bool,
    /// Completion hints for argument positions past the sub-command name.
    pub tab_completions: Vec<String>,
    pub(crate) executor: Option<Arc<dyn CommandExecutor>>,
}

impl Subcommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: String::new(),
            aliases: Vec::new(),
            help: Vec::new(),
            permission: None,
            permission_access: PermissionAccess::default(),
            min_args: 0,
            require_player: false,
            tab_completions: Vec::new(),
            executor: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = parameters.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn help_line(mut self, line: &str) -> Self {
        self.help.push(colorize(line));
        self
    }

    pub fn permission(mut self, node: impl Into<String>) -> Self {
        self.permission = Some(node.into());
        self
    }

    pub fn permission_access(mut self, access: PermissionAccess) -> Self {
        self.permission_access = access;
        self
    }

    pub fn min_args(mut self, min_args: usize) -> Self {
        self.min_args = min_args;
        self
    }

    pub fn require_player(mut self) -> Self {
        self.require_player = true;
        self
    }

    pub fn tab_completion(mut self, hint: impl Into<String>) -> Self {
        self.tab_completions.push(hint.into());
        self
    }

    pub fn executes(mut self, executor: impl CommandExecutor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    pub(crate) fn has_executor(&self) -> bool {
        self.executor.is_some()
    }
}
