use crate::config::CommandConfig;
use crate::context::CommandContext;
use crate::descriptor::Subcommand;
use crate::error::RegistryError;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use subcmd_text::colorize;
use tracing::{debug, warn};

type InvalidCommandHook = Box<dyn Fn(&mut CommandContext<'_>) + Send + Sync>;

/// The name-to-descriptor registry and dispatch entry point.
///
/// Populated once at plugin startup, read on every invocation afterwards.
pub struct CommandRegistry {
    /// Every registered name, aliases included.
    commands: HashMap<String, Arc<Subcommand>>,
    /// Canonical names only, in registration order.
    names_only: IndexMap<String, Arc<Subcommand>>,
    messaging_prefix: String,
    strict: bool,
    pub(crate) invalid_command: InvalidCommandHook,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::with_config(CommandConfig::default())
    }

    pub fn with_config(config: CommandConfig) -> Self {
        Self {
            commands: HashMap::new(),
            names_only: IndexMap::new(),
            messaging_prefix: colorize(&config.messaging_prefix),
            strict: config.strict_registration,
            invalid_command: Box::new(default_invalid_command),
        }
    }

    /// Registers one sub-command under its canonical name and every alias.
    ///
    /// Incomplete descriptors are rejected here rather than surfacing at
    /// dispatch time. With `strict_registration` off (the default), a name
    /// collision lets the later registration win.
    pub fn register(&mut self, subcommand: Subcommand) -> Result<(), RegistryError> {
        if subcommand.name.trim().is_empty() {
            return Err(RegistryError::MissingName);
        }
        if subcommand.aliases.iter().any(|alias| alias.trim().is_empty()) {
            return Err(RegistryError::EmptyAlias {
                name: subcommand.name.clone(),
            });
        }
        if !subcommand.has_executor() {
            return Err(RegistryError::MissingExecutor {
                name: subcommand.name.clone(),
            });
        }
        if self.strict
            && let Some(taken) = std::iter::once(&subcommand.name)
                .chain(subcommand.aliases.iter())
                .find(|name| self.commands.contains_key(name.as_str()))
        {
            return Err(RegistryError::DuplicateName {
                name: taken.clone(),
            });
        }

        let subcommand = Arc::new(subcommand);
        debug!(name = %subcommand.name, aliases = ?subcommand.aliases, "registered sub-command");
        self.names_only
            .insert(subcommand.name.clone(), subcommand.clone());
        self.insert_keyed(&subcommand.name, &subcommand);
        for alias in &subcommand.aliases {
            self.insert_keyed(alias, &subcommand);
        }
        Ok(())
    }

    /// Registers a whole batch, e.g. everything a handler container
    /// contributes. Stops at the first configuration error.
    pub fn register_all(
        &mut self,
        subcommands: impl IntoIterator<Item = Subcommand>,
    ) -> Result<(), RegistryError> {
        for subcommand in subcommands {
            self.register(subcommand)?;
        }
        Ok(())
    }

    fn insert_keyed(&mut self, key: &str, subcommand: &Arc<Subcommand>) {
        if let Some(previous) = self.commands.insert(key.to_owned(), subcommand.clone()) {
            warn!(key, previous = %previous.name, "overwriting an existing sub-command registration");
        }
    }

    /// Looks up a descriptor by canonical name or alias.
    pub fn get(&self, name: &str) -> Option<&Arc<Subcommand>> {
        self.commands.get(name)
    }

    /// Every registered name, aliases included.
    pub fn commands(&self) -> impl Iterator<Item = (&str, &Arc<Subcommand>)> {
        self.commands.iter().map(|(name, sub)| (name.as_str(), sub))
    }

    /// Canonical names only, in registration order.
    pub fn names_only(&self) -> impl Iterator<Item = (&str, &Arc<Subcommand>)> {
        self.names_only
            .iter()
            .map(|(name, sub)| (name.as_str(), sub))
    }

    pub fn messaging_prefix(&self) -> &str {
        &self.messaging_prefix
    }

    /// Sets the prefix prepended to every reply and prefixable failure
    /// message. Color codes are translated once here.
    pub fn set_messaging_prefix(&mut self, prefix: &str) {
        self.messaging_prefix = colorize(prefix);
    }

    /// Replaces the reply sent when the first token matches nothing.
    pub fn set_invalid_command(
        &mut self,
        hook: impl Fn(&mut CommandContext<'_>) + Send + Sync + 'static,
    ) {
        self.invalid_command = Box::new(hook);
    }
}

fn default_invalid_command(ctx: &mut CommandContext<'_>) {
    let command = ctx.command().to_owned();
    ctx.replyf(
        "&cInvalid sub-command. Run &e/{} help &cfor a list of commands",
        &[&command],
    );
}
