use thiserror::Error;

/// A dispatch-time failure. The `Display` text is the user-facing message;
/// an empty message means the sender was already informed and the failure
/// unwinds silently.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("&cYou must be a player to use this command!")]
    PlayerRequired,
    #[error("&cYou do not have permission to run this command!")]
    PermissionDenied { permission: String },
    #[error("&cInvalid usage. Try &e/{command} {name} &d{parameters}&c.")]
    InvalidUsage {
        command: String,
        name: String,
        parameters: String,
    },
    #[error("{0}")]
    Message(String),
    #[error("{0}")]
    Unprefixed(String),
    #[error("")]
    Silent,
}

impl CommandError {
    /// A handler-raised failure, sent with the messaging prefix.
    pub fn message(message: impl Into<String>) -> Self {
        CommandError::Message(message.into())
    }

    /// A handler-raised failure, sent without the messaging prefix.
    pub fn unprefixed(message: impl Into<String>) -> Self {
        CommandError::Unprefixed(message.into())
    }

    pub fn prefixable(&self) -> bool {
        !matches!(
            self,
            CommandError::Unprefixed(_) | CommandError::Silent
        )
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Errors raised while registering sub-commands. These are configuration
/// mistakes surfaced at startup, never shown to a command sender.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("sub-command has no name")]
    MissingName,
    #[error("sub-command '{name}' declares an empty alias")]
    EmptyAlias { name: String },
    #[error("sub-command '{name}' has no executor")]
    MissingExecutor { name: String },
    #[error("'{name}' is already registered")]
    DuplicateName { name: String },
}
