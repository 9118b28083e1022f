#![deny(rust_2018_idioms)]

//! Sub-command registration and dispatch for Minecraft server plugins.
//!
//! A plugin builds a [`CommandRegistry`] at startup, registers a
//! [`Subcommand`] descriptor per sub-command (aliases included), and hands
//! every invocation from the server's command hook to
//! [`CommandRegistry::dispatch`]. Dispatch resolves the first token,
//! validates player context, argument count, and permission in that order,
//! and either invokes the handler or sends the sender exactly one failure
//! message.

mod autocomplete;
pub mod builtin;
mod config;
mod context;
mod descriptor;
mod error;
mod executor;
mod registry;

pub use config::CommandConfig;
pub use context::{CommandContext, CommandSender};
pub use descriptor::{CommandExecutor, PermissionAccess, Subcommand};
pub use error::{CommandError, CommandResult, RegistryError};
pub use registry::CommandRegistry;
