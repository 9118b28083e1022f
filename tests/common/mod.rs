use std::collections::HashSet;
use std::sync::Once;
use subcmd::CommandSender;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

static TRACING: Once = Once::new();

/// Installs the env-filter subscriber once for the whole test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .with_env_var("SUBCMD_LOG")
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .init();
    });
}

/// A sender that records everything sent to it.
pub struct TestSender {
    player: bool,
    permissions: HashSet<String>,
    pub messages: Vec<String>,
}

impl TestSender {
    pub fn player() -> Self {
        Self {
            player: true,
            permissions: HashSet::new(),
            messages: Vec::new(),
        }
    }

    pub fn console() -> Self {
        Self {
            player: false,
            permissions: HashSet::new(),
            messages: Vec::new(),
        }
    }

    pub fn with_permission(mut self, node: &str) -> Self {
        self.permissions.insert(node.to_owned());
        self
    }

    /// Captured messages with color codes stripped, for readable asserts.
    pub fn plain(&self) -> Vec<String> {
        self.messages
            .iter()
            .map(|message| subcmd_text::strip_codes(message))
            .collect()
    }
}

impl CommandSender for TestSender {
    fn is_player(&self) -> bool {
        self.player
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.contains(node)
    }

    fn send_message(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| (*token).to_owned()).collect()
}
