use crate::registry::CommandRegistry;
use itertools::Itertools;

impl CommandRegistry {
    /// Suggestions for a partially typed invocation, for the host's tab
    /// completion hook. Token 0 completes over canonical names; later
    /// tokens complete over the resolved descriptor's hints.
    pub fn tab_complete(&self, args: &[String]) -> Vec<String> {
        match args {
            [] => self
                .names_only()
                .map(|(name, _)| name.to_owned())
                .sorted()
                .collect(),
            [partial] => self
                .names_only()
                .map(|(name, _)| name)
                .filter(|name| name.starts_with(partial.as_str()))
                .map(str::to_owned)
                .sorted()
                .collect(),
            [first, .., last] => {
                let Some(subcommand) = self.get(first) else {
                    return Vec::new();
                };
                subcommand
                    .tab_completions
                    .iter()
                    .filter(|hint| hint.starts_with(last.as_str()))
                    .cloned()
                    .sorted()
                    .collect()
            }
        }
    }
}
