use crate::error::AppError;

const DEFAULT_MAX_PROMPT_CHARS: usize = 4000;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompts longer than this many characters are rejected by every tool.
    pub max_prompt_chars: usize,
    /// TCP address to accept MCP clients on. `None` serves stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
            tcp_listen_addr: None,
        }
    }
}

impl Config {
    /// Optional:
    /// - `BRIEF_MAX_PROMPT_CHARS`: positive integer, default 4000
    /// - `MCP_TCP_LISTEN_ADDR`: serve MCP over TCP at this address instead of stdio
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let max_prompt_chars = match lookup("BRIEF_MAX_PROMPT_CHARS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "BRIEF_MAX_PROMPT_CHARS must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_MAX_PROMPT_CHARS,
        };

        let tcp_listen_addr = lookup("MCP_TCP_LISTEN_ADDR").filter(|addr| !addr.trim().is_empty());

        Ok(Self {
            max_prompt_chars,
            tcp_listen_addr,
        })
    }

    /// Reject prompts over the configured length.
    pub fn check_prompt(&self, prompt: &str) -> Result<(), AppError> {
        let len = prompt.chars().count();
        if len > self.max_prompt_chars {
            return Err(AppError::PromptTooLong {
                len,
                max: self.max_prompt_chars,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.max_prompt_chars, 4000);
        assert_eq!(config.tcp_listen_addr, None);
    }

    #[test]
    fn reads_both_variables() {
        let config = config(&[
            ("BRIEF_MAX_PROMPT_CHARS", "250"),
            ("MCP_TCP_LISTEN_ADDR", "127.0.0.1:7070"),
        ])
        .unwrap();
        assert_eq!(config.max_prompt_chars, 250);
        assert_eq!(config.tcp_listen_addr.as_deref(), Some("127.0.0.1:7070"));
    }

    #[test]
    fn rejects_non_positive_limits() {
        for raw in ["0", "-5", "lots"] {
            let err = config(&[("BRIEF_MAX_PROMPT_CHARS", raw)]).unwrap_err();
            assert!(matches!(err, AppError::Config(_)), "{raw} should be rejected");
        }
    }

    #[test]
    fn prompt_length_counts_characters() {
        let config = Config {
            max_prompt_chars: 5,
            tcp_listen_addr: None,
        };
        assert!(config.check_prompt("três").is_ok());
        assert!(matches!(
            config.check_prompt("três lives"),
            Err(AppError::PromptTooLong { len: 10, max: 5 })
        ));
    }
}
