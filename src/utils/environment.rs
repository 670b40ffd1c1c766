// src/utils/environment.rs

use std::io::IsTerminal;

/// What the host environment looks like from inside the library.
#[derive(Debug, Clone)]
pub struct Environment {
    /// stdout is an interactive terminal
    pub interactive: bool,
    /// worker threads the host can reasonably run
    pub parallelism: usize,
    /// MLBOX_QUIET was set (suppresses banner output regardless of config)
    pub quiet: bool,
}

/// Environment variable that silences banner output when set to anything
/// other than "0" or "false".
pub const QUIET_ENV: &str = "MLBOX_QUIET";

pub fn detect() -> Environment {
    Environment {
        interactive: std::io::stdout().is_terminal(),
        parallelism: std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1),
        quiet: quiet_requested(),
    }
}

pub fn quiet_requested() -> bool {
    match std::env::var(QUIET_ENV) {
        Ok(v) => v != "0" && !v.eq_ignore_ascii_case("false"),
        Err(_) => false,
    }
}
