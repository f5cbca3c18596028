//! Runtime requirement checks for skills.

use serde::Deserialize;

/// What a skill needs from the host before it can be used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Requirements {
    /// Binaries that must all be on `PATH`
    #[serde(default)]
    pub bins: Vec<String>,

    /// Environment variables that must all be set
    #[serde(default)]
    pub env: Vec<String>,
}

impl Requirements {
    /// Unmet requirements, formatted as `CLI: <bin>` and `ENV: <var>`.
    pub fn missing(&self) -> Vec<String> {
        let bins = self
            .bins
            .iter()
            .filter(|b| !has_binary(b))
            .map(|b| format!("CLI: {b}"));
        let env = self
            .env
            .iter()
            .filter(|v| std::env::var_os(v).is_none())
            .map(|v| format!("ENV: {v}"));
        bins.chain(env).collect()
    }

    pub fn is_satisfied(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Check whether an executable named `name` exists on `PATH`.
pub fn has_binary(name: &str) -> bool {
    let Some(path_env) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path_env).any(|dir| is_executable(&dir.join(name)))
}

#[cfg(unix)]
fn is_executable(candidate: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(candidate)
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(candidate: &std::path::Path) -> bool {
    candidate.is_file() || candidate.with_extension("exe").is_file()
}
