//! Bootstrap files — optional workspace documents inlined verbatim.
//!
//! Each file is optional. Missing files are silently skipped; a file that
//! exists but cannot be read fails the whole prompt build.

use clawprompt_core::error::{Error, Result};
use std::path::Path;
use tracing::debug;

pub const AGENTS_FILE: &str = "AGENTS.md";
pub const SOUL_FILE: &str = "SOUL.md";
pub const USER_FILE: &str = "USER.md";

/// Bootstrap files in prompt order.
pub const BOOTSTRAP_FILES: [&str; 3] = [AGENTS_FILE, SOUL_FILE, USER_FILE];

/// Concatenate `## <filename>` sections for each file present under `workspace`.
///
/// Returns an empty string when none of the files exist.
pub fn load_bootstrap(workspace: &Path, filenames: &[&str]) -> Result<String> {
    let mut parts = Vec::new();

    for filename in filenames {
        let path = workspace.join(filename);
        if !path.exists() {
            continue;
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        debug!(file = %path.display(), bytes = content.len(), "Loaded bootstrap file");
        parts.push(format!("## {filename}\n\n{content}"));
    }

    Ok(parts.join("\n\n"))
}
