//! `clawprompt skills` — List discovered skills or print one.

use clawprompt_config::AppConfig;
use clawprompt_core::skills::SkillSource;
use clawprompt_skills::SkillsLoader;

fn skills_loader(config: &AppConfig) -> SkillsLoader {
    SkillsLoader::new(&config.workspace_dir(), config.builtin_skills_dir())
}

/// Print the raw `SKILL.md` of `name`, workspace copy first.
pub fn show(config: &AppConfig, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    match skills_loader(config).load_skill(name)? {
        Some(content) => {
            print!("{content}");
            Ok(())
        }
        None => Err(format!("Skill '{name}' not found").into()),
    }
}

pub fn run(config: &AppConfig, all: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loader = skills_loader(config);
    let skills = loader.list_skills(!all)?;

    if skills.is_empty() {
        println!("No skills found in {}", config.workspace_dir().display());
        return Ok(());
    }

    println!("🧩 Skills ({})", skills.len());
    println!("==================");
    for entry in &skills {
        let source = match entry.source {
            SkillSource::Workspace => "workspace",
            SkillSource::Builtin => "builtin",
        };
        let document = loader.document(&entry.name)?;
        let (description, missing) = match &document {
            Some(doc) => (
                doc.description().unwrap_or(&entry.name).to_string(),
                doc.runtime.requires.missing(),
            ),
            None => (entry.name.clone(), Vec::new()),
        };

        let marker = if missing.is_empty() { "✅" } else { "⚠️ " };
        println!("  {marker} {:<20} [{source}] {description}", entry.name);
        if !missing.is_empty() {
            println!("       missing: {}", missing.join(", "));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(workspace: &std::path::Path) -> AppConfig {
        AppConfig {
            workspace: workspace.display().to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn show_finds_workspace_skill() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("skills").join("weather");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("SKILL.md"), "# Weather\n").unwrap();

        assert!(show(&config_for(tmp.path()), "weather").is_ok());
    }

    #[test]
    fn show_unknown_skill_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = show(&config_for(tmp.path()), "missing").unwrap_err();
        assert_eq!(err.to_string(), "Skill 'missing' not found");
    }
}
