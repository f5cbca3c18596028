//! `clawprompt status` — Show workspace and configuration status.

use clawprompt_agent::BOOTSTRAP_FILES;
use clawprompt_config::AppConfig;
use clawprompt_memory::MemoryStore;
use clawprompt_skills::SkillsLoader;

pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = config.workspace_dir();
    let memory = MemoryStore::new(&workspace);
    let loader = SkillsLoader::new(&workspace, config.builtin_skills_dir());

    let long_term = memory.read_long_term()?;
    let available = loader.list_skills(true)?.len();
    let discovered = loader.list_skills(false)?.len();
    let always = loader.always_skills()?;

    println!("🦀 clawprompt Status");
    println!("==================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Workspace:    {}", workspace.display());
    println!(
        "  Skills mode:  {}",
        if config.context.compact_skills { "compact" } else { "progressive" }
    );
    println!(
        "  Memory:       {} ({} bytes)",
        memory.memory_file().display(),
        long_term.len()
    );
    println!("  History:      {}", memory.history_file().display());
    println!("  Skills:       {available} available / {discovered} discovered");
    if !always.is_empty() {
        println!("  Always-on:    {}", always.join(", "));
    }

    println!();
    for name in BOOTSTRAP_FILES {
        let mark = if workspace.join(name).is_file() { "✅" } else { "  " };
        println!("  {mark} {name}");
    }

    if !workspace.exists() {
        println!("\n  ⚠️  Workspace directory does not exist yet");
    }

    Ok(())
}
