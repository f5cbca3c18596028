//! `clawprompt prompt` — Print the system prompt.

use clawprompt_config::AppConfig;

pub fn run(
    config: &AppConfig,
    skills: &[String],
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let builder = super::context_builder(config, compact);
    let skill_names = (!skills.is_empty()).then_some(skills);
    let prompt = builder.build_system_prompt(skill_names)?;
    println!("{prompt}");
    Ok(())
}
