use std::path::PathBuf;

use agenda_core::AgendaConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(file: Option<PathBuf>, set_data_file: Option<PathBuf>) -> Result<()> {
    let config_path = AgendaConfig::config_path()?;
    let mut config = AgendaConfig::load()?;

    if let Some(data_file) = set_data_file {
        config.data_file = data_file;
        config.save()?;
        println!("{}", format!("Saved data_file = {}", config.data_file.display()).green());
        println!();
    }

    let events_path = file.unwrap_or_else(|| config.data_path());

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", events_path.display());

    Ok(())
}
