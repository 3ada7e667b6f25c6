use std::path::Path;

use anyhow::Result;
use carousel_core::{replay, AppConfig, SettleCommand};
use tracing::info;

pub fn run(config: &AppConfig, path: &Path, json: bool) -> Result<()> {
    let script = replay::load_script(path)?;
    info!(
        steps = script.steps.len(),
        items = script.item_count,
        "replaying script"
    );

    let frames = replay::replay(&script, &config.carousel)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
        return Ok(());
    }

    for frame in &frames {
        println!("{}", frame);
    }

    if let Some(last) = frames.last() {
        println!();
        println!(
            "Final index: {} of {} (translate {}%)",
            last.index,
            script.item_count,
            SettleCommand::to_index(last.index).translate_percent
        );
    }

    Ok(())
}
