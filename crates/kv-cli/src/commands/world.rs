//! Dump the initial world as JSON.

pub fn run() -> Result<(), String> {
    let world = super::load_world()?;
    let json = serde_json::to_string_pretty(&world)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");
    Ok(())
}
