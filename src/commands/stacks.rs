use std::path::Path;

use anyhow::Result;

use super::{emit, Session};

pub fn cmd_stacks(directory: &Path, json: bool, verbose: u8) -> Result<()> {
    let session = Session::open(directory, json, verbose)?;
    let model = session.load_model()?;

    for (index, path) in session.configuration_files()? {
        let configuration = session.load_configuration(&model, &path)?;
        if !json {
            println!("config_{}:", index);
        }
        for stack in configuration.stacks() {
            let names: Vec<&str> = stack.iter().map(|instance| instance.name()).collect();
            if json {
                let _ = emit(serde_json::json!({
                    "event": "stack",
                    "configuration": index,
                    "instances": names,
                }));
            } else {
                println!("  {}", names.join(" -> "));
            }
        }
    }
    Ok(())
}
