use std::path::Path;

use anyhow::{bail, Result};

use camp::{check_templates, CampError};

use super::{emit, Session};

pub fn cmd_check(directory: &Path, json: bool, verbose: u8) -> Result<()> {
    let session = Session::open(directory, json, verbose)?;

    if json {
        let _ = emit(serde_json::json!({
            "event": "start",
            "command": "check",
            "model": session.workspace.model().display().to_string(),
        }));
    } else {
        println!("Checking {}", session.workspace.model().display());
    }

    let model = match session.load_model() {
        Ok(model) => model,
        Err(err) => {
            if let Some(CampError::InvalidModel { warnings }) = err.downcast_ref::<CampError>() {
                for warning in warnings {
                    if json {
                        let _ = emit(serde_json::json!({
                            "event": "warning",
                            "command": "check",
                            "path": warning.path().to_string(),
                            "message": warning.to_string(),
                        }));
                    } else {
                        println!("  ✗ {}", warning);
                    }
                }
                finish(json, false, warnings.len());
                bail!("model has {} problem(s)", warnings.len());
            }
            return Err(err);
        }
    };

    if !json {
        println!("  ✓ model: {} component(s)", model.components().count());
    }

    let result = check_templates(&session.file_system(), &model, session.workspace.root());
    for missing in &result.missing {
        if json {
            let _ = emit(serde_json::json!({
                "event": "missing_template",
                "command": "check",
                "component": missing.component,
                "variable": missing.variable,
                "reference": missing.reference,
                "path": missing.path.display().to_string(),
            }));
        } else {
            println!("  ✗ {}", missing);
        }
    }
    if !json && result.is_success() {
        println!("  ✓ templates: {} reference(s) found", result.checked);
    }

    finish(json, result.is_success(), result.missing.len());
    if !result.is_success() {
        bail!("{} template file(s) missing", result.missing.len());
    }
    Ok(())
}

fn finish(json: bool, success: bool, problems: usize) {
    if json {
        let _ = emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "success": success,
            "problems": problems,
        }));
    } else if success {
        println!("\nAll checks passed");
    } else {
        println!("\n{} problem(s) found", problems);
    }
}
