use std::path::Path;

use anyhow::Result;

use camp::domain::ports::{NoopEventSink, RealizeEventSink};
use camp::{JsonEventSink, RealizeUseCase};

use super::Session;

pub fn cmd_realize(directory: &Path, json: bool, verbose: u8) -> Result<()> {
    let session = Session::open(directory, json, verbose)?;
    let model = session.load_model()?;
    let files = session.configuration_files()?;

    if files.is_empty() && !json {
        println!(
            "No configuration found in {}",
            session.workspace.output().display()
        );
        return Ok(());
    }

    let json_sink;
    let noop_sink = NoopEventSink;
    let events: &dyn RealizeEventSink = if json {
        json_sink = JsonEventSink::stdout();
        &json_sink
    } else {
        &noop_sink
    };

    let use_case = RealizeUseCase::new(session.file_system());
    for (index, path) in &files {
        let configuration = session.load_configuration(&model, path)?;
        let destination = session.workspace.destination(*index);
        let report = use_case.build_with_events(
            &configuration,
            *index,
            session.workspace.root(),
            &destination,
            events,
        )?;

        if !json {
            println!(
                "✓ config_{}: {} instance(s), {} file(s), {} substitution(s) -> {}",
                index,
                report.instances.len(),
                report.file_count(),
                report.substitutions,
                destination.display()
            );
        }
    }

    if !json {
        println!("\nRealized {} configuration(s)", files.len());
    }
    Ok(())
}
