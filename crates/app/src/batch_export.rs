//! Headless `--export` mode: build a window-less app with only the
//! simulation and export plugins, write every table once, and exit.

use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use export::{ExportAllRequest, ExportFormat, ExportLog, ExportSettings};

/// Assemble the headless app with `ExportAllRequest` already queued.
pub fn build_batch_app(dir: PathBuf, format: ExportFormat) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(ExportSettings { output_dir: dir })
        .add_plugins((simulation::SimulationPlugin, export::ExportPlugin));
    app.world_mut().send_event(ExportAllRequest { dir: None, format });
    app
}

/// Map the export log to a process exit status.
pub fn exit_status(log: Option<&ExportLog>) -> AppExit {
    match log {
        Some(log) if log.last_error.is_none() && !log.last_written.is_empty() => AppExit::Success,
        _ => AppExit::from_code(1),
    }
}

pub fn run_batch_export(dir: PathBuf, format: ExportFormat) -> AppExit {
    let mut app = build_batch_app(dir, format);
    app.add_plugins(LogPlugin::default());
    app.update();

    let log = app.world().get_resource::<ExportLog>();
    match log {
        Some(ExportLog {
            last_error: Some(e), ..
        }) => error!("Batch export failed: {}", e),
        Some(log) if !log.last_written.is_empty() => {
            info!("Batch export finished: {} files", log.last_written.len())
        }
        _ => error!("Batch export produced no files"),
    }
    exit_status(log)
}
