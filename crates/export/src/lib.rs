//! Export of projection tables to disk.
//!
//! The dashboard sends [`ExportRequest`] (one table) or [`ExportAllRequest`]
//! (every module and scenario) events; [`ExportPlugin`] writes the files into
//! [`ExportSettings::output_dir`] and records the outcome in [`ExportLog`].

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use simulation::catalogue::all_scenario_tables;
use simulation::ProjectionTable;

pub mod atomic_write;
pub mod export_error;
pub mod export_settings;
pub mod format;

pub use export_error::ExportError;
pub use export_settings::ExportSettings;
pub use format::ExportFormat;

/// Write a single table.
#[derive(Event, Debug, Clone)]
pub struct ExportRequest {
    pub stem: String,
    pub title: String,
    pub table: ProjectionTable,
    pub format: ExportFormat,
}

/// Write every module x scenario table. `dir` overrides the configured
/// output directory.
#[derive(Event, Debug, Clone, Default)]
pub struct ExportAllRequest {
    pub dir: Option<PathBuf>,
    pub format: ExportFormat,
}

/// Outcome of the most recent export, shown in the dashboard status line.
#[derive(Resource, Debug, Clone, Default)]
pub struct ExportLog {
    pub last_written: Vec<PathBuf>,
    pub last_error: Option<String>,
    pub total_files: usize,
}

impl ExportLog {
    fn record(&mut self, result: Result<Vec<PathBuf>, ExportError>) {
        match result {
            Ok(paths) => {
                self.total_files += paths.len();
                self.last_written = paths;
                self.last_error = None;
            }
            Err(e) => {
                self.last_written.clear();
                self.last_error = Some(e.to_string());
            }
        }
    }
}

/// Render and write one table as `{dir}/{stem}.{ext}`.
pub fn export_table(
    dir: &Path,
    stem: &str,
    title: &str,
    table: &ProjectionTable,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    if table.is_empty() {
        return Err(ExportError::EmptyTable(stem.to_string()));
    }
    let body = format::render(format, title, table)?;
    let path = dir.join(format!("{stem}.{}", format.extension()));
    atomic_write::atomic_write(&path, body.as_bytes())?;
    Ok(path)
}

/// Write every catalogue entry into `dir`.
pub fn export_all(dir: &Path, format: ExportFormat) -> Result<Vec<PathBuf>, ExportError> {
    all_scenario_tables()
        .iter()
        .map(|entry| export_table(dir, &entry.stem, &entry.title, &entry.table, format))
        .collect()
}

pub fn handle_export_requests(
    mut requests: EventReader<ExportRequest>,
    settings: Res<ExportSettings>,
    mut log: ResMut<ExportLog>,
) {
    for req in requests.read() {
        let result = export_table(
            &settings.output_dir,
            &req.stem,
            &req.title,
            &req.table,
            req.format,
        );
        match &result {
            Ok(path) => info!("Exported '{}' to {}", req.title, path.display()),
            Err(e) => warn!("Export of '{}' failed: {}", req.title, e),
        }
        log.record(result.map(|p| vec![p]));
    }
}

pub fn handle_export_all_requests(
    mut requests: EventReader<ExportAllRequest>,
    settings: Res<ExportSettings>,
    mut log: ResMut<ExportLog>,
) {
    for req in requests.read() {
        let dir = req.dir.as_deref().unwrap_or(settings.output_dir.as_path());
        let result = export_all(dir, req.format);
        match &result {
            Ok(paths) => info!(
                "Exported {} {} tables to {}",
                paths.len(),
                req.format.label(),
                dir.display()
            ),
            Err(e) => warn!("Batch export to {} failed: {}", dir.display(), e),
        }
        log.record(result);
    }
}

pub struct ExportPlugin;

impl Plugin for ExportPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ExportSettings>() {
            app.insert_resource(ExportSettings::from_env());
        }
        app.init_resource::<ExportLog>()
            .add_event::<ExportRequest>()
            .add_event::<ExportAllRequest>()
            .add_systems(
                PostUpdate,
                (handle_export_requests, handle_export_all_requests),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::TableValue;
    use std::fs;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("resilience_export_lib_{name}"));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn one_row_table() -> ProjectionTable {
        ProjectionTable {
            columns: vec!["year".into(), "quality".into()],
            rows: vec![vec![TableValue::Integer(2025), TableValue::Number(100.0)]],
        }
    }

    #[test]
    fn test_export_table_writes_extension() {
        let dir = test_dir("single");
        let path = export_table(&dir, "demo", "Demo", &one_row_table(), ExportFormat::Json).unwrap();
        assert_eq!(path, dir.join("demo.json"));
        assert!(fs::read_to_string(&path).unwrap().contains("\"quality\""));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_empty_table_rejected() {
        let dir = test_dir("empty");
        let err = export_table(&dir, "nothing", "Nothing", &ProjectionTable::default(), ExportFormat::Csv)
            .unwrap_err();
        assert!(matches!(err, ExportError::EmptyTable(_)));
        assert!(!dir.join("nothing.csv").exists());
    }

    #[test]
    fn test_export_all_writes_every_entry() {
        let dir = test_dir("all");
        let paths = export_all(&dir, ExportFormat::Csv).unwrap();
        assert_eq!(paths.len(), 22);
        let neglect = fs::read_to_string(dir.join("infrastructure_neglect.csv")).unwrap();
        let mut lines = neglect.lines();
        assert_eq!(
            lines.next(),
            Some("year,quality,power_outage_risk,healthcare_risk,commute_delay,repair_cost")
        );
        assert_eq!(lines.next(), Some("2025,100,5,1,2,200"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_plugin_handles_request_event() {
        let dir = test_dir("plugin");
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(ExportSettings {
                output_dir: dir.clone(),
            })
            .add_plugins(ExportPlugin);

        app.world_mut().send_event(ExportRequest {
            stem: "demo".into(),
            title: "Demo".into(),
            table: one_row_table(),
            format: ExportFormat::Text,
        });
        app.update();

        let log = app.world().resource::<ExportLog>();
        assert_eq!(log.last_written, vec![dir.join("demo.txt")]);
        assert!(log.last_error.is_none());
        assert_eq!(log.total_files, 1);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_log_records_failure() {
        let mut log = ExportLog::default();
        log.record(Err(ExportError::EmptyTable("x".into())));
        assert!(log.last_error.as_deref().unwrap().contains("'x'"));
        assert_eq!(log.total_files, 0);
    }
}
