use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

mod batch_export;
mod cli;

use cli::Mode;

fn main() -> AppExit {
    let mode = match cli::parse_args(std::env::args().skip(1)) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("error: {e}\n\n{}", cli::USAGE);
            return AppExit::from_code(2);
        }
    };

    match mode {
        Mode::Help => {
            println!("{}", cli::USAGE);
            AppExit::Success
        }
        Mode::BatchExport { dir, format } => batch_export::run_batch_export(dir, format),
        Mode::Dashboard => run_dashboard(),
    }
}

fn run_dashboard() -> AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Systemic Resilience Simulator".to_string(),
                resolution: (1280.0, 860.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        // Redraw only on input; the dashboard has no animation.
        .insert_resource(WinitSettings::desktop_app())
        .add_plugins((
            simulation::SimulationPlugin,
            export::ExportPlugin,
            ui::UiPlugin,
        ))
        .add_systems(Startup, spawn_camera)
        .run()
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
