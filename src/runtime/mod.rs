use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::RodioEngine;
use crate::library::{LoftyProbe, Playlist};
use crate::player::Controller;

mod event_loop;
mod settings;
mod startup;
mod surface;

pub use surface::{Surface, SurfaceState};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let settings = settings::load_settings();

    if args.iter().any(|a| a == "--dump-config") {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    settings::init_logging(&settings);

    let paths: Vec<PathBuf> = args.iter().map(PathBuf::from).collect();

    let engine = RodioEngine::open_default()?;
    let surface = Surface::new();
    let playlist = Playlist::with_view(Box::new(surface.clone()));
    let mut controller = Controller::new(
        Box::new(engine),
        Box::new(LoftyProbe),
        Box::new(surface.clone()),
        playlist,
        &settings.playback,
    );

    let added = startup::load_playlist(&mut controller, &surface, &paths, &settings);
    info!("starting with {added} tracks");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut controller, &surface);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
