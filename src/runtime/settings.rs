use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Target, WriteStyle};
use log::LevelFilter;

use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("cadenza: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("cadenza: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Open the log file for appending, creating its directory.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Level to install: the configured one when there is a file to write to,
/// `Off` otherwise, since stderr shares the screen with the UI.
pub fn effective_level(settings: &config::Settings, has_file: bool) -> LevelFilter {
    if has_file {
        settings.log_level().unwrap_or(LevelFilter::Warn)
    } else {
        LevelFilter::Off
    }
}

/// Install the `colog` logger, writing to the configured log file.
/// `RUST_LOG` still wins over `logging.level`.
pub fn init_logging(settings: &config::Settings) {
    let file = settings
        .log_path()
        .and_then(|path| match open_log_file(&path) {
            Ok(f) => Some(f),
            Err(e) => {
                eprintln!("cadenza: cannot open log file {}, logging disabled: {e}", path.display());
                None
            }
        });

    let mut clog = colog::default_builder();
    clog.filter(None, effective_level(settings, file.is_some()));
    if let Some(f) = file {
        clog.write_style(WriteStyle::Never);
        clog.target(Target::Pipe(Box::new(f)));
        clog.parse_default_env();
    }
    clog.init();
}
