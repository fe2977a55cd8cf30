//! `PlaybackEngine` backed by a `rodio` output stream.
//!
//! Every `play` builds a fresh paused `Sink` for the loaded file, skips to the
//! requested offset and starts it. Seeking is therefore "play from here" and
//! the sink position counts from the skip point, not from the file start.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::error::EngineError;

use super::engine::PlaybackEngine;

pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    loaded: Option<PathBuf>,
    volume: f32,
}

impl RodioEngine {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            loaded: None,
            volume: 1.0,
        })
    }

    /// Create a paused `Sink` for `path` that starts playback at `start_at`.
    fn create_sink_at(&self, path: &Path, start_at: Duration) -> Result<Sink, EngineError> {
        let file = File::open(path).map_err(|source| EngineError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let source = Decoder::new(BufReader::new(file))
            .map_err(|source| EngineError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
            .skip_duration(start_at);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.pause();
        Ok(sink)
    }
}

impl PlaybackEngine for RodioEngine {
    fn load(&mut self, location: &Path) -> Result<(), EngineError> {
        self.stop();
        self.loaded = Some(location.to_path_buf());
        Ok(())
    }

    fn play(&mut self, start_secs: u64) -> Result<(), EngineError> {
        let path = self.loaded.clone().ok_or(EngineError::NothingLoaded)?;
        let new_sink = self.create_sink_at(&path, Duration::from_secs(start_secs))?;

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        new_sink.play();
        self.sink = Some(new_sink);
        debug!("engine: playing {:?} from {}s", path, start_secs);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(volume);
        }
    }

    fn position_millis(&self) -> u64 {
        self.sink
            .as_ref()
            .map_or(0, |s| u64::try_from(s.get_pos().as_millis()).unwrap_or(u64::MAX))
    }

    fn is_busy(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|s| !s.is_paused() && !s.empty())
    }
}
