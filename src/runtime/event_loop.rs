use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::error::{PlayerError, Result};
use crate::player::Controller;
use crate::ui;

use super::surface::Surface;

/// Longest wait for input between redraws.
const FRAME: Duration = Duration::from_millis(50);

/// How long to wait for input: until the next playback task is due, capped
/// at one frame.
pub fn poll_timeout(next_deadline: Option<Duration>, now: Duration) -> Duration {
    next_deadline.map_or(FRAME, |due| due.saturating_sub(now).min(FRAME))
}

/// Main terminal event loop: runs due playback tasks, draws, and handles
/// keys. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    controller: &mut Controller,
    surface: &Surface,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();

    loop {
        if let Err(e) = controller.poll(started.elapsed()) {
            report(surface, &e);
        }

        terminal.draw(|f| {
            ui::draw(
                f,
                &surface.state(),
                controller.state(),
                controller.volume(),
                &settings.ui,
                settings.playback.seek_step_seconds,
            )
        })?;

        let timeout = poll_timeout(controller.scheduler().next_deadline(), started.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, controller, surface) {
                    break;
                }
            }
        }
    }

    controller.stop();
    Ok(())
}

/// Apply one key press. Returns `true` when the user asked to quit.
///
/// Playback and playlist actions replace the status message with their
/// outcome; moving the cursor leaves it alone.
pub fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    controller: &mut Controller,
    surface: &Surface,
) -> bool {
    let step = i64::try_from(settings.playback.seek_step_seconds).unwrap_or(i64::MAX);
    let volume_step = settings.playback.volume_step;

    let result: Result<()> = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('j') | KeyCode::Down => {
            surface.move_selection(1);
            return false;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            surface.move_selection(-1);
            return false;
        }
        KeyCode::Enter => controller.play_selected(),
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            controller.toggle_pause();
            Ok(())
        }
        KeyCode::Char('s') => {
            controller.stop();
            Ok(())
        }
        KeyCode::Char('l') => controller.next(),
        KeyCode::Char('h') => controller.previous(),
        KeyCode::Char('L') => controller.seek_by(step),
        KeyCode::Char('H') => controller.seek_by(-step),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            controller.nudge_volume(volume_step);
            Ok(())
        }
        KeyCode::Char('-') => {
            controller.nudge_volume(-volume_step);
            Ok(())
        }
        KeyCode::Char('d') => match surface.selected() {
            Some(i) => controller.remove_at(i).map(|_| ()),
            None => Err(PlayerError::NothingSelected),
        },
        KeyCode::Char('D') => {
            controller.clear_playlist();
            Ok(())
        }
        _ => return false,
    };

    match result {
        Ok(()) => surface.clear_message(),
        Err(e) => report(surface, &e),
    }
    false
}

fn report(surface: &Surface, e: &PlayerError) {
    warn!("{e}");
    surface.set_message(e.to_string());
}
