//! UI rendering for the terminal front-end.
//!
//! Everything drawn here is read from a `SurfaceState` snapshot; rendering
//! never talks to the controller.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::audio::Volume;
use crate::config::UiSettings;
use crate::player::PlaybackState;
use crate::runtime::SurfaceState;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("enter", "play selected");
    map.insert("space/p", "play/pause");
    map.insert("s", "stop");
    map.insert("h/l", "prev/next");
    // H/L is filled in from config.
    map.insert("-/+", "volume");
    map.insert("d/D", "remove/clear");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_step: u64) -> String {
    let order = [
        "j/k", "enter", "space/p", "s", "h/l", "H/L", "-/+", "d/D", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] seek -/+{}s", seek_step))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn status_text(state: &SurfaceState, playback: PlaybackState, volume: Volume) -> String {
    let mut parts: Vec<String> = Vec::new();

    let now = match (playback, state.active.and_then(|i| state.rows.get(i))) {
        (PlaybackState::Stopped, _) | (_, None) => "Stopped".to_string(),
        (PlaybackState::Playing, Some(title)) => format!("Playing: {title}"),
        (PlaybackState::Paused, Some(title)) => format!("Paused: {title}"),
    };
    parts.push(now);
    parts.push(format!("Volume: {}%", volume.percent()));
    parts.push(format!("Tracks: {}", state.rows.len()));

    if let Some(msg) = &state.message {
        parts.push(msg.clone());
    }

    parts.join(" • ")
}

fn padded(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the whole UI into `frame`.
pub fn draw(
    frame: &mut Frame,
    state: &SurfaceState,
    playback: PlaybackState,
    volume: Volume,
    ui_settings: &UiSettings,
    seek_step: u64,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadenza ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(state, playback, volume))
        .block(padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Keep the selected row near the middle when the list overflows.
    let total = state.rows.len();
    let list_height = chunks[2].height.saturating_sub(2) as usize;
    let sel_pos = state.selected.unwrap_or(0);
    let (start, end) = if total <= list_height || list_height == 0 {
        (0, total)
    } else {
        let half = list_height / 2;
        let mut start = sel_pos.saturating_sub(half);
        if start + list_height > total {
            start = total - list_height;
        }
        (start, start + list_height)
    };

    let show_active = playback != PlaybackState::Stopped;
    let items: Vec<ListItem> = state.rows[start..end]
        .iter()
        .enumerate()
        .map(|(offset, title)| {
            let row = start + offset;
            if show_active && state.active == Some(row) {
                ListItem::new(format!("♪ {title}")).bold()
            } else {
                ListItem::new(format!("  {title}"))
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" playlist "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if let Some(sel) = state.selected.filter(|&s| s >= start && s < end) {
        list_state.select(Some(sel - start));
    }
    frame.render_stateful_widget(list, chunks[2], &mut list_state);

    let label = if state.status_text.is_empty() {
        "--:-- of --:--".to_string()
    } else {
        state.status_text.clone()
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .gauge_style(Style::default().add_modifier(Modifier::BOLD))
        .ratio(state.progress_ratio())
        .label(label);
    frame.render_widget(gauge, chunks[3]);

    let footer = Paragraph::new(controls_text(seek_step))
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_includes_seek_step() {
        let text = controls_text(7);
        assert!(text.contains("[H/L] seek -/+7s"));
        assert!(text.starts_with("[j/k] up/down"));
        assert!(text.ends_with("[q] quit"));
    }

    #[test]
    fn status_text_names_the_active_row_only_while_loaded() {
        let state = SurfaceState {
            rows: vec!["a".into(), "b".into()],
            active: Some(1),
            ..Default::default()
        };
        let vol = Volume::new(0.5);

        let playing = status_text(&state, PlaybackState::Playing, vol);
        assert!(playing.starts_with("Playing: b"));
        assert!(playing.contains("Volume: 50%"));

        let paused = status_text(&state, PlaybackState::Paused, vol);
        assert!(paused.starts_with("Paused: b"));

        let stopped = status_text(&state, PlaybackState::Stopped, vol);
        assert!(stopped.starts_with("Stopped"));
    }

    #[test]
    fn status_text_appends_the_message() {
        let state = SurfaceState {
            message: Some("boom".into()),
            ..Default::default()
        };
        let text = status_text(&state, PlaybackState::Stopped, Volume::default());
        assert!(text.ends_with("boom"));
    }
}
