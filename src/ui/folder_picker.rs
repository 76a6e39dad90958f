//! Folder Picker Overlay rendering
//!
//! Draws the destination folder picker: a centered dialog with the query
//! line, the fuzzy-filtered folders with matched characters highlighted and
//! a key hint line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::{FolderPickerState, MAX_VISIBLE_ROWS};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER, COLOR_MATCH,
};

/// Dialog title
pub const PICKER_TITLE: &str = "Select destination folder (fuzzy search on path/name)";

/// Shown on the query line while it is empty
pub const QUERY_PLACEHOLDER: &str = "type to filter";

/// Dialog width: 80% of the terminal, between 40 and 120 columns, never
/// wider than the terminal itself.
fn calculate_dialog_width(area_width: u16) -> u16 {
    let preferred = (area_width as u32 * 80 / 100) as u16;
    preferred.clamp(40, 120).min(area_width)
}

/// Calculate dialog height based on content
fn calculate_dialog_height(visible_count: usize, area_height: u16) -> u16 {
    // 2 (borders) + 1 (query) + 1 (more above) + rows + 1 (more below) + 1 (hint)
    let content_height = (visible_count as u16) + 6;
    content_height.min(area_height)
}

/// Render the folder picker dialog centered in the frame.
///
/// `subject` names the file being moved and is shown top right.
pub fn render_folder_picker(frame: &mut Frame, state: &FolderPickerState, subject: &str) {
    let area = frame.area();

    let visible_count = state.total_matches().clamp(1, MAX_VISIBLE_ROWS);
    let dialog_width = calculate_dialog_width(area.width);
    let dialog_height = calculate_dialog_height(visible_count, area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut block = Block::default().title(Span::styled(
        format!(" {} ", PICKER_TITLE),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    if !subject.is_empty() {
        block = block.title(
            Line::from(Span::styled(
                format!(" '{}' ", subject),
                Style::default().fg(COLOR_DIM),
            ))
            .right_aligned(),
        );
    }

    let block = block
        .title_bottom(Span::styled(
            format!(" {}/{} ", state.total_matches(), state.items.len()),
            Style::default().fg(COLOR_DIM),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    frame.render_widget(block, dialog_area);

    let inner = Rect {
        x: dialog_area.x + 2,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(4),
        height: dialog_area.height.saturating_sub(2),
    };
    let available_width = inner.width as usize;

    let mut lines: Vec<Line> = Vec::new();

    // Query line
    if state.query.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(QUERY_PLACEHOLDER, Style::default().fg(COLOR_DIM)),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(state.query.clone(), Style::default().fg(COLOR_HEADER)),
        ]));
    }

    if state.total_matches() == 0 {
        let message = if state.items.is_empty() {
            "No folders available".to_string()
        } else {
            format!("No folders matching \"{}\"", state.query)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(message, Style::default().fg(COLOR_DIM))));
    } else {
        if state.has_more_above() {
            lines.push(Line::from(Span::styled(
                format!("  {} more above", state.scroll_offset),
                Style::default().fg(COLOR_DIM),
            )));
        } else {
            lines.push(Line::from(""));
        }

        for (item, filtered, is_selected) in state.visible_rows() {
            let marker_style = if is_selected {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let label_style = if is_selected {
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };

            let mut spans = vec![Span::styled(
                if is_selected { "▸ " } else { "  " },
                marker_style,
            )];
            spans.extend(highlight_label(&item.label, &filtered.matched, label_style));

            // Full path on the right when there is room
            let used = 2 + item.label.width() + 2;
            let remaining = available_width.saturating_sub(used);
            if remaining > 8 {
                let path = item.full_path.display().to_string();
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    truncate_start(&path, remaining),
                    Style::default().fg(COLOR_DIM),
                ));
            }

            lines.push(Line::from(spans));
        }

        let below = state.more_below();
        if below > 0 {
            lines.push(Line::from(Span::styled(
                format!("  {} more below", below),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    // Hint line pinned to the bottom of the dialog
    let hint = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(COLOR_ACCENT)),
        Span::styled(": navigate  ", Style::default().fg(COLOR_DIM)),
        Span::styled("Enter", Style::default().fg(COLOR_ACCENT)),
        Span::styled(": move here  ", Style::default().fg(COLOR_DIM)),
        Span::styled("Esc", Style::default().fg(COLOR_ACCENT)),
        Span::styled(": cancel", Style::default().fg(COLOR_DIM)),
    ]);
    let body_height = inner.height.saturating_sub(1);
    lines.truncate(body_height as usize);

    let content = Paragraph::new(lines).style(Style::default().bg(COLOR_DIALOG_BG));
    frame.render_widget(
        content,
        Rect {
            height: body_height,
            ..inner
        },
    );
    if inner.height > 0 {
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().bg(COLOR_DIALOG_BG)),
            Rect {
                y: inner.y + body_height,
                height: 1,
                ..inner
            },
        );
    }
}

/// Split a label into spans, styling matched characters.
fn highlight_label<'a>(label: &'a str, matched: &[usize], base: Style) -> Vec<Span<'a>> {
    if matched.is_empty() {
        return vec![Span::styled(label, base)];
    }

    let match_style = base.fg(COLOR_MATCH).add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_matched = false;

    for (i, c) in label.chars().enumerate() {
        let is_match = matched.contains(&i);
        if is_match != run_matched && !run.is_empty() {
            let style = if run_matched { match_style } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_matched = is_match;
        run.push(c);
    }
    if !run.is_empty() {
        let style = if run_matched { match_style } else { base };
        spans.push(Span::styled(run, style));
    }
    spans
}

/// Keep the end of `text` within `max_width` columns, prefixing "…" when
/// something was cut. The tail of a path is the informative part.
fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut width = 0;
    let mut kept: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        kept.push(c);
    }
    kept.reverse();
    format!("…{}", kept.into_iter().collect::<String>())
}

// ============================================================================
// Tests
// ============================================================================
