use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::theme::{COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS};
use crate::models::{Severity, StatusMessage};

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => COLOR_SUCCESS,
        Severity::Error => COLOR_ERROR,
        Severity::Info => COLOR_INFO,
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Error => "✗",
        Severity::Info => "ℹ",
    }
}

/// Render the status line inside a rounded box tinted by severity.
pub fn render_status(frame: &mut Frame, area: Rect, status: &StatusMessage) {
    let color = severity_color(status.severity);
    // Success texts already start with a check mark.
    let text = if status.text.starts_with('✓') {
        status.text.clone()
    } else {
        format!("{} {}", severity_icon(status.severity), status.text)
    };

    let para = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}
