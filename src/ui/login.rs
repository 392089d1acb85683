use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::spinner_frame;
use super::status::render_status;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::auth::AuthState;

const LOGO: [&str; 2] = ["App Fotos", "IE Gornal"];

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Outer block with double border
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let inner = area.inner(Margin::new(2, 1));
    let [logo_area, _, dialog_area, status_area, _, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Length(if app.status.is_some() { 3 } else { 0 }),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let logo = Paragraph::new(vec![
        Line::from(Span::styled(LOGO[0], Style::default().fg(COLOR_HEADER).bold())),
        Line::from(Span::styled(LOGO[1], Style::default().fg(COLOR_DIM))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(logo, logo_area);

    let dialog_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let spinner = spinner_frame(app.tick_count);
    let mut lines = Vec::new();
    match &app.auth {
        AuthState::Unauthenticated => {
            lines.push(Line::from(Span::styled(
                "[Enter] Connectar amb Google",
                Style::default().fg(COLOR_ACCENT).bold(),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Usa el teu email @ie-gornal.cat per connectar-te",
                Style::default().fg(COLOR_DIM),
            )));
        }
        AuthState::AwaitingCallback { auth_url } => {
            lines.push(Line::from(format!("{} {}", spinner, app.auth.label())));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Si no s'ha obert el navegador, visita:",
                Style::default().fg(COLOR_DIM),
            )));
            lines.push(Line::from(Span::styled(
                auth_url.as_str(),
                Style::default().fg(COLOR_ACCENT),
            )));
        }
        AuthState::ExchangingCode => {
            lines.push(Line::from(format!("{} {}", spinner, app.auth.label())));
        }
        AuthState::Authenticated(_) => {
            lines.push(Line::from("✓ Connectat correctament!"));
        }
    }

    let para = Paragraph::new(lines)
        .block(dialog_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let dialog_area = dialog_area.inner(Margin::new(inner.width.saturating_sub(72) / 2, 0));
    frame.render_widget(para, dialog_area);

    if let Some(status) = &app.status {
        let status_area = status_area.inner(Margin::new(inner.width.saturating_sub(72) / 2, 0));
        render_status(frame, status_area, status);
    }

    let footer = Paragraph::new("[Enter] Connectar  [Q] Sortir")
        .style(Style::default().fg(COLOR_DIM))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}
