//! Folders screen: header, status line, folder grid and upload panel.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{grid_columns_for_width, truncate_string};
use super::status::render_status;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LOGOUT, COLOR_SELECTED_BG,
    COLOR_WARNING,
};
use super::upload::render_upload_panel;
use crate::app::{App, Focus};

/// Height of one grid cell including its border.
const CELL_HEIGHT: u16 = 3;

pub fn render_folders_screen(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let [header_area, status_area, grid_area, upload_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(if app.status.is_some() { 3 } else { 0 }),
        Constraint::Min(4),
        Constraint::Length(if app.selected_folder.is_some() { 7 } else { 0 }),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app);

    if let Some(status) = &app.status {
        render_status(frame, status_area, status);
    }

    render_grid(frame, grid_area, app);

    if app.selected_folder.is_some() {
        render_upload_panel(frame, upload_area, app);
    }

    render_footer(frame, footer_area, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(18)]).areas(inner);

    let email = app.user_email().unwrap_or("");
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "App Fotos IE Gornal",
            Style::default().fg(COLOR_HEADER).bold(),
        )),
        Line::from(Span::styled(email, Style::default().fg(COLOR_DIM))),
    ]);
    frame.render_widget(title, left);

    let logout = Paragraph::new(Line::from(Span::styled(
        "[D] Desconnectar",
        Style::default().fg(COLOR_LOGOUT).bold(),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(logout, right);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(" Selecciona una carpeta ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if app.focus == Focus::Grid {
            COLOR_ACCENT
        } else {
            COLOR_BORDER
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.folders.is_empty() {
        let placeholder = Paragraph::new("Carregant carpetes...")
            .style(Style::default().fg(COLOR_WARNING));
        frame.render_widget(placeholder, inner);
        return;
    }

    let columns = grid_columns_for_width(inner.width);
    app.grid_columns = columns;

    let total_rows = app.folders.len().div_ceil(columns);
    let visible_rows = ((inner.height / CELL_HEIGHT) as usize).max(1);
    let cursor_row = app.grid_cursor / columns;
    let first_row = if cursor_row >= visible_rows {
        cursor_row + 1 - visible_rows
    } else {
        0
    };

    let cell_width = inner.width / columns as u16;
    for row in first_row..total_rows.min(first_row + visible_rows) {
        for col in 0..columns {
            let index = row * columns + col;
            let Some(folder) = app.folders.get(index) else {
                break;
            };
            let cell = Rect::new(
                inner.x + col as u16 * cell_width,
                inner.y + (row - first_row) as u16 * CELL_HEIGHT,
                cell_width,
                CELL_HEIGHT,
            );

            let selected = app.selected_folder == Some(index);
            let focused = app.focus == Focus::Grid && app.grid_cursor == index;

            let mut style = Style::default().fg(COLOR_HEADER);
            if selected {
                style = style.bg(COLOR_SELECTED_BG).bold();
            }
            let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };

            let label = truncate_string(&folder.name, cell_width.saturating_sub(2) as usize);
            let para = Paragraph::new(label).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if focused {
                        BorderType::Thick
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(Style::default().fg(border_color)),
            );
            frame.render_widget(para, cell);
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let keys = match app.focus {
        Focus::Grid => "[←↑↓→] Moure  [Enter] Seleccionar  [U] Pujar fotos  [R] Recarregar  [D] Desconnectar  [Q] Sortir",
        Focus::PathInput => "[Enter] Pujar  [Esc] Tornar a les carpetes",
    };
    let footer = Paragraph::new(keys).style(Style::default().fg(COLOR_DIM));
    frame.render_widget(footer, area);
}
