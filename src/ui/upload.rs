use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS};
use crate::app::{App, Focus};

/// Upload panel for the selected folder: path input, progress and hint.
pub fn render_upload_panel(frame: &mut Frame, area: Rect, app: &App) {
    let Some(folder) = app.selected_folder() else {
        return;
    };
    let focused = app.focus == Focus::PathInput;

    let title = Line::from(vec![
        Span::raw(" Carpeta seleccionada: "),
        Span::styled(folder.name.as_str(), Style::default().fg(COLOR_ACCENT).bold()),
        Span::raw(" "),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { COLOR_ACCENT } else { COLOR_BORDER }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_area, action_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let cursor = if focused && !app.uploading { "█" } else { "" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("Ruta: ", Style::default().fg(COLOR_DIM)),
        Span::styled(app.path_input.as_str(), Style::default().fg(COLOR_HEADER)),
        Span::styled(cursor, Style::default().fg(COLOR_ACCENT)),
    ]));
    frame.render_widget(input, input_area);

    match app.upload_progress.filter(|_| app.uploading) {
        Some((done, total)) => {
            let ratio = if total == 0 {
                0.0
            } else {
                done as f64 / total as f64
            };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(COLOR_SUCCESS))
                .ratio(ratio.clamp(0.0, 1.0))
                .label(format!(
                    "{} Pujant... {}/{}",
                    spinner_frame(app.tick_count),
                    done,
                    total
                ));
            frame.render_widget(gauge, action_area);
        }
        None => {
            let action = if focused {
                "Escriu la ruta d'una foto o d'una carpeta i prem Enter"
            } else {
                "[U] Clica per seleccionar fotos"
            };
            frame.render_widget(
                Paragraph::new(action).style(Style::default().fg(COLOR_HEADER).bold()),
                action_area,
            );
        }
    }

    let hint = Paragraph::new(format!(
        "Les fotos es guardaran directament a la carpeta \"{}\"",
        folder.name
    ))
    .style(Style::default().fg(COLOR_DIM))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}
