//! Keyboard handling and grid navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus, Screen};

impl App {
    /// Dispatch a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen() {
            Screen::Login => self.handle_login_key(key),
            Screen::Folders => match self.focus {
                Focus::Grid => self.handle_grid_key(key),
                Focus::PathInput => self.handle_input_key(key),
            },
        }
    }

    /// Append pasted text to the path input.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen() != Screen::Folders || self.uploading {
            return;
        }
        if self.selected_folder.is_some() {
            self.focus = Focus::PathInput;
        }
        if self.focus == Focus::PathInput {
            self.path_input.push_str(text.trim_end_matches(|c: char| c == '\n' || c == '\r'));
            self.mark_dirty();
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.start_login(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor_right(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_folder(self.grid_cursor),
            KeyCode::Char('u') | KeyCode::Tab => self.focus_path_input(),
            KeyCode::Char('r') => self.load_folders(),
            KeyCode::Char('d') => self.logout(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Grid,
            KeyCode::Enter => self.submit_upload(),
            _ if self.uploading => {}
            KeyCode::Backspace => {
                self.path_input.pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.path_input.clear();
            }
            KeyCode::Char(c) => self.path_input.push(c),
            _ => {}
        }
    }

    /// Focus the path input, or explain why an upload cannot start yet.
    pub fn focus_path_input(&mut self) {
        if self.selected_folder.is_none() {
            self.submit_upload();
            return;
        }
        self.focus = Focus::PathInput;
    }

    fn move_cursor_left(&mut self) {
        self.grid_cursor = self.grid_cursor.saturating_sub(1);
    }

    fn move_cursor_right(&mut self) {
        if self.grid_cursor + 1 < self.folders.len() {
            self.grid_cursor += 1;
        }
    }

    fn move_cursor_up(&mut self) {
        let columns = self.grid_columns.max(1);
        if self.grid_cursor >= columns {
            self.grid_cursor -= columns;
        }
    }

    fn move_cursor_down(&mut self) {
        let columns = self.grid_columns.max(1);
        if self.grid_cursor + columns < self.folders.len() {
            self.grid_cursor += columns;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::auth::AuthState;
    use crate::config::AppConfig;
    use crate::models::{Folder, Session, Severity};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn signed_in_app(folder_count: usize) -> (App, MockHttpClient) {
        let mock = MockHttpClient::new();
        let mut app = App::new(
            AppConfig::default().with_client_id("cid"),
            Arc::new(mock.clone()),
        );
        app.auth = AuthState::Authenticated(Session::new("T"));
        app.folders = (0..folder_count)
            .map(|i| Folder::new(format!("id{}", i), format!("F{}", i)))
            .collect();
        (app, mock)
    }

    #[test]
    fn test_grid_navigation_respects_columns() {
        let (mut app, _) = signed_in_app(7);
        app.grid_columns = 3;

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.grid_cursor, 3);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.grid_cursor, 6);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.grid_cursor, 6);
        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.grid_cursor, 3);
        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.grid_cursor, 4);
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.grid_cursor, 0);
    }

    #[test]
    fn test_enter_selects_and_clears_status() {
        let (mut app, _) = signed_in_app(3);
        app.set_status(crate::models::StatusMessage::success("Connectat correctament!"));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.selected_folder().map(|f| f.name.as_str()), Some("F1"));
        assert!(app.status.is_none());
    }

    #[test]
    fn test_upload_key_without_folder_reports_error() {
        let (mut app, mock) = signed_in_app(3);
        app.handle_key(key(KeyCode::Char('u')));

        assert_eq!(app.focus, Focus::Grid);
        let status = app.status.clone().unwrap();
        assert_eq!(status.text, "Selecciona una carpeta primer!");
        assert_eq!(status.severity, Severity::Error);
        assert_eq!(mock.request_count(), 0);
    }

    #[test]
    fn test_path_input_editing() {
        let (mut app, _) = signed_in_app(2);
        app.select_folder(0);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::PathInput);

        for c in "/tmp/x".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.path_input, "/tmp/");

        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.path_input, "/tmp/q");

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Grid);
    }

    #[test]
    fn test_paste_focuses_input_when_folder_selected() {
        let (mut app, _) = signed_in_app(1);
        app.handle_paste("/ignored");
        assert!(app.path_input.is_empty());

        app.select_folder(0);
        app.handle_paste("/home/mestre/fotos\n");
        assert_eq!(app.focus, Focus::PathInput);
        assert_eq!(app.path_input, "/home/mestre/fotos");
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _) = signed_in_app(0);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let (mut app, _) = signed_in_app(0);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_logout_key_clears_state() {
        let (mut app, _) = signed_in_app(2);
        app.select_folder(1);
        app.path_input = "/tmp".to_string();
        let before = app.generation();

        app.handle_key(key(KeyCode::Char('d')));

        assert_eq!(app.screen(), Screen::Login);
        assert!(app.folders.is_empty());
        assert!(app.selected_folder.is_none());
        assert!(app.path_input.is_empty());
        assert!(app.auth.access_token().is_none());
        assert_eq!(app.generation(), before + 1);
    }
}
