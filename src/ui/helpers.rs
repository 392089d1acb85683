//! Small rendering helpers shared by the screens.

/// Braille spinner frames.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a tick count. Advances every 6 ticks (about 100ms).
pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[((tick_count / 6) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Folder grid breakpoints, in terminal columns.
pub mod breakpoints {
    /// Below this width the grid has one column
    pub const TWO_COLUMNS: u16 = 60;
    /// From this width on the grid has three columns
    pub const THREE_COLUMNS: u16 = 100;
}

/// Number of grid columns for an area `width` cells wide.
pub fn grid_columns_for_width(width: u16) -> usize {
    if width >= breakpoints::THREE_COLUMNS {
        3
    } else if width >= breakpoints::TWO_COLUMNS {
        2
    } else {
        1
    }
}

/// Truncate to `max` characters, ending with an ellipsis when cut.
pub fn truncate_string(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_for_width() {
        assert_eq!(grid_columns_for_width(40), 1);
        assert_eq!(grid_columns_for_width(60), 2);
        assert_eq!(grid_columns_for_width(99), 2);
        assert_eq!(grid_columns_for_width(120), 3);
    }

    #[test]
    fn test_spinner_frame_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(6), SPINNER_FRAMES[1]);
        assert_eq!(spinner_frame(60), SPINNER_FRAMES[0]);
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("FOTOS MESTRES", 20), "FOTOS MESTRES");
        assert_eq!(truncate_string("FOTOS MESTRES", 6), "FOTOS…");
        assert_eq!(truncate_string("abc", 0), "");
    }
}
