//! Screen buffer for the 16×2 character display.
//!
//! Lines are stored already padded to the full display width, so the
//! buffer content is exactly what the hardware will show.

use heapless::String;

/// Number of character rows on the display
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns on the display
pub const SCREEN_COLS: usize = 16;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for the character display
///
/// Holds the current display content and a dirty flag so the rendering
/// layer only touches the hardware when something changed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Screen {
    /// Current display content, padded to LINE_LEN columns
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new blank screen
    pub fn new() -> Self {
        let mut screen = Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: true,
        };
        for row in 0..SCREEN_ROWS {
            screen.pad_line(row, 0);
        }
        screen
    }

    /// Blank both rows
    pub fn clear(&mut self) {
        for row in 0..SCREEN_ROWS {
            self.lines[row].clear();
            self.pad_line(row, 0);
        }
        self.dirty = true;
    }

    /// Write a line left-justified, space-padded to the full width.
    ///
    /// Text longer than the display width is clipped at the right edge,
    /// as on the device.
    pub fn print_line(&mut self, row: usize, text: &str) {
        if row >= SCREEN_ROWS {
            return;
        }
        self.lines[row].clear();
        let mut written = 0;
        for ch in text.chars().take(LINE_LEN) {
            let _ = self.lines[row].push(ch);
            written += 1;
        }
        self.pad_line(row, written);
        self.dirty = true;
    }

    /// Write a line centered in the full width.
    ///
    /// Padding splits evenly; an odd remainder puts the smaller pad on
    /// the left.
    pub fn print_line_centered(&mut self, row: usize, text: &str) {
        if row >= SCREEN_ROWS {
            return;
        }
        let len = text.chars().count().min(LINE_LEN);
        let left_pad = (LINE_LEN - len) / 2;

        self.lines[row].clear();
        for _ in 0..left_pad {
            let _ = self.lines[row].push(' ');
        }
        for ch in text.chars().take(LINE_LEN) {
            let _ = self.lines[row].push(ch);
        }
        self.pad_line(row, left_pad + len);
        self.dirty = true;
    }

    /// Get the content of a row, always exactly LINE_LEN characters
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Check if the screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark the screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn pad_line(&mut self, row: usize, used: usize) {
        for _ in used..LINE_LEN {
            let _ = self.lines[row].push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_screen_is_blank_and_dirty() {
        let screen = Screen::new();
        assert_eq!(screen.line(0), Some("                "));
        assert_eq!(screen.line(1), Some("                "));
        assert!(screen.is_dirty());
    }

    #[test]
    fn print_line_pads_to_full_width() {
        let mut screen = Screen::new();
        screen.print_line(0, "1: Set Alarm");
        assert_eq!(screen.line(0), Some("1: Set Alarm    "));
    }

    #[test]
    fn print_line_clips_long_text() {
        let mut screen = Screen::new();
        screen.print_line(1, "Error. Restart Device.");
        assert_eq!(screen.line(1), Some("Error. Restart D"));
    }

    #[test]
    fn centered_line_splits_padding_evenly() {
        let mut screen = Screen::new();
        screen.print_line_centered(0, "Set Hour");
        assert_eq!(screen.line(0), Some("    Set Hour    "));
    }

    #[test]
    fn centered_line_puts_smaller_pad_left() {
        let mut screen = Screen::new();
        screen.print_line_centered(0, "Confirm Time");
        // 4 columns of padding, 2 left and 2 right; an odd count leans left
        assert_eq!(screen.line(0), Some("  Confirm Time  "));

        screen.print_line_centered(1, "Set Day of Week");
        assert_eq!(screen.line(1), Some("Set Day of Week "));
    }

    #[test]
    fn out_of_range_row_is_ignored() {
        let mut screen = Screen::new();
        screen.mark_clean();
        screen.print_line(2, "nope");
        assert!(!screen.is_dirty());
    }

    #[test]
    fn dirty_tracking() {
        let mut screen = Screen::new();
        screen.mark_clean();
        assert!(!screen.is_dirty());
        screen.print_line(0, "x");
        assert!(screen.is_dirty());
        screen.mark_clean();
        screen.clear();
        assert!(screen.is_dirty());
    }
}
