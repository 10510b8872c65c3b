// Output styling - role-to-color mapping for report lines

use console::{Color, Style};

/// Styles for the report's output roles
///
/// Built once at reporter construction; colors come from the eight named
/// ANSI base colors. Inject a custom palette to restyle the report, or
/// [`Palette::plain`] to disable coloring entirely.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Suite header lines
    pub suite: Style,
    /// Passed spec lines and the passed summary line
    pub pass: Style,
    /// Failed spec lines, expectation messages, and the failed summary line
    pub fail: Style,
    /// No-expectation spec lines and the warning summary line
    pub warn: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            suite: Style::new().fg(Color::Cyan),
            pass: Style::new().fg(Color::Green),
            fail: Style::new().fg(Color::Red),
            warn: Style::new().fg(Color::Yellow),
        }
    }
}

impl Palette {
    /// A palette that applies no styling at all
    pub fn plain() -> Self {
        Self {
            suite: Style::new(),
            pass: Style::new(),
            fail: Style::new(),
            warn: Style::new(),
        }
    }
}
