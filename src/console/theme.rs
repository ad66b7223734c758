use crossterm::style::{Color, Stylize};

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub type_name: Color, // Cyan for type names
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb {
        r: 205,
        g: 214,
        b: 244,
    },
    primary: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    secondary: Color::Rgb {
        r: 250,
        g: 179,
        b: 135,
    },
    comment: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
    success: Color::Rgb {
        r: 166,
        g: 227,
        b: 161,
    },
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
    number: Color::Rgb {
        r: 250,
        g: 179,
        b: 135,
    },
    type_name: Color::Rgb {
        r: 148,
        g: 226,
        b: 213,
    },
};

/// Applies [`DEFAULT_THEME`] colors to console text, or leaves it plain
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Painter { color }
    }

    /// No ANSI sequences at all (pipes, tests)
    pub fn plain() -> Self {
        Painter { color: false }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, DEFAULT_THEME.primary, true)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, DEFAULT_THEME.success, true)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, DEFAULT_THEME.error, false)
    }

    pub fn number(&self, text: &str) -> String {
        self.paint(text, DEFAULT_THEME.number, false)
    }

    pub fn type_name(&self, text: &str) -> String {
        self.paint(text, DEFAULT_THEME.type_name, false)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, DEFAULT_THEME.secondary, false)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, DEFAULT_THEME.comment, false)
    }

    pub fn text(&self, text: &str) -> String {
        self.paint(text, DEFAULT_THEME.fg, false)
    }
}
