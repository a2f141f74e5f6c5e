use ratatui::style::{Color, Modifier, Style};

/// Midnight palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub title: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            title: Color::Rgb(247, 118, 142),   // #F7768E
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
        }
    }

    pub fn screen(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for line `index` of the reader screen.
    pub fn line_style(&self, index: usize) -> Style {
        match index {
            0 => Style::default().fg(self.title).add_modifier(Modifier::BOLD),
            2 => Style::default().fg(self.text).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(self.dimmed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_line_is_bold() {
        let theme = Theme::default();
        assert!(theme.line_style(2).add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.line_style(4).fg, Some(theme.dimmed));
    }
}
