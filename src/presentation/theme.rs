use ratatui::style::{Color, Modifier, Style};

/// Colors derived from the dark/light flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(0x18, 0x18, 0x18),
        text: Color::Rgb(0xf9, 0xf9, 0xf9),
        accent: Color::Rgb(0x0b, 0x69, 0xff),
        muted: Color::Rgb(0x94, 0xa3, 0xb8),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(0xf9, 0xf9, 0xf9),
        text: Color::Rgb(0x23, 0x1f, 0x20),
        accent: Color::Rgb(0x0b, 0x69, 0xff),
        muted: Color::Rgb(0x61, 0x6e, 0x7c),
    };

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// Background and text color of the whole page
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Selected list row
    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(Color::Rgb(0xf9, 0xf9, 0xf9))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_palette_from_dark() {
        let dark = Palette::from_dark(true);
        assert_eq!(dark.background, Color::Rgb(0x18, 0x18, 0x18));
        assert_eq!(dark.text, Color::Rgb(0xf9, 0xf9, 0xf9));

        let light = Palette::from_dark(false);
        assert_eq!(light.background, Color::Rgb(0xf9, 0xf9, 0xf9));
        assert_eq!(light.text, Color::Rgb(0x23, 0x1f, 0x20));
    }

    #[test]
    fn test_base_style_uses_both_colors() {
        let style = Palette::DARK.base();
        assert_eq!(style.bg, Some(Palette::DARK.background));
        assert_eq!(style.fg, Some(Palette::DARK.text));
    }
}
