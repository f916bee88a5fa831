//! What one terminal cell shows: [`Cell`], [`Style`], [`Color`].

/// 24-bit RGB packed as `0x00RRGGBB`, with `0` reserved for the terminal's
/// own colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// Whatever the terminal uses by default.
    pub const DEFAULT: Self = Self(0);
    /// Pure black. Bit 24 keeps it apart from [`Color::DEFAULT`].
    pub const BLACK: Self = Self(1 << 24);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        match ((r as u32) << 16) | ((g as u32) << 8) | b as u32 {
            0 => Self::BLACK,
            rgb => Self(rgb),
        }
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Style {
    pub const PLAIN: Self = Self {
        fg: Color::DEFAULT,
        bg: Color::DEFAULT,
        bold: false,
    };

    #[inline]
    pub const fn with_fg(self, fg: Color) -> Self {
        Self { fg, ..self }
    }

    #[inline]
    pub const fn with_bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }

    #[inline]
    pub const fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }
}

/// A character and how to draw it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub const BLANK: Self = Self::new(' ');

    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::PLAIN,
        }
    }

    /// A blank cell painted `bg`.
    #[inline]
    pub const fn filled(bg: Color) -> Self {
        Self {
            ch: ' ',
            style: Style::PLAIN.with_bg(bg),
        }
    }

    #[inline]
    pub const fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::BLANK
    }
}
