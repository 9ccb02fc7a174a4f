//! Built-in style code vocabulary.
//!
//! A [`StyleCode`] is a single terminal directive: a foreground color, a
//! background color, or a text attribute. Codes are looked up by name,
//! case-insensitively, against a fixed vocabulary:
//!
//! | Kind | Names |
//! |------|-------|
//! | Foreground | `red`, `fg_red`, `bright_red`, `fg_bright_red`, ... |
//! | Background | `bg_red`, `bg_bright_red`, ... |
//! | Attribute | `bold`, `dim`, `italic`, `underlined`, `blink`, `blink_fast`, `reverse`, `hidden`, `strikethrough` |
//!
//! The eight base colors are `black`, `red`, `green`, `yellow`, `blue`,
//! `magenta`, `cyan` and `white`. Bright variants map to palette indices 8-15.
//!
//! Attributes also accept a few common aliases: `intensity_bold`, `faint`,
//! `intensity_faint`, `underline`, `underline_double`, `blink_slow`,
//! `negative_on`, `conceal_on` and `strike`. `underline_double` renders as a
//! single underline.
//!
//! Only directives that add styling are supported. `reset`, `default`,
//! `fg_default`, `bg_default` and the `*_off` codes (`blink_off`,
//! `negative_off`, `conceal_off`, `underline_off`) have no `console`
//! equivalent and are unknown codes. Every token already ends with a full
//! reset.

use std::collections::HashMap;
use std::str::FromStr;

use console::{Attribute, Color, Style};
use once_cell::sync::Lazy;

use crate::error::{MarkupError, Result};

/// A single resolved terminal style directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleCode {
    /// Sets the foreground (text) color.
    Foreground(Color),
    /// Sets the background color.
    Background(Color),
    /// Adds a text attribute.
    Attribute(Attribute),
}

impl StyleCode {
    /// Resolves a built-in code by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownCode`] when the name is not part of the
    /// vocabulary.
    pub fn from_name(name: &str) -> Result<Self> {
        VOCABULARY
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| MarkupError::UnknownCode {
                name: name.to_string(),
            })
    }

    /// Returns true for color codes (foreground or background).
    pub fn is_color(&self) -> bool {
        matches!(self, StyleCode::Foreground(_) | StyleCode::Background(_))
    }

    /// Returns true for background color codes.
    pub fn is_background(&self) -> bool {
        matches!(self, StyleCode::Background(_))
    }

    /// Applies this code to a style accumulator.
    pub fn apply(self, style: Style) -> Style {
        match self {
            StyleCode::Foreground(color) => style.fg(color),
            StyleCode::Background(color) => style.bg(color),
            StyleCode::Attribute(attr) => style.attr(attr),
        }
    }
}

impl FromStr for StyleCode {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Applies codes in order onto a fresh, force-styled accumulator.
pub fn style_from_codes<'a, I>(codes: I) -> Style
where
    I: IntoIterator<Item = &'a StyleCode>,
{
    codes
        .into_iter()
        .fold(Style::new().force_styling(true), |style, code| {
            code.apply(style)
        })
}

const COLORS: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

const ATTRIBUTES: [(&str, Attribute); 18] = [
    ("bold", Attribute::Bold),
    ("intensity_bold", Attribute::Bold),
    ("dim", Attribute::Dim),
    ("faint", Attribute::Dim),
    ("intensity_faint", Attribute::Dim),
    ("italic", Attribute::Italic),
    ("underlined", Attribute::Underlined),
    ("underline", Attribute::Underlined),
    ("underline_double", Attribute::Underlined),
    ("blink", Attribute::Blink),
    ("blink_slow", Attribute::Blink),
    ("blink_fast", Attribute::BlinkFast),
    ("reverse", Attribute::Reverse),
    ("negative_on", Attribute::Reverse),
    ("hidden", Attribute::Hidden),
    ("conceal_on", Attribute::Hidden),
    ("strikethrough", Attribute::StrikeThrough),
    ("strike", Attribute::StrikeThrough),
];

static VOCABULARY: Lazy<HashMap<String, StyleCode>> = Lazy::new(build_vocabulary);

fn build_vocabulary() -> HashMap<String, StyleCode> {
    let mut map = HashMap::new();

    for (index, (name, color)) in COLORS.iter().enumerate() {
        // console renders bright colors through the 256-color palette (8-15)
        let bright = Color::Color256(8 + index as u8);

        map.insert(name.to_string(), StyleCode::Foreground(*color));
        map.insert(format!("fg_{}", name), StyleCode::Foreground(*color));
        map.insert(format!("bg_{}", name), StyleCode::Background(*color));
        map.insert(format!("bright_{}", name), StyleCode::Foreground(bright));
        map.insert(format!("fg_bright_{}", name), StyleCode::Foreground(bright));
        map.insert(format!("bg_bright_{}", name), StyleCode::Background(bright));
    }

    for (name, attr) in ATTRIBUTES {
        map.insert(name.to_string(), StyleCode::Attribute(attr));
    }

    map
}
