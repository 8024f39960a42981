//! Terminal display styles.
//!
//! All styles use only named ANSI colors so that colors adapt to the user's
//! terminal theme. Use `Attribute::Dim` / `Attribute::Bold` for emphasis
//! rather than bright color variants.

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

pub fn plain() -> ContentStyle {
    ContentStyle::default()
}

pub fn dim() -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Dim.into(),
        ..Default::default()
    }
}

pub fn title() -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Bold.into(),
        ..Default::default()
    }
}

pub fn drop_zone() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Blue),
        ..Default::default()
    }
}

pub fn drop_zone_active() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Cyan),
        attributes: Attributes::from(Attribute::Bold) | Attribute::Reverse,
        ..Default::default()
    }
}

pub fn loading() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Yellow),
        attributes: Attribute::Italic.into(),
        ..Default::default()
    }
}

pub fn success() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Green),
        attributes: Attribute::Bold.into(),
        ..Default::default()
    }
}

pub fn link() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Cyan),
        attributes: Attribute::Underlined.into(),
        ..Default::default()
    }
}

pub fn error() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Red),
        attributes: Attribute::Bold.into(),
        ..Default::default()
    }
}

pub fn prompt_style() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Cyan),
        attributes: Attribute::Bold.into(),
        ..Default::default()
    }
}
