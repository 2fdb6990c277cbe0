use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Brand orange used for highlights
pub const ACCENT: Color = Color::from_rgb(0.976, 0.451, 0.086);
pub const MUTED: Color = Color::from_rgb(0.64, 0.64, 0.64);
pub const AVAILABLE: Color = Color::from_rgb(0.29, 0.87, 0.50);
pub const WHATSAPP: Color = Color::from_rgb(0.086, 0.639, 0.290);

/// Parse a `#RRGGBB` colour. Anything else is `None`.
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
}

/// Card background for catalog tiles and section panels
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.15, 0.15, 0.15))),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Solid accent pill, e.g. the stock badge
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT)),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Near-black backdrop behind the gallery
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.95))),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Call-to-action for chat links
pub fn whatsapp(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::success(theme, status);
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(WHATSAPP)),
            text_color: Color::WHITE,
            ..base
        },
        _ => base,
    }
}

/// Header strip tinted with a brand's accent colour
pub fn brand_banner(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color { a: 0.18, ..color })),
        border: Border {
            color: Color { a: 0.4, ..color },
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_brand_colors() {
        assert_eq!(parse_hex("#C4161C"), Some(Color::from_rgb8(0xC4, 0x16, 0x1C)));
        assert_eq!(parse_hex("#00adef"), Some(Color::from_rgb8(0x00, 0xAD, 0xEF)));
    }

    #[test]
    fn test_rejects_malformed_colors() {
        assert_eq!(parse_hex("C4161C"), None);
        assert_eq!(parse_hex("#C416"), None);
        assert_eq!(parse_hex("#GG161C"), None);
        assert_eq!(parse_hex("#ÿÿÿ"), None);
    }
}
