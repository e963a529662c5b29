use crate::weather::Condition;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// 24-bit ANSI escape selecting this color as the foreground.
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// 24-bit ANSI escape selecting this color as the background.
    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    Vertical,
    Diagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Solid(Color),
    Gradient {
        from: Color,
        to: Color,
        direction: GradientDirection,
    },
}

impl Background {
    /// The color a single-color surface should use.
    pub fn primary(&self) -> Color {
        match *self {
            Background::Solid(c) => c,
            Background::Gradient { from, .. } => from,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub background: Background,
    pub text: Color,
    pub button: Color,
    pub button_hover: Color,
    pub button_text: Color,
    pub input: Color,
    pub input_text: Color,
}

const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
const DARK_TEXT: Color = Color::rgb(0x33, 0x33, 0x33);
const SLATE: Color = Color::rgb(0x2c, 0x3e, 0x50);
const SLATE_HOVER: Color = Color::rgb(0x23, 0x31, 0x40);
const BLUE: Color = Color::rgb(0x34, 0x98, 0xdb);
const BLUE_HOVER: Color = Color::rgb(0x29, 0x80, 0xb9);
const STEEL: Color = Color::rgb(0x5d, 0x6d, 0x7e);

/// Used while no weather is shown.
pub const DEFAULT: Palette = Palette {
    name: "Default",
    background: Background::Solid(SLATE),
    text: WHITE,
    button: BLUE,
    button_hover: BLUE_HOVER,
    button_text: WHITE,
    input: STEEL,
    input_text: WHITE,
};

pub const CLEAR: Palette = Palette {
    name: "Clear",
    background: Background::Gradient {
        from: Color::rgb(0xf1, 0xc4, 0x0f),
        to: Color::rgb(0xe6, 0x7e, 0x22),
        direction: GradientDirection::Diagonal,
    },
    text: Color::rgb(0x22, 0x22, 0x22),
    button: SLATE,
    button_hover: SLATE_HOVER,
    button_text: WHITE,
    input: Color::rgb(0xf0, 0xf0, 0xf0),
    input_text: DARK_TEXT,
};

pub const CLOUDS: Palette = Palette {
    name: "Clouds",
    background: Background::Gradient {
        from: Color::rgb(0x7f, 0x8c, 0x8d),
        to: Color::rgb(0x95, 0xa5, 0xa6),
        direction: GradientDirection::Vertical,
    },
    text: WHITE,
    button: SLATE,
    button_hover: SLATE_HOVER,
    button_text: WHITE,
    input: Color::rgb(0xbd, 0xc3, 0xc7),
    input_text: DARK_TEXT,
};

pub const RAIN: Palette = Palette {
    name: "Rain",
    background: Background::Gradient {
        from: SLATE,
        to: STEEL,
        direction: GradientDirection::Vertical,
    },
    text: WHITE,
    button: BLUE,
    button_hover: BLUE_HOVER,
    button_text: WHITE,
    input: STEEL,
    input_text: WHITE,
};

pub const SNOW: Palette = Palette {
    name: "Snow",
    background: Background::Gradient {
        from: Color::rgb(0xe0, 0xea, 0xfc),
        to: Color::rgb(0xcf, 0xde, 0xf3),
        direction: GradientDirection::Diagonal,
    },
    text: DARK_TEXT,
    button: BLUE,
    button_hover: BLUE_HOVER,
    button_text: WHITE,
    input: WHITE,
    input_text: DARK_TEXT,
};

/// Rain, drizzle, thunderstorms and anything unrecognized share the rain
/// palette.
pub fn for_condition(condition: &Condition) -> &'static Palette {
    match condition {
        Condition::Clear => &CLEAR,
        Condition::Clouds => &CLOUDS,
        Condition::Snow => &SNOW,
        Condition::Rain | Condition::Drizzle | Condition::Thunderstorm | Condition::Other(_) => {
            &RAIN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup() {
        assert_eq!(for_condition(&Condition::Clear).name, "Clear");
        assert_eq!(for_condition(&Condition::Clouds).name, "Clouds");
        assert_eq!(for_condition(&Condition::Snow).name, "Snow");
        assert_eq!(for_condition(&Condition::Rain), &RAIN);
    }

    #[test]
    fn test_wet_conditions_share_rain_palette() {
        assert_eq!(for_condition(&Condition::Drizzle), &RAIN);
        assert_eq!(for_condition(&Condition::Thunderstorm), &RAIN);
    }

    #[test]
    fn test_mapping_is_total() {
        let others = [
            "Mist", "Smoke", "Haze", "Dust", "Fog", "Sand", "Ash", "Squall", "Tornado", "", "clear",
        ];
        for s in others.iter() {
            assert_eq!(for_condition(&Condition::from(*s)), &RAIN, "{}", s);
        }
    }

    #[test]
    fn test_color_display() {
        assert_eq!(SLATE.to_string(), "#2c3e50");
        assert_eq!(Color::rgb(0x22, 0x22, 0x22).to_string(), "#222222");
    }
}
