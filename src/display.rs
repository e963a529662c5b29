mod error;

pub use error::{Error, ErrorKind};

use crate::favorites::Favorites;
use crate::palette::{Color, Palette};
use crate::weather::WeatherRecord;
use chrono::{DateTime, Local};
use std::io::{self, Write};

const CARD_WIDTH: usize = 32;
const RESET: &str = "\x1b[0m";

const HELP: &[(&str, &str)] = &[
    ("<city>", "show the current weather for a city"),
    ("search <city>", "same as above"),
    ("add", "add the city shown last to favorites"),
    ("remove <city>", "remove a city from favorites"),
    ("open <city>", "show the weather for a favorite city"),
    ("list", "list favorite cities"),
    ("key <api key>", "save your OpenWeatherMap API key"),
    ("help", "show this help"),
    ("quit", "exit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Critical,
}

impl MessageLevel {
    fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Critical => "Error",
        }
    }
}

pub trait Display {
    fn show_weather(
        &mut self,
        record: &WeatherRecord,
        palette: &Palette,
        offer_favorite: bool,
        time: &DateTime<Local>,
    ) -> Result<(), Error>;

    fn show_favorites(&mut self, favorites: &Favorites) -> Result<(), Error>;

    /// Stands in for a modal dialog: the user sees it before anything else
    /// happens.
    fn show_message(&mut self, level: MessageLevel, title: &str, text: &str)
        -> Result<(), Error>;

    fn show_help(&mut self) -> Result<(), Error>;

    fn show_prompt(&mut self) -> Result<(), Error>;
}

pub struct ConsoleDisplay<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleDisplay<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        ConsoleDisplay::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W, color: bool) -> Self {
        ConsoleDisplay { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, fg: Color, bg: Color) -> String {
        if self.color {
            format!("{}{}{}{}", bg.ansi_bg(), fg.ansi_fg(), text, RESET)
        } else {
            text.to_owned()
        }
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn show_weather(
        &mut self,
        record: &WeatherRecord,
        palette: &Palette,
        offer_favorite: bool,
        time: &DateTime<Local>,
    ) -> Result<(), Error> {
        let unit = record.units.as_char();
        let rows = [
            format!("{}, {}", record.city, record.country),
            record.description.clone(),
            format!("Temperature: {:.1}°{}", record.temperature, unit),
            format!("Feels Like: {:.1}°{}", record.feels_like, unit),
            format!("Icon: {:<5} Updated {}", record.icon, time.format("%H:%M")),
        ];

        let background = palette.background.primary();
        let border = format!("-{}-", "-".repeat(CARD_WIDTH));

        let mut lines = vec![self.paint(&border, palette.text, background)];
        for row in rows.iter() {
            let row = format!(
                "|{:<width$}|",
                truncate_to_characters(row, CARD_WIDTH),
                width = CARD_WIDTH
            );
            lines.push(self.paint(&row, palette.text, background));
        }
        lines.push(self.paint(&border, palette.text, background));

        if offer_favorite {
            let hint = format!("Type \"add\" to add {} to favorites", record.city);
            lines.push(self.paint(&hint, palette.button_text, palette.button));
        }

        writeln!(self.out)?;
        for line in lines.iter() {
            writeln!(self.out, "{}", line)?;
        }

        Ok(())
    }

    fn show_favorites(&mut self, favorites: &Favorites) -> Result<(), Error> {
        writeln!(self.out, "Favorites")?;
        if favorites.is_empty() {
            writeln!(self.out, "  (none yet)")?;
        }
        for (i, entry) in favorites.iter().enumerate() {
            writeln!(self.out, "  {:>2}. {:<24} {}", i + 1, entry.name, entry.icon)?;
        }
        Ok(())
    }

    fn show_message(
        &mut self,
        level: MessageLevel,
        title: &str,
        text: &str,
    ) -> Result<(), Error> {
        let mut lines = text.lines();
        writeln!(
            self.out,
            "[{}] {}: {}",
            level.label(),
            title,
            lines.next().unwrap_or_default()
        )?;
        for line in lines {
            writeln!(self.out, "    {}", line)?;
        }
        Ok(())
    }

    fn show_help(&mut self) -> Result<(), Error> {
        for (command, description) in HELP.iter() {
            writeln!(self.out, "  {:<16} {}", command, description)?;
        }
        Ok(())
    }

    fn show_prompt(&mut self) -> Result<(), Error> {
        write!(self.out, "aero> ")?;
        self.out.flush()?;
        Ok(())
    }
}

fn truncate_to_characters(s: &str, length: usize) -> String {
    if s.chars().count() <= length {
        return s.to_owned();
    }

    if length < 3 {
        return s.chars().take(length).collect();
    }

    let head: String = s.chars().take(length - 3).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::weather::{Condition, TemperatureUnits};
    use chrono::TimeZone;

    fn record() -> WeatherRecord {
        WeatherRecord {
            city: "Paris".to_owned(),
            country: "FR".to_owned(),
            temperature: 12.34,
            feels_like: 11.56,
            description: "Light rain".to_owned(),
            condition: Condition::Rain,
            icon: "10d".to_owned(),
            units: TemperatureUnits::Metric,
        }
    }

    fn output(display: ConsoleDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_truncate_to_characters() {
        assert_eq!(truncate_to_characters("", 3), "");
        assert_eq!(truncate_to_characters("abc", 3), "abc");
        assert_eq!(truncate_to_characters("abcd", 3), "...");
        assert_eq!(truncate_to_characters("abcdefg", 5), "ab...");
        assert_eq!(truncate_to_characters("abcd", 2), "ab");
        assert_eq!(truncate_to_characters("Zürich-Örlikon", 9), "Zürich...");
    }

    #[test]
    fn test_weather_card() {
        let time = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        let mut display = ConsoleDisplay::new(Vec::new(), false);
        display
            .show_weather(&record(), &palette::RAIN, true, &time)
            .unwrap();

        let out = output(display);
        assert!(out.contains(&format!("|{:<32}|", "Paris, FR")));
        assert!(out.contains("|Light rain"));
        assert!(out.contains("Temperature: 12.3°C"));
        assert!(out.contains("Feels Like: 11.6°C"));
        assert!(out.contains("Updated 09:05"));
        assert!(out.contains("Type \"add\" to add Paris to favorites"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_weather_card_without_offer() {
        let time = Local.with_ymd_and_hms(2024, 3, 1, 21, 30, 0).unwrap();
        let mut display = ConsoleDisplay::new(Vec::new(), false);
        display
            .show_weather(&record(), &palette::RAIN, false, &time)
            .unwrap();

        assert!(!output(display).contains("to favorites"));
    }

    #[test]
    fn test_color_uses_palette() {
        let time = Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut display = ConsoleDisplay::new(Vec::new(), true);
        display
            .show_weather(&record(), &palette::CLEAR, false, &time)
            .unwrap();

        let out = output(display);
        assert!(out.contains(&palette::CLEAR.text.ansi_fg()));
        assert!(out.contains(&palette::CLEAR.background.primary().ansi_bg()));
        assert!(out.contains(RESET));
    }

    #[test]
    fn test_favorites_list() {
        let mut favorites = Favorites::new();
        favorites.add("Paris", "01d");
        favorites.add("Lima", "04n");

        let mut display = ConsoleDisplay::new(Vec::new(), false);
        display.show_favorites(&favorites).unwrap();

        let out = output(display);
        let paris = out.find("Paris").unwrap();
        let lima = out.find("Lima").unwrap();
        assert!(paris < lima);
        assert!(out.contains(" 1. Paris"));
        assert!(out.contains(" 2. Lima"));
    }

    #[test]
    fn test_empty_favorites_list() {
        let mut display = ConsoleDisplay::new(Vec::new(), false);
        display.show_favorites(&Favorites::new()).unwrap();
        assert!(output(display).contains("(none yet)"));
    }

    #[test]
    fn test_multiline_message() {
        let mut display = ConsoleDisplay::new(Vec::new(), false);
        display
            .show_message(
                MessageLevel::Warning,
                "Save Error",
                "Could not save config file:\npermission denied",
            )
            .unwrap();

        assert_eq!(
            output(display),
            "[Warning] Save Error: Could not save config file:\n    permission denied\n"
        );
    }
}
