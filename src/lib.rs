pub mod config;
pub mod display;
pub mod favorites;
pub mod palette;
mod session;
pub mod weather;

pub use config::{default_config_path, Config, ConfigStore};
pub use display::{ConsoleDisplay, Display, MessageLevel};
pub use favorites::{normalize_key, FavoriteEntry, Favorites};
pub use palette::Palette;
pub use session::Session;
pub use weather::{
    Condition, IconSize, OpenWeather, TemperatureUnits, WeatherRecord, WeatherSource,
};

use chrono::Local;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use weather::FailureClass;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl std::error::Error for Error {}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Title of the message box the error is shown in.
    pub fn title(&self) -> &'static str {
        match self.kind {
            ErrorKind::MissingApiKey => "API Key Error",
            ErrorKind::IconWrite(_, _) => "Save Error",
            ErrorKind::Config(ref err) => match err.kind() {
                config::ErrorKind::EmptyApiKey => "API Key",
                _ => "Save Error",
            },
            _ => "Error",
        }
    }

    pub fn level(&self) -> MessageLevel {
        match self.kind {
            ErrorKind::Weather(_) | ErrorKind::Display(_) => MessageLevel::Critical,
            _ => MessageLevel::Warning,
        }
    }

    /// Human-readable text for the user.
    pub fn user_message(&self) -> String {
        match self.kind {
            ErrorKind::Weather(ref err) => match err.class() {
                FailureClass::NotFound => "City not found.".to_owned(),
                FailureClass::Unauthorized => {
                    "Invalid API Key. Please check your key in the settings.".to_owned()
                }
                FailureClass::NetworkUnavailable => "Internet connection error.".to_owned(),
                FailureClass::MalformedResponse => {
                    "The received data could not be processed.".to_owned()
                }
                FailureClass::OtherHttpError => match err.kind() {
                    weather::ErrorKind::Status(_, _) => format!("HTTP error: {}", err),
                    _ => format!("An error occurred: {}", err),
                },
            },
            ErrorKind::Config(ref err) => match err.kind() {
                config::ErrorKind::EmptyApiKey => err.to_string(),
                _ => format!("Could not save config file:\n{}", err),
            },
            ErrorKind::Display(ref err) => err.to_string(),
            ErrorKind::IconWrite(ref path, ref err) => {
                format!("Could not save icon to {}:\n{}", path.display(), err)
            }
            ErrorKind::MissingApiKey => {
                "Please enter and save your OpenWeatherMap API key first \
                 (https://home.openweathermap.org/api_keys)."
                    .to_owned()
            }
            ErrorKind::EmptyCity => "Please enter a city name".to_owned(),
            ErrorKind::UnknownFavorite(ref name) => format!("{} is not in your favorites.", name),
        }
    }
}

/// The kind of an error that can occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Weather(weather::Error),
    Config(config::Error),
    Display(display::Error),
    IconWrite(PathBuf, std::io::Error),
    MissingApiKey,
    EmptyCity,
    UnknownFavorite(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Weather(ref err) => err.fmt(f),
            ErrorKind::Config(ref err) => err.fmt(f),
            ErrorKind::Display(ref err) => err.fmt(f),
            _ => f.write_str(&self.user_message()),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

impl From<weather::Error> for Error {
    fn from(e: weather::Error) -> Self {
        Error {
            kind: ErrorKind::Weather(e),
        }
    }
}

impl From<config::Error> for Error {
    fn from(e: config::Error) -> Self {
        Error {
            kind: ErrorKind::Config(e),
        }
    }
}

impl From<display::Error> for Error {
    fn from(e: display::Error) -> Self {
        Error {
            kind: ErrorKind::Display(e),
        }
    }
}

/// Downloads a condition icon and writes it to `output`. Returns the number
/// of bytes written.
pub fn save_icon<P: AsRef<Path>>(
    client: &OpenWeather,
    icon: &str,
    size: IconSize,
    output: P,
) -> Result<usize, Error> {
    let output = output.as_ref();
    let bytes = client.fetch_icon(icon, size)?;
    fs::write(output, &bytes)
        .map_err(|e| Error::from(ErrorKind::IconWrite(output.to_path_buf(), e)))?;

    info!("Saved icon {} to {}", icon, output.display());
    Ok(bytes.len())
}

/// A line typed into the interactive shell.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Add,
    Remove(String),
    Open(String),
    List,
    Key(String),
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    pub fn parse(line: &str) -> ShellCommand {
        let line = line.trim();
        let (word, rest) = match line.find(char::is_whitespace) {
            Some(i) => (&line[..i], line[i..].trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => ShellCommand::Empty,
            "search" => ShellCommand::Search(rest.to_owned()),
            "add" if rest.is_empty() => ShellCommand::Add,
            "remove" | "rm" => ShellCommand::Remove(rest.to_owned()),
            "open" => ShellCommand::Open(rest.to_owned()),
            "list" | "favorites" if rest.is_empty() => ShellCommand::List,
            "key" => ShellCommand::Key(rest.to_owned()),
            "help" | "?" if rest.is_empty() => ShellCommand::Help,
            "quit" | "exit" if rest.is_empty() => ShellCommand::Quit,
            _ => ShellCommand::Search(line.to_owned()),
        }
    }
}

/// Shows the outcome of a failed action to the user.
pub fn report<D: Display>(display: &mut D, err: &Error) -> Result<(), Error> {
    display.show_message(err.level(), err.title(), &err.user_message())?;
    Ok(())
}

pub fn show_current<S: WeatherSource, D: Display>(
    session: &Session<S>,
    display: &mut D,
) -> Result<(), Error> {
    if let Some(record) = session.current() {
        display.show_weather(
            record,
            session.palette(),
            session.offer_favorite(),
            &Local::now(),
        )?;
    }
    Ok(())
}

/// Runs one shell command. Returns false once the user asked to quit.
pub fn execute<S: WeatherSource, D: Display>(
    session: &mut Session<S>,
    command: ShellCommand,
    display: &mut D,
) -> Result<bool, Error> {
    debug!("shell command: {:?}", command);

    let result = match command {
        ShellCommand::Empty => Ok(()),
        ShellCommand::Quit => return Ok(false),
        ShellCommand::Help => display.show_help().map_err(Error::from),
        ShellCommand::List => display
            .show_favorites(session.store().favorites())
            .map_err(Error::from),
        ShellCommand::Search(city) => {
            let searched = session.search(&city).map(|_| ());
            searched.and_then(|()| show_current(session, display))
        }
        ShellCommand::Open(city) => {
            let opened = session.open_favorite(&city).map(|_| ());
            opened.and_then(|()| show_current(session, display))
        }
        ShellCommand::Add => match session.add_current_to_favorites() {
            Ok(true) => display
                .show_favorites(session.store().favorites())
                .map_err(Error::from),
            Ok(false) => display
                .show_message(
                    MessageLevel::Info,
                    "Favorites",
                    "Nothing to add. Search for a city that is not a favorite yet.",
                )
                .map_err(Error::from),
            Err(e) => Err(e),
        },
        ShellCommand::Remove(city) => match session.remove_favorite(&city) {
            Ok(Some(entry)) => {
                info!("Removed {} from favorites", entry.name);
                display
                    .show_favorites(session.store().favorites())
                    .map_err(Error::from)
            }
            Ok(None) => display
                .show_message(
                    MessageLevel::Info,
                    "Favorites",
                    &format!("{} is not in your favorites.", city.trim()),
                )
                .map_err(Error::from),
            Err(e) => Err(e),
        },
        ShellCommand::Key(key) => session.save_api_key(&key).and_then(|()| {
            display
                .show_message(MessageLevel::Info, "API Key", "API key saved successfully!")
                .map_err(Error::from)
        }),
    };

    match result {
        Ok(()) => Ok(true),
        // Output itself failed; there is nobody left to tell.
        Err(e) if matches!(e.kind(), ErrorKind::Display(_)) => Err(e),
        Err(e) => {
            report(display, &e)?;
            Ok(true)
        }
    }
}

/// Reads commands from `input` until it ends or the user quits.
pub fn run<S: WeatherSource, R: BufRead, D: Display>(
    session: &mut Session<S>,
    input: R,
    display: &mut D,
) -> Result<(), Error> {
    info!("Starting shell with config {}", session.store().path().display());

    if !session.store().has_api_key() {
        display.show_message(
            MessageLevel::Info,
            "API Key",
            "No API key saved yet. Use `key <api key>` to set one \
             (get yours at https://home.openweathermap.org/api_keys).",
        )?;
    }
    display.show_favorites(session.store().favorites())?;
    display.show_prompt()?;

    for line in input.lines() {
        let line = line.map_err(display::Error::from)?;
        if !execute(session, ShellCommand::parse(&line), display)? {
            break;
        }
        display.show_prompt()?;
    }

    info!("Shell finished");
    Ok(())
}
