use aero_weather::{
    ConfigStore, ConsoleDisplay, Display, IconSize, MessageLevel, OpenWeather, Session,
    TemperatureUnits,
};
use log::{debug, info};
use simplelog::{ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io;
use std::path::PathBuf;
use structopt::StructOpt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::from_args();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let log_config = ConfigBuilder::new().set_time_to_local(true).build();
    TermLogger::init(level, log_config, TerminalMode::Stderr)?;
    debug!("logger initialized");

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(aero_weather::default_config_path);
    let store = ConfigStore::load(config_path);
    let client = OpenWeather::new(args.units, &args.lang);
    let mut display = ConsoleDisplay::stdout(args.color);

    let mut session = Session::new(store, client);
    info!("Initialization complete");

    let cmd = args.cmd.unwrap_or(Command::Shell);
    if let Err(e) = execute(cmd, &mut session, &mut display) {
        if matches!(e.kind(), aero_weather::ErrorKind::Display(_)) {
            return Err(e.into());
        }
        aero_weather::report(&mut display, &e)?;
        std::process::exit(1);
    }

    Ok(())
}

fn execute<D: Display>(
    cmd: Command,
    session: &mut Session<OpenWeather>,
    display: &mut D,
) -> Result<(), aero_weather::Error> {
    match cmd {
        Command::Shell => {
            let stdin = io::stdin();
            aero_weather::run(session, stdin.lock(), display)?;
        }
        Command::Search { city } => {
            session.search(&city.join(" "))?;
            aero_weather::show_current(session, display)?;
        }
        Command::SetKey { key } => {
            session.save_api_key(&key)?;
            display.show_message(MessageLevel::Info, "API Key", "API key saved successfully!")?;
        }
        Command::Favorites(FavoritesCommand::List) => {
            display.show_favorites(session.store().favorites())?;
        }
        Command::Favorites(FavoritesCommand::Add { city }) => {
            session.search(&city.join(" "))?;
            if !session.add_current_to_favorites()? {
                let name = session.current().map(|r| r.city.clone()).unwrap_or_default();
                display.show_message(
                    MessageLevel::Info,
                    "Favorites",
                    &format!("{} is already a favorite.", name),
                )?;
            }
            display.show_favorites(session.store().favorites())?;
        }
        Command::Favorites(FavoritesCommand::Remove { city }) => {
            let city = city.join(" ");
            if session.remove_favorite(&city)?.is_none() {
                display.show_message(
                    MessageLevel::Info,
                    "Favorites",
                    &format!("{} is not in your favorites.", city),
                )?;
            }
            display.show_favorites(session.store().favorites())?;
        }
        Command::Favorites(FavoritesCommand::Open { city }) => {
            session.open_favorite(&city.join(" "))?;
            aero_weather::show_current(session, display)?;
        }
        Command::Icon {
            icon,
            small,
            output,
        } => {
            let size = if small { IconSize::Small } else { IconSize::Large };
            let written = aero_weather::save_icon(session.source(), &icon, size, &output)?;
            debug!("wrote {} bytes", written);
        }
    }

    Ok(())
}

#[derive(StructOpt)]
#[structopt(
    name = "aero",
    about = "Current weather and favorite cities, powered by OpenWeatherMap"
)]
struct Cli {
    /// Config file [default: <config dir>/aero-weather/weather_app_config.json]
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// metric, imperial or standard
    #[structopt(long, default_value = "metric")]
    units: TemperatureUnits,

    #[structopt(long, default_value = "en")]
    lang: String,

    /// Render results using the weather's color palette
    #[structopt(long)]
    color: bool,

    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    #[structopt(subcommand)]
    cmd: Option<Command>,
}

#[derive(StructOpt)]
enum Command {
    /// Interactive shell (the default)
    Shell,
    /// Show the current weather for a city
    Search {
        #[structopt(required = true)]
        city: Vec<String>,
    },
    /// Save the OpenWeatherMap API key
    SetKey { key: String },
    /// Manage favorite cities
    Favorites(FavoritesCommand),
    /// Download a weather icon as PNG
    Icon {
        icon: String,
        /// Fetch the small variant instead of the 2x one
        #[structopt(long)]
        small: bool,
        #[structopt(short, long, parse(from_os_str))]
        output: PathBuf,
    },
}

#[derive(StructOpt)]
enum FavoritesCommand {
    List,
    /// Look up a city and add it to favorites
    Add {
        #[structopt(required = true)]
        city: Vec<String>,
    },
    Remove {
        #[structopt(required = true)]
        city: Vec<String>,
    },
    /// Show the weather for a favorite city
    Open {
        #[structopt(required = true)]
        city: Vec<String>,
    },
}
