use aero_weather::weather::{self, Condition, TemperatureUnits, WeatherRecord, WeatherSource};
use aero_weather::{ConfigStore, ConsoleDisplay, Session};
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

/// Knows a few cities; any other lookup fails as an unreadable response.
struct Atlas;

impl WeatherSource for Atlas {
    fn current_weather(&self, city: &str, _api_key: &str) -> Result<WeatherRecord, weather::Error> {
        let (name, country, condition, icon) = match city.to_lowercase().as_str() {
            "paris" => ("Paris", "FR", "Clear", "01d"),
            "bergen" => ("Bergen", "NO", "Drizzle", "09d"),
            "reykjavik" => ("Reykjavik", "IS", "Snow", "13n"),
            _ => {
                let err = serde_json::from_str::<u8>("").unwrap_err();
                return Err(err.into());
            }
        };

        Ok(WeatherRecord {
            city: name.to_owned(),
            country: country.to_owned(),
            temperature: 4.0,
            feels_like: 1.25,
            description: "Whatever".to_owned(),
            condition: Condition::from(condition),
            icon: icon.to_owned(),
            units: TemperatureUnits::Metric,
        })
    }
}

fn run_shell(session: &mut Session<Atlas>, input: &str) -> String {
    let mut display = ConsoleDisplay::new(Vec::new(), false);
    aero_weather::run(session, Cursor::new(input), &mut display).unwrap();
    String::from_utf8(display.into_inner()).unwrap()
}

#[test]
fn test_shell_session_persists_favorites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weather_app_config.json");

    let mut session = Session::new(ConfigStore::load(&path), Atlas);
    let out = run_shell(
        &mut session,
        "paris\nadd\nbergen\nadd\nsearch Reykjavik\nremove PARIS\nlist\nquit\nparis\n",
    );

    assert!(out.contains("No API key saved yet"));
    assert!(out.contains("[Warning] API Key Error"));
    assert!(!path.exists());

    let mut session = Session::new(ConfigStore::load(&path), Atlas);
    let out = run_shell(
        &mut session,
        "key secret\nparis\nadd\nbergen\nadd\nsearch Reykjavik\nremove PARIS\nlist\nquit\nparis\n",
    );

    assert!(out.contains("API key saved successfully!"));
    assert!(out.contains("Paris, FR"));
    assert!(out.contains("Type \"add\" to add Reykjavik to favorites"));
    // Everything after "quit" is ignored.
    assert_eq!(out.matches("Paris, FR").count(), 1);

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        saved,
        serde_json::json!({
            "apiKey": "secret",
            "favorites": {"bergen": {"name": "Bergen", "icon": "09d"}}
        })
    );
}

#[test]
fn test_shell_reports_errors_and_keeps_going() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weather_app_config.json");
    fs::write(&path, r#"{"apiKey": "secret", "favorites": {}}"#).unwrap();

    let mut session = Session::new(ConfigStore::load(&path), Atlas);
    let out = run_shell(&mut session, "atlantis\nsearch\nopen Paris\nadd\nkey   \nbergen\n");

    assert!(out.contains("[Error] Error: The received data could not be processed."));
    assert!(out.contains("[Warning] Error: Please enter a city name"));
    assert!(out.contains("Paris is not in your favorites."));
    assert!(out.contains("Nothing to add."));
    assert!(out.contains("[Warning] API Key: API key field is empty."));
    assert!(out.contains("Bergen, NO"));

    assert_eq!(session.store().api_key(), "secret");
    assert_eq!(session.current().map(|r| r.city.as_str()), Some("Bergen"));
}

#[test]
fn test_open_favorite_from_shell() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weather_app_config.json");
    fs::write(
        &path,
        r#"{"apiKey": "secret", "favorites": {"reykjavik": {"name": "Reykjavik", "icon": "13n"}}}"#,
    )
    .unwrap();

    let mut session = Session::new(ConfigStore::load(&path), Atlas);
    let out = run_shell(&mut session, "open reykjavik\n");

    assert!(out.contains("Reykjavik, IS"));
    assert!(!out.contains("to favorites"));
    assert_eq!(session.palette().name, "Snow");
}
