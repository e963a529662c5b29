mod condition;
mod error;
mod open_weather_types;
mod units;

pub use condition::Condition;
pub use error::{Error, ErrorKind, FailureClass};
pub use units::{TemperatureUnits, UnrecognizedUnits};

use log::{debug, info};
use std::io::Read;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Current conditions for one city, normalized from the API response.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub description: String,
    pub condition: Condition,
    pub icon: String,
    pub units: TemperatureUnits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Favorites list thumbnail.
    Small,
    /// Main result icon.
    Large,
}

pub trait WeatherSource {
    fn current_weather(&self, city: &str, api_key: &str) -> Result<WeatherRecord, Error>;
}

/// Blocking client for the OpenWeatherMap current weather endpoint.
pub struct OpenWeather {
    agent: ureq::Agent,
    base_url: String,
    icon_base_url: String,
    units: TemperatureUnits,
    lang: String,
}

impl OpenWeather {
    pub fn new(units: TemperatureUnits, lang: &str) -> OpenWeather {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();

        OpenWeather {
            agent,
            base_url: DEFAULT_BASE_URL.to_owned(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_owned(),
            units,
            lang: lang.to_owned(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_owned();
        self
    }

    pub fn with_icon_base_url(mut self, icon_base_url: &str) -> Self {
        self.icon_base_url = icon_base_url.trim_end_matches('/').to_owned();
        self
    }

    pub fn units(&self) -> TemperatureUnits {
        self.units
    }

    pub fn query(&self, city: &str, api_key: &str) -> Result<WeatherRecord, Error> {
        debug!(
            "requesting weather for {:?} (units={}, lang={})",
            city, self.units, self.lang
        );

        let resp = self
            .agent
            .get(&self.base_url)
            .query("q", city)
            .query("appid", api_key)
            .query("units", self.units.as_query_value())
            .query("lang", &self.lang)
            .call()?;
        let resp = check_status(resp)?;

        let body = resp.into_string()?;
        let raw = serde_json::from_str::<open_weather_types::CurrentWeather>(&body)?;
        let record = raw.into_record(self.units)?;

        info!("received weather for {}, {}", record.city, record.country);
        Ok(record)
    }

    pub fn icon_url(&self, icon: &str, size: IconSize) -> String {
        match size {
            IconSize::Small => format!("{}/{}.png", self.icon_base_url, icon),
            IconSize::Large => format!("{}/{}@2x.png", self.icon_base_url, icon),
        }
    }

    pub fn fetch_icon(&self, icon: &str, size: IconSize) -> Result<Vec<u8>, Error> {
        let url = self.icon_url(icon, size);
        debug!("fetching icon {}", url);

        let resp = check_status(self.agent.get(&url).call()?)?;
        let mut bytes = Vec::new();
        resp.into_reader().read_to_end(&mut bytes)?;

        Ok(bytes)
    }
}

/// ureq only turns statuses from 400 up into errors; anything else outside
/// 2xx is still a failed request.
fn check_status(resp: ureq::Response) -> Result<ureq::Response, Error> {
    match resp.status() {
        200..=299 => Ok(resp),
        code => Err(Error::status(code, resp.status_text())),
    }
}

impl WeatherSource for OpenWeather {
    fn current_weather(&self, city: &str, api_key: &str) -> Result<WeatherRecord, Error> {
        self.query(city, api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_urls() {
        let client = OpenWeather::new(TemperatureUnits::Metric, DEFAULT_LANGUAGE);
        assert_eq!(
            client.icon_url("10d", IconSize::Large),
            "https://openweathermap.org/img/wn/10d@2x.png"
        );
        assert_eq!(
            client.icon_url("10d", IconSize::Small),
            "https://openweathermap.org/img/wn/10d.png"
        );
    }

    #[test]
    fn test_icon_base_url_override() {
        let client = OpenWeather::new(TemperatureUnits::Metric, DEFAULT_LANGUAGE)
            .with_icon_base_url("http://localhost:9000/img/");
        assert_eq!(
            client.icon_url("01n", IconSize::Small),
            "http://localhost:9000/img/01n.png"
        );
    }

    #[test]
    fn test_check_status() {
        let ok = ureq::Response::new(200, "OK", "{}").unwrap();
        assert!(check_status(ok).is_ok());

        for (code, text) in [(302, "Found"), (304, "Not Modified")] {
            let resp = ureq::Response::new(code, text, "{}").unwrap();
            let err = check_status(resp).unwrap_err();
            assert_eq!(err.class(), FailureClass::OtherHttpError);
            assert_eq!(err.to_string(), format!("{} {}", code, text));
        }
    }
}
