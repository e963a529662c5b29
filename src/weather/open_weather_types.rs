use super::{Condition, Error, TemperatureUnits, WeatherRecord};
use serde::Deserialize;

// Fields are optional so a missing one can be reported instead of failing
// the whole parse.

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Description {
    pub main: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Main {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Sys {
    pub country: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct CurrentWeather {
    pub weather: Vec<Description>,
    pub main: Option<Main>,
    pub sys: Option<Sys>,
    pub name: Option<String>,
}

impl CurrentWeather {
    pub fn into_record(self, units: TemperatureUnits) -> Result<WeatherRecord, Error> {
        let name = self.name.ok_or_else(|| Error::missing_field("name"))?;
        let main = self.main.ok_or_else(|| Error::missing_field("main"))?;
        let temperature = main
            .temp
            .ok_or_else(|| Error::missing_field("main.temp"))?;
        let feels_like = main
            .feels_like
            .ok_or_else(|| Error::missing_field("main.feels_like"))?;
        let country = self
            .sys
            .and_then(|s| s.country)
            .ok_or_else(|| Error::missing_field("sys.country"))?;

        let first = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| Error::missing_field("weather[0]"))?;
        let condition = first
            .main
            .ok_or_else(|| Error::missing_field("weather[0].main"))?;
        let description = first
            .description
            .ok_or_else(|| Error::missing_field("weather[0].description"))?;
        let icon = first
            .icon
            .ok_or_else(|| Error::missing_field("weather[0].icon"))?;

        Ok(WeatherRecord {
            city: name,
            country,
            temperature,
            feels_like,
            description: capitalize(&description),
            condition: Condition::from(condition.as_str()),
            icon,
            units,
        })
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
