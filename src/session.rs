use crate::config::ConfigStore;
use crate::favorites::FavoriteEntry;
use crate::palette::{self, Palette};
use crate::weather::{WeatherRecord, WeatherSource};
use crate::{Error, ErrorKind};
use log::{info, warn};

/// Application state shared by the shell and the one-shot commands: the
/// persisted config plus whatever weather is currently on screen.
pub struct Session<S: WeatherSource> {
    store: ConfigStore,
    source: S,
    current: Option<WeatherRecord>,
    offer_favorite: bool,
}

impl<S: WeatherSource> Session<S> {
    pub fn new(store: ConfigStore, source: S) -> Self {
        Session {
            store,
            source,
            current: None,
            offer_favorite: false,
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn current(&self) -> Option<&WeatherRecord> {
        self.current.as_ref()
    }

    /// Whether adding the current city to favorites should be suggested.
    pub fn offer_favorite(&self) -> bool {
        self.offer_favorite
    }

    pub fn palette(&self) -> &'static Palette {
        match self.current {
            Some(ref record) => palette::for_condition(&record.condition),
            None => &palette::DEFAULT,
        }
    }

    pub fn search(&mut self, city: &str) -> Result<&WeatherRecord, Error> {
        self.lookup(city, false)
    }

    /// Shows a favorite again. The name is resolved through the favorites
    /// list so the stored spelling is what gets queried.
    pub fn open_favorite(&mut self, name: &str) -> Result<&WeatherRecord, Error> {
        let city = match self.store.favorites().get(name) {
            Some(entry) => entry.name.clone(),
            None => return Err(ErrorKind::UnknownFavorite(name.trim().to_owned()).into()),
        };
        info!("Favorite opened: {}", city);
        self.lookup(&city, true)
    }

    fn lookup(&mut self, city: &str, from_favorite: bool) -> Result<&WeatherRecord, Error> {
        if !self.store.has_api_key() {
            return Err(ErrorKind::MissingApiKey.into());
        }

        let city = city.trim();
        if city.is_empty() {
            return Err(ErrorKind::EmptyCity.into());
        }

        match self.source.current_weather(city, self.store.api_key()) {
            Ok(record) => {
                self.offer_favorite =
                    !from_favorite && !self.store.favorites().contains(&record.city);
                Ok(&*self.current.insert(record))
            }
            Err(e) => {
                warn!("Weather lookup for {:?} failed: {}", city, e);
                self.current = None;
                self.offer_favorite = false;
                Err(e.into())
            }
        }
    }

    /// Adds the city currently shown. Returns false if there is nothing to add
    /// or it is already a favorite.
    pub fn add_current_to_favorites(&mut self) -> Result<bool, Error> {
        let record = match self.current {
            Some(ref record) => record,
            None => return Ok(false),
        };

        let added = self.store.add_favorite(&record.city, &record.icon);
        self.offer_favorite = false;
        Ok(added?)
    }

    pub fn remove_favorite(&mut self, name: &str) -> Result<Option<FavoriteEntry>, Error> {
        let removed = self.store.remove_favorite(name);

        let removed_current = self
            .current
            .as_ref()
            .map_or(false, |r| !self.store.favorites().contains(&r.city));
        if removed_current {
            self.offer_favorite = true;
        }

        Ok(removed?)
    }

    pub fn save_api_key(&mut self, key: &str) -> Result<(), Error> {
        self.store.set_api_key(key)?;
        Ok(())
    }
}
