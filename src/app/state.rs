use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::events::AppEvent,
    cli::{Cli, UnitsArg},
    data::{geocode::GeocodeClient, geoip, geoip::GeoPosition, openweather::WeatherClient},
    domain::weather::{Location, Units, WeatherSnapshot},
    ui::particles::ParticleEngine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Quit,
}

/// The single owned weather-state container. All mutation funnels through
/// `handle_event` on the event-loop task; spawned network tasks only report
/// back over the channel, so no locking is needed.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub location: Option<Location>,
    pub units: Units,
    pub snapshot: Option<WeatherSnapshot>,
    /// Sequence of the most recently issued weather fetch. Completions
    /// carrying an older sequence are discarded.
    pub fetch_seq: u64,
    pub search_open: bool,
    pub search_query: String,
    pub search_results: Vec<Location>,
    pub search_selected: usize,
    pub search_status: Option<String>,
    pub search_seq: u64,
    pub particles: ParticleEngine,
    pub frame_tick: u64,
    pub last_frame_at: Instant,
    api_key: String,
    weather_url: Option<String>,
    geo_url: Option<String>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let units = match cli.units {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        };

        Self {
            mode: AppMode::Idle,
            running: true,
            loading_message: "Initializing...".to_string(),
            last_error: None,
            location: None,
            units,
            snapshot: None,
            fetch_seq: 0,
            search_open: false,
            search_query: String::new(),
            search_results: Vec::new(),
            search_selected: 0,
            search_status: None,
            search_seq: 0,
            particles: ParticleEngine::new(cli.no_animation, cli.reduced_motion, cli.no_flash),
            frame_tick: 0,
            last_frame_at: Instant::now(),
            api_key: cli.api_key.clone(),
            weather_url: cli.weather_url.clone(),
            geo_url: cli.geo_url.clone(),
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                self.bootstrap(tx, cli);
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.frame_tick = self.frame_tick.saturating_add(1);
                self.particles.update(
                    self.snapshot.as_ref().map(|s| s.current.condition_code),
                    self.snapshot.as_ref().map(|s| s.current.wind_speed as f32),
                    delta,
                );
            }
            AppEvent::Input(event) => self.handle_input(event, tx),
            AppEvent::LocationResolved(location) => {
                self.select_location(tx, location);
            }
            AppEvent::FetchCompleted { seq, result } => {
                if seq != self.fetch_seq {
                    return Ok(());
                }
                match result {
                    Ok(snapshot) => {
                        self.snapshot = Some(snapshot);
                        self.mode = AppMode::Ready;
                        self.last_error = None;
                    }
                    Err(message) => {
                        // All-or-nothing refresh: either fetch failing
                        // discards whatever was on screen.
                        self.snapshot = None;
                        self.mode = AppMode::Error;
                        self.last_error = Some(message);
                    }
                }
            }
            AppEvent::SearchCompleted { seq, result } => {
                if seq != self.search_seq {
                    return Ok(());
                }
                match result {
                    Ok(results) => {
                        self.search_status =
                            results.is_empty().then(|| "No matches".to_string());
                        self.search_results = results;
                        self.search_selected = 0;
                    }
                    Err(message) => {
                        self.search_results.clear();
                        self.search_status = Some(message);
                    }
                }
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    /// Entry transition: direct coordinates, an explicit city argument, or IP
    /// geolocation with the New York fallback.
    fn bootstrap(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) {
        if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
            self.select_location(tx, Location::from_coords(lat, lon));
            return;
        }

        if let Some(city) = cli.city.clone() {
            self.resolve_city(tx, city);
            return;
        }

        self.start_geolocation(tx);
    }

    fn start_geolocation(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.mode = AppMode::Loading;
        self.loading_message = "Detecting location...".to_string();
        let geocoder = self.geocode_client();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let position = geoip::detect_position().await;
            let reverse = match position {
                Some(pos) => geocoder
                    .reverse(pos.latitude, pos.longitude)
                    .await
                    .ok()
                    .flatten(),
                None => None,
            };
            let _ = tx2
                .send(AppEvent::LocationResolved(start_location(position, reverse)))
                .await;
        });
    }

    fn resolve_city(&mut self, tx: &mpsc::Sender<AppEvent>, city: String) {
        self.mode = AppMode::Loading;
        self.loading_message = format!("Looking up {city}...");
        let geocoder = self.geocode_client();
        let seq = self.next_fetch_seq();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            match geocoder.search(&city).await {
                Ok(results) => match results.into_iter().next() {
                    Some(location) => {
                        let _ = tx2.send(AppEvent::LocationResolved(location)).await;
                    }
                    None => {
                        let _ = tx2
                            .send(AppEvent::FetchCompleted {
                                seq,
                                result: Err(format!("No location found for {city}")),
                            })
                            .await;
                    }
                },
                Err(err) => {
                    let _ = tx2
                        .send(AppEvent::FetchCompleted {
                            seq,
                            result: Err(err.to_string()),
                        })
                        .await;
                }
            }
        });
    }

    /// Selecting a location always invalidates previous weather state and
    /// starts a fresh all-or-nothing refresh.
    pub fn select_location(&mut self, tx: &mpsc::Sender<AppEvent>, location: Location) {
        self.location = Some(location);
        self.search_open = false;
        self.search_results.clear();
        self.search_query.clear();
        self.refresh(tx);
    }

    pub fn toggle_units(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.units = self.units.toggled();
        if self.location.is_some() {
            self.refresh(tx);
        }
    }

    /// Issues the current-conditions and forecast fetches concurrently for
    /// the active location, tagged with a fresh sequence number.
    pub fn refresh(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let Some(location) = self.location.clone() else {
            return;
        };

        self.mode = AppMode::Loading;
        self.last_error = None;
        self.loading_message = format!("Fetching weather for {}...", location.display_name());

        let client = self.weather_client();
        let units = self.units;
        let seq = self.next_fetch_seq();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = client
                .fetch_snapshot(location, units)
                .await
                .map_err(|err| err.to_string());
            let _ = tx2.send(AppEvent::FetchCompleted { seq, result }).await;
        });
    }

    /// Side operation: never touches the main state machine. A blank query
    /// clears results without a network call.
    pub fn submit_search(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            self.search_results.clear();
            self.search_status = None;
            return;
        }

        self.search_status = Some("Searching...".to_string());
        let geocoder = self.geocode_client();
        self.search_seq = self.search_seq.wrapping_add(1);
        let seq = self.search_seq;
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = geocoder
                .search(&query)
                .await
                .map_err(|err| err.to_string());
            let _ = tx2.send(AppEvent::SearchCompleted { seq, result }).await;
        });
    }

    fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) {
        let Event::Key(key) = event else {
            if let Event::Resize(_, _) = event {
                self.particles.reset();
            }
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.search_open {
            self.handle_search_input(key.code, tx);
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.mode = AppMode::Quit;
            }
            KeyCode::Char('r') => self.refresh(tx),
            KeyCode::Char('u') => self.toggle_units(tx),
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.search_open = true;
                self.search_query.clear();
                self.search_results.clear();
                self.search_selected = 0;
                self.search_status = None;
            }
            _ => {}
        }
    }

    fn handle_search_input(&mut self, code: KeyCode, tx: &mpsc::Sender<AppEvent>) {
        match code {
            KeyCode::Esc => {
                self.search_open = false;
            }
            KeyCode::Enter => {
                if let Some(selected) = self.search_results.get(self.search_selected).cloned() {
                    self.select_location(tx, selected);
                } else {
                    self.submit_search(tx);
                }
            }
            KeyCode::Up => {
                self.search_selected = self.search_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if !self.search_results.is_empty() {
                    self.search_selected =
                        (self.search_selected + 1).min(self.search_results.len() - 1);
                }
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.search_results.clear();
                self.search_status = None;
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.search_results.clear();
                self.search_status = None;
            }
            _ => {}
        }
    }

    fn next_fetch_seq(&mut self) -> u64 {
        self.fetch_seq = self.fetch_seq.wrapping_add(1);
        self.fetch_seq
    }

    fn weather_client(&self) -> WeatherClient {
        match &self.weather_url {
            Some(url) => WeatherClient::with_base_url(url.clone(), self.api_key.clone()),
            None => WeatherClient::new(self.api_key.clone()),
        }
    }

    fn geocode_client(&self) -> GeocodeClient {
        match &self.geo_url {
            Some(url) => GeocodeClient::with_base_url(url.clone(), self.api_key.clone()),
            None => GeocodeClient::new(self.api_key.clone()),
        }
    }
}

/// Start-up location decision. Geolocation failing for *any* reason falls
/// back to the fixed default; a failed reverse lookup degrades to a
/// coordinate-labelled location rather than an error.
#[must_use]
pub fn start_location(position: Option<GeoPosition>, reverse: Option<Location>) -> Location {
    match (position, reverse) {
        (Some(_), Some(location)) => location,
        (Some(pos), None) => Location::from_coords(pos.latitude, pos.longitude),
        (None, _) => Location::default_fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geolocation_failure_falls_back_to_new_york() {
        let location = start_location(None, None);
        assert_eq!(location.name, "New York");
        assert!((location.latitude - 40.7128).abs() < f64::EPSILON);
        assert!((location.longitude + 74.0060).abs() < f64::EPSILON);
    }

    #[test]
    fn resolved_position_without_name_uses_coordinates() {
        let location = start_location(
            Some(GeoPosition {
                latitude: 59.3293,
                longitude: 18.0686,
            }),
            None,
        );
        assert_eq!(location.name, "59.3293, 18.0686");
    }

    #[test]
    fn reverse_lookup_name_wins_when_available() {
        let named = Location {
            name: "Stockholm".to_string(),
            latitude: 59.3293,
            longitude: 18.0686,
            country: Some("SE".to_string()),
            state: None,
        };
        let location = start_location(
            Some(GeoPosition {
                latitude: 59.3,
                longitude: 18.1,
            }),
            Some(named.clone()),
        );
        assert_eq!(location, named);
    }
}
