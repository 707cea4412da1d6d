use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Animated terminal weather dashboard"
)]
pub struct Cli {
    /// City name (default: geolocate by IP)
    pub city: Option<String>,

    /// Unit system sent to the weather API
    #[arg(long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY")]
    pub api_key: String,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable particle animation
    #[arg(long)]
    pub no_animation: bool,

    /// Lower motion mode
    #[arg(long)]
    pub reduced_motion: bool,

    /// Disable thunder flash
    #[arg(long)]
    pub no_flash: bool,

    /// Force ASCII icons
    #[arg(long)]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Override the weather API base URL
    #[arg(long, hide = true)]
    pub weather_url: Option<String>,

    /// Override the geocoding API base URL
    #[arg(long, hide = true)]
    pub geo_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, UnitsArg};

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["skycast", "--api-key", "test-key"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults_to_metric_and_geolocation() {
        let cli = parse(&[]);
        assert_eq!(cli.units, UnitsArg::Metric);
        assert!(cli.city.is_none());
    }

    #[test]
    fn parses_units_enum() {
        let cli = parse(&["--units", "imperial"]);
        assert_eq!(cli.units, UnitsArg::Imperial);
    }

    #[test]
    fn city_is_positional() {
        let cli = parse(&["Reykjavik"]);
        assert_eq!(cli.city.as_deref(), Some("Reykjavik"));
    }

    #[test]
    fn lat_without_lon_fails_validation() {
        let cli = parse(&["--lat", "40.7"]);
        assert!(cli.validate().is_err());

        let cli = parse(&["--lat", "40.7", "--lon", "-74.0"]);
        assert!(cli.validate().is_ok());
    }
}
