use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use weather_core::{Config, Location, Weather, WeatherClient};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Search for a city and show its current weather.
    Search {
        /// Free-text city name, e.g. "London".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Search { city } => search(&city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeatherMap API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn search(city: &str) -> anyhow::Result<()> {
    let city = city.trim();
    if city.is_empty() {
        anyhow::bail!("Please enter a valid city name.");
    }

    let config = Config::load()?;
    let api_key = config.require_api_key()?;

    let mut client = WeatherClient::new(api_key);

    let locations = client
        .search_locations(city)
        .await
        .with_context(|| format!("Error fetching locations for '{city}'"))?;

    let location = pick_location(locations)?;

    let weather = client
        .fetch_weather(location.lat, location.lon)
        .await
        .context("Failed to fetch weather")?;

    print_weather(&location, &weather);
    Ok(())
}

/// Let the user pick one of the returned matches; skip the prompt when
/// the search was unambiguous.
fn pick_location(mut locations: Vec<Location>) -> anyhow::Result<Location> {
    if locations.len() == 1 {
        return Ok(locations.remove(0));
    }

    Select::new("Which location did you mean?", locations)
        .prompt()
        .context("No location selected")
}

fn print_weather(location: &Location, weather: &Weather) {
    let main = &weather.main;
    println!("Current weather for {location}:");
    println!("  Temperature: {:.1} °C", main.temp_celsius());
    println!("  Min:         {:.1} °C", main.temp_min_celsius());
    println!("  Max:         {:.1} °C", main.temp_max_celsius());
    println!("  Pressure:    {} hPa", main.pressure);
    println!("  Humidity:    {}%", main.humidity);
}
