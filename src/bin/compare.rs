use std::error::Error;

use clap::Parser;
use num_format::{Locale, ToFormattedString};
use simple_logger::SimpleLogger;

use greenskies::{
    compare, compare_distance, AirportDirectory, Cabin, EmissionFactorTable, Policy,
    TripRequest,
};

const ABOUT: &'static str = r#"Ranks all aircraft categories offering a cabin by the CO2
they would emit on one route, least emitting first.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// IATA code of the origin airport, e.g. `DEL`
    #[arg(short, long, requires = "destination", required_unless_present = "distance_km")]
    origin: Option<String>,
    /// IATA code of the destination airport, e.g. `LHR`
    #[arg(short, long, requires = "origin", required_unless_present = "distance_km")]
    destination: Option<String>,
    /// Distance flown in km, for routes whose airports are not in the
    /// directory
    #[arg(long, conflicts_with_all = ["origin", "destination"])]
    distance_km: Option<f64>,
    /// The cabin flown, one of `economy`, `premium_economy`, `business`,
    /// `first`
    #[arg(long, value_parser = parse_cabin, default_value = "economy")]
    cabin: Cabin,
    /// Number of passengers traveling together
    #[arg(short, long, default_value_t = 1)]
    passengers: u32,
    /// Account for non-CO2 effects at altitude via a radiative forcing
    /// index
    #[arg(long)]
    radiative_forcing: bool,
    /// Fraction of sustainable aviation fuel in the tank, `0.0` to `1.0`
    #[arg(long, default_value_t = 0.0)]
    saf_blend: f64,
    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_cabin(arg: &str) -> Result<Cabin, greenskies::Error> {
    arg.parse()
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let factors = EmissionFactorTable::new();
    if !(0.0..=1.0).contains(&cli.saf_blend) {
        log::warn!(
            "--saf-blend {} is outside 0..=1 and will be clamped",
            cli.saf_blend
        );
    }
    let policy = Policy {
        radiative_forcing: cli.radiative_forcing,
        saf_blend: cli.saf_blend,
        ..Policy::default()
    };

    let rankings = if let Some(distance_km) = cli.distance_km {
        compare_distance(distance_km, cli.cabin, cli.passengers, &factors, &policy)?
    } else {
        let airports = AirportDirectory::new();
        let trip = TripRequest {
            origin: cli.origin.clone().unwrap_or_default(),
            destination: cli.destination.clone().unwrap_or_default(),
            // not used to build the ranking
            category: String::new(),
            cabin: cli.cabin,
            passengers: cli.passengers,
        };
        compare(&trip, &airports, &factors, &policy)?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rankings)?);
        return Ok(());
    }

    println!(
        "aircraft categories offering {} cabin, least emitting first:",
        cli.cabin
    );
    for (position, ranking) in rankings.iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:>10} kg CO2",
            position + 1,
            ranking.category,
            (ranking.total_co2_kg.round() as u64).to_formatted_string(&Locale::en)
        );
    }

    Ok(())
}
