use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use itertools::Itertools;
use num_format::{Locale, ToFormattedString};
use simple_logger::SimpleLogger;
use tinytemplate::TinyTemplate;

use greenskies::{
    estimate, estimate_distance, recommend, AirportDirectory, Cabin, EmissionEstimate,
    EmissionFactorTable, Policy, TripRequest,
};

static TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/bin/estimate_template.md"
));
static TEMPLATE_NAME: &'static str = "t";

const ABOUT: &'static str = r#"Estimates the CO2 emissions of a flight and prints:
* the great-circle distance flown
* the total and per-passenger emissions (CO2)
* the jet fuel burned
* lower-emission alternatives, each with the offset (trees, cost)
  counterbalancing its remaining emissions
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
    /// The aircraft category flown
    #[arg(short, long, default_value = "narrowbody")]
    category: String,
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
    /// Routes shorter than this many km get a train recommendation
    #[arg(long, default_value_t = 800.0)]
    train_max_km: f64,
    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Write a markdown report to this path
    #[arg(long)]
    report: Option<PathBuf>,
    /// Append the result to this CSV file
    #[arg(long)]
    history: Option<PathBuf>,
}

fn parse_cabin(arg: &str) -> Result<Cabin, greenskies::Error> {
    arg.parse()
}

#[derive(::serde::Serialize)]
struct ReportRecommendation {
    description: String,
    co2_saved_kg: String,
    offset_trees: u32,
    offset_cost: String,
}

#[derive(::serde::Serialize)]
struct Report {
    route: String,
    category: String,
    cabin: String,
    passengers: u32,
    distance_km: String,
    total_co2_kg: String,
    per_passenger_co2_kg: String,
    fuel_liters: String,
    recommendations: Vec<ReportRecommendation>,
}

#[derive(::serde::Serialize)]
struct HistoryRow {
    #[serde(with = "time::serde::rfc3339")]
    timestamp: time::OffsetDateTime,
    route: String,
    category: String,
    cabin: Cabin,
    passengers: u32,
    distance_km: f64,
    total_co2_kg: f64,
    per_passenger_co2_kg: f64,
}

fn kg(value: f64) -> String {
    (value.round() as u64).to_formatted_string(&Locale::en)
}

fn with_available_categories(
    result: greenskies::Result<EmissionEstimate>,
    factors: &EmissionFactorTable,
) -> Result<EmissionEstimate, Box<dyn Error>> {
    result.map_err(|error| match error {
        greenskies::Error::UnknownCategory(category) => {
            let available = factors
                .iter()
                .map(|known| known.category.as_str())
                .sorted()
                .join(", ");
            format!("unknown aircraft category {category}, expected one of {available}")
                .into()
        }
        error => error.into(),
    })
}

fn write_report(path: &Path, report: &Report) -> Result<(), Box<dyn Error>> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

    let rendered = tt.render(TEMPLATE_NAME, report)?;

    std::fs::write(path, rendered)?;
    log::info!("Report written to {}", path.display());
    Ok(())
}

fn append_history(path: &Path, row: &HistoryRow) -> Result<(), Box<dyn Error>> {
    let exists = path.try_exists()?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!exists)
        .from_writer(file);
    wtr.serialize(row)?;
    wtr.flush()?;
    log::info!("History appended to {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let airports = AirportDirectory::new();
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
        train_max_km: cli.train_max_km,
        ..Policy::default()
    };

    let trip = TripRequest {
        origin: cli.origin.clone().unwrap_or_default(),
        destination: cli.destination.clone().unwrap_or_default(),
        category: cli.category.clone(),
        cabin: cli.cabin,
        passengers: cli.passengers,
    };

    let result = if let Some(distance_km) = cli.distance_km {
        estimate_distance(
            distance_km,
            &trip.category,
            trip.cabin,
            trip.passengers,
            &factors,
            &policy,
        )
    } else {
        estimate(&trip, &airports, &factors, &policy)
    };
    let estimate = with_available_categories(result, &factors)?;

    let route = if cli.distance_km.is_some() {
        format!("{:.1} km flown", estimate.distance_km)
    } else {
        let origin = airports.lookup(&trip.origin)?;
        let destination = airports.lookup(&trip.destination)?;
        format!(
            "{} ({}) -> {} ({})",
            origin.name, origin.code, destination.name, destination.code
        )
    };

    let recommendations = recommend(&estimate, &trip, &factors, &policy);

    if let Some(path) = &cli.history {
        let row = HistoryRow {
            timestamp: time::OffsetDateTime::now_utc(),
            route: route.clone(),
            category: trip.category.clone(),
            cabin: trip.cabin,
            passengers: trip.passengers,
            distance_km: estimate.distance_km,
            total_co2_kg: estimate.total_co2_kg,
            per_passenger_co2_kg: estimate.per_passenger_co2_kg,
        };
        append_history(path, &row)?;
    }

    if let Some(path) = &cli.report {
        let report = Report {
            route: route.clone(),
            category: trip.category.clone(),
            cabin: trip.cabin.to_string(),
            passengers: trip.passengers,
            distance_km: format!("{:.1}", estimate.distance_km),
            total_co2_kg: kg(estimate.total_co2_kg),
            per_passenger_co2_kg: kg(estimate.per_passenger_co2_kg),
            fuel_liters: kg(estimate.fuel_liters()),
            recommendations: recommendations
                .iter()
                .map(|recommendation| ReportRecommendation {
                    description: recommendation.description.clone(),
                    co2_saved_kg: kg(recommendation.co2_saved_kg),
                    offset_trees: recommendation.offset_trees,
                    offset_cost: format!("{:.2}", recommendation.offset_cost),
                })
                .collect(),
        };
        write_report(path, &report)?;
    }

    if cli.json {
        let output = serde_json::json!({
            "route": route,
            "estimate": estimate,
            "recommendations": recommendations,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("route: {route}");
        println!("distance: {:.1} km", estimate.distance_km);
        println!(
            "emissions: {} kg CO2 total, {} kg CO2 per passenger",
            kg(estimate.total_co2_kg),
            kg(estimate.per_passenger_co2_kg)
        );
        println!("fuel burned: {:.0} L", estimate.fuel_liters());
        if !recommendations.is_empty() {
            println!();
            println!("what you can do:");
        }
        for recommendation in &recommendations {
            println!(
                "* {}: saves {} kg CO2; offset the remainder with {} trees or USD {:.2}",
                recommendation.description,
                kg(recommendation.co2_saved_kg),
                recommendation.offset_trees,
                recommendation.offset_cost
            );
        }
    }

    Ok(())
}
