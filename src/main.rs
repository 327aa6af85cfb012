//! Minaret CLI
//!
//! Find nearby mosques and amenities from the command line.
//!
//! Usage:
//!     minaret here
//!     minaret search "Mecca"
//!     minaret near --lat 40.7128 --lon -74.0060
//!     minaret ping

use clap::{Parser, Subcommand};

use minaret::adapters::console::ConsolePresenter;
use minaret::adapters::ip_locate::IpLocateClient;
use minaret::adapters::nominatim::NominatimClient;
use minaret::adapters::overpass::OverpassClient;
use minaret::core::{FinderConfig, GeoPoint, Session};
use minaret::ports::{CategoryFilter, Geocode, GeocodeError, Locate, PoiSource, Present};

/// Minaret - find nearby mosques, ranked by distance
#[derive(Parser)]
#[command(name = "minaret")]
#[command(version)]
#[command(about = "Find nearby mosques and amenities, ranked by distance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search around your current (IP-derived) position
    Here {
        #[command(flatten)]
        search: SearchOpts,
    },

    /// Search around a place found by name
    Search {
        /// Free-text location query (e.g. "Kreuzberg, Berlin")
        query: String,

        #[command(flatten)]
        search: SearchOpts,
    },

    /// Search around explicit coordinates (marker-drag equivalent)
    Near {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[command(flatten)]
        search: SearchOpts,
    },

    /// Check that the geodata services answer
    Ping,
}

#[derive(clap::Args)]
struct SearchOpts {
    /// Search radius in meters
    #[arg(long, default_value = "5000")]
    radius: u32,

    /// Maximum number of results to list
    #[arg(long, default_value = "20")]
    limit: usize,

    /// Fetch amenities for the top N results (0 disables)
    #[arg(long, default_value = "3")]
    facilities: usize,
}

impl SearchOpts {
    fn into_config(self) -> FinderConfig {
        FinderConfig::new(self.radius)
            .with_limit(self.limit)
            .with_facility_fanout(self.facilities)
    }
}

/// Run the banner + primary + secondary query pipeline against an
/// already-positioned session.
fn run_queries(
    session: &mut Session,
    geocoder: &dyn Geocode,
    pois: &dyn PoiSource,
    presenter: &mut dyn Present,
    config: &FinderConfig,
) {
    let reference = match session.reference() {
        Some(r) => r,
        None => return,
    };

    // Reverse-geocode banner; failure here is cosmetic
    let place_name = geocoder
        .reverse(&reference)
        .unwrap_or_else(|e| {
            log::warn!("reverse geocoding failed: {}", e);
            "Your Location".to_string()
        });
    presenter.show_reference(&reference, &place_name);

    // Primary query
    let mosques = match pois.search(&CategoryFilter::mosques(), &reference, config.radius_m) {
        Ok(mosques) => mosques,
        Err(e) => {
            log::warn!("primary query failed: {}", e);
            presenter.show_notice(session.primary_failed());
            return;
        }
    };

    if let Some(notice) = session.primary_results(&mosques, config.distance.as_ref()) {
        presenter.show_notice(notice);
        return;
    }

    let shown = session.results().len().min(config.limit);
    presenter.show_results(&session.results()[..shown]);

    if config.facility_fanout == 0 {
        return;
    }

    // Secondary fan-out: one independent query per top-ranked item.
    // Each resolves into its own slot; a failure skips only that slot.
    let generation = session.generation();
    let targets: Vec<_> = session
        .results()
        .iter()
        .take(config.facility_fanout)
        .map(|item| (item.poi.id, item.poi.location))
        .collect();

    for (id, location) in targets {
        let facilities = match pois.search(
            &CategoryFilter::amenities(),
            &location,
            config.facility_radius_m,
        ) {
            Ok(facilities) => facilities,
            Err(e) => {
                log::warn!("facility query for {} failed: {}", id, e);
                continue;
            }
        };

        session.secondary_results(id, generation, &facilities, config.distance.as_ref());
        if let Some(slot) = session.facilities_for(id) {
            presenter.show_facilities(id, slot);
        }
    }
}

fn cmd_here(config: FinderConfig) {
    let locate = IpLocateClient::public();
    let geocoder = NominatimClient::public();
    let pois = OverpassClient::public();
    let mut presenter = ConsolePresenter::new();
    let mut session = Session::new();

    session.request_location();
    match locate.current_position() {
        Ok(point) => {
            log::info!("located at {}", point);
            session.location_fixed(point);
        }
        Err(e) => {
            log::warn!("location fix failed: {}", e);
            presenter.show_notice(session.location_failed());
            return;
        }
    }

    run_queries(&mut session, &geocoder, &pois, &mut presenter, &config);
}

fn cmd_search(query: &str, config: FinderConfig) {
    let geocoder = NominatimClient::public();
    let pois = OverpassClient::public();
    let mut presenter = ConsolePresenter::new();
    let mut session = Session::new();

    session.request_location();
    match geocoder.forward(query) {
        Ok(point) => {
            log::info!("{:?} resolved to {}", query, point);
            session.location_fixed(point);
        }
        Err(GeocodeError::NotFound) => {
            presenter.show_notice(session.location_not_found());
            return;
        }
        Err(e) => {
            log::warn!("forward geocoding failed: {}", e);
            presenter.show_notice(session.location_failed());
            return;
        }
    }

    run_queries(&mut session, &geocoder, &pois, &mut presenter, &config);
}

fn cmd_near(lat: f64, lon: f64, config: FinderConfig) {
    let point = match GeoPoint::new(lat, lon) {
        Ok(point) => point,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let geocoder = NominatimClient::public();
    let pois = OverpassClient::public();
    let mut presenter = ConsolePresenter::new();
    let mut session = Session::new();

    session.reposition(point);
    run_queries(&mut session, &geocoder, &pois, &mut presenter, &config);
}

fn cmd_ping() {
    let overpass = OverpassClient::public();
    let nominatim = NominatimClient::public();

    print!("Overpass:  ");
    if overpass.is_available() {
        println!("ok");
    } else {
        println!("unreachable");
    }

    print!("Nominatim: ");
    if nominatim.is_available() {
        println!("ok");
    } else {
        println!("unreachable");
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Here { search } => cmd_here(search.into_config()),
        Commands::Search { query, search } => cmd_search(&query, search.into_config()),
        Commands::Near { lat, lon, search } => cmd_near(lat, lon, search.into_config()),
        Commands::Ping => cmd_ping(),
    }
}
