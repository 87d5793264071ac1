use clap::Parser;
use mapfit_core::{Config, Coordinates, Error, Result, Tracker, Workout, WorkoutKind};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mapfit")]
#[command(about = "Map-based workout tracker", long_about = None)]
struct Cli {
    /// Override config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with the map centered at this latitude (skips `locate`)
    #[arg(long, requires = "lon")]
    lat: Option<f64>,

    /// Start with the map centered at this longitude
    #[arg(long, requires = "lat")]
    lon: Option<f64>,
}

fn main() -> Result<()> {
    // Initialize logging
    mapfit_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };

    let mut tracker = Tracker::new();

    // A pre-supplied position stands in for the geolocation callback
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        let center = tracker.on_position_resolved(lat, lon);
        announce_map(&config, center);
    }

    run_session(&mut tracker, &config)
}

/// Line-driven session loop standing in for the browser UI shell.
///
/// Each command maps onto one tracker entry point; what the tracker
/// returns is printed the way the real shell would render it.
fn run_session(tracker: &mut Tracker, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            continue;
        };

        match command {
            "locate" => match parse_lat_lon(args) {
                Some((lat, lon)) => {
                    let center = tracker.on_position_resolved(lat, lon);
                    announce_map(config, center);
                }
                None => println!("Usage: locate <lat> <lon>"),
            },

            "locate-fail" => {
                let reason = if args.is_empty() {
                    "permission denied".to_string()
                } else {
                    args.join(" ")
                };
                let err = tracker.on_position_failed(&reason);
                println!("{err}");
            }

            "click" => match parse_lat_lon(args) {
                Some((lat, lon)) => {
                    tracker.on_map_clicked(lat, lon);
                    println!("Marker pending at ({lat}, {lon})");
                }
                None => println!("Usage: click <lat> <lon>"),
            },

            "add" => cmd_add(tracker, args),

            "list" => cmd_list(tracker),

            "select" => {
                if let Some(&id) = args.first() {
                    // A miss is a silent no-op, matching a list click on a
                    // stale entry
                    if let Some(coords) = tracker.on_list_item_clicked(id) {
                        println!("Centering map at ({}, {})", coords.lat, coords.lon);
                    }
                } else {
                    println!("Usage: select <id>");
                }
            }

            "export" => cmd_export(tracker)?,

            "help" => print_help(),

            "quit" | "exit" => break,

            other => {
                tracing::warn!("Unknown command: {other}");
                println!("Unknown command: {other} (try `help`)");
            }
        }
    }

    Ok(())
}

fn cmd_add(tracker: &mut Tracker, args: &[&str]) {
    let [kind_raw, distance_raw, duration_raw, extra_raw] = args else {
        println!("Usage: add <running|cycling> <distance-km> <duration-min> <cadence|elevation>");
        return;
    };

    let kind = match *kind_raw {
        "running" => WorkoutKind::Running,
        "cycling" => WorkoutKind::Cycling,
        other => {
            println!("Unknown workout type: {other}");
            return;
        }
    };

    match tracker.on_form_submitted(kind, distance_raw, duration_raw, extra_raw) {
        Ok(workout) => {
            println!(
                "Marker placed at ({}, {})",
                workout.coords.lat, workout.coords.lon
            );
            println!("{} [{}] {}", workout.description, workout.id, metric_line(workout));
        }
        // Validation and missing-location failures surface their
        // user-facing message; neither aborts the session
        Err(err @ (Error::Validation(_) | Error::MissingLocation)) => println!("{err}"),
        Err(err) => println!("Error: {err}"),
    }
}

fn cmd_list(tracker: &Tracker) {
    if tracker.journal().is_empty() {
        println!("No workouts logged yet");
        return;
    }
    for (idx, workout) in tracker.journal().iter().enumerate() {
        println!(
            "{}. {} [{}] {} km in {} min, {}",
            idx + 1,
            workout.description,
            workout.id,
            workout.distance_km,
            workout.duration_min,
            metric_line(workout),
        );
    }
}

fn cmd_export(tracker: &Tracker) -> Result<()> {
    let workouts: Vec<&Workout> = tracker.journal().iter().collect();
    println!("{}", serde_json::to_string_pretty(&workouts)?);
    Ok(())
}

fn metric_line(workout: &Workout) -> String {
    match (workout.pace(), workout.speed()) {
        (Some(pace), _) => format!("pace: {pace:.1} min/km"),
        (_, Some(speed)) => format!("speed: {speed:.1} km/h"),
        _ => String::new(),
    }
}

fn announce_map(config: &Config, center: Coordinates) {
    println!(
        "Map ready at ({}, {}), zoom {}",
        center.lat, center.lon, config.map.default_zoom
    );
    println!("Tiles: {} ({})", config.map.tile_url, config.map.attribution);
}

fn parse_lat_lon(args: &[&str]) -> Option<(f64, f64)> {
    match args {
        [lat, lon] => Some((lat.parse().ok()?, lon.parse().ok()?)),
        _ => None,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  locate <lat> <lon>      resolve the starting position");
    println!("  locate-fail [reason]    simulate a geolocation failure");
    println!("  click <lat> <lon>       click the map (capture a location)");
    println!("  add <type> <km> <min> <cadence|elevation>");
    println!("                          submit the workout form");
    println!("  list                    show logged workouts");
    println!("  select <id>             re-center the map on a workout");
    println!("  export                  dump the journal as JSON");
    println!("  quit                    end the session");
}
