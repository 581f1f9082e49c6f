use std::fs;
use std::path::Path;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches};

use ringlay::config::LayoutConfig;
use ringlay::error::ConfigError;
use ringlay::render::{RenderSink, SvgRenderer};
use ringlay::{layout, table, Result};

fn main() {
    // Default: WARN for everything, INFO for ringlay.
    // Override with RUST_LOG env var (e.g. RUST_LOG=ringlay=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("ringlay=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = App::new(env!("CARGO_PKG_NAME"))
        .about("Calculate position of components placed at the vertices of a regular polygon")
        .arg(
            Arg::with_name("vertices")
                .long("vertices")
                .help("Number of vertices of the polygon")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .help("Component width")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .help("Component height")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("diameter")
                .long("diameter")
                .help("Maximum diameter used by all components")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("flat")
                .long("flat")
                .help("Tilt the polygon so its bottom side sits horizontal"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .help("Output filename for the vertex table")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("svg")
                .long("svg")
                .help("Render the placement scene to this SVG file")
                .takes_value(true),
        )
        .get_matches();

    let config = LayoutConfig::new(
        parse_arg(&matches, "vertices")?,
        parse_arg(&matches, "width")?,
        parse_arg(&matches, "height")?,
        parse_arg(&matches, "diameter")?,
        matches.is_present("flat"),
    )?;

    let layout = layout::plan(&config)?;

    let output = Path::new(matches.value_of("output").unwrap_or_default());
    table::write_table_file(output, &layout)?;

    if let Some(svg_path) = matches.value_of("svg") {
        SvgRenderer::new(svg_path).render(&config, &layout)?;
    }

    // Echo the persisted table so a run is usable without opening the file.
    print!("{}", fs::read_to_string(output)?);
    Ok(())
}

fn parse_arg<T: FromStr>(matches: &ArgMatches<'_>, name: &'static str) -> Result<T> {
    let raw = matches.value_of(name).unwrap_or_default();
    raw.parse().map_err(|_| {
        ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        }
        .into()
    })
}
