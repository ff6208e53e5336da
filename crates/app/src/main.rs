use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use arud_explorer_core::{
    render, AppConfig, BannerLayout, BannerTransition, Catalog, CircleDiagram, Navigator,
    PatternResolver, Screen,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Step used when playing banner transitions in the explorer.
const FRAME_MS: u64 = 100;

fn main() -> arud_explorer_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let catalog = load_catalog(cli.dataset.as_deref().or(config.dataset.as_deref()))?;
    let resolver = PatternResolver::default();

    match cli.command {
        Commands::Hub => print_hub(&catalog),
        Commands::About => print_about(),
        Commands::Circle { circle, meter } => print_circle(&catalog, &resolver, &circle, meter),
        Commands::Resolve { meter, json } => run_resolve(&catalog, &resolver, &meter, json),
        Commands::Diagram {
            circle,
            meter,
            output,
        } => run_diagram(&catalog, &resolver, &config, &circle, meter, &output),
        Commands::Export { output } => run_export(&catalog, &output),
        Commands::Explore => run_explore(&catalog, &resolver, &config),
    }
}

fn load_catalog(dataset: Option<&Path>) -> arud_explorer_core::Result<Catalog> {
    match dataset {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dataset");
            Catalog::load(path)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn print_hub(catalog: &Catalog) -> arud_explorer_core::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(render::render_hub(catalog).as_bytes())?;
    Ok(())
}

fn print_about() -> arud_explorer_core::Result<()> {
    io::stdout().lock().write_all(render::render_about().as_bytes())?;
    Ok(())
}

/// Opens `circle` and steps forward to the meter at `meter`.
fn navigate_to(
    catalog: &Catalog,
    circle: &str,
    meter: usize,
) -> arud_explorer_core::Result<Navigator> {
    let circle = catalog.find_circle(circle)?;
    let mut nav = Navigator::new();
    nav.select_circle(circle.id);
    let steps = if circle.meter_count() == 0 {
        0
    } else {
        meter % circle.meter_count()
    };
    for _ in 0..steps {
        nav.next_meter(catalog);
    }
    Ok(nav)
}

fn print_circle(
    catalog: &Catalog,
    resolver: &PatternResolver,
    circle: &str,
    meter: usize,
) -> arud_explorer_core::Result<()> {
    let nav = navigate_to(catalog, circle, meter)?;
    let mut out = io::stdout().lock();
    out.write_all(render::render_screen(&nav.screen(catalog, resolver)).as_bytes())?;
    Ok(())
}

fn run_resolve(
    catalog: &Catalog,
    resolver: &PatternResolver,
    meter_id: &str,
    json: bool,
) -> arud_explorer_core::Result<()> {
    let feet = resolver.resolve_by_id(catalog, meter_id)?;
    tracing::info!(meter = meter_id, feet = feet.len(), "resolved meter");

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&feet)?)?;
    } else {
        for foot in &feet {
            writeln!(out, "{}\t{}", foot.merged, foot.unmerged)?;
        }
    }
    Ok(())
}

fn run_diagram(
    catalog: &Catalog,
    resolver: &PatternResolver,
    config: &AppConfig,
    circle: &str,
    meter: usize,
    output: &PathBuf,
) -> arud_explorer_core::Result<()> {
    let nav = navigate_to(catalog, circle, meter)?;
    let Screen::Detail {
        circle,
        meter,
        pattern,
        ..
    } = nav.screen(catalog, resolver)
    else {
        return Err(format!("circle `{circle}` has no meter to draw").into());
    };

    let diagram = CircleDiagram::layout(circle, meter, &pattern, &config.diagram);
    let doc = render::render_circle_diagram(
        circle,
        &diagram,
        &meter.name_transliteration,
        &config.diagram,
    );
    doc.write_to_file(output)?;
    tracing::info!(circle = %circle.id, meter = %meter.id, ?output, "wrote diagram");
    Ok(())
}

fn run_export(catalog: &Catalog, output: &PathBuf) -> arud_explorer_core::Result<()> {
    std::fs::write(output, catalog.to_json_pretty()?)?;
    tracing::info!(
        ?output,
        circles = catalog.circles().len(),
        meters = catalog.total_meter_count(),
        "exported dataset"
    );
    Ok(())
}

fn run_explore(
    catalog: &Catalog,
    resolver: &PatternResolver,
    config: &AppConfig,
) -> arud_explorer_core::Result<()> {
    tracing::info!("starting explorer");

    let mut nav = Navigator::new();
    let mut banner = BannerTransition::new(config.banner.clone());
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    out.write_all(render::render_screen(&nav.screen(catalog, resolver)).as_bytes())?;
    writeln!(out, "{EXPLORE_HELP}")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let before = nav.state();

        let reply = match (words.next(), words.next()) {
            (None, _) => continue,
            (Some("q" | "quit" | "exit"), _) => break,
            (command, argument) => apply_command(&mut nav, catalog, command, argument),
        };
        if let Some(reply) = reply {
            writeln!(out, "{reply}")?;
            continue;
        }

        let screen = nav.screen(catalog, resolver);
        if nav.state() != before {
            play_transition(&mut banner, &screen, config);
        }
        writeln!(out)?;
        out.write_all(render::render_screen(&screen).as_bytes())?;
    }

    tracing::info!("explorer closed");
    Ok(())
}

/// Applies one explorer command to `nav`. Returns text to print instead of
/// the screen, for commands that do not navigate or that failed.
fn apply_command(
    nav: &mut Navigator,
    catalog: &Catalog,
    command: Option<&str>,
    argument: Option<&str>,
) -> Option<String> {
    match (command, argument) {
        (None, _) => None,
        (Some("h" | "help"), _) => Some(EXPLORE_HELP.to_string()),
        (Some("a" | "about"), _) => Some(render::render_about()),
        (Some("n" | "next"), _) => {
            nav.next_meter(catalog);
            None
        }
        (Some("p" | "prev"), _) => {
            nav.prev_meter(catalog);
            None
        }
        (Some("b" | "back"), _) => {
            nav.back_to_hub();
            None
        }
        (Some("o" | "open"), Some(key)) => match catalog.find_circle(key) {
            Ok(circle) => {
                nav.select_circle(circle.id);
                None
            }
            Err(err) => Some(err.to_string()),
        },
        (Some("o" | "open"), None) => Some("missing circle: use `open <circle|1-5>`".to_string()),
        (Some(other), _) => Some(format!("unrecognised command `{other}`\n{EXPLORE_HELP}")),
    }
}

/// Runs the banner transition for a newly shown meter to completion, tracing
/// each visible change.
fn play_transition(banner: &mut BannerTransition, screen: &Screen<'_>, config: &AppConfig) {
    let Screen::Detail {
        circle,
        meter,
        pattern,
        ..
    } = screen
    else {
        return;
    };

    let layout = BannerLayout::new(circle.atomic_sequence.len(), meter, &config.banner);
    banner.start(layout.normalized_offset, pattern.len());

    let mut previous = banner.state().clone();
    let mut elapsed = 0;
    while !banner.is_settled() && elapsed <= banner.duration_ms(pattern.len()) {
        let state = banner.advance(FRAME_MS);
        elapsed += FRAME_MS;
        if *state != previous {
            tracing::debug!(
                elapsed_ms = elapsed,
                offset = state.current_offset,
                groupings = state.show_groupings,
                boxes = ?state.visible_boxes,
                "banner frame"
            );
            previous = state.clone();
        }
    }
    tracing::debug!(meter = %meter.id, shift = layout.shift, "banner settled");
}

const EXPLORE_HELP: &str =
    "commands: open <circle|1-5>, next, prev, back, about, help, quit";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Explorer for Al-Khalil's prosodic circles", long_about = None)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// JSON dataset to use instead of the built-in circles.
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all circles.
    Hub,
    /// Explain the circles and their atomic units.
    About,
    /// Show one meter of a circle.
    Circle {
        /// Circle slug or display order (1-5).
        circle: String,
        /// Index of the meter within the circle; wraps around.
        #[arg(short, long, default_value_t = 0)]
        meter: usize,
    },
    /// Print the metrical feet of a meter.
    Resolve {
        /// Meter id, e.g. `al-tawil`.
        meter: String,
        /// Emit JSON instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },
    /// Write the circular diagram of a circle as SVG.
    Diagram {
        /// Circle slug or display order (1-5).
        circle: String,
        /// Index of the active meter within the circle.
        #[arg(short, long, default_value_t = 0)]
        meter: usize,
        /// Output path for the SVG document.
        output: PathBuf,
    },
    /// Write the dataset as JSON.
    Export {
        /// Output path for the dataset.
        output: PathBuf,
    },
    /// Navigate circles and meters interactively on stdin.
    Explore,
}

#[cfg(test)]
mod tests {
    use super::*;
    use arud_explorer_core::{CircleId, ViewState};

    #[test]
    fn parses_subcommands_and_global_flags() {
        let cli = Cli::parse_from(["arud-explorer", "diagram", "4", "-m", "2", "out.svg", "--config", "c.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
        match cli.command {
            Commands::Diagram { circle, meter, output } => {
                assert_eq!(circle, "4");
                assert_eq!(meter, 2);
                assert_eq!(output, PathBuf::from("out.svg"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn navigate_to_wraps_meter_index() {
        let catalog = Catalog::builtin();
        let nav = navigate_to(&catalog, "circle5-consonant", 3).unwrap();
        assert_eq!(
            nav.state(),
            ViewState::Circle {
                circle: CircleId::Consonant,
                meter_index: 1
            }
        );
    }

    #[test]
    fn parses_about_subcommand() {
        let cli = Cli::parse_from(["arud-explorer", "about"]);
        assert!(matches!(cli.command, Commands::About));
    }

    #[test]
    fn explorer_commands_navigate_or_reply() {
        let catalog = Catalog::builtin();
        let mut nav = Navigator::new();

        let reply = apply_command(&mut nav, &catalog, Some("open"), None).unwrap();
        assert!(reply.contains("missing circle"));
        assert_eq!(nav.state(), ViewState::Hub);

        let reply = apply_command(&mut nav, &catalog, Some("about"), None).unwrap();
        assert!(reply.contains("الوتد المفروق (/0/)"));

        assert!(apply_command(&mut nav, &catalog, Some("open"), Some("3")).is_none());
        assert!(apply_command(&mut nav, &catalog, Some("next"), None).is_none());
        assert_eq!(
            nav.state(),
            ViewState::Circle {
                circle: CircleId::Contracted,
                meter_index: 1
            }
        );

        let reply = apply_command(&mut nav, &catalog, Some("open"), Some("9")).unwrap();
        assert!(!reply.is_empty());
        let reply = apply_command(&mut nav, &catalog, Some("jump"), None).unwrap();
        assert!(reply.starts_with("unrecognised command `jump`"));
    }

    #[test]
    fn navigate_to_rejects_unknown_circles() {
        let catalog = Catalog::builtin();
        assert!(navigate_to(&catalog, "circle0", 0).is_err());
    }
}
