use bastiongen::config::Config;
use bastiongen::generate;
use bastiongen::report;
use bastiongen::roster::Roster;
use bastiongen::template::DirTemplates;
use std::path::PathBuf;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bastiongen=info".parse().expect("valid log directive")),
        )
        .init();

    // Load configuration: TOML file if given, otherwise the environment
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Config::load(&path).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to load configuration");
            e
        })?,
        None => Config::from_env()?,
    };

    let roster = Roster::parse(&config.students, config.strict)?;
    if roster.is_empty() {
        eprintln!("❌ No students configured");
        std::process::exit(1);
    }

    info!(
        students = roster.len(),
        domain = %config.domain,
        output_dir = %config.output_dir.display(),
        "Planning artifacts"
    );

    let engine = DirTemplates::new(&config.template_dir);
    let artifacts = generate::plan(&config, &roster, &engine)?;
    generate::write(&artifacts)?;

    report::print_summary(&config, &roster);
    Ok(())
}
