use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use employee_wage::calculation::RandomAttendance;
use employee_wage::cli::{Menu, OutputFormat};
use employee_wage::config::ConfigLoader;
use employee_wage::error::WageResult;
use employee_wage::registry::CompanyRegistry;

#[derive(Parser, Debug)]
#[command(name = "employee-wage", version)]
#[command(about = "Compute monthly employee wages per company from simulated attendance")]
struct Args {
    /// YAML roster of companies to register before the menu starts
    #[arg(long)]
    companies: Option<PathBuf>,

    /// Seed for reproducible attendance draws
    #[arg(long)]
    seed: Option<u64>,

    /// How results are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> WageResult<()> {
    env_logger::init();
    let args = Args::parse();

    let mut source = match args.seed {
        Some(seed) => RandomAttendance::seeded(seed),
        None => RandomAttendance::from_entropy(),
    };

    let registry = match &args.companies {
        Some(path) => {
            let loader = ConfigLoader::load(path)?;
            let registry = CompanyRegistry::from_roster(&loader, &mut source)?;
            info!(path = %path.display(), companies = registry.len(), "Preloaded roster");
            registry
        }
        None => CompanyRegistry::new(),
    };

    let stdin = io::stdin();
    let mut menu = Menu::new(
        stdin.lock(),
        io::stdout(),
        registry,
        source,
        args.format,
    );
    menu.run()
}
