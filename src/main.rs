use vakasim::{Scenario, ScenarioConfig, SailMaterial, SailShape};
use vakasim::{bench_evaluate, evaluate, print_report, run_2d};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Print the stability report and exit without launching the viewer
    #[arg(long)]
    headless: bool,

    /// Run the evaluation timing sweep instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Override the scenario's sail shape, e.g. "square"
    #[arg(long)]
    shape: Option<String>,

    /// Override the scenario's sail material, e.g. "modern_nylon"
    #[arg(long)]
    material: Option<String>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_evaluate();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg);

    // Freeform overrides go through FromStr, so an unknown label fails
    // with InvalidSelection instead of falling through to a default
    if let Some(label) = &args.shape {
        scenario.vessel.sail_shape = label.parse::<SailShape>()?;
    }
    if let Some(label) = &args.material {
        scenario.vessel.sail_material = label.parse::<SailMaterial>()?;
    }

    let report = evaluate(&scenario.vessel, &scenario.wind, &scenario.constants)?;
    print_report(&scenario.vessel, &scenario.wind, &report);

    if !args.headless {
        run_2d(scenario);
    }

    Ok(())
}
