use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use fardist_core::DistanceMetric;
use fardist_rank::{generate_fardists, FardistConfig, FardistReport};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// YAML configuration for the run; omitted means demo defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output directory for run artefacts.
    #[arg(long)]
    pub out: PathBuf,
    /// Master seed override (takes precedence over the config file).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Distance metric override: location, value, or location-x-value.
    #[arg(long)]
    pub metric: Option<String>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let mut config = load_config(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(raw) = &args.metric {
        config.metric =
            DistanceMetric::parse(raw).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    }

    let report = generate_fardists(&config).map_err(|err| Box::new(err) as Box<dyn Error>)?;

    let json = serde_json::to_string_pretty(&report)?;
    fs::write(args.out.join("fardists.json"), json)?;
    write_observations_csv(&args.out.join("observations.csv"), &report)?;

    // Persist the effective configuration for reproducibility.
    fs::write(
        args.out.join("config.yaml"),
        serde_yaml::to_string(&report.config)?,
    )?;

    println!(
        "kept {} of {} experiments (seed {})",
        report.selected.n_exp(),
        report.config.effective_n_to_test(),
        report.master_seed
    );
    Ok(())
}

pub fn load_config(path: Option<&Path>) -> Result<FardistConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&raw)?)
        }
        None => Ok(FardistConfig::default()),
    }
}

fn write_observations_csv(path: &Path, report: &FardistReport) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut header = vec!["experiment".to_string(), "rank".to_string(), "distance".to_string()];
    for obs in 0..report.selected.n_obs() {
        header.push(format!("x{obs}"));
    }
    for obs in 0..report.selected.n_obs() {
        header.push(format!("y{obs}"));
    }
    writer.write_record(&header)?;

    for (row, record) in report.selected_records.iter().enumerate() {
        let mut fields = vec![
            record.experiment.to_string(),
            record.rank.to_string(),
            format!("{:.6}", record.distance),
        ];
        for &x in report.selected.locations(row) {
            fields.push(format!("{x:.6}"));
        }
        for &y in report.selected.values(row) {
            fields.push(format!("{y:.6}"));
        }
        writer.write_record(&fields)?;
    }
    writer.flush()?;
    Ok(())
}
