use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use fardist_rank::{posterior_curves, FardistReport};

#[derive(Args, Debug)]
pub struct CurvesArgs {
    /// `fardists.json` report produced by the generate command.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Row of the selected batch to compute curves for.
    #[arg(long, default_value_t = 0)]
    pub experiment: usize,
    /// Output JSON file with one curve per length-scale.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &CurvesArgs) -> Result<(), Box<dyn Error>> {
    let report: FardistReport = serde_json::from_str(&fs::read_to_string(&args.input)?)?;
    let curves = posterior_curves(
        &report.selected,
        args.experiment,
        &report.domain,
        &report.config.lengthscale_pool,
        report.config.signal_variance,
        report.config.noise_variance,
    )
    .map_err(|err| Box::new(err) as Box<dyn Error>)?;

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.out, serde_json::to_string_pretty(&curves)?)?;

    println!(
        "wrote {} curves for experiment {} to {}",
        curves.len(),
        args.experiment,
        args.out.display()
    );
    Ok(())
}
