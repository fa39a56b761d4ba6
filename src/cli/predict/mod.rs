//! Predict command - score one patient from the terminal

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::domain::patient::{AGE, CHOLESTEROL, DIASTOLIC_BP, SYSTOLIC_BP};
use crate::domain::PatientSample;
use crate::infrastructure::services::{Prediction, PredictionService};

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Model to use; defaults to the first configured model
    #[arg(long)]
    pub model: Option<String>,

    /// Age in years
    #[arg(long, default_value_t = AGE.default)]
    pub age: u32,

    /// Systolic blood pressure (mmHg)
    #[arg(long, default_value_t = SYSTOLIC_BP.default)]
    pub systolic_bp: u32,

    /// Diastolic blood pressure (mmHg)
    #[arg(long, default_value_t = DIASTOLIC_BP.default)]
    pub diastolic_bp: u32,

    /// Total cholesterol (mg/dl)
    #[arg(long, default_value_t = CHOLESTEROL.default)]
    pub cholesterol: u32,

    /// Write the CSV export to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Skip the CSV export entirely
    #[arg(long)]
    pub no_csv: bool,
}

impl PredictArgs {
    pub fn sample(&self) -> PatientSample {
        PatientSample::new(
            self.age,
            self.systolic_bp,
            self.diastolic_bp,
            self.cholesterol,
        )
    }
}

/// Load artifacts, predict, print the result panel and export the CSV
pub fn run(args: PredictArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let service = crate::create_prediction_service(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let prediction = execute(&service, &args, &mut out)?;

    if args.no_csv {
        return Ok(());
    }

    let csv = prediction.record().to_csv()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "CSV written to {}", path.display())?;
        }
        None => {
            writeln!(out)?;
            write!(out, "{}", csv)?;
        }
    }

    Ok(())
}

fn execute(
    service: &PredictionService,
    args: &PredictArgs,
    out: &mut impl Write,
) -> anyhow::Result<Prediction> {
    let prediction = service.predict(args.model.as_deref(), args.sample())?;
    writeln!(out, "{}", prediction.panel().to_text())?;
    Ok(prediction)
}
