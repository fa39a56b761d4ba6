//! CLI module for the retinopathy predictor
//!
//! Provides subcommands:
//! - `serve`: web form, JSON API and CSV download
//! - `predict`: one-off prediction printed to the terminal

pub mod predict;
pub mod serve;

use clap::{Parser, Subcommand};

/// Diabetic retinopathy risk predictor
#[derive(Parser, Debug)]
#[command(name = "retinopathy-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the prediction web server
    Serve,

    /// Predict for a single patient and print the result
    Predict(predict::PredictArgs),
}
