//! CLI logic for the Armillary diagram generator.
//!
//! This module contains the core CLI logic for the Armillary diagram
//! generator: resolve configuration, build the built-in model's entity
//! graph, and render it through Graphviz.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{path::PathBuf, str::FromStr};

use log::info;

use armillary::{
    ArmillaryError, DiagramBuilder, builtin,
    config::{AppConfig, RenderConfig},
    export::ImageFormat,
};

/// Run the Armillary CLI application
///
/// This function builds the built-in dataset cleaning model, renders it
/// through Graphviz, and returns the path of the written image file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArmillaryError` for:
/// - Configuration loading errors
/// - Model validation errors
/// - Rendering errors (including an unavailable Graphviz binary)
/// - File I/O errors
pub fn run(args: &Args) -> Result<PathBuf, ArmillaryError> {
    info!(output_path = args.output; "Generating diagram");

    // Load configuration, then apply command-line overrides
    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = apply_overrides(app_config, args)?;

    // Process the built-in model using the DiagramBuilder API
    let model = builtin::dataset_cleaning_model();
    let builder = DiagramBuilder::new(app_config);
    let graph = builder.graph(&model)?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        clusters = graph.clusters().len();
        "Entity graph ready"
    );

    // Render the output image
    let path = builder.render(&graph, &args.output)?;

    info!(output_file = path.display().to_string(); "Diagram exported successfully");

    Ok(path)
}

/// Fold command-line overrides into the loaded configuration.
fn apply_overrides(config: AppConfig, args: &Args) -> Result<AppConfig, ArmillaryError> {
    let format = match &args.format {
        Some(raw) => ImageFormat::from_str(raw).map_err(ArmillaryError::Config)?,
        None => config.render().format(),
    };
    let keep_source = args.keep_dot || config.render().keep_source();

    Ok(AppConfig::new(
        RenderConfig::new(format, keep_source),
        config.style().clone(),
    ))
}
