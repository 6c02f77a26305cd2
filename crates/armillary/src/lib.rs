//! Armillary - entity-relationship diagram rendering through Graphviz.
//!
//! Structure building and rendering for declarative entity-relationship
//! models. A [`model::Model`] describes entities, attribute lists, labeled
//! groups, and labeled directed relationships; this crate turns it into an
//! inspectable [`EntityGraph`] and renders it to an image file via the
//! external Graphviz `dot` binary.

pub mod builtin;
pub mod config;
pub mod export;
pub mod structure;

mod error;

pub use armillary_core::{identifier, model};

pub use error::ArmillaryError;
pub use structure::EntityGraph;

use std::path::{Path, PathBuf};

use log::{debug, info, trace};

use armillary_core::model::Model;

use config::AppConfig;
use export::{RenderOptions, Renderer, graphviz::GraphvizRenderer};

/// Builder for turning entity-relationship models into rendered diagrams.
///
/// This provides an API for processing models through validation, graph
/// construction, and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use armillary::{DiagramBuilder, builtin, config::AppConfig};
///
/// let model = builtin::dataset_cleaning_model();
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Build the inspectable entity graph
/// let graph = builder.graph(&model)
///     .expect("Failed to build graph");
/// assert_eq!(graph.node_count(), 8);
///
/// // Render the graph to an image file
/// let path = builder.render(&graph, builtin::DEFAULT_DIAGRAM_FILE)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build a validated entity graph from a declarative model.
    ///
    /// The returned graph can be inspected (node and edge counts, clusters,
    /// label text, roots) before anything touches the filesystem.
    ///
    /// # Errors
    ///
    /// Returns `ArmillaryError::Model` for duplicate entities or
    /// relationships referencing unknown entities.
    pub fn graph(&self, model: &Model) -> Result<EntityGraph, ArmillaryError> {
        info!(model_name = model.name().to_string(); "Building entity graph");

        let graph = EntityGraph::from_model(model)?;

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count();
            "Entity graph built"
        );
        trace!(graph:?; "Built graph");

        Ok(graph)
    }

    /// Return the DOT source that rendering the given graph would feed to
    /// Graphviz.
    ///
    /// The source is deterministic for a given graph and configuration.
    pub fn dot_source(&self, graph: &EntityGraph) -> String {
        GraphvizRenderer::new(self.config.style().clone()).dot_source(graph)
    }

    /// Render an entity graph to an image file.
    ///
    /// The output format and intermediate-file handling come from the
    /// builder's configuration. Returns the path of the written image.
    ///
    /// # Errors
    ///
    /// Returns `ArmillaryError::Export` if the Graphviz `dot` binary is
    /// unavailable or rendering fails, and `ArmillaryError::Io` if the
    /// output cannot be written.
    pub fn render(
        &self,
        graph: &EntityGraph,
        output: impl AsRef<Path>,
    ) -> Result<PathBuf, ArmillaryError> {
        let options = RenderOptions::new(output.as_ref())
            .with_format(self.config.render().format())
            .with_keep_source(self.config.render().keep_source());

        let renderer = GraphvizRenderer::new(self.config.style().clone());
        let path = renderer.render(graph, &options)?;

        info!(output_file = path.display().to_string(); "Diagram rendered");
        Ok(path)
    }
}
