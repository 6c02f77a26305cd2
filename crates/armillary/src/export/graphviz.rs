//! Graphviz rendering backend.
//!
//! [`GraphvizRenderer`] translates an [`EntityGraph`] into a DOT document
//! and hands it to the external Graphviz `dot` binary for layout and
//! rasterization. The document is built as a [`dot_structures`] AST rather
//! than by string concatenation, then printed and executed through
//! [`graphviz_rust`].
//!
//! The `dot` binary must be available on `PATH`; its absence surfaces as a
//! render error from [`Renderer::render`].

use std::{fs, path::PathBuf};

use dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id as DotId, Node, NodeId, Stmt, Subgraph,
    Vertex,
};
use graphviz_rust::{
    cmd::{CommandArg, Format},
    printer::PrinterContext,
};
use log::{debug, info};

use crate::{
    config::StyleConfig,
    export::{Error, ImageFormat, RenderOptions, Renderer},
    structure::EntityGraph,
};

/// Renderer backed by the external Graphviz `dot` binary.
pub struct GraphvizRenderer {
    style: StyleConfig,
}

impl GraphvizRenderer {
    /// Creates a renderer with the given style attributes.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Builds the DOT document for the given entity graph.
    ///
    /// The document is a directed graph: one `cluster_<key>` subgraph per
    /// cluster carrying its display label, one node per entity with the
    /// card text as a multi-line label, and one labeled edge per
    /// relationship. Statement order follows the graph's declaration
    /// order, so the document is identical across runs.
    pub fn document(&self, graph: &EntityGraph) -> Graph {
        let mut stmts = Vec::new();

        if let Some(rankdir) = self.style.rankdir() {
            stmts.push(Stmt::Attribute(quoted("rankdir", rankdir)));
        }
        if let Some(background_color) = self.style.background_color() {
            stmts.push(Stmt::Attribute(quoted("bgcolor", background_color)));
        }
        if let Some(font_name) = self.style.font_name() {
            stmts.push(Stmt::Attribute(quoted("fontname", font_name)));
            stmts.push(Stmt::GAttribute(GraphAttributes::Node(vec![quoted(
                "fontname", font_name,
            )])));
            stmts.push(Stmt::GAttribute(GraphAttributes::Edge(vec![quoted(
                "fontname", font_name,
            )])));
        }

        for cluster in graph.clusters() {
            let mut inner = vec![Stmt::Attribute(quoted("label", cluster.label()))];
            for member in cluster.members() {
                let Some(card) = graph.node(*member) else {
                    continue;
                };
                inner.push(Stmt::Node(Node {
                    id: node_ref(&card.id().to_string()),
                    attributes: vec![quoted("label", &card.label())],
                }));
            }
            stmts.push(Stmt::Subgraph(Subgraph {
                id: DotId::Plain(format!("cluster_{}", cluster.key())),
                stmts: inner,
            }));
        }

        for edge in graph.edges() {
            stmts.push(Stmt::Edge(Edge {
                ty: EdgeTy::Pair(
                    Vertex::N(node_ref(&edge.source().to_string())),
                    Vertex::N(node_ref(&edge.target().to_string())),
                ),
                attributes: vec![quoted("label", edge.label())],
            }));
        }

        Graph::DiGraph {
            id: DotId::Plain(graph.name().to_string()),
            strict: false,
            stmts,
        }
    }

    /// Returns the printed DOT source for the given entity graph.
    pub fn dot_source(&self, graph: &EntityGraph) -> String {
        graphviz_rust::print(self.document(graph), &mut PrinterContext::default())
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, graph: &EntityGraph, options: &RenderOptions) -> Result<PathBuf, Error> {
        let source = self.dot_source(graph);
        debug!(source_len = source.len(); "DOT document printed");

        if options.keep_source() {
            let source_path = options.output().with_extension("dot");
            fs::write(&source_path, &source)?;
            debug!(source_file = source_path.display().to_string(); "Intermediate DOT source kept");
        }

        let output = options.output().to_string_lossy().to_string();
        info!(
            output_file = output,
            format = options.format().to_string();
            "Invoking Graphviz"
        );

        graphviz_rust::exec_dot(
            source,
            vec![
                CommandArg::Format(command_format(options.format())),
                CommandArg::Output(output),
            ],
        )
        .map_err(|err| Error::Render(format!("Graphviz 'dot' invocation failed: {err}")))?;

        Ok(options.output().to_path_buf())
    }
}

/// Maps the output format onto the Graphviz command-line format flag.
fn command_format(format: ImageFormat) -> Format {
    match format {
        ImageFormat::Png => Format::Png,
        ImageFormat::Svg => Format::Svg,
    }
}

/// A `key="value"` attribute with the value escaped for DOT.
fn quoted(key: &str, value: &str) -> Attribute {
    Attribute(
        DotId::Plain(key.to_string()),
        DotId::Escaped(format!("\"{}\"", escape_label(value))),
    )
}

/// A reference to a node by its quoted identifier.
fn node_ref(name: &str) -> NodeId {
    NodeId(
        DotId::Escaped(format!("\"{}\"", escape_label(name))),
        None,
    )
}

/// Escapes text for use inside a double-quoted DOT string.
///
/// Backslashes and quotes are escaped; newlines become the DOT `\n`
/// line-break sequence so multi-line labels render as centered lines.
fn escape_label(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use armillary_core::model::{AttributeType, Entity, Group, Model};
    use proptest::prelude::*;

    use super::*;

    fn review_model() -> Model {
        Model::new("ReviewFlow")
            .with_group(
                Group::new("work", "Work Items")
                    .entity(
                        Entity::new("Task")
                            .attribute("taskId", AttributeType::Uuid)
                            .attribute("title", AttributeType::String),
                    )
                    .entity(Entity::new("Comment").attribute("body", AttributeType::String)),
            )
            .with_group(
                Group::new("people", "People")
                    .entity(Entity::new("Reviewer").attribute("email", AttributeType::String)),
            )
            .relate("Task", "Comment", "collects")
            .relate("Reviewer", "Comment", "writes")
    }

    fn source_for(model: &Model) -> String {
        let graph = EntityGraph::from_model(model).expect("model should build");
        GraphvizRenderer::new(StyleConfig::default()).dot_source(&graph)
    }

    #[test]
    fn test_document_is_directed_and_named() {
        let source = source_for(&review_model());

        assert!(source.contains("digraph"), "source: {source}");
        assert!(source.contains("ReviewFlow"));
    }

    #[test]
    fn test_clusters_carry_labels() {
        let source = source_for(&review_model());

        assert!(source.contains("cluster_work"));
        assert!(source.contains("cluster_people"));
        assert!(source.contains("\"Work Items\""));
        assert!(source.contains("\"People\""));
    }

    #[test]
    fn test_node_labels_are_multiline() {
        let source = source_for(&review_model());

        assert!(source.contains("\"Task\\n+ taskId: UUID\\n+ title: String\""));
    }

    #[test]
    fn test_one_edge_statement_per_relationship() {
        let source = source_for(&review_model());

        assert_eq!(source.matches("->").count(), 2);
        assert!(source.contains("\"collects\""));
        assert!(source.contains("\"writes\""));
    }

    #[test]
    fn test_dot_source_is_deterministic() {
        let model = review_model();

        assert_eq!(source_for(&model), source_for(&model));
    }

    #[test]
    fn test_style_attributes_emitted() {
        let model = review_model();
        let graph = EntityGraph::from_model(&model).expect("model should build");
        let style = StyleConfig::new(
            Some("LR".to_string()),
            Some("Helvetica".to_string()),
            Some("transparent".to_string()),
        );
        let source = GraphvizRenderer::new(style).dot_source(&graph);

        assert!(source.contains("rankdir"));
        assert!(source.contains("\"LR\""));
        assert!(source.contains("bgcolor"));
        assert!(source.contains("\"Helvetica\""));
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("plain"), "plain");
        assert_eq!(escape_label("two\nlines"), "two\\nlines");
        assert_eq!(escape_label("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_label("back\\slash"), "back\\\\slash");
    }

    /// Inverse of `escape_label`, for roundtrip checking.
    fn unescape_label(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some('n') => out.push('\n'),
                    Some(other) => out.push(other),
                    None => out.push(c),
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    proptest! {
        #[test]
        fn prop_escape_roundtrips(text in any::<String>()) {
            prop_assert_eq!(unescape_label(&escape_label(&text)), text);
        }

        #[test]
        fn prop_escape_leaves_no_raw_newlines(text in any::<String>()) {
            prop_assert!(!escape_label(&text).contains('\n'));
        }
    }
}
