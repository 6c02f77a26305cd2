//! The renderable entity graph built from a validated model.
//!
//! [`EntityGraph`] is the intermediate form between a declarative
//! [`Model`](armillary_core::model::Model) and an exported document. It
//! resolves every relationship endpoint, computes the label text for each
//! node, and keeps clusters, nodes, and edges in declaration order so that
//! the exported document is deterministic.
//!
//! The graph also tracks incoming and outgoing edges per node. This is not
//! needed for export, but it makes the structure inspectable: callers can
//! count nodes and edges, find roots, and walk outgoing neighbors before
//! anything is rendered.

use std::collections::HashMap;

use indexmap::IndexMap;

use armillary_core::{
    identifier::Id,
    model::{Entity, Model},
};

use crate::error::ArmillaryError;

/// The rendered label content of a single node.
///
/// A card consists of a title line (the entity name) followed by one line
/// per attribute, formatted as `+ name: Type`. The leading `+` marks the
/// attribute as public in UML notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCard {
    id: Id,
    title: String,
    lines: Vec<String>,
}

impl NodeCard {
    fn from_entity(entity: &Entity) -> Self {
        Self {
            id: entity.name(),
            title: entity.name().to_string(),
            lines: entity
                .attributes()
                .iter()
                .map(|attr| format!("+ {attr}"))
                .collect(),
        }
    }

    /// Returns the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the title line.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the attribute lines, without the title.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the full multi-line label text: title first, then one line
    /// per attribute.
    pub fn label(&self) -> String {
        let mut text = self.title.clone();
        for line in &self.lines {
            text.push('\n');
            text.push_str(line);
        }
        text
    }
}

/// A labeled visual grouping of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    key: String,
    label: String,
    members: Vec<Id>,
}

impl Cluster {
    /// Returns the internal cluster key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the member node identifiers in declaration order.
    pub fn members(&self) -> &[Id] {
        &self.members
    }
}

/// A labeled directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLine {
    source: Id,
    target: Id,
    label: String,
}

impl EdgeLine {
    /// Returns the source node identifier.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the target node identifier.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the edge label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A validated, renderable graph of entity nodes and relationship edges.
///
/// Construction via [`EntityGraph::from_model`] is the single place where
/// model validation happens; a constructed graph is guaranteed to have
/// every edge endpoint present among its nodes.
#[derive(Debug)]
pub struct EntityGraph {
    name: Id,
    clusters: Vec<Cluster>,
    nodes: IndexMap<Id, NodeCard>,
    edges: Vec<EdgeLine>,
    incoming: HashMap<Id, Vec<usize>>,
    outgoing: HashMap<Id, Vec<usize>>,
}

impl EntityGraph {
    /// Builds an entity graph from a declarative model.
    ///
    /// Clusters, nodes, and edges preserve the model's declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::Model`] if the model declares the same
    /// entity twice or a relationship references an unknown entity.
    pub fn from_model(model: &Model) -> Result<Self, ArmillaryError> {
        model.validate()?;

        let mut clusters = Vec::with_capacity(model.groups().len());
        let mut nodes = IndexMap::new();
        for group in model.groups() {
            let members: Vec<Id> = group.entities().iter().map(Entity::name).collect();
            for entity in group.entities() {
                nodes.insert(entity.name(), NodeCard::from_entity(entity));
            }
            clusters.push(Cluster {
                key: group.key().to_string(),
                label: group.label().to_string(),
                members,
            });
        }

        let mut edges = Vec::with_capacity(model.relationship_count());
        let mut incoming: HashMap<Id, Vec<usize>> = HashMap::new();
        let mut outgoing: HashMap<Id, Vec<usize>> = HashMap::new();
        for relationship in model.relationships() {
            let idx = edges.len();
            edges.push(EdgeLine {
                source: relationship.source(),
                target: relationship.target(),
                label: relationship.label().to_string(),
            });
            outgoing.entry(relationship.source()).or_default().push(idx);
            incoming.entry(relationship.target()).or_default().push(idx);
        }

        Ok(Self {
            name: model.name(),
            clusters,
            nodes,
            edges,
            incoming,
            outgoing,
        })
    }

    /// Returns the diagram name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Returns the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if a node with the given identifier exists in the graph.
    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the node card for the given identifier, if it exists.
    pub fn node(&self, id: Id) -> Option<&NodeCard> {
        self.nodes.get(&id)
    }

    /// Returns an iterator over all node cards in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeCard> {
        self.nodes.values()
    }

    /// Returns the edges in declaration order.
    pub fn edges(&self) -> &[EdgeLine] {
        &self.edges
    }

    /// Returns the clusters in declaration order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Returns an iterator over root nodes (nodes with no incoming edges).
    pub fn roots(&self) -> impl Iterator<Item = &NodeCard> {
        self.nodes
            .values()
            .filter(|card| !self.incoming.contains_key(&card.id()))
    }

    /// Returns an iterator over nodes that are targets of outgoing edges
    /// from the given source.
    ///
    /// Returns an empty iterator if the source node has no outgoing edges.
    pub fn outgoing_nodes(&self, source_id: Id) -> impl Iterator<Item = &NodeCard> {
        self.outgoing
            .get(&source_id)
            .into_iter()
            .flatten()
            .map(|idx| {
                let target = self.edges[*idx].target();
                &self.nodes[&target]
            })
    }
}
