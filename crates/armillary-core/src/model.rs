//! Declarative entity-relationship model types.
//!
//! A [`Model`] is a static description of a domain: entities with typed
//! attributes, organized into labeled [`Group`]s, connected by labeled
//! directed [`Relationship`]s. The model carries no behavior of its own;
//! it exists to be turned into a rendered diagram.
//!
//! # Overview
//!
//! - [`Model`] - The root declaration: groups plus relationships.
//! - [`Group`] - A labeled collection of entities, rendered as one cluster.
//! - [`Entity`] - A named box with an ordered attribute list.
//! - [`Attribute`] / [`AttributeType`] - One `name: Type` line of an entity.
//! - [`Relationship`] - A labeled directed connection between two entities.
//! - [`ModelError`] - Structural validation failures.
//!
//! Declaration order is significant: groups, entities, and relationships
//! are rendered in the order they were declared.
//!
//! # Examples
//!
//! ```
//! use armillary_core::model::{AttributeType, Entity, Group, Model};
//!
//! let model = Model::new("Inventory")
//!     .with_group(
//!         Group::new("storage", "Storage")
//!             .entity(Entity::new("Warehouse").attribute("warehouseId", AttributeType::Uuid))
//!             .entity(Entity::new("Shelf").attribute("position", AttributeType::Number)),
//!     )
//!     .relate("Warehouse", "Shelf", "contains");
//!
//! assert!(model.validate().is_ok());
//! assert_eq!(model.entity_count(), 2);
//! ```

use std::{collections::HashSet, fmt};

use thiserror::Error;

use crate::identifier::Id;

/// Structural validation failures for a [`Model`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The same entity name was declared more than once, in any group.
    #[error("duplicate entity '{0}'")]
    DuplicateEntity(Id),

    /// A relationship endpoint names an entity that was never declared.
    #[error("relationship '{label}' references unknown entity '{id}'")]
    UnknownEndpoint { id: Id, label: String },
}

/// The type of one entity attribute, as shown in the rendered label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    Uuid,
    String,
    Number,
    Boolean,
    DateTime,
    Json,
    /// A homogeneous list, rendered as `List<T>`.
    List(Box<AttributeType>),
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::Uuid => write!(f, "UUID"),
            AttributeType::String => write!(f, "String"),
            AttributeType::Number => write!(f, "Number"),
            AttributeType::Boolean => write!(f, "Boolean"),
            AttributeType::DateTime => write!(f, "DateTime"),
            AttributeType::Json => write!(f, "JSON"),
            AttributeType::List(inner) => write!(f, "List<{inner}>"),
        }
    }
}

/// One named, typed attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    ty: AttributeType,
}

impl Attribute {
    /// Creates a new attribute.
    pub fn new(name: impl Into<String>, ty: AttributeType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Returns the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute type.
    pub fn ty(&self) -> &AttributeType {
        &self.ty
    }
}

impl fmt::Display for Attribute {
    /// Formats the attribute as it appears in a rendered label: `name: Type`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// A named entity with an ordered list of attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: Id,
    attributes: Vec<Attribute>,
}

impl Entity {
    /// Creates an entity with the given name and no attributes.
    pub fn new(name: &str) -> Self {
        Self {
            name: Id::new(name),
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute, preserving declaration order.
    pub fn attribute(mut self, name: impl Into<String>, ty: AttributeType) -> Self {
        self.attributes.push(Attribute::new(name, ty));
        self
    }

    /// Returns the entity name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Returns the attributes in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// A labeled collection of entities, rendered as one cluster.
///
/// The `key` is the cluster's internal identifier; the `label` is the text
/// shown on the rendered grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    key: String,
    label: String,
    entities: Vec<Entity>,
}

impl Group {
    /// Creates an empty group.
    ///
    /// # Arguments
    ///
    /// * `key` - Internal identifier, e.g. `"data"`.
    /// * `label` - Display label, e.g. `"Data Management"`.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            entities: Vec::new(),
        }
    }

    /// Appends an entity to this group.
    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Returns the internal group key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the entities in declaration order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

/// A labeled directed connection between two entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    source: Id,
    target: Id,
    label: String,
}

impl Relationship {
    /// Creates a relationship from `source` to `target`.
    pub fn new(source: Id, target: Id, label: impl Into<String>) -> Self {
        Self {
            source,
            target,
            label: label.into(),
        }
    }

    /// Returns the source entity name.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the target entity name.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the relationship label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The root model declaration: named groups plus relationships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    name: Id,
    groups: Vec<Group>,
    relationships: Vec<Relationship>,
}

impl Model {
    /// Creates an empty model with the given diagram name.
    pub fn new(name: &str) -> Self {
        Self {
            name: Id::new(name),
            groups: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Appends a group of entities.
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Declares a labeled directed relationship between two entity names.
    ///
    /// Endpoints are resolved by name at validation time, so relationships
    /// may be declared before or after the entities they connect.
    pub fn relate(mut self, source: &str, target: &str, label: impl Into<String>) -> Self {
        self.relationships
            .push(Relationship::new(Id::new(source), Id::new(target), label));
        self
    }

    /// Returns the diagram name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Returns the groups in declaration order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns the relationships in declaration order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Returns an iterator over all entities across all groups.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.groups.iter().flat_map(|group| group.entities())
    }

    /// Returns the total number of entities across all groups.
    pub fn entity_count(&self) -> usize {
        self.groups.iter().map(|group| group.entities().len()).sum()
    }

    /// Returns the total number of relationships.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Checks the model for structural problems.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateEntity`] if the same entity name is
    /// declared more than once, and [`ModelError::UnknownEndpoint`] if a
    /// relationship references an entity that was never declared.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut seen = HashSet::new();
        for entity in self.entities() {
            if !seen.insert(entity.name()) {
                return Err(ModelError::DuplicateEntity(entity.name()));
            }
        }

        for relationship in &self.relationships {
            for endpoint in [relationship.source(), relationship.target()] {
                if !seen.contains(&endpoint) {
                    return Err(ModelError::UnknownEndpoint {
                        id: endpoint,
                        label: relationship.label().to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> Model {
        Model::new("Sample")
            .with_group(
                Group::new("left", "Left Side")
                    .entity(
                        Entity::new("Alpha")
                            .attribute("alphaId", AttributeType::Uuid)
                            .attribute("label", AttributeType::String),
                    )
                    .entity(Entity::new("Beta").attribute("count", AttributeType::Number)),
            )
            .with_group(
                Group::new("right", "Right Side")
                    .entity(Entity::new("Gamma").attribute("active", AttributeType::Boolean)),
            )
            .relate("Alpha", "Beta", "feeds")
            .relate("Beta", "Gamma", "drains")
    }

    #[test]
    fn test_counts() {
        let model = sample_model();

        assert_eq!(model.entity_count(), 3);
        assert_eq!(model.relationship_count(), 2);
        assert_eq!(model.groups().len(), 2);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let model = sample_model();

        let names: Vec<String> = model.entities().map(|e| e.name().to_string()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);

        let labels: Vec<&str> = model.relationships().iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["feeds", "drains"]);
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(sample_model().validate(), Ok(()));
    }

    #[test]
    fn test_validate_duplicate_entity() {
        let model = Model::new("Dup")
            .with_group(Group::new("a", "A").entity(Entity::new("Node")))
            .with_group(Group::new("b", "B").entity(Entity::new("Node")));

        assert_eq!(
            model.validate(),
            Err(ModelError::DuplicateEntity(Id::new("Node")))
        );
    }

    #[test]
    fn test_validate_unknown_endpoint() {
        let model = Model::new("Dangling")
            .with_group(Group::new("a", "A").entity(Entity::new("Known")))
            .relate("Known", "Missing", "points at");

        assert_eq!(
            model.validate(),
            Err(ModelError::UnknownEndpoint {
                id: Id::new("Missing"),
                label: "points at".to_string(),
            })
        );
    }

    #[test]
    fn test_attribute_display() {
        let attr = Attribute::new("uploadedAt", AttributeType::DateTime);
        assert_eq!(attr.to_string(), "uploadedAt: DateTime");

        let list = Attribute::new("members", AttributeType::List(Box::new(AttributeType::Uuid)));
        assert_eq!(list.to_string(), "members: List<UUID>");
    }

    #[test]
    fn test_attribute_type_display() {
        assert_eq!(AttributeType::Uuid.to_string(), "UUID");
        assert_eq!(AttributeType::String.to_string(), "String");
        assert_eq!(AttributeType::Number.to_string(), "Number");
        assert_eq!(AttributeType::Boolean.to_string(), "Boolean");
        assert_eq!(AttributeType::DateTime.to_string(), "DateTime");
        assert_eq!(AttributeType::Json.to_string(), "JSON");
        assert_eq!(
            AttributeType::List(Box::new(AttributeType::List(Box::new(
                AttributeType::String
            ))))
            .to_string(),
            "List<List<String>>"
        );
    }

    #[test]
    fn test_empty_model_is_valid() {
        assert_eq!(Model::new("Empty").validate(), Ok(()));
    }
}
