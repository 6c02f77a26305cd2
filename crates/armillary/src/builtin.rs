//! The built-in dataset cleaning platform model.
//!
//! This is the domain model the `armillary` binary renders when invoked
//! with no arguments: the entities of the dataset cleaning platform, their
//! attributes, and the relationships between them, declared as literals.

use armillary_core::model::{AttributeType, Entity, Group, Model};

/// Default output file for the built-in diagram, relative to the working
/// directory.
pub const DEFAULT_DIAGRAM_FILE: &str = "dataset_cleaning_uml_cluster.png";

/// Returns the dataset cleaning platform's entity-relationship model.
///
/// Eight entities in four groups, connected by nine labeled
/// relationships. The declaration is static; rendering it twice produces
/// identical output.
pub fn dataset_cleaning_model() -> Model {
    Model::new("DatasetCleaningUMLCluster")
        .with_group(
            Group::new("data", "Data Management")
                .entity(
                    Entity::new("Dataset")
                        .attribute("datasetId", AttributeType::Uuid)
                        .attribute("filename", AttributeType::String)
                        .attribute("status", AttributeType::String)
                        .attribute("size", AttributeType::Number)
                        .attribute("uploadedAt", AttributeType::DateTime),
                )
                .entity(
                    Entity::new("Record")
                        .attribute("index", AttributeType::Number)
                        .attribute("fields", AttributeType::Json),
                )
                .entity(
                    Entity::new("Field")
                        .attribute("name", AttributeType::String)
                        .attribute("value", AttributeType::String)
                        .attribute("changed", AttributeType::Boolean)
                        .attribute("newValue", AttributeType::String),
                ),
        )
        .with_group(
            Group::new("processing", "Processing").entity(
                Entity::new("ProcessingJob")
                    .attribute("jobId", AttributeType::Uuid)
                    .attribute("datasetId", AttributeType::Uuid)
                    .attribute("status", AttributeType::String)
                    .attribute("startedAt", AttributeType::DateTime),
            ),
        )
        .with_group(
            Group::new("review", "Review")
                .entity(
                    Entity::new("ReviewDecision")
                        .attribute("datasetId", AttributeType::Uuid)
                        .attribute("recordIndex", AttributeType::Number)
                        .attribute("approved", AttributeType::Boolean)
                        .attribute("comments", AttributeType::String),
                )
                .entity(
                    Entity::new("ReviewProgress")
                        .attribute("datasetId", AttributeType::Uuid)
                        .attribute("totalRecords", AttributeType::Number)
                        .attribute("reviewedRecords", AttributeType::Number)
                        .attribute("progress", AttributeType::Number),
                ),
        )
        .with_group(
            Group::new("users", "Users")
                .entity(
                    Entity::new("User")
                        .attribute("userId", AttributeType::Uuid)
                        .attribute("email", AttributeType::String)
                        .attribute("role", AttributeType::String),
                )
                .entity(
                    Entity::new("Organization")
                        .attribute("orgId", AttributeType::Uuid)
                        .attribute("name", AttributeType::String)
                        .attribute(
                            "members",
                            AttributeType::List(Box::new(AttributeType::Uuid)),
                        ),
                ),
        )
        .relate("Dataset", "Record", "contains")
        .relate("Record", "Field", "has")
        .relate("Dataset", "ProcessingJob", "processed by")
        .relate("Dataset", "ReviewProgress", "tracks")
        .relate("Record", "ReviewDecision", "reviewed by")
        .relate("User", "ReviewDecision", "submits")
        .relate("User", "Dataset", "uploads")
        .relate("User", "Organization", "belongs to")
        .relate("Organization", "Dataset", "owns")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_is_valid() {
        assert!(dataset_cleaning_model().validate().is_ok());
    }

    #[test]
    fn test_model_shape() {
        let model = dataset_cleaning_model();

        assert_eq!(model.entity_count(), 8);
        assert_eq!(model.relationship_count(), 9);
        assert_eq!(model.groups().len(), 4);
        assert_eq!(model.name(), "DatasetCleaningUMLCluster");
    }

    #[test]
    fn test_group_labels() {
        let model = dataset_cleaning_model();

        let labels: Vec<&str> = model.groups().iter().map(|g| g.label()).collect();
        assert_eq!(labels, ["Data Management", "Processing", "Review", "Users"]);
    }

    #[test]
    fn test_relationship_labels() {
        let model = dataset_cleaning_model();

        let labels: Vec<&str> = model.relationships().iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            [
                "contains",
                "has",
                "processed by",
                "tracks",
                "reviewed by",
                "submits",
                "uploads",
                "belongs to",
                "owns",
            ]
        );
    }

    #[test]
    fn test_default_output_is_relative() {
        assert!(!DEFAULT_DIAGRAM_FILE.starts_with('/'));
        assert!(DEFAULT_DIAGRAM_FILE.ends_with(".png"));
    }
}
