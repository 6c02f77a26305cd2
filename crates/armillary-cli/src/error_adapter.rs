//! Error adapter for converting ArmillaryError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. None of
//! the library errors carry source spans, so the adapter's job is to
//! attach stable diagnostic codes and, where useful, help text.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use armillary::ArmillaryError;

/// A reportable error that can be rendered by miette.
pub struct Reportable<'a>(pub &'a ArmillaryError);

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArmillaryError::Io(_) => "armillary::io",
            ArmillaryError::Model(_) => "armillary::model",
            ArmillaryError::Config(_) => "armillary::config",
            ArmillaryError::Export(_) => "armillary::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ArmillaryError::Export(_) => Some(Box::new(
                "rendering requires the Graphviz 'dot' binary on PATH",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use armillary::model::ModelError;

    use super::*;

    #[test]
    fn test_code_per_variant() {
        let err = ArmillaryError::Config("bad config".to_string());
        let reportable = Reportable(&err);

        assert_eq!(reportable.code().expect("code").to_string(), "armillary::config");
    }

    #[test]
    fn test_model_error_display() {
        let err = ArmillaryError::Model(ModelError::DuplicateEntity("Dataset".into()));
        let reportable = Reportable(&err);

        assert_eq!(
            reportable.to_string(),
            "Model error: duplicate entity 'Dataset'"
        );
        assert_eq!(reportable.code().expect("code").to_string(), "armillary::model");
    }

    #[test]
    fn test_export_error_carries_help() {
        let err = ArmillaryError::Export("dot not found".into());
        let reportable = Reportable(&err);

        assert!(reportable.help().is_some());
        assert_eq!(reportable.code().expect("code").to_string(), "armillary::export");
    }

    #[test]
    fn test_non_export_errors_have_no_help() {
        let err = ArmillaryError::Config("bad".to_string());
        assert!(Reportable(&err).help().is_none());
    }
}
