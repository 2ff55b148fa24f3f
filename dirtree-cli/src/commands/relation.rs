//! Relation command implementation.
//!
//! Reports how two paths relate, and optionally asserts a relationship:
//! with `--check` the command exits with status 1 when the paths do not
//! relate as required.

use crate::error::CliError;
use crate::utils::{display_path, print_json, GlobalOptions};
use clap::{Args, ValueEnum};
use dirtree::{is_child, is_direct_subdirectory, is_subdirectory, PathRelationship};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Show how two paths relate to each other.
#[derive(Args)]
pub struct RelationCommand {
    /// Reference path
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Path compared against the reference
    #[arg(value_name = "OTHER")]
    pub other: PathBuf,

    /// Fail unless OTHER relates to REFERENCE this way
    #[arg(long, value_enum, value_name = "RELATION")]
    pub check: Option<RelationCheck>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Relationship asserted by `--check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum RelationCheck {
    /// OTHER lies below REFERENCE
    Child,
    /// OTHER is an existing directory below the existing directory REFERENCE
    Subdirectory,
    /// OTHER is an existing directory exactly one level below REFERENCE
    DirectSubdirectory,
    /// Both paths resolve to the same location
    Same,
    /// Neither path contains the other
    Unrelated,
}

/// Machine-readable result of the relation command.
#[derive(Debug, Serialize)]
struct RelationReport {
    reference: String,
    other: String,
    relationship: &'static str,
    is_child: bool,
    is_direct_subdirectory: bool,
}

impl RelationCommand {
    /// Execute the relation command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let relationship = PathRelationship::between(&self.reference, &self.other);

        if self.json {
            print_json(&RelationReport {
                reference: display_path(&self.reference),
                other: display_path(&self.other),
                relationship: relationship.as_str(),
                is_child: is_child(&self.reference, &self.other),
                is_direct_subdirectory: is_direct_subdirectory(&self.reference, &self.other),
            })?;
        } else {
            println!("{}", relationship.description(&self.reference, &self.other));
        }

        match self.check {
            Some(check) if !check.holds(&self.reference, &self.other)? => {
                Err(CliError::SemanticFailure(format!(
                    "{} is not {} {}",
                    self.other.display(),
                    check.phrase(),
                    self.reference.display()
                )))
            }
            _ => Ok(()),
        }
    }
}

impl RelationCheck {
    fn holds(self, reference: &Path, other: &Path) -> Result<bool, CliError> {
        Ok(match self {
            Self::Child => is_child(reference, other),
            Self::Subdirectory => is_subdirectory(reference, other)?,
            Self::DirectSubdirectory => is_direct_subdirectory(reference, other),
            Self::Same => PathRelationship::between(reference, other) == PathRelationship::Same,
            Self::Unrelated => !PathRelationship::between(reference, other).is_hierarchical(),
        })
    }

    fn phrase(self) -> &'static str {
        match self {
            Self::Child => "a child of",
            Self::Subdirectory => "a subdirectory of",
            Self::DirectSubdirectory => "a direct subdirectory of",
            Self::Same => "the same path as",
            Self::Unrelated => "unrelated to",
        }
    }
}
