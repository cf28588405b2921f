//! Applies semantic schema changes to a GraphQL SDL document.
//!
//! ## Usage
//!
//! A schema diff tool describes the differences between two schemas as a list of [`Change`]
//! records: a change type, a schema coordinate such as `Query.user.id` or `@cacheControl.maxAge`,
//! and the metadata needed to replay it. This crate replays such a list on top of a schema
//! document:
//!
//! ```
//! let changes = schema_patch::parse_changes(
//!     r#"[{
//!         "type": "FIELD_ADDED",
//!         "path": "Query.b",
//!         "meta": { "typeName": "Query", "addedFieldName": "b", "addedFieldReturnType": "Int" }
//!     }]"#,
//! )
//! .unwrap();
//! let patched = schema_patch::patch_sdl(
//!     "type Query { a: String }",
//!     &changes,
//!     &schema_patch::PatchConfig::default(),
//! )
//! .unwrap();
//! assert!(patched.contains("b: Int"));
//! ```
//!
//! Every change is checked against the current state of the document before it is applied: a
//! "changed" record whose old value does not match what the document holds is rejected. What
//! happens to rejected changes is decided by the [`ErrorPolicy`] of the [`PatchConfig`].
//!
//! Comments and source locations of the input are not preserved.

#![warn(
    rustdoc::broken_intra_doc_links,
    unreachable_pub,
    unreachable_patterns,
    unused,
    unused_qualifications,
    dead_code,
    while_true,
    unconditional_panic,
    clippy::all
)]

pub mod change;
pub mod config;
mod coordinate;
mod display_helpers;
pub mod error;
mod index;
mod patches;
mod templates;

use apollo_compiler::Schema;
use apollo_compiler::ast;
use apollo_compiler::validation::Valid;

pub use crate::change::Change;
pub use crate::change::ChangeKind;
pub use crate::change::ChangeType;
pub use crate::change::Criticality;
pub use crate::change::CriticalityLevel;
pub use crate::change::meta;
pub use crate::change::parse_changes;
pub use crate::config::ErrorPolicy;
pub use crate::config::PatchConfig;
pub use crate::error::PatchError;
pub use crate::index::NodeKind;
pub use crate::index::SchemaIndex;
pub use crate::patches::apply;

/// Applies `changes` to a copy of `document`.
pub fn patch(
    document: &ast::Document,
    changes: &[Change],
    config: &PatchConfig,
) -> Result<ast::Document, PatchError> {
    let mut index = SchemaIndex::new(document);
    apply(&mut index, changes, config)?;
    Ok(index.into_document())
}

/// Parses `sdl`, applies `changes` and prints the result.
pub fn patch_sdl(
    sdl: &str,
    changes: &[Change],
    config: &PatchConfig,
) -> Result<String, PatchError> {
    let document =
        ast::Document::parse(sdl, "schema.graphql").map_err(|invalid| PatchError::Parse {
            message: invalid.errors.to_string(),
        })?;
    Ok(patch(&document, changes, config)?.to_string())
}

/// Applies `changes` to a schema and validates the result.
///
/// The patched document has to be a valid schema again, which a change set that leaves a dangling
/// type reference behind does not produce.
pub fn patch_schema(
    schema: &Schema,
    changes: &[Change],
    config: &PatchConfig,
) -> Result<Valid<Schema>, PatchError> {
    let document = ast::Document::parse(schema.to_string(), "schema.graphql").map_err(
        |invalid| PatchError::Parse {
            message: invalid.errors.to_string(),
        },
    )?;
    patch(&document, changes, config)?
        .to_schema_validate()
        .map_err(|invalid| PatchError::Build {
            message: invalid.errors.to_string(),
        })
}
