//! The document assembly engine: formatting helpers, the field schema, the
//! clause selector, the document model and the shipped catalog.

pub mod catalog;
pub mod clause;
pub mod condition;
pub mod document;
pub mod export;
pub mod form;
pub mod format;
pub mod registry;
pub mod schema;
pub mod slots;

pub use document::{Block, Document, Section};
pub use form::{FieldValue, FormData};
pub use registry::{Assembly, CatalogError, ContractTemplate, TemplateCategory, TemplateRegistry, TemplateSummary};
pub use schema::{Diagnostic, FieldKind, FieldSpec};
