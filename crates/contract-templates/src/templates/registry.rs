use super::catalog;
use super::document::Document;
use super::form::FormData;
use super::schema::{self, Diagnostic, FieldKind, FieldSpec};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Broad grouping used for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Housing,
    Employment,
    Family,
    Commercial,
    Petition,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 5] = [
        TemplateCategory::Housing,
        TemplateCategory::Employment,
        TemplateCategory::Family,
        TemplateCategory::Commercial,
        TemplateCategory::Petition,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            TemplateCategory::Housing => "housing",
            TemplateCategory::Employment => "employment",
            TemplateCategory::Family => "family",
            TemplateCategory::Commercial => "commercial",
            TemplateCategory::Petition => "petition",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TemplateCategory::Housing => "Konut ve Kira",
            TemplateCategory::Employment => "İş ve İstihdam",
            TemplateCategory::Family => "Aile",
            TemplateCategory::Commercial => "Ticari",
            TemplateCategory::Petition => "Dilekçe",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(value))
    }
}

/// One document kind: its inputs and how to turn them into a [`Document`].
///
/// `render` must be pure and total. It is called with whatever the caller sent,
/// including an empty form, and must always produce a complete document.
pub trait ContractTemplate: Send + Sync {
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn category(&self) -> TemplateCategory;
    fn fields(&self) -> &[FieldSpec];
    fn render(&self, data: &FormData) -> Document;

    fn default_data(&self, today: NaiveDate) -> FormData {
        schema::defaults_for(self.fields(), today)
    }

    fn validate(&self, data: &FormData) -> Vec<Diagnostic> {
        schema::validate(self.fields(), data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("template id '{0}' is already registered")]
    DuplicateTemplateId(String),
    #[error("template '{0}' not found")]
    UnknownTemplateId(String),
    #[error("template '{template}' declares an invalid field '{key}': {reason}")]
    InvalidField {
        template: String,
        key: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub category: TemplateCategory,
    pub category_label: &'static str,
    pub field_count: usize,
}

/// Result of validating and rendering one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assembly {
    pub template_id: &'static str,
    pub title: &'static str,
    pub diagnostics: Vec<Diagnostic>,
    pub document: Document,
}

/// Read-only map from template id to template, filled once at startup.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: Vec<Box<dyn ContractTemplate>>,
    index: HashMap<&'static str, usize>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the full shipped catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        let mut registry = Self::new();
        catalog::register_all(&mut registry)?;
        info!(templates = registry.len(), "template catalog loaded");
        Ok(registry)
    }

    pub fn register<T>(&mut self, template: T) -> Result<(), CatalogError>
    where
        T: ContractTemplate + 'static,
    {
        let id = template.id();
        if self.index.contains_key(id) {
            return Err(CatalogError::DuplicateTemplateId(id.to_string()));
        }
        check_fields(id, template.fields())?;

        debug!(template = id, fields = template.fields().len(), "registered template");
        self.index.insert(id, self.templates.len());
        self.templates.push(Box::new(template));
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Result<&dyn ContractTemplate, CatalogError> {
        match self.index.get(id) {
            Some(position) => Ok(self.templates[*position].as_ref()),
            None => {
                warn!(template = id, "unknown template requested");
                Err(CatalogError::UnknownTemplateId(id.to_string()))
            }
        }
    }

    /// Ids in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.templates.iter().map(|template| template.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ContractTemplate> {
        self.templates.iter().map(|template| template.as_ref())
    }

    pub fn summaries(&self) -> Vec<TemplateSummary> {
        self.iter()
            .map(|template| TemplateSummary {
                id: template.id(),
                title: template.title(),
                category: template.category(),
                category_label: template.category().label(),
                field_count: template.fields().len(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Validates and renders in one step. Missing data never fails this call;
    /// it shows up as diagnostics and placeholders.
    pub fn assemble(&self, id: &str, data: &FormData) -> Result<Assembly, CatalogError> {
        let template = self.lookup(id)?;
        let diagnostics = template.validate(data);
        let document = template.render(data);
        debug!(
            template = template.id(),
            diagnostics = diagnostics.len(),
            sections = document.sections.len(),
            "assembled document"
        );

        Ok(Assembly {
            template_id: template.id(),
            title: template.title(),
            diagnostics,
            document,
        })
    }
}

fn check_fields(template: &str, fields: &[FieldSpec]) -> Result<(), CatalogError> {
    let invalid = |key: &str, reason: &str| CatalogError::InvalidField {
        template: template.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let mut seen = HashSet::new();
    for field in fields {
        if field.key.trim().is_empty() {
            return Err(invalid(field.key, "key is empty"));
        }
        if !seen.insert(field.key) {
            return Err(invalid(field.key, "key is declared twice"));
        }
    }

    for field in fields {
        if let Some(condition) = field.visible_if {
            if let Some(unknown) = condition
                .referenced_keys()
                .into_iter()
                .find(|key| !seen.contains(key))
            {
                return Err(invalid(
                    field.key,
                    &format!("visibility depends on undeclared field '{unknown}'"),
                ));
            }
        }

        if let FieldKind::RepeatedGroup(group) = &field.kind {
            if group.max_count == 0 {
                return Err(invalid(field.key, "max_count must be at least 1"));
            }
            if group.min_rendered > group.max_count {
                return Err(invalid(field.key, "min_rendered exceeds max_count"));
            }
            if !group.fields.iter().any(|sub| sub.key == group.primary) {
                return Err(invalid(
                    field.key,
                    &format!("primary sub-field '{}' is not declared", group.primary),
                ));
            }
            check_fields(template, &group.fields)?;
        }
    }

    Ok(())
}
