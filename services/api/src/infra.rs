use chrono::NaiveDate;
use contract_templates::config::CatalogConfig;
use contract_templates::error::AppError;
use contract_templates::templates::{
    ContractTemplate, FieldSpec, FormData, TemplateCategory, TemplateRegistry,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) registry: Arc<TemplateRegistry>,
    pub(crate) catalog: CatalogConfig,
}

/// Schema and starting values of one template, as served to form builders.
#[derive(Debug, Serialize)]
pub(crate) struct TemplateDetail {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) category: TemplateCategory,
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) default_data: FormData,
}

impl TemplateDetail {
    pub(crate) fn of(template: &dyn ContractTemplate, today: NaiveDate) -> Self {
        Self {
            id: template.id(),
            title: template.title(),
            category: template.category(),
            fields: template.fields().to_vec(),
            default_data: template.default_data(today),
        }
    }
}

/// An empty body is an empty form.
pub(crate) fn parse_form_data(body: &[u8]) -> Result<FormData, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FormData::new());
    }
    Ok(serde_json::from_slice(body)?)
}

/// Reads form data from a file, or from stdin when the path is `-`.
pub(crate) fn read_form_data(source: &Path) -> Result<FormData, AppError> {
    let bytes = if source.as_os_str() == "-" {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        buffer
    } else {
        std::fs::read(source)?
    };
    parse_form_data(&bytes)
}

pub(crate) fn parse_category(raw: &str) -> Result<TemplateCategory, String> {
    TemplateCategory::from_slug(raw).ok_or_else(|| {
        let known: Vec<&str> = TemplateCategory::ALL
            .iter()
            .map(|category| category.slug())
            .collect();
        format!("unknown category '{raw}' (expected one of: {})", known.join(", "))
    })
}
