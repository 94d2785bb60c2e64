use crate::cli::{ExportSchemaArgs, ListArgs, RenderArgs, ShowArgs};
use crate::infra::{read_form_data, TemplateDetail};
use crate::text::render_plain;
use chrono::NaiveDate;
use contract_templates::config::AppConfig;
use contract_templates::error::AppError;
use contract_templates::templates::export::write_schema_csv;
use contract_templates::templates::{
    Assembly, FormData, TemplateCategory, TemplateRegistry,
};
use std::fs::File;
use std::io::{self, BufWriter};

pub(crate) fn list_templates(args: ListArgs) -> Result<(), AppError> {
    let registry = TemplateRegistry::standard()?;
    for line in listing(&registry, args.category) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn show_template(args: ShowArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let registry = TemplateRegistry::standard()?;
    let template = registry.lookup(&args.id)?;
    let detail = TemplateDetail::of(template, config.catalog.today());
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}

pub(crate) fn export_schema(args: ExportSchemaArgs) -> Result<(), AppError> {
    let registry = TemplateRegistry::standard()?;
    match args.output {
        Some(path) => write_schema_csv(&registry, BufWriter::new(File::create(path)?))?,
        None => write_schema_csv(&registry, io::stdout().lock())?,
    }
    Ok(())
}

pub(crate) fn render_template(args: RenderArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let registry = TemplateRegistry::standard()?;
    let data = match &args.data {
        Some(path) => read_form_data(path)?,
        None => FormData::new(),
    };

    let assembly = assemble(&registry, &args, data, config.catalog.today())?;
    for diagnostic in &assembly.diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    if args.plain {
        print!("{}", render_plain(&assembly.document));
    } else {
        println!("{}", serde_json::to_string_pretty(&assembly.document)?);
    }
    Ok(())
}

fn listing(registry: &TemplateRegistry, category: Option<TemplateCategory>) -> Vec<String> {
    registry
        .summaries()
        .into_iter()
        .filter(|summary| category.map_or(true, |wanted| summary.category == wanted))
        .map(|summary| {
            format!(
                "{:<45} {:<11} {} ({})",
                summary.id,
                summary.category.slug(),
                summary.title,
                summary.category_label
            )
        })
        .collect()
}

fn assemble(
    registry: &TemplateRegistry,
    args: &RenderArgs,
    data: FormData,
    today: NaiveDate,
) -> Result<Assembly, AppError> {
    let data = if args.with_defaults {
        let template = registry.lookup(&args.id)?;
        data.merged_over(&template.default_data(today))
    } else {
        data
    };
    Ok(registry.assemble(&args.id, &data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TemplateRegistry {
        TemplateRegistry::standard().expect("catalog loads")
    }

    fn render_args(id: &str, with_defaults: bool) -> RenderArgs {
        RenderArgs {
            id: id.to_string(),
            data: None,
            plain: false,
            with_defaults,
        }
    }

    #[test]
    fn listing_filters_by_category() {
        let registry = registry();
        let employment = listing(&registry, Some(TemplateCategory::Employment));
        assert!(employment
            .iter()
            .any(|line| line.starts_with("annual-paid-leave-request")));
        assert!(employment.iter().all(|line| line.contains(" employment ")));
        assert!(employment.iter().all(|line| line.ends_with("(İş ve İstihdam)")));
        assert_eq!(listing(&registry, None).len(), registry.len());
    }

    #[test]
    fn with_defaults_fills_unset_fields_only() {
        let registry = registry();
        let today = NaiveDate::from_ymd_opt(2026, 2, 15).expect("valid date");
        let data = FormData::new().with("odemeSekli", "EFT");

        let assembly = assemble(&registry, &render_args("rent-receipt", true), data.clone(), today)
            .expect("template exists");
        assert!(assembly.document.mentions("15 Şubat 2026"));
        assert!(assembly.document.mentions("EFT yoluyla"));

        let bare = assemble(&registry, &render_args("rent-receipt", false), data, today)
            .expect("template exists");
        assert!(!bare.document.mentions("15 Şubat 2026"));
    }

    #[test]
    fn unknown_id_surfaces_as_catalog_error() {
        let registry = registry();
        let today = NaiveDate::from_ymd_opt(2026, 2, 15).expect("valid date");
        let err = assemble(&registry, &render_args("yok", true), FormData::new(), today)
            .expect_err("unknown template");
        assert!(matches!(err, AppError::Catalog(_)));
    }
}
