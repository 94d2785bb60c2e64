use chrono::NaiveDate;
use contract_templates::templates::slots::PLACEHOLDER;
use contract_templates::templates::catalog::SIMPLE_CATALOG;
use contract_templates::templates::{
    Block, CatalogError, Diagnostic, FormData, Section, TemplateCategory, TemplateRegistry,
};

fn registry() -> TemplateRegistry {
    TemplateRegistry::standard().expect("shipped catalog registers cleanly")
}

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 15).expect("valid date")
}

#[test]
fn every_template_renders_its_defaults_with_placeholders() {
    let registry = registry();
    for template in registry.iter() {
        let defaults = template.default_data(reference_day());
        for field in template.fields() {
            assert!(
                defaults.contains_key(field.key),
                "{} default data lacks {}",
                template.id(),
                field.key
            );
        }

        let document = template.render(&defaults);
        assert!(!document.sections.is_empty(), "{} rendered nothing", template.id());
        assert!(
            document.mentions(PLACEHOLDER),
            "{} filled every blank slot",
            template.id()
        );
        assert!(
            template
                .validate(&defaults)
                .iter()
                .any(|diagnostic| matches!(diagnostic, Diagnostic::MissingRequiredField { .. })),
            "{} accepted blank required fields",
            template.id()
        );
    }
}

fn labeled_values(sections: &[Section]) -> Vec<(&str, &str)> {
    let mut found = Vec::new();
    for section in sections {
        for block in &section.blocks {
            if let Block::LabeledValue { label, value } = block {
                found.push((label.as_str(), value.as_str()));
            }
        }
        found.extend(labeled_values(&section.subsections));
    }
    found
}

#[test]
fn generic_templates_show_placeholder_for_every_default_field() {
    let registry = registry();
    for spec in SIMPLE_CATALOG {
        let template = registry.lookup(spec.id).expect("generic template registered");
        assert!(template.fields().iter().all(|field| field.required));

        let document = template.render(&template.default_data(reference_day()));
        let values = labeled_values(&document.sections);
        assert_eq!(values.len(), spec.keys.len(), "{} lost a field", spec.id);
        for (label, value) in values {
            assert_eq!(value, PLACEHOLDER, "{} filled {label} from defaults", spec.id);
        }
    }
}

#[test]
fn blank_values_never_leak_into_labeled_lines() {
    let registry = registry();
    for template in registry.iter() {
        let document = template.render(&template.default_data(reference_day()));
        for (label, value) in labeled_values(&document.sections) {
            assert!(!value.trim().is_empty(), "{} left {label} empty", template.id());
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let registry = registry();
    for template in registry.iter() {
        let defaults = template.default_data(reference_day());
        assert_eq!(template.render(&defaults), template.render(&defaults));
    }
}

#[test]
fn unknown_template_is_reported_not_raised() {
    let registry = registry();
    let err = registry.lookup("nonexistent-template").err();
    assert_eq!(
        err,
        Some(CatalogError::UnknownTemplateId("nonexistent-template".to_string()))
    );
    assert!(registry.assemble("nonexistent-template", &FormData::new()).is_err());
}

#[test]
fn catalog_covers_every_category() {
    let registry = registry();
    let summaries = registry.summaries();
    for category in TemplateCategory::ALL {
        assert!(
            summaries.iter().any(|summary| summary.category == category),
            "no template in {}",
            category.slug()
        );
    }
    assert!(registry.ids().contains(&"residential-lease"));
    assert!(registry.ids().contains(&"bank-account-closure"));
}

#[test]
fn assembly_reports_diagnostics_and_still_renders() {
    let registry = registry();
    let data: FormData = serde_json::from_value(serde_json::json!({
        "kirayaVerenAd": "Hasan Yılmaz",
        "konutAdresi": "Cumhuriyet Mah. 12/3 Çanakkale",
        "depozitoTutari": "15000",
        "kesintiVarsa": "true",
        "kesintiTutari": "2500",
    }))
    .expect("form data parses");

    let assembly = registry
        .assemble("deposit-refund", &data)
        .expect("template exists");
    assert_eq!(assembly.template_id, "deposit-refund");
    assert!(assembly
        .diagnostics
        .iter()
        .any(|diagnostic| diagnostic.key() == "kiracıAd"));
    assert!(assembly.document.mentions("15.000,00 ₺"));
    assert!(assembly.document.mentions("2.500,00 ₺ tutarında kesinti"));
}

#[test]
fn documents_serialize_with_tagged_blocks() {
    let registry = registry();
    let assembly = registry
        .assemble("rent-receipt", &FormData::new())
        .expect("template exists");
    let value = serde_json::to_value(&assembly).expect("assembly serializes");

    let first_block = &value["document"]["sections"][0]["blocks"];
    assert!(first_block.is_array());
    assert_eq!(value["title"], "Kira Ödeme Belgesi");
    assert!(value["diagnostics"]
        .as_array()
        .is_some_and(|diagnostics| diagnostics
            .iter()
            .all(|diagnostic| diagnostic["kind"].is_string())));
}
