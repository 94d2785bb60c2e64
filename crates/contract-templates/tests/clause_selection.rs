use contract_templates::templates::document::{Block, Section};
use contract_templates::templates::{FormData, TemplateRegistry};
use serde_json::json;

const UNJUST_TERMINATION: &str = "unjust-termination-compensation-lawsuit";

fn registry() -> TemplateRegistry {
    TemplateRegistry::standard().expect("shipped catalog registers cleanly")
}

fn form(value: serde_json::Value) -> FormData {
    serde_json::from_value(value).expect("form data parses")
}

fn witness_list(sections: &[Section]) -> Option<&Section> {
    sections
        .iter()
        .find(|section| section.heading.as_deref() == Some("TANIK LİSTESİ"))
}

#[test]
fn damages_toggles_select_clauses_independently() {
    let data = form(json!({
        "kidemTazminati": true,
        "ihbarTazminati": false,
        "odenmeyenUcretAlacaklari": true,
    }));
    let assembly = registry()
        .assemble(UNJUST_TERMINATION, &data)
        .expect("template exists");

    let document = &assembly.document;
    assert!(document.mentions("KIDEM TAZMİNATI"));
    assert!(document.mentions("ÜCRET ALACAKLARI"));
    assert!(!document.mentions("İHBAR TAZMİNATI"));
    assert!(!document.mentions("İhbar tazminatı"));
}

#[test]
fn assignment_order_does_not_change_the_document() {
    let registry = registry();
    let template = registry.lookup(UNJUST_TERMINATION).expect("template exists");

    let forward = FormData::new()
        .with("kidemTazminati", true)
        .with("savunmasiAlinmadan", true)
        .with("sgkEksikGunVar", true)
        .with("yaziliBildirimYapilmadan", true);
    let backward = FormData::new()
        .with("yaziliBildirimYapilmadan", true)
        .with("sgkEksikGunVar", true)
        .with("savunmasiAlinmadan", true)
        .with("kidemTazminati", true);

    let first = serde_json::to_string(&template.render(&forward)).expect("serializes");
    let second = serde_json::to_string(&template.render(&backward)).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn blank_witness_slots_are_skipped() {
    let data = form(json!({
        "tanikler": [
            { "ad": "Ali Veli", "ucretOdenmemesi": true, "mobbing": false },
            { "ad": "" },
        ],
    }));
    let document = registry()
        .assemble(UNJUST_TERMINATION, &data)
        .expect("template exists")
        .document;

    let witnesses = witness_list(&document.sections).expect("witness list present");
    assert_eq!(witnesses.subsections.len(), 1);

    let entry = &witnesses.subsections[0];
    assert!(entry.blocks.contains(&Block::labeled("Ad Soyad", "Ali Veli")));
    let bullets: Vec<&Vec<String>> = entry
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::BulletList { items } => Some(items),
            _ => None,
        })
        .collect();
    assert_eq!(bullets, vec![&vec!["Ücret ödenmemesi".to_string()]]);
}

#[test]
fn witness_list_is_omitted_when_no_one_is_named() {
    let document = registry()
        .assemble(UNJUST_TERMINATION, &FormData::new())
        .expect("template exists")
        .document;
    assert!(witness_list(&document.sections).is_none());
}

#[test]
fn unknown_eviction_reason_renders_no_reason_paragraph() {
    let registry = registry();
    let known = registry
        .assemble("eviction-notice", &form(json!({ "tahliyeSebebi": "bakım" })))
        .expect("template exists")
        .document;
    let unknown = registry
        .assemble("eviction-notice", &form(json!({ "tahliyeSebebi": "başka" })))
        .expect("template exists")
        .document;

    let paragraphs = |sections: &[Section]| -> usize {
        sections
            .iter()
            .flat_map(|section| &section.blocks)
            .filter(|block| matches!(block, Block::Paragraph { .. }))
            .count()
    };
    assert_eq!(paragraphs(&known.sections), paragraphs(&unknown.sections) + 1);
}
