//! Parts shared by the labour-court petitions: court header, witness list and
//! the SGK service-record section.

use super::group_of;
use crate::templates::clause::{select_bullets, Bullet};
use crate::templates::condition::Condition;
use crate::templates::document::Section;
use crate::templates::form::FormData;
use crate::templates::format::to_upper_tr;
use crate::templates::schema::{FieldSpec, RepeatedGroup};
use crate::templates::slots::Slots;

pub(super) const WITNESSES: &str = "tanikler";

/// What a witness can testify to; one bullet per ticked box.
pub(super) static WITNESS_KNOWLEDGE: &[Bullet] = &[
    Bullet::on_flag("ucretOdenmemesi", "Ücret ödenmemesi"),
    Bullet::on_flag("sigortasizCalisma", "Sigortasız çalışma"),
    Bullet::on_flag("mobbing", "Mobbing"),
    Bullet::on_flag("fazlaMesai", "Fazla mesai"),
];

pub(super) static SGK_ANOMALIES: &[Bullet] = &[
    Bullet::on_flag("sgkHicSigortaYok", "Hiç sigorta yok"),
    Bullet::on_flag("sgkEksikGunVar", "Eksik gün var"),
    Bullet::on_flag("sgkDusukUcretBildirimi", "Düşük ücret bildirimi var"),
    Bullet::on_flag("sgkTamAmaGecBildirim", "Tam ama geç bildirim var"),
];

const SGK_DATES: &[Condition] = &[
    Condition::filled("sgkGirisTarihi"),
    Condition::filled("sgkCikisTarihi"),
];

const SGK_TRIGGERS: &[Condition] = &[
    Condition::flag("sgkHicSigortaYok"),
    Condition::flag("sgkEksikGunVar"),
    Condition::flag("sgkDusukUcretBildirimi"),
    Condition::flag("sgkTamAmaGecBildirim"),
    Condition::filled("sgkGirisTarihi"),
    Condition::filled("sgkCikisTarihi"),
];

static HAS_SGK_DATES: Condition = Condition::any(SGK_DATES);
static HAS_SGK_DETAILS: Condition = Condition::any(SGK_TRIGGERS);

/// `"{COURT} İŞ MAHKEMESİ'NE"`, or the bare form when no court is named.
pub(super) fn court_heading(data: &FormData) -> String {
    match data.filled("mahkemeAdi") {
        Some(court) => format!("{} İŞ MAHKEMESİ'NE", to_upper_tr(&court)),
        None => "İŞ MAHKEMESİ'NE".to_string(),
    }
}

pub(super) fn plaintiff_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("mahkemeAdi", "Mahkeme Adı").required(),
        FieldSpec::text("davaciAd", "Davacı Ad Soyad").required(),
        FieldSpec::text("davaciTC", "Davacı T.C. Kimlik No")
            .required()
            .max_length(11),
        FieldSpec::text_area("davaciAdres", "Davacı Adres").required(),
        FieldSpec::text("davaliUnvan", "Davalı Unvan").required(),
        FieldSpec::text_area("davaliAdres", "Davalı Adres").required(),
    ]
}

pub(super) fn witness_field() -> FieldSpec {
    FieldSpec::group(
        WITNESSES,
        "Tanık Listesi",
        RepeatedGroup::new(
            vec![
                FieldSpec::text("ad", "Ad Soyad"),
                FieldSpec::text("calistigiYer", "Çalıştığı/Çalışmış Olduğu Yer").required(),
                FieldSpec::boolean("ucretOdenmemesi", "Ücret ödenmemesi"),
                FieldSpec::boolean("sigortasizCalisma", "Sigortasız çalışma"),
                FieldSpec::boolean("mobbing", "Mobbing"),
                FieldSpec::boolean("fazlaMesai", "Fazla mesai"),
                FieldSpec::text_area("bildigiHususlar", "Bildiği Diğer Hususlar"),
            ],
            "ad",
            2,
        ),
    )
    .required()
}

pub(super) fn sgk_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::boolean("sgkHicSigortaYok", "Hiç sigorta yok"),
        FieldSpec::boolean("sgkEksikGunVar", "Eksik gün var"),
        FieldSpec::boolean("sgkDusukUcretBildirimi", "Düşük ücret bildirimi var"),
        FieldSpec::boolean("sgkTamAmaGecBildirim", "Tam ama geç bildirim var"),
        FieldSpec::date("sgkGirisTarihi", "SGK'da Görünen İşe Giriş Tarihi"),
        FieldSpec::date("sgkCikisTarihi", "SGK'da Görünen İşten Çıkış Tarihi"),
    ]
}

pub(super) fn plaintiff_section(slots: &Slots<'_>) -> Section {
    Section::titled("DAVACI")
        .labeled("Ad Soyad", slots.text("davaciAd"))
        .labeled("T.C. Kimlik No", slots.text("davaciTC"))
        .labeled("Adres", slots.text("davaciAdres"))
}

pub(super) fn defendant_section(slots: &Slots<'_>, name_label: &str) -> Section {
    Section::titled("DAVALI")
        .labeled(name_label, slots.text("davaliUnvan"))
        .labeled("Adres", slots.text("davaliAdres"))
}

/// One subsection per named witness, numbered by slot. Blank slots are skipped,
/// so an empty list yields an empty (and therefore omitted) section.
pub(super) fn witness_section(fields: &[FieldSpec], data: &FormData) -> Section {
    let Some(group) = group_of(fields, WITNESSES) else {
        return Section::titled("TANIK LİSTESİ");
    };

    let entries = group
        .rendered_entries(data.group(WITNESSES))
        .map(|(index, entry)| witness_entry(index, entry));

    Section::titled("TANIK LİSTESİ").subsections(entries)
}

fn witness_entry(index: usize, entry: &FormData) -> Section {
    let slots = Slots::new(entry);
    let knowledge = select_bullets(WITNESS_KNOWLEDGE, entry);

    let mut section = Section::titled(format!("Tanık {}", index + 1))
        .labeled("Ad Soyad", slots.text("ad"))
        .labeled("Çalıştığı/çalışmış olduğu yer", slots.text("calistigiYer"));
    if !knowledge.is_empty() {
        section = section.paragraph("Bildiği hususlar:").bullets(knowledge);
    }
    if let Some(note) = slots.optional("bildigiHususlar") {
        section = section.labeled("Diğer hususlar", note);
    }
    section
}

/// Shown only when at least one SGK box is ticked or a date is given.
pub(super) fn sgk_section(data: &FormData) -> Option<Section> {
    if !HAS_SGK_DETAILS.holds(data) {
        return None;
    }

    let slots = Slots::new(data);
    let mut section = Section::titled("e-DEVLET SGK DÖKÜMÜNE GÖRE UYARLAMA")
        .bullets(select_bullets(SGK_ANOMALIES, data));
    if HAS_SGK_DATES.holds(data) {
        section = section
            .labeled("SGK'da görünen işe giriş tarihi", slots.date("sgkGirisTarihi"))
            .labeled("SGK'da görünen işten çıkış tarihi", slots.date("sgkCikisTarihi"));
    }
    Some(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::document::Block;
    use crate::templates::slots::PLACEHOLDER;

    #[test]
    fn court_heading_upper_cases_turkish_names() {
        let data = FormData::new().with("mahkemeAdi", "istanbul 3.");
        assert_eq!(court_heading(&data), "İSTANBUL 3. İŞ MAHKEMESİ'NE");
        assert_eq!(court_heading(&FormData::new()), "İŞ MAHKEMESİ'NE");
    }

    #[test]
    fn witness_without_flags_has_no_knowledge_list() {
        let fields = vec![witness_field()];
        let data = FormData::new().with(
            WITNESSES,
            vec![FormData::new().with("ad", "Zeynep Kaya")],
        );

        let section = witness_section(&fields, &data);
        assert_eq!(section.subsections.len(), 1);
        let witness = &section.subsections[0];
        assert_eq!(witness.heading.as_deref(), Some("Tanık 1"));
        assert_eq!(
            witness.blocks,
            vec![
                Block::labeled("Ad Soyad", "Zeynep Kaya"),
                Block::labeled("Çalıştığı/çalışmış olduğu yer", PLACEHOLDER),
            ]
        );
    }

    #[test]
    fn first_witness_is_required() {
        let fields = vec![witness_field()];
        let missing = crate::templates::schema::validate(&fields, &FormData::new());
        assert!(missing
            .iter()
            .any(|diagnostic| diagnostic.key() == WITNESSES));

        let data = FormData::new().with(
            WITNESSES,
            vec![FormData::new().with("ad", "Zeynep Kaya")],
        );
        let named = crate::templates::schema::validate(&fields, &data);
        assert!(named.iter().all(|diagnostic| diagnostic.key() != WITNESSES));
        assert!(named
            .iter()
            .any(|diagnostic| diagnostic.key() == "tanikler[0].calistigiYer"));
    }

    #[test]
    fn second_slot_keeps_its_number() {
        let fields = vec![witness_field()];
        let data = FormData::new().with(
            WITNESSES,
            vec![
                FormData::new(),
                FormData::new().with("ad", "Mehmet Demir").with("fazlaMesai", true),
            ],
        );

        let section = witness_section(&fields, &data);
        assert_eq!(section.subsections.len(), 1);
        assert_eq!(section.subsections[0].heading.as_deref(), Some("Tanık 2"));
    }

    #[test]
    fn sgk_section_needs_a_trigger() {
        assert!(sgk_section(&FormData::new()).is_none());

        let data = FormData::new().with("sgkEksikGunVar", true);
        let section = sgk_section(&data).expect("section shown");
        assert_eq!(
            section.blocks,
            vec![Block::bullets(vec!["Eksik gün var".to_string()])]
        );

        let data = FormData::new().with("sgkCikisTarihi", "2025-03-31");
        let section = sgk_section(&data).expect("section shown");
        assert_eq!(
            section.blocks,
            vec![
                Block::labeled("SGK'da görünen işe giriş tarihi", PLACEHOLDER),
                Block::labeled("SGK'da görünen işten çıkış tarihi", "31 Mart 2025"),
            ]
        );
    }
}
