use super::optional_labeled;
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

/// Veli izin belgesi for a school activity or trip.
pub struct ParentConsent {
    fields: Vec<FieldSpec>,
}

impl ParentConsent {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("veliAd", "Veli Ad Soyad").required(),
            FieldSpec::text("veliTC", "Veli TC Kimlik No").max_length(11),
            FieldSpec::text_area("veliAdres", "Veli Adres"),
            FieldSpec::text("ogrenciAd", "Öğrenci Ad Soyad").required(),
            FieldSpec::text("ogrenciTC", "Öğrenci TC Kimlik No").max_length(11),
            FieldSpec::text("okulAdi", "Okul Adı"),
            FieldSpec::text_area("izinKonusu", "İzin Konusu").required(),
            FieldSpec::date("izinTarihi", "İzin Tarihi").default_today(),
        ];
        Self { fields }
    }
}

impl Default for ParentConsent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for ParentConsent {
    fn id(&self) -> &'static str {
        "parent-consent"
    }

    fn title(&self) -> &'static str {
        "Veli İzin Belgesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Family
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let parent = Section::untitled()
            .labeled("Ad Soyad", slots.text("veliAd"))
            .blocks(optional_labeled("TC Kimlik No", slots.optional("veliTC")))
            .blocks(optional_labeled("Adres", slots.optional("veliAdres")));
        let student = Section::untitled()
            .labeled("Öğrenci Ad Soyad", slots.text("ogrenciAd"))
            .blocks(optional_labeled("TC Kimlik No", slots.optional("ogrenciTC")))
            .blocks(optional_labeled("Okul", slots.optional("okulAdi")));

        Document::builder()
            .section(Section::titled("VELİ İZİN BELGESİ"))
            .section(Section::untitled().paragraph("Ben, aşağıda kimlik bilgileri belirtilen veli,"))
            .section(parent)
            .section(Section::untitled().paragraph("Çocuğum/vasisi olduğum,"))
            .section(student)
            .section(
                Section::untitled()
                    .paragraph("hakkında aşağıdaki konuda izin veriyorum:")
                    .paragraph(slots.text("izinKonusu")),
            )
            .section(
                Section::untitled()
                    .paragraph(format!(
                        "Bu izin belgesi {} tarihinde düzenlenmiştir.",
                        slots.date("izinTarihi")
                    ))
                    .signature("Veli", slots.text("veliAd")),
            )
            .build()
    }
}

/// Protocol for an uncontested divorce; the custody, alimony and property
/// sections appear only when the spouses filled them in.
pub struct DivorceAgreement {
    fields: Vec<FieldSpec>,
}

impl DivorceAgreement {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("esAd", "1. Eş Ad Soyad").required(),
            FieldSpec::text("esTC", "1. Eş TC Kimlik No").max_length(11),
            FieldSpec::text_area("esAdres", "1. Eş Adres"),
            FieldSpec::text("es2Ad", "2. Eş Ad Soyad").required(),
            FieldSpec::text("es2TC", "2. Eş TC Kimlik No").max_length(11),
            FieldSpec::text_area("es2Adres", "2. Eş Adres"),
            FieldSpec::date("evlilikTarihi", "Evlilik Tarihi"),
            FieldSpec::date("bosanmaTarihi", "Boşanma Tarihi").default_today(),
            FieldSpec::text_area("velayet", "Velayet Düzenlemesi"),
            FieldSpec::text_area("nafaka", "Nafaka Düzenlemesi"),
            FieldSpec::text_area("malPaylasimi", "Mal Paylaşımı"),
        ];
        Self { fields }
    }
}

impl Default for DivorceAgreement {
    fn default() -> Self {
        Self::new()
    }
}

fn spouse(heading: &str, slots: &Slots<'_>, prefix: &str) -> Section {
    Section::titled(heading)
        .labeled("Ad Soyad", slots.text(&format!("{prefix}Ad")))
        .blocks(optional_labeled("TC Kimlik No", slots.optional(&format!("{prefix}TC"))))
        .blocks(optional_labeled("Adres", slots.optional(&format!("{prefix}Adres"))))
}

impl ContractTemplate for DivorceAgreement {
    fn id(&self) -> &'static str {
        "divorce-agreement"
    }

    fn title(&self) -> &'static str {
        "Anlaşmalı Boşanma Sözleşmesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Family
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let mut document = Document::builder()
            .section(Section::titled("ANLAŞMALI BOŞANMA SÖZLEŞMESİ"))
            .section(
                Section::untitled()
                    .paragraph("Bu sözleşme, aşağıda kimlik bilgileri belirtilen taraflar arasında düzenlenmiştir:")
                    .subsection(spouse("EŞ 1", &slots, "es"))
                    .subsection(spouse("EŞ 2", &slots, "es2")),
            )
            .section(
                Section::untitled()
                    .labeled("Evlilik Tarihi", slots.date("evlilikTarihi"))
                    .labeled("Boşanma Tarihi", slots.date("bosanmaTarihi")),
            );
        for (heading, key) in [
            ("VELAYET DÜZENLEMESİ", "velayet"),
            ("NAFAKA DÜZENLEMESİ", "nafaka"),
            ("MAL PAYLAŞIMI", "malPaylasimi"),
        ] {
            if let Some(text) = slots.optional(key) {
                document = document.section(Section::titled(heading).paragraph(text));
            }
        }

        document
            .section(
                Section::untitled()
                    .signature("Eş 1", slots.text("esAd"))
                    .signature("Eş 2", slots.text("es2Ad")),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::document::Block;
    use crate::templates::slots::PLACEHOLDER;

    #[test]
    fn consent_reads_parent_then_student() {
        let data = FormData::new()
            .with("veliAd", "Fatma Arslan")
            .with("ogrenciAd", "Can Arslan")
            .with("okulAdi", "Atatürk İlkokulu")
            .with("izinKonusu", "Müze gezisine katılım")
            .with("izinTarihi", "2026-04-20");
        let document = ParentConsent::new().render(&data);

        assert_eq!(document.sections[2].blocks, vec![Block::labeled("Ad Soyad", "Fatma Arslan")]);
        assert_eq!(
            document.sections[4].blocks,
            vec![
                Block::labeled("Öğrenci Ad Soyad", "Can Arslan"),
                Block::labeled("Okul", "Atatürk İlkokulu"),
            ]
        );
        assert!(document.mentions("Bu izin belgesi 20 Nisan 2026 tarihinde düzenlenmiştir."));
    }

    #[test]
    fn divorce_arrangements_appear_only_when_agreed() {
        let template = DivorceAgreement::new();
        let bare = template.render(&FormData::new());
        assert_eq!(bare.section("VELAYET DÜZENLEMESİ"), None);
        assert_eq!(bare.section("MAL PAYLAŞIMI"), None);
        assert!(bare.mentions(PLACEHOLDER));

        let data = FormData::new()
            .with("velayet", "Velayet anneye verilmiştir.")
            .with("nafaka", "Aylık 5.000 TL iştirak nafakası.");
        let document = template.render(&data);
        assert!(document.section("VELAYET DÜZENLEMESİ").is_some());
        assert!(document.section("NAFAKA DÜZENLEMESİ").is_some());
        assert_eq!(document.section("MAL PAYLAŞIMI"), None);
    }

    #[test]
    fn both_spouses_are_nested_under_the_preamble() {
        let data = FormData::new().with("esAd", "Ali Yurt").with("es2TC", "10987654321");
        let document = DivorceAgreement::new().render(&data);
        let preamble = &document.sections[1];
        assert_eq!(preamble.subsections.len(), 2);
        assert!(preamble.subsections[0].mentions("Ali Yurt"));
        assert!(preamble.subsections[1].mentions("10987654321"));
    }
}
