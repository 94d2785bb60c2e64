use super::{group_of, optional_labeled};
use crate::templates::document::{Block, Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::{FieldSpec, RepeatedGroup};
use crate::templates::slots::Slots;

const PARTNERS: &str = "ortaklar";

/// Adi ortaklık sözleşmesi between two or three partners.
pub struct Partnership {
    fields: Vec<FieldSpec>,
}

impl Partnership {
    pub fn new() -> Self {
        let partner = RepeatedGroup::new(
            vec![
                FieldSpec::text("ad", "Ad Soyad / Şirket Unvanı").required(),
                FieldSpec::text("tc", "TC Kimlik No / Vergi No"),
                FieldSpec::text_area("adres", "Adres"),
                FieldSpec::text("sermaye", "Sermaye Payı"),
            ],
            "ad",
            3,
        )
        .min_rendered(2);

        let fields = vec![
            FieldSpec::group(PARTNERS, "Ortaklar", partner).required(),
            FieldSpec::text_area("ortaklikKonusu", "Ortaklık Konusu").required(),
            FieldSpec::date("sozlesmeTarihi", "Sözleşme Tarihi").required().default_today(),
            FieldSpec::text_area("karPaylasimi", "Kar Paylaşımı"),
        ];
        Self { fields }
    }

    fn partners<'a>(&'a self, data: &'a FormData) -> Vec<(usize, &'a FormData)> {
        group_of(&self.fields, PARTNERS)
            .map(|group| group.rendered_entries(data.group(PARTNERS)).collect())
            .unwrap_or_default()
    }
}

impl Default for Partnership {
    fn default() -> Self {
        Self::new()
    }
}

fn partner_section(index: usize, entry: &FormData) -> Section {
    let slots = Slots::new(entry);
    Section::untitled()
        .labeled(format!("{}. ORTAK", index + 1), slots.text("ad"))
        .blocks(optional_labeled("TC/Vergi No", slots.optional("tc")))
        .blocks(optional_labeled("Adres", slots.optional("adres")))
        .blocks(optional_labeled("Sermaye Payı", slots.optional("sermaye")))
}

impl ContractTemplate for Partnership {
    fn id(&self) -> &'static str {
        "partnership"
    }

    fn title(&self) -> &'static str {
        "Ortaklık Sözleşmesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Commercial
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);
        let partners = self.partners(data);

        let terms = Section::untitled()
            .paragraph("Yukarıda kimlik bilgileri yazılı taraflar, aşağıda belirtilen konuda ortaklık sözleşmesi yapmışlardır.")
            .subsection(Section::titled("ORTAKLIK KONUSU").paragraph(slots.text("ortaklikKonusu")))
            .subsection(
                Section::titled("SÖZLEŞME ŞARTLARI")
                    .bullets(
                        std::iter::once(format!("Sözleşme tarihi: {}", slots.date("sozlesmeTarihi")))
                            .chain(slots.optional("karPaylasimi").map(|share| format!("Kar paylaşımı: {share}")))
                            .collect(),
                    )
                    .paragraph("Türk Borçlar Kanunu'nun 620-644. maddeleri uyarınca, ortaklık sözleşmesi yapılmıştır."),
            );

        let signatures = partners.iter().map(|(index, entry)| {
            Block::signature(format!("{}. ORTAK", index + 1), Slots::new(entry).text("ad"))
        });

        Document::builder()
            .section(Section::titled("ORTAKLIK SÖZLEŞMESİ"))
            .section(
                Section::untitled()
                    .subsections(partners.iter().map(|(index, entry)| partner_section(*index, entry))),
            )
            .section(terms)
            .section(Section::untitled().blocks(signatures))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::slots::PLACEHOLDER;

    fn partner(name: &str) -> FormData {
        FormData::new().with("ad", name)
    }

    #[test]
    fn two_partners_are_always_rendered() {
        let document = Partnership::new().render(&FormData::new());
        assert!(document.mentions("1. ORTAK"));
        assert!(document.mentions("2. ORTAK"));
        assert!(!document.mentions("3. ORTAK"));
        assert!(document.mentions(PLACEHOLDER));
    }

    #[test]
    fn third_partner_appears_once_named() {
        let data = FormData::new().with(
            PARTNERS,
            vec![partner("Ayşe Kaya"), partner("Mehmet Demir"), partner("Deniz Ltd.")],
        );
        let document = Partnership::new().render(&data);
        assert!(document.mentions("3. ORTAK"));
        assert!(document.mentions("Deniz Ltd."));

        let signatures = document
            .sections
            .last()
            .map(|section| section.blocks.len())
            .unwrap_or_default();
        assert_eq!(signatures, 3);
    }

    #[test]
    fn profit_share_line_is_optional() {
        let template = Partnership::new();
        assert!(!template.render(&FormData::new()).mentions("Kar paylaşımı"));

        let data = FormData::new().with("karPaylasimi", "Eşit oranda");
        assert!(template.render(&data).mentions("Kar paylaşımı: Eşit oranda"));
    }

    #[test]
    fn first_two_partner_names_are_required() {
        let diagnostics = Partnership::new().validate(&FormData::new());
        let keys: Vec<&str> = diagnostics.iter().map(|diagnostic| diagnostic.key()).collect();
        assert!(keys.contains(&"ortaklar[0].ad"));
        assert!(keys.contains(&"ortaklar[1].ad"));
        assert!(!keys.contains(&"ortaklar[2].ad"));
    }
}
