use super::{identified, optional_labeled, party};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

/// Hands an existing lease over from one tenant to another with the
/// landlord's signature.
pub struct HousingTransfer {
    fields: Vec<FieldSpec>,
}

impl HousingTransfer {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("eskiKiracıAd", "Eski Kiracı Ad Soyad").required(),
            FieldSpec::text("eskiKiracıTC", "Eski Kiracı TC Kimlik No").max_length(11),
            FieldSpec::text_area("eskiKiracıAdres", "Eski Kiracı Adres"),
            FieldSpec::text("yeniKiracıAd", "Yeni Kiracı Ad Soyad").required(),
            FieldSpec::text("yeniKiracıTC", "Yeni Kiracı TC Kimlik No").max_length(11),
            FieldSpec::text_area("yeniKiracıAdres", "Yeni Kiracı Adres"),
            FieldSpec::text("kirayaVerenAd", "Kiraya Veren Ad Soyad").required(),
            FieldSpec::text("kirayaVerenTC", "Kiraya Veren TC Kimlik No").max_length(11),
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::text("daireNo", "Daire No"),
            FieldSpec::date("devirTarihi", "Devir Tarihi").required().default_today(),
            FieldSpec::date("eskiKiraSozlesmesiTarihi", "Eski Kira Sözleşmesi Tarihi"),
            FieldSpec::currency("aylikKiraBedeli", "Aylık Kira Bedeli"),
            FieldSpec::currency("depozito", "Depozito"),
        ];
        Self { fields }
    }
}

impl Default for HousingTransfer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for HousingTransfer {
    fn id(&self) -> &'static str {
        "housing-transfer"
    }

    fn title(&self) -> &'static str {
        "Konut Kira Sözleşmesi Devir Protokolü"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        Document::builder()
            .section(Section::titled("KONUT KİRA SÖZLEŞMESİ DEVİR PROTOKOLÜ"))
            .section(party("ESKİ KİRACI", &slots, "eskiKiracıAd", "eskiKiracıTC", "eskiKiracıAdres"))
            .section(party("YENİ KİRACI", &slots, "yeniKiracıAd", "yeniKiracıTC", "yeniKiracıAdres"))
            .section(identified("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC"))
            .section(
                Section::titled("KONUT ADRESİ")
                    .paragraph(slots.text("konutAdresi"))
                    .blocks(optional_labeled("Daire No", slots.optional("daireNo"))),
            )
            .section(
                Section::untitled()
                    .labeled("Devir Tarihi", slots.date("devirTarihi"))
                    .labeled("Eski Kira Sözleşmesi Tarihi", slots.date("eskiKiraSozlesmesiTarihi"))
                    .labeled("Aylık Kira Bedeli", slots.money("aylikKiraBedeli"))
                    .labeled("Depozito", slots.money("depozito")),
            )
            .section(
                Section::untitled()
                    .signature("Eski Kiracı", slots.text("eskiKiracıAd"))
                    .signature("Yeni Kiracı", slots.text("yeniKiracıAd"))
                    .signature("Kiraya Veren", slots.text("kirayaVerenAd")),
            )
            .build()
    }
}
