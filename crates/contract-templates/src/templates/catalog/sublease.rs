//! Subletting: the landlord's consent letter and the
//! agreement signed by all three parties.

use super::{identified, landlord_fields, money_term, party, tenant_fields, term, terms};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

fn subtenant_fields() -> [FieldSpec; 3] {
    [
        FieldSpec::text("altKiracıAd", "Alt Kiracı Ad Soyad").required(),
        FieldSpec::text("altKiracıTC", "Alt Kiracı TC Kimlik No").max_length(11),
        FieldSpec::text_area("altKiracıAdres", "Alt Kiracı Adres"),
    ]
}

pub struct SubleaseApproval {
    fields: Vec<FieldSpec>,
}

impl SubleaseApproval {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend(subtenant_fields());
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::date("sozlesmeTarihi", "Sözleşme Tarihi").required().default_today(),
            FieldSpec::currency("aylikKiraBedeli", "Aylık Kira Bedeli"),
            FieldSpec::currency("altKiraBedeli", "Alt Kira Bedeli"),
        ]);
        Self { fields }
    }
}

impl Default for SubleaseApproval {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for SubleaseApproval {
    fn id(&self) -> &'static str {
        "sublease-approval"
    }

    fn title(&self) -> &'static str {
        "Alt Kira Sözleşmesi Onay Mektubu"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let letter = Section::untitled()
            .paragraph(format!("Sayın {},", slots.text("kiracıAd")))
            .paragraph(format!(
                "{} adresindeki konutumuza ilişkin {} tarihli kira sözleşmemiz kapsamında, sizin tarafınızdan {} adlı kişiye yapılan alt kira sözleşmesini onaylıyorum.",
                slots.text("konutAdresi"),
                slots.date("sozlesmeTarihi"),
                slots.text("altKiracıAd"),
            ))
            .paragraph("Bu onay, Türk Borçlar Kanunu'nun 347. maddesi uyarınca verilmekte olup, alt kira sözleşmesinin geçerliliği için gereklidir.");

        Document::builder()
            .section(Section::titled("EV SAHİBİNİN ALT KİRA SÖZLEŞMESİNİ ONAY MEKTUBU"))
            .section(letter)
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(identified("KİRACI", &slots, "kiracıAd", "kiracıTC"))
            .section(identified("ALT KİRACI", &slots, "altKiracıAd", "altKiracıTC"))
            .section(
                Section::untitled()
                    .labeled("Konut Adresi", slots.text("konutAdresi"))
                    .labeled("Aylık Kira Bedeli", slots.money("aylikKiraBedeli"))
                    .labeled("Alt Kira Bedeli", slots.money("altKiraBedeli")),
            )
            .section(
                Section::untitled()
                    .paragraph("Saygılarımla,")
                    .signature("Kiraya Veren", slots.text("kirayaVerenAd")),
            )
            .build()
    }
}

/// Alt kira anlaşması between tenant and subtenant, countersigned by the
/// landlord.
pub struct Sublease {
    fields: Vec<FieldSpec>,
}

impl Sublease {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend(subtenant_fields());
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::date("sozlesmeTarihi", "Sözleşme Tarihi").required().default_today(),
            FieldSpec::text("sozlesmeSuresi", "Sözleşme Süresi"),
            FieldSpec::currency("aylikKiraBedeli", "Aylık Kira Bedeli"),
            FieldSpec::currency("altKiraBedeli", "Alt Kira Bedeli").required(),
        ]);
        Self { fields }
    }
}

impl Default for Sublease {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for Sublease {
    fn id(&self) -> &'static str {
        "sublease"
    }

    fn title(&self) -> &'static str {
        "Alt Kira Anlaşması"
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
            .section(Section::titled("ALT KİRA ANLAŞMASI"))
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(party("ALT KİRACI", &slots, "altKiracıAd", "altKiracıTC", "altKiracıAdres"))
            .section(Section::untitled().paragraph(format!(
                "Yukarıda kimlik bilgileri yazılı taraflar, {} adresindeki konutumuza ilişkin alt kira anlaşması yapmışlardır.",
                slots.text("konutAdresi"),
            )))
            .section(terms(
                "ANLAŞMA ŞARTLARI",
                [
                    Some(format!("Sözleşme tarihi: {}", slots.date("sozlesmeTarihi"))),
                    Some(format!("Alt kira bedeli: {}", slots.money("altKiraBedeli"))),
                    money_term(&slots, "Asıl kira bedeli", "aylikKiraBedeli"),
                    term(&slots, "Sözleşme süresi", "sozlesmeSuresi"),
                ],
            ))
            .section(Section::untitled().paragraph(
                "Bu anlaşma, Türk Borçlar Kanunu'nun 347. maddesi uyarınca, kiraya verenin onayı ile yapılmıştır.",
            ))
            .section(
                Section::untitled()
                    .signature("Kiraya Veren", slots.text("kirayaVerenAd"))
                    .signature("Kiracı", slots.text("kiracıAd"))
                    .signature("Alt Kiracı", slots.text("altKiracıAd")),
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
    fn approval_names_the_subtenant_and_addresses_the_tenant() {
        let data = FormData::new()
            .with("kiracıAd", "Ayşe Demir")
            .with("altKiracıAd", "Mehmet Öz")
            .with("sozlesmeTarihi", "2025-09-01");
        let document = SubleaseApproval::new().render(&data);
        assert!(document.mentions("Sayın Ayşe Demir,"));
        assert!(document.mentions("1 Eylül 2025 tarihli kira sözleşmemiz kapsamında, sizin tarafınızdan Mehmet Öz adlı kişiye"));
        assert!(document.section("ALT KİRACI").is_some());
    }

    #[test]
    fn agreement_terms_skip_the_missing_duration() {
        let data = FormData::new().with("altKiraBedeli", "6500");
        let document = Sublease::new().render(&data);
        let terms = document.section("ANLAŞMA ŞARTLARI").expect("terms section");
        assert_eq!(
            terms.blocks,
            vec![Block::bullets(vec![
                format!("Sözleşme tarihi: {PLACEHOLDER}"),
                "Alt kira bedeli: 6.500,00 ₺".to_string(),
            ])]
        );

        let dated = Sublease::new().render(&data.with("sozlesmeSuresi", "1 yıl"));
        assert!(dated.mentions("Sözleşme süresi: 1 yıl"));
    }

    #[test]
    fn agreement_requires_the_sublease_rent_but_approval_does_not() {
        let agreement = Sublease::new().validate(&FormData::new());
        assert!(agreement.iter().any(|d| d.key() == "altKiraBedeli"));
        let approval = SubleaseApproval::new().validate(&FormData::new());
        assert!(!approval.iter().any(|d| d.key() == "altKiraBedeli"));
        assert!(approval.iter().any(|d| d.key() == "altKiracıAd"));
    }
}
