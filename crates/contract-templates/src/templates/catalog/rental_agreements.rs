use super::{landlord_fields, money_term, party, tenant_fields, term, terms};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

fn both_sign(slots: &Slots<'_>) -> Section {
    Section::untitled()
        .signature("Kiraya Veren", slots.text("kirayaVerenAd"))
        .signature("Kiracı", slots.text("kiracıAd"))
}

/// Renews an existing lease with a new rent; other terms carry over.
pub struct RentRenewal {
    fields: Vec<FieldSpec>,
}

impl RentRenewal {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::date("eskiSozlesmeTarihi", "Eski Sözleşme Tarihi"),
            FieldSpec::date("yeniSozlesmeTarihi", "Yeni Sözleşme Tarihi").required().default_today(),
            FieldSpec::currency("eskiKiraBedeli", "Eski Kira Bedeli"),
            FieldSpec::currency("yeniKiraBedeli", "Yeni Kira Bedeli").required(),
            FieldSpec::text("yeniSozlesmeSuresi", "Yeni Sözleşme Süresi"),
        ]);
        Self { fields }
    }
}

impl Default for RentRenewal {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for RentRenewal {
    fn id(&self) -> &'static str {
        "rent-renewal"
    }

    fn title(&self) -> &'static str {
        "Kira Yenileme Sözleşmesi"
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
            .section(Section::titled("KİRA YENİLEME SÖZLEŞMESİ"))
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(Section::untitled().paragraph(format!(
                "Yukarıda kimlik bilgileri yazılı taraflar, {} adresindeki konutumuza ilişkin {} tarihli kira sözleşmesini yenilemek istediklerini beyan ederler.",
                slots.text("konutAdresi"),
                slots.date("eskiSozlesmeTarihi"),
            )))
            .section(terms(
                "YENİ SÖZLEŞME ŞARTLARI",
                [
                    Some(format!("Yeni sözleşme tarihi: {}", slots.date("yeniSozlesmeTarihi"))),
                    money_term(&slots, "Eski kira bedeli", "eskiKiraBedeli"),
                    Some(format!("Yeni kira bedeli: {}", slots.money("yeniKiraBedeli"))),
                    term(&slots, "Sözleşme süresi", "yeniSozlesmeSuresi"),
                ],
            ))
            .section(Section::untitled().paragraph("Eski sözleşmenin diğer şartları aynen geçerlidir."))
            .section(both_sign(&slots))
            .build()
    }
}

/// Lease of a furnished home with its inventory.
pub struct FurnishedHousing {
    fields: Vec<FieldSpec>,
}

impl FurnishedHousing {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::text_area("esyalarListesi", "Eşyalar Listesi").required(),
            FieldSpec::date("sozlesmeTarihi", "Sözleşme Tarihi").required().default_today(),
            FieldSpec::text("sozlesmeSuresi", "Sözleşme Süresi"),
            FieldSpec::currency("aylikKiraBedeli", "Aylık Kira Bedeli").required(),
            FieldSpec::currency("depozito", "Depozito"),
        ]);
        Self { fields }
    }
}

impl Default for FurnishedHousing {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for FurnishedHousing {
    fn id(&self) -> &'static str {
        "furnished-housing"
    }

    fn title(&self) -> &'static str {
        "Eşyalı Konut Kira Sözleşmesi"
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
            .section(Section::titled("EŞYALI KONUT KİRA SÖZLEŞMESİ"))
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(Section::untitled().paragraph(format!(
                "Yukarıda kimlik bilgileri yazılı taraflar, {} adresindeki eşyalı konutumuza ilişkin kira sözleşmesi yapmışlardır.",
                slots.text("konutAdresi"),
            )))
            .section(terms(
                "SÖZLEŞME ŞARTLARI",
                [
                    Some(format!("Sözleşme tarihi: {}", slots.date("sozlesmeTarihi"))),
                    Some(format!("Aylık kira bedeli: {}", slots.money("aylikKiraBedeli"))),
                    money_term(&slots, "Depozito", "depozito"),
                    term(&slots, "Sözleşme süresi", "sozlesmeSuresi"),
                ],
            ))
            .section(Section::titled("KONUTTA BULUNAN EŞYALAR").paragraph(slots.text("esyalarListesi")))
            .section(Section::untitled().paragraph(
                "Kiracı, eşyaları özenle kullanacak ve zarar görmesi halinde tazmin edecektir.",
            ))
            .section(both_sign(&slots))
            .build()
    }
}
