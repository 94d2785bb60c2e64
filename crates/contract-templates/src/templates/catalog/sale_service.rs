use super::{date_term, money_term, party, term, terms};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

/// Sale of goods or real estate with an optional instalment split.
pub struct SaleAgreement {
    fields: Vec<FieldSpec>,
}

impl SaleAgreement {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("satıcıAd", "Satıcı Ad Soyad").required(),
            FieldSpec::text("satıcıTC", "Satıcı TC Kimlik No").max_length(11),
            FieldSpec::text_area("satıcıAdres", "Satıcı Adres"),
            FieldSpec::text("alıcıAd", "Alıcı Ad Soyad").required(),
            FieldSpec::text("alıcıTC", "Alıcı TC Kimlik No").max_length(11),
            FieldSpec::text_area("alıcıAdres", "Alıcı Adres"),
            FieldSpec::text_area("malAdresi", "Mal/Gayrimenkul Adresi").required(),
            FieldSpec::date("sozlesmeTarihi", "Sözleşme Tarihi").required().default_today(),
            FieldSpec::date("teslimTarihi", "Teslim Tarihi"),
            FieldSpec::currency("satisBedeli", "Satış Bedeli").required(),
            FieldSpec::currency("peşinTutar", "Peşin Tutar"),
            FieldSpec::currency("kalanTutar", "Kalan Tutar"),
        ];
        Self { fields }
    }
}

impl Default for SaleAgreement {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for SaleAgreement {
    fn id(&self) -> &'static str {
        "sale"
    }

    fn title(&self) -> &'static str {
        "Satış Sözleşmesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Commercial
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        Document::builder()
            .section(Section::titled("SATIŞ SÖZLEŞMESİ"))
            .section(party("SATICI", &slots, "satıcıAd", "satıcıTC", "satıcıAdres"))
            .section(party("ALICI", &slots, "alıcıAd", "alıcıTC", "alıcıAdres"))
            .section(Section::titled("SATILAN MAL/GAYRİMENKUL").paragraph(slots.text("malAdresi")))
            .section(Section::untitled().paragraph(
                "Yukarıda kimlik bilgileri yazılı taraflar, yukarıda belirtilen mal/gayrimenkulün satışı için sözleşme yapmışlardır.",
            ))
            .section(terms(
                "SÖZLEŞME ŞARTLARI",
                [
                    Some(format!("Sözleşme tarihi: {}", slots.date("sozlesmeTarihi"))),
                    Some(format!("Satış bedeli: {}", slots.money("satisBedeli"))),
                    money_term(&slots, "Peşin tutar", "peşinTutar"),
                    money_term(&slots, "Kalan tutar", "kalanTutar"),
                    date_term(&slots, "Teslim tarihi", "teslimTarihi"),
                ],
            ))
            .section(Section::untitled().paragraph(
                "Türk Borçlar Kanunu'nun 207-232. maddeleri uyarınca, satış sözleşmesi yapılmıştır.",
            ))
            .section(
                Section::untitled()
                    .signature("Satıcı", slots.text("satıcıAd"))
                    .signature("Alıcı", slots.text("alıcıAd")),
            )
            .build()
    }
}

pub struct ServiceAgreement {
    fields: Vec<FieldSpec>,
}

impl ServiceAgreement {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("hizmetVerenAd", "Hizmet Veren Ad Soyad / Şirket Unvanı").required(),
            FieldSpec::text("hizmetVerenTC", "Hizmet Veren TC/Vergi No"),
            FieldSpec::text_area("hizmetVerenAdres", "Hizmet Veren Adres"),
            FieldSpec::text("hizmetAlanAd", "Hizmet Alan Ad Soyad / Şirket Unvanı").required(),
            FieldSpec::text("hizmetAlanTC", "Hizmet Alan TC/Vergi No"),
            FieldSpec::text_area("hizmetAlanAdres", "Hizmet Alan Adres"),
            FieldSpec::text_area("hizmetKonusu", "Hizmet Konusu").required(),
            FieldSpec::date("sozlesmeTarihi", "Sözleşme Tarihi").required().default_today(),
            FieldSpec::date("teslimTarihi", "Teslim Tarihi"),
            FieldSpec::currency("hizmetBedeli", "Hizmet Bedeli").required(),
            FieldSpec::text("sozlesmeSuresi", "Sözleşme Süresi"),
        ];
        Self { fields }
    }
}

impl Default for ServiceAgreement {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for ServiceAgreement {
    fn id(&self) -> &'static str {
        "service"
    }

    fn title(&self) -> &'static str {
        "Hizmet Sözleşmesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Commercial
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        Document::builder()
            .section(Section::titled("HİZMET SÖZLEŞMESİ"))
            .section(party("HİZMET VEREN", &slots, "hizmetVerenAd", "hizmetVerenTC", "hizmetVerenAdres"))
            .section(party("HİZMET ALAN", &slots, "hizmetAlanAd", "hizmetAlanTC", "hizmetAlanAdres"))
            .section(Section::untitled().paragraph(
                "Yukarıda kimlik bilgileri yazılı taraflar, aşağıda belirtilen hizmet için sözleşme yapmışlardır.",
            ))
            .section(Section::titled("HİZMET KONUSU").paragraph(slots.text("hizmetKonusu")))
            .section(terms(
                "SÖZLEŞME ŞARTLARI",
                [
                    Some(format!("Sözleşme tarihi: {}", slots.date("sozlesmeTarihi"))),
                    Some(format!("Hizmet bedeli: {}", slots.money("hizmetBedeli"))),
                    term(&slots, "Sözleşme süresi", "sozlesmeSuresi"),
                    date_term(&slots, "Teslim tarihi", "teslimTarihi"),
                ],
            ))
            .section(Section::untitled().paragraph(
                "Türk Borçlar Kanunu'nun 393-433. maddeleri uyarınca, hizmet sözleşmesi yapılmıştır.",
            ))
            .section(
                Section::untitled()
                    .signature("Hizmet Veren", slots.text("hizmetVerenAd"))
                    .signature("Hizmet Alan", slots.text("hizmetAlanAd")),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_terms_show_instalments_and_delivery() {
        let data = FormData::new()
            .with("satisBedeli", "1250000")
            .with("peşinTutar", "250000")
            .with("kalanTutar", "1000000")
            .with("teslimTarihi", "2026-04-15");
        let document = SaleAgreement::new().render(&data);
        assert!(document.mentions("Satış bedeli: 1.250.000,00 ₺"));
        assert!(document.mentions("Peşin tutar: 250.000,00 ₺"));
        assert!(document.mentions("Kalan tutar: 1.000.000,00 ₺"));
        assert!(document.mentions("Teslim tarihi: 15 Nisan 2026"));
    }

    #[test]
    fn unreadable_delivery_date_is_left_out() {
        let data = FormData::new().with("teslimTarihi", "yakında");
        let document = ServiceAgreement::new().render(&data);
        assert!(!document.mentions("Teslim tarihi"));
    }

    #[test]
    fn service_subject_has_its_own_section() {
        let data = FormData::new().with("hizmetKonusu", "Web sitesi bakımı");
        let document = ServiceAgreement::new().render(&data);
        let subject = document.section("HİZMET KONUSU").expect("subject section");
        assert!(subject.mentions("Web sitesi bakımı"));
    }
}
