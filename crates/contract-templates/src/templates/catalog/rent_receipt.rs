use super::{closing, landlord_fields, party, tenant_fields};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::{EnumOption, FieldSpec};
use crate::templates::slots::Slots;

static PAYMENT_METHODS: &[EnumOption] = &[
    EnumOption::new("Nakit", "Nakit"),
    EnumOption::new("Banka", "Banka Havalesi"),
    EnumOption::new("EFT", "EFT"),
    EnumOption::new("Çek", "Çek"),
];

/// Kira ödeme belgesi issued by the landlord.
pub struct RentReceipt {
    fields: Vec<FieldSpec>,
}

impl RentReceipt {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::date("odemeTarihi", "Ödeme Tarihi").required().default_today(),
            FieldSpec::currency("odemeTutari", "Ödeme Tutarı").required(),
            FieldSpec::choice("odemeSekli", "Ödeme Şekli", PAYMENT_METHODS).required(),
            FieldSpec::text("donem", "Dönem"),
            FieldSpec::text("belgeNo", "Belge No"),
        ]);
        Self { fields }
    }
}

impl Default for RentReceipt {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for RentReceipt {
    fn id(&self) -> &'static str {
        "rent-receipt"
    }

    fn title(&self) -> &'static str {
        "Kira Ödeme Belgesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let mut header = Section::titled("KİRA ÖDEME BELGESİ");
        if let Some(number) = slots.optional("belgeNo") {
            header = header.labeled("Belge No", number);
        }

        let mut payment = Section::titled("ÖDEME BİLGİLERİ")
            .labeled("Ödeme Tarihi", slots.date("odemeTarihi"))
            .labeled("Ödeme Tutarı", slots.money("odemeTutari"))
            .labeled("Ödeme Şekli", slots.text("odemeSekli"));
        if let Some(period) = slots.optional("donem") {
            payment = payment.labeled("Dönem", period);
        }

        let confirmation = Section::untitled()
            .paragraph(format!(
                "Yukarıda belirtilen tutar, {} için kira bedeli olarak {} yoluyla ödenmiştir.",
                slots.text_or("donem", "belirtilen dönem"),
                slots.text("odemeSekli"),
            ))
            .paragraph("Bu belge, ödemenin yapıldığını teyit eder.");

        Document::builder()
            .section(header)
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(Section::titled("KONUT ADRESİ").paragraph(slots.text("konutAdresi")))
            .section(payment)
            .section(confirmation)
            .section(closing(
                slots.date("odemeTarihi"),
                "Kiraya Veren",
                slots.text("kirayaVerenAd"),
            ))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn defaults_pick_cash_and_today() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 15).expect("valid date");
        let defaults = RentReceipt::new().default_data(today);
        assert_eq!(defaults.text("odemeSekli"), "Nakit");
        assert_eq!(defaults.text("odemeTarihi"), "2026-02-15");
    }

    #[test]
    fn period_falls_back_in_prose_only() {
        let data = FormData::new().with("odemeSekli", "EFT");
        let document = RentReceipt::new().render(&data);
        assert!(document.mentions("belirtilen dönem için kira bedeli olarak EFT yoluyla"));
        let payment = document.section("ÖDEME BİLGİLERİ").expect("payment section");
        assert_eq!(payment.blocks.len(), 3);
    }
}
