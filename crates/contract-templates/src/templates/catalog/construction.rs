use super::{date_term, money_term, party, term, terms};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

/// Kat karşılığı inşaat: the landowner gives the plot, the builder pays in
/// flats.
pub struct ConstructionAgreement {
    fields: Vec<FieldSpec>,
}

impl ConstructionAgreement {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("arsaSahibiAd", "Arsa Sahibi Ad Soyad").required(),
            FieldSpec::text("arsaSahibiTC", "Arsa Sahibi TC Kimlik No").max_length(11),
            FieldSpec::text_area("arsaSahibiAdres", "Arsa Sahibi Adres"),
            FieldSpec::text("yapimciAd", "Yapımcı Ad Soyad / Şirket Unvanı").required(),
            FieldSpec::text("yapimciTC", "Yapımcı TC/Vergi No"),
            FieldSpec::text_area("yapimciAdres", "Yapımcı Adres"),
            FieldSpec::text_area("arsaAdresi", "Arsa Adresi").required(),
            FieldSpec::date("sozlesmeTarihi", "Sözleşme Tarihi").required().default_today(),
            FieldSpec::date("bitisTarihi", "Bitiş Tarihi"),
            FieldSpec::number("katSayisi", "Kat Sayısı"),
            FieldSpec::number("daireSayisi", "Daire Sayısı"),
            FieldSpec::text("arsaSahibineVerilecekKat", "Arsa Sahibine Verilecek Kat"),
            FieldSpec::text("yapimciyaVerilecekKat", "Yapımcıya Verilecek Kat"),
            FieldSpec::currency("tahminiMaliyet", "Tahmini Maliyet"),
        ];
        Self { fields }
    }
}

impl Default for ConstructionAgreement {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for ConstructionAgreement {
    fn id(&self) -> &'static str {
        "construction-agreement"
    }

    fn title(&self) -> &'static str {
        "Kat Karşılığı Bina Yapım Sözleşmesi"
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
            .section(Section::titled("KAT KARŞILIĞI BİNA YAPIM SÖZLEŞMESİ"))
            .section(party("ARSA SAHİBİ", &slots, "arsaSahibiAd", "arsaSahibiTC", "arsaSahibiAdres"))
            .section(party("YAPIMCI", &slots, "yapimciAd", "yapimciTC", "yapimciAdres"))
            .section(Section::titled("ARSA ADRESİ").paragraph(slots.text("arsaAdresi")))
            .section(Section::untitled().paragraph(format!(
                "Yukarıda kimlik bilgileri yazılı taraflar, {} adresindeki arsa üzerinde kat karşılığı bina yapım sözleşmesi yapmışlardır.",
                slots.text("arsaAdresi"),
            )))
            .section(terms(
                "SÖZLEŞME ŞARTLARI",
                [
                    Some(format!("Sözleşme tarihi: {}", slots.date("sozlesmeTarihi"))),
                    date_term(&slots, "Bitiş tarihi", "bitisTarihi"),
                    term(&slots, "Kat sayısı", "katSayisi"),
                    term(&slots, "Daire sayısı", "daireSayisi"),
                    term(&slots, "Arsa sahibine verilecek kat", "arsaSahibineVerilecekKat"),
                    term(&slots, "Yapımcıya verilecek kat", "yapimciyaVerilecekKat"),
                    money_term(&slots, "Tahmini maliyet", "tahminiMaliyet"),
                ],
            ))
            .section(Section::untitled().paragraph(
                "Türk Borçlar Kanunu'nun 480-520. maddeleri uyarınca, kat karşılığı bina yapım sözleşmesi yapılmıştır.",
            ))
            .section(
                Section::untitled()
                    .signature("Arsa Sahibi", slots.text("arsaSahibiAd"))
                    .signature("Yapımcı", slots.text("yapimciAd")),
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
    fn only_the_contract_date_is_always_listed() {
        let document = ConstructionAgreement::new().render(&FormData::new());
        let terms = document.section("SÖZLEŞME ŞARTLARI").expect("terms section");
        assert_eq!(
            terms.blocks,
            vec![Block::bullets(vec![format!("Sözleşme tarihi: {PLACEHOLDER}")])]
        );
    }

    #[test]
    fn flat_split_is_listed_when_agreed() {
        let data = FormData::new()
            .with("katSayisi", "5")
            .with("arsaSahibineVerilecekKat", "1, 2 ve 3. katlar")
            .with("yapimciyaVerilecekKat", "4 ve 5. katlar")
            .with("tahminiMaliyet", "12000000");
        let document = ConstructionAgreement::new().render(&data);
        assert!(document.mentions("Kat sayısı: 5"));
        assert!(document.mentions("Arsa sahibine verilecek kat: 1, 2 ve 3. katlar"));
        assert!(document.mentions("Yapımcıya verilecek kat: 4 ve 5. katlar"));
        assert!(document.mentions("Tahmini maliyet: 12.000.000,00 ₺"));
        assert!(!document.mentions("Daire sayısı"));
    }
}
