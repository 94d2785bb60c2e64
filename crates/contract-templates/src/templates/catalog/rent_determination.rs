use super::party;
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

const LEGAL_BASIS: [&str; 2] = ["Türk Borçlar Kanunu Madde 344", "İlgili Yargıtay içtihatları"];

/// Kira tespit davası: asks the court to fix the rent at a new amount.
pub struct RentDetermination {
    fields: Vec<FieldSpec>,
}

impl RentDetermination {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("davacıAd", "Davacı Ad Soyad").required(),
            FieldSpec::text("davacıTC", "Davacı TC Kimlik No").max_length(11),
            FieldSpec::text_area("davacıAdres", "Davacı Adres").required(),
            FieldSpec::text("davalıAd", "Davalı Ad Soyad").required(),
            FieldSpec::text("davalıTC", "Davalı TC Kimlik No").max_length(11),
            FieldSpec::text_area("davalıAdres", "Davalı Adres").required(),
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::currency("mevcutKiraBedeli", "Mevcut Kira Bedeli"),
            FieldSpec::currency("talepEdilenKiraBedeli", "Talep Edilen Kira Bedeli").required(),
            FieldSpec::date("kiraSozlesmesiTarihi", "Kira Sözleşmesi Tarihi"),
            FieldSpec::text("mahkemeAdı", "Mahkeme Adı").required(),
            FieldSpec::date("davaTarihi", "Dava Tarihi").required().default_today(),
        ];
        Self { fields }
    }
}

impl Default for RentDetermination {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for RentDetermination {
    fn id(&self) -> &'static str {
        "rent-determination"
    }

    fn title(&self) -> &'static str {
        "Kira Tespit Dava Dilekçesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);
        let requested = slots.money("talepEdilenKiraBedeli");

        Document::builder()
            .section(Section::titled("KİRA BEDELİNİN TESPİTİNE İLİŞKİN DAVA DİLEKÇESİ"))
            .section(party("DAVACI", &slots, "davacıAd", "davacıTC", "davacıAdres"))
            .section(party("DAVALI", &slots, "davalıAd", "davalıTC", "davalıAdres"))
            .section(Section::titled("İSTEM").paragraph(format!(
                "Yukarıda kimlik bilgileri yazılı davalı ile aramızda mevcut kira sözleşmesi kapsamında, {} adresindeki konutun kira bedelinin {} olarak tespit edilmesine karar verilmesini talep ederim.",
                slots.text("konutAdresi"),
                requested,
            )))
            .section(Section::titled("SEBEP").paragraph(format!(
                "Davalı ile aramızda {} tarihli kira sözleşmesi mevcuttur. Mevcut kira bedeli {} olup, piyasa koşulları ve konutun özellikleri dikkate alındığında, kira bedelinin {} olarak tespit edilmesi gerekmektedir.",
                slots.date("kiraSozlesmesiTarihi"),
                slots.money("mevcutKiraBedeli"),
                requested,
            )))
            .section(
                Section::titled("HUKUKİ DAYANAK")
                    .bullets(LEGAL_BASIS.into_iter().map(String::from).collect()),
            )
            .section(
                Section::untitled()
                    .labeled("Mahkeme", slots.text("mahkemeAdı"))
                    .labeled("Tarih", slots.date("davaTarihi"))
                    .signature("Davacı", slots.text("davacıAd")),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_rent_appears_in_request_and_grounds() {
        let data = FormData::new()
            .with("konutAdresi", "Moda Cad. 4/2 Kadıköy")
            .with("mevcutKiraBedeli", "9000")
            .with("talepEdilenKiraBedeli", "18000");
        let document = RentDetermination::new().render(&data);

        let request = document.section("İSTEM").expect("request section");
        assert!(request.mentions("Moda Cad. 4/2 Kadıköy adresindeki konutun kira bedelinin 18.000,00 ₺"));
        let grounds = document.section("SEBEP").expect("grounds section");
        assert!(grounds.mentions("Mevcut kira bedeli 9.000,00 ₺ olup"));
        assert!(grounds.mentions("18.000,00 ₺ olarak tespit edilmesi"));
    }

    #[test]
    fn cites_the_rent_determination_article() {
        let document = RentDetermination::new().render(&FormData::new());
        assert_eq!(
            document.headings(),
            [
                "KİRA BEDELİNİN TESPİTİNE İLİŞKİN DAVA DİLEKÇESİ",
                "DAVACI",
                "DAVALI",
                "İSTEM",
                "SEBEP",
                "HUKUKİ DAYANAK",
            ]
        );
        assert!(document.mentions("Türk Borçlar Kanunu Madde 344"));
    }
}
