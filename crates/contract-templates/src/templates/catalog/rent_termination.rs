use super::{landlord_fields, party, tenant_fields};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

/// Mutual termination protocol signed by both parties.
pub struct RentTermination {
    fields: Vec<FieldSpec>,
}

impl RentTermination {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::date("kiraSozlesmesiTarihi", "Kira Sözleşmesi Tarihi"),
            FieldSpec::date("fesihTarihi", "Fesih Tarihi").required().default_today(),
            FieldSpec::text_area("fesihSebebi", "Fesih Sebebi"),
            FieldSpec::currency("kalanKiraBedeli", "Kalan Kira Bedeli"),
            FieldSpec::text_area("depozitoDurumu", "Depozito Durumu"),
        ]);
        Self { fields }
    }
}

impl Default for RentTermination {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for RentTermination {
    fn id(&self) -> &'static str {
        "rent-termination"
    }

    fn title(&self) -> &'static str {
        "Konut Kira Sözleşmesi Fesih Protokolü"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let mut terms = Section::untitled().paragraph(format!(
            "Yukarıda kimlik bilgileri yazılı taraflar, {} adresindeki konutumuza ilişkin {} tarihli kira sözleşmesini {} tarihi itibariyle karşılıklı olarak feshetmişlerdir.",
            slots.text("konutAdresi"),
            slots.date("kiraSozlesmesiTarihi"),
            slots.date("fesihTarihi"),
        ));
        if let Some(reason) = slots.optional("fesihSebebi") {
            terms = terms.labeled("Fesih Sebebi", reason);
        }
        if !slots.is_blank("kalanKiraBedeli") {
            terms = terms.labeled("Kalan kira bedeli", slots.money("kalanKiraBedeli"));
        }
        if let Some(deposit) = slots.optional("depozitoDurumu") {
            terms = terms.labeled("Depozito durumu", deposit);
        }

        Document::builder()
            .section(Section::titled("KONUT KİRA SÖZLEŞMESİ FESİH PROTOKOLÜ"))
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(
                Section::titled("KONUT ADRESİ")
                    .paragraph(slots.text("konutAdresi"))
                    .labeled("Kira Sözleşmesi Tarihi", slots.date("kiraSozlesmesiTarihi"))
                    .labeled("Fesih Tarihi", slots.date("fesihTarihi")),
            )
            .section(terms)
            .section(
                Section::untitled()
                    .signature("Kiraya Veren", slots.text("kirayaVerenAd"))
                    .signature("Kiracı", slots.text("kiracıAd")),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::document::Block;

    #[test]
    fn optional_terms_appear_only_when_given() {
        let template = RentTermination::new();
        let bare = template.render(&FormData::new());
        assert!(!bare.mentions("Fesih Sebebi"));
        assert!(!bare.mentions("Kalan kira bedeli"));

        let data = FormData::new()
            .with("kalanKiraBedeli", "7500,5")
            .with("depozitoDurumu", "İade edildi");
        let document = template.render(&data);
        assert!(document.mentions("7.500,50 ₺"));
        assert!(document.mentions("İade edildi"));
    }

    #[test]
    fn both_parties_sign() {
        let document = RentTermination::new().render(&FormData::new());
        let signatures = document
            .sections
            .iter()
            .flat_map(|section| &section.blocks)
            .filter(|block| matches!(block, Block::SignatureLine { .. }))
            .count();
        assert_eq!(signatures, 2);
    }
}
