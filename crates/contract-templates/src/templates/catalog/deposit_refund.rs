use super::{closing, landlord_fields, party, tenant_fields};
use crate::templates::clause::{select, Clause};
use crate::templates::condition::Condition;
use crate::templates::document::{Block, Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

static DEDUCTION: &[Clause<Block>] = &[Clause::new(
    "kesinti",
    Condition::flag("kesintiVarsa"),
    deduction,
)];

fn deduction(data: &FormData) -> Block {
    let slots = Slots::new(data);
    Block::paragraph(format!(
        "Depozito tutarından {} tutarında kesinti yapılması gerektiğini kabul ediyorum. Kesinti sebebi: {}",
        slots.money("kesintiTutari"),
        slots.text("kesintiSebebi"),
    ))
}

/// Kira depozitosu iade talebi written by the tenant.
pub struct DepositRefund {
    fields: Vec<FieldSpec>,
}

impl DepositRefund {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::currency("depozitoTutari", "Depozito Tutarı").required(),
            FieldSpec::date("depozitoTarihi", "Depozito Ödeme Tarihi"),
            FieldSpec::date("tahliyeTarihi", "Tahliye Tarihi"),
            FieldSpec::date("talepTarihi", "Talep Tarihi").required().default_today(),
            FieldSpec::boolean("kesintiVarsa", "Kesinti var"),
            FieldSpec::currency("kesintiTutari", "Kesinti Tutarı")
                .visible_if(Condition::flag("kesintiVarsa")),
            FieldSpec::text_area("kesintiSebebi", "Kesinti Sebebi")
                .visible_if(Condition::flag("kesintiVarsa")),
        ]);
        Self { fields }
    }
}

impl Default for DepositRefund {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for DepositRefund {
    fn id(&self) -> &'static str {
        "deposit-refund"
    }

    fn title(&self) -> &'static str {
        "Kira Depozitosu İade Talebi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let body = Section::untitled()
            .paragraph(format!("Sayın {},", slots.text("kirayaVerenAd")))
            .paragraph(format!(
                "{} adresindeki konutumuza ilişkin kira sözleşmemiz kapsamında, {} tarihinde {} tutarında depozito ödemiş bulunmaktayım.",
                slots.text("konutAdresi"),
                slots.date("depozitoTarihi"),
                slots.money("depozitoTutari"),
            ))
            .paragraph(format!(
                "{} sonrasında, depozito tutarının iadesini talep etmekteyim.",
                slots.date_or("tahliyeTarihi", "Konutun tahliyesi")
            ))
            .blocks(select(DEDUCTION, data))
            .paragraph("Türk Borçlar Kanunu'nun 346. maddesi uyarınca, depozito tutarının iadesi gerekmektedir.");

        Document::builder()
            .section(Section::titled("KİRA DEPOZİTOSU İADE TALEBİ"))
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(body)
            .section(closing(slots.date("talepTarihi"), "Kiracı", slots.text("kiracıAd")))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::slots::PLACEHOLDER;

    #[test]
    fn deduction_clause_needs_the_flag() {
        let template = DepositRefund::new();
        let data = FormData::new().with("kesintiTutari", "1500");
        assert!(!template.render(&data).mentions("kesinti yapılması"));

        let data = data.with("kesintiVarsa", true);
        let document = template.render(&data);
        assert!(document.mentions("Depozito tutarından 1.500,00 ₺ tutarında kesinti"));
        assert!(document.mentions(&format!("Kesinti sebebi: {PLACEHOLDER}")));
    }

    #[test]
    fn hidden_deduction_fields_are_not_validated() {
        let template = DepositRefund::new();
        let data = FormData::new().with("kesintiTutari", "");
        assert!(template
            .validate(&data)
            .iter()
            .all(|diagnostic| !diagnostic.key().starts_with("kesinti")));
    }

    #[test]
    fn eviction_date_falls_back_to_generic_wording() {
        let document = DepositRefund::new().render(&FormData::new());
        assert!(document.mentions("Konutun tahliyesi sonrasında, depozito tutarının iadesini"));
    }
}
