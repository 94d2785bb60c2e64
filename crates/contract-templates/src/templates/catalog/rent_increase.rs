use super::{closing, landlord_fields, party, tenant_fields};
use crate::templates::clause::Branch;
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::{EnumOption, FieldSpec};
use crate::templates::slots::Slots;

static INCREASE_REASONS: &[EnumOption] = &[
    EnumOption::new("TÜFE", "TÜFE"),
    EnumOption::new("piyasa", "Piyasa Koşulları"),
    EnumOption::new("sözleşme", "Sözleşme Şartı"),
];

// The only branch with a catch-all: anything unrecognised reads as the
// contract terms.
static INCREASE_BASIS: Branch = Branch::new(
    "artisSebebi",
    &[("TÜFE", "TÜFE artışı"), ("piyasa", "piyasa koşulları")],
)
.with_otherwise("sözleşme şartları");

pub struct RentIncreaseNotice {
    fields: Vec<FieldSpec>,
}

impl RentIncreaseNotice {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::currency("mevcutKiraBedeli", "Mevcut Kira Bedeli").required(),
            FieldSpec::currency("yeniKiraBedeli", "Yeni Kira Bedeli").required(),
            FieldSpec::number("artisOrani", "Artış Oranı (%)"),
            FieldSpec::choice("artisSebebi", "Artış Sebebi", INCREASE_REASONS).required(),
            FieldSpec::date("ihtarnameTarihi", "İhtarname Tarihi").required().default_today(),
            FieldSpec::date("gecerlilikTarihi", "Geçerlilik Tarihi"),
        ]);
        Self { fields }
    }
}

impl Default for RentIncreaseNotice {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for RentIncreaseNotice {
    fn id(&self) -> &'static str {
        "rent-increase-notice"
    }

    fn title(&self) -> &'static str {
        "Kira Bedelinin Artırılması İçin İhtarname"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);
        let basis = INCREASE_BASIS.pick(data).unwrap_or_default();

        let mut body = Section::untitled()
            .paragraph(format!("Sayın {},", slots.text("kiracıAd")))
            .paragraph(format!(
                "{} adresindeki konutumuza ilişkin kira sözleşmemiz kapsamında, kira bedelinin artırılması gerekmektedir.",
                slots.text("konutAdresi")
            ))
            .paragraph(format!(
                "Mevcut kira bedeli {} olup, {basis} dikkate alındığında, yeni kira bedeli {} olarak belirlenmiştir.",
                slots.money("mevcutKiraBedeli"),
                slots.money("yeniKiraBedeli"),
            ));
        if let Some(rate) = slots.optional("artisOrani") {
            body = body.paragraph(format!("Artış oranı: %{rate}"));
        }
        body = body
            .paragraph(format!(
                "Bu ihtarname ile, {} yeni kira bedelinin geçerli olacağını bildiririm.",
                slots.date_or("gecerlilikTarihi", "gelecek ay başından itibaren")
            ))
            .paragraph("Türk Borçlar Kanunu'nun 344. maddesi uyarınca, kira bedelinin artırılması için ihtarname gönderme hakkım doğmuştur.");

        Document::builder()
            .section(Section::titled("KİRA BEDELİNİN ARTIRILMASI İÇİN İHTARNAME"))
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(body)
            .section(closing(
                slots.date("ihtarnameTarihi"),
                "Kiraya Veren",
                slots.text("kirayaVerenAd"),
            ))
            .build()
    }
}
