use super::closing;
use super::labor::{
    court_heading, defendant_section, plaintiff_fields, plaintiff_section, sgk_fields, sgk_section,
    witness_field, witness_section,
};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

const LEGAL_GROUNDS: [&str; 4] = [
    "4857 sayılı İş Kanunu",
    "6098 sayılı Türk Borçlar Kanunu",
    "7036 sayılı İş Mahkemeleri Kanunu",
    "6100 sayılı HMK ve ilgili mevzuat",
];

const EVIDENCE: [&str; 8] = [
    "İş sözleşmesi",
    "SGK hizmet dökümü",
    "Ücret bordroları",
    "Banka kayıtları",
    "Tanık beyanları",
    "Noter ihtarnamesi (varsa)",
    "Bilirkişi incelemesi",
    "Her türlü yasal delil",
];

const CLAIMS: [&str; 8] = [
    "Davacının iş sözleşmesini haklı nedenle feshettiğinin tespitine,",
    "Kıdem tazminatı,",
    "Ödenmeyen ücret alacakları,",
    "Fazla mesai,",
    "Yıllık izin ücreti,",
    "Ulusal bayram ve genel tatil alacaklarının,",
    "Yasal faizleriyle birlikte davalıdan tahsiline,",
    "Yargılama giderleri ve vekâlet ücretinin davalıya yükletilmesine",
];

fn lines<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.into_iter().map(String::from).collect()
}

/// Employee-side termination for cause: the claims list is fixed, only the
/// witness and SGK parts vary with the form.
pub struct JustifiedTerminationLawsuit {
    fields: Vec<FieldSpec>,
}

impl JustifiedTerminationLawsuit {
    pub fn new() -> Self {
        let mut fields = plaintiff_fields();
        fields.extend([
            FieldSpec::date("isBaslangicTarihi", "İşe Başlangıç Tarihi").required(),
            FieldSpec::date("isBitisTarihi", "İşten Ayrılış Tarihi").required(),
            FieldSpec::text("pozisyon", "Pozisyon").required(),
            FieldSpec::currency("aylikUcret", "Aylık Ücret").required(),
            FieldSpec::date("fesihTarihi", "Fesih Tarihi").required(),
            FieldSpec::currency("davaDegeri", "Dava Değeri").required(),
            witness_field(),
        ]);
        fields.extend(sgk_fields());
        fields.push(FieldSpec::date("tarih", "Tarih").required());
        Self { fields }
    }
}

impl Default for JustifiedTerminationLawsuit {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for JustifiedTerminationLawsuit {
    fn id(&self) -> &'static str {
        "justified-termination-receivables-lawsuit"
    }

    fn title(&self) -> &'static str {
        "Haklı Fesih Nedeniyle İşçilik Alacakları Dava Dilekçesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Employment
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let explanations = Section::titled("AÇIKLAMALAR")
            .paragraph(format!(
                "Davacı, davalı şirkete ait işyerinde {} tarihinden {} tarihine kadar {} pozisyonunda, aylık {} ücretle çalışmıştır.",
                slots.date("isBaslangicTarihi"),
                slots.date("isBitisTarihi"),
                slots.text("pozisyon"),
                slots.money("aylikUcret"),
            ))
            .paragraph("Davalı işveren, çalışma süresi boyunca ücretleri süresinde ve eksiksiz ödememiş, davacıya ait fazla mesai, yıllık izin ve diğer işçilik alacaklarını da ödemekten imtina etmiştir.")
            .paragraph("Ücretlerin zamanında ödenmemesi, işçinin en temel hakkı olup 4857 sayılı İş Kanunu'nun 24/II-e maddesi uyarınca işçi açısından haklı fesih sebebidir.")
            .paragraph(format!(
                "Davacı, yaşanan bu hukuka aykırı uygulamalar nedeniyle iş sözleşmesini {} tarihinde haklı nedenle feshetmiştir. Fesih sonrası davalıya yapılan sözlü ve yazılı taleplere rağmen alacaklar ödenmemiştir.",
                slots.date("fesihTarihi"),
            ))
            .paragraph("Davacı, iş sözleşmesini haklı nedenle feshettiğinden kıdem tazminatına hak kazanmıştır. Ayrıca ödenmeyen işçilik alacaklarının da tahsili gerekmektedir.");

        let mut builder = Document::builder()
            .section(Section::titled(court_heading(data)))
            .section(plaintiff_section(&slots))
            .section(defendant_section(&slots, "Şirket Ünvanı"))
            .section(Section::titled("DAVA KONUSU").paragraph(
                "İş sözleşmesinin işçi tarafından haklı nedenle feshi sonucu doğan kıdem tazminatı, ücret, fazla mesai, yıllık izin, ulusal bayram ve genel tatil alacaklarının tahsili talebidir.",
            ))
            .section(Section::titled("DAVA DEĞERİ").paragraph(format!(
                "Şimdilik {} (Fazlaya ilişkin haklarımız saklıdır.)",
                slots.money("davaDegeri")
            )))
            .section(explanations)
            .section(Section::titled("HUKUKİ NEDENLER").bullets(lines(LEGAL_GROUNDS)))
            .section(Section::titled("DELİLLER").bullets(lines(EVIDENCE)))
            .section_if_any(witness_section(&self.fields, data));
        if let Some(sgk) = sgk_section(data) {
            builder = builder.section(sgk);
        }

        builder
            .section(
                Section::titled("SONUÇ VE İSTEM")
                    .paragraph("Yukarıda arz ve izah edilen nedenlerle;")
                    .bullets(lines(CLAIMS))
                    .paragraph("karar verilmesini saygıyla arz ve talep ederim."),
            )
            .section(closing(slots.date("tarih"), "Davacı", slots.text("davaciAd")))
            .build()
    }
}
