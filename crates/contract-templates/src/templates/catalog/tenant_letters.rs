//! One-page letters exchanged during a tenancy: the landlord's arrears
//! notice and the tenant's termination, objection and renovation requests.

use super::{closing, landlord_fields, party, tenant_fields};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

/// Kira gecikmesi ihtarnamesi.
pub struct RentDelayNotice {
    fields: Vec<FieldSpec>,
}

impl RentDelayNotice {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::currency("gecikmisKiraTutari", "Gecikmiş Kira Tutarı").required(),
            FieldSpec::text("gecikmisDonemler", "Gecikmiş Dönemler"),
            FieldSpec::date("sonOdemeTarihi", "Son Ödeme Tarihi"),
            FieldSpec::number("odemeSuresi", "Ödeme Süresi (Gün)").required().default_value("7"),
            FieldSpec::date("ihtarnameTarihi", "İhtarname Tarihi").required().default_today(),
        ]);
        Self { fields }
    }
}

impl Default for RentDelayNotice {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for RentDelayNotice {
    fn id(&self) -> &'static str {
        "rent-delay-notice"
    }

    fn title(&self) -> &'static str {
        "Kira Gecikmesi İhtarnamesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let mut arrears = format!("Gecikmiş kira tutarı: {}", slots.money("gecikmisKiraTutari"));
        if let Some(periods) = slots.optional("gecikmisDonemler") {
            arrears.push_str(&format!(" ({periods})"));
        }

        let body = Section::untitled()
            .paragraph(format!("Sayın {},", slots.text("kiracıAd")))
            .paragraph(format!(
                "{} adresindeki konutumuza ilişkin kira sözleşmemiz kapsamında, kira bedelinin ödenmesinde gecikme meydana gelmiştir.",
                slots.text("konutAdresi"),
            ))
            .paragraph(arrears)
            .paragraph(format!(
                "Bu ihtarname ile, {} gün içinde gecikmiş kira bedelinin ödenmesini talep ediyorum. Aksi takdirde, yasal yollara başvurma hakkımı saklı tutarım.",
                slots.text_or("odemeSuresi", "7"),
            ))
            .paragraph("Türk Borçlar Kanunu'nun 350. maddesi uyarınca, kira ödemesinde gecikme halinde ihtarname gönderme hakkım doğmuştur.");

        Document::builder()
            .section(Section::titled("KİRA GECİKMESİ İÇİN İHTARNAME"))
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

/// Notice from the tenant ending the lease.
pub struct TenantTermination {
    fields: Vec<FieldSpec>,
}

impl TenantTermination {
    pub fn new() -> Self {
        let mut fields = tenant_fields(true);
        fields.extend(landlord_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::date("kiraSozlesmesiTarihi", "Kira Sözleşmesi Tarihi"),
            FieldSpec::date("bildirimTarihi", "Bildirim Tarihi").required().default_today(),
            FieldSpec::date("fesihTarihi", "Fesih Tarihi"),
            FieldSpec::date("tahliyeTarihi", "Tahliye Tarihi"),
            FieldSpec::text_area("fesihSebebi", "Fesih Sebebi"),
        ]);
        Self { fields }
    }
}

impl Default for TenantTermination {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for TenantTermination {
    fn id(&self) -> &'static str {
        "tenant-termination"
    }

    fn title(&self) -> &'static str {
        "Kiracı Fesih Bildirimi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let mut body = Section::untitled()
            .paragraph(format!("Sayın {},", slots.text("kirayaVerenAd")))
            .paragraph(format!(
                "{} adresindeki konutumuza ilişkin {} tarihli kira sözleşmemizi sonlandırmak istediğimi bildiririm.",
                slots.text("konutAdresi"),
                slots.date("kiraSozlesmesiTarihi"),
            ));
        if let Some(reason) = slots.optional("fesihSebebi") {
            body = body.labeled("Fesih Sebebi", reason);
        }
        let body = body
            .paragraph(format!(
                "{} itibariyle kira sözleşmesinin feshedildiğini kabul ediyorum. {} konutun tahliyesini gerçekleştireceğim.",
                slots.date_or("fesihTarihi", "Belirtilen tarih"),
                slots.date_or("tahliyeTarihi", "Uygun bir tarihte"),
            ))
            .paragraph("Türk Borçlar Kanunu'nun 347. maddesi uyarınca, kiracı tarafından kira sözleşmesinin feshi için bildirim yapma hakkım doğmuştur.");

        Document::builder()
            .section(Section::titled("KİRACI TARAFINDAN KİRA SÖZLEŞMESİNİN SONLANDIRILMASI BİLDİRİMİ"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(body)
            .section(closing(slots.date("bildirimTarihi"), "Kiracı", slots.text("kiracıAd")))
            .build()
    }
}

/// Tenant's objection to an unjustified rent increase.
pub struct RentIncreaseObjection {
    fields: Vec<FieldSpec>,
}

impl RentIncreaseObjection {
    pub fn new() -> Self {
        let mut fields = tenant_fields(true);
        fields.extend(landlord_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::currency("mevcutKiraBedeli", "Mevcut Kira Bedeli").required(),
            FieldSpec::currency("talepEdilenKiraBedeli", "Talep Edilen Kira Bedeli").required(),
            FieldSpec::text_area("itirazSebebi", "İtiraz Sebebi").required(),
            FieldSpec::date("itirazTarihi", "İtiraz Tarihi").required().default_today(),
        ]);
        Self { fields }
    }
}

impl Default for RentIncreaseObjection {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for RentIncreaseObjection {
    fn id(&self) -> &'static str {
        "rent-increase-objection"
    }

    fn title(&self) -> &'static str {
        "Kira Artışına İtiraz Mektubu"
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
                "{} adresindeki konutumuza ilişkin kira sözleşmemiz kapsamında, kira bedelinin {} tutarından {} tutarına artırılması talebinize itiraz etmekteyim.",
                slots.text("konutAdresi"),
                slots.money("mevcutKiraBedeli"),
                slots.money("talepEdilenKiraBedeli"),
            ))
            .subsection(Section::titled("İTİRAZ SEBEBİ").paragraph(slots.text("itirazSebebi")));
        let tail = Section::untitled()
            .paragraph("Türk Borçlar Kanunu'nun 344. maddesi uyarınca, kira bedelinin artırılması için makul bir sebep bulunmamaktadır. Bu nedenle, kira artış talebinizi kabul etmiyorum.")
            .paragraph("Aksi takdirde, yasal yollara başvurma hakkımı saklı tutarım.");

        Document::builder()
            .section(Section::titled("HAKSIZ KİRA ARTIRAN EV SAHİBİNE İTİRAZ MEKTUBU"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(body)
            .section(tail)
            .section(closing(slots.date("itirazTarihi"), "Kiracı", slots.text("kiracıAd")))
            .build()
    }
}

/// Tenant asks permission to renovate or alter the rented home.
pub struct RenovationRequest {
    fields: Vec<FieldSpec>,
}

impl RenovationRequest {
    pub fn new() -> Self {
        let mut fields = tenant_fields(true);
        fields.extend(landlord_fields(false));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::text_area("tadilatKonusu", "Tadilat Konusu").required(),
            FieldSpec::text_area("tadilatSebebi", "Tadilat Sebebi").required(),
            FieldSpec::currency("tahminiMaliyet", "Tahmini Maliyet"),
            FieldSpec::date("talepTarihi", "Talep Tarihi").required().default_today(),
        ]);
        Self { fields }
    }
}

impl Default for RenovationRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for RenovationRequest {
    fn id(&self) -> &'static str {
        "renovation-request"
    }

    fn title(&self) -> &'static str {
        "Kiracının Tadilat Talebi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let mut body = Section::untitled()
            .paragraph(format!("Sayın {},", slots.text("kirayaVerenAd")))
            .paragraph(format!(
                "{} adresindeki konutumuza ilişkin kira sözleşmemiz kapsamında, aşağıda belirtilen tadilatın yapılmasını talep etmekteyim.",
                slots.text("konutAdresi"),
            ))
            .subsection(Section::titled("TADİLAT KONUSU").paragraph(slots.text("tadilatKonusu")))
            .subsection(Section::titled("TADİLAT SEBEBİ").paragraph(slots.text("tadilatSebebi")));
        if !slots.is_blank("tahminiMaliyet") {
            body = body.subsection(
                Section::untitled()
                    .paragraph(format!("Tahmini maliyet: {}", slots.money("tahminiMaliyet"))),
            );
        }
        let body = body.subsection(Section::untitled().paragraph(
            "Türk Borçlar Kanunu'nun 345. maddesi uyarınca, kiracının kiralanan konutta yenilik veya değişiklik yapılması için kiraya verenin izni gerekmektedir.",
        ));

        Document::builder()
            .section(Section::titled("KİRACININ KİRALANAN KONUTTA YENİLİK VEYA DEĞİŞİKLİK YAPILMASI TALEBİ"))
            .section(party("KİRACI", &slots, "kiracıAd", "kiracıTC", "kiracıAdres"))
            .section(party("KİRAYA VEREN", &slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"))
            .section(body)
            .section(closing(slots.date("talepTarihi"), "Kiracı", slots.text("kiracıAd")))
            .build()
    }
}
