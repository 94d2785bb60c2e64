//! Non-residential leases: business premises, vehicles and storage.

use super::{landlord_fields, money_term, optional_labeled, party, tenant_fields, term, terms};
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

/// Either side may be a company, so the identity number is a tax number
/// as often as a TC number and has no fixed length.
fn business_parties() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("kirayaVerenAd", "Kiraya Veren Ad Soyad / Şirket Unvanı").required(),
        FieldSpec::text("kirayaVerenTC", "Kiraya Veren TC/Vergi No"),
        FieldSpec::text_area("kirayaVerenAdres", "Kiraya Veren Adres"),
        FieldSpec::text("kiracıAd", "Kiracı Ad Soyad / Şirket Unvanı").required(),
        FieldSpec::text("kiracıTC", "Kiracı TC/Vergi No"),
        FieldSpec::text_area("kiracıAdres", "Kiracı Adres"),
    ]
}

fn parties(slots: &Slots<'_>) -> [Section; 2] {
    [
        party("KİRAYA VEREN", slots, "kirayaVerenAd", "kirayaVerenTC", "kirayaVerenAdres"),
        party("KİRACI", slots, "kiracıAd", "kiracıTC", "kiracıAdres"),
    ]
}

fn both_sign(slots: &Slots<'_>) -> Section {
    Section::untitled()
        .signature("Kiraya Veren", slots.text("kirayaVerenAd"))
        .signature("Kiracı", slots.text("kiracıAd"))
}

fn lease_terms(slots: &Slots<'_>, rent_label: &str, rent_key: &str) -> Section {
    terms(
        "SÖZLEŞME ŞARTLARI",
        [
            Some(format!("Sözleşme tarihi: {}", slots.date("sozlesmeTarihi"))),
            Some(format!("{rent_label}: {}", slots.money(rent_key))),
            money_term(slots, "Depozito", "depozito"),
            term(slots, "Sözleşme süresi", "sozlesmeSuresi"),
        ],
    )
}

fn lease_fields(rent_key: &'static str, rent_label: &'static str) -> [FieldSpec; 4] {
    [
        FieldSpec::date("sozlesmeTarihi", "Sözleşme Tarihi").required().default_today(),
        FieldSpec::text("sozlesmeSuresi", "Sözleşme Süresi"),
        FieldSpec::currency(rent_key, rent_label).required(),
        FieldSpec::currency("depozito", "Depozito"),
    ]
}

/// İşyeri kira sözleşmesi.
pub struct CommercialLease {
    fields: Vec<FieldSpec>,
}

impl CommercialLease {
    pub fn new() -> Self {
        let mut fields = business_parties();
        fields.extend([
            FieldSpec::text_area("isyeriAdresi", "İşyeri Adresi").required(),
            FieldSpec::text("kullanimAmaci", "Kullanım Amacı"),
        ]);
        fields.extend(lease_fields("aylikKiraBedeli", "Aylık Kira Bedeli"));
        Self { fields }
    }
}

impl Default for CommercialLease {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for CommercialLease {
    fn id(&self) -> &'static str {
        "commercial"
    }

    fn title(&self) -> &'static str {
        "İşyeri Kira Sözleşmesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Commercial
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);
        let [landlord, tenant] = parties(&slots);

        Document::builder()
            .section(Section::titled("İŞYERİ KİRA SÖZLEŞMESİ"))
            .section(landlord)
            .section(tenant)
            .section(
                Section::titled("İŞYERİ ADRESİ")
                    .paragraph(slots.text("isyeriAdresi"))
                    .blocks(optional_labeled("Kullanım Amacı", slots.optional("kullanimAmaci"))),
            )
            .section(Section::untitled().paragraph(format!(
                "Yukarıda kimlik bilgileri yazılı taraflar, {} adresindeki işyerine ilişkin kira sözleşmesi yapmışlardır.",
                slots.text("isyeriAdresi"),
            )))
            .section(lease_terms(&slots, "Aylık kira bedeli", "aylikKiraBedeli"))
            .section(Section::untitled().paragraph(
                "Türk Borçlar Kanunu'nun 306-350. maddeleri uyarınca, işyeri kira sözleşmesi yapılmıştır.",
            ))
            .section(both_sign(&slots))
            .build()
    }
}

/// Araç kiralama sözleşmesi with a daily rate.
pub struct VehicleRental {
    fields: Vec<FieldSpec>,
}

impl VehicleRental {
    pub fn new() -> Self {
        let mut fields = landlord_fields(false);
        fields.extend(tenant_fields(false));
        fields.extend([
            FieldSpec::text("aracMarka", "Araç Marka").required(),
            FieldSpec::text("aracModel", "Araç Model"),
            FieldSpec::text("aracPlaka", "Araç Plaka").required(),
        ]);
        fields.extend(lease_fields("gunlukKiraBedeli", "Günlük Kira Bedeli"));
        Self { fields }
    }
}

impl Default for VehicleRental {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for VehicleRental {
    fn id(&self) -> &'static str {
        "vehicle"
    }

    fn title(&self) -> &'static str {
        "Araç Kiralama Sözleşmesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Commercial
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);
        let [landlord, tenant] = parties(&slots);

        Document::builder()
            .section(Section::titled("ARAÇ KİRALAMA SÖZLEŞMESİ"))
            .section(landlord)
            .section(tenant)
            .section(
                Section::titled("ARAÇ BİLGİLERİ")
                    .labeled("Marka", slots.text("aracMarka"))
                    .blocks(optional_labeled("Model", slots.optional("aracModel")))
                    .labeled("Plaka", slots.text("aracPlaka")),
            )
            .section(Section::untitled().paragraph(
                "Yukarıda kimlik bilgileri yazılı taraflar, yukarıda belirtilen araç için kira sözleşmesi yapmışlardır.",
            ))
            .section(lease_terms(&slots, "Günlük kira bedeli", "gunlukKiraBedeli"))
            .section(Section::untitled().paragraph(
                "Türk Borçlar Kanunu'nun 306-350. maddeleri uyarınca, araç kiralama sözleşmesi yapılmıştır.",
            ))
            .section(both_sign(&slots))
            .build()
    }
}

pub struct WarehouseRental {
    fields: Vec<FieldSpec>,
}

impl WarehouseRental {
    pub fn new() -> Self {
        let mut fields = business_parties();
        fields.extend([
            FieldSpec::text_area("depoAdresi", "Depo Adresi").required(),
            FieldSpec::number("depoMetrekare", "Depo Metrekare"),
        ]);
        fields.extend(lease_fields("aylikKiraBedeli", "Aylık Kira Bedeli"));
        Self { fields }
    }
}

impl Default for WarehouseRental {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for WarehouseRental {
    fn id(&self) -> &'static str {
        "warehouse"
    }

    fn title(&self) -> &'static str {
        "Depo Kiralama Sözleşmesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Commercial
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);
        let [landlord, tenant] = parties(&slots);

        Document::builder()
            .section(Section::titled("DEPO KİRALAMA SÖZLEŞMESİ"))
            .section(landlord)
            .section(tenant)
            .section(
                Section::titled("DEPO ADRESİ")
                    .paragraph(slots.text("depoAdresi"))
                    .blocks(optional_labeled(
                        "Metrekare",
                        slots.optional("depoMetrekare").map(|area| format!("{area} m²")),
                    )),
            )
            .section(Section::untitled().paragraph(format!(
                "Yukarıda kimlik bilgileri yazılı taraflar, {} adresindeki depoya ilişkin kira sözleşmesi yapmışlardır.",
                slots.text("depoAdresi"),
            )))
            .section(lease_terms(&slots, "Aylık kira bedeli", "aylikKiraBedeli"))
            .section(Section::untitled().paragraph(
                "Türk Borçlar Kanunu'nun 306-350. maddeleri uyarınca, depo kiralama sözleşmesi yapılmıştır.",
            ))
            .section(both_sign(&slots))
            .build()
    }
}
