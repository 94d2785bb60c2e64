//! Single-page forms that are fully described by a title and a list of keys.
//!
//! Every key becomes a required field whose label and kind are derived from
//! the key itself; the document lists each value under its label and ends
//! with a signature line.

use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::format::to_upper_tr;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::{FieldKind, FieldSpec};
use crate::templates::slots::{Slots, PLACEHOLDER};

#[derive(Debug, Clone, Copy)]
pub struct SimpleSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub category: TemplateCategory,
    pub keys: &'static [&'static str],
}

impl SimpleSpec {
    pub const fn new(
        id: &'static str,
        title: &'static str,
        category: TemplateCategory,
        keys: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            title,
            category,
            keys,
        }
    }
}

const TEXT_AREA_MARKERS: [&str; 4] = ["Adres", "Konu", "Açıklama", "Talep"];
const CURRENCY_MARKERS: [&str; 3] = ["Tutar", "Miktar", "Bedel"];

/// Field kind implied by a key. Markers are matched case-sensitively, so a
/// bare `tarih` or `adres` stays plain text.
pub fn infer_kind(key: &str) -> FieldKind {
    if TEXT_AREA_MARKERS.iter().any(|marker| key.contains(marker)) {
        FieldKind::TextArea
    } else if key.contains("Tarih") {
        FieldKind::Date
    } else if CURRENCY_MARKERS.iter().any(|marker| key.contains(marker)) {
        FieldKind::Currency
    } else {
        FieldKind::Text
    }
}

/// Human label for a camelCase key: `kiracıAd` → `Kiracı Ad`.
///
/// Runs of capitals stay together, so `ogrenciTC` reads `Ogrenci TC`.
pub fn derive_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    let mut previous_upper = false;
    for (index, ch) in key.chars().enumerate() {
        let upper = ch.is_ascii_uppercase();
        if index == 0 {
            label.extend(ch.to_uppercase());
        } else {
            if upper && !previous_upper {
                label.push(' ');
            }
            label.push(ch);
        }
        previous_upper = upper;
    }
    label
}

fn field_for(key: &'static str) -> FieldSpec {
    let label = derive_label(key);
    let field = match infer_kind(key) {
        FieldKind::TextArea => FieldSpec::text_area(key, label),
        FieldKind::Date => FieldSpec::date(key, label),
        FieldKind::Currency => FieldSpec::currency(key, label),
        _ => FieldSpec::text(key, label),
    };
    field.required()
}

/// Key whose value signs the document: the first person-name key.
fn signer_key(keys: &[&'static str]) -> Option<&'static str> {
    keys.iter()
        .copied()
        .find(|key| *key == "adSoyad" || key.ends_with("Ad"))
}

pub struct SimpleTemplate {
    spec: &'static SimpleSpec,
    fields: Vec<FieldSpec>,
}

impl SimpleTemplate {
    pub fn new(spec: &'static SimpleSpec) -> Self {
        let fields = spec.keys.iter().copied().map(field_for).collect();
        Self { spec, fields }
    }
}

impl ContractTemplate for SimpleTemplate {
    fn id(&self) -> &'static str {
        self.spec.id
    }

    fn title(&self) -> &'static str {
        self.spec.title
    }

    fn category(&self) -> TemplateCategory {
        self.spec.category
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let values = self.fields.iter().fold(Section::untitled(), |section, field| {
            let value = match field.kind {
                FieldKind::Date => slots.date(field.key),
                FieldKind::Currency => slots.money(field.key),
                _ => slots.text(field.key),
            };
            section.labeled(field.label.as_ref(), value)
        });
        let signer = signer_key(self.spec.keys)
            .map(|key| slots.text(key))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        Document::builder()
            .section(Section::titled(to_upper_tr(self.spec.title)))
            .section(values)
            .section(Section::untitled().signature("İmza", signer))
            .build()
    }
}

pub static SIMPLE_CATALOG: &[SimpleSpec] = &[
    SimpleSpec::new(
        "student-permission",
        "Öğrenci İzin Dilekçesi",
        TemplateCategory::Petition,
        &["ogrenciAd", "ogrenciTC", "okulAdi", "sinif", "izinKonusu", "izinTarihi"],
    ),
    SimpleSpec::new(
        "criminal-record-statement",
        "Sabıka Kaydı Beyanı",
        TemplateCategory::Petition,
        &["adSoyad", "tcKimlikNo", "adres", "beyanTarihi"],
    ),
    SimpleSpec::new(
        "movable-property-loan",
        "Taşınır Eşya Ödüncü Sözleşmesi",
        TemplateCategory::Commercial,
        &[
            "oduncVerenAd",
            "oduncVerenTC",
            "oduncAlanAd",
            "oduncAlanTC",
            "esyaAciklama",
            "teslimTarihi",
            "iadeTarihi",
        ],
    ),
    SimpleSpec::new(
        "movable-rental",
        "Taşınır Kiralama Sözleşmesi",
        TemplateCategory::Commercial,
        &[
            "kirayaVerenAd",
            "kirayaVerenTC",
            "kiracıAd",
            "kiracıTC",
            "esyaAciklama",
            "aylikKira",
            "sozlesmeTarihi",
        ],
    ),
    SimpleSpec::new(
        "neighbor-complaint-letter",
        "Rahatsızlıkla İlgili Komşuya Mektup",
        TemplateCategory::Housing,
        &["gonderenAd", "gonderenAdres", "aliciAd", "rahatsizlikKonusu", "tarih"],
    ),
    SimpleSpec::new(
        "security-deposit-refund",
        "Güvence Bedeli İade Talebi",
        TemplateCategory::Housing,
        &["talepEdenAd", "talepEdenTC", "güvenceBedeli", "talepTarihi", "aciklama"],
    ),
    SimpleSpec::new(
        "visa-invitation-letter",
        "Vize Başvurusu Davet Mektubu",
        TemplateCategory::Petition,
        &[
            "davetEdenAd",
            "davetEdenTC",
            "davetEdenAdres",
            "davetEdilenAd",
            "davetEdilenUlke",
            "ziyaretAmaci",
            "ziyaretTarihi",
        ],
    ),
    SimpleSpec::new(
        "address-change-notification",
        "Adres Değişikliği Bildirimi",
        TemplateCategory::Housing,
        &["adSoyad", "tcKimlikNo", "eskiAdres", "yeniAdres", "degisiklikTarihi"],
    ),
    SimpleSpec::new(
        "long-term-vehicle-rental",
        "Uzun Dönem Araç Kiralama Sözleşmesi",
        TemplateCategory::Commercial,
        &[
            "kirayaVerenAd",
            "kirayaVerenTC",
            "kiracıAd",
            "kiracıTC",
            "aracMarka",
            "aracModel",
            "plaka",
            "aylikKira",
            "sozlesmeSuresi",
            "baslangicTarihi",
        ],
    ),
    SimpleSpec::new(
        "storage-agreement",
        "Saklama Sözleşmesi",
        TemplateCategory::Commercial,
        &[
            "saklayanAd",
            "saklayanTC",
            "saklananAd",
            "saklananTC",
            "esyaAciklama",
            "saklamaYeri",
            "baslangicTarihi",
            "bitisTarihi",
            "ucret",
        ],
    ),
    SimpleSpec::new(
        "household-service-agreement",
        "Ev İşleri İçin Hizmet Sözleşmesi",
        TemplateCategory::Employment,
        &[
            "isVerenAd",
            "isVerenTC",
            "isVerenAdres",
            "calisanAd",
            "calisanTC",
            "hizmetTuru",
            "aylikUcret",
            "calismaGunleri",
            "baslangicTarihi",
        ],
    ),
    SimpleSpec::new(
        "bank-account-closure",
        "Banka Hesabını Kapatma Dilekçesi",
        TemplateCategory::Commercial,
        &["hesapSahibiAd", "hesapSahibiTC", "bankaAdi", "hesapNo", "kapatmaNedeni", "tarih"],
    ),
    SimpleSpec::new(
        "pool-maintenance-agreement",
        "Havuz Bakımına İlişkin Sözleşme",
        TemplateCategory::Commercial,
        &[
            "havuzSahibiAd",
            "havuzSahibiTC",
            "havuzSahibiAdres",
            "bakimFirmasiAd",
            "bakimFirmasiAdres",
            "aylikUcret",
            "bakimPeriyodu",
            "baslangicTarihi",
        ],
    ),
    SimpleSpec::new(
        "vehicle-sale-promise",
        "Araç Satış Vaadi Sözleşmesi",
        TemplateCategory::Commercial,
        &[
            "saticiAd",
            "saticiTC",
            "alicıAd",
            "alicıTC",
            "aracMarka",
            "aracModel",
            "plaka",
            "satisFiyati",
            "peşinat",
            "kalanTutar",
            "odemePlani",
            "sozlesmeTarihi",
        ],
    ),
    SimpleSpec::new(
        "diploma-request",
        "Diploma Talebi Dilekçesi",
        TemplateCategory::Petition,
        &[
            "ogrenciAd",
            "ogrenciTC",
            "okulAdi",
            "bolum",
            "mezuniyetYili",
            "diplomaNo",
            "talepTarihi",
        ],
    ),
    SimpleSpec::new(
        "grade-objection-primary-secondary",
        "İlköğretim ve Ortaöğretim Not İtiraz Dilekçesi",
        TemplateCategory::Petition,
        &[
            "ogrenciAd",
            "ogrenciTC",
            "okulAdi",
            "sinif",
            "dersAdi",
            "itirazEdilenNot",
            "itirazNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "credit-card-closure",
        "Kredi Kartı Kapatma Dilekçesi",
        TemplateCategory::Commercial,
        &["kartSahibiAd", "kartSahibiTC", "bankaAdi", "kartNo", "kapatmaNedeni", "tarih"],
    ),
    SimpleSpec::new(
        "name-change-request",
        "İsim Değişikliği Talep Dilekçesi",
        TemplateCategory::Family,
        &["adSoyad", "tcKimlikNo", "eskiIsim", "yeniIsim", "degisiklikNedeni", "tarih"],
    ),
    SimpleSpec::new(
        "university-grade-objection",
        "Üniversite Not İtiraz Dilekçesi",
        TemplateCategory::Petition,
        &[
            "ogrenciAd",
            "ogrenciTC",
            "ogrenciNo",
            "universiteAdi",
            "fakulte",
            "bolum",
            "dersAdi",
            "itirazEdilenNot",
            "itirazNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "green-passport-cadre-request",
        "Yeşil Pasaport İçin Kadro Derecesi Gösterir Belge Talebi",
        TemplateCategory::Petition,
        &[
            "adSoyad",
            "tcKimlikNo",
            "kurumAdi",
            "gorevUnvani",
            "kadroDerecesi",
            "baslangicTarihi",
            "talepTarihi",
        ],
    ),
    SimpleSpec::new(
        "surname-change-notification",
        "Soyadı Değişikliği Bildirimi",
        TemplateCategory::Family,
        &["adSoyad", "tcKimlikNo", "eskiSoyad", "yeniSoyad", "degisiklikNedeni", "tarih"],
    ),
    SimpleSpec::new(
        "high-school-grade-objection",
        "Lise Not İtiraz Dilekçesi",
        TemplateCategory::Petition,
        &[
            "ogrenciAd",
            "ogrenciTC",
            "okulAdi",
            "sinif",
            "dersAdi",
            "itirazEdilenNot",
            "itirazNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "guardianship-appointment",
        "Vasi Atanması Dilekçesi",
        TemplateCategory::Family,
        &[
            "dilekceSahibiAd",
            "dilekceSahibiTC",
            "vasisiOlunacakKisiAd",
            "vasisiOlunacakKisiTC",
            "vasisiOlunacakKisiYas",
            "vasiAtamaNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "excuse-exam-petition",
        "Mazeret Sınav Dilekçesi",
        TemplateCategory::Petition,
        &[
            "ogrenciAd",
            "ogrenciTC",
            "ogrenciNo",
            "okulAdi",
            "sinif",
            "mazeretNedeni",
            "mazeretTarihi",
            "sinavTarihi",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "widow-orphan-pension-request",
        "Dul/Yetim Aylığı Bağlanması İçin Talep Dilekçesi",
        TemplateCategory::Family,
        &[
            "talepEdenAd",
            "talepEdenTC",
            "talepEdenAdres",
            "vefatEdenAd",
            "vefatEdenTC",
            "vefatTarihi",
            "iliskisi",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "judicial-control-objection",
        "Adli Kontrol Kararına İtiraz Dilekçesi",
        TemplateCategory::Petition,
        &[
            "itirazEdenAd",
            "itirazEdenTC",
            "itirazEdenAdres",
            "davaNo",
            "kararTarihi",
            "itirazNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "detention-objection",
        "Tutukluluğa İtiraz Dilekçesi",
        TemplateCategory::Petition,
        &[
            "itirazEdenAd",
            "itirazEdenTC",
            "itirazEdenAdres",
            "davaNo",
            "tutuklamaTarihi",
            "itirazNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "foreclosure-objection",
        "Haciz Takibine İtiraz Dilekçesi",
        TemplateCategory::Petition,
        &[
            "itirazEdenAd",
            "itirazEdenTC",
            "itirazEdenAdres",
            "takipNo",
            "hacizTarihi",
            "itirazNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "enforcement-objection",
        "İlamlı İcra Takibine İtiraz Dilekçesi",
        TemplateCategory::Petition,
        &[
            "itirazEdenAd",
            "itirazEdenTC",
            "itirazEdenAdres",
            "takipNo",
            "icraTarihi",
            "itirazNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "alimony-reduction-lawsuit",
        "Nafakanın Azaltılması veya Kaldırılması İçin Dava Dilekçesi",
        TemplateCategory::Family,
        &[
            "davaciAd",
            "davaciTC",
            "davaciAdres",
            "davalıAd",
            "davalıTC",
            "mevcutNafaka",
            "talepEdilenNafaka",
            "azaltmaNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "alimony-increase-lawsuit",
        "Nafakanın Artırılması Dava Dilekçesi",
        TemplateCategory::Family,
        &[
            "davaciAd",
            "davaciTC",
            "davaciAdres",
            "davalıAd",
            "davalıTC",
            "mevcutNafaka",
            "talepEdilenNafaka",
            "artirmaNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "alimony-nonpayment-complaint",
        "Boşanma Sonrasında Nafakanın Ödenmemesine İlişkin Şikayet Dilekçesi",
        TemplateCategory::Family,
        &[
            "sikayetEdenAd",
            "sikayetEdenTC",
            "sikayetEdenAdres",
            "sikayetEdilenAd",
            "sikayetEdilenTC",
            "nafakaMiktari",
            "odemeDurumu",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "insolvency-certificate-request",
        "Aciz Belgesi Verilmesi Talebi",
        TemplateCategory::Petition,
        &["talepEdenAd", "talepEdenTC", "talepEdenAdres", "talepNedeni", "tarih"],
    ),
    SimpleSpec::new(
        "disable-auto-billing",
        "Otomatik Faturalandırmayı Devre Dışı Bırakma Mektubu",
        TemplateCategory::Commercial,
        &["gonderenAd", "gonderenTC", "gonderenAdres", "firmaAdi", "abonelikNo", "talepTarihi"],
    ),
    SimpleSpec::new(
        "line-cancellation",
        "Hat İptal Dilekçesi",
        TemplateCategory::Commercial,
        &["aboneAd", "aboneTC", "aboneAdres", "firmaAdi", "hatNo", "iptalNedeni", "tarih"],
    ),
    SimpleSpec::new(
        "invoice-objection",
        "Fatura İtiraz Dilekçesi",
        TemplateCategory::Commercial,
        &[
            "itirazEdenAd",
            "itirazEdenTC",
            "itirazEdenAdres",
            "firmaAdi",
            "faturaNo",
            "faturaTarihi",
            "itirazNedeni",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "subscription-cancellation",
        "Abonelik İptal Dilekçesi",
        TemplateCategory::Commercial,
        &["aboneAd", "aboneTC", "aboneAdres", "firmaAdi", "abonelikNo", "iptalNedeni", "tarih"],
    ),
    SimpleSpec::new(
        "monthly-goods-notice",
        "Aylık Malın Değişimi/Onarımı/İadesi İçin İhtarname",
        TemplateCategory::Commercial,
        &[
            "gonderenAd",
            "gonderenTC",
            "gonderenAdres",
            "aliciAd",
            "aliciAdres",
            "malAciklama",
            "talepTuru",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "association-organ-change",
        "Dernek Organlarındaki Değişiklik Bildirimi",
        TemplateCategory::Petition,
        &["dernekAdi", "dernekAdres", "eskiOrganlar", "yeniOrganlar", "degisiklikTarihi", "tarih"],
    ),
    SimpleSpec::new(
        "association-address-change",
        "Dernek Yerleşim Yeri Değişikliği Bildirimi",
        TemplateCategory::Petition,
        &["dernekAdi", "eskiAdres", "yeniAdres", "degisiklikTarihi", "tarih"],
    ),
    SimpleSpec::new(
        "association-general-assembly-call",
        "Dernek Genel Kurulunu Toplantıya Çağrı",
        TemplateCategory::Petition,
        &[
            "dernekAdi",
            "dernekAdres",
            "toplantiTarihi",
            "toplantiSaati",
            "toplantiYeri",
            "gundem",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "association-bylaws",
        "Dernek Tüzüğü",
        TemplateCategory::Petition,
        &["dernekAdi", "dernekAdres", "amac", "calismaKonulari", "organlar", "tarih"],
    ),
    SimpleSpec::new(
        "defense-letter",
        "Savunma Yazısı",
        TemplateCategory::Employment,
        &[
            "calisanAd",
            "calisanTC",
            "calisanAdres",
            "isverenAd",
            "isverenAdres",
            "savunmaKonusu",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "flexible-work-request",
        "İşçinin Esnek Çalışma Talebi Dilekçesi",
        TemplateCategory::Employment,
        &[
            "calisanAd",
            "calisanTC",
            "calisanAdres",
            "isverenAd",
            "isverenAdres",
            "esnekCalismaTuru",
            "talepNedeni",
            "baslangicTarihi",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "caregiver-service-contract",
        "Bakıcı ve Yardımcı Hizmetli İş Sözleşmesi",
        TemplateCategory::Employment,
        &[
            "isverenAd",
            "isverenTC",
            "isverenAdres",
            "calisanAd",
            "calisanTC",
            "calisanAdres",
            "hizmetTuru",
            "aylikUcret",
            "calismaGunleri",
            "baslangicTarihi",
            "bitisTarihi",
        ],
    ),
    SimpleSpec::new(
        "retirement-request",
        "Emeklilik Talebi Dilekçesi",
        TemplateCategory::Employment,
        &[
            "calisanAd",
            "calisanTC",
            "calisanAdres",
            "isverenAd",
            "isverenAdres",
            "emeklilikTarihi",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "dismissal-reason-request",
        "İşten Çıkarılma Nedenini Öğrenme Talebi Mektubu",
        TemplateCategory::Employment,
        &[
            "calisanAd",
            "calisanTC",
            "calisanAdres",
            "isverenAd",
            "isverenAdres",
            "cikarilmaTarihi",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "job-offer-response",
        "İş Teklifi Kabul veya Ret Mektubu",
        TemplateCategory::Employment,
        &[
            "adSoyad",
            "tcKimlikNo",
            "adres",
            "firmaAdi",
            "firmaAdres",
            "teklifTarihi",
            "karar",
            "baslangicTarihi",
            "tarih",
        ],
    ),
    SimpleSpec::new(
        "salary-increase-request",
        "Maaş Artırımı Talebi",
        TemplateCategory::Employment,
        &[
            "calisanAd",
            "calisanTC",
            "calisanAdres",
            "isverenAd",
            "isverenAdres",
            "mevcutMaas",
            "talepEdilenMaas",
            "artirmaNedeni",
            "tarih",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::document::Block;
    use std::collections::HashSet;

    fn spec(id: &str) -> &'static SimpleSpec {
        SIMPLE_CATALOG
            .iter()
            .find(|spec| spec.id == id)
            .expect("spec is in the catalog")
    }

    #[test]
    fn labels_split_camel_case() {
        assert_eq!(derive_label("kiracıAd"), "Kiracı Ad");
        assert_eq!(derive_label("tcKimlikNo"), "Tc Kimlik No");
        assert_eq!(derive_label("ogrenciTC"), "Ogrenci TC");
        assert_eq!(derive_label("güvenceBedeli"), "Güvence Bedeli");
        assert_eq!(derive_label("adres"), "Adres");
    }

    #[test]
    fn kinds_follow_key_markers() {
        assert_eq!(infer_kind("davetEdenAdres"), FieldKind::TextArea);
        assert_eq!(infer_kind("izinKonusu"), FieldKind::TextArea);
        assert_eq!(infer_kind("talepTarihi"), FieldKind::Date);
        assert_eq!(infer_kind("kalanTutar"), FieldKind::Currency);
        assert_eq!(infer_kind("güvenceBedeli"), FieldKind::Currency);
        assert_eq!(infer_kind("tarih"), FieldKind::Text);
        assert_eq!(infer_kind("adres"), FieldKind::Text);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<&str> = SIMPLE_CATALOG.iter().map(|spec| spec.id).collect();
        assert_eq!(ids.len(), SIMPLE_CATALOG.len());
    }

    #[test]
    fn every_field_is_required() {
        let template = SimpleTemplate::new(spec("bank-account-closure"));
        assert!(template.fields().iter().all(|field| field.required));
        assert_eq!(template.validate(&FormData::new()).len(), spec("bank-account-closure").keys.len());
    }

    #[test]
    fn renders_labelled_values_and_signature() {
        let template = SimpleTemplate::new(spec("address-change-notification"));
        let data = FormData::new()
            .with("adSoyad", "Elif Şahin")
            .with("degisiklikTarihi", "2026-03-01");
        let document = template.render(&data);

        assert_eq!(document.headings(), vec!["ADRES DEĞİŞİKLİĞİ BİLDİRİMİ"]);
        let values = &document.sections[1].blocks;
        assert_eq!(values[0], Block::labeled("Ad Soyad", "Elif Şahin"));
        assert!(values.contains(&Block::labeled("Degisiklik Tarihi", "1 Mart 2026")));
        assert!(values.contains(&Block::labeled("Eski Adres", PLACEHOLDER)));
        assert_eq!(
            document.sections[2].blocks,
            vec![Block::signature("İmza", "Elif Şahin")]
        );
    }
}
