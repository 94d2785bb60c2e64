//! Leave requests addressed to the employer's authorised person.
//!
//! Every letter in the family shares the salutation, the closing and the
//! applicant block; only the request paragraphs and the extra dates differ.

use crate::templates::document::{Block, Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

type Body = fn(&Slots<'_>) -> Vec<String>;

pub struct LeaveLetter {
    id: &'static str,
    title: &'static str,
    fields: Vec<FieldSpec>,
    body: Body,
    enclosure: Option<&'static str>,
}

impl LeaveLetter {
    fn new(
        id: &'static str,
        title: &'static str,
        identity: bool,
        extra: Vec<FieldSpec>,
        body: Body,
    ) -> Self {
        let mut fields = vec![
            FieldSpec::text("yetkiliAd", "Yetkili Adı / İnsan Kaynakları Birimi").required(),
            FieldSpec::text("calisanAd", "Ad Soyad").required(),
        ];
        if identity {
            fields.push(FieldSpec::text("calisanTC", "T.C. Kimlik No").max_length(11));
        }
        fields.extend([
            FieldSpec::text("gorev", "Göreviniz"),
            FieldSpec::text("departman", "Departmanınız"),
        ]);
        fields.extend(extra);
        fields.push(FieldSpec::date("tarih", "Tarih").required());
        Self {
            id,
            title,
            fields,
            body,
            enclosure: None,
        }
    }

    fn with_enclosure(mut self, enclosure: &'static str) -> Self {
        self.enclosure = Some(enclosure);
        self
    }

    pub fn annual_paid() -> Self {
        Self::new(
            "annual-paid-leave-request",
            "Senelik Ücretli İzin Dilekçesi",
            false,
            vec![
                FieldSpec::date("izinBaslangic", "İzin Başlangıç Tarihi").required(),
                FieldSpec::date("izinBitis", "İzin Bitiş Tarihi").required(),
                FieldSpec::number("toplamGun", "Toplam Gün Sayısı").required(),
            ],
            |slots| {
                vec![
                    format!(
                        "4857 sayılı İş Kanunu'nun 53. maddesi uyarınca hak etmiş olduğum yıllık ücretli iznimi, {} – {} tarihleri arasında ({} gün) kullanmak istiyorum.",
                        slots.date("izinBaslangic"),
                        slots.date("izinBitis"),
                        slots.text("toplamGun"),
                    ),
                    "İzin sürem boyunca işlerimin devri tarafımdan yapılacaktır.".to_string(),
                    "Gereğini bilgilerinize arz ederim.".to_string(),
                ]
            },
        )
    }

    pub fn employee_unpaid() -> Self {
        Self::new(
            "employee-unpaid-leave-request",
            "Çalışanın İşverenden Ücretsiz İzin Talebi Dilekçesi",
            true,
            vec![
                FieldSpec::date("izinBaslangic", "İzin Başlangıç Tarihi").required(),
                FieldSpec::date("izinBitis", "İzin Bitiş Tarihi").required(),
                FieldSpec::text("toplamGunAy", "Toplam Gün / Ay").required(),
            ],
            |slots| {
                vec![
                    format!(
                        "Özel nedenlerim nedeniyle, {} – {} tarihleri arasında ({}) ücretsiz izin kullanmak istiyorum.",
                        slots.date("izinBaslangic"),
                        slots.date("izinBitis"),
                        slots.text("toplamGunAy"),
                    ),
                    "İzin sürem boyunca işlerimin devri tarafımdan yapılacaktır.".to_string(),
                    "Gereğini bilgilerinize arz ederim.".to_string(),
                ]
            },
        )
    }

    pub fn paternity() -> Self {
        Self::new(
            "paternity-leave-request",
            "Babalık İzni Dilekçesi",
            true,
            vec![
                FieldSpec::date("dogumTarihi", "Doğum Tarihi").required(),
                FieldSpec::date("izinBaslangic", "İzin Başlangıç Tarihi").required(),
                FieldSpec::date("izinBitis", "İzin Bitiş Tarihi").required(),
                FieldSpec::number("toplamGun", "Toplam Gün Sayısı").required(),
            ],
            |slots| {
                vec![
                    format!(
                        "Eşimin {} tarihinde doğum yapmış olması nedeniyle, 4857 sayılı İş Kanunu ve ilgili mevzuat uyarınca tarafıma tanınan babalık izni hakkımı kullanmak istiyorum.",
                        slots.date("dogumTarihi"),
                    ),
                    format!(
                        "Bu kapsamda, {} – {} tarihleri arasında ({} gün) babalık izni kullanmam hususunda gereğini arz ederim.",
                        slots.date("izinBaslangic"),
                        slots.date("izinBitis"),
                        slots.text("toplamGun"),
                    ),
                    "Bilgilerinize sunar, gereğini rica ederim.".to_string(),
                ]
            },
        )
    }

    pub fn maternity() -> Self {
        Self::new(
            "maternity-leave-request",
            "Analık (Doğum) İzni Dilekçesi",
            true,
            vec![
                FieldSpec::date("tahminiDogumTarihi", "Tahmini Doğum Tarihi").required(),
                FieldSpec::date("izinBaslangic", "İzin Başlangıç Tarihi").required(),
            ],
            |slots| {
                vec![
                    format!(
                        "4857 sayılı İş Kanunu'nun 74. maddesi uyarınca, beklenen doğum tarihim {} olup, doğumdan önceki 8 (sekiz) haftalık analık iznimin {} itibarıyla başlatılmasını arz ederim.",
                        slots.date("tahminiDogumTarihi"),
                        slots.date("izinBaslangic"),
                    ),
                    "Doğumun gerçekleşmesi halinde, doğum sonrası 8 (sekiz) haftalık analık iznimin de yasal süreler çerçevesinde kullandırılmasını talep ederim.".to_string(),
                    "Gereğini bilgilerinize arz ederim.".to_string(),
                ]
            },
        )
    }

    pub fn post_birth_half_day() -> Self {
        Self::new(
            "post-birth-half-day-unpaid-leave",
            "Doğum Sonrası Yarım Gün Ücretsiz İzin Talebi Mektubu",
            false,
            vec![FieldSpec::date("yarimGunBaslangic", "Yarım Gün İzin Başlangıç Tarihi").required()],
            |slots| {
                vec![
                    "4857 sayılı İş Kanunu'nun 74. maddesi uyarınca, doğum sonrası analık iznimin bitimini takiben, çocuğumun bakımı ve sağlıklı gelişimi amacıyla tarafıma tanınan yarım gün ücretsiz izin hakkımı kullanmak istiyorum.".to_string(),
                    format!(
                        "Bu kapsamda, {} tarihinden itibaren yasal süre boyunca yarım gün ücretsiz izinli sayılmam hususunda gereğini arz ederim.",
                        slots.date("yarimGunBaslangic"),
                    ),
                    "Bilgilerinize sunar, gereğini rica ederim.".to_string(),
                ]
            },
        )
    }

    pub fn post_birth_six_month() -> Self {
        Self::new(
            "post-birth-six-month-unpaid-leave",
            "Doğum Sonrası Altı Aylık Ücretsiz İzin Talebi Dilekçesi",
            true,
            vec![FieldSpec::date("analikIzninBitisTarihi", "Analık İzninin Bitiş Tarihi").required()],
            |slots| {
                vec![
                    "4857 sayılı İş Kanunu'nun 74. maddesi kapsamında, doğum sonrası kullanmış olduğum analık iznimin bitimini takiben, çocuğumun bakımı ve gelişimi amacıyla tarafıma tanınan altı aylık ücretsiz izin hakkımı kullanmak istiyorum.".to_string(),
                    format!(
                        "Bu doğrultuda, {} tarihinden itibaren 6 (altı) ay süreyle ücretsiz izinli sayılmam hususunda gereğini arz ederim.",
                        slots.date("analikIzninBitisTarihi"),
                    ),
                    "Bilgilerinize sunar, gereğini rica ederim.".to_string(),
                ]
            },
        )
    }

    pub fn post_birth_partial_work() -> Self {
        Self::new(
            "post-birth-partial-work-request",
            "Doğum Sonrası Kısmi Çalışma Talebi Mektubu",
            true,
            vec![
                FieldSpec::date("baslangicTarihi", "Kısmi Çalışma Başlangıç Tarihi").required(),
                FieldSpec::text("haftalikCalismaSuresi", "Haftalık Çalışma Süresi").required(),
            ],
            |slots| {
                vec![
                    "4857 sayılı İş Kanunu'nun 13 ve 74. maddeleri uyarınca, doğum sonrası analık iznimin / ücretsiz izin süremin bitimini takiben, çocuğumun bakımı ve sağlıklı gelişimi amacıyla kısmi süreli (yarım zamanlı) çalışma hakkımı kullanmak istiyorum.".to_string(),
                    format!(
                        "Bu kapsamda, {} tarihinden itibaren, haftalık çalışma sürem {} olacak şekilde kısmi süreli çalışmaya geçmem hususunda gereğini arz ederim.",
                        slots.date("baslangicTarihi"),
                        slots.text("haftalikCalismaSuresi"),
                    ),
                    "Bilgilerinize sunar, gereğini rica ederim.".to_string(),
                ]
            },
        )
    }

    pub fn adoption_unpaid() -> Self {
        Self::new(
            "adoption-unpaid-leave-request",
            "Evlat Edinme Sonrası Ücretsiz İzin Talebi Dilekçesi",
            true,
            vec![
                FieldSpec::date("evlatEdinmeTarihi", "Evlat Edinme Tarihi").required(),
                FieldSpec::date("izinBaslangic", "İzin Başlangıç Tarihi").required(),
                FieldSpec::text("talepEdilenSure", "Talep Edilen Süre").required(),
            ],
            |slots| {
                vec![
                    format!(
                        "4857 sayılı İş Kanunu'nun 74. maddesi uyarınca, {} tarihinde evlat edinmiş olduğum çocuğumun bakımı ve uyum süreci amacıyla tarafıma tanınan ücretsiz izin hakkımı kullanmak istiyorum.",
                        slots.date("evlatEdinmeTarihi"),
                    ),
                    format!(
                        "Bu kapsamda, {} tarihinden itibaren {} süreyle ücretsiz izinli sayılmam hususunda gereğini arz ederim.",
                        slots.date("izinBaslangic"),
                        slots.text("talepEdilenSure"),
                    ),
                    "Bilgilerinize sunar, gereğini rica ederim.".to_string(),
                ]
            },
        )
        .with_enclosure("Ek: Evlat Edinme Belgesi / e-Devlet Çıktısı")
    }

    /// Every leave letter in the shipped catalog.
    pub fn family() -> Vec<Self> {
        vec![
            Self::annual_paid(),
            Self::employee_unpaid(),
            Self::paternity(),
            Self::maternity(),
            Self::post_birth_half_day(),
            Self::post_birth_six_month(),
            Self::post_birth_partial_work(),
            Self::adoption_unpaid(),
        ]
    }
}

impl ContractTemplate for LeaveLetter {
    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Employment
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let body = Section::untitled()
            .paragraph(format!("Sayın {},", slots.text("yetkiliAd")))
            .blocks((self.body)(&slots).into_iter().map(Block::paragraph))
            .paragraph("Saygılarımla,");

        let mut applicant = Section::untitled().paragraph(slots.text("calisanAd"));
        if let Some(identity) = slots.optional("calisanTC") {
            applicant = applicant.paragraph(format!("T.C. Kimlik No: {identity}"));
        }
        for detail in [slots.optional("gorev"), slots.optional("departman")].into_iter().flatten() {
            applicant = applicant.paragraph(detail);
        }
        let applicant = applicant
            .labeled("Tarih", slots.date("tarih"))
            .signature("İmza", slots.text("calisanAd"));

        let mut document = Document::builder()
            .section(Section::titled(self.title))
            .section(body)
            .section(applicant);
        if let Some(enclosure) = self.enclosure {
            document = document.section(Section::untitled().paragraph(enclosure));
        }
        document.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::schema::validate;
    use crate::templates::slots::PLACEHOLDER;

    #[test]
    fn substitutes_leave_period() {
        let data = FormData::new()
            .with("izinBaslangic", "2026-07-01")
            .with("izinBitis", "2026-07-14")
            .with("toplamGun", "14");
        let document = LeaveLetter::annual_paid().render(&data);
        assert!(document.mentions("1 Temmuz 2026 – 14 Temmuz 2026 tarihleri arasında (14 gün)"));
    }

    #[test]
    fn role_and_department_are_optional() {
        let template = LeaveLetter::annual_paid();
        let bare = template.render(&FormData::new());
        assert!(bare.mentions(&format!("Sayın {PLACEHOLDER},")));
        let applicant = bare.sections.last().expect("applicant section");
        assert_eq!(applicant.blocks.len(), 3);

        let data = FormData::new().with("gorev", "Muhasebe Uzmanı");
        let filled = template.render(&data);
        assert!(filled.mentions("Muhasebe Uzmanı"));
    }

    #[test]
    fn identity_number_is_printed_when_given() {
        let template = LeaveLetter::maternity();
        assert!(!template.render(&FormData::new()).mentions("T.C. Kimlik No"));

        let data = FormData::new()
            .with("calisanTC", "12345678901")
            .with("tahminiDogumTarihi", "2026-09-20")
            .with("izinBaslangic", "2026-07-26");
        let document = template.render(&data);
        assert!(document.mentions("T.C. Kimlik No: 12345678901"));
        assert!(document.mentions("beklenen doğum tarihim 20 Eylül 2026 olup"));
        assert!(document.mentions("26 Temmuz 2026 itibarıyla"));
    }

    #[test]
    fn half_day_letter_has_no_identity_field() {
        let template = LeaveLetter::post_birth_half_day();
        assert!(template.fields().iter().all(|field| field.key != "calisanTC"));

        let data = FormData::new().with("yarimGunBaslangic", "2026-03-02");
        assert!(template
            .render(&data)
            .mentions("2 Mart 2026 tarihinden itibaren yasal süre boyunca"));
    }

    #[test]
    fn adoption_letter_lists_its_enclosure_last() {
        let document = LeaveLetter::adoption_unpaid().render(&FormData::new());
        let last = document.sections.last().expect("enclosure section");
        assert!(last.mentions("Evlat Edinme Belgesi"));
        assert!(!LeaveLetter::paternity()
            .render(&FormData::new())
            .mentions("Evlat Edinme Belgesi"));
    }

    #[test]
    fn request_dates_are_required_but_the_role_is_not() {
        let template = LeaveLetter::paternity();
        let diagnostics = validate(template.fields(), &FormData::new());
        let keys: Vec<&str> = diagnostics.iter().map(|diagnostic| diagnostic.key()).collect();
        for key in ["yetkiliAd", "calisanAd", "dogumTarihi", "izinBaslangic", "izinBitis", "toplamGun", "tarih"] {
            assert!(keys.contains(&key), "{key} not reported");
        }
        assert!(!keys.contains(&"gorev"));
        assert!(!keys.contains(&"calisanTC"));
    }

    #[test]
    fn family_ids_are_distinct() {
        let mut ids: Vec<&str> = LeaveLetter::family().iter().map(|letter| letter.id()).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }
}
