use super::labor::{
    court_heading, defendant_section, plaintiff_fields, plaintiff_section, sgk_fields, sgk_section,
    witness_field, witness_section,
};
use super::closing;
use crate::templates::clause::{select, select_bullets, Bullet, Clause};
use crate::templates::condition::Condition;
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::{Slots, PLACEHOLDER};

/// Dava konusu: each damages category is claimed independently.
static DAMAGES: &[Bullet] = &[
    Bullet::on_flag("kidemTazminati", "Kıdem tazminatı"),
    Bullet::on_flag("ihbarTazminati", "İhbar tazminatı"),
    Bullet::on_flag("odenmeyenUcretAlacaklari", "Ödenmeyen ücret alacakları"),
];

static DISMISSAL_MANNER: &[Bullet] = &[
    Bullet::on_flag("yaziliBildirimYapilmadan", "Yazılı bildirim yapılmadan"),
    Bullet::on_flag("gecerliSebepGosterilmeden", "Geçerli bir sebep gösterilmeden"),
    Bullet::on_flag("savunmasiAlinmadan", "Savunması alınmadan"),
];

static ENTITLEMENTS: &[Clause<Section>] = &[
    Clause::new("kidem", Condition::flag("kidemTazminati"), severance),
    Clause::new("ihbar", Condition::flag("ihbarTazminati"), notice_pay),
    Clause::new("ucret", Condition::flag("odenmeyenUcretAlacaklari"), unpaid_wages),
];

static REQUESTS: &[Bullet] = &[
    Bullet::always(
        "tespit",
        "İş sözleşmesinin işveren tarafından haksız şekilde feshedildiğinin tespitine,",
    ),
    Bullet::on_flag("kidemTazminati", "Davacının kıdem tazminatının,"),
    Bullet::on_flag("ihbarTazminati", "İhbar tazminatının,"),
    Bullet::on_flag("odenmeyenUcretAlacaklari", "Ödenmeyen ücret alacaklarının,"),
    Bullet::always("faiz", "Tüm alacakların fesih tarihinden itibaren yasal faiziyle,"),
    Bullet::always(
        "giderler",
        "Yargılama giderleri ve vekâlet ücretinin davalıya yükletilmesine",
    ),
];

const LEGAL_GROUNDS: [&str; 5] = [
    "4857 sayılı İş Kanunu",
    "6098 sayılı Türk Borçlar Kanunu",
    "7036 sayılı İş Mahkemeleri Kanunu",
    "6100 sayılı HMK",
    "Yargıtay içtihatları ve ilgili mevzuat",
];

const EVIDENCE: [&str; 9] = [
    "İş sözleşmesi",
    "SGK hizmet dökümü",
    "Ücret bordroları",
    "Banka kayıtları",
    "WhatsApp / e-posta yazışmaları",
    "Tanık beyanları",
    "Arabuluculuk son tutanağı",
    "Bilirkişi incelemesi",
    "Her türlü yasal delil",
];

const REASON_FLAWS: [&str; 3] = [
    "Gerçeği yansıtmamaktadır",
    "Somut delile dayanmamaktadır",
    "İş Kanunu'na aykırıdır",
];

fn severance(data: &FormData) -> Section {
    let slots = Slots::new(data);
    Section::titled("KIDEM TAZMİNATI").paragraph(format!(
        "Davacı, {} yıl {} ay çalışmış olup, haklı bir sebep olmaksızın işten çıkarıldığından kıdem tazminatına hak kazanmıştır.",
        slots.text_or("calismaYili", "___"),
        slots.text_or("calismaAyi", "___"),
    ))
}

fn notice_pay(data: &FormData) -> Section {
    let period = if !data.flag("ihbarSuresiTaninmamis") && data.flag("ihbarSuresiEksikTaninmis") {
        "eksik tanınmıştır"
    } else {
        "tanınmamıştır"
    };
    Section::titled("İHBAR TAZMİNATI")
        .paragraph(format!("Davacıya ihbar süresi {period}."))
        .paragraph("Bu nedenle ihbar tazminatı talep edilmektedir.")
}

fn unpaid_wages(data: &FormData) -> Section {
    let section = Section::titled("ÜCRET ALACAKLARI").paragraph("Davacıya ait;");
    match data.filled("odenmeyenUcretAylari") {
        Some(months) => section.paragraph(format!("{months} ayına ait ücret ödenmemiştir.")),
        None => section
            .paragraph(format!("{PLACEHOLDER} ayına ait ücret"))
            .paragraph(format!("{PLACEHOLDER} ayına ait ücret"))
            .paragraph("ödenmemiştir."),
    }
}

/// İşe iade yerine tazminat talepli dava dilekçesi, arabuluculuk sonrası.
pub struct UnjustTerminationLawsuit {
    fields: Vec<FieldSpec>,
}

impl UnjustTerminationLawsuit {
    pub fn new() -> Self {
        let mut fields = plaintiff_fields();
        fields.extend([
            FieldSpec::text("arabulucuAd", "Arabulucu Ad Soyad / Sicil No"),
            FieldSpec::date("arabuluculukBasvuruTarihi", "Arabuluculuk Başvuru Tarihi"),
            FieldSpec::date("sonTutanakTarihi", "Son Tutanak Tarihi"),
            FieldSpec::date("iseGirisTarihi", "İşe Giriş Tarihi").required(),
            FieldSpec::date("istenCikarilmaTarihi", "İşten Çıkarılma Tarihi").required(),
            FieldSpec::text("gorev", "Görevi").required(),
            FieldSpec::currency("aylikBrutUcret", "Aylık Brüt Ücret").required(),
            FieldSpec::date("fesihTarihi", "Fesih Tarihi").required(),
            FieldSpec::boolean("yaziliBildirimYapilmadan", "Yazılı bildirim yapılmadan"),
            FieldSpec::boolean("gecerliSebepGosterilmeden", "Geçerli bir sebep gösterilmeden"),
            FieldSpec::boolean("savunmasiAlinmadan", "Savunması alınmadan"),
            FieldSpec::text_area("fesihGerekcesi", "Fesih Gerekçesi"),
            FieldSpec::number("calismaYili", "Çalışma Yılı"),
            FieldSpec::number("calismaAyi", "Çalışma Ayı"),
            FieldSpec::boolean("ihbarSuresiTaninmamis", "İhbar süresi tanınmamış"),
            FieldSpec::boolean("ihbarSuresiEksikTaninmis", "İhbar süresi eksik tanınmış"),
            FieldSpec::text("odenmeyenUcretAylari", "Ödenmeyen Ücret Ayları")
                .visible_if(Condition::flag("odenmeyenUcretAlacaklari")),
            FieldSpec::boolean("kidemTazminati", "Kıdem tazminatı"),
            FieldSpec::boolean("ihbarTazminati", "İhbar tazminatı"),
            FieldSpec::boolean("odenmeyenUcretAlacaklari", "Ödenmeyen ücret alacakları"),
            witness_field(),
        ]);
        fields.extend(sgk_fields());
        fields.push(FieldSpec::date("tarih", "Tarih").required());
        Self { fields }
    }
}

impl Default for UnjustTerminationLawsuit {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for UnjustTerminationLawsuit {
    fn id(&self) -> &'static str {
        "unjust-termination-compensation-lawsuit"
    }

    fn title(&self) -> &'static str {
        "Haksız Fesih Nedeniyle Tazminat Dava Dilekçesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Employment
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let header = Section::titled(court_heading(data)).paragraph("(ARABULUCULUK SONRASI)");
        let mediation = Section::untitled()
            .labeled("Arabuluculuk başvuru tarihi", slots.date("arabuluculukBasvuruTarihi"))
            .labeled("Son tutanak tarihi", slots.date("sonTutanakTarihi"))
            .labeled("Anlaşmama hali", "Evet");
        let subject = Section::titled("DAVA KONUSU")
            .paragraph("İş sözleşmesinin işveren tarafından haksız ve geçersiz şekilde feshedilmesi nedeniyle;")
            .bullets(select_bullets(DAMAGES, data))
            .paragraph("(alacakların yasal faiziyle birlikte) tahsili istemidir.");

        let employment = Section::titled("1. ÇALIŞMA BİLGİLERİ")
            .paragraph("Davacı, davalıya ait işyerinde;")
            .labeled("İşe giriş tarihi", slots.date("iseGirisTarihi"))
            .labeled("İşten çıkarılma tarihi", slots.date("istenCikarilmaTarihi"))
            .labeled("Görevi", slots.text("gorev"))
            .labeled("Aylık brüt ücreti", slots.money("aylikBrutUcret"))
            .paragraph("şeklinde çalışmıştır.");
        let dismissal = Section::titled("2. FESİH OLAYI")
            .paragraph("Davacının iş sözleşmesi;")
            .bullets(select_bullets(DISMISSAL_MANNER, data))
            .paragraph(format!(
                "{} tarihinde işveren tarafından tek taraflı olarak feshedilmiştir.",
                slots.date("fesihTarihi")
            ))
            .paragraph("Fesih bildirimi gerekçesiz / soyut / gerçeğe aykırıdır.");
        let employer_reason = slots.optional("fesihGerekcesi").map(|reason| {
            Section::titled("3. FESHİN HAKSIZ VE GEÇERSİZ OLMASI")
                .paragraph("Davalı işveren tarafından ileri sürülen fesih gerekçesi:")
                .paragraph(reason)
                .paragraph("Ancak bu gerekçe;")
                .bullets(REASON_FLAWS.map(String::from).to_vec())
                .paragraph("Bu nedenle fesih haksızdır.")
        });
        let entitlements =
            Section::titled("4. TAZMİNAT HAKLARI").subsections(select(ENTITLEMENTS, data));
        let mediation_process = Section::titled("5. ARABULUCULUK SÜRECİ").paragraph(
            "Davacı, dava şartı olan zorunlu arabuluculuğa başvurmuş, ancak anlaşma sağlanamamıştır.",
        );

        let explanations = Section::titled("AÇIKLAMALAR")
            .subsection(employment)
            .subsection(dismissal)
            .subsections(employer_reason)
            .subsection(entitlements)
            .subsection(mediation_process);

        let requests = Section::titled("SONUÇ VE İSTEM")
            .paragraph("Yukarıda arz edilen nedenlerle;")
            .bullets(select_bullets(REQUESTS, data))
            .paragraph("karar verilmesini saygıyla arz ve talep ederim.");

        let mut builder = Document::builder()
            .section(header)
            .section(plaintiff_section(&slots))
            .section(defendant_section(&slots, "Unvan"))
            .section_when(!slots.is_blank("arabulucuAd"), || {
                Section::titled("ARABULUCU")
                    .labeled("Ad Soyad / Sicil No", slots.text("arabulucuAd"))
            })
            .section(mediation)
            .section(subject)
            .section(explanations)
            .section(Section::titled("HUKUKİ NEDENLER").bullets(LEGAL_GROUNDS.map(String::from).to_vec()))
            .section(Section::titled("DELİLLER").bullets(EVIDENCE.map(String::from).to_vec()))
            .section_if_any(witness_section(&self.fields, data));
        if let Some(sgk) = sgk_section(data) {
            builder = builder.section(sgk);
        }

        builder
            .section(requests)
            .section(closing(slots.date("tarih"), "Davacı", slots.text("davaciAd")))
            .build()
    }
}
