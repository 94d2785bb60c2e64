//! Konut kira kontratosu in three parts: the contract page, the special
//! conditions (hususi şartlar) and the tenant's evacuation commitment.

use super::optional_labeled;
use crate::templates::clause::{select, Clause};
use crate::templates::condition::Condition;
use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::format::{long_date, parse_iso_date};
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::{EnumOption, FieldSpec};
use crate::templates::slots::{Slots, PLACEHOLDER};
use chrono::Days;

/// The evacuation commitment is dated this many days after signing.
const COMMITMENT_OFFSET_DAYS: u64 = 35;

static PROPERTY_KINDS: &[EnumOption] = &[
    EnumOption::new("MESKEN", "Mesken"),
    EnumOption::new("İŞYERİ", "İşyeri"),
    EnumOption::new("DEPO", "Depo"),
    EnumOption::new("DİĞER", "Diğer"),
];

static PAYMENT_METHODS: &[EnumOption] = &[
    EnumOption::new("BANKA", "Banka"),
    EnumOption::new("NAKİT", "Nakit"),
    EnumOption::new("HAVALE/EFT", "Havale/EFT"),
    EnumOption::new("ÇEK", "Çek"),
    EnumOption::new("SENET", "Senet"),
];

static INCREASE_MONTHS: &[EnumOption] = &[
    EnumOption::new("Ocak", "Ocak"),
    EnumOption::new("Şubat", "Şubat"),
    EnumOption::new("Mart", "Mart"),
    EnumOption::new("Nisan", "Nisan"),
    EnumOption::new("Mayıs", "Mayıs"),
    EnumOption::new("Haziran", "Haziran"),
    EnumOption::new("Temmuz", "Temmuz"),
    EnumOption::new("Ağustos", "Ağustos"),
    EnumOption::new("Eylül", "Eylül"),
    EnumOption::new("Ekim", "Ekim"),
    EnumOption::new("Kasım", "Kasım"),
    EnumOption::new("Aralık", "Aralık"),
];

static SPECIAL_CONDITIONS: &[Clause<String>] = &[
    Clause::new("odeme", Condition::ALWAYS, payment_terms),
    Clause::new("giderler", Condition::ALWAYS, running_costs),
    Clause::new("sure", Condition::ALWAYS, term_and_increase),
    Clause::new("tahliye-bildirimi", Condition::ALWAYS, notice_to_vacate),
    Clause::new("tadilat", Condition::ALWAYS, alterations),
    Clause::new("devir", Condition::ALWAYS, subletting),
    Clause::new("kullanim", Condition::ALWAYS, occupancy),
    Clause::new("yetki", Condition::ALWAYS, jurisdiction),
];

fn payment_terms(data: &FormData) -> String {
    let slots = Slots::new(data);
    format!(
        "Kiracı mevcut kira bedelini her ayın {} günü kiralayanın bildireceği {} hesabına ödeyecektir. Temerrüt halinde her ay için aylık % {} hesabıyla gecikme tazminatı alınır. Şu kadar ki temerrüt halinde takip eden bir yılın bakiye dönem kiraları da muacceliyet kesbedecektir.",
        slots.ordinal_or("kiraOdemeGunu", "Yirminci"),
        slots.text_or("kiraOdemeIBAN", "TR iban nolu"),
        slots.text_or("gecikmeTazminati", "2"),
    )
}

fn running_costs(data: &FormData) -> String {
    let slots = Slots::new(data);
    let utilities = if data.flag("elektrikSuAidatKiracıya") {
        "kiracıya aittir"
    } else {
        "kiralayana aittir"
    };
    let boiler = if data.flag("kombiBakimKiracıya") {
        "kombinin servis güvencesinde rutin olarak bakım yaptırmayı taahhüt eder. Bakım yaptırmaması halinde sorumluluk kiracıya aittir."
    } else {
        "kombi bakımı kiralayana aittir."
    };
    format!(
        "Elektrik, su, çevre temizlik ve stopaj vergileri ile site apartman aidatı {utilities}. Kira bedeli net ödenir. Kiracı adına {} gün içinde abonelik açtırmayı ve {boiler}",
        slots.text_or("abonelikAcmaSuresi", "15"),
    )
}

fn term_and_increase(data: &FormData) -> String {
    let slots = Slots::new(data);
    format!(
        "Kira müddeti {} yıl olup, her yıl dönem başı olan {} ayı ve takip eden yıllarda mevcut kira bedeli {} oranında arttırılacaktır.",
        slots.text_or("kiraMuddetiYil", "1"),
        slots.text_or("artisDonemi", "Eylül"),
        slots.text_or("kiraArtisOrani", "TÜFE"),
    )
}

fn notice_to_vacate(data: &FormData) -> String {
    let slots = Slots::new(data);
    let mut text = format!(
        "Kiracı meskeni sözleşme hitamında tahliye etmek istediği takdirde; {} ay öncesinden kiraya verene yazılı olarak haber vermek zorundadır.",
        slots.text_or("tahliyeBildirimi", "2"),
    );
    if data.flag("erkenTahliyeMuacceliyet") {
        text.push_str(" Şu kadar ki erken tahliye halinde bakiye 1 yıllık dönem kiraları da muacceliyet kesbedecektir.");
    }
    text
}

fn alterations(data: &FormData) -> String {
    if data.flag("onarimTadilatOnay") {
        "Kiralayanın onayı alınmaksızın mecurda esaslı onarım, tadilat yapılamaz. Kullanıldığı süre içinde yapılacak küçük değişiklikler için kiralayandan hak talep edilemez. Kiralayan talep ederse; mecur eski hale getirilerek teslim edilecektir.".to_string()
    } else {
        "Mecurda onarım ve tadilat yapılabilir.".to_string()
    }
}

fn subletting(data: &FormData) -> String {
    let consent = if data.flag("altKiracıDevir") {
        "alınarak her zaman devir yapılabilir."
    } else {
        "alınmadan üçüncü bir kişiye veya alt kiracıya devredemez."
    };
    format!("Kiracı, mecuru mülk sahibinin rızası {consent}")
}

fn occupancy(data: &FormData) -> String {
    let slots = Slots::new(data);
    let mut text = "Kiracı konutu ikametgah olarak kullanacağını beyan etmiştir.".to_string();
    if data.flag("konutKullanimKisitlama") {
        text.push_str(&format!(
            " Ailece konaklama dışında {} kişiden fazla şahıs ikamet edemez.",
            slots.text_or("maxIkametSayisi", "beş"),
        ));
    }
    if data.flag("ticariFaaliyet") {
        text.push_str(" Konutun ticari faaliyet olarak kullanılması halinde taraflar yeni bir kira akdi yapmayı peşinen kabul etmişlerdir. Akde aykırılık taraflarca tahliye sebebi sayılmıştır.");
    }
    text
}

fn jurisdiction(data: &FormData) -> String {
    format!(
        "İhtilaf halinde {} Mahkemeleri ve İcra Daireleri yetkilidir.",
        Slots::new(data).text_or("ihtilafMahkemesi", "Çanakkale"),
    )
}

/// Address line for the evacuation commitment; needs both neighbourhood and
/// street, otherwise the placeholder.
fn premises_address(data: &FormData) -> String {
    let (Some(neighbourhood), Some(street)) = (data.filled("evMahalle"), data.filled("evCaddeSokak"))
    else {
        return PLACEHOLDER.to_string();
    };

    let mut parts = vec![neighbourhood.into_owned(), street.into_owned()];
    if let Some(door) = data.filled("evDaire") {
        parts.push(format!("No:{door}"));
    }
    if let Some(city) = data.filled("sozlesmeYeri") {
        parts.push(format!("Merkez/{city}"));
    }
    parts.join(" ")
}

/// Date printed on the evacuation commitment, a fixed offset after signing.
fn commitment_date(data: &FormData) -> String {
    parse_iso_date(&data.text("sozlesmeTarihi"))
        .and_then(|signed| signed.checked_add_days(Days::new(COMMITMENT_OFFSET_DAYS)))
        .map(long_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub struct ResidentialLease {
    fields: Vec<FieldSpec>,
}

impl ResidentialLease {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("evSahibiAd", "Ev Sahibi Ad Soyad").required(),
            FieldSpec::text("evSahibiTC", "Ev Sahibi TC Kimlik No").max_length(11),
            FieldSpec::text_area("evSahibiAdres", "Ev Sahibi Adres"),
            FieldSpec::text("evSahibiTelefon", "Ev Sahibi Telefon"),
            FieldSpec::text("evSahibiEmail", "Ev Sahibi E-posta"),
            FieldSpec::text("kiracıAd", "Kiracı Ad Soyad").required(),
            FieldSpec::text("kiracıTC", "Kiracı TC Kimlik No").max_length(11),
            FieldSpec::text_area("kiracıAdres", "Kiracı Adres"),
            FieldSpec::text("kiracıTelefon", "Kiracı Telefon"),
            FieldSpec::text("kiracıEmail", "Kiracı E-posta"),
            FieldSpec::text("evDaire", "Daire"),
            FieldSpec::text("evMahalle", "Mahalle").required(),
            FieldSpec::text("evCaddeSokak", "Cadde/Sokak").required(),
            FieldSpec::choice("kiralananSeyinCinsi", "Kiralanan Şeyin Cinsi", PROPERTY_KINDS),
            FieldSpec::currency("birAylikKira", "Bir Aylık Kira").required(),
            FieldSpec::choice("kiraOdemeSekli", "Kira Ödeme Şekli", PAYMENT_METHODS),
            FieldSpec::text("kiraMuddeti", "Kira Müddeti"),
            FieldSpec::date("kiraBaslangic", "Kira Başlangıcı").required(),
            FieldSpec::date("kiraBitis", "Kira Bitişi"),
            FieldSpec::currency("depozito", "Depozito"),
            FieldSpec::currency("aidat", "Aidat"),
            FieldSpec::choice("kullanımAmaci", "Kullanım Amacı", PROPERTY_KINDS),
            FieldSpec::text_area("demirbasEşyalar", "Demirbaş Eşyalar"),
            FieldSpec::date("sozlesmeTarihi", "Sözleşme Tarihi").default_today(),
            FieldSpec::text("sozlesmeYeri", "Sözleşme Yeri").default_value("Çanakkale"),
            FieldSpec::number("kiraOdemeGunu", "Kira Ödeme Günü").default_value("20"),
            FieldSpec::text("kiraOdemeIBAN", "Kira Ödeme IBAN"),
            FieldSpec::number("gecikmeTazminati", "Aylık Gecikme Tazminatı (%)").default_value("2"),
            FieldSpec::boolean("elektrikSuAidatKiracıya", "Elektrik, su ve aidat kiracıya ait")
                .default_flag(true),
            FieldSpec::number("abonelikAcmaSuresi", "Abonelik Açma Süresi (gün)").default_value("15"),
            FieldSpec::boolean("kombiBakimKiracıya", "Kombi bakımı kiracıya ait").default_flag(true),
            FieldSpec::number("kiraMuddetiYil", "Kira Müddeti (yıl)").default_value("1"),
            FieldSpec::text("kiraArtisOrani", "Kira Artış Oranı").default_value("TÜFE"),
            FieldSpec::choice("artisDonemi", "Artış Dönemi", INCREASE_MONTHS).default_value("Eylül"),
            FieldSpec::number("tahliyeBildirimi", "Tahliye Bildirim Süresi (ay)").default_value("2"),
            FieldSpec::boolean("erkenTahliyeMuacceliyet", "Erken tahliyede muacceliyet")
                .default_flag(true),
            FieldSpec::boolean("onarimTadilatOnay", "Onarım ve tadilat onaya bağlı").default_flag(true),
            FieldSpec::boolean("altKiracıDevir", "Alt kiracıya devir serbest"),
            FieldSpec::boolean("konutKullanimKisitlama", "İkamet sayısı kısıtlaması")
                .default_flag(true),
            FieldSpec::number("maxIkametSayisi", "En Fazla İkamet Eden Kişi Sayısı")
                .default_value("5")
                .visible_if(Condition::flag("konutKullanimKisitlama")),
            FieldSpec::boolean("ticariFaaliyet", "Ticari faaliyet yasağı"),
            FieldSpec::text("ihtilafMahkemesi", "Yetkili Mahkeme").default_value("Çanakkale"),
            FieldSpec::number("kontratNushasi", "Kontrat Nüsha Sayısı").default_value("3"),
            FieldSpec::text_area("ekMaddeler", "Ek Maddeler"),
        ];
        Self { fields }
    }
}

impl Default for ResidentialLease {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for ResidentialLease {
    fn id(&self) -> &'static str {
        "residential-lease"
    }

    fn title(&self) -> &'static str {
        "Konut Kira Sözleşmesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);
        let landlord = slots.text("evSahibiAd");
        let tenant = slots.text("kiracıAd");

        let premises = Section::untitled()
            .labeled("Dairesi", slots.text("evDaire"))
            .labeled("Mahallesi", slots.text("evMahalle"))
            .labeled("Cadde/Sokağı", slots.text("evCaddeSokak"))
            .labeled("Kiralanan şeyin cinsi", slots.text_or("kiralananSeyinCinsi", "MESKEN"));
        let landlord_section = Section::titled("KİRAYA VEREN")
            .labeled("Adı Soyadı", landlord.clone())
            .blocks(optional_labeled("TC", slots.optional("evSahibiTC")));
        let rent = Section::untitled()
            .labeled("Bir aylık kira karşılığı", slots.money("birAylikKira"))
            .labeled("Kira karşılığının ne şekilde ödeneceği", slots.text_or("kiraOdemeSekli", "BANKA"))
            .labeled("Kira müddeti", slots.text("kiraMuddeti"))
            .labeled("Kiranın başlangıcı", slots.date("kiraBaslangic"))
            .labeled("Kiralanan şeyin ne için kullanılacağı", slots.text_or("kullanımAmaci", "MESKEN"));
        let fixtures = slots.optional("demirbasEşyalar").map(|items| {
            Section::titled("KİRALANAN ŞEY İLE BERABER TESLİM OLUNAN DEMİRBAŞ EŞYANIN BEYANI")
                .paragraph(items)
        });
        let tenant_section = Section::titled("KİRACI")
            .labeled("Adı Soyadı", tenant.clone())
            .blocks(optional_labeled("TC", slots.optional("kiracıTC")))
            .blocks(optional_labeled("Adres", slots.optional("kiracıAdres")));
        let riders = slots
            .optional("ekMaddeler")
            .map(|riders| Section::titled("EK MADDELER").paragraph(riders));

        let special = Section::titled("HUSUSİ ŞARTLAR").subsections(
            select(SPECIAL_CONDITIONS, data)
                .into_iter()
                .enumerate()
                .map(|(index, text)| Section::titled(format!("{})", index + 1)).paragraph(text)),
        );
        let copies = Section::untitled()
            .paragraph(format!(
                "Mezkûr konut iki tarafın rızasıyla ve yukarıda yazılı şartlarla kiralanmış olduğuna dair bu kontrat {} NÜSHA olarak tanzim ve teati edilmiştir.",
                slots.text_or("kontratNushasi", "ÜÇ"),
            ))
            .labeled("Tarih", slots.date("sozlesmeTarihi"))
            .signature("Kiracı", tenant.clone())
            .signature("Kiraya Veren", landlord.clone());

        let commitment = Section::titled("TAHLİYE TAAHHÜTNAMESİ")
            .subsection(
                Section::titled("TAAHHÜT EDEN")
                    .labeled("Ad Soyad", tenant.clone())
                    .blocks(optional_labeled("TC Kimlik No", slots.optional("kiracıTC"))),
            )
            .subsection(
                Section::titled("MAL SAHİBİ")
                    .labeled("Ad Soyad", landlord.clone())
                    .blocks(optional_labeled("TC Kimlik No", slots.optional("evSahibiTC"))),
            )
            .subsection(
                Section::titled("TAHLİYE EDİLECEK MECURUN ADRESİ").paragraph(premises_address(data)),
            )
            .paragraph(format!(
                "Halen kiracısı bulunduğum kiralayanı {landlord} olan, yukarıda adresi yazılı mecurda kiracı olarak bulunmaktayım. İş bu taşınmazı, hiçbir BASKI altında kalmaksızın, PROTESTO, İKAZ ve İHTARA hacet kalmaksızın {} tarihinde sahibi veya göstereceği kanuni vekillerine BOŞ olarak TAHLİYE edip, teslim etmeyi kesin olarak taahhüt eder ve yüklenirim.",
                slots.date("kiraBitis"),
            ))
            .signature("Taahhüt Eden", tenant.clone())
            .labeled("Tarih", commitment_date(data));

        Document::builder()
            .section(Section::titled("KİRA KONTRATOSU"))
            .section(premises)
            .section(landlord_section)
            .section(rent)
            .section_if_any(fixtures.unwrap_or_default())
            .section(tenant_section)
            .section_if_any(riders.unwrap_or_default())
            .section(
                Section::untitled()
                    .signature("Kiraya Veren", landlord)
                    .signature("Kiracı", tenant),
            )
            .section(special)
            .section(copies)
            .section(commitment)
            .build()
    }
}
