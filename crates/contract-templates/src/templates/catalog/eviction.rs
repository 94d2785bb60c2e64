use super::{closing, landlord_fields, party, tenant_fields};
use crate::templates::clause::Branch;
use crate::templates::document::{Block, Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::{EnumOption, FieldSpec};
use crate::templates::slots::Slots;

/// Grounds for eviction under TBK 350, shared by the petition and the notice.
pub static EVICTION_REASONS: &[EnumOption] = &[
    EnumOption::new("ihtiyaç", "Kendi İhtiyacı İçin"),
    EnumOption::new("bakım", "Bakım ve Onarım"),
    EnumOption::new("sözleşme ihlali", "Sözleşme İhlali"),
    EnumOption::new("kira ödememe", "Kira Ödememe"),
];

static PETITION_GROUNDS: Branch = Branch::new(
    "tahliyeSebebi",
    &[
        (
            "ihtiyaç",
            "Davalı ile aramızda mevcut kira sözleşmesi kapsamında, yukarıda adresi belirtilen konuta kendi ihtiyacım için ihtiyaç duymaktayım. Türk Borçlar Kanunu'nun 350. maddesi uyarınca, konutun tahliyesi için dava açma hakkım doğmuştur.",
        ),
        (
            "bakım",
            "Davalı ile aramızda mevcut kira sözleşmesi kapsamında, yukarıda adresi belirtilen konutun bakım ve onarımı için tahliye edilmesi gerekmektedir. Türk Borçlar Kanunu'nun 350. maddesi uyarınca, konutun tahliyesi için dava açma hakkım doğmuştur.",
        ),
        (
            "sözleşme ihlali",
            "Davalı, kira sözleşmesinin şartlarını ihlal etmiş, sözleşmeye aykırı davranışlarda bulunmuştur. Bu nedenle, Türk Borçlar Kanunu'nun 350. maddesi uyarınca, konutun tahliyesi için dava açma hakkım doğmuştur.",
        ),
        (
            "kira ödememe",
            "Davalı, kira bedelini ödememiş, sözleşme şartlarını yerine getirmemiştir. Bu nedenle, Türk Borçlar Kanunu'nun 350. maddesi uyarınca, konutun tahliyesi için dava açma hakkım doğmuştur.",
        ),
    ],
);

static NOTICE_GROUNDS: Branch = Branch::new(
    "tahliyeSebebi",
    &[
        (
            "ihtiyaç",
            "Konuta kendi ihtiyacım için ihtiyaç duymaktayım. Türk Borçlar Kanunu'nun 350. maddesi uyarınca, konutun tahliyesi için ihtarname gönderme hakkım doğmuştur.",
        ),
        (
            "bakım",
            "Konutun bakım ve onarımı için tahliye edilmesi gerekmektedir. Türk Borçlar Kanunu'nun 350. maddesi uyarınca, konutun tahliyesi için ihtarname gönderme hakkım doğmuştur.",
        ),
        (
            "sözleşme ihlali",
            "Kira sözleşmesinin şartlarını ihlal etmiş, sözleşmeye aykırı davranışlarda bulunmuşsunuz. Bu nedenle, Türk Borçlar Kanunu'nun 350. maddesi uyarınca, konutun tahliyesi için ihtarname gönderme hakkım doğmuştur.",
        ),
        (
            "kira ödememe",
            "Kira bedelini ödememiş, sözleşme şartlarını yerine getirmemişsiniz. Bu nedenle, Türk Borçlar Kanunu'nun 350. maddesi uyarınca, konutun tahliyesi için ihtarname gönderme hakkım doğmuştur.",
        ),
    ],
);

const LEGAL_BASIS: [&str; 3] = [
    "Türk Borçlar Kanunu Madde 350",
    "İcra ve İflas Kanunu",
    "İlgili Yargıtay içtihatları",
];

/// Tahliye dava dilekçesi.
pub struct EvictionPetition {
    fields: Vec<FieldSpec>,
}

impl EvictionPetition {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("davacıAd", "Davacı Ad Soyad").required(),
            FieldSpec::text("davacıTC", "Davacı TC Kimlik No").max_length(11),
            FieldSpec::text_area("davacıAdres", "Davacı Adres").required(),
            FieldSpec::text("davacıVekilAd", "Vekil Ad Soyad"),
            FieldSpec::text("davacıVekilBaroNo", "Vekil Baro Sicil No"),
            FieldSpec::text("davalıAd", "Davalı Ad Soyad").required(),
            FieldSpec::text("davalıTC", "Davalı TC Kimlik No").max_length(11),
            FieldSpec::text_area("davalıAdres", "Davalı Adres").required(),
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::date("kiraSozlesmesiTarihi", "Kira Sözleşmesi Tarihi"),
            FieldSpec::currency("aylikKiraBedeli", "Aylık Kira Bedeli"),
            FieldSpec::date("kiraBaslangic", "Kira Başlangıç Tarihi"),
            FieldSpec::date("kiraBitis", "Kira Bitiş Tarihi"),
            FieldSpec::choice("tahliyeSebebi", "Tahliye Sebebi", EVICTION_REASONS).required(),
            FieldSpec::text("mahkemeAdı", "Mahkeme Adı").required(),
            FieldSpec::date("davaTarihi", "Dava Tarihi").required().default_today(),
        ];
        Self { fields }
    }
}

impl Default for EvictionPetition {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for EvictionPetition {
    fn id(&self) -> &'static str {
        "eviction-petition"
    }

    fn title(&self) -> &'static str {
        "Tahliye Dava Dilekçesi"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Housing
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        let mut plaintiff = party("DAVACI", &slots, "davacıAd", "davacıTC", "davacıAdres");
        if let Some(counsel) = slots.optional("davacıVekilAd") {
            let counsel = match slots.optional("davacıVekilBaroNo") {
                Some(bar_no) => format!("{counsel} (Baro Sicil No: {bar_no})"),
                None => counsel,
            };
            plaintiff = plaintiff.labeled("Vekil", counsel);
        }

        let mut request = Section::titled("İSTEM").paragraph(format!(
            "Yukarıda kimlik bilgileri yazılı davalının {} adresindeki konuttan tahliyesine karar verilmesini talep ederim.",
            slots.text("konutAdresi")
        ));
        if let Some(ground) = PETITION_GROUNDS.pick(data) {
            request = request.subsection(Section::titled("SEBEP").paragraph(ground));
        }

        Document::builder()
            .section(Section::titled("TAHLİYE DAVA DİLEKÇESİ"))
            .section(plaintiff)
            .section(party("DAVALI", &slots, "davalıAd", "davalıTC", "davalıAdres"))
            .section(
                Section::titled("KONUT ADRESİ")
                    .paragraph(slots.text("konutAdresi"))
                    .labeled("Kira Sözleşmesi Tarihi", slots.date("kiraSozlesmesiTarihi"))
                    .labeled("Aylık Kira Bedeli", slots.money("aylikKiraBedeli")),
            )
            .section(request)
            .section(
                Section::titled("HUKUKİ DAYANAK")
                    .bullets(LEGAL_BASIS.into_iter().map(String::from).collect()),
            )
            .section(
                Section::untitled()
                    .labeled("Mahkeme", slots.text("mahkemeAdı"))
                    .labeled("Tarih", slots.date("davaTarihi"))
                    .signature("Davacı", slots.text("davacıAd")),
            )
            .build()
    }
}

/// Tahliye ihtarnamesi sent by the landlord before suing.
pub struct EvictionNotice {
    fields: Vec<FieldSpec>,
}

impl EvictionNotice {
    pub fn new() -> Self {
        let mut fields = landlord_fields(true);
        fields.extend(tenant_fields(true));
        fields.extend([
            FieldSpec::text_area("konutAdresi", "Konut Adresi").required(),
            FieldSpec::date("kiraSozlesmesiTarihi", "Kira Sözleşmesi Tarihi"),
            FieldSpec::currency("aylikKiraBedeli", "Aylık Kira Bedeli"),
            FieldSpec::choice("tahliyeSebebi", "Tahliye Sebebi", EVICTION_REASONS).required(),
            FieldSpec::date("ihtarnameTarihi", "İhtarname Tarihi").required().default_today(),
            FieldSpec::date("tahliyeTarihi", "Tahliye Tarihi"),
        ]);
        Self { fields }
    }
}

impl Default for EvictionNotice {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for EvictionNotice {
    fn id(&self) -> &'static str {
        "eviction-notice"
    }

    fn title(&self) -> &'static str {
        "Tahliye İhtarnamesi"
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
            .paragraph(format!("Sayın {},", slots.text("kiracıAd")))
            .paragraph(format!(
                "{} adresindeki konutumuza ilişkin {} tarihli kira sözleşmemiz kapsamında, aşağıdaki sebeplerle konutun tahliyesini talep etmekteyim:",
                slots.text("konutAdresi"),
                slots.date("kiraSozlesmesiTarihi"),
            ))
            .blocks(NOTICE_GROUNDS.pick(data).map(Block::paragraph))
            .paragraph(format!(
                "Bu ihtarname ile, {} konutun tahliyesini talep ediyorum. Aksi takdirde, yasal yollara başvurma hakkımı saklı tutarım.",
                slots.date_or("tahliyeTarihi", "15 (on beş) gün içinde"),
            ));

        Document::builder()
            .section(Section::titled("TAHLİYE İHTARNAMESİ"))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::slots::PLACEHOLDER;

    #[test]
    fn petition_and_notice_word_the_same_reason_differently() {
        let data = FormData::new().with("tahliyeSebebi", "kira ödememe");
        let petition = EvictionPetition::new().render(&data);
        let notice = EvictionNotice::new().render(&data);

        assert!(petition.mentions("Davalı, kira bedelini ödememiş"));
        assert!(notice.mentions("Kira bedelini ödememiş, sözleşme şartlarını yerine getirmemişsiniz."));
    }

    #[test]
    fn unknown_reason_renders_no_ground() {
        let data = FormData::new().with("tahliyeSebebi", "komşu şikayeti");
        let petition = EvictionPetition::new().render(&data);
        assert!(!petition.mentions("SEBEP"));
        assert!(!petition.mentions("350. maddesi uyarınca"));

        let diagnostics = EvictionPetition::new().validate(&data);
        assert!(diagnostics.iter().any(|d| d.key() == "tahliyeSebebi"));
    }

    #[test]
    fn notice_falls_back_to_fifteen_days() {
        let notice = EvictionNotice::new().render(&FormData::new());
        assert!(notice.mentions("Bu ihtarname ile, 15 (on beş) gün içinde konutun tahliyesini"));
        assert!(notice.mentions(&format!("Sayın {PLACEHOLDER},")));

        let dated = EvictionNotice::new().render(&FormData::new().with("tahliyeTarihi", "2026-05-01"));
        assert!(dated.mentions("Bu ihtarname ile, 1 Mayıs 2026 konutun tahliyesini"));
    }

    #[test]
    fn counsel_line_includes_bar_number_when_given() {
        let data = FormData::new()
            .with("davacıVekilAd", "Av. Deniz Ak")
            .with("davacıVekilBaroNo", "12345");
        let petition = EvictionPetition::new().render(&data);
        assert!(petition.mentions("Av. Deniz Ak (Baro Sicil No: 12345)"));
    }
}
