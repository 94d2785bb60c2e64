use crate::templates::document::{Document, Section};
use crate::templates::form::FormData;
use crate::templates::registry::{ContractTemplate, TemplateCategory};
use crate::templates::schema::FieldSpec;
use crate::templates::slots::Slots;

/// Resignation with notice; addressed to no one in particular.
pub struct ResignationLetter {
    fields: Vec<FieldSpec>,
}

impl ResignationLetter {
    pub fn new() -> Self {
        let fields = vec![
            FieldSpec::text("calisanAd", "Ad Soyad").required(),
            FieldSpec::date("tarih", "Tarih").required(),
        ];
        Self { fields }
    }
}

impl Default for ResignationLetter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractTemplate for ResignationLetter {
    fn id(&self) -> &'static str {
        "resignation-letter"
    }

    fn title(&self) -> &'static str {
        "İstifa Mektubu"
    }

    fn category(&self) -> TemplateCategory {
        TemplateCategory::Employment
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn render(&self, data: &FormData) -> Document {
        let slots = Slots::new(data);

        Document::builder()
            .section(Section::titled("İstifa Mektubu"))
            .section(
                Section::untitled()
                    .paragraph("Sayın Yetkili,")
                    .paragraph("Şirketinizde yürütmekte olduğum görevimden, iş sözleşmemde belirtilen ihbar süresine uyarak, kendi isteğimle ayrılma kararı aldığımı bilgilerinize sunarım.")
                    .paragraph("Şirketinizde görev yaptığım süre boyunca edindiğim deneyim ve kazanımlar için teşekkür ederim. Birlikte çalıştığım tüm ekip arkadaşlarıma ve yöneticilerime destekleri için şükranlarımı sunarım.")
                    .paragraph("İhbar süresi boyunca görev ve sorumluluklarımı eksiksiz şekilde devretmek için gerekli tüm desteği sağlayacağımı belirtmek isterim.")
                    .paragraph("Gereğini bilgilerinize arz eder, şirketinize ve tüm çalışanlarına başarılar dilerim.")
                    .paragraph("Saygılarımla,"),
            )
            .section(
                Section::untitled()
                    .paragraph(slots.text("calisanAd"))
                    .signature("İmza", slots.text("calisanAd"))
                    .labeled("Tarih", slots.date("tarih")),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::document::Block;

    #[test]
    fn signs_before_dating() {
        let data = FormData::new()
            .with("calisanAd", "Zeynep Kaya")
            .with("tarih", "2026-05-04");
        let document = ResignationLetter::new().render(&data);
        let closing = document.sections.last().expect("closing section");
        assert_eq!(
            closing.blocks[1..],
            [
                Block::signature("İmza", "Zeynep Kaya"),
                Block::labeled("Tarih", "4 Mayıs 2026"),
            ]
        );
        assert!(document.mentions("Sayın Yetkili,"));
    }
}
