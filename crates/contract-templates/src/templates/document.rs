use serde::{Deserialize, Serialize};

/// Renderer-agnostic unit of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    BulletList { items: Vec<String> },
    LabeledValue { label: String, value: String },
    SignatureLine { role_label: String, name: String },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn bullets(items: Vec<String>) -> Self {
        Self::BulletList { items }
    }

    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::LabeledValue {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn signature(role_label: impl Into<String>, name: impl Into<String>) -> Self {
        Self::SignatureLine {
            role_label: role_label.into(),
            name: name.into(),
        }
    }

    fn texts(&self) -> Vec<&str> {
        match self {
            Block::Paragraph { text } => vec![text.as_str()],
            Block::BulletList { items } => items.iter().map(String::as_str).collect(),
            Block::LabeledValue { label, value } => vec![label.as_str(), value.as_str()],
            Block::SignatureLine { role_label, name } => vec![role_label.as_str(), name.as_str()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Section>,
}

impl Section {
    pub fn titled(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            ..Self::default()
        }
    }

    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn paragraph(self, text: impl Into<String>) -> Self {
        self.block(Block::paragraph(text))
    }

    /// Adds a bullet list; an empty list adds nothing.
    pub fn bullets(self, items: Vec<String>) -> Self {
        if items.is_empty() {
            self
        } else {
            self.block(Block::bullets(items))
        }
    }

    pub fn labeled(self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.block(Block::labeled(label, value))
    }

    pub fn signature(self, role_label: impl Into<String>, name: impl Into<String>) -> Self {
        self.block(Block::signature(role_label, name))
    }

    pub fn subsection(mut self, section: Section) -> Self {
        self.subsections.push(section);
        self
    }

    pub fn subsections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.subsections.extend(sections);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.subsections.iter().all(Section::is_empty)
    }

    /// Whether the heading, any block, or any nested section contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.heading
            .as_deref()
            .map(|heading| heading.contains(needle))
            .unwrap_or(false)
            || self
                .blocks
                .iter()
                .flat_map(Block::texts)
                .any(|text| text.contains(needle))
            || self.subsections.iter().any(|section| section.mentions(needle))
    }
}

/// Output of a render: an ordered tree of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Whether any heading or block text contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.sections.iter().any(|section| section.mentions(needle))
    }

    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.heading.as_deref() == Some(heading))
    }

    pub fn headings(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|section| section.heading.as_deref())
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct DocumentBuilder {
    sections: Vec<Section>,
}

impl DocumentBuilder {
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Adds the section only when it carries content, so optional clauses
    /// never leave an empty heading behind.
    pub fn section_if_any(self, section: Section) -> Self {
        if section.is_empty() {
            self
        } else {
            self.section(section)
        }
    }

    pub fn section_when(self, include: bool, build: impl FnOnce() -> Section) -> Self {
        if include {
            self.section(build())
        } else {
            self
        }
    }

    pub fn build(self) -> Document {
        Document {
            sections: self.sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optional_sections_are_dropped() {
        let document = Document::builder()
            .section(Section::titled("DAVACI").labeled("Ad Soyad", "Ayşe"))
            .section_if_any(Section::titled("TANIK LİSTESİ").bullets(Vec::new()))
            .section_when(false, || Section::titled("ARABULUCU"))
            .build();

        assert_eq!(document.headings(), vec!["DAVACI"]);
    }

    #[test]
    fn mentions_searches_nested_sections() {
        let document = Document::builder()
            .section(
                Section::titled("TANIK LİSTESİ")
                    .subsection(Section::titled("Tanık 1").bullets(vec!["Mobbing".to_string()])),
            )
            .build();

        assert!(document.mentions("Mobbing"));
        assert!(!document.mentions("Fazla mesai"));
    }

    #[test]
    fn blocks_serialize_with_type_tags() {
        let value = serde_json::to_value(Block::signature("Davacı", "Ayşe")).expect("serializes");
        assert_eq!(
            value,
            serde_json::json!({ "type": "signature_line", "role_label": "Davacı", "name": "Ayşe" })
        );
    }
}
