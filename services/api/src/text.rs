//! Indented plain-text view of a rendered document, for terminals.

use contract_templates::templates::format::to_upper_tr;
use contract_templates::templates::{Block, Document, Section};

const INDENT: &str = "  ";

pub(crate) fn render_plain(document: &Document) -> String {
    let mut out = String::new();
    for (index, section) in document.sections.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_section(&mut out, section, 0);
    }
    out
}

fn write_section(out: &mut String, section: &Section, depth: usize) {
    let pad = INDENT.repeat(depth);
    if let Some(heading) = &section.heading {
        line(out, &pad, &to_upper_tr(heading));
    }

    let body_pad = if section.heading.is_some() {
        INDENT.repeat(depth + 1)
    } else {
        pad
    };
    for block in &section.blocks {
        match block {
            Block::Paragraph { text } => line(out, &body_pad, text),
            Block::BulletList { items } => {
                for item in items {
                    line(out, &body_pad, &format!("- {item}"));
                }
            }
            Block::LabeledValue { label, value } => {
                line(out, &body_pad, &format!("{label}: {value}"))
            }
            Block::SignatureLine { role_label, name } => {
                line(out, &body_pad, role_label);
                line(out, &body_pad, name);
                line(out, &body_pad, "İmza");
            }
        }
    }

    for subsection in &section.subsections {
        write_section(out, subsection, depth + 1);
    }
}

fn line(out: &mut String, pad: &str, text: &str) {
    out.push_str(pad);
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_sections_blocks_and_subsections() {
        let document = Document::builder()
            .section(Section::titled("Kira Ödeme Belgesi").labeled("Belge No", "7"))
            .section(
                Section::titled("TANIK LİSTESİ").subsection(
                    Section::titled("Tanık 1").bullets(vec!["Mobbing".to_string()]),
                ),
            )
            .section(Section::untitled().signature("Kiracı", "Ayşe Kaya"))
            .build();

        let expected = "\
KİRA ÖDEME BELGESİ
  Belge No: 7

TANIK LİSTESİ
  TANIK 1
    - Mobbing

Kiracı
Ayşe Kaya
İmza
";
        assert_eq!(render_plain(&document), expected);
    }
}
