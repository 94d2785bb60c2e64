use super::registry::TemplateRegistry;
use super::schema::{FieldKind, FieldSpec};
use serde::Serialize;
use std::io::Write;

/// One line of the flattened field schema. Group sub-fields are keyed
/// `group[].sub`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaRow {
    pub template_id: &'static str,
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
    pub conditional: bool,
    pub max_length: Option<usize>,
}

pub fn schema_rows(registry: &TemplateRegistry) -> Vec<SchemaRow> {
    let mut rows = Vec::new();
    for template in registry.iter() {
        flatten(template.id(), template.fields(), "", &mut rows);
    }
    rows
}

fn flatten(template_id: &'static str, fields: &[FieldSpec], prefix: &str, out: &mut Vec<SchemaRow>) {
    for field in fields {
        let key = format!("{prefix}{}", field.key);
        out.push(SchemaRow {
            template_id,
            key: key.clone(),
            label: field.label.to_string(),
            kind: field.kind.type_name(),
            required: field.required,
            conditional: field.visible_if.is_some(),
            max_length: field.max_length,
        });
        if let FieldKind::RepeatedGroup(group) = &field.kind {
            flatten(template_id, &group.fields, &format!("{key}[]."), out);
        }
    }
}

pub fn write_schema_csv<W: Write>(registry: &TemplateRegistry, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in schema_rows(registry) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_sub_fields_are_flattened() {
        let registry = TemplateRegistry::standard().expect("catalog loads");
        let rows = schema_rows(&registry);
        let partner = rows
            .iter()
            .find(|row| row.template_id == "partnership" && row.key == "ortaklar[].ad")
            .expect("partner name row");
        assert_eq!(partner.kind, "text");
        assert!(partner.required);
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let registry = TemplateRegistry::standard().expect("catalog loads");
        let mut buffer = Vec::new();
        write_schema_csv(&registry, &mut buffer).expect("csv writes");
        let text = String::from_utf8(buffer).expect("utf-8 output");

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("template_id,key,label,type,required,conditional,max_length")
        );
        assert_eq!(lines.count(), schema_rows(&registry).len());
    }
}
