use super::condition::Condition;
use super::form::{FieldValue, FormData};
use super::format::parse_iso_date;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// One selectable value of an enum field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl EnumOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Input kind of a field, which also decides how its value is defaulted,
/// validated and formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea,
    Date,
    Currency,
    /// Free numeric text such as a day count or a percentage.
    Number,
    Boolean,
    Enum { options: &'static [EnumOption] },
    RepeatedGroup(RepeatedGroup),
}

impl FieldKind {
    pub const fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::TextArea => "text_area",
            FieldKind::Date => "date",
            FieldKind::Currency => "currency",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Enum { .. } => "enum",
            FieldKind::RepeatedGroup(_) => "repeated_group",
        }
    }
}

/// A bounded list of structurally identical entries, e.g. witnesses or partners.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatedGroup {
    pub fields: Vec<FieldSpec>,
    /// Sub-field that identifies an entry; blank means the slot is unused.
    pub primary: &'static str,
    pub max_count: usize,
    /// Leading slots that are always rendered, even when blank.
    pub min_rendered: usize,
}

impl RepeatedGroup {
    pub fn new(fields: Vec<FieldSpec>, primary: &'static str, max_count: usize) -> Self {
        Self {
            fields,
            primary,
            max_count,
            min_rendered: 0,
        }
    }

    pub fn min_rendered(mut self, count: usize) -> Self {
        self.min_rendered = count;
        self
    }

    /// Entries that take part in rendering, with their slot index.
    ///
    /// Slots past `max_count` are ignored. A slot counts when it is one of the
    /// `min_rendered` leading slots (read as blank when the caller sent fewer
    /// entries) or its primary sub-field is filled.
    pub fn rendered_entries<'a>(
        &'a self,
        entries: &'a [FormData],
    ) -> impl Iterator<Item = (usize, &'a FormData)> + 'a {
        let slots = entries.len().max(self.min_rendered).min(self.max_count);
        (0..slots).filter_map(move |index| {
            let entry = entries.get(index).unwrap_or(&BLANK_ENTRY);
            (index < self.min_rendered || !entry.is_blank(self.primary)).then_some((index, entry))
        })
    }
}

static BLANK_ENTRY: FormData = FormData::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Blank,
    Today,
    Value(&'static str),
    Flag(bool),
}

/// Declarative description of one template input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: Cow<'static, str>,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_if: Option<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip)]
    pub default: FieldDefault,
}

impl FieldSpec {
    fn new(key: &'static str, label: impl Into<Cow<'static, str>>, kind: FieldKind) -> Self {
        let default = match kind {
            FieldKind::Boolean => FieldDefault::Flag(false),
            _ => FieldDefault::Blank,
        };
        Self {
            key,
            label: label.into(),
            kind,
            required: false,
            visible_if: None,
            max_length: None,
            default,
        }
    }

    pub fn text(key: &'static str, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn text_area(key: &'static str, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    pub fn date(key: &'static str, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub fn currency(key: &'static str, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, label, FieldKind::Currency)
    }

    pub fn number(key: &'static str, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub fn boolean(key: &'static str, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, label, FieldKind::Boolean)
    }

    pub fn choice(
        key: &'static str,
        label: impl Into<Cow<'static, str>>,
        options: &'static [EnumOption],
    ) -> Self {
        Self::new(key, label, FieldKind::Enum { options })
    }

    pub fn group(
        key: &'static str,
        label: impl Into<Cow<'static, str>>,
        group: RepeatedGroup,
    ) -> Self {
        Self::new(key, label, FieldKind::RepeatedGroup(group))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn visible_if(mut self, condition: Condition) -> Self {
        self.visible_if = Some(condition);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn default_today(mut self) -> Self {
        self.default = FieldDefault::Today;
        self
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = FieldDefault::Value(value);
        self
    }

    pub fn default_flag(mut self, value: bool) -> Self {
        self.default = FieldDefault::Flag(value);
        self
    }

    pub fn is_visible(&self, data: &FormData) -> bool {
        self.visible_if
            .map(|condition| condition.holds(data))
            .unwrap_or(true)
    }

    pub fn as_group(&self) -> Option<&RepeatedGroup> {
        match &self.kind {
            FieldKind::RepeatedGroup(group) => Some(group),
            _ => None,
        }
    }

    /// Value this field starts with in a fresh form.
    pub fn initial_value(&self, today: NaiveDate) -> FieldValue {
        match (&self.kind, self.default) {
            (FieldKind::RepeatedGroup(group), _) => FieldValue::Group(
                (0..group.max_count)
                    .map(|_| defaults_for(&group.fields, today))
                    .collect(),
            ),
            (_, FieldDefault::Flag(value)) => FieldValue::Flag(value),
            (_, FieldDefault::Today) => FieldValue::Text(today.format("%Y-%m-%d").to_string()),
            (_, FieldDefault::Value(value)) => FieldValue::Text(value.to_string()),
            (FieldKind::Enum { options }, FieldDefault::Blank) => FieldValue::Text(
                options
                    .first()
                    .map(|option| option.value.to_string())
                    .unwrap_or_default(),
            ),
            (_, FieldDefault::Blank) => FieldValue::Text(String::new()),
        }
    }
}

/// Safe starting values for every declared field.
pub fn defaults_for(fields: &[FieldSpec], today: NaiveDate) -> FormData {
    fields
        .iter()
        .map(|field| (field.key, field.initial_value(today)))
        .collect()
}

/// Finding produced by [`validate`]. Diagnostics are data: they never stop a
/// document from rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    MissingRequiredField { key: String },
    ExceedsMaxLength { key: String, max: usize, actual: usize },
    TooManyEntries { key: String, max: usize, actual: usize },
    UnknownOption { key: String, value: String },
    InvalidDate { key: String, value: String },
}

impl Diagnostic {
    pub fn key(&self) -> &str {
        match self {
            Diagnostic::MissingRequiredField { key }
            | Diagnostic::ExceedsMaxLength { key, .. }
            | Diagnostic::TooManyEntries { key, .. }
            | Diagnostic::UnknownOption { key, .. }
            | Diagnostic::InvalidDate { key, .. } => key,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingRequiredField { key } => write!(f, "{key}: required field is empty"),
            Diagnostic::ExceedsMaxLength { key, max, actual } => {
                write!(f, "{key}: {actual} characters exceeds the limit of {max}")
            }
            Diagnostic::TooManyEntries { key, max, actual } => {
                write!(f, "{key}: {actual} entries exceeds the limit of {max}")
            }
            Diagnostic::UnknownOption { key, value } => {
                write!(f, "{key}: '{value}' is not one of the listed options")
            }
            Diagnostic::InvalidDate { key, value } => {
                write!(f, "{key}: '{value}' is not a YYYY-MM-DD date")
            }
        }
    }
}

/// Checks `data` against `fields` and returns every finding in declaration order.
///
/// Hidden fields (whose `visible_if` is false) are skipped entirely. Boolean
/// fields are never reported missing: an unticked box is a valid answer.
pub fn validate(fields: &[FieldSpec], data: &FormData) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    validate_level(fields, data, "", &mut diagnostics);
    diagnostics
}

fn validate_level(fields: &[FieldSpec], data: &FormData, prefix: &str, out: &mut Vec<Diagnostic>) {
    for field in fields {
        if !field.is_visible(data) {
            continue;
        }
        let path = format!("{prefix}{}", field.key);
        match &field.kind {
            FieldKind::Boolean => {}
            FieldKind::RepeatedGroup(group) => {
                validate_group(field, group, data.group(field.key), &path, out)
            }
            kind => validate_scalar(field, kind, data, path, false, out),
        }
    }
}

fn validate_group(
    field: &FieldSpec,
    group: &RepeatedGroup,
    entries: &[FormData],
    path: &str,
    out: &mut Vec<Diagnostic>,
) {
    if entries.len() > group.max_count {
        out.push(Diagnostic::TooManyEntries {
            key: path.to_string(),
            max: group.max_count,
            actual: entries.len(),
        });
    }

    let mut used = 0;
    for (index, entry) in group.rendered_entries(entries) {
        used += 1;
        let prefix = format!("{path}[{index}].");
        let primary_required = field.required && index < group.min_rendered;
        for sub in &group.fields {
            if !sub.is_visible(entry) {
                continue;
            }
            let sub_path = format!("{prefix}{}", sub.key);
            match &sub.kind {
                FieldKind::Boolean => {}
                FieldKind::RepeatedGroup(inner) => {
                    validate_group(sub, inner, entry.group(sub.key), &sub_path, out)
                }
                kind => {
                    let force = primary_required && sub.key == group.primary;
                    validate_scalar(sub, kind, entry, sub_path, force, out)
                }
            }
        }
    }

    if field.required && group.min_rendered == 0 && used == 0 {
        out.push(Diagnostic::MissingRequiredField {
            key: path.to_string(),
        });
    }
}

fn validate_scalar(
    field: &FieldSpec,
    kind: &FieldKind,
    data: &FormData,
    path: String,
    force_required: bool,
    out: &mut Vec<Diagnostic>,
) {
    let Some(value) = data.filled(field.key) else {
        if field.required || force_required {
            out.push(Diagnostic::MissingRequiredField { key: path });
        }
        return;
    };

    if let Some(max) = field.max_length {
        let actual = value.chars().count();
        if actual > max {
            out.push(Diagnostic::ExceedsMaxLength {
                key: path.clone(),
                max,
                actual,
            });
        }
    }

    match kind {
        FieldKind::Date if parse_iso_date(&value).is_none() => {
            out.push(Diagnostic::InvalidDate {
                key: path,
                value: value.into_owned(),
            });
        }
        FieldKind::Enum { options } if !options.iter().any(|option| option.value == value) => {
            out.push(Diagnostic::UnknownOption {
                key: path,
                value: value.into_owned(),
            });
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REASONS: &[EnumOption] = &[
        EnumOption::new("ihtiyaç", "Kendi İhtiyacı İçin"),
        EnumOption::new("bakım", "Bakım ve Onarım"),
    ];

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).expect("valid date")
    }

    fn witness_group() -> FieldSpec {
        FieldSpec::group(
            "tanikler",
            "Tanıklar",
            RepeatedGroup::new(
                vec![
                    FieldSpec::text("ad", "Ad Soyad"),
                    FieldSpec::text("calistigiYer", "Çalıştığı Yer").required(),
                    FieldSpec::boolean("mobbing", "Mobbing"),
                ],
                "ad",
                2,
            ),
        )
    }

    #[test]
    fn defaults_cover_every_declared_field() {
        let fields = vec![
            FieldSpec::text("davaciAd", "Davacı").required(),
            FieldSpec::boolean("kidemTazminati", "Kıdem tazminatı"),
            FieldSpec::choice("tahliyeSebebi", "Sebep", REASONS),
            FieldSpec::date("davaTarihi", "Tarih").default_today(),
            FieldSpec::number("gecikmeTazminati", "Gecikme").default_value("2"),
            witness_group(),
        ];

        let data = defaults_for(&fields, today());
        for field in &fields {
            assert!(data.contains_key(field.key), "missing default for {}", field.key);
        }
        assert_eq!(data.text("davaciAd"), "");
        assert!(!data.flag("kidemTazminati"));
        assert_eq!(data.text("tahliyeSebebi"), "ihtiyaç");
        assert_eq!(data.text("davaTarihi"), "2026-02-15");
        assert_eq!(data.text("gecikmeTazminati"), "2");
        assert_eq!(data.group("tanikler").len(), 2);
        assert!(data.group("tanikler")[1].contains_key("mobbing"));
    }

    #[test]
    fn required_fields_respect_visibility() {
        let fields = vec![
            FieldSpec::boolean("kesintiVarsa", "Kesinti var"),
            FieldSpec::currency("kesintiTutari", "Kesinti Tutarı")
                .required()
                .visible_if(Condition::flag("kesintiVarsa")),
        ];

        assert!(validate(&fields, &FormData::new()).is_empty());

        let diagnostics = validate(&fields, &FormData::new().with("kesintiVarsa", true));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::MissingRequiredField {
                key: "kesintiTutari".to_string()
            }]
        );
    }

    #[test]
    fn booleans_are_never_missing() {
        let fields = vec![FieldSpec::boolean("kidemTazminati", "Kıdem").required()];
        assert!(validate(&fields, &FormData::new()).is_empty());
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let fields = vec![FieldSpec::text("davaciAd", "Davacı").required()];
        let diagnostics = validate(&fields, &FormData::new().with("davaciAd", "  \t"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].key(), "davaciAd");
    }

    #[test]
    fn reports_length_option_and_date_problems() {
        let fields = vec![
            FieldSpec::text("davaciTC", "TC").max_length(11),
            FieldSpec::choice("tahliyeSebebi", "Sebep", REASONS),
            FieldSpec::date("davaTarihi", "Tarih"),
        ];
        let data = FormData::new()
            .with("davaciTC", "123456789012")
            .with("tahliyeSebebi", "komşu")
            .with("davaTarihi", "15.02.2026");

        let diagnostics = validate(&fields, &data);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::ExceedsMaxLength {
                    key: "davaciTC".to_string(),
                    max: 11,
                    actual: 12
                },
                Diagnostic::UnknownOption {
                    key: "tahliyeSebebi".to_string(),
                    value: "komşu".to_string()
                },
                Diagnostic::InvalidDate {
                    key: "davaTarihi".to_string(),
                    value: "15.02.2026".to_string()
                },
            ]
        );
    }

    #[test]
    fn group_entries_are_checked_only_when_used() {
        let fields = vec![witness_group()];
        let data = FormData::new().with(
            "tanikler",
            vec![
                FormData::new().with("ad", "Ali Veli"),
                FormData::new().with("ad", ""),
            ],
        );

        let diagnostics = validate(&fields, &data);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::MissingRequiredField {
                key: "tanikler[0].calistigiYer".to_string()
            }]
        );
    }

    #[test]
    fn group_reports_overflow() {
        let fields = vec![witness_group()];
        let entry = FormData::new().with("ad", "A").with("calistigiYer", "B");
        let data = FormData::new().with("tanikler", vec![entry.clone(), entry.clone(), entry]);

        let diagnostics = validate(&fields, &data);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::TooManyEntries {
                key: "tanikler".to_string(),
                max: 2,
                actual: 3
            }]
        );
    }

    #[test]
    fn min_rendered_slots_require_their_primary() {
        let partners = FieldSpec::group(
            "ortaklar",
            "Ortaklar",
            RepeatedGroup::new(vec![FieldSpec::text("ad", "Ad Soyad")], "ad", 3).min_rendered(2),
        )
        .required();

        assert_eq!(
            validate(&[partners.clone()], &FormData::new()),
            vec![
                Diagnostic::MissingRequiredField {
                    key: "ortaklar[0].ad".to_string()
                },
                Diagnostic::MissingRequiredField {
                    key: "ortaklar[1].ad".to_string()
                },
            ]
        );

        let data = FormData::new().with(
            "ortaklar",
            vec![FormData::new().with("ad", "Ayşe"), FormData::new()],
        );
        assert_eq!(
            validate(&[partners], &data),
            vec![Diagnostic::MissingRequiredField {
                key: "ortaklar[1].ad".to_string()
            }]
        );
    }

    #[test]
    fn rendered_entries_skip_blank_optional_slots() {
        let group = RepeatedGroup::new(vec![FieldSpec::text("ad", "Ad")], "ad", 3).min_rendered(1);
        let entries = vec![
            FormData::new(),
            FormData::new().with("ad", " "),
            FormData::new().with("ad", "Can"),
            FormData::new().with("ad", "Fazla"),
        ];
        let indices: Vec<usize> = group.rendered_entries(&entries).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
