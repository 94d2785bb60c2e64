use super::form::FormData;
use serde::Serialize;

/// Declarative predicate over form values.
///
/// Shared by field visibility rules and clause selection so both read the same
/// data the same way. Every variant is `'static` so catalogs can declare their
/// conditions in `static` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// Checkbox is ticked.
    Flag { key: &'static str },
    /// Text slot is non-blank.
    Filled { key: &'static str },
    /// Text slot equals the given value exactly (after trimming).
    Equals {
        key: &'static str,
        value: &'static str,
    },
    Any { of: &'static [Condition] },
    All { of: &'static [Condition] },
    Not { inner: &'static Condition },
    /// At least one repeated-group entry has a non-blank primary sub-field.
    GroupUsed {
        group: &'static str,
        primary: &'static str,
    },
}

impl Condition {
    /// Holds for every form; an empty conjunction.
    pub const ALWAYS: Condition = Condition::All { of: &[] };

    pub const fn flag(key: &'static str) -> Self {
        Self::Flag { key }
    }

    pub const fn filled(key: &'static str) -> Self {
        Self::Filled { key }
    }

    pub const fn equals(key: &'static str, value: &'static str) -> Self {
        Self::Equals { key, value }
    }

    pub const fn any(of: &'static [Condition]) -> Self {
        Self::Any { of }
    }

    pub const fn all(of: &'static [Condition]) -> Self {
        Self::All { of }
    }

    pub const fn not(inner: &'static Condition) -> Self {
        Self::Not { inner }
    }

    pub const fn group_used(group: &'static str, primary: &'static str) -> Self {
        Self::GroupUsed { group, primary }
    }

    pub fn holds(&self, data: &FormData) -> bool {
        match self {
            Self::Flag { key } => data.flag(key),
            Self::Filled { key } => !data.is_blank(key),
            Self::Equals { key, value } => data.text(key) == *value,
            Self::Any { of } => of.iter().any(|condition| condition.holds(data)),
            Self::All { of } => of.iter().all(|condition| condition.holds(data)),
            Self::Not { inner } => !inner.holds(data),
            Self::GroupUsed { group, primary } => data
                .group(group)
                .iter()
                .any(|entry| !entry.is_blank(primary)),
        }
    }

    /// Keys this condition reads, in declaration order; used to check that
    /// visibility rules only reference declared fields.
    pub fn referenced_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys(&self, keys: &mut Vec<&'static str>) {
        match self {
            Self::Flag { key } | Self::Filled { key } | Self::Equals { key, .. } => keys.push(*key),
            Self::Any { of } | Self::All { of } => {
                for condition in of.iter() {
                    condition.collect_keys(keys);
                }
            }
            Self::Not { inner } => inner.collect_keys(keys),
            Self::GroupUsed { group, .. } => keys.push(*group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTICE_FLAGS: &[Condition] = &[
        Condition::flag("ihbarSuresiTaninmamis"),
        Condition::flag("ihbarSuresiEksikTaninmis"),
    ];
    static EITHER: Condition = Condition::any(NOTICE_FLAGS);
    static NOT_EITHER: Condition = Condition::not(&EITHER);

    #[test]
    fn composite_conditions_combine_flags() {
        let data = FormData::new().with("ihbarSuresiEksikTaninmis", true);
        assert!(EITHER.holds(&data));
        assert!(!NOT_EITHER.holds(&data));
        assert!(!EITHER.holds(&FormData::new()));
    }

    #[test]
    fn equals_compares_trimmed_text() {
        let data = FormData::new().with("tahliyeSebebi", " bakım ");
        assert!(Condition::equals("tahliyeSebebi", "bakım").holds(&data));
        assert!(!Condition::equals("tahliyeSebebi", "ihtiyaç").holds(&data));
    }

    #[test]
    fn group_used_ignores_blank_entries() {
        let blank = FormData::new().with("ad", "");
        let named = FormData::new().with("ad", "Ali Veli");
        let condition = Condition::group_used("tanikler", "ad");

        assert!(!condition.holds(&FormData::new().with("tanikler", vec![blank.clone()])));
        assert!(condition.holds(&FormData::new().with("tanikler", vec![blank, named])));
    }

    #[test]
    fn referenced_keys_walks_nested_conditions() {
        assert_eq!(
            NOT_EITHER.referenced_keys(),
            vec!["ihbarSuresiTaninmamis", "ihbarSuresiEksikTaninmis"]
        );
    }
}
