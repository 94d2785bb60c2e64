use super::form::FormData;
use super::format::{format_currency, format_date, to_ordinal};

/// Stands in for any prose slot whose value is missing.
pub const PLACEHOLDER: &str = "___________________";

/// Read-only view over form values that yields display-ready strings.
///
/// Every accessor is total: blank input becomes [`PLACEHOLDER`] (or the given
/// fallback), never an error.
#[derive(Debug, Clone, Copy)]
pub struct Slots<'a> {
    data: &'a FormData,
}

impl<'a> Slots<'a> {
    pub fn new(data: &'a FormData) -> Self {
        Self { data }
    }

    pub fn text(&self, key: &str) -> String {
        self.text_or(key, PLACEHOLDER)
    }

    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        match self.data.filled(key) {
            Some(value) => value.into_owned(),
            None => fallback.to_string(),
        }
    }

    /// Long Turkish date; an unparseable date reads as missing.
    pub fn date(&self, key: &str) -> String {
        self.date_or(key, PLACEHOLDER)
    }

    pub fn date_or(&self, key: &str, fallback: &str) -> String {
        let formatted = format_date(&self.data.text(key));
        if formatted.is_empty() {
            fallback.to_string()
        } else {
            formatted
        }
    }

    pub fn money(&self, key: &str) -> String {
        match self.data.filled(key) {
            Some(value) => format_currency(&value),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn ordinal_or(&self, key: &str, fallback: &str) -> String {
        match self.data.filled(key) {
            Some(value) => to_ordinal(&value),
            None => fallback.to_string(),
        }
    }

    pub fn optional(&self, key: &str) -> Option<String> {
        self.data.filled(key).map(|value| value.into_owned())
    }

    pub fn is_blank(&self, key: &str) -> bool {
        self.data.is_blank(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_slots_become_placeholder() {
        let data = FormData::new().with("davaciAd", " ");
        let slots = Slots::new(&data);
        assert_eq!(slots.text("davaciAd"), PLACEHOLDER);
        assert_eq!(slots.date("tarih"), PLACEHOLDER);
        assert_eq!(slots.money("aylikKiraBedeli"), PLACEHOLDER);
        assert_eq!(slots.optional("davaciAd"), None);
    }

    #[test]
    fn filled_slots_are_formatted() {
        let data = FormData::new()
            .with("tarih", "2026-02-15")
            .with("aylikKiraBedeli", "15000")
            .with("kiraOdemeGunu", "5");
        let slots = Slots::new(&data);
        assert_eq!(slots.date("tarih"), "15 Şubat 2026");
        assert_eq!(slots.money("aylikKiraBedeli"), "15.000,00 ₺");
        assert_eq!(slots.ordinal_or("kiraOdemeGunu", "Yirminci"), "Beşinci");
        assert_eq!(slots.ordinal_or("yok", "Yirminci"), "Yirminci");
    }

    #[test]
    fn invalid_dates_fall_back() {
        let data = FormData::new().with("tarih", "dün");
        assert_eq!(Slots::new(&data).date_or("tarih", "15 (on beş) gün içinde"), "15 (on beş) gün içinde");
    }
}
