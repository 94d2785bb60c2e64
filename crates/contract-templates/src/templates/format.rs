//! Turkish value formatters shared by every template renderer.
//!
//! The output shapes are fixed by these functions rather than by a platform
//! locale, so a rendered document is byte-identical on every host.

use chrono::{Datelike, NaiveDate};

/// Returned whenever a currency value is blank or cannot be read as a number.
pub const CURRENCY_FALLBACK: &str = "0,00 ₺";

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

const ORDINALS: [&str; 31] = [
    "Birinci",
    "İkinci",
    "Üçüncü",
    "Dördüncü",
    "Beşinci",
    "Altıncı",
    "Yedinci",
    "Sekizinci",
    "Dokuzuncu",
    "Onuncu",
    "On Birinci",
    "On İkinci",
    "On Üçüncü",
    "On Dördüncü",
    "On Beşinci",
    "On Altıncı",
    "On Yedinci",
    "On Sekizinci",
    "On Dokuzuncu",
    "Yirminci",
    "Yirmi Birinci",
    "Yirmi İkinci",
    "Yirmi Üçüncü",
    "Yirmi Dördüncü",
    "Yirmi Beşinci",
    "Yirmi Altıncı",
    "Yirmi Yedinci",
    "Yirmi Sekizinci",
    "Yirmi Dokuzuncu",
    "Otuzuncu",
    "Otuz Birinci",
];

/// Decimal amount split into its digit strings, before rounding.
#[derive(Debug, PartialEq, Eq)]
struct Amount {
    negative: bool,
    integer: String,
    fraction: String,
}

/// Formats a raw, user-typed amount as Turkish lira: `1.234.567,89 ₺`.
///
/// Everything except digits, `,`, `.` and `-` is dropped, the first comma is
/// read as the decimal separator and the longest numeric prefix is used.
/// Unreadable input falls back to [`CURRENCY_FALLBACK`].
pub fn format_currency(raw: &str) -> String {
    match parse_amount(raw) {
        Some(amount) => render_amount(amount),
        None => CURRENCY_FALLBACK.to_string(),
    }
}

fn parse_amount(raw: &str) -> Option<Amount> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.' | '-'))
        .collect();
    let normalized = cleaned.replacen(',', ".", 1);

    let mut chars = normalized.chars().peekable();
    let negative = chars.next_if_eq(&'-').is_some();

    let mut integer = String::new();
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        integer.push(digit);
    }

    let mut fraction = String::new();
    if chars.next_if_eq(&'.').is_some() {
        while let Some(digit) = chars.next_if(char::is_ascii_digit) {
            fraction.push(digit);
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    Some(Amount {
        negative,
        integer,
        fraction,
    })
}

fn render_amount(amount: Amount) -> String {
    let Amount {
        negative,
        integer,
        fraction,
    } = amount;

    // Work in hundredths on the digit string so half-up rounding is exact.
    let mut digits: Vec<u8> = integer.bytes().map(|b| b - b'0').collect();
    let mut cents = fraction.bytes().map(|b| b - b'0');
    digits.push(cents.next().unwrap_or(0));
    digits.push(cents.next().unwrap_or(0));
    let round_up = cents.next().map(|digit| digit >= 5).unwrap_or(false);

    if round_up {
        let mut index = digits.len();
        loop {
            if index == 0 {
                digits.insert(0, 1);
                break;
            }
            index -= 1;
            if digits[index] == 9 {
                digits[index] = 0;
            } else {
                digits[index] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let (whole, hundredths) = digits.split_at(split);
    let first_significant = whole
        .iter()
        .position(|digit| *digit != 0)
        .unwrap_or(whole.len());
    let whole = &whole[first_significant..];

    let is_zero = whole.is_empty() && hundredths.iter().all(|digit| *digit == 0);
    let sign = if negative && !is_zero { "-" } else { "" };

    let grouped = if whole.is_empty() {
        "0".to_string()
    } else {
        group_thousands(whole)
    };

    format!(
        "{sign}{grouped},{}{} ₺",
        hundredths[0], hundredths[1]
    )
}

fn group_thousands(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Formats an ISO calendar date (`2026-02-15`) as `15 Şubat 2026`.
///
/// Blank or unparseable input yields an empty string. A full ISO datetime is
/// accepted and its date part used.
pub fn format_date(raw: &str) -> String {
    parse_iso_date(raw)
        .map(long_date)
        .unwrap_or_default()
}

pub(crate) fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_part = match trimmed.split_once('T') {
        Some((date, _time)) => date,
        None => trimmed,
    };

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Long Turkish form of an already parsed date.
pub fn long_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {:04}", date.day(), month, date.year())
}

/// Turkish ordinal word for days of the month: `17` → `On Yedinci`.
///
/// The leading integer of the input is used; input without one is returned
/// unchanged. Integers outside `1..=31` render as `"{n}."`.
pub fn to_ordinal(raw: &str) -> String {
    match leading_integer(raw) {
        Some(value) => ordinal_for(value),
        None => raw.to_string(),
    }
}

/// Ordinal word for an integer already in hand.
pub fn ordinal_for(value: i64) -> String {
    if (1..=31).contains(&value) {
        ORDINALS[(value - 1) as usize].to_string()
    } else {
        format!("{value}.")
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    // Saturate absurdly long inputs instead of failing; they are out of range anyway.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Upper-cases with Turkish dotted/dotless `i` rules (`i` → `İ`, `ı` → `I`).
pub fn to_upper_tr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            other => out.extend(other.to_uppercase()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_pads_cents() {
        assert_eq!(format_currency("1234567.891"), "1.234.567,89 ₺");
        assert_eq!(format_currency("1500"), "1.500,00 ₺");
        assert_eq!(format_currency("999"), "999,00 ₺");
        assert_eq!(format_currency("12,5"), "12,50 ₺");
        assert_eq!(format_currency(".5"), "0,50 ₺");
    }

    #[test]
    fn currency_falls_back_for_blank_or_garbage() {
        assert_eq!(format_currency(""), CURRENCY_FALLBACK);
        assert_eq!(format_currency("abc"), CURRENCY_FALLBACK);
        assert_eq!(format_currency("-"), CURRENCY_FALLBACK);
        assert_eq!(format_currency("--5"), CURRENCY_FALLBACK);
    }

    #[test]
    fn currency_strips_symbols_before_parsing() {
        assert_eq!(format_currency("₺ 2500 TL"), "2.500,00 ₺");
        assert_eq!(format_currency("12-3"), "12,00 ₺");
    }

    #[test]
    fn currency_reads_first_comma_as_decimal_separator() {
        assert_eq!(format_currency("1250,75"), "1.250,75 ₺");
        // Without a comma the dot is the decimal point.
        assert_eq!(format_currency("15.000"), "15,00 ₺");
    }

    #[test]
    fn currency_rounds_half_up_on_decimal_digits() {
        assert_eq!(format_currency("1.005"), "1,01 ₺");
        assert_eq!(format_currency("2.675"), "2,68 ₺");
        assert_eq!(format_currency("2.674"), "2,67 ₺");
        assert_eq!(format_currency("999.995"), "1.000,00 ₺");
        assert_eq!(format_currency("99.999"), "100,00 ₺");
    }

    #[test]
    fn currency_keeps_negative_sign() {
        assert_eq!(format_currency("-1234.5"), "-1.234,50 ₺");
        assert_eq!(format_currency("-1.005"), "-1,01 ₺");
        assert_eq!(format_currency("-0.001"), "0,00 ₺");
    }

    #[test]
    fn date_uses_turkish_month_names() {
        assert_eq!(format_date("2026-02-15"), "15 Şubat 2026");
        assert_eq!(format_date("2025-08-01"), "1 Ağustos 2025");
        assert_eq!(format_date("2024-12-31T09:30:00Z"), "31 Aralık 2024");
    }

    #[test]
    fn date_blank_or_invalid_is_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
        assert_eq!(format_date("15.02.2026"), "");
        assert_eq!(format_date("2026-02-30"), "");
    }

    #[test]
    fn ordinal_lookup_covers_days_of_month() {
        assert_eq!(to_ordinal("1"), "Birinci");
        assert_eq!(to_ordinal("17"), "On Yedinci");
        assert_eq!(to_ordinal("20"), "Yirminci");
        assert_eq!(to_ordinal("31"), "Otuz Birinci");
        assert_eq!(ordinal_for(17), "On Yedinci");
    }

    #[test]
    fn ordinal_out_of_range_gets_trailing_period() {
        assert_eq!(to_ordinal("32"), "32.");
        assert_eq!(to_ordinal("0"), "0.");
        assert_eq!(to_ordinal("-4"), "-4.");
        assert_eq!(ordinal_for(100), "100.");
    }

    #[test]
    fn upper_case_follows_turkish_letters() {
        assert_eq!(to_upper_tr("istanbul"), "İSTANBUL");
        assert_eq!(to_upper_tr("Çanakkale ılıca"), "ÇANAKKALE ILICA");
    }

    #[test]
    fn ordinal_passes_through_non_numbers() {
        assert_eq!(to_ordinal("abc"), "abc");
        assert_eq!(to_ordinal(""), "");
        assert_eq!(to_ordinal(" 5"), "Beşinci");
        assert_eq!(to_ordinal("3.7"), "Üçüncü");
    }
}
