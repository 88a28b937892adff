//! Raw request parameters to `VenueQuery`.
//!
//! Parsing never fails: a missing or unreadable value falls back to the
//! default for its field.

use std::collections::BTreeMap;

use common::venue_query::{
    AMENITY_SEPARATOR, PARAM_AMENITIES, PARAM_MAX_GUESTS, PARAM_MAX_PRICE, PARAM_MIN_GUESTS,
    PARAM_MIN_PRICE, PARAM_SEARCH, PARAM_SORT_BY, VenueQuery, VenueSortKey,
};

pub fn parse_venue_query(params: &BTreeMap<String, String>) -> VenueQuery {
    let defaults = VenueQuery::default();
    let param = |name: &str| params.get(name).map(String::as_str);

    VenueQuery {
        search_text: param(PARAM_SEARCH).unwrap_or_default().to_string(),
        min_guests: param(PARAM_MIN_GUESTS).and_then(parse_int_prefix).unwrap_or(defaults.min_guests),
        max_guests: param(PARAM_MAX_GUESTS).and_then(parse_int_prefix).or(defaults.max_guests),
        min_price: param(PARAM_MIN_PRICE).and_then(parse_float_prefix).unwrap_or(defaults.min_price),
        max_price: param(PARAM_MAX_PRICE).and_then(parse_float_prefix).or(defaults.max_price),
        amenity_names: param(PARAM_AMENITIES).map(split_amenity_names).unwrap_or_default(),
        sort_key: param(PARAM_SORT_BY).map(VenueSortKey::from_param).unwrap_or_default(),
    }
}

pub fn split_amenity_names(raw: &str) -> Vec<String> {
    raw.split(AMENITY_SEPARATOR)
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

/// Reads the leading integer of `raw`: `" 12abc"` is 12, `"12.7"` is 12, `"abc"` is `None`.
///
/// A digit run too long for `i64` saturates to `i64::MAX` (or `i64::MIN`), so
/// an oversized bound still acts as a bound.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = digits.as_bytes().iter().take_while(|b| b.is_ascii_digit()).collect::<Vec<_>>();
    if digits.is_empty() {
        return None;
    }

    let saturated = if negative { i64::MIN } else { i64::MAX };
    let mut value: i64 = 0;
    for digit in digits {
        let digit = i64::from(digit - b'0');
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
        match next {
            Some(v) => value = v,
            None => return Some(saturated),
        }
    }
    Some(value)
}

/// Reads the leading decimal number of `raw`, with an optional fraction and exponent.
///
/// Out-of-range magnitudes come back as infinities: `"1e400"` is `f64::INFINITY`.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // the exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let mut number = s[..end].to_string();
    if number.ends_with('.') {
        number.push('0');
    }
    number.parse::<f64>().ok()
}
