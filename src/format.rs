//! Number formatting
//!
//! Prices are shown with `.` as the thousands separator, the way the console
//! renders rupiah amounts.

const SEPARATOR: char = '.';

/// Group the digits of `value` with `.` every three places, e.g. `1.234.567`.
#[must_use]
pub fn custom_number_format(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Strip everything but ASCII digits from `input` and group what is left.
///
/// This is what a price input field shows while the user types: `"Rp 1,234,567"`
/// becomes `"1.234.567"`.
#[must_use]
pub fn nominal_format(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    group_digits(&digits)
}

/// Parse a nominal shown by [`nominal_format`] back into a number.
///
/// Accepts bare digits (`150000000`) or digits grouped the way
/// [`nominal_format`] groups them (`150.000.000`). Returns `None` for anything
/// else, including misplaced separators such as `1..000` or `.5`.
#[must_use]
pub fn parse_nominal(input: &str) -> Option<u64> {
    let mut groups = input.trim().split(SEPARATOR);
    let first = groups.next()?;

    if first.is_empty() || (first.len() > 3 && input.contains(SEPARATOR)) {
        return None;
    }

    let mut digits = first.to_string();

    for group in groups {
        if group.len() != 3 {
            return None;
        }

        digits.push_str(group);
    }

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

/// `Rp. 1.234.567`
#[must_use]
pub fn format_rupiah(value: u64) -> String {
    format!("Rp. {}", custom_number_format(value))
}

/// `300L`
#[must_use]
pub fn format_litres(value: u32) -> String {
    format!("{value}L")
}

fn group_digits(digits: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(SEPARATOR);
        }

        grouped.push(digit);
    }

    grouped
}
