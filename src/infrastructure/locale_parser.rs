use crate::domain::ports::AmountParser;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses amounts typed with either `,` or `.` as the decimal separator.
///
/// When both separators appear, the right-most one is the decimal separator
/// and the other one groups thousands (`1.234,56` and `1,234.56` are the same
/// amount). A single `,` is a decimal separator; a separator that repeats
/// only groups thousands. Spaces and apostrophes are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocaleAmountParser;

impl LocaleAmountParser {
    pub fn new() -> Self {
        Self
    }
}

fn normalize(input: &str) -> String {
    let compact: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\'')
        .collect();

    let commas = compact.matches(',').count();
    let dots = compact.matches('.').count();

    let (grouping, decimal) = match (commas, dots) {
        (0, 0) => return compact,
        (_, 0) if commas > 1 => (Some(','), None),
        (_, 0) => (None, Some(',')),
        (0, _) if dots > 1 => (Some('.'), None),
        (0, _) => (None, Some('.')),
        _ => {
            if compact.rfind(',') > compact.rfind('.') {
                (Some('.'), Some(','))
            } else {
                (Some(','), Some('.'))
            }
        }
    };

    compact
        .chars()
        .filter(|c| Some(*c) != grouping)
        .map(|c| if Some(c) == decimal { '.' } else { c })
        .collect()
}

fn is_plain_number(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mut parts = digits.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    !(whole.is_empty() && fraction.is_empty())
        && whole.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit())
}

impl AmountParser for LocaleAmountParser {
    fn parse_amount(&self, input: &str) -> Option<Decimal> {
        let normalized = normalize(input);
        if !is_plain_number(&normalized) {
            return None;
        }
        Decimal::from_str(&normalized).ok()
    }
}
