//! Test harness for fmtree integration scenarios.
//!
//! The engine deliberately does not ship an English-number renderer; it is
//! a caller-supplied pure function plugged in as a custom format code.
//! This crate provides that renderer plus registry helpers for the
//! scenario tests.

use fmtree_core::{RenderError, RenderResult, Value};
use fmtree_registry::{Registry, RegistryBuilder};

/// Spell an integer as its English cardinal form: `1` is "one", `12` is
/// "twelve", `-40` is "negative forty".
pub fn english_cardinal(n: i64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    let mut out = String::new();
    if n < 0 {
        out.push_str("negative ");
    }

    // Base-1000 groups, least significant first.
    let mut remaining = n.unsigned_abs();
    let mut groups = Vec::new();
    while remaining > 0 {
        groups.push((remaining % 1000) as u16);
        remaining /= 1000;
    }

    const SCALES: [&str; 7] = [
        "",
        " thousand",
        " million",
        " billion",
        " trillion",
        " quadrillion",
        " quintillion",
    ];

    let mut first = true;
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if !first {
            out.push(' ');
        }
        spell_under_thousand(group, &mut out);
        out.push_str(SCALES[scale]);
        first = false;
    }
    out
}

fn spell_under_thousand(n: u16, out: &mut String) {
    const ONES: [&str; 20] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
        "nineteen",
    ];
    const TENS: [&str; 10] = [
        "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ];

    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds > 0 {
        out.push_str(ONES[hundreds as usize]);
        out.push_str(" hundred");
        if rest > 0 {
            out.push(' ');
        }
    }
    if rest >= 20 {
        out.push_str(TENS[(rest / 10) as usize]);
        if rest % 10 > 0 {
            out.push('-');
            out.push_str(ONES[(rest % 10) as usize]);
        }
    } else if rest > 0 {
        out.push_str(ONES[rest as usize]);
    }
}

/// The English renderer as a registry-compatible function: integers only.
pub fn english_renderer(value: &Value) -> RenderResult<String> {
    match value {
        Value::Int(i) => Ok(english_cardinal(*i)),
        other => Err(RenderError::type_mismatch("Int", other.type_name())),
    }
}

/// Registry used by the scenario tests: built-ins plus `english`.
pub fn scenario_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .register("english", english_renderer)
        .expect("english is not reserved");
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(english_cardinal(0), "zero");
        assert_eq!(english_cardinal(1), "one");
        assert_eq!(english_cardinal(12), "twelve");
        assert_eq!(english_cardinal(19), "nineteen");
    }

    #[test]
    fn test_tens() {
        assert_eq!(english_cardinal(20), "twenty");
        assert_eq!(english_cardinal(42), "forty-two");
        assert_eq!(english_cardinal(99), "ninety-nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(english_cardinal(100), "one hundred");
        assert_eq!(english_cardinal(101), "one hundred one");
        assert_eq!(english_cardinal(999), "nine hundred ninety-nine");
    }

    #[test]
    fn test_scales() {
        assert_eq!(english_cardinal(1_000), "one thousand");
        assert_eq!(english_cardinal(1_000_000), "one million");
        assert_eq!(
            english_cardinal(1_002_003),
            "one million two thousand three"
        );
        assert_eq!(
            english_cardinal(2_147_483_647),
            "two billion one hundred forty-seven million \
             four hundred eighty-three thousand six hundred forty-seven"
        );
    }

    #[test]
    fn test_zero_groups_skipped() {
        assert_eq!(english_cardinal(1_000_001), "one million one");
    }

    #[test]
    fn test_negative() {
        assert_eq!(english_cardinal(-7), "negative seven");
        assert_eq!(english_cardinal(-1_000), "negative one thousand");
    }

    #[test]
    fn test_i64_extremes() {
        assert_eq!(
            english_cardinal(i64::MAX),
            "nine quintillion two hundred twenty-three quadrillion \
             three hundred seventy-two trillion thirty-six billion \
             eight hundred fifty-four million seven hundred \
             seventy-five thousand eight hundred seven"
        );
        assert_eq!(
            english_cardinal(i64::MIN),
            "negative nine quintillion two hundred twenty-three quadrillion \
             three hundred seventy-two trillion thirty-six billion \
             eight hundred fifty-four million seven hundred \
             seventy-five thousand eight hundred eight"
        );
    }
}
