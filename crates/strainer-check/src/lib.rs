//! # strainer-check
//!
//! Stateless format predicates for the strainer validation engine.
//! Every predicate is a pure function over a string; the check factories
//! produce reusable closures for element-wise slice validation.

use std::net::Ipv4Addr;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

/// Check applied to a single integer element.
pub type IntCheck = Box<dyn Fn(i64) -> bool + Send + Sync>;

/// Check applied to a single string element.
pub type StrCheck = Box<dyn Fn(&str) -> bool + Send + Sync>;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^1[3-9]\d{9}$").expect("phone pattern"))
}

fn dot_int_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+(,[0-9]+)*$").expect("dot-int pattern"))
}

fn date_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape pattern"))
}

fn datetime_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("datetime shape pattern")
    })
}

/// Checks whether the string is an email address.
pub fn email(val: &str) -> bool {
    email_re().is_match(val)
}

/// Checks whether the string is a usable URL: any fragment is stripped,
/// the remainder must parse as an absolute URL with a scheme.
pub fn url(val: &str) -> bool {
    let val = match val.find('#') {
        Some(i) => &val[..i],
        None => val,
    };
    if val.is_empty() {
        return false;
    }
    match url::Url::parse(val) {
        Ok(parsed) => !parsed.scheme().is_empty(),
        Err(_) => false,
    }
}

/// Checks whether the string is a mobile phone number.
pub fn phone(val: &str) -> bool {
    phone_re().is_match(val)
}

/// Checks whether the string is a dotted-quad IPv4 address.
pub fn ipv4(val: &str) -> bool {
    val.parse::<Ipv4Addr>().is_ok()
}

/// Checks whether the string is a calendar date, format `2006-01-02`.
/// Month and day must be two digits.
pub fn date(val: &str) -> bool {
    date_shape_re().is_match(val) && NaiveDate::parse_from_str(val, "%Y-%m-%d").is_ok()
}

/// Checks whether the string is a timestamp, format `2006-01-02 15:04:05`.
/// All fields must be two digits.
pub fn datetime(val: &str) -> bool {
    datetime_shape_re().is_match(val)
        && NaiveDateTime::parse_from_str(val, "%Y-%m-%d %H:%M:%S").is_ok()
}

/// Checks whether the string is a comma-joined sequence of unsigned
/// integer tokens, e.g. `1,2,3`.
pub fn dot_int(val: &str) -> bool {
    dot_int_re().is_match(val)
}

/// Check factory: integer within `[min, max]`.
pub fn between(min: i64, max: i64) -> IntCheck {
    Box::new(move |val| val >= min && val <= max)
}

/// Check factory: integer member of `enums`.
pub fn enum_int(enums: Vec<i64>) -> IntCheck {
    Box::new(move |val| enums.contains(&val))
}

/// Check factory: string member of `enums`.
pub fn enum_string(enums: Vec<String>) -> StrCheck {
    Box::new(move |val| enums.iter().any(|e| e == val))
}

/// Check factory: character count within `[min, max]`, counting Unicode
/// scalar values rather than bytes.
pub fn length(min: usize, max: usize) -> StrCheck {
    Box::new(move |val| {
        let l = val.chars().count();
        l >= min && l <= max
    })
}

/// Check factory: string matches `pattern`. An unparseable pattern yields
/// a check that rejects every input instead of panicking.
pub fn regex(pattern: &str) -> StrCheck {
    match Regex::new(pattern) {
        Ok(re) => Box::new(move |val| re.is_match(val)),
        Err(_) => Box::new(|_| false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(email("liumurong1@tal.com"));
        assert!(email("user.name+tag@example.co.uk"));
        assert!(!email("@tal.com"));
        assert!(!email("no-at-sign"));
        assert!(!email("user@"));
    }

    #[test]
    fn test_url() {
        assert!(url("https://baidu.com"));
        assert!(url("http://www.baidu.com"));
        assert!(url("https://www.baidu.com?x=3"));
        assert!(url("https://www.baidu.com#de"));
        assert!(!url(""));
        assert!(!url("#only-fragment"));
        assert!(!url("baidu.com"));
    }

    #[test]
    fn test_phone() {
        assert!(phone("15810562936"));
        assert!(!phone("12810562936"));
        assert!(!phone("1581056293"));
        assert!(!phone("158105629367"));
    }

    #[test]
    fn test_ipv4() {
        assert!(ipv4("127.127.127.127"));
        assert!(ipv4("0.0.0.0"));
        assert!(!ipv4("127.333.1.1"));
        assert!(!ipv4("::1"));
        assert!(!ipv4("1.2.3"));
    }

    #[test]
    fn test_date() {
        assert!(date("2021-10-11"));
        assert!(!date("2021-1-11"));
        assert!(!date("2021-13-11"));
        assert!(!date("2021-02-30"));
    }

    #[test]
    fn test_datetime() {
        assert!(datetime("2021-10-11 15:33:21"));
        assert!(!datetime("2021-1-11 15:33:21"));
        assert!(!datetime("2021-10-11 25:33:21"));
        assert!(!datetime("2021-10-11"));
    }

    #[test]
    fn test_dot_int() {
        assert!(dot_int("1,2,3,4"));
        assert!(dot_int("7"));
        assert!(!dot_int("1,2,"));
        assert!(!dot_int(",1"));
        assert!(!dot_int("1,a,3"));
        assert!(!dot_int(""));
    }

    #[test]
    fn test_between() {
        let check = between(1, 100);
        assert!(check(1));
        assert!(check(100));
        assert!(!check(0));
        assert!(!check(101));
    }

    #[test]
    fn test_enum_checks() {
        let ints = enum_int(vec![1, 2, 3, 4]);
        assert!(ints(3));
        assert!(!ints(5));

        let strs = enum_string(vec!["man".to_string(), "feman".to_string()]);
        assert!(strs("man"));
        assert!(!strs("other"));
    }

    #[test]
    fn test_length_counts_chars() {
        let check = length(4, 6);
        assert!(check("字符长度5"));
        assert!(!check("abc"));
        assert!(!check("abcdefg"));
    }

    #[test]
    fn test_regex_factory() {
        let digits = regex("^[0-9]*$");
        assert!(digits("034433332"));
        assert!(!digits("03443a332"));

        // A broken pattern degrades to reject-everything.
        let broken = regex("([unclosed");
        assert!(!broken("anything"));
        assert!(!broken(""));
    }
}
