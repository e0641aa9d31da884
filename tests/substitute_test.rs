// substitute_test.rs - Integration tests for global substitution.

use regroup::prelude::*;

// === length changes across multiple matches ===

#[test]
fn multiple_substitutions_getting_longer() {
    let re = Pattern::new(r"short").unwrap();
    let result = re.substitute("short blah short", |_, _| "longer".to_string());
    assert_eq!(result, "longer blah longer");
}

#[test]
fn multiple_substitutions_getting_shorter() {
    let re = Pattern::new(r"longer").unwrap();
    let result = re.substitute("longer blah longer", |_, _| "short".to_string());
    assert_eq!(result, "short blah short");
}

#[test]
fn zero_matches_returns_original() {
    let re = Pattern::new(r"\d+").unwrap();
    let result = re.substitute("no digits in here", |_, _| "!".to_string());
    assert_eq!(result, "no digits in here");
}

// === the callback's view of each match ===

#[test]
fn using_the_main_match() {
    let re = Pattern::new(r"\d+").unwrap();
    let result = re.substitute("40 and 20", |_, m| {
        let n = lenient_int(m.value());
        format!("half of {} is {}", n, n / 2)
    });
    assert_eq!(result, "half of 40 is 20 and half of 20 is 10");
}

#[test]
fn using_capture_groups() {
    let re = Pattern::new(r"(\d+) and (\d+)").unwrap();
    let result = re.substitute("40 and 20", |_, m| {
        let n1 = lenient_int(m.get(1).unwrap().as_str());
        let n2 = lenient_int(m.get(2).unwrap().as_str());
        format!("half of {} is {} and twice {} is {}", n1, n1 / 2, n2, n2 * 2)
    });
    assert_eq!(result, "half of 40 is 20 and twice 20 is 40");
}

#[test]
fn using_named_capture_groups() {
    let re = Pattern::new(r"(?<key>\w+)=(?<value>\w+)").unwrap();
    let result = re.substitute("a=1 b=2", |_, m| {
        format!(
            "{}:{}",
            m.name("key").unwrap().as_str(),
            m.name("value").unwrap().as_str()
        )
    });
    assert_eq!(result, "a:1 b:2");
}

#[test]
fn capture_ranges_reference_the_original_text() {
    let re = Pattern::new(r"\d+").unwrap();
    let mut ranges = Vec::new();
    re.substitute("40 and 20", |_, m| {
        ranges.push(m.range());
        "replaced-with-something-long".to_string()
    });
    // Rightmost first, and both ranges are offsets into the original,
    // pre-substitution text.
    assert_eq!(ranges, vec![7..9, 0..2]);
}

// === error propagation ===

#[test]
fn callback_error_propagates_unmodified() {
    #[derive(Debug, PartialEq)]
    struct BadNumber(String);

    let re = Pattern::new(r"\d+").unwrap();
    let result: Result<String, BadNumber> =
        re.try_substitute("40 and oops 20", |_, m| match m.value().parse::<i64>() {
            Ok(n) if n < 30 => Err(BadNumber(m.value().to_string())),
            _ => Ok("fine".to_string()),
        });
    assert_eq!(result.unwrap_err(), BadNumber("20".to_string()));
}

#[test]
fn try_substitute_success_path() {
    let re = Pattern::new(r"\d+").unwrap();
    let result: Result<String, String> =
        re.try_substitute("1 and 2", |_, m| Ok(format!("[{}]", m.value())));
    assert_eq!(result.unwrap(), "[1] and [2]");
}

// === one-shot convenience ===

#[test]
fn substitute_free_function() {
    let result = substitute(r"\d+", "40 and 20", |_, m| {
        let n = lenient_int(m.value());
        format!("{}", n * 10)
    })
    .unwrap();
    assert_eq!(result, "400 and 200");
}

#[test]
fn substitute_free_function_bad_pattern() {
    let err = substitute(r"[", "text", |_, _| String::new()).unwrap_err();
    assert!(matches!(err, Error::Pattern(_)));
}

// === interplay with options ===

#[test]
fn case_insensitive_substitution() {
    let re = Pattern::builder(r"cat").case_insensitive(true).build().unwrap();
    let result = re.substitute("Cat cat CAT", |_, _| "dog".to_string());
    assert_eq!(result, "dog dog dog");
}
