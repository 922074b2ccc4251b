use std::thread;

use crate::{ALTERNATE_FORMATS, AlternateFormats};

use super::{
    init_logging,
    metadata_builder::{TestFormat, collection, metadata, single_group},
};

fn alternate_formats_for(blob: &[u8]) -> AlternateFormats {
    init_logging();
    AlternateFormats::from_bytes(blob).expect("Metadata should be valid")
}

#[test]
fn renders_captured_groups_into_template() {
    let alternate_formats = alternate_formats_for(&single_group(
        7,
        &[TestFormat::new(r"(\d{3})(\d{2})(\d{4})", "$1-$2-$3")],
    ));
    assert_eq!(
        alternate_formats.find_alternate_format(7, "123457890").as_deref(),
        Some("123-45-7890")
    );
    // Wrong length, the pattern must match the whole number.
    assert_eq!(alternate_formats.find_alternate_format(7, "1234578901"), None);
    assert_eq!(alternate_formats.find_alternate_format(7, "12345789"), None);
}

#[test]
fn variable_length_and_optional_groups() {
    let alternate_formats = alternate_formats_for(&single_group(
        43,
        &[TestFormat::new(r"(5\d)(\d{2})?(\d{4,6})", "$1 $2 $3")],
    ));
    assert_eq!(
        alternate_formats.find_alternate_format(43, "50123456").as_deref(),
        Some("50 12 3456")
    );
    // Four digits after the prefix only fit the last group.
    assert_eq!(
        alternate_formats.find_alternate_format(43, "501234").as_deref(),
        Some("50  1234")
    );
}

#[test]
fn earlier_rule_wins() {
    let first = TestFormat::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3");
    let second = TestFormat::new(r"(\d{3})(\d{3})(\d{4})", "$1-$2-$3");

    let alternate_formats = alternate_formats_for(&single_group(44, &[first.clone(), second.clone()]));
    let found = alternate_formats.find_alternate_format_match(44, "2012345678").unwrap();
    assert_eq!(found.rule_index, 0);
    assert_eq!(found.formatted, "20 1234 5678");
    assert_eq!(found.rule.format(), "$1 $2 $3");

    let alternate_formats = alternate_formats_for(&single_group(44, &[second, first]));
    let found = alternate_formats.find_alternate_format_match(44, "2012345678").unwrap();
    assert_eq!(found.rule_index, 0);
    assert_eq!(found.formatted, "201-234-5678");
}

#[test]
fn leading_digits_filter_is_never_bypassed() {
    let permissive = TestFormat::new(r"(\d{4})(\d{4})", "$1 $2").leading_digits("9");
    let fallback = TestFormat::new(r"(\d{2})(\d{6})", "$1 $2");

    let alternate_formats = alternate_formats_for(&single_group(41, &[permissive.clone()]));
    assert_eq!(alternate_formats.find_alternate_format(41, "12345678"), None);
    assert_eq!(
        alternate_formats.find_alternate_format(41, "91234567").as_deref(),
        Some("9123 4567")
    );

    let alternate_formats = alternate_formats_for(&single_group(41, &[permissive, fallback]));
    let found = alternate_formats.find_alternate_format_match(41, "12345678").unwrap();
    assert_eq!(found.rule_index, 1);
    assert_eq!(found.formatted, "12 345678");
}

#[test]
fn any_leading_digits_pattern_is_enough() {
    let alternate_formats = alternate_formats_for(&single_group(
        41,
        &[TestFormat::new(r"(\d{2})(\d{6})", "$1/$2").leading_digits("7").leading_digits("8")],
    ));
    assert_eq!(alternate_formats.find_alternate_format(41, "71234567").as_deref(), Some("71/234567"));
    assert_eq!(alternate_formats.find_alternate_format(41, "81234567").as_deref(), Some("81/234567"));
    assert_eq!(alternate_formats.find_alternate_format(41, "91234567"), None);
}

#[test]
fn number_shorter_than_leading_digits_does_not_match() {
    let alternate_formats = alternate_formats_for(&single_group(
        41,
        &[TestFormat::new(r"(\d)(\d)", "$1 $2").leading_digits("123")],
    ));
    assert_eq!(alternate_formats.find_alternate_format(41, "12"), None);
}

#[test]
fn leading_digits_only_anchor_at_start() {
    let alternate_formats = alternate_formats_for(&single_group(
        41,
        &[TestFormat::new(r"(\d{3})(\d{3})", "$1 $2").leading_digits("45")],
    ));
    assert_eq!(alternate_formats.find_alternate_format(41, "145678"), None);
    assert_eq!(alternate_formats.find_alternate_format(41, "456789").as_deref(), Some("456 789"));
}

#[test]
fn unknown_calling_code_and_no_match_look_the_same() {
    let alternate_formats = alternate_formats_for(&collection(&[
        metadata(49, &[TestFormat::new(r"(\d{2})(\d{3})(\d{3,4})", "$1/$2 $3")]),
        metadata(86, &[]),
    ]));
    assert_eq!(alternate_formats.find_alternate_format(49, "1"), None);
    assert_eq!(alternate_formats.find_alternate_format(86, "13812345678"), None);
    assert_eq!(alternate_formats.find_alternate_format(1, "6502530000"), None);
    assert!(alternate_formats.find_alternate_format_match(1, "6502530000").is_none());
    assert!(alternate_formats.find_all_alternate_formats(1, "6502530000").is_empty());
}

#[test]
fn malformed_input_simply_does_not_match() {
    let alternate_formats = alternate_formats_for(&single_group(
        49,
        &[TestFormat::new(r"(\d{2})(\d{3})(\d{3,4})", "$1/$2 $3")],
    ));
    assert_eq!(alternate_formats.find_alternate_format(49, ""), None);
    assert_eq!(alternate_formats.find_alternate_format(49, "30-123-4567"), None);
    assert_eq!(alternate_formats.find_alternate_format(49, "+49301234567"), None);
    assert_eq!(alternate_formats.find_alternate_format(49, "30123456a"), None);
}

#[test]
fn all_matching_formats_in_priority_order() {
    let alternate_formats = alternate_formats_for(&single_group(
        43,
        &[
            TestFormat::new(r"(5)(\d{3,12})", "$1 $2").leading_digits("5[079]"),
            TestFormat::new(r"(50)(\d{2})(\d{2})(\d{2,4})", "$1 $2 $3 $4").leading_digits("50"),
            TestFormat::new(r"(6\d)(\d{6})", "$1 $2"),
            TestFormat::new(r"(5\d)(\d{6,7})", "$1 $2").leading_digits("5[079]"),
        ],
    ));
    let all = alternate_formats.find_all_alternate_formats(43, "50123456");
    let rendered = all
        .iter()
        .map(|found| (found.rule_index, found.formatted.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(rendered, vec![(0, "5 0123456"), (1, "50 12 34 56"), (3, "50 123456")]);
    assert_eq!(alternate_formats.find_alternate_format_match(43, "50123456").as_ref(), all.first());
}

#[test]
fn repeated_calls_give_same_result() {
    let alternate_formats = alternate_formats_for(&single_group(
        81,
        &[TestFormat::new(r"(\d{3})(\d{2})(\d{4})", "$1-$2-$3").leading_digits("(?:12|57|99)0")],
    ));
    let first = alternate_formats.find_alternate_format_match(81, "120123456");
    for _ in 0..10 {
        assert_eq!(alternate_formats.find_alternate_format_match(81, "120123456"), first);
    }
    assert_eq!(first.unwrap().formatted, "120-12-3456");
}

#[test]
fn formats_with_calling_code() {
    let alternate_formats = alternate_formats_for(&single_group(
        49,
        &[TestFormat::new(r"(\d{2})(\d{3})(\d{3,4})", "$1/$2 $3").leading_digits("3[02]|40|[68]9")],
    ));
    assert_eq!(
        alternate_formats.format_with_calling_code(49, "301234567").as_deref(),
        Some("+49 30/123 4567")
    );
    assert_eq!(alternate_formats.format_with_calling_code(49, "151234567"), None);
    assert_eq!(alternate_formats.format_with_calling_code(1, "301234567"), None);
}

#[test]
fn compiled_in_metadata_formats() {
    init_logging();
    let cases = [
        (49, "301234567", "30/123 4567"),
        (49, "3012345678", "30/12 34 56 78"),
        (49, "15123456789", "1512 34 567 89"),
        (44, "2012345678", "201-234-5678"),
        (81, "120123456", "120-12-3456"),
        (61, "1300123456", "1300 12 34 56"),
        (61, "212345678", "2 12345678"),
        (55, "1123456789", "11 23456789"),
        (43, "5012345678", "5 012345678"),
    ];
    for (calling_code, number, expected) in cases {
        assert_eq!(
            ALTERNATE_FORMATS.find_alternate_format(calling_code, number).as_deref(),
            Some(expected),
            "+{calling_code} {number}"
        );
    }

    let found = ALTERNATE_FORMATS.find_alternate_format_match(49, "3012345678").unwrap();
    assert_eq!(found.rule_index, 1);
    assert_eq!(found.rule.pattern(), r"(\d{2})(\d{2})(\d{2})(\d{2})(\d{2})");

    assert_eq!(ALTERNATE_FORMATS.find_alternate_format(55, "0123456789"), None);
    assert_eq!(ALTERNATE_FORMATS.find_alternate_format(1, "6502530000"), None);
}

#[test]
fn compiled_in_metadata_is_shared_between_threads() {
    init_logging();
    let results = thread::scope(|scope| {
        let handles = (0..8)
            .map(|_| scope.spawn(|| ALTERNATE_FORMATS.find_alternate_format(49, "301234567")))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });
    assert!(results.iter().all(|result| result.as_deref() == Some("30/123 4567")));
}
