//! Tests for the text cleanup and tokenization helpers.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]

use test_case::test_case;
use timetable_support::text::{
    double_or_zero, eq_ignore_case, first_item, int_or_zero, is_any_of, is_any_part_of, is_blank,
    is_number, is_zeroes_or_blank, or_else, split_items, strip_markup, until_any,
};

// ============================================================================
// Blank detection
// ============================================================================

#[test_case("", true; "empty")]
#[test_case("   ", true; "spaces")]
#[test_case("\t\n", true; "other whitespace")]
#[test_case("x", false; "single char")]
#[test_case("  x  ", false; "padded value")]
fn blank_detection(input: &str, expected: bool) {
    assert_eq!(is_blank(input), expected);
}

#[test]
fn or_else_substitutes_for_blank() {
    assert_eq!(or_else("", "default"), "default");
    assert_eq!(or_else("   ", "default"), "default");
    assert_eq!(or_else("original", "default"), "original");
}

// ============================================================================
// Case-insensitive equality
// ============================================================================

#[test]
fn equal_ignoring_case() {
    assert!(eq_ignore_case(Some("Hello"), Some("Hello")));
    assert!(eq_ignore_case(Some("HELLO"), Some("hello")));
    assert!(!eq_ignore_case(Some("Hello"), Some("World")));
}

#[test]
fn absent_values_compare_as_equal_to_each_other_only() {
    assert!(eq_ignore_case(None, None));
    assert!(!eq_ignore_case(Some("Hello"), None));
    assert!(!eq_ignore_case(None, Some("Hello")));
}

// ============================================================================
// until_any
// ============================================================================

#[test]
fn prefix_before_first_stop_char() {
    assert_eq!(until_any("hello@world.com", &['@']), "hello");
    assert_eq!(until_any("hello.world@test", &['@', '.']), "hello");
}

#[test]
fn whole_value_when_no_stop_char_occurs() {
    assert_eq!(until_any("hello", &['@']), "hello");
}

#[test]
fn empty_for_degenerate_inputs() {
    assert_eq!(until_any("@hello", &['@']), ""); // stop char at position 0
    assert_eq!(until_any("hello", &[]), ""); // empty stop-set
    assert_eq!(until_any("", &['@']), ""); // empty value
}

// ============================================================================
// Tokenization
// ============================================================================

#[test]
fn split_trims_and_drops_empties() {
    assert_eq!(split_items("a; b ;;c", ';'), vec!["a", "b", "c"]);
    assert_eq!(split_items(" ; ; ", ';'), Vec::<&str>::new());
    assert_eq!(split_items("", ';'), Vec::<&str>::new());
}

#[test]
fn split_with_custom_separator() {
    assert_eq!(split_items("1,2, 3", ','), vec!["1", "2", "3"]);
}

#[test]
fn first_item_of_comma_list() {
    assert_eq!(first_item("a,b,c", "x"), "a");
    assert_eq!(first_item("single", "x"), "single");
    assert_eq!(first_item("", "x"), "x");
}

// ============================================================================
// Membership tests
// ============================================================================

#[test]
fn membership_ignores_case() {
    assert!(is_any_of("red", &["Blue", "Red"]));
    assert!(!is_any_of("green", &["Blue", "Red"]));
    assert!(!is_any_of("red", &[]));
}

#[test]
fn substring_membership_ignores_case() {
    assert!(is_any_part_of("Gothenburg Central", &["central"]));
    assert!(!is_any_part_of("Gothenburg Central", &["north"]));
    assert!(!is_any_part_of("", &["central"]));
    assert!(!is_any_part_of("Gothenburg", &[]));
}

// ============================================================================
// Markup stripping
// ============================================================================

#[test]
fn tags_are_removed() {
    assert_eq!(strip_markup("<b>bold</b> text"), "bold text");
    assert_eq!(strip_markup("<p>a</p><p>b</p>"), "ab");
}

#[test]
fn nbsp_entities_become_spaces() {
    assert_eq!(strip_markup("a&nbsp;b"), "a b");
    assert_eq!(strip_markup("a&nbspb"), "a b");
}

#[test]
fn plain_text_is_untouched() {
    assert_eq!(strip_markup("no markup here"), "no markup here");
    assert_eq!(strip_markup(""), "");
}

#[test]
fn tag_with_attributes_is_removed() {
    assert_eq!(
        strip_markup(r#"<span class="x">v</span>"#),
        "v"
    );
}

// ============================================================================
// Numeric parsing
// ============================================================================

#[test_case("42", true; "integer")]
#[test_case("-7", true; "negative integer")]
#[test_case("3.25", true; "float")]
#[test_case("4e2", true; "scientific")]
#[test_case("abc", false; "letters")]
#[test_case("", false; "empty")]
fn number_detection(input: &str, expected: bool) {
    assert_eq!(is_number(input), expected);
}

#[test]
fn zeroes_or_blank() {
    assert!(is_zeroes_or_blank(""));
    assert!(is_zeroes_or_blank("  "));
    assert!(is_zeroes_or_blank("000"));
    assert!(!is_zeroes_or_blank("010"));
    assert!(!is_zeroes_or_blank("x"));
}

#[test]
fn lenient_parses_default_to_zero() {
    assert_eq!(int_or_zero("17"), 17);
    assert_eq!(int_or_zero(" 17 "), 17);
    assert_eq!(int_or_zero("seventeen"), 0);
    assert_eq!(double_or_zero("2.5"), 2.5);
    assert_eq!(double_or_zero("junk"), 0.0);
}
