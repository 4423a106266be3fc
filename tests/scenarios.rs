//! End-to-end caption scenarios
//!
//! Each case goes through normalization and the full grammar.

use enumchron::{
    parse, CaptionTree, Field, Fragment, Item, Month, Numlet, Season, Value, YearItem, YearSpan,
};
use rstest::rstest;

fn labeled(field: Field, n: &str) -> Fragment {
    Fragment::labeled(field, Value::number(n))
}

fn fragment(fragment: Fragment) -> CaptionTree {
    CaptionTree::Fragment(fragment)
}

fn years(items: Vec<YearItem>) -> CaptionTree {
    fragment(Fragment::ImplicitYears(items))
}

#[rstest]
#[case::volume_and_number(
    "v.12 no.3",
    CaptionTree::Sequence(vec![labeled(Field::Volumes, "12"), labeled(Field::Numbers, "3")])
)]
#[case::dual_year("1990/91", years(vec![YearItem::dual("1990", "91")]))]
#[case::month_pair_then_year(
    "jan./feb. 1999",
    fragment(Fragment::YearMonth {
        years: vec![YearItem::single("1999")],
        months: vec![Item::range(Month::January, Month::February)],
    })
)]
#[case::bare_supplement("supplement", fragment(Fragment::Supplement(None)))]
#[case::parenthesized_range(
    "(1985-86)",
    CaptionTree::group(years(vec![YearItem::range(YearSpan::year("1985"), YearSpan::year("86"))]))
)]
#[case::numlet_range(
    "4a-5b",
    fragment(Fragment::Numlets(Item::range(
        Numlet::new("4", Item::single('a')),
        Numlet::new("5", Item::single('b')),
    )))
)]
fn test_documented_scenarios(#[case] caption: &str, #[case] expected: CaptionTree) {
    assert_eq!(parse(caption).unwrap(), expected);
}

#[rstest]
#[case::abbreviated("v.3", Field::Volumes)]
#[case::spelled_out("volume 3", Field::Volumes)]
#[case::plural("volumes 3", Field::Volumes)]
#[case::no_dot("vol3", Field::Volumes)]
#[case::colon("no.:3", Field::Numbers)]
#[case::part("pt. 3", Field::Parts)]
#[case::copy("c.3", Field::Copies)]
#[case::series("ser. 3", Field::Series)]
#[case::report("rept. 3", Field::Reports)]
#[case::section("sections 3", Field::Sections)]
#[case::appendix("app. 3", Field::Appendices)]
#[case::title("t.3", Field::Titles)]
fn test_label_spellings(#[case] caption: &str, #[case] field: Field) {
    assert_eq!(parse(caption).unwrap(), fragment(labeled(field, "3")));
}

#[rstest]
#[case::four_digits_after_label("v.1990", fragment(labeled(Field::Volumes, "1990")))]
#[case::year_label("yr. 1990", fragment(Fragment::ExplicitYears(vec![YearItem::single("1990")])))]
#[case::leading_zeros("no.007", fragment(labeled(Field::Numbers, "7")))]
fn test_priority(#[case] caption: &str, #[case] expected: CaptionTree) {
    assert_eq!(parse(caption).unwrap(), expected);
}

#[test]
fn test_letter_value() {
    assert_eq!(
        parse("pt. a-c").unwrap(),
        fragment(Fragment::labeled(
            Field::Parts,
            Value::Letters(vec![Item::range('a', 'c')])
        ))
    );
}

#[test]
fn test_numeric_list_value() {
    assert_eq!(
        parse("no. 1, 3-5").unwrap(),
        fragment(Fragment::labeled(
            Field::Numbers,
            Value::Numeric(vec![Item::single("1"), Item::range("3", "5")])
        ))
    );
}

#[test]
fn test_volume_with_years_and_months() {
    assert_eq!(
        parse("V.5 1990 Jan-Mar.").unwrap(),
        CaptionTree::Sequence(vec![
            labeled(Field::Volumes, "5"),
            Fragment::YearMonth {
                years: vec![YearItem::single("1990")],
                months: vec![Item::range(Month::January, Month::March)],
            },
        ])
    );
}

#[test]
fn test_seasons() {
    assert_eq!(
        parse("spring/summer").unwrap(),
        fragment(Fragment::Seasons(vec![Item::range(Season::Spring, Season::Summer)]))
    );
}

#[test]
fn test_sudoc_passthrough() {
    assert_eq!(
        parse("2.1:990-92").unwrap(),
        CaptionTree::SuDoc("2.1:990-92".to_string())
    );
}

#[test]
fn test_juxtaposed_volume_year_pairs() {
    let tree = parse("v.1(1990)v.2(1991)").unwrap();
    assert_eq!(tree.node_type(), "ecset");
    let kinds: Vec<_> = tree.fragments().iter().map(|f| f.kind()).collect();
    assert_eq!(
        kinds,
        vec!["volumes", "implicit-years", "volumes", "implicit-years"]
    );
}

#[test]
fn test_markers() {
    assert_eq!(
        parse("n.s. v.3 incomplete").unwrap(),
        CaptionTree::Sequence(vec![
            Fragment::NewSeries,
            labeled(Field::Volumes, "3"),
            Fragment::Incomplete,
        ])
    );
    assert_eq!(parse("index").unwrap(), fragment(Fragment::Index(None)));
    assert_eq!(
        parse("annual summary").unwrap(),
        fragment(Fragment::AnnualSummary)
    );
}

#[test]
fn test_ordinals() {
    assert_eq!(
        parse("1st-3rd").unwrap(),
        fragment(Fragment::Ordinals(Item::range("1", "3")))
    );
}

#[rstest]
#[case::dash_between_reserved_letters("c-d", Item::range('c', 'd'))]
#[case::title_and_volume_initials("t-v", Item::range('t', 'v'))]
#[case::safe_letters("a-c", Item::range('a', 'c'))]
fn test_bare_letter_range_is_unknown(#[case] caption: &str, #[case] range: Item<char>) {
    assert_eq!(
        parse(caption).unwrap(),
        fragment(Fragment::Unknown(Value::Letters(vec![range])))
    );
}

#[rstest]
#[case::letter_glued_to_volume("v.3a")]
#[case::letter_glued_to_year("1990a")]
#[case::lone_safe_letter("b")]
#[case::empty("")]
#[case::only_punctuation(" .,; ")]
#[case::bare_label("v.")]
#[case::reserved_letter("t")]
#[case::unmatched_paren("(1990")]
#[case::stray_words("hello world")]
fn test_failures(#[case] caption: &str) {
    let failure = parse(caption).unwrap_err();
    assert!(failure.to_string().starts_with("no rule matched caption"));
}
