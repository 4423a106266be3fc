//! XML-like caption tag serialization
//!
//! Serializes a [`CaptionTree`] to nested tags that mirror the tree.
//!
//! ## Format
//!
//! - Tree node (`ec`, `ecp`, `ecset`, `sudoc`) -> tag name
//! - Fragment kind (`volumes`, `implicit-years`, ...) -> tag name
//! - Values -> text content, ranges as `a-b`, lists joined by `, `
//! - Markers with no value -> empty element
//!
//! ## Example
//!
//! ```text
//! <ecset>
//!   <volumes>1</volumes>
//!   <ecp>
//!     <implicit-years>1990</implicit-years>
//!   </ecp>
//! </ecset>
//! ```

use super::CaptionRecord;
use crate::ast::{CaptionTree, Fragment, Item, Numlet, Value, YearItem, YearSpan};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new(indent_level: usize) -> Self {
        Self {
            output: String::new(),
            indent_level,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn tag_with_text(&mut self, tag: &str, text: &str) {
        self.push_indent(&format!("<{tag}>{}</{tag}>\n", escape_xml(text)));
    }

    fn nested<'a, I>(&mut self, tag: &str, children: I)
    where
        I: IntoIterator<Item = Child<'a>>,
    {
        self.push_indent(&format!("<{tag}>\n"));
        self.indent_level += 1;
        for child in children {
            match child {
                Child::Tree(tree) => self.visit_tree(tree),
                Child::Fragment(fragment) => self.visit_fragment(fragment),
            }
        }
        self.indent_level -= 1;
        self.push_indent(&format!("</{tag}>\n"));
    }

    fn visit_tree(&mut self, tree: &CaptionTree) {
        match tree {
            CaptionTree::SuDoc(number) => self.tag_with_text("sudoc", number),
            CaptionTree::Fragment(fragment) => self.visit_fragment(fragment),
            CaptionTree::Sequence(fragments) => {
                self.nested(tree.node_type(), fragments.iter().map(Child::Fragment))
            }
            CaptionTree::Group(inner) => {
                self.nested(tree.node_type(), [Child::Tree(inner.as_ref())])
            }
            CaptionTree::Set(groups) => {
                self.nested(tree.node_type(), groups.iter().map(Child::Tree))
            }
        }
    }

    fn visit_fragment(&mut self, fragment: &Fragment) {
        let tag = fragment.kind();
        match fragment {
            Fragment::Labeled { value, .. } | Fragment::Unknown(value) => {
                self.tag_with_text(tag, &value_text(value))
            }
            Fragment::ExplicitYears(years) | Fragment::ImplicitYears(years) => {
                self.tag_with_text(tag, &join(years, year_text))
            }
            Fragment::YearMonth { years, months } => {
                self.push_indent(&format!("<{tag}>\n"));
                self.indent_level += 1;
                self.tag_with_text("years", &join(years, year_text));
                let months = join(months, |m| item_text(m, |m| m.to_string()));
                self.tag_with_text("months", &months);
                self.indent_level -= 1;
                self.push_indent(&format!("</{tag}>\n"));
            }
            Fragment::Months(months) => {
                self.tag_with_text(tag, &join(months, |m| item_text(m, |m| m.to_string())))
            }
            Fragment::Seasons(seasons) => {
                self.tag_with_text(tag, &join(seasons, |s| item_text(s, |s| s.to_string())))
            }
            Fragment::Supplement(value) | Fragment::Index(value) => {
                let text = value.as_ref().map(value_text).unwrap_or_default();
                self.tag_with_text(tag, &text)
            }
            Fragment::Ordinals(ordinals) => {
                self.tag_with_text(tag, &item_text(ordinals, String::clone))
            }
            Fragment::Numlets(numlets) => {
                self.tag_with_text(tag, &item_text(numlets, numlet_text))
            }
            Fragment::NewSeries
            | Fragment::Incomplete
            | Fragment::AnnualSummary
            | Fragment::Revision => self.tag_with_text(tag, ""),
        }
    }
}

enum Child<'a> {
    Tree(&'a CaptionTree),
    Fragment(&'a Fragment),
}

fn join<T>(items: &[T], text: impl Fn(&T) -> String) -> String {
    items.iter().map(text).collect::<Vec<_>>().join(", ")
}

fn item_text<T>(item: &Item<T>, text: impl Fn(&T) -> String) -> String {
    match item {
        Item::Single(value) => text(value),
        Item::Range { start, end } => format!("{}-{}", text(start), text(end)),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Numeric(items) => join(items, |item| item_text(item, String::clone)),
        Value::Letters(items) => join(items, |item| item_text(item, char::to_string)),
    }
}

fn numlet_text(numlet: &Numlet) -> String {
    format!(
        "{}{}",
        numlet.number,
        item_text(&numlet.letters, char::to_string)
    )
}

fn span_text(span: &YearSpan) -> String {
    match span {
        YearSpan::Year(year) => year.clone(),
        YearSpan::Dual { start, end } => format!("{start}/{end}"),
    }
}

fn year_text(year: &YearItem) -> String {
    match year {
        YearItem::Single(year) => year.clone(),
        YearItem::Dual { start, end } => format!("{start}/{end}"),
        YearItem::Range { start, end } => format!("{}-{}", span_text(start), span_text(end)),
    }
}

/// Serialize a caption tree to tag format
pub fn serialize_tag(tree: &CaptionTree) -> String {
    let mut serializer = TagSerializer::new(0);
    serializer.visit_tree(tree);
    serializer.output.trim_end().to_string()
}

/// Serialize a record: the caption as text, then its tree or its error
pub fn serialize_record(record: &CaptionRecord) -> String {
    let mut result = String::new();
    result.push_str("<caption>");
    result.push_str(&escape_xml(&record.caption));
    result.push('\n');

    let mut serializer = TagSerializer::new(1);
    if let Some(tree) = &record.tree {
        serializer.visit_tree(tree);
    }
    if let Some(error) = &record.error {
        serializer.tag_with_text("error", error);
    }

    result.push_str(&serializer.output);
    result.push_str("</caption>");
    result
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, Month};

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[test]
    fn test_single_fragment() {
        let tree = CaptionTree::Fragment(Fragment::labeled(Field::Volumes, Value::number("12")));
        assert_eq!(serialize_tag(&tree), "<volumes>12</volumes>");
    }

    #[test]
    fn test_marker_is_empty_element() {
        let tree = CaptionTree::Fragment(Fragment::NewSeries);
        assert_eq!(serialize_tag(&tree), "<new-series></new-series>");
    }

    #[test]
    fn test_value_text() {
        let value = Value::Numeric(vec![Item::single("4"), Item::range("6", "8")]);
        assert_eq!(value_text(&value), "4, 6-8");
        let value = Value::Letters(vec![Item::range('a', 'c')]);
        assert_eq!(value_text(&value), "a-c");
    }

    #[test]
    fn test_year_text() {
        assert_eq!(year_text(&YearItem::dual("1990", "91")), "1990/91");
        assert_eq!(
            year_text(&YearItem::range(
                YearSpan::dual("1990", "91"),
                YearSpan::year("92")
            )),
            "1990/91-92"
        );
    }

    #[test]
    fn test_nested_indentation() {
        let tree = CaptionTree::Sequence(vec![
            Fragment::NewSeries,
            Fragment::Months(vec![Item::range(Month::January, Month::March)]),
        ]);
        assert_eq!(
            serialize_tag(&tree),
            "<ec>\n  <new-series></new-series>\n  <months>january-march</months>\n</ec>"
        );
    }
}
