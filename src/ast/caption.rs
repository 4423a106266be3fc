//! Caption trees: how fragments are put together
//!
//! ```text
//! v.12 no.3            -> Sequence [volumes 12, numbers 3]
//! (1985-86)            -> Group(Fragment(implicit-years))
//! v.1(1990)v.2(1991)   -> Set [Fragment, Group, Fragment, Group]
//! 4.12:3               -> SuDoc("4.12:3")
//! ```
//!
//! Trees are built so that a one-element sequence or set never appears: a
//! single fragment is a [`CaptionTree::Fragment`], a single group is a
//! [`CaptionTree::Group`].

use super::fragment::Fragment;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "node", content = "value")]
pub enum CaptionTree {
    /// A government-document classification number, kept whole
    #[serde(rename = "sudoc")]
    SuDoc(String),
    Fragment(Fragment),
    /// Two or more fragments separated by `,`, `:` or a space
    Sequence(Vec<Fragment>),
    /// A fragment or sequence written inside parentheses
    Group(Box<CaptionTree>),
    /// Two or more juxtaposed or delimited groups/sequences
    Set(Vec<CaptionTree>),
}

impl CaptionTree {
    /// Build the tree for a delimited run of fragments.
    pub fn sequence(mut fragments: Vec<Fragment>) -> Self {
        if fragments.len() == 1 {
            if let Some(fragment) = fragments.pop() {
                return CaptionTree::Fragment(fragment);
            }
        }
        CaptionTree::Sequence(fragments)
    }

    /// Build the tree for a run of groups.
    pub fn set(mut groups: Vec<CaptionTree>) -> Self {
        if groups.len() == 1 {
            if let Some(group) = groups.pop() {
                return group;
            }
        }
        CaptionTree::Set(groups)
    }

    pub fn group(inner: CaptionTree) -> Self {
        CaptionTree::Group(Box::new(inner))
    }

    pub fn as_fragment(&self) -> Option<&Fragment> {
        match self {
            CaptionTree::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// All fragments in reading order, descending into groups and sets.
    pub fn fragments(&self) -> Vec<&Fragment> {
        match self {
            CaptionTree::SuDoc(_) => Vec::new(),
            CaptionTree::Fragment(fragment) => vec![fragment],
            CaptionTree::Sequence(fragments) => fragments.iter().collect(),
            CaptionTree::Group(inner) => inner.fragments(),
            CaptionTree::Set(groups) => groups.iter().flat_map(|g| g.fragments()).collect(),
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            CaptionTree::SuDoc(_) => "sudoc",
            CaptionTree::Fragment(_) => "fragment",
            CaptionTree::Sequence(_) => "ec",
            CaptionTree::Group(_) => "ecp",
            CaptionTree::Set(_) => "ecset",
        }
    }
}
