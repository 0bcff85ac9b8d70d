// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS selector matching for the in-memory document.
//!
//! Selectors are parsed by `cssparser` and `selectors` and matched through
//! [`NodeRef`], which implements [`selectors::Element`] over the
//! [`FakeDocument`] node arena. Type, class, id, attribute, and combinator
//! selectors behave as in a browser. Pseudo-classes and pseudo-elements
//! fail to parse.

use std::borrow::Borrow;
use std::fmt;

use cssparser::{Parser as CssParser, ParserInput, ToCss};
use landing_core::node::NodeId;
use selectors::attr::{
    AttrSelectorOperation, AttrSelectorOperator, CaseSensitivity, NamespaceConstraint,
};
use selectors::matching::{
    ElementSelectorFlags, IgnoreNthChildForInvalidation, MatchingContext, MatchingMode,
    NeedsSelectorFlags, QuirksMode, matches_selector,
};
use selectors::parser::{ParseRelative, SelectorList, SelectorParseErrorKind};
use selectors::{NthIndexCache, OpaqueElement};

use crate::document::{FakeDocument, FakeNode};

/// Parses a selector list such as `a[href^="#"], section[id]`.
///
/// Returns `None` when the input is not a selector this document supports.
pub(crate) fn parse(selector: &str) -> Option<SelectorList<LandingSelectors>> {
    let mut input = ParserInput::new(selector);
    let mut parser = CssParser::new(&mut input);
    SelectorList::parse(&SelectorParser, &mut parser, ParseRelative::No).ok()
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// A node of a [`FakeDocument`] seen through the `selectors` matcher.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef<'a> {
    doc: &'a FakeDocument,
    id: NodeId,
    node: &'a FakeNode,
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("tag", &self.node.tag())
            .finish_non_exhaustive()
    }
}

impl<'a> NodeRef<'a> {
    /// Returns the node `id` of `doc`, if it exists.
    pub(crate) fn new(doc: &'a FakeDocument, id: NodeId) -> Option<Self> {
        let node = doc.node(id)?;
        Some(Self { doc, id, node })
    }

    /// Returns `true` if any selector of `list` matches this node.
    pub(crate) fn matches(&self, list: &SelectorList<LandingSelectors>) -> bool {
        let mut nth_index_cache = NthIndexCache::default();
        let mut context = MatchingContext::new(
            MatchingMode::Normal,
            None,
            &mut nth_index_cache,
            QuirksMode::NoQuirks,
            NeedsSelectorFlags::No,
            IgnoreNthChildForInvalidation::No,
        );
        list.0
            .iter()
            .any(|selector| matches_selector(selector, 0, None, self, &mut context))
    }

    fn at(&self, id: NodeId) -> Option<Self> {
        Self::new(self.doc, id)
    }

    /// This node and its siblings, in document order.
    fn siblings(&self) -> Vec<NodeId> {
        self.doc.children(self.doc.parent(self.id)).collect()
    }
}

impl selectors::Element for NodeRef<'_> {
    type Impl = LandingSelectors;

    fn opaque(&self) -> OpaqueElement {
        OpaqueElement::new(self.node)
    }

    fn parent_element(&self) -> Option<Self> {
        self.at(self.doc.parent(self.id)?)
    }

    fn parent_node_is_shadow_root(&self) -> bool {
        false
    }

    fn containing_shadow_host(&self) -> Option<Self> {
        None
    }

    fn is_pseudo_element(&self) -> bool {
        false
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        let siblings = self.siblings();
        let pos = siblings.iter().position(|&n| n == self.id)?;
        self.at(*siblings.get(pos.checked_sub(1)?)?)
    }

    fn next_sibling_element(&self) -> Option<Self> {
        let siblings = self.siblings();
        let pos = siblings.iter().position(|&n| n == self.id)?;
        self.at(*siblings.get(pos + 1)?)
    }

    fn first_element_child(&self) -> Option<Self> {
        self.at(self.doc.children(Some(self.id)).next()?)
    }

    fn is_html_element_in_html_document(&self) -> bool {
        true
    }

    fn has_local_name(&self, local_name: &str) -> bool {
        self.node.tag() == local_name
    }

    fn has_namespace(&self, _ns: &()) -> bool {
        true
    }

    fn is_same_type(&self, other: &Self) -> bool {
        self.node.tag() == other.node.tag()
    }

    fn attr_matches(
        &self,
        ns: &NamespaceConstraint<&()>,
        local_name: &CssString,
        operation: &AttrSelectorOperation<&CssString>,
    ) -> bool {
        if !matches!(ns, NamespaceConstraint::Specific(())) {
            return false;
        }
        let Some(actual) = self.node.attr(&local_name.0) else {
            return false;
        };
        match operation {
            AttrSelectorOperation::Exists => true,
            AttrSelectorOperation::WithValue {
                operator,
                case_sensitivity,
                value,
            } => {
                let (actual, expected) = match case_sensitivity {
                    CaseSensitivity::CaseSensitive => (actual.to_owned(), value.0.clone()),
                    CaseSensitivity::AsciiCaseInsensitive => (
                        actual.to_ascii_lowercase(),
                        value.0.to_ascii_lowercase(),
                    ),
                };
                attr_operator_matches(*operator, &actual, &expected)
            }
        }
    }

    fn match_non_ts_pseudo_class(
        &self,
        pc: &NoPseudoClass,
        _context: &mut MatchingContext<'_, Self::Impl>,
    ) -> bool {
        match *pc {}
    }

    fn match_pseudo_element(
        &self,
        pe: &NoPseudoElement,
        _context: &mut MatchingContext<'_, Self::Impl>,
    ) -> bool {
        match *pe {}
    }

    fn apply_selector_flags(&self, _flags: ElementSelectorFlags) {}

    fn is_link(&self) -> bool {
        matches!(self.node.tag(), "a" | "area") && self.node.attr("href").is_some()
    }

    fn is_html_slot_element(&self) -> bool {
        false
    }

    fn has_id(&self, id: &CssString, case_sensitivity: CaseSensitivity) -> bool {
        self.node
            .id()
            .is_some_and(|own| case_sensitivity.eq(own.as_bytes(), id.0.as_bytes()))
    }

    fn has_class(&self, name: &CssString, case_sensitivity: CaseSensitivity) -> bool {
        self.node.has_class(&name.0)
            || (case_sensitivity == CaseSensitivity::AsciiCaseInsensitive
                && self
                    .doc
                    .classes(self.id)
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(&name.0)))
    }

    fn imported_part(&self, _name: &CssString) -> Option<CssString> {
        None
    }

    fn is_part(&self, _name: &CssString) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.doc.children(Some(self.id)).next().is_none()
    }

    fn is_root(&self) -> bool {
        self.node.tag() == "html"
    }
}

fn attr_operator_matches(operator: AttrSelectorOperator, actual: &str, expected: &str) -> bool {
    match operator {
        AttrSelectorOperator::Equal => actual == expected,
        AttrSelectorOperator::Includes => actual.split_whitespace().any(|part| part == expected),
        AttrSelectorOperator::DashMatch => {
            actual == expected
                || actual
                    .strip_prefix(expected)
                    .is_some_and(|rest| rest.starts_with('-'))
        }
        AttrSelectorOperator::Prefix => !expected.is_empty() && actual.starts_with(expected),
        AttrSelectorOperator::Suffix => !expected.is_empty() && actual.ends_with(expected),
        AttrSelectorOperator::Substring => !expected.is_empty() && actual.contains(expected),
    }
}

// ---------------------------------------------------------------------------
// Selector implementation
// ---------------------------------------------------------------------------

/// Owned identifier, local name, or attribute value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct CssString(pub(crate) String);

impl From<&str> for CssString {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl Borrow<str> for CssString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl ToCss for CssString {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        cssparser::serialize_string(&self.0, dest)
    }
}

/// Type parameters of the `selectors` parser and matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LandingSelectors;

impl selectors::SelectorImpl for LandingSelectors {
    type ExtraMatchingData<'a> = ();
    type AttrValue = CssString;
    type Identifier = CssString;
    type LocalName = CssString;
    type NamespacePrefix = CssString;
    type NamespaceUrl = ();
    type BorrowedLocalName = str;
    type BorrowedNamespaceUrl = ();
    type NonTSPseudoClass = NoPseudoClass;
    type PseudoElement = NoPseudoElement;
}

/// No pseudo-classes are supported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum NoPseudoClass {}

impl selectors::parser::NonTSPseudoClass for NoPseudoClass {
    type Impl = LandingSelectors;

    fn is_active_or_hover(&self) -> bool {
        match *self {}
    }

    fn is_user_action_state(&self) -> bool {
        match *self {}
    }
}

impl ToCss for NoPseudoClass {
    fn to_css<W: fmt::Write>(&self, _dest: &mut W) -> fmt::Result {
        match *self {}
    }
}

/// No pseudo-elements are supported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum NoPseudoElement {}

impl selectors::parser::PseudoElement for NoPseudoElement {
    type Impl = LandingSelectors;
}

impl ToCss for NoPseudoElement {
    fn to_css<W: fmt::Write>(&self, _dest: &mut W) -> fmt::Result {
        match *self {}
    }
}

struct SelectorParser;

impl<'i> selectors::parser::Parser<'i> for SelectorParser {
    type Impl = LandingSelectors;
    type Error = SelectorParseErrorKind<'i>;

    fn parse_non_ts_pseudo_class(
        &self,
        location: cssparser::SourceLocation,
        name: cssparser::CowRcStr<'i>,
    ) -> Result<NoPseudoClass, cssparser::ParseError<'i, SelectorParseErrorKind<'i>>> {
        Err(location.new_custom_error(SelectorParseErrorKind::UnsupportedPseudoClassOrElement(name)))
    }

    fn parse_pseudo_element(
        &self,
        location: cssparser::SourceLocation,
        name: cssparser::CowRcStr<'i>,
    ) -> Result<NoPseudoElement, cssparser::ParseError<'i, SelectorParseErrorKind<'i>>> {
        Err(location.new_custom_error(SelectorParseErrorKind::UnsupportedPseudoClassOrElement(name)))
    }

    fn default_namespace(&self) -> Option<()> {
        None
    }

    fn namespace_for_prefix(&self, _prefix: &CssString) -> Option<()> {
        None
    }
}
