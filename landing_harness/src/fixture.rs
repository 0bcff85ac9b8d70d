// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A laid-out copy of the landing page markup.
//!
//! ```text
//!      0 ┬ nav.navbar (toggle, logo "#", links)
//!        │ section#hero            0..900   (a.btn "#download")
//!    900 ┼ section#features      900..1700  (two .reveal blocks)
//!   1700 ┼ section#weapons      1700..2700  (.reveal heading, three .weapon-card)
//!   2700 ┼ section#about        2700..3300  (.reveal block)
//!   3300 ┼ section#download     3300..3800
//!   3800 ┼ footer               3800..4000  (dead "#missing" link, external link)
//!   4000 ┴
//! ```

use landing_core::node::NodeId;

use crate::document::FakeDocument;
use crate::harness::Harness;

/// Desktop viewport width.
pub const DESKTOP_WIDTH: f64 = 1280.0;
/// Phone viewport width.
pub const MOBILE_WIDTH: f64 = 390.0;
/// Viewport height used by both layouts.
pub const VIEWPORT_HEIGHT: f64 = 800.0;

/// Handles to the interesting elements of the landing fixture.
#[derive(Clone, Debug)]
pub struct Landing {
    /// `nav.navbar`.
    pub navbar: NodeId,
    /// `button.navbar-toggle` inside the navbar.
    pub toggle: NodeId,
    /// Logo link with the bare `#` marker.
    pub logo: NodeId,
    /// Navbar links to `#features`, `#weapons`, and `#about`.
    pub nav_links: [NodeId; 3],
    /// `section#hero`.
    pub hero: NodeId,
    /// Hero call-to-action pointing at `#download`.
    pub cta: NodeId,
    /// `section#features`.
    pub features: NodeId,
    /// `section#weapons`.
    pub weapons: NodeId,
    /// `section#about`.
    pub about: NodeId,
    /// `section#download`.
    pub download: NodeId,
    /// Every `.reveal` element, in document order.
    pub reveals: Vec<NodeId>,
    /// Every `.weapon-card`, in document order.
    pub cards: Vec<NodeId>,
    /// Text inside the first card.
    pub card_label: NodeId,
    /// The footer.
    pub footer: NodeId,
    /// Link to `#missing`, which has no matching element.
    pub dead_link: NodeId,
    /// Off-site link.
    pub external_link: NodeId,
}

impl Landing {
    /// Builds the landing markup into `doc`.
    pub fn build(doc: &mut FakeDocument) -> Self {
        let navbar = doc.create("nav").class("navbar").span(0.0, 70.0).build();
        let logo = doc
            .create("a")
            .class("logo")
            .href("#")
            .child_of(navbar)
            .build();
        let toggle = doc
            .create("button")
            .class("navbar-toggle")
            .attr("aria-label", "Menu")
            .child_of(navbar)
            .build();
        let menu = doc.create("ul").class("nav-links").child_of(navbar).build();
        let nav_links = ["#features", "#weapons", "#about"].map(|href| {
            let item = doc.create("li").child_of(menu).build();
            doc.create("a").href(href).child_of(item).build()
        });

        let hero = doc
            .create("section")
            .id("hero")
            .class("hero")
            .span(0.0, 900.0)
            .build();
        let cta = doc
            .create("a")
            .class("btn")
            .href("#download")
            .child_of(hero)
            .span(560.0, 56.0)
            .build();

        let mut reveals = Vec::new();
        let features = doc
            .create("section")
            .id("features")
            .span(900.0, 800.0)
            .build();
        for top in [1000.0, 1350.0] {
            reveals.push(
                doc.create("div")
                    .class("feature")
                    .class("reveal")
                    .child_of(features)
                    .span(top, 300.0)
                    .build(),
            );
        }

        let weapons = doc
            .create("section")
            .id("weapons")
            .span(1700.0, 1000.0)
            .build();
        reveals.push(
            doc.create("h2")
                .class("reveal")
                .child_of(weapons)
                .span(1720.0, 60.0)
                .build(),
        );
        let cards: Vec<NodeId> = (0_u8..3)
            .map(|i| {
                doc.create("article")
                    .class("weapon-card")
                    .child_of(weapons)
                    .span(1800.0 + f64::from(i) * 290.0, 260.0)
                    .build()
            })
            .collect();
        let card_label = doc
            .create("h3")
            .child_of(cards[0])
            .span(1820.0, 40.0)
            .build();

        let about = doc
            .create("section")
            .id("about")
            .span(2700.0, 600.0)
            .build();
        reveals.push(
            doc.create("div")
                .class("reveal")
                .child_of(about)
                .span(2750.0, 250.0)
                .build(),
        );

        let download = doc
            .create("section")
            .id("download")
            .span(3300.0, 500.0)
            .build();

        let footer = doc.create("footer").span(3800.0, 200.0).build();
        let dead_link = doc.create("a").href("#missing").child_of(footer).build();
        let external_link = doc
            .create("a")
            .href("https://discord.gg/novojogo")
            .child_of(footer)
            .build();

        Self {
            navbar,
            toggle,
            logo,
            nav_links,
            hero,
            cta,
            features,
            weapons,
            about,
            download,
            reveals,
            cards,
            card_label,
            footer,
            dead_link,
            external_link,
        }
    }

    /// Returns the navbar link pointing at `#weapons`.
    #[must_use]
    pub fn weapons_link(&self) -> NodeId {
        self.nav_links[1]
    }
}

/// Builds the landing page in a viewport of the given size.
#[must_use]
pub fn landing_page(width: f64, height: f64) -> (FakeDocument, Landing) {
    let mut doc = FakeDocument::new(width, height);
    let landing = Landing::build(&mut doc);
    (doc, landing)
}

/// Builds and starts the landing page on a desktop viewport.
#[must_use]
pub fn desktop() -> (Harness, Landing) {
    started(DESKTOP_WIDTH)
}

/// Builds and starts the landing page on a phone viewport.
#[must_use]
pub fn mobile() -> (Harness, Landing) {
    started(MOBILE_WIDTH)
}

fn started(width: f64) -> (Harness, Landing) {
    let (doc, landing) = landing_page(width, VIEWPORT_HEIGHT);
    let mut harness = Harness::new(doc);
    harness.start();
    (harness, landing)
}
