// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section link highlighting.

use landing_core::host::Host;
use landing_core::node::NodeId;
use landing_harness::Harness;
use landing_harness::fixture::{Landing, desktop};

fn active_links(harness: &Harness, landing: &Landing) -> Vec<NodeId> {
    let mut links = landing.nav_links.to_vec();
    links.extend([landing.logo, landing.cta, landing.dead_link]);
    links
        .into_iter()
        .filter(|&l| harness.doc().has_class(l, "active"))
        .collect()
}

#[test]
fn hero_maps_to_no_link() {
    let (harness, landing) = desktop();
    assert!(active_links(&harness, &landing).is_empty());
    assert_eq!(harness.page().highlight().and_then(|h| h.active()), None);
}

#[test]
fn crossing_a_section_moves_the_active_link() {
    let (mut harness, landing) = desktop();

    harness.scroll_and_render(1000.0); // band 1080..1240
    assert_eq!(active_links(&harness, &landing), vec![landing.nav_links[0]]);

    harness.scroll_and_render(1700.0); // band 1780..1940
    assert_eq!(active_links(&harness, &landing), vec![landing.nav_links[1]]);

    harness.scroll_and_render(2700.0); // band 2780..2940
    assert_eq!(active_links(&harness, &landing), vec![landing.nav_links[2]]);
}

#[test]
fn leaving_every_mapped_section_keeps_the_last_link() {
    let (mut harness, landing) = desktop();
    harness.scroll_and_render(1000.0);
    harness.scroll_and_render(0.0); // back in the hero
    assert_eq!(
        active_links(&harness, &landing),
        vec![landing.nav_links[0]],
        "non-intersecting entries are ignored"
    );
}

#[test]
fn at_most_one_link_is_active_across_a_full_sweep() {
    let (mut harness, landing) = desktop();
    let max = harness.doc().max_scroll();
    let mut offset = 0.0;
    while offset <= max {
        harness.scroll_and_render(offset);
        let active = active_links(&harness, &landing);
        assert!(
            active.len() <= 1,
            "{} links active at offset {offset}: {active:?}",
            active.len()
        );
        offset += 37.0;
    }
    // And back up.
    while offset >= 0.0 {
        harness.scroll_and_render(offset);
        assert!(active_links(&harness, &landing).len() <= 1);
        offset -= 53.0;
    }
}

#[test]
fn simultaneous_crossings_resolve_in_delivery_order() {
    let (mut harness, landing) = desktop();
    // At the bottom the band 3280..3440 straddles about and download; both
    // enter in one batch and the later entry wins.
    let max = harness.doc().max_scroll();
    harness.scroll_and_render(max);
    assert_eq!(active_links(&harness, &landing), vec![landing.cta]);
}
