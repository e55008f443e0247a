//! Integration tests for the map composition: precedence and mutual
//! exclusivity on synthetic condition maps, independent of the physics.

use flowmap_rs::regimes::{compose, FlowRegime, RegimeMaps, UNCLASSIFIED};
use ndarray::Array2;

fn blank_maps(rows: usize, cols: usize) -> RegimeMaps {
    let blank = Array2::from_elem((rows, cols), false);
    RegimeMaps {
        dispersed_bubble: blank.clone(),
        stratified: blank.clone(),
        annular: blank.clone(),
        bubbly: blank.clone(),
        elongated_bubble: blank.clone(),
        churn: blank,
    }
}

#[test]
fn precedence_resolves_triple_overlap() {
    // Dispersed, stratified and annular all claim the same cell; the
    // earliest in the order wins and the others leave no trace.
    let mut maps = blank_maps(2, 2);
    maps.dispersed_bubble[[0, 0]] = true;
    maps.stratified[[0, 0]] = true;
    maps.annular[[0, 0]] = true;
    maps.stratified[[0, 1]] = true;
    maps.annular[[0, 1]] = true;
    maps.annular[[1, 0]] = true;

    let category = compose::compose(&maps).unwrap();

    assert_eq!(category[[0, 0]], FlowRegime::DispersedBubble.label());
    assert_eq!(category[[0, 1]], FlowRegime::Stratified.label());
    assert_eq!(category[[1, 0]], FlowRegime::Annular.label());
    assert_eq!(category[[1, 1]], FlowRegime::Slug.label());
}

#[test]
fn every_cell_gets_exactly_one_label() {
    // Whatever the overlaps, the result is total: no unclassified cells,
    // and each label comes from the regime set.
    let mut maps = blank_maps(3, 3);
    maps.stratified[[0, 0]] = true;
    maps.annular[[0, 0]] = true;
    maps.churn[[2, 2]] = true;
    maps.elongated_bubble[[1, 1]] = true;

    let category = compose::compose(&maps).unwrap();

    for &cell in category.iter() {
        assert_ne!(cell, UNCLASSIFIED);
        assert!(FlowRegime::from_label(cell).is_some());
    }
}

#[test]
fn bubbly_and_elongated_bubble_are_exclusive_alternatives() {
    let mut with_bubbly = blank_maps(1, 3);
    with_bubbly.bubbly[[0, 0]] = true;
    with_bubbly.elongated_bubble[[0, 1]] = true;

    let category = compose::compose(&with_bubbly).unwrap();
    assert!(category
        .iter()
        .all(|&c| c != FlowRegime::ElongatedBubble.label()));

    let mut without_bubbly = blank_maps(1, 3);
    without_bubbly.elongated_bubble[[0, 1]] = true;

    let category = compose::compose(&without_bubbly).unwrap();
    assert_eq!(category[[0, 1]], FlowRegime::ElongatedBubble.label());
    assert!(category.iter().all(|&c| c != FlowRegime::Bubbly.label()));
}

#[test]
fn churn_claims_only_what_slug_leaves() {
    let mut maps = blank_maps(1, 3);
    maps.churn[[0, 0]] = true;
    maps.stratified[[0, 1]] = true;
    maps.churn[[0, 1]] = true;

    let category = compose::compose(&maps).unwrap();

    assert_eq!(category[[0, 0]], FlowRegime::Churn.label());
    // A cell already claimed by stratified never falls to churn.
    assert_eq!(category[[0, 1]], FlowRegime::Stratified.label());
    assert_eq!(category[[0, 2]], FlowRegime::Slug.label());
}
