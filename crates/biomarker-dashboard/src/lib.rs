//! # biomarker-dashboard
//!
//! Terminal dashboard of biomarker health cards.
//!
//! Assembles per-biomarker [`CardModel`] view models from a loaded
//! reference-range table and renders them as text: a summary line and
//! proportional scale bar per card, plus a detail block with a legend.
//! All heavy lifting (parsing, range resolution, segmenting,
//! classification) lives in the `biomarker-loader` crate; this crate is
//! presentation only.

#![warn(missing_docs)]

mod card;
mod render;
mod seed;

pub use card::{CardModel, LegendRow};
pub use render::{render_bar, render_card, render_detail};
pub use seed::default_biomarkers;

use biomarker_loader::{ReferenceStore, SuffixMatcher};
use biomarker_types::BiomarkerSeed;

/// Builds card models for every seed, in seed order.
pub fn build_cards(seeds: &[BiomarkerSeed], store: &ReferenceStore) -> Vec<CardModel> {
    let matcher = SuffixMatcher::default();
    seeds
        .iter()
        .map(|seed| CardModel::build(seed, store, &matcher))
        .collect()
}
