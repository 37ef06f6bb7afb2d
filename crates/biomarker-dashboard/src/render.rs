//! Plain-text rendering of biomarker cards.
//!
//! Draws each card as a summary line plus a proportional scale bar with
//! a marker at the current value, and a detail block with the legend
//! and domain bounds. Pure string construction; callers decide where
//! the output goes.

use biomarker_types::Classification;

use crate::card::CardModel;

/// Width of the scale bar in characters.
const BAR_WIDTH: usize = 40;

fn band_char(classification: Classification) -> char {
    match classification {
        Classification::Optimal => '█',
        Classification::InRange => '▒',
        Classification::OutRange => '░',
    }
}

/// Renders the scale bar for a card: one character column per slice of
/// the domain, classified by the segment covering it, with the current
/// value marked.
pub fn render_bar(card: &CardModel) -> String {
    let span = card.domain.span();
    let mut bar = String::with_capacity(BAR_WIDTH * 3);

    for column in 0..BAR_WIDTH {
        // Sample the segment at the column's midpoint
        let position = card.domain.min + (column as f64 + 0.5) / BAR_WIDTH as f64 * span;
        let classification = card
            .segments
            .iter()
            .find(|segment| position >= segment.min && position < segment.max)
            .map(|segment| segment.classification)
            .unwrap_or(Classification::OutRange);
        bar.push(band_char(classification));
    }

    let marker = ((card.value - card.domain.min) / span * BAR_WIDTH as f64) as isize;
    let marker = marker.clamp(0, BAR_WIDTH as isize - 1) as usize;
    bar.replace_range(
        bar.char_indices()
            .nth(marker)
            .map(|(i, c)| i..i + c.len_utf8())
            .unwrap_or(0..0),
        "|",
    );

    bar
}

/// Renders a card's one-line summary.
pub fn render_card(card: &CardModel) -> String {
    format!(
        "{:<24} {:<14} {:>12}  ({})",
        card.title,
        format!("[{}]", card.status.label()),
        card.formatted_value,
        card.range_text,
    )
}

/// Renders a card's detail block: title, date, value, scale bar with
/// domain bounds, and the legend.
pub fn render_detail(card: &CardModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} — {}\n", card.name, card.date_label));
    out.push_str(&format!("Latest result: {}\n", card.formatted_value));
    out.push_str(&format!(
        "{} {} {}\n",
        card.min_label,
        render_bar(card),
        card.max_label
    ));
    for row in &card.legend {
        out.push_str(&format!("  {:<20} {}\n", row.text, row.label));
    }
    out
}
