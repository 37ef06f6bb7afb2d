//! Built-in biomarker seed list.

use biomarker_types::BiomarkerSeed;

/// The default set of biomarkers shown on the dashboard, in display
/// order. Seed values are placeholders overridden by any measurement
/// embedded in the reference table.
pub fn default_biomarkers() -> Vec<BiomarkerSeed> {
    vec![
        BiomarkerSeed::new("Metabolic Health Score", 78.0, "Aug 15, 2025"),
        BiomarkerSeed::new("Creatinine", 0.63, "Aug 15, 2025"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_order() {
        let seeds = default_biomarkers();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].name, "Metabolic Health Score");
        assert_eq!(seeds[1].name, "Creatinine");
    }
}
