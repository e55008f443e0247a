//! Composition of the per-regime condition maps into one category grid.
//!
//! The individual transition criteria overlap; a fixed precedence makes
//! the final map mutually exclusive. Dispersed bubbles win outright, then
//! stratified, then annular. Bubbly and elongated-bubble are alternatives
//! for the same slot: when the fluid pair and pipe admit bubbly flow
//! anywhere, elongated bubbles are not drawn at all. Whatever is left is
//! intermittent, split into slug and churn by the slug-body packing.

use ndarray::{Array2, Zip};

/// Stable category labels, used directly as the values of the exported
/// grid and as palette indices when plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum FlowRegime {
    DispersedBubble = 0,
    Stratified = 1,
    Annular = 2,
    Bubbly = 3,
    ElongatedBubble = 4,
    Slug = 5,
    Churn = 6,
}

/// Sentinel for cells no map has claimed yet. The composition always
/// overwrites every cell, so it never survives into the result.
pub const UNCLASSIFIED: i8 = -1;

impl FlowRegime {
    pub const ALL: [FlowRegime; 7] = [
        FlowRegime::DispersedBubble,
        FlowRegime::Stratified,
        FlowRegime::Annular,
        FlowRegime::Bubbly,
        FlowRegime::ElongatedBubble,
        FlowRegime::Slug,
        FlowRegime::Churn,
    ];

    pub fn label(self) -> i8 {
        self as i8
    }

    pub fn name(self) -> &'static str {
        match self {
            FlowRegime::DispersedBubble => "dispersed bubble",
            FlowRegime::Stratified => "stratified",
            FlowRegime::Annular => "annular",
            FlowRegime::Bubbly => "bubbly",
            FlowRegime::ElongatedBubble => "elongated bubble",
            FlowRegime::Slug => "slug",
            FlowRegime::Churn => "churn",
        }
    }

    pub fn from_label(label: i8) -> Option<FlowRegime> {
        FlowRegime::ALL.into_iter().find(|r| r.label() == label)
    }
}

/// The six boolean condition maps the composition consumes, all on the
/// same grid.
#[derive(Debug, Clone)]
pub struct RegimeMaps {
    pub dispersed_bubble: Array2<bool>,
    pub stratified: Array2<bool>,
    pub annular: Array2<bool>,
    pub bubbly: Array2<bool>,
    pub elongated_bubble: Array2<bool>,
    pub churn: Array2<bool>,
}

impl RegimeMaps {
    /// Shape consistency check; the maps come from independent solvers
    /// and a mismatch means a caller mixed grids.
    pub fn validate(&self) -> Result<(), String> {
        let shape = self.dispersed_bubble.dim();
        let all = [
            ("stratified", &self.stratified),
            ("annular", &self.annular),
            ("bubbly", &self.bubbly),
            ("elongated bubble", &self.elongated_bubble),
            ("churn", &self.churn),
        ];
        for (name, map) in all {
            if map.dim() != shape {
                return Err(format!(
                    "{} map has shape {:?}, expected {:?}",
                    name,
                    map.dim(),
                    shape
                ));
            }
        }
        Ok(())
    }
}

/// Fold the condition maps into one mutually-exclusive category grid.
pub fn compose(maps: &RegimeMaps) -> Result<Array2<i8>, String> {
    maps.validate()?;

    let mut category = Array2::from_elem(maps.dispersed_bubble.raw_dim(), UNCLASSIFIED);

    let claim = |category: &mut Array2<i8>, map: &Array2<bool>, regime: FlowRegime| {
        Zip::from(category).and(map).for_each(|cell, &wanted| {
            if wanted && *cell == UNCLASSIFIED {
                *cell = regime.label();
            }
        });
    };

    claim(&mut category, &maps.dispersed_bubble, FlowRegime::DispersedBubble);
    claim(&mut category, &maps.stratified, FlowRegime::Stratified);
    claim(&mut category, &maps.annular, FlowRegime::Annular);

    if maps.bubbly.iter().any(|&cell| cell) {
        claim(&mut category, &maps.bubbly, FlowRegime::Bubbly);
    } else {
        claim(&mut category, &maps.elongated_bubble, FlowRegime::ElongatedBubble);
    }

    let not_churn = maps.churn.mapv(|cell| !cell);
    claim(&mut category, &not_churn, FlowRegime::Slug);
    claim(&mut category, &maps.churn, FlowRegime::Churn);

    Ok(category)
}

/// True at every cell whose category differs from its right or lower
/// neighbour: the transition boundaries of the map.
pub fn boundary_cells(category: &Array2<i8>) -> Array2<bool> {
    let (rows, cols) = category.dim();
    let mut edges = Array2::from_elem(category.raw_dim(), false);

    for row in 0..rows {
        for col in 0..cols {
            let here = category[[row, col]];
            let right_differs = col + 1 < cols && category[[row, col + 1]] != here;
            let below_differs = row + 1 < rows && category[[row + 1, col]] != here;
            edges[[row, col]] = right_differs || below_differs;
        }
    }

    edges
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn empty_maps(rows: usize, cols: usize) -> RegimeMaps {
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
    fn test_dispersed_wins_over_everything() {
        let mut maps = empty_maps(1, 1);
        maps.dispersed_bubble[[0, 0]] = true;
        maps.stratified[[0, 0]] = true;
        maps.annular[[0, 0]] = true;
        maps.bubbly[[0, 0]] = true;

        let category = compose(&maps).unwrap();
        assert_eq!(category[[0, 0]], FlowRegime::DispersedBubble.label());
    }

    #[test]
    fn test_stratified_beats_annular() {
        let mut maps = empty_maps(1, 1);
        maps.stratified[[0, 0]] = true;
        maps.annular[[0, 0]] = true;

        let category = compose(&maps).unwrap();
        assert_eq!(category[[0, 0]], FlowRegime::Stratified.label());
    }

    #[test]
    fn test_bubbly_suppresses_elongated_bubble() {
        // One bubbly cell anywhere removes elongated bubbles from the
        // whole map; the elongated cell falls through to slug.
        let mut maps = empty_maps(1, 2);
        maps.bubbly[[0, 0]] = true;
        maps.elongated_bubble[[0, 1]] = true;

        let category = compose(&maps).unwrap();
        assert_eq!(category[[0, 0]], FlowRegime::Bubbly.label());
        assert_eq!(category[[0, 1]], FlowRegime::Slug.label());
    }

    #[test]
    fn test_elongated_bubble_when_bubbly_impossible() {
        let mut maps = empty_maps(1, 2);
        maps.elongated_bubble[[0, 0]] = true;
        maps.churn[[0, 1]] = true;

        let category = compose(&maps).unwrap();
        assert_eq!(category[[0, 0]], FlowRegime::ElongatedBubble.label());
        assert_eq!(category[[0, 1]], FlowRegime::Churn.label());
    }

    #[test]
    fn test_leftovers_become_slug() {
        let maps = empty_maps(2, 2);
        let category = compose(&maps).unwrap();
        assert!(category.iter().all(|&c| c == FlowRegime::Slug.label()));
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let mut maps = empty_maps(2, 2);
        maps.churn = Array2::from_elem((3, 2), false);
        assert!(compose(&maps).is_err());
    }

    #[test]
    fn test_boundary_cells_mark_transitions() {
        let category = arr2(&[[1, 1, 2], [1, 1, 2], [5, 5, 5]]);
        let edges = boundary_cells(&category);

        assert!(!edges[[0, 0]]);
        assert!(edges[[0, 1]], "regime changes to the right");
        assert!(edges[[1, 0]], "regime changes below");
        assert!(!edges[[2, 2]], "last cell has no differing neighbours");
    }

    #[test]
    fn test_label_round_trip() {
        for regime in FlowRegime::ALL {
            assert_eq!(FlowRegime::from_label(regime.label()), Some(regime));
        }
        assert_eq!(FlowRegime::from_label(UNCLASSIFIED), None);
    }
}
