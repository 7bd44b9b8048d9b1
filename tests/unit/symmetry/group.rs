//! Tests for symmetry tags and the recipe table

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use truchet_sonifier::MosaicError;
    use truchet_sonifier::symmetry::SymmetryGroup;
    use truchet_sonifier::symmetry::group::{CoordinateMap, Quadrant, Region, Tiling};

    // Tests every tag parses back to its group
    // Verified by giving pm_h the tag of pm_v
    #[test]
    fn test_tags_round_trip() {
        let tags: HashSet<_> = SymmetryGroup::ALL.iter().map(|group| group.tag()).collect();
        assert_eq!(tags.len(), 20);
        for group in SymmetryGroup::ALL {
            assert_eq!(group.tag().parse::<SymmetryGroup>().ok(), Some(group));
            assert_eq!(group.to_string(), group.tag());
        }
    }

    // Tests the legacy D2_s alias and unknown tags
    // Verified by removing the alias branch
    #[test]
    fn test_alias_and_unknown() {
        assert_eq!("D2_s".parse::<SymmetryGroup>().ok(), Some(SymmetryGroup::D2));
        assert!(matches!(
            "p6m".parse::<SymmetryGroup>(),
            Err(MosaicError::UnknownSymmetry { ref tag }) if tag == "p6m"
        ));
        assert!("d4".parse::<SymmetryGroup>().is_err());
    }

    // Tests point groups build the grid directly and wallpaper groups tile a motif
    // Verified by giving C2 periodic tiling
    #[test]
    fn test_point_and_wallpaper_split() {
        let point: Vec<_> = SymmetryGroup::ALL
            .into_iter()
            .filter(|group| !group.is_wallpaper())
            .map(SymmetryGroup::tag)
            .collect();
        assert_eq!(point, vec!["D4", "C4", "D2", "C2", "D1_h", "D1_v"]);

        let staggered: Vec<_> = SymmetryGroup::ALL
            .into_iter()
            .filter(|group| group.recipe().tiling == Tiling::Staggered)
            .map(SymmetryGroup::tag)
            .collect();
        assert_eq!(staggered, vec!["pg_h", "cm_s", "pgg", "cmm"]);
    }

    // Tests square requirements follow quarter turns and diagonals
    // Verified by dropping the LowerTriangle check from requires_square
    #[test]
    fn test_square_requirements() {
        let square: Vec<_> = SymmetryGroup::ALL
            .into_iter()
            .filter(|group| group.requires_square())
            .map(SymmetryGroup::tag)
            .collect();
        assert_eq!(square, vec!["D4", "C4", "p4", "p4m", "p4g"]);
        assert!(!SymmetryGroup::P1.requires_even_canvas());
        assert!(SymmetryGroup::P2.requires_even_canvas());
    }

    // Tests region membership on a 4x4 canvas
    // Verified by using x < y for the lower triangle
    #[test]
    fn test_region_cells() {
        let tl: Vec<_> = Region::Quadrant(Quadrant::TopLeft).cells(4, 4).collect();
        assert_eq!(tl, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

        let lower: Vec<_> = Region::LowerTriangle.cells(4, 4).collect();
        assert_eq!(lower, vec![(0, 0), (0, 1), (1, 1)]);

        assert_eq!(Region::LeftHalf.cells(4, 2).count(), 4);
        assert_eq!(Region::Whole.cells(3, 3).count(), 9);
        assert!(Region::Quadrant(Quadrant::BottomRight).contains(3, 3, 4, 4));
        assert!(!Region::TopHalf.contains(0, 2, 4, 4));
    }

    // Tests coordinate maps on a 4x4 canvas
    // Verified by using (y, w-1-x) for Rotate90Cw
    #[test]
    fn test_coordinate_maps() {
        let (w, h) = (4, 4);
        assert_eq!(CoordinateMap::MirrorHorizontal.apply(0, 1, w, h), Some((3, 1)));
        assert_eq!(CoordinateMap::MirrorVertical.apply(0, 1, w, h), Some((0, 2)));
        assert_eq!(CoordinateMap::Rotate180.apply(0, 1, w, h), Some((3, 2)));
        assert_eq!(CoordinateMap::Rotate90Cw.apply(0, 1, w, h), Some((2, 0)));
        assert_eq!(CoordinateMap::Rotate90Ccw.apply(0, 1, w, h), Some((1, 3)));
        assert_eq!(CoordinateMap::Transpose.apply(0, 1, w, h), Some((1, 0)));
        assert_eq!(CoordinateMap::Transpose.apply(3, 0, 4, 2), None);
    }

    // Tests each recipe's steps read from regions its domain or earlier steps fill
    // Verified by pointing the second C4 step at the bottom-left quadrant
    #[test]
    fn test_recipes_cover_canvas() {
        for group in SymmetryGroup::ALL {
            let recipe = group.recipe();
            let (w, h) = (4, 4);
            let mut filled: HashSet<(usize, usize)> = recipe.domain.cells(w, h).collect();
            for step in recipe.steps {
                let images: Vec<_> = step
                    .source
                    .cells(w, h)
                    .filter(|cell| filled.contains(cell))
                    .filter_map(|(x, y)| step.map.apply(x, y, w, h))
                    .collect();
                filled.extend(images);
            }
            assert_eq!(filled.len(), w * h, "{group} leaves cells uncovered");
        }
    }
}
