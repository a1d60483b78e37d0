use serde::{Deserialize, Serialize};

use crate::Point;

/// Order in which the four corner points are handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandicapStyle {
    /// Lower-left, upper-right, lower-right, upper-left.
    #[default]
    Standard,
    /// Lower-left, upper-right, upper-left, lower-right.
    Tygem,
}

/// Hoshi-based handicap placement for a `width × height` board.
///
/// Returns at most `count` points, and none when the smaller side is 6 or
/// less or `count < 2`. Side and center points are only offered along odd
/// dimensions other than 7.
pub fn handicap_points(width: u8, height: u8, count: usize, style: HandicapStyle) -> Vec<Point> {
    if width.min(height) <= 6 || count < 2 {
        return Vec::new();
    }

    // Hoshi offset from edge: 3 for boards ≥ 13, 2 for smaller
    let near = |size: u8| if size >= 13 { 3 } else { 2 };
    let (near_x, near_y) = (near(width), near(height));
    let (far_x, far_y) = (width - near_x - 1, height - near_y - 1);
    let (mid_x, mid_y) = ((width - 1) / 2, (height - 1) / 2);

    let mut pts = match style {
        HandicapStyle::Standard => vec![
            (near_x, far_y),
            (far_x, near_y),
            (far_x, far_y),
            (near_x, near_y),
        ],
        HandicapStyle::Tygem => vec![
            (near_x, far_y),
            (far_x, near_y),
            (near_x, near_y),
            (far_x, far_y),
        ],
    };

    let odd_width = width % 2 == 1 && width != 7;
    let odd_height = height % 2 == 1 && height != 7;

    if odd_width && odd_height {
        if count == 5 {
            pts.push((mid_x, mid_y));
        }
        pts.extend([(near_x, mid_y), (far_x, mid_y)]);
        if count == 7 {
            pts.push((mid_x, mid_y));
        }
        pts.extend([(mid_x, near_y), (mid_x, far_y), (mid_x, mid_y)]);
    } else if odd_width {
        pts.extend([(mid_x, near_y), (mid_x, far_y)]);
    } else if odd_height {
        pts.extend([(near_x, mid_y), (far_x, mid_y)]);
    }

    pts.truncate(count);
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(size: u8, count: usize) -> Vec<Point> {
        handicap_points(size, size, count, HandicapStyle::Standard)
    }

    #[test]
    fn empty_for_small_boards_and_counts() {
        assert!(standard(5, 4).is_empty());
        assert!(standard(6, 2).is_empty());
        assert!(standard(19, 1).is_empty());
        assert!(standard(19, 0).is_empty());
        assert!(handicap_points(19, 6, 4, HandicapStyle::Standard).is_empty());
    }

    #[test]
    fn four_corners_on_19x19() {
        assert_eq!(standard(19, 4), vec![(3, 15), (15, 3), (15, 15), (3, 3)]);
        assert_eq!(
            handicap_points(19, 19, 4, HandicapStyle::Tygem),
            vec![(3, 15), (15, 3), (3, 3), (15, 15)]
        );
    }

    #[test]
    fn two_and_three_stones() {
        assert_eq!(standard(19, 2), vec![(3, 15), (15, 3)]);
        assert_eq!(standard(19, 3), vec![(3, 15), (15, 3), (15, 15)]);
    }

    #[test]
    fn center_inserted_for_odd_counts() {
        let five = standard(19, 5);
        assert_eq!(five.len(), 5);
        assert_eq!(five[4], (9, 9));

        let seven = standard(19, 7);
        assert_eq!(&seven[4..], &[(3, 9), (15, 9), (9, 9)]);

        let six = standard(19, 6);
        assert_eq!(&six[4..], &[(3, 9), (15, 9)]);
    }

    #[test]
    fn nine_stones_on_19x19() {
        let pts = standard(19, 9);
        let expected = [
            (3, 15),
            (15, 3),
            (15, 15),
            (3, 3),
            (3, 9),
            (15, 9),
            (9, 3),
            (9, 15),
            (9, 9),
        ];
        assert_eq!(pts, expected);
        assert_eq!(standard(19, 12).len(), 9);
    }

    #[test]
    fn smaller_boards_use_near_offset_two() {
        assert_eq!(standard(9, 4), vec![(2, 6), (6, 2), (6, 6), (2, 2)]);
        assert_eq!(standard(13, 5)[4], (6, 6));
    }

    #[test]
    fn seven_by_seven_has_corners_only() {
        assert_eq!(standard(7, 9), vec![(2, 4), (4, 2), (4, 4), (2, 2)]);
    }

    #[test]
    fn rectangular_boards_use_odd_axis() {
        // 19 wide, 14 tall: only top/bottom mid-points
        let pts = handicap_points(19, 14, 9, HandicapStyle::Standard);
        assert_eq!(&pts[4..], &[(9, 3), (9, 10)]);

        // 14 wide, 19 tall: only left/right mid-points
        let pts = handicap_points(14, 19, 9, HandicapStyle::Standard);
        assert_eq!(&pts[4..], &[(3, 9), (10, 9)]);

        assert_eq!(handicap_points(14, 14, 9, HandicapStyle::Standard).len(), 4);
    }
}
