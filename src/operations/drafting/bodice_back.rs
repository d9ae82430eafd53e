use crate::geometry::PatternPoint;
use crate::piece::PatternPiece;

use super::{assemble, vertical_grainline, waist_dart, BODICE_BACK};

/// Back ease is half the front's; the back carries less fullness.
const BUST_EASE: f64 = 1.0 / 88.0;
const WAIST_EASE: f64 = 1.0 / 70.0;

/// Drafts the back bodice block.
///
/// Mirrors the front draft without a bust point: a smaller waist dart (a
/// twelfth of the bust-to-waist difference) ends below the shoulder blades,
/// the neckline is shallow and the shoulder seam is eased slightly longer
/// than the front's.
#[derive(Debug, Clone, Copy)]
pub struct BodiceBack {
    bust: f64,
    waist: f64,
    shoulder: f64,
    center_back_length: f64,
}

impl BodiceBack {
    /// Creates a new `BodiceBack` drafting operation.
    #[must_use]
    pub fn new(bust: f64, waist: f64, shoulder: f64, center_back_length: f64) -> Self {
        Self {
            bust,
            waist,
            shoulder,
            center_back_length,
        }
    }

    /// Executes the draft.
    #[must_use]
    pub fn execute(&self) -> PatternPiece {
        let Self {
            bust,
            waist,
            shoulder,
            center_back_length: cbl,
        } = *self;

        let quarter_bust = bust / 4.0 + bust * BUST_EASE;
        let quarter_waist = waist / 4.0 + waist * WAIST_EASE;
        let dart_intake = (bust - waist) / 12.0;

        let neck_width = shoulder / 6.0 + shoulder / 60.0;
        let neck_depth = shoulder / 19.0;
        let shoulder_slope = shoulder / 10.0;
        let shoulder_x = shoulder / 2.0 + shoulder / 38.0;
        let armhole_depth = bust / 6.0;

        let neck_y = cbl + neck_depth;
        let shoulder_y = neck_y - shoulder_slope;
        let underarm_y = shoulder_y - armhole_depth;

        let dart_x = quarter_waist / 2.0;
        let left_leg = PatternPoint::corner(dart_x - dart_intake / 2.0, 0.0);
        let tip = PatternPoint::corner(dart_x, underarm_y - bust / 22.0);
        let right_leg = PatternPoint::corner(dart_x + dart_intake / 2.0, 0.0);

        let outline = vec![
            PatternPoint::corner(0.0, 0.0),
            left_leg,
            tip,
            right_leg,
            PatternPoint::corner(quarter_waist + dart_intake, 0.0),
            PatternPoint::corner(quarter_bust, underarm_y),
            PatternPoint::curve(quarter_bust - bust / 60.0, underarm_y + armhole_depth * 0.3),
            PatternPoint::corner(shoulder_x, shoulder_y),
            PatternPoint::corner(neck_width, neck_y),
            PatternPoint::curve(neck_width * 0.6, cbl + neck_depth * 0.15),
            PatternPoint::corner(0.0, cbl),
        ];

        let grain_x = f64::midpoint(dart_x, quarter_bust);
        assemble(
            BODICE_BACK,
            &outline,
            &[waist_dart(left_leg, tip, right_leg)],
            vertical_grainline(grain_x, cbl * 0.15, underarm_y * 0.9),
        )
    }
}
