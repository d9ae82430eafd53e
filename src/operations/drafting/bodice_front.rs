use crate::geometry::PatternPoint;
use crate::piece::PatternPiece;

use super::{assemble, vertical_grainline, waist_dart, BODICE_FRONT};

/// Ease added to the quarter bust, as a fraction of the bust.
const BUST_EASE: f64 = 1.0 / 44.0;

/// Ease added to the quarter waist, as a fraction of the waist.
const WAIST_EASE: f64 = 1.0 / 70.0;

/// Drafts the front bodice block with a waist dart under the bust point.
///
/// Width is a quarter bust plus ease. The waist dart takes an eighth of the
/// bust-to-waist difference, the neckline and shoulder slope come from the
/// across-shoulder measurement, and the center front dips below the waist by
/// a fortieth of the hip-to-waist difference to clear the abdomen.
#[derive(Debug, Clone, Copy)]
pub struct BodiceFront {
    bust: f64,
    waist: f64,
    hip: f64,
    shoulder: f64,
    center_front_length: f64,
}

impl BodiceFront {
    /// Creates a new `BodiceFront` drafting operation.
    #[must_use]
    pub fn new(bust: f64, waist: f64, hip: f64, shoulder: f64, center_front_length: f64) -> Self {
        Self {
            bust,
            waist,
            hip,
            shoulder,
            center_front_length,
        }
    }

    /// Executes the draft.
    #[must_use]
    pub fn execute(&self) -> PatternPiece {
        let Self {
            bust,
            waist,
            hip,
            shoulder,
            center_front_length: cfl,
        } = *self;

        let quarter_bust = bust / 4.0 + bust * BUST_EASE;
        let quarter_waist = waist / 4.0 + waist * WAIST_EASE;
        let dart_intake = (bust - waist) / 8.0;
        let front_drop = (hip - waist) / 40.0;

        let neck_width = shoulder / 6.0;
        let neck_depth = shoulder / 5.0;
        let shoulder_slope = shoulder / 9.0;
        let armhole_depth = bust / 6.0;

        let neck_y = cfl + neck_depth;
        let shoulder_y = neck_y - shoulder_slope;
        let underarm_y = shoulder_y - armhole_depth;

        // Bust point; the dart stops short of it.
        let apex_x = bust / 10.0;
        let apex_y = underarm_y - bust / 32.0;
        let tip_y = apex_y - bust / 44.0;

        let left_leg = PatternPoint::corner(apex_x - dart_intake / 2.0, 0.0);
        let tip = PatternPoint::corner(apex_x, tip_y);
        let right_leg = PatternPoint::corner(apex_x + dart_intake / 2.0, 0.0);

        let outline = vec![
            PatternPoint::corner(0.0, -front_drop),
            left_leg,
            tip,
            right_leg,
            PatternPoint::corner(quarter_waist + dart_intake, 0.0),
            PatternPoint::corner(quarter_bust, underarm_y),
            PatternPoint::curve(
                quarter_bust - bust / 36.0,
                underarm_y + armhole_depth * 0.15,
            ),
            PatternPoint::curve(
                shoulder / 2.0 - shoulder / 38.0,
                underarm_y + armhole_depth * 0.55,
            ),
            PatternPoint::corner(shoulder / 2.0, shoulder_y),
            PatternPoint::corner(neck_width, neck_y),
            PatternPoint::curve(neck_width * 0.8, cfl + neck_depth * 0.3),
            PatternPoint::corner(0.0, cfl),
        ];

        let grain_x = f64::midpoint(apex_x, quarter_bust);
        assemble(
            BODICE_FRONT,
            &outline,
            &[waist_dart(left_leg, tip, right_leg)],
            vertical_grainline(grain_x, cfl * 0.15, underarm_y * 0.9),
        )
    }
}
