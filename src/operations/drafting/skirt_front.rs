use crate::geometry::PatternPoint;
use crate::piece::PatternPiece;

use super::{assemble, vertical_grainline, waist_dart, SKIRT_FRONT};

const HIP_EASE: f64 = 1.0 / 94.0;
const WAIST_EASE: f64 = 1.0 / 70.0;

/// Share of the hip-to-waist shaping taken by the dart; the side seam takes
/// the rest.
const DART_SHARE: f64 = 0.5;

/// Drafts the front skirt block.
///
/// The panel is a quarter hip wide at the hip line and flares slightly to the
/// hem. The waist is brought in to a quarter waist by splitting the
/// difference between a waist dart and the curved side seam.
#[derive(Debug, Clone, Copy)]
pub struct SkirtFront {
    waist: f64,
    hip: f64,
    length: f64,
    waist_to_hip: f64,
}

impl SkirtFront {
    /// Creates a new `SkirtFront` drafting operation.
    #[must_use]
    pub fn new(waist: f64, hip: f64, length: f64, waist_to_hip: f64) -> Self {
        Self {
            waist,
            hip,
            length,
            waist_to_hip,
        }
    }

    /// Executes the draft.
    #[must_use]
    pub fn execute(&self) -> PatternPiece {
        let Self {
            waist,
            hip,
            length,
            waist_to_hip,
        } = *self;

        let quarter_hip = hip / 4.0 + hip * HIP_EASE;
        let quarter_waist = waist / 4.0 + waist * WAIST_EASE;
        let shaping = quarter_hip - quarter_waist;
        let dart_intake = shaping * DART_SHARE;
        let side_intake = shaping - dart_intake;

        let side_waist_x = quarter_hip - side_intake;
        let side_rise = shaping / 8.0;
        let hem_flare = (length - waist_to_hip) / 20.0;

        let dart_x = side_waist_x * 0.45;
        let right_leg = PatternPoint::corner(dart_x + dart_intake / 2.0, 0.0);
        let tip = PatternPoint::corner(dart_x, -waist_to_hip * 0.55);
        let left_leg = PatternPoint::corner(dart_x - dart_intake / 2.0, 0.0);

        let outline = vec![
            PatternPoint::corner(0.0, -length),
            PatternPoint::corner(quarter_hip + hem_flare, -length),
            PatternPoint::corner(quarter_hip, -waist_to_hip),
            PatternPoint::curve(quarter_hip - side_intake * 0.25, -waist_to_hip * 0.45),
            PatternPoint::corner(side_waist_x, side_rise),
            right_leg,
            tip,
            left_leg,
            PatternPoint::corner(0.0, 0.0),
        ];

        assemble(
            SKIRT_FRONT,
            &outline,
            &[waist_dart(left_leg, tip, right_leg)],
            vertical_grainline(quarter_hip / 2.0, -length * 0.9, -waist_to_hip),
        )
    }
}
