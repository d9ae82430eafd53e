use std::f64::consts::TAU;

use crate::geometry::PatternPoint;
use crate::piece::PatternPiece;

use super::{assemble, vertical_grainline, SLEEVE};

/// Number of segments approximating the sleeve cap between the underarms.
const CAP_SEGMENTS: u32 = 8;

/// Wrist ease as a fraction of the wrist circumference.
const WRIST_EASE: f64 = 1.0 / 8.0;

/// Drafts a one-piece straight sleeve.
///
/// The cap rises a third of the armhole above the underarm line, and its
/// width is chosen so that each half of the cap spans half the armhole as a
/// straight diagonal. The cap is sampled as a raised-cosine curve; the body
/// tapers in straight lines down to the eased wrist. `length` runs from the
/// top of the cap to the wrist.
#[derive(Debug, Clone, Copy)]
pub struct Sleeve {
    armhole: f64,
    length: f64,
    wrist: f64,
}

impl Sleeve {
    /// Creates a new `Sleeve` drafting operation.
    #[must_use]
    pub fn new(armhole: f64, length: f64, wrist: f64) -> Self {
        Self {
            armhole,
            length,
            wrist,
        }
    }

    /// Executes the draft.
    #[must_use]
    pub fn execute(&self) -> PatternPiece {
        let cap_height = self.armhole / 3.0;
        let half_armhole = self.armhole / 2.0;
        let half_width = (half_armhole * half_armhole - cap_height * cap_height)
            .max(0.0)
            .sqrt();
        let half_wrist = f64::midpoint(self.wrist, self.wrist * WRIST_EASE);
        let underarm_y = self.length - cap_height;

        let mut outline = vec![
            PatternPoint::corner(-half_wrist, 0.0),
            PatternPoint::corner(half_wrist, 0.0),
            PatternPoint::corner(half_width, underarm_y),
        ];
        outline.extend((1..CAP_SEGMENTS).map(|k| {
            let s = f64::from(k) / f64::from(CAP_SEGMENTS);
            PatternPoint::curve(
                half_width * (1.0 - 2.0 * s),
                underarm_y + cap_height * (1.0 - (TAU * s).cos()) / 2.0,
            )
        }));
        outline.push(PatternPoint::corner(-half_width, underarm_y));

        assemble(
            SLEEVE,
            &outline,
            &[],
            vertical_grainline(0.0, self.length * 0.1, underarm_y),
        )
    }
}
