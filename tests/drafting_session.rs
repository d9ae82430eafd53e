#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::sync::Once;

use tailor::geometry::OutlineExt;
use tailor::operations::offset::offset_polygon;
use tailor::piece::{DartKind, DartSpec, FoldDirection, GrainKind, NotchKind};
use tailor::{PatternEngine, PatternPoint, PieceId, PieceOptions, Size, Units};

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn rectangle(width: f64, height: f64) -> Vec<PatternPoint> {
    vec![
        PatternPoint::corner(0.0, 0.0),
        PatternPoint::corner(width, 0.0),
        PatternPoint::corner(width, height),
        PatternPoint::corner(0.0, height),
    ]
}

fn engine_with_pattern() -> PatternEngine {
    init_tracing();
    let mut engine = PatternEngine::new();
    engine.create_pattern("Sheath dress", "M", Units::Centimeters);
    engine
}

#[test]
fn basic_bodice_front_scenario() {
    let engine = engine_with_pattern();
    let piece = engine.create_basic_bodice_front(88.0, 70.0, 94.0, 38.0, 40.0);
    assert_eq!(piece.name, "Bodice Front");
    assert!(piece.outline.len() > 3);
}

#[test]
fn piece_enrichment_persists() {
    let mut engine = engine_with_pattern();
    let piece = engine.create_piece("Front", &rectangle(20.0, 40.0), PieceOptions::default());
    let id = piece.id;
    engine.add_piece(piece);

    let notch = engine.add_notch(id, 0.5, NotchKind::Single).unwrap();
    assert_eq!(notch.piece_id, id);

    let stored = engine.piece(id).unwrap();
    assert_eq!(stored.notches.len(), 1);
    let only = stored.notches.values().next().unwrap();
    assert_eq!(only.position, 0.5);
    assert_eq!(only.kind, NotchKind::Single);
}

#[test]
fn out_of_range_notch_is_clamped() {
    let mut engine = engine_with_pattern();
    let piece = engine.create_piece("Front", &rectangle(20.0, 40.0), PieceOptions::default());
    let id = piece.id;
    engine.add_piece(piece);

    let under = engine.add_notch(id, -0.2, NotchKind::T).unwrap();
    let over = engine.add_notch(id, 3.0, NotchKind::Double).unwrap();
    assert_eq!(under.position, 0.0);
    assert_eq!(over.position, 1.0);
    assert_eq!(engine.piece(id).unwrap().notches.len(), 2);
}

#[test]
fn grading_three_sizes_scenario() {
    let mut engine = engine_with_pattern();
    let piece = engine.create_piece("Panel", &rectangle(20.0, 40.0), PieceOptions::default());
    let id = piece.id;
    engine.add_piece(piece);
    engine.add_grading_rule(id, 1, 2.0, 0.0).unwrap();

    let sizes = [Size::new("S", -1), Size::new("M", 0), Size::new("L", 1)];
    let graded = engine.grade_pattern(&sizes);
    assert_eq!(graded.size_names(), vec!["S", "M", "L"]);

    let outlines: Vec<_> = graded
        .iter()
        .map(|s| s.outline(id).unwrap().clone())
        .collect();
    assert_eq!(outlines[1][1].x - outlines[0][1].x, 2.0);
    assert_eq!(outlines[2][1].x - outlines[1][1].x, 2.0);
    for i in [0, 2, 3] {
        assert_eq!(outlines[0][i], outlines[1][i]);
        assert_eq!(outlines[1][i], outlines[2][i]);
    }
    assert_eq!(outlines[1], engine.piece(id).unwrap().outline);
}

#[test]
fn grading_linearity_over_a_size_run() {
    let mut engine = engine_with_pattern();
    let piece = engine.create_basic_skirt_front(70.0, 94.0, 60.0, 20.0);
    let id = piece.id;
    let base = piece.outline[2];
    engine.add_piece(piece);
    engine.add_grading_rule(id, 2, 1.5, -0.5).unwrap();

    let pattern = engine.pattern().unwrap();
    let sizes = pattern.size_run(&["XS", "S", "M", "L", "XL"]);
    let graded = engine.grade_pattern(&sizes);
    for size in graded.iter() {
        let g = f64::from(size.grade);
        let point = size.outline(id).unwrap()[2];
        assert_eq!(point.x, base.x + 1.5 * g);
        assert_eq!(point.y, base.y + -0.5 * g);
    }
}

#[test]
fn unknown_piece_id_is_a_safe_no_op() {
    let mut engine = engine_with_pattern();
    let spec = DartSpec {
        apex: PatternPoint::corner(5.0, 10.0),
        left_leg: PatternPoint::corner(4.0, 0.0),
        right_leg: PatternPoint::corner(6.0, 0.0),
        width: 2.0,
        length: 10.0,
        fold_direction: FoldDirection::Left,
        kind: DartKind::Straight,
    };
    let missing = PieceId::generate();

    assert!(engine.add_dart(missing, spec).is_none());
    assert!(engine.add_notch(missing, 0.1, NotchKind::Single).is_none());
    assert!(engine.add_grading_rule(missing, 0, 1.0, 1.0).is_none());
    engine.set_grainline(
        missing,
        PatternPoint::corner(0.0, 0.0),
        PatternPoint::corner(0.0, 1.0),
        GrainKind::Straight,
    );
    assert!(engine.piece(missing).is_none());
    assert_eq!(engine.pattern().unwrap().piece_count(), 0);
}

#[test]
fn darts_are_stored_verbatim() {
    let mut engine = engine_with_pattern();
    let piece = engine.create_piece("Front", &rectangle(20.0, 40.0), PieceOptions::default());
    let id = piece.id;
    engine.add_piece(piece);

    let spec = DartSpec {
        apex: PatternPoint::corner(10.0, 15.0),
        left_leg: PatternPoint::corner(9.0, 0.0),
        right_leg: PatternPoint::corner(11.0, 0.0),
        width: 2.0,
        length: 15.0,
        fold_direction: FoldDirection::Right,
        kind: DartKind::Curved,
    };
    let dart = engine.add_dart(id, spec).unwrap();
    assert_eq!(dart.spec, spec);
    let stored = engine.piece(id).unwrap();
    assert_eq!(stored.darts[dart.id].spec, spec);
    assert_eq!(stored.outline, rectangle(20.0, 40.0));
}

#[test]
fn seam_allowance_preview_on_drafted_blocks() {
    let engine = engine_with_pattern();
    let pieces = [
        engine.create_basic_bodice_front(88.0, 70.0, 94.0, 38.0, 40.0),
        engine.create_basic_bodice_back(88.0, 70.0, 38.0, 40.0),
        engine.create_basic_sleeve(44.0, 60.0, 16.0),
        engine.create_basic_skirt_front(70.0, 94.0, 60.0, 20.0),
    ];
    for piece in &pieces {
        let zero = engine.add_seam_allowance(piece, 0.0);
        assert_eq!(zero, piece.outline);

        let cut = engine.add_seam_allowance(piece, 1.5);
        assert_eq!(cut.len(), piece.outline.len());
        assert!(cut.signed_area() > piece.outline.signed_area());
    }
}

#[test]
fn perimeter_fraction_wraps_for_drafted_outline() {
    let engine = engine_with_pattern();
    let sleeve = engine.create_basic_sleeve(44.0, 60.0, 16.0);
    let first = sleeve.outline[0].position();
    assert_eq!(sleeve.outline.point_at_fraction(0.0).unwrap(), first);
    assert_eq!(sleeve.outline.point_at_fraction(1.0).unwrap(), first);
}

#[test]
fn offset_perimeter_grows_for_convex_outline() {
    init_tracing();
    let outline = rectangle(12.0, 30.0);
    let base = outline.perimeter_length();
    for d in [0.1, 1.0, 2.5] {
        assert!(offset_polygon(&outline, d).perimeter_length() > base);
    }
}

#[test]
fn pattern_survives_storage_round_trip() {
    let mut engine = engine_with_pattern();
    let piece = engine.create_basic_bodice_front(88.0, 70.0, 94.0, 38.0, 40.0);
    let id = piece.id;
    engine.add_piece(piece);
    engine.add_notch(id, 0.3, NotchKind::Double).unwrap();
    engine.add_grading_rule(id, 4, 1.0, 0.0).unwrap();

    let json = serde_json::to_string(engine.pattern().unwrap()).unwrap();
    assert!(json.contains("\"Bodice Front\""));
    assert!(json.contains("\"units\":\"cm\""));

    let restored: tailor::Pattern = serde_json::from_str(&json).unwrap();
    let piece = restored.piece(id).unwrap();
    assert_eq!(piece.notches.len(), 1);
    assert_eq!(piece.grading_rules.len(), 1);
    assert_eq!(piece.outline, engine.piece(id).unwrap().outline);
}
