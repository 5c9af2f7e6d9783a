use super::*;
use crate::core::{InMemoryMarkers, MarkerLayer, MarkerState};
use approx::assert_relative_eq;

fn chain_with(kind: CurveKind, xs: &[f32]) -> ControlPointChain {
    let mut chain = ControlPointChain::new(kind);
    for &x in xs {
        chain.append(Vec3::new(x, 0.0, 0.0));
    }
    chain
}

fn xs(chain: &ControlPointChain) -> Vec<f32> {
    chain.points().iter().map(|p| p.position.x).collect()
}

fn assert_invariants(chain: &ControlPointChain) {
    let pts = chain.points();
    if pts.len() < 2 {
        return;
    }
    assert_eq!(pts[0].t, 0.0);
    assert_eq!(pts[pts.len() - 1].t, 1.0);
    assert!(pts.windows(2).all(|w| w[0].t <= w[1].t));
    assert_eq!(pts[0].tangent, Vec3::ZERO);
    assert_eq!(pts[pts.len() - 1].tangent, Vec3::ZERO);
    for p in pts {
        assert!(p.width >= 0.0);
        assert_relative_eq!(p.normal.length(), 1.0, epsilon = 1e-5);
    }
}

// ── append / insert / remove_last ──

#[test]
fn test_append_uses_defaults() {
    let mut chain = ControlPointChain::new(CurveKind::Bezier);
    let id = chain.append(Vec3::new(1.0, 2.0, 3.0));

    let p = chain.get(id).expect("Punkt erwartet");
    assert_eq!(p.normal, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(p.width, 1.0);
    assert_eq!(p.t, 0.0);
    assert_eq!(p.tangent, Vec3::ZERO);
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.last_id(), Some(id));
}

#[test]
fn test_ids_are_unique_and_not_reused() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 1.0, 2.0]);
    let removed = chain.remove_last(None).expect("Punkt erwartet");
    let fresh = chain.append(Vec3::new(5.0, 0.0, 0.0));
    assert_ne!(removed.id, fresh);

    let mut ids: Vec<_> = chain.points().iter().map(|p| p.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_invariants_hold_after_every_mutation() {
    let mut chain = ControlPointChain::new(CurveKind::CatmullRom);
    let inputs = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 1.0, 0.0),
        Vec3::new(20.0, 0.0, 5.0),
        Vec3::new(4.0, 0.0, 1.0),
        Vec3::new(30.0, -2.0, 0.0),
        Vec3::new(15.0, 3.0, 3.0),
    ];
    for (i, &p) in inputs.iter().enumerate() {
        if i % 2 == 0 {
            chain.append(p);
        } else {
            chain.insert(p);
        }
        assert_invariants(&chain);
    }
    while chain.remove_last(None).is_some() {
        assert_invariants(&chain);
    }
    assert!(chain.is_empty());
}

#[test]
fn test_parameters_follow_sequence_order() {
    let chain = chain_with(CurveKind::Bezier, &[0.0, 10.0, 20.0, 30.0, 40.0]);
    let ts: Vec<f32> = chain.points().iter().map(|p| p.t).collect();
    assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_insert_after_last_point() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0]);
    chain.insert(Vec3::new(9.0, 0.0, 0.0));
    assert_eq!(xs(&chain), vec![0.0, 10.0, 9.0]);
}

#[test]
fn test_insert_between_interior_neighbours() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0, 20.0]);
    chain.insert(Vec3::new(9.0, 0.0, 0.0));
    assert_eq!(xs(&chain), vec![0.0, 9.0, 10.0, 20.0]);

    // Nur Nachbar-Abstände zählen: 9 liegt näher als 20 → vor den Anker 10,
    // obwohl 12 geometrisch hinter 10 liegt
    chain.insert(Vec3::new(12.0, 0.0, 0.0));
    assert_eq!(xs(&chain), vec![0.0, 9.0, 12.0, 10.0, 20.0]);
    assert_invariants(&chain);
}

#[test]
fn test_insert_into_empty_and_single_chain() {
    let mut chain = ControlPointChain::new(CurveKind::Bezier);
    chain.insert(Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(xs(&chain), vec![3.0]);

    chain.insert(Vec3::new(-3.0, 0.0, 0.0));
    assert_eq!(xs(&chain), vec![3.0, -3.0]);
    assert_invariants(&chain);
}

#[test]
fn test_insert_uses_default_attributes() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0]);
    let id = chain.insert(Vec3::new(5.0, 1.0, 0.0));
    let p = chain.get(id).expect("Punkt erwartet");
    assert_eq!(p.normal, Vec3::Y);
    assert_eq!(p.width, 1.0);
}

#[test]
fn test_remove_last_on_empty_is_noop() {
    let mut chain = ControlPointChain::new(CurveKind::Bezier);
    assert!(chain.remove_last(None).is_none());
    assert!(chain.is_empty());
}

#[test]
fn test_append_then_remove_restores_previous_state() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 4.0, 9.0]);
    chain.insert(Vec3::new(6.0, 2.0, 0.0));
    let before = chain.points().to_vec();

    chain.append(Vec3::new(50.0, 5.0, 5.0));
    assert_eq!(chain.len(), before.len() + 1);
    chain.remove_last(None);

    assert_eq!(chain.points(), before.as_slice());
}

#[test]
fn test_remove_last_releases_marker() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0]);
    let mut markers = InMemoryMarkers::new();
    for p in chain.points() {
        markers.spawn(p);
    }
    let last = chain.last_id().expect("Punkt erwartet");

    let removed = chain.remove_last(Some(&mut markers)).expect("Punkt erwartet");
    assert_eq!(removed.id, last);
    assert!(markers.marker_state(last).is_none());
    assert_eq!(markers.len(), 1);
}

// ── Marker-Layer ──

#[test]
fn test_update_from_markers_pulls_edits() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0, 20.0]);
    let mut markers = InMemoryMarkers::new();
    for p in chain.points() {
        markers.spawn(p);
    }
    let mid = chain.points()[1].id;
    markers.drag(mid, |state| {
        state.position = Vec3::new(10.0, 5.0, 0.0);
        state.normal_offset = Vec3::new(0.0, 0.5, 0.0);
        state.width_offset = Vec3::new(2.5, 0.0, 0.0);
    });

    chain.update_from_markers(&mut markers);

    let p = chain.get(mid).expect("Punkt erwartet");
    assert_eq!(p.position, Vec3::new(10.0, 5.0, 0.0));
    assert_eq!(p.normal, Vec3::Y);
    assert_eq!(p.width, 2.5);
    // Tangente der Mitte folgt der neuen Lage nicht in y (symmetrische Nachbarn)
    assert_relative_eq!(p.tangent.y, 0.0);
    assert_relative_eq!(p.tangent.x, 30.0, epsilon = 1e-4);
    assert_invariants(&chain);
}

#[test]
fn test_update_from_markers_clamps_long_normal_and_writes_back() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0]);
    let mut markers = InMemoryMarkers::new();
    for p in chain.points() {
        markers.spawn(p);
    }
    let first = chain.points()[0].id;
    markers.drag(first, |state| {
        state.normal_offset = Vec3::new(3.0, 4.0, 0.0);
        state.width_offset = Vec3::new(1.5, 0.7, -0.2);
    });

    chain.update_from_markers(&mut markers);

    let p = chain.get(first).expect("Punkt erwartet");
    assert_relative_eq!(p.normal.x, 0.6, epsilon = 1e-6);
    assert_relative_eq!(p.normal.y, 0.8, epsilon = 1e-6);
    assert_eq!(p.width, 1.5);

    let state = markers.marker_state(first).expect("Marker erwartet");
    assert_relative_eq!(state.normal_offset.length(), 1.0, epsilon = 1e-6);
    assert_eq!(state.width_offset, Vec3::new(1.5, 0.0, 0.0));
}

#[test]
fn test_update_from_markers_clamps_negative_width() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0]);
    let mut markers = InMemoryMarkers::new();
    for p in chain.points() {
        markers.spawn(p);
    }
    let last = chain.points()[1].id;
    markers.drag(last, |state| state.width_offset = Vec3::new(-2.0, 0.0, 0.0));

    chain.update_from_markers(&mut markers);

    assert_eq!(chain.get(last).map(|p| p.width), Some(0.0));
    assert_eq!(
        markers.marker_state(last).map(|s| s.width_offset),
        Some(Vec3::ZERO)
    );
}

#[test]
fn test_update_from_markers_keeps_normal_for_zero_offset() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0]);
    let mut markers = InMemoryMarkers::new();
    for p in chain.points() {
        markers.spawn(p);
    }
    let first = chain.points()[0].id;
    markers.drag(first, |state| state.normal_offset = Vec3::ZERO);

    chain.update_from_markers(&mut markers);
    assert_eq!(chain.get(first).map(|p| p.normal), Some(Vec3::Y));
}

#[test]
fn test_update_from_markers_skips_missing_markers() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0]);
    let mut markers = InMemoryMarkers::new();
    // Nur der zweite Punkt hat Marker
    let second = chain.points()[1].clone();
    markers.spawn(&second);
    markers.drag(second.id, |state| state.position = Vec3::new(10.0, 0.0, 8.0));

    chain.update_from_markers(&mut markers);

    assert_eq!(chain.points()[0].position, Vec3::ZERO);
    assert_eq!(chain.points()[1].position, Vec3::new(10.0, 0.0, 8.0));
}

#[test]
fn test_set_visibility_forwards_to_all_markers() {
    let chain = chain_with(CurveKind::Bezier, &[0.0, 10.0, 20.0]);
    let mut markers = InMemoryMarkers::new();
    for p in chain.points() {
        markers.spawn(p);
    }

    chain.set_visibility(false, &mut markers);
    assert!(chain
        .points()
        .iter()
        .all(|p| markers.is_visible(p.id) == Some(false)));

    chain.set_visibility(true, &mut markers);
    assert!(chain
        .points()
        .iter()
        .all(|p| markers.is_visible(p.id) == Some(true)));
}

#[test]
fn test_marker_state_for_point_layout() {
    let chain = chain_with(CurveKind::Bezier, &[2.0]);
    let state = MarkerState::for_point(&chain.points()[0]);
    assert_eq!(state.position, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(state.normal_offset, Vec3::Y);
    assert_eq!(state.width_offset, Vec3::X);
}

// ── Auswertung ──

#[test]
fn test_try_point_at_degenerate_chains() {
    let mut chain = ControlPointChain::new(CurveKind::Bezier);
    assert_eq!(
        chain.try_point_at(0.5),
        Err(SplineError::TooFewControlPoints { count: 0 })
    );
    chain.append(Vec3::ONE);
    assert_eq!(
        chain.try_point_at(0.5),
        Err(SplineError::TooFewControlPoints { count: 1 })
    );
    chain.append(Vec3::new(3.0, 1.0, 1.0));
    assert!(chain.try_point_at(0.5).is_ok());
}

#[test]
#[should_panic(expected = "mindestens 2")]
fn test_point_at_panics_on_single_point() {
    let chain = chain_with(CurveKind::CatmullRom, &[1.0]);
    let _ = chain.point_at(0.0);
}

#[test]
fn test_point_at_hits_endpoints() {
    for kind in CurveKind::all() {
        let chain = chain_with(kind, &[0.0, 7.0, 3.0, 12.0]);
        assert!(chain.point_at(0.0).distance(Vec3::ZERO) < 1e-5);
        assert!(chain.point_at(1.0).distance(Vec3::new(12.0, 0.0, 0.0)) < 1e-4);
    }
}

// ── Sampler ──

#[test]
fn test_segments_two_points() {
    let chain = chain_with(CurveKind::Bezier, &[0.0, 10.0]);
    let segments: Vec<_> = chain.segments(0.005).collect();
    assert_eq!(segments.len(), 200);
    assert_eq!(chain.segments(0.005).len(), 200);

    for pair in segments.windows(2) {
        assert!(pair[0].1.distance(pair[1].0) < 1e-6);
    }
    assert!(segments[0].0.distance(Vec3::ZERO) < 1e-6);
    assert!(segments[199].1.distance(Vec3::new(10.0, 0.0, 0.0)) < 1e-4);
}

#[test]
fn test_segments_are_restartable() {
    let chain = chain_with(CurveKind::CatmullRom, &[0.0, 5.0, 2.0]);
    let sampler = chain.segments(0.1);
    let first: Vec<_> = sampler.clone().collect();
    let second: Vec<_> = sampler.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
}

#[test]
fn test_segments_empty_for_degenerate_chains() {
    let empty = ControlPointChain::new(CurveKind::Bezier);
    assert_eq!(empty.segments(0.005).count(), 0);

    let single = chain_with(CurveKind::Bezier, &[1.0]);
    assert_eq!(single.segments(0.005).count(), 0);

    let valid = chain_with(CurveKind::Bezier, &[0.0, 1.0]);
    assert_eq!(valid.segments(0.0).count(), 0);
}

// ── Frames ──

#[test]
fn test_frame_blends_width_and_normal() {
    let mut chain = chain_with(CurveKind::Bezier, &[0.0, 10.0]);
    let mut markers = InMemoryMarkers::new();
    for p in chain.points() {
        markers.spawn(p);
    }
    let last = chain.points()[1].id;
    markers.drag(last, |state| {
        state.width_offset = Vec3::new(3.0, 0.0, 0.0);
        state.normal_offset = Vec3::X;
    });
    chain.update_from_markers(&mut markers);

    let frame = chain.frame_at(0.5).expect("Frame erwartet");
    assert_relative_eq!(frame.width, 2.0);
    assert_relative_eq!(frame.normal.length(), 1.0, epsilon = 1e-6);
    assert_relative_eq!(frame.normal.x, frame.normal.y, epsilon = 1e-6);
    assert_relative_eq!(frame.position.x, 5.0, epsilon = 1e-4);
}

#[test]
fn test_frames_cover_whole_curve() {
    let chain = chain_with(CurveKind::CatmullRom, &[0.0, 10.0, 20.0]);
    let frames = chain.frames(0.25);
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[0].t, 0.0);
    assert_eq!(frames[4].t, 1.0);
    assert!(frames[4].position.distance(Vec3::new(20.0, 0.0, 0.0)) < 1e-4);

    assert!(chain_with(CurveKind::Bezier, &[1.0]).frames(0.25).is_empty());
    assert!(chain_with(CurveKind::Bezier, &[1.0]).frame_at(0.0).is_none());
}

// ── Bogenlänge ──

#[test]
fn test_polyline_and_length_of_straight_chain() {
    let chain = chain_with(CurveKind::Bezier, &[0.0, 4.0, 8.0]);
    let polyline = chain.polyline(0.01);
    assert_eq!(polyline.len(), 101);
    assert!(polyline[0].distance(Vec3::ZERO) < 1e-6);
    assert!(polyline[100].distance(Vec3::new(8.0, 0.0, 0.0)) < 1e-4);
    assert_relative_eq!(chain.approx_length(0.01), 8.0, epsilon = 1e-3);

    assert!(chain_with(CurveKind::Bezier, &[1.0]).polyline(0.01).is_empty());
    assert_eq!(chain_with(CurveKind::Bezier, &[1.0]).approx_length(0.01), 0.0);
}

#[test]
fn test_resampled_points_are_evenly_spaced() {
    let chain = chain_with(CurveKind::CatmullRom, &[0.0, 3.0, 10.0]);
    let points = chain.resampled(0.005, 1.0);

    assert_eq!(points.len(), 11);
    assert!(points[0].distance(Vec3::ZERO) < 1e-6);
    assert!(points[10].distance(Vec3::new(10.0, 0.0, 0.0)) < 1e-4);
    for pair in points.windows(2) {
        assert!((pair[0].distance(pair[1]) - 1.0).abs() < 0.01);
    }
}

// ── Optionen ──

#[test]
fn test_with_options_applies_defaults() {
    let options = SplineOptions {
        default_width: 3.0,
        default_normal: Vec3::new(0.0, 0.0, 2.0),
        ..SplineOptions::default()
    };
    let mut chain = ControlPointChain::with_options(CurveKind::CatmullRom, &options);
    let id = chain.append(Vec3::ZERO);
    let p = chain.get(id).expect("Punkt erwartet");
    assert_eq!(p.width, 3.0);
    assert_eq!(p.normal, Vec3::Z);
    assert_eq!(chain.kind(), CurveKind::CatmullRom);
}
