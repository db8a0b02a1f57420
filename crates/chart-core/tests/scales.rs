// File: crates/chart-core/tests/scales.rs
// Purpose: Tick generation, nice domains, band/sqrt/ordinal scales and pie layout.

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use energy_charts::grid::ticks;
use energy_charts::scale::{extent, median, pie, BandScale, LinearScale, OrdinalScale, SqrtScale};
use energy_charts::text::{format_fixed, format_percent, format_tick};
use energy_charts::theme::{Color, CATEGORY10, TABLEAU10};
use proptest::prelude::*;

#[test]
fn ticks_are_round_values() {
    assert_eq!(ticks(0.0, 10.0, 10), (0..=10).map(f64::from).collect::<Vec<_>>());
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(ticks(0.0, 220.0, 10), (0..=11).map(|i| f64::from(i) * 20.0).collect::<Vec<_>>());
    assert_eq!(ticks(5.0, 5.0, 10), vec![5.0]);
}

#[test]
fn nice_extends_domain_outward() {
    let s = LinearScale::new((0.201479, 0.996679), (0.0, 1.0)).nice(10);
    let (d0, d1) = s.domain();
    assert_relative_eq!(d0, 0.2, epsilon = 1e-12);
    assert_relative_eq!(d1, 1.0, epsilon = 1e-12);

    let y = LinearScale::new((0.0, 220.0), (190.0, 0.0)).nice(10);
    assert_eq!(y.domain(), (0.0, 220.0));
    assert_eq!(y.apply(0.0), 190.0);
    assert_eq!(y.apply(220.0), 0.0);
}

#[test]
fn invert_maps_pixels_back_to_values() {
    let y = LinearScale::new((0.0, 200.0), (400.0, 0.0));
    assert_relative_eq!(y.invert(400.0), 0.0);
    assert_relative_eq!(y.invert(100.0), 150.0);
    assert_relative_eq!(y.invert(y.apply(37.5)), 37.5, epsilon = 1e-9);
}

#[test]
fn degenerate_linear_domain_maps_to_midpoint() {
    let s = LinearScale::new((3.0, 3.0), (0.0, 100.0));
    assert_eq!(s.apply(3.0), 50.0);
    assert_eq!(s.nice(10).domain(), (3.0, 3.0));
}

#[test]
fn band_scale_pads_and_centres() {
    let x = BandScale::new(["A", "B", "C", "A"], (0.0, 300.0)).padding(0.3);
    assert_eq!(x.domain().len(), 3);
    let step = 300.0 / 3.3;
    assert_relative_eq!(x.step(), step, epsilon = 1e-9);
    assert_relative_eq!(x.bandwidth(), step * 0.7, epsilon = 1e-9);
    assert_relative_eq!(x.position("A").unwrap(), (300.0 - step * 2.7) / 2.0, epsilon = 1e-9);
    assert_relative_eq!(x.position("C").unwrap(), x.position("A").unwrap() + 2.0 * step, epsilon = 1e-9);
    assert!(x.position("D").is_none());
}

#[test]
fn sqrt_scale_grows_with_area() {
    let r = SqrtScale::new((0.0, 100.0), (2.0, 12.0));
    assert_relative_eq!(r.apply(0.0), 2.0);
    assert_relative_eq!(r.apply(25.0), 7.0);
    assert_relative_eq!(r.apply(100.0), 12.0);
}

#[test]
fn ordinal_scale_assigns_in_first_seen_order() {
    let mut c = OrdinalScale::new(&CATEGORY10);
    assert_eq!(c.color("OLED"), CATEGORY10[0]);
    assert_eq!(c.color("LCD"), CATEGORY10[1]);
    assert_eq!(c.color("OLED"), CATEGORY10[0]);
    assert_eq!(c.get("QLED"), None);

    let keys: Vec<String> = (0..12).map(|i| format!("k{i}")).collect();
    let cycled = OrdinalScale::with_domain(&TABLEAU10, &keys);
    assert_eq!(cycled.get("k10"), Some(TABLEAU10[0]));
}

#[test]
fn pie_starts_at_twelve_and_keeps_input_order() {
    let slices = pie(&[10.0, 20.0, 70.0]);
    assert_eq!(slices[0].start_angle, 0.0);
    assert_relative_eq!(slices[0].end_angle, TAU * 0.1, epsilon = 1e-12);
    assert_relative_eq!(slices[2].end_angle, TAU, epsilon = 1e-12);

    let zeroed = pie(&[0.0, 5.0, -1.0]);
    assert_eq!(zeroed[0].end_angle, zeroed[0].start_angle);
    assert_relative_eq!(zeroed[1].end_angle - zeroed[1].start_angle, TAU, epsilon = 1e-12);
    assert_eq!(zeroed[2].end_angle, zeroed[2].start_angle);
}

#[test]
fn summary_statistics_ignore_non_finite() {
    assert_eq!(extent([3.0, f64::NAN, -1.0, 7.0]), Some((-1.0, 7.0)));
    assert_eq!(extent([f64::NAN]), None);
    assert_eq!(median(&[10.0, 30.0, 20.0]), Some(20.0));
    assert_eq!(median(&[]), None);
}

#[test]
fn number_formatting() {
    assert_eq!(format_fixed(2.345, 1), "2.3");
    assert_eq!(format_fixed(120.25, 1), "120.3");
    assert_eq!(format_fixed(-0.04, 1), "0.0");
    assert_eq!(format_percent(10.0, 100.0), "10%");
    assert_eq!(format_percent(1.0, 0.0), "0%");
    assert_eq!(format_tick(1500.0, 500.0), "1,500");
    assert_eq!(format_tick(0.4, 0.2), "0.4");
}

#[test]
fn darker_scales_channels() {
    let c = Color::rgb(100, 200, 50).darker(1.0);
    assert_eq!(c, Color::rgb(70, 140, 35));
    assert_eq!(Color::parse("#222"), Some(Color::rgb(0x22, 0x22, 0x22)));
    assert_eq!(Color::rgb(70, 130, 180).to_string(), "#4682b4");
}

proptest! {
    #[test]
    fn nice_domain_contains_input(lo in -1.0e6f64..1.0e6, span in 1.0e-3f64..1.0e6) {
        let hi = lo + span;
        let (d0, d1) = LinearScale::new((lo, hi), (0.0, 1.0)).nice(10).domain();
        prop_assert!(d0 <= lo);
        prop_assert!(d1 >= hi);
    }

    #[test]
    fn ticks_stay_inside_domain(lo in -1.0e4f64..1.0e4, span in 1.0e-2f64..1.0e4, count in 1usize..20) {
        let hi = lo + span;
        let ts = ticks(lo, hi, count);
        prop_assert!(!ts.is_empty());
        for w in ts.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        let eps = span * 1e-9;
        prop_assert!(ts[0] >= lo - eps);
        prop_assert!(ts[ts.len() - 1] <= hi + eps);
    }

    #[test]
    fn pie_sweeps_sum_to_full_turn(values in proptest::collection::vec(0.1f64..1000.0, 1..12)) {
        let slices = pie(&values);
        let total: f64 = slices.iter().map(|s| s.end_angle - s.start_angle).sum();
        prop_assert!((total - TAU).abs() < 1e-9);
        prop_assert!((slices[slices.len() - 1].end_angle - TAU).abs() < 1e-9);
    }
}
