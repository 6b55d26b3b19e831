use running_planner::plan::{generate_plan, round_half_up, PlanConfig, Progression};

fn cfg(total_weeks: u64, initial: u64, inc: u64, interval: u64, dec: u64, round: bool) -> PlanConfig {
    PlanConfig {
        total_weeks,
        initial_volume: initial,
        increment_percent: inc,
        recovery_interval: interval,
        recovery_decrement_percent: dec,
        round_to_integer: round,
    }
}

fn volumes(config: &PlanConfig) -> Vec<f64> {
    generate_plan(config).iter().map(|w| w.volume).collect()
}

#[test]
fn rounded_three_week_example() {
    let plan = generate_plan(&cfg(3, 20, 10, 4, 10, true));
    assert_eq!(plan.len(), 3);
    assert_eq!(volumes(&cfg(3, 20, 10, 4, 10, true)), vec![22.0, 24.0, 26.0]);
    assert!(plan.iter().all(|w| w.recovery_volume.is_none()));
}

#[test]
fn unrounded_growth_keeps_fractions() {
    let v = volumes(&cfg(3, 20, 10, 4, 10, false));
    assert!((v[0] - 22.0).abs() < 1e-9);
    assert!((v[1] - 24.2).abs() < 1e-9, "week2={}", v[1]);
    assert!((v[2] - 26.62).abs() < 1e-9, "week3={}", v[2]);
}

#[test]
fn zero_increment_with_recovery_week() {
    let plan = generate_plan(&cfg(4, 100, 0, 4, 50, false));
    assert_eq!(plan.len(), 4);
    for w in &plan {
        assert_eq!(w.volume, 100.0);
    }
    assert_eq!(plan[3].recovery_volume, Some(50.0));
    assert!(plan[..3].iter().all(|w| w.recovery_volume.is_none()));
}

#[test]
fn zero_weeks_is_empty() {
    assert!(generate_plan(&cfg(0, 20, 10, 4, 10, true)).is_empty());
}

#[test]
fn zero_interval_disables_recovery() {
    let plan = generate_plan(&cfg(12, 20, 10, 0, 10, true));
    assert_eq!(plan.len(), 12);
    assert!(plan.iter().all(|w| !w.is_recovery()));
}

#[test]
fn weeks_are_contiguous_from_one() {
    let plan = generate_plan(&cfg(9, 30, 5, 3, 20, false));
    let weeks: Vec<u64> = plan.iter().map(|w| w.week).collect();
    assert_eq!(weeks, (1..=9).collect::<Vec<_>>());
}

#[test]
fn recovery_does_not_feed_baseline() {
    let plan = generate_plan(&cfg(3, 100, 10, 1, 50, false));
    // 매주 회복 주지만 기준값은 기본 볼륨으로만 증가한다.
    assert!((plan[0].volume - 110.0).abs() < 1e-9);
    assert!((plan[1].volume - 121.0).abs() < 1e-9);
    assert!((plan[2].volume - 133.1).abs() < 1e-9);
    for w in &plan {
        let r = w.recovery_volume.expect("recovery every week");
        assert!((r - w.volume / 2.0).abs() < 1e-9);
    }
}

#[test]
fn recovery_weeks_are_lower_than_base() {
    let config = cfg(20, 20, 10, 4, 10, true);
    for w in generate_plan(&config) {
        assert_eq!(w.is_recovery(), w.week % 4 == 0);
        if let Some(r) = w.recovery_volume {
            assert!(r < w.volume, "week {} recovery {r} >= {}", w.week, w.volume);
        }
    }
}

#[test]
fn recovery_volume_rounded_separately() {
    // 22 * 0.9 = 19.8 -> 20
    let plan = generate_plan(&cfg(1, 20, 10, 1, 10, true));
    assert_eq!(plan[0].volume, 22.0);
    assert_eq!(plan[0].recovery_volume, Some(20.0));
}

#[test]
fn rounding_compounds_from_rounded_baseline() {
    // 반올림된 값에서 다음 주가 계산되므로 비반올림 결과와 어긋난다.
    let rounded = volumes(&cfg(10, 20, 10, 0, 10, true));
    let exact = volumes(&cfg(10, 20, 10, 0, 10, false));
    assert_eq!(rounded[..3], [22.0, 24.0, 26.0]);
    assert!((exact[9] - 20.0 * 1.1f64.powi(10)).abs() < 1e-6);
    // 26.62를 마지막에만 반올림하면 27
    assert_eq!(round_half_up(exact[2]), 27.0);
}

#[test]
fn volumes_never_decrease() {
    for (inc, round) in [(1, true), (3, true), (10, false), (25, true)] {
        let v = volumes(&cfg(40, 7, inc, 3, 30, round));
        assert!(v.windows(2).all(|p| p[1] >= p[0]), "inc={inc} round={round}: {v:?}");
    }
}

#[test]
fn half_rounds_up() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(24.2), 24.0);
    assert_eq!(round_half_up(26.62), 27.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(0.49999999999999994), 0.0);
}

#[test]
fn progression_is_lazy_and_fused() {
    let mut it = Progression::new(cfg(5, 10, 10, 2, 10, true));
    let first = it.next().expect("week 1");
    assert_eq!(first.week, 1);
    assert_eq!(it.by_ref().count(), 4);
    assert!(it.next().is_none());
    assert!(it.next().is_none());
}

#[test]
fn huge_week_count_yields_lazily() {
    let config = cfg(9_007_199_254_740_991, 20, 10, 4, 10, true);
    let mut it = Progression::new(config);
    assert_eq!(it.size_hint().0, 0);
    let first: Vec<f64> = it.by_ref().take(3).map(|w| w.volume).collect();
    assert_eq!(first, vec![22.0, 24.0, 26.0]);
    assert_eq!(it.next().map(|w| w.week), Some(4));
}
