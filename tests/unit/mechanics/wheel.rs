use super::*;
use std::f64::consts::PI;

#[test]
fn default_run_has_expected_shape_and_start() {
    let p = WheelParams::default();
    let run = p
        .simulate(DEFAULT_THETA0, DEFAULT_STEPS, DEFAULT_DURATION, IntegratorKind::Rk4)
        .unwrap();
    assert_eq!(run.thetas.len(), DEFAULT_STEPS);
    assert_eq!(run.positions.len(), DEFAULT_STEPS);
    assert_eq!(run.thetas[0], DEFAULT_THETA0);
    assert!((run.positions[0] - DEFAULT_THETA0 * 2.0).abs() < 1e-12);

    let m0 = run.mass[0];
    assert!((m0.x - (DEFAULT_THETA0.sin() + run.positions[0])).abs() < 1e-12);
    assert!((m0.y - DEFAULT_THETA0.cos()).abs() < 1e-12);
    assert_eq!(run.contact[0].y, -2.0);
}

#[test]
fn friction_only_removes_energy() {
    let p = WheelParams::default();
    let run = p
        .simulate(DEFAULT_THETA0, 6000, 12.0, IntegratorKind::Rk4)
        .unwrap();
    let total = run.total_energy();
    for w in total.windows(2) {
        assert!(w[1] <= w[0] + 1e-9);
    }
    assert!(total.last().unwrap() < &total[0]);
    assert!(run.dissipation.iter().all(|d| *d >= 0.0));
}

#[test]
fn frictionless_wheel_conserves_energy() {
    let p = WheelParams {
        b: 0.0,
        ..WheelParams::default()
    };
    let run = p
        .simulate(DEFAULT_THETA0, 6000, 12.0, IntegratorKind::Rk4)
        .unwrap();
    let total = run.total_energy();
    let e0 = total[0];
    for e in &total {
        assert!((e - e0).abs() < 1e-7);
    }
}

#[test]
fn damped_wheel_settles_with_mass_below_axis() {
    let p = WheelParams::default();
    let run = p
        .simulate(DEFAULT_THETA0, 30_000, 150.0, IntegratorKind::Rk4)
        .unwrap();
    let last = *run.thetas.last().unwrap();
    assert!((last - PI).abs() < 1e-3, "last = {last}");
    let omega = run.trajectory.last()[1];
    assert!(omega.abs() < 1e-3);
}

#[test]
fn mass_on_the_rim_is_rejected() {
    let p = WheelParams {
        r: 2.0,
        ..WheelParams::default()
    };
    assert!(matches!(
        p.simulate(DEFAULT_THETA0, 100, 1.0, IntegratorKind::Rk4),
        Err(GeomotionError::Validation(_))
    ));
    let p = WheelParams {
        b: -0.1,
        ..WheelParams::default()
    };
    assert!(p.validate().is_err());
}

#[test]
fn params_accept_capital_r_in_json() {
    let p: WheelParams = serde_json::from_str(r#"{ "r": 0.5, "R": 3.0 }"#).unwrap();
    assert_eq!(p.r, 0.5);
    assert_eq!(p.big_r, 3.0);
    assert_eq!(p.b, 0.8);
}
