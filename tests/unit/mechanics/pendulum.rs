use super::*;

#[test]
fn default_period_matches_closed_form() {
    let p = PendulumParams::default();
    let expected = 2.0 * std::f64::consts::PI * (2.0f64 / 9.81).sqrt();
    assert!((p.small_angle_period() - expected).abs() < 1e-12);
}

#[test]
fn swing_is_symmetric_and_energy_is_conserved() {
    let p = PendulumParams::default();
    let run = p
        .simulate(1000, p.small_angle_period(), IntegratorKind::Rk4)
        .unwrap();
    assert_eq!(run.thetas.len(), 1000);
    assert_eq!(run.bob.len(), 1000);

    let min = run.thetas.iter().copied().fold(f64::INFINITY, f64::min);
    assert!((min + p.theta0).abs() < 1e-3, "min = {min}");

    let e0 = run.energy[0];
    for e in &run.energy {
        assert!((e - e0).abs() / e0 < 1e-6);
    }
}

#[test]
fn bob_starts_at_initial_angle() {
    let p = PendulumParams::default();
    let run = p.simulate(10, 0.1, IntegratorKind::Rk4).unwrap();
    let b = run.bob[0];
    assert!((b.x - 1.0).abs() < 1e-12);
    assert!((b.y + 3.0f64.sqrt()).abs() < 1e-12);
}

#[test]
fn small_oscillation_returns_after_one_period() {
    let p = PendulumParams {
        theta0: 0.01,
        ..PendulumParams::default()
    };
    let run = p
        .simulate(2000, p.small_angle_period(), IntegratorKind::Rk4)
        .unwrap();
    let last = *run.thetas.last().unwrap();
    assert!((last - 0.01).abs() < 1e-6, "last = {last}");
}

#[test]
fn invalid_parameters_are_rejected() {
    let p = PendulumParams {
        length: 0.0,
        ..PendulumParams::default()
    };
    assert!(p.simulate(10, 1.0, IntegratorKind::Rk4).is_err());

    let p = PendulumParams::default();
    assert!(p.simulate(1, 1.0, IntegratorKind::Rk4).is_err());
    assert!(p.simulate(10, 0.0, IntegratorKind::Rk4).is_err());
}

#[test]
fn params_fill_defaults_from_partial_json() {
    let p: PendulumParams = serde_json::from_str(r#"{ "length": 1.5 }"#).unwrap();
    assert_eq!(p.length, 1.5);
    assert_eq!(p.gravity, STANDARD_GRAVITY);
    assert_eq!(p.omega0, 0.0);
}
