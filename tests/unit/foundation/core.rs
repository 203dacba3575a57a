use super::*;

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn linspace_includes_both_ends() {
    let v = linspace(0.0, 24.0, 5).unwrap();
    assert_eq!(v, vec![0.0, 6.0, 12.0, 18.0, 24.0]);

    let v = linspace(0.0, 1.0, 1000).unwrap();
    assert_eq!(v.len(), 1000);
    assert_eq!(v[0], 0.0);
    assert_eq!(v[999], 1.0);
}

#[test]
fn linspace_edge_counts() {
    assert_eq!(linspace(3.0, 7.0, 1).unwrap(), vec![3.0]);
    assert!(linspace(0.0, 1.0, 0).is_err());
    assert!(linspace(0.0, f64::NAN, 4).is_err());
}
