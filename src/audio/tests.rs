use super::Volume;

#[test]
fn volume_clamps_out_of_range_input() {
    assert_eq!(Volume::new(1.7).level(), 1.0);
    assert_eq!(Volume::new(-0.2).level(), 0.0);
    assert_eq!(Volume::new(0.45).level(), 0.45);
}

#[test]
fn volume_treats_nan_as_silence() {
    assert_eq!(Volume::new(f32::NAN).level(), 0.0);
}

#[test]
fn nudged_volume_stays_in_range() {
    let v = Volume::new(0.98).nudged(0.05);
    assert_eq!(v.level(), 1.0);
    let v = Volume::new(0.02).nudged(-0.05);
    assert_eq!(v.level(), 0.0);
}

#[test]
fn percent_rounds_for_display() {
    assert_eq!(Volume::default().percent(), 30);
    assert_eq!(Volume::new(1.0).percent(), 100);
}
