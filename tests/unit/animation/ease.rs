use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn ease_out_front_loads_progress() {
    assert!(Ease::EaseOut.apply(0.5) > 0.5);
    assert!(Ease::EaseIn.apply(0.5) < 0.5);
    assert!((Ease::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
}

#[test]
fn names_round_trip() {
    for ease in Ease::ALL {
        assert_eq!(ease.name().parse::<Ease>().unwrap(), ease);
        let json = serde_json::to_string(&ease).unwrap();
        assert_eq!(json, format!("\"{}\"", ease.name()));
    }
    assert!("bounce".parse::<Ease>().is_err());
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::EaseOut.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseOut.apply(7.0), 1.0);
}
