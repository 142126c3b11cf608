use fittrack_core::{read_packet, TrackerError, Workout, WorkoutKind};

#[test]
fn test_dispatch_builds_each_kind() {
    let run = read_packet("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(run.kind(), WorkoutKind::Running);

    let wlk = read_packet("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(wlk.kind(), WorkoutKind::Walking);

    let swm = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    match swm {
        Workout::Swimming {
            length_pool_m,
            count_pool,
            ..
        } => {
            assert_eq!(length_pool_m, 25.0);
            assert_eq!(count_pool, 40.0);
        }
        _ => panic!("SWM skal gi Swimming, fikk {:?}", swm),
    }
}

#[test]
fn test_unknown_code_is_error_not_default() {
    // ukjent kode skal aldri falle tilbake til en aktivitet
    let err = read_packet("NSW", &[2.0, 3.0, 4.0, 1.0]).unwrap_err();
    assert_eq!(err, TrackerError::UnknownActivityKind("NSW".to_string()));
}

#[test]
fn test_wrong_arity_rejected() {
    let err = read_packet("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
    assert_eq!(
        err,
        TrackerError::InvalidArgumentCount {
            kind: WorkoutKind::Running,
            expected: 3,
            got: 4,
        }
    );

    let err = read_packet("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
    assert_eq!(
        err,
        TrackerError::InvalidArgumentCount {
            kind: WorkoutKind::Swimming,
            expected: 5,
            got: 3,
        }
    );
}

#[test]
fn test_non_positive_duration_rejected() {
    for bad in [0.0, -1.0] {
        let err = read_packet("RUN", &[15000.0, bad, 75.0]).unwrap_err();
        assert_eq!(
            err,
            TrackerError::InvalidArgumentValue {
                field: "duration_h",
                value: bad,
            }
        );
    }
}

#[test]
fn test_non_positive_weight_rejected() {
    let err = read_packet("WLK", &[9000.0, 1.0, 0.0, 180.0]).unwrap_err();
    assert_eq!(
        err,
        TrackerError::InvalidArgumentValue {
            field: "weight_kg",
            value: 0.0,
        }
    );
}

#[test]
fn test_negative_action_rejected() {
    let err = read_packet("RUN", &[-1.0, 1.0, 75.0]).unwrap_err();
    assert_eq!(
        err,
        TrackerError::InvalidArgumentValue {
            field: "action",
            value: -1.0,
        }
    );
}

#[test]
fn test_nan_duration_rejected() {
    // NaN skal stoppes i valideringen, ikke ende som NaN i formlene
    let err = read_packet("RUN", &[15000.0, f64::NAN, 75.0]).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidArgumentValue {
            field: "duration_h",
            ..
        }
    ));
}

#[test]
fn test_pool_params_must_be_positive() {
    let err = read_packet("SWM", &[720.0, 1.0, 80.0, 0.0, 40.0]).unwrap_err();
    assert_eq!(
        err,
        TrackerError::InvalidArgumentValue {
            field: "length_pool_m",
            value: 0.0,
        }
    );
}
