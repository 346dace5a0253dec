use questionnaire::{Answer, Questionnaire, QuestionnaireError, ScriptedEngine};

use crate::models::{Interleaved, Renamed};

#[test]
fn interleaved_kinds_land_in_their_own_fields() {
    let engine = ScriptedEngine::new([
        Answer::from(true),
        Answer::from("queue"),
        Answer::from("12"),
        Answer::from(false),
        Answer::from("ops"),
        Answer::from("-7"),
    ]);

    let value: Interleaved = Questionnaire::with_engine(engine).run().unwrap();

    assert_eq!(
        value,
        Interleaved {
            first_flag: true,
            label: "queue".into(),
            cache_key: String::new(),
            count: 12,
            second_flag: false,
            hits: 0,
            owner: "ops".into(),
            delta: -7,
        }
    );
}

#[test]
fn first_bad_integer_stops_the_fill() {
    let engine = ScriptedEngine::new([
        Answer::from(true),
        Answer::from("queue"),
        Answer::from("-12"),
        Answer::from(false),
        Answer::from("ops"),
        Answer::from("not a number"),
    ]);

    let err = Questionnaire::with_engine(engine)
        .run::<Interleaved>()
        .unwrap_err();
    assert!(
        matches!(err, QuestionnaireError::InvalidIntegerInput { field, .. } if field == "count")
    );
}

#[test]
fn renamed_fields_are_assigned_by_serialized_name() {
    let engine = ScriptedEngine::new([Answer::from("ada"), Answer::from("3")]);
    let value: Renamed = Questionnaire::with_engine(engine).run().unwrap();

    assert_eq!(
        value,
        Renamed {
            name: "ada".into(),
            retries: 3,
        }
    );
}

#[test]
fn narrow_integer_overflow_is_an_input_error() {
    let engine = ScriptedEngine::new([Answer::from("ada"), Answer::from("300")]);
    let err = Questionnaire::with_engine(engine)
        .run::<Renamed>()
        .unwrap_err();

    match err {
        QuestionnaireError::InvalidIntegerInput { field, source } => {
            assert_eq!(field, "retries");
            assert_eq!(
                *source.kind(),
                std::num::IntErrorKind::PosOverflow
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
