use questionnaire::{PromptStyle, QuestionnaireError, Schema, ScriptedEngine, build_plan};

use crate::models::{
    AllSkipped, Interleaved, Partial, Profile, Renamed, Unmarked, WithChar, WithFloat, WithList,
};

#[test]
fn one_prompt_per_marked_field_in_declaration_order() {
    let plan = build_plan(&Schema::of::<Profile>().unwrap()).unwrap();

    let fields: Vec<_> = plan.prompts().iter().map(|p| p.field()).collect();
    assert_eq!(fields, ["name", "age", "active"]);
    assert_eq!(plan.text_slots(), 2);
    assert_eq!(plan.flag_slots(), 1);
    assert_eq!(plan.group().title(), Some("Profile"));
}

#[test]
fn skipped_fields_get_no_prompt() {
    let plan = build_plan(&Schema::of::<Interleaved>().unwrap()).unwrap();

    let fields: Vec<_> = plan.prompts().iter().map(|p| p.field()).collect();
    assert_eq!(
        fields,
        ["first_flag", "label", "count", "second_flag", "owner", "delta"]
    );
    assert_eq!(plan.text_slots() + plan.flag_slots(), 6);
    assert_eq!(plan.text_slots(), 4);
}

#[test]
fn struct_without_markers_builds_empty_plan() {
    let schema = Schema::of::<Unmarked>().unwrap();
    assert_eq!(schema.fields().len(), 3);

    let plan = build_plan(&schema).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn unmarked_and_never_deserialized_fields_are_skipped() {
    let schema = Schema::of::<Partial>().unwrap();
    assert!(schema.field("stamp").is_some_and(|f| !f.prompted));
    assert!(schema.field("region").is_some_and(|f| !f.prompted));

    let plan = build_plan(&schema).unwrap();
    let fields: Vec<_> = plan.prompts().iter().map(|p| p.field()).collect();
    assert_eq!(fields, ["name", "port"]);
}

#[test]
fn styles_follow_field_kinds() {
    let plan = build_plan(&Schema::of::<Interleaved>().unwrap()).unwrap();
    let styles: Vec<_> = plan.prompts().iter().map(|p| p.style()).collect();
    assert_eq!(
        styles,
        [
            PromptStyle::Confirm,
            PromptStyle::Input,
            PromptStyle::Input,
            PromptStyle::Confirm,
            PromptStyle::Input,
            PromptStyle::Input,
        ]
    );
}

#[test]
fn float_field_is_unsupported_and_no_session_starts() {
    let mut engine = ScriptedEngine::new(["x"]);
    let err = questionnaire::Questionnaire::with_engine(&mut engine)
        .run::<WithFloat>()
        .unwrap_err();

    match err {
        QuestionnaireError::UnsupportedFieldType { field, kind } => {
            assert_eq!(field, "ratio");
            assert_eq!(kind, "number");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(engine.runs(), 0);
}

#[test]
fn list_field_is_unsupported() {
    let err = build_plan(&Schema::of::<WithList>().unwrap()).unwrap_err();
    assert!(
        matches!(err, QuestionnaireError::UnsupportedFieldType { field, kind } if field == "tags" && kind == "array")
    );
}

#[test]
fn char_field_is_unsupported() {
    let err = build_plan(&Schema::of::<WithChar>().unwrap()).unwrap_err();
    assert!(
        matches!(err, QuestionnaireError::UnsupportedFieldType { field, kind } if field == "initial" && kind == "char")
    );
}

#[test]
fn renamed_field_keeps_serialized_name_and_schema_metadata() {
    let plan = build_plan(&Schema::of::<Renamed>().unwrap()).unwrap();
    let prompts = plan.prompts();

    assert_eq!(prompts[0].field(), "user_name");
    assert_eq!(prompts[0].title(), "user_name");
    assert_eq!(prompts[0].description(), Some("Login shown to other users."));
    assert_eq!(prompts[1].field(), "retries");
    assert_eq!(prompts[1].title(), "Retry budget");
}

#[test]
fn struct_with_only_skipped_fields_builds_empty_plan() {
    let plan = build_plan(&Schema::of::<AllSkipped>().unwrap()).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn build_is_idempotent() {
    let schema = Schema::of::<Interleaved>().unwrap();
    let first = build_plan(&schema).unwrap();
    let second = build_plan(&schema).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        (first.text_slots(), first.flag_slots()),
        (second.text_slots(), second.flag_slots())
    );
}
