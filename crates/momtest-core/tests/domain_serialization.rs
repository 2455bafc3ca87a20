use momtest_core::{FieldKey, IdeaFields};

#[test]
fn idea_fields_serialize_with_form_ids() {
    let fields = IdeaFields {
        idea_name: "Foo".to_owned(),
        problem_statement: "Bar".to_owned(),
        ..IdeaFields::default()
    };
    let json = serde_json::to_value(&fields).expect("serialize fields");
    let object = json.as_object().expect("fields serialize as an object");
    assert_eq!(object.len(), FieldKey::ALL.len());
    for key in FieldKey::ALL {
        assert!(object.contains_key(key.id()), "missing key {}", key.id());
    }
    assert_eq!(json["ideaName"], "Foo");
    assert_eq!(json["valueProposition"], "");
}

#[test]
fn field_key_serializes_as_its_id() {
    for key in FieldKey::ALL {
        let json = serde_json::to_string(&key).expect("serialize key");
        assert_eq!(json, format!("\"{}\"", key.id()));
    }
}

#[test]
fn only_idea_name_is_single_line() {
    let single: Vec<_> = FieldKey::ALL
        .into_iter()
        .filter(|key| !key.is_multiline())
        .collect();
    assert_eq!(single, vec![FieldKey::IdeaName]);
}
