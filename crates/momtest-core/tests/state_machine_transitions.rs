use momtest_core::{
    wizard_transition, FieldKey, IdeaFields, Wizard, WizardAction, WizardError, WizardStep,
};

fn filled_fields() -> IdeaFields {
    IdeaFields {
        idea_name: "Foo".to_owned(),
        problem_statement: "Bar".to_owned(),
        target_audience: "Founders".to_owned(),
        solution: "X".to_owned(),
        value_proposition: "Y".to_owned(),
    }
}

#[test]
fn happy_path_walks_all_four_steps() {
    let fields = filled_fields();
    let t1 = wizard_transition(WizardStep::DefineIdea, WizardAction::Next, &fields).expect("1 -> 2");
    assert_eq!(t1.to, WizardStep::TargetAudience);
    let t2 = wizard_transition(t1.to, WizardAction::Next, &fields).expect("2 -> 3");
    assert_eq!(t2.to, WizardStep::Solution);
    let t3 = wizard_transition(t2.to, WizardAction::Submit, &fields).expect("3 -> 4");
    assert_eq!(t3.to, WizardStep::Results);
    let t4 = wizard_transition(t3.to, WizardAction::StartOver, &fields).expect("4 -> 1");
    assert_eq!(t4.to, WizardStep::DefineIdea);
}

#[test]
fn back_moves_exactly_one_step_without_guards() {
    let empty = IdeaFields::default();
    let t = wizard_transition(WizardStep::TargetAudience, WizardAction::Back, &empty)
        .expect("2 -> 1");
    assert_eq!(t.to, WizardStep::DefineIdea);
    let t = wizard_transition(WizardStep::Solution, WizardAction::Back, &empty).expect("3 -> 2");
    assert_eq!(t.to, WizardStep::TargetAudience);
}

#[test]
fn forward_move_reports_each_missing_field() {
    let mut fields = IdeaFields::default();
    fields.set(FieldKey::ProblemStatement, "Bar");
    let err = wizard_transition(WizardStep::DefineIdea, WizardAction::Next, &fields)
        .expect_err("idea name is empty");
    assert_eq!(
        err,
        WizardError::MissingRequired {
            step: WizardStep::DefineIdea,
            missing: vec![FieldKey::IdeaName],
        }
    );

    let err = wizard_transition(WizardStep::Solution, WizardAction::Submit, &IdeaFields::default())
        .expect_err("both solution fields empty");
    assert!(matches!(
        err,
        WizardError::MissingRequired { ref missing, .. }
            if missing == &[FieldKey::Solution, FieldKey::ValueProposition]
    ));
}

#[test]
fn actions_outside_the_table_are_rejected() {
    let fields = filled_fields();
    let illegal = [
        (WizardStep::DefineIdea, WizardAction::Back),
        (WizardStep::DefineIdea, WizardAction::Submit),
        (WizardStep::DefineIdea, WizardAction::StartOver),
        (WizardStep::TargetAudience, WizardAction::Submit),
        (WizardStep::Solution, WizardAction::Next),
        (WizardStep::Results, WizardAction::Next),
        (WizardStep::Results, WizardAction::Back),
    ];
    for (from, action) in illegal {
        let err = wizard_transition(from, action, &fields).expect_err("must fail");
        assert!(err.to_string().contains("illegal wizard transition"));
    }
}

#[test]
fn whitespace_counts_as_filled() {
    let mut fields = IdeaFields::default();
    fields.set(FieldKey::TargetAudience, " ");
    let t = wizard_transition(WizardStep::TargetAudience, WizardAction::Next, &fields)
        .expect("non-empty value passes");
    assert_eq!(t.to, WizardStep::Solution);
}

#[test]
fn next_with_idea_and_problem_keeps_values() {
    let mut wizard = Wizard::new();
    wizard.set_field(FieldKey::IdeaName, "Foo");
    wizard.set_field(FieldKey::ProblemStatement, "Bar");
    wizard.next().expect("step 1 is complete");
    assert_eq!(wizard.step(), WizardStep::TargetAudience);
    assert_eq!(wizard.field(FieldKey::IdeaName), "Foo");
    assert_eq!(wizard.field(FieldKey::ProblemStatement), "Bar");
}

#[test]
fn blocked_advance_leaves_wizard_untouched() {
    let mut wizard = Wizard::new();
    wizard.set_field(FieldKey::IdeaName, "Foo");
    let before = wizard.fields().clone();
    assert!(wizard.next().is_err());
    assert_eq!(wizard.step(), WizardStep::DefineIdea);
    assert_eq!(wizard.fields(), &before);
    assert!(wizard.history().is_empty());
    assert_eq!(wizard.missing_required(), vec![FieldKey::ProblemStatement]);
}

#[test]
fn back_and_start_over_never_clear_fields() {
    let mut wizard = Wizard::new();
    for key in FieldKey::ALL {
        wizard.set_field(key, format!("value for {}", key.id()));
    }
    let snapshot = wizard.fields().clone();

    wizard.next().expect("1 -> 2");
    wizard.back().expect("2 -> 1");
    assert_eq!(wizard.fields(), &snapshot);

    wizard.next().expect("1 -> 2");
    wizard.next().expect("2 -> 3");
    wizard.submit().expect("3 -> 4");
    assert_eq!(wizard.step(), WizardStep::Results);

    wizard.start_over().expect("4 -> 1");
    assert_eq!(wizard.step(), WizardStep::DefineIdea);
    assert_eq!(wizard.fields(), &snapshot);
    assert_eq!(wizard.history().len(), 6);
    assert_eq!(wizard.history()[5].action, WizardAction::StartOver);
}

#[test]
fn field_mut_edits_only_the_bound_field() {
    let mut wizard = Wizard::new();
    wizard.field_mut(FieldKey::Solution).push_str("X");
    assert_eq!(wizard.field(FieldKey::Solution), "X");
    for key in FieldKey::ALL.into_iter().filter(|k| *k != FieldKey::Solution) {
        assert_eq!(wizard.field(key), "");
    }
}

#[test]
fn step_numbers_map_both_ways() {
    for step in WizardStep::ALL {
        assert_eq!(WizardStep::from_number(step.number()), Some(step));
    }
    assert_eq!(WizardStep::from_number(0), None);
    assert_eq!(WizardStep::from_number(5), None);
    assert!(WizardStep::Solution.progress_reached(WizardStep::TargetAudience));
    assert!(!WizardStep::TargetAudience.progress_reached(WizardStep::Solution));
}
