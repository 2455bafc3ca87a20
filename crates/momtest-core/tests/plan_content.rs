use momtest_core::{FieldKey, ValidationPlan, Wizard, WizardStep};

const QUESTIONS: [&str; 5] = [
    "What's the hardest part about [problem area] in your day-to-day work?",
    "Can you walk me through the last time you encountered this problem?",
    "What solutions have you tried before? What worked and what didn't?",
    "How much time/money do you currently spend dealing with this issue?",
    "How are you currently solving this problem?",
];

#[test]
fn standard_plan_lists_the_five_questions_verbatim() {
    let plan = ValidationPlan::standard();
    let questions: Vec<&str> = plan
        .interview_questions
        .iter()
        .map(|q| q.question.as_str())
        .collect();
    assert_eq!(questions, QUESTIONS);
    assert_eq!(plan.market_research_platforms.len(), 4);
    assert_eq!(plan.next_steps.len(), 4);
}

#[test]
fn plan_is_the_same_whatever_the_user_entered() {
    let mut wizard = Wizard::new();
    wizard.set_field(FieldKey::IdeaName, "Foo");
    wizard.set_field(FieldKey::ProblemStatement, "Bar");
    wizard.next().expect("1 -> 2");
    wizard.set_field(FieldKey::TargetAudience, "Dentists");
    wizard.next().expect("2 -> 3");
    wizard.set_field(FieldKey::Solution, "X");
    wizard.set_field(FieldKey::ValueProposition, "Y");
    wizard.submit().expect("3 -> 4");
    assert_eq!(wizard.step(), WizardStep::Results);

    let plan = ValidationPlan::standard();
    assert_eq!(plan, ValidationPlan::default());
    let text = plan.to_plain_text();
    assert!(!text.contains("Dentists"));
    assert!(!text.contains("Foo"));
}

#[test]
fn plain_text_contains_every_section() {
    let plan = ValidationPlan::standard();
    let text = plan.to_plain_text();
    for question in QUESTIONS {
        assert!(text.contains(question), "missing question: {question}");
    }
    for platform in &plan.market_research_platforms {
        assert!(text.contains(platform.as_str()));
    }
    assert!(text.contains("4. Return to this platform to analyze your findings"));
    assert!(text.contains("Remember: Don't ask leading questions"));
}
