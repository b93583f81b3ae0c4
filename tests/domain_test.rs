use quizforge::domain::{
    BatchResult, ClassLevel, CorrectOption, Difficulty, FormattedMcq, GeneratedMcq, InvalidMcq,
    McqCandidate, SourceResult,
};
use serde_json::json;

fn candidate_json() -> serde_json::Value {
    json!({
        "question": "  Which law relates force and charge?  ",
        "options": ["Ohm's law", "Coulomb's law", "Faraday's law", "Lenz's law"],
        "answer": "Coulomb's law",
        "subject": "Physics",
        "class": "Class 12",
        "topic": "Electrostatics"
    })
}

#[test]
fn given_class_labels_when_parsing_then_accepts_numbers_and_labels() {
    assert_eq!("12".parse::<ClassLevel>().unwrap(), ClassLevel::Twelve);
    assert_eq!(" Class 11 ".parse::<ClassLevel>().unwrap(), ClassLevel::Eleven);
    assert_eq!(ClassLevel::try_from(10u8).unwrap(), ClassLevel::Ten);
    assert_eq!(ClassLevel::default(), ClassLevel::Twelve);
    assert_eq!(ClassLevel::Eleven.to_string(), "11");
}

#[test]
fn given_out_of_range_class_when_parsing_then_rejects_it() {
    assert!(ClassLevel::try_from(9u8).is_err());
    assert!("Class 9".parse::<ClassLevel>().is_err());
    assert!("senior".parse::<ClassLevel>().is_err());
    assert!(serde_json::from_value::<ClassLevel>(json!(13)).is_err());
}

#[test]
fn given_unusual_class_in_candidate_when_decoding_then_leaves_it_unset() {
    let mut value = candidate_json();
    value["class"] = json!("graduate");

    let candidate: McqCandidate = serde_json::from_value(value).unwrap();

    assert_eq!(candidate.class_level, None);
    assert_eq!(candidate.options.len(), 4);
}

#[test]
fn given_numeric_fields_when_decoding_candidate_then_converts_them_to_text() {
    let value = json!({
        "question": "What is 2 + 2?",
        "options": [3, 4, 5, null],
        "answer": 4,
        "class_level": 10
    });

    let candidate: McqCandidate = serde_json::from_value(value).unwrap();

    assert_eq!(candidate.options, vec!["3", "4", "5", ""]);
    assert_eq!(candidate.answer, "4");
    assert_eq!(candidate.class_level, Some(ClassLevel::Ten));
    assert!(candidate.subject.is_empty());
}

#[test]
fn given_complete_candidate_when_converting_then_trims_question() {
    let candidate: McqCandidate = serde_json::from_value(candidate_json()).unwrap();

    let mcq = FormattedMcq::try_from(candidate).unwrap();

    assert_eq!(mcq.question, "Which law relates force and charge?");
    assert_eq!(mcq.options[1], "Coulomb's law");
    assert_eq!(mcq.class_level, Some(ClassLevel::Twelve));
}

#[test]
fn given_incomplete_candidates_when_converting_then_reports_why() {
    let blank = McqCandidate {
        question: "   ".to_string(),
        options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        ..McqCandidate::default()
    };
    let short = McqCandidate {
        question: "Short?".to_string(),
        options: vec!["a".into(), "b".into(), "c".into()],
        ..McqCandidate::default()
    };

    assert_eq!(FormattedMcq::try_from(blank), Err(InvalidMcq::EmptyQuestion));
    assert_eq!(
        FormattedMcq::try_from(short),
        Err(InvalidMcq::WrongOptionCount(3))
    );
}

#[test]
fn given_five_options_when_decoding_formatted_then_fails() {
    let mut value = candidate_json();
    value["options"] = json!(["a", "b", "c", "d", "e"]);

    assert!(serde_json::from_value::<FormattedMcq>(value).is_err());
}

#[test]
fn given_formatted_mcq_when_serializing_then_uses_class_key_and_omits_empty_explanation() {
    let mcq: FormattedMcq = serde_json::from_value(candidate_json()).unwrap();

    let value = serde_json::to_value(&mcq).unwrap();

    assert_eq!(value["class"], 12);
    assert!(value.get("explanation").is_none());
    assert!(value.get("class_level").is_none());
}

#[test]
fn given_option_labels_when_parsing_then_accepts_common_spellings() {
    assert_eq!("B".parse::<CorrectOption>().unwrap(), CorrectOption::B);
    assert_eq!("b".parse::<CorrectOption>().unwrap(), CorrectOption::B);
    assert_eq!("(c)".parse::<CorrectOption>().unwrap(), CorrectOption::C);
    assert_eq!("Option D".parse::<CorrectOption>().unwrap(), CorrectOption::D);
    assert_eq!("b.".parse::<CorrectOption>().unwrap(), CorrectOption::B);
    assert_eq!("A)".parse::<CorrectOption>().unwrap(), CorrectOption::A);
    assert!("E".parse::<CorrectOption>().is_err());
    assert!("".parse::<CorrectOption>().is_err());
    assert_eq!(CorrectOption::C.index(), 2);
}

#[test]
fn given_difficulty_in_any_case_when_parsing_then_normalizes_it() {
    assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert!("impossible".parse::<Difficulty>().is_err());
    assert_eq!(serde_json::to_value(Difficulty::Medium).unwrap(), json!("Medium"));
}

#[test]
fn given_generated_record_when_round_tripping_then_keeps_answer_key() {
    let value = json!({
        "question": "What is the unit of capacitance?",
        "options": ["Farad", "Henry", "Tesla", "Weber"],
        "correct_option": "a",
        "explanation": "Capacitance is measured in farads.",
        "difficulty": "easy",
        "topic": "Capacitance",
        "subject": "Physics",
        "class": 12
    });

    let mcq: GeneratedMcq = serde_json::from_value(value).unwrap();
    let written = serde_json::to_value(&mcq).unwrap();

    assert_eq!(mcq.correct_option, CorrectOption::A);
    assert_eq!(written["correct_option"], "A");
    assert_eq!(written["difficulty"], "Easy");
}

#[test]
fn given_repeated_source_when_recording_batch_then_keeps_first_result() {
    let mcq: FormattedMcq = serde_json::from_value(candidate_json()).unwrap();
    let mut batch = BatchResult::new();

    batch.record("https://a.example", SourceResult::new(vec![mcq], Vec::new()));
    batch.record("https://a.example", SourceResult::default());
    batch.record("https://b.example", SourceResult::default());

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.total_formatted(), 1);
    assert!(batch.get("https://b.example").is_some_and(SourceResult::is_empty));

    let value = serde_json::to_value(&batch).unwrap();
    assert_eq!(value["https://a.example"]["formatted"][0]["class"], 12);
}

#[test]
fn given_option_text_instead_of_letter_when_parsing_then_rejects_it() {
    for text in ["Coulomb", "Decreases", "Both charges repel", "Always zero", "Option"] {
        assert!(text.parse::<CorrectOption>().is_err(), "{text} accepted");
    }
}

#[test]
fn given_generated_record_with_option_text_as_key_when_decoding_then_fails() {
    let value = json!({
        "question": "What is the unit of charge?",
        "options": ["Ampere", "Coulomb", "Volt", "Ohm"],
        "correct_option": "Coulomb",
        "explanation": "",
        "difficulty": "Easy"
    });

    assert!(serde_json::from_value::<GeneratedMcq>(value).is_err());
}

#[test]
fn given_options_as_lettered_object_when_decoding_candidate_then_takes_values_in_key_order() {
    let value = json!({
        "question": "Which is a scalar?",
        "options": {"C": "Speed", "A": "Force", "D": "Momentum", "B": "Velocity"}
    });

    let candidate: McqCandidate = serde_json::from_value(value).unwrap();

    assert_eq!(candidate.options, vec!["Force", "Velocity", "Speed", "Momentum"]);
}

#[test]
fn given_options_as_plain_string_when_decoding_candidate_then_fails() {
    let value = json!({"question": "Which is a scalar?", "options": "Force, Speed"});

    assert!(serde_json::from_value::<McqCandidate>(value).is_err());
}
