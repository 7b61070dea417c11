// tests/question_tests.rs

use avalia::errors::AvaliaError;
use avalia::questions::{classify_line, LineClass, QuestionKind, QuestionSet};

const SAMPLE: &str = "\
1. What is your name?
2. [MULTIPLA_ESCOLHA] Pick one
a) Red
b) Blue";

#[test]
fn test_sample_source_parses_as_specified() {
    let questions = QuestionSet::from_source(SAMPLE);
    assert_eq!(questions.len(), 2);

    assert_eq!(questions.kind(0), QuestionKind::Open);
    assert_eq!(questions.prompt(0), "1. What is your name?");
    assert!(questions.options(0).is_empty());

    assert_eq!(questions.kind(1), QuestionKind::MultipleChoice);
    assert_eq!(questions.prompt(1), "2. Pick one");
    assert_eq!(questions.options(1), ["a) Red", "b) Blue"]);
}

#[test]
fn test_question_count_equals_header_count() {
    let source = "\
# a comment
1. First

2. Second
stray line that is not an option
3. Third";
    let questions = QuestionSet::from_source(source);
    assert_eq!(questions.len(), 3);
}

#[test]
fn test_display_ordinal_is_not_an_index() {
    let questions = QuestionSet::from_source("7. Out of order\n2. Next");
    assert_eq!(questions.prompt(0), "7. Out of order");
    assert_eq!(questions.prompt(1), "2. Next");
}

#[test]
fn test_tag_is_stripped_with_surrounding_whitespace() {
    let questions = QuestionSet::from_source("1. [MULTIPLA_ESCOLHA]   Choose wisely  ");
    assert_eq!(questions.kind(0), QuestionKind::MultipleChoice);
    assert_eq!(questions.prompt(0), "1. Choose wisely");
}

#[test]
fn test_options_attach_in_file_order_and_verbatim() {
    let source = "\
1. [MULTIPLA_ESCOLHA] Letters
c) Gamma
a) Alpha
  b) Beta";
    let questions = QuestionSet::from_source(source);
    assert_eq!(questions.options(0), ["c) Gamma", "a) Alpha", "b) Beta"]);
}

#[test]
fn test_option_before_any_header_is_dropped() {
    let questions = QuestionSet::from_source("a) Orphan\n1. Real question");
    assert_eq!(questions.len(), 1);
    assert!(questions.options(0).is_empty());
}

#[test]
fn test_zero_option_multiple_choice_is_accepted() {
    // Latent defect of the source grammar, preserved on purpose.
    let questions = QuestionSet::from_source("1. [MULTIPLA_ESCOLHA] No options follow");
    assert_eq!(questions.kind(0), QuestionKind::MultipleChoice);
    assert!(questions.options(0).is_empty());
}

#[test]
fn test_out_of_range_reads_are_defined() {
    let questions = QuestionSet::from_source("1. Only one");
    assert_eq!(questions.prompt(5), "");
    assert_eq!(questions.kind(5), QuestionKind::Open);
    assert!(questions.options(5).is_empty());
    assert!(questions.get(5).is_none());
}

#[test]
fn test_missing_file_is_fatal() {
    let result = QuestionSet::load("definitely/not/perguntas.txt");
    assert!(matches!(
        result,
        Err(AvaliaError::QuestionsNotFound { .. })
    ));
}

#[test]
fn test_classify_blank_and_comment_lines() {
    assert_eq!(classify_line(""), LineClass::Skip);
    assert_eq!(classify_line("   "), LineClass::Skip);
    assert_eq!(classify_line("# comment"), LineClass::Skip);
    assert_eq!(classify_line("   # indented comment"), LineClass::Skip);
}

#[test]
fn test_classify_header_lines() {
    assert_eq!(
        classify_line("12. Two digit ordinal"),
        LineClass::Header {
            ordinal: 12,
            text: "Two digit ordinal".to_string(),
            kind: QuestionKind::Open,
        }
    );
    // No `. ` separator: not a header.
    assert_eq!(classify_line("1.no space"), LineClass::Other);
    // Indented digits do not open a question.
    assert_eq!(classify_line("  3. indented"), LineClass::Other);
}

#[test]
fn test_classify_option_lines() {
    assert_eq!(
        classify_line("a) lower"),
        LineClass::Option("a) lower".to_string())
    );
    assert_eq!(
        classify_line("  J) upper, indented"),
        LineClass::Option("J) upper, indented".to_string())
    );
    // `k` is outside the a-j option range.
    assert_eq!(classify_line("k) out of range"), LineClass::Other);
    // Missing the space after the parenthesis.
    assert_eq!(classify_line("a)no space"), LineClass::Other);
}
