use std::fs;

use basil::{interpreter::value::Value, run_program};
use walkdir::WalkDir;

fn assert_success(src: &str) {
    if let Err(e) = run_program(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_program(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn error_message(src: &str) -> String {
    match run_program(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    let context = run_program("START LET x = 2 + 3; x = x * 4 END").unwrap();

    assert_eq!(context.environment.get("x"), Some(&Value::Integer(20)));
}

#[test]
fn let_is_optional_on_assignments() {
    assert_success("START LET x = 1 END");
    assert_success("START x = 1 END");
}

#[test]
fn empty_statements_and_separators() {
    assert_success("START END");
    assert_success("START ; END");
    assert_success("START x = 1; END");
    assert_success("START ; x = 1 END");
    assert_success("START ;; x = 1 ;; END");
}

#[test]
fn nested_blocks_share_one_environment() {
    let context = run_program("START x = 1; START y = x + 1 END; z = y * 2 END").unwrap();

    assert_eq!(context.environment.get("x"), Some(&Value::Integer(1)));
    assert_eq!(context.environment.get("y"), Some(&Value::Integer(2)));
    assert_eq!(context.environment.get("z"), Some(&Value::Integer(4)));
}

#[test]
fn outputs_are_collected_in_order() {
    let context =
        run_program("START OUTPUT \"begin\"; x = 2 * 3; OUTPUT x; OUTPUT \"end\" END").unwrap();

    assert_eq!(context.outputs, vec!["begin", "6", "end"]);
}

#[test]
fn output_renders_values_like_the_evaluator() {
    let context = run_program("START OUTPUT 7 / 2; OUTPUT 10 / 2 END").unwrap();

    assert_eq!(context.outputs, vec!["3.5", "5"]);
}

#[test]
fn variables_must_be_assigned_before_use() {
    assert_success("START y = 1; x = y END");
    assert_failure("START x = y END");
    assert_failure("START x = y; y = 1 END");

    assert_eq!(error_message("START x = y END"),
               "Error on line 1: Variable 'y' referenced before assignment.");
}

#[test]
fn self_reference_parses_but_fails_at_runtime() {
    assert_eq!(error_message("START LET x = x + 1 END"),
               "Error on line 1: Unknown variable 'x'.");
}

#[test]
fn labels_and_goto() {
    assert_success("START LABEL top END");
    assert_failure("START LABEL a; LABEL a END");

    assert_eq!(error_message("START GOTO nowhere END"),
               "Error on line 1: GOTO to undeclared label 'nowhere'.");
    // Forward references resolve once the whole program has parsed.
    assert_eq!(error_message("START GOTO below; LABEL below END"),
               "Error on line 1: GOTO statements are recognized but cannot be executed.");
}

#[test]
fn recognized_statements_without_an_implementation() {
    assert_eq!(error_message("START INPUT x END"),
               "Error on line 1: INPUT statements are recognized but cannot be executed.");
    assert_eq!(error_message("START IF 1 < 2 THEN x = 1 ENDIF END"),
               "Error on line 1: IF statements are recognized but cannot be executed.");
    assert_eq!(error_message("START WHILE 1 < 2 DO x = 1 ENDWHILE END"),
               "Error on line 1: WHILE statements are recognized but cannot be executed.");
}

#[test]
fn comparisons_chain_inside_conditions() {
    assert_eq!(error_message("START IF 0 < 1 == 1 THEN ENDIF END"),
               "Error on line 1: IF statements are recognized but cannot be executed.");
    assert_failure("START IF 1 THEN ENDIF END");
}

#[test]
fn malformed_programs_are_rejected() {
    assert_failure("START x = 1 + ; END");
    assert_failure("START x = 1");
    assert_failure("x = 1 END");
    assert_failure("START x = 1 END y = 2");
    assert_failure("START x = END");
    assert_failure("START LET 5 = 3 END");
}

#[test]
fn runtime_errors_stop_execution() {
    assert_failure("START x = 1 / 0 END");
    assert_failure("START x = 9223372036854775807 + 1 END");
}

#[test]
fn errors_carry_the_source_line() {
    let source = "START\nx = 1;\ny = x / 0\nEND";

    assert_eq!(error_message(source), "Error on line 3: Division by zero.");
}

#[test]
fn comments_are_ignored() {
    let context = run_program("START\n// setup\nx = 4; // inline\nOUTPUT x\nEND").unwrap();

    assert_eq!(context.outputs, vec!["4"]);
}

#[test]
fn program_corpus_works() {
    let mut count = 0;

    for entry in WalkDir::new("tests/programs").into_iter().filter_map(Result::ok) {
        let path = entry.path();

        if path.extension().is_none_or(|ext| ext != "bas") {
            continue;
        }

        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_program(&source) {
            panic!("Program {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}
