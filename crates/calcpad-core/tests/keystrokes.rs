//! End-to-end keystroke scenarios against the public calculator API.

use calcpad_core::{
    CalcState, Calculator, CalculatorService, Event, LogCollector, Operator, ReduceError, reduce,
    reduce_symbol,
};
use calcpad_test_utils::config::{TestConfigBuilder, TestConfigFile};
use calcpad_test_utils::tracing_setup::init_test_tracing;
use calcpad_test_utils::{press, press_on_fresh};
use pretty_assertions::assert_eq;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ── Buffer editing ────────────────────────────────────────────────

#[test_log::test]
fn digits_concatenate() {
    for keys in ["1", "12", "123", "9081726354"] {
        assert_eq!(press_on_fresh(keys).buffer(), keys);
    }
}

#[test_log::test]
fn repeated_decimal_point_is_idempotent() {
    assert_eq!(
        press_on_fresh("1.2.").buffer(),
        press_on_fresh("1.2").buffer()
    );
    assert_eq!(press_on_fresh("1..2").buffer(), "1.2");
}

#[test_log::test]
fn delete_and_sign_edits() {
    assert_eq!(press_on_fresh("5D").buffer(), "0");
    assert_eq!(press_on_fresh("5ND").buffer(), "0");
    assert_eq!(press_on_fresh("42D").buffer(), "4");
    assert_eq!(press_on_fresh("DDD").buffer(), "0");
}

#[test_log::test]
fn toggle_sign_round_trips() {
    for keys in ["7", "1.5", "300"] {
        let mut calc = press_on_fresh(keys);
        let before = calc.buffer().to_string();
        press(&mut calc, "N");
        assert_eq!(calc.buffer(), format!("-{before}"));
        press(&mut calc, "N");
        assert_eq!(calc.buffer(), before);
    }
}

// ── Evaluation ────────────────────────────────────────────────────

#[test_log::test]
fn reduction_table() {
    assert_eq!(reduce(Operator::Add, &[1.0, 2.0, 3.0]), Ok(6.0));
    assert_eq!(reduce(Operator::Subtract, &[10.0, 3.0, 2.0]), Ok(5.0));
    assert_eq!(reduce(Operator::Multiply, &[2.0, 3.0, 4.0]), Ok(24.0));
    assert_eq!(reduce(Operator::Divide, &[8.0, 2.0]), Ok(4.0));
    assert_eq!(
        reduce(Operator::Divide, &[8.0, 0.0]),
        Err(ReduceError::DivisionByZero)
    );
    assert_eq!(reduce_symbol('/', &[9.0, 3.0]), Ok(3.0));
    assert_eq!(
        reduce_symbol('^', &[2.0, 3.0]),
        Err(ReduceError::UnsupportedOperator('^'))
    );
}

#[test_log::test]
fn addition_across_two_presses() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "10+"), "10");
    assert_eq!(press(&mut calc, "5"), "10+5");
    assert_eq!(press(&mut calc, "+"), "15");
}

#[test_log::test]
fn chained_subtraction() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "20-"), "20");
    assert_eq!(press(&mut calc, "5-"), "15");
    assert_eq!(press(&mut calc, "3-"), "12");
}

#[test_log::test]
fn negative_result_loses_sign_on_next_operator() {
    // The buffer "-2" tokenizes to a bare "2": a leading minus is a delimiter.
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "3-5-"), "-2");
    assert_eq!(press(&mut calc, "1+"), "3");
}

#[test_log::test]
fn divide_by_zero_shows_marker() {
    let calc = press_on_fresh("9/0/");
    assert_eq!(calc.buffer(), "Error");
    assert_eq!(calc.state(), CalcState::Error);
}

#[test_log::test]
fn error_recovers_on_next_digit() {
    let mut calc = press_on_fresh("9/0/");
    assert_eq!(press(&mut calc, "3+4+"), "7");
    assert_eq!(calc.state(), CalcState::Idle);
}

#[test_log::test]
fn clear_after_error() {
    let mut calc = press_on_fresh("1%");
    assert_eq!(calc.buffer(), "Error");
    assert_eq!(press(&mut calc, "C"), "0");
}

#[test_log::test]
fn detailed_markers_name_the_failure() {
    let config = TestConfigBuilder::new().detailed_errors(true).build();

    let mut calc = Calculator::with_config(&config.display);
    assert_eq!(press(&mut calc, "4/0/"), "Error: division by zero");

    let mut calc = Calculator::with_config(&config.display);
    assert_eq!(press(&mut calc, "4%"), "Error: unsupported operator '%'");

    let config = TestConfigBuilder::new()
        .error_marker("Oops")
        .detailed_errors(true)
        .build();
    let mut calc = Calculator::with_config(&config.display);
    assert_eq!(press(&mut calc, "2/0/"), "Oops: division by zero");
}

#[test_log::test]
fn diagnostics_count_outcomes() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "1+"), "1");
    // The lone "." is discarded, leaving just the 1.
    assert_eq!(press(&mut calc, ".+"), "1");
    // Every operand folds with the pressed operator: 1 / 2.
    assert_eq!(press(&mut calc, "2/"), "0.5");
    assert_eq!(press(&mut calc, "0/"), "Error");

    let diagnostics = calc.diagnostics();
    assert_eq!(diagnostics.evaluations, 4);
    assert_eq!(diagnostics.failures, 1);
    assert_eq!(diagnostics.discarded_tokens, 1);
}

#[test_log::test]
fn overflowing_result_shows_marker() {
    let mut calc = Calculator::new();
    let huge = "9".repeat(40);
    press(&mut calc, &huge);
    assert_eq!(press(&mut calc, "+"), "Error");
    assert_eq!(calc.state(), CalcState::Error);
    assert_eq!(calc.diagnostics().failures, 1);

    let config = TestConfigBuilder::new().detailed_errors(true).build();
    let mut calc = Calculator::with_config(&config.display);
    press(&mut calc, &huge);
    assert_eq!(press(&mut calc, "*"), "Error: result out of range");
}

#[test]
fn evaluation_failures_are_logged() {
    let collector = LogCollector::new(50);
    let reader = collector.reader();
    let _guard = tracing_subscriber::registry().with(collector).set_default();

    press_on_fresh("9/0/");

    let warning = reader
        .entries()
        .into_iter()
        .find(|entry| entry.level == Level::WARN)
        .expect("a warning for the failed evaluation");
    assert_eq!(warning.message, "evaluation failed");
    assert!(
        warning
            .fields
            .iter()
            .any(|(name, value)| name == "error" && value == "division by zero")
    );
}

// ── Service with file-based config ────────────────────────────────

#[tokio::test]
async fn service_from_config_file() {
    init_test_tracing();
    let file = TestConfigFile::with_toml(
        "[display]\nerror_marker = \"Nope\"\n\n[service]\nqueue_capacity = 4\n",
    )
    .await;
    let config = file.load().await;

    let (service, handle) = CalculatorService::from_config(&config);
    let task = tokio::spawn(service.run());
    for symbol in "6/0/".chars() {
        handle
            .send(Event::from_symbol(symbol).unwrap())
            .await
            .unwrap();
    }
    drop(handle);

    let calc = task.await.unwrap();
    assert_eq!(calc.buffer(), "Nope");
}
