use std::sync::Arc;

use presult::ProcessingResult;
use psession::prelude::*;
use pschema::{OptionValue, ToolDefinition, builtin};

fn tool(id: &str) -> Arc<ToolDefinition> {
    builtin::catalog()
        .expect("catalog should build")
        .require(id)
        .expect("tool is built in")
}

fn pdf(name: &str) -> FileHandle {
    FileHandle::pdf(name, b"%PDF-1.7".to_vec())
}

fn assert_outcome_invariant(session: &SessionState) {
    match session.phase() {
        Phase::Succeeded => {
            assert!(session.result().is_some());
            assert!(session.error_message().is_none());
        }
        Phase::Failed => {
            assert!(session.result().is_none());
            assert!(session.error_message().is_some());
        }
        Phase::Idle | Phase::FilesChosen | Phase::Submitting => {
            assert!(session.result().is_none());
            assert!(session.error_message().is_none());
        }
    }
}

#[test]
fn activation_reports_required_options_without_defaults() {
    let mut session = SessionState::new();
    session.activate_tool(tool("protect"));

    let keys: Vec<_> = session
        .violations()
        .into_iter()
        .filter_map(|violation| violation.option_key)
        .collect();
    assert_eq!(keys, vec!["password".to_string()]);
    assert_eq!(
        session.option_values().get("permissions").and_then(|value| value.as_text()),
        Some("full")
    );
}

#[test]
fn begin_submit_twice_keeps_one_submission_outstanding() {
    let mut session = SessionState::new();
    session.activate_tool(tool("rotate-pages"));
    session.attach_files(vec![pdf("a.pdf")]).expect("attach");

    let ticket = session.begin_submit().expect("first submit");
    let second = session.begin_submit().expect_err("second submit");

    assert_eq!(second.kind, SessionErrorKind::AlreadySubmitting);
    assert_eq!(session.phase(), Phase::Submitting);
    assert!(session.is_current(&ticket));
    assert_outcome_invariant(&session);
}

#[test]
fn attachment_replaces_files_and_clears_outcome() {
    let mut session = SessionState::new();
    session.activate_tool(tool("merge"));
    session
        .attach_files(vec![pdf("a.pdf"), pdf("b.pdf")])
        .expect("attach two");
    session.begin_submit().expect("submit");
    session
        .complete_failure("Invalid PDF")
        .expect("failure from submitting");
    assert_eq!(session.error_message(), Some("Invalid PDF"));
    assert_outcome_invariant(&session);

    session.attach_files(vec![pdf("c.pdf")]).expect("attach one");
    let names: Vec<_> = session
        .selected_files()
        .iter()
        .map(|file| file.name.as_str())
        .collect();
    assert_eq!(names, vec!["c.pdf"]);
    assert_eq!(session.phase(), Phase::FilesChosen);
    assert_outcome_invariant(&session);

    session.attach_files(Vec::new()).expect("attach none");
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn too_many_files_leaves_state_untouched() {
    let mut session = SessionState::new();
    session.activate_tool(tool("compare"));
    session.attach_files(vec![pdf("a.pdf")]).expect("attach one");
    let generation = session.generation();

    let error = session
        .attach_files(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")])
        .expect_err("three files exceed the limit");

    assert_eq!(error.kind, SessionErrorKind::TooManyFiles);
    assert_eq!(session.generation(), generation);
    assert_eq!(session.selected_files().len(), 1);
}

#[test]
fn set_option_keeps_phase_and_rejects_unknown_keys() {
    let mut session = SessionState::new();
    session.activate_tool(tool("watermark"));
    session.attach_files(vec![pdf("a.pdf")]).expect("attach");

    let previous = session.set_option("text", "DRAFT").expect("known key");
    assert_eq!(previous.and_then(|value| value.as_text().map(str::to_string)), Some("CONFIDENTIAL".to_string()));
    assert_eq!(session.phase(), Phase::FilesChosen);

    let error = session.set_option("shade", "grey").expect_err("unknown key");
    assert_eq!(error.kind, SessionErrorKind::UnknownOption);
}

#[test]
fn drop_files_reseeds_values_and_replaces_selection() {
    let mut session = SessionState::new();
    session.activate_tool(tool("watermark"));
    session.attach_files(vec![pdf("a.pdf")]).expect("attach");
    session.set_option("text", "DRAFT").expect("known key");
    session.set_option("opacity", 0.8).expect("known key");

    session.drop_files(vec![pdf("b.pdf")]).expect("drop");

    assert_eq!(
        session.option_values().get("text"),
        Some(&OptionValue::from("CONFIDENTIAL"))
    );
    assert_eq!(session.option_values().get("opacity"), Some(&OptionValue::from(0.3)));
    assert_eq!(session.selected_files().len(), 1);
    assert_eq!(session.selected_files()[0].name, "b.pdf");
    assert_eq!(session.phase(), Phase::FilesChosen);
}

#[test]
fn rejected_drop_keeps_current_values() {
    let mut session = SessionState::new();
    session.activate_tool(tool("rotate-pages"));
    session.attach_files(vec![pdf("a.pdf")]).expect("attach");
    session.set_option("rotation", "270").expect("known key");

    let error = session
        .drop_files(vec![pdf("a.pdf"), pdf("b.pdf")])
        .expect_err("rotation takes one file");

    assert_eq!(error.kind, SessionErrorKind::TooManyFiles);
    assert_eq!(
        session.option_values().get("rotation"),
        Some(&OptionValue::from("270"))
    );
}

#[test]
fn new_activation_supersedes_in_flight_generation() {
    let mut session = SessionState::new();
    session.activate_tool(tool("rotate-pages"));
    session.attach_files(vec![pdf("a.pdf")]).expect("attach");
    let ticket = session.begin_submit().expect("submit");

    session.activate_tool(tool("compress"));

    assert!(!session.is_current(&ticket));
    assert!(session.generation() > ticket.generation);
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.selected_files().is_empty());
    assert_outcome_invariant(&session);
}

#[test]
fn reattaching_during_submission_supersedes_the_ticket() {
    let mut session = SessionState::new();
    session.activate_tool(tool("rotate-pages"));
    session.attach_files(vec![pdf("a.pdf")]).expect("attach");
    let stale = session.begin_submit().expect("submit");

    session.attach_files(vec![pdf("b.pdf")]).expect("reattach");
    let fresh = session.begin_submit().expect("resubmit");

    assert!(!session.is_current(&stale));
    assert!(session.is_current(&fresh));
}

#[test]
fn success_can_be_resubmitted_and_rejected() {
    let mut session = SessionState::new();
    session.activate_tool(tool("rotate-pages"));
    session.attach_files(vec![pdf("a.pdf")]).expect("attach");
    session.begin_submit().expect("submit");
    session
        .complete_success(ProcessingResult::new("Rotated"))
        .expect("success");
    assert_eq!(session.result().map(|result| result.message.as_str()), Some("Rotated"));
    assert_outcome_invariant(&session);

    session.reject("Pages is required").expect("reject after success");
    assert_eq!(session.phase(), Phase::Failed);
    assert_outcome_invariant(&session);

    session.begin_submit().expect("resubmit after failure");
    assert_outcome_invariant(&session);
}

#[test]
fn view_projects_visible_options_and_violations() {
    let mut session = SessionState::new();
    session.activate_tool(tool("split"));
    session.attach_files(vec![pdf("a.pdf")]).expect("attach");

    let view = session.view();
    assert_eq!(view.tool_id.as_ref().map(|id| id.as_str()), Some("split"));
    assert_eq!(view.visible_options.len(), 1);
    assert!(view.can_submit());

    session.set_option("splitType", "ranges").expect("set");
    let view = session.view();
    assert_eq!(view.visible_options.len(), 2);
    assert_eq!(view.files[0].name, "a.pdf");
    assert!(!view.is_submitting());
}
