use std::sync::{Arc, Mutex};
use std::time::Duration;

use pcommon::{BoxFuture, ToolId};
use pexec::prelude::*;
use presult::ProcessingResult;
use psession::{FileHandle, Phase};
use pschema::{OptionValue, ToolCatalog, builtin};
use tokio::sync::{Notify, oneshot};

const SUCCESS: &str = r#"{"success":true,"message":"Done","downloadUrl":"/downloads/out.pdf","filename":"out.pdf"}"#;

#[derive(Debug)]
struct CapturingTransport {
    response: TransportResponse,
    payloads: Mutex<Vec<SubmissionPayload>>,
}

impl CapturingTransport {
    fn answering(response: TransportResponse) -> Self {
        Self {
            response,
            payloads: Mutex::new(Vec::new()),
        }
    }

    fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.lock().expect("payloads lock").clone()
    }
}

impl ProcessingTransport for CapturingTransport {
    fn submit<'a>(
        &'a self,
        payload: SubmissionPayload,
    ) -> BoxFuture<'a, Result<TransportResponse, ExecError>> {
        Box::pin(async move {
            self.payloads.lock().expect("payloads lock").push(payload);
            Ok(self.response.clone())
        })
    }
}

#[derive(Debug)]
struct FailingTransport;

impl ProcessingTransport for FailingTransport {
    fn submit<'a>(
        &'a self,
        _payload: SubmissionPayload,
    ) -> BoxFuture<'a, Result<TransportResponse, ExecError>> {
        Box::pin(async move { Err(ExecError::transport("connection refused")) })
    }
}

/// Holds the request open until the test releases it.
#[derive(Debug)]
struct GatedTransport {
    started: Notify,
    release: Mutex<Option<oneshot::Receiver<TransportResponse>>>,
    calls: Mutex<usize>,
}

impl GatedTransport {
    fn new(release: oneshot::Receiver<TransportResponse>) -> Self {
        Self {
            started: Notify::new(),
            release: Mutex::new(Some(release)),
            calls: Mutex::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.calls.lock().expect("calls lock")
    }
}

impl ProcessingTransport for GatedTransport {
    fn submit<'a>(
        &'a self,
        _payload: SubmissionPayload,
    ) -> BoxFuture<'a, Result<TransportResponse, ExecError>> {
        Box::pin(async move {
            *self.calls.lock().expect("calls lock") += 1;
            let release = self.release.lock().expect("release lock").take();
            self.started.notify_one();

            match release {
                Some(release) => release
                    .await
                    .map_err(|_| ExecError::transport("gate dropped")),
                None => Err(ExecError::transport("gate already used")),
            }
        })
    }
}

#[derive(Default)]
struct RecordingHooks {
    events: Mutex<Vec<String>>,
}

impl RecordingHooks {
    fn events(&self) -> Vec<String> {
        self.events.lock().expect("events lock").clone()
    }

    fn push(&self, event: String) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl SubmissionHooks for RecordingHooks {
    fn on_submit_start(&self, event: &SubmissionEvent) {
        self.push(format!("start:{}:{}", event.tool_id, event.file_count));
    }

    fn on_submit_success(
        &self,
        event: &SubmissionEvent,
        _result: &ProcessingResult,
        _elapsed: Duration,
    ) {
        self.push(format!("success:{}", event.tool_id));
    }

    fn on_submit_failure(&self, event: &SubmissionEvent, error: &ExecError, _elapsed: Duration) {
        self.push(format!("failure:{}:{:?}", event.tool_id, error.kind));
    }

    fn on_stale_response(&self, event: &SubmissionEvent, _elapsed: Duration) {
        self.push(format!("stale:{}", event.generation));
    }

    fn on_rejected(&self, tool_id: Option<&ToolId>, error: &ExecError) {
        let tool = tool_id.map(ToolId::as_str).unwrap_or("-");
        self.push(format!("rejected:{tool}:{:?}", error.kind));
    }
}

fn catalog() -> ToolCatalog {
    builtin::catalog().expect("catalog should build")
}

fn pdf(name: &str) -> FileHandle {
    FileHandle::pdf(name, format!("%PDF {name}").into_bytes())
}

#[tokio::test]
async fn rotation_submits_seeded_defaults_and_one_file() {
    let transport = Arc::new(CapturingTransport::answering(TransportResponse::json(200, SUCCESS)));
    let coordinator = ExecutionCoordinator::new(transport.clone());
    coordinator
        .select_files(catalog().require("rotate-pages").expect("rotate"), vec![pdf("scan.pdf")])
        .expect("select");

    assert!(coordinator.view().expect("view").violations.is_empty());

    let outcome = coordinator.submit().await.expect("submit succeeds");
    assert_eq!(outcome.result().map(|result| result.message.as_str()), Some("Done"));

    let payloads = transport.payloads();
    assert_eq!(payloads.len(), 1);
    let payload = &payloads[0];
    assert_eq!(payload.endpoint, "/api/edit/rotate");
    assert_eq!(payload.file_field, "file");
    assert_eq!(payload.file_names(), vec!["scan.pdf"]);
    assert_eq!(payload.field("rotation"), Some("90"));
    assert_eq!(payload.field("pages"), Some("all"));

    let view = coordinator.view().expect("view");
    assert_eq!(view.phase, Phase::Succeeded);
    assert!(view.result.is_some());
    assert!(view.error_message.is_none());
}

#[tokio::test]
async fn redropping_files_on_the_active_tool_restores_defaults() {
    let transport = Arc::new(CapturingTransport::answering(TransportResponse::json(200, SUCCESS)));
    let coordinator = ExecutionCoordinator::new(transport.clone());
    let rotate = catalog().require("rotate-pages").expect("rotate");

    coordinator
        .select_files(rotate.clone(), vec![pdf("a.pdf")])
        .expect("first drop");
    coordinator.set_option("rotation", "180").expect("set rotation");
    let first_generation = coordinator.view().expect("view").generation;

    coordinator
        .select_files(rotate, vec![pdf("b.pdf")])
        .expect("second drop");

    let view = coordinator.view().expect("view");
    assert_eq!(view.option_values.get("rotation"), Some(&OptionValue::from("90")));
    assert_eq!(view.files.len(), 1);
    assert_eq!(view.files[0].name, "b.pdf");
    assert!(view.generation > first_generation);

    coordinator.submit().await.expect("submit");
    assert_eq!(transport.payloads()[0].field("rotation"), Some("90"));
}

#[tokio::test]
async fn short_password_fails_validation_without_request() {
    let transport = Arc::new(CapturingTransport::answering(TransportResponse::json(200, SUCCESS)));
    let hooks = Arc::new(RecordingHooks::default());
    let coordinator = ExecutionCoordinator::builder(transport.clone())
        .hooks(hooks.clone())
        .build();
    coordinator
        .select_files(catalog().require("protect").expect("protect"), vec![pdf("secret.pdf")])
        .expect("select");
    coordinator.set_option("password", "abc").expect("set password");

    let violations = coordinator.view().expect("view").violations;
    assert_eq!(violations.len(), 1);

    let error = coordinator.submit().await.expect_err("validation failure");
    assert_eq!(error.kind, ExecErrorKind::Validation);
    assert_eq!(error.message, "Password must be at least 4 characters long");
    assert!(transport.payloads().is_empty());

    let view = coordinator.view().expect("view");
    assert_eq!(view.phase, Phase::Failed);
    assert_eq!(
        view.error_message.as_deref(),
        Some("Password must be at least 4 characters long")
    );
    assert_eq!(hooks.events(), vec!["rejected:protect:Validation".to_string()]);
}

#[tokio::test]
async fn merge_sends_repeated_files_in_attachment_order() {
    let transport = Arc::new(CapturingTransport::answering(TransportResponse::json(200, SUCCESS)));
    let coordinator = ExecutionCoordinator::new(transport.clone());
    coordinator
        .select_files(
            catalog().require("merge").expect("merge"),
            vec![pdf("2.pdf"), pdf("1.pdf"), pdf("3.pdf")],
        )
        .expect("select");

    coordinator.submit().await.expect("submit succeeds");

    let payload = &transport.payloads()[0];
    assert_eq!(payload.file_field, "files");
    assert_eq!(payload.file_names(), vec!["2.pdf", "1.pdf", "3.pdf"]);
}

#[tokio::test]
async fn compare_requires_exactly_two_files() {
    let transport = Arc::new(CapturingTransport::answering(TransportResponse::json(200, SUCCESS)));
    let coordinator = ExecutionCoordinator::new(transport.clone());
    coordinator
        .select_files(catalog().require("compare").expect("compare"), vec![pdf("a.pdf")])
        .expect("select");

    let error = coordinator.submit().await.expect_err("one file is not enough");
    assert_eq!(error.kind, ExecErrorKind::Validation);
    assert_eq!(error.violations[0].option_key, None);

    coordinator.attach_files(vec![pdf("a.pdf"), pdf("b.pdf")]).expect("attach two");
    coordinator.submit().await.expect("two files submit");
    assert_eq!(transport.payloads()[0].file_names(), vec!["a.pdf", "b.pdf"]);
}

#[tokio::test]
async fn missing_tool_or_files_is_refused_without_state_change() {
    let transport = Arc::new(CapturingTransport::answering(TransportResponse::json(200, SUCCESS)));
    let coordinator = ExecutionCoordinator::new(transport.clone());

    let error = coordinator.submit().await.expect_err("no tool");
    assert_eq!(error.kind, ExecErrorKind::NotReady);

    coordinator
        .activate_tool(catalog().require("compress").expect("compress"))
        .expect("activate");
    let before = coordinator.view().expect("view");

    let error = coordinator.submit().await.expect_err("no files");
    assert_eq!(error.kind, ExecErrorKind::NotReady);
    assert_eq!(coordinator.view().expect("view"), before);
    assert!(transport.payloads().is_empty());
}

#[tokio::test]
async fn transport_and_application_failures_move_to_failed() {
    let coordinator = ExecutionCoordinator::new(Arc::new(FailingTransport));
    coordinator
        .select_files(catalog().require("compress").expect("compress"), vec![pdf("a.pdf")])
        .expect("select");

    let error = coordinator.submit().await.expect_err("transport failure");
    assert_eq!(error.kind, ExecErrorKind::Transport);
    assert_eq!(
        coordinator.view().expect("view").error_message.as_deref(),
        Some("connection refused")
    );

    let rejecting = ExecutionCoordinator::new(Arc::new(CapturingTransport::answering(
        TransportResponse::json(422, r#"{"success":false,"error":"PDF is encrypted"}"#),
    )));
    rejecting
        .select_files(catalog().require("compress").expect("compress"), vec![pdf("a.pdf")])
        .expect("select");

    let error = rejecting.submit().await.expect_err("application failure");
    assert_eq!(error.kind, ExecErrorKind::Application);
    let view = rejecting.view().expect("view");
    assert_eq!(view.phase, Phase::Failed);
    assert_eq!(view.error_message.as_deref(), Some("PDF is encrypted"));
}

#[tokio::test]
async fn second_submit_while_in_flight_is_busy() {
    let (release, gate) = oneshot::channel();
    let transport = Arc::new(GatedTransport::new(gate));
    let hooks = Arc::new(RecordingHooks::default());
    let coordinator = Arc::new(
        ExecutionCoordinator::builder(transport.clone())
            .hooks(hooks.clone())
            .build(),
    );
    coordinator
        .select_files(catalog().require("compress").expect("compress"), vec![pdf("a.pdf")])
        .expect("select");

    let first = tokio::spawn({
        let coordinator = Arc::clone(&coordinator);
        async move { coordinator.submit().await }
    });
    transport.started.notified().await;

    let error = coordinator.submit().await.expect_err("busy");
    assert_eq!(error.kind, ExecErrorKind::Busy);
    assert_eq!(coordinator.view().expect("view").phase, Phase::Submitting);
    assert_eq!(transport.calls(), 1);

    release
        .send(TransportResponse::json(200, SUCCESS))
        .expect("first submit is waiting");
    let outcome = first.await.expect("join").expect("first submit succeeds");
    assert!(!outcome.is_discarded());
    assert_eq!(transport.calls(), 1);
    assert_eq!(
        hooks.events(),
        vec![
            "start:compress:1".to_string(),
            "rejected:compress:Busy".to_string(),
            "success:compress".to_string(),
        ]
    );
}

#[tokio::test]
async fn stale_response_does_not_touch_newer_generation() {
    let (release, gate) = oneshot::channel();
    let transport = Arc::new(GatedTransport::new(gate));
    let hooks = Arc::new(RecordingHooks::default());
    let coordinator = Arc::new(
        ExecutionCoordinator::builder(transport.clone())
            .hooks(hooks.clone())
            .build(),
    );
    let catalog = catalog();
    coordinator
        .select_files(catalog.require("rotate-pages").expect("rotate"), vec![pdf("a.pdf")])
        .expect("select");
    let issued_under = coordinator.view().expect("view").generation;

    let pending = tokio::spawn({
        let coordinator = Arc::clone(&coordinator);
        async move { coordinator.submit().await }
    });
    transport.started.notified().await;

    coordinator
        .activate_tool(catalog.require("watermark").expect("watermark"))
        .expect("activate");
    let before = coordinator.view().expect("view");
    assert!(before.generation > issued_under);

    release
        .send(TransportResponse::json(200, SUCCESS))
        .expect("submit is waiting");
    let outcome = pending.await.expect("join").expect("stale submit is not an error");

    assert!(outcome.is_discarded());
    assert_eq!(coordinator.view().expect("view"), before);
    assert_eq!(
        hooks.events().last().map(String::as_str),
        Some(format!("stale:{issued_under}").as_str())
    );
}
