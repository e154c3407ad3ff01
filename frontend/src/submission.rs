//! Signup form submission: the button state machine and the relay call.
//!
//! The relay (Formspree or anything speaking the same protocol) is reached
//! through `FormTransport` so the flow can be exercised without a browser.

use log::error;
use serde::Deserialize;
use thiserror::Error;

use crate::config::FORM_ID_PLACEHOLDER;
use crate::timers::Scheduler;

pub const ERROR_RESET_MS: u32 = 3000;
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const UNCONFIGURED_NOTICE: &str =
    "⚠️ Heads up! Put your form relay id into the page configuration before collecting signups.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// HTML form semantics: anything that isn't `post` submits as `get`.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("post") {
            Method::Post
        } else {
            Method::Get
        }
    }

    /// Value for the form's `method` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
        }
    }
}

/// Where the signup form posts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormTarget {
    pub action: String,
    pub method: Method,
}

impl FormTarget {
    pub fn new(action: impl Into<String>, method: Method) -> Self {
        Self {
            action: action.into(),
            method,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.action.trim().is_empty() && !self.action.contains(FORM_ID_PLACEHOLDER)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayRequest {
    pub url: String,
    pub method: Method,
    /// Form-encoded fields. `None` for `get`, where they ride in the query string.
    pub body: Option<String>,
}

pub fn encode_fields(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

impl RelayRequest {
    pub fn build(target: &FormTarget, fields: &[(&str, &str)]) -> Self {
        let encoded = encode_fields(fields);
        match target.method {
            Method::Post => Self {
                url: target.action.clone(),
                method: Method::Post,
                body: Some(encoded),
            },
            Method::Get => {
                let separator = if target.action.contains('?') { '&' } else { '?' };
                Self {
                    url: format!("{}{}{}", target.action, separator, encoded),
                    method: Method::Get,
                    body: None,
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
}

/// Sends a built request and hands back whatever the relay answered.
/// Non-2xx answers are still `Ok`; `Err` means nothing came back.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn send(&self, request: RelayRequest) -> Result<RelayResponse, TransportError>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form destination still points at the placeholder id")]
    Unconfigured,
    #[error("relay rejected the submission ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    #[error("relay unreachable: {0}")]
    Unreachable(String),
}

// Formspree style error payload: {"errors": [{"message": "..."}]}
#[derive(Deserialize)]
struct RelayErrorBody {
    errors: Vec<RelayErrorEntry>,
}

#[derive(Deserialize)]
struct RelayErrorEntry {
    message: String,
}

/// Best effort summary of a rejection body for the console.
fn describe_rejection(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<RelayErrorBody>(body) {
        if !parsed.errors.is_empty() {
            return parsed
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
        }
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) if body.trim().is_empty() => "<empty body>".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

pub struct SubmissionController<T> {
    target: FormTarget,
    transport: T,
}

impl<T: FormTransport> SubmissionController<T> {
    pub fn new(target: FormTarget, transport: T) -> Self {
        Self { target, transport }
    }

    /// Refuses to run against the placeholder endpoint.
    pub fn check(&self) -> Result<(), SubmitError> {
        if self.target.is_configured() {
            Ok(())
        } else {
            Err(SubmitError::Unconfigured)
        }
    }

    /// Posts the fields to the relay. Failures are logged here, once each.
    pub async fn submit(&self, fields: &[(&str, &str)]) -> Result<(), SubmitError> {
        self.check()?;
        let request = RelayRequest::build(&self.target, fields);
        match self.transport.send(request).await {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => {
                let detail = describe_rejection(&response.body);
                error!("Form relay error ({}): {}", response.status, detail);
                Err(SubmitError::Rejected {
                    status: response.status,
                    detail,
                })
            }
            Err(e) => {
                error!("Network error: {}", e);
                Err(SubmitError::Unreachable(e.to_string()))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    Rejected,
    Unreachable,
}

/// Status line under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Note {
    Thanks,
    Problem,
    Offline,
}

impl Note {
    pub fn text(self) -> &'static str {
        match self {
            Note::Thanks => "Thanks! Check your inbox soon.",
            Note::Problem => "There was a problem. Please try again.",
            Note::Offline => "Check your internet connection.",
        }
    }

    pub fn color(self) -> Option<&'static str> {
        match self {
            Note::Thanks => Some("#00ff88"),
            Note::Problem | Note::Offline => None,
        }
    }
}

/// Button state. `Success` is terminal; `Error` goes back to `Idle` after `ERROR_RESET_MS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
    Success,
    Error(Failure),
}

impl Phase {
    /// `Idle -> Sending`. Any other phase swallows the submit.
    pub fn begin(self) -> Option<Phase> {
        match self {
            Phase::Idle => Some(Phase::Sending),
            _ => None,
        }
    }

    /// Where a finished request leaves the button, plus the note to show.
    pub fn settle(self, result: &Result<(), SubmitError>) -> (Phase, Option<Note>) {
        if self != Phase::Sending {
            return (self, None);
        }
        match result {
            Ok(()) => (Phase::Success, Some(Note::Thanks)),
            Err(SubmitError::Rejected { .. }) => (Phase::Error(Failure::Rejected), Some(Note::Problem)),
            Err(SubmitError::Unreachable(_)) => {
                (Phase::Error(Failure::Unreachable), Some(Note::Offline))
            }
            Err(SubmitError::Unconfigured) => (Phase::Idle, None),
        }
    }

    /// `Error -> Idle`; everything else stays put.
    pub fn recover(self) -> Phase {
        match self {
            Phase::Error(_) => Phase::Idle,
            other => other,
        }
    }

    pub fn is_disabled(self) -> bool {
        self != Phase::Idle
    }

    pub fn label<'a>(self, original: &'a str) -> &'a str {
        match self {
            Phase::Idle => original,
            Phase::Sending => "🔄 Sending...",
            Phase::Success => "✅ Sent successfully!",
            Phase::Error(Failure::Rejected) => "❌ Error",
            Phase::Error(Failure::Unreachable) => "❌ Connection error",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Phase::Idle => "",
            Phase::Sending | Phase::Error(_) => "opacity: 0.7;",
            Phase::Success => "background: #00ff88; color: #000; box-shadow: 0 0 20px #00ff88;",
        }
    }
}

/// Puts a failed button back to `Idle` once `ERROR_RESET_MS` has passed.
/// Phases other than `Error` schedule nothing.
pub fn schedule_recovery<S: Scheduler>(
    scheduler: &S,
    settled: Phase,
    apply: impl FnOnce(Phase) + 'static,
) {
    if let Phase::Error(_) = settled {
        scheduler.schedule(ERROR_RESET_MS, Box::new(move || apply(settled.recover())));
    }
}

/// Held from submit until the button is back at `Idle`. The rendered `Phase` lags a
/// submit by one render, so a second submit in that window is refused here.
#[derive(Debug, Default)]
pub struct SubmitLatch {
    held: bool,
}

impl SubmitLatch {
    pub fn try_begin(&mut self, rendered: Phase) -> Option<Phase> {
        if self.held {
            return None;
        }
        let sending = rendered.begin()?;
        self.held = true;
        Some(sending)
    }

    /// Gives the latch back without having sent anything.
    pub fn abandon(&mut self) {
        self.held = false;
    }

    pub fn observe(&mut self, phase: Phase) {
        if phase == Phase::Idle {
            self.held = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::timers::manual::ManualClock;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::{Mutex, Once};
    use std::thread::{self, ThreadId};

    static RECORDS: Mutex<Vec<(ThreadId, log::Level, String)>> = Mutex::new(Vec::new());
    static INIT: Once = Once::new();

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push((thread::current().id(), record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn capture_logs() {
        INIT.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    /// Error lines logged from the current test thread.
    fn errors_logged_here() -> Vec<String> {
        let me = thread::current().id();
        RECORDS
            .lock()
            .map(|records| {
                records
                    .iter()
                    .filter(|(id, level, _)| *id == me && *level == log::Level::Error)
                    .map(|(_, _, msg)| msg.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replies with a canned answer and remembers what it was asked.
    struct ScriptedTransport {
        reply: Result<RelayResponse, TransportError>,
        seen: RefCell<Vec<RelayRequest>>,
    }

    impl ScriptedTransport {
        fn answering(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(RelayResponse {
                    status,
                    body: body.to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(TransportError::Network(message.to_string())),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for &ScriptedTransport {
        async fn send(&self, request: RelayRequest) -> Result<RelayResponse, TransportError> {
            self.seen.borrow_mut().push(request);
            self.reply.clone()
        }
    }

    fn configured() -> FormTarget {
        FormTarget::new("https://formspree.io/f/xyzabcd", Method::Post)
    }

    #[test]
    fn ok_response_ends_in_success() {
        capture_logs();
        let transport = ScriptedTransport::answering(200, r#"{"ok":true}"#);
        let controller = SubmissionController::new(configured(), &transport);

        let phase = Phase::Idle.begin().expect("idle accepts submit");
        let result = block_on(controller.submit(&[("email", "ada@example.com")]));
        assert_eq!(result, Ok(()));

        let (phase, note) = phase.settle(&result);
        assert_eq!(phase, Phase::Success);
        assert_eq!(note.map(Note::text), Some("Thanks! Check your inbox soon."));
        assert_eq!(phase.recover(), Phase::Success);
        assert!(phase.is_disabled());
        assert!(errors_logged_here().is_empty());

        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, Method::Post);
        assert_eq!(seen[0].url, "https://formspree.io/f/xyzabcd");
        assert_eq!(seen[0].body.as_deref(), Some("email=ada%40example.com"));
    }

    #[test]
    fn rejection_logs_once_and_recovers_to_idle() {
        capture_logs();
        let transport = ScriptedTransport::answering(
            422,
            r#"{"errors":[{"code":"TYPE_EMAIL","message":"should be an email"}]}"#,
        );
        let controller = SubmissionController::new(configured(), &transport);

        let result = block_on(controller.submit(&[("email", "nope")]));
        assert_eq!(
            result,
            Err(SubmitError::Rejected {
                status: 422,
                detail: "should be an email".to_string(),
            })
        );

        let logged = errors_logged_here();
        assert_eq!(logged.len(), 1);
        assert!(logged[0].contains("422"));

        let (phase, note) = Phase::Sending.settle(&result);
        assert_eq!(phase, Phase::Error(Failure::Rejected));
        assert_eq!(note, Some(Note::Problem));
        assert_eq!(phase.label("Join"), "❌ Error");

        let restored = phase.recover();
        assert_eq!(restored, Phase::Idle);
        assert_eq!(restored.label("Join"), "Join");
        assert_eq!(restored.style(), "");
        assert!(!restored.is_disabled());
    }

    #[test]
    fn transport_failure_is_distinct_and_restores_same_style() {
        capture_logs();
        let transport = ScriptedTransport::failing("TypeError: Failed to fetch");
        let controller = SubmissionController::new(configured(), &transport);

        let result = block_on(controller.submit(&[("email", "ada@example.com")]));
        assert!(matches!(result, Err(SubmitError::Unreachable(_))));
        assert_eq!(errors_logged_here().len(), 1);

        let (phase, note) = Phase::Sending.settle(&result);
        assert_eq!(phase, Phase::Error(Failure::Unreachable));
        assert_eq!(note, Some(Note::Offline));
        assert_ne!(phase.label("Join"), Phase::Error(Failure::Rejected).label("Join"));

        let rejected_reset = Phase::Error(Failure::Rejected).recover();
        assert_eq!(phase.recover(), rejected_reset);
        assert_eq!(phase.recover().style(), "");
    }

    #[test]
    fn placeholder_endpoint_never_reaches_transport() {
        capture_logs();
        let transport = ScriptedTransport::answering(200, "");
        let target = FormTarget::new("https://formspree.io/f/YOUR_FORM_ID", Method::Post);
        let controller = SubmissionController::new(target, &transport);

        assert_eq!(controller.check(), Err(SubmitError::Unconfigured));
        let result = block_on(controller.submit(&[("email", "ada@example.com")]));
        assert_eq!(result, Err(SubmitError::Unconfigured));
        assert!(transport.seen.borrow().is_empty());
        assert!(errors_logged_here().is_empty());
    }

    #[test]
    fn busy_button_swallows_submits() {
        assert_eq!(Phase::Sending.begin(), None);
        assert_eq!(Phase::Success.begin(), None);
        assert_eq!(Phase::Error(Failure::Rejected).begin(), None);
        assert_eq!(Phase::Idle.settle(&Ok(())), (Phase::Idle, None));
    }

    #[test]
    fn get_forms_carry_fields_in_query() {
        let target = FormTarget::new("https://relay.example/f?src=landing", Method::parse("GET"));
        let request = RelayRequest::build(&target, &[("email", "a b@c.d"), ("ref", "hero")]);
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.body, None);
        assert_eq!(
            request.url,
            "https://relay.example/f?src=landing&email=a%20b%40c.d&ref=hero"
        );
    }

    #[test]
    fn method_parsing_follows_html_forms() {
        assert_eq!(Method::parse("post"), Method::Post);
        assert_eq!(Method::parse(" POST "), Method::Post);
        assert_eq!(Method::parse(""), Method::Get);
        assert_eq!(Method::parse("put"), Method::Get);
    }

    #[test]
    fn rejection_detail_falls_back_to_raw_body() {
        assert_eq!(describe_rejection(r#"{"error":"nope"}"#), r#"{"error":"nope"}"#);
        assert_eq!(describe_rejection("Bad Gateway"), "Bad Gateway");
        assert_eq!(describe_rejection("  "), "<empty body>");
    }

    #[test]
    fn only_2xx_counts_as_ok() {
        let response = |status| RelayResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(!response(302).ok());
        assert!(!response(500).ok());
    }

    #[test]
    fn failed_button_resets_exactly_at_three_seconds() {
        let clock = ManualClock::new();
        let shown = Rc::new(Cell::new(Phase::Error(Failure::Rejected)));
        {
            let shown = shown.clone();
            schedule_recovery(&clock, shown.get(), move |next| shown.set(next));
        }

        clock.advance(2_999);
        assert_eq!(shown.get(), Phase::Error(Failure::Rejected));
        assert_eq!(shown.get().label("Join"), "❌ Error");

        clock.advance(1);
        assert_eq!(clock.now(), 3_000);
        assert_eq!(shown.get(), Phase::Idle);
        assert_eq!(shown.get().label("Join"), "Join");
        assert_eq!(shown.get().style(), "");
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn unreachable_resets_on_same_schedule() {
        let clock = ManualClock::new();
        let shown = Rc::new(Cell::new(Phase::Error(Failure::Unreachable)));
        {
            let shown = shown.clone();
            schedule_recovery(&clock, shown.get(), move |next| shown.set(next));
        }
        clock.advance(2_999);
        assert!(shown.get().is_disabled());
        clock.advance(1);
        assert_eq!(shown.get(), Phase::Idle);
    }

    #[test]
    fn success_never_schedules_a_reset() {
        let clock = ManualClock::new();
        let shown = Rc::new(Cell::new(Phase::Success));
        {
            let shown = shown.clone();
            schedule_recovery(&clock, Phase::Success, move |next| shown.set(next));
        }
        assert_eq!(clock.pending(), 0);
        clock.advance(60_000);
        assert_eq!(shown.get(), Phase::Success);
    }

    #[test]
    fn latch_refuses_second_submit_from_stale_render() {
        let mut latch = SubmitLatch::default();
        // Both submits see the same rendered Idle phase.
        assert_eq!(latch.try_begin(Phase::Idle), Some(Phase::Sending));
        assert_eq!(latch.try_begin(Phase::Idle), None);

        latch.observe(Phase::Error(Failure::Rejected));
        assert_eq!(latch.try_begin(Phase::Idle), None);

        latch.observe(Phase::Idle);
        assert_eq!(latch.try_begin(Phase::Idle), Some(Phase::Sending));
    }

    #[test]
    fn latch_stays_held_after_success_and_frees_on_abandon() {
        let mut latch = SubmitLatch::default();
        latch.try_begin(Phase::Idle);
        latch.observe(Phase::Success);
        assert_eq!(latch.try_begin(Phase::Idle), None);

        let mut latch = SubmitLatch::default();
        latch.try_begin(Phase::Idle);
        latch.abandon();
        assert_eq!(latch.try_begin(Phase::Idle), Some(Phase::Sending));
        assert_eq!(SubmitLatch::default().try_begin(Phase::Sending), None);
    }

    #[test]
    fn method_attribute_matches_request_method() {
        for raw in ["post", "GET", ""] {
            let method = Method::parse(raw);
            assert_eq!(Method::parse(method.as_str()), method);
        }
        assert_eq!(Method::Post.as_str(), "post");
        assert_eq!(Method::Get.as_str(), "get");
    }
}
