//! Integration tests for the upload workflow.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use podgen_gateway::core::storage::{HttpObjectGateway, ObjectGateway, StorageReference};
use podgen_gateway::panel::{Notice, NoticeKind, Notifier, PlaybackSink};
use podgen_gateway::workflow::{FlightGuard, PickedFile, UploadWorkflow, WorkflowError};

const TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct RecordingSink {
    audio_url: Mutex<Option<String>>,
    storage_id: Mutex<Option<StorageReference>>,
    busy_events: Mutex<Vec<bool>>,
}

impl PlaybackSink for RecordingSink {
    fn set_audio_url(&self, url: String) {
        *self.audio_url.lock().unwrap() = Some(url);
    }
    fn set_storage_id(&self, reference: StorageReference) {
        *self.storage_id.lock().unwrap() = Some(reference);
    }
    fn set_prompt(&self, _prompt: String) {}
    fn set_duration(&self, _seconds: f64) {}
    fn set_busy(&self, busy: bool) {
        self.busy_events.lock().unwrap().push(busy);
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

struct Harness {
    workflow: UploadWorkflow,
    sink: Arc<RecordingSink>,
    notifier: Arc<RecordingNotifier>,
    guard: Arc<FlightGuard>,
}

fn harness(server: &MockServer) -> Harness {
    let gateway: Arc<dyn ObjectGateway> =
        Arc::new(HttpObjectGateway::new(server.uri(), None, TIMEOUT).unwrap());
    let sink = Arc::new(RecordingSink::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let guard = Arc::new(FlightGuard::new());

    let workflow = UploadWorkflow::new(
        gateway,
        sink.clone() as _,
        notifier.clone() as _,
        Arc::clone(&guard),
    );

    Harness {
        workflow,
        sink,
        notifier,
        guard,
    }
}

fn picked_mp3() -> PickedFile {
    PickedFile {
        file_name: "clip.mp3".to_string(),
        content_type: "audio/mpeg".to_string(),
        bytes: Bytes::from_static(b"MP3DATA"),
    }
}

#[tokio::test]
async fn test_successful_upload_publishes_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/upload-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uploadUrl": format!("{}/upload", server.uri()),
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header("Content-Type", "audio/mpeg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "storageId": "xyz",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/xyz/url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://cdn/xyz.mp3",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    let outcome = h.workflow.upload(Some(picked_mp3())).await.unwrap().unwrap();

    assert_eq!(outcome.storage_id.as_str(), "xyz");
    assert_eq!(outcome.audio_url, "https://cdn/xyz.mp3");
    assert_eq!(
        h.sink.audio_url.lock().unwrap().as_deref(),
        Some("https://cdn/xyz.mp3")
    );
    // uploads never touch the busy flag
    assert!(h.sink.busy_events.lock().unwrap().is_empty());
    assert!(!h.guard.is_busy());
}

#[tokio::test]
async fn test_no_file_is_a_noop() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/upload-url"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server);
    let outcome = h.workflow.upload(None).await.unwrap();

    assert!(outcome.is_none());
    assert!(h.sink.audio_url.lock().unwrap().is_none());
    assert!(h.notifier.notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_audio_file_rejected_before_any_remote_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/upload-url"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server);
    let result = h
        .workflow
        .upload(Some(PickedFile {
            file_name: "notes.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF"),
        }))
        .await;

    assert!(matches!(
        result,
        Err(WorkflowError::UnsupportedMediaType(ref t)) if t == "application/pdf"
    ));
    assert!(h.sink.audio_url.lock().unwrap().is_none());

    let notices = h.notifier.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Info);
}

#[tokio::test]
async fn test_gateway_failure_publishes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/upload-url"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    let result = h.workflow.upload(Some(picked_mp3())).await;

    assert!(matches!(result, Err(WorkflowError::Storage(_))));
    assert!(h.sink.audio_url.lock().unwrap().is_none());
    assert!(h.sink.storage_id.lock().unwrap().is_none());

    let notices = h.notifier.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Destructive);
}

#[tokio::test]
async fn test_upload_invalidates_in_flight_generation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/upload-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uploadUrl": format!("{}/upload", server.uri()),
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "storageId": "xyz",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/xyz/url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://cdn/xyz.mp3",
        })))
        .mount(&server)
        .await;

    let h = harness(&server);

    // A generation in flight at the time of the upload
    let generation_token = h.guard.try_begin().unwrap();

    h.workflow.upload(Some(picked_mp3())).await.unwrap();

    // The upload's result landed and the old generation token went stale
    assert_eq!(
        h.sink.audio_url.lock().unwrap().as_deref(),
        Some("https://cdn/xyz.mp3")
    );
    assert!(!h.guard.is_current(&generation_token));
    h.guard.finish(&generation_token);
}
