//! End-to-end flow through the public API with the mock seams.

use std::cell::RefCell;
use std::rc::Rc;

use filedrop_core::mock::{MockTransport, RecordingListener, fixed_clock};
use filedrop_core::render::{BadgeTone, project};
use filedrop_core::{
    BatchSummary, Credential, FileMeta, ProgressSimulator, UploadConfig, UploadError,
    UploadList, UploadResponse, UploadSession, UploadStatus, UploadStore, interpret_response,
};

const MB: u64 = 1024 * 1024;

fn config() -> Rc<UploadConfig> {
    Rc::new(
        UploadConfig::from_json(
            r#"{
                "maxFileSize": 10485760,
                "allowedTypes": ["application/pdf", "image/png"],
                "maxFiles": 4,
                "endpoint": "/api/documents",
                "category": "contracts"
            }"#,
        )
        .unwrap(),
    )
}

#[tokio::test]
async fn test_mixed_batch() {
    let transport = MockTransport::new();
    transport.push_response(Ok(UploadResponse {
        success: true,
        message: "ok".to_string(),
        file_id: Some("doc_1".to_string()),
    }));
    transport.push_response(interpret_response(
        500,
        r#"{"success":false,"message":"Storage unavailable"}"#,
    ));
    let store = RefCell::new(UploadList::new());
    let listener = RecordingListener::default();
    let session =
        UploadSession::new(config(), &transport, &store, fixed_clock).with_listener(&listener);

    let files = vec![
        ("pdf".to_string(), FileMeta::new("lease.pdf", 2 * MB, "application/pdf")),
        ("big".to_string(), FileMeta::new("scan.pdf", 20 * MB, "application/pdf")),
        ("png".to_string(), FileMeta::new("photo.png", MB, "image/png")),
        ("zip".to_string(), FileMeta::new("bundle.zip", MB, "application/zip")),
    ];
    let credential = Credential::bearer("secret");
    let summary = session.process_batch(files, credential.as_ref()).await;

    assert_eq!(
        summary,
        BatchSummary {
            completed: 1,
            failed: 1,
            rejected: 2
        }
    );
    assert_eq!(summary.total(), 4);

    // Only the two valid files reached the network.
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.endpoint == "/api/documents"));
    assert!(requests.iter().all(|r| r.category == "contracts"));
    assert!(
        requests
            .iter()
            .all(|r| r.authorization.as_deref() == Some("Bearer secret"))
    );

    let list = store.snapshot();
    let statuses: Vec<_> = list.iter().map(|r| (r.name.as_str(), r.status)).collect();
    assert_eq!(
        statuses,
        vec![
            ("lease.pdf", UploadStatus::Completed),
            ("scan.pdf", UploadStatus::Error),
            ("photo.png", UploadStatus::Error),
            ("bundle.zip", UploadStatus::Error),
        ]
    );

    let views = project(&list, fixed_clock());
    assert_eq!(views[0].progress, None);
    assert_eq!(views[0].badge.tone, BadgeTone::Success);
    assert_eq!(
        views[1].error.as_deref(),
        Some("File size must be less than 10 MB")
    );
    assert_eq!(views[2].error.as_deref(), Some("Storage unavailable"));

    assert_eq!(listener.completed().len(), 1);
    let errors: Vec<_> = listener.errors().into_iter().map(|f| f.message()).collect();
    assert_eq!(
        errors,
        vec![
            "File size must be less than 10 MB".to_string(),
            "Storage unavailable".to_string(),
            "File type \"application/zip\" is not allowed".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_remove_then_upload_again() {
    let transport = MockTransport::new();
    let store = RefCell::new(UploadList::new());
    let config = Rc::new(UploadConfig {
        max_files: 1,
        ..UploadConfig::default()
    });
    let session = UploadSession::new(config, &transport, &store, fixed_clock);
    let meta = FileMeta::new("a.pdf", MB, "application/pdf");

    session.process(&String::new(), &meta, None).await;
    let outcome = session.process(&String::new(), &meta, None).await;
    assert!(matches!(
        outcome,
        filedrop_core::UploadOutcome::Rejected(ref f)
            if matches!(f.error, UploadError::Validation(_))
    ));

    // Freeing a slot lets the next file through.
    let id = store.snapshot().iter().next().unwrap().id;
    store.apply(|list| list.without(id));
    session.process(&String::new(), &meta, None).await;

    assert_eq!(store.snapshot().len(), 1);
    assert_eq!(transport.request_count(), 2);
}

#[test]
fn test_progress_ticks_stay_below_completion() {
    let sim = ProgressSimulator::default();
    let meta = FileMeta::new("a.pdf", MB, "application/pdf");
    let record = filedrop_core::UploadRecord::uploading(&meta, 0);
    let id = record.id;

    let mut list = UploadList::new().with_record(record);
    for _ in 0..50 {
        list = list.tick_progress(id, &sim);
    }
    assert_eq!(list.get(id).unwrap().progress, sim.ceiling);

    list = list.with_updated(id, |r| r.complete());
    assert_eq!(list.tick_progress(id, &sim).get(id).unwrap().progress, 100);
}
