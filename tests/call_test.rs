use chargelink::call::{ApiCall, CallOptions};
use chargelink::error::ChargelinkError;

#[tokio::test]
async fn success_stores_data_and_clears_loading() {
    let mut call: ApiCall<u32> = ApiCall::new();
    assert!(!call.loading);

    let result = call
        .execute(async { Ok(7) }, &CallOptions::default())
        .await
        .unwrap();

    assert_eq!(result, 7);
    assert_eq!(call.data, Some(7));
    assert!(!call.loading);
    assert!(call.error.is_empty());
}

#[tokio::test]
async fn failure_stores_message_and_reraises() {
    let mut call: ApiCall<u32> = ApiCall::new();

    let err = call
        .execute(
            async { Err(ChargelinkError::api("queue is full")) },
            &CallOptions::default(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.message(), "queue is full");
    assert_eq!(call.error, "queue is full");
    assert!(!call.loading);
    assert_eq!(call.data, None);
}

#[tokio::test]
async fn failure_keeps_previous_data() {
    let mut call: ApiCall<u32> = ApiCall::new();
    call.execute(async { Ok(1) }, &CallOptions::default())
        .await
        .unwrap();

    let _ = call
        .execute(
            async { Err(ChargelinkError::network("connection reset")) },
            &CallOptions::default(),
        )
        .await;

    // Stale-but-present: the last successful value is retained
    assert_eq!(call.data, Some(1));
    assert_eq!(call.error, "connection reset");
}

#[tokio::test]
async fn next_execute_clears_previous_error() {
    let mut call: ApiCall<u32> = ApiCall::new();
    let _ = call
        .execute(
            async { Err(ChargelinkError::api("boom")) },
            &CallOptions::default(),
        )
        .await;
    assert!(!call.error.is_empty());

    call.execute(async { Ok(2) }, &CallOptions::default())
        .await
        .unwrap();
    assert!(call.error.is_empty());
}

#[tokio::test]
async fn reset_returns_to_idle() {
    let mut call: ApiCall<u32> = ApiCall::new();
    call.execute(async { Ok(3) }, &CallOptions::default())
        .await
        .unwrap();

    call.reset();
    assert!(!call.loading);
    assert!(call.error.is_empty());
    assert_eq!(call.data, None);
}
