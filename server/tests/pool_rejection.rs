mod common;

use crate::common::TestServer;
use test_case::test_case;
use timestream::clients::client_for;
use timestream::error::TimestreamError;
use timestream::journal::{read_journal, RpcRecord};
use timestream::mode::BenchmarkMode;
use timestream::utils::request_id::RequestId;

#[test_case(BenchmarkMode::Grpc; "grpc")]
#[test_case(BenchmarkMode::RestProto; "rest proto")]
#[test_case(BenchmarkMode::RestJson; "rest json")]
#[tokio::test]
async fn count_above_pool_size_should_be_rejected_without_crashing(mode: BenchmarkMode) {
    let mut server = TestServer::start(mode, 3).await;
    let mut client = client_for(mode, &server.host(), server.port()).unwrap();

    let error = client
        .fetch_records(4, &RequestId::random())
        .await
        .unwrap_err();
    assert!(matches!(error, TimestreamError::Rejected { .. }));

    // The backend keeps serving after a rejection.
    let outcome = client.fetch_records(3, &RequestId::random()).await.unwrap();
    assert_eq!(outcome.records.len(), 3);

    drop(client);
    assert_eq!(server.stop().await, 1);
    let rpcs: Vec<RpcRecord> = read_journal(server.journal()).unwrap();
    assert_eq!(rpcs.len(), 1);
}

#[tokio::test]
async fn grpc_rejection_should_use_invalid_argument_status() {
    let mut server = TestServer::start(BenchmarkMode::Grpc, 1).await;
    let mut client = client_for(BenchmarkMode::Grpc, &server.host(), server.port()).unwrap();

    match client.fetch_records(2, &RequestId::random()).await {
        Err(TimestreamError::Rejected { status, reason }) => {
            assert_eq!(status, tonic::Code::InvalidArgument.description());
            assert_eq!(reason, "count exceeds pool size");
        }
        other => panic!("Expected a rejection, got: {other:?}"),
    }

    drop(client);
    server.stop().await;
}

#[test_case(BenchmarkMode::RestProto; "rest proto")]
#[test_case(BenchmarkMode::RestJson; "rest json")]
#[tokio::test]
async fn rest_rejection_should_be_a_bad_request(mode: BenchmarkMode) {
    let mut server = TestServer::start(mode, 1).await;
    let mut client = client_for(mode, &server.host(), server.port()).unwrap();

    match client.fetch_records(2, &RequestId::random()).await {
        Err(TimestreamError::Rejected { status, reason }) => {
            assert!(status.starts_with("400"));
            assert!(reason.contains("Requested count exceeds pool size"));
        }
        other => panic!("Expected a rejection, got: {other:?}"),
    }

    drop(client);
    server.stop().await;
}
