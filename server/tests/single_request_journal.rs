mod common;

use crate::common::TestServer;
use std::collections::BTreeSet;
use test_case::test_case;
use timestream::clients::single_request::{run_single_request, SingleRequest};
use timestream::journal::{read_journal, ClientRecord, RpcRecord};
use timestream::mode::BenchmarkMode;

const ITERATIONS: usize = 5;

#[test_case(BenchmarkMode::Grpc; "grpc")]
#[test_case(BenchmarkMode::RestProto; "rest proto")]
#[test_case(BenchmarkMode::RestJson; "rest json")]
#[tokio::test]
async fn every_request_should_be_journaled_on_both_sides(mode: BenchmarkMode) {
    let size = 10;
    let mut server = TestServer::start(mode, size).await;
    let client_log = server
        .scratch_dir()
        .join(format!("client-{size}-items.jsonl"));
    let request = SingleRequest {
        mode,
        host: server.host(),
        port: server.port(),
        count: size,
    };

    for _ in 0..ITERATIONS {
        let record = run_single_request(&request, &client_log).await.unwrap();
        assert!(record.res_size_bytes > 0);
        assert!(record.req_size_bytes > 0);
    }

    let journaled = server.stop().await;
    assert_eq!(journaled, ITERATIONS as u64);

    let clients: Vec<ClientRecord> = read_journal(&client_log).unwrap();
    let rpcs: Vec<RpcRecord> = read_journal(server.journal()).unwrap();
    assert_eq!(clients.len(), ITERATIONS);
    assert_eq!(rpcs.len(), ITERATIONS);

    let client_ids: BTreeSet<_> = clients.iter().map(|c| c.req_id.clone()).collect();
    let server_ids: BTreeSet<_> = rpcs.iter().filter_map(|r| r.req_id.clone()).collect();
    assert_eq!(client_ids, server_ids);

    for client in &clients {
        let rpc = rpcs
            .iter()
            .find(|r| r.req_id.as_ref() == Some(&client.req_id))
            .unwrap();
        assert!(client.t0 <= client.t_req);
        assert!(client.t_req <= client.t_res);
        assert!(rpc.t_in <= rpc.t_out);
        // Both sides share the host-wide monotonic clock.
        assert!(client.t_req <= rpc.t_in);
        assert!(rpc.t_out <= client.t_res);
    }
}

#[test_case(BenchmarkMode::Grpc; "grpc")]
#[test_case(BenchmarkMode::RestProto; "rest proto")]
#[test_case(BenchmarkMode::RestJson; "rest json")]
#[tokio::test]
async fn response_should_carry_the_requested_number_of_records(mode: BenchmarkMode) {
    let mut server = TestServer::start(mode, 100).await;
    let mut client = timestream::clients::client_for(mode, &server.host(), server.port()).unwrap();

    let outcome = client
        .fetch_records(42, &timestream::utils::request_id::RequestId::random())
        .await
        .unwrap();
    assert_eq!(outcome.records.len(), 42);
    assert!(outcome
        .records
        .iter()
        .all(|record| *record == timestream::models::Record::prototype()));

    let empty = client
        .fetch_records(0, &timestream::utils::request_id::RequestId::random())
        .await
        .unwrap();
    assert!(empty.records.is_empty());

    drop(client);
    assert_eq!(server.stop().await, 2);
}
