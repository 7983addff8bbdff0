use tonic_build::manual::{Builder, Method, Service};

// The protobuf messages are hand-written prost structs in `crate::models`, so the
// service stubs are generated without invoking protoc.
fn main() {
    let timestream = Service::builder()
        .name("Timestream")
        .package("timestream")
        .method(
            Method::builder()
                .name("get_record_list_response")
                .route_name("getRecordListResponse")
                .input_type("crate::models::RecordListRequest")
                .output_type("crate::models::RecordListResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    Builder::new().compile(&[timestream]);
    println!("cargo:rerun-if-changed=build.rs");
}
