use tonic_build::manual::Builder;
use tonic_build::manual::Method;
use tonic_build::manual::Service;

fn main() {
    // Message types are hand-written prost structs in `crate::proto`; only the
    // service stubs are generated, so no protoc is required.
    let auth_service = Service::builder()
        .name("Auth")
        .package("sso")
        .method(
            Method::builder()
                .name("register")
                .route_name("Register")
                .input_type("crate::proto::RegisterUserRequest")
                .output_type("crate::proto::RegisterUserResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            Method::builder()
                .name("login")
                .route_name("Login")
                .input_type("crate::proto::LoginUserRequest")
                .output_type("crate::proto::LoginUserResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    Builder::new()
        .build_client(false)
        .compile(&[auth_service]);
}
