pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use outbound::repositories;

/// Wire types of the `sso.Auth` gRPC service.
pub mod proto {
    #[derive(Clone, PartialEq, prost::Message)]
    #[prost(skip_debug)]
    pub struct RegisterUserRequest {
        #[prost(string, tag = "1")]
        pub login: String,
        #[prost(string, tag = "2")]
        pub password: String,
        #[prost(string, tag = "3")]
        pub email: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct RegisterUserResponse {
        #[prost(int64, tag = "1")]
        pub user_id: i64,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    #[prost(skip_debug)]
    pub struct LoginUserRequest {
        #[prost(string, tag = "1")]
        pub login: String,
        #[prost(string, tag = "2")]
        pub password: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    #[prost(skip_debug)]
    pub struct LoginUserResponse {
        #[prost(string, tag = "1")]
        pub token: String,
    }

    impl std::fmt::Debug for RegisterUserRequest {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("RegisterUserRequest")
                .field("login", &self.login)
                .field("password", &"<redacted>")
                .field("email", &self.email)
                .finish()
        }
    }

    impl std::fmt::Debug for LoginUserRequest {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("LoginUserRequest")
                .field("login", &self.login)
                .field("password", &"<redacted>")
                .finish()
        }
    }

    impl std::fmt::Debug for LoginUserResponse {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("LoginUserResponse")
                .field("token", &"<redacted>")
                .finish()
        }
    }

    include!(concat!(env!("OUT_DIR"), "/sso.Auth.rs"));
}
