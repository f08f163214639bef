pub mod auth_service;
pub mod connectivity;
pub mod rpc_client;

pub use auth_service::{
    current_session, current_user, is_authenticated, is_authenticated_from, logout, session_from,
    LogoutResponse,
};
pub use connectivity::{test_connection, ConnectionReport};
pub use rpc_client::RpcClient;
