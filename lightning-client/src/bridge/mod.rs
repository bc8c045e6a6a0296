//! Backend invoker: named operations executed by the native host.

pub mod client;
pub mod invoker;

pub use client::GrpcInvoker;
pub use invoker::{BackendInvoker, Invoker, decode_result};
