pub mod rpc_record;

pub use rpc_record::RpcRecord;
