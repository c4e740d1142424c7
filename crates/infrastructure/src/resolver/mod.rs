pub mod process_bridge;
pub mod stdout_sink;

pub use process_bridge::ProcessResolverBridge;
pub use stdout_sink::StdoutQuerySink;
