pub mod cancellation;

pub use cancellation::CancellationToken;
