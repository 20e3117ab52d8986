pub mod error_handler;

pub use error_handler::{
    ErrorHandlerMiddleware, ErrorHandlerMiddlewareService, NormalizedError, RequestId,
    RequestIdExt,
};
