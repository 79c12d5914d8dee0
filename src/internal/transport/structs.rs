pub mod reqwest_transport;
pub mod transport_error;
pub mod transport_request;
pub mod transport_response;

pub use reqwest_transport::ReqwestTransport;
pub use transport_error::TransportError;
pub use transport_request::TransportRequest;
pub use transport_response::{ResponseBody, TransportResponse};
