//! HTTP transport layer for the site-generation client.

mod http;
mod error;
mod reqwest;
pub mod endpoints;
mod request;
mod response;

pub use http::{HttpTransport, HttpMethod, HttpRequest, HttpResponse, ChunkedStream, StreamingResponse};
pub use error::TransportError;
pub use self::reqwest::ReqwestTransport;
pub use request::RequestBuilder;
pub use response::ResponseParser;
