mod exchange;
mod http;
mod remote;
mod request;
mod resolve;
mod response;

pub use exchange::*;
pub use http::*;
pub use remote::*;
pub use request::*;
pub use resolve::*;
pub use response::*;
