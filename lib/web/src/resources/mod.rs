mod resolve;
mod response;

pub use resolve::handle_resource_get;
