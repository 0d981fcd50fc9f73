pub mod faults;
pub mod security_headers;
