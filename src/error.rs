//! Error types for resource document handling.
//!
//! Returned from all fallible operations on a [`ResourceDocument`](crate::resources::ResourceDocument).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),
}
