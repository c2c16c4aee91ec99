pub mod citation;
pub mod config;
pub mod date;
pub mod dialog;
pub mod duration;
pub mod error;
pub mod names;
pub mod params;

pub use citation::{citation_text, format_chicago_citation};
pub use params::{CitationParams, Medium};

pub mod prelude {
    pub use crate::citation::*;
    pub use crate::error::*;
    pub use crate::params::*;
}
