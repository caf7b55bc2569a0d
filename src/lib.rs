//! Scrapes the first five listing pages of the pesen-net blog and boils the
//! paragraph text down to one lowercase Cyrillic corpus.

mod macros;
pub mod normalize;
pub mod parse;
pub mod process;
pub mod request;

mod error;
pub use error::{Error, Result};

/// Blog root, pages are requested as `{BASE_URL}/?skip={offset}`.
pub const BASE_URL: &str = "https://pesen-net.livejournal.com";
/// Listing offsets, ten entries per page.
pub const PAGE_OFFSETS: [usize; 5] = [0, 10, 20, 30, 40];
const FILE_PATH: &str = "pesen_corpus.txt";
