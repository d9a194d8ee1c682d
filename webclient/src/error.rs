use reqwest::StatusCode;
use scraper::Selector;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No problem statements found in contest {0} (wrong contest id, not rendered, or page layout changed)")]
    ContestHasNoProblems(u32),

    #[error("Unexpected response code '{got}' (expected '{expected}') while requesting to {requested_url}")]
    UnexpectedResponseCode {
        got: StatusCode,
        expected: StatusCode,
        requested_url: String,
    },

    #[error("No such html element (selector: {0:?})")]
    NoSuchElementMatchesToSelector(Selector),

    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
}
