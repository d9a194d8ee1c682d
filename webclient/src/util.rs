use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::*;

pub fn selector_must_parsed(sel: &'static str) -> Selector {
    Selector::parse(sel).expect("Failed to parse  `&'static str`  selector")
}

pub async fn fetch_html(c: &Client, url: Url) -> Result<Html> {
    let url_str = url.to_string();
    let resp = c.get(url).send().await?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(Error::UnexpectedResponseCode {
            got: status,
            expected: StatusCode::OK,
            requested_url: url_str,
        });
    }

    let html = resp.text().await?;
    Ok(Html::parse_document(&html))
}

pub trait ElementRefExt<'a> {
    fn select_first(&self, sel: &Selector) -> Result<ElementRef<'a>>;

    /// Concatenation of every descendant text node, like the DOM's innerText.
    fn full_text(&self) -> String;
}

impl<'a> ElementRefExt<'a> for ElementRef<'a> {
    fn select_first(&self, sel: &Selector) -> Result<ElementRef<'a>> {
        match self.select(sel).next() {
            Some(el) => Ok(el),
            None => Err(Error::NoSuchElementMatchesToSelector(sel.to_owned())),
        }
    }

    fn full_text(&self) -> String {
        self.text().collect()
    }
}
