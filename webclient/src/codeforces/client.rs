use super::{helper, urls};
use crate::{error::*, model::Problem, util};

pub struct CodeforcesClient {
    http: reqwest::Client,
}

impl CodeforcesClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Fetches the contest's public problems listing and scrapes every
    /// problem with its sample testcases.
    ///
    /// A single unauthenticated GET; no retry, no caching. A page with zero
    /// problem statements is an error naming the contest (bad contest id,
    /// blocked request, or layout change deliver a statement-less page with
    /// status 200).
    pub async fn fetch_problems(&self, contest: u32) -> Result<Vec<Problem>> {
        let url = urls::contest_problems_url(contest);
        log::debug!("GET {}", url);
        let doc = util::fetch_html(&self.http, url).await?;

        let problems = helper::scrape_problems(&doc)?;
        if problems.is_empty() {
            return Err(Error::ContestHasNoProblems(contest));
        }
        Ok(problems)
    }
}

impl Default for CodeforcesClient {
    fn default() -> Self {
        Self::new()
    }
}
