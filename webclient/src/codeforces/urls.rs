use url::Url;

pub const DOMAIN: &str = "codeforces.com";

/// Public listing of every problem statement of a contest on a single page.
pub fn contest_problems_url(contest: u32) -> Url {
    Url::parse(&format!("https://{}/contest/{}/problems", DOMAIN, contest))
        .expect("contest problems URL must be valid")
}
