use scraper::{ElementRef, Html};

use crate::{
    error::*,
    model::{Problem, Testcase},
    util::{self, ElementRefExt as _},
};

/// The two sample-region shapes the problems page renders.
///
/// Newer statements break samples into individually marked lines (one div per
/// line, for the per-line copy affordance); older ones carry a single `<pre>`
/// block. Both shapes occur on one page, and the input and output regions of
/// the same sample need not agree.
enum SampleRegion<'a> {
    LineMarked(Vec<ElementRef<'a>>),
    Preformatted(ElementRef<'a>),
}

fn classify_region(region: ElementRef) -> Result<SampleRegion> {
    let sel_line = util::selector_must_parsed("div.test-example-line");
    let lines: Vec<_> = region.select(&sel_line).collect();
    if lines.is_empty() {
        let sel_pre = util::selector_must_parsed("pre");
        Ok(SampleRegion::Preformatted(region.select_first(&sel_pre)?))
    } else {
        Ok(SampleRegion::LineMarked(lines))
    }
}

fn region_text(region: SampleRegion) -> String {
    match region {
        SampleRegion::LineMarked(lines) => lines
            .iter()
            .map(|el| el.full_text())
            .collect::<Vec<_>>()
            .join("\n"),
        SampleRegion::Preformatted(pre) => pre.full_text(),
    }
}

fn extract_sample(ord: u32, node: ElementRef) -> Result<Testcase> {
    let sel_input = util::selector_must_parsed("div.input");
    let sel_output = util::selector_must_parsed("div.output");
    let input = region_text(classify_region(node.select_first(&sel_input)?)?);
    let output = region_text(classify_region(node.select_first(&sel_output)?)?);
    Ok(Testcase { ord, input, output })
}

/// Titles read `"<Letter>. <Full Name>"`; only the letter/code prefix is kept.
/// A title with no period stays whole.
fn problem_name(title: &str) -> &str {
    let title = title.trim();
    title.split('.').next().unwrap_or(title)
}

fn extract_problem(node: ElementRef) -> Result<Problem> {
    let sel_title = util::selector_must_parsed("div.title");
    let sel_sample = util::selector_must_parsed("div.sample-test");

    let title = node.select_first(&sel_title)?.full_text();
    let name = problem_name(&title).to_owned();
    let testcases = node
        .select(&sel_sample)
        .enumerate()
        .map(|(i, sample)| extract_sample(i as u32 + 1, sample))
        .collect::<Result<Vec<_>>>()?;
    Ok(Problem { name, testcases })
}

/// Every problem statement of the page, in document order.
pub fn scrape_problems(doc: &Html) -> Result<Vec<Problem>> {
    let sel_statement = util::selector_must_parsed("div.problem-statement");
    doc.select(&sel_statement).map(extract_problem).collect()
}
