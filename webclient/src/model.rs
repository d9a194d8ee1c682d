/// One sample input/expected-output pair shown in a problem statement.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Testcase {
    /// 1-based, in order of appearance within the problem statement.
    pub ord: u32,
    pub input: String,
    pub output: String,
}

/// One task within a contest.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Problem {
    /// Short code derived from the displayed title (e.g. "A", "B2").
    pub name: String,
    /// Order matches sample-block document order.
    pub testcases: Vec<Testcase>,
}
