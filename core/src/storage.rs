//! On-disk testcase layout shared by acquisition and verification.
//!
//! For problem name `P` and 1-based sample index `i`, the pair lives at
//! `P<i>.in` / `P<i>.out` in the contest directory. The filesystem is the
//! only contract between the two phases.

use std::path::{Path, PathBuf};

use comp_webclient::{Problem, Testcase};

use crate::fsutil;

pub fn testcase_filenames(problem_name: &str, ord: u32) -> (String, String) {
    (
        format!("{}{}.in", problem_name, ord),
        format!("{}{}.out", problem_name, ord),
    )
}

pub fn save_testcase(dir: impl AsRef<Path>, problem_name: &str, t: &Testcase) -> fsutil::Result<()> {
    let dir = dir.as_ref();
    let (infile, outfile) = testcase_filenames(problem_name, t.ord);
    fsutil::write(dir.join(infile), &t.input)?;
    fsutil::write(dir.join(outfile), &t.output)?;
    Ok(())
}

pub fn save_problem_testcases(dir: impl AsRef<Path>, p: &Problem) -> fsutil::Result<()> {
    for t in &p.testcases {
        save_testcase(&dir, &p.name, t)?;
    }
    Ok(())
}

/// One discovered testcase pair belonging to an artifact. The expected-output
/// file is optional; its absence only skips the "Expected" report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyTestcase {
    pub name: String,
    pub input_path: PathBuf,
    pub expected_path: Option<PathBuf>,
}

/// Lists the testcases of the artifact with base name `basename`: every
/// regular file matching `{basename}*.in`, sorted lexicographically
/// ascending (which is the execution order).
pub fn discover_testcases(
    dir: impl AsRef<Path>,
    basename: &str,
) -> fsutil::Result<Vec<VerifyTestcase>> {
    let pattern = glob::Pattern::new(&format!("{}*.in", glob::Pattern::escape(basename)))
        .expect("escaped basename glob must parse");

    let mut res = Vec::new();
    for entry in fsutil::read_dir(&dir)?.filter_map(Result::ok) {
        let Ok(ft) = entry.file_type() else {
            continue
        };
        if ft.is_dir() {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        if !pattern.matches(&filename) {
            continue;
        }
        let input_path = entry.path();
        let expected_path = Some(input_path.with_extension("out")).filter(|p| p.is_file());
        res.push(VerifyTestcase {
            name: filename,
            input_path,
            expected_path,
        });
    }
    res.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(res)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    fn tempdir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("comp-storage-{}-{}", tag, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn testcase_filenames_concatenate_plain_decimal_index() {
        assert_eq!(
            testcase_filenames("B", 1),
            ("B1.in".to_owned(), "B1.out".to_owned())
        );
        assert_eq!(
            testcase_filenames("B2", 10),
            ("B210.in".to_owned(), "B210.out".to_owned())
        );
    }

    #[test]
    fn saved_problem_persists_raw_file_pairs() {
        let dir = tempdir("save");
        let problem = Problem {
            name: "B".to_owned(),
            testcases: vec![
                Testcase {
                    ord: 1,
                    input: "1 2".to_owned(),
                    output: "3".to_owned(),
                },
                Testcase {
                    ord: 2,
                    input: "4 5".to_owned(),
                    output: "9".to_owned(),
                },
            ],
        };
        save_problem_testcases(&dir, &problem).unwrap();

        assert_eq!(fs::read_to_string(dir.join("B1.in")).unwrap(), "1 2");
        assert_eq!(fs::read_to_string(dir.join("B1.out")).unwrap(), "3");
        assert_eq!(fs::read_to_string(dir.join("B2.in")).unwrap(), "4 5");
        assert_eq!(fs::read_to_string(dir.join("B2.out")).unwrap(), "9");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn discovery_is_sorted_and_scoped_to_the_basename() {
        let dir = tempdir("discover");
        for (name, contents) in [
            ("B2.in", "4 5"),
            ("B1.in", "1 2"),
            ("B1.out", "3"),
            ("A1.in", "other problem"),
            ("B.cpp", "source, not a testcase"),
        ] {
            fs::write(dir.join(name), contents).unwrap();
        }

        let found = discover_testcases(&dir, "B").unwrap();
        let names: Vec<_> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B1.in", "B2.in"]);

        assert_eq!(found[0].expected_path, Some(dir.join("B1.out")));
        // Missing .out is not an error; the pair is still discovered.
        assert_eq!(found[1].expected_path, None);

        fs::remove_dir_all(&dir).unwrap();
    }
}
