use std::{
    path::{Component, Path, PathBuf},
    process::exit,
};

pub fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("Failed to get current dir: {}", e);
        exit(1);
    })
}

/// Infers a contest id from a directory path: the rightmost component made
/// entirely of decimal digits. Lets `comp cf` run argument-less from inside
/// a directory named after the contest number.
pub fn infer_contest_id(path: &Path) -> Option<u32> {
    path.components().rev().find_map(|c| match c {
        Component::Normal(name) => {
            let name = name.to_str()?;
            if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
                name.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rightmost_all_digit_component_wins() {
        assert_eq!(infer_contest_id(Path::new("/home/me/cf/1000")), Some(1000));
        assert_eq!(
            infer_contest_id(Path::new("/home/123/cf/456/notes")),
            Some(456)
        );
    }

    #[test]
    fn mixed_or_missing_digits_do_not_match() {
        assert_eq!(infer_contest_id(Path::new("/home/me/cf1000/solutions")), None);
        assert_eq!(infer_contest_id(Path::new("/home/me")), None);
        assert_eq!(infer_contest_id(Path::new("/")), None);
    }
}
