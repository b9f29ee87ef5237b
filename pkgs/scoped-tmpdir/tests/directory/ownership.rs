use crate::helpers::TestRoot;
use anyhow::Result;
use scoped_tmpdir::ScopedDir;
use std::path::Path;

const PREFIX: &str = "prefix";

#[test]
fn move_construction() -> Result<()> {
    let root = TestRoot::new();
    let mut fst = ScopedDir::new_in(&root.path, PREFIX)?;
    let original = fst.to_path_buf();

    let snd = fst.take();

    assert_eq!(fst.path(), Path::new(""));
    assert!(!fst.is_owned());
    assert!(snd.exists());
    assert_eq!(snd.path(), original);

    drop(fst);
    assert!(original.exists());
    drop(snd);
    assert!(!original.exists());
    root.finish()
}

#[test]
fn move_by_value() -> Result<()> {
    let root = TestRoot::new();
    let fst = ScopedDir::new_in(&root.path, PREFIX)?;
    let original = fst.to_path_buf();

    let snd = fst;
    assert_eq!(snd.path(), original);
    assert!(snd.exists());

    drop(snd);
    assert!(!original.exists());
    root.finish()
}

#[test]
fn move_assignment() -> Result<()> {
    let root = TestRoot::new();
    let mut fst = ScopedDir::new_in(&root.path, PREFIX)?;
    let snd = ScopedDir::new_in(&root.path, PREFIX)?;

    let path1 = fst.to_path_buf();
    let path2 = snd.to_path_buf();

    fst = snd;

    assert!(!path1.exists());
    assert!(path2.exists());

    assert!(fst.exists());
    assert_eq!(fst.path(), path2);

    drop(fst);
    root.finish()
}

#[test]
fn move_assignment_from_taken_handle() -> Result<()> {
    let root = TestRoot::new();
    let mut fst = ScopedDir::new_in(&root.path, PREFIX)?;
    let mut snd = ScopedDir::new_in(&root.path, PREFIX)?;

    let path1 = fst.to_path_buf();
    let path2 = snd.to_path_buf();

    fst = std::mem::take(&mut snd);

    assert!(!path1.exists());
    assert_eq!(fst.path(), path2);
    assert!(fst.exists());
    assert!(!snd.is_owned());
    assert_eq!(snd.path(), Path::new(""));

    drop(snd);
    assert!(path2.exists());
    drop(fst);
    root.finish()
}

#[test]
fn self_move_assignment() -> Result<()> {
    let root = TestRoot::new();
    let mut dir = ScopedDir::new_in(&root.path, PREFIX)?;
    let original = dir.to_path_buf();

    dir = std::mem::take(&mut dir);

    assert!(dir.is_owned());
    assert_eq!(dir.path(), original);
    assert!(original.is_dir());
    assert_eq!(root.entries()?, vec![original.clone()]);

    drop(dir);
    assert!(!original.exists());
    root.finish()
}

#[test]
fn dropping_moved_from_handle_is_a_noop() -> Result<()> {
    let root = TestRoot::new();
    let mut fst = ScopedDir::new_in(&root.path, PREFIX)?;
    let snd = fst.take();

    drop(fst);
    assert!(snd.is_dir());
    assert_eq!(root.entries()?, vec![snd.to_path_buf()]);

    drop(snd);
    root.finish()
}

#[test]
fn take_from_unowned_handle_yields_unowned_handle() {
    let mut empty: ScopedDir = ScopedDir::default();
    let taken = empty.take();
    assert!(!taken.is_owned());
    assert_eq!(taken.path(), Path::new(""));
}

#[test]
fn handles_pass_as_paths() -> Result<()> {
    fn count_entries(path: impl AsRef<Path>) -> std::io::Result<usize> {
        Ok(std::fs::read_dir(path)?.count())
    }

    let root = TestRoot::new();
    let dir = ScopedDir::new_in(&root.path, PREFIX)?;
    std::fs::write(dir.join("a"), "")?;
    std::fs::write(dir.join("b"), "")?;

    assert_eq!(count_entries(&dir)?, 2);
    assert!(dir.is_owned());
    Ok(())
}
