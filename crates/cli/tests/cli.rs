use std::{
    fs::{self, File},
    os::unix::fs::PermissionsExt,
    path::Path,
    process::{Command, Output},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

fn lz(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lz"))
        .args(args)
        .current_dir(cwd)
        .env_remove("LZ_LOG_LEVEL")
        .env("COLUMNS", "80")
        .output()
        .expect("spawn lz")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("utf8 stdout")
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).expect("utf8 stderr")
}

fn touch(path: &Path, len: usize, age_secs: u64) {
    fs::write(path, vec![b'.'; len]).expect("write");
    File::options()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(SystemTime::now() - Duration::from_secs(age_secs)))
        .expect("set mtime");
}

fn fixture() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    touch(&root.join("b.txt"), 100, 86_400);
    touch(&root.join("a.txt"), 50, 0);
    fs::create_dir(root.join("bin")).expect("mkdir");
    touch(&root.join("run"), 10, 600);
    fs::set_permissions(root.join("run"), fs::Permissions::from_mode(0o755)).expect("chmod");

    tmp
}

#[test]
fn grid_lists_current_directory_by_default() {
    let tmp = fixture();
    let out = lz(&[], tmp.path());

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "a.txt  b.txt  bin/   run*\n");
}

#[test]
fn size_sort_prints_size_then_name() {
    let tmp = fixture();
    let out = lz(&["-s", "a.txt", "b.txt"], tmp.path());

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "100 B b.txt\n50 B  a.txt\n");
}

#[test]
fn time_sort_is_newest_first_and_reverse_inverts_it() {
    let tmp = fixture();

    let newest_first = lz(&["-t", "a.txt", "b.txt", "run"], tmp.path());
    let names: Vec<String> = stdout(&newest_first)
        .lines()
        .map(|l| l.rsplit(' ').next().unwrap_or_default().to_owned())
        .collect();
    assert_eq!(names, vec!["a.txt", "run*", "b.txt"]);

    let reversed = lz(&["-t", "-r", "a.txt", "b.txt", "run"], tmp.path());
    let mut reversed_names: Vec<String> = stdout(&reversed)
        .lines()
        .map(|l| l.rsplit(' ').next().unwrap_or_default().to_owned())
        .collect();
    reversed_names.reverse();
    assert_eq!(reversed_names, names);
}

#[test]
fn explicit_files_are_listed_in_argument_order() {
    let tmp = fixture();
    let out = lz(&["b.txt", "a.txt"], tmp.path());

    assert!(out.status.success());
    assert_eq!(stdout(&out), "b.txt  a.txt\n");
}

#[test]
fn long_format_has_five_fields_per_entry() {
    let tmp = fixture();
    let out = lz(&["-l", "run", "a.txt"], tmp.path());

    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let lines: Vec<String> = stdout(&out).lines().map(str::to_owned).collect();
    assert_eq!(lines.len(), 2);

    let run = &lines[0];
    assert!(run.starts_with("-rwxr-xr-x "), "{run:?}");
    assert!(run.contains(" 10 B "), "{run:?}");
    assert!(run.contains(" 10 minutes ago "), "{run:?}");
    assert!(run.ends_with(" run*"), "{run:?}");

    assert!(lines[1].ends_with(" a.txt"));
}

#[test]
fn conflicting_sort_flags_fail_before_touching_the_filesystem() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let out = lz(&["-t", "-s", "does-not-exist"], tmp.path());

    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());

    let err = stderr(&out);
    assert!(err.contains("-t and -s cannot be set at the same time"), "{err:?}");
    assert!(!err.contains("does-not-exist"), "{err:?}");
}

#[test]
fn missing_path_is_fatal_with_no_partial_output() {
    let tmp = fixture();
    let out = lz(&["a.txt", "nope.txt"], tmp.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("cannot access 'nope.txt'"));
}

#[test]
fn color_always_marks_directories_and_executables() {
    let tmp = fixture();
    let out = lz(&["--color", "always", "bin", "run"], tmp.path());

    let text = stdout(&out);
    assert!(text.contains("\x1b[1;34mbin\x1b[0m/"), "{text:?}");
    assert!(text.contains("\x1b[1;32mrun\x1b[0m*"), "{text:?}");
}

#[test]
fn far_future_mtime_lists_without_crashing() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let far = tmp.path().join("far");
    fs::write(&far, b"x").expect("write");
    // Filesystems with a narrower range clamp this instead of failing.
    File::options()
        .write(true)
        .open(&far)
        .and_then(|f| f.set_modified(UNIX_EPOCH + Duration::from_secs(100_000_000_000_000)))
        .expect("set mtime");

    for args in [&["-l"][..], &["-t"][..], &["-lrt"][..]] {
        let out = lz(args, tmp.path());
        assert!(out.status.success(), "lz {:?}: {}", args, stderr(&out));
        assert!(stdout(&out).trim_end().ends_with(" far"), "lz {:?}", args);
    }
}
