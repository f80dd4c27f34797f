//! Detached deletion of transient artifacts.
//!
//! A scheduled cleanup must outlive the process that scheduled it: the
//! browser gets a head start to load the files, and deletion still has to
//! happen if the main program exits right after the handoff (including
//! non-graceful termination). Daemon threads die with the process, so the
//! task is handed to a separate OS process instead: the scheduler re-invokes
//! this same executable with a hidden sweep flag, detached from the current
//! process group, stdio silenced.
//!
//! There is no cancellation: once spawned, a sweeper runs to completion.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Schedules deletion of `paths` after `delay` seconds.
///
/// The deletion runs in a detached child process and survives this
/// process's exit. A failure to spawn the sweeper is reported as a warning
/// but never aborts the run; the artifact was already displayed, and stale
/// temp files are a nuisance, not a failure.
pub fn schedule(paths: &[PathBuf], delay: u64) {
    match std::env::current_exe() {
        Ok(exe) => schedule_with(&exe, paths, delay),
        Err(e) => eprintln!("Warning: cleanup not scheduled: {e}"),
    }
}

/// Schedules deletion using an explicit sweeper executable.
///
/// [`schedule`] resolves the current executable; tests pass the built
/// binary directly.
pub fn schedule_with(exe: &Path, paths: &[PathBuf], delay: u64) {
    let mut command = Command::new(exe);
    command
        .arg("--sweep-delay")
        .arg(delay.to_string())
        .args(paths)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    detach(&mut command);

    if let Err(e) = command.spawn() {
        eprintln!("Warning: cleanup not scheduled: {e}");
    }
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    // New process group: the sweeper is not reaped with the parent's group
    // and keeps running after the parent exits.
    command.process_group(0);
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

/// Sweeper entry point: wait out the delay, then delete.
pub fn sweep(paths: &[PathBuf], delay: u64) {
    std::thread::sleep(std::time::Duration::from_secs(delay));
    sweep_now(paths);
}

/// Deletes the given paths and any directory they leave empty.
///
/// Idempotent and tolerant of files that are already gone: the user or the
/// OS may have removed them first, and a second sweep of the same set must
/// succeed silently. Containing directories are removed only when empty
/// (the non-recursive removal fails otherwise and the failure is ignored),
/// so a sweep can never eat unrelated files.
pub fn sweep_now(paths: &[PathBuf]) {
    for path in paths {
        let _ = std::fs::remove_file(path);
    }

    let mut parents: Vec<&Path> = paths.iter().filter_map(|path| path.parent()).collect();
    parents.sort();
    parents.dedup();
    for dir in parents {
        let _ = std::fs::remove_dir(dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_now_removes_files_and_emptied_directory() {
        // Arrange: a throwaway directory the sweeper is expected to clear
        let dir = tempfile::Builder::new()
            .prefix("mdview-test-")
            .tempdir()
            .expect("Should create temp dir")
            .keep();
        let one = dir.join("one.html");
        let two = dir.join("two.html");
        std::fs::write(&one, "<html></html>").expect("Should write");
        std::fs::write(&two, "<html></html>").expect("Should write");

        // Act
        sweep_now(&[one.clone(), two.clone()]);

        // Assert
        assert!(!one.exists(), "Files should be removed");
        assert!(!two.exists(), "Files should be removed");
        assert!(!dir.exists(), "Emptied directory should be removed");
    }

    #[test]
    fn test_sweep_now_is_idempotent() {
        // Arrange
        let dir = tempfile::Builder::new()
            .prefix("mdview-test-")
            .tempdir()
            .expect("Should create temp dir")
            .keep();
        let file = dir.join("page.html");
        std::fs::write(&file, "x").expect("Should write");
        let paths = vec![file.clone()];

        // Act: second sweep sees nothing left
        sweep_now(&paths);
        sweep_now(&paths);

        // Assert
        assert!(!file.exists());
    }

    #[test]
    fn test_sweep_now_tolerates_missing_paths() {
        sweep_now(&[PathBuf::from("/no/such/dir/mdview-gone.html")]);
    }

    #[test]
    fn test_sweep_now_leaves_non_empty_directories() {
        // Arrange: directory holds a file the sweeper was not told about
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let swept = dir.path().join("swept.html");
        let kept = dir.path().join("kept.txt");
        std::fs::write(&swept, "x").expect("Should write");
        std::fs::write(&kept, "y").expect("Should write");

        // Act
        sweep_now(&[swept.clone()]);

        // Assert
        assert!(!swept.exists());
        assert!(kept.exists(), "Unrelated files are untouched");
        assert!(dir.path().exists(), "Non-empty directory is untouched");
    }
}
