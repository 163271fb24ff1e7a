#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use tempfile::TempDir;

const MONTHS: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Stand-in for trec_eval: checks its arguments and prints the run file,
/// so each test controls the report through the run file contents.
const STUB_TREC_EVAL: &str = r#"#!/bin/sh
[ "$1" = "-m" ] && [ "$2" = "all_trec" ] || { echo "usage: $0 -m all_trec qrels run" >&2; exit 2; }
[ -f "$3" ] || { echo "cannot open $3" >&2; exit 1; }
[ -f "$4" ] || { echo "cannot open $4" >&2; exit 1; }
cat "$4"
"#;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn write_script(path: &Path, content: &str) {
    write_file(path, content);
    let mut perms = fs::metadata(path).expect("stat script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("chmod script");
}

fn report(month: &str, map: &str) -> String {
    format!(
        "runid                 \tall\t{}\nnum_ret               \tall\t100\nmap                   \tall\t{map}\n",
        month.to_lowercase()
    )
}

/// Working directory with the stub binary and a qrels/run pair per month
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_script(&dir.path().join("trec_eval"), STUB_TREC_EVAL);
    for month in MONTHS {
        write_file(
            &dir.path().join(format!("qrels/qrels{month}.test")),
            "1 0 doc1 1\n",
        );
        write_file(
            &dir.path().join(format!("runs/trecResults{month}.test")),
            &report(month, "0.25"),
        );
    }
    dir
}

fn run_treccsv(cwd: &Path, args: &[&str]) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_treccsv").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        path.push("treccsv");
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run treccsv");
    (output.status.success(), output.stdout, output.stderr)
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .expect("read result.csv")
        .lines()
        .map(|l| l.split(';').map(str::to_string).collect())
        .collect()
}

#[test]
fn no_arguments_writes_result_csv() {
    let dir = workspace();
    let (ok, _, stderr) = run_treccsv(dir.path(), &[]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let rows = read_rows(&dir.path().join("result.csv"));
    // runid, num_ret, map, and the empty line after trec_eval's last newline
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.len() == 14));

    assert_eq!(rows[0][0], "runid");
    assert_eq!(rows[0][1], "january");
    assert_eq!(rows[0][12], "december");
    assert_eq!(rows[0][13], "AVG");

    assert_eq!(rows[1][0], "num_ret");
    assert!(rows[1][1..13].iter().all(|v| v == "100"));
    assert_eq!(rows[1][13], "100.0");

    assert_eq!(rows[2][0], "map");
    assert_eq!(rows[2][13], "0.25");

    assert_eq!(rows[3][0], "");
    assert!(rows[3][1..13].iter().all(|v| v == "-"));
    assert_eq!(rows[3][13], "0.0");
}

#[test]
fn existing_result_is_overwritten() {
    let dir = workspace();
    write_file(&dir.path().join("result.csv"), "stale\n".repeat(100).as_str());

    let (ok, _, stderr) = run_treccsv(dir.path(), &[]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert_eq!(read_rows(&dir.path().join("result.csv")).len(), 4);
}

#[test]
fn non_numeric_value_degrades_average() {
    let dir = workspace();
    write_file(
        &dir.path().join("runs/trecResultsMARCH.test"),
        &report("MARCH", "n/a"),
    );

    let (ok, _, stderr) = run_treccsv(dir.path(), &[]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let rows = read_rows(&dir.path().join("result.csv"));
    assert_eq!(rows[2][3], "n/a");
    assert_eq!(rows[2][13], "0.0");
    assert!(String::from_utf8_lossy(&stderr).contains("not a number"));

    let out = dir.path().join("skip.csv");
    let (ok, _, stderr) = run_treccsv(
        dir.path(),
        &["--avg-policy", "skip-invalid", "-o", out.to_str().unwrap()],
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert_eq!(read_rows(&out)[2][13], "0.25");
}

#[test]
fn preview_prints_table_to_stdout() {
    let dir = workspace();
    let (ok, stdout, stderr) = run_treccsv(dir.path(), &["--preview", "--sequential"]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let stdout = String::from_utf8_lossy(&stdout);
    assert!(stdout.contains("AVG"));
    assert!(stdout.contains("num_ret"));
    assert!(stdout.contains("0.25"));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = workspace();
    write_file(
        &dir.path().join("treccsv.toml"),
        "output = \"from-config.csv\"\nsequential = true\n",
    );

    let (ok, _, stderr) = run_treccsv(dir.path(), &[]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert!(dir.path().join("from-config.csv").exists());
    assert!(!dir.path().join("result.csv").exists());
}

#[test]
fn missing_run_file_fails_without_output() {
    let dir = workspace();
    fs::remove_file(dir.path().join("runs/trecResultsJULY.test")).expect("remove run file");

    let (ok, _, stderr) = run_treccsv(dir.path(), &[]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("trecResultsJULY.test"));
    assert!(!dir.path().join("result.csv").exists());
}

#[test]
fn missing_binary_fails() {
    let dir = workspace();
    fs::remove_file(dir.path().join("trec_eval")).expect("remove stub");

    let (ok, _, stderr) = run_treccsv(dir.path(), &[]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("not found"));
    assert!(!dir.path().join("result.csv").exists());
}

#[test]
fn hanging_binary_times_out() {
    let dir = workspace();
    write_script(&dir.path().join("slow_eval"), "#!/bin/sh\nexec sleep 30\n");

    let started = Instant::now();
    let (ok, _, stderr) = run_treccsv(
        dir.path(),
        &["--eval-bin", "./slow_eval", "--timeout", "1"],
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("did not finish"));
    assert!(started.elapsed() < Duration::from_secs(20));
}

#[test]
fn background_child_holding_output_times_out() {
    let dir = workspace();
    write_script(
        &dir.path().join("forking_eval"),
        "#!/bin/sh\nsleep 30 &\nprintf 'runid\\tall\\tx\\n'\n",
    );

    let started = Instant::now();
    let (ok, _, stderr) = run_treccsv(
        dir.path(),
        &["--eval-bin", "./forking_eval", "--timeout", "1"],
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("did not finish"));
    assert!(started.elapsed() < Duration::from_secs(20));
    assert!(!dir.path().join("result.csv").exists());
}
