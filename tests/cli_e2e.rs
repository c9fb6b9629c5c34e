//! End-to-end tests for the `bank`, `bitcoin` and `figlet` binaries.
//!
//! Each test runs the built binary with piped stdin and checks stdout and
//! the exit status. The config file is pointed at an empty temp directory so
//! a user config never leaks in.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRICE_PATH: &str = "/v1/bpi/currentprice.json";

/// Run a binary with the given args, stdin and extra environment.
fn run_bin(exe: &str, args: &[&str], stdin: &str, envs: &[(&str, String)]) -> Output {
    let config_dir = tempfile::tempdir().unwrap();
    let mut command = Command::new(exe);
    command
        .args(args)
        .env("PSET_TOOLS_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("BITCOIN_PRICE_URL")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        command.env(key, value);
    }

    let mut child = command.spawn().unwrap();
    if let Some(mut child_stdin) = child.stdin.take() {
        // The child may exit before reading; a broken pipe is expected then.
        let _ = child_stdin.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// === bank ===

const BANK: &str = env!("CARGO_BIN_EXE_bank");

#[test]
fn test_bank_hello() {
    let output = run_bin(BANK, &[], "Hello there\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Greeting: $0\n");
}

#[test]
fn test_bank_h_greeting() {
    let output = run_bin(BANK, &[], "  Hey, Newman\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Greeting: $20\n");
}

#[test]
fn test_bank_other_greeting() {
    let output = run_bin(BANK, &[], "What's up?\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Greeting: $100\n");
}

#[test]
fn test_bank_blank_greeting() {
    let output = run_bin(BANK, &[], "   \n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Greeting: $100\n");
}

#[test]
fn test_bank_closed_stdin_reports_error_and_exits_cleanly() {
    let output = run_bin(BANK, &[], "", &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Greeting: Error: no input (end of file)\n"
    );
}

#[cfg(unix)]
#[test]
fn test_bank_interrupt_says_goodbye() {
    use std::io::Read;

    let config_dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(BANK)
        .env("PSET_TOOLS_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // The prompt is printed after the handler is installed.
    let mut stdout = child.stdout.take().unwrap();
    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !seen.ends_with(b"Greeting: ") {
        let n = stdout.read(&mut byte).unwrap();
        assert!(n > 0, "bank exited before prompting: {:?}", seen);
        seen.push(byte[0]);
    }

    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    stdout.read_to_end(&mut seen).unwrap();
    let exit = child.wait().unwrap();
    // Keep stdin open until the process is gone so EOF cannot win the race.
    drop(child.stdin.take());

    let text = String::from_utf8(seen).unwrap();
    assert!(exit.success(), "status {exit:?}, stdout {text:?}");
    assert_eq!(text, "Greeting: \nGoodbye!\n");
}

// === bitcoin ===

const BITCOIN: &str = env!("CARGO_BIN_EXE_bitcoin");

/// A price endpoint that must never be called.
async fn untouchable_price_server() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    mock_server
}

async fn run_bitcoin(args: &[&str], price_url: String) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_bin(BITCOIN, &args, "", &[("BITCOIN_PRICE_URL", price_url)])
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bitcoin_prints_value() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRICE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bpi": {"USD": {"code": "USD", "rate_float": 100.0}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = run_bitcoin(&["1.5"], format!("{}{}", mock_server.uri(), PRICE_PATH)).await;
    assert!(output.status.success(), "stdout: {}", stdout_of(&output));
    assert_eq!(
        stdout_of(&output),
        "Amount: 1.5 BTC\nCurrent Price: $100.00\nTotal Value: $150.0000\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bitcoin_negative_amount_never_fetches() {
    let mock_server = untouchable_price_server().await;

    let output = run_bitcoin(&["-1"], mock_server.uri()).await;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "Bitcoin amount cannot be negative\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bitcoin_non_numeric_amount_never_fetches() {
    let mock_server = untouchable_price_server().await;

    let output = run_bitcoin(&["cat"], mock_server.uri()).await;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "Command-line argument is not a number\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bitcoin_missing_amount_never_fetches() {
    let mock_server = untouchable_price_server().await;

    let output = run_bitcoin(&[], mock_server.uri()).await;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "Missing command-line argument\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bitcoin_bad_response_exits_one() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRICE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = run_bitcoin(&["2"], format!("{}{}", mock_server.uri(), PRICE_PATH)).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).starts_with("Error parsing Bitcoin price data:"));
}

#[test]
fn test_bitcoin_reads_log_level_from_dotenv() {
    let work_dir = tempfile::tempdir().unwrap();
    std::fs::write(work_dir.path().join(".env"), "RUST_LOG=debug\n").unwrap();

    let output = Command::new(BITCOIN)
        .args(["1", "2"])
        .current_dir(work_dir.path())
        .env("PSET_TOOLS_CONFIG", work_dir.path().join("config.toml"))
        .env_remove("BITCOIN_PRICE_URL")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "Missing command-line argument\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Argument parsing failed"), "stderr: {}", stderr);
}

// === figlet ===

const FIGLET: &str = env!("CARGO_BIN_EXE_figlet");

#[test]
fn test_figlet_default_font_renders() {
    let output = run_bin(FIGLET, &[], "Hi\n", &[]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Input: Output:\n"), "{stdout}");
    assert!(stdout.lines().count() > 3, "{stdout}");
}

#[test]
fn test_figlet_explicit_standard_font() {
    let output = run_bin(FIGLET, &["--font", "standard"], "Hi\n", &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        stdout_of(&run_bin(FIGLET, &[], "Hi\n", &[]))
    );
}

#[test]
fn test_figlet_unknown_font_exits_one_without_prompting() {
    let output = run_bin(FIGLET, &["-f", "definitely-not-a-font"], "Hi\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Font 'definitely-not-a-font' not found\n"));
    assert!(stdout.contains("Available fonts:"));
    assert!(!stdout.contains("Input:"));
}

#[test]
fn test_figlet_missing_font_name_is_usage_error() {
    let output = run_bin(FIGLET, &["-f"], "Hi\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).starts_with("Invalid usage\nUsage:\n"));
}

#[test]
fn test_figlet_help_and_version_are_usage_errors() {
    for flag in ["--help", "-h", "--version", "-V"] {
        let output = run_bin(FIGLET, &[flag], "Hi\n", &[]);
        assert_eq!(output.status.code(), Some(1), "{flag}");
        let stdout = stdout_of(&output);
        assert!(stdout.starts_with("Invalid usage\nUsage:\n"), "{flag}: {stdout}");
        assert!(stdout.contains("Available fonts:"));
    }
}

#[test]
fn test_figlet_text_without_glyphs_renders_blank() {
    let output = run_bin(FIGLET, &[], "日本\n", &[]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let art = stdout.strip_prefix("Input: Output:\n").unwrap();
    assert!(art.trim().is_empty(), "{stdout:?}");
}

#[test]
fn test_figlet_too_many_arguments_is_usage_error() {
    let output = run_bin(FIGLET, &["-f", "standard", "extra"], "Hi\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).starts_with("Invalid usage\n"));
}
