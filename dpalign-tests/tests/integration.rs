use anyhow::{Result, anyhow};
use dpalign::show;
use serde_json::json;
use util::{repo_path, run_align, run_show};

mod util;

const AC_CA: &str =
    r#"{"seq1":"AC","seq2":"CA","match":1,"mismatch":-1,"gap":-1,"algorithm":"needleman"}"#;

#[test]
fn test_align_inline_request() -> Result<()> {
    let (success, output) = run_align(&format!("align {AC_CA}"))?;
    assert!(success);
    assert_eq!(
        output["final_alignment"],
        json!({"seq1": "AC-", "seq2": "-CA"})
    );
    assert_eq!(output["matrix_steps"].as_array().map(Vec::len), Some(4));
    assert_eq!(
        output["matrix_steps"][3],
        json!({
            "matrix": [[0, -1, -2], [-1, -1, 0], [-2, 0, -1]],
            "highlight": {"row": 2, "col": 2},
            "from": "up",
        })
    );
    Ok(())
}

#[test]
fn test_align_request_file() -> Result<()> {
    let path = repo_path("test_files/gattaca.json")?;
    let (success, output) = run_align(&format!("align --pretty -f {}", path.display()))?;
    assert!(success);
    assert_eq!(
        output["final_alignment"],
        json!({"seq1": "G-ATTACA", "seq2": "GCA-TGCA"})
    );
    assert_eq!(output["matrix_steps"].as_array().map(Vec::len), Some(49));
    Ok(())
}

#[test]
fn test_align_unknown_algorithm() -> Result<()> {
    let path = repo_path("test_files/gattaca_local.json")?;
    let (success, output) = run_align(&format!("align -f {}", path.display()))?;
    assert!(!success);
    assert_eq!(
        output,
        json!({"error": "Unknown algorithm 'waterman', expected 'needleman' or 'smith'"})
    );
    Ok(())
}

#[test]
fn test_align_lenient_flag() -> Result<()> {
    let path = repo_path("test_files/gattaca_local.json")?;
    let (success, output) = run_align(&format!(
        "align --lenient-algorithm -f {}",
        path.display()
    ))?;
    assert!(success);
    assert_eq!(output["final_alignment"], json!({"seq1": "CA", "seq2": "CA"}));
    Ok(())
}

#[test]
fn test_align_config_file() -> Result<()> {
    let request = repo_path("test_files/gattaca_local.json")?;
    let config = repo_path("test_files/lenient.toml")?;
    let (success, output) = run_align(&format!(
        "align -c {} -f {}",
        config.display(),
        request.display()
    ))?;
    assert!(success);
    assert_eq!(output["final_alignment"], json!({"seq1": "CA", "seq2": "CA"}));

    // The command line overrides the configured limit.
    let (success, output) = run_align(&format!(
        "align -c {} --max-sequence-length 5 -f {}",
        config.display(),
        request.display()
    ))?;
    assert!(!success);
    assert!(output["error"].is_string());
    Ok(())
}

#[test]
fn test_align_missing_files() -> Result<()> {
    let (success, output) = run_align("align -f /nonexistent/request.json")?;
    assert!(!success);
    assert!(output["error"].is_string());

    let (success, output) = run_align(&format!("align -c /nonexistent/config.toml {AC_CA}"))?;
    assert!(!success);
    assert!(output["error"].is_string());
    Ok(())
}

#[test]
fn test_show_single_step() -> Result<()> {
    let output = run_show(&format!("show --step 4 {AC_CA}"))?;
    assert_eq!(
        output,
        concat!(
            "Step 4/4: Cell (2, 2) = -1 from up\n",
            "[  0  -1  -2  ]\n",
            "[ -1  -1   0  ]\n",
            "[ -2   0  -1* ]\n",
            "Score: -1\n",
            "AC-\n",
            " | \n",
            "-CA\n",
        )
    );
    Ok(())
}

#[test]
fn test_show_all_steps() -> Result<()> {
    let path = repo_path("test_files/gattaca.json")?;
    let output = run_show(&format!("show -f {}", path.display()))?;
    assert!(output.starts_with("Step 1/49: Cell (1, 1) = 1 from diagonal\n"));
    assert!(output.contains("Step 49/49: Cell (7, 7) = 2 from diagonal\n"));
    assert!(output.ends_with("Score: 2\nG-ATTACA\n| | | ||\nGCA-TGCA\n"));
    Ok(())
}

#[test]
fn test_show_errors() -> Result<()> {
    assert!(run_show(&format!("show --step 0 {AC_CA}")).is_err());
    assert!(run_show(&format!("show --step 5 {AC_CA}")).is_err());

    let path = repo_path("test_files/gattaca_local.json")?;
    assert!(run_show(&format!("show -f {}", path.display())).is_err());
    Ok(())
}

#[test]
fn test_show_reports_failure_once() -> Result<()> {
    let error = run_show(&format!("show --step 5 {AC_CA}"))
        .err()
        .ok_or(anyhow!("Step 5 of a four step alignment was shown"))?;

    let mut output = Vec::new();
    show::report_failure(&error, &mut output)?;
    assert_eq!(
        String::from_utf8(output)?,
        "Error: Step 5 does not exist, the alignment has 4 steps\n"
    );
    Ok(())
}

#[test]
fn test_align_rejects_gap_symbol_in_input() -> Result<()> {
    let (success, output) = run_align(
        r#"align {"seq1":"A-C","seq2":"AC","match":1,"mismatch":-1,"gap":-1,"algorithm":"needleman"}"#,
    )?;
    assert!(!success);
    assert_eq!(
        output,
        json!({"error": "Malformed request: seq1 contains the gap symbol '-'"})
    );
    Ok(())
}
