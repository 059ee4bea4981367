use preroll_cli::commands::generate_document;
use preroll_cli::{command, execute};
use preroll_client::{
    ClientError, GenerationClient, GenerationParams, GenerationRequest, GenerationType, Generator,
};
use preroll_parse::Pipeline;
use preroll_test_utils::{envelope, BUDGET_TIERS_REPLY, HEADED_BREAKDOWN, SCREENPLAY_REPLY};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

fn write_reply(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).expect("write fixture");
    path
}

async fn run(args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["preroll"];
    argv.extend_from_slice(args);
    let matches = command().try_get_matches_from(argv)?;
    execute(&matches).await
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[tokio::test]
async fn test_parse_prints_formatted_document() {
    let dir = TempDir::new().expect("tempdir");
    let reply = write_reply(&dir, "reply.txt", "## Key Actions\n- Chase\n\nBUDGET:\n- Rain towers");

    let output = run(&["parse", path_str(&reply)]).await.expect("parse");
    assert_eq!(output, "Key Actions\n- Chase\n\nBUDGET\n- Rain towers");
}

#[tokio::test]
async fn test_parse_unwraps_envelope_and_emits_json() {
    let dir = TempDir::new().expect("tempdir");
    let reply = write_reply(&dir, "reply.json", &envelope("SUMMARY\n- Rain"));

    let output = run(&["parse", path_str(&reply), "--json"]).await.expect("parse");
    let value: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(value["route"], "headings");
    assert_eq!(value["raw"], "SUMMARY\n- Rain");
}

#[tokio::test]
async fn test_section_by_id() {
    let dir = TempDir::new().expect("tempdir");
    let reply = write_reply(&dir, "reply.txt", HEADED_BREAKDOWN);

    let output = run(&["section", path_str(&reply), "--id", "sound-design-6"])
        .await
        .expect("section");
    assert_eq!(output, "Sound Design\n- Rain bed\n- SFX: distant foghorn");

    let err = run(&["section", path_str(&reply), "--id", "nope-9"])
        .await
        .expect_err("unknown id");
    assert!(err.to_string().contains("overview-0"));
}

#[tokio::test]
async fn test_budget_tier() {
    let dir = TempDir::new().expect("tempdir");
    let reply = write_reply(&dir, "reply.txt", BUDGET_TIERS_REPLY);

    let output = run(&["budget", path_str(&reply), "--tier", "low"])
        .await
        .expect("budget");
    assert_eq!(output, "LOW BUDGET: $5K-10K\n- Handheld, available light");
}

#[tokio::test]
async fn test_scenes() {
    let dir = TempDir::new().expect("tempdir");
    let reply = write_reply(&dir, "reply.txt", SCREENPLAY_REPLY);

    let output = run(&["scenes", path_str(&reply)]).await.expect("scenes");
    assert!(output.starts_with("Tone: Noir\n\nINT. WAREHOUSE - NIGHT\nLOCATION: Dock 9"));
    assert!(output.contains("EXT. ROOFTOP - DAWN\nSFX: thunder\nBen waits at the edge."));
}

#[tokio::test]
async fn test_export_writes_named_files() {
    let dir = TempDir::new().expect("tempdir");
    let reply = write_reply(&dir, "reply.txt", BUDGET_TIERS_REPLY);
    let out = dir.path().join("exports");

    run(&["export", path_str(&reply), "--out", path_str(&out)])
        .await
        .expect("export");

    for name in [
        "preroll-report.txt",
        "preroll-summary-0.txt",
        "preroll-budget-low.txt",
        "preroll-budget-medium.txt",
        "preroll-budget-high.txt",
    ] {
        assert!(out.join(name).is_file(), "{name} missing");
    }
    let high = std::fs::read_to_string(out.join("preroll-budget-high.txt")).expect("read");
    assert_eq!(high, "HIGH BUDGET: $25K+\n- Crane and rain towers");
}

#[tokio::test]
async fn test_export_refuses_empty_reply() {
    let dir = TempDir::new().expect("tempdir");
    let reply = write_reply(&dir, "reply.txt", "  \n");

    let err = run(&["export", path_str(&reply), "--out", path_str(dir.path())])
        .await
        .expect_err("nothing to export");
    assert_eq!(err.to_string(), "Nothing to download yet.");
}

#[tokio::test]
async fn test_prompt_is_composed() {
    let output = run(&["prompt", "-p", "A rooftop chase", "--type", "Sound Design", "--genre", "Noir"])
        .await
        .expect("prompt");
    assert!(output.starts_with("Project brief:\nA rooftop chase\n\nProduction parameters:\n"));
    assert!(output.contains("Generation type: Sound Design\nGenre: Noir\nBudget tier: Unspecified"));
}

#[tokio::test]
async fn test_prompt_limit_flag() {
    let err = run(&["prompt", "-p", "A rooftop chase", "--max-prompt-chars", "10"])
        .await
        .expect_err("too long");
    assert!(err.to_string().starts_with("prompt too long"));
}

struct CannedClient(String);

#[async_trait::async_trait]
impl GenerationClient for CannedClient {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, ClientError> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn test_generate_document_parses_reply() {
    let reply = preroll_test_utils::sections_reply(
        "Sound Design",
        &[
            ("Ambient Bed", &["Rain on tin"][..]),
            ("Diegetic Sounds", &["Footsteps"][..]),
        ],
    );
    let generator = Generator::with_client(Arc::new(CannedClient(reply)), 3000);
    let params = GenerationParams::new().with_generation_type(GenerationType::SoundDesign);

    let doc = generate_document(&generator, &Pipeline::new(), "rain scene", params)
        .await
        .expect("generated");
    assert_eq!(doc.generation_type(), Some("Sound Design"));
    assert_eq!(
        doc.missing_titles(GenerationType::SoundDesign.required_sections()),
        vec!["Non-Diegetic Elements", "Transitions & Accents", "Technical & Mixing Notes"]
    );
}
