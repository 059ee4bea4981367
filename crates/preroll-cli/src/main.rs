use preroll_cli::{command, execute, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = command().get_matches();
    logging::init(matches.get_count("verbose"), matches.get_flag("log-json"));

    let output = execute(&matches).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
