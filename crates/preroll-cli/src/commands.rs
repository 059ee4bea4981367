//! Subcommand handlers
//!
//! Each handler returns the text for stdout; logging goes to stderr.

use crate::cli::{generation_params, reply_path};
use crate::export::{export_plan, write_exports};
use crate::input::read_reply;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use preroll_client::{compose_prompt, summarize_prompt, ClientConfig, GenerationParams, Generator};
use preroll_document::{BudgetTier, CanonicalResult, PLACEHOLDER};
use preroll_parse::{
    format_bullets, format_characters, format_document, format_scene_overview, format_section,
    format_tier, BudgetBreakdown, Pipeline,
};
use std::path::PathBuf;

/// Run the selected subcommand
///
/// # Errors
/// Fails on unreadable input, unknown section ids, invalid prompts,
/// endpoint failures and export errors.
pub async fn execute(matches: &ArgMatches) -> Result<String> {
    let pipeline = Pipeline::new();

    match matches.subcommand() {
        Some(("parse", args)) => {
            let doc = parse_input(&pipeline, args).await?;
            render_document(&doc, args.get_flag("json"))
        }
        Some(("section", args)) => {
            let doc = parse_input(&pipeline, args).await?;
            let id = args.get_one::<String>("id").context("--id is required")?;
            section_text(&doc, id)
        }
        Some(("budget", args)) => {
            let doc = parse_input(&pipeline, args).await?;
            budget_text(&pipeline.budget(&doc), args.get_one::<BudgetTier>("tier").copied())
        }
        Some(("scenes", args)) => {
            let doc = parse_input(&pipeline, args).await?;
            let overview = pipeline.scene_overview(&doc);
            if overview.is_empty() {
                Ok(PLACEHOLDER.to_string())
            } else {
                Ok(format_scene_overview(&overview))
            }
        }
        Some(("characters", args)) => {
            let doc = parse_input(&pipeline, args).await?;
            let characters = pipeline.characters(&doc);
            if characters.is_empty() {
                Ok(PLACEHOLDER.to_string())
            } else {
                Ok(format_characters(&characters))
            }
        }
        Some(("export", args)) => {
            let doc = parse_input(&pipeline, args).await?;
            let dir = args
                .get_one::<PathBuf>("out")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("."));
            let files = export_plan(&doc, &pipeline.budget(&doc))?;
            let written = write_exports(&dir, &files).await?;
            Ok(written
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Some(("prompt", args)) => {
            let config = client_config(args)?;
            let prompt = args.get_one::<String>("prompt").context("--prompt is required")?;
            Ok(compose_prompt(
                prompt,
                &generation_params(args),
                config.max_prompt_chars,
            )?)
        }
        Some(("generate", args)) => {
            let config = client_config(args)?;
            let prompt = args.get_one::<String>("prompt").context("--prompt is required")?;
            let generator = Generator::http(config)?;
            let doc = generate_document(&generator, &pipeline, prompt, generation_params(args)).await?;
            render_document(&doc, args.get_flag("json"))
        }
        Some((other, _)) => bail!("unknown command '{other}'"),
        None => bail!("no command given"),
    }
}

/// Generate a reply and parse it
///
/// Logs a warning when the reply lacks sections the generation type
/// requires.
///
/// # Errors
/// Fails when the prompt is invalid or the request fails.
pub async fn generate_document(
    generator: &Generator,
    pipeline: &Pipeline,
    prompt: &str,
    params: GenerationParams,
) -> Result<CanonicalResult> {
    let generation_type = params.generation_type;
    tracing::info!(prompt = %summarize_prompt(prompt), %generation_type, "requesting generation");

    let output = generator
        .generate(prompt, params)
        .await
        .context("generation request failed")?;
    if output.trim().is_empty() {
        tracing::warn!("generation endpoint returned an empty reply");
    }

    let doc = pipeline.parse(&output);
    let missing = doc.missing_titles(generation_type.required_sections());
    if !missing.is_empty() {
        tracing::warn!(?missing, %generation_type, "reply is missing required sections");
    }
    Ok(doc)
}

/// Formatted document, or the canonical model as JSON
///
/// # Errors
/// Fails only if JSON serialization fails.
pub fn render_document(doc: &CanonicalResult, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(doc)?)
    } else if doc.is_empty() {
        Ok(PLACEHOLDER.to_string())
    } else {
        Ok(format_document(doc))
    }
}

/// One formatted section by id
///
/// # Errors
/// Fails for an id not in the document, listing the ids that are.
pub fn section_text(doc: &CanonicalResult, id: &str) -> Result<String> {
    match doc.section(id) {
        Some(section) => Ok(format_section(section)),
        None => {
            let ids: Vec<String> = doc.sections().iter().map(|s| s.id().to_string()).collect();
            bail!("no section with id '{id}' (available: {})", ids.join(", "))
        }
    }
}

/// Budget text, optionally limited to one tier
///
/// # Errors
/// Fails when a tier is requested from a reply without tier headings.
pub fn budget_text(breakdown: &BudgetBreakdown, tier: Option<BudgetTier>) -> Result<String> {
    if let Some(tier) = tier {
        return match breakdown.tier(tier) {
            Some(slice) => Ok(format_tier(slice)),
            None => bail!("reply has no {tier} budget tier"),
        };
    }

    Ok(match breakdown {
        BudgetBreakdown::Tiered(slices) => slices
            .iter()
            .map(format_tier)
            .collect::<Vec<_>>()
            .join("\n\n"),
        BudgetBreakdown::Undifferentiated(text) | BudgetBreakdown::KeywordLines(text) => text.clone(),
        BudgetBreakdown::Missing => format_bullets(&[PLACEHOLDER]),
    })
}

fn client_config(args: &ArgMatches) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base) = args.try_get_one::<String>("api-base").ok().flatten() {
        config = config.with_api_base(base.clone());
    }
    if let Some(secs) = args.try_get_one::<u64>("timeout").ok().flatten() {
        config = config.with_timeout_secs(*secs);
    }
    if let Some(max) = args.get_one::<usize>("max-prompt-chars") {
        config = config.with_max_prompt_chars(*max);
    }
    Ok(config)
}

async fn parse_input(pipeline: &Pipeline, args: &ArgMatches) -> Result<CanonicalResult> {
    let reply = read_reply(reply_path(args).as_deref()).await?;
    let doc = pipeline.parse(&reply);
    tracing::debug!(route = ?doc.route(), sections = doc.sections().len(), "reply parsed");
    Ok(doc)
}
