//! One-shot subcommands: print a single lookup and exit.

use anyhow::Result;
use serde_json::json;
use solace_core::{fetch_resources, random_journal_prompt, recommend};
use std::io::Write;

pub fn prompt<W: Write>(out: &mut W, as_json: bool) -> Result<()> {
    let prompt = random_journal_prompt();
    if as_json {
        writeln!(out, "{}", json!({ "prompt": prompt }))?;
    } else {
        writeln!(out, "{}", prompt)?;
    }
    Ok(())
}

pub fn recommendation<W: Write>(out: &mut W, mood: &str, as_json: bool) -> Result<()> {
    let text = recommend(mood);
    if as_json {
        writeln!(out, "{}", json!({ "mood": mood, "recommendation": text }))?;
    } else {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

pub fn resources<W: Write>(out: &mut W, topic: &str, as_json: bool) -> Result<()> {
    let lines = fetch_resources(topic);
    if as_json {
        writeln!(out, "{}", json!({ "topic": topic, "resources": lines }))?;
    } else {
        for line in lines {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
