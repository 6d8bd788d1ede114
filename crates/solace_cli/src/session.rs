//! The interactive check-in loop.
//!
//! Each turn asks for a mood, records it, and answers with an insight, a
//! recommendation, a journaling prompt, resources for a topic of the user's
//! choosing and the updated mood chart. Which of the optional steps run is
//! controlled by the `[session]` config section.

use crate::chart;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::ThreadRng;
use rand::Rng;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use solace_core::{check_in, fetch_resources, MoodChart, MoodHistory, SolaceConfig};
use std::io::Write;
use tracing::{debug, info};

const MOOD_QUESTION: &str = "How are you feeling today? (Type 'exit' to quit) ";
const TOPIC_QUESTION: &str =
    "What specific topic of mental health resources are you interested in? (e.g., stress, anxiety, general) ";
const EXIT_WORD: &str = "exit";
const FAREWELL: &str = "Thank you for using Solace! Take care of yourself.";

/// Where the session reads user input from.
pub trait LineSource {
    /// Show `prompt` and read one line, trimmed. `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    if let Err(e) = self.add_history_entry(line.as_str()) {
                        debug!("Failed to add history entry: {}", e);
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e).context("Failed to read from terminal"),
        }
    }
}

pub struct Session<R: Rng = ThreadRng> {
    config: SolaceConfig,
    history: MoodHistory,
    rng: R,
    use_color: bool,
}

impl Session {
    pub fn new(config: SolaceConfig, use_color: bool) -> Self {
        Self::with_rng(config, use_color, rand::thread_rng())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: SolaceConfig, use_color: bool, rng: R) -> Self {
        Self {
            config,
            history: MoodHistory::new(),
            rng,
            use_color,
        }
    }

    #[cfg(test)]
    pub fn history(&self) -> &MoodHistory {
        &self.history
    }

    /// Run until the user types `exit` (any case) or closes input.
    pub fn run<S: LineSource, W: Write>(&mut self, input: &mut S, out: &mut W) -> Result<()> {
        info!("Session started");

        while let Some(mood) = input.read_line(MOOD_QUESTION)? {
            if mood.eq_ignore_ascii_case(EXIT_WORD) {
                break;
            }
            if mood.is_empty() {
                continue;
            }

            self.respond(&mood, out)?;

            if self.config.session.ask_resources {
                let Some(topic) = input.read_line(TOPIC_QUESTION)? else {
                    break;
                };
                self.show_resources(&topic, out)?;
            }

            if self.config.session.show_chart {
                self.show_chart(out)?;
            }
            out.flush()?;
        }

        info!(entries = self.history.len(), "Session ended");
        writeln!(out, "{}", FAREWELL)?;
        out.flush()?;
        Ok(())
    }

    /// Record the mood and print the immediate replies.
    fn respond<W: Write>(&mut self, mood: &str, out: &mut W) -> Result<()> {
        let reply = check_in(&mut self.history, mood, &mut self.rng);

        writeln!(
            out,
            "Mood logged: {} at {}",
            reply.entry.mood(),
            reply.entry.formatted_timestamp()
        )?;
        writeln!(out, "{}", self.accent(reply.insight.message()))?;
        writeln!(out, "Recommendation: {}", reply.recommendation)?;
        if self.config.session.show_prompt {
            writeln!(out, "Your journaling prompt for today: {}", reply.prompt)?;
        }
        Ok(())
    }

    fn show_resources<W: Write>(&self, topic: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Fetching resources for '{}'...", topic)?;
        writeln!(out, "Here are some resources you might find helpful:")?;
        for line in fetch_resources(topic) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn show_chart<W: Write>(&self, out: &mut W) -> Result<()> {
        match MoodChart::from_history(&self.history, self.config.chart.max_points) {
            Ok(c) => writeln!(out, "{}", chart::render(&c, self.use_color))?,
            // Nothing recorded yet; say so and carry on.
            Err(e) => writeln!(out, "{}", e)?,
        }
        Ok(())
    }

    fn accent(&self, text: &str) -> String {
        if self.use_color {
            text.bright_blue().to_string()
        } else {
            text.to_string()
        }
    }
}
