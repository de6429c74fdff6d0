//! Research pipeline over instantiated tool handles
//!
//! A [`Researcher`] queries its handles by source channel (web, video,
//! academic), compiles the results into one document and summarizes it
//! with a [`Summarizer`].

use std::collections::BTreeMap;
use std::fmt;

use crew_tools::{ToolCategory, ToolHandle};

use crate::{Error, Result};

/// Default cap on sources gathered in one round.
pub const DEFAULT_MAX_SOURCES: usize = 15;

/// Default number of summary bullet points.
pub const DEFAULT_MAX_POINTS: usize = 5;

/// Where a source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceChannel {
    Web,
    Video,
    Academic,
}

impl SourceChannel {
    pub const ALL: [SourceChannel; 3] = [Self::Web, Self::Video, Self::Academic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Video => "video",
            Self::Academic => "academic",
        }
    }

    /// Channel a tool category feeds, if any.
    pub fn for_category(category: ToolCategory) -> Option<Self> {
        match category {
            ToolCategory::Web => Some(Self::Web),
            ToolCategory::Media => Some(Self::Video),
            ToolCategory::Document | ToolCategory::Code | ToolCategory::Data => {
                Some(Self::Academic)
            }
            ToolCategory::Custom => None,
        }
    }
}

impl fmt::Display for SourceChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sources found for a topic, grouped by channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDigest {
    sources: BTreeMap<SourceChannel, Vec<String>>,
    total_sources: usize,
}

impl SourceDigest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one source unless it is already present. Returns whether it was added.
    pub fn push(&mut self, channel: SourceChannel, source: impl Into<String>) -> bool {
        let source = source.into();
        let entries = self.sources.entry(channel).or_default();
        if entries.contains(&source) {
            return false;
        }
        entries.push(source);
        self.total_sources += 1;
        true
    }

    pub fn sources(&self, channel: SourceChannel) -> &[String] {
        self.sources.get(&channel).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn total_sources(&self) -> usize {
        self.total_sources
    }

    pub fn is_empty(&self) -> bool {
        self.total_sources == 0
    }

    /// Channels with at least one source, in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (SourceChannel, &[String])> {
        self.sources
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(c, v)| (*c, v.as_slice()))
    }

    /// Add the sources of `other` not already present. Returns how many were added.
    pub fn merge(&mut self, other: SourceDigest) -> usize {
        let mut added = 0;
        for (channel, sources) in other.sources {
            for source in sources {
                if self.push(channel, source) {
                    added += 1;
                }
            }
        }
        added
    }
}

/// Turns a compiled research document into key points.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, document: &str) -> Result<String>;
}

/// Takes the first sentence of every non-empty section as a bullet point.
///
/// Sections are separated by blank lines; markdown heading lines are
/// skipped. A `max_points` of zero asks for an empty summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPointSummarizer {
    pub max_points: usize,
}

impl Default for KeyPointSummarizer {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl KeyPointSummarizer {
    pub fn new(max_points: usize) -> Self {
        Self { max_points }
    }
}

impl Summarizer for KeyPointSummarizer {
    fn summarize(&self, document: &str) -> Result<String> {
        if self.max_points == 0 {
            return Ok(String::new());
        }
        let points: Vec<String> = document
            .split("\n\n")
            .filter_map(|section| {
                let body: Vec<&str> = section
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .collect();
                (!body.is_empty()).then(|| first_sentence(&body.join(" ")).to_string())
            })
            .take(self.max_points)
            .map(|sentence| format!("- {sentence}"))
            .collect();

        if points.is_empty() {
            return Err(Error::Research {
                message: "no key points found in compiled document".to_string(),
            });
        }
        Ok(points.join("\n"))
    }
}

/// Text up to and including the first `.`, `!` or `?` that ends a word.
fn first_sentence(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().is_none_or(|(_, next)| next.is_whitespace());
            if at_boundary {
                return &text[..i + c.len_utf8()];
            }
        }
    }
    text
}

/// Output of a completed research run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchReport {
    pub topic: String,
    pub document: String,
    pub summary: String,
}

/// Result of [`Researcher::research`]: step failures are reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResearchOutcome {
    Completed(ResearchReport),
    Failed(String),
}

impl ResearchOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Runs research steps over a set of tool handles.
pub struct Researcher {
    handles: Vec<Box<dyn ToolHandle>>,
    summarizer: Box<dyn Summarizer>,
}

impl Researcher {
    /// Researcher with the default [`KeyPointSummarizer`].
    pub fn new(handles: Vec<Box<dyn ToolHandle>>) -> Self {
        Self {
            handles,
            summarizer: Box::new(KeyPointSummarizer::default()),
        }
    }

    pub fn with_summarizer(mut self, summarizer: impl Summarizer + 'static) -> Self {
        self.summarizer = Box::new(summarizer);
        self
    }

    pub fn handles(&self) -> &[Box<dyn ToolHandle>] {
        &self.handles
    }

    /// Query every handle feeding `channel`. Fails on the first tool error.
    pub fn search(&self, channel: SourceChannel, query: &str) -> Result<Vec<String>> {
        let mut results = Vec::new();
        for handle in self
            .handles
            .iter()
            .filter(|h| SourceChannel::for_category(h.category()) == Some(channel))
        {
            tracing::debug!(tool = handle.name(), %channel, query, "searching");
            results.push(handle.run(query)?);
        }
        Ok(results)
    }

    pub fn search_web(&self, topic: &str) -> Result<Vec<String>> {
        self.search(SourceChannel::Web, topic)
    }

    pub fn search_video(&self, topic: &str) -> Result<Vec<String>> {
        self.search(SourceChannel::Video, topic)
    }

    pub fn search_academic(&self, topic: &str) -> Result<Vec<String>> {
        self.search(SourceChannel::Academic, topic)
    }

    /// First discovery round: up to `max_total_sources` sources across channels.
    pub fn preliminary(&self, topic: &str, max_total_sources: usize) -> Result<SourceDigest> {
        let topic = checked_topic(topic)?;
        self.gather(topic, max_total_sources)
    }

    /// Another discovery round with a broadened query, merged into `digest`.
    /// Returns how many new sources were added.
    pub fn expand(
        &self,
        digest: &mut SourceDigest,
        topic: &str,
        max_new_sources: usize,
    ) -> Result<usize> {
        let topic = checked_topic(topic)?;
        let more = self.gather(&format!("{topic} in depth"), max_new_sources)?;
        let added = digest.merge(more);
        tracing::info!(added, total = digest.total_sources(), "expanded sources");
        Ok(added)
    }

    fn gather(&self, query: &str, limit: usize) -> Result<SourceDigest> {
        let mut digest = SourceDigest::new();
        for channel in SourceChannel::ALL {
            for source in self.search(channel, query)? {
                if digest.total_sources() >= limit {
                    return Ok(digest);
                }
                digest.push(channel, source);
            }
        }
        Ok(digest)
    }

    /// Combine channel results into one markdown document.
    pub fn compile(
        &self,
        topic: &str,
        web: &[String],
        video: &[String],
        academic: &[String],
    ) -> String {
        let mut document = format!("# Research: {topic}\n");
        for (title, results) in [("Web", web), ("Video", video), ("Academic", academic)] {
            document.push_str(&format!("\n## {title}\n"));
            for result in results {
                document.push('\n');
                document.push_str(result);
                document.push('\n');
            }
        }
        document
    }

    /// Run all steps. An empty topic is an error; any later step failure
    /// becomes [`ResearchOutcome::Failed`].
    pub fn research(&self, topic: &str) -> Result<ResearchOutcome> {
        let topic = checked_topic(topic)?;
        match self.run_steps(topic) {
            Ok(report) => Ok(ResearchOutcome::Completed(report)),
            Err(e) => {
                tracing::warn!(error = %e, topic, "research failed");
                Ok(ResearchOutcome::Failed(format!("Error performing research: {e}")))
            }
        }
    }

    fn run_steps(&self, topic: &str) -> Result<ResearchReport> {
        let web = self.search_web(topic)?;
        let video = self.search_video(topic)?;
        let academic = self.search_academic(topic)?;
        let document = self.compile(topic, &web, &video, &academic);
        let summary = self.summarizer.summarize(&document)?;
        Ok(ResearchReport {
            topic: topic.to_string(),
            document,
            summary,
        })
    }
}

fn checked_topic(topic: &str) -> Result<&str> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(Error::EmptyTopic);
    }
    Ok(topic)
}
