//! Fence segmentation: partition a raw answer into prose and fenced code
//! regions, in order, with no gaps or overlaps.

/// One contiguous slice of a raw answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Prose {
        text: String,
    },
    Code {
        /// Validated fence tag, if any. Tags with characters outside
        /// `[A-Za-z0-9_+-]` count as absent.
        language: Option<String>,
        /// The code body, without fence lines or the trailing newline.
        body: String,
        /// The literal fenced region, fence lines included.
        source: String,
    },
}

impl Segment {
    /// The literal text this segment covers in the original answer.
    pub fn literal(&self) -> &str {
        match self {
            Segment::Prose { text } => text,
            Segment::Code { source, .. } => source,
        }
    }
}

/// Split a raw answer into segments.
///
/// An opening fence is a line starting with three backticks, optionally
/// followed by a language tag. The block ends at the next line that is
/// exactly three backticks (trailing whitespace tolerated). Matching is
/// sequential: the first closing fence wins. A fence with no closing line
/// falls open — the fence line and everything after it stay prose, so the
/// trailing answer text is never dropped.
pub fn split_segments(raw: &str) -> Vec<Segment> {
    let lines: Vec<&str> = raw.split_inclusive('\n').collect();
    let mut segments = Vec::new();
    let mut prose = String::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if is_opening_fence(line) {
            if let Some(close) = (i + 1..lines.len()).find(|&j| is_closing_fence(lines[j])) {
                if !prose.is_empty() {
                    segments.push(Segment::Prose {
                        text: std::mem::take(&mut prose),
                    });
                }
                segments.push(code_segment(&lines[i..=close]));
                i = close + 1;
                continue;
            }
        }
        prose.push_str(line);
        i += 1;
    }

    if !prose.is_empty() {
        segments.push(Segment::Prose { text: prose });
    }
    segments
}

fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_opening_fence(line: &str) -> bool {
    line_content(line).starts_with("```")
}

fn is_closing_fence(line: &str) -> bool {
    line_content(line).trim_end() == "```"
}

fn code_segment(region: &[&str]) -> Segment {
    let language = parse_language_tag(&line_content(region[0])["```".len()..]);
    let mut body: String = region[1..region.len() - 1].concat();
    if body.ends_with('\n') {
        body.pop();
        if body.ends_with('\r') {
            body.pop();
        }
    }
    Segment::Code {
        language,
        body,
        source: region.concat(),
    }
}

/// Extract the language tag from the text after an opening fence. Tags
/// containing anything outside `[A-Za-z0-9_+-]` are treated as absent.
fn parse_language_tag(rest: &str) -> Option<String> {
    let tag = rest.trim();
    if tag.is_empty() {
        return None;
    }
    if tag
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
    {
        Some(tag.to_string())
    } else {
        None
    }
}
