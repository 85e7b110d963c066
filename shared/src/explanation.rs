const EMPHASIS_MARKER: &str = "**";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// One rendered bullet of an explanation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplanationLine {
    pub segments: Vec<Segment>,
}

/// Turns the backend's bullet-list explanation into ordered lines of
/// plain and emphasized segments. Blank lines are dropped.
pub fn format_explanation(raw: &str) -> Vec<ExplanationLine> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| ExplanationLine {
            segments: segment_line(strip_bullet(line)),
        })
        .collect()
}

// A lone leading `*` is a bullet; `**` opens emphasis and is left alone.
fn strip_bullet(line: &str) -> &str {
    let line = line.trim_start();
    match line.strip_prefix('*') {
        Some(rest) if !rest.starts_with('*') => rest.trim_start(),
        _ => line,
    }
}

fn segment_line(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(EMPHASIS_MARKER) {
        let inner = &rest[open + EMPHASIS_MARKER.len()..];
        let Some(close) = inner.find(EMPHASIS_MARKER) else {
            break;
        };

        if open > 0 {
            segments.push(Segment::plain(&rest[..open]));
        }
        if close > 0 {
            segments.push(Segment::emphasized(&inner[..close]));
        }
        rest = &inner[close + EMPHASIS_MARKER.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::plain(rest));
    }

    segments
}
