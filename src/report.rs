//! Run summaries and run-length encoding built on the grouping engines

use tracing::debug;

use crate::config::GroupingConfig;
use crate::context::{IterContext, SliceContext};
use crate::group::{group, group_runs};

/// One grouping of consecutive lines sharing a key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunSummary {
    /// Key of the first line in the grouping.
    pub key: String,
    /// Number of lines in the grouping.
    pub count: usize,
    /// 1-based line number of the first line.
    pub first_line: usize,
    /// Lines of the grouping, in input order.
    pub members: Vec<String>,
}

/// Group `lines` according to `config`.
///
/// Groupings come out in input order, or last to first when
/// `config.reverse` is set; members always keep input order.
pub fn summarize<'a, S: AsRef<str>>(lines: &'a [S], config: &GroupingConfig) -> Vec<RunSummary> {
    let key = &config.key;
    let grouped = group(
        move |line: &'a S| key.select(line.as_ref()),
        move |lhs: &&'a str, rhs: &&'a str| config.keys_equivalent(lhs, rhs),
        SliceContext::range(lines),
    );

    let groups = grouped.iter();
    let views: Vec<_> = if config.reverse {
        groups.rev().collect()
    } else {
        groups.collect()
    };

    let summaries: Vec<RunSummary> = views
        .into_iter()
        .filter_map(|view| {
            let first_line = *view.from() + 1;
            let members: Vec<&str> = view.map(|line| line.as_ref()).collect();
            let first = members.first()?;
            Some(RunSummary {
                key: key.select(first).to_string(),
                count: members.len(),
                first_line,
                members: members.iter().map(|member| member.to_string()).collect(),
            })
        })
        .collect();

    debug!(
        lines = lines.len(),
        groupings = summaries.len(),
        "summarized input"
    );
    summaries
}

/// Render summaries as `count<TAB>key` lines, members indented beneath.
pub fn render(summaries: &[RunSummary], show_members: bool) -> String {
    let mut out = String::new();
    for summary in summaries {
        out.push_str(&format!("{}\t{}\n", summary.count, summary.key));
        if show_members {
            for member in &summary.members {
                out.push('\t');
                out.push_str(member);
                out.push('\n');
            }
        }
    }
    out
}

/// Run-length encode `text`: `"aaab"` becomes `"a3b1"`.
///
/// Reads the characters through a forward-only context, so the text is never
/// collected into an intermediate buffer.
pub fn run_length_encode(text: &str) -> String {
    let runs = group_runs(IterContext::range(text.chars()));
    let mut encoded = String::new();
    for mut run in runs.iter() {
        if let Some(symbol) = run.next() {
            encoded.push(symbol);
            encoded.push_str(&(run.count() + 1).to_string());
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_summarize_whole_lines() {
        let input = lines("a\na\nb\na");
        let summaries = summarize(&input, &GroupingConfig::whole_lines());
        let shape: Vec<(&str, usize, usize)> = summaries
            .iter()
            .map(|s| (s.key.as_str(), s.count, s.first_line))
            .collect();
        assert_eq!(shape, vec![("a", 2, 1), ("b", 1, 3), ("a", 1, 4)]);
    }

    #[test]
    fn test_summarize_reverse_keeps_member_order() {
        let input = lines("x 1\nx 2\ny 3");
        let config = GroupingConfig::by_field(1, None)
            .expect("valid field")
            .with_reverse(true);
        let summaries = summarize(&input, &config);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].key, "y");
        assert_eq!(summaries[1].members, vec!["x 1", "x 2"]);
    }

    #[test]
    fn test_render_with_members() {
        let input = lines("k\nk");
        let summaries = summarize(&input, &GroupingConfig::whole_lines());
        assert_eq!(render(&summaries, false), "2\tk\n");
        assert_eq!(render(&summaries, true), "2\tk\n\tk\n\tk\n");
    }

    #[test]
    fn test_run_length_encode() {
        assert_eq!(run_length_encode("aaabccdddd"), "a3b1c2d4");
        assert_eq!(run_length_encode(""), "");
    }
}
