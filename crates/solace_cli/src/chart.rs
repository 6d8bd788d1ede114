//! Terminal rendering of the mood scatter plot.

use colored::{ColoredString, Colorize};
use solace_core::{ChartColor, MoodBucket, MoodChart, TIMESTAMP_FORMAT};

const TITLE: &str = "Mood Tracking";
const X_LABEL: &str = "Date and Time";
const Y_LABEL: &str = "Mood";
const POINT: &str = "●";
const LABEL_WIDTH: usize = 8;

/// Render the chart as lines of text, one row per mood bucket and one
/// column per recorded entry.
pub fn render(chart: &MoodChart, use_color: bool) -> String {
    let points = chart.points();
    let plot_width = points.len() * 2 + 1;
    let total_width = LABEL_WIDTH + 2 + plot_width.max(X_LABEL.len());

    let mut lines = vec![
        format!("{:^width$}", TITLE, width = total_width)
            .trim_end()
            .to_string(),
        format!("{:>width$}", Y_LABEL, width = LABEL_WIDTH),
    ];

    for bucket in MoodBucket::ALL {
        let mut row = format!("{:>width$} │", bucket.label(), width = LABEL_WIDTH);
        for point in points {
            row.push(' ');
            if point.bucket == bucket {
                row.push_str(&paint(POINT, bucket, use_color).to_string());
            } else {
                row.push(' ');
            }
        }
        lines.push(row.trim_end().to_string());
    }

    lines.push(format!(
        "{:>width$} └{}",
        "",
        "─".repeat(plot_width),
        width = LABEL_WIDTH
    ));

    if let (Some(first), Some(last)) = (chart.first_timestamp(), chart.last_timestamp()) {
        let span = if first == last {
            first.format(TIMESTAMP_FORMAT).to_string()
        } else {
            format!(
                "{} → {}",
                first.format(TIMESTAMP_FORMAT),
                last.format(TIMESTAMP_FORMAT)
            )
        };
        lines.push(format!("{:>width$}  {}", "", span, width = LABEL_WIDTH));
    }
    lines.push(format!("{:>width$}  {}", "", X_LABEL, width = LABEL_WIDTH));

    let legend: Vec<String> = chart
        .bucket_counts()
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(bucket, count)| format!("{} {} {}", paint(POINT, *bucket, use_color), bucket.label(), count))
        .collect();
    lines.push(format!("{:>width$}  {}", "", legend.join("  "), width = LABEL_WIDTH));

    if chart.omitted() > 0 {
        lines.push(format!("({} earlier entries not shown)", chart.omitted()));
    }

    lines.join("\n")
}

fn paint(text: &str, bucket: MoodBucket, use_color: bool) -> ColoredString {
    if !use_color {
        return text.normal();
    }
    match bucket.color() {
        ChartColor::Green => text.green(),
        ChartColor::Blue => text.blue(),
        ChartColor::Orange => text.truecolor(255, 165, 0),
        ChartColor::Red => text.red(),
        ChartColor::Grey => text.bright_black(),
    }
}
