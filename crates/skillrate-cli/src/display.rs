//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use skillrate_core::{ChartKey, Grade, PlayerRating, ScoreRecord};

const BORDER_WIDTH: usize = 40;

/// Format a player rating as a boxed table, one line per skillset.
pub fn format_rating(name: &str, rating: &PlayerRating) -> String {
    let mut output = String::new();
    let border = "━".repeat(BORDER_WIDTH);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {}  {}",
        name.bold(),
        format_colored_value(rating.overall)
    );
    let _ = writeln!(output, "{}", border_dim);
    for (skillset, value) in rating.skillsets.iter() {
        let _ = writeln!(
            output,
            "  {:<11}: {}",
            skillset.name(),
            format_colored_value(value)
        );
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// One leaderboard line: rank, value, chart, rate, accuracy and grade.
pub fn format_top_line(rank: usize, chart: &ChartKey, record: &ScoreRecord, value: f32) -> String {
    format!(
        "{:>3}. {} {} {} {:.2}% {}",
        rank,
        format_colored_value(value),
        chart,
        record.rate_bucket(),
        record.accuracy * 100.0,
        format_colored_grade(&record.grade)
    )
}

/// Rating value colored by tier
fn format_colored_value(value: f32) -> String {
    let text = format!("{:>6.2}", value);
    if value <= 0.0 {
        text.dimmed().to_string()
    } else if value < 10.0 {
        text.truecolor(170, 215, 255).to_string()
    } else if value < 20.0 {
        text.green().to_string()
    } else if value < 25.0 {
        text.cyan().to_string()
    } else if value < 30.0 {
        text.yellow().to_string()
    } else if value < 35.0 {
        text.red().to_string()
    } else {
        text.purple().bold().to_string()
    }
}

/// Format grade with color
fn format_colored_grade(grade: &Grade) -> String {
    let name = grade.short_name();
    match grade {
        Grade::NoData => name.dimmed().to_string(),
        Grade::Failed => name.red().to_string(),
        Grade::D | Grade::C | Grade::B => name.truecolor(170, 215, 255).to_string(),
        Grade::A => name.green().to_string(),
        Grade::Aa => name.truecolor(192, 192, 192).to_string(),
        Grade::Aaa => name.truecolor(255, 200, 0).bold().to_string(),
        Grade::Aaaa => name.cyan().bold().to_string(),
    }
}
