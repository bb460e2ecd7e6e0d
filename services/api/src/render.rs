use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use numerology::error::AppError;
use numerology::readings::calculate_fortune;
use numerology::readings::views::FortuneReadingView;

#[derive(Args, Debug)]
pub(crate) struct ReadArgs {
    /// Name the reading is computed for
    #[arg(long)]
    pub(crate) name: String,
    /// Birthdate (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) birthdate: NaiveDate,
    /// Override the reading date for reproducible output (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Emit the reading as JSON instead of formatted text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_reading(args: ReadArgs) -> Result<(), AppError> {
    let ReadArgs {
        name,
        birthdate,
        today,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let view = calculate_fortune(&name, birthdate, today)?.to_view();

    if json {
        match serde_json::to_string_pretty(&view) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("reading payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_reading(&name, birthdate, today, &view);
    Ok(())
}

pub(crate) fn render_reading(
    name: &str,
    birthdate: NaiveDate,
    today: NaiveDate,
    view: &FortuneReadingView,
) {
    println!("运势分析报告");
    println!("{} | 生日 {} | 评估日期 {}", name, birthdate, today);

    println!("\n{} — 综合分数 {} 分", view.level_label, view.score);
    println!("{}", view.summary);

    println!("\n命理分析");
    println!("- {}", view.analysis.life_sentence);
    println!("- {}", view.analysis.name_sentence);

    println!("\n吉利事项");
    for item in &view.lucky {
        println!("- {}", item);
    }

    println!("\n忌讳事项");
    for item in &view.unlucky {
        println!("- {}", item);
    }

    println!("\n运势建议");
    for item in &view.recommendations {
        println!("- {}", item);
    }
}
