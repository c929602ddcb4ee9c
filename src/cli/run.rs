use super::args::Args;
use super::args::Query;
use crate::RULES;
use crate::dice::Cup;
use crate::dice::Roll;
use crate::scoring::Category;
use crate::scoring::Scores;
use anyhow::Context;
use colored::Colorize;

/// Executes one parsed command, writing results to stdout.
pub fn run(args: &Args) -> anyhow::Result<()> {
    match &args.query {
        Query::Evaluate { dice } => {
            let joined = dice.join(" ");
            let roll = Roll::try_from(joined.as_str())
                .with_context(|| format!("invalid roll `{}`", joined))?;
            log::info!("evaluating {}", roll);
            println!("{}", render(roll, args.json)?);
        }
        Query::Roll { seed, count } => {
            let cup = match seed {
                Some(seed) => Cup::seeded(*seed),
                None => Cup::new(),
            };
            for roll in cup.take(*count) {
                log::info!("threw {}", roll);
                println!("{}", render(roll, args.json)?);
            }
        }
        Query::Rules { category: None } => {
            println!("{}", RULES);
            for category in Category::all() {
                println!("{:<14}{}", category.name(), category.rule());
            }
        }
        Query::Rules {
            category: Some(name),
        } => {
            let category = Category::try_from(name.as_str()).map_err(anyhow::Error::msg)?;
            println!("{:<14}{}", category.name(), category.rule());
        }
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct Report<'a> {
    roll: [u8; crate::N_DICE],
    scores: &'a Scores,
}

/// A roll and its ranking, either as JSON or as a table with the best row highlighted.
pub fn render(roll: Roll, json: bool) -> anyhow::Result<String> {
    let scores = Scores::from(roll);
    if json {
        let report = Report {
            roll: <[u8; crate::N_DICE]>::from(roll),
            scores: &scores,
        };
        return Ok(serde_json::to_string(&report)?);
    }
    let rows = scores
        .iter()
        .enumerate()
        .map(|(i, (category, score))| {
            let row = format!("{:<14}{:>3}", category.name(), score);
            match i {
                0 => row.as_str().bold().green().to_string(),
                _ => row,
            }
        })
        .collect::<Vec<String>>();
    Ok(format!("{}\n{}", roll.to_string().as_str().bold(), rows.join("\n")))
}
