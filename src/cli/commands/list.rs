use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_commutes;
use crate::errors::AppResult;
use crate::models::commute::Commute;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::formatting::yes_no;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { user, json } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let commutes = load_commutes(&mut pool, user.as_deref())?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&commutes)?);
            return Ok(());
        }

        if commutes.is_empty() {
            match user {
                Some(u) => info(format!("No commutes for {}", u)),
                None => info("No commutes recorded yet."),
            }
            return Ok(());
        }

        println!("{CYAN}Commutes ({}){RESET}", commutes.len());
        print!("{}", build_table(&commutes).render());
    }

    Ok(())
}

fn build_table(commutes: &[Commute]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("USER"),
        Column::new("NAME"),
        Column::new("ROUND TRIP"),
        Column::new("KM"),
        Column::new("MIN"),
        Column::new("TRAFFIC"),
        Column::new("USAGE"),
    ]);

    for c in commutes {
        table.add_row(vec![
            c.id.to_string(),
            c.user_id.clone(),
            c.name.clone(),
            yes_no(c.is_round_trip).to_string(),
            format!("{:.1}", c.approx_distance_km),
            format!("{:.0}", c.approx_duration_minutes),
            c.traffic.code().to_string(),
            c.usage_display(),
        ]);
    }

    table
}
