use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form;
use crate::core::sections::{SectionData, labour};
use crate::db::holders;
use crate::db::log::aclog;
use crate::db::pool::DbPool;
use crate::db::progress;
use crate::errors::{AppError, AppResult};
use crate::models::labour::{DEFAULT_QUESTIONS, LabourAnswer};
use crate::models::section::Section;
use crate::ui::messages;
use std::fs;

fn section_from_number(n: u32) -> AppResult<Section> {
    Section::from_number(n).ok_or(AppError::UnknownSection(n))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Load {
            holder,
            section,
            json,
        } => {
            let section = section_from_number(*section)?;
            holders::require_holder(&pool.conn, *holder)?;

            if *json {
                let rows = form::current_rows(&mut pool, *holder, section)?;
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                let plan = form::plan(&mut pool, *holder, section)?;
                println!("{}", serde_json::to_string_pretty(&plan)?);
            }
        }

        Commands::Save {
            holder,
            section,
            file,
            complete,
        } => {
            let section = section_from_number(*section)?;
            let h = holders::require_holder(&pool.conn, *holder)?;

            let payload = fs::read_to_string(file)?;
            let data = SectionData::from_json(section, &payload)?;

            let outcome = form::submit(&mut pool, h.id, &data, cfg.total_sections, *complete)?;

            for w in &outcome.warnings {
                messages::warning(w);
            }

            if outcome.saved {
                aclog(
                    &pool.conn,
                    "save",
                    &format!("holder {} section {}", h.id, section.number()),
                    &outcome.message,
                )?;
                messages::success(&outcome.message);

                if let Some(next) = outcome.next_section {
                    messages::info(format!("Next: section {}", next));
                }
            } else {
                for e in &outcome.errors {
                    messages::error(e);
                }
                messages::warning(&outcome.message);
            }
        }

        Commands::Answer {
            holder,
            question,
            male,
            female,
            response,
        } => {
            let h = holders::require_holder(&pool.conn, *holder)?;

            let text = DEFAULT_QUESTIONS
                .iter()
                .find(|(no, _)| no == question)
                .map(|(_, t)| *t)
                .unwrap_or("");

            let mut ans = LabourAnswer::seeded(*question, text);
            ans.male_count = *male;
            ans.female_count = *female;
            if let Some(r) = response {
                ans.option_response = r.clone();
            }

            let report = labour::validate(std::slice::from_ref(&ans));
            if !report.is_clean() {
                for e in &report.errors {
                    messages::error(e);
                }
                messages::warning("Answer not recorded: fix the errors above");
                return Ok(());
            }

            let finished = labour::record_answer(&mut pool, h.id, &ans)?;
            aclog(
                &pool.conn,
                "save",
                &format!("holder {} labour q{}", h.id, question),
                "Labour answer recorded",
            )?;

            messages::success(format!(
                "Recorded answer to Q{} for holder {}",
                question, h.id
            ));
            if finished {
                messages::success("Holding Labour section complete.");
            }
        }

        Commands::Complete { holder, section } => {
            let s = section_from_number(*section)?;
            let h = holders::require_holder(&pool.conn, *holder)?;

            progress::mark_complete(&pool.conn, h.id, s.number())?;
            aclog(
                &pool.conn,
                "complete",
                &format!("holder {} section {}", h.id, s.number()),
                &format!("Section '{}' marked complete", s.title()),
            )?;

            messages::success(format!(
                "Section {} ({}) marked complete for holder {}.",
                s.number(),
                s.title(),
                h.id
            ));
        }

        _ => {}
    }

    Ok(())
}
