use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::wizard::SurveyContext;
use crate::db::holders;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::section::Section;
use crate::ui::messages;
use crate::utils::format::{percent, progress_bar};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Status { holder } => {
            let h = holders::require_holder(&pool.conn, *holder)?;
            let ctx = SurveyContext::open(&pool.conn, h.id, cfg.total_sections)?;

            messages::header(format!("Survey status for {} '{}'", h.id, h.name));

            for n in 1..=cfg.total_sections {
                let title = Section::from_number(n)
                    .map(|s| s.title())
                    .unwrap_or("Unknown section");
                messages::section_row(n, title, ctx.is_complete(n));
            }

            println!(
                "\n  {} ({})",
                progress_bar(ctx.done_count() as usize, cfg.total_sections as usize),
                percent(ctx.done_count() as usize, cfg.total_sections as usize)
            );
        }

        Commands::Resume { holder } => {
            let h = holders::require_holder(&pool.conn, *holder)?;
            let ctx = SurveyContext::open(&pool.conn, h.id, cfg.total_sections)?;

            let n = ctx.nav.current();
            let title = Section::from_number(n).ok_or(AppError::UnknownSection(n))?.title();

            if ctx.done_count() >= cfg.total_sections {
                messages::success(format!(
                    "Holder {} has completed all {} sections.",
                    h.id, cfg.total_sections
                ));
            } else {
                messages::info(format!(
                    "Holder {} resumes at section {}: {}",
                    h.id, n, title
                ));
            }
        }

        _ => {}
    }

    Ok(())
}
