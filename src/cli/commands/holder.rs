use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::holder::HolderLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::format::progress_bar;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Register {
            name,
            location,
            owner,
        } => {
            let holder = HolderLogic::register(&mut pool, name, location, *owner)?;
            messages::success(format!(
                "Registered holder {} '{}' ({})",
                holder.id, holder.name, holder.status
            ));
        }

        Commands::Holders => {
            let list = HolderLogic::list_with_progress(&mut pool, cfg.total_sections)?;

            if list.is_empty() {
                messages::info("No holders registered yet.");
                return Ok(());
            }

            println!("👥 Holders:\n");
            for hp in list {
                println!(
                    "{:>4}: {:<30} {} {}",
                    hp.holder.id,
                    hp.holder.name,
                    progress_bar(hp.done as usize, hp.total as usize),
                    hp.holder.location
                );
            }
        }

        Commands::Backfill => {
            let created = HolderLogic::backfill(&mut pool)?;
            if created == 0 {
                messages::info("Nothing to backfill: every Holder account already has a record.");
            } else {
                messages::success(format!("Backfilled {} holder(s) from user accounts.", created));
            }
        }

        _ => {}
    }

    Ok(())
}
