use crate::core::validate::{ValidationReport, check_range, check_text_len};
use crate::db::pool::DbPool;
use crate::db::sections::machinery as q;
use crate::errors::AppResult;
use crate::models::machinery::{EQUIPMENT_CATALOG, MAX_EQUIPMENT_NAME, MAX_QUANTITY, MachineryRow};

/// Existing rows for a holder; empty means first submission.
pub fn load(pool: &mut DbPool, holder_id: i64) -> AppResult<Vec<MachineryRow>> {
    q::load_rows(&pool.conn, holder_id)
}

/// Catalog defaults shown when a holder has no saved machinery data.
pub fn defaults() -> Vec<MachineryRow> {
    EQUIPMENT_CATALOG
        .iter()
        .map(|e| MachineryRow::catalog_default(e))
        .collect()
}

pub fn validate(rows: &[MachineryRow]) -> ValidationReport {
    let mut report = ValidationReport::new();

    for row in rows {
        let name = &row.equipment_name;

        // An open-entry slot still carrying its placeholder cannot claim
        // equipment: the holder must name what the row is.
        if name.trim().is_empty() || (row.is_open_entry() && row.has_item.is_yes()) {
            report.error(format!(
                "Please specify the equipment type for '{}'",
                if name.trim().is_empty() { "(unnamed row)" } else { name }
            ));
        }

        check_text_len(&mut report, "Equipment name", name, MAX_EQUIPMENT_NAME);

        if row.has_item.is_yes() && row.total_quantity() == 0 {
            report.error(format!(
                "For '{}', please enter quantities if you have this equipment (marked 'Yes')",
                name
            ));
        }

        for (label, value) in [
            ("quantity new", row.quantity_new),
            ("quantity used", row.quantity_used),
            ("quantity out of service", row.quantity_out_of_service),
        ] {
            check_range(
                &mut report,
                &format!("For '{}', {}", name, label),
                value,
                0,
                MAX_QUANTITY,
            );
        }
    }

    report
}

/// Replace-on-save: delete every existing row for the holder, then bulk
/// insert the new set, all inside one transaction.
pub fn replace(pool: &mut DbPool, holder_id: i64, rows: &[MachineryRow]) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;

    q::delete_rows(&tx, holder_id)?;
    for row in rows {
        q::insert_row(&tx, holder_id, row)?;
    }

    tx.commit()?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::machinery::{Ownership, YesNo};

    fn row(name: &str, has: YesNo, new: i64, used: i64, out: i64) -> MachineryRow {
        MachineryRow {
            id: 0,
            has_item: has,
            equipment_name: name.to_string(),
            quantity_new: new,
            quantity_used: used,
            quantity_out_of_service: out,
            source: Ownership::Owned,
        }
    }

    #[test]
    fn yes_with_zero_quantities_is_rejected() {
        let report = validate(&[row("Tractor", YesNo::Yes, 0, 0, 0)]);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("please enter quantities"));
    }

    #[test]
    fn quantities_out_of_range_are_rejected() {
        let report = validate(&[row("Tractor", YesNo::Yes, 21, 0, -2)]);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn name_over_100_chars_is_rejected() {
        let report = validate(&[row(&"x".repeat(101), YesNo::No, 0, 0, 0)]);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("too long"));
    }

    #[test]
    fn catalog_defaults_are_clean() {
        let report = validate(&defaults());
        assert!(report.is_clean());
        assert!(report.warnings.is_empty());
    }
}
