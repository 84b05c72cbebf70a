use crate::core::validate::{ValidationReport, check_non_negative, check_text_len};
use crate::db::pool::DbPool;
use crate::db::sections::land_use as q;
use crate::errors::AppResult;
use crate::models::land_use::{
    CROP_METHOD_OPTIONS, LAND_CLEARING_OPTIONS, LandUse, LandUseForm, MAIN_PURPOSE_OPTIONS,
    MAX_LOCATION_LEN, Parcel, TENURE_OPTIONS, USE_OF_LAND_OPTIONS,
};

/// Saved section 5 data for a holder. `None` means first submission.
pub fn load(pool: &mut DbPool, holder_id: i64) -> AppResult<Option<LandUseForm>> {
    let Some(main) = q::load_main(&pool.conn, holder_id)? else {
        return Ok(None);
    };

    let parcels = q::load_parcels(&pool.conn, main.id)?;
    Ok(Some(LandUseForm { main, parcels }))
}

/// Blank form shown on first visit: zeroed parent plus one default parcel.
pub fn defaults() -> LandUseForm {
    LandUseForm {
        main: LandUse {
            id: 0,
            total_area_acres: 0.0,
            years_agriculture: 0.0,
            main_purpose: MAIN_PURPOSE_OPTIONS[0].to_string(),
            num_parcels: 1,
            location: String::new(),
            crop_methods: Vec::new(),
        },
        parcels: vec![Parcel::default_first()],
    }
}

pub fn validate(form: &LandUseForm) -> ValidationReport {
    let mut report = ValidationReport::new();
    let main = &form.main;

    if main.total_area_acres <= 0.0 {
        report.error("Total Area in Acres must be greater than zero");
    }
    check_non_negative(&mut report, "Years in Agriculture", main.years_agriculture);

    if main.location.trim().is_empty() {
        report.error("Location cannot be empty.");
    }
    check_text_len(&mut report, "Location", &main.location, MAX_LOCATION_LEN);

    if !MAIN_PURPOSE_OPTIONS.contains(&main.main_purpose.as_str()) {
        report.error(format!(
            "Main Purpose '{}' is not a recognised option",
            main.main_purpose
        ));
    }

    if main.crop_methods.is_empty() {
        report.error("Select at least one crop method");
    }
    for method in &main.crop_methods {
        if !CROP_METHOD_OPTIONS.contains(&method.as_str()) {
            report.error(format!("Crop method '{}' is not a recognised option", method));
        }
    }

    if main.num_parcels < 1 {
        report.error("Number of parcels must be at least 1");
    }

    for p in &form.parcels {
        let n = p.parcel_no;

        check_non_negative(&mut report, &format!("Parcel {}: Total Acres", n), p.total_acres);
        check_non_negative(
            &mut report,
            &format!("Parcel {}: Developed Acres", n),
            p.developed_acres,
        );
        check_non_negative(
            &mut report,
            &format!("Parcel {}: Irrigated Area", n),
            p.irrigated_area,
        );

        // Developed land beyond the parcel size is a hard error; irrigation
        // beyond it is unusual but possible, so it only warns.
        if p.developed_acres > p.total_acres {
            report.error(format!(
                "Parcel {}: Developed Acres ({}) exceeds Total Acres ({})",
                n, p.developed_acres, p.total_acres
            ));
        }
        if p.irrigated_area > p.total_acres {
            report.warning(format!(
                "Parcel {}: Irrigated Area ({}) exceeds Total Acres ({})",
                n, p.irrigated_area, p.total_acres
            ));
        }

        if !TENURE_OPTIONS.contains(&p.tenure.as_str()) {
            report.error(format!("Parcel {}: tenure '{}' is not a recognised option", n, p.tenure));
        }
        if !USE_OF_LAND_OPTIONS.contains(&p.use_of_land.as_str()) {
            report.error(format!(
                "Parcel {}: use of land '{}' is not a recognised option",
                n, p.use_of_land
            ));
        }
        if !LAND_CLEARING_OPTIONS.contains(&p.land_clearing.as_str()) {
            report.error(format!(
                "Parcel {}: land clearing '{}' is not a recognised option",
                n, p.land_clearing
            ));
        }
    }

    report
}

/// Upsert the parent record, then replace the parcel set, all inside one
/// transaction. Returns the number of parcels written.
pub fn replace(pool: &mut DbPool, holder_id: i64, form: &LandUseForm) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;

    let mut main = form.main.clone();
    main.num_parcels = form.parcels.len() as i64;

    let land_use_id = q::upsert_main(&tx, holder_id, &main)?;
    q::delete_parcels(&tx, land_use_id)?;
    for p in &form.parcels {
        q::insert_parcel(&tx, land_use_id, p)?;
    }

    tx.commit()?;
    Ok(form.parcels.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> LandUseForm {
        let mut f = defaults();
        f.main.total_area_acres = 12.0;
        f.main.crop_methods = vec!["Open Field".to_string()];
        f.main.location = "North Andros".to_string();
        f.parcels[0].total_acres = 12.0;
        f.parcels[0].developed_acres = 5.0;
        f.parcels[0].irrigated_area = 3.0;
        f
    }

    #[test]
    fn well_formed_submission_is_clean() {
        let report = validate(&form());
        assert!(report.is_clean());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn developed_over_total_is_a_hard_error() {
        let mut f = form();
        f.parcels[0].developed_acres = 20.0;

        let report = validate(&f);
        assert!(!report.is_clean());
        assert!(report.errors[0].contains("Developed Acres"));
    }

    #[test]
    fn irrigated_over_total_only_warns() {
        let mut f = form();
        f.parcels[0].irrigated_area = 20.0;

        let report = validate(&f);
        assert!(report.is_clean());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn blank_location_is_rejected() {
        let mut f = form();
        f.main.location = "   ".to_string();

        let report = validate(&f);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Location cannot be empty"));
    }

    #[test]
    fn unknown_tenure_is_rejected() {
        let mut f = form();
        f.parcels[0].tenure = "Rented from a friend".to_string();

        let report = validate(&f);
        assert_eq!(report.errors.len(), 1);
    }
}
