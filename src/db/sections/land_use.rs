use crate::errors::AppResult;
use crate::models::land_use::{LandUse, Parcel};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_main(row: &Row) -> rusqlite::Result<LandUse> {
    let methods_json: String = row.get("crop_methods")?;

    // crop_methods is stored as a JSON array of strings
    let crop_methods: Vec<String> = serde_json::from_str(&methods_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(LandUse {
        id: row.get("id")?,
        total_area_acres: row.get("total_area_acres")?,
        years_agriculture: row.get("years_agriculture")?,
        main_purpose: row.get("main_purpose")?,
        num_parcels: row.get("num_parcels")?,
        location: row.get("location")?,
        crop_methods,
    })
}

fn map_parcel(row: &Row) -> rusqlite::Result<Parcel> {
    Ok(Parcel {
        id: row.get("id")?,
        parcel_no: row.get("parcel_no")?,
        total_acres: row.get("total_acres")?,
        developed_acres: row.get("developed_acres")?,
        tenure: row.get("tenure")?,
        use_of_land: row.get("use_of_land")?,
        irrigated_area: row.get("irrigated_area")?,
        land_clearing: row.get("land_clearing")?,
    })
}

/// Parent land use record for a holder, if one was saved.
pub fn load_main(conn: &Connection, holder_id: i64) -> AppResult<Option<LandUse>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, total_area_acres, years_agriculture, main_purpose,
                num_parcels, location, crop_methods
         FROM land_use
         WHERE holder_id = ?1",
    )?;

    Ok(stmt.query_row([holder_id], map_main).optional()?)
}

/// Parcels for a holder's land use record, in parcel order.
pub fn load_parcels(conn: &Connection, land_use_id: i64) -> AppResult<Vec<Parcel>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, parcel_no, total_acres, developed_acres, tenure,
                use_of_land, irrigated_area, land_clearing
         FROM land_use_parcels
         WHERE land_use_id = ?1
         ORDER BY parcel_no ASC",
    )?;

    let rows = stmt.query_map([land_use_id], map_parcel)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Update-or-insert the parent record; returns the land_use row id.
pub fn upsert_main(conn: &Connection, holder_id: i64, main: &LandUse) -> AppResult<i64> {
    let methods_json = serde_json::to_string(&main.crop_methods)?;

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM land_use WHERE holder_id = ?1",
            [holder_id],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(id) = existing {
        conn.execute(
            "UPDATE land_use
             SET total_area_acres = ?1, years_agriculture = ?2, main_purpose = ?3,
                 num_parcels = ?4, location = ?5, crop_methods = ?6
             WHERE id = ?7",
            params![
                main.total_area_acres,
                main.years_agriculture,
                main.main_purpose,
                main.num_parcels,
                main.location,
                methods_json,
                id,
            ],
        )?;
        Ok(id)
    } else {
        conn.execute(
            "INSERT INTO land_use
             (holder_id, total_area_acres, years_agriculture, main_purpose,
              num_parcels, location, crop_methods)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                holder_id,
                main.total_area_acres,
                main.years_agriculture,
                main.main_purpose,
                main.num_parcels,
                main.location,
                methods_json,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

pub fn insert_parcel(conn: &Connection, land_use_id: i64, p: &Parcel) -> AppResult<()> {
    conn.execute(
        "INSERT INTO land_use_parcels
         (land_use_id, parcel_no, total_acres, developed_acres, tenure,
          use_of_land, irrigated_area, land_clearing)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            land_use_id,
            p.parcel_no,
            p.total_acres,
            p.developed_acres,
            p.tenure,
            p.use_of_land,
            p.irrigated_area,
            p.land_clearing,
        ],
    )?;
    Ok(())
}

pub fn delete_parcels(conn: &Connection, land_use_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM land_use_parcels WHERE land_use_id = ?1",
        [land_use_id],
    )?;
    Ok(n)
}
