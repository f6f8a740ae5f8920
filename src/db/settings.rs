use crate::errors::{AppError, AppResult};
use crate::models::company_settings::CompanySettings;
use rusqlite::{Connection, OptionalExtension, params};

/// Read the singleton settings row; defaults apply when it is missing or
/// holds a non-positive standard day.
pub fn load_settings(conn: &Connection) -> AppResult<CompanySettings> {
    let row = conn
        .query_row(
            "SELECT standard_hours_per_day, company_name, company_nif
             FROM company_settings WHERE id = 1",
            [],
            |r| {
                Ok((
                    r.get::<_, Option<f64>>(0)?,
                    r.get::<_, Option<String>>(1)?,
                    r.get::<_, Option<String>>(2)?,
                ))
            },
        )
        .optional()?;

    let defaults = CompanySettings::default();

    Ok(match row {
        None => defaults,
        Some((hours, company_name, company_nif)) => CompanySettings {
            standard_hours_per_day: hours
                .filter(|h| *h > 0.0)
                .unwrap_or(defaults.standard_hours_per_day),
            company_name,
            company_nif,
        },
    })
}

pub fn save_settings(conn: &Connection, s: &CompanySettings) -> AppResult<()> {
    if !(s.standard_hours_per_day > 0.0 && s.standard_hours_per_day <= 24.0) {
        return Err(AppError::InvalidHours(s.standard_hours_per_day.to_string()));
    }

    conn.execute(
        "INSERT INTO company_settings (id, standard_hours_per_day, company_name, company_nif)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
            standard_hours_per_day = excluded.standard_hours_per_day,
            company_name           = excluded.company_name,
            company_nif            = excluded.company_nif",
        params![s.standard_hours_per_day, s.company_name, s.company_nif],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    #[test]
    fn defaults_then_roundtrip() {
        let pool = DbPool::in_memory().unwrap();
        assert_eq!(load_settings(&pool.conn).unwrap(), CompanySettings::default());

        let s = CompanySettings {
            standard_hours_per_day: 7.5,
            company_name: Some("ACME Lda".into()),
            company_nif: Some("501234567".into()),
        };
        save_settings(&pool.conn, &s).unwrap();
        assert_eq!(load_settings(&pool.conn).unwrap(), s);
    }

    #[test]
    fn missing_row_falls_back_to_eight_hours() {
        let pool = DbPool::in_memory().unwrap();
        pool.conn.execute("DELETE FROM company_settings", []).unwrap();
        assert_eq!(load_settings(&pool.conn).unwrap().standard_hours_per_day, 8.0);
    }

    #[test]
    fn rejects_nonsense_hours() {
        let pool = DbPool::in_memory().unwrap();
        let s = CompanySettings {
            standard_hours_per_day: 0.0,
            ..Default::default()
        };
        assert!(matches!(save_settings(&pool.conn, &s), Err(AppError::InvalidHours(_))));
    }
}
