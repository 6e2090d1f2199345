//! Console report rendering
//!
//! Renders stored observations as a grid table with the fixed column
//! headers the report has always carried, plus the location/date headline
//! printed above it.

use application::ports::StoredObservation;
use domain::query::ObservationQuery;
use domain::value_objects::{CalendarDate, GeoLocation};

/// Fixed report column headers, in table order
pub const HEADERS: [&str; 16] = [
    "ID",
    "Month",
    "Day",
    "Year",
    "Daily_Temp (F)",
    "Avg_Temp (F)",
    "Max_Temp (F)",
    "Min_Temp (F)",
    "Daily_Wind_Speed (mph)",
    "Avg_Wind_Speed (mph)",
    "Max_Wind_Speed (mph)",
    "Min_Wind_Speed (mph)",
    "Daily_Precipitation (inches)",
    "Sum_Precipitation (inches)",
    "Max_Precipitation (inches)",
    "Min_Precipitation (inches)",
];

/// One observation row formatted into table cells
fn row_cells(obs: &StoredObservation) -> [String; 16] {
    [
        obs.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
        obs.month.to_string(),
        obs.day.to_string(),
        obs.year.to_string(),
        format!("{:.2}", obs.temperature),
        format!("{:.2}", obs.avg_temperature),
        format!("{:.2}", obs.max_temperature),
        format!("{:.2}", obs.min_temperature),
        format!("{:.2}", obs.wind_speed),
        format!("{:.2}", obs.avg_wind_speed),
        format!("{:.2}", obs.max_wind_speed),
        format!("{:.2}", obs.min_wind_speed),
        format!("{:.2}", obs.precipitation),
        format!("{:.2}", obs.sum_precipitation),
        format!("{:.2}", obs.max_precipitation),
        format!("{:.2}", obs.min_precipitation),
    ]
}

/// Render a grid table over the given rows
///
/// Column widths are computed from the widest cell per column, headers
/// included. An empty slice renders the header grid with no data rows.
#[must_use]
pub fn render_table(rows: &[StoredObservation]) -> String {
    let cells: Vec<[String; 16]> = rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let border = |fill: char| {
        let mut line = String::from("+");
        for width in &widths {
            for _ in 0..width + 2 {
                line.push(fill);
            }
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(&widths) {
            line.push(' ');
            line.push_str(cell);
            for _ in cell.len()..*width {
                line.push(' ');
            }
            line.push_str(" |");
        }
        line
    };

    let header_cells: Vec<String> = HEADERS.iter().map(|h| (*h).to_string()).collect();

    let mut out = String::new();
    out.push_str(&border('-'));
    out.push('\n');
    out.push_str(&format_row(&header_cells));
    out.push('\n');
    out.push_str(&border('='));
    for row in &cells {
        out.push('\n');
        out.push_str(&format_row(row));
        out.push('\n');
        out.push_str(&border('-'));
    }
    out
}

/// Human-readable headline naming the report's location, date and years
///
/// The default location and date keep their familiar names.
#[must_use]
pub fn headline(query: &ObservationQuery) -> String {
    let is_new_orleans = query.location() == GeoLocation::new_orleans();
    let is_halloween = query.date() == CalendarDate::halloween();
    let years = format_years(query.years());

    match (is_new_orleans, is_halloween) {
        (true, true) => format!("Weather data for Halloween in New Orleans for years: {years}"),
        (true, false) => format!(
            "Weather data for {} in New Orleans for years: {years}",
            query.date()
        ),
        (false, true) => format!(
            "Weather data for Halloween at {} for years: {years}",
            query.location()
        ),
        (false, false) => format!(
            "Weather data for {} at {} for years: {years}",
            query.date(),
            query.location()
        ),
    }
}

fn format_years(years: &[i32]) -> String {
    let list: Vec<String> = years.iter().map(ToString::to_string).collect();
    format!("[{}]", list.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    fn observation(id: i64, year: i32) -> StoredObservation {
        StoredObservation {
            id: Some(id),
            latitude: 29.9547,
            longitude: -90.0751,
            month: 10,
            day: 31,
            year,
            temperature: 71.35,
            avg_temperature: 65.0,
            max_temperature: 71.35,
            min_temperature: 58.65,
            wind_speed: 9.8,
            avg_wind_speed: 10.0,
            max_wind_speed: 12.3,
            min_wind_speed: 7.7,
            precipitation: 0.012,
            sum_precipitation: 0.3,
            max_precipitation: 0.2,
            min_precipitation: 0.0,
        }
    }

    fn halloween_query(years: Vec<i32>) -> ObservationQuery {
        ObservationQuery::new(GeoLocation::new_orleans(), CalendarDate::halloween(), years)
            .expect("valid query")
    }

    #[test]
    fn table_carries_all_fixed_headers_in_order() {
        let table = render_table(&[observation(1, 2024)]);
        let mut position = 0;
        for header in HEADERS {
            let found = table[position..].find(header).expect("header present");
            position += found;
        }
    }

    #[test]
    fn table_has_one_data_row_per_observation() {
        let table = render_table(&[observation(1, 2023), observation(2, 2024)]);
        let data_rows = table
            .lines()
            .filter(|l| l.starts_with("| 1 ") || l.starts_with("| 2 "))
            .count();
        assert_eq!(data_rows, 2);
    }

    #[test]
    fn table_cells_are_formatted_to_two_decimals() {
        let table = render_table(&[observation(1, 2024)]);
        assert!(table.contains("71.35"));
        assert!(table.contains("0.01"));
    }

    #[test]
    fn empty_rows_render_header_grid_only() {
        let table = render_table(&[]);
        assert!(table.contains("ID"));
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn table_lines_have_uniform_width() {
        let table = render_table(&[observation(1, 2023), observation(2, 2024)]);
        let widths: Vec<usize> = table.lines().map(str::len).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn headline_for_default_location_and_date() {
        let headline = headline(&halloween_query(vec![2023, 2024]));
        assert_eq!(
            headline,
            "Weather data for Halloween in New Orleans for years: [2023, 2024]"
        );
    }

    #[test]
    fn headline_for_custom_location() -> Result<(), DomainError> {
        let query = ObservationQuery::new(
            GeoLocation::new(40.7128, -74.0060)?,
            CalendarDate::halloween(),
            vec![2024],
        )?;
        let headline = headline(&query);
        assert!(headline.contains("Halloween at 40.7128, -74.0060"));
        Ok(())
    }

    #[test]
    fn headline_for_custom_date() -> Result<(), DomainError> {
        let query = ObservationQuery::new(
            GeoLocation::new_orleans(),
            CalendarDate::new(7, 4)?,
            vec![2024],
        )?;
        assert!(headline(&query).contains("07-04 in New Orleans"));
        Ok(())
    }
}
