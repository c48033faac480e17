use crate::analyzers::types::BatchStats;

/// Separator between secondary condition labels.
pub const CONDITION_SEPARATOR: &str = ", ";

/// Renders the one-line day description.
///
/// | Clause                                     | Present when              |
/// |--------------------------------------------|---------------------------|
/// | dominant condition, average temperature    | always                    |
/// | total precipitation                        | total precipitation > 0   |
/// | precipitation hours                        | ... and hours > 0         |
/// | max hourly precipitation                   | ... and max > 0           |
/// | average and max wind speed                 | max wind speed > 0        |
/// | "Also occurred: ..."                       | any secondary condition   |
pub fn describe(dominant: &str, others: &[String], stats: &BatchStats) -> String {
    let mut description = format!(
        "Today's weather is dominated by {dominant}, average temperature {:.1}°C",
        stats.average_temperature
    );

    if stats.total_precipitation > 0.0 {
        description.push_str(&format!(
            ", total precipitation {:.1} mm",
            stats.total_precipitation
        ));
        match stats.precipitation_hours {
            0 => {}
            1 => description.push_str(", precipitation lasted 1 hour"),
            hours => description.push_str(&format!(", precipitation lasted {hours} hours")),
        }
        if stats.max_precipitation > 0.0 {
            description.push_str(&format!(
                ", max hourly precipitation {:.1} mm",
                stats.max_precipitation
            ));
        }
    }

    if stats.max_wind_speed > 0.0 {
        description.push_str(&format!(
            ", average wind speed {:.1} m/s, max wind speed {:.1} m/s",
            stats.average_wind_speed, stats.max_wind_speed
        ));
    }
    description.push('.');

    if !others.is_empty() {
        description.push_str(" Also occurred: ");
        description.push_str(&others.join(CONDITION_SEPARATOR));
        description.push('.');
    }

    description
}
