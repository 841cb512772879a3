pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9. / 5. + 32.
}

/// One decimal place, rounding on the exact binary value with ties away
/// from zero. `{:.1}` alone breaks ties to even.
pub fn one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let magnitude = value.abs();
    // 60 fractional digits is enough to print any f64 near a tie exactly
    let exact = format!("{:.60}", magnitude);
    let is_tie = match exact.find('.') {
        Some(dot) => {
            let fraction = &exact[dot + 1..];
            fraction.get(1..2) == Some("5") && fraction[2..].bytes().all(|d| d == b'0')
        }
        None => false,
    };

    let rounded = if is_tie {
        format!("{:.1}", magnitude + 0.05)
    }
    else {
        format!("{:.1}", magnitude)
    };

    if value < 0. {
        format!("-{}", rounded)
    }
    else {
        rounded
    }
}

pub fn format_room_temp(celsius: f64) -> String {
    format!("{} °C", one_decimal(celsius))
}

pub fn format_humidity(percent: f64) -> String {
    format!("{} %", one_decimal(percent))
}

/// Body temperature is measured in celsius but shown in fahrenheit.
pub fn format_body_temp(celsius: f64) -> String {
    format!("{} °F", one_decimal(celsius_to_fahrenheit(celsius)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_temperature_in_fahrenheit() {
        assert_eq!(format_body_temp(37.0), "98.6 °F");
        assert_eq!(format_body_temp(0.0), "32.0 °F");
        assert_eq!(format_body_temp(-40.0), "-40.0 °F");
    }

    #[test]
    fn room_temperature_rounds_to_one_decimal() {
        assert_eq!(format_room_temp(21.05), "21.1 °C");
        assert_eq!(format_room_temp(21.0), "21.0 °C");
        assert_eq!(format_room_temp(19.94), "19.9 °C");
    }

    #[test]
    fn humidity_has_percent_suffix() {
        assert_eq!(format_humidity(45.0), "45.0 %");
        assert_eq!(format_humidity(62.37), "62.4 %");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        // DS18B20 readings come in 1/16 degree steps, so ties are common
        assert_eq!(format_body_temp(36.25), "97.3 °F");
        assert_eq!(format_room_temp(21.25), "21.3 °C");
        assert_eq!(format_room_temp(-0.25), "-0.3 °C");
        assert_eq!(format_humidity(45.75), "45.8 %");
        assert_eq!(one_decimal(0.05), "0.1");
        assert_eq!(one_decimal(-1.25), "-1.3");
    }

    #[test]
    fn near_ties_follow_the_stored_value() {
        // 1.15 and 1.45 are stored just below the tie, 2.35 just above it
        assert_eq!(one_decimal(1.15), "1.1");
        assert_eq!(one_decimal(1.45), "1.4");
        assert_eq!(one_decimal(2.35), "2.4");
        assert_eq!(one_decimal(1.005), "1.0");
    }

    #[test]
    fn small_negatives_keep_their_sign() {
        assert_eq!(one_decimal(-0.04), "-0.0");
        assert_eq!(one_decimal(0.0), "0.0");
        assert_eq!(one_decimal(-0.0), "0.0");
    }

    #[test]
    fn conversion_formula() {
        assert_eq!(celsius_to_fahrenheit(100.), 212.);
    }
}
