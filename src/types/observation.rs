//! Weather observation submitted for FWI prediction

use crate::error::FormError;

/// Number of model input features
pub const FEATURE_COUNT: usize = 9;

/// Form field names, in the column order the artifacts were fitted with
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Temperature",
    "Rh",
    "Ws",
    "Rain",
    "FFMC",
    "DMC",
    "ISI",
    "Classes",
    "Region",
];

/// A validated observation, one value per model feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Noon temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub rh: f64,
    /// Wind speed (km/h)
    pub ws: f64,
    /// Total daily rain (mm)
    pub rain: f64,
    /// Fine Fuel Moisture Code
    pub ffmc: f64,
    /// Duff Moisture Code
    pub dmc: f64,
    /// Initial Spread Index
    pub isi: f64,
    /// Fire class (0 = not fire, 1 = fire)
    pub classes: f64,
    /// Region (0 = Bejaia, 1 = Sidi-Bel Abbes)
    pub region: f64,
}

impl Observation {
    /// Feature values in `FEATURE_NAMES` order
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.temperature,
            self.rh,
            self.ws,
            self.rain,
            self.ffmc,
            self.dmc,
            self.isi,
            self.classes,
            self.region,
        ]
    }
}

/// Form fields as submitted, before validation
#[derive(Debug, Clone, Default)]
pub struct RawObservation {
    pub temperature: Option<String>,
    pub rh: Option<String>,
    pub ws: Option<String>,
    pub rain: Option<String>,
    pub ffmc: Option<String>,
    pub dmc: Option<String>,
    pub isi: Option<String>,
    pub classes: Option<String>,
    pub region: Option<String>,
}

impl RawObservation {
    /// Collect form pairs by exact field name.
    ///
    /// The first occurrence of a repeated field wins; unknown names are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "Temperature" => &mut raw.temperature,
                "Rh" => &mut raw.rh,
                "Ws" => &mut raw.ws,
                "Rain" => &mut raw.rain,
                "FFMC" => &mut raw.ffmc,
                "DMC" => &mut raw.dmc,
                "ISI" => &mut raw.isi,
                "Classes" => &mut raw.classes,
                "Region" => &mut raw.region,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        raw
    }
}

impl TryFrom<RawObservation> for Observation {
    type Error = FormError;

    /// Fields are checked in `FEATURE_NAMES` order; the first failure is reported.
    fn try_from(raw: RawObservation) -> Result<Self, Self::Error> {
        Ok(Self {
            temperature: parse_field("Temperature", raw.temperature)?,
            rh: parse_field("Rh", raw.rh)?,
            ws: parse_field("Ws", raw.ws)?,
            rain: parse_field("Rain", raw.rain)?,
            ffmc: parse_field("FFMC", raw.ffmc)?,
            dmc: parse_field("DMC", raw.dmc)?,
            isi: parse_field("ISI", raw.isi)?,
            classes: parse_field("Classes", raw.classes)?,
            region: parse_field("Region", raw.region)?,
        })
    }
}

fn parse_field(field: &'static str, value: Option<String>) -> Result<f64, FormError> {
    let value = value.ok_or(FormError::MissingField(field))?;
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(FormError::InvalidNumber { field, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: [&str; FEATURE_COUNT]) -> RawObservation {
        let [temperature, rh, ws, rain, ffmc, dmc, isi, classes, region] =
            values.map(|v| Some(v.to_string()));
        RawObservation {
            temperature,
            rh,
            ws,
            rain,
            ffmc,
            dmc,
            isi,
            classes,
            region,
        }
    }

    #[test]
    fn test_parse_keeps_field_order() {
        let obs = Observation::try_from(raw([
            "29", "57", "18", "0", "65.7", "3.4", "1.3", "0", "1",
        ]))
        .unwrap();

        assert_eq!(
            obs.to_array(),
            [29.0, 57.0, 18.0, 0.0, 65.7, 3.4, 1.3, 0.0, 1.0]
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let obs = Observation::try_from(raw([
            " 29 ", "57\n", "18", "0", "65.7", "3.4", "1.3", "0", "1",
        ]))
        .unwrap();
        assert_eq!(obs.temperature, 29.0);
        assert_eq!(obs.rh, 57.0);
    }

    #[test]
    fn test_missing_field() {
        let mut input = raw(["29", "57", "18", "0", "65.7", "3.4", "1.3", "0", "1"]);
        input.dmc = None;

        assert_eq!(
            Observation::try_from(input),
            Err(FormError::MissingField("DMC"))
        );
    }

    #[test]
    fn test_non_numeric_field() {
        let input = raw(["29", "humid", "18", "0", "65.7", "3.4", "1.3", "0", "1"]);

        assert_eq!(
            Observation::try_from(input),
            Err(FormError::InvalidNumber {
                field: "Rh",
                value: "humid".to_string()
            })
        );
    }

    #[test]
    fn test_empty_and_non_finite_values_rejected() {
        for bad in ["", "NaN", "inf", "-infinity"] {
            let input = raw(["29", "57", "18", bad, "65.7", "3.4", "1.3", "0", "1"]);
            assert!(
                matches!(
                    Observation::try_from(input),
                    Err(FormError::InvalidNumber { field: "Rain", .. })
                ),
                "value {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let raw = RawObservation::from_pairs([("temperature", "29"), ("Rh", "57")]);
        assert!(raw.temperature.is_none());
        assert_eq!(raw.rh.as_deref(), Some("57"));
    }

    #[test]
    fn test_repeated_field_keeps_first_value() {
        let raw = RawObservation::from_pairs([
            ("Temperature", "29"),
            ("Temperature", "30"),
            ("Unrelated", "x"),
        ]);
        assert_eq!(raw.temperature.as_deref(), Some("29"));
        assert!(raw.rh.is_none());
    }
}
