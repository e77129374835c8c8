//! Multipart form shape of the prediction request

use crate::types::observation::RawObservation;
use actix_multipart::form::{text::Text, MultipartForm};

/// Fields of a `multipart/form-data` submission
#[derive(MultipartForm)]
pub struct MultipartObservation {
    #[multipart(rename = "Temperature")]
    temperature: Option<Text<String>>,
    #[multipart(rename = "Rh")]
    rh: Option<Text<String>>,
    #[multipart(rename = "Ws")]
    ws: Option<Text<String>>,
    #[multipart(rename = "Rain")]
    rain: Option<Text<String>>,
    #[multipart(rename = "FFMC")]
    ffmc: Option<Text<String>>,
    #[multipart(rename = "DMC")]
    dmc: Option<Text<String>>,
    #[multipart(rename = "ISI")]
    isi: Option<Text<String>>,
    #[multipart(rename = "Classes")]
    classes: Option<Text<String>>,
    #[multipart(rename = "Region")]
    region: Option<Text<String>>,
}

impl From<MultipartObservation> for RawObservation {
    fn from(form: MultipartObservation) -> Self {
        fn text(field: Option<Text<String>>) -> Option<String> {
            field.map(|text| text.0)
        }

        Self {
            temperature: text(form.temperature),
            rh: text(form.rh),
            ws: text(form.ws),
            rain: text(form.rain),
            ffmc: text(form.ffmc),
            dmc: text(form.dmc),
            isi: text(form.isi),
            classes: text(form.classes),
            region: text(form.region),
        }
    }
}
