//! HTTP request handlers

use crate::error::ApiError;
use crate::models::inference::InferenceEngine;
use crate::server::multipart::MultipartObservation;
use crate::server::page::render_home;
use crate::types::observation::{Observation, RawObservation};
use actix_multipart::form::MultipartForm;
use actix_web::http::header::ContentType;
use actix_web::{web, Either, HttpResponse};
use tracing::{info, warn};

/// Prediction form body, urlencoded pairs or multipart
pub type PredictForm =
    Either<web::Form<Vec<(String, String)>>, MultipartForm<MultipartObservation>>;

/// Register the page and prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/predictdata", web::get().to(index))
        .route("/predictdata", web::post().to(predict_datapoint));
}

/// Serve the input form without a prediction
pub async fn index() -> HttpResponse {
    html(render_home(None))
}

/// Validate the submitted fields, predict, and render the result
pub async fn predict_datapoint(
    engine: web::Data<InferenceEngine>,
    form: PredictForm,
) -> Result<HttpResponse, ApiError> {
    let raw = match form {
        Either::Left(form) => RawObservation::from_pairs(form.into_inner()),
        Either::Right(form) => form.into_inner().into(),
    };

    let obs = Observation::try_from(raw).map_err(|e| {
        warn!(error = %e, "Rejected prediction request");
        e
    })?;
    let prediction = engine.predict(&obs)?;

    info!(fwi = prediction.fwi, "Served prediction");
    Ok(html(render_home(Some(&prediction))))
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}
