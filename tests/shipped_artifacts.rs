//! End-to-end checks against the artifacts shipped in `models/`

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web, App};
use fwi_predictor::config::ModelsConfig;
use fwi_predictor::models::loader::ModelLoader;
use fwi_predictor::{server, InferenceEngine, Observation};
use std::path::Path;

fn shipped_engine() -> InferenceEngine {
    let models_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("models");
    let loaded = ModelLoader::from_config(&ModelsConfig {
        models_dir: models_dir.to_string_lossy().into_owned(),
        ..ModelsConfig::default()
    })
    .load_all()
    .expect("shipped artifacts load");

    InferenceEngine::new(loaded.scaler, loaded.model).expect("shipped artifacts match schema")
}

fn scenario() -> Observation {
    Observation {
        temperature: 29.0,
        rh: 57.0,
        ws: 18.0,
        rain: 0.0,
        ffmc: 65.7,
        dmc: 3.4,
        isi: 1.3,
        classes: 0.0,
        region: 1.0,
    }
}

#[test]
fn scenario_prediction_is_finite_and_stable() {
    let engine = shipped_engine();

    let first = engine.predict(&scenario()).unwrap();
    let second = engine.predict(&scenario()).unwrap();

    assert!(first.fwi.is_finite());
    assert_eq!(first, second);
}

#[actix_web::test]
async fn scenario_over_http_embeds_one_number() {
    let engine = shipped_engine();
    let expected = engine.predict(&scenario()).unwrap();
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(engine))
            .configure(server::configure),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/predictdata")
        .set_form([
            ("Temperature", "29"),
            ("Rh", "57"),
            ("Ws", "18"),
            ("Rain", "0"),
            ("FFMC", "65.7"),
            ("DMC", "3.4"),
            ("ISI", "1.3"),
            ("Classes", "0"),
            ("Region", "1"),
        ])
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = actix_test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    let marker = r#"<span id="prediction">"#;
    assert_eq!(body.matches(marker).count(), 1);

    let start = body.find(marker).unwrap() + marker.len();
    let end = start + body[start..].find("</span>").unwrap();
    let fwi: f64 = body[start..end].parse().unwrap();
    assert!(fwi.is_finite());
    assert_eq!(fwi, expected.fwi);
}
