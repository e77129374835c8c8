//! Home page rendering

use crate::types::prediction::Prediction;

const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");
const RESULTS_SLOT: &str = "{{ results }}";

/// Render the input form, with the prediction appended when there is one
pub fn render_home(prediction: Option<&Prediction>) -> String {
    let results = match prediction {
        Some(prediction) => format!(
            r#"    <h2 class="result">The FWI prediction is <span id="prediction">{prediction}</span></h2>"#
        ),
        None => String::new(),
    };
    HOME_TEMPLATE.replace(RESULTS_SLOT, &results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_without_prediction() {
        let page = render_home(None);

        assert!(page.contains(r#"action="/predictdata""#));
        assert!(!page.contains(RESULTS_SLOT));
        assert!(!page.contains(r#"id="prediction""#));
    }

    #[test]
    fn test_form_lists_every_field() {
        let page = render_home(None);
        for name in crate::types::observation::FEATURE_NAMES {
            assert!(page.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
    }

    #[test]
    fn test_prediction_embedded() {
        let page = render_home(Some(&Prediction::new(3.125)));

        assert!(page.contains(r#"<span id="prediction">3.125</span>"#));
        assert!(!page.contains(RESULTS_SLOT));
    }
}
