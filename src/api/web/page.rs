//! HTML rendering of the prediction page

use super::styles::STYLESHEET;
use crate::domain::{FeatureControl, PatientSample, ResultPanel, FEATURE_CONTROLS};
use crate::infrastructure::services::Prediction;

/// Everything one render pass of the page needs
#[derive(Debug)]
pub struct PageView<'a> {
    pub models: Vec<&'a str>,
    pub selected_model: &'a str,
    pub sample: PatientSample,
    pub prediction: Option<&'a Prediction>,
    pub error: Option<&'a str>,
}

/// Escape text for HTML element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

fn sample_value(sample: &PatientSample, control: &FeatureControl) -> u32 {
    match control.key {
        "age" => sample.age,
        "systolic_bp" => sample.systolic_bp,
        "diastolic_bp" => sample.diastolic_bp,
        "cholesterol" => sample.cholesterol,
        _ => control.default,
    }
}

fn render_model_selector(models: &[&str], selected: &str) -> String {
    let options: String = models
        .iter()
        .map(|name| {
            let checked = if *name == selected { " checked" } else { "" };
            format!(
                r#"<div><label><input type="radio" name="model" value="{0}"{1}> {0}</label></div>"#,
                escape_html(name),
                checked
            )
        })
        .collect();

    format!(
        r#"<aside class="sidebar">
<h2>🔍 Model Selection</h2>
<p>Choose a model:</p>
{}
</aside>"#,
        options
    )
}

fn render_slider(control: &FeatureControl, value: u32) -> String {
    let help = control
        .help
        .map(|h| format!(r#" title="{}""#, escape_html(h)))
        .unwrap_or_default();

    format!(
        r#"<div class="control">
<label for="{key}"{help}>{label}: <output id="{key}-value">{value}</output></label>
<input type="range" id="{key}" name="{key}" min="{min}" max="{max}" step="{step}" value="{value}" oninput="document.getElementById('{key}-value').value = this.value">
<div class="bounds"><span>{min}</span><span>{max}</span></div>
</div>"#,
        key = control.key,
        help = help,
        label = escape_html(control.label),
        value = value,
        min = control.min,
        max = control.max,
        step = control.step,
    )
}

/// Styled result card with class-conditional treatment
pub fn render_result_card(panel: &ResultPanel) -> String {
    format!(
        r#"<div class="result-card {}">
<b>{}</b><br>
{}<br>
<i>{}</i>
</div>"#,
        panel.risk.css_class(),
        escape_html(&panel.headline),
        escape_html(&panel.confidence),
        escape_html(&panel.model_used)
    )
}

fn render_download_form(prediction: &Prediction) -> String {
    let sample = &prediction.sample;

    format!(
        r#"<form method="get" action="/predict/csv">
<input type="hidden" name="model" value="{}">
<input type="hidden" name="age" value="{}">
<input type="hidden" name="systolic_bp" value="{}">
<input type="hidden" name="diastolic_bp" value="{}">
<input type="hidden" name="cholesterol" value="{}">
<button type="submit" class="download-button">📥 Download Result as CSV</button>
</form>"#,
        escape_html(&prediction.result.model_name),
        sample.age,
        sample.systolic_bp,
        sample.diastolic_bp,
        sample.cholesterol
    )
}

fn render_result_section(prediction: &Prediction) -> String {
    format!(
        r#"<hr>
<section class="panel">
<h2>📊 Prediction Result</h2>
{}
{}
</section>"#,
        render_result_card(&prediction.panel()),
        render_download_form(prediction)
    )
}

/// Render the full page: selector, sliders, and the result when present
pub fn render_page(view: &PageView<'_>) -> String {
    let (left, right) = FEATURE_CONTROLS.split_at(2);
    let column = |controls: &[FeatureControl]| -> String {
        controls
            .iter()
            .map(|c| render_slider(c, sample_value(&view.sample, c)))
            .collect()
    };

    let error = view
        .error
        .map(|message| {
            format!(
                r#"<div class="error-card"><b>Unable to predict</b><br>{}</div>"#,
                escape_html(message)
            )
        })
        .unwrap_or_default();

    let result = view
        .prediction
        .map(render_result_section)
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Diabetic Retinopathy Predictor</title>
<style>{stylesheet}</style>
</head>
<body>
<form method="post" action="/predict">
<div class="layout">
{selector}
<main class="main">
<h1 class="header">🩺 Diabetic Retinopathy Prediction</h1>
<p class="intro">Enter patient details below and select a model to get a prediction.</p>
<hr>
{error}
<section class="panel">
<h2>👤 Patient Information</h2>
<div class="columns">
<div>{left}</div>
<div>{right}</div>
</div>
<p><button type="submit" class="button" title="Click to get the prediction based on your entered data">🔮 Predict</button></p>
</section>
</main>
</div>
</form>
<div class="layout"><div class="main">{result}</div></div>
</body>
</html>"#,
        stylesheet = STYLESHEET,
        selector = render_model_selector(&view.models, view.selected_model),
        error = error,
        left = column(left),
        right = column(right),
        result = result,
    )
}
