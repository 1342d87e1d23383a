use clinical_domain::{FEATURES, FeatureDomain};
use eframe::egui;
use risk_view::format_probability;

use crate::chart_view;
use crate::controller::{Controller, PredictorSession};
use crate::state::{AppState, FieldState, UiState};

const ALERT_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 99, 71);
const OK_COLOR: egui::Color32 = egui::Color32::from_rgb(60, 179, 113);

pub struct PredictorApp {
    session: PredictorSession,
    state: AppState,
}

impl PredictorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: PredictorSession) -> Self {
        Self { session, state: AppState::default() }
    }

    fn render_sidebar(&self, ui: &mut egui::Ui) {
        ui.heading("Heart Disease Predictor");
        ui.label("Estimate the likelihood of heart disease based on patient health metrics.");
        ui.separator();

        ui.strong("Model Details");
        ui.label(format!("Algorithm: trained {} classifier", self.session.model().kind()));
        ui.label("Features: age, cholesterol, BP, ECG, and more");
        ui.label("Output: binary prediction plus probability score");
        ui.separator();

        ui.strong("Disclaimer");
        ui.label(
            "This app is for educational/demo purposes only. It is not a medical \
             diagnostic tool. Always consult qualified healthcare professionals.",
        );
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Patient Clinical Parameters");
        egui::Grid::new("parameter_form")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for (field, feature) in self.state.form.fields.iter_mut().zip(FEATURES.iter()) {
                    ui.label(feature.label);
                    match (feature.domain, field) {
                        (FeatureDomain::Numeric { min, max, step, .. }, FieldState::Numeric(value)) => {
                            ui.add(egui::Slider::new(value, min..=max).step_by(step));
                        }
                        (FeatureDomain::Coded { options }, FieldState::Coded(selected)) => {
                            let current = options[(*selected).min(options.len() - 1)].label;
                            egui::ComboBox::from_id_salt(feature.name)
                                .selected_text(current)
                                .show_ui(ui, |ui| {
                                    for (index, option) in options.iter().enumerate() {
                                        ui.selectable_value(selected, index, option.label);
                                    }
                                });
                        }
                        _ => {}
                    }
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        if ui.button("Predict").clicked() {
            Controller::submit(&self.session, &mut self.state);
        }
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        // The machine decides which of the two observable states renders.
        if self.state.machine.current_state() == UiState::AwaitingSubmission {
            if let Some(message) = &self.state.last_error {
                ui.separator();
                ui.colored_label(ALERT_COLOR, message);
            }
            return;
        }
        let Some(report) = &self.state.report else {
            return;
        };

        ui.separator();
        ui.heading("Prediction Result");

        if let Some(probability) = report.result.probability {
            ui.label(format!(
                "Probability of Heart Disease: {}",
                format_probability(probability)
            ));
        }

        if let Some(gauge) = &report.gauge {
            ui.label("Risk Level (%)");
            chart_view::render_gauge(ui, gauge);
        }

        ui.heading("Patient Profile vs Healthy Ranges");
        chart_view::render_radar(ui, &report.radar);

        let color = if report.verdict.is_severe() { ALERT_COLOR } else { OK_COLOR };
        ui.add_space(8.0);
        ui.colored_label(color, egui::RichText::new(report.verdict.message()).strong());
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("sidebar")
            .default_width(250.0)
            .show(ctx, |ui| self.render_sidebar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Heart Disease Prediction Tool");
                ui.label("Fill in patient details to predict the likelihood of heart disease.");
                ui.separator();
                self.render_form(ui);
                self.render_results(ui);
            });
        });
    }
}
