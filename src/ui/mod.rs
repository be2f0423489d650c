use eframe::egui;

pub mod canvas;

use crate::model::slider::LogRange;
use crate::model::{Update, WaveModel, Writer, AMPLITUDE_MAX, AMPLITUDE_MIN};
use crate::physics::format;
use crate::render::scheduler::AnimationScheduler;
use crate::render::view::ViewTransform;
use crate::render::wave::WaveSnapshot;

/// Main application state
pub struct WaveExplorerApp {
    model: WaveModel,
    scheduler: AnimationScheduler,
    view: ViewTransform,

    // Control mirrors: slider positions in [0, 100] and the raw text of
    // the scientific-notation inputs. Kept in sync with the model except
    // for the control an update originated from.
    wavelength_pos: f64,
    frequency_pos: f64,
    amplitude: f64,
    coefficient_text: String,
    exponent_text: String,
}

impl WaveExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let model = WaveModel::default();
        let band = model.band();
        let wl = band.wavelength_range();
        let fr = band.frequency_range();
        let (coefficient, exponent) = model.scientific();
        Self {
            wavelength_pos: LogRange::new(wl.min, wl.max).position_of(model.wavelength_m()),
            frequency_pos: LogRange::new(fr.min, fr.max).position_of(model.frequency_hz()),
            amplitude: model.amplitude_pct(),
            coefficient_text: trim_float(coefficient),
            exponent_text: exponent.to_string(),
            model,
            scheduler: AnimationScheduler::default(),
            view: ViewTransform::default(),
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) -> Vec<Update> {
        let mut updates = Vec::new();
        let band = self.model.band();
        let accent = band.color();

        ui.heading("Wave Explorer");
        ui.separator();

        // Scientific-notation wavelength input. Unparseable text is
        // discarded silently; the model keeps its prior value.
        ui.heading("Wavelength");
        ui.horizontal(|ui| {
            let coeff_edit = ui.add(
                egui::TextEdit::singleline(&mut self.coefficient_text).desired_width(64.0),
            );
            ui.label("× 10^");
            let exp_edit =
                ui.add(egui::TextEdit::singleline(&mut self.exponent_text).desired_width(36.0));
            ui.label("m");

            if coeff_edit.changed() || exp_edit.changed() {
                if let (Ok(coefficient), Ok(exponent)) = (
                    self.coefficient_text.trim().parse::<f64>(),
                    self.exponent_text.trim().parse::<i32>(),
                ) {
                    updates.push(Update::FromScientific {
                        coefficient,
                        exponent,
                    });
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Band:");
            ui.colored_label(accent, egui::RichText::new(band.label()).strong());
        });
        ui.label(egui::RichText::new(band.description()).small().weak());

        ui.separator();

        // Derived values.
        ui.heading("Wave Values");
        let frequency = self.model.frequency_hz();
        egui::Grid::new("derived_values").num_columns(2).show(ui, |ui| {
            ui.label("Wavelength (λ)");
            ui.colored_label(accent, format::wavelength(self.model.wavelength_m()));
            ui.end_row();
            ui.label("Frequency (f = c/λ)");
            ui.colored_label(accent, format::frequency(frequency));
            ui.end_row();
            ui.label("Photon energy (E = hf)");
            ui.colored_label(accent, format::energy_ev(self.model.photon_energy_ev()));
            ui.end_row();
            ui.label("Period (T = 1/f)");
            ui.colored_label(accent, format::period(frequency));
            ui.end_row();
        });

        ui.separator();

        // Linked log sliders, scoped to the current band's ranges.
        ui.heading("Wave Parameters");
        let wl_range = band.wavelength_range();
        let fr_range = band.frequency_range();
        let wl_log = LogRange::new(wl_range.min, wl_range.max);
        let fr_log = LogRange::new(fr_range.min, fr_range.max);

        ui.label(format!("Wavelength within {} band", band.label()));
        if ui
            .add(
                egui::Slider::new(&mut self.wavelength_pos, 0.0..=100.0)
                    .step_by(0.1)
                    .show_value(false),
            )
            .changed()
        {
            updates.push(Update::FromWavelength(wl_log.value_at(self.wavelength_pos)));
        }
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("{:.1e} m", wl_range.min)).small().weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(format!("{:.1e} m", wl_range.max)).small().weak());
            });
        });

        ui.label(format!("Frequency within {} band", band.label()));
        if ui
            .add(
                egui::Slider::new(&mut self.frequency_pos, 0.0..=100.0)
                    .step_by(0.1)
                    .show_value(false),
            )
            .changed()
        {
            updates.push(Update::FromFrequency(fr_log.value_at(self.frequency_pos)));
        }

        if ui
            .add(
                egui::Slider::new(&mut self.amplitude, AMPLITUDE_MIN..=AMPLITUDE_MAX)
                    .step_by(1.0)
                    .text("Amplitude (%)"),
            )
            .changed()
        {
            updates.push(Update::FromAmplitude(self.amplitude));
        }
        ui.label(egui::RichText::new("y = A sin(ωt + φ)").small().weak());

        ui.separator();

        // Animation control.
        ui.horizontal(|ui| {
            let label = if self.scheduler.is_playing() {
                "Pause"
            } else {
                "Play"
            };
            if ui.button(label).clicked() {
                self.scheduler.toggle();
            }
            if !self.scheduler.is_playing() {
                ui.label(
                    egui::RichText::new("Paused: measurement overlays shown")
                        .small()
                        .weak(),
                );
            }
        });
        ui.label(
            egui::RichText::new("Drag to pan, scroll or pinch to zoom")
                .small()
                .weak(),
        );

        updates
    }

    /// Apply this frame's updates, then resync every control the change
    /// did not originate from. The writer tag is consumed here, once per
    /// transition, so reciprocal sliders cannot feed back into each other.
    fn apply_updates(&mut self, updates: Vec<Update>) {
        if updates.is_empty() {
            return;
        }
        for update in updates {
            self.model.apply(update);
        }
        let writer = self.model.take_last_writer();

        let band = self.model.band();
        let wl = band.wavelength_range();
        let fr = band.frequency_range();
        if writer != Some(Writer::Wavelength) {
            self.wavelength_pos =
                LogRange::new(wl.min, wl.max).position_of(self.model.wavelength_m());
        }
        if writer != Some(Writer::Frequency) {
            self.frequency_pos =
                LogRange::new(fr.min, fr.max).position_of(self.model.frequency_hz());
        }
        if writer != Some(Writer::Scientific) {
            let (coefficient, exponent) = self.model.scientific();
            self.coefficient_text = trim_float(coefficient);
            self.exponent_text = exponent.to_string();
        }
        if writer != Some(Writer::Amplitude) {
            self.amplitude = self.model.amplitude_pct();
        }
    }
}

impl eframe::App for WaveExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut updates = Vec::new();
        egui::SidePanel::left("controls")
            .min_width(280.0)
            .show(ctx, |ui| {
                updates = self.controls_panel(ui);
            });
        self.apply_updates(updates);

        egui::TopBottomPanel::bottom("readouts").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let accent = self.model.band().color();
                ui.label("Wavelength:");
                ui.colored_label(accent, format::wavelength(self.model.wavelength_m()));
                ui.separator();
                ui.label("Amplitude:");
                ui.colored_label(accent, format!("{:.0}%", self.model.amplitude_pct()));
                ui.separator();
                ui.label("Phase:");
                ui.colored_label(accent, format!("{:.0}°", self.model.phase_deg()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let snapshot = WaveSnapshot {
                wavelength_m: self.model.wavelength_m(),
                amplitude_pct: self.model.amplitude_pct(),
                phase_deg: self.model.phase_deg(),
                color: self.model.band().color(),
            };
            canvas::show(ui, &mut self.view, &mut self.scheduler, &snapshot);
        });
    }
}

/// Render a coefficient without trailing zeros ("5" rather than "5.0000").
fn trim_float(value: f64) -> String {
    format!("{value}")
}
