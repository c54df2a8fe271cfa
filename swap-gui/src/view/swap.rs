//! Swap screen — the exchange form.

use egui::{Color32, RichText, Ui};
use tokio::sync::mpsc;

use mockswap_core::{format_minutes, group_thousands, Focus, Phase};

use crate::events::UiEvent;
use crate::state::AppState;
use crate::ui_components::{self, SHAKE_AMPLITUDE};

/// Render the swap form.
pub fn show(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    state.sync_inputs();
    let editing = state.form.phase() == Phase::Editing;

    ui.heading("Swap");
    ui.separator();
    ui.add_space(10.0);

    // You send
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("You send").color(Color32::GRAY));
        let asset = state.form.config().asset(state.form.send().asset).clone();
        ui_components::currency_row(ui, &asset);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let offset = ui_components::shake_offset(
                ui,
                egui::Id::new("send_shake"),
                state.form.send().shake(),
            );
            ui.add_space(SHAKE_AMPLITUDE + offset);

            let response = ui.add_enabled(
                editing,
                egui::TextEdit::singleline(&mut state.send_input)
                    .hint_text("0.00")
                    .desired_width(260.0),
            );
            if response.gained_focus() {
                state.form.set_focus(Focus::Send);
            }
            if response.changed() {
                let typed = state.send_input.clone();
                state.form.edit_send(&typed);
            }
            if response.lost_focus() && state.form.focus() == Focus::Send {
                state.form.set_focus(Focus::None);
            }

            if ui.add_enabled(editing, egui::Button::new("Max")).clicked() {
                state.form.fill_max();
            }
        });
        ui_components::error_label(ui, state.form.send().error.as_ref());
    });

    ui.add_space(6.0);

    // Direction toggle, disabled while a format error is pending
    ui.vertical_centered(|ui| {
        let blocked =
            state.form.send().has_format_error() || state.form.receive().has_format_error();
        let button = egui::Button::new(RichText::new("⇅").size(18.0));
        if ui
            .add_enabled(editing && !blocked, button)
            .on_hover_text("Swap direction")
            .clicked()
        {
            state.form.swap();
        }
    });

    ui.add_space(6.0);

    // You receive
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("You receive").color(Color32::GRAY));
        let asset = state.form.config().asset(state.form.receive().asset).clone();
        ui_components::currency_row(ui, &asset);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let offset = ui_components::shake_offset(
                ui,
                egui::Id::new("receive_shake"),
                state.form.receive().shake(),
            );
            ui.add_space(SHAKE_AMPLITUDE + offset);

            if state.form.focus() == Focus::Receive {
                let response = ui.add_enabled(
                    editing,
                    egui::TextEdit::singleline(&mut state.receive_input)
                        .hint_text("0.00")
                        .desired_width(260.0),
                );
                if state.focus_receive_input {
                    response.request_focus();
                    state.focus_receive_input = false;
                }
                if response.changed() {
                    let typed = state.receive_input.clone();
                    state.form.edit_receive(&typed);
                }
                if response.lost_focus() {
                    state.form.set_focus(Focus::None);
                }
            } else {
                let amount = &state.form.receive().amount;
                let shown = if amount.is_empty() {
                    "0.00".to_string()
                } else {
                    group_thousands(amount)
                };
                let response = ui
                    .add(
                        egui::Label::new(RichText::new(shown).size(22.0).strong())
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_text("Click to edit");
                if editing && response.clicked() {
                    state.form.set_focus(Focus::Receive);
                    state.focus_receive_input = true;
                }
            }
        });
        ui_components::error_label(ui, state.form.receive().error.as_ref());
    });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new(state.form.rate_label()).color(Color32::GRAY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!(
                "Estimated time: {}",
                format_minutes(state.form.estimated_minutes())
            ));
        });
    });

    ui.add_space(15.0);

    ui.horizontal(|ui| {
        let confirming = state.form.phase() == Phase::Confirming;
        let label = if confirming {
            "Confirming..."
        } else {
            "Confirm Swap"
        };

        if ui
            .add_enabled(
                state.form.can_confirm(),
                egui::Button::new(RichText::new(label).size(16.0))
                    .min_size(egui::vec2(200.0, 36.0)),
            )
            .clicked()
        {
            state.submit_confirm(ui_tx);
        }

        if confirming {
            ui.spinner();
        }
    });

    if let Some(ref err) = state.error {
        ui.add_space(10.0);
        ui.colored_label(Color32::RED, format!("Error: {}", err));
    }
}
