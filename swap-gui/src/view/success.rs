//! Success panel shown once the simulated settlement finishes.

use egui::{Color32, RichText, Ui};

use mockswap_core::{format_minutes, group_thousands};

use crate::state::AppState;

/// Render the confirmed swap.
pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Swap Complete");
    ui.separator();
    ui.add_space(10.0);

    let Some(receipt) = state.form.receipt().cloned() else {
        // confirmed always carries a receipt
        state.start_new_swap();
        return;
    };

    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("✔")
                    .size(40.0)
                    .color(Color32::from_rgb(50, 200, 50)),
            );
            ui.add_space(6.0);

            ui.label(RichText::new("You sent").color(Color32::GRAY));
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    group_thousands(&receipt.send_amount),
                    receipt.send_symbol
                ))
                .size(20.0)
                .strong(),
            );
            ui.add_space(4.0);

            ui.label(RichText::new("You receive").color(Color32::GRAY));
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    group_thousands(&receipt.receive_amount),
                    receipt.receive_symbol
                ))
                .size(20.0)
                .strong(),
            );
            ui.add_space(8.0);

            ui.label(format!(
                "Estimated completion: {}",
                format_minutes(receipt.estimated_minutes)
            ));
            if let Some(at) = state.settled_at {
                ui.label(
                    RichText::new(format!("Confirmed at {}", at.format("%Y-%m-%d %H:%M:%S")))
                        .color(Color32::GRAY),
                );
            }
        });
    });

    ui.add_space(15.0);

    if ui
        .add(
            egui::Button::new(RichText::new("New Swap").size(16.0))
                .min_size(egui::vec2(200.0, 36.0)),
        )
        .clicked()
    {
        state.start_new_swap();
    }
}
