//! Small stateless widgets shared by the views.

use egui::{Color32, RichText, Ui};
use mockswap_core::{AmountError, Asset};

const ETH_ICON: &[u8] = include_bytes!("../assets/eth.svg");
const USDC_ICON: &[u8] = include_bytes!("../assets/usdc.svg");

/// Horizontal travel of the shake animation, in points.
pub const SHAKE_AMPLITUDE: f32 = 6.0;
const SHAKE_SECONDS: f32 = 0.4;

/// Render an asset's icon, falling back to a lettered disc for icons that
/// are not bundled.
pub fn asset_icon(ui: &mut Ui, asset: &Asset, size: f32) {
    let bundled = match asset.icon.as_str() {
        "eth.svg" => Some(ETH_ICON),
        "usdc.svg" => Some(USDC_ICON),
        _ => None,
    };

    if let Some(bytes) = bundled {
        let uri = format!("bytes://{}", asset.icon);
        ui.add(egui::Image::from_bytes(uri, bytes).fit_to_exact_size(egui::vec2(size, size)));
        return;
    }

    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, Color32::from_rgb(120, 120, 140));
    let letter: String = asset.symbol.chars().take(1).collect();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        letter,
        egui::FontId::proportional(size * 0.55),
        Color32::WHITE,
    );
}

/// Currency row: icon, symbol and name on the left, balance on the right.
pub fn currency_row(ui: &mut Ui, asset: &Asset) {
    ui.horizontal(|ui| {
        asset_icon(ui, asset, 24.0);
        ui.label(RichText::new(&asset.symbol).size(16.0).strong());
        ui.label(RichText::new(&asset.name).color(Color32::GRAY));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("Balance: {}", asset.balance_label()))
                    .color(Color32::GRAY),
            );
        });
    });
}

/// Inline error under an amount field. Blocking errors are red, advisory
/// ones amber.
pub fn error_label(ui: &mut Ui, error: Option<&AmountError>) {
    if let Some(err) = error {
        let color = if err.is_blocking() {
            Color32::RED
        } else {
            Color32::from_rgb(230, 160, 40)
        };
        ui.colored_label(color, err.to_string());
    }
}

/// Horizontal offset for a shaking field. Plays once each time `shaking`
/// turns on and settles back to zero.
pub fn shake_offset(ui: &Ui, id: egui::Id, shaking: bool) -> f32 {
    let progress = ui.ctx().animate_bool_with_time(id, shaking, SHAKE_SECONDS);
    if !shaking || progress >= 1.0 {
        return 0.0;
    }
    let phase = progress * std::f32::consts::TAU * 4.0;
    phase.sin() * SHAKE_AMPLITUDE * (1.0 - progress)
}
