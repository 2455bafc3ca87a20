use eframe::egui;
use momtest_adapters::SiteConfig;

pub fn render(ctx: &egui::Context, config: &SiteConfig) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&config.brand_name).strong());
            ui.label(
                egui::RichText::new("Validate ideas by talking about their life, not your idea.")
                    .weak(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "build {} · {}",
                        env!("GIT_HASH"),
                        env!("BUILD_TIME")
                    ))
                    .weak()
                    .small(),
                );
            });
        });
        ui.add_space(6.0);
    });
}
