#[cfg(feature = "gtk4-adapter")]
fn main() {
    use chrono::Local;
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use click_chart::api::ChartConfig;
    use click_chart::core::{DailyClickCount, seven_day_series};
    use click_chart::platform_gtk::GtkChartAdapter;

    let _ = click_chart::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.click_chart.demos.gtk_click_trend")
        .build();

    app.connect_activate(|app| {
        let adapter = match GtkChartAdapter::new(ChartConfig::new(240.0)) {
            Ok(adapter) => adapter,
            Err(err) => {
                eprintln!("failed to initialize chart: {err}");
                return;
            }
        };

        let week = [
            ("Mon", 12),
            ("Tue", 30),
            ("Wed", 18),
            ("Thu", 44),
            ("Fri", 27),
            ("Sat", 9),
            ("Sun", 15),
        ]
        .map(|(day, clicks)| DailyClickCount {
            day: day.to_owned(),
            clicks,
        });
        match seven_day_series(Local::now().date_naive(), &week, &Local) {
            Ok(series) => adapter.set_samples(series),
            Err(err) => eprintln!("failed to build click series: {err}"),
        }

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("click-chart | last 7 days")
            .default_width(720)
            .default_height(260)
            .build();
        window.set_child(Some(adapter.widget()));
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_click_trend");
}
