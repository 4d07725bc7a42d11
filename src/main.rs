/// Dashboard entry point: one fetch, one render pass, one CSV artifact.
///
/// Fetch or parse failures print a user-visible error and exit nonzero —
/// they never panic, and they never hang past the configured timeout.

use std::time::Duration;

use metdash::config::DashboardConfig;
use metdash::dashboard::{self, Selections};
use metdash::export;
use metdash::ingest::api;
use metdash::logging::{self, Component, LogLevel};
use metdash::model::DashboardError;

const CONFIG_PATH: &str = "metdash.toml";

fn main() {
    dotenv::dotenv().ok();

    let config = match DashboardConfig::load(CONFIG_PATH) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Cannot start: {}", e);
            std::process::exit(2);
        }
    };

    logging::init_logger(
        LogLevel::from_name(&config.log_level),
        config.log_file.as_deref(),
    );

    if let Err(e) = run(&config) {
        logging::error(Component::System, None, &e.to_string());
        eprintln!("Dashboard could not be rendered: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &DashboardConfig) -> Result<(), DashboardError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .map_err(|e| DashboardError::Transport(e.to_string()))?;

    logging::info(
        Component::Api,
        None,
        &format!(
            "fetching up to {} observations from {}",
            config.row_limit, config.api_base_url
        ),
    );
    let observations = api::fetch_observations(
        &client,
        &config.api_base_url,
        config.row_limit,
        config.http_timeout_secs,
    )?;
    logging::info(
        Component::Api,
        None,
        &format!("received {} observations", observations.len()),
    );

    let selections = Selections {
        card_rows: config.card_rows,
        ..Selections::default()
    };
    let page = dashboard::assemble(observations, &selections);

    render_text(&page);

    let csv_bytes = export::to_csv(&page.table)?;
    std::fs::write(page.export_file_name, &csv_bytes)
        .map_err(|e| DashboardError::Export(format!("{}: {}", page.export_file_name, e)))?;
    logging::info(
        Component::Export,
        None,
        &format!(
            "wrote {} rows to {}",
            page.table.len(),
            page.export_file_name
        ),
    );

    Ok(())
}

fn render_text(page: &dashboard::DashboardPage) {
    println!("=== Douala weather dashboard ===\n");

    if page.table.is_empty() {
        println!("No observations in the selected range.");
        return;
    }

    println!("--- Latest observations ---");
    for row in &page.cards.recent {
        let mut line = format!(
            "{}  {:<10}  {:>5.1} °C {}  {:>3.0} % {}  {:>4.1} m/s  {:>6.1} hPa",
            row.timestamp.format("%Y-%m-%d %H:%M"),
            row.station,
            row.air_temperature_c,
            row.icon.symbol(),
            row.humidity_pct,
            row.humidity_marker.symbol(),
            row.wind_speed_ms,
            row.air_pressure_hpa,
        );
        if let Some(tide) = row.tide_height_m {
            line.push_str(&format!("  tide {:.2} m", tide));
        }
        if let Some(surge) = row.surge_m {
            line.push_str(&format!("  surge {:.2} m", surge));
        }
        println!("{}", line);
    }

    println!("\n--- Station cards ---");
    for card in &page.cards.cards {
        for line in card.summary_lines() {
            println!("  {}", line);
        }
        println!();
    }

    println!("--- Station map ---");
    println!(
        "center ({:.2}, {:.2}) zoom {}",
        page.map.center.0, page.map.center.1, page.map.zoom
    );
    for marker in &page.map.markers {
        println!(
            "  {} at ({:.4}, {:.4})",
            marker.tooltip, marker.latitude, marker.longitude
        );
    }
    println!("wind overlay: {}", page.map.wind_embed_url);

    if let Some(trend) = &page.trend {
        println!(
            "\n--- Trend: {} ({} points) ---",
            trend.title,
            trend.points.len()
        );
    }

    println!("\n--- Station comparison ---");
    for chart in &page.comparison {
        println!("  {} ({} series)", chart.title, chart.series.len());
    }
    println!();
}
