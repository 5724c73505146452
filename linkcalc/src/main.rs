mod options;

use airlink::{evaluate, LinkConfig, PathGeometry, Report};
use anyhow::Error as AnyError;
use clap::Parser;
use options::{Cli, Command as CliCmd};
use rayon::prelude::*;
use std::io::Write;
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        CliCmd::Report => {
            let config = link_config(&cli, cli.distance)?;
            print_report(&config, &evaluate(&config))?;
        }
        CliCmd::Json => {
            let config = link_config(&cli, cli.distance)?;
            print_json(&evaluate(&config))?;
        }
        CliCmd::Csv { points } => {
            let config = link_config(&cli, cli.distance)?;
            print_csv(&PathGeometry::new(&config, points))?;
        }
        CliCmd::Plot { points } => {
            let config = link_config(&cli, cli.distance)?;
            plot_ascii(&PathGeometry::new(&config, points));
        }
        CliCmd::Sweep { from, to, step } => print_sweep(&cli, from, to, step)?,
    }
    Ok(())
}

fn link_config(cli: &Cli, distance_km: f64) -> Result<LinkConfig, AnyError> {
    Ok(LinkConfig::builder()
        .freq_mhz(cli.frequency)
        .bandwidth_mhz(cli.bandwidth)
        .distance_km(distance_km)
        .tx_height_m(cli.tx_height)
        .rx_height_m(cli.rx_height)
        .tx_power_dbm(cli.tx_power)
        .tx_gain_dbi(cli.tx_gain)
        .tx_cable_loss_db(cli.tx_cable_loss)
        .rx_gain_dbi(cli.rx_gain)
        .rx_cable_loss_db(cli.rx_cable_loss)
        .noise_figure_db(cli.noise_figure)
        .fade_margin_db(cli.fade_margin)
        .impl_loss_db(cli.impl_loss)
        .build()?)
}

fn print_report(config: &LinkConfig, report: &Report) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Frequency                {} MHz", config.freq_mhz)?;
    writeln!(stdout, "Distance                 {} km", config.distance_km)?;
    writeln!(stdout, "Radio horizon            {:.1} km", report.horizon_km)?;
    writeln!(stdout, "Free space path loss     {:.2} dB", report.fspl_db)?;
    writeln!(
        stdout,
        "Diffraction loss         {:.2} dB",
        report.diffraction_loss_db
    )?;
    writeln!(
        stdout,
        "Total path loss          {:.2} dB",
        report.total_loss_db
    )?;
    writeln!(stdout, "TX power                 {} dBm", config.tx_power_dbm)?;
    writeln!(
        stdout,
        "Total gain (TX+RX)       {} dBi",
        config.tx_gain_dbi + config.rx_gain_dbi
    )?;
    writeln!(
        stdout,
        "Implementation loss      {} dB",
        config.impl_loss_db
    )?;
    writeln!(stdout, "Fade margin              {} dB", config.fade_margin_db)?;
    writeln!(stdout, "RSL                      {:.2} dBm", report.rsl_dbm)?;
    writeln!(
        stdout,
        "Thermal noise floor      {:.2} dBm",
        report.noise_floor_dbm
    )?;
    writeln!(stdout, "SNR                      {:.2} dB", report.snr_db)?;
    writeln!(
        stdout,
        "Modulation               {}",
        report.modulation.label
    )?;
    writeln!(
        stdout,
        "Est. throughput          {:.1} Mbps",
        report.throughput_mbps
    )?;
    writeln!(stdout, "Status                   {}", status(report))?;
    Ok(())
}

/// One-line link health summary: obstructed, Fresnel encroachment
/// (clearance below 60% of F1), or clear.
fn status(report: &Report) -> String {
    if !report.is_los {
        format!(
            "obstructed line of sight ({:.1} dB diffraction loss)",
            report.diffraction_loss_db
        )
    } else if report.min_clearance_m < report.fresnel_radius_m * 0.6 {
        "fresnel zone encroachment (clearance < 60% F1)".to_string()
    } else {
        "clear line of sight".to_string()
    }
}

fn print_json(report: &Report) -> Result<(), AnyError> {
    let json = serde_json::to_string(report)?;
    println!("{json}");
    Ok(())
}

fn print_csv(geometry: &PathGeometry) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Distance,Surface,LOS,FresnelUpper,FresnelLower")?;
    for ((((distance, surface), los), upper), lower) in geometry
        .distances_m
        .iter()
        .zip(geometry.surface_m.iter())
        .zip(geometry.los_m.iter())
        .zip(geometry.fresnel_upper_m.iter())
        .zip(geometry.fresnel_lower_m.iter())
    {
        writeln!(stdout, "{distance},{surface},{los},{upper},{lower}")?;
    }
    Ok(())
}

fn plot_ascii(geometry: &PathGeometry) {
    let to_points = |heights: &[f64]| -> Vec<(f32, f32)> {
        geometry
            .distances_m
            .iter()
            .zip(heights.iter())
            .map(|(d, h)| ((d / 1000.0) as f32, *h as f32))
            .collect()
    };
    let surface = to_points(&geometry.surface_m);
    let los = to_points(&geometry.los_m);
    let lower = to_points(&geometry.fresnel_lower_m);

    let span_km = (geometry.distances_m.last().copied().unwrap_or(0.0) / 1000.0) as f32;
    Chart::new(300, 150, 0.0, span_km)
        .lineplot(&Shape::Lines(&surface))
        .lineplot(&Shape::Lines(&los))
        .lineplot(&Shape::Lines(&lower))
        .display();
}

fn print_sweep(cli: &Cli, from: f64, to: f64, step: f64) -> Result<(), AnyError> {
    anyhow::ensure!(step > 0.0, "step must be greater than zero");
    anyhow::ensure!(to >= from, "sweep range is empty");

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = ((to - from) / step).floor() as usize + 1;
    let configs = (0..steps)
        .map(|n| link_config(cli, from + n as f64 * step))
        .collect::<Result<Vec<_>, _>>()?;

    let reports: Vec<Report> = configs.par_iter().map(evaluate).collect();

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Distance,RSL,SNR,Modulation,Throughput")?;
    for (config, report) in configs.iter().zip(reports.iter()) {
        writeln!(
            stdout,
            "{},{:.1},{:.1},{},{:.1}",
            config.distance_km,
            report.rsl_dbm,
            report.snr_db,
            report.modulation.label,
            report.throughput_mbps
        )?;
    }
    Ok(())
}
