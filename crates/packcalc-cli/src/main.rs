//! Command-line client for the calorie-burn service.
//!
//! Run with:
//! ```
//! cargo run -p packcalc-cli -- 70 10 1.2 5 "Dirt Road" 3
//! ```

use anyhow::{Context, bail};
use packcalc::types::{CalculateRequest, CalculateResponse};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: packcalc-cli <weight> <pack_weight> <speed> <incline_grade> <terrain> <hours> [--lb] [--mph] [--url URL]

  weight          body weight (kg, or lb with --lb)
  pack_weight     pack weight (same unit as weight)
  speed           walking speed (m/s, or mph with --mph)
  incline_grade   grade in percent; negative for downhill
  terrain         e.g. \"Paved Road\", \"Dirt Road\", \"Swamp\"
  hours           hike duration in hours

  The service URL defaults to $PACKCALC_URL or http://127.0.0.1:8080";

struct Args {
    weight: f64,
    pack_weight: f64,
    speed: f64,
    incline_grade: f64,
    terrain: String,
    hours: f64,
    pounds: bool,
    mph: bool,
    url: String,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut pounds = false;
    let mut mph = false;
    let mut url =
        std::env::var("PACKCALC_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lb" => pounds = true,
            "--mph" => mph = true,
            "--url" => url = args.next().context("--url needs a value")?,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 6 {
        bail!("{USAGE}");
    }

    Ok(Args {
        weight: positional[0].parse().context("weight must be a number")?,
        pack_weight: positional[1]
            .parse()
            .context("pack_weight must be a number")?,
        speed: positional[2].parse().context("speed must be a number")?,
        incline_grade: positional[3]
            .parse()
            .context("incline_grade must be a number")?,
        terrain: positional[4].clone(),
        hours: positional[5].parse().context("hours must be a number")?,
        pounds,
        mph,
        url,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = parse_args()?;

    let request = CalculateRequest {
        weight: Some(args.weight),
        is_weight_kg: !args.pounds,
        pack_weight: Some(args.pack_weight),
        is_pack_weight_kg: !args.pounds,
        speed: Some(args.speed),
        is_speed_mps: !args.mph,
        incline_grade: Some(args.incline_grade),
        terrain_type: Some(args.terrain.clone()),
        hours: Some(args.hours),
    };

    tracing::debug!(url = %args.url, terrain = %args.terrain, "sending calculation request");

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/calculate", args.url))
        .json(&request)
        .send()
        .await
        .with_context(|| format!("could not reach {}", args.url))?;

    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        bail!("calculation failed ({status}): {detail}");
    }

    let result: CalculateResponse = response
        .json()
        .await
        .context("service returned an unreadable response")?;

    // Total is rate × duration, computed client-side.
    println!("Calories per hour: {:.1} kcal", result.calories_per_hour);
    println!(
        "Total over {:.1} h:  {:.1} kcal",
        args.hours,
        result.calories_per_hour * args.hours
    );

    Ok(())
}
