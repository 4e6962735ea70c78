use anyhow::Context;
use chrono::{Datelike, Duration, NaiveDate};
use launchcore::record::RawLaunch;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Launch sites used by the generator: operator, location text as the
/// dataset spells it, and the vehicles flown from there.
const SITES: [(&str, &str, &[&str]); 9] = [
    (
        "SpaceX",
        "SLC-40, Cape Canaveral AFS, Florida, USA",
        &["Falcon 9 Block 5", "Falcon Heavy"],
    ),
    (
        "ULA",
        "SLC-41, Cape Canaveral AFS, Florida, USA",
        &["Atlas V 401", "Delta IV Heavy"],
    ),
    (
        "CASC",
        "LC-2, Xichang Satellite Launch Center, China",
        &["Long March 3B/E", "Long March 2C"],
    ),
    (
        "Roscosmos",
        "Site 31/6, Baikonur Cosmodrome, Kazakhstan",
        &["Soyuz 2.1a", "Soyuz-U", "Zenit-3F"],
    ),
    (
        "RVSN USSR",
        "Site 43/4, Plesetsk Cosmodrome, Russia",
        &["Cosmos-3M (11K65M)", "Molniya-M /Block ML", "Tsyklon-3", "Vostok-2M"],
    ),
    (
        "Arianespace",
        "ELA-3, Guiana Space Centre, French Guiana, France",
        &["Ariane 5 ECA"],
    ),
    (
        "ISRO",
        "Second Launch Pad, Satish Dhawan Space Centre, India",
        &["PSLV-XL", "GSLV Mk II"],
    ),
    (
        "Northrop",
        "Stargazer, Base Aerea de Gando, Gran Canaria",
        &["Pegasus XL"],
    ),
    (
        "ISA",
        "Imam Khomeini Spaceport, Semnan Space Center, Iran",
        &["Safir-1B+"],
    ),
];

const PAYLOADS: [&str; 6] = [
    "Starlink V1 L9",
    "Gaofen-9 04",
    "Progress MS-15",
    "Meridian 9",
    "GSAT-30",
    "Kosmos 2546",
];

/// Configuration for generating synthetic launch rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    pub first_year: i32,
    pub last_year: i32,
    /// Fraction of rows that carry a cost cell.
    pub priced_share: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 500,
            seed: 0,
            first_year: 1957,
            last_year: 2020,
            priced_share: 0.4,
        }
    }
}

/// Formats a cost the way the dataset does: thousands separators and a
/// trailing space (`1,160.0 `).
fn format_cost(value: f64) -> String {
    let text = format!("{:.1}", value);
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "0"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}.{} ", grouped, fraction)
}

fn pick_status(rng: &mut StdRng) -> &'static str {
    match rng.gen_range(0..1000) {
        0..=899 => "Success",
        900..=979 => "Failure",
        980..=994 => "Partial Failure",
        _ => "Prelaunch Failure",
    }
}

pub fn generate_launches(config: &GeneratorConfig) -> anyhow::Result<Vec<RawLaunch>> {
    if config.first_year > config.last_year {
        anyhow::bail!(
            "generator year range is empty ({} > {})",
            config.first_year,
            config.last_year
        );
    }
    let start = NaiveDate::from_ymd_opt(config.first_year, 1, 1)
        .context("first year out of calendar range")?;
    let end = NaiveDate::from_ymd_opt(config.last_year, 12, 31)
        .context("last year out of calendar range")?;
    let span_days = (end - start).num_days();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut rows = Vec::with_capacity(config.count);

    for _ in 0..config.count {
        let (company, location, vehicles) = SITES[rng.gen_range(0..SITES.len())];
        let vehicle = vehicles[rng.gen_range(0..vehicles.len())];
        let payload = PAYLOADS[rng.gen_range(0..PAYLOADS.len())];

        let date = start + Duration::days(rng.gen_range(0..=span_days));
        let launched_at = date
            .and_hms_opt(rng.gen_range(0..24), rng.gen_range(0..60), 0)
            .context("building launch time")?;

        let rocket = if rng.gen_bool(config.priced_share.clamp(0.0, 1.0)) {
            Some(format_cost(rng.gen_range(5.0..1500.0)))
        } else {
            None
        };
        let status_rocket = if date.year() >= 2010 {
            "StatusActive"
        } else {
            "StatusRetired"
        };

        rows.push(RawLaunch {
            company_name: company.to_string(),
            location: location.to_string(),
            datum: launched_at.format("%a %b %d, %Y %H:%M UTC").to_string(),
            detail: format!("{} | {}", vehicle, payload),
            status_rocket: status_rocket.to_string(),
            rocket,
            status_mission: pick_status(&mut rng).to_string(),
        });
    }

    Ok(rows)
}
