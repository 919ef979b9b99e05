//! Subcommand definitions and handlers
//!
//! Handlers read a loaded `ReferenceData` and return a `Report`; printing
//! happens in `main`. The only file a handler touches is the score history
//! passed to `credit --history`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cekkirim_core_rs::core::{format_decimal, format_percent, format_rupiah};
use cekkirim_core_rs::pricing::best_quote;
use cekkirim_core_rs::{
    break_even_price, compare_modes, compare_platforms, compute_pricing, compute_score,
    estimate_footprint_with_mode, price_for_target_margin, DistanceSource, FeeTier,
    FootprintResult, OrderMetrics, PricingInput, PricingResult, ReferenceData, ScoreHistory,
    TransportMode,
};
use clap::{Subcommand, ValueEnum};
use serde_json::{json, Value};

use crate::error::{CliError, CliResult};

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Net payout and profit for one sale on one marketplace tier
    Pricing {
        #[arg(long)]
        platform: String,
        /// Defaults to the platform's entry-level tier
        #[arg(long)]
        tier: Option<String>,
        #[arg(long)]
        price: i64,
        #[arg(long, default_value_t = 0)]
        cost: i64,
    },
    /// The same sale quoted on every marketplace tier, most profitable first
    Compare {
        #[arg(long)]
        price: i64,
        #[arg(long, default_value_t = 0)]
        cost: i64,
        /// Restrict to these platforms (repeatable)
        #[arg(long = "platform")]
        platforms: Vec<String>,
    },
    /// Lowest sale price that breaks even or reaches a target margin
    BreakEven {
        #[arg(long)]
        platform: String,
        #[arg(long)]
        tier: Option<String>,
        #[arg(long)]
        cost: i64,
        /// Target net margin in percent
        #[arg(long)]
        target_margin: Option<f64>,
    },
    /// Shipping emission between two cities
    Carbon {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        weight_grams: u64,
        #[arg(long, value_enum, default_value_t = ModeArg::Road)]
        mode: ModeArg,
        /// Estimate every transport mode, cleanest first
        #[arg(long, default_value_t = false)]
        all_modes: bool,
    },
    /// Credit score from aggregated order history
    Credit {
        #[arg(long)]
        orders: u64,
        #[arg(long)]
        success: f64,
        #[arg(long)]
        dispute: f64,
        #[arg(long)]
        payment: f64,
        #[arg(long, default_value_t = 0)]
        age_days: u32,
        /// Emit a snapshot row for this subject
        #[arg(long)]
        subject: Option<String>,
        /// JSON score history to append the snapshot to (created if missing)
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Inspect the loaded reference data
    Reference {
        /// Print the whole bundle as JSON
        #[arg(long, default_value_t = false)]
        dump: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    Road,
    Rail,
    Sea,
    Air,
}

impl From<ModeArg> for TransportMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Road => TransportMode::Road,
            ModeArg::Rail => TransportMode::Rail,
            ModeArg::Sea => TransportMode::Sea,
            ModeArg::Air => TransportMode::Air,
        }
    }
}

/// Command output in both renderings
#[derive(Debug)]
pub(crate) struct Report {
    pub data: Value,
    pub lines: Vec<String>,
}

impl Report {
    pub fn render(&self, json: bool) -> CliResult<String> {
        if json {
            Ok(serde_json::to_string_pretty(&self.data)?)
        } else {
            Ok(self.lines.join("\n"))
        }
    }
}

pub(crate) fn execute(command: Command, reference: &ReferenceData) -> CliResult<Report> {
    match command {
        Command::Pricing {
            platform,
            tier,
            price,
            cost,
        } => run_pricing(reference, &platform, tier.as_deref(), price, cost),
        Command::Compare {
            price,
            cost,
            platforms,
        } => run_compare(reference, &platforms, price, cost),
        Command::BreakEven {
            platform,
            tier,
            cost,
            target_margin,
        } => run_break_even(reference, &platform, tier.as_deref(), cost, target_margin),
        Command::Carbon {
            from,
            to,
            weight_grams,
            mode,
            all_modes,
        } => run_carbon(reference, &from, &to, weight_grams, mode.into(), all_modes),
        Command::Credit {
            orders,
            success,
            dispute,
            payment,
            age_days,
            subject,
            history,
        } => run_credit(
            reference,
            &OrderMetrics {
                total_orders: orders,
                success_rate: success,
                dispute_rate: dispute,
                payment_reliability: payment,
                account_age_days: age_days,
            },
            subject.as_deref(),
            history.as_deref(),
        ),
        Command::Reference { dump } => run_reference(reference, dump),
    }
}

fn resolve_tier<'a>(
    reference: &'a ReferenceData,
    platform_id: &str,
    tier_id: Option<&str>,
) -> CliResult<&'a FeeTier> {
    let platform = reference
        .platform(platform_id)
        .ok_or_else(|| CliError::UnknownPlatform(platform_id.to_string()))?;
    let tier = match tier_id {
        Some(id) => platform.tier(id),
        None => platform.default_tier(),
    };
    tier.ok_or_else(|| CliError::UnknownTier {
        platform: platform_id.to_string(),
        tier: tier_id.unwrap_or_default().to_string(),
    })
}

fn pricing_lines(result: &PricingResult) -> Vec<String> {
    let display = result.display();
    [
        ("Harga jual", display.sale_price),
        ("Modal", display.cost_basis),
        ("Biaya admin", display.admin_fee),
        ("Biaya pembayaran", display.payment_fee),
        ("Biaya gratis ongkir", display.free_shipping_fee),
        ("Total potongan", display.total_deduction),
        ("Dana diterima", display.net_payout),
        ("Keuntungan bersih", display.net_profit),
        ("Margin", display.margin_percent),
    ]
    .into_iter()
    .map(|(label, value)| format!("  {:<20} {}", label, value))
    .collect()
}

fn run_pricing(
    reference: &ReferenceData,
    platform_id: &str,
    tier_id: Option<&str>,
    price: i64,
    cost: i64,
) -> CliResult<Report> {
    let tier = resolve_tier(reference, platform_id, tier_id)?;
    let result = compute_pricing(&PricingInput::new(price, cost, tier.clone())?);

    let mut lines = vec![format!("{} / {}", platform_id, tier.name())];
    lines.extend(pricing_lines(&result));
    if result.is_loss() {
        lines.push("  Penjualan ini merugi".to_string());
    }

    Ok(Report {
        data: json!({
            "platform_id": platform_id,
            "tier_id": tier.tier_id(),
            "result": result,
            "display": result.display(),
        }),
        lines,
    })
}

fn run_compare(
    reference: &ReferenceData,
    only: &[String],
    price: i64,
    cost: i64,
) -> CliResult<Report> {
    for id in only {
        if reference.platform(id).is_none() {
            return Err(CliError::UnknownPlatform(id.clone()));
        }
    }
    let platforms: Vec<_> = reference
        .platforms
        .iter()
        .filter(|p| only.is_empty() || only.iter().any(|id| id == p.platform_id()))
        .cloned()
        .collect();

    let quotes = compare_platforms(&platforms, price, cost)?;

    let mut lines: Vec<String> = quotes
        .iter()
        .map(|q| {
            format!(
                "  {:<28} {:>16} {:>10}",
                format!("{} / {}", q.platform_name, q.tier_name),
                format_rupiah(q.result.net_profit),
                format_percent(q.result.margin_percent)
            )
        })
        .collect();
    if let Some(best) = best_quote(&quotes) {
        lines.insert(
            0,
            format!("Paling untung: {} / {}", best.platform_name, best.tier_name),
        );
    }

    Ok(Report {
        data: json!({ "quotes": quotes }),
        lines,
    })
}

fn run_break_even(
    reference: &ReferenceData,
    platform_id: &str,
    tier_id: Option<&str>,
    cost: i64,
    target_margin: Option<f64>,
) -> CliResult<Report> {
    let tier = resolve_tier(reference, platform_id, tier_id)?;
    let price = match target_margin {
        Some(target) => price_for_target_margin(tier, cost, target)?,
        None => break_even_price(tier, cost)?,
    };

    let target_text = target_margin
        .map(|t| format!("margin {}", format_percent(t)))
        .unwrap_or_else(|| "balik modal".to_string());
    let line = match price {
        Some(p) => format!(
            "{} / {}: harga minimum untuk {} adalah {}",
            platform_id,
            tier.name(),
            target_text,
            format_rupiah(p)
        ),
        None => format!(
            "{} / {}: {} tidak dapat dicapai dengan potongan {}",
            platform_id,
            tier.name(),
            target_text,
            format_percent(tier.total_percent())
        ),
    };

    Ok(Report {
        data: json!({
            "platform_id": platform_id,
            "tier_id": tier.tier_id(),
            "cost_basis": cost,
            "target_margin_percent": target_margin,
            "price": price,
        }),
        lines: vec![line],
    })
}

fn distance_source_label(source: DistanceSource) -> &'static str {
    match source {
        DistanceSource::RouteTable => "tabel rute",
        DistanceSource::GreatCircle => "estimasi garis lurus",
        DistanceSource::IntraCity => "dalam kota",
    }
}

fn footprint_lines(result: &FootprintResult) -> Vec<String> {
    let mut lines = vec![format!(
        "{} -> {} ({}, {} km, {}): {} kg CO2e",
        result.origin_id,
        result.destination_id,
        result.mode.as_str(),
        format_decimal(result.distance_km, 1),
        distance_source_label(result.distance_source),
        format_decimal(result.emission_kg, 3)
    )];
    lines.extend(result.comparisons.iter().map(|c| format!("  {}", c.label)));
    lines
}

fn run_carbon(
    reference: &ReferenceData,
    from: &str,
    to: &str,
    weight_grams: u64,
    mode: TransportMode,
    all_modes: bool,
) -> CliResult<Report> {
    let results = if all_modes {
        compare_modes(reference, from, to, weight_grams)?
    } else {
        estimate_footprint_with_mode(reference, from, to, weight_grams, mode)?.map(|r| vec![r])
    };

    let Some(results) = results else {
        return Ok(Report {
            data: json!({ "available": false, "results": [] }),
            lines: vec![format!("Rute {} -> {} tidak ditemukan", from, to)],
        });
    };

    Ok(Report {
        lines: results.iter().flat_map(footprint_lines).collect(),
        data: json!({ "available": true, "results": results }),
    })
}

/// Read a stored history, replaying every snapshot through `record`
///
/// A missing file is an empty history for `subject`.
fn load_history(path: &Path, subject: Option<&str>) -> CliResult<ScoreHistory> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let subject_id =
                subject.ok_or_else(|| CliError::MissingSubject(path.display().to_string()))?;
            tracing::debug!(path = %path.display(), subject_id, "starting new score history");
            return Ok(ScoreHistory::new(subject_id));
        }
        Err(source) => {
            return Err(CliError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };

    let stored: ScoreHistory = serde_json::from_str(&json).map_err(|source| CliError::History {
        path: path.display().to_string(),
        source,
    })?;
    let mut history = ScoreHistory::new(stored.subject_id());
    for snapshot in stored.snapshots() {
        history.record(snapshot.clone())?;
    }
    Ok(history)
}

fn save_history(path: &Path, history: &ScoreHistory) -> CliResult<()> {
    let json = serde_json::to_string_pretty(history)?;
    std::fs::write(path, json).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        subject_id = history.subject_id(),
        snapshots = history.len(),
        "score history saved"
    );
    Ok(())
}

fn run_credit(
    reference: &ReferenceData,
    metrics: &OrderMetrics,
    subject: Option<&str>,
    history_path: Option<&Path>,
) -> CliResult<Report> {
    let policy = &reference.scoring;
    let Some(score) = compute_score(metrics, policy) else {
        return Ok(Report {
            data: json!({ "available": false }),
            lines: vec!["Skor belum tersedia: belum ada riwayat pesanan".to_string()],
        });
    };

    let limit = score.category().pay_later_limit(&policy.pay_later_limits);
    let factors = score.factors();
    let mut lines = vec![
        format!("Skor kredit: {} ({})", score.score(), score.category().label()),
        format!("  Pesanan sukses      {}", format_decimal(factors.order_success, 1)),
        format!("  Sengketa            {}", format_decimal(factors.dispute, 1)),
        format!("  Riwayat pembayaran  {}", format_decimal(factors.payment_history, 1)),
        format!("  Umur akun           {}", format_decimal(factors.account_age, 1)),
        format!("Limit bayar nanti: {}", format_rupiah(limit)),
    ];

    let (snapshot, history) = match history_path {
        Some(path) => {
            let mut history = load_history(path, subject)?;
            let subject_id = subject.unwrap_or(history.subject_id()).to_string();
            let snapshot = score.snapshot(subject_id, policy)?;
            history.record(snapshot.clone())?;
            save_history(path, &history)?;

            lines.push(format!("Snapshot {} dicatat", snapshot.id()));
            let change = match history.delta() {
                Some(delta) => format!("perubahan {:+}", delta),
                None => "snapshot pertama".to_string(),
            };
            lines.push(format!("Riwayat: {} snapshot, {}", history.len(), change));

            let summary = json!({
                "path": path.display().to_string(),
                "subject_id": history.subject_id(),
                "snapshots": history.len(),
                "delta": history.delta(),
            });
            (Some(snapshot), Some(summary))
        }
        None => {
            let snapshot = subject
                .map(|subject_id| score.snapshot(subject_id, policy))
                .transpose()?;
            (snapshot, None)
        }
    };

    Ok(Report {
        data: json!({
            "available": true,
            "score": score,
            "label": score.category().label(),
            "pay_later_limit": limit,
            "snapshot": snapshot,
            "history": history,
        }),
        lines,
    })
}

fn run_reference(reference: &ReferenceData, dump: bool) -> CliResult<Report> {
    let fingerprint = reference.fingerprint()?;
    if dump {
        return Ok(Report {
            data: serde_json::to_value(reference)?,
            lines: vec![reference.to_json_pretty()?],
        });
    }

    let tiers: usize = reference.platforms.iter().map(|p| p.tiers().len()).sum();
    Ok(Report {
        data: json!({
            "fingerprint": fingerprint,
            "platforms": reference.platforms.len(),
            "tiers": tiers,
            "cities": reference.cities.len(),
            "routes": reference.routes.len(),
            "scoring_policy": reference.scoring.version,
        }),
        lines: vec![
            format!("Fingerprint: {}", fingerprint),
            format!("Marketplace: {} ({} tier)", reference.platforms.len(), tiers),
            format!("Kota: {}, rute: {}", reference.cities.len(), reference.routes.len()),
            format!("Kebijakan skor: {}", reference.scoring.version),
        ],
    })
}
