use chrono::{Local, NaiveDate};
use clap::Args;
use fundability::config::AppConfig;
use fundability::error::AppError;
use fundability::telemetry;
use fundability::workflows::fundability::{GapAnalysis, MetricValue, RecommendationTier};
use fundability::{Catalog, FundabilityReport, FundabilityService, JsonProfileSource, ProfileKind};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Profile JSON document, either the attribute object or a `user_data` envelope
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Evaluation date for tradeline ages (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Only print one profile kind (consumer or business)
    #[arg(long, value_parser = crate::infra::parse_kind)]
    pub(crate) kind: Option<ProfileKind>,
    /// Print the full report as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Evaluation date for tradeline ages (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Only list one catalog sequence (consumer or business)
    #[arg(long, value_parser = crate::infra::parse_kind)]
    pub(crate) kind: Option<ProfileKind>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        profile,
        today,
        kind,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let catalog = load_catalog(today)?;
    let service = FundabilityService::new(Arc::new(catalog));
    let source = JsonProfileSource::from_path(&profile)?;
    let report = service.evaluate(&source, today)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let payload = serde_json::to_string_pretty(&report).map_err(io::Error::from)?;
        writeln!(out, "{payload}")?;
    } else {
        write_report(&mut out, &report, kind)?;
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let catalog = load_catalog(today)?;

    let stdout = io::stdout();
    write_catalog(&mut stdout.lock(), &catalog, args.kind)?;
    Ok(())
}

/// Load configuration and telemetry the way `serve` does, then the catalog as of `today`.
fn load_catalog(today: NaiveDate) -> Result<Catalog, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(Catalog::from_config(&config.catalog, today)?)
}

fn selected_kinds(kind: Option<ProfileKind>) -> Vec<ProfileKind> {
    match kind {
        Some(kind) => vec![kind],
        None => ProfileKind::ordered().to_vec(),
    }
}

pub(crate) fn write_report<W: Write>(
    out: &mut W,
    report: &FundabilityReport,
    kind: Option<ProfileKind>,
) -> io::Result<()> {
    writeln!(out, "Fundability report ({})", report.report_date)?;

    for kind in selected_kinds(kind) {
        let summary = report.summary.for_kind(kind);
        writeln!(out, "\n{} profile", summary.kind_label)?;
        writeln!(
            out,
            "Score {:.2} | funding capacity {} | best-tier capacity {}",
            summary.score,
            format_currency(summary.funding_capacity),
            format_currency(summary.best_funding_capacity)
        )?;
        writeln!(
            out,
            "{} of {} benchmarks met",
            summary.rules_evaluated - summary.gap_count,
            summary.rules_evaluated
        )?;

        write_gaps(out, report.gap_analysis(kind))?;

        writeln!(out, "Recommendations")?;
        for tier in report.recommendations(kind).tiers() {
            write_tier(out, tier)?;
        }
    }

    Ok(())
}

fn write_gaps<W: Write>(out: &mut W, analysis: &GapAnalysis) -> io::Result<()> {
    if analysis.gap_count() == 0 {
        return writeln!(out, "Gaps: none");
    }

    writeln!(out, "Gaps")?;
    for entry in analysis.gaps() {
        writeln!(
            out,
            "  - {}: {} (target: {})",
            entry.metric_label,
            format_metric(&entry.current_value),
            entry.target
        )?;
    }
    Ok(())
}

fn write_tier<W: Write>(out: &mut W, tier: &RecommendationTier) -> io::Result<()> {
    writeln!(
        out,
        "  {} | projected score {:.2} | capacity {}",
        tier.title,
        tier.score,
        format_currency(tier.funding_capacity)
    )?;

    if tier.tradelines.is_empty() {
        writeln!(out, "    (no catalog tradelines available)")?;
    }
    for tradeline in &tier.tradelines {
        writeln!(
            out,
            "    - {} ({} yrs)",
            tradeline.name, tradeline.account_age_years
        )?;
    }
    for tradeline in &tier.authorized_users {
        writeln!(
            out,
            "    - AU: {} ({} yrs)",
            tradeline.name, tradeline.account_age_years
        )?;
    }
    Ok(())
}

pub(crate) fn write_catalog<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    kind: Option<ProfileKind>,
) -> io::Result<()> {
    writeln!(out, "Tradeline catalog (ages as of {})", catalog.as_of())?;

    for kind in selected_kinds(kind) {
        let tradelines = catalog.tradelines(kind);
        writeln!(out, "\n{} tradelines ({})", kind.label(), tradelines.len())?;
        for tradeline in tradelines {
            writeln!(
                out,
                "  - {} | opened {}-{:02} | {} yrs | {}",
                tradeline.name,
                tradeline.origination_year,
                tradeline.origination_month,
                tradeline.account_age_years,
                tradeline.category.as_deref().unwrap_or("uncategorized")
            )?;
        }
    }

    if kind.map_or(true, |kind| kind == ProfileKind::Consumer) {
        let candidates = catalog.authorized_users();
        writeln!(out, "\nAuthorized-user candidates ({})", candidates.len())?;
        for tradeline in candidates {
            writeln!(
                out,
                "  - {} | {} yrs",
                tradeline.name, tradeline.account_age_years
            )?;
        }
    }

    Ok(())
}

fn format_metric(value: &MetricValue) -> String {
    match value {
        MetricValue::Number(number) => format!("{number}"),
        MetricValue::Code(code) => code.to_string(),
        MetricValue::Labels(labels) if labels.is_empty() => "none".to_string(),
        MetricValue::Labels(labels) => labels.join(", "),
    }
}

fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}")
}
