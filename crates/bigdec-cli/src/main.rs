// crates/bigdec-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{bail, Context, Result};
use bigdec_core::{Decimal, FIGS_PER_LIMB};
use bigdec_div::{divd_newton, newton_raphson_inverse};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "bigdec-cli",
    about = "bigdec reference CLI",
    long_about = "bigdec reference CLI.\n\nExact multiplication via a three-prime NTT and division via Newton-Raphson reciprocals, over plain decimal strings.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    /// Emit results as a JSON document instead of plain lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Multiply two decimals exactly.
    Mul {
        /// First factor (e.g. "-12345.678")
        a: String,
        /// Second factor
        b: String,
    },

    /// Divide with remainder: a = q·b + r.
    Divmod {
        /// Dividend
        a: String,
        /// Divisor (non-zero)
        b: String,
        /// Quotient precision in decimal digits (>0)
        #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(1..))]
        prec: u32,
    },

    /// Approximate the reciprocal of a positive decimal integer.
    Inv {
        /// Value to invert (positive integer)
        x: String,
        /// Result precision in decimal digits (>1)
        #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(2..))]
        prec: u32,
    },
}

#[derive(Serialize)]
struct Output {
    op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quotient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remainder: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let out = match cli.cmd {
        Cmd::Mul { a, b } => mul(&a, &b)?,
        Cmd::Divmod { a, b, prec } => divmod(&a, &b, prec as usize)?,
        Cmd::Inv { x, prec } => inv(&x, prec as usize)?,
    };
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&out).context("serialize output")?);
    } else {
        if let Some(r) = &out.result {
            println!("{r}");
        }
        if let Some(q) = &out.quotient {
            println!("q = {q}");
        }
        if let Some(r) = &out.remainder {
            println!("r = {r}");
        }
    }
    Ok(())
}

fn parse_decimal(label: &str, s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("parsing {label} {s:?}"))
}

fn mul(a: &str, b: &str) -> Result<Output> {
    let (da, db) = (parse_decimal("a", a)?, parse_decimal("b", b)?);
    info!(limbs_a = da.frac.len(), limbs_b = db.frac.len(), "multiplying");
    let product = &da * &db;
    Ok(Output {
        op: "mul",
        result: Some(product.to_string()),
        quotient: None,
        remainder: None,
    })
}

fn divmod(a: &str, b: &str, prec_digits: usize) -> Result<Output> {
    let (da, db) = (parse_decimal("a", a)?, parse_decimal("b", b)?);
    if db.is_zero() {
        bail!("divisor must be non-zero");
    }
    // Quotient precision is limb-granular inside the kernel.
    let max_prec = prec_digits.div_ceil(FIGS_PER_LIMB) + 1;
    info!(prec_digits, max_prec, "dividing");
    let (q, r) = divd_newton(&da, &db, max_prec)?;
    Ok(Output {
        op: "divmod",
        result: None,
        quotient: Some(q.to_string()),
        remainder: Some(r.to_string()),
    })
}

fn inv(x: &str, prec: usize) -> Result<Output> {
    let dx = parse_decimal("x", x)?;
    if dx.is_zero() || dx.sign < 0 {
        bail!("reciprocal needs a positive value");
    }
    if !dx.fract().is_zero() {
        bail!("reciprocal needs an integer value");
    }
    info!(prec, "approximating reciprocal");
    let mut r = newton_raphson_inverse(&dx, prec);
    r.truncate_digits(prec);
    Ok(Output {
        op: "inv",
        result: Some(r.to_string()),
        quotient: None,
        remainder: None,
    })
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
