//! sqlkv CLI
//!
//! Runs command strings against a fresh in-memory store.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use sqlkv::{Config, Connection, Context, Dialect, Driver, ScanConsistency};
use tracing_subscriber::{fmt, EnvFilter};

/// sqlkv CLI
#[derive(Parser, Debug)]
#[command(name = "sqlkv-cli")]
#[command(about = "Run terse or SQL-shaped commands against an in-memory key-value store")]
#[command(version)]
struct Args {
    /// Command dialect
    #[arg(short, long, value_enum, default_value = "terse")]
    dialect: DialectArg,

    /// Read full scans under a single lock
    #[arg(long)]
    snapshot_scan: bool,

    /// Statement to run (repeatable). Reads stdin when omitted.
    #[arg(short = 'e', long = "execute", value_name = "STATEMENT")]
    statements: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DialectArg {
    Terse,
    Sql,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Terse => Dialect::Terse,
            DialectArg::Sql => Dialect::Sql,
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,sqlkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let scan_consistency = if args.snapshot_scan {
        ScanConsistency::Snapshot
    } else {
        ScanConsistency::PerKey
    };

    let config = Config::builder()
        .dialect(args.dialect.into())
        .scan_consistency(scan_consistency)
        .build();

    let conn = match Driver::from_config(config).and_then(|driver| driver.open("cli")) {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Failed to open connection: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("sqlkv CLI v{} ({} dialect)", sqlkv::VERSION, conn.grammar().name());

    let ctx = Context::background();
    let mut failed = false;

    if args.statements.is_empty() {
        match run_lines(&conn, &ctx, io::stdin().lock()) {
            Ok(ok) => failed |= !ok,
            Err(e) => {
                tracing::error!("Failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for statement in &args.statements {
            failed |= !run_statement(&conn, &ctx, statement);
        }
    }

    if let Err(e) = conn.close() {
        tracing::warn!("Failed to close connection: {}", e);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Run one statement per non-blank line. Returns false if any statement failed.
fn run_lines<R: BufRead>(conn: &Connection, ctx: &Context, reader: R) -> sqlkv::Result<bool> {
    let mut ok = true;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        ok &= run_statement(conn, ctx, &line);
    }
    Ok(ok)
}

/// Run one statement and print its result. Returns false on error.
fn run_statement(conn: &Connection, ctx: &Context, statement: &str) -> bool {
    match conn.query(ctx, statement) {
        Ok(rows) if rows.columns().is_empty() => {
            println!("OK");
            true
        }
        Ok(rows) => {
            println!("{}", rows.columns().join("\t"));
            for row in rows {
                println!("{}", row.join("\t"));
            }
            true
        }
        Err(e) => {
            println!("ERROR: {}", e);
            false
        }
    }
}
