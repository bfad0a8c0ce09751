// demos/pricing_demo.rs

//! Console walkthrough of the pricing engine and a small sensitivity grid.
//!
//! This demo shows how to:
//! 1. Price a call/put pair from five scalar inputs
//! 2. Check put-call parity on the result
//! 3. Observe the intrinsic-value limit at zero volatility and zero maturity
//! 4. Sweep price across spot and volatility
//!
//! Run with `RUST_LOG=bs_heatmap=debug` to see sweep logging.

use anyhow::Result;
use bs_heatmap::{build_grid, evaluate, linspace, OptionParameters};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let base = OptionParameters::default();
    println!("\nStep 1: Pricing the dashboard defaults...");
    println!("  Spot:          ${:.2}", base.spot_price);
    println!("  Strike:        ${:.2}", base.strike);
    println!("  Maturity:      {:.2} years", base.time_to_maturity);
    println!("  Risk-free:     {:.2}%", base.risk_free_rate * 100.0);
    println!("  Volatility:    {:.2}%", base.volatility * 100.0);

    let result = evaluate(
        base.spot_price,
        base.strike,
        base.time_to_maturity,
        base.risk_free_rate,
        base.volatility,
    )?;
    println!("  CALL Value:    ${:.2}", result.call_price);
    println!("  PUT Value:     ${:.2}", result.put_price);

    println!("\nStep 2: Put-call parity...");
    let lhs = result.call_price - result.put_price;
    let rhs = base.spot_price - base.strike * base.discount_factor();
    println!("  C - P          = {:.10}", lhs);
    println!("  S - K*e^(-rT)  = {:.10}", rhs);

    println!("\nStep 3: Deep out-of-the-money, high volatility...");
    let otm = evaluate(200.0, 500.0, 0.5, 0.04, 1.0)?;
    println!("  S=200 K=500 T=0.5 r=4% σ=100%");
    println!("  CALL Value:    ${:.4}", otm.call_price);
    println!("  PUT Value:     ${:.4}", otm.put_price);

    println!("\nStep 4: Degenerate inputs...");
    let expired = evaluate(110.0, 100.0, 0.0, 0.05, 0.2)?;
    println!(
        "  T=0: call=${:.2} put=${:.2} (intrinsic value)",
        expired.call_price, expired.put_price
    );
    let riskless = evaluate(100.0, 100.0, 1.0, 0.05, 0.0)?;
    println!(
        "  σ=0: call=${:.4} put=${:.4} (discounted intrinsic value)",
        riskless.call_price, riskless.put_price
    );
    match evaluate(-1.0, 100.0, 1.0, 0.05, 0.2) {
        Ok(_) => println!("  S=-1 unexpectedly priced"),
        Err(e) => println!("  S=-1 rejected: {}", e),
    }

    println!("\nStep 5: Call price sensitivity (rows: volatility, columns: spot)...");
    let spots = linspace(base.spot_price * 0.8, base.spot_price * 1.2, 5)?;
    let vols = linspace(base.volatility * 0.5, base.volatility * 1.5, 5)?;
    let grid = build_grid(&base, &spots, &vols)?;

    print!("{:>8}", "σ \\ S");
    for spot in grid.spot_values() {
        print!("{:>9.2}", spot);
    }
    println!();
    for (vol, row) in grid.volatility_values().iter().zip(grid.call_prices()) {
        print!("{:>8.3}", vol);
        for price in row {
            print!("{:>9.2}", price);
        }
        println!();
    }

    Ok(())
}
