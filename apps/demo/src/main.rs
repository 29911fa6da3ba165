use anyhow::{anyhow, Result};
use catalog::domain::DishId;
use catalog::{CatalogSource, SampleCatalog};
use clap::Parser;
use customization_core::{CustomizationSession, ResetState, SessionEvent};

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Catalog id of the dish to customize.
    #[arg(long, default_value_t = 1)]
    dish: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    let settings = config::load_settings();

    let dishes = SampleCatalog.load_dishes().await?;
    let dish = dishes
        .into_iter()
        .find(|dish| dish.id == DishId(args.dish))
        .ok_or_else(|| anyhow!("no dish with id {}", args.dish))?;

    println!("Customizing {}: {}", dish.name, dish.description);
    let session = CustomizationSession::open_with_timings(dish, settings.timings());

    // Push every slider to its max and show the derived theme react.
    for spec in session.dish().attributes.clone() {
        let theme = session.update(spec.category, spec.max).await?;
        println!(
            "{} {} -> {}",
            spec.category.emoji(),
            spec.category.display_name(),
            serde_json::to_string(&theme)?
        );
    }

    session.add_to_cart().await;
    println!("cart active: {}", session.cart_active());

    // Animate back to defaults, printing each emitted frame.
    let mut events = session.subscribe_events();
    session.start_reset().await;
    loop {
        match events.recv().await? {
            SessionEvent::CustomizationChanged { theme, .. } => {
                println!("reset frame: intensity={:.3}", theme.intensity);
            }
            SessionEvent::ResetStateChanged(ResetState::Idle) => break,
            SessionEvent::ResetStateChanged(ResetState::Running) => {}
        }
    }
    println!("values after reset: {:?}", session.values().await);

    session.close().await;
    Ok(())
}
