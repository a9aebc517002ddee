use std::sync::Arc;

use bookly::catalog::{self, Format, Language, Price, SortKey};
use bookly::config::AppConfig;
use bookly::delayed::DelayedTask;
use bookly::onboarding::{
    LogNavigator, LogNotifier, MemoryPreferencesStore, NotificationChannel, OnboardingManager,
    Role, Scalar, SetField, StepOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("📚 Bookly v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Category: {}", config.catalog_category);
    eprintln!("   Catalog: {} items (seed {})", config.catalog_size, config.catalog_seed);
    eprintln!("   Page size: {}\n", config.page_size);

    // ── Catalog ──────────────────────────────────────────────────────────
    let books = catalog::mock::generate(
        &config.catalog_category,
        Format::Ebook,
        config.catalog_size,
        config.catalog_seed,
    )?;

    let criteria = books
        .reset()
        .with_price_range(Price::from_units(10), Price::from_units(30))
        .with_languages([Language::English, Language::French])
        .with_min_rating(4)
        .with_sort(SortKey::PriceAsc);

    let matched = books.filter(&criteria);
    let first_page = catalog::paginate(&matched, 1, config.page_size);
    println!("{}", serde_json::to_string_pretty(&criteria)?);
    println!("{}", serde_json::to_string_pretty(&first_page)?);

    let everything = books.filter(&books.reset());
    eprintln!(
        "   Filtered {} of {} items ({} after reset)\n",
        matched.len(),
        books.len(),
        everything.len()
    );

    // ── Onboarding ───────────────────────────────────────────────────────
    let store = Arc::new(MemoryPreferencesStore::new());
    let mut wizard = OnboardingManager::new(Arc::new(LogNavigator), Arc::new(LogNotifier))
        .with_store(store.clone());

    wizard.next();
    // Blocked: no role yet.
    wizard.next();
    wizard.set_scalar(Scalar::Role(Role::Writer));
    wizard.next();
    wizard.toggle_in_set(SetField::Genres, "Fantasy");
    wizard.toggle_in_set(SetField::Genres, "Science Fiction");
    wizard.next();
    wizard.next();
    wizard.toggle_in_set(SetField::WritingGoals, "community");
    wizard.next();
    wizard.set_boolean_pair(NotificationChannel::Push, true);

    let mut outcome = wizard.next();
    while !matches!(outcome, StepOutcome::Completed(_) | StepOutcome::Blocked { .. }) {
        outcome = wizard.next();
    }

    if let Some(preferences) = store.latest() {
        println!("{}", serde_json::to_string_pretty(&preferences)?);
    }

    // ── Delayed dashboard reveal ─────────────────────────────────────────
    let total = books.len();
    let reveal = DelayedTask::schedule(config.reveal_delay, move || {
        tracing::info!(books = total, "Dashboard data revealed");
    });
    reveal.wait().await;

    Ok(())
}
